// sequent_core/examples/dynamic_steps.rs

use sequent::{BoxedStep, DynStatement, SequentError};
use tracing::{info, warn};

fn main() -> Result<(), SequentError> {
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

  info!("--- Dynamic Steps Example ---");

  // Steps boxed ahead of time, e.g. looked up from a catalogue keyed by
  // configuration. Each BoxedStep carries the signature the introspector
  // derived for it.
  let catalogue: Vec<BoxedStep> = vec![
    BoxedStep::new(|v: i64| v * 2),
    BoxedStep::new(|v: i64| v + 7),
    BoxedStep::new(|v: i64| format!("result = {}", v)),
  ];

  let mut stmt = DynStatement::with(10_i64);
  for step in catalogue {
    info!(signature = %step.signature(), "appending step");
    stmt = stmt.append(step)?;
  }

  let rendered: String = stmt.run_as()?;
  info!(%rendered, "dynamic chain finished");

  // An incompatible step is rejected while assembling, before anything runs.
  let stmt = DynStatement::with(10_i64);
  match stmt.append(BoxedStep::new(|s: String| s.len())) {
    Ok(_) => unreachable!("a String step cannot follow an i64 seed"),
    Err(e) => warn!(error = %e, "rejected at append, as expected"),
  }

  Ok(())
}
