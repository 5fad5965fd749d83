// sequent_core/examples/basic_chain.rs

use sequent::{with, Done, SequentError};
use tracing::info;

// An ordinary free function works as a step directly.
fn print_report(msg: String) -> i32 {
  println!("{}", msg);
  1
}

fn main() -> Result<(), SequentError> {
  // Initialize tracing (optional, for demonstration)
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

  info!("--- Basic Chain Example ---");

  // Build a chain from a starting value, queue a few heterogeneous
  // steps, and execute it with the Done sentinel. Each step's input type
  // must match the previous step's output type; the compiler checks that
  // when the step is appended.
  // Closures need parentheses here so `|` reads as the chain operator.
  let status = (with(3.0_f64)
    | (|v: f64| v + 10.0)
    | (|v: f64| v as u8)
    | (|code: u8| code.to_string())
    | print_report
    | Done)?;

  info!(status, "chain finished");

  // The same chain, spelled with method calls.
  let status = with(3.0_f64)
    .then(|v| v + 10.0)
    .then(|v| v as u8)
    .then(|code: u8| code.to_string())
    .then(print_report)
    .run()?;

  info!(status, "method-call chain finished");
  Ok(())
}
