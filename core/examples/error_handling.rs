// sequent_core/examples/error_handling.rs

use sequent::{with, SequentError};
use tracing::{error, info};

fn main() {
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

  info!("--- Error Handling Example ---");

  // A fallible step queued with `then_try`. Its error aborts the fold at
  // the step's position; steps after it never run.
  let result = with("not a number".to_string())
    .then_try(|s: String| s.parse::<i32>())
    .then(|v| v * 2)
    .run();

  match result {
    Ok(v) => info!(v, "chain finished"),
    Err(SequentError::StepFailure { position, source }) => {
      error!(position, %source, "step failed; rest of the chain dropped");
    }
    Err(e) => error!(error = %e, "unexpected failure"),
  }

  // The same chain with parsable input completes normally.
  let doubled = with("21".to_string())
    .then_try(|s: String| s.parse::<i32>())
    .then(|v| v * 2)
    .run()
    .expect("parsable input");
  info!(doubled, "fallible chain finished");
}
