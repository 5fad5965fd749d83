// sequent/src/pipeline/execution.rs

//! Contains the executor: `Statement::run()` and the shared fold that
//! drains a step queue against a seed value.

use crate::core::step::{AnyValue, BoxedStep};
use crate::error::{SequentError, SequentResult};
use crate::pipeline::statement::Statement;
use tracing::{event, instrument, span, Level};

/// Drains a step queue as a strict left fold: each step is applied exactly
/// once, in append order, to the previous step's output. The queue
/// shrinks by one per iteration, so the fold is total for any well-typed
/// chain; a step failure aborts it and the remaining steps are dropped
/// unapplied.
pub(crate) fn drain(seed: AnyValue, queue: Vec<BoxedStep>) -> SequentResult<AnyValue> {
  let mut value = seed;
  for (position, step) in queue.into_iter().enumerate() {
    let step_span = span!(
      Level::DEBUG,
      "step_application",
      position,
      signature = %step.signature()
    );
    let _step_span_guard = step_span.enter();
    event!(Level::TRACE, "Applying step.");
    value = step.apply(value, position)?;
  }
  Ok(value)
}

impl<T: Send + 'static> Statement<T> {
  /// Executes the chain and yields the final value.
  ///
  /// An empty queue returns the seed as-is, with no step ever invoked.
  /// Otherwise each queued step runs exactly once, in the order appended,
  /// consuming the previous step's output. The statement is consumed:
  /// once run, no pipeline structure remains.
  #[instrument(
        name = "Statement::run",
        skip_all,
        fields(
            output_type = %std::any::type_name::<T>(),
            queued_steps = self.queue.len(),
        ),
        err(Display)
    )]
  pub fn run(self) -> SequentResult<T> {
    event!(Level::DEBUG, "Chain execution starting.");
    let value = drain(self.seed, self.queue)?;
    // The typed append path guarantees the fold ends on a T.
    let final_value = value.downcast::<T>().map_err(|_| {
      SequentError::Internal(format!(
        "final value did not downcast to '{}' despite typed construction",
        std::any::type_name::<T>()
      ))
    })?;
    event!(Level::DEBUG, "Chain execution completed successfully.");
    Ok(*final_value)
  }
}
