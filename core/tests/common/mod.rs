// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use std::sync::{Arc, Mutex};
use tracing::Level;

// --- Shared step functions (free functions, usable as steps directly) ---

pub fn add_ten(v: f64) -> f64 {
  v + 10.0
}

pub fn narrow_to_code(v: f64) -> u8 {
  v as u8
}

pub fn stringify_code(code: u8) -> String {
  code.to_string()
}

/// The illustrative side-effecting consumer: logs the message and returns
/// a status, like a `print_string`-style sink would.
pub fn consume_report(msg: String) -> i32 {
  tracing::debug!(target: "test_steps", %msg, "consuming final message");
  1
}

// --- Invocation-order log ---

pub type StepLog = Arc<Mutex<Vec<&'static str>>>;

pub fn new_step_log() -> StepLog {
  Arc::new(Mutex::new(Vec::new()))
}

pub fn logged(log: &StepLog) -> Vec<&'static str> {
  log.lock().unwrap().clone()
}

/// Wraps an identity-on-`i32` step that records its own invocation, for
/// asserting order and exactly-once application.
pub fn recording_step(log: &StepLog, name: &'static str) -> impl FnOnce(i32) -> i32 + Send + 'static {
  let log = Arc::clone(log);
  move |v: i32| {
    log.lock().unwrap().push(name);
    v
  }
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
