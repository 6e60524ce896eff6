/*!

# Overview

The `log` module provides logging capabilities with customizable thresholds and log levels. The log level describes
what _kind_ of messages are to be logged, and the numeric threshold is a verbosity level, which describes the
_verbosity_ of the logger.

```
use mimir::log::*;

fn main() {
    // Set the global threshold to 1. Any messages logged with greater threshold
    // will not be emitted.
    set_global_logging_threshold(1);

    critical!(3, "A critical error occurred!"); // Not emitted
    error!(2, "This is an error message.");     // Not emitted
    warning!(2, "Check your input.");           // Not emitted
    info!(1, "Processing started.");            // Emitted
    debug!(0, "Variable values are correct.");  // Emitted
    trace!(0, "Step through the logic here.");  // Emitted
}
```

## Threshold

The global logging threshold is a numerical value, with higher values meaning more verbose logging. Individual log
entries are logged "at" a given threshold and are only emitted if their level is _at most_ the global threshold
level. A message with threshold 0 is always emitted.

## Levels

Available levels are: Critical, Error, Warning, Info, Debug, Trace. The grounder, axiom evaluator, and state
repository use `debug!`/`trace!` at decision points (clique enumeration, stratum fixed points, state cache
hit/miss) so that a consuming binary can dial up verbosity without recompiling the core.

*/
mod formatter;
mod threshold_filter;
mod macros;

use std::sync::{
    atomic::{AtomicU8, Ordering},
    LazyLock
  };

use tracing_subscriber::{
  fmt,
  layer::SubscriberExt,
  Registry
};

use threshold_filter::ThresholdFilterLayer;
use formatter::CustomFieldFormatter;
pub use macros::*;

/// Used for implicit initialization.
static INIT_LOGGER: LazyLock<()> = LazyLock::new(|| {
  let subscriber = Registry::default()
      .with(ThresholdFilterLayer)
      .with(
        fmt::layer()
            .fmt_fields(CustomFieldFormatter)
            .with_target(false)
            .without_time()
            .with_writer(std::io::stdout),
      );

  // Planners commonly construct more than one `Problem`/`StateRepository` within a single
  // process (e.g. one per parallel search worker); a prior subscriber installed by the host
  // binary must win, so a failure here is not fatal.
  let _ = tracing::subscriber::set_global_default(subscriber);
});

/// This does not need to be called directly. Initializes the logging system.
pub fn init_logger() {
  LazyLock::force(&INIT_LOGGER);
}

static GLOBAL_LOGGING_THRESHOLD: AtomicU8 = AtomicU8::new(3); // Default threshold

/// Sets the global threshold before the logger is initialized.
pub fn set_global_logging_threshold(new_threshold: u8) {
  GLOBAL_LOGGING_THRESHOLD.store(new_threshold, Ordering::SeqCst);
}

/// Retrieves the global threshold.
pub fn get_global_logging_threshold() -> u8 {
  GLOBAL_LOGGING_THRESHOLD.load(Ordering::SeqCst)
}


#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_logging() {
    let foo = 42;

    set_global_logging_threshold(3);

    info!(2, "Processing value: {}", foo);
    debug!(4, "NOT logged Debugging value: {:?}", foo);
    warning!("An unexpected condition occurred.");
    error!(5, "NOT logged An error occurred with value: {}", foo);
    critical!(1, "Critical failure: {}", foo);

    set_global_logging_threshold(4);
    info!(5, "NOT logged This message should now be logged.");

    set_global_logging_threshold(5);
    info!(5, "This message should now be logged after changing the threshold.");
  }
}
