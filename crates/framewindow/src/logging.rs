//! Test-only tracing subscriber.
//!
//! The library emits `tracing` events and leaves subscriber setup to the
//! application embedding it. Tests install this subscriber so the buffer's
//! `trace!` push and eviction events are formatted and shown on failure.

use tracing_subscriber::EnvFilter;

/// Default filter: every event from this crate, warnings from everything else.
const TEST_FILTER: &str = "warn,framewindow=trace";

/// Initialize logging for tests.
///
/// `RUST_LOG` overrides [`TEST_FILTER`]. Calling this more than once is harmless.
pub fn init_test_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(TEST_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_test_writer()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RingBuffer;

    #[test]
    fn test_init_test_logging_is_repeatable() {
        init_test_logging();
        init_test_logging();
    }

    #[test]
    fn test_test_filter_parses() {
        assert!(EnvFilter::try_new(TEST_FILTER).is_ok());
    }

    #[test]
    fn test_buffer_events_with_subscriber_installed() {
        init_test_logging();

        let mut buffer = RingBuffer::try_with_capacity(1).unwrap();
        buffer.push_back("first");
        buffer.push_back("second");
        assert_eq!(buffer.len(), 1);

        let mut empty: RingBuffer<&str> = RingBuffer::try_with_capacity(1).unwrap();
        assert!(empty.back_mut().is_err());
    }
}
