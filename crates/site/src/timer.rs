//! Fire-and-forget delayed callbacks.

use std::time::Duration;

/// Schedules a callback once after `delay`. There is no cancellation.
pub trait Timer {
    fn after(&self, delay: Duration, callback: Box<dyn FnOnce()>);
}
