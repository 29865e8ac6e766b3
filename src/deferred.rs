//! Timer-based deferred resolution.
//!
//! The deferred value is an explicit task: spawned onto the runtime, it
//! sleeps for the requested delay and then resolves with its message. The
//! caller keeps the [`JoinHandle`] as the continuation and awaits it
//! whenever it wants the resolved value, typically after all synchronous
//! work has finished.

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::debug;

/// Schedule a value that resolves with `message` after `delay`.
///
/// The task starts immediately; awaiting the returned handle yields the
/// message once the delay has elapsed. Dropping the handle detaches the
/// task rather than cancelling it.
pub fn resolve_after(delay: Duration, message: &str) -> JoinHandle<String> {
    let message = message.to_owned();
    tokio::spawn(async move {
        sleep(delay).await;
        debug!(ms = delay.as_millis() as u64, "deferred value resolved");
        message
    })
}
