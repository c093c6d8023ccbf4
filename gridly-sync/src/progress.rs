//! Progress reporting for sync operations.
//!
//! Tasks emit progress events on an optional unbounded channel; a
//! dropped receiver never fails the operation.

use tokio::sync::mpsc;

/// One progress tick from a running operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressEvent {
    /// Estimated completion in `[0, 1]`.
    pub fraction: f32,
    /// Records accumulated (download) or chunks sent (export) so far.
    pub accumulated: usize,
}

/// Sending half for progress events.
pub type ProgressSender = mpsc::UnboundedSender<ProgressEvent>;

pub(crate) fn emit(sender: Option<&ProgressSender>, fraction: f32, accumulated: usize) {
    if let Some(sender) = sender {
        let _ = sender.send(ProgressEvent {
            fraction,
            accumulated,
        });
    }
}
