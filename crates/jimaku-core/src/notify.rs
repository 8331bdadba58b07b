/// Sink for user-facing, non-fatal notices.
pub trait Notifier {
    /// Reports a short message to the user.
    fn notify(&self, message: &str);
}

/// Discards every notice.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _message: &str) {}
}
