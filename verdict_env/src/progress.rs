//! Progress reporting hooks for sequence generation.

/// Observer notified while a prediction sequence is generated.
///
/// Observers only watch: nothing they do can change the generated values.
/// Notifications happen for positions that are actually drawn, so a sequence
/// served from the cache produces no calls at all.
///
/// # Call order
///
/// ```text
/// begin(node, N) -> advance(node, 0) -> ... -> advance(node, N-1) -> finish(node)
/// ```
pub trait ProgressObserver {
    /// Called once before the first position is drawn.
    fn begin(&mut self, node: &str, total: usize);

    /// Called once per generated position.
    fn advance(&mut self, node: &str, index: usize);

    /// Called once after the last position is drawn.
    fn finish(&mut self, node: &str);
}

/// Observer that ignores every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentProgress;

impl ProgressObserver for SilentProgress {
    fn begin(&mut self, _node: &str, _total: usize) {}

    fn advance(&mut self, _node: &str, _index: usize) {}

    fn finish(&mut self, _node: &str) {}
}

impl<P: ProgressObserver + ?Sized> ProgressObserver for &mut P {
    fn begin(&mut self, node: &str, total: usize) {
        (**self).begin(node, total);
    }

    fn advance(&mut self, node: &str, index: usize) {
        (**self).advance(node, index);
    }

    fn finish(&mut self, node: &str) {
        (**self).finish(node);
    }
}
