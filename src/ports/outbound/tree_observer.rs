/// TreeObserver port notified when the whole project tree must be re-queried
pub trait TreeObserver: Send + Sync {
    /// Called after a refresh started `generation`
    fn tree_changed(&self, generation: u64);
}

/// Observer for front ends that re-query on their own
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTreeObserver;

impl TreeObserver for NoopTreeObserver {
    fn tree_changed(&self, _generation: u64) {}
}
