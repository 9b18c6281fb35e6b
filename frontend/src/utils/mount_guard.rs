use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

/// Shared "is the component still on screen" flag. Async work holds a clone
/// and checks it before writing state; the effect teardown flips it off.
#[derive(Clone, Debug)]
pub struct MountGuard {
    mounted: Rc<Cell<bool>>,
}

impl MountGuard {
    pub fn new() -> Self {
        Self {
            mounted: Rc::new(Cell::new(true)),
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.get()
    }

    pub fn unmount(&self) {
        self.mounted.set(false);
    }

    /// Awaits `work` and hands back its output only if the component is still
    /// mounted once it finishes.
    pub async fn settle<F: Future>(&self, work: F) -> Option<F::Output> {
        let output = work.await;
        self.is_mounted().then_some(output)
    }
}

impl Default for MountGuard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn clones_see_the_unmount() {
        let guard = MountGuard::new();
        let held_by_task = guard.clone();
        assert!(held_by_task.is_mounted());
        guard.unmount();
        assert!(!held_by_task.is_mounted());
    }

    #[test]
    fn settle_keeps_output_while_mounted() {
        let guard = MountGuard::new();
        assert_eq!(block_on(guard.settle(async { vec![1, 2, 3] })), Some(vec![1, 2, 3]));
    }

    #[test]
    fn settle_drops_output_when_unmounted_mid_flight() {
        let guard = MountGuard::new();
        let teardown = guard.clone();
        let late = block_on(guard.settle(async move {
            teardown.unmount();
            "late result"
        }));
        assert_eq!(late, None);
    }
}
