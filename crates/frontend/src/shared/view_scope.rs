//! Cancellation token for async work started by a view.
//!
//! Backend calls are never aborted: they run to completion. A [`ViewScope`]
//! only decides whether the result may still be written into the view's
//! signals. The scope is cancelled when the owning component is cleaned up,
//! so a closed view never receives late updates.

use leptos::prelude::on_cleanup;
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Clone, Debug)]
pub struct ViewScope {
    active: Arc<AtomicBool>,
}

impl Default for ViewScope {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewScope {
    pub fn new() -> Self {
        Self {
            active: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn cancel(&self) {
        self.active.store(false, Ordering::SeqCst);
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    /// Run `apply(value)` only while the scope is active.
    /// Returns whether it ran.
    pub fn apply<T, F: FnOnce(T)>(&self, value: T, apply: F) -> bool {
        if self.is_active() {
            apply(value);
            true
        } else {
            false
        }
    }
}

/// Scope bound to the current reactive owner; cancelled on cleanup
pub fn use_view_scope() -> ViewScope {
    let scope = ViewScope::new();
    let on_drop = scope.clone();
    on_cleanup(move || on_drop.cancel());
    scope
}

/// Spawn `future` and hand its output to `apply` if `scope` is still active
/// when it settles. `label` names the action in the log.
pub fn spawn_guarded<T, Fut, F>(scope: &ViewScope, label: &'static str, future: Fut, apply: F)
where
    T: 'static,
    Fut: Future<Output = T> + 'static,
    F: FnOnce(T) + 'static,
{
    let scope = scope.clone();
    wasm_bindgen_futures::spawn_local(async move {
        let output = future.await;
        if !scope.apply(output, apply) {
            log::warn!("{}: view closed before the call settled, result discarded", label);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_new_scope_is_active() {
        assert!(ViewScope::new().is_active());
    }

    #[test]
    fn test_apply_runs_while_active() {
        let scope = ViewScope::new();
        let seen = Cell::new(0);
        assert!(scope.apply(5, |v| seen.set(v)));
        assert_eq!(seen.get(), 5);
    }

    #[test]
    fn test_cancel_blocks_apply_for_all_clones() {
        let scope = ViewScope::new();
        let clone = scope.clone();
        scope.cancel();
        assert!(!clone.is_active());

        let seen = Cell::new(0);
        assert!(!clone.apply(5, |v| seen.set(v)));
        assert_eq!(seen.get(), 0);
    }
}
