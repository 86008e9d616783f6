//! Component-lifetime cancellation token.
//!
//! Dioxus drops a component's futures on unmount, but a response that already
//! resolved can still be in flight through a signal write. Tasks check the
//! token before applying results so teardown turns late work into a no-op.

use std::cell::Cell;
use std::rc::Rc;

use dioxus::prelude::*;

#[derive(Debug, Clone, Default)]
pub struct Lifetime {
    cancelled: Rc<Cell<bool>>,
}

impl Lifetime {
    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }

    /// Run `apply` only while the owner is still mounted.
    pub fn run_if_live<T>(&self, apply: impl FnOnce() -> T) -> Option<T> {
        if self.is_cancelled() {
            None
        } else {
            Some(apply())
        }
    }
}

/// Token tied to the calling component; cancelled when it unmounts.
pub fn use_lifetime() -> Lifetime {
    let lifetime = use_hook(Lifetime::default);
    let on_drop = lifetime.clone();
    use_drop(move || on_drop.cancel());
    lifetime
}
