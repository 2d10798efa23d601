//! Scroll listener registration tied to a consumer's lifetime
//!
//! A [`ScrollSubscription`] keeps at most one listener registered on the
//! published controller. Each effect pass (`update` / `refresh`) compares the
//! controller, the callback and the dependency values with the installed
//! registration and replaces it when any of them changed. Dropping the
//! subscription removes the registration.

use std::rc::Rc;

use tracing::debug;

use crate::context::{use_scroll, Scope, ScrollContext};
use crate::controller::{ScrollCallback, ScrollHandle, SubscriptionId};
use crate::error::Result;

struct Installed<D> {
    controller: ScrollHandle,
    id: SubscriptionId,
    callback: ScrollCallback,
    deps: D,
}

pub struct ScrollSubscription<D: PartialEq + Clone = ()> {
    context: Option<ScrollContext>,
    callback: ScrollCallback,
    deps: D,
    installed: Option<Installed<D>>,
}

impl<D: PartialEq + Clone> ScrollSubscription<D> {
    /// Subscribe within an engine's subtree
    ///
    /// Fails with `Error::OutsideScrollProvider` when no engine provides a
    /// context above `scope`.
    pub fn attach(scope: &Scope, callback: ScrollCallback, deps: D) -> Result<Self> {
        let context = use_scroll(scope)?;
        Ok(Self::with_context(Some(context), callback, deps))
    }

    /// Subscribe if an engine is present, otherwise stay inert without failing
    pub fn attach_lenient(scope: &Scope, callback: ScrollCallback, deps: D) -> Self {
        Self::with_context(scope.scroll_context(), callback, deps)
    }

    fn with_context(context: Option<ScrollContext>, callback: ScrollCallback, deps: D) -> Self {
        let mut subscription = Self {
            context,
            callback,
            deps,
            installed: None,
        };
        subscription.reconcile();
        subscription
    }

    /// Effect pass with a new callback and dependency values
    pub fn update(&mut self, callback: ScrollCallback, deps: D) {
        self.callback = callback;
        self.deps = deps;
        self.reconcile();
    }

    /// Effect pass with unchanged inputs, picks up a newly published controller
    pub fn refresh(&mut self) {
        self.reconcile();
    }

    pub fn is_registered(&self) -> bool {
        self.installed.is_some()
    }

    /// Remove the registration; calling again is a no-op
    pub fn unmount(&mut self) {
        if let Some(installed) = self.installed.take() {
            installed.controller.unsubscribe(installed.id);
            debug!(subscription = ?installed.id, "Scroll subscription torn down");
        }
    }

    fn reconcile(&mut self) {
        let current = self.context.as_ref().and_then(ScrollContext::get);

        if let Some(ref installed) = self.installed {
            let same_controller = current
                .as_ref()
                .is_some_and(|controller| controller.ptr_eq(&installed.controller));
            if same_controller
                && Rc::ptr_eq(&installed.callback, &self.callback)
                && installed.deps == self.deps
            {
                return;
            }
        }

        self.unmount();

        if let Some(controller) = current {
            let id = controller.subscribe(Rc::clone(&self.callback));
            debug!(subscription = ?id, controller = %controller.id(), "Scroll subscription installed");
            self.installed = Some(Installed {
                controller,
                id,
                callback: Rc::clone(&self.callback),
                deps: self.deps.clone(),
            });
        }
    }
}

impl<D: PartialEq + Clone> Drop for ScrollSubscription<D> {
    fn drop(&mut self) {
        self.unmount();
    }
}
