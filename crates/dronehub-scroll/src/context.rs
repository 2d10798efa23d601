//! Explicit scopes through which the scroll engine publishes its controller
//!
//! A [`Scope`] is a node in the component tree. An engine provides a
//! [`ScrollContext`] to the child scope it creates; descendants look the
//! context up by walking towards the root.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::controller::ScrollHandle;
use crate::error::{Error, Result};

/// Shared slot holding the controller once the engine has activated
#[derive(Clone, Default)]
pub struct ScrollContext {
    slot: Rc<RefCell<Option<ScrollHandle>>>,
}

impl fmt::Debug for ScrollContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollContext")
            .field("ready", &self.is_ready())
            .finish()
    }
}

impl ScrollContext {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// The published controller, `None` before activation
    pub fn get(&self) -> Option<ScrollHandle> {
        self.slot.borrow().clone()
    }

    pub fn is_ready(&self) -> bool {
        self.slot.borrow().is_some()
    }

    pub(crate) fn publish(&self, handle: ScrollHandle) {
        *self.slot.borrow_mut() = Some(handle);
    }

    pub(crate) fn clear(&self) -> Option<ScrollHandle> {
        self.slot.borrow_mut().take()
    }
}

struct ScopeNode {
    parent: Option<Scope>,
    scroll: Option<ScrollContext>,
}

/// Node of the component tree used for context lookup
#[derive(Clone)]
pub struct Scope {
    node: Rc<ScopeNode>,
}

impl fmt::Debug for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scope")
            .field("provides_scroll", &self.node.scroll.is_some())
            .field("depth", &self.depth())
            .finish()
    }
}

impl Scope {
    pub fn root() -> Self {
        Self {
            node: Rc::new(ScopeNode {
                parent: None,
                scroll: None,
            }),
        }
    }

    /// A child scope that inherits every context of this one
    pub fn child(&self) -> Self {
        Self {
            node: Rc::new(ScopeNode {
                parent: Some(self.clone()),
                scroll: None,
            }),
        }
    }

    /// A child scope providing `context` to its subtree
    pub(crate) fn provide(&self, context: ScrollContext) -> Self {
        Self {
            node: Rc::new(ScopeNode {
                parent: Some(self.clone()),
                scroll: Some(context),
            }),
        }
    }

    /// Nearest scroll context above this scope, if any
    pub fn scroll_context(&self) -> Option<ScrollContext> {
        let mut current = Some(self);
        while let Some(scope) = current {
            if let Some(ref context) = scope.node.scroll {
                return Some(context.clone());
            }
            current = scope.node.parent.as_ref();
        }
        None
    }

    fn depth(&self) -> usize {
        let mut depth = 0;
        let mut current = self.node.parent.as_ref();
        while let Some(scope) = current {
            depth += 1;
            current = scope.node.parent.as_ref();
        }
        depth
    }
}

/// Read the scroll context of `scope`, failing outside an engine's subtree
pub fn use_scroll(scope: &Scope) -> Result<ScrollContext> {
    scope.scroll_context().ok_or(Error::OutsideScrollProvider)
}
