//! Nested view containers that can pop their own active view.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

pub type PopFut<'a> = Pin<Box<dyn Future<Output = bool> + Send + 'a>>;

/// A container hosting one active view within a nested navigation
/// hierarchy.
///
/// Outlets register themselves with the coordinator through
/// `set_top_outlet` as they activate; the coordinator only ever walks
/// from the innermost outlet outward via [`Outlet::parent`].
pub trait Outlet: Send + Sync {
    /// Pop this outlet's active view if it has one. `true` means the pop
    /// was handled here.
    fn pop(&self) -> PopFut<'_>;

    /// The enclosing outlet, absent for the outermost one.
    fn parent(&self) -> Option<Arc<dyn Outlet>>;
}
