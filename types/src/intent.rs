//! Explicitly requested navigation intent.

use crate::{NavDirection, RouterDirection};

/// Intent recorded by an explicit navigation call.
///
/// `Auto` means no call has claimed the in-flight navigation, so the
/// guessed direction applies. Consuming a transition always resets the
/// intent back to `Auto`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ExplicitIntent {
    #[default]
    Auto,
    Set {
        direction: RouterDirection,
        animation: Option<NavDirection>,
    },
}

impl ExplicitIntent {
    #[must_use]
    pub fn is_auto(&self) -> bool {
        matches!(self, ExplicitIntent::Auto)
    }
}
