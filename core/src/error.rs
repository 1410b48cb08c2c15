//! Navigation failure contract shared with router implementations.

use thiserror::Error;

/// Failure reported by the external router for a navigation attempt.
///
/// The coordinator introduces no failures of its own; whatever the router
/// reports is propagated unchanged to the caller.
#[derive(Debug, Error)]
pub enum NavError {
    /// A route guard rejected the navigation.
    #[error("navigation rejected by guard: {reason}")]
    GuardRejected { reason: String },

    /// No route matched the requested target.
    #[error("no route matched {target}")]
    NoMatch { target: String },

    /// Any other router-side failure.
    #[error(transparent)]
    Router(#[from] anyhow::Error),
}
