//! Seams for the external router, history facility, and platform events.
//!
//! None of these are implemented here. The host wires real implementations
//! in at startup; tests substitute doubles emitting synthetic events.

use std::future::Future;
use std::pin::Pin;

use veer_types::NavigationStart;

use crate::error::NavError;
use crate::options::NavOptions;

/// Settlement signal for a navigation attempt: `Ok(true)` committed,
/// `Ok(false)` cancelled (e.g. a guard returned false), `Err` failed.
pub type NavFut<'a> = Pin<Box<dyn Future<Output = Result<bool, NavError>> + Send + 'a>>;

/// The external routing engine.
///
/// Two entry points, selected solely by the shape of the target: segment
/// arrays go through [`Router::navigate`], pre-built URLs through
/// [`Router::navigate_by_url`].
pub trait Router: Send + Sync {
    fn navigate<'a>(&'a self, segments: &'a [String], options: &'a NavOptions) -> NavFut<'a>;

    fn navigate_by_url<'a>(&'a self, url: &'a str, options: &'a NavOptions) -> NavFut<'a>;
}

/// The external history facility. No return contract is assumed for
/// going back one entry.
pub trait History: Send + Sync {
    fn back(&self);
}

pub type NavigationStartHandler = Box<dyn Fn(NavigationStart) + Send + Sync>;

/// Source of router navigation-start notifications.
pub trait RouterEvents {
    fn subscribe(&self, handler: NavigationStartHandler);
}

pub type BackButtonFut = Pin<Box<dyn Future<Output = ()> + Send>>;

pub type BackButtonHandler = Box<dyn Fn() -> BackButtonFut + Send + Sync>;

/// Platform back-button signal with prioritized dispatch. Higher
/// priorities run first; the coordinator registers at 0 so more specific
/// handlers elsewhere can intercept.
pub trait BackButton {
    fn subscribe_with_priority(&self, priority: i32, handler: BackButtonHandler);
}

/// A navigation target. The variant alone decides which router entry
/// point handles the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavTarget {
    Segments(Vec<String>),
    Url(String),
}

impl From<&str> for NavTarget {
    fn from(url: &str) -> Self {
        NavTarget::Url(url.to_owned())
    }
}

impl From<String> for NavTarget {
    fn from(url: String) -> Self {
        NavTarget::Url(url)
    }
}

impl From<Vec<String>> for NavTarget {
    fn from(segments: Vec<String>) -> Self {
        NavTarget::Segments(segments)
    }
}

impl From<&[&str]> for NavTarget {
    fn from(segments: &[&str]) -> Self {
        NavTarget::Segments(segments.iter().map(|s| (*s).to_owned()).collect())
    }
}
