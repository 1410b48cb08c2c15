//! Navigation coordination for Veer.
//!
//! A thin layer over the host's routing engine for mobile-style page
//! transitions: it tracks whether the in-flight navigation moves forward
//! or back through history, lets explicit navigation calls override that
//! guess with a concrete direction and animation, and delegates hardware
//! back presses down the chain of nested router outlets.
//!
//! The routing engine, history facility, and outlets themselves are
//! external collaborators behind the [`Router`], [`History`], and
//! [`Outlet`] traits.

mod coordinator;
mod error;
mod options;
mod outlet;
mod router;

pub use coordinator::NavCoordinator;
pub use error::NavError;
pub use options::{NavOptions, RouterExtras};
pub use outlet::{Outlet, PopFut};
pub use router::{
    BackButton, BackButtonFut, BackButtonHandler, History, NavFut, NavTarget,
    NavigationStartHandler, Router, RouterEvents,
};

// Re-export the domain types so hosts can depend on this crate alone.
pub use veer_types::{
    AnimationOptions, DirectionTracker, NavDirection, NavigationStart, RestoredState,
    RouterDirection, Transition, resolve_animation,
};
