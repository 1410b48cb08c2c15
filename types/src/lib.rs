//! Core domain types for Veer.
//!
//! This crate contains pure domain types with no IO, no async, and minimal
//! dependencies: the navigation direction vocabulary, the direction-guess
//! state machine fed by router events, and the animation resolution rule.
//! Everything here can be used from any layer of the application.

mod animation;
mod direction;
mod intent;
mod tracker;

pub use animation::resolve_animation;
pub use direction::{
    AnimationOptions, DirectionParseError, NavDirection, RouterDirection, Transition,
};
pub use intent::ExplicitIntent;
pub use tracker::{DirectionTracker, NavigationStart, RestoredState};
