//! Transition coordination: explicit navigation intent, direction
//! guessing, and back-navigation delegation down the outlet chain.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use veer_types::{
    AnimationOptions, DirectionTracker, ExplicitIntent, NavDirection, NavigationStart,
    RouterDirection, Transition, resolve_animation,
};

use crate::error::NavError;
use crate::options::NavOptions;
use crate::outlet::Outlet;
use crate::router::{BackButton, History, NavTarget, Router, RouterEvents};

/// Lowest priority: any more specific back-button handler registered by
/// the host runs first.
const BACK_BUTTON_PRIORITY: i32 = 0;

/// Mutable singleton state. Grouped so every read-modify-write happens
/// under one lock acquisition; the lock is never held across an await.
struct IntentState {
    intent: ExplicitIntent,
    tracker: DirectionTracker,
    top_outlet: Option<Arc<dyn Outlet>>,
}

/// Coordinates navigation direction and animation across the router, the
/// history facility, and the outlet hierarchy.
///
/// One instance exists per application, constructed at startup and shared
/// via `Arc`. Explicit navigation calls record their intent here; the
/// rendering layer drains it once per navigation with
/// [`NavCoordinator::consume_transition`]. Navigations nobody claimed
/// fall back to the direction guessed from router events.
pub struct NavCoordinator {
    router: Arc<dyn Router>,
    history: Arc<dyn History>,
    state: Mutex<IntentState>,
}

impl NavCoordinator {
    #[must_use]
    pub fn new(router: Arc<dyn Router>, history: Arc<dyn History>) -> Arc<Self> {
        Arc::new(Self {
            router,
            history,
            state: Mutex::new(IntentState {
                intent: ExplicitIntent::Auto,
                tracker: DirectionTracker::default(),
                top_outlet: None,
            }),
        })
    }

    /// Wire the coordinator into the host's event sources: router
    /// navigation starts feed the direction tracker, and the platform
    /// back button falls through to [`NavCoordinator::pop`].
    pub fn connect(self: &Arc<Self>, events: &dyn RouterEvents, back_button: &dyn BackButton) {
        let coordinator = Arc::clone(self);
        events.subscribe(Box::new(move |event| {
            coordinator.handle_navigation_start(&event);
        }));

        let coordinator = Arc::clone(self);
        back_button.subscribe_with_priority(
            BACK_BUTTON_PRIORITY,
            Box::new(move || {
                let coordinator = Arc::clone(&coordinator);
                Box::pin(async move {
                    coordinator.pop().await;
                })
            }),
        );
    }

    /// Navigate to `target` as a push, animating forward by default.
    pub async fn navigate_forward(
        &self,
        target: impl Into<NavTarget>,
        options: NavOptions,
    ) -> Result<bool, NavError> {
        self.set_direction(
            RouterDirection::Forward,
            options.animated,
            options.animation_direction,
        );
        self.navigate(target.into(), options).await
    }

    /// Navigate to `target` as a pop, animating back by default.
    pub async fn navigate_back(
        &self,
        target: impl Into<NavTarget>,
        options: NavOptions,
    ) -> Result<bool, NavError> {
        self.set_direction(
            RouterDirection::Back,
            options.animated,
            options.animation_direction,
        );
        self.navigate(target.into(), options).await
    }

    /// Navigate to `target` as a history reset. Animates only when
    /// explicitly requested.
    pub async fn navigate_root(
        &self,
        target: impl Into<NavTarget>,
        options: NavOptions,
    ) -> Result<bool, NavError> {
        self.set_direction(
            RouterDirection::Root,
            options.animated,
            options.animation_direction,
        );
        self.navigate(target.into(), options).await
    }

    /// Dispatch to the router entry point matching the target's shape,
    /// awaiting settlement. Router failures propagate unchanged.
    async fn navigate(&self, target: NavTarget, options: NavOptions) -> Result<bool, NavError> {
        match &target {
            NavTarget::Segments(segments) => self.router.navigate(segments, &options).await,
            NavTarget::Url(url) => self.router.navigate_by_url(url, &options).await,
        }
    }

    /// Go back one history entry with the default back animation.
    pub fn back(&self) {
        self.back_with(AnimationOptions {
            animated: Some(true),
            animation_direction: Some(NavDirection::Back),
        });
    }

    /// Go back one history entry with explicit animation overrides.
    pub fn back_with(&self, options: AnimationOptions) {
        self.set_direction(
            RouterDirection::Back,
            options.animated,
            options.animation_direction,
        );
        self.history.back();
    }

    /// Delegate a back request down the outlet chain, innermost first.
    ///
    /// Asks each outlet to pop in turn and stops at the first that
    /// reports success; a failed outlet's parent is tried next, one at a
    /// time. Returns false when the chain is exhausted (or empty), which
    /// is a normal outcome, not an error.
    pub async fn pop(&self) -> bool {
        let mut outlet = self.state().top_outlet.clone();
        while let Some(current) = outlet {
            if current.pop().await {
                tracing::debug!("pop handled by outlet");
                return true;
            }
            outlet = current.parent();
        }
        tracing::debug!("pop exhausted the outlet chain");
        false
    }

    /// Record explicit intent for the in-flight navigation.
    pub fn set_direction(
        &self,
        direction: RouterDirection,
        animated: Option<bool>,
        animation_direction: Option<NavDirection>,
    ) {
        let animation = resolve_animation(direction, animated, animation_direction);
        tracing::debug!(%direction, ?animation, "explicit intent set");
        self.state().intent = ExplicitIntent::Set {
            direction,
            animation,
        };
    }

    /// Register the innermost active outlet. Called by the outlet
    /// lifecycle as outlets activate.
    pub fn set_top_outlet(&self, outlet: Arc<dyn Outlet>) {
        self.state().top_outlet = Some(outlet);
    }

    /// Feed one router navigation-start event into the direction
    /// tracker. Public so hosts with their own event plumbing can drive
    /// it directly instead of going through [`NavCoordinator::connect`].
    pub fn handle_navigation_start(&self, event: &NavigationStart) {
        let mut state = self.state();
        state.tracker.observe(event);
        tracing::debug!(
            id = event.id,
            restored = event.restored.is_some(),
            guess = %state.tracker.guess().direction,
            "navigation start",
        );
    }

    /// Drain the effective direction and animation for the next render.
    ///
    /// Explicit intent wins when present; otherwise the guessed direction
    /// applies. Either way the explicit intent resets to auto, so calling
    /// again without an intervening navigation yields the guess. The
    /// rendering layer calls this exactly once per navigation.
    pub fn consume_transition(&self) -> Transition {
        let mut state = self.state();
        let transition = match state.intent {
            ExplicitIntent::Auto => state.tracker.guess(),
            ExplicitIntent::Set {
                direction,
                animation,
            } => Transition {
                direction,
                animation,
            },
        };
        state.intent = ExplicitIntent::Auto;
        transition
    }

    fn state(&self) -> MutexGuard<'_, IntentState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
