//! Direction inference from router navigation-start events.
//!
//! The router issues a monotonically increasing id per navigation attempt.
//! Comparing each attempt's effective id against the highest forward id
//! seen so far gives a best-effort guess of whether the navigation moves
//! forward or back through history. The guess can be wrong; it is a
//! fallback for navigations nobody explicitly claimed.

use serde::{Deserialize, Serialize};

use crate::{NavDirection, RouterDirection, Transition};

/// A history entry being replayed (browser back/forward, bf-cache).
///
/// Carries the id the entry was originally issued under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestoredState {
    pub navigation_id: i64,
}

/// Payload of a router navigation-start notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationStart {
    pub id: i64,
    pub restored: Option<RestoredState>,
}

impl NavigationStart {
    #[must_use]
    pub fn new(id: i64) -> Self {
        Self { id, restored: None }
    }

    #[must_use]
    pub fn restored(id: i64, original_id: i64) -> Self {
        Self {
            id,
            restored: Some(RestoredState {
                navigation_id: original_id,
            }),
        }
    }

    /// The id used for direction comparison: the original id for a
    /// restored entry, the freshly issued one otherwise.
    #[must_use]
    pub fn effective_id(&self) -> i64 {
        match self.restored {
            Some(state) => state.navigation_id,
            None => self.id,
        }
    }
}

/// Best-effort forward/back inference over a stream of navigation starts.
///
/// `last_nav_id` tracks the highest forward id reached, not simply the
/// latest id: a back navigation never advances it, so returning forward
/// past the same entries still compares against the old high-water mark.
/// Malformed or out-of-order ids degrade to a wrong guess, never an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectionTracker {
    guess_direction: NavDirection,
    guess_animation: Option<NavDirection>,
    last_nav_id: i64,
}

impl Default for DirectionTracker {
    fn default() -> Self {
        Self {
            guess_direction: NavDirection::Forward,
            guess_animation: None,
            last_nav_id: -1,
        }
    }
}

impl DirectionTracker {
    /// Fold one navigation-start event into the guess.
    ///
    /// Restored navigations get a direction but no animation hint: a
    /// history replay should not re-run a page transition.
    pub fn observe(&mut self, event: &NavigationStart) {
        let effective = event.effective_id();
        self.guess_direction = if effective < self.last_nav_id {
            NavDirection::Back
        } else {
            NavDirection::Forward
        };
        self.guess_animation = if event.restored.is_none() {
            Some(self.guess_direction)
        } else {
            None
        };
        if self.guess_direction == NavDirection::Forward && event.restored.is_none() {
            self.last_nav_id = effective;
        }
    }

    /// Current guess as a concrete transition.
    #[must_use]
    pub fn guess(&self) -> Transition {
        Transition {
            direction: RouterDirection::from(self.guess_direction),
            animation: self.guess_animation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DirectionTracker, NavigationStart};
    use crate::{NavDirection, RouterDirection};

    #[test]
    fn increasing_ids_always_guess_forward() {
        let mut tracker = DirectionTracker::default();
        for id in [1, 2, 5, 9, 10] {
            tracker.observe(&NavigationStart::new(id));
            let guess = tracker.guess();
            assert_eq!(guess.direction, RouterDirection::Forward);
            assert_eq!(guess.animation, Some(NavDirection::Forward));
        }
    }

    #[test]
    fn lower_id_guesses_back_and_keeps_the_baseline() {
        let mut tracker = DirectionTracker::default();
        tracker.observe(&NavigationStart::new(5));
        tracker.observe(&NavigationStart::new(3));

        let guess = tracker.guess();
        assert_eq!(guess.direction, RouterDirection::Back);
        assert_eq!(guess.animation, Some(NavDirection::Back));

        // Baseline stays at 5: a forward navigation with id 4 would still
        // compare against the highest forward id reached.
        tracker.observe(&NavigationStart::new(4));
        assert_eq!(tracker.guess().direction, RouterDirection::Back);
    }

    #[test]
    fn restored_entry_below_baseline_guesses_back_without_animation() {
        let mut tracker = DirectionTracker::default();
        tracker.observe(&NavigationStart::new(7));
        tracker.observe(&NavigationStart::restored(8, 2));

        let guess = tracker.guess();
        assert_eq!(guess.direction, RouterDirection::Back);
        assert_eq!(guess.animation, None);
    }

    #[test]
    fn restored_entry_at_or_above_baseline_guesses_forward_without_animation() {
        let mut tracker = DirectionTracker::default();
        tracker.observe(&NavigationStart::new(3));
        tracker.observe(&NavigationStart::restored(4, 9));

        let guess = tracker.guess();
        assert_eq!(guess.direction, RouterDirection::Forward);
        assert_eq!(guess.animation, None);

        // Restored navigations never advance the baseline, so a fresh id 5
        // still reads as forward against the old baseline of 3.
        tracker.observe(&NavigationStart::new(5));
        assert_eq!(tracker.guess().direction, RouterDirection::Forward);
    }

    #[test]
    fn forward_after_back_advances_to_the_new_event_id() {
        let mut tracker = DirectionTracker::default();
        tracker.observe(&NavigationStart::new(5));
        tracker.observe(&NavigationStart::new(3));
        tracker.observe(&NavigationStart::new(6));

        assert_eq!(tracker.guess().direction, RouterDirection::Forward);

        // The baseline moved to 6, so 5 now reads as back.
        tracker.observe(&NavigationStart::new(5));
        assert_eq!(tracker.guess().direction, RouterDirection::Back);
    }

    #[test]
    fn first_event_is_forward_from_the_initial_baseline() {
        let mut tracker = DirectionTracker::default();
        tracker.observe(&NavigationStart::new(0));
        assert_eq!(tracker.guess().direction, RouterDirection::Forward);
    }
}
