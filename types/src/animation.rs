//! Animation resolution for explicit navigation calls.

use crate::{NavDirection, RouterDirection};

/// Resolve the animation hint for an explicitly requested navigation.
///
/// Strict priority chain; later rules never override earlier matches:
/// 1. `animated == Some(false)` disables the animation regardless of
///    direction.
/// 2. An explicit `animation_direction` is used verbatim.
/// 3. Forward/back navigations animate in their own direction.
/// 4. A root navigation animates forward, but only when `animated` was
///    explicitly requested.
/// 5. Anything else gets no animation.
#[must_use]
pub fn resolve_animation(
    direction: RouterDirection,
    animated: Option<bool>,
    animation_direction: Option<NavDirection>,
) -> Option<NavDirection> {
    if animated == Some(false) {
        return None;
    }
    if let Some(explicit) = animation_direction {
        return Some(explicit);
    }
    match direction {
        RouterDirection::Forward => Some(NavDirection::Forward),
        RouterDirection::Back => Some(NavDirection::Back),
        RouterDirection::Root if animated == Some(true) => Some(NavDirection::Forward),
        RouterDirection::Root => None,
    }
}

#[cfg(test)]
mod tests {
    use super::resolve_animation;
    use crate::{NavDirection, RouterDirection};

    #[test]
    fn animated_false_wins_over_everything() {
        assert_eq!(
            resolve_animation(
                RouterDirection::Back,
                Some(false),
                Some(NavDirection::Forward)
            ),
            None
        );
    }

    #[test]
    fn explicit_animation_direction_wins_over_direction() {
        assert_eq!(
            resolve_animation(RouterDirection::Forward, None, Some(NavDirection::Back)),
            Some(NavDirection::Back)
        );
    }

    #[test]
    fn forward_and_back_animate_in_their_own_direction() {
        assert_eq!(
            resolve_animation(RouterDirection::Forward, None, None),
            Some(NavDirection::Forward)
        );
        assert_eq!(
            resolve_animation(RouterDirection::Back, Some(true), None),
            Some(NavDirection::Back)
        );
    }

    #[test]
    fn root_animates_forward_only_when_explicitly_animated() {
        assert_eq!(
            resolve_animation(RouterDirection::Root, Some(true), None),
            Some(NavDirection::Forward)
        );
        assert_eq!(resolve_animation(RouterDirection::Root, None, None), None);
    }
}
