//! Direction vocabulary shared between the tracker and the coordinator.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Direction of a page transition animation.
///
/// This is the value the rendering layer ultimately consumes; it crosses
/// the host boundary as a lowercase string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavDirection {
    Forward,
    Back,
}

/// Classification of a navigation relative to history: push, pop, or
/// replace/reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouterDirection {
    Forward,
    Back,
    Root,
}

impl From<NavDirection> for RouterDirection {
    fn from(value: NavDirection) -> Self {
        match value {
            NavDirection::Forward => RouterDirection::Forward,
            NavDirection::Back => RouterDirection::Back,
        }
    }
}

#[derive(Debug, Error)]
#[error("unknown direction: {0:?}")]
pub struct DirectionParseError(String);

impl FromStr for NavDirection {
    type Err = DirectionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "forward" => Ok(NavDirection::Forward),
            "back" => Ok(NavDirection::Back),
            other => Err(DirectionParseError(other.to_owned())),
        }
    }
}

impl FromStr for RouterDirection {
    type Err = DirectionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "forward" => Ok(RouterDirection::Forward),
            "back" => Ok(RouterDirection::Back),
            "root" => Ok(RouterDirection::Root),
            other => Err(DirectionParseError(other.to_owned())),
        }
    }
}

impl fmt::Display for NavDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavDirection::Forward => f.write_str("forward"),
            NavDirection::Back => f.write_str("back"),
        }
    }
}

impl fmt::Display for RouterDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouterDirection::Forward => f.write_str("forward"),
            RouterDirection::Back => f.write_str("back"),
            RouterDirection::Root => f.write_str("root"),
        }
    }
}

/// Per-call animation overrides accepted by every navigation entry point.
///
/// `animated: Some(false)` suppresses the animation outright; an explicit
/// `animation_direction` wins over whatever the direction would imply.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationOptions {
    pub animated: Option<bool>,
    pub animation_direction: Option<NavDirection>,
}

/// The effective direction and animation for the next render.
///
/// Yielded by `consume_transition`; always concrete, never "auto".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub direction: RouterDirection,
    pub animation: Option<NavDirection>,
}

#[cfg(test)]
mod tests {
    use super::{NavDirection, RouterDirection};

    #[test]
    fn directions_round_trip_as_lowercase_strings() {
        let json = serde_json::to_string(&NavDirection::Back).unwrap();
        assert_eq!(json, "\"back\"");
        let parsed: RouterDirection = "root".parse().unwrap();
        assert_eq!(parsed, RouterDirection::Root);
    }

    #[test]
    fn unknown_direction_string_is_rejected() {
        assert!("sideways".parse::<NavDirection>().is_err());
    }
}
