//! Per-call navigation options.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use veer_types::NavDirection;

/// Passthrough options for the external router.
///
/// Never interpreted by this layer; forwarded verbatim with every
/// navigation request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterExtras {
    pub query_params: Option<Value>,
    pub fragment: Option<String>,
    pub replace_url: bool,
    pub state: Option<Value>,
}

/// Options accepted by every navigation entry point: the router
/// passthrough plus the animation overrides consumed by this layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavOptions {
    pub animated: Option<bool>,
    pub animation_direction: Option<NavDirection>,
    #[serde(flatten)]
    pub extras: RouterExtras,
}

#[cfg(test)]
mod tests {
    use super::NavOptions;
    use veer_types::NavDirection;

    #[test]
    fn options_deserialize_with_flattened_extras() {
        let options: NavOptions = serde_json::from_str(
            r#"{"animated": true, "animation_direction": "back", "replace_url": true}"#,
        )
        .unwrap();
        assert_eq!(options.animated, Some(true));
        assert_eq!(options.animation_direction, Some(NavDirection::Back));
        assert!(options.extras.replace_url);
        assert!(options.extras.query_params.is_none());
    }
}
