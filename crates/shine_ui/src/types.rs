//! Serializable prop shapes published alongside the shine button.
//!
//! These describe generic button and input components in plain data. No
//! component in this crate consumes them; [`ShineButton`](crate::ShineButton)
//! takes its own typed props.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
/// Props shared by every component shape.
pub struct BaseComponentProps {
    /// Text content.
    pub children: Option<String>,
    /// Extra classes merged after the component defaults.
    pub class_name: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Variants of the generic button shape.
pub enum ButtonVariant {
    /// Neutral button.
    #[default]
    Default,
    /// Emphasized button.
    Primary,
    /// Muted button.
    Secondary,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Sizes of the generic button shape.
pub enum ButtonSize {
    /// Small.
    Sm,
    /// Medium.
    #[default]
    Md,
    /// Large.
    Lg,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
/// Generic button props.
pub struct ButtonProps {
    /// Shared props.
    #[serde(flatten)]
    pub base: BaseComponentProps,
    /// Visual variant.
    pub variant: ButtonVariant,
    /// Size preset.
    pub size: ButtonSize,
    /// Native disabled state.
    pub disabled: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
/// Generic button props with an optional shine toggle.
pub struct ShinyButtonProps {
    /// Button props.
    #[serde(flatten)]
    pub button: ButtonProps,
    /// Whether the shine effect is requested.
    pub shine: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
/// Generic text input props.
pub struct InputProps {
    /// Shared props.
    #[serde(flatten)]
    pub base: BaseComponentProps,
    /// Field label.
    pub label: Option<String>,
    /// Validation message.
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn shiny_button_props_read_flat_camel_case_shape() {
        let props: ShinyButtonProps = serde_json::from_value(json!({
            "children": "Save",
            "className": "w-full",
            "variant": "primary",
            "size": "lg",
            "shine": false
        }))
        .expect("deserialize props");

        assert_eq!(props.button.base.children.as_deref(), Some("Save"));
        assert_eq!(props.button.base.class_name.as_deref(), Some("w-full"));
        assert_eq!(props.button.variant, ButtonVariant::Primary);
        assert_eq!(props.button.size, ButtonSize::Lg);
        assert!(!props.button.disabled);
        assert_eq!(props.shine, Some(false));
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let props: InputProps = serde_json::from_value(json!({ "label": "Email" }))
            .expect("deserialize props");

        assert_eq!(
            props,
            InputProps {
                label: Some("Email".to_string()),
                ..InputProps::default()
            }
        );
    }

    #[test]
    fn generic_button_shape_rejects_shine_only_variants() {
        let result = serde_json::from_value::<ButtonProps>(json!({ "variant": "destructive" }));

        assert!(result.is_err());
    }
}
