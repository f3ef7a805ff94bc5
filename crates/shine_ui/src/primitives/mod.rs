//! Shine button primitive, its style tables, and the pointer-tracking state it drives.

use std::str::FromStr;

use leptos::ev::MouseEvent;
use leptos::*;

use crate::{cn, StyleKeyError};

mod button;
mod shine;

pub use button::ShineButton;
pub use shine::{overlay_class, ElementOrigin, PointerPosition, ShineOverlay, ShineState};

/// Structural classes shared by every shine button.
pub const BASE_CLASSES: &str = "relative inline-flex items-center justify-center overflow-hidden rounded-lg transition-all duration-300 ease-out focus:outline-none focus:ring-2 focus:ring-offset-2";

/// Classes layered on top of the variant and size while the button is disabled.
pub const DISABLED_CLASSES: &str = "opacity-50 cursor-not-allowed pointer-events-none";

/// Label wrapper classes; keeps content stacked above the highlight overlay.
pub const LABEL_CLASSES: &str = "relative z-10 flex items-center justify-center";

/// Label rendered when the button receives no children.
pub const DEFAULT_LABEL: &str = "Button";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Color archetypes for [`ShineButton`].
pub enum ShineVariant {
    /// Black button with white text.
    Default,
    /// Blue call-to-action button.
    Primary,
    /// Muted gray button.
    Secondary,
    /// Red destructive-action button.
    Destructive,
    /// Bordered button on a white surface.
    Outline,
}

impl Default for ShineVariant {
    fn default() -> Self {
        Self::Default
    }
}

impl ShineVariant {
    /// Every variant, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Default,
        Self::Primary,
        Self::Secondary,
        Self::Destructive,
        Self::Outline,
    ];

    /// Stable lowercase key, also used for `data-ui-variant`.
    pub fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Destructive => "destructive",
            Self::Outline => "outline",
        }
    }

    /// Utility classes applied for this variant.
    pub fn classes(self) -> &'static str {
        match self {
            Self::Default => "bg-black text-white hover:bg-zinc-800 focus:ring-zinc-500",
            Self::Primary => "bg-blue-600 text-white hover:bg-blue-700 focus:ring-blue-500",
            Self::Secondary => "bg-gray-500 text-white hover:bg-gray-600 focus:ring-gray-400",
            Self::Destructive => "bg-red-600 text-white hover:bg-red-700 focus:ring-red-500",
            Self::Outline => {
                "border border-gray-300 bg-white text-gray-700 hover:bg-gray-100 focus:ring-gray-300"
            }
        }
    }
}

impl FromStr for ShineVariant {
    type Err = StyleKeyError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|variant| variant.token() == key)
            .ok_or_else(|| StyleKeyError::UnknownVariant(key.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Sizing presets for [`ShineButton`].
pub enum ShineSize {
    /// Standard 40px-high button.
    Default,
    /// Dense 32px-high button.
    Sm,
    /// Large 48px-high button.
    Lg,
}

impl Default for ShineSize {
    fn default() -> Self {
        Self::Default
    }
}

impl ShineSize {
    /// Every size, in declaration order.
    pub const ALL: [Self; 3] = [Self::Default, Self::Sm, Self::Lg];

    /// Stable lowercase key, also used for `data-ui-size`.
    pub fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Sm => "sm",
            Self::Lg => "lg",
        }
    }

    /// Utility classes applied for this size.
    pub fn classes(self) -> &'static str {
        match self {
            Self::Default => "h-10 px-4 py-2 text-sm",
            Self::Sm => "h-8 px-3 py-1 text-xs",
            Self::Lg => "h-12 px-6 py-3 text-base",
        }
    }
}

impl FromStr for ShineSize {
    type Err = StyleKeyError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|size| size.token() == key)
            .ok_or_else(|| StyleKeyError::UnknownSize(key.to_string()))
    }
}

/// Resolves the button class attribute.
///
/// Composition order is base, variant, size, disabled overlay, then the
/// caller override; later entries win on conflicting utilities.
pub fn button_class(
    variant: ShineVariant,
    size: ShineSize,
    disabled: bool,
    class_name: Option<&str>,
) -> String {
    cn!(
        BASE_CLASSES,
        variant.classes(),
        size.classes(),
        disabled.then_some(DISABLED_CLASSES),
        class_name
    )
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn class_set(class: &str) -> Vec<&str> {
        let mut classes: Vec<&str> = class.split_whitespace().collect();
        classes.sort_unstable();
        classes
    }

    #[test]
    fn every_variant_and_size_composes_with_base() {
        for variant in ShineVariant::ALL {
            for size in ShineSize::ALL {
                let class = button_class(variant, size, false, None);
                let mut expected: Vec<&str> = BASE_CLASSES
                    .split_whitespace()
                    .chain(variant.classes().split_whitespace())
                    .chain(size.classes().split_whitespace())
                    .collect();
                expected.sort_unstable();

                assert_eq!(class_set(&class), expected, "{variant:?} / {size:?}");
            }
        }
    }

    #[test]
    fn disabled_overlay_is_appended_only_when_disabled() {
        let enabled = button_class(ShineVariant::Primary, ShineSize::Sm, false, None);
        let disabled = button_class(ShineVariant::Primary, ShineSize::Sm, true, None);

        assert!(!enabled.contains("opacity-50"));
        assert!(disabled.ends_with(DISABLED_CLASSES));
    }

    #[test]
    fn caller_override_wins_on_conflicts() {
        let class = button_class(
            ShineVariant::Default,
            ShineSize::Default,
            false,
            Some("rounded-full bg-emerald-500 w-full"),
        );

        assert!(class.contains("rounded-full"));
        assert!(!class.contains("rounded-lg"));
        assert!(class.contains("bg-emerald-500"));
        assert!(!class.split_whitespace().any(|token| token == "bg-black"));
        assert!(class.contains("hover:bg-zinc-800"));
        assert!(class.ends_with("w-full"));
    }

    #[test]
    fn outline_variant_keeps_border_width_and_color() {
        let class = button_class(ShineVariant::Outline, ShineSize::Lg, false, None);
        let tokens: Vec<&str> = class.split_whitespace().collect();

        assert!(tokens.contains(&"border"));
        assert!(tokens.contains(&"border-gray-300"));
        assert!(tokens.contains(&"text-gray-700"));
        assert!(tokens.contains(&"text-base"));
    }

    #[test]
    fn style_keys_parse_from_tokens() {
        for variant in ShineVariant::ALL {
            assert_eq!(variant.token().parse::<ShineVariant>(), Ok(variant));
        }
        for size in ShineSize::ALL {
            assert_eq!(size.token().parse::<ShineSize>(), Ok(size));
        }
    }

    #[test]
    fn unknown_style_keys_are_rejected() {
        assert_eq!(
            "ghost".parse::<ShineVariant>(),
            Err(StyleKeyError::UnknownVariant("ghost".to_string()))
        );
        assert_eq!(
            "md".parse::<ShineSize>(),
            Err(StyleKeyError::UnknownSize("md".to_string()))
        );
        assert_eq!(
            StyleKeyError::UnknownSize("md".to_string()).to_string(),
            "unknown shine button size `md`"
        );
    }
}
