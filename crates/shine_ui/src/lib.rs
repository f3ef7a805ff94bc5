//! Leptos button primitive with a pointer-tracked "shine" highlight.
//!
//! The crate owns the [`ShineButton`] component, its variant and size class
//! tables, and [`merge_classes`]/[`cn!`], the class composition helper the
//! component uses to layer caller overrides over its defaults. Classes are
//! Tailwind utilities; consumers are expected to ship a Tailwind build that
//! scans this crate's sources.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod class_merge;
mod error;
mod primitives;
pub mod types;

pub use class_merge::{merge_classes, ClassValue};
pub use error::StyleKeyError;
pub use primitives::{
    button_class, overlay_class, ElementOrigin, PointerPosition, ShineButton, ShineOverlay, ShineSize,
    ShineState, ShineVariant, BASE_CLASSES, DEFAULT_LABEL, DISABLED_CLASSES, LABEL_CLASSES,
};

/// Convenience imports for crates rendering shine buttons.
pub mod prelude {
    pub use crate::{
        cn, merge_classes, ClassValue, ShineButton, ShineOverlay, ShineSize, ShineVariant,
    };
}
