use super::*;

/// Highlight overlay classes before the opacity toggle is appended.
const OVERLAY_CLASSES: &str =
    "absolute top-0 left-0 w-full h-full pointer-events-none transition-opacity duration-300";

#[derive(Debug, Clone, Copy, Default, PartialEq)]
/// Pointer offset from the top-left corner of the button, in CSS pixels.
pub struct PointerPosition {
    /// Horizontal offset.
    pub x: f64,
    /// Vertical offset.
    pub y: f64,
}

impl PointerPosition {
    /// Creates a position from raw offsets.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Maps viewport pointer coordinates into the local space of an element
    /// whose bounding box starts at `origin`.
    pub fn relative_to(client_x: f64, client_y: f64, origin: ElementOrigin) -> Self {
        Self {
            x: client_x - origin.left,
            y: client_y - origin.top,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
/// Viewport coordinates of an element's top-left corner, in CSS pixels.
pub struct ElementOrigin {
    /// Distance from the viewport's left edge.
    pub left: f64,
    /// Distance from the viewport's top edge.
    pub top: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
/// Per-instance interaction state of a [`ShineButton`].
///
/// Hovering and pointer tracking are independent: leaving the button clears
/// the hover flag but keeps the last computed center.
pub struct ShineState {
    /// Whether the pointer is currently over the button.
    pub hovering: bool,
    /// Last computed highlight center.
    pub position: PointerPosition,
}

impl ShineState {
    /// Records pointer entry. Applies even while disabled; visibility is
    /// gated separately by [`ShineState::overlay_visible`].
    pub fn pointer_enter(&mut self) {
        self.hovering = true;
    }

    /// Records pointer exit.
    pub fn pointer_leave(&mut self) {
        self.hovering = false;
    }

    /// Moves the highlight center unless the button is disabled.
    ///
    /// Returns `true` when the stored position changed.
    pub fn pointer_move(&mut self, position: PointerPosition, disabled: bool) -> bool {
        if disabled || self.position == position {
            return false;
        }
        self.position = position;
        true
    }

    /// Whether the overlay should be fully opaque.
    pub fn overlay_visible(&self, disabled: bool) -> bool {
        self.hovering && !disabled
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Appearance of the radial highlight.
pub struct ShineOverlay {
    /// Gradient circle radius in pixels.
    pub radius_px: u32,
    /// Color at the gradient center.
    pub color: String,
    /// Percentage of the radius at which the gradient becomes transparent.
    pub fade_percent: u8,
}

impl Default for ShineOverlay {
    fn default() -> Self {
        Self {
            radius_px: 120,
            color: "rgba(255,255,255,0.3)".to_string(),
            fade_percent: 50,
        }
    }
}

impl ShineOverlay {
    /// CSS `background` value centered on `center`.
    pub fn background(&self, center: PointerPosition) -> String {
        format!(
            "radial-gradient(circle {}px at {}px {}px, {}, transparent {}%)",
            self.radius_px,
            center.x,
            center.y,
            self.color,
            self.fade_percent.min(100)
        )
    }
}

/// Overlay class attribute for the given visibility.
pub fn overlay_class(visible: bool) -> String {
    cn!(
        OVERLAY_CLASSES,
        if visible { "opacity-100" } else { "opacity-0" }
    )
}
