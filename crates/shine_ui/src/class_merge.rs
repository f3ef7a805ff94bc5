//! Class-name composition with Tailwind-style conflict resolution.
//!
//! [`merge_classes`] joins a sequence of optional class lists into one
//! attribute value. Later utilities that set the same CSS property (under the
//! same set of variant modifiers) replace earlier ones, so a caller-supplied
//! override such as `rounded-none` cleanly wins over a table default such as
//! `rounded-lg`. Classes the resolver does not recognize are only
//! de-duplicated.

use std::borrow::Cow;
use std::collections::HashSet;

/// One input to [`merge_classes`] and [`cn!`](crate::cn).
///
/// Falsy inputs (`false`, `None`) become [`ClassValue::Skip`]. Booleans never
/// contribute a class; use `condition.then_some("class")` to gate a class.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ClassValue<'a> {
    /// One or more whitespace-separated class names.
    Classes(Cow<'a, str>),
    /// A falsy or absent value.
    #[default]
    Skip,
}

impl<'a> From<&'a str> for ClassValue<'a> {
    fn from(value: &'a str) -> Self {
        Self::Classes(Cow::Borrowed(value))
    }
}

impl<'a> From<&'a String> for ClassValue<'a> {
    fn from(value: &'a String) -> Self {
        Self::Classes(Cow::Borrowed(value.as_str()))
    }
}

impl From<String> for ClassValue<'_> {
    fn from(value: String) -> Self {
        Self::Classes(Cow::Owned(value))
    }
}

impl From<bool> for ClassValue<'_> {
    fn from(_: bool) -> Self {
        Self::Skip
    }
}

impl<'a, T> From<Option<T>> for ClassValue<'a>
where
    T: Into<ClassValue<'a>>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Skip, Into::into)
    }
}

/// Merges class values into a single space-separated class attribute.
///
/// Surviving classes keep their relative input order. When two utilities
/// conflict, the later one is kept.
///
/// ```
/// use shine_ui::{merge_classes, ClassValue};
///
/// let merged = merge_classes([
///     ClassValue::from("px-4 bg-black"),
///     ClassValue::from(None::<&str>),
///     ClassValue::from("bg-white"),
/// ]);
/// assert_eq!(merged, "px-4 bg-white");
/// ```
pub fn merge_classes<'a, I>(values: I) -> String
where
    I: IntoIterator<Item = ClassValue<'a>>,
{
    let values: Vec<ClassValue<'a>> = values.into_iter().collect();
    let tokens: Vec<&str> = values
        .iter()
        .filter_map(|value| match value {
            ClassValue::Classes(classes) => Some(classes.as_ref()),
            ClassValue::Skip => None,
        })
        .flat_map(str::split_whitespace)
        .collect();

    let mut claimed = HashSet::new();
    let mut kept = Vec::with_capacity(tokens.len());
    for token in tokens.iter().rev() {
        let parsed = ParsedClass::parse(token);
        let key = parsed.key();
        if claimed.contains(&key) {
            continue;
        }
        if let Some(group) = parsed.group {
            for overridden in overridden_groups(group) {
                claimed.insert(parsed.group_key(overridden));
            }
        }
        claimed.insert(key);
        kept.push(*token);
    }

    kept.reverse();
    kept.join(" ")
}

/// Variadic front-end for [`merge_classes`].
///
/// Every argument is converted with [`ClassValue::from`], so string slices,
/// owned strings, booleans and options can be mixed freely.
///
/// ```
/// let disabled = true;
/// let class = shine_ui::cn!("a", false, None::<&str>, "b c", "b", disabled.then_some("opacity-50"));
/// assert_eq!(class, "a c b opacity-50");
/// ```
#[macro_export]
macro_rules! cn {
    () => {
        ::std::string::String::new()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::merge_classes([$($crate::ClassValue::from($value)),+])
    };
}

struct ParsedClass<'a> {
    modifiers: String,
    important: bool,
    base: &'a str,
    group: Option<&'static str>,
}

impl<'a> ParsedClass<'a> {
    fn parse(token: &'a str) -> Self {
        let (mut modifiers, base) = split_modifiers(token);
        modifiers.sort_unstable();

        let (important, base) = match base.strip_prefix('!') {
            Some(stripped) => (true, stripped),
            None => match base.strip_suffix('!') {
                Some(stripped) => (true, stripped),
                None => (false, base),
            },
        };
        let utility = base.strip_prefix('-').unwrap_or(base);

        Self {
            modifiers: modifiers.join(":"),
            important,
            base,
            group: utility_group(utility),
        }
    }

    fn key(&self) -> String {
        match self.group {
            Some(group) => self.group_key(group),
            None => format!("{}|{}|exact:{}", self.modifiers, self.important, self.base),
        }
    }

    fn group_key(&self, group: &str) -> String {
        format!("{}|{}|{group}", self.modifiers, self.important)
    }
}

fn split_modifiers(token: &str) -> (Vec<&str>, &str) {
    let mut segments = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (index, ch) in token.char_indices() {
        match ch {
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            ':' if depth == 0 => {
                segments.push(&token[start..index]);
                start = index + 1;
            }
            _ => {}
        }
    }
    (segments, &token[start..])
}

const DISPLAY: &[&str] = &[
    "block",
    "inline-block",
    "inline",
    "flex",
    "inline-flex",
    "table",
    "inline-table",
    "table-caption",
    "table-cell",
    "table-column",
    "table-column-group",
    "table-footer-group",
    "table-header-group",
    "table-row-group",
    "table-row",
    "flow-root",
    "grid",
    "inline-grid",
    "contents",
    "list-item",
    "hidden",
];

const POSITION: &[&str] = &["static", "fixed", "absolute", "relative", "sticky"];

const VISIBILITY: &[&str] = &["visible", "invisible", "collapse"];

// Longer prefixes must precede the shorter prefixes they extend.
const PREFIX_GROUPS: &[(&str, &str)] = &[
    ("inset-x-", "inset-x"),
    ("inset-y-", "inset-y"),
    ("inset-", "inset"),
    ("top-", "top"),
    ("right-", "right"),
    ("bottom-", "bottom"),
    ("left-", "left"),
    ("start-", "start"),
    ("end-", "end"),
    ("z-", "z-index"),
    ("px-", "px"),
    ("py-", "py"),
    ("pt-", "pt"),
    ("pr-", "pr"),
    ("pb-", "pb"),
    ("pl-", "pl"),
    ("ps-", "ps"),
    ("pe-", "pe"),
    ("p-", "p"),
    ("mx-", "mx"),
    ("my-", "my"),
    ("mt-", "mt"),
    ("mr-", "mr"),
    ("mb-", "mb"),
    ("ml-", "ml"),
    ("ms-", "ms"),
    ("me-", "me"),
    ("m-", "m"),
    ("gap-x-", "gap-x"),
    ("gap-y-", "gap-y"),
    ("gap-", "gap"),
    ("space-x-", "space-x"),
    ("space-y-", "space-y"),
    ("min-w-", "min-w"),
    ("max-w-", "max-w"),
    ("min-h-", "min-h"),
    ("max-h-", "max-h"),
    ("w-", "w"),
    ("h-", "h"),
    ("size-", "size"),
    ("overflow-x-", "overflow-x"),
    ("overflow-y-", "overflow-y"),
    ("overflow-", "overflow"),
    ("items-", "align-items"),
    ("justify-items-", "justify-items"),
    ("justify-self-", "justify-self"),
    ("justify-", "justify-content"),
    ("self-", "align-self"),
    ("order-", "order"),
    ("basis-", "basis"),
    ("grow-", "grow"),
    ("shrink-", "shrink"),
    ("grid-cols-", "grid-cols"),
    ("grid-rows-", "grid-rows"),
    ("opacity-", "opacity"),
    ("cursor-", "cursor"),
    ("pointer-events-", "pointer-events"),
    ("select-", "select"),
    ("duration-", "duration"),
    ("delay-", "delay"),
    ("ease-", "ease"),
    ("leading-", "leading"),
    ("tracking-", "tracking"),
    ("whitespace-", "whitespace"),
    ("rotate-", "rotate"),
    ("scale-x-", "scale-x"),
    ("scale-y-", "scale-y"),
    ("scale-", "scale"),
    ("translate-x-", "translate-x"),
    ("translate-y-", "translate-y"),
    ("origin-", "origin"),
    ("aspect-", "aspect"),
];

fn utility_group(utility: &str) -> Option<&'static str> {
    if DISPLAY.contains(&utility) {
        return Some("display");
    }
    if POSITION.contains(&utility) {
        return Some("position");
    }
    if VISIBILITY.contains(&utility) {
        return Some("visibility");
    }
    match utility {
        "sr-only" | "not-sr-only" => return Some("sr"),
        "grow" => return Some("grow"),
        "shrink" => return Some("shrink"),
        "border" => return Some("border-width"),
        "ring" => return Some("ring-width"),
        "ring-inset" => return Some("ring-inset"),
        "shadow" => return Some("shadow"),
        "rounded" => return Some("rounded"),
        "transition" => return Some("transition"),
        "outline" | "outline-none" | "outline-dashed" | "outline-dotted" | "outline-double" => {
            return Some("outline-style")
        }
        "space-x-reverse" => return Some("space-x-reverse"),
        "space-y-reverse" => return Some("space-y-reverse"),
        _ => {}
    }

    if let Some(value) = utility.strip_prefix("object-") {
        return Some(object_group(value));
    }
    if let Some(value) = utility.strip_prefix("content-") {
        return content_group(value);
    }

    if let Some(value) = utility.strip_prefix("flex-") {
        return Some(flex_group(value));
    }
    if let Some(value) = utility.strip_prefix("text-") {
        return text_group(value);
    }
    if let Some(value) = utility.strip_prefix("bg-") {
        return background_group(value);
    }
    if let Some(value) = utility.strip_prefix("border-") {
        return border_group(value);
    }
    if let Some(value) = utility.strip_prefix("ring-offset-") {
        return Some(if is_color(value) {
            "ring-offset-color"
        } else {
            "ring-offset-width"
        });
    }
    if let Some(value) = utility.strip_prefix("ring-") {
        return Some(if is_color(value) {
            "ring-color"
        } else {
            "ring-width"
        });
    }
    if utility.starts_with("outline-offset-") {
        return Some("outline-offset");
    }
    if let Some(value) = utility.strip_prefix("outline-") {
        return Some(if is_color(value) {
            "outline-color"
        } else {
            "outline-width"
        });
    }
    if let Some(value) = utility.strip_prefix("shadow-") {
        return Some(if is_color(value) {
            "shadow-color"
        } else {
            "shadow"
        });
    }
    if let Some(value) = utility.strip_prefix("rounded-") {
        return rounded_group(value);
    }
    if let Some(value) = utility.strip_prefix("font-") {
        return Some(if FONT_WEIGHTS.contains(&value) {
            "font-weight"
        } else {
            "font-family"
        });
    }
    if utility.starts_with("transition-") {
        return Some("transition");
    }

    PREFIX_GROUPS
        .iter()
        .find(|(prefix, _)| utility.starts_with(prefix))
        .map(|(_, group)| *group)
}

fn overridden_groups(group: &str) -> &'static [&'static str] {
    match group {
        "inset" => &[
            "inset-x", "inset-y", "top", "right", "bottom", "left", "start", "end",
        ],
        "inset-x" => &["right", "left"],
        "inset-y" => &["top", "bottom"],
        "p" => &["px", "py", "pt", "pr", "pb", "pl", "ps", "pe"],
        "px" => &["pr", "pl", "ps", "pe"],
        "py" => &["pt", "pb"],
        "m" => &["mx", "my", "mt", "mr", "mb", "ml", "ms", "me"],
        "mx" => &["mr", "ml", "ms", "me"],
        "my" => &["mt", "mb"],
        "gap" => &["gap-x", "gap-y"],
        "size" => &["w", "h"],
        "overflow" => &["overflow-x", "overflow-y"],
        "flex" => &["basis", "grow", "shrink"],
        "scale" => &["scale-x", "scale-y"],
        "rounded" => &[
            "rounded-s",
            "rounded-e",
            "rounded-ss",
            "rounded-se",
            "rounded-es",
            "rounded-ee",
            "rounded-t",
            "rounded-r",
            "rounded-b",
            "rounded-l",
            "rounded-tl",
            "rounded-tr",
            "rounded-br",
            "rounded-bl",
        ],
        "rounded-s" => &["rounded-ss", "rounded-es"],
        "rounded-e" => &["rounded-se", "rounded-ee"],
        "rounded-t" => &["rounded-tl", "rounded-tr"],
        "rounded-r" => &["rounded-tr", "rounded-br"],
        "rounded-b" => &["rounded-br", "rounded-bl"],
        "rounded-l" => &["rounded-tl", "rounded-bl"],
        "border-width" => &[
            "border-w-x",
            "border-w-y",
            "border-w-t",
            "border-w-r",
            "border-w-b",
            "border-w-l",
        ],
        "border-w-x" => &["border-w-r", "border-w-l"],
        "border-w-y" => &["border-w-t", "border-w-b"],
        _ => &[],
    }
}

fn flex_group(value: &str) -> &'static str {
    match value {
        "row" | "row-reverse" | "col" | "col-reverse" => "flex-direction",
        "wrap" | "wrap-reverse" | "nowrap" => "flex-wrap",
        _ => "flex",
    }
}

const TEXT_ALIGN: &[&str] = &["left", "center", "right", "justify", "start", "end"];

const FONT_SIZES: &[&str] = &[
    "xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl", "9xl",
];

const FONT_WEIGHTS: &[&str] = &[
    "thin",
    "extralight",
    "light",
    "normal",
    "medium",
    "semibold",
    "bold",
    "extrabold",
    "black",
];

fn text_group(value: &str) -> Option<&'static str> {
    if TEXT_ALIGN.contains(&value) {
        return Some("text-align");
    }
    match value {
        "ellipsis" | "clip" => return Some("text-overflow"),
        "wrap" | "nowrap" | "balance" | "pretty" => return Some("text-wrap"),
        _ => {}
    }
    if is_color(value) {
        return Some("text-color");
    }
    let size = value.split_once('/').map_or(value, |(size, _)| size);
    if FONT_SIZES.contains(&size) || arbitrary_value(value).is_some() {
        return Some("font-size");
    }
    None
}

fn background_group(value: &str) -> Option<&'static str> {
    if is_color(value) {
        return Some("bg-color");
    }
    match value {
        "fixed" | "local" | "scroll" => Some("bg-attachment"),
        "auto" | "cover" | "contain" => Some("bg-size"),
        "repeat" | "no-repeat" | "repeat-x" | "repeat-y" | "repeat-round" | "repeat-space" => {
            Some("bg-repeat")
        }
        "bottom" | "center" | "left" | "left-bottom" | "left-top" | "right" | "right-bottom"
        | "right-top" | "top" => Some("bg-position"),
        "none" => Some("bg-image"),
        _ if value.starts_with("gradient-") => Some("bg-image"),
        _ => None,
    }
}

fn border_group(value: &str) -> Option<&'static str> {
    match value {
        "solid" | "dashed" | "dotted" | "double" | "hidden" | "none" => {
            return Some("border-style")
        }
        "collapse" | "separate" => return Some("border-collapse"),
        _ => {}
    }
    if is_color(value) {
        return Some("border-color");
    }
    let (side, width) = value.split_once('-').unwrap_or((value, ""));
    let side_group = match side {
        "x" => Some("border-w-x"),
        "y" => Some("border-w-y"),
        "t" => Some("border-w-t"),
        "r" => Some("border-w-r"),
        "b" => Some("border-w-b"),
        "l" => Some("border-w-l"),
        _ => None,
    };
    match side_group {
        Some(group) if width.is_empty() || is_width(width) => Some(group),
        Some(_) => None,
        None if is_width(value) => Some("border-width"),
        None => None,
    }
}

const RADII: &[&str] = &["none", "sm", "md", "lg", "xl", "2xl", "3xl", "full"];

fn rounded_group(value: &str) -> Option<&'static str> {
    if RADII.contains(&value) || arbitrary_value(value).is_some() {
        return Some("rounded");
    }
    let (side, radius) = value.split_once('-').unwrap_or((value, ""));
    if !radius.is_empty() && !RADII.contains(&radius) && arbitrary_value(radius).is_none() {
        return None;
    }
    match side {
        "s" => Some("rounded-s"),
        "e" => Some("rounded-e"),
        "t" => Some("rounded-t"),
        "r" => Some("rounded-r"),
        "b" => Some("rounded-b"),
        "l" => Some("rounded-l"),
        "ss" => Some("rounded-ss"),
        "se" => Some("rounded-se"),
        "es" => Some("rounded-es"),
        "ee" => Some("rounded-ee"),
        "tl" => Some("rounded-tl"),
        "tr" => Some("rounded-tr"),
        "br" => Some("rounded-br"),
        "bl" => Some("rounded-bl"),
        _ => None,
    }
}

fn object_group(value: &str) -> &'static str {
    match value {
        "contain" | "cover" | "fill" | "none" | "scale-down" => "object-fit",
        _ => "object-position",
    }
}

fn content_group(value: &str) -> Option<&'static str> {
    match value {
        "normal" | "center" | "start" | "end" | "between" | "around" | "evenly" | "baseline"
        | "stretch" => Some("align-content"),
        "none" => Some("content"),
        _ if arbitrary_value(value).is_some() => Some("content"),
        _ => None,
    }
}

const KEYWORD_COLORS: &[&str] = &["inherit", "current", "transparent", "black", "white"];

const PALETTE: &[&str] = &[
    "slate", "gray", "zinc", "neutral", "stone", "red", "orange", "amber", "yellow", "lime",
    "green", "emerald", "teal", "cyan", "sky", "blue", "indigo", "violet", "purple", "fuchsia",
    "pink", "rose",
];

fn is_color(value: &str) -> bool {
    if let Some(arbitrary) = arbitrary_value(value) {
        return arbitrary.starts_with('#')
            || arbitrary.starts_with("rgb")
            || arbitrary.starts_with("hsl")
            || arbitrary.starts_with("color:");
    }
    let color = value.split_once('/').map_or(value, |(color, _)| color);
    if KEYWORD_COLORS.contains(&color) {
        return true;
    }
    match color.rsplit_once('-') {
        Some((name, shade)) => PALETTE.contains(&name) && shade.parse::<u16>().is_ok(),
        None => false,
    }
}

fn is_width(value: &str) -> bool {
    value.parse::<u16>().is_ok() || arbitrary_value(value).is_some()
}

fn arbitrary_value(value: &str) -> Option<&str> {
    value.strip_prefix('[')?.strip_suffix(']')
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn skips_falsy_values_and_collapses_duplicates() {
        let merged = crate::cn!("a", false, None::<&str>, "b c", "b");

        assert_eq!(merged, "a c b");
        for class in ["a", "b", "c"] {
            assert_eq!(merged.split(' ').filter(|token| *token == class).count(), 1);
        }
    }

    #[test]
    fn empty_input_produces_empty_string() {
        assert_eq!(crate::cn!(), "");
        assert_eq!(crate::cn!(false, None::<String>), "");
    }

    #[test]
    fn accepts_owned_and_borrowed_strings() {
        let owned = String::from("px-2");
        let merged = crate::cn!(&owned, String::from("py-1"), Some("mt-2"));
        assert_eq!(merged, "px-2 py-1 mt-2");
    }

    #[test]
    fn later_utility_of_same_property_wins() {
        assert_eq!(crate::cn!("bg-black text-white", "bg-white"), "text-white bg-white");
        assert_eq!(crate::cn!("h-10 px-4", "h-12 px-6"), "h-12 px-6");
        assert_eq!(crate::cn!("rounded-lg", "rounded-none"), "rounded-none");
        assert_eq!(crate::cn!("transition-all", "transition-opacity"), "transition-opacity");
    }

    #[test]
    fn same_prefix_different_property_does_not_conflict() {
        assert_eq!(crate::cn!("text-white", "text-sm"), "text-white text-sm");
        assert_eq!(
            crate::cn!("focus:ring-2 focus:ring-offset-2", "focus:ring-zinc-500"),
            "focus:ring-2 focus:ring-offset-2 focus:ring-zinc-500"
        );
        assert_eq!(
            crate::cn!("border border-gray-300", "border-2"),
            "border-gray-300 border-2"
        );
        assert_eq!(
            crate::cn!("ring-offset-2", "ring-offset-white"),
            "ring-offset-2 ring-offset-white"
        );
    }

    #[test]
    fn broader_spacing_overrides_earlier_axis_spacing() {
        assert_eq!(crate::cn!("px-4 py-2", "p-3"), "p-3");
        assert_eq!(crate::cn!("p-3", "px-4"), "p-3 px-4");
        assert_eq!(crate::cn!("top-0 left-0", "inset-2"), "inset-2");
    }

    #[test]
    fn modifiers_scope_conflicts() {
        assert_eq!(
            crate::cn!("bg-black hover:bg-zinc-800", "hover:bg-blue-700"),
            "bg-black hover:bg-blue-700"
        );
        assert_eq!(
            crate::cn!("hover:focus:bg-red-500", "focus:hover:bg-red-600"),
            "focus:hover:bg-red-600"
        );
        assert_eq!(crate::cn!("!p-2", "p-4"), "!p-2 p-4");
    }

    #[test]
    fn negative_values_share_a_group() {
        assert_eq!(crate::cn!("-mt-2", "mt-4"), "mt-4");
    }

    #[test]
    fn arbitrary_values_are_classified() {
        assert_eq!(crate::cn!("text-[#fff] text-sm", "text-black"), "text-sm text-black");
        assert_eq!(crate::cn!("w-[13px]", "w-full"), "w-full");
        assert_eq!(crate::cn!("[mask-type:luminance]", "[mask-type:luminance]"), "[mask-type:luminance]");
    }

    #[test]
    fn opacity_and_pointer_utilities_override() {
        assert_eq!(crate::cn!("opacity-0", "opacity-100"), "opacity-100");
        assert_eq!(
            crate::cn!("pointer-events-none cursor-not-allowed", "pointer-events-auto"),
            "cursor-not-allowed pointer-events-auto"
        );
    }

    #[test]
    fn related_but_distinct_properties_do_not_conflict() {
        assert_eq!(crate::cn!("space-x-4", "space-x-reverse"), "space-x-4 space-x-reverse");
        assert_eq!(crate::cn!("space-y-reverse", "space-y-2"), "space-y-reverse space-y-2");
        assert_eq!(crate::cn!("object-cover", "object-center"), "object-cover object-center");
        assert_eq!(crate::cn!("content-center", "content-none"), "content-center content-none");
        assert_eq!(crate::cn!("rounded-lg", "rounded-ss-none"), "rounded-lg rounded-ss-none");
    }

    #[test]
    fn same_property_pairs_still_conflict() {
        assert_eq!(crate::cn!("object-cover", "object-contain"), "object-contain");
        assert_eq!(crate::cn!("object-top", "object-left-bottom"), "object-left-bottom");
        assert_eq!(crate::cn!("content-start", "content-between"), "content-between");
        assert_eq!(crate::cn!("content-none", "content-['x']"), "content-['x']");
        assert_eq!(crate::cn!("space-x-2", "space-x-6"), "space-x-6");
    }

    #[test]
    fn logical_corners_follow_their_sides() {
        assert_eq!(crate::cn!("rounded-ss-lg rounded-es-md", "rounded-s-none"), "rounded-s-none");
        assert_eq!(crate::cn!("rounded-se-lg", "rounded-e"), "rounded-e");
        assert_eq!(crate::cn!("rounded-ee-sm", "rounded-full"), "rounded-full");
        assert_eq!(crate::cn!("rounded-s-lg", "rounded-ss-none"), "rounded-s-lg rounded-ss-none");
    }

    #[test]
    fn unclassifiable_rounded_values_are_only_deduplicated() {
        assert_eq!(crate::cn!("rounded-lg", "rounded-x-weird"), "rounded-lg rounded-x-weird");
    }

    #[test]
    fn split_modifiers_ignores_colons_inside_brackets() {
        let (modifiers, base) = split_modifiers("[&:hover]:md:bg-[color:red]");
        assert_eq!(modifiers, vec!["[&:hover]", "md"]);
        assert_eq!(base, "bg-[color:red]");
    }
}
