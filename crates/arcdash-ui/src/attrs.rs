//! Named style attributes → [`StyleConfig`].
//!
//! Attribute names follow the markup the widget is declared with
//! (`filledProgressBarWidth`, `startAngle`, …). Values are strings:
//!
//! | kind      | accepted                                          |
//! |-----------|---------------------------------------------------|
//! | dimension | `12`, `12.5px`, `4dp` (scaled by the set density) |
//! | angle     | any finite float, in degrees                      |
//! | color     | `#RRGGBB`, `#AARRGGBB`                            |
//! | direction | `clockwise`, `counterclockwise`, `cw`, `ccw`, `1`, `-1` |
//! | boolean   | `true`, `false`                                   |

use std::fmt;

use arcdash_engine::paint::Color;

use crate::style::{DashSpec, Direction, RimSpec, StyleConfig};

pub const FILLED_LENGTH: &str = "filledProgressBarLength";
pub const FILLED_WIDTH: &str = "filledProgressBarWidth";
pub const FILLED_SPACING: &str = "filledProgressBarSpacing";
pub const FILLED_COLOR: &str = "filledProgressBarColor";
pub const EMPTY_LENGTH: &str = "emptyProgressBarLength";
pub const EMPTY_WIDTH: &str = "emptyProgressBarWidth";
pub const EMPTY_SPACING: &str = "emptyProgressBarSpacing";
pub const EMPTY_COLOR: &str = "emptyProgressBarColor";
pub const START_ANGLE: &str = "startAngle";
pub const END_ANGLE: &str = "endAngle";
pub const DIRECTION: &str = "direction";
pub const CUT_PADDING: &str = "cutPadding";
pub const BG_RIM_COLOR: &str = "bgRimColor";
pub const BG_RIM_WIDTH: &str = "bgRimWidth";

/// Every attribute name [`StyleConfig::from_attributes`] reads.
pub const KNOWN_ATTRIBUTES: [&str; 14] = [
    FILLED_LENGTH,
    FILLED_WIDTH,
    FILLED_SPACING,
    FILLED_COLOR,
    EMPTY_LENGTH,
    EMPTY_WIDTH,
    EMPTY_SPACING,
    EMPTY_COLOR,
    START_ANGLE,
    END_ANGLE,
    DIRECTION,
    CUT_PADDING,
    BG_RIM_COLOR,
    BG_RIM_WIDTH,
];

/// Maps alternate spellings onto canonical attribute names.
fn canonical(name: &str) -> &str {
    match name {
        "bg_rim_color" => BG_RIM_COLOR,
        "bg_rim_width" => BG_RIM_WIDTH,
        other => other,
    }
}

// ── error ─────────────────────────────────────────────────────────────────

/// A malformed attribute value.
#[derive(Debug, Clone, PartialEq)]
pub struct AttrError {
    pub name: String,
    pub value: String,
    pub reason: String,
}

impl AttrError {
    pub(crate) fn new(name: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self { name: name.into(), value: value.into(), reason: reason.into() }
    }
}

impl fmt::Display for AttrError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.name.is_empty() {
            write!(f, "invalid attribute {:?}: {}", self.value, self.reason)
        } else {
            write!(f, "invalid value {:?} for attribute `{}`: {}", self.value, self.name, self.reason)
        }
    }
}

impl std::error::Error for AttrError {}

// ── attribute set ─────────────────────────────────────────────────────────

/// Ordered name → value attribute map.
///
/// Setting a name twice keeps the last value.
#[derive(Debug, Clone)]
pub struct AttributeSet {
    entries: Vec<(String, String)>,
    /// Pixels per `dp` unit.
    density: f32,
}

impl Default for AttributeSet {
    fn default() -> Self {
        Self { entries: Vec::new(), density: 1.0 }
    }
}

impl AttributeSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_density(mut self, density: f32) -> Self {
        self.density = density;
        self
    }

    /// Builder form of [`set`](Self::set).
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| canonical(n) == canonical(&name)) {
            Some(entry) => *entry = (name, value),
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        let name = canonical(name);
        self.entries
            .iter()
            .find(|(n, _)| canonical(n) == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Splits `name=value` (whitespace around either side is trimmed).
    pub fn parse_pair(pair: &str) -> Result<(String, String), AttrError> {
        let Some((name, value)) = pair.split_once('=') else {
            return Err(AttrError::new("", pair, "expected NAME=VALUE"));
        };
        let name = name.trim();
        if name.is_empty() {
            return Err(AttrError::new("", pair, "missing attribute name"));
        }
        Ok((name.to_string(), value.trim().to_string()))
    }

    fn read<T>(
        &self,
        name: &str,
        default: T,
        parse: impl Fn(&str) -> Result<T, String>,
    ) -> Result<T, AttrError> {
        match self.get(name) {
            None => Ok(default),
            Some(raw) => parse(raw.trim()).map_err(|reason| AttrError::new(name, raw, reason)),
        }
    }

    fn dimension(&self, name: &str) -> Result<f32, AttrError> {
        let density = self.density;
        self.read(name, 0.0, |raw| parse_dimension(raw, density))
    }

    fn color(&self, name: &str) -> Result<Color, AttrError> {
        self.read(name, Color::transparent(), parse_color)
    }
}

// ── value parsers ─────────────────────────────────────────────────────────

fn parse_float(raw: &str) -> Result<f32, String> {
    let v: f32 = raw.parse().map_err(|_| "not a number".to_string())?;
    if !v.is_finite() {
        return Err("must be finite".into());
    }
    Ok(v)
}

fn parse_dimension(raw: &str, density: f32) -> Result<f32, String> {
    let (num, scale) = if let Some(n) = raw.strip_suffix("dp") {
        (n, density)
    } else if let Some(n) = raw.strip_suffix("px") {
        (n, 1.0)
    } else {
        (raw, 1.0)
    };
    let v = parse_float(num.trim())? * scale;
    if v < 0.0 {
        return Err("must not be negative".into());
    }
    Ok(v)
}

/// Parses `#RRGGBB` or `#AARRGGBB`.
pub fn parse_color(raw: &str) -> Result<Color, String> {
    let hex = raw
        .strip_prefix('#')
        .ok_or_else(|| "color must start with '#'".to_string())?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err("color contains non-hex digits".into());
    }
    let packed = match hex.len() {
        6 => 0xFF00_0000 | u32::from_str_radix(hex, 16).map_err(|e| e.to_string())?,
        8 => u32::from_str_radix(hex, 16).map_err(|e| e.to_string())?,
        n => return Err(format!("color must be #RRGGBB or #AARRGGBB, got {n} digits")),
    };
    Ok(Color::from_argb_u32(packed))
}

fn parse_direction(raw: &str) -> Result<Direction, String> {
    match raw.to_ascii_lowercase().as_str() {
        "clockwise" | "cw" => Ok(Direction::Clockwise),
        "counterclockwise" | "counter_clockwise" | "ccw" => Ok(Direction::CounterClockwise),
        other => other
            .parse::<i32>()
            .ok()
            .and_then(Direction::from_sign)
            .ok_or_else(|| "expected clockwise, counterclockwise, 1 or -1".to_string()),
    }
}

fn parse_bool(raw: &str) -> Result<bool, String> {
    match raw {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err("expected true or false".into()),
    }
}

// ── resolution ────────────────────────────────────────────────────────────

impl StyleConfig {
    /// Resolves a style from named attributes; absent attributes take their defaults.
    ///
    /// Unknown attribute names are logged and ignored.
    pub fn from_attributes(attrs: &AttributeSet) -> Result<Self, AttrError> {
        for (name, _) in attrs.iter() {
            if !KNOWN_ATTRIBUTES.contains(&canonical(name)) {
                log::warn!("ignoring unknown style attribute `{name}`");
            }
        }

        let defaults = StyleConfig::default();
        Ok(StyleConfig {
            filled: DashSpec {
                length: attrs.dimension(FILLED_LENGTH)?,
                width: attrs.dimension(FILLED_WIDTH)?,
                spacing: attrs.dimension(FILLED_SPACING)?,
                color: attrs.color(FILLED_COLOR)?,
            },
            empty: DashSpec {
                length: attrs.dimension(EMPTY_LENGTH)?,
                width: attrs.dimension(EMPTY_WIDTH)?,
                spacing: attrs.dimension(EMPTY_SPACING)?,
                color: attrs.color(EMPTY_COLOR)?,
            },
            rim: RimSpec {
                color: attrs.color(BG_RIM_COLOR)?,
                width: attrs.dimension(BG_RIM_WIDTH)?,
            },
            start_angle: attrs.read(START_ANGLE, defaults.start_angle, parse_float)?,
            end_angle: attrs.read(END_ANGLE, defaults.end_angle, parse_float)?,
            direction: attrs.read(DIRECTION, defaults.direction, parse_direction)?,
            cut_padding: attrs.read(CUT_PADDING, defaults.cut_padding, parse_bool)?,
        })
    }
}

impl TryFrom<&AttributeSet> for StyleConfig {
    type Error = AttrError;

    fn try_from(attrs: &AttributeSet) -> Result<Self, Self::Error> {
        StyleConfig::from_attributes(attrs)
    }
}
