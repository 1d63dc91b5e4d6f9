use std::fmt;

use crate::foundation::error::{ReelError, ReelResult};

/// Identifier of a page element (a section or something inside one).
///
/// Child elements are conventionally named `<section>.<part>`, see [`ElementId::child`].
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct ElementId(String);

impl ElementId {
    /// Create an id from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw id.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Id of a part nested under this element, e.g. `hero` + `tile` = `hero.tile`.
    pub fn child(&self, part: impl fmt::Display) -> Self {
        Self(format!("{}.{part}", self.0))
    }

    /// Return `true` when `self` is `section` or nested under it.
    pub fn is_within(&self, section: &ElementId) -> bool {
        self.0 == section.0
            || (self.0.len() > section.0.len()
                && self.0.starts_with(section.0.as_str())
                && self.0.as_bytes()[section.0.len()] == b'.')
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ElementId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ElementId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Visible viewport size in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Viewport {
    /// Create a validated viewport with finite, positive dimensions.
    pub fn new(width: f64, height: f64) -> ReelResult<Self> {
        if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
            return Err(ReelError::validation(format!(
                "viewport must be finite and > 0 (got {width}x{height})"
            )));
        }
        Ok(Self { width, height })
    }

    /// Return `true` when the viewport is narrower than `breakpoint_px`.
    pub fn is_narrower_than(self, breakpoint_px: f64) -> bool {
        self.width < breakpoint_px
    }
}

/// A length that is resolved against the viewport when a timeline is built.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Length {
    /// Plain number (pixels for positions, unitless for opacity and scale).
    Px(f64),
    /// Percent of viewport width.
    Vw(f64),
    /// Percent of viewport height.
    Vh(f64),
}

impl Length {
    /// Resolve to a plain number for `viewport`.
    pub fn resolve(self, viewport: &Viewport) -> f64 {
        match self {
            Self::Px(v) => v,
            Self::Vw(v) => v * viewport.width / 100.0,
            Self::Vh(v) => v * viewport.height / 100.0,
        }
    }
}

impl From<f64> for Length {
    fn from(value: f64) -> Self {
        Self::Px(value)
    }
}

/// Shorthand for [`Length::Vw`].
pub fn vw(v: f64) -> Length {
    Length::Vw(v)
}

/// Shorthand for [`Length::Vh`].
pub fn vh(v: f64) -> Length {
    Length::Vh(v)
}

/// Shorthand for [`Length::Px`].
pub fn px(v: f64) -> Length {
    Length::Px(v)
}

/// Clamp `v` into `[0, 1]`, mapping NaN to `0`.
pub(crate) fn clamp_unit(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
