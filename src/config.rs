use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::{
    animation::ease::Ease,
    foundation::core::ElementId,
    foundation::error::{ReelError, ReelResult},
};

/// Engine tuning loaded from JSON. Every field has a default, so `{}` is a valid config.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Delay between page mount and snap installation.
    pub settle_delay_ms: u64,
    /// Snap behavior.
    pub snap: SnapConfig,
    /// Viewports narrower than this use the compact section variants.
    pub mobile_breakpoint_px: f64,
    /// Quiet period after the last resize before the page is rebuilt.
    pub resize_debounce_ms: u64,
    /// Navigation overrides.
    pub navigation: NavigationConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            settle_delay_ms: 500,
            snap: SnapConfig::default(),
            mobile_breakpoint_px: 768.0,
            resize_debounce_ms: 500,
            navigation: NavigationConfig::default(),
        }
    }
}

/// Snap function and snap tween parameters.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SnapConfig {
    /// Band added on both sides of every pinned range, as a fraction of scrollable height.
    pub tolerance: f64,
    /// Bounds for the snap tween duration in seconds.
    pub duration: DurationRange,
    /// Easing of the snap tween.
    pub ease: Ease,
    /// Wait before the snap tween starts moving, in seconds.
    pub delay: f64,
    /// Unclamped snap duration per unit of scroll fraction travelled.
    pub seconds_per_unit: f64,
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self {
            tolerance: 0.02,
            duration: DurationRange::default(),
            ease: Ease::OutCubic,
            delay: 0.0,
            seconds_per_unit: 2.0,
        }
    }
}

/// Closed `[min, max]` interval in seconds.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DurationRange {
    /// Lower bound.
    pub min: f64,
    /// Upper bound.
    pub max: f64,
}

impl Default for DurationRange {
    fn default() -> Self {
        Self {
            min: 0.15,
            max: 0.35,
        }
    }
}

impl DurationRange {
    /// Clamp `secs` into the range. An inverted range collapses onto `min`.
    pub fn clamp(self, secs: f64) -> f64 {
        secs.min(self.max).max(self.min)
    }
}

/// Per-section navigation settings.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NavigationConfig {
    /// Reveal fraction override per pinned section id. Naming a section that does not pin fails
    /// when the page is built.
    pub reveal: BTreeMap<ElementId, f64>,
}

impl EngineConfig {
    /// Parse a config from a JSON reader. The result is validated.
    pub fn from_reader<R: std::io::Read>(r: R) -> ReelResult<Self> {
        let config: Self = serde_json::from_reader(r)
            .map_err(|e| ReelError::serde(format!("parse engine config JSON: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a config from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> ReelResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ReelError::validation(format!("open engine config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Settle delay in seconds.
    pub fn settle_delay_secs(&self) -> f64 {
        self.settle_delay_ms as f64 / 1000.0
    }

    /// Resize debounce in seconds.
    pub fn resize_debounce_secs(&self) -> f64 {
        self.resize_debounce_ms as f64 / 1000.0
    }

    /// Check value ranges.
    pub fn validate(&self) -> ReelResult<()> {
        let snap = &self.snap;
        if !(snap.tolerance >= 0.0 && snap.tolerance.is_finite()) {
            return Err(ReelError::validation(format!(
                "snap.tolerance must be finite and >= 0 (got {})",
                snap.tolerance
            )));
        }
        let d = snap.duration;
        if !(d.min >= 0.0 && d.min.is_finite() && d.max.is_finite()) || d.min > d.max {
            return Err(ReelError::validation(format!(
                "snap.duration needs 0 <= min <= max (got {} .. {})",
                d.min, d.max
            )));
        }
        if !(snap.delay >= 0.0 && snap.delay.is_finite()) {
            return Err(ReelError::validation(format!(
                "snap.delay must be finite and >= 0 (got {})",
                snap.delay
            )));
        }
        if !(snap.seconds_per_unit >= 0.0 && snap.seconds_per_unit.is_finite()) {
            return Err(ReelError::validation(format!(
                "snap.seconds_per_unit must be finite and >= 0 (got {})",
                snap.seconds_per_unit
            )));
        }
        if !(self.mobile_breakpoint_px > 0.0 && self.mobile_breakpoint_px.is_finite()) {
            return Err(ReelError::validation(format!(
                "mobile_breakpoint_px must be > 0 (got {})",
                self.mobile_breakpoint_px
            )));
        }
        for (section, &fraction) in &self.navigation.reveal {
            if !(0.0..=1.0).contains(&fraction) {
                return Err(ReelError::validation(format!(
                    "navigation.reveal['{section}'] must be in [0, 1] (got {fraction})"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
