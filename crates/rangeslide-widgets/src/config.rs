//! Validated configuration for the range bar.

use rangeslide_core::Color;
use serde::{Deserialize, Serialize};

/// Default number of selectable slots.
pub const DEFAULT_SLOT_COUNT: usize = 5;

/// Default track bar height as a fraction of the control height.
pub const DEFAULT_BAR_HEIGHT_PERCENT: f32 = 0.10;

/// Default slot marker radius as a fraction of the control height.
pub const DEFAULT_SLOT_RADIUS_PERCENT: f32 = 0.125;

/// Default thumb radius as a fraction of the control height.
pub const DEFAULT_THUMB_RADIUS_PERCENT: f32 = 0.25;

/// How the control negotiates its height when the host leaves it open.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum HeightPolicy {
    /// Use the built-in default height
    #[default]
    Auto,
    /// Fill whatever height the host offers
    Fill,
    /// Use a fixed height in pixels
    Fixed(f32),
}

/// Configuration for a [`RangeBar`](crate::RangeBar).
///
/// All percent values live in (0, 1] and are validated at the setter; invalid
/// values are rejected with [`ConfigError`], never silently clamped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderConfig {
    slot_count: usize,
    bar_height_percent: f32,
    slot_radius_percent: f32,
    thumb_radius_percent: f32,
    filled_color: Color,
    empty_color: Color,
    normal_text_color: Color,
    selected_text_color: Color,
    padding: f32,
    height_policy: HeightPolicy,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            slot_count: DEFAULT_SLOT_COUNT,
            bar_height_percent: DEFAULT_BAR_HEIGHT_PERCENT,
            slot_radius_percent: DEFAULT_SLOT_RADIUS_PERCENT,
            thumb_radius_percent: DEFAULT_THUMB_RADIUS_PERCENT,
            // #ffa500
            filled_color: Color::rgb(1.0, 165.0 / 255.0, 0.0),
            // #c3c3c3
            empty_color: Color::rgb(195.0 / 255.0, 195.0 / 255.0, 195.0 / 255.0),
            normal_text_color: Color::GRAY,
            selected_text_color: Color::BLACK,
            padding: 0.0,
            height_policy: HeightPolicy::Auto,
        }
    }
}

impl SliderConfig {
    /// Create a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of selectable slots.
    #[must_use]
    pub const fn slot_count(&self) -> usize {
        self.slot_count
    }

    /// Set the number of selectable slots (must be at least 2).
    pub fn set_slot_count(&mut self, count: usize) -> Result<(), ConfigError> {
        if count < 2 {
            return Err(ConfigError::SlotCountTooSmall { given: count });
        }
        self.slot_count = count;
        Ok(())
    }

    /// Track bar height as a fraction of the control height.
    #[must_use]
    pub const fn bar_height_percent(&self) -> f32 {
        self.bar_height_percent
    }

    /// Set the track bar height fraction (must be in (0, 1]).
    pub fn set_bar_height_percent(&mut self, percent: f32) -> Result<(), ConfigError> {
        self.bar_height_percent = check_percent("bar height", percent)?;
        Ok(())
    }

    /// Slot marker radius as a fraction of the control height.
    #[must_use]
    pub const fn slot_radius_percent(&self) -> f32 {
        self.slot_radius_percent
    }

    /// Set the slot marker radius fraction (must be in (0, 1]).
    pub fn set_slot_radius_percent(&mut self, percent: f32) -> Result<(), ConfigError> {
        self.slot_radius_percent = check_percent("slot radius", percent)?;
        Ok(())
    }

    /// Thumb radius as a fraction of the control height.
    #[must_use]
    pub const fn thumb_radius_percent(&self) -> f32 {
        self.thumb_radius_percent
    }

    /// Set the thumb radius fraction (must be in (0, 1]).
    pub fn set_thumb_radius_percent(&mut self, percent: f32) -> Result<(), ConfigError> {
        self.thumb_radius_percent = check_percent("thumb radius", percent)?;
        Ok(())
    }

    /// Color of the filled track, filled slots, and thumb.
    #[must_use]
    pub const fn filled_color(&self) -> Color {
        self.filled_color
    }

    /// Set the filled color.
    pub fn set_filled_color(&mut self, color: Color) {
        self.filled_color = color;
    }

    /// Color of the empty track and unfilled slots.
    #[must_use]
    pub const fn empty_color(&self) -> Color {
        self.empty_color
    }

    /// Set the empty color.
    pub fn set_empty_color(&mut self, color: Color) {
        self.empty_color = color;
    }

    /// Label color for non-selected slots.
    #[must_use]
    pub const fn normal_text_color(&self) -> Color {
        self.normal_text_color
    }

    /// Set the label color for non-selected slots.
    pub fn set_normal_text_color(&mut self, color: Color) {
        self.normal_text_color = color;
    }

    /// Label color for the selected slot.
    #[must_use]
    pub const fn selected_text_color(&self) -> Color {
        self.selected_text_color
    }

    /// Set the label color for the selected slot.
    pub fn set_selected_text_color(&mut self, color: Color) {
        self.selected_text_color = color;
    }

    /// Padding between the control bounds and the track area.
    #[must_use]
    pub const fn padding(&self) -> f32 {
        self.padding
    }

    /// Set the padding.
    pub fn set_padding(&mut self, padding: f32) {
        self.padding = padding;
    }

    /// Height negotiation policy.
    #[must_use]
    pub const fn height_policy(&self) -> HeightPolicy {
        self.height_policy
    }

    /// Set the height negotiation policy.
    pub fn set_height_policy(&mut self, policy: HeightPolicy) {
        self.height_policy = policy;
    }
}

fn check_percent(name: &'static str, value: f32) -> Result<f32, ConfigError> {
    if value > 0.0 && value <= 1.0 {
        Ok(value)
    } else {
        Err(ConfigError::PercentOutOfRange { name, given: value })
    }
}

/// Invalid configuration value, raised synchronously at the setter boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Slot count below the minimum of 2
    SlotCountTooSmall {
        /// The rejected value
        given: usize,
    },
    /// A percent parameter outside (0, 1]
    PercentOutOfRange {
        /// Which parameter was rejected
        name: &'static str,
        /// The rejected value
        given: f32,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SlotCountTooSmall { given } => {
                write!(f, "slot count must be >= 2 (got {given})")
            }
            Self::PercentOutOfRange { name, given } => {
                write!(f, "{name} percent must be in (0, 1] (got {given})")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = SliderConfig::new();
        assert_eq!(config.slot_count(), 5);
        assert_eq!(config.bar_height_percent(), 0.10);
        assert_eq!(config.slot_radius_percent(), 0.125);
        assert_eq!(config.thumb_radius_percent(), 0.25);
        assert_eq!(config.filled_color().to_hex(), "#ffa500");
        assert_eq!(config.empty_color().to_hex(), "#c3c3c3");
        assert_eq!(config.padding(), 0.0);
        assert_eq!(config.height_policy(), HeightPolicy::Auto);
    }

    #[test]
    fn test_slot_count_rejects_below_two() {
        let mut config = SliderConfig::new();
        assert_eq!(
            config.set_slot_count(1),
            Err(ConfigError::SlotCountTooSmall { given: 1 })
        );
        assert_eq!(
            config.set_slot_count(0),
            Err(ConfigError::SlotCountTooSmall { given: 0 })
        );
        // State unchanged after a rejected set
        assert_eq!(config.slot_count(), 5);

        assert!(config.set_slot_count(2).is_ok());
        assert_eq!(config.slot_count(), 2);
    }

    #[test]
    fn test_percent_bounds() {
        let mut config = SliderConfig::new();
        assert!(config.set_bar_height_percent(1.0).is_ok());
        assert!(config.set_bar_height_percent(0.001).is_ok());

        assert!(config.set_bar_height_percent(0.0).is_err());
        assert!(config.set_bar_height_percent(-0.5).is_err());
        assert!(config.set_bar_height_percent(1.5).is_err());
        assert!(config.set_slot_radius_percent(0.0).is_err());
        assert!(config.set_thumb_radius_percent(2.0).is_err());

        // Last accepted value is retained
        assert_eq!(config.bar_height_percent(), 0.001);
    }

    #[test]
    fn test_percent_error_names_parameter() {
        let mut config = SliderConfig::new();
        let err = config.set_thumb_radius_percent(0.0).unwrap_err();
        assert_eq!(
            err,
            ConfigError::PercentOutOfRange {
                name: "thumb radius",
                given: 0.0
            }
        );
        assert!(err.to_string().contains("thumb radius"));
    }

    #[test]
    fn test_color_setters() {
        let mut config = SliderConfig::new();
        config.set_filled_color(Color::BLACK);
        config.set_empty_color(Color::WHITE);
        assert_eq!(config.filled_color(), Color::BLACK);
        assert_eq!(config.empty_color(), Color::WHITE);
    }
}
