//! Widget configuration.
//!
//! Every tunable the widgets use (fonts, paddings, margins, colors, animation
//! timing, filter behavior) lives in a [`WidgetConfig`]. The defaults
//! reproduce the stock look; hosts can override any subset from TOML:
//!
//! ```
//! use floatsearch::config::WidgetConfig;
//!
//! let config = WidgetConfig::from_toml_str(r##"
//!     [label]
//!     active_color = "#FF9500"
//!     show_duration_ms = 150
//!
//!     [dropdown]
//!     row_height = 36.0
//!     direction = "up"
//! "##).unwrap();
//!
//! assert_eq!(config.label.show_duration_ms, 150);
//! assert_eq!(config.label.hide_duration_ms, 300);
//! assert_eq!(config.dropdown.row_height, 36.0);
//! ```

use std::path::Path;
use std::time::Duration;

use floatsearch_core::targets;
use serde::{Deserialize, Serialize};

use crate::animation::Easing;
use crate::error::{Error, Result};
use crate::types::{Color, FontMetrics};
use crate::widget::filter::CaseSensitivity;
use crate::widget::filterable_dropdown::DropDirection;

/// Configuration for all floatsearch widgets.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Floating label input.
    pub label: FloatingLabelConfig,
    /// Search bar chrome.
    pub search_bar: SearchBarConfig,
    /// Dropdown list and filtering.
    pub dropdown: DropdownConfig,
}

impl WidgetConfig {
    /// Parse and validate a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let config = Self::from_toml_str(&source)?;
        tracing::debug!(target: targets::CONFIG, path = %path.display(), "loaded widget config");
        Ok(config)
    }

    /// Serialize to a TOML document.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check value ranges that serde cannot express.
    pub fn validate(&self) -> Result<()> {
        positive("label.font_size", self.label.font_size)?;
        positive("label.text_font_size", self.label.text_font_size)?;
        non_negative("label.placeholder_y_padding", self.label.placeholder_y_padding)?;
        non_negative("label.max_inset_margin", self.label.max_inset_margin)?;
        positive("search_bar.height", self.search_bar.height)?;
        non_negative("search_bar.x_margin", self.search_bar.x_margin)?;
        non_negative("search_bar.y_margin", self.search_bar.y_margin)?;
        positive("search_bar.icon_size", self.search_bar.icon_size)?;
        positive("dropdown.search_bar_height", self.dropdown.search_bar_height)?;
        positive("dropdown.row_height", self.dropdown.row_height)?;
        positive("dropdown.row_font_size", self.dropdown.row_font_size)?;
        non_negative("dropdown.x_margin", self.dropdown.x_margin)?;
        non_negative("dropdown.y_margin", self.dropdown.y_margin)?;
        non_negative("dropdown.border_width", self.dropdown.border_width)?;
        Ok(())
    }
}

fn positive(field: &str, value: f32) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(Error::invalid_value(field, format!("must be greater than zero, got {value}")))
    }
}

fn non_negative(field: &str, value: f32) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(Error::invalid_value(field, format!("must not be negative, got {value}")))
    }
}

/// Floating label appearance and animation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FloatingLabelConfig {
    /// Point size of the floating label font.
    pub font_size: f32,
    /// Point size of the input text font.
    pub text_font_size: f32,
    /// Label color when the input is not being edited.
    #[serde(with = "hex_color")]
    pub inactive_color: Color,
    /// Label color while editing non-empty text.
    #[serde(with = "hex_color")]
    pub active_color: Color,
    /// Keep the floating label inside the input bounds instead of above them.
    pub bound_to_parent: bool,
    /// Animate label transitions even when the input does not have focus.
    pub animate_even_if_unfocused: bool,
    /// Extra space between the floating label and the text below it.
    pub placeholder_y_padding: f32,
    /// Extra drop applied to the collapsed label position.
    pub y_padding: f32,
    /// Duration of the collapsed-to-floating animation.
    pub show_duration_ms: u64,
    /// Duration of the floating-to-collapsed animation.
    pub hide_duration_ms: u64,
    /// Animation curve.
    pub easing: Easing,
    /// Horizontal padding of the text area inside the input.
    pub text_inset_x: f32,
    /// Side length of the trailing clear button.
    pub clear_button_size: f32,
    /// Space always reserved below the text line when insetting.
    pub max_inset_margin: f32,
}

impl Default for FloatingLabelConfig {
    fn default() -> Self {
        Self {
            font_size: 12.0,
            text_font_size: 15.0,
            inactive_color: Color::GRAY,
            active_color: Color::from_rgb8(0, 122, 255),
            bound_to_parent: false,
            animate_even_if_unfocused: false,
            placeholder_y_padding: 0.0,
            y_padding: 0.0,
            show_duration_ms: 300,
            hide_duration_ms: 300,
            easing: Easing::EaseOut,
            text_inset_x: 0.0,
            clear_button_size: 16.0,
            max_inset_margin: 4.0,
        }
    }
}

impl FloatingLabelConfig {
    /// Metrics for the label font.
    pub fn label_metrics(&self) -> FontMetrics {
        FontMetrics::system(self.font_size)
    }

    /// Metrics for the input text font.
    pub fn text_metrics(&self) -> FontMetrics {
        FontMetrics::system(self.text_font_size)
    }

    /// Show animation duration.
    pub fn show_duration(&self) -> Duration {
        Duration::from_millis(self.show_duration_ms)
    }

    /// Hide animation duration.
    pub fn hide_duration(&self) -> Duration {
        Duration::from_millis(self.hide_duration_ms)
    }
}

/// Search bar geometry and chrome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchBarConfig {
    /// Fixed height of the search bar.
    pub height: f32,
    /// Horizontal margin around the input and cancel icon.
    pub x_margin: f32,
    /// Vertical margin above the input and below the cancel icon.
    pub y_margin: f32,
    /// Side length of the cancel icon.
    pub icon_size: f32,
    /// Input text color.
    #[serde(with = "hex_color")]
    pub text_color: Color,
    /// Color of the one-point underline below the input.
    #[serde(with = "hex_color")]
    pub underline_color: Color,
    /// Drop input focus after the return key is handled.
    pub resign_on_submit: bool,
}

impl Default for SearchBarConfig {
    fn default() -> Self {
        Self {
            height: 50.0,
            x_margin: 10.0,
            y_margin: 5.0,
            icon_size: 16.0,
            text_color: Color::BLACK,
            underline_color: Color::from_rgb8(81, 160, 183),
            resign_on_submit: true,
        }
    }
}

/// Dropdown list layout and filter behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DropdownConfig {
    /// Height of the embedded search bar.
    pub search_bar_height: f32,
    /// Horizontal margin around the search bar and list.
    pub x_margin: f32,
    /// Vertical margin between the search bar and list.
    pub y_margin: f32,
    /// Height of one list row.
    pub row_height: f32,
    /// Point size of row text.
    pub row_font_size: f32,
    /// List border color.
    #[serde(with = "hex_color")]
    pub border_color: Color,
    /// List border width.
    pub border_width: f32,
    /// Hide the list after a row is selected.
    pub hides_on_selection: bool,
    /// Filter candidates internally. When false the host pushes pre-filtered items.
    pub should_handle_filter: bool,
    /// Which side of the search bar the list opens on.
    pub direction: DropDirection,
    /// Case handling of the substring match.
    pub case_sensitivity: CaseSensitivity,
}

impl Default for DropdownConfig {
    fn default() -> Self {
        Self {
            search_bar_height: 50.0,
            x_margin: 8.0,
            y_margin: 5.0,
            row_height: 44.0,
            row_font_size: 15.0,
            border_color: Color::LIGHT_GRAY,
            border_width: 1.0,
            hides_on_selection: true,
            should_handle_filter: true,
            direction: DropDirection::Down,
            case_sensitivity: CaseSensitivity::CaseInsensitive,
        }
    }
}

/// Serde adapter storing [`Color`] as a `#RRGGBB[AA]` string.
mod hex_color {
    use serde::{de, Deserialize, Deserializer, Serializer};

    use crate::types::Color;

    pub fn serialize<S: Serializer>(color: &Color, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&color.to_hex())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Color, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Color::from_hex(&raw)
            .ok_or_else(|| de::Error::custom(format!("invalid hex color '{raw}'")))
    }
}
