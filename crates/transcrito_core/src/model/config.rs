//! Display configuration shared by every output sink.
//!
//! # Responsibility
//! - Define the option set that drives screen, text and document rendering.
//! - Validate and clamp numeric ranges.
//!
//! # Invariants
//! - `DisplayConfig` is a plain value; rendering never mutates it.
//! - `font_size` lies in `12..=28` and `line_height` in `1.2..=2.5` after
//!   [`DisplayConfig::normalized`].
//! - Serialized field names are camelCase (`fontSize`, `verseNumberFormat`).

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

pub const MIN_FONT_SIZE: u32 = 12;
pub const MAX_FONT_SIZE: u32 = 28;
pub const MIN_LINE_HEIGHT: f32 = 1.2;
pub const MAX_LINE_HEIGHT: f32 = 2.5;

/// Config validation and option-parsing errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    FontSizeOutOfRange(u32),
    LineHeightOutOfRange(f32),
    UnknownOption {
        field: &'static str,
        value: String,
    },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FontSizeOutOfRange(value) => write!(
                f,
                "font size {value} outside {MIN_FONT_SIZE}..={MAX_FONT_SIZE}"
            ),
            Self::LineHeightOutOfRange(value) => write!(
                f,
                "line height {value} outside {MIN_LINE_HEIGHT}..={MAX_LINE_HEIGHT}"
            ),
            Self::UnknownOption { field, value } => {
                write!(f, "unknown {field} option `{value}`")
            }
        }
    }
}

impl Error for ConfigError {}

macro_rules! option_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $field:literal {
            $($(#[$vmeta:meta])* $variant:ident => $text:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $text),+
                }
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ConfigError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                match value.trim().to_ascii_lowercase().as_str() {
                    $($text => Ok(Self::$variant),)+
                    other => Err(ConfigError::UnknownOption {
                        field: $field,
                        value: other.to_string(),
                    }),
                }
            }
        }
    };
}

option_enum! {
    /// Horizontal alignment of verse text.
    TextAlign, "text_align" {
        #[default]
        Left => "left",
        Center => "center",
        Justify => "justify",
    }
}

option_enum! {
    /// How each verse is introduced.
    VerseNumberFormat, "verse_number_format" {
        /// Full `Book C:V` reference.
        #[default]
        Full => "full",
        /// Verse number only.
        Number => "number",
        /// No marker.
        None => "none",
    }
}

option_enum! {
    /// How multiple translations are arranged.
    Layout, "layout" {
        /// One independent block per translation.
        #[default]
        Columns => "columns",
        /// One shared row per verse index.
        Parallel => "parallel",
    }
}

option_enum! {
    /// Whether verses break into blocks or run together.
    TextFlow, "text_flow" {
        #[default]
        Paragraph => "paragraph",
        Continuous => "continuous",
    }
}

option_enum! {
    /// Typography source for the paginated document.
    PdfMode, "pdf_mode" {
        /// Compact fixed typography.
        #[default]
        Optimized => "optimized",
        /// Typography taken from the live display config.
        Custom => "custom",
    }
}

/// Display options shared by every output sink.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DisplayConfig {
    pub font_size: u32,
    pub line_height: f32,
    pub text_align: TextAlign,
    pub verse_number_format: VerseNumberFormat,
    pub layout: Layout,
    pub text_flow: TextFlow,
    pub pdf_mode: PdfMode,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            font_size: 16,
            line_height: 1.6,
            text_align: TextAlign::default(),
            verse_number_format: VerseNumberFormat::default(),
            layout: Layout::default(),
            text_flow: TextFlow::default(),
            pdf_mode: PdfMode::default(),
        }
    }
}

impl DisplayConfig {
    /// Checks numeric ranges without modifying the value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_FONT_SIZE..=MAX_FONT_SIZE).contains(&self.font_size) {
            return Err(ConfigError::FontSizeOutOfRange(self.font_size));
        }
        if !(MIN_LINE_HEIGHT..=MAX_LINE_HEIGHT).contains(&self.line_height) {
            return Err(ConfigError::LineHeightOutOfRange(self.line_height));
        }
        Ok(())
    }

    /// Returns a copy with numeric fields clamped into range.
    ///
    /// A non-finite line height falls back to the default.
    pub fn normalized(self) -> Self {
        let line_height = if self.line_height.is_finite() {
            self.line_height.clamp(MIN_LINE_HEIGHT, MAX_LINE_HEIGHT)
        } else {
            Self::default().line_height
        };
        Self {
            font_size: self.font_size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE),
            line_height,
            ..self
        }
    }

    /// Decodes a config from JSON, filling missing fields with defaults.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, DisplayConfig, Layout, TextAlign, VerseNumberFormat};

    #[test]
    fn default_config_is_valid() {
        DisplayConfig::default().validate().unwrap();
    }

    #[test]
    fn validate_rejects_out_of_range_values() {
        let config = DisplayConfig {
            font_size: 40,
            ..DisplayConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::FontSizeOutOfRange(40)));

        let config = DisplayConfig {
            line_height: 3.0,
            ..DisplayConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::LineHeightOutOfRange(3.0))
        );
    }

    #[test]
    fn normalized_clamps_into_range() {
        let config = DisplayConfig {
            font_size: 4,
            line_height: f32::NAN,
            ..DisplayConfig::default()
        }
        .normalized();
        assert_eq!(config.font_size, 12);
        assert_eq!(config.line_height, 1.6);
        config.validate().unwrap();
    }

    #[test]
    fn options_parse_case_insensitively() {
        assert_eq!(" Justify ".parse::<TextAlign>(), Ok(TextAlign::Justify));
        assert_eq!("NONE".parse::<VerseNumberFormat>(), Ok(VerseNumberFormat::None));
        let err = "grid".parse::<Layout>().unwrap_err();
        assert_eq!(err.to_string(), "unknown layout option `grid`");
    }

    #[test]
    fn json_uses_camel_case_fields_and_defaults() {
        let config = DisplayConfig::from_json_str(
            r#"{"fontSize": 20, "verseNumberFormat": "number", "layout": "parallel"}"#,
        )
        .unwrap();
        assert_eq!(config.font_size, 20);
        assert_eq!(config.verse_number_format, VerseNumberFormat::Number);
        assert_eq!(config.layout, Layout::Parallel);
        assert_eq!(config.line_height, 1.6);
    }
}
