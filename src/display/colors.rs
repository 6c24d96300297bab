//! Hex color resolution and per-role color assignment

use crate::config::ColorConfig;
use crate::domain::EntryType;
use crossterm::style::{Color, ContentStyle, Stylize};
use std::collections::HashMap;

const HUE_THRESHOLD: u8 = 128;
const BOLD_THRESHOLD: u8 = 192;

/// The discrete terminal hues a hex color can map to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hue {
    White,
    Red,
    Green,
    Blue,
    Yellow,
    Magenta,
    Cyan,
}

impl Hue {
    /// Standard (non-bright) ANSI foreground for this hue
    pub fn to_color(self) -> Color {
        match self {
            Hue::White => Color::Grey,
            Hue::Red => Color::DarkRed,
            Hue::Green => Color::DarkGreen,
            Hue::Blue => Color::DarkBlue,
            Hue::Yellow => Color::DarkYellow,
            Hue::Magenta => Color::DarkMagenta,
            Hue::Cyan => Color::DarkCyan,
        }
    }
}

/// A resolved terminal color: one hue plus an optional bold attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorAttributes {
    pub hue: Hue,
    pub bold: bool,
}

impl ColorAttributes {
    /// Resolves a `#RRGGBB` string by thresholding each channel.
    ///
    /// Never fails: digits that cannot be parsed count as zero.
    pub fn resolve(hex: &str) -> Self {
        let [r, g, b] = parse_hex_channels(hex);
        let (hi_r, hi_g, hi_b) = (r > HUE_THRESHOLD, g > HUE_THRESHOLD, b > HUE_THRESHOLD);

        let hue = match (hi_r, hi_g, hi_b) {
            (true, true, true) => Hue::White,
            (true, false, false) => Hue::Red,
            (false, true, false) => Hue::Green,
            (false, false, true) => Hue::Blue,
            (true, true, false) => Hue::Yellow,
            (true, false, true) => Hue::Magenta,
            (false, true, true) => Hue::Cyan,
            (false, false, false) => Hue::White,
        };

        let bold = r > BOLD_THRESHOLD || g > BOLD_THRESHOLD || b > BOLD_THRESHOLD;

        ColorAttributes { hue, bold }
    }

    pub fn style(&self) -> ContentStyle {
        let style = ContentStyle::new().with(self.hue.to_color());
        if self.bold {
            style.bold()
        } else {
            style
        }
    }

    /// Wraps `text` in the ANSI sequences for this color
    pub fn paint(&self, text: &str) -> String {
        self.style().apply(text).to_string()
    }
}

/// Reads up to three channels of at most two hex digits each.
///
/// Scanning stops at the first channel with no hex digit; it and the rest stay zero.
fn parse_hex_channels(hex: &str) -> [u8; 3] {
    let digits = hex.strip_prefix('#').unwrap_or(hex).as_bytes();
    let mut channels = [0u8; 3];
    let mut pos = 0;

    for channel in channels.iter_mut() {
        let mut value: u8 = 0;
        let mut read = 0;
        while read < 2 {
            let Some(digit) = digits.get(pos).and_then(|&c| (c as char).to_digit(16)) else {
                break;
            };
            value = value * 16 + digit as u8;
            pos += 1;
            read += 1;
        }
        if read == 0 {
            break;
        }
        *channel = value;
    }

    channels
}

/// Colors for every rendering role, resolved once from the user config
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorAssignment {
    pub box_color: ColorAttributes,
    pub title: ColorAttributes,
    pub default: ColorAttributes,
    pub empty: ColorAttributes,
    pub directory: ColorAttributes,
    pub image: ColorAttributes,
    pub video: ColorAttributes,
    /// Overrides keyed by type tag
    pub custom: HashMap<String, ColorAttributes>,
}

impl ColorAssignment {
    pub fn from_config(colors: &ColorConfig) -> Self {
        let custom = colors
            .types
            .custom
            .iter()
            .map(|(tag, hex)| (tag.clone(), ColorAttributes::resolve(hex)))
            .collect();

        ColorAssignment {
            box_color: ColorAttributes::resolve(&colors.box_color),
            title: ColorAttributes::resolve(&colors.title),
            default: ColorAttributes::resolve(&colors.default),
            empty: ColorAttributes::resolve(&colors.empty),
            directory: ColorAttributes::resolve(&colors.types.directory),
            image: ColorAttributes::resolve(&colors.types.image),
            video: ColorAttributes::resolve(&colors.types.video),
            custom,
        }
    }

    /// Color for an entry of the given type.
    ///
    /// A custom override registered under the type's tag wins over the built-in role.
    pub fn color_for(&self, entry_type: EntryType) -> ColorAttributes {
        if let Some(custom) = self.custom.get(entry_type.tag()) {
            return *custom;
        }

        match entry_type {
            EntryType::Directory => self.directory,
            EntryType::Image => self.image,
            EntryType::Video => self.video,
            EntryType::File => self.default,
        }
    }
}

impl Default for ColorAssignment {
    fn default() -> Self {
        Self::from_config(&ColorConfig::default())
    }
}
