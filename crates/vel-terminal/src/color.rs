//! Colors and terminal color-mode down-mapping.

use crossterm::style::Color as CrosstermColor;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// 8-bit RGB color. `a == 0` means "terminal default".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn is_transparent(self) -> bool {
        self.a == 0
    }

    /// Parse `#rrggbb`, `rrggbb` or `#rrggbbaa`.
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !matches!(digits.len(), 6 | 8) || !digits.is_ascii() {
            return Err(ColorParseError::InvalidLength(hex.to_string()));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| ColorParseError::InvalidHex(hex.to_string()))
        };
        let a = if digits.len() == 8 { channel(6)? } else { 255 };
        Ok(Self::rgba(channel(0)?, channel(2)?, channel(4)?, a))
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Blend toward `other` by `t` in `[0, 1]`.
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (f32::from(a) + (f32::from(b) - f32::from(a)) * t).round() as u8;
        Self::rgba(
            mix(self.r, other.r),
            mix(self.g, other.g),
            mix(self.b, other.b),
            self.a,
        )
    }
}

/// Malformed hex color.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("invalid color length: {0}")]
    InvalidLength(String),
    #[error("invalid hex digits: {0}")]
    InvalidHex(String),
}

/// Terminal color capability mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ColorMode {
    /// 24-bit true color (COLORTERM=truecolor or 24bit).
    #[default]
    #[serde(rename = "truecolor")]
    TrueColor,
    #[serde(rename = "256")]
    Color256,
    #[serde(rename = "16")]
    Color16,
    /// No color; only attributes survive.
    #[serde(rename = "mono")]
    Mono,
}

impl ColorMode {
    /// Auto-detect terminal color capabilities.
    pub fn detect() -> Self {
        Self::detect_with_env(
            std::env::var("COLORTERM").ok().as_deref(),
            std::env::var("TERM").ok().as_deref(),
        )
    }

    /// Detect from `COLORTERM` and `TERM` values.
    pub fn detect_with_env(colorterm: Option<&str>, term: Option<&str>) -> Self {
        if matches!(colorterm, Some("truecolor" | "24bit")) {
            return Self::TrueColor;
        }

        match term {
            Some(t) if t.contains("256color") => Self::Color256,
            Some(t) if t.contains("color") || t.contains("xterm") => Self::Color16,
            Some("dumb") | None => Self::Mono,
            _ => Self::Color16,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TrueColor => "truecolor",
            Self::Color256 => "256",
            Self::Color16 => "16",
            Self::Mono => "mono",
        }
    }

    /// Map a color for this mode. Transparent colors become `Reset` so the
    /// terminal's own background shows through.
    pub fn to_crossterm(self, color: Color) -> CrosstermColor {
        if color.is_transparent() {
            return CrosstermColor::Reset;
        }

        let Color { r, g, b, .. } = color;
        match self {
            Self::TrueColor => CrosstermColor::Rgb { r, g, b },
            Self::Color256 => CrosstermColor::AnsiValue(rgb_to_256(r, g, b)),
            Self::Color16 => rgb_to_16(r, g, b),
            Self::Mono => CrosstermColor::Reset,
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "truecolor" | "24bit" => Ok(Self::TrueColor),
            "256" => Ok(Self::Color256),
            "16" => Ok(Self::Color16),
            "mono" | "none" => Ok(Self::Mono),
            other => Err(format!(
                "unknown color mode `{other}` (expected truecolor, 256, 16 or mono)"
            )),
        }
    }
}

fn rgb_to_256(r: u8, g: u8, b: u8) -> u8 {
    if r == g && g == b {
        if r < 8 {
            return 16;
        }
        if r > 248 {
            return 231;
        }
        // Grayscale ramp 232..=255.
        return 232 + ((r - 8) / 10).min(23);
    }

    // 6x6x6 cube 16..=231.
    let idx = |c: u8| (u16::from(c) * 5 / 255) as u8;
    16 + 36 * idx(r) + 6 * idx(g) + idx(b)
}

fn rgb_to_16(r: u8, g: u8, b: u8) -> CrosstermColor {
    let luminance = (u32::from(r) * 299 + u32::from(g) * 587 + u32::from(b) * 114) / 1000;
    let bright = luminance > 127;
    let threshold = r.max(g).max(b) / 2;

    match (r > threshold, g > threshold, b > threshold, bright) {
        (false, false, false, false) => CrosstermColor::Black,
        (false, false, false, true) => CrosstermColor::DarkGrey,
        (true, false, false, false) => CrosstermColor::DarkRed,
        (true, false, false, true) => CrosstermColor::Red,
        (false, true, false, false) => CrosstermColor::DarkGreen,
        (false, true, false, true) => CrosstermColor::Green,
        (true, true, false, false) => CrosstermColor::DarkYellow,
        (true, true, false, true) => CrosstermColor::Yellow,
        (false, false, true, false) => CrosstermColor::DarkBlue,
        (false, false, true, true) => CrosstermColor::Blue,
        (true, false, true, false) => CrosstermColor::DarkMagenta,
        (true, false, true, true) => CrosstermColor::Magenta,
        (false, true, true, false) => CrosstermColor::DarkCyan,
        (false, true, true, true) => CrosstermColor::Cyan,
        (true, true, true, false) => CrosstermColor::Grey,
        (true, true, true, true) => CrosstermColor::White,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        assert_eq!(Color::from_hex("#ff2d2d"), Ok(Color::rgb(0xff, 0x2d, 0x2d)));
        assert_eq!(Color::from_hex("00ff88"), Ok(Color::rgb(0, 0xff, 0x88)));
        assert_eq!(Color::from_hex("#00000000"), Ok(Color::TRANSPARENT));
    }

    #[test]
    fn test_from_hex_invalid() {
        assert!(matches!(
            Color::from_hex("#fff"),
            Err(ColorParseError::InvalidLength(_))
        ));
        assert!(matches!(
            Color::from_hex("#gg0000"),
            Err(ColorParseError::InvalidHex(_))
        ));
        assert!(Color::from_hex("#ff2d2é").is_err());
    }

    #[test]
    fn test_hex_roundtrip() {
        let c = Color::rgb(0x88, 0x88, 0xff);
        assert_eq!(Color::from_hex(&c.to_hex()), Ok(c));
    }

    #[test]
    fn test_lerp_endpoints() {
        let a = Color::rgb(0, 0, 0);
        let b = Color::rgb(200, 100, 50);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), Color::rgb(100, 50, 25));
    }

    #[test]
    fn test_detect_with_env() {
        assert_eq!(
            ColorMode::detect_with_env(Some("truecolor"), Some("xterm")),
            ColorMode::TrueColor
        );
        assert_eq!(
            ColorMode::detect_with_env(None, Some("xterm-256color")),
            ColorMode::Color256
        );
        assert_eq!(ColorMode::detect_with_env(None, Some("xterm")), ColorMode::Color16);
        assert_eq!(ColorMode::detect_with_env(None, Some("dumb")), ColorMode::Mono);
        assert_eq!(ColorMode::detect_with_env(None, None), ColorMode::Mono);
    }

    #[test]
    fn test_transparent_maps_to_reset() {
        for mode in [
            ColorMode::TrueColor,
            ColorMode::Color256,
            ColorMode::Color16,
            ColorMode::Mono,
        ] {
            assert_eq!(mode.to_crossterm(Color::TRANSPARENT), CrosstermColor::Reset);
        }
    }

    #[test]
    fn test_truecolor_passthrough() {
        assert_eq!(
            ColorMode::TrueColor.to_crossterm(Color::rgb(0xff, 0xaa, 0)),
            CrosstermColor::Rgb {
                r: 0xff,
                g: 0xaa,
                b: 0
            }
        );
    }

    #[test]
    fn test_256_mapping() {
        assert_eq!(rgb_to_256(0, 0, 0), 16);
        assert_eq!(rgb_to_256(255, 255, 255), 231);
        assert!(rgb_to_256(0x66, 0x66, 0x66) >= 232);
        let red = rgb_to_256(0xff, 0x2d, 0x2d);
        assert!((16..=231).contains(&red));
    }

    #[test]
    fn test_16_mapping() {
        assert_eq!(rgb_to_16(0xff, 0x2d, 0x2d), CrosstermColor::DarkRed);
        assert_eq!(rgb_to_16(0x00, 0xff, 0x00), CrosstermColor::Green);
        assert_eq!(rgb_to_16(0x00, 0xdd, 0xff), CrosstermColor::Cyan);
        assert_eq!(rgb_to_16(0xcc, 0xcc, 0xcc), CrosstermColor::White);
    }

    #[test]
    fn test_mode_parse() {
        assert_eq!("256".parse::<ColorMode>(), Ok(ColorMode::Color256));
        assert_eq!("TrueColor".parse::<ColorMode>(), Ok(ColorMode::TrueColor));
        assert!("sepia".parse::<ColorMode>().is_err());
        for mode in [ColorMode::TrueColor, ColorMode::Color256, ColorMode::Color16, ColorMode::Mono] {
            assert_eq!(mode.to_string().parse::<ColorMode>(), Ok(mode));
        }
    }
}
