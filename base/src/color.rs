//! RGBA color type used by the configuration and by every rendering surface.
use std::str::FromStr;
use std::{error, fmt};

/// Opaque white
pub const WHITE: ColorU8 = ColorU8::from_rgb(255, 255, 255);
/// Opaque black
pub const BLACK: ColorU8 = ColorU8::from_rgb(0, 0, 0);
/// Fully transparent black
pub const TRANSPARENT: ColorU8 = ColorU8::from_rgba(0, 0, 0, 0);

/// A color with 8 bits per channel, straight (not premultiplied) alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorU8 {
    r: u8,
    g: u8,
    b: u8,
    a: u8,
}

impl ColorU8 {
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        ColorU8 { r, g, b, a: 255 }
    }

    pub const fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        ColorU8 { r, g, b, a }
    }

    /// Build a color from an HTML hex literal at compile time.
    ///
    /// Accepts `#rgb`, `#rgba`, `#rrggbb` and `#rrggbbaa`.
    /// Panics on malformed input, which turns into a compile error for `const` items.
    /// Use [`str::parse`] for runtime input.
    pub const fn from_html(hex: &[u8]) -> Self {
        match parse_html(hex) {
            Ok(c) => c,
            Err(_) => panic!("Invalid hex color"),
        }
    }

    pub const fn rgb(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    pub const fn rgba(&self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub const fn red(&self) -> u8 {
        self.r
    }

    pub const fn green(&self) -> u8 {
        self.g
    }

    pub const fn blue(&self) -> u8 {
        self.b
    }

    pub const fn alpha(&self) -> u8 {
        self.a
    }

    /// The opacity in `[0, 1]`, or `None` when the color is fully opaque
    pub const fn opacity(&self) -> Option<f32> {
        if self.a == 255 {
            None
        } else {
            Some(self.a as f32 / 255.0)
        }
    }

    /// `#rrggbb`, lower case, alpha dropped
    pub fn html(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        ColorU8 { a, ..self }
    }

    /// Multiply the alpha channel by `opacity`, which is clamped to `[0, 1]`
    pub const fn with_opacity(self, opacity: f32) -> Self {
        let opacity = opacity.clamp(0.0, 1.0);
        ColorU8 {
            a: (self.a as f32 * opacity + 0.5) as u8,
            ..self
        }
    }

    pub const fn without_opacity(self) -> Self {
        ColorU8 { a: 255, ..self }
    }
}

impl fmt::Display for ColorU8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

const fn hex_to_u8(hex: u8) -> Result<u8, ParseError> {
    match hex {
        b'0'..=b'9' => Ok(hex - b'0'),
        b'a'..=b'f' => Ok(hex - b'a' + 10),
        b'A'..=b'F' => Ok(hex - b'A' + 10),
        _ => Err(ParseError::InvalidHex),
    }
}

const fn hex_pair(hi: u8, lo: u8) -> Result<u8, ParseError> {
    match (hex_to_u8(hi), hex_to_u8(lo)) {
        (Ok(hi), Ok(lo)) => Ok(hi << 4 | lo),
        _ => Err(ParseError::InvalidHex),
    }
}

const fn hex_short(h: u8) -> Result<u8, ParseError> {
    hex_pair(h, h)
}

const fn parse_html(hex: &[u8]) -> Result<ColorU8, ParseError> {
    if hex.is_empty() || hex[0] != b'#' {
        return Err(ParseError::InvalidFormat);
    }
    let (r, g, b, a) = match hex.len() {
        4 => (
            hex_short(hex[1]),
            hex_short(hex[2]),
            hex_short(hex[3]),
            Ok(255),
        ),
        5 => (
            hex_short(hex[1]),
            hex_short(hex[2]),
            hex_short(hex[3]),
            hex_short(hex[4]),
        ),
        7 => (
            hex_pair(hex[1], hex[2]),
            hex_pair(hex[3], hex[4]),
            hex_pair(hex[5], hex[6]),
            Ok(255),
        ),
        9 => (
            hex_pair(hex[1], hex[2]),
            hex_pair(hex[3], hex[4]),
            hex_pair(hex[5], hex[6]),
            hex_pair(hex[7], hex[8]),
        ),
        _ => return Err(ParseError::InvalidHex),
    };
    match (r, g, b, a) {
        (Ok(r), Ok(g), Ok(b), Ok(a)) => Ok(ColorU8::from_rgba(r, g, b, a)),
        _ => Err(ParseError::InvalidHex),
    }
}

/// Error returned when a color literal cannot be parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The literal does not start with `#`
    InvalidFormat,
    /// Wrong length or non-hexadecimal digit
    InvalidHex,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::InvalidFormat => write!(f, "invalid color format, expected '#' followed by hex digits"),
            ParseError::InvalidHex => write!(f, "invalid hex color"),
        }
    }
}

impl error::Error for ParseError {}

impl FromStr for ColorU8 {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_html(s.trim().as_bytes())
    }
}
