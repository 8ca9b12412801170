//! Watermark overlay for figures
use std::fmt;
use std::str::FromStr;

use oxtheme_base::render::{HAlign, VAlign};

use crate::color;
use crate::figure::{FigText, Figure};
use crate::{Error, Result};

/// Corner of the figure where the watermark is placed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Corner {
    /// Default placement
    #[default]
    BottomRight,
    /// Bottom left corner
    BottomLeft,
    /// Top right corner
    TopRight,
    /// Top left corner
    TopLeft,
}

impl Corner {
    /// Every corner
    pub const ALL: [Corner; 4] = [
        Corner::BottomRight,
        Corner::BottomLeft,
        Corner::TopRight,
        Corner::TopLeft,
    ];

    /// Identifier, e.g. `bottom-right`
    pub const fn name(&self) -> &'static str {
        match self {
            Corner::BottomRight => "bottom_right",
            Corner::BottomLeft => "bottom_left",
            Corner::TopRight => "top_right",
            Corner::TopLeft => "top_left",
        }
    }

    /// Anchor in normalized figure coordinates, from the bottom left corner
    pub const fn position(&self) -> (f32, f32) {
        match self {
            Corner::BottomRight => (0.98, 0.02),
            Corner::BottomLeft => (0.02, 0.02),
            Corner::TopRight => (0.98, 0.98),
            Corner::TopLeft => (0.02, 0.98),
        }
    }

    const fn align(&self) -> (HAlign, VAlign) {
        match self {
            Corner::BottomRight => (HAlign::Right, VAlign::Bottom),
            Corner::BottomLeft => (HAlign::Left, VAlign::Bottom),
            Corner::TopRight => (HAlign::Right, VAlign::Top),
            Corner::TopLeft => (HAlign::Left, VAlign::Top),
        }
    }
}

impl fmt::Display for Corner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Corner {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Corner::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| {
                let valid: Vec<_> = Corner::ALL.iter().map(Corner::name).collect();
                Error::invalid_config(format!(
                    "Position '{s}' not recognized. Use: {}",
                    valid.join(", ")
                ))
            })
    }
}

/// Watermark parameters
#[derive(Debug, Clone, PartialEq)]
pub struct Branding {
    /// Without it, [`add_branding`] leaves the figure unchanged
    pub enabled: bool,
    /// Watermark text
    pub text: String,
    /// Placement of the text
    pub corner: Corner,
    /// Opacity in `[0, 1]`
    pub opacity: f32,
    /// Font size in points
    pub font_size: f32,
}

impl Default for Branding {
    fn default() -> Self {
        Branding {
            enabled: false,
            text: "University of Oxford".to_string(),
            corner: Corner::default(),
            opacity: 0.5,
            font_size: 10.0,
        }
    }
}

impl Branding {
    /// The default watermark, enabled
    pub fn enabled() -> Self {
        Branding {
            enabled: true,
            ..Default::default()
        }
    }

    /// Replace the text
    pub fn with_text(self, text: impl Into<String>) -> Self {
        Branding {
            text: text.into(),
            ..self
        }
    }

    /// Replace the corner
    pub fn with_corner(self, corner: Corner) -> Self {
        Branding { corner, ..self }
    }

    /// Replace the opacity
    pub fn with_opacity(self, opacity: f32) -> Self {
        Branding { opacity, ..self }
    }

    /// Replace the font size, in points
    pub fn with_font_size(self, font_size: f32) -> Self {
        Branding { font_size, ..self }
    }
}

/// Add the watermark described by `branding` to `fig`.
///
/// Every call adds a new overlay. Nothing is added if branding is disabled.
pub fn add_branding<'a>(fig: &'a mut Figure, branding: &Branding) -> Result<&'a mut Figure> {
    if !branding.enabled {
        return Ok(fig);
    }
    if !(0.0..=1.0).contains(&branding.opacity) {
        return Err(Error::invalid_config(format!(
            "opacity must be between 0 and 1, got {}",
            branding.opacity
        )));
    }
    if !(branding.font_size.is_finite() && branding.font_size > 0.0) {
        return Err(Error::invalid_config(format!(
            "font size must be positive, got {}",
            branding.font_size
        )));
    }

    let (x, y) = branding.corner.position();
    let (h_align, v_align) = branding.corner.align();
    let mut text = FigText::new(x, y, branding.text.clone());
    text.font_size = branding.font_size;
    text.color = color::resolve_color_u8("stone_grey")?;
    text.opacity = branding.opacity;
    text.h_align = h_align;
    text.v_align = v_align;
    fig.add_text(text);
    Ok(fig)
}
