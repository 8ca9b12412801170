//! The plotting configuration: colors, fonts, legend and figure parameters.
//!
//! [`RcParams`] is the typed counterpart of a runtime configuration table.
//! Its [`Default`] implementation holds the library defaults,
//! which a [`Context`](crate::Context) captures as its reset snapshot.
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use oxtheme_base::color::{self, ColorU8};
use oxtheme_base::geom;

use crate::Error;

/// Symbolic font size, relative to the base font size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamedSize {
    /// Smallest named size
    XxSmall,
    /// Extra small
    XSmall,
    /// Small
    Small,
    /// Same as the base size
    Medium,
    /// Large
    Large,
    /// Extra large
    XLarge,
    /// Largest named size
    XxLarge,
}

impl NamedSize {
    const ALL: [NamedSize; 7] = [
        NamedSize::XxSmall,
        NamedSize::XSmall,
        NamedSize::Small,
        NamedSize::Medium,
        NamedSize::Large,
        NamedSize::XLarge,
        NamedSize::XxLarge,
    ];

    /// Factor applied to the base font size
    pub const fn scaling(&self) -> f32 {
        match self {
            NamedSize::XxSmall => 0.579,
            NamedSize::XSmall => 0.694,
            NamedSize::Small => 0.833,
            NamedSize::Medium => 1.0,
            NamedSize::Large => 1.2,
            NamedSize::XLarge => 1.44,
            NamedSize::XxLarge => 1.728,
        }
    }

    /// Name as written in rc files (e.g. "x-small")
    pub const fn name(&self) -> &'static str {
        match self {
            NamedSize::XxSmall => "xx-small",
            NamedSize::XSmall => "x-small",
            NamedSize::Small => "small",
            NamedSize::Medium => "medium",
            NamedSize::Large => "large",
            NamedSize::XLarge => "x-large",
            NamedSize::XxLarge => "xx-large",
        }
    }
}

impl FromStr for NamedSize {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NamedSize::ALL
            .into_iter()
            .find(|n| n.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::invalid_config(format!("unknown font size name '{s}'")))
    }
}

/// A font size parameter: either absolute, or relative to the base font size
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FontSize {
    /// Size in points
    Points(f32),
    /// Symbolic size, resolved against the base font size
    Named(NamedSize),
}

impl FontSize {
    /// Size in points, given the base font size
    pub fn resolve(&self, base: f32) -> f32 {
        match self {
            FontSize::Points(pt) => *pt,
            FontSize::Named(named) => base * named.scaling(),
        }
    }

    /// Multiply an absolute size by `factor`. Symbolic sizes are left untouched.
    pub fn scaled(self, factor: f32) -> Self {
        match self {
            FontSize::Points(pt) => FontSize::Points(pt * factor),
            named => named,
        }
    }
}

impl From<f32> for FontSize {
    fn from(pt: f32) -> Self {
        FontSize::Points(pt)
    }
}

impl From<NamedSize> for FontSize {
    fn from(named: NamedSize) -> Self {
        FontSize::Named(named)
    }
}

impl fmt::Display for FontSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontSize::Points(pt) => write!(f, "{pt}"),
            FontSize::Named(named) => f.write_str(named.name()),
        }
    }
}

/// Legend styling
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegendParams {
    /// Whether the legend is drawn in a box
    pub frame_on: bool,
    /// Opacity of the legend box
    pub frame_alpha: f32,
    /// Border color of the legend box
    pub edge_color: ColorU8,
    /// Fill color of the legend box
    pub face_color: ColorU8,
    /// Rounded corners of the legend box
    pub fancy_box: bool,
    /// Font size of the legend entries
    pub font_size: FontSize,
}

impl Default for LegendParams {
    fn default() -> Self {
        LegendParams {
            frame_on: true,
            frame_alpha: 0.8,
            edge_color: ColorU8::from_html(b"#cccccc"),
            face_color: color::WHITE,
            fancy_box: true,
            font_size: NamedSize::Medium.into(),
        }
    }
}

/// Plotting configuration.
///
/// Font sizes are in points, the figure size is in inches.
#[derive(Debug, Clone, PartialEq)]
pub struct RcParams {
    /// Colors assigned in turn to the series of an axes (`axes.prop_cycle`)
    pub color_cycle: Vec<ColorU8>,
    /// `axes.labelcolor`
    pub label_color: ColorU8,
    /// `axes.edgecolor`
    pub edge_color: ColorU8,
    /// `text.color`
    pub text_color: ColorU8,
    /// `xtick.color`
    pub xtick_color: ColorU8,
    /// `ytick.color`
    pub ytick_color: ColorU8,
    /// Font families in order of preference. May contain the generic `sans-serif` family.
    pub font_family: Vec<String>,
    /// Families substituted to the generic `sans-serif` family
    pub font_sans_serif: Vec<String>,
    /// Base font size (`font.size`)
    pub font_size: f32,
    /// `axes.labelsize`
    pub label_size: FontSize,
    /// `axes.titlesize`
    pub title_size: FontSize,
    /// `xtick.labelsize`
    pub xtick_label_size: FontSize,
    /// `ytick.labelsize`
    pub ytick_label_size: FontSize,
    /// `figure.titlesize`
    pub figure_title_size: FontSize,
    /// `legend.*`
    pub legend: LegendParams,
    /// `figure.facecolor`
    pub figure_face_color: ColorU8,
    /// `axes.facecolor`
    pub axes_face_color: ColorU8,
    /// `axes.grid`
    pub axes_grid: bool,
    /// `grid.color`
    pub grid_color: ColorU8,
    /// Default figure size in inches (`figure.figsize`)
    pub figure_size: geom::Size,
    /// `lines.linewidth`, in points
    pub line_width: f32,
}

const TAB10: [ColorU8; 10] = [
    ColorU8::from_html(b"#1f77b4"),
    ColorU8::from_html(b"#ff7f0e"),
    ColorU8::from_html(b"#2ca02c"),
    ColorU8::from_html(b"#d62728"),
    ColorU8::from_html(b"#9467bd"),
    ColorU8::from_html(b"#8c564b"),
    ColorU8::from_html(b"#e377c2"),
    ColorU8::from_html(b"#7f7f7f"),
    ColorU8::from_html(b"#bcbd22"),
    ColorU8::from_html(b"#17becf"),
];

impl Default for RcParams {
    fn default() -> Self {
        RcParams {
            color_cycle: TAB10.to_vec(),
            label_color: color::BLACK,
            edge_color: color::BLACK,
            text_color: color::BLACK,
            xtick_color: color::BLACK,
            ytick_color: color::BLACK,
            font_family: vec!["sans-serif".to_string()],
            font_sans_serif: [
                "DejaVu Sans",
                "Bitstream Vera Sans",
                "Lucida Grande",
                "Verdana",
                "Arial",
                "Helvetica",
                "sans-serif",
            ]
            .map(String::from)
            .to_vec(),
            font_size: 10.0,
            label_size: NamedSize::Medium.into(),
            title_size: NamedSize::Large.into(),
            xtick_label_size: NamedSize::Medium.into(),
            ytick_label_size: NamedSize::Medium.into(),
            figure_title_size: NamedSize::Large.into(),
            legend: LegendParams::default(),
            figure_face_color: color::WHITE,
            axes_face_color: color::WHITE,
            axes_grid: false,
            grid_color: ColorU8::from_html(b"#b0b0b0"),
            figure_size: geom::Size::new(6.4, 4.8),
            line_width: 1.5,
        }
    }
}

impl RcParams {
    /// Multiply every absolute font size by `factor`.
    /// Symbolic sizes are left untouched, they follow the base font size.
    pub fn scale_fonts(&mut self, factor: f32) {
        self.font_size *= factor;
        for size in self.font_sizes_mut() {
            *size = size.scaled(factor);
        }
        self.legend.font_size = self.legend.font_size.scaled(factor);
    }

    fn font_sizes_mut(&mut self) -> [&mut FontSize; 5] {
        [
            &mut self.label_size,
            &mut self.title_size,
            &mut self.xtick_label_size,
            &mut self.ytick_label_size,
            &mut self.figure_title_size,
        ]
    }

    /// Resolved size of axis labels, in points
    pub fn label_font_size(&self) -> f32 {
        self.label_size.resolve(self.font_size)
    }

    /// Resolved size of axes titles, in points
    pub fn title_font_size(&self) -> f32 {
        self.title_size.resolve(self.font_size)
    }

    /// Resolved size of x tick labels, in points
    pub fn xtick_font_size(&self) -> f32 {
        self.xtick_label_size.resolve(self.font_size)
    }

    /// Resolved size of y tick labels, in points
    pub fn ytick_font_size(&self) -> f32 {
        self.ytick_label_size.resolve(self.font_size)
    }

    /// Resolved size of legend entries
    pub fn legend_font_size(&self) -> f32 {
        self.legend.font_size.resolve(self.font_size)
    }

    /// Resolved size of the figure title
    pub fn figure_title_font_size(&self) -> f32 {
        self.figure_title_size.resolve(self.font_size)
    }

    /// Font families with the generic `sans-serif` family expanded
    pub fn font_families(&self) -> Vec<String> {
        let mut families = Vec::new();
        for family in &self.font_family {
            if family == "sans-serif" {
                families.extend(self.font_sans_serif.iter().cloned());
            } else {
                families.push(family.clone());
            }
        }
        families.dedup();
        families
    }

    /// The configuration as a table of dotted keys and string values
    pub fn to_map(&self) -> BTreeMap<&'static str, String> {
        let cycle = self
            .color_cycle
            .iter()
            .map(ColorU8::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        let mut map = BTreeMap::new();
        map.insert("axes.prop_cycle", cycle);
        map.insert("axes.labelcolor", self.label_color.to_string());
        map.insert("axes.edgecolor", self.edge_color.to_string());
        map.insert("text.color", self.text_color.to_string());
        map.insert("xtick.color", self.xtick_color.to_string());
        map.insert("ytick.color", self.ytick_color.to_string());
        map.insert("font.family", self.font_family.join(", "));
        map.insert("font.sans-serif", self.font_sans_serif.join(", "));
        map.insert("font.size", self.font_size.to_string());
        map.insert("axes.labelsize", self.label_size.to_string());
        map.insert("axes.titlesize", self.title_size.to_string());
        map.insert("xtick.labelsize", self.xtick_label_size.to_string());
        map.insert("ytick.labelsize", self.ytick_label_size.to_string());
        map.insert("legend.fontsize", self.legend.font_size.to_string());
        map.insert("figure.titlesize", self.figure_title_size.to_string());
        map.insert("legend.frameon", self.legend.frame_on.to_string());
        map.insert("legend.framealpha", self.legend.frame_alpha.to_string());
        map.insert("legend.edgecolor", self.legend.edge_color.to_string());
        map.insert("legend.facecolor", self.legend.face_color.to_string());
        map.insert("legend.fancybox", self.legend.fancy_box.to_string());
        map.insert("figure.facecolor", self.figure_face_color.to_string());
        map.insert("axes.facecolor", self.axes_face_color.to_string());
        map.insert("axes.grid", self.axes_grid.to_string());
        map.insert("grid.color", self.grid_color.to_string());
        map.insert(
            "figure.figsize",
            format!("{}, {}", self.figure_size.width(), self.figure_size.height()),
        );
        map.insert("lines.linewidth", self.line_width.to_string());
        map
    }
}

/// Style layered onto the configuration before the theme overrides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BaseStyle {
    /// Library defaults
    Default,
    /// Compact sizes for publications
    #[default]
    Paper,
    /// Sizes for notebooks
    Notebook,
    /// Background grid with light edges
    Whitegrid,
    /// Larger sizes for slides
    Talk,
}

impl BaseStyle {
    const ALL: [BaseStyle; 5] = [
        BaseStyle::Default,
        BaseStyle::Notebook,
        BaseStyle::Paper,
        BaseStyle::Talk,
        BaseStyle::Whitegrid,
    ];

    /// Lower-case name of the style
    pub const fn name(&self) -> &'static str {
        match self {
            BaseStyle::Default => "default",
            BaseStyle::Paper => "paper",
            BaseStyle::Notebook => "notebook",
            BaseStyle::Whitegrid => "whitegrid",
            BaseStyle::Talk => "talk",
        }
    }

    /// Sorted names of the base styles
    pub fn names() -> Vec<&'static str> {
        BaseStyle::ALL.iter().map(BaseStyle::name).collect()
    }

    /// Layer the style onto `rc`.
    ///
    /// Only the parameters the style defines are written,
    /// except for [`BaseStyle::Default`] that restores `defaults` entirely.
    pub fn apply(&self, rc: &mut RcParams, defaults: &RcParams) {
        match self {
            BaseStyle::Default => *rc = defaults.clone(),
            BaseStyle::Paper => {
                rc.font_size = 9.6;
                rc.label_size = FontSize::Points(8.8);
                rc.title_size = FontSize::Points(9.6);
                rc.xtick_label_size = FontSize::Points(8.0);
                rc.ytick_label_size = FontSize::Points(8.0);
                rc.legend.font_size = FontSize::Points(8.0);
                rc.figure_title_size = FontSize::Points(9.6);
                rc.line_width = 1.4;
            }
            BaseStyle::Notebook => {
                rc.font_size = 12.0;
                rc.label_size = FontSize::Points(11.0);
                rc.title_size = FontSize::Points(12.0);
                rc.xtick_label_size = FontSize::Points(10.0);
                rc.ytick_label_size = FontSize::Points(10.0);
                rc.legend.font_size = FontSize::Points(10.0);
                rc.figure_title_size = FontSize::Points(12.0);
                rc.line_width = 1.75;
            }
            BaseStyle::Talk => {
                rc.font_size = 18.0;
                rc.label_size = FontSize::Points(16.5);
                rc.title_size = FontSize::Points(18.0);
                rc.xtick_label_size = FontSize::Points(15.0);
                rc.ytick_label_size = FontSize::Points(15.0);
                rc.legend.font_size = FontSize::Points(15.0);
                rc.figure_title_size = FontSize::Points(18.0);
                rc.line_width = 2.625;
            }
            BaseStyle::Whitegrid => {
                rc.axes_face_color = color::WHITE;
                rc.axes_grid = true;
                rc.grid_color = ColorU8::from_html(b"#cccccc");
                rc.edge_color = ColorU8::from_html(b"#cccccc");
            }
        }
    }
}

impl FromStr for BaseStyle {
    type Err = Error;

    /// Parse a style name, ignoring case.
    /// The `seaborn-v0_8-` prefixed names are accepted as well.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        let name = lower.strip_prefix("seaborn-v0_8-").unwrap_or(&lower);
        BaseStyle::ALL
            .into_iter()
            .find(|st| st.name() == name)
            .ok_or_else(|| Error::UnknownStyle {
                name: s.to_string(),
                valid: BaseStyle::names(),
            })
    }
}

impl fmt::Display for BaseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{Near, assert_near};

    #[test]
    fn named_sizes_follow_base() {
        let rc = RcParams::default();
        assert_near!(abs, rc.label_font_size(), 10.0f32);
        assert_near!(abs, rc.title_font_size(), 12.0f32);
        assert_eq!("X-Large".parse::<NamedSize>().unwrap(), NamedSize::XLarge);
        assert!("huge".parse::<NamedSize>().is_err());
    }

    #[test]
    fn legend_params_are_values() {
        let mut rc = RcParams::default();
        let legend = rc.legend;
        rc.legend.font_size = FontSize::Points(20.0);
        assert_near!(abs, rc.legend_font_size(), 20.0f32);
        assert_ne!(legend, rc.legend);
        assert_eq!(NamedSize::XxSmall.name(), "xx-small");
        assert_eq!(BaseStyle::Paper.name(), "paper");
    }

    #[test]
    fn scale_fonts_leaves_named_sizes() {
        let mut rc = RcParams::default();
        rc.xtick_label_size = FontSize::Points(8.0);
        rc.scale_fonts(1.5);
        assert_near!(abs, rc.font_size, 15.0f32);
        assert_eq!(rc.label_size, FontSize::Named(NamedSize::Medium));
        assert_eq!(rc.xtick_label_size, FontSize::Points(12.0));
        assert_near!(abs, rc.label_font_size(), 15.0f32);
    }

    #[test]
    fn base_style_parse() {
        assert_eq!("paper".parse::<BaseStyle>().unwrap(), BaseStyle::Paper);
        assert_eq!("WhiteGrid".parse::<BaseStyle>().unwrap(), BaseStyle::Whitegrid);
        assert_eq!(
            "seaborn-v0_8-notebook".parse::<BaseStyle>().unwrap(),
            BaseStyle::Notebook
        );
        match "ggplot".parse::<BaseStyle>() {
            Err(Error::UnknownStyle { name, valid }) => {
                assert_eq!(name, "ggplot");
                assert_eq!(valid, vec!["default", "notebook", "paper", "talk", "whitegrid"]);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn base_style_is_partial() {
        let defaults = RcParams::default();
        let mut rc = defaults.clone();
        rc.text_color = color::WHITE;
        BaseStyle::Whitegrid.apply(&mut rc, &defaults);
        assert!(rc.axes_grid);
        assert_eq!(rc.text_color, color::WHITE);

        BaseStyle::Default.apply(&mut rc, &defaults);
        assert_eq!(rc, defaults);
    }

    #[test]
    fn font_families_expand_generic() {
        let mut rc = RcParams::default();
        rc.font_sans_serif = vec!["Arial".into(), "Helvetica".into()];
        assert_eq!(rc.font_families(), vec!["Arial", "Helvetica"]);
        rc.font_family = vec!["Georgia".into(), "sans-serif".into()];
        assert_eq!(rc.font_families(), vec!["Georgia", "Arial", "Helvetica"]);
    }

    #[test]
    fn map_keys() {
        let map = RcParams::default().to_map();
        assert_eq!(map["axes.labelcolor"], "#000000");
        assert_eq!(map["font.size"], "10");
        assert_eq!(map["axes.titlesize"], "large");
        assert_eq!(map["figure.figsize"], "6.4, 4.8");
    }
}
