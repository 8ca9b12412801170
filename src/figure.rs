//! Figure model: the figure, its axes with their line series, and figure-level texts.
//!
//! A figure captures the configuration it is created with, so that later changes of
//! the theme do not affect figures already built.
use oxtheme_base::color::{self, ColorU8};
use oxtheme_base::geom;
use oxtheme_base::render::{HAlign, VAlign};

use crate::rc::RcParams;

/// Handle to an axes of a [`Figure`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AxesId(usize);

/// A figure: a canvas of a given size in inches, holding axes and texts
#[derive(Debug, Clone)]
pub struct Figure {
    size: geom::Size,
    rc: RcParams,
    axes: Vec<Axes>,
    texts: Vec<FigText>,
    suptitle: Option<String>,
}

impl Figure {
    /// Create an empty figure of `size` inches, styled with `rc`
    pub fn new(size: geom::Size, rc: RcParams) -> Self {
        Figure {
            size,
            rc,
            axes: Vec::new(),
            texts: Vec::new(),
            suptitle: None,
        }
    }

    /// Size in inches
    pub fn size(&self) -> geom::Size {
        self.size
    }

    /// Size in points
    pub fn size_pt(&self) -> geom::Size {
        self.size.scale(72.0)
    }

    /// The configuration captured at creation
    pub fn rc(&self) -> &RcParams {
        &self.rc
    }

    /// Add an axes. Axes are stacked vertically, in order of addition.
    pub fn add_axes(&mut self) -> AxesId {
        self.axes.push(Axes::new(&self.rc));
        AxesId(self.axes.len() - 1)
    }

    /// # Panics
    /// If `id` was not returned by this figure
    pub fn axes(&self, id: AxesId) -> &Axes {
        &self.axes[id.0]
    }

    /// # Panics
    /// If `id` was not returned by this figure
    pub fn axes_mut(&mut self, id: AxesId) -> &mut Axes {
        &mut self.axes[id.0]
    }

    /// All axes, in creation order
    pub fn all_axes(&self) -> &[Axes] {
        &self.axes
    }

    /// Add a text overlay positioned in figure coordinates
    pub fn add_text(&mut self, text: FigText) {
        self.texts.push(text);
    }

    /// Text overlays, in order of addition
    pub fn texts(&self) -> &[FigText] {
        &self.texts
    }

    /// Set the title centered on top of the figure
    pub fn set_suptitle(&mut self, title: impl Into<String>) {
        self.suptitle = Some(title.into());
    }

    /// Figure title, if set
    pub fn suptitle(&self) -> Option<&str> {
        self.suptitle.as_deref()
    }
}

/// A text positioned in normalized figure coordinates.
///
/// `(0, 0)` is the bottom left corner of the figure, `(1, 1)` the top right corner.
#[derive(Debug, Clone, PartialEq)]
pub struct FigText {
    /// Horizontal position, as a fraction of the figure width
    pub x: f32,
    /// Vertical position, as a fraction of the figure height
    pub y: f32,
    /// The text to draw
    pub text: String,
    /// Font size in points
    pub font_size: f32,
    /// Text color
    pub color: ColorU8,
    /// Opacity in `[0, 1]`, combined with the alpha of `color`
    pub opacity: f32,
    /// Horizontal anchor of the text at `x`
    pub h_align: HAlign,
    /// Vertical anchor of the text at `y`
    pub v_align: VAlign,
}

impl FigText {
    /// Text at `(x, y)` in figure fraction, with default styling
    pub fn new(x: f32, y: f32, text: impl Into<String>) -> Self {
        FigText {
            x,
            y,
            text: text.into(),
            font_size: 10.0,
            color: color::BLACK,
            opacity: 1.0,
            h_align: HAlign::Left,
            v_align: VAlign::Baseline,
        }
    }
}

/// A line series
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    x: Vec<f64>,
    y: Vec<f64>,
    color: ColorU8,
    width: f32,
    label: Option<String>,
}

impl Line {
    /// Name of the series in the legend
    pub fn set_label(&mut self, label: impl Into<String>) -> &mut Self {
        self.label = Some(label.into());
        self
    }

    /// Override the color picked from the cycle
    pub fn set_color(&mut self, color: ColorU8) -> &mut Self {
        self.color = color;
        self
    }

    /// Line width in points
    pub fn set_width(&mut self, width: f32) -> &mut Self {
        self.width = width;
        self
    }

    /// Legend entry of the line
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Stroke color
    pub fn color(&self) -> ColorU8 {
        self.color
    }

    /// Line width in points
    pub fn width(&self) -> f32 {
        self.width
    }

    /// The data points, as `(x, y)` pairs
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }
}

/// An axes: a plot area with its title, axis labels, series and legend
#[derive(Debug, Clone, PartialEq)]
pub struct Axes {
    title: Option<String>,
    x_label: Option<String>,
    y_label: Option<String>,
    lines: Vec<Line>,
    legend: bool,
    cycle: Vec<ColorU8>,
    line_width: f32,
}

impl Axes {
    fn new(rc: &RcParams) -> Self {
        Axes {
            title: None,
            x_label: None,
            y_label: None,
            lines: Vec::new(),
            legend: false,
            cycle: rc.color_cycle.clone(),
            line_width: rc.line_width,
        }
    }

    /// Plot `y` against `x`.
    /// The line gets the next color of the cycle.
    /// Extra values of the longest slice are ignored.
    pub fn plot(&mut self, x: &[f64], y: &[f64]) -> &mut Line {
        let len = x.len().min(y.len());
        let color = if self.cycle.is_empty() {
            color::BLACK
        } else {
            self.cycle[self.lines.len() % self.cycle.len()]
        };
        self.lines.push(Line {
            x: x[..len].to_vec(),
            y: y[..len].to_vec(),
            color,
            width: self.line_width,
            label: None,
        });
        let idx = self.lines.len() - 1;
        &mut self.lines[idx]
    }

    /// Set the axes title
    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = Some(title.into());
        self
    }

    /// Set the x-axis label
    pub fn set_xlabel(&mut self, label: impl Into<String>) -> &mut Self {
        self.x_label = Some(label.into());
        self
    }

    /// Set the y-axis label
    pub fn set_ylabel(&mut self, label: impl Into<String>) -> &mut Self {
        self.y_label = Some(label.into());
        self
    }

    /// Show the legend of the labeled series
    pub fn legend(&mut self) -> &mut Self {
        self.legend = true;
        self
    }

    /// Axes title, if set
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Label of the x-axis
    pub fn x_label(&self) -> Option<&str> {
        self.x_label.as_deref()
    }

    /// Label of the y-axis
    pub fn y_label(&self) -> Option<&str> {
        self.y_label.as_deref()
    }

    /// Plotted lines, in drawing order
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Whether the legend is drawn
    pub fn has_legend(&self) -> bool {
        self.legend && self.lines.iter().any(|l| l.label.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plot_follows_cycle() {
        let mut rc = RcParams::default();
        rc.color_cycle = vec![color::BLACK, color::WHITE];
        let mut fig = Figure::new(geom::Size::new(4.0, 3.0), rc);
        let ax = fig.add_axes();
        let axes = fig.axes_mut(ax);
        for _ in 0..3 {
            axes.plot(&[0.0, 1.0], &[0.0, 1.0]);
        }
        let colors: Vec<_> = axes.lines().iter().map(Line::color).collect();
        assert_eq!(colors, vec![color::BLACK, color::WHITE, color::BLACK]);
    }

    #[test]
    fn plot_truncates_to_shortest() {
        let mut fig = Figure::new(geom::Size::new(4.0, 3.0), RcParams::default());
        let ax = fig.add_axes();
        let line = fig.axes_mut(ax).plot(&[0.0, 1.0, 2.0], &[5.0, 6.0]);
        line.set_label("a").set_width(3.0);
        assert_eq!(line.points().collect::<Vec<_>>(), vec![(0.0, 5.0), (1.0, 6.0)]);
        assert_eq!(line.label(), Some("a"));
        assert_eq!(line.width(), 3.0);
    }

    #[test]
    fn figure_keeps_its_configuration() {
        let mut rc = RcParams::default();
        let fig = Figure::new(geom::Size::new(4.0, 3.0), rc.clone());
        rc.font_size = 20.0;
        assert_eq!(fig.rc().font_size, 10.0);
        assert_eq!(fig.size_pt(), geom::Size::new(288.0, 216.0));
    }

    #[test]
    fn legend_needs_labels() {
        let mut fig = Figure::new(geom::Size::new(4.0, 3.0), RcParams::default());
        let ax = fig.add_axes();
        let axes = fig.axes_mut(ax);
        axes.plot(&[0.0], &[0.0]);
        axes.legend();
        assert!(!axes.has_legend());
        axes.plot(&[0.0], &[0.0]).set_label("b");
        assert!(axes.has_legend());
    }
}
