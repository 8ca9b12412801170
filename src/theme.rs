//! Theme applicator: the Oxford overrides of a plotting configuration.
//!
//! A [`Context`] holds the current [`RcParams`] and the defaults it was created with.
//! Applying a theme layers a base style and the Oxford overrides onto the current
//! configuration, resetting restores the defaults.
use oxtheme_base::color::{self as base_color, ColorU8};
use oxtheme_base::geom;
use strict_num::NonZeroPositiveF32;

use crate::figure::{AxesId, Figure};
use crate::rc::{BaseStyle, RcParams};
use crate::{Error, Result, color, preset};

/// Default size of figures created by [`Context::make_styled_figure`], in inches
pub const DEFAULT_FIGURE_SIZE: geom::Size = geom::Size::new(10.0, 6.0);

/// Font families of the theme, in order of preference
const FONT_SANS_SERIF: [&str; 4] = ["Arial", "Helvetica", "DejaVu Sans", "sans-serif"];

/// Parameters of the theme
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeParams {
    /// Style layered onto the configuration before the overrides
    pub base_style: BaseStyle,
    /// Color cycle, as registry names (e.g. `"coral"`) or `#` hex literals.
    /// `None` selects [`color::DEFAULT_CYCLE`].
    pub color_cycle: Option<Vec<String>>,
    /// Multiplier of every absolute font size. Must be positive.
    pub font_scale: f32,
}

impl Default for ThemeParams {
    fn default() -> Self {
        ThemeParams {
            base_style: BaseStyle::default(),
            color_cycle: None,
            font_scale: 1.0,
        }
    }
}

impl ThemeParams {
    /// Replace the base style
    pub fn with_base_style(self, base_style: BaseStyle) -> Self {
        ThemeParams { base_style, ..self }
    }

    /// Replace the color cycle with registry names or hex literals
    pub fn with_color_cycle<I, S>(self, cycle: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ThemeParams {
            color_cycle: Some(cycle.into_iter().map(Into::into).collect()),
            ..self
        }
    }

    /// Replace the font scale
    pub fn with_font_scale(self, font_scale: f32) -> Self {
        ThemeParams { font_scale, ..self }
    }
}

/// A plotting configuration with its reset snapshot.
///
/// The context is not synchronized. Share it between threads behind a lock,
/// so that [`preview_config`](Context::preview_config) cannot interleave with other mutations.
#[derive(Debug, Clone, PartialEq)]
pub struct Context {
    current: RcParams,
    defaults: RcParams,
}

impl Default for Context {
    fn default() -> Self {
        Context::new()
    }
}

impl Context {
    /// A context initialized with the library defaults
    pub fn new() -> Self {
        Context::with_defaults(RcParams::default())
    }

    /// A context initialized with `defaults`, which [`reset_theme`](Context::reset_theme) restores
    pub fn with_defaults(defaults: RcParams) -> Self {
        Context {
            current: defaults.clone(),
            defaults,
        }
    }

    /// The current configuration
    pub fn rc(&self) -> &RcParams {
        &self.current
    }

    /// Mutable access to the current configuration
    pub fn rc_mut(&mut self) -> &mut RcParams {
        &mut self.current
    }

    /// The snapshot captured at construction
    pub fn defaults(&self) -> &RcParams {
        &self.defaults
    }

    /// Apply the theme to the current configuration.
    ///
    /// All parameters are validated before anything is written:
    /// on error, the configuration is left untouched.
    pub fn apply_theme(&mut self, params: &ThemeParams) -> Result<()> {
        let rc = themed(&self.current, &self.defaults, params)?;
        log::debug!(
            "applying theme: base style '{}', {} cycle colors, font scale {}",
            params.base_style,
            rc.color_cycle.len(),
            params.font_scale
        );
        self.current = rc;
        Ok(())
    }

    /// Restore the configuration captured at construction
    pub fn reset_theme(&mut self) {
        log::debug!("resetting theme to defaults");
        self.current = self.defaults.clone();
    }

    /// The configuration [`apply_theme`](Context::apply_theme) would produce.
    ///
    /// The current configuration is restored before returning, also on error.
    pub fn preview_config(&mut self, params: &ThemeParams) -> Result<RcParams> {
        let snapshot = self.current.clone();
        let preview = self.apply_theme(params).map(|_| self.current.clone());
        self.current = snapshot;
        log::debug!("theme preview taken, configuration restored");
        preview
    }

    /// Resolve preset `name` and apply it
    pub fn apply_preset(&mut self, name: &str) -> Result<()> {
        let preset = preset::get_preset_config(name)?;
        log::debug!("applying preset '{}'", preset.name);
        self.apply_theme(&preset.theme_params())
    }

    /// Apply the theme and create a figure of `size` inches with a single axes
    pub fn make_styled_figure(
        &mut self,
        size: impl Into<geom::Size>,
        params: &ThemeParams,
    ) -> Result<(Figure, AxesId)> {
        let size = size.into();
        if !size.is_positive() {
            return Err(Error::invalid_config(format!(
                "figure size dimensions must be positive, got ({}, {})",
                size.width(),
                size.height()
            )));
        }
        self.apply_theme(params)?;
        let mut fig = Figure::new(size, self.current.clone());
        let ax = fig.add_axes();
        Ok((fig, ax))
    }
}

fn themed(current: &RcParams, defaults: &RcParams, params: &ThemeParams) -> Result<RcParams> {
    let font_scale = NonZeroPositiveF32::new(params.font_scale).ok_or_else(|| {
        Error::invalid_config(format!("font_scale must be positive, got {}", params.font_scale))
    })?;

    let cycle = match &params.color_cycle {
        Some(cycle) if cycle.is_empty() => {
            return Err(Error::invalid_config("color_cycle cannot be empty"));
        }
        Some(cycle) => cycle
            .iter()
            .map(|c| resolve_cycle_color(c))
            .collect::<Result<Vec<_>>>()?,
        None => color::DEFAULT_CYCLE
            .iter()
            .map(|hex| parse_hex(hex))
            .collect::<Result<Vec<_>>>()?,
    };
    let blue = parse_hex(color::OXFORD_BLUE)?;

    let mut rc = current.clone();
    params.base_style.apply(&mut rc, defaults);

    rc.color_cycle = cycle;
    rc.label_color = blue;
    rc.edge_color = blue;
    rc.text_color = blue;
    rc.xtick_color = blue;
    rc.ytick_color = blue;

    rc.font_family = vec!["sans-serif".to_string()];
    rc.font_sans_serif = FONT_SANS_SERIF.map(String::from).to_vec();

    rc.legend.frame_on = true;
    rc.legend.frame_alpha = 1.0;
    rc.legend.edge_color = blue;
    rc.legend.fancy_box = false;

    rc.figure_face_color = base_color::WHITE;
    rc.axes_face_color = base_color::WHITE;

    if font_scale.get() != 1.0 {
        rc.scale_fonts(font_scale.get());
    }
    Ok(rc)
}

/// Cycle entries starting with `#` are hex literals, others are registry names
fn resolve_cycle_color(entry: &str) -> Result<ColorU8> {
    if entry.starts_with('#') {
        parse_hex(entry)
    } else {
        color::resolve_color_u8(entry)
    }
}

fn parse_hex(hex: &str) -> Result<ColorU8> {
    hex.parse()
        .map_err(|err| Error::invalid_config(format!("invalid color '{hex}': {err}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rc::FontSize;
    use crate::tests::{Near, assert_near};

    fn blue() -> ColorU8 {
        ColorU8::from_html(b"#002147")
    }

    #[test]
    fn apply_sets_overrides() {
        let mut ctx = Context::new();
        ctx.apply_theme(&ThemeParams::default()).unwrap();
        let rc = ctx.rc();
        assert_eq!(rc.color_cycle.len(), 8);
        assert_eq!(rc.color_cycle[0], blue());
        assert_eq!(rc.label_color, blue());
        assert_eq!(rc.edge_color, blue());
        assert_eq!(rc.text_color, blue());
        assert_eq!(rc.xtick_color, blue());
        assert_eq!(rc.ytick_color, blue());
        assert_eq!(
            rc.font_sans_serif,
            vec!["Arial", "Helvetica", "DejaVu Sans", "sans-serif"]
        );
        assert!(rc.legend.frame_on);
        assert_near!(abs, rc.legend.frame_alpha, 1.0f32);
        assert_eq!(rc.legend.edge_color, blue());
        assert!(!rc.legend.fancy_box);
        assert_eq!(rc.figure_face_color, base_color::WHITE);
        assert_eq!(rc.axes_face_color, base_color::WHITE);
    }

    #[test]
    fn cycle_mixes_names_and_literals() {
        let mut ctx = Context::new();
        let params = ThemeParams::default().with_color_cycle(["Coral", "#123456", "aqua"]);
        ctx.apply_theme(&params).unwrap();
        assert_eq!(
            ctx.rc().color_cycle,
            vec![
                ColorU8::from_html(b"#FE615A"),
                ColorU8::from_html(b"#123456"),
                ColorU8::from_html(b"#00AAB4"),
            ]
        );
    }

    #[test]
    fn invalid_params_leave_config_unchanged() {
        let mut ctx = Context::new();
        ctx.apply_theme(&ThemeParams::default().with_color_cycle(["coral"]))
            .unwrap();
        let before = ctx.clone();

        let zero_scale = ThemeParams::default().with_font_scale(0.0);
        assert!(matches!(ctx.apply_theme(&zero_scale), Err(Error::InvalidConfig(_))));
        assert_eq!(ctx, before);

        let negative_scale = ThemeParams::default().with_font_scale(-1.0);
        assert!(matches!(ctx.apply_theme(&negative_scale), Err(Error::InvalidConfig(_))));

        let nan_scale = ThemeParams::default().with_font_scale(f32::NAN);
        assert!(matches!(ctx.apply_theme(&nan_scale), Err(Error::InvalidConfig(_))));

        let empty = ThemeParams::default().with_color_cycle(Vec::<String>::new());
        assert!(matches!(ctx.apply_theme(&empty), Err(Error::InvalidConfig(_))));
        assert_eq!(ctx, before);

        let unknown = ThemeParams::default().with_color_cycle(["oxford_blue", "bogus"]);
        assert!(matches!(ctx.apply_theme(&unknown), Err(Error::UnknownColor { .. })));
        assert_eq!(ctx, before);

        let bad_literal = ThemeParams::default().with_color_cycle(["#12"]);
        assert!(matches!(ctx.apply_theme(&bad_literal), Err(Error::InvalidConfig(_))));
        assert_eq!(ctx, before);
    }

    #[test]
    fn font_scale_multiplies_sizes() {
        let mut ctx = Context::new();
        ctx.apply_theme(&ThemeParams::default()).unwrap();
        let base = ctx.rc().clone();

        ctx.apply_theme(&ThemeParams::default().with_font_scale(2.0))
            .unwrap();
        let scaled = ctx.rc();
        assert_near!(abs, scaled.font_size, base.font_size * 2.0);
        assert_near!(abs, scaled.label_font_size(), base.label_font_size() * 2.0);
        assert_near!(abs, scaled.legend_font_size(), base.legend_font_size() * 2.0);
    }

    #[test]
    fn font_scale_ignores_named_sizes() {
        let mut ctx = Context::new();
        let params = ThemeParams::default()
            .with_base_style(BaseStyle::Whitegrid)
            .with_font_scale(1.5);
        ctx.apply_theme(&params).unwrap();
        assert_near!(abs, ctx.rc().font_size, 15.0f32);
        assert!(matches!(ctx.rc().label_size, FontSize::Named(_)));
        assert!(ctx.rc().axes_grid);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut ctx = Context::new();
        ctx.apply_theme(&ThemeParams::default().with_font_scale(1.8))
            .unwrap();
        ctx.apply_preset("minimal").unwrap();
        ctx.apply_theme(&ThemeParams::default().with_base_style(BaseStyle::Talk))
            .unwrap();
        ctx.reset_theme();
        assert_eq!(ctx.rc(), &RcParams::default());
        assert_eq!(ctx.rc(), ctx.defaults());
    }

    #[test]
    fn reset_restores_injected_defaults() {
        let mut defaults = RcParams::default();
        defaults.font_size = 14.0;
        let mut ctx = Context::with_defaults(defaults.clone());
        ctx.apply_theme(&ThemeParams::default()).unwrap();
        assert_ne!(ctx.rc(), &defaults);
        ctx.reset_theme();
        assert_eq!(ctx.rc(), &defaults);
    }

    #[test]
    fn preview_does_not_mutate() {
        let mut ctx = Context::new();
        let before = ctx.clone();
        let preview = ctx
            .preview_config(&ThemeParams::default().with_font_scale(1.5))
            .unwrap();
        assert_eq!(ctx, before);
        assert_eq!(preview.label_color, blue());
        assert_eq!(preview.to_map()["axes.labelcolor"], "#002147");

        assert!(
            ctx.preview_config(&ThemeParams::default().with_font_scale(0.0))
                .is_err()
        );
        assert_eq!(ctx, before);
    }

    #[test]
    fn styled_figure() {
        let mut ctx = Context::new();
        let (fig, ax) = ctx
            .make_styled_figure(DEFAULT_FIGURE_SIZE, &ThemeParams::default())
            .unwrap();
        assert_eq!(fig.size(), geom::Size::new(10.0, 6.0));
        assert_eq!(fig.all_axes().len(), 1);
        assert!(fig.axes(ax).lines().is_empty());
        assert_eq!(fig.rc(), ctx.rc());
        assert_eq!(ctx.rc().label_color, blue());
    }

    #[test]
    fn styled_figure_rejects_bad_size() {
        let mut ctx = Context::new();
        let before = ctx.clone();
        for size in [(0.0, 6.0), (10.0, -1.0), (f32::NAN, 2.0)] {
            assert!(matches!(
                ctx.make_styled_figure(size, &ThemeParams::default()),
                Err(Error::InvalidConfig(_))
            ));
        }
        assert_eq!(ctx, before);
    }
}
