#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![warn(missing_copy_implementations)]
/*!
 * # oxtheme
 * _University of Oxford figure styling_. Brand colors, palettes and themes for plots, written in Rust
 *
 * oxtheme bundles the Oxford brand colors into a registry, groups them into palettes,
 * and applies them as a theme to a plotting configuration.
 * Figures built under a theme can then be branded with a watermark and exported
 * with publication settings.
 *
 * ## Get started
 *
 * ```no_run
 * # fn main() -> oxtheme::Result<()> {
 * use oxtheme::{branding, export};
 *
 * // Apply the theme to the configuration of the current thread,
 * // using the "professional" palette as color cycle.
 * let cycle = oxtheme::get_palette("professional", None)?;
 * let (mut fig, ax) = oxtheme::make_styled_figure(
 *     (3.5, 2.5),
 *     &oxtheme::ThemeParams {
 *         color_cycle: Some(cycle.iter().map(|c| c.to_string()).collect()),
 *         ..Default::default()
 *     },
 * )?;
 *
 * let x: Vec<f64> = (0..=100).map(|i| i as f64 / 10.0).collect();
 * let y: Vec<f64> = x.iter().map(|x| x.sin()).collect();
 * fig.axes_mut(ax).plot(&x, &y).set_label("sin(x)");
 *
 * // Watermark and export at 300 dpi.
 * branding::add_branding(&mut fig, &branding::Branding::enabled())?;
 * let path = export::save_figure(&fig, "figure1", &export::SaveOptions::default())?;
 * println!("written {}", path.display());
 * # Ok(())
 * # }
 * ```
 *
 * ## Configuration state
 *
 * The plotting configuration ([`RcParams`]) lives in a [`Context`], which keeps
 * a snapshot of the defaults it was created with, so that [`Context::reset_theme`]
 * can restore them. The free functions of this crate (`apply_theme`, `reset_theme`, ...)
 * operate on a per-thread default context (see [`global`]).
 *
 * ## Crate features
 *
 *  - `svg`: enables SVG export through `oxtheme-svg` (enabled by default)
 *  - `pxl`: enables PNG, TIFF, JPEG and raw RGBA export through `oxtheme-pxl` (enabled by default)
 */
// oxtheme is released under the MIT License with the following copyright:
// Copyright (c) 2025-2026 oxtheme developers

pub mod branding;
mod catalog;
pub mod color;
pub mod drawing;
mod error;
pub mod export;
pub mod figure;
pub mod global;
pub mod journal;
pub mod palette;
pub mod preset;
pub mod rc;
pub mod theme;

pub use branding::add_branding;
pub use color::{ColorU8, resolve_color};
pub use drawing::Drawing;
pub use error::{Error, Result};
pub use export::{Format, SaveOptions, save_figure};
pub use figure::{Axes, AxesId, Figure};
pub use global::{apply_preset, apply_theme, make_styled_figure, preview_config, reset_theme};
pub use journal::get_journal_profile;
pub use palette::{get_color_palette, get_palette};
pub use preset::{get_preset_config, list_presets};
pub use rc::{BaseStyle, RcParams};
pub use theme::{Context, ThemeParams};

/// Rexports of [`oxtheme_base::geom`]` items
pub mod geom {
    pub use oxtheme_base::geom::*;
}

/// Rexports of [`oxtheme_base::render`]` items
pub mod render {
    pub use oxtheme_base::render::*;
}

/// Layout values that are not exposed in [`RcParams`]
/// All lengths in points.
mod missing_params {
    /// Axes rectangle in normalized figure coordinates, from the bottom left corner
    pub const AXES_LEFT: f32 = 0.125;
    pub const AXES_BOTTOM: f32 = 0.11;
    pub const AXES_RIGHT: f32 = 0.9;
    pub const AXES_TOP: f32 = 0.88;

    pub const TITLE_MARGIN: f32 = 6.0;
    pub const LABEL_MARGIN: f32 = 4.0;

    pub const TICK_SIZE: f32 = 3.5;
    pub const TICK_LABEL_MARGIN: f32 = 3.5;
    pub const TICK_WIDTH: f32 = 0.8;
    pub const AXES_SPINE_WIDTH: f32 = 0.8;
    pub const GRID_WIDTH: f32 = 0.8;

    pub const LEGEND_PADDING: f32 = 4.0;
    pub const LEGEND_SPACING: f32 = 2.0;
    pub const LEGEND_SAMPLE_LEN: f32 = 20.0;
    pub const LEGEND_BORDER_WIDTH: f32 = 0.8;

    /// Average advance of a glyph relative to the font size, used for text extents
    pub const CHAR_WIDTH_RATIO: f32 = 0.6;
}
