//! Figure export with publication settings.
//!
//! [`save_figure`] validates the options, normalizes the file name and renders the figure
//! with the backend matching the format:
//!  - `svg` through `oxtheme-svg` (feature `svg`)
//!  - `png`, `tiff`, `jpg`, `jpeg`, `raw` and `rgba` through `oxtheme-pxl` (feature `pxl`)
//!
//! `pdf`, `eps`, `ps` and `pgf` are accepted formats, but no backend writes them.
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;

use oxtheme_base::geom;

use crate::drawing::{Drawing, PreparedFigure};
use crate::figure::Figure;
use crate::journal::JournalProfile;
use crate::{Error, Result};

/// Conventional resolution for publication
pub const PUBLICATION_DPI: u32 = 300;
/// Conventional resolution for high quality print
pub const PUBLICATION_DPI_HIGH: u32 = 600;

/// Output file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Format {
    /// Portable Network Graphics
    #[default]
    Png,
    /// Scalable Vector Graphics
    Svg,
    /// Portable Document Format
    Pdf,
    /// Encapsulated PostScript
    Eps,
    /// Tagged Image File Format
    Tiff,
    /// JPEG, `.jpg` extension
    Jpg,
    /// JPEG, `.jpeg` extension
    Jpeg,
    /// PostScript
    Ps,
    /// Raw RGBA bytes, without header
    Raw,
    /// Raw RGBA bytes, without header
    Rgba,
    /// LaTeX PGF commands
    Pgf,
}

impl Format {
    /// Sorted list of the format identifiers
    pub const SUPPORTED: &'static [&'static str] = &[
        "eps", "jpeg", "jpg", "pdf", "pgf", "png", "ps", "raw", "rgba", "svg", "tiff",
    ];

    /// File extension, without leading dot
    pub const fn extension(&self) -> &'static str {
        match self {
            Format::Png => "png",
            Format::Svg => "svg",
            Format::Pdf => "pdf",
            Format::Eps => "eps",
            Format::Tiff => "tiff",
            Format::Jpg => "jpg",
            Format::Jpeg => "jpeg",
            Format::Ps => "ps",
            Format::Raw => "raw",
            Format::Rgba => "rgba",
            Format::Pgf => "pgf",
        }
    }

    /// Whether the format is rendered to pixels
    pub const fn is_raster(&self) -> bool {
        matches!(
            self,
            Format::Png | Format::Tiff | Format::Jpg | Format::Jpeg | Format::Raw | Format::Rgba
        )
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "png" => Ok(Format::Png),
            "svg" => Ok(Format::Svg),
            "pdf" => Ok(Format::Pdf),
            "eps" => Ok(Format::Eps),
            "tiff" => Ok(Format::Tiff),
            "jpg" => Ok(Format::Jpg),
            "jpeg" => Ok(Format::Jpeg),
            "ps" => Ok(Format::Ps),
            "raw" => Ok(Format::Raw),
            "rgba" => Ok(Format::Rgba),
            "pgf" => Ok(Format::Pgf),
            _ => Err(Error::invalid_config(format!(
                "Format '{s}' not supported. Supported formats: {}",
                Format::SUPPORTED.join(", ")
            ))),
        }
    }
}

/// Region of the figure that is exported
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BBox {
    /// Everything drawn, backgrounds excepted, grown by `pad` inches
    Tight {
        /// Padding in inches
        pad: f32,
    },
    /// The whole figure
    Figure,
}

impl Default for BBox {
    fn default() -> Self {
        BBox::Tight { pad: 0.1 }
    }
}

impl FromStr for BBox {
    type Err = Error;

    /// `tight` (default padding) or `figure`
    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "tight" => Ok(BBox::default()),
            "figure" => Ok(BBox::Figure),
            _ => Err(Error::invalid_config(format!(
                "Bounding box '{s}' not recognized. Use: tight, figure"
            ))),
        }
    }
}

/// Options of [`save_figure`]
#[derive(Debug, Clone)]
pub struct SaveOptions {
    /// Output format
    pub format: Format,
    /// Resolution of raster formats, in dots per inch
    pub dpi: u32,
    /// Exported region
    pub bbox: BBox,
    /// Do not paint the figure and axes backgrounds
    pub transparent: bool,
    /// Font file used to render text in raster formats.
    /// Without it, raster output has no text.
    pub font: Option<Arc<[u8]>>,
}

impl Default for SaveOptions {
    fn default() -> Self {
        SaveOptions {
            format: Format::Png,
            dpi: PUBLICATION_DPI,
            bbox: BBox::default(),
            transparent: false,
            font: None,
        }
    }
}

impl SaveOptions {
    /// Format and resolution of a journal profile.
    /// The figure size of the profile is set at figure creation, and the whole figure is exported.
    pub fn from_profile(profile: &JournalProfile) -> Self {
        SaveOptions {
            format: profile.format,
            dpi: profile.dpi,
            bbox: BBox::Figure,
            ..Default::default()
        }
    }

    /// Replace the format
    pub fn with_format(self, format: Format) -> Self {
        SaveOptions { format, ..self }
    }

    /// Replace the resolution
    pub fn with_dpi(self, dpi: u32) -> Self {
        SaveOptions { dpi, ..self }
    }

    /// Replace the exported region
    pub fn with_bbox(self, bbox: BBox) -> Self {
        SaveOptions { bbox, ..self }
    }

    /// Toggle transparent backgrounds
    pub fn with_transparent(self, transparent: bool) -> Self {
        SaveOptions {
            transparent,
            ..self
        }
    }

    /// Font used for raster text
    pub fn with_font(self, font: impl Into<Arc<[u8]>>) -> Self {
        SaveOptions {
            font: Some(font.into()),
            ..self
        }
    }
}

/// Append `.{ext}` to `path`, unless its file name already ends with it (case-insensitive)
pub fn normalize_filename(path: &Path, format: Format) -> PathBuf {
    let suffix = format!(".{}", format.extension());
    let has_ext = path
        .file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.to_lowercase().ends_with(&suffix));
    if has_ext {
        path.to_path_buf()
    } else {
        let mut path = path.as_os_str().to_owned();
        path.push(&suffix);
        PathBuf::from(path)
    }
}

/// Save `fig` to `path` and return the path of the written file.
///
/// The extension of the format is appended to `path` when missing.
/// Nothing is written if the options are invalid.
pub fn save_figure<P: AsRef<Path>>(fig: &Figure, path: P, opts: &SaveOptions) -> Result<PathBuf> {
    if opts.dpi == 0 {
        return Err(Error::invalid_config("resolution must be positive"));
    }
    if let BBox::Tight { pad } = opts.bbox {
        if !(pad.is_finite() && pad >= 0.0) {
            return Err(Error::invalid_config(format!(
                "bounding box padding must be positive (got {pad})"
            )));
        }
    }
    if !fig.size().is_positive() {
        return Err(Error::invalid_config(format!(
            "figure size must be positive (got {}x{})",
            fig.size().width(),
            fig.size().height()
        )));
    }

    let path = normalize_filename(path.as_ref(), opts.format);
    let prepared = fig.prepare();
    let viewport = match opts.bbox {
        BBox::Tight { pad } => prepared.tight_bbox().outset(pad * 72.0),
        BBox::Figure => prepared.figure_rect(),
    };

    match opts.format {
        Format::Svg => save_svg(&prepared, &viewport, &path, opts)?,
        format if format.is_raster() => save_pxl(&prepared, &viewport, &path, opts)?,
        format => return Err(Error::NoBackend(format)),
    }

    log::info!(
        "saved figure to {} ({}, {} dpi)",
        path.display(),
        opts.format,
        opts.dpi
    );
    Ok(path)
}

#[cfg(feature = "svg")]
fn save_svg(
    prepared: &PreparedFigure,
    viewport: &geom::Rect,
    path: &Path,
    opts: &SaveOptions,
) -> Result<()> {
    use oxtheme_base::render::Surface;

    let mut surface = oxtheme_svg::SvgSurface::new(viewport.width(), viewport.height());
    surface.prepare(viewport);
    prepared.draw(&mut surface, opts.transparent);
    surface.save_svg(path)?;
    Ok(())
}

#[cfg(not(feature = "svg"))]
fn save_svg(
    _prepared: &PreparedFigure,
    _viewport: &geom::Rect,
    _path: &Path,
    _opts: &SaveOptions,
) -> Result<()> {
    Err(Error::NoBackend(Format::Svg))
}

#[cfg(feature = "pxl")]
fn save_pxl(
    prepared: &PreparedFigure,
    viewport: &geom::Rect,
    path: &Path,
    opts: &SaveOptions,
) -> Result<()> {
    use oxtheme_base::render::Surface;
    use oxtheme_pxl::{FontFace, PxlSurface, RasterFormat};

    let to_px = |pt: f32| ((pt / 72.0 * opts.dpi as f32).round() as u32).max(1);
    let (width, height) = (to_px(viewport.width()), to_px(viewport.height()));
    let mut surface = PxlSurface::new(width, height).ok_or_else(|| {
        Error::invalid_config(format!("cannot allocate a {width}x{height} pixels surface"))
    })?;
    if let Some(data) = &opts.font {
        match FontFace::from_data(data.clone(), 0) {
            Ok(font) => surface = surface.with_font(font),
            Err(err) => log::warn!("ignoring font face: {err}"),
        }
    }
    surface.prepare(viewport);
    prepared.draw(&mut surface, opts.transparent);

    let format = match opts.format {
        Format::Tiff => RasterFormat::Tiff,
        Format::Jpg | Format::Jpeg => RasterFormat::Jpeg,
        Format::Raw | Format::Rgba => RasterFormat::Rgba,
        _ => RasterFormat::Png,
    };
    surface.save(path, format)?;
    Ok(())
}

#[cfg(not(feature = "pxl"))]
fn save_pxl(
    _prepared: &PreparedFigure,
    _viewport: &geom::Rect,
    _path: &Path,
    opts: &SaveOptions,
) -> Result<()> {
    Err(Error::NoBackend(opts.format))
}
