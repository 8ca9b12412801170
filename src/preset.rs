//! Preset catalog: ready-made theme configurations.
use std::io;

use crate::catalog::Catalog;
use crate::rc::BaseStyle;
use crate::theme::ThemeParams;
use crate::{Error, Result};

/// A named theme configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Preset {
    /// Catalog key
    pub name: String,
    /// One-line summary of the intended use
    pub description: String,
    /// Base style applied before the Oxford overrides
    pub base_style: BaseStyle,
    /// Registry names or hex literals. `None` selects the default cycle.
    pub color_cycle: Option<Vec<String>>,
    /// Multiplier of every font size
    pub font_scale: f32,
}

impl Preset {
    /// Parameters for [`Context::apply_theme`](crate::Context::apply_theme)
    pub fn theme_params(&self) -> ThemeParams {
        ThemeParams {
            base_style: self.base_style,
            color_cycle: self.color_cycle.clone(),
            font_scale: self.font_scale,
        }
    }
}

struct Entry {
    description: &'static str,
    base_style: BaseStyle,
    color_cycle: Option<&'static [&'static str]>,
    font_scale: f32,
}

static PRESETS: Catalog<Entry> = Catalog::new(&[
    (
        "colorblind",
        Entry {
            description: "Colorblind-friendly palette",
            base_style: BaseStyle::Paper,
            color_cycle: Some(&["oxford_blue", "orange", "aqua", "mauve", "vivid_green"]),
            font_scale: 1.0,
        },
    ),
    (
        "default",
        Entry {
            description: "Standard Oxford theme for academic papers",
            base_style: BaseStyle::Paper,
            color_cycle: None,
            font_scale: 1.0,
        },
    ),
    (
        "minimal",
        Entry {
            description: "Minimal styling with grid",
            base_style: BaseStyle::Whitegrid,
            color_cycle: Some(&["oxford_blue", "royal_blue", "aqua", "cerulean_blue"]),
            font_scale: 1.0,
        },
    ),
    (
        "notebook",
        Entry {
            description: "Optimized for Jupyter notebooks",
            base_style: BaseStyle::Notebook,
            color_cycle: None,
            font_scale: 1.1,
        },
    ),
    (
        "poster",
        Entry {
            description: "Extra large fonts for conference posters",
            base_style: BaseStyle::Paper,
            color_cycle: None,
            font_scale: 1.8,
        },
    ),
    (
        "presentation",
        Entry {
            description: "Larger fonts and elements for slides",
            base_style: BaseStyle::Paper,
            color_cycle: None,
            font_scale: 1.4,
        },
    ),
    (
        "print",
        Entry {
            description: "High contrast for printed materials",
            base_style: BaseStyle::Paper,
            color_cycle: Some(&["oxford_blue", "coral", "aqua", "orange", "vivid_green"]),
            font_scale: 1.0,
        },
    ),
]);

/// Get a copy of preset `name` (case-insensitive)
pub fn get_preset_config(name: &str) -> Result<Preset> {
    let (key, entry) = PRESETS
        .get_entry(name)
        .ok_or_else(|| Error::UnknownPreset {
            name: name.to_string(),
            valid: names(),
        })?;
    Ok(Preset {
        name: key.to_string(),
        description: entry.description.to_string(),
        base_style: entry.base_style,
        color_cycle: entry
            .color_cycle
            .map(|cycle| cycle.iter().map(|c| c.to_string()).collect()),
        font_scale: entry.font_scale,
    })
}

/// Sorted names of the catalog
pub fn names() -> Vec<&'static str> {
    PRESETS.names()
}

/// Write the table of presets to `w`
pub fn write_presets<W: io::Write>(w: &mut W) -> io::Result<()> {
    let rule = "=".repeat(70);
    writeln!(w, "Available Oxford Theme Presets:")?;
    writeln!(w, "{rule}")?;
    writeln!(w, "{:<15} {:<55}", "Name", "Description")?;
    writeln!(w, "{}", "-".repeat(70))?;
    for (name, entry) in PRESETS.iter() {
        writeln!(w, "{:<15} {:<55}", name, entry.description)?;
    }
    writeln!(w, "{rule}")?;
    writeln!(w)?;
    writeln!(w, "Usage: apply_preset(\"preset_name\")")
}

/// Print the table of presets to the standard output
pub fn list_presets() {
    let stdout = io::stdout();
    if let Err(err) = write_presets(&mut stdout.lock()) {
        log::warn!("could not list presets: {err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Context;

    #[test]
    fn catalog_is_well_formed() {
        assert!(PRESETS.is_well_formed());
        assert_eq!(PRESETS.len(), 7);
        for (name, entry) in PRESETS.iter() {
            assert!(entry.font_scale > 0.0, "{name}");
            assert!(!entry.color_cycle.is_some_and(|c| c.is_empty()), "{name}");
        }
    }

    #[test]
    fn every_preset_applies() {
        for name in names() {
            let mut ctx = Context::new();
            ctx.apply_preset(name).unwrap();
        }
    }

    #[test]
    fn get_config() {
        let p = get_preset_config("Presentation").unwrap();
        assert_eq!(p.name, "presentation");
        assert_eq!(p.base_style, BaseStyle::Paper);
        assert_eq!(p.color_cycle, None);
        assert_eq!(p.font_scale, 1.4);

        let p = get_preset_config("notebook").unwrap();
        assert_eq!(p.description, "Optimized for Jupyter notebooks");

        let p = get_preset_config("minimal").unwrap();
        assert_eq!(p.base_style, BaseStyle::Whitegrid);
        assert_eq!(
            p.color_cycle.as_deref(),
            Some(&["oxford_blue", "royal_blue", "aqua", "cerulean_blue"].map(String::from)[..])
        );
    }

    #[test]
    fn returns_independent_copies() {
        let mut p = get_preset_config("default").unwrap();
        p.font_scale = 1.3;
        p.color_cycle = Some(vec!["coral".into()]);
        let fresh = get_preset_config("default").unwrap();
        assert_eq!(fresh.font_scale, 1.0);
        assert_eq!(fresh.color_cycle, None);
    }

    #[test]
    fn unknown_preset_lists_valid_names() {
        match get_preset_config("fancy") {
            Err(Error::UnknownPreset { name, valid }) => {
                assert_eq!(name, "fancy");
                assert_eq!(
                    valid,
                    vec![
                        "colorblind",
                        "default",
                        "minimal",
                        "notebook",
                        "poster",
                        "presentation",
                        "print"
                    ]
                );
            }
            other => panic!("unexpected result: {other:?}"),
        }
        let mut ctx = Context::new();
        assert!(ctx.apply_preset("fancy").is_err());
        assert_eq!(ctx.rc(), ctx.defaults());
    }

    #[test]
    fn poster_fonts_are_larger() {
        let mut ctx = Context::new();
        ctx.apply_preset("default").unwrap();
        let default = ctx.rc().clone();
        ctx.apply_preset("poster").unwrap();
        let poster = ctx.rc();

        let sizes = |rc: &crate::RcParams| {
            [
                rc.font_size,
                rc.label_font_size(),
                rc.title_font_size(),
                rc.xtick_font_size(),
                rc.ytick_font_size(),
                rc.legend_font_size(),
                rc.figure_title_font_size(),
            ]
        };
        for (p, d) in sizes(poster).into_iter().zip(sizes(&default)) {
            assert!(p >= 1.5 * d, "{p} < 1.5 * {d}");
        }
    }

    #[test]
    fn table_lists_every_preset() {
        let mut buf = Vec::new();
        write_presets(&mut buf).unwrap();
        let table = String::from_utf8(buf).unwrap();
        assert!(table.starts_with("Available Oxford Theme Presets:"));
        for name in names() {
            assert!(table.contains(name));
        }
        assert!(table.contains("Extra large fonts for conference posters"));
        assert!(table.contains("Optimized for Jupyter notebooks"));
    }
}
