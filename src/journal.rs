//! Export profiles matching the figure requirements of journals
use oxtheme_base::geom;

use crate::catalog::Catalog;
use crate::export::Format;
use crate::{Error, Result};

/// Figure size, resolution and format expected by a journal
#[derive(Debug, Clone, PartialEq)]
pub struct JournalProfile {
    /// Lower-case journal name
    pub name: String,
    /// Figure size in inches
    pub size: geom::Size,
    /// Resolution in dots per inch
    pub dpi: u32,
    /// Preferred output format
    pub format: Format,
}

struct Entry {
    size: geom::Size,
    dpi: u32,
    format: Format,
}

const PROFILE_TABLE: &[(&str, Entry)] = &[
    (
        "bmj",
        Entry {
            size: geom::Size::new(3.27, 2.5),
            dpi: 300,
            format: Format::Eps,
        },
    ),
    (
        "lancet",
        Entry {
            size: geom::Size::new(3.27, 2.5),
            dpi: 300,
            format: Format::Tiff,
        },
    ),
    (
        "nature",
        Entry {
            size: geom::Size::new(3.5, 2.5),
            dpi: 300,
            format: Format::Svg,
        },
    ),
    (
        "nature_double",
        Entry {
            size: geom::Size::new(7.0, 5.0),
            dpi: 300,
            format: Format::Svg,
        },
    ),
    (
        "plos",
        Entry {
            size: geom::Size::new(6.83, 5.0),
            dpi: 300,
            format: Format::Tiff,
        },
    ),
];

static PROFILES: Catalog<Entry> = Catalog::new(PROFILE_TABLE);

/// Get a copy of the profile of journal `name` (case-insensitive)
pub fn get_journal_profile(name: &str) -> Result<JournalProfile> {
    let (key, entry) = PROFILES
        .get_entry(name)
        .ok_or_else(|| Error::UnknownProfile {
            name: name.to_string(),
            valid: names(),
        })?;
    Ok(JournalProfile {
        name: key.to_string(),
        size: entry.size,
        dpi: entry.dpi,
        format: entry.format,
    })
}

/// Sorted names of the catalog
pub fn names() -> Vec<&'static str> {
    PROFILES.names()
}
