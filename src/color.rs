//! Color registry: the official University of Oxford brand colors.
//!
//! Every color is available as a `#RRGGBB` constant and by name through [`resolve_color`].
//! Names are lower case with underscores and looked up case-insensitively.

use crate::catalog::Catalog;
use crate::{Error, Result};

pub use oxtheme_base::color::{ColorU8, ParseError};

// Primary
/// Primary brand color
pub const OXFORD_BLUE: &str = "#002147";
/// Primary Care Health Sciences accent
pub const OXFORD_PHC: &str = "#8A1751";

// Secondary
/// Mauve (`#776885`)
pub const MAUVE: &str = "#776885";
/// Peach (`#E08D79`)
pub const PEACH: &str = "#E08D79";
/// Potters Pink (`#ED9390`)
pub const POTTERS_PINK: &str = "#ED9390";
/// Dusk (`#C4A29E`)
pub const DUSK: &str = "#C4A29E";
/// Lilac (`#D1BDD5`)
pub const LILAC: &str = "#D1BDD5";
/// Sienna (`#994636`)
pub const SIENNA: &str = "#994636";
/// Red (`#BE0F34`)
pub const RED: &str = "#BE0F34";
/// Plum (`#7F055F`)
pub const PLUM: &str = "#7F055F";
/// Coral (`#FE615A`)
pub const CORAL: &str = "#FE615A";
/// Lavender (`#D4CDF4`)
pub const LAVENDER: &str = "#D4CDF4";
/// Orange (`#FB5607`)
pub const ORANGE: &str = "#FB5607";
/// Pink (`#E6007E`)
pub const PINK: &str = "#E6007E";
/// Green (`#426A5A`)
pub const GREEN: &str = "#426A5A";
/// Ocean Grey (`#789E9E`)
pub const OCEAN_GREY: &str = "#789E9E";
/// Yellow Ochre (`#E2C044`)
pub const YELLOW_OCHRE: &str = "#E2C044";
/// Cool Grey (`#E4F0EF`)
pub const COOL_GREY: &str = "#E4F0EF";
/// Sky Blue (`#B9D6F2`)
pub const SKY_BLUE: &str = "#B9D6F2";
/// Sage Green (`#A0AF84`)
pub const SAGE_GREEN: &str = "#A0AF84";
/// Viridian (`#15616D`)
pub const VIRIDIAN: &str = "#15616D";
/// Royal Blue (`#1D42A6`)
pub const ROYAL_BLUE: &str = "#1D42A6";
/// Aqua (`#00AAB4`)
pub const AQUA: &str = "#00AAB4";
/// Vivid Green (`#65E5AE`)
pub const VIVID_GREEN: &str = "#65E5AE";
/// Lime Green (`#95C11F`)
pub const LIME_GREEN: &str = "#95C11F";
/// Cerulean Blue (`#49B6FF`)
pub const CERULEAN_BLUE: &str = "#49B6FF";
/// Lemon Yellow (`#F7EF66`)
pub const LEMON_YELLOW: &str = "#F7EF66";

// Neutral
/// Charcoal (`#211D1C`)
pub const CHARCOAL: &str = "#211D1C";
/// Ash Grey (`#61615F`)
pub const ASH_GREY: &str = "#61615F";
/// Umber (`#89827A`)
pub const UMBER: &str = "#89827A";
/// Stone Grey (`#D9D8D6`)
pub const STONE_GREY: &str = "#D9D8D6";
/// Shell Grey (`#F1EEE9`)
pub const SHELL_GREY: &str = "#F1EEE9";
/// Off White (`#F2F0F0`)
pub const OFF_WHITE: &str = "#F2F0F0";

// Metallic
/// Gold (`#FFD700`)
pub const GOLD: &str = "#FFD700";
/// Silver (`#C0C0C0`)
pub const SILVER: &str = "#C0C0C0";

// Thesis
/// White (`#FFFFFF`)
pub const WHITE: &str = "#FFFFFF";
/// Black (`#000000`)
pub const BLACK: &str = "#000000";
/// Thesis Purple 1 (`#5F4D78`)
pub const THESIS_PURPLE_1: &str = "#5F4D78";
/// Bright Blue (`#54ABE7`)
pub const BRIGHT_BLUE: &str = "#54ABE7";
/// Thesis Purple 2 (`#8A5C9B`)
pub const THESIS_PURPLE_2: &str = "#8A5C9B";
/// Slate Blue 1 (`#57779D`)
pub const SLATE_BLUE_1: &str = "#57779D";
/// Slate Blue 2 (`#57789E`)
pub const SLATE_BLUE_2: &str = "#57789E";
/// Periwinkle (`#779ECD`)
pub const PERIWINKLE: &str = "#779ECD";
/// Iris (`#6D60B0`)
pub const IRIS: &str = "#6D60B0";
/// Deep Teal (`#14616E`)
pub const DEEP_TEAL: &str = "#14616E";
/// Golden Yellow (`#DFBF45`)
pub const GOLDEN_YELLOW: &str = "#DFBF45";
/// Dusty Mauve (`#786A83`)
pub const DUSTY_MAUVE: &str = "#786A83";
/// Wisteria (`#9391C8`)
pub const WISTERIA: &str = "#9391C8";
/// Powder Blue (`#C9EEFE`)
pub const POWDER_BLUE: &str = "#C9EEFE";
/// Grey Blue (`#9FA7C3`)
pub const GREY_BLUE: &str = "#9FA7C3";
/// Amethyst (`#7E79BC`)
pub const AMETHYST: &str = "#7E79BC";
/// Navy Blue (`#06264B`)
pub const NAVY_BLUE: &str = "#06264B";
/// Soft Purple (`#A585B2`)
pub const SOFT_PURPLE: &str = "#A585B2";
/// Pale Grey (`#E4E7ED`)
pub const PALE_GREY: &str = "#E4E7ED";
/// Heather (`#C5C0DF`)
pub const HEATHER: &str = "#C5C0DF";
/// Cornflower (`#759ECC`)
pub const CORNFLOWER: &str = "#759ECC";

static REGISTRY: Catalog<&str> = Catalog::new(&[
    ("amethyst", AMETHYST),
    ("aqua", AQUA),
    ("ash_grey", ASH_GREY),
    ("black", BLACK),
    ("bright_blue", BRIGHT_BLUE),
    ("cerulean_blue", CERULEAN_BLUE),
    ("charcoal", CHARCOAL),
    ("cool_grey", COOL_GREY),
    ("coral", CORAL),
    ("cornflower", CORNFLOWER),
    ("deep_teal", DEEP_TEAL),
    ("dusk", DUSK),
    ("dusty_mauve", DUSTY_MAUVE),
    ("gold", GOLD),
    ("golden_yellow", GOLDEN_YELLOW),
    ("green", GREEN),
    ("grey_blue", GREY_BLUE),
    ("heather", HEATHER),
    ("iris", IRIS),
    ("lavender", LAVENDER),
    ("lemon_yellow", LEMON_YELLOW),
    ("lilac", LILAC),
    ("lime_green", LIME_GREEN),
    ("mauve", MAUVE),
    ("navy_blue", NAVY_BLUE),
    ("ocean_grey", OCEAN_GREY),
    ("off_white", OFF_WHITE),
    ("orange", ORANGE),
    ("oxford_blue", OXFORD_BLUE),
    ("oxford_phc", OXFORD_PHC),
    ("pale_grey", PALE_GREY),
    ("peach", PEACH),
    ("periwinkle", PERIWINKLE),
    ("pink", PINK),
    ("plum", PLUM),
    ("potters_pink", POTTERS_PINK),
    ("powder_blue", POWDER_BLUE),
    ("red", RED),
    ("royal_blue", ROYAL_BLUE),
    ("sage_green", SAGE_GREEN),
    ("shell_grey", SHELL_GREY),
    ("sienna", SIENNA),
    ("silver", SILVER),
    ("sky_blue", SKY_BLUE),
    ("slate_blue_1", SLATE_BLUE_1),
    ("slate_blue_2", SLATE_BLUE_2),
    ("soft_purple", SOFT_PURPLE),
    ("stone_grey", STONE_GREY),
    ("thesis_purple_1", THESIS_PURPLE_1),
    ("thesis_purple_2", THESIS_PURPLE_2),
    ("umber", UMBER),
    ("viridian", VIRIDIAN),
    ("vivid_green", VIVID_GREEN),
    ("white", WHITE),
    ("wisteria", WISTERIA),
    ("yellow_ochre", YELLOW_OCHRE),
]);

/// Default color cycle of the theme, starting with Oxford Blue
pub const DEFAULT_CYCLE: [&str; 8] = [
    OXFORD_BLUE,
    ROYAL_BLUE,
    AQUA,
    CORAL,
    VIVID_GREEN,
    ORANGE,
    MAUVE,
    CERULEAN_BLUE,
];

/// Hex value of the registry color `name`, e.g. `"coral"` or `"Oxford_Blue"`
pub fn resolve_color(name: &str) -> Result<&'static str> {
    REGISTRY
        .get(name)
        .copied()
        .ok_or_else(|| Error::UnknownColor {
            name: name.to_string(),
            valid: names(),
        })
}

/// Same as [`resolve_color`], converted for rendering
pub fn resolve_color_u8(name: &str) -> Result<ColorU8> {
    let hex = resolve_color(name)?;
    hex.parse()
        .map_err(|err| Error::invalid_config(format!("color '{name}' ({hex}): {err}")))
}

/// Sorted names of the registry
pub fn names() -> Vec<&'static str> {
    REGISTRY.names()
}

/// Iterate over `(name, hex)` pairs, sorted by name
pub fn iter() -> impl Iterator<Item = (&'static str, &'static str)> {
    REGISTRY.iter().map(|(n, hex)| (n, *hex))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_canonical_hex(hex: &str) -> bool {
        let b = hex.as_bytes();
        b.len() == 7 && b[0] == b'#' && b[1..].iter().all(u8::is_ascii_hexdigit)
    }

    #[test]
    fn registry_is_well_formed() {
        assert!(REGISTRY.is_well_formed());
        assert_eq!(REGISTRY.len(), 56);
        for (name, hex) in iter() {
            assert!(is_canonical_hex(hex), "{name}: {hex}");
            assert!(resolve_color_u8(name).is_ok());
        }
    }

    #[test]
    fn resolve_is_case_insensitive() {
        assert_eq!(resolve_color("coral").unwrap(), "#FE615A");
        assert_eq!(resolve_color("Coral").unwrap(), resolve_color("coral").unwrap());
        assert_eq!(resolve_color("OXFORD_BLUE").unwrap(), OXFORD_BLUE);
        assert_eq!(resolve_color_u8("oxford_blue").unwrap().rgb(), [0, 33, 71]);
    }

    #[test]
    fn unknown_color_lists_valid_names() {
        match resolve_color("not_a_color") {
            Err(Error::UnknownColor { name, valid }) => {
                assert_eq!(name, "not_a_color");
                assert_eq!(valid.len(), 56);
                assert!(valid.windows(2).all(|w| w[0] < w[1]));
            }
            other => panic!("unexpected result: {other:?}"),
        }
        assert!(resolve_color("").is_err());
        assert!(resolve_color("#002147").is_err());
    }

    #[test]
    fn default_cycle_resolves() {
        assert_eq!(DEFAULT_CYCLE[0], OXFORD_BLUE);
        for hex in DEFAULT_CYCLE {
            assert!(iter().any(|(_, h)| h == hex));
        }
    }
}
