//! Built-in named palettes.
//!
//! Palettes are addressed as `"Package:Palette"` (e.g. `"ColorBrewer:Set2"`)
//! against an immutable static table. Lookup is read-only and carries no
//! per-call state.

mod data;

use std::collections::BTreeMap;

use lazy_static::lazy_static;

use crate::color::Rgb;
use crate::error::Error;

lazy_static! {
    /// `package -> palette -> hex colors`, ordered for stable listings.
    static ref TABLE: BTreeMap<&'static str, BTreeMap<&'static str, &'static [&'static str]>> = {
        let mut table = BTreeMap::new();
        for (package, palettes) in data::PALETTES {
            let entry: &mut BTreeMap<_, _> = table.entry(*package).or_default();
            for (name, colors) in *palettes {
                entry.insert(*name, *colors);
            }
        }
        table
    };
}

/// Look up a built-in palette by its `"Package:Palette"` name.
pub fn get_palette(name: &str) -> Result<Vec<Rgb>, Error> {
    let unknown = || Error::UnknownIdentifier {
        kind: "palette",
        name: name.to_string(),
    };

    let (package, palette) = name.split_once(':').ok_or_else(unknown)?;
    let hex = TABLE
        .get(package)
        .and_then(|palettes| palettes.get(palette))
        .ok_or_else(unknown)?;

    // The table is static and validated by tests; parsing cannot fail for
    // well-formed entries, but propagate rather than unwrap anyway.
    hex.iter()
        .map(|h| h.parse::<Rgb>().map_err(Error::from))
        .collect()
}

/// Every available palette as `(package, palette names)` pairs.
pub fn available_palettes() -> Vec<(&'static str, Vec<&'static str>)> {
    TABLE
        .iter()
        .map(|(package, palettes)| (*package, palettes.keys().copied().collect()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn looks_up_colorbrewer_set2() {
        let colors = get_palette("ColorBrewer:Set2").unwrap();
        assert_eq!(colors.len(), 8);
        assert_eq!(colors[0].hex(), "#66c2a5");
        assert_eq!(colors[1].hex(), "#fc8d62");
    }

    #[test]
    fn unknown_palette_is_rejected() {
        for name in ["ColorBrewer:NonExistentPalette", "NoSuchPackage:Set2", "Set2"] {
            assert!(matches!(
                get_palette(name),
                Err(Error::UnknownIdentifier { .. })
            ));
        }
    }

    #[test]
    fn every_entry_parses() {
        for (package, palettes) in available_palettes() {
            for palette in palettes {
                let name = format!("{}:{}", package, palette);
                let colors = get_palette(&name).unwrap();
                assert!(!colors.is_empty(), "{} is empty", name);
            }
        }
    }

    #[test]
    fn listing_is_stable_and_sorted() {
        let listing = available_palettes();
        assert!(listing.iter().any(|(package, _)| *package == "ColorBrewer"));
        let packages: Vec<_> = listing.iter().map(|(p, _)| *p).collect();
        let mut sorted = packages.clone();
        sorted.sort_unstable();
        assert_eq!(packages, sorted);
    }
}
