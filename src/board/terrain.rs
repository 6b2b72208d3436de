//! Terrain types for board cells.
//!
//! Every terrain has a canonical name used by both file formats and a
//! selectable flag. Metadata lives in a lookup table indexed by the
//! `Terrain` enum discriminant.

use std::fmt;

/// The number of terrain variants, including `Other`.
pub const TERRAIN_COUNT: usize = 7;

/// The land-cover type of a single cell.
///
/// The `#[repr(u8)]` attribute enables use as an array index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Terrain {
    Woods = 0,
    #[default]
    Grass = 1,
    Desert = 2,
    Tundra = 3,
    Mountain = 4,
    Water = 5,
    Other = 6,
}

/// All terrain variants in index order.
pub const ALL_TERRAINS: [Terrain; TERRAIN_COUNT] = [
    Terrain::Woods,
    Terrain::Grass,
    Terrain::Desert,
    Terrain::Tundra,
    Terrain::Mountain,
    Terrain::Water,
    Terrain::Other,
];

/// Static metadata for a terrain.
pub struct TerrainInfo {
    pub name: &'static str,
    pub abbr: char,
    pub is_selectable: bool,
}

/// Compile-time lookup table: index by `Terrain as usize`.
pub const TERRAIN_INFO: [TerrainInfo; TERRAIN_COUNT] = [
    TerrainInfo { name: "Woods", abbr: 'F', is_selectable: true },
    TerrainInfo { name: "Grass", abbr: 'G', is_selectable: true },
    TerrainInfo { name: "Desert", abbr: 'D', is_selectable: true },
    TerrainInfo { name: "Tundra", abbr: 'T', is_selectable: false },
    TerrainInfo { name: "Mountain", abbr: 'M', is_selectable: false },
    TerrainInfo { name: "Water", abbr: 'W', is_selectable: true },
    TerrainInfo { name: "Other", abbr: 'O', is_selectable: false },
];

impl Terrain {
    /// Returns the canonical name written to save files.
    pub const fn name(self) -> &'static str {
        TERRAIN_INFO[self as usize].name
    }

    /// Returns the single uppercase character used in compact grid notation.
    pub const fn abbr(self) -> char {
        TERRAIN_INFO[self as usize].abbr
    }

    /// Returns true if cells of this terrain may be selected.
    pub const fn is_selectable(self) -> bool {
        TERRAIN_INFO[self as usize].is_selectable
    }

    /// Parses a terrain from its canonical name.
    ///
    /// Matching is exact and case-sensitive. Anything unrecognized, including
    /// the empty string, becomes `Other` so that unknown data never aborts a load.
    pub fn from_name(name: &str) -> Terrain {
        Terrain::parse_exact(name).unwrap_or(Terrain::Other)
    }

    /// Strict variant of `from_name`: returns None for unrecognized names.
    ///
    /// `"Other"` itself is accepted.
    pub fn parse_exact(name: &str) -> Option<Terrain> {
        ALL_TERRAINS.iter().copied().find(|t| t.name() == name)
    }

    /// Parses a terrain from its compact grid character (case-insensitive).
    pub fn from_abbr(c: char) -> Option<Terrain> {
        let upper = c.to_ascii_uppercase();
        ALL_TERRAINS.iter().copied().find(|t| t.abbr() == upper)
    }
}

impl fmt::Display for Terrain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_matches_discriminants() {
        for (i, t) in ALL_TERRAINS.iter().enumerate() {
            assert_eq!(*t as usize, i);
        }
    }

    #[test]
    fn name_roundtrip() {
        for t in ALL_TERRAINS {
            assert_eq!(Terrain::from_name(t.name()), t);
        }
    }

    #[test]
    fn unknown_names_become_other() {
        assert_eq!(Terrain::from_name("bogus"), Terrain::Other);
        assert_eq!(Terrain::from_name(""), Terrain::Other);
        // case-sensitive
        assert_eq!(Terrain::from_name("grass"), Terrain::Other);
        assert_eq!(Terrain::parse_exact("grass"), None);
        assert_eq!(Terrain::parse_exact("Water"), Some(Terrain::Water));
    }

    #[test]
    fn selectable_set() {
        let selectable: Vec<Terrain> = ALL_TERRAINS
            .iter()
            .copied()
            .filter(|t| t.is_selectable())
            .collect();
        assert_eq!(
            selectable,
            vec![Terrain::Woods, Terrain::Grass, Terrain::Desert, Terrain::Water]
        );
    }

    #[test]
    fn abbr_roundtrip_and_unique() {
        for t in ALL_TERRAINS {
            assert_eq!(Terrain::from_abbr(t.abbr()), Some(t));
            assert_eq!(Terrain::from_abbr(t.abbr().to_ascii_lowercase()), Some(t));
        }
        assert_eq!(Terrain::from_abbr('x'), None);
    }

    #[test]
    fn display_uses_name() {
        assert_eq!(Terrain::Mountain.to_string(), "Mountain");
        assert_eq!(Terrain::default(), Terrain::Grass);
    }
}
