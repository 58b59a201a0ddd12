//! Reacting species of the ammonia synthesis N₂ + 3H₂ ⇌ 2NH₃.

use std::fmt;

/// Species taking part in the synthesis reaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Species {
    /// Hydrogen (H₂)
    H2,
    /// Nitrogen (N₂)
    N2,
    /// Ammonia (NH₃)
    NH3,
}

impl Species {
    pub const ALL: [Species; 3] = [Species::H2, Species::N2, Species::NH3];

    /// Key used for this species in a reagent mapping.
    pub fn key(&self) -> &'static str {
        match self {
            Species::H2 => "H_2",
            Species::N2 => "N_2",
            Species::NH3 => "NH_3",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl std::str::FromStr for Species {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "H_2" | "H2" | "HYDROGEN" => Ok(Species::H2),
            "N_2" | "N2" | "NITROGEN" => Ok(Species::N2),
            "NH_3" | "NH3" | "AMMONIA" => Ok(Species::NH3),
            _ => Err("unknown species"),
        }
    }
}
