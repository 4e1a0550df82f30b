//! Species data: every behavioral difference between animals is expressed as
//! data in `SpeciesProfile`, looked up from the `Species` tag. The world uses a
//! single `Agent` type and a single behavior routine that branches only on
//! `Diet`.

use crate::types::Diet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Animal archetypes available to scenarios
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    Lion,
    Tiger,
    Wolf,
    Dog,
    Cat,
    Hippo,
}

/// Fixed per-species constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeciesProfile {
    pub diet: Diet,
    /// Maximum distance covered in one tick.
    pub step: f64,
    /// Radius within which food or prey is noticed.
    pub perception: f64,
    /// Energy gained from one meal, before the cap.
    pub eat_gain: i32,
    pub symbol: &'static str,
    pub sound: &'static str,
}

const LION: SpeciesProfile = SpeciesProfile {
    diet: Diet::Carnivore,
    step: 1.2,
    perception: 8.0,
    eat_gain: 25,
    symbol: "🦁",
    sound: "Roooar!",
};

const TIGER: SpeciesProfile = SpeciesProfile {
    diet: Diet::Carnivore,
    step: 1.3,
    perception: 8.0,
    eat_gain: 24,
    symbol: "🐯",
    sound: "Grrrr!",
};

const WOLF: SpeciesProfile = SpeciesProfile {
    diet: Diet::Carnivore,
    step: 1.2,
    perception: 8.0,
    eat_gain: 20,
    symbol: "🐺",
    sound: "Awoooo!",
};

const DOG: SpeciesProfile = SpeciesProfile {
    diet: Diet::Carnivore,
    step: 1.1,
    perception: 7.0,
    eat_gain: 18,
    symbol: "🐕",
    sound: "Woof! Woof!",
};

const CAT: SpeciesProfile = SpeciesProfile {
    diet: Diet::Carnivore,
    step: 1.0,
    perception: 6.5,
    eat_gain: 16,
    symbol: "🐈",
    sound: "Meow!",
};

const HIPPO: SpeciesProfile = SpeciesProfile {
    diet: Diet::Herbivore,
    step: 0.9,
    perception: 6.0,
    eat_gain: 22,
    symbol: "🦛",
    sound: "Grunt! (deep snort)",
};

impl Species {
    pub fn profile(&self) -> &'static SpeciesProfile {
        match self {
            Species::Lion => &LION,
            Species::Tiger => &TIGER,
            Species::Wolf => &WOLF,
            Species::Dog => &DOG,
            Species::Cat => &CAT,
            Species::Hippo => &HIPPO,
        }
    }

    pub fn diet(&self) -> Diet {
        self.profile().diet
    }

    pub fn all() -> [Species; 6] {
        [
            Species::Lion,
            Species::Tiger,
            Species::Wolf,
            Species::Dog,
            Species::Cat,
            Species::Hippo,
        ]
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Species::Lion => "lion",
            Species::Tiger => "tiger",
            Species::Wolf => "wolf",
            Species::Dog => "dog",
            Species::Cat => "cat",
            Species::Hippo => "hippo",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_hippo_grazes() {
        for species in Species::all() {
            let expected = if species == Species::Hippo {
                Diet::Herbivore
            } else {
                Diet::Carnivore
            };
            assert_eq!(species.diet(), expected, "{species}");
        }
    }

    #[test]
    fn test_eat_gains_within_observed_range() {
        for species in Species::all() {
            let gain = species.profile().eat_gain;
            assert!((16..=25).contains(&gain), "{species} gains {gain}");
        }
        assert_eq!(Species::Hippo.profile().eat_gain, 22);
        assert_eq!(Species::Lion.profile().eat_gain, 25);
    }

    #[test]
    fn test_species_serialization() {
        let json = serde_json::to_string(&Species::Tiger).unwrap();
        assert_eq!(json, "\"tiger\"");
        let parsed: Species = serde_json::from_str("\"hippo\"").unwrap();
        assert_eq!(parsed, Species::Hippo);
    }
}
