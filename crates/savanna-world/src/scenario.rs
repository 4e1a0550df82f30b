//! Serializable world setups that a driver can load and build.

use crate::agent::Agent;
use crate::world::World;
use savanna_core::{BehaviorConfig, Cell, Point, Result, Species, WorldConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// One animal to place when the scenario is built
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub name: String,
    pub species: Species,
    /// Random position when omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Point>,
    /// Full energy when omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub energy: Option<i32>,
}

impl RosterEntry {
    pub fn new(name: impl Into<String>, species: Species) -> Self {
        Self {
            name: name.into(),
            species,
            position: None,
            energy: None,
        }
    }
}

/// A complete world setup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    #[serde(default)]
    pub world: WorldConfig,
    #[serde(default)]
    pub behavior: BehaviorConfig,
    /// Plant cells added on top of the random initial plants
    #[serde(default)]
    pub plants: Vec<Cell>,
    #[serde(default)]
    pub roster: Vec<RosterEntry>,
}

impl Default for Scenario {
    /// The classic savanna: five predator species against a few hippos.
    fn default() -> Self {
        let mut roster: Vec<RosterEntry> = [
            ("Simba", Species::Lion),
            ("ShereKhan", Species::Tiger),
            ("Akela", Species::Wolf),
            ("Bello", Species::Dog),
            ("Minka", Species::Cat),
            ("Willi", Species::Lion),
            ("Bernd", Species::Tiger),
            ("Andre", Species::Wolf),
            ("Wuffi", Species::Dog),
            ("Tetzi", Species::Cat),
            ("mimi", Species::Cat),
            ("Wolle", Species::Hippo),
        ]
        .into_iter()
        .map(|(name, species)| RosterEntry::new(name, species))
        .collect();
        roster.extend((1..=3).map(|i| RosterEntry::new(format!("Hippo{i}"), Species::Hippo)));

        Self {
            name: "savanna".to_string(),
            world: WorldConfig::default(),
            behavior: BehaviorConfig::default(),
            plants: Vec::new(),
            roster,
        }
    }
}

impl Scenario {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Build the world: random plants first, then explicit plants, then the
    /// roster in order.
    pub fn build(&self) -> Result<World> {
        let mut world = World::from_config(&self.world, self.behavior.clone())?;

        for cell in &self.plants {
            world.plant(*cell)?;
        }

        for entry in &self.roster {
            let mut agent = Agent::new(entry.name.clone(), entry.species);
            if let Some(energy) = entry.energy {
                agent = agent.with_energy(energy);
            }
            world.add_agent(agent, entry.position)?;
        }

        info!(
            scenario = %self.name,
            width = world.width(),
            height = world.height(),
            agents = world.agents().len(),
            plants = world.plants().len(),
            "Scenario built"
        );
        Ok(world)
    }
}
