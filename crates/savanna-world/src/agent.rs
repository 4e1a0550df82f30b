//! Agent state and management.

use savanna_core::{AgentId, AgentMetrics, Diet, Point, Species, SpeciesProfile, MAX_ENERGY};
use serde::Serialize;

/// An animal in the world.
///
/// Energy and position are only changed through the world's behavior rules,
/// which keep energy inside `[0, MAX_ENERGY]` and the position inside the
/// world bounds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Agent {
    id: AgentId,
    name: String,
    species: Species,
    position: Point,
    energy: i32,
    metrics: AgentMetrics,
}

impl Agent {
    /// A new agent at full energy. The world assigns its id and position.
    pub fn new(name: impl Into<String>, species: Species) -> Self {
        Self {
            id: AgentId(0),
            name: name.into(),
            species,
            position: Point::new(0.0, 0.0),
            energy: MAX_ENERGY,
            metrics: AgentMetrics::new(),
        }
    }

    /// Start with the given energy, clamped into range
    pub fn with_energy(mut self, energy: i32) -> Self {
        self.energy = energy.clamp(0, MAX_ENERGY);
        self
    }

    pub fn id(&self) -> AgentId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn species(&self) -> Species {
        self.species
    }

    pub fn profile(&self) -> &'static SpeciesProfile {
        self.species.profile()
    }

    pub fn diet(&self) -> Diet {
        self.profile().diet
    }

    pub fn symbol(&self) -> &'static str {
        self.profile().symbol
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn energy(&self) -> i32 {
        self.energy
    }

    pub fn metrics(&self) -> &AgentMetrics {
        &self.metrics
    }

    pub fn is_active(&self) -> bool {
        self.energy > 0
    }

    pub fn make_sound(&self) -> String {
        format!("{}: {}", self.name, self.profile().sound)
    }

    /// One-line summary for tooltips and status lines
    pub fn describe(&self) -> String {
        format!("{} ({}), energy {}", self.name, self.diet(), self.energy)
    }

    pub(crate) fn assign(&mut self, id: AgentId, position: Point) {
        self.id = id;
        self.position = position;
    }

    pub(crate) fn place(&mut self, position: Point) {
        self.metrics.distance_travelled += self.position.distance(position);
        self.position = position;
    }

    /// Apply this species' meal, capped
    pub(crate) fn eat(&mut self) {
        self.add_energy(self.profile().eat_gain);
    }

    pub(crate) fn rest(&mut self, gain: i32) {
        self.add_energy(gain);
        self.metrics.rests += 1;
    }

    pub(crate) fn spend(&mut self, cost: i32) {
        self.energy = self.energy.saturating_sub(cost.max(0)).max(0);
    }

    pub(crate) fn metrics_mut(&mut self) -> &mut AgentMetrics {
        &mut self.metrics
    }

    fn add_energy(&mut self, amount: i32) {
        self.energy = self.energy.saturating_add(amount.max(0)).min(MAX_ENERGY);
    }
}
