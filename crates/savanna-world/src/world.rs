//! The world: plants, agents and the tick loop.
//!
//! `World::tick` takes `&mut self` and runs to completion, so ticks can never
//! overlap. The boxed observer is not `Send`; an embedder that wants to drive
//! a world from several threads has to wrap and serialize access itself.

use crate::agent::Agent;
use crate::event::{EventSink, WorldEvent};
use crate::plants::PlantField;
use crate::render;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use savanna_core::{
    AgentId, BehaviorConfig, Bounds, Cell, Census, Diet, Point, Result, WorldConfig,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info, instrument, trace};

/// Radius used by front ends to pick the agent under a pointer
pub const INSPECT_RADIUS: f64 = 1.2;

/// What happened during one call to `World::tick`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TickSummary {
    pub tick: u64,
    /// Agents that had energy to act
    pub acted: usize,
    pub grazes: usize,
    pub kills: usize,
    pub bounces: usize,
    /// Cell picked by plant regrowth, if the roll succeeded
    pub regrown: Option<Cell>,
}

impl TickSummary {
    fn new(tick: u64) -> Self {
        Self {
            tick,
            ..Default::default()
        }
    }

    pub fn events(&self) -> usize {
        self.grazes + self.kills + self.bounces
    }
}

pub struct World {
    bounds: Bounds,
    plants: PlantField,
    agents: Vec<Agent>,
    behavior: BehaviorConfig,
    rng: ChaCha8Rng,
    observer: Option<Box<dyn EventSink>>,
    tick: u64,
    next_id: u64,
    summary: TickSummary,
}

impl World {
    /// An empty world with default behavior tuning.
    ///
    /// A `seed` makes every stochastic choice reproducible; `None` seeds
    /// from entropy.
    pub fn new(width: i32, height: i32, seed: Option<u64>) -> Result<Self> {
        Self::with_behavior(width, height, seed, BehaviorConfig::default())
    }

    pub fn with_behavior(
        width: i32,
        height: i32,
        seed: Option<u64>,
        behavior: BehaviorConfig,
    ) -> Result<Self> {
        let bounds = Bounds::new(width, height)?;
        behavior.validate()?;

        let rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };

        Ok(Self {
            bounds,
            plants: PlantField::new(bounds),
            agents: Vec::new(),
            behavior,
            rng,
            observer: None,
            tick: 0,
            next_id: 0,
            summary: TickSummary::default(),
        })
    }

    /// Build a world and scatter its initial plants
    pub fn from_config(config: &WorldConfig, behavior: BehaviorConfig) -> Result<Self> {
        let mut world = Self::with_behavior(config.width, config.height, config.seed, behavior)?;
        world.add_plants(config.initial_plants);
        Ok(world)
    }

    pub fn width(&self) -> i32 {
        self.bounds.width
    }

    pub fn height(&self) -> i32 {
        self.bounds.height
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn behavior(&self) -> &BehaviorConfig {
        &self.behavior
    }

    pub fn current_tick(&self) -> u64 {
        self.tick
    }

    pub fn plants(&self) -> &PlantField {
        &self.plants
    }

    /// Live agents in their current turn order
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn agent(&self, id: AgentId) -> Option<&Agent> {
        self.agents.iter().find(|a| a.id() == id)
    }

    pub fn contains_agent(&self, id: AgentId) -> bool {
        self.agents.iter().any(|a| a.id() == id)
    }

    /// Install the single observer, replacing any previous one
    pub fn set_observer(&mut self, sink: impl EventSink + 'static) {
        self.observer = Some(Box::new(sink));
    }

    pub fn clear_observer(&mut self) {
        self.observer = None;
    }

    /// Plant `count` uniformly random cells; duplicates collapse.
    pub fn add_plants(&mut self, count: usize) {
        self.plants.scatter(count, &mut self.rng);
        debug!(count, plants = self.plants.len(), "Scattered plants");
    }

    /// Plant one specific cell. Returns `false` if it already held a plant.
    pub fn plant(&mut self, cell: Cell) -> Result<bool> {
        self.plants.insert(cell)
    }

    /// With probability `chance`, plant one random cell (no-op when occupied).
    pub fn regrow_plants(&mut self, chance: f64) -> Option<Cell> {
        let regrown = self.plants.regrow(chance, &mut self.rng);
        if let Some(cell) = regrown {
            trace!(tick = self.tick, %cell, "Plant regrowth");
        }
        regrown
    }

    /// Place an agent and append it to the turn order.
    ///
    /// Without a position the agent lands on a uniformly random point; an
    /// explicit position outside the world is rejected.
    pub fn add_agent(&mut self, mut agent: Agent, position: Option<Point>) -> Result<AgentId> {
        let position = match position {
            Some(point) => self.bounds.check_point(point)?,
            None => Point::new(
                self.rng.gen_range(0.0..=self.bounds.max_x()),
                self.rng.gen_range(0.0..=self.bounds.max_y()),
            ),
        };

        let id = AgentId(self.next_id);
        self.next_id += 1;
        agent.assign(id, position);

        debug!(
            agent_id = %id,
            name = agent.name(),
            species = %agent.species(),
            %position,
            "Agent added"
        );
        self.agents.push(agent);
        Ok(id)
    }

    /// Nearest plant within `max_dist` of a point
    pub fn find_nearest_plant(&self, from: Point, max_dist: f64) -> Option<(Cell, f64)> {
        self.plants.nearest(from, max_dist)
    }

    /// Nearest live herbivore other than `hunter` within `max_dist`.
    ///
    /// Ties go to the agent earliest in the current turn order.
    pub fn find_nearest_herbivore(&self, hunter: AgentId, max_dist: f64) -> Option<(AgentId, f64)> {
        let from = self.agent(hunter)?.position();
        let mut best: Option<(AgentId, f64)> = None;
        for other in &self.agents {
            if other.id() == hunter || other.diet() != Diet::Herbivore {
                continue;
            }
            let d = from.distance(other.position());
            if d <= max_dist && best.map_or(true, |(_, bd)| d < bd) {
                best = Some((other.id(), d));
            }
        }
        best
    }

    /// Agent closest to a point within `radius`, for pointer inspection
    pub fn inspect(&self, at: Point, radius: f64) -> Option<&Agent> {
        let mut best: Option<(&Agent, f64)> = None;
        for agent in &self.agents {
            let d = at.distance(agent.position());
            if d <= radius && best.map_or(true, |(_, bd)| d < bd) {
                best = Some((agent, d));
            }
        }
        best.map(|(agent, _)| agent)
    }

    /// Advance the world by one step.
    ///
    /// Shuffles the turn order, lets every agent that is still alive act once,
    /// then rolls for plant regrowth.
    pub fn tick(&mut self) -> TickSummary {
        self.tick += 1;
        self.summary = TickSummary::new(self.tick);

        self.agents.shuffle(&mut self.rng);
        let turn_order: Vec<AgentId> = self.agents.iter().map(Agent::id).collect();

        for id in turn_order {
            // Might have been eaten earlier this tick
            if self.contains_agent(id) {
                self.act(id);
            }
        }

        self.summary.regrown = self.regrow_plants(self.behavior.regrow_chance);

        trace!(
            tick = self.tick,
            agents = self.agents.len(),
            plants = self.plants.len(),
            events = self.summary.events(),
            "Tick complete"
        );
        std::mem::take(&mut self.summary)
    }

    /// Run several ticks and return the final census
    #[instrument(skip(self), fields(start_tick = self.tick))]
    pub fn run(&mut self, num_ticks: u64) -> Census {
        for _ in 0..num_ticks {
            self.tick();
            if self.tick % 100 == 0 {
                info!(
                    tick = self.tick,
                    agents = self.agents.len(),
                    plants = self.plants.len(),
                    "Simulation progress"
                );
            }
        }
        self.census()
    }

    pub fn census(&self) -> Census {
        let mut census = Census::new(self.tick, self.plants.len());
        for agent in &self.agents {
            census.observe(agent.diet(), agent.energy(), agent.metrics());
        }
        census
    }

    /// Text dump of the grid, one line per row
    pub fn render(&self) -> String {
        render::render_text(self)
    }

    pub(crate) fn agent_mut(&mut self, id: AgentId) -> Option<&mut Agent> {
        self.agents.iter_mut().find(|a| a.id() == id)
    }

    pub(crate) fn remove_agent(&mut self, id: AgentId) -> Option<Agent> {
        let index = self.agents.iter().position(|a| a.id() == id)?;
        Some(self.agents.remove(index))
    }

    pub(crate) fn plants_mut(&mut self) -> &mut PlantField {
        &mut self.plants
    }

    pub(crate) fn rng_mut(&mut self) -> &mut ChaCha8Rng {
        &mut self.rng
    }

    pub(crate) fn summary_mut(&mut self) -> &mut TickSummary {
        &mut self.summary
    }

    /// Report an event to the log and the observer
    pub(crate) fn emit(&mut self, event: WorldEvent) {
        match &event {
            WorldEvent::Bounced { .. } => self.summary.bounces += 1,
            WorldEvent::Grazed { .. } => self.summary.grazes += 1,
            WorldEvent::Killed { .. } => self.summary.kills += 1,
        }
        debug!(tick = self.tick, event = %event, "World event");
        if let Some(observer) = self.observer.as_mut() {
            observer.notify(&event);
        }
    }
}

impl fmt::Debug for World {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("World")
            .field("bounds", &self.bounds)
            .field("tick", &self.tick)
            .field("plants", &self.plants.len())
            .field("agents", &self.agents.len())
            .field("has_observer", &self.observer.is_some())
            .finish_non_exhaustive()
    }
}
