//! World simulation engine.
//!
//! A bounded 2D world of plants and animals, advanced one tick at a time.
//! Herbivores graze, carnivores hunt herbivores, and everyone rests or wanders
//! when there is nothing to chase.

pub mod agent;
mod behavior;
pub mod event;
pub mod movement;
pub mod plants;
pub mod render;
pub mod scenario;
pub mod world;

pub use agent::Agent;
pub use event::{EventSink, WorldEvent};
pub use plants::PlantField;
pub use scenario::{RosterEntry, Scenario};
pub use world::{TickSummary, World, INSPECT_RADIUS};
