//! Configuration types for the simulation.

use crate::error::{Error, Result};
use crate::types::{Bounds, MAX_ENERGY};
use serde::{Deserialize, Serialize};

/// World configuration parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Width of the world grid
    pub width: i32,
    /// Height of the world grid
    pub height: i32,
    /// Random seed for reproducibility (`None` seeds from entropy)
    pub seed: Option<u64>,
    /// Plants scattered at random when the world is built
    pub initial_plants: usize,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 40,
            height: 22,
            seed: Some(7),
            initial_plants: 100,
        }
    }
}

impl WorldConfig {
    pub fn bounds(&self) -> Result<Bounds> {
        Bounds::new(self.width, self.height)
    }
}

/// Behavior and energy tuning shared by every agent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Probability per tick that one plant regrows
    pub regrow_chance: f64,
    /// Distance within which a carnivore kills its prey
    pub capture_distance: f64,
    /// Herbivores with no food in sight rest below this energy
    pub herbivore_rest_below: i32,
    /// Carnivores with no prey in sight rest below this energy
    pub carnivore_rest_below: i32,
    /// Energy regained per hour of rest
    pub rest_gain_per_hour: i32,
    /// Hours rested when an agent decides to rest
    pub rest_hours: i32,
    /// Movement costs `max(min_move_cost, floor(distance / move_cost_divisor))`
    pub move_cost_divisor: f64,
    pub min_move_cost: i32,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            regrow_chance: 0.06,
            capture_distance: 1.0,
            herbivore_rest_below: 40,
            carnivore_rest_below: 35,
            rest_gain_per_hour: 15,
            rest_hours: 1,
            move_cost_divisor: 2.0,
            min_move_cost: 1,
        }
    }
}

impl BehaviorConfig {
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.regrow_chance) {
            return Err(Error::Validation(format!(
                "regrow_chance must be within [0, 1], got {}",
                self.regrow_chance
            )));
        }
        if !(self.capture_distance >= 0.0) {
            return Err(Error::Validation(format!(
                "capture_distance must be non-negative, got {}",
                self.capture_distance
            )));
        }
        if !(self.move_cost_divisor > 0.0) {
            return Err(Error::Validation(format!(
                "move_cost_divisor must be positive, got {}",
                self.move_cost_divisor
            )));
        }
        if self.min_move_cost < 0 {
            return Err(Error::Validation(format!(
                "min_move_cost must be non-negative, got {}",
                self.min_move_cost
            )));
        }
        if !(0..=24).contains(&self.rest_hours) {
            return Err(Error::Validation(format!(
                "rest_hours must be within [0, 24], got {}",
                self.rest_hours
            )));
        }
        let energies = [
            ("rest_gain_per_hour", self.rest_gain_per_hour),
            ("herbivore_rest_below", self.herbivore_rest_below),
            ("carnivore_rest_below", self.carnivore_rest_below),
        ];
        for (field, value) in energies {
            if !(0..=MAX_ENERGY).contains(&value) {
                return Err(Error::Validation(format!(
                    "{field} must be within [0, {MAX_ENERGY}], got {value}"
                )));
            }
        }
        Ok(())
    }

    /// Energy cost of covering `distance` in one move
    pub fn move_cost(&self, distance: f64) -> i32 {
        ((distance / self.move_cost_divisor).floor() as i32).max(self.min_move_cost)
    }

    /// Energy regained by one rest
    pub fn rest_gain(&self) -> i32 {
        self.rest_gain_per_hour
            .max(0)
            .saturating_mul(self.rest_hours.max(0))
    }
}

/// Driver loop configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Number of ticks to run the simulation
    pub num_ticks: u64,
    /// Print the world every this many ticks (0 disables periodic renders)
    pub render_every: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            num_ticks: 50,
            render_every: 5,
        }
    }
}
