//! Per-agent statistics and population summaries.

use crate::types::Diet;
use serde::{Deserialize, Serialize};

/// Activity counters for a single agent
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgentMetrics {
    /// Ticks in which the agent had energy to act
    pub active_ticks: u64,
    /// Plants eaten
    pub grazes: u32,
    /// Prey killed
    pub kills: u32,
    /// Ticks spent resting
    pub rests: u32,
    /// Moves that reflected off the world boundary
    pub bounces: u32,
    /// Total distance moved
    pub distance_travelled: f64,
}

impl AgentMetrics {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Snapshot of the population at one tick
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Census {
    pub tick: u64,
    pub herbivores: usize,
    pub carnivores: usize,
    /// Agents with no energy left
    pub exhausted: usize,
    pub plants: usize,
    pub mean_energy: f64,
    pub total_grazes: u64,
    pub total_kills: u64,
    /// Agent-ticks spent acting, summed over the live population
    pub total_active_ticks: u64,
    pub total_distance: f64,
}

impl Census {
    pub fn new(tick: u64, plants: usize) -> Self {
        Self {
            tick,
            plants,
            ..Default::default()
        }
    }

    pub fn population(&self) -> usize {
        self.herbivores + self.carnivores
    }

    /// Fold one live agent into the summary
    pub fn observe(&mut self, diet: Diet, energy: i32, metrics: &AgentMetrics) {
        let n = self.population() as f64;

        // Incremental mean
        self.mean_energy = (self.mean_energy * n + energy as f64) / (n + 1.0);

        match diet {
            Diet::Herbivore => self.herbivores += 1,
            Diet::Carnivore => self.carnivores += 1,
        }
        if energy <= 0 {
            self.exhausted += 1;
        }
        self.total_grazes += metrics.grazes as u64;
        self.total_kills += metrics.kills as u64;
        self.total_active_ticks += metrics.active_ticks;
        self.total_distance += metrics.distance_travelled;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_census_observe() {
        let mut census = Census::new(4, 12);

        let mut hunter = AgentMetrics::new();
        hunter.kills = 2;
        hunter.active_ticks = 4;
        hunter.distance_travelled = 3.5;
        let mut grazer = AgentMetrics::new();
        grazer.grazes = 3;
        grazer.active_ticks = 2;
        grazer.distance_travelled = 1.0;

        census.observe(Diet::Carnivore, 80, &hunter);
        census.observe(Diet::Herbivore, 40, &grazer);
        census.observe(Diet::Herbivore, 0, &AgentMetrics::new());

        assert_eq!(census.tick, 4);
        assert_eq!(census.plants, 12);
        assert_eq!(census.carnivores, 1);
        assert_eq!(census.herbivores, 2);
        assert_eq!(census.exhausted, 1);
        assert_eq!(census.population(), 3);
        assert_eq!(census.mean_energy, 40.0);
        assert_eq!(census.total_kills, 2);
        assert_eq!(census.total_grazes, 3);
        assert_eq!(census.total_active_ticks, 6);
        assert_eq!(census.total_distance, 4.5);
    }

    #[test]
    fn test_empty_census() {
        let census = Census::new(0, 0);
        assert_eq!(census.population(), 0);
        assert_eq!(census.mean_energy, 0.0);
    }
}
