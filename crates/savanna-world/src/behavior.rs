//! Per-agent decision rules. One routine serves every species: it branches on
//! diet and reads movement, perception and meal size from the species profile.

use crate::event::WorldEvent;
use crate::movement;
use crate::world::World;
use savanna_core::{AgentId, Diet, Point};

impl World {
    /// Let one agent take its turn. Exhausted agents do nothing.
    pub(crate) fn act(&mut self, id: AgentId) {
        let Some(agent) = self.agent_mut(id) else {
            return;
        };
        if !agent.is_active() {
            return;
        }
        agent.metrics_mut().active_ticks += 1;
        let diet = agent.diet();
        self.summary_mut().acted += 1;

        match diet {
            Diet::Herbivore => self.forage(id),
            Diet::Carnivore => self.hunt(id),
        }
    }

    fn forage(&mut self, id: AgentId) {
        let Some(agent) = self.agent(id) else {
            return;
        };
        let position = agent.position();
        let profile = agent.profile();
        let cell = position.cell();

        if self.plants_mut().remove(cell) {
            let Some(agent) = self.agent_mut(id) else {
                return;
            };
            agent.eat();
            agent.metrics_mut().grazes += 1;
            let name = agent.name().to_string();
            self.emit(WorldEvent::Grazed {
                agent: id,
                name,
                cell,
            });
            return;
        }

        match self.find_nearest_plant(position, profile.perception) {
            Some((target, d)) if d <= profile.step => {
                let cost = self.behavior().move_cost(d);
                if let Some(agent) = self.agent_mut(id) {
                    agent.place(target.center());
                    agent.spend(cost);
                }
            }
            Some((target, _)) => self.move_toward(id, target.center()),
            None => {
                let threshold = self.behavior().herbivore_rest_below;
                self.rest_or_wander(id, threshold);
            }
        }
    }

    fn hunt(&mut self, id: AgentId) {
        let Some(agent) = self.agent(id) else {
            return;
        };
        let perception = agent.profile().perception;
        let capture = self.behavior().capture_distance;

        match self.find_nearest_herbivore(id, perception) {
            Some((prey_id, d)) if d <= capture => {
                // The turn is spent on the strike even if the prey is gone
                let Some(prey) = self.remove_agent(prey_id) else {
                    return;
                };
                let Some(hunter) = self.agent_mut(id) else {
                    return;
                };
                hunter.eat();
                hunter.metrics_mut().kills += 1;
                let hunter_name = hunter.name().to_string();
                self.emit(WorldEvent::Killed {
                    hunter: id,
                    hunter_name,
                    prey: prey_id,
                    prey_name: prey.name().to_string(),
                });
            }
            Some((prey_id, _)) => {
                if let Some(target) = self.agent(prey_id).map(|prey| prey.position()) {
                    self.move_toward(id, target);
                }
            }
            None => {
                let threshold = self.behavior().carnivore_rest_below;
                self.rest_or_wander(id, threshold);
            }
        }
    }

    fn rest_or_wander(&mut self, id: AgentId, rest_below: i32) {
        let gain = self.behavior().rest_gain();
        let Some(agent) = self.agent_mut(id) else {
            return;
        };
        if agent.energy() < rest_below {
            agent.rest(gain);
        } else {
            let (dx, dy) = movement::random_heading(self.rng_mut());
            self.move_along(id, dx, dy);
        }
    }

    fn move_toward(&mut self, id: AgentId, target: Point) {
        let Some(from) = self.agent(id).map(|a| a.position()) else {
            return;
        };
        self.move_along(id, target.x - from.x, target.y - from.y);
    }

    /// One step of the agent's stride along `(dx, dy)`, reflecting off the
    /// world edges, then pay for the stride.
    fn move_along(&mut self, id: AgentId, dx: f64, dy: f64) {
        let bounds = self.bounds();
        let Some(agent) = self.agent(id) else {
            return;
        };
        let stride = agent.profile().step;
        let Some(step) = movement::directed_step(agent.position(), dx, dy, stride, &bounds) else {
            return;
        };
        let cost = self.behavior().move_cost(stride);

        let Some(agent) = self.agent_mut(id) else {
            return;
        };
        agent.place(step.target);
        agent.spend(cost);

        if step.bounced {
            agent.metrics_mut().bounces += 1;
            let name = agent.name().to_string();
            self.emit(WorldEvent::Bounced { agent: id, name });
        }
    }
}
