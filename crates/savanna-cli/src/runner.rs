//! Terminal driver that ticks a world and prints what happens.

use anyhow::Result;
use savanna_core::{Census, RunConfig};
use savanna_world::{World, WorldEvent};
use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;
use tracing::{info, instrument};

pub struct Runner<W: Write> {
    world: World,
    config: RunConfig,
    out: W,
    pending: Rc<RefCell<Vec<WorldEvent>>>,
    quiet: bool,
}

impl<W: Write> Runner<W> {
    /// Take over a built world. Its observer is replaced by a buffer the
    /// runner drains after every tick.
    pub fn new(mut world: World, config: RunConfig, out: W) -> Self {
        let pending = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&pending);
        world.set_observer(move |event: &WorldEvent| sink.borrow_mut().push(event.clone()));

        Self {
            world,
            config,
            out,
            pending,
            quiet: false,
        }
    }

    /// Suppress per-tick event lines; renders and the summary still print
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Every animal says hello
    pub fn introduce(&mut self) -> Result<()> {
        for agent in self.world.agents() {
            writeln!(self.out, "{}", agent.make_sound())?;
        }
        Ok(())
    }

    #[instrument(skip(self), fields(num_ticks = self.config.num_ticks))]
    pub fn run(&mut self) -> Result<Census> {
        info!("Starting simulation for {} ticks", self.config.num_ticks);

        for _ in 0..self.config.num_ticks {
            let summary = self.world.tick();
            let tick = summary.tick;

            writeln!(self.out, "\n=== Tick {tick} ===")?;
            let events = std::mem::take(&mut *self.pending.borrow_mut());
            if !self.quiet {
                for event in &events {
                    writeln!(self.out, "{event}")?;
                }
            }

            if self.should_render(tick) {
                writeln!(self.out, "{}", self.world.render())?;
            }

            if tick % 10 == 0 {
                let census = self.world.census();
                info!(
                    tick,
                    herbivores = census.herbivores,
                    carnivores = census.carnivores,
                    exhausted = census.exhausted,
                    plants = census.plants,
                    mean_energy = format!("{:.1}", census.mean_energy),
                    "Population census"
                );
            }
        }

        writeln!(self.out, "\nSimulation finished.")?;
        let census = self.world.census();
        info!(
            total_ticks = census.tick,
            survivors = census.population(),
            herbivores = census.herbivores,
            carnivores = census.carnivores,
            total_kills = census.total_kills,
            total_grazes = census.total_grazes,
            active_ticks = census.total_active_ticks,
            distance = format!("{:.1}", census.total_distance),
            "Simulation complete"
        );
        Ok(census)
    }

    fn should_render(&self, tick: u64) -> bool {
        tick == 1 || (self.config.render_every > 0 && tick % self.config.render_every == 0)
    }
}
