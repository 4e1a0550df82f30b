//! Plain-text rendering of the world grid.

use crate::world::World;

pub const EMPTY_GLYPH: &str = "·";
pub const PLANT_GLYPH: &str = "🌿";

/// One line per row, one glyph per cell. Agents are drawn over plants and
/// later agents over earlier ones.
pub fn render_text(world: &World) -> String {
    let width = world.width() as usize;
    let height = world.height() as usize;
    let mut raster = vec![vec![EMPTY_GLYPH; width]; height];

    for cell in world.plants().iter() {
        raster[cell.y as usize][cell.x as usize] = PLANT_GLYPH;
    }

    for agent in world.agents() {
        let cell = agent.position().cell();
        if world.bounds().contains_cell(cell) {
            raster[cell.y as usize][cell.x as usize] = agent.symbol();
        }
    }

    raster
        .iter()
        .map(|row| row.concat())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::Agent;
    use savanna_core::{Cell, Point, Species};

    #[test]
    fn test_render_dimensions() {
        let world = World::new(6, 3, Some(1)).unwrap();
        let text = render_text(&world);
        let rows: Vec<&str> = text.lines().collect();
        assert_eq!(rows.len(), 3);
        for row in rows {
            assert_eq!(row.chars().count(), 6);
        }
    }

    #[test]
    fn test_render_glyphs() {
        let mut world = World::new(3, 2, Some(1)).unwrap();
        world.plant(Cell::new(0, 0)).unwrap();
        world.plant(Cell::new(2, 1)).unwrap();
        world
            .add_agent(Agent::new("Minka", Species::Cat), Some(Point::new(1.4, 0.2)))
            .unwrap();
        world
            .add_agent(Agent::new("Wolle", Species::Hippo), Some(Point::new(2.0, 1.0)))
            .unwrap();

        assert_eq!(world.render(), "🌿🐈·\n··🦛");
    }
}
