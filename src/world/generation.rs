use raylib::prelude::Vector2;

use crate::config::{TANK_SIZE, TILE_SIZE};
use crate::entities::{Block, Player};
use crate::level::{Cell, Level};
use crate::math::vec2;

use super::{Border, World};

pub(super) fn build_world(level: &Level, width: f32, height: f32) -> World {
    let mut blocks = Vec::new();
    let mut spawns = [vec2(0.0, 0.0); 2];

    for (x, y, cell) in level.cells() {
        match cell {
            Cell::Wall => blocks.push(Block {
                pos: cell_origin(x, y),
            }),
            Cell::Spawn(player) => spawns[player.index()] = spawn_position(x, y),
            Cell::Empty => {}
        }
    }

    World {
        level_name: level.name().to_string(),
        width,
        height,
        blocks,
        borders: Border::field(width, height),
        spawns,
    }
}

fn cell_origin(x: usize, y: usize) -> Vector2 {
    vec2(x as f32 * TILE_SIZE, y as f32 * TILE_SIZE)
}

/// Tanks start centred in their spawn cell.
fn spawn_position(x: usize, y: usize) -> Vector2 {
    let inset = (TILE_SIZE - TANK_SIZE) * 0.5;
    let origin = cell_origin(x, y);
    vec2(origin.x + inset, origin.y + inset)
}
