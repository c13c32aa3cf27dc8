mod border;
mod generation;

use raylib::prelude::{Rectangle, Vector2};

use crate::config::{WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::entities::{Block, Player};
use crate::level::Level;
use crate::math::rects_overlap;

pub use border::Border;

/// Static arena for one round: everything built from the level grid that
/// never moves.
pub struct World {
    pub level_name: String,
    pub width: f32,
    pub height: f32,
    pub blocks: Vec<Block>,
    pub borders: [Border; 4],
    pub spawns: [Vector2; 2],
}

impl World {
    pub fn from_level(level: &Level) -> Self {
        generation::build_world(level, WINDOW_WIDTH as f32, WINDOW_HEIGHT as f32)
    }

    pub fn field_bounds(&self) -> Rectangle {
        Rectangle {
            x: 0.0,
            y: 0.0,
            width: self.width,
            height: self.height,
        }
    }

    pub fn spawn_point(&self, player: Player) -> Vector2 {
        self.spawns[player.index()]
    }

    pub fn hits_block(&self, r: &Rectangle) -> bool {
        self.blocks.iter().any(|block| rects_overlap(&block.rect(), r))
    }
}
