use crate::config::NEW_ROUND_FRAMES;
use crate::entities::{Direction, Player, Tank};
use crate::world::World;

pub(super) fn spawn_tanks(world: &World) -> [Tank; 2] {
    Player::ALL.map(|player| Tank {
        player,
        pos: world.spawn_point(player),
        facing: Direction::Down,
        turret_angle: 0.0,
        reload_frames: 0,
        moved_this_frame: false,
        alive: true,
        new_round_countdown: NEW_ROUND_FRAMES,
    })
}
