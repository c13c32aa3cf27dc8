use raylib::prelude::{Rectangle, Vector2};

use crate::config::{FPS, TANK_SIZE, TANK_SPEED, TURRET_ROT_SPEED};
use crate::entities::{Axis, Direction, Tank, TurretTurn};
use crate::math::{rects_overlap, vec2, wrap_degrees};
use crate::world::World;

/// Whole pixels a tank covers in one frame.
pub(super) fn step_length() -> f32 {
    (TANK_SPEED / FPS as f32).trunc()
}

pub(super) fn turn_turret(tank: &mut Tank, turn: TurretTurn) {
    let delta = TURRET_ROT_SPEED / FPS as f32;
    tank.turret_angle = match turn {
        TurretTurn::Right => wrap_degrees(tank.turret_angle + delta),
        TurretTurn::Left => wrap_degrees(tank.turret_angle - delta),
    };
}

/// Moves one step along the direction's axis, then pushes the tank back out
/// of anything it ran into along that same axis and keeps it on the field.
pub(super) fn move_tank(
    tank: &mut Tank,
    direction: Direction,
    world: &World,
    obstacles: &[Rectangle],
) {
    let axis = direction.axis();
    let start = tank.pos;
    axis.set(
        &mut tank.pos,
        axis.get(tank.pos) + step_length() * direction.sign(),
    );
    tank.facing = direction;
    tank.moved_this_frame = true;

    let mut passes = 0;
    while let Some(obstacle) = first_overlap(&tank.rect(), obstacles) {
        if passes > obstacles.len() {
            log::warn!("tank {:?} wedged between obstacles, undoing move", tank.player);
            tank.pos = start;
            break;
        }
        push_out(&mut tank.pos, obstacle, axis);
        passes += 1;
    }

    let field = vec2(world.width, world.height);
    for border in &world.borders {
        border.confine(&mut tank.pos, TANK_SIZE, field);
    }
}

fn first_overlap<'a>(hull: &Rectangle, obstacles: &'a [Rectangle]) -> Option<&'a Rectangle> {
    obstacles.iter().find(|obstacle| rects_overlap(hull, obstacle))
}

/// Places the hull flush against the obstacle on whichever side of it the
/// hull starts.
fn push_out(pos: &mut Vector2, obstacle: &Rectangle, axis: Axis) {
    let own = axis.get(*pos);
    let start = axis.rect_start(obstacle);
    if own < start {
        axis.set(pos, start - TANK_SIZE);
    } else {
        axis.set(pos, start + axis.rect_extent(obstacle));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Player;
    use crate::level::Level;
    use crate::math::rect;
    use approx::assert_abs_diff_eq;

    fn tank_at(x: f32, y: f32) -> Tank {
        Tank {
            player: Player::One,
            pos: vec2(x, y),
            facing: Direction::Down,
            turret_angle: 0.0,
            reload_frames: 0,
            moved_this_frame: false,
            alive: true,
            new_round_countdown: 0,
        }
    }

    fn open_world() -> World {
        World::from_level(&Level::parse("open", "1.2").unwrap())
    }

    #[test]
    fn step_is_whole_pixels() {
        assert_eq!(step_length(), 3.0);
    }

    #[test]
    fn free_move_goes_one_step() {
        let world = open_world();
        let mut tank = tank_at(200.0, 200.0);
        move_tank(&mut tank, Direction::Left, &world, &[]);
        assert_eq!(tank.pos, vec2(197.0, 200.0));
        assert_eq!(tank.facing, Direction::Left);
        assert!(tank.moved_this_frame);
    }

    #[test]
    fn push_back_is_minimal_and_on_move_axis() {
        let world = open_world();
        let block = rect(vec2(251.0, 180.0), 75.0, 75.0);
        let mut tank = tank_at(200.0, 200.0);
        move_tank(&mut tank, Direction::Right, &world, &[block]);
        assert_eq!(tank.pos, vec2(201.0, 200.0));
        assert!(!rects_overlap(&tank.rect(), &block));
    }

    #[test]
    fn push_back_from_the_far_side() {
        let world = open_world();
        let block = rect(vec2(100.0, 100.0), 75.0, 75.0);
        let mut tank = tank_at(150.0, 176.0);
        move_tank(&mut tank, Direction::Up, &world, &[block]);
        assert_eq!(tank.pos, vec2(150.0, 175.0));
    }

    #[test]
    fn flush_contact_is_not_a_collision() {
        let world = open_world();
        let block = rect(vec2(100.0, 100.0), 75.0, 75.0);
        let mut tank = tank_at(175.0, 150.0);
        move_tank(&mut tank, Direction::Up, &world, &[block]);
        assert_eq!(tank.pos, vec2(175.0, 147.0));
    }

    #[test]
    fn borders_keep_tank_on_field() {
        let world = open_world();
        let mut tank = tank_at(1.0, 400.0);
        move_tank(&mut tank, Direction::Left, &world, &[]);
        assert_eq!(tank.pos, vec2(0.0, 400.0));

        let mut tank = tank_at(world.width - TANK_SIZE - 1.0, 400.0);
        move_tank(&mut tank, Direction::Right, &world, &[]);
        assert_eq!(tank.pos, vec2(world.width - TANK_SIZE, 400.0));
    }

    #[test]
    fn tank_stuck_between_obstacles_stays_put() {
        let world = open_world();
        let left = rect(vec2(100.0, 0.0), 75.0, 75.0);
        let right = rect(vec2(220.0, 0.0), 75.0, 75.0);
        let mut tank = tank_at(172.0, 10.0);
        move_tank(&mut tank, Direction::Right, &world, &[left, right]);
        assert_eq!(tank.pos, vec2(172.0, 10.0));
    }

    #[test]
    fn turret_wraps_around() {
        let mut tank = tank_at(0.0, 0.0);
        turn_turret(&mut tank, TurretTurn::Left);
        assert_abs_diff_eq!(tank.turret_angle, 357.0, epsilon = 1e-4);
        turn_turret(&mut tank, TurretTurn::Right);
        turn_turret(&mut tank, TurretTurn::Right);
        assert_abs_diff_eq!(tank.turret_angle, 3.0, epsilon = 1e-4);
    }
}
