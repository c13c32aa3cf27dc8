use crate::config::{BARREL_LENGTH, BULLET_SIZE, BULLET_SPEED, RELOAD_FRAMES};
use crate::entities::{Bullet, Tank};
use crate::math::{cos_deg, sin_deg, vec2, vec2_scale};

/// Fires when the gun is loaded and restarts the reload countdown.
pub(super) fn try_fire(tank: &mut Tank) -> Option<Bullet> {
    if !tank.alive || tank.reload_frames > 0 {
        return None;
    }
    tank.reload_frames = RELOAD_FRAMES;
    Some(bullet_from_tank(tank))
}

fn bullet_from_tank(tank: &Tank) -> Bullet {
    let center = tank.center();
    let angle = tank.turret_angle;
    let dir = vec2(-sin_deg(angle), -cos_deg(angle));
    let half = BULLET_SIZE * 0.5;
    Bullet {
        pos: vec2(
            center.x - half + dir.x * BARREL_LENGTH,
            center.y - half + dir.y * BARREL_LENGTH,
        ),
        vel: vec2_scale(dir, BULLET_SPEED),
        owner: tank.player,
    }
}
