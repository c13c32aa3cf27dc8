use raylib::prelude::RaylibDrawHandle;

use crate::assets::{tank_palette, Assets};
use crate::math::wrap_degrees;

use super::super::constants::BODY_SPRITE_OFFSET_DEG;
use super::helpers::{draw_in_rect, draw_texture_centered, explosion_frame, screen_rotation};
use super::Game;

impl Game {
    /// Z-order: blocks, bullets, tank bodies, explosions, turrets.
    pub(super) fn draw_world(&self, d: &mut RaylibDrawHandle, assets: &Assets) {
        for block in &self.world.blocks {
            draw_in_rect(d, &assets.block, &block.rect(), 0.0);
        }

        for bullet in &self.bullets {
            let texture = &tank_palette(assets, bullet.owner).bullet;
            let turret_angle = (-bullet.vel.x).atan2(-bullet.vel.y).to_degrees();
            draw_in_rect(d, texture, &bullet.rect(), screen_rotation(turret_angle));
        }

        for tank in self.tanks.iter().filter(|tank| tank.alive) {
            let body_angle = wrap_degrees(tank.facing.body_angle() + BODY_SPRITE_OFFSET_DEG);
            draw_in_rect(
                d,
                &tank_palette(assets, tank.player).body,
                &tank.rect(),
                screen_rotation(body_angle),
            );
        }

        for explosion in &self.explosions {
            let frame = explosion_frame(assets, explosion);
            draw_texture_centered(d, frame, explosion.center, 0.0, explosion.scale);
        }

        for tank in self.tanks.iter().filter(|tank| tank.alive) {
            draw_in_rect(
                d,
                &tank_palette(assets, tank.player).barrel,
                &tank.rect(),
                screen_rotation(tank.turret_angle),
            );
        }
    }
}
