mod collisions;
mod combat;
mod movement;
mod spawn;

use raylib::prelude::Rectangle;

use crate::config::{TANK_BOOM_VOLUME, TANK_EXPLOSION_SCALE};
use crate::entities::{Explosion, Player, SoundCue, Tank};
use crate::world::World;

use super::commands::Command;
use super::Game;

pub(super) fn spawn_tanks(world: &World) -> [Tank; 2] {
    spawn::spawn_tanks(world)
}

impl Game {
    pub(super) fn apply_command(&mut self, player: Player, command: Command) {
        if !self.tanks[player.index()].alive {
            return;
        }
        match command {
            Command::Move(direction) => {
                if self.tanks[player.index()].moved_this_frame {
                    return;
                }
                let obstacles = self.obstacles_for(player);
                let tank = &mut self.tanks[player.index()];
                movement::move_tank(tank, direction, &self.world, &obstacles);
            }
            Command::TurnTurret(turn) => {
                movement::turn_turret(&mut self.tanks[player.index()], turn);
            }
            Command::Fire => {
                if let Some(bullet) = combat::try_fire(&mut self.tanks[player.index()]) {
                    self.bullets.push(bullet);
                    self.sound_cues.push(SoundCue::Shot);
                }
            }
        }
    }

    /// Blocks plus every other live tank.
    fn obstacles_for(&self, player: Player) -> Vec<Rectangle> {
        let mut obstacles: Vec<Rectangle> =
            self.world.blocks.iter().map(|block| block.rect()).collect();
        obstacles.extend(
            self.tanks
                .iter()
                .filter(|tank| tank.alive && tank.player != player)
                .map(Tank::rect),
        );
        obstacles
    }

    pub(super) fn update_tanks(&mut self) {
        for index in 0..self.tanks.len() {
            let tank = &mut self.tanks[index];
            if !tank.alive {
                continue;
            }
            tank.moved_this_frame = false;
            tank.reload_frames = tank.reload_frames.saturating_sub(1);

            if let Some(hit) = collisions::find_bullet_hit(tank, &self.bullets) {
                self.bullets.remove(hit);
                self.destroy_tank(index);
            }
        }
    }

    fn destroy_tank(&mut self, index: usize) {
        let tank = &mut self.tanks[index];
        tank.alive = false;
        let center = tank.center();
        let scorer = tank.player.opponent();

        self.explosions.push(Explosion::new(center, TANK_EXPLOSION_SCALE));
        self.sound_cues.push(SoundCue::Boom {
            volume: TANK_BOOM_VOLUME,
        });
        self.scores[scorer.index()] += 1;
        log::debug!(
            "player {} destroyed, score {}:{}",
            index + 1,
            self.scores[0],
            self.scores[1]
        );
    }

    /// Counts down destroyed tanks. True once a countdown has run out and the
    /// next round is due.
    pub(super) fn round_over(&mut self) -> bool {
        for tank in &mut self.tanks {
            if tank.alive {
                continue;
            }
            if tank.new_round_countdown == 0 {
                return true;
            }
            tank.new_round_countdown -= 1;
        }
        false
    }
}
