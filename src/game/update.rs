use anyhow::Result;

use crate::config::{
    BLOCK_BOOM_VOLUME, BLOCK_EXPLOSION_SCALE, BULLET_BOOM_VOLUME, BULLET_EXPLOSION_SCALE, FPS,
};
use crate::entities::{Explosion, SoundCue};
use crate::math::{rects_overlap, vec2_add, vec2_scale};

use super::commands::FrameInput;
use super::{Game, ScreenState};

impl Game {
    /// Advances one frame. `dt` is the wall-clock frame time and only drives
    /// animation; gameplay moves in fixed per-frame steps.
    pub fn update(&mut self, input: &FrameInput, dt: f32) -> Result<()> {
        match self.state {
            ScreenState::Title => {
                if input.escape {
                    log::info!("quit from title screen");
                    self.quit_requested = true;
                } else if input.any_key {
                    self.new_match()?;
                }
            }
            ScreenState::Playing => {
                if input.escape {
                    log::info!("back to title screen");
                    self.state = ScreenState::Title;
                    return Ok(());
                }
                if input.pause {
                    log::info!("paused");
                    self.state = ScreenState::Paused;
                    return Ok(());
                }
                self.update_playing(input, dt)?;
            }
            ScreenState::Paused => {
                if input.pause {
                    log::info!("resumed");
                    self.state = ScreenState::Playing;
                }
            }
        }
        Ok(())
    }

    fn update_playing(&mut self, input: &FrameInput, dt: f32) -> Result<()> {
        for &(player, command) in &input.commands {
            self.apply_command(player, command);
        }

        if self.round_over() {
            return self.new_round();
        }

        self.update_tanks();
        self.update_bullets();
        self.update_explosions(dt);
        Ok(())
    }

    fn update_bullets(&mut self) {
        let field = self.world.field_bounds();
        let step = 1.0 / FPS as f32;
        let mut removed = vec![false; self.bullets.len()];

        for i in 0..self.bullets.len() {
            if removed[i] {
                continue;
            }
            let bullet = &mut self.bullets[i];
            bullet.pos = vec2_add(bullet.pos, vec2_scale(bullet.vel, step));
            let hitbox = bullet.rect();
            let center = bullet.center();

            if self.world.hits_block(&hitbox) {
                removed[i] = true;
                self.explosions.push(Explosion::new(center, BLOCK_EXPLOSION_SCALE));
                self.sound_cues.push(SoundCue::Boom {
                    volume: BLOCK_BOOM_VOLUME,
                });
                continue;
            }

            if !rects_overlap(&field, &hitbox) {
                removed[i] = true;
                continue;
            }

            let other = (0..self.bullets.len()).find(|&j| {
                j != i && !removed[j] && rects_overlap(&self.bullets[j].rect(), &hitbox)
            });
            if let Some(j) = other {
                removed[i] = true;
                removed[j] = true;
                self.explosions.push(Explosion::new(center, BULLET_EXPLOSION_SCALE));
                self.sound_cues.push(SoundCue::Boom {
                    volume: BULLET_BOOM_VOLUME,
                });
            }
        }

        let mut flags = removed.into_iter();
        self.bullets.retain(|_| !flags.next().unwrap_or(false));
    }

    fn update_explosions(&mut self, dt: f32) {
        self.explosions.retain_mut(|explosion| {
            explosion.age += dt;
            !explosion.finished()
        });
    }
}
