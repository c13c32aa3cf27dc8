mod helpers;
mod hud;
mod title;
mod world;

use raylib::prelude::{Color, RaylibDraw, RaylibDrawHandle};

use crate::assets::Assets;

use super::constants::BACKGROUND_RGB;
use super::{Game, ScreenState};

impl Game {
    pub fn draw(&self, d: &mut RaylibDrawHandle, assets: &Assets) {
        match self.state {
            ScreenState::Title => self.draw_title(d, assets),
            ScreenState::Playing | ScreenState::Paused => {
                let (r, g, b) = BACKGROUND_RGB;
                d.clear_background(Color::new(r, g, b, 255));
                self.draw_world(d, assets);
                self.draw_hud(d);
                if self.state == ScreenState::Paused {
                    self.draw_paused(d);
                }
            }
        }
    }
}
