use raylib::prelude::{Color, RaylibDraw, RaylibDrawHandle};

use crate::config::{WINDOW_HEIGHT, WINDOW_WIDTH};

use super::super::constants::{SCORE_FONT_SIZE, SCORE_TOP};
use super::helpers::draw_text_centered;
use super::Game;

impl Game {
    pub(super) fn draw_hud(&self, d: &mut RaylibDrawHandle) {
        let label = format!("{}    {}", self.scores[0], self.scores[1]);
        draw_text_centered(
            d,
            &label,
            WINDOW_WIDTH / 2,
            SCORE_TOP,
            SCORE_FONT_SIZE,
            Color::WHITE,
        );
    }

    pub(super) fn draw_paused(&self, d: &mut RaylibDrawHandle) {
        d.draw_rectangle(0, 0, WINDOW_WIDTH, WINDOW_HEIGHT, Color::new(10, 10, 10, 120));
        draw_text_centered(
            d,
            "PAUSED - press P to continue",
            WINDOW_WIDTH / 2,
            WINDOW_HEIGHT / 2,
            46,
            Color::new(240, 240, 240, 255),
        );
    }
}
