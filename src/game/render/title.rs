use raylib::prelude::{Color, RaylibDraw, RaylibDrawHandle, Rectangle, Vector2};

use crate::assets::Assets;
use crate::config::{WINDOW_HEIGHT, WINDOW_WIDTH};

use super::super::constants::{TITLE_FONT_SIZE, TITLE_LINE_GAP};
use super::Game;

const INTRO_TEXT: [&str; 17] = [
    "SquareTanks",
    "",
    "",
    "Two players battle it out in tanks",
    "at a single keyboard. Destroy the other",
    "tank to score a point.",
    "",
    "",
    "Controls",
    "Move - WASD and arrow keys",
    "Turn turret - R T and / * (numpad)",
    "Fire - Space and 0 (numpad)",
    "Pause - P",
    "Back to this screen - Esc",
    "",
    "Press any key (except Esc) to start",
    "Press Esc to quit",
];

impl Game {
    pub(super) fn draw_title(&self, d: &mut RaylibDrawHandle, assets: &Assets) {
        d.clear_background(Color::BLACK);
        let background = &assets.background;
        d.draw_texture_pro(
            background,
            Rectangle {
                x: 0.0,
                y: 0.0,
                width: background.width as f32,
                height: background.height as f32,
            },
            Rectangle {
                x: 0.0,
                y: 0.0,
                width: WINDOW_WIDTH as f32,
                height: WINDOW_HEIGHT as f32,
            },
            Vector2 { x: 0.0, y: 0.0 },
            0.0,
            Color::WHITE,
        );

        let mut y = 0;
        for line in INTRO_TEXT {
            y += TITLE_LINE_GAP;
            d.draw_text(line, 10, y, TITLE_FONT_SIZE, Color::BLACK);
            y += TITLE_FONT_SIZE;
        }
    }
}
