use raylib::prelude::{Color, RaylibDraw, RaylibDrawHandle, Rectangle, Texture2D, Vector2};

use crate::assets::Assets;
use crate::entities::Explosion;
use crate::math::rect_center;

pub(super) fn explosion_frame<'a>(assets: &'a Assets, explosion: &Explosion) -> &'a Texture2D {
    &assets.explosion[explosion.frame().min(assets.explosion.len() - 1)]
}

/// Draws a texture scaled by `scale`, centred on `pos` and rotated
/// clockwise by `rotation` degrees around its centre.
pub(super) fn draw_texture_centered(
    d: &mut RaylibDrawHandle,
    texture: &Texture2D,
    pos: Vector2,
    rotation: f32,
    scale: f32,
) {
    let w = texture.width as f32;
    let h = texture.height as f32;
    let dest = Rectangle {
        x: pos.x,
        y: pos.y,
        width: w * scale,
        height: h * scale,
    };
    let src = Rectangle {
        x: 0.0,
        y: 0.0,
        width: w,
        height: h,
    };
    d.draw_texture_pro(
        texture,
        src,
        dest,
        Vector2 {
            x: w * scale / 2.0,
            y: h * scale / 2.0,
        },
        rotation,
        Color::WHITE,
    );
}

/// Sprites turn counter-clockwise as angles grow; the screen turns the
/// other way.
pub(super) fn screen_rotation(angle: f32) -> f32 {
    -angle
}

pub(super) fn draw_in_rect(
    d: &mut RaylibDrawHandle,
    texture: &Texture2D,
    area: &Rectangle,
    rotation: f32,
) {
    draw_texture_centered(d, texture, rect_center(area), rotation, 1.0);
}

pub(super) fn draw_text_centered(
    d: &mut RaylibDrawHandle,
    text: &str,
    center_x: i32,
    center_y: i32,
    size: i32,
    color: Color,
) {
    let width = d.measure_text(text, size);
    d.draw_text(text, center_x - width / 2, center_y - size / 2, size, color);
}
