use raylib::prelude::{Rectangle, Vector2};

use crate::entities::Axis;
use crate::math::rects_overlap;

/// One edge of the play field, a line one pixel thick.
#[derive(Clone, Copy, Debug)]
pub struct Border {
    pub rect: Rectangle,
    pub axis: Axis,
    /// 0.0 for the near edge (top or left), 1.0 for the far edge.
    pub edge: f32,
}

impl Border {
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32, edge: f32) -> Self {
        if x1 == x2 {
            Self {
                rect: Rectangle {
                    x: x1,
                    y: y1,
                    width: 1.0,
                    height: y2 - y1,
                },
                axis: Axis::X,
                edge,
            }
        } else {
            Self {
                rect: Rectangle {
                    x: x1,
                    y: y1,
                    width: x2 - x1,
                    height: 1.0,
                },
                axis: Axis::Y,
                edge,
            }
        }
    }

    /// The four edges of a `width` x `height` field.
    pub fn field(width: f32, height: f32) -> [Border; 4] {
        [
            Border::new(0.0, height, width, height, 1.0),
            Border::new(0.0, 0.0, width, 0.0, 0.0),
            Border::new(width, 0.0, width, height, 1.0),
            Border::new(0.0, 0.0, 0.0, height, 0.0),
        ]
    }

    /// Snaps a box that crosses this border back flush inside the field.
    /// Returns whether the box was moved.
    pub fn confine(&self, pos: &mut Vector2, size: f32, field: Vector2) -> bool {
        let r = Rectangle {
            x: pos.x,
            y: pos.y,
            width: size,
            height: size,
        };
        if !rects_overlap(&self.rect, &r) {
            return false;
        }
        let limit = (self.axis.get(field) - size) * self.edge;
        self.axis.set(pos, limit);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::vec2;

    #[test]
    fn far_edge_snaps_to_limit() {
        let field = vec2(100.0, 60.0);
        let borders = Border::field(field.x, field.y);
        let mut pos = vec2(55.0, 20.0);
        for border in &borders {
            border.confine(&mut pos, 50.0, field);
        }
        assert_eq!(pos, vec2(50.0, 20.0));
    }

    #[test]
    fn near_edge_snaps_to_zero() {
        let field = vec2(100.0, 60.0);
        let borders = Border::field(field.x, field.y);
        let mut pos = vec2(30.0, -2.0);
        for border in &borders {
            border.confine(&mut pos, 50.0, field);
        }
        assert_eq!(pos, vec2(30.0, 0.0));
    }

    #[test]
    fn inside_box_is_untouched() {
        let border = Border::new(0.0, 0.0, 0.0, 60.0, 0.0);
        let mut pos = vec2(1.0, 5.0);
        assert!(!border.confine(&mut pos, 50.0, vec2(100.0, 60.0)));
        assert_eq!(pos, vec2(1.0, 5.0));
    }
}
