use raylib::prelude::{Rectangle, Vector2};

pub fn vec2(x: f32, y: f32) -> Vector2 {
    Vector2 { x, y }
}

pub fn vec2_add(a: Vector2, b: Vector2) -> Vector2 {
    vec2(a.x + b.x, a.y + b.y)
}

pub fn vec2_scale(v: Vector2, s: f32) -> Vector2 {
    vec2(v.x * s, v.y * s)
}

/// Sine of an angle given in degrees.
pub fn sin_deg(angle: f32) -> f32 {
    angle.to_radians().sin()
}

/// Cosine of an angle given in degrees.
pub fn cos_deg(angle: f32) -> f32 {
    angle.to_radians().cos()
}

pub fn wrap_degrees(angle: f32) -> f32 {
    angle.rem_euclid(360.0)
}

pub fn rect(pos: Vector2, width: f32, height: f32) -> Rectangle {
    Rectangle {
        x: pos.x,
        y: pos.y,
        width,
        height,
    }
}

pub fn rect_center(r: &Rectangle) -> Vector2 {
    vec2(r.x + r.width * 0.5, r.y + r.height * 0.5)
}

/// Strict overlap test; rectangles that only share an edge do not collide.
pub fn rects_overlap(a: &Rectangle, b: &Rectangle) -> bool {
    a.x < b.x + b.width && a.x + a.width > b.x && a.y < b.y + b.height && a.y + a.height > b.y
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn touching_edges_do_not_overlap() {
        let a = rect(vec2(0.0, 0.0), 10.0, 10.0);
        let b = rect(vec2(10.0, 0.0), 10.0, 10.0);
        assert!(!rects_overlap(&a, &b));
        let c = rect(vec2(9.0, 9.0), 10.0, 10.0);
        assert!(rects_overlap(&a, &c));
    }

    #[test]
    fn degree_trig() {
        assert_abs_diff_eq!(sin_deg(90.0), 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(cos_deg(180.0), -1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(wrap_degrees(-3.0), 357.0, epsilon = 1e-4);
        assert_abs_diff_eq!(wrap_degrees(363.0), 3.0, epsilon = 1e-4);
    }
}
