use crate::entities::{Bullet, Tank};
use crate::math::rects_overlap;

/// Index of the first bullet fired by someone else that overlaps the hull.
pub(super) fn find_bullet_hit(tank: &Tank, bullets: &[Bullet]) -> Option<usize> {
    let hull = tank.rect();
    bullets
        .iter()
        .position(|bullet| bullet.owner != tank.player && rects_overlap(&bullet.rect(), &hull))
}
