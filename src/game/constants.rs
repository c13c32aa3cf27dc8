/// The body sprite faces up at body angle 270; turn a quarter to line it up.
pub(super) const BODY_SPRITE_OFFSET_DEG: f32 = 90.0;
pub(super) const BACKGROUND_RGB: (u8, u8, u8) = (125, 200, 255);
pub(super) const SCORE_FONT_SIZE: i32 = 60;
pub(super) const SCORE_TOP: i32 = 30;
pub(super) const TITLE_FONT_SIZE: i32 = 30;
pub(super) const TITLE_LINE_GAP: i32 = 10;
