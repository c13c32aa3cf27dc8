pub const WINDOW_WIDTH: i32 = 1800;
pub const WINDOW_HEIGHT: i32 = 900;
pub const WINDOW_TITLE: &str = "SquareTanks";
pub const FPS: u32 = 60;

pub const DATA_DIR: &str = "data";
pub const LEVELS_DIR: &str = "levels";

pub const TILE_SIZE: f32 = 75.0;
pub const TANK_SIZE: f32 = 50.0;
pub const BULLET_SIZE: f32 = 10.0;

/// Pixels per second; movement is truncated to whole pixels per frame.
pub const TANK_SPEED: f32 = 200.0;
/// Degrees per second.
pub const TURRET_ROT_SPEED: f32 = 180.0;
pub const BULLET_SPEED: f32 = 500.0;
/// Distance from the turret pivot to the muzzle.
pub const BARREL_LENGTH: f32 = 40.0;

pub const RELOAD_FRAMES: u32 = FPS;
pub const NEW_ROUND_FRAMES: u32 = FPS * 2;

pub const EXPLOSION_FRAMES: usize = 9;
pub const EXPLOSION_FRAME_TIME: f32 = 0.05;
pub const TANK_EXPLOSION_SCALE: f32 = 1.0;
pub const BLOCK_EXPLOSION_SCALE: f32 = 0.2;
pub const BULLET_EXPLOSION_SCALE: f32 = 0.3;

pub const TANK_BOOM_VOLUME: f32 = 1.0;
pub const BLOCK_BOOM_VOLUME: f32 = 0.1;
pub const BULLET_BOOM_VOLUME: f32 = 0.2;
