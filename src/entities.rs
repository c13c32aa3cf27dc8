use raylib::prelude::{Rectangle, Vector2};

use crate::config::{BULLET_SIZE, EXPLOSION_FRAMES, EXPLOSION_FRAME_TIME, TANK_SIZE, TILE_SIZE};
use crate::math::{rect, rect_center};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::One, Player::Two];

    pub fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    /// Sprite colour suffix used by the asset files.
    pub fn color_name(self) -> &'static str {
        match self {
            Player::One => "green",
            Player::Two => "red",
        }
    }

    pub fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    pub fn get(self, v: Vector2) -> f32 {
        match self {
            Axis::X => v.x,
            Axis::Y => v.y,
        }
    }

    pub fn set(self, v: &mut Vector2, value: f32) {
        match self {
            Axis::X => v.x = value,
            Axis::Y => v.y = value,
        }
    }

    pub fn rect_start(self, r: &Rectangle) -> f32 {
        match self {
            Axis::X => r.x,
            Axis::Y => r.y,
        }
    }

    pub fn rect_extent(self, r: &Rectangle) -> f32 {
        match self {
            Axis::X => r.width,
            Axis::Y => r.height,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn axis(self) -> Axis {
        match self {
            Direction::Up | Direction::Down => Axis::Y,
            Direction::Left | Direction::Right => Axis::X,
        }
    }

    pub fn sign(self) -> f32 {
        match self {
            Direction::Up | Direction::Left => -1.0,
            Direction::Down | Direction::Right => 1.0,
        }
    }

    /// Body angle in degrees; the body sprite is drawn rotated by this plus a
    /// quarter turn.
    pub fn body_angle(self) -> f32 {
        match self {
            Direction::Up => 270.0,
            Direction::Down => 90.0,
            Direction::Right => 180.0,
            Direction::Left => 0.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurretTurn {
    /// Increases the turret angle.
    Right,
    /// Decreases the turret angle.
    Left,
}

#[derive(Clone, Debug)]
pub struct Tank {
    pub player: Player,
    /// Top-left corner of the hull.
    pub pos: Vector2,
    pub facing: Direction,
    /// Degrees, 0 pointing up, kept in `[0, 360)`.
    pub turret_angle: f32,
    pub reload_frames: u32,
    pub moved_this_frame: bool,
    pub alive: bool,
    pub new_round_countdown: u32,
}

impl Tank {
    pub fn rect(&self) -> Rectangle {
        rect(self.pos, TANK_SIZE, TANK_SIZE)
    }

    pub fn center(&self) -> Vector2 {
        rect_center(&self.rect())
    }
}

#[derive(Clone, Debug)]
pub struct Bullet {
    /// Top-left corner.
    pub pos: Vector2,
    /// Pixels per second.
    pub vel: Vector2,
    pub owner: Player,
}

impl Bullet {
    pub fn rect(&self) -> Rectangle {
        rect(self.pos, BULLET_SIZE, BULLET_SIZE)
    }

    pub fn center(&self) -> Vector2 {
        rect_center(&self.rect())
    }
}

#[derive(Clone, Debug)]
pub struct Block {
    pub pos: Vector2,
}

impl Block {
    pub fn rect(&self) -> Rectangle {
        rect(self.pos, TILE_SIZE, TILE_SIZE)
    }
}

#[derive(Clone, Debug)]
pub struct Explosion {
    pub center: Vector2,
    pub scale: f32,
    pub age: f32,
}

impl Explosion {
    pub fn new(center: Vector2, scale: f32) -> Self {
        Self {
            center,
            scale,
            age: 0.0,
        }
    }

    pub fn frame(&self) -> usize {
        ((self.age / EXPLOSION_FRAME_TIME) as usize).min(EXPLOSION_FRAMES - 1)
    }

    pub fn finished(&self) -> bool {
        self.age / EXPLOSION_FRAME_TIME >= EXPLOSION_FRAMES as f32
    }
}

/// Sound effects requested by the simulation, played by the audio layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SoundCue {
    Shot,
    Boom { volume: f32 },
    Reload,
}
