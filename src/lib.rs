pub mod assets;
pub mod audio;
pub mod config;
pub mod entities;
pub mod game;
pub mod level;
pub mod math;
pub mod world;
