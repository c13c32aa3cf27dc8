mod commands;
mod constants;
mod input;
mod render;
mod tanks;
mod update;

use anyhow::Result;
use rand::{rngs::SmallRng, SeedableRng};

use crate::entities::{Bullet, Explosion, Player, SoundCue, Tank};
use crate::level::LevelSource;
use crate::world::World;

pub use commands::{Command, FrameInput};
pub use input::{frame_input, InputState, KeyMap, PLAYER_KEYS};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScreenState {
    Title,
    Playing,
    Paused,
}

pub struct Game {
    state: ScreenState,
    levels: Box<dyn LevelSource>,
    world: World,
    tanks: [Tank; 2],
    bullets: Vec<Bullet>,
    explosions: Vec<Explosion>,
    rng: SmallRng,
    scores: [u32; 2],
    round: u32,
    sound_cues: Vec<SoundCue>,
    quit_requested: bool,
}

impl Game {
    /// Loads a first level up front so a broken level source fails at
    /// startup, then waits on the title screen.
    pub fn new(mut levels: Box<dyn LevelSource>, seed: u64) -> Result<Self> {
        let mut rng = SmallRng::seed_from_u64(seed);
        let level = levels.pick(&mut rng)?;
        let world = World::from_level(&level);
        let tanks = tanks::spawn_tanks(&world);
        Ok(Self {
            state: ScreenState::Title,
            levels,
            world,
            tanks,
            bullets: Vec::new(),
            explosions: Vec::new(),
            rng,
            scores: [0, 0],
            round: 0,
            sound_cues: Vec::new(),
            quit_requested: false,
        })
    }

    fn new_match(&mut self) -> Result<()> {
        log::info!("new match");
        self.sound_cues.push(SoundCue::Reload);
        self.scores = [0, 0];
        self.round = 0;
        self.new_round()
    }

    fn new_round(&mut self) -> Result<()> {
        let level = self.levels.pick(&mut self.rng)?;
        self.world = World::from_level(&level);
        self.tanks = tanks::spawn_tanks(&self.world);
        self.bullets.clear();
        self.explosions.clear();
        self.round += 1;
        self.state = ScreenState::Playing;
        log::info!(
            "round {} on level {} (score {}:{})",
            self.round,
            level.name(),
            self.scores[0],
            self.scores[1]
        );
        Ok(())
    }

    pub fn screen(&self) -> ScreenState {
        self.state
    }

    pub fn score(&self, player: Player) -> u32 {
        self.scores[player.index()]
    }

    /// Rounds started in the current match.
    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn tank(&self, player: Player) -> &Tank {
        &self.tanks[player.index()]
    }

    pub fn tank_mut(&mut self, player: Player) -> &mut Tank {
        &mut self.tanks[player.index()]
    }

    pub fn bullets(&self) -> &[Bullet] {
        &self.bullets
    }

    pub fn explosions(&self) -> &[Explosion] {
        &self.explosions
    }

    pub fn take_sound_cues(&mut self) -> Vec<SoundCue> {
        std::mem::take(&mut self.sound_cues)
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }
}
