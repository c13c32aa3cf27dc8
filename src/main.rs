use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Result};
use raylib::prelude::RaylibAudio;

use square_tanks::assets::Assets;
use square_tanks::audio::Sounds;
use square_tanks::config::{FPS, LEVELS_DIR, WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH};
use square_tanks::game::{Game, InputState};
use square_tanks::level::LevelDirectory;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let (mut rl, thread) = raylib::init()
        .size(WINDOW_WIDTH, WINDOW_HEIGHT)
        .title(WINDOW_TITLE)
        .build();
    rl.set_target_fps(FPS);
    rl.set_exit_key(None);

    let audio = RaylibAudio::init_audio_device()
        .map_err(|err| anyhow!("failed to open audio device: {err:?}"))?;
    let mut sounds = Sounds::load(&audio)?;
    let assets = Assets::load(&mut rl, &thread)?;

    let seed = system_seed();
    log::info!("seed {seed}");
    let mut game = Game::new(Box::new(LevelDirectory::new(LEVELS_DIR)), seed)?;
    let mut input = InputState::new();

    while !rl.window_should_close() && !game.quit_requested() {
        let dt = rl.get_frame_time();
        let frame = input.sample(&mut rl);
        game.update(&frame, dt)?;

        for cue in game.take_sound_cues() {
            sounds.play(cue);
        }
        sounds.update_music(game.screen());

        let mut d = rl.begin_drawing(&thread);
        game.draw(&mut d, &assets);
    }
    Ok(())
}

fn system_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos() as u64
}
