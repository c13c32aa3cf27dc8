use std::path::Path;

use anyhow::{anyhow, Result};
use raylib::prelude::{Music, RaylibAudio, Sound};

use crate::config::DATA_DIR;
use crate::entities::SoundCue;
use crate::game::ScreenState;

pub struct Sounds<'aud> {
    boom: Sound<'aud>,
    shot: Sound<'aud>,
    reload: Sound<'aud>,
    music: Music<'aud>,
}

impl<'aud> Sounds<'aud> {
    pub fn load(audio: &'aud RaylibAudio) -> Result<Self> {
        Ok(Self {
            boom: load_sound(audio, "boom_sound.wav")?,
            shot: load_sound(audio, "shot_sound.wav")?,
            reload: load_sound(audio, "reload_sound.wav")?,
            music: load_music(audio, "music.wav")?,
        })
    }

    pub fn play(&self, cue: SoundCue) {
        match cue {
            SoundCue::Shot => self.shot.play(),
            SoundCue::Reload => self.reload.play(),
            SoundCue::Boom { volume } => {
                self.boom.set_volume(volume);
                self.boom.play();
            }
        }
    }

    /// Music loops on the title screen only.
    pub fn update_music(&mut self, screen: ScreenState) {
        let wanted = screen == ScreenState::Title;
        let playing = self.music.is_stream_playing();
        if wanted && !playing {
            self.music.play_stream();
        } else if !wanted && playing {
            self.music.stop_stream();
        }
        if wanted {
            self.music.update_stream();
        }
    }
}

fn data_path(name: &str) -> String {
    Path::new(DATA_DIR).join(name).to_string_lossy().into_owned()
}

fn load_sound<'aud>(audio: &'aud RaylibAudio, name: &str) -> Result<Sound<'aud>> {
    let path = data_path(name);
    audio
        .new_sound(&path)
        .map_err(|err| anyhow!("failed to load sound {path}: {err}"))
}

fn load_music<'aud>(audio: &'aud RaylibAudio, name: &str) -> Result<Music<'aud>> {
    let path = data_path(name);
    audio
        .new_music(&path)
        .map_err(|err| anyhow!("failed to load music {path}: {err}"))
}
