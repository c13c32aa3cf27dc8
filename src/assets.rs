use std::path::Path;

use anyhow::{anyhow, Result};
use raylib::prelude::*;

use crate::config::{DATA_DIR, EXPLOSION_FRAMES};
use crate::entities::Player;

/// Which pixels of an image become transparent when it is loaded.
#[derive(Clone, Copy, Debug)]
pub enum ColorKey {
    /// Keep the image's own alpha.
    None,
    /// The colour of the top-left pixel.
    TopLeft,
    Exact(Color),
}

pub struct TankPalette {
    pub body: Texture2D,
    pub barrel: Texture2D,
    pub bullet: Texture2D,
}

pub struct Assets {
    pub tanks: [TankPalette; 2],
    pub block: Texture2D,
    pub explosion: Vec<Texture2D>,
    pub background: Texture2D,
}

impl Assets {
    pub fn load(rl: &mut RaylibHandle, thread: &RaylibThread) -> Result<Self> {
        let tanks = [
            load_tank_palette(rl, thread, Player::One)?,
            load_tank_palette(rl, thread, Player::Two)?,
        ];
        let block = load_texture(rl, thread, "block.png", ColorKey::None)?;
        let explosion = (1..=EXPLOSION_FRAMES)
            .map(|idx| load_texture(rl, thread, &format!("explosion ({idx}).png"), ColorKey::TopLeft))
            .collect::<Result<Vec<_>>>()?;
        let background = load_texture(rl, thread, "fon.png", ColorKey::None)?;

        log::info!("loaded textures from {DATA_DIR}");
        Ok(Self {
            tanks,
            block,
            explosion,
            background,
        })
    }
}

pub fn load_tank_palette(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    player: Player,
) -> Result<TankPalette> {
    let color = player.color_name();
    Ok(TankPalette {
        body: load_texture(rl, thread, &format!("tank_body_{color}.png"), ColorKey::None)?,
        barrel: load_texture(
            rl,
            thread,
            &format!("tank_barrel_{color}.png"),
            ColorKey::Exact(Color::BLACK),
        )?,
        bullet: load_texture(rl, thread, &format!("bullet_{color}.png"), ColorKey::TopLeft)?,
    })
}

pub fn load_texture(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    name: &str,
    key: ColorKey,
) -> Result<Texture2D> {
    let path = Path::new(DATA_DIR).join(name);
    let path = path.to_string_lossy();
    let mut image =
        Image::load_image(&path).map_err(|err| anyhow!("failed to load image {path}: {err}"))?;

    let keyed = match key {
        ColorKey::None => None,
        ColorKey::TopLeft => Some(image.get_color(0, 0)),
        ColorKey::Exact(color) => Some(color),
    };
    if let Some(color) = keyed {
        image.set_format(PixelFormat::PIXELFORMAT_UNCOMPRESSED_R8G8B8A8);
        image.color_replace(color, Color::BLANK);
    }

    rl.load_texture_from_image(thread, &image)
        .map_err(|err| anyhow!("failed to upload texture {path}: {err}"))
}

pub fn tank_palette(assets: &Assets, player: Player) -> &TankPalette {
    &assets.tanks[player.index()]
}
