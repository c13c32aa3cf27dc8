use crate::entities::{Direction, Player, TurretTurn};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    TurnTurret(TurretTurn),
    Fire,
}

/// Everything the game needs from one frame of keyboard input.
#[derive(Clone, Debug, Default)]
pub struct FrameInput {
    /// Tank commands in the order they are applied.
    pub commands: Vec<(Player, Command)>,
    /// A key other than Escape went down this frame.
    pub any_key: bool,
    pub escape: bool,
    pub pause: bool,
}

impl FrameInput {
    pub fn with_commands(commands: impl IntoIterator<Item = (Player, Command)>) -> Self {
        Self {
            commands: commands.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn key_press() -> Self {
        Self {
            any_key: true,
            ..Self::default()
        }
    }

    pub fn escape() -> Self {
        Self {
            escape: true,
            ..Self::default()
        }
    }

    pub fn pause() -> Self {
        Self {
            pause: true,
            ..Self::default()
        }
    }
}
