use raylib::prelude::{KeyboardKey, RaylibHandle};

use crate::entities::{Direction, Player, TurretTurn};

use super::commands::{Command, FrameInput};

const PAUSE_KEY: KeyboardKey = KeyboardKey::KEY_P;
const ESCAPE_KEY: KeyboardKey = KeyboardKey::KEY_ESCAPE;

/// Fixed key bindings for one player.
pub struct KeyMap {
    pub player: Player,
    pub bindings: [(KeyboardKey, Command); 7],
}

impl KeyMap {
    pub fn command(&self, key: KeyboardKey) -> Option<Command> {
        self.bindings
            .iter()
            .find(|(bound, _)| *bound == key)
            .map(|&(_, command)| command)
    }
}

pub const PLAYER_KEYS: [KeyMap; 2] = [
    KeyMap {
        player: Player::One,
        bindings: [
            (KeyboardKey::KEY_W, Command::Move(Direction::Up)),
            (KeyboardKey::KEY_A, Command::Move(Direction::Left)),
            (KeyboardKey::KEY_S, Command::Move(Direction::Down)),
            (KeyboardKey::KEY_D, Command::Move(Direction::Right)),
            (KeyboardKey::KEY_R, Command::TurnTurret(TurretTurn::Right)),
            (KeyboardKey::KEY_T, Command::TurnTurret(TurretTurn::Left)),
            (KeyboardKey::KEY_SPACE, Command::Fire),
        ],
    },
    KeyMap {
        player: Player::Two,
        bindings: [
            (KeyboardKey::KEY_UP, Command::Move(Direction::Up)),
            (KeyboardKey::KEY_LEFT, Command::Move(Direction::Left)),
            (KeyboardKey::KEY_DOWN, Command::Move(Direction::Down)),
            (KeyboardKey::KEY_RIGHT, Command::Move(Direction::Right)),
            (KeyboardKey::KEY_KP_DIVIDE, Command::TurnTurret(TurretTurn::Right)),
            (KeyboardKey::KEY_KP_MULTIPLY, Command::TurnTurret(TurretTurn::Left)),
            (KeyboardKey::KEY_KP_0, Command::Fire),
        ],
    },
];

/// Tracks held keys in the order they went down.
pub struct InputState {
    held: Vec<KeyboardKey>,
}

impl InputState {
    pub fn new() -> Self {
        Self { held: Vec::new() }
    }

    pub fn sample(&mut self, rl: &mut RaylibHandle) -> FrameInput {
        let mut pressed = Vec::new();
        while let Some(key) = rl.get_key_pressed() {
            pressed.push(key);
        }
        self.held.retain(|&key| rl.is_key_down(key));
        self.record(&pressed);
        frame_input(&self.held, &pressed)
    }

    fn record(&mut self, pressed: &[KeyboardKey]) {
        for &key in pressed {
            if !self.held.contains(&key) {
                self.held.push(key);
            }
        }
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds the frame's commands from held keys, newest press first. Fire only
/// triggers on the frame its key goes down.
pub fn frame_input(held: &[KeyboardKey], pressed: &[KeyboardKey]) -> FrameInput {
    let mut commands = Vec::new();
    for &key in held.iter().rev() {
        for keys in &PLAYER_KEYS {
            let Some(command) = keys.command(key) else {
                continue;
            };
            if command == Command::Fire && !pressed.contains(&key) {
                continue;
            }
            commands.push((keys.player, command));
        }
    }

    FrameInput {
        commands,
        any_key: pressed.iter().any(|&key| key != ESCAPE_KEY),
        escape: pressed.contains(&ESCAPE_KEY),
        pause: pressed.contains(&PAUSE_KEY),
    }
}
