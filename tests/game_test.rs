use approx::assert_abs_diff_eq;
use square_tanks::config::{BULLET_EXPLOSION_SCALE, NEW_ROUND_FRAMES, RELOAD_FRAMES};
use square_tanks::entities::{Direction, Player, SoundCue, TurretTurn};
use square_tanks::game::{Command, FrameInput, Game, ScreenState};
use square_tanks::level::Level;
use test_log::test;

const DT: f32 = 1.0 / 60.0;

fn game_with(layout: &str) -> Game {
    let level = Level::parse("test", layout).unwrap();
    Game::new(Box::new(vec![level]), 42).unwrap()
}

fn playing(layout: &str) -> Game {
    let mut game = game_with(layout);
    game.update(&FrameInput::key_press(), DT).unwrap();
    assert_eq!(game.screen(), ScreenState::Playing);
    game.take_sound_cues();
    game
}

fn idle(game: &mut Game) {
    game.update(&FrameInput::default(), DT).unwrap();
}

fn send(game: &mut Game, commands: &[(Player, Command)]) {
    game.update(&FrameInput::with_commands(commands.iter().copied()), DT)
        .unwrap();
}

/// Player one shoots player two across an open row and waits for the hit.
fn shoot_player_two(game: &mut Game) -> usize {
    game.tank_mut(Player::One).turret_angle = 270.0;
    send(game, &[(Player::One, Command::Fire)]);
    for frame in 1..60 {
        if !game.tank(Player::Two).alive {
            return frame;
        }
        idle(game);
    }
    panic!("bullet never reached player two");
}

#[test]
fn title_starts_a_match() {
    let mut game = game_with("1..2");
    assert_eq!(game.screen(), ScreenState::Title);
    assert_eq!(game.round(), 0);

    game.update(&FrameInput::key_press(), DT).unwrap();
    assert_eq!(game.screen(), ScreenState::Playing);
    assert_eq!(game.round(), 1);
    assert_eq!(game.take_sound_cues(), vec![SoundCue::Reload]);
}

#[test]
fn escape_on_title_quits() {
    let mut game = game_with("1..2");
    game.update(&FrameInput::escape(), DT).unwrap();
    assert!(game.quit_requested());
    assert_eq!(game.round(), 0);
}

#[test]
fn kill_scores_exactly_once() {
    let mut game = playing("1..2");
    shoot_player_two(&mut game);

    assert_eq!(game.score(Player::One), 1);
    assert_eq!(game.score(Player::Two), 0);
    assert!(game.bullets().is_empty());
    assert_eq!(game.explosions().len(), 1);
    assert!(game
        .take_sound_cues()
        .contains(&SoundCue::Boom { volume: 1.0 }));

    for _ in 0..60 {
        idle(&mut game);
    }
    assert_eq!(game.score(Player::One), 1);
    assert_eq!(game.score(Player::Two), 0);
}

#[test]
fn new_round_follows_the_delay() {
    let mut game = playing("1..2");
    shoot_player_two(&mut game);

    for _ in 0..NEW_ROUND_FRAMES {
        idle(&mut game);
    }
    assert_eq!(game.round(), 1);
    assert!(!game.tank(Player::Two).alive);

    idle(&mut game);
    assert_eq!(game.round(), 2);
    assert_eq!(game.world().level_name, "test");
    assert!(game.tank(Player::One).alive);
    assert!(game.tank(Player::Two).alive);
    assert!(game.bullets().is_empty());
    assert_eq!(game.score(Player::One), 1);
}

#[test]
fn reload_spaces_out_shots() {
    let mut game = playing("1..2");
    let mut shot_frames = Vec::new();
    for frame in 0..100 {
        send(&mut game, &[(Player::One, Command::Fire)]);
        if game.take_sound_cues().contains(&SoundCue::Shot) {
            shot_frames.push(frame);
        }
    }
    assert_eq!(shot_frames, vec![0, RELOAD_FRAMES as usize]);
}

#[test]
fn bullets_cancel_each_other() {
    let mut game = playing("1..2");
    game.tank_mut(Player::One).turret_angle = 270.0;
    game.tank_mut(Player::Two).turret_angle = 90.0;
    send(
        &mut game,
        &[(Player::One, Command::Fire), (Player::Two, Command::Fire)],
    );
    assert_eq!(game.bullets().len(), 2);

    for _ in 0..20 {
        idle(&mut game);
    }
    assert!(game.bullets().is_empty());
    assert!(game.tank(Player::One).alive);
    assert!(game.tank(Player::Two).alive);
    assert_eq!(game.explosions().len(), 1);
    assert_abs_diff_eq!(game.explosions()[0].scale, BULLET_EXPLOSION_SCALE);
    assert!(game
        .take_sound_cues()
        .contains(&SoundCue::Boom { volume: 0.2 }));
}

#[test]
fn blocks_stop_bullets() {
    let mut game = playing("1*.2");
    game.tank_mut(Player::One).turret_angle = 270.0;
    send(&mut game, &[(Player::One, Command::Fire)]);
    assert!(game.bullets().is_empty());
    assert_eq!(game.explosions().len(), 1);
    assert!(game
        .take_sound_cues()
        .contains(&SoundCue::Boom { volume: 0.1 }));
    assert!(game.tank(Player::Two).alive);
}

#[test]
fn bullets_leaving_the_field_are_dropped() {
    let mut game = playing("1..2");
    // Turret starts pointing up, so the first step carries the bullet past
    // the top edge.
    send(&mut game, &[(Player::One, Command::Fire)]);
    assert!(game.bullets().is_empty());
    assert!(game.explosions().is_empty());
    assert_eq!(game.take_sound_cues(), vec![SoundCue::Shot]);
}

#[test]
fn tanks_block_each_other() {
    let mut game = playing("12");
    for _ in 0..20 {
        send(&mut game, &[(Player::One, Command::Move(Direction::Right))]);
    }
    let one = game.tank(Player::One);
    let two = game.tank(Player::Two);
    assert_abs_diff_eq!(one.pos.x + 50.0, two.pos.x);
    assert_eq!(one.facing, Direction::Right);
}

#[test]
fn one_move_per_frame() {
    let mut game = playing("1..2");
    let start = game.tank(Player::One).pos;
    send(
        &mut game,
        &[
            (Player::One, Command::Move(Direction::Right)),
            (Player::One, Command::Move(Direction::Down)),
        ],
    );
    let tank = game.tank(Player::One);
    assert_abs_diff_eq!(tank.pos.x, start.x + 3.0);
    assert_abs_diff_eq!(tank.pos.y, start.y);
}

#[test]
fn turret_keys_cancel_out() {
    let mut game = playing("1..2");
    send(
        &mut game,
        &[
            (Player::Two, Command::TurnTurret(TurretTurn::Right)),
            (Player::Two, Command::TurnTurret(TurretTurn::Left)),
        ],
    );
    assert_abs_diff_eq!(game.tank(Player::Two).turret_angle, 0.0, epsilon = 1e-4);
}

#[test]
fn pause_freezes_the_world() {
    let mut game = playing("1..2");
    game.tank_mut(Player::One).turret_angle = 180.0;
    send(&mut game, &[(Player::One, Command::Fire)]);
    let pos = game.bullets()[0].pos;

    game.update(&FrameInput::pause(), DT).unwrap();
    assert_eq!(game.screen(), ScreenState::Paused);
    for _ in 0..5 {
        send(&mut game, &[(Player::One, Command::Move(Direction::Down))]);
    }
    assert_eq!(game.bullets()[0].pos, pos);
    assert_abs_diff_eq!(game.tank(Player::One).pos.y, 12.5);

    game.update(&FrameInput::pause(), DT).unwrap();
    assert_eq!(game.screen(), ScreenState::Playing);
    idle(&mut game);
    assert!(game.bullets()[0].pos.y > pos.y);
}

#[test]
fn escape_returns_to_title_and_resets_scores() {
    let mut game = playing("1..2");
    shoot_player_two(&mut game);
    assert_eq!(game.score(Player::One), 1);

    game.update(&FrameInput::escape(), DT).unwrap();
    assert_eq!(game.screen(), ScreenState::Title);
    assert!(!game.quit_requested());

    game.update(&FrameInput::key_press(), DT).unwrap();
    assert_eq!(game.score(Player::One), 0);
    assert_eq!(game.round(), 1);
    assert!(game.tank(Player::Two).alive);
}

#[test]
fn destroyed_tank_ignores_commands() {
    let mut game = playing("1..2");
    shoot_player_two(&mut game);
    let pos = game.tank(Player::Two).pos;
    send(
        &mut game,
        &[
            (Player::Two, Command::Move(Direction::Down)),
            (Player::Two, Command::Fire),
        ],
    );
    assert_eq!(game.tank(Player::Two).pos, pos);
    assert!(game.bullets().is_empty());
}

#[test]
fn explosions_expire() {
    let mut game = playing("1*.2");
    game.tank_mut(Player::One).turret_angle = 270.0;
    send(&mut game, &[(Player::One, Command::Fire)]);
    assert_eq!(game.explosions().len(), 1);
    for _ in 0..30 {
        idle(&mut game);
    }
    assert!(game.explosions().is_empty());
}
