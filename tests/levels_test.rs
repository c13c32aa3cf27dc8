use square_tanks::config::{LEVELS_DIR, TANK_SIZE, WINDOW_HEIGHT, WINDOW_WIDTH};
use square_tanks::entities::Player;
use square_tanks::level::LevelDirectory;
use square_tanks::math::rects_overlap;
use square_tanks::world::World;
use test_log::test;

#[test]
fn shipped_levels_are_playable() {
    let levels = LevelDirectory::new(LEVELS_DIR);
    let names = levels.names().unwrap();
    assert!(!names.is_empty());

    for name in names {
        let level = levels.load(&name).unwrap();
        let world = World::from_level(&level);
        for player in Player::ALL {
            let spawn = world.spawn_point(player);
            assert!(spawn.x >= 0.0 && spawn.x + TANK_SIZE <= WINDOW_WIDTH as f32, "{name}");
            assert!(spawn.y >= 0.0 && spawn.y + TANK_SIZE <= WINDOW_HEIGHT as f32, "{name}");
            let hull = square_tanks::math::rect(spawn, TANK_SIZE, TANK_SIZE);
            assert!(
                !world.blocks.iter().any(|block| rects_overlap(&block.rect(), &hull)),
                "{name}: spawn inside a block"
            );
        }
    }
}
