//! Property tests over seeds and layout parameters

use dg_core::dungeon::{Dungeon, RoomKind};
use dg_core::{DungeonConfig, generate_dungeon};
use proptest::prelude::*;

fn arb_config() -> impl Strategy<Value = DungeonConfig> {
    (any::<u64>(), 1u32..25, 0u32..=100, 0u32..=100, 0i32..4).prop_map(
        |(seed, room_count, loop_percentage, elite_percentage, room_spacing)| DungeonConfig {
            room_count,
            loop_percentage,
            elite_percentage,
            room_spacing,
            secret_room_chance: 50,
            ..DungeonConfig::with_seed(seed)
        },
    )
}

fn placed(dungeon: &Dungeon) -> usize {
    dungeon.rooms().iter().filter(|r| r.kind != RoomKind::Secret).count()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn rooms_fit_and_keep_spacing(config in arb_config()) {
        let dungeon = generate_dungeon(&config).unwrap();
        let bounds = dungeon.bounds();
        prop_assert!(placed(&dungeon) <= config.room_count as usize);

        let rooms = dungeon.rooms();
        for (i, room) in rooms.iter().enumerate() {
            prop_assert_eq!(room.id as usize, i);
            prop_assert!(bounds.contains_rect(&room.rect()));
            for other in &rooms[i + 1..] {
                prop_assert!(!room.overlaps(other, config.room_spacing));
            }
        }
    }

    #[test]
    fn every_room_is_reachable(config in arb_config()) {
        let dungeon = generate_dungeon(&config).unwrap();
        let dist = dungeon.graph().bfs_distances(dungeon.spawn_room());
        prop_assert_eq!(dist.len(), dungeon.rooms().len());
        for room in dungeon.rooms() {
            prop_assert_eq!(Some(&room.depth), dist.get(&room.id));
        }
        prop_assert_eq!(dungeon.room(dungeon.spawn_room()).map(|r| r.depth), Some(0));
    }

    #[test]
    fn edge_count_follows_loop_percentage(config in arb_config()) {
        let dungeon = generate_dungeon(&config).unwrap();
        let n = placed(&dungeon);
        let candidates = n * (n - 1) / 2;
        let loops = (candidates - (n - 1)) * config.loop_percentage as usize / 100;
        prop_assert_eq!(
            dungeon.graph().edge_count(),
            n - 1 + loops + dungeon.secret_rooms().len()
        );
    }

    #[test]
    fn every_edge_has_a_corridor(config in arb_config()) {
        let dungeon = generate_dungeon(&config).unwrap();
        for (a, b) in dungeon.graph().edges() {
            prop_assert!(dungeon.corridors().iter().any(|c| c.links(a, b)));
        }
        for corridor in dungeon.corridors() {
            prop_assert!(corridor.start.x == corridor.end.x || corridor.start.y == corridor.end.y);
            prop_assert!(dungeon.graph().contains_edge(corridor.from, corridor.to));
        }
    }

    #[test]
    fn classification_is_consistent(config in arb_config()) {
        let dungeon = generate_dungeon(&config).unwrap();
        let n = placed(&dungeon);
        let spawn = dungeon.spawn_room();
        let boss = dungeon.boss_room();
        let treasure = dungeon.treasure_room();

        prop_assert_eq!(spawn, 0);
        prop_assert_eq!(dungeon.room(spawn).map(|r| r.kind), Some(RoomKind::Spawn));
        if n >= 2 {
            prop_assert_ne!(spawn, boss);
        }
        if n >= 3 {
            prop_assert_ne!(spawn, treasure);
            prop_assert_ne!(boss, treasure);
        }

        let boss_depth = dungeon.room(boss).map(|r| r.depth).unwrap_or_default();
        for room in dungeon.rooms().iter().filter(|r| r.kind != RoomKind::Secret) {
            prop_assert!(room.depth <= boss_depth);
        }

        let mut key_rooms = vec![spawn, boss, treasure, dungeon.shop_room()];
        key_rooms.sort_unstable();
        key_rooms.dedup();
        let unclassified = n - key_rooms.len();
        let wanted = n * config.elite_percentage as usize / 100;
        prop_assert_eq!(dungeon.elite_rooms().len(), wanted.min(unclassified));
        for &id in dungeon.elite_rooms() {
            prop_assert_eq!(dungeon.room(id).map(|r| r.kind), Some(RoomKind::Elite));
        }
        prop_assert!(dungeon.secret_rooms().len() <= 1);
    }

    #[test]
    fn generation_is_deterministic(config in arb_config()) {
        let a = generate_dungeon(&config).unwrap();
        let b = generate_dungeon(&config).unwrap();
        prop_assert_eq!(a, b);
    }
}
