//! Dungeon generation pipeline
//!
//! Rooms are placed first, then joined by a spanning tree plus loops, turned
//! into corridors, classified and finally given depths. All randomness comes
//! from the one generator handed to [`DungeonGenerator::new`].

use dg_rng::DungeonRng;
use tracing::{debug, info};

use crate::config::DungeonConfig;
use crate::error::GenerationError;

use super::classify::classify_rooms;
use super::corridor::synthesize_corridors;
use super::depth::compute_room_depth;
use super::graph::build_graph;
use super::layout::Dungeon;
use super::placement::generate_rooms;

/// One-shot generator; [`generate`](Self::generate) consumes it
#[derive(Debug)]
pub struct DungeonGenerator {
    config: DungeonConfig,
    rng: DungeonRng,
}

impl DungeonGenerator {
    /// Generator drawing from `rng`; the config's own seed is replaced by the
    /// generator's so the dungeon records the seed actually used
    pub fn new(config: DungeonConfig, rng: DungeonRng) -> Self {
        let config = DungeonConfig {
            seed: Some(rng.seed()),
            ..config
        };
        Self { config, rng }
    }

    /// Generator seeded from the config (or the clock if it has no seed)
    pub fn from_config(config: DungeonConfig) -> Self {
        let rng = DungeonRng::new(config.resolve_seed());
        Self::new(config, rng)
    }

    pub fn config(&self) -> &DungeonConfig {
        &self.config
    }

    /// Run the whole pipeline.
    ///
    /// Fails only for an invalid config or when no room could be placed.
    pub fn generate(mut self) -> Result<Dungeon, GenerationError> {
        self.config.validate()?;
        let config = &self.config;
        let rng = &mut self.rng;
        let seed = rng.seed();

        let mut rooms = generate_rooms(
            rng,
            config.room_count,
            config.bounds(),
            config.size_range(),
            config.room_spacing,
        );
        if rooms.is_empty() {
            return Err(GenerationError::NoRoomsPlaced {
                target: config.room_count,
                attempts: config.placement_attempts(),
            });
        }

        let (mut graph, stats) = build_graph(&rooms, config.loop_percentage);
        debug!(
            mst = stats.mst_edges,
            loops = stats.loop_edges,
            candidates = stats.candidate_edges,
            "connectivity graph built"
        );

        let mut corridors = synthesize_corridors(rng, &rooms, &graph);

        let classification = classify_rooms(rng, &mut rooms, &mut graph, &mut corridors, config);
        let Some(classification) = classification else {
            return Err(GenerationError::NoRoomsPlaced {
                target: config.room_count,
                attempts: config.placement_attempts(),
            });
        };

        compute_room_depth(&mut rooms, &graph, classification.spawn);

        info!(
            seed,
            rooms = rooms.len(),
            corridors = corridors.len(),
            boss = classification.boss,
            "dungeon generated"
        );

        Ok(Dungeon::new(
            seed,
            self.config,
            rooms,
            corridors,
            graph,
            classification,
            stats,
        ))
    }
}

/// Generate a dungeon from a config, seeding from the clock if needed
pub fn generate_dungeon(config: &DungeonConfig) -> Result<Dungeon, GenerationError> {
    DungeonGenerator::from_config(config.clone()).generate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeon::RoomKind;
    use crate::error::ConfigError;

    #[test]
    fn test_generate_default() {
        let dungeon = generate_dungeon(&DungeonConfig::with_seed(1)).unwrap();
        assert!(!dungeon.rooms().is_empty());
        assert_eq!(dungeon.seed(), 1);
        assert_eq!(dungeon.config().seed, Some(1));
        assert_eq!(dungeon.room(dungeon.spawn_room()).unwrap().kind, RoomKind::Spawn);
        assert_eq!(dungeon.room(dungeon.spawn_room()).unwrap().depth, 0);
    }

    #[test]
    fn test_rng_seed_overrides_config_seed() {
        let generator = DungeonGenerator::new(DungeonConfig::with_seed(5), DungeonRng::new(6));
        assert_eq!(generator.config().seed, Some(6));
        let dungeon = generator.generate().unwrap();
        assert_eq!(dungeon.seed(), 6);
    }

    #[test]
    fn test_unseeded_config_records_seed() {
        let dungeon = generate_dungeon(&DungeonConfig::default()).unwrap();
        assert_eq!(dungeon.config().seed, Some(dungeon.seed()));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = DungeonConfig {
            min_room_size: 1,
            ..DungeonConfig::with_seed(1)
        };
        let err = generate_dungeon(&config).unwrap_err();
        assert!(matches!(
            err,
            GenerationError::InvalidConfig(ConfigError::InvalidRoomSize { .. })
        ));
    }

    #[test]
    fn test_no_rooms_is_fatal() {
        // No origin keeps a 10x10 room inside a 9x9 map
        let config = DungeonConfig {
            room_count: 3,
            min_room_size: 10,
            max_room_size: 10,
            map_width: 9,
            map_height: 9,
            ..DungeonConfig::with_seed(1)
        };
        let err = DungeonGenerator::from_config(config).generate().unwrap_err();
        assert!(matches!(
            err,
            GenerationError::NoRoomsPlaced {
                target: 3,
                attempts: 30
            }
        ));
    }
}
