//! Reference engine driven by seed maps.
use async_trait::async_trait;
use game_core::{Direction, EngineError, Game, GameModule, Map, Result, Tile, Vector};

use crate::seed;

/// Game session laid out from a seed map.
///
/// Owns the authoritative tile grid and player position. Every snapshot
/// handed out by [`Game::get_map`] is an independent copy.
#[derive(Clone, Debug)]
pub struct SeedMapGame {
    size: Vector,
    tiles: Vec<Tile>,
    player: Vector,
    /// `None` means every tile is in sight.
    sight_radius: Option<i32>,
}

impl SeedMapGame {
    pub fn new(
        width: i32,
        height: i32,
        seed_map: Option<&str>,
        sight_radius: Option<i32>,
    ) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(EngineError::InvalidDimensions { width, height });
        }

        let size = Vector::new(width, height);
        let tiles = match seed_map {
            Some(seed_map) => seed::tiles_from_seed(size, seed_map),
            None => seed::bordered_room(size),
        };

        let mut game = Self {
            size,
            tiles,
            player: Vector::ORIGIN,
            sight_radius,
        };
        game.player = game.find_player_start()?;
        game.refresh_visibility();

        Ok(game)
    }

    pub fn is_blocked(&self, pos: Vector) -> bool {
        self.index_of(pos)
            .map(|index| self.tiles[index].blocked)
            .unwrap_or(true)
    }

    fn index_of(&self, pos: Vector) -> Option<usize> {
        let in_bounds = pos.x >= 0 && pos.y >= 0 && pos.x < self.size.x && pos.y < self.size.y;
        in_bounds.then(|| (self.size.x * pos.y + pos.x) as usize)
    }

    /// Map centre when it is open, otherwise the first open tile.
    fn find_player_start(&self) -> Result<Vector> {
        let centre = Vector::new(self.size.x / 2, self.size.y / 2);
        if !self.is_blocked(centre) {
            return Ok(centre);
        }

        self.tiles
            .iter()
            .position(|tile| !tile.blocked)
            .map(|index| {
                let index = index as i32;
                Vector::new(index % self.size.x, index / self.size.x)
            })
            .ok_or(EngineError::NoPassableTile)
    }

    fn refresh_visibility(&mut self) {
        let player = self.player;
        let width = self.size.x;
        let radius = self.sight_radius;

        for (index, tile) in self.tiles.iter_mut().enumerate() {
            let index = index as i32;
            let pos = Vector::new(index % width, index / width);
            let visible = match radius {
                Some(radius) => player.in_range(&pos, radius),
                None => true,
            };
            tile.set_visible(visible);
        }
    }
}

#[async_trait]
impl Game for SeedMapGame {
    fn size(&self) -> Vector {
        self.size
    }

    fn player(&self) -> Vector {
        self.player
    }

    async fn get_map(&self) -> Result<Map> {
        Map::new(self.size, self.tiles.clone())
    }

    fn move_player(&mut self, direction: Direction) {
        let destination = self.player + direction.delta();
        if !self.is_blocked(destination) {
            self.player = destination;
        }

        self.refresh_visibility();
    }
}

/// Module handle producing [`SeedMapGame`] sessions.
#[derive(Clone, Debug, Default)]
pub struct SeedMapModule {
    sight_radius: Option<i32>,
}

impl SeedMapModule {
    /// `sight_radius` of `None` (or a negative radius) reveals the whole map.
    pub fn new(sight_radius: Option<i32>) -> Self {
        Self {
            sight_radius: sight_radius.filter(|radius| *radius >= 0),
        }
    }
}

impl GameModule for SeedMapModule {
    fn name(&self) -> &str {
        "seed-map"
    }

    fn new_game(&self, width: i32, height: i32, seed_map: Option<&str>) -> Result<Box<dyn Game>> {
        let game = SeedMapGame::new(width, height, seed_map, self.sight_radius)?;
        Ok(Box::new(game))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CORRIDOR: &str = "\
#####
#   #
## ##
#####";

    #[tokio::test]
    async fn starts_at_open_centre() {
        let game = SeedMapGame::new(5, 4, Some(CORRIDOR), None).unwrap();
        assert_eq!(game.player(), Vector::new(2, 2));

        let map = game.get_map().await.unwrap();
        assert!(map.tiles().iter().all(|t| t.seen && t.visible));
    }

    #[test]
    fn falls_back_to_first_open_tile() {
        let game = SeedMapGame::new(3, 3, Some("## \n###\n###"), None).unwrap();
        assert_eq!(game.player(), Vector::new(2, 0));
    }

    #[test]
    fn all_wall_map_has_no_start() {
        let err = SeedMapGame::new(2, 2, Some("####"), None).unwrap_err();
        assert_eq!(err, EngineError::NoPassableTile);
    }

    #[test]
    fn walls_block_movement() {
        let mut game = SeedMapGame::new(5, 4, Some(CORRIDOR), None).unwrap();

        game.move_player(Direction::S);
        assert_eq!(game.player(), Vector::new(2, 2));

        game.move_player(Direction::NE);
        assert_eq!(game.player(), Vector::new(3, 1));

        game.move_player(Direction::E);
        assert_eq!(game.player(), Vector::new(3, 1));
    }

    #[tokio::test]
    async fn sight_radius_leaves_memory_behind() {
        let mut game = SeedMapGame::new(9, 3, None, Some(2)).unwrap();
        assert_eq!(game.player(), Vector::new(4, 1));

        for _ in 0..3 {
            game.move_player(Direction::E);
        }
        assert_eq!(game.player(), Vector::new(7, 1));

        let map = game.get_map().await.unwrap();
        let start = map.tile(Vector::new(4, 1)).unwrap();
        assert!(start.seen && !start.visible);

        let far_west = map.tile(Vector::new(1, 1)).unwrap();
        assert!(!far_west.seen);

        assert!(map.tile(Vector::new(7, 1)).unwrap().visible);
    }

    #[tokio::test]
    async fn snapshots_are_independent_copies() {
        let mut game = SeedMapGame::new(9, 3, None, Some(1)).unwrap();
        let before = game.get_map().await.unwrap();

        game.move_player(Direction::W);
        let after = game.get_map().await.unwrap();

        assert_ne!(before, after);
        assert!(before.tile(Vector::new(4, 1)).unwrap().visible);
        assert!(!after.tile(Vector::new(4, 1)).unwrap().visible);
    }

    #[test]
    fn module_rejects_bad_dimensions() {
        let module = SeedMapModule::new(Some(-1));
        assert!(matches!(
            module.new_game(0, 5, None),
            Err(EngineError::InvalidDimensions { width: 0, height: 5 })
        ));
        assert!(module.new_game(6, 4, None).is_ok());
    }
}
