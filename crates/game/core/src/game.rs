//! Engine traits consumed by the presentation layer.
use async_trait::async_trait;

use crate::{Direction, Map, Result, Vector};

/// Handle to one running game session.
///
/// This is the whole surface the presentation layer relies on; engines are
/// free to represent their state however they like behind it.
///
/// # Example Implementation
///
/// ```no_run
/// use async_trait::async_trait;
/// use game_core::{Direction, Game, Map, Result, Tile, Vector};
///
/// struct Room {
///     player: Vector,
/// }
///
/// #[async_trait]
/// impl Game for Room {
///     fn size(&self) -> Vector {
///         Vector::new(1, 1)
///     }
///
///     fn player(&self) -> Vector {
///         self.player
///     }
///
///     async fn get_map(&self) -> Result<Map> {
///         Map::new(self.size(), vec![Tile::floor()])
///     }
///
///     fn move_player(&mut self, _direction: Direction) {}
/// }
/// ```
#[async_trait]
pub trait Game: Send + Sync {
    /// Map dimensions in tiles.
    fn size(&self) -> Vector;

    /// Current player position.
    fn player(&self) -> Vector;

    /// Fresh snapshot of every tile. May suspend if the engine lives across
    /// a boundary.
    async fn get_map(&self) -> Result<Map>;

    /// Attempts one step in `direction`. Invalid moves are absorbed by the
    /// engine.
    fn move_player(&mut self, direction: Direction);
}

/// Factory for game sessions (the loaded engine module).
pub trait GameModule: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Starts a new session on a `width` by `height` map, optionally laid
    /// out from `seed_map`.
    fn new_game(&self, width: i32, height: i32, seed_map: Option<&str>) -> Result<Box<dyn Game>>;
}
