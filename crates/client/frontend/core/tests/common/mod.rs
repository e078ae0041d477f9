#![allow(dead_code)]

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use client_frontend_core::{Context, SessionSettings};
use game_core::{Direction, EngineError, Game, GameModule, Map, Tile, TileType, Vector};

pub const TILE: u32 = 16;

/// In-memory engine returning whatever tiles the test put in it.
pub struct ScriptedGame {
    pub size: Vector,
    pub tiles: Vec<Tile>,
    pub player: Vector,
    pub moves: Arc<Mutex<Vec<Direction>>>,
}

impl ScriptedGame {
    pub fn new(size: Vector, tiles: Vec<Tile>, player: Vector) -> Self {
        Self {
            size,
            tiles,
            player,
            moves: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

#[async_trait]
impl Game for ScriptedGame {
    fn size(&self) -> Vector {
        self.size
    }

    fn player(&self) -> Vector {
        self.player
    }

    async fn get_map(&self) -> Result<Map, EngineError> {
        Map::new(self.size, self.tiles.clone())
    }

    fn move_player(&mut self, direction: Direction) {
        self.moves.lock().unwrap().push(direction);
    }
}

/// Module whose n-th game is a lit floor room with a wall at index `n`.
#[derive(Default)]
pub struct ScriptedModule {
    pub builds: AtomicUsize,
    pub moves: Mutex<Vec<Arc<Mutex<Vec<Direction>>>>>,
}

impl GameModule for ScriptedModule {
    fn name(&self) -> &str {
        "scripted"
    }

    fn new_game(
        &self,
        width: i32,
        height: i32,
        _seed_map: Option<&str>,
    ) -> Result<Box<dyn Game>, EngineError> {
        let n = self.builds.fetch_add(1, Ordering::SeqCst);
        let mut tiles = vec![lit(TileType::Floor); (width * height) as usize];
        let len = tiles.len();
        tiles[n % len] = lit(TileType::Wall);

        let game = ScriptedGame::new(Vector::new(width, height), tiles, Vector::new(0, height - 1));
        self.moves.lock().unwrap().push(Arc::clone(&game.moves));
        Ok(Box::new(game))
    }
}

pub fn tile(tile_type: TileType, seen: bool, visible: bool) -> Tile {
    Tile {
        tile_type,
        blocked: tile_type == TileType::Wall,
        seen,
        visible,
    }
}

pub fn lit(tile_type: TileType) -> Tile {
    tile(tile_type, true, true)
}

pub fn context(game: ScriptedGame) -> Context {
    Context {
        game: Box::new(game),
        module: Arc::new(ScriptedModule::default()),
        tile_size: TILE,
        font_family: Arc::from("mono"),
    }
}

pub fn settings(module: Arc<ScriptedModule>, width: i32, height: i32) -> SessionSettings {
    SessionSettings {
        module,
        width,
        height,
        seed_map: None,
        tile_size: TILE,
        font_family: Arc::from("mono"),
    }
}

/// Top-left pixel of the tile at `(col, row)`.
pub fn origin(col: i32, row: i32) -> (i32, i32) {
    (col * TILE as i32, row * TILE as i32)
}
