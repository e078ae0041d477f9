//! Key code bindings.
//!
//! Codes are the classic DOM `keyCode` values so every frontend shares one
//! table; frontends translate their native key events into these codes.
use game_core::Direction;

/// Fixed key codes.
pub mod keys {
    pub const ESCAPE: u32 = 27;
    pub const LEFT: u32 = 37;
    pub const UP: u32 = 38;
    pub const RIGHT: u32 = 39;
    pub const DOWN: u32 = 40;
    pub const B: u32 = 66;
    pub const H: u32 = 72;
    pub const J: u32 = 74;
    pub const K: u32 = 75;
    pub const L: u32 = 76;
    pub const M: u32 = 77;
    pub const N: u32 = 78;
    pub const Q: u32 = 81;
    pub const U: u32 = 85;
    pub const Y: u32 = 89;
}

/// What a bound key does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Binding {
    Move(Direction),
    /// Regenerate the map and start over.
    Reset,
    Quit,
}

/// Arrow keys and vi keys share the cardinal directions.
pub const KEY_BINDINGS: [(u32, Binding); 15] = [
    (keys::UP, Binding::Move(Direction::N)),
    (keys::DOWN, Binding::Move(Direction::S)),
    (keys::RIGHT, Binding::Move(Direction::E)),
    (keys::LEFT, Binding::Move(Direction::W)),
    (keys::K, Binding::Move(Direction::N)),
    (keys::J, Binding::Move(Direction::S)),
    (keys::L, Binding::Move(Direction::E)),
    (keys::H, Binding::Move(Direction::W)),
    (keys::B, Binding::Move(Direction::SW)),
    (keys::N, Binding::Move(Direction::SE)),
    (keys::Y, Binding::Move(Direction::NW)),
    (keys::U, Binding::Move(Direction::NE)),
    (keys::M, Binding::Reset),
    (keys::Q, Binding::Quit),
    (keys::ESCAPE, Binding::Quit),
];

pub fn binding_for(code: u32) -> Option<Binding> {
    KEY_BINDINGS
        .iter()
        .find(|(key, _)| *key == code)
        .map(|(_, binding)| *binding)
}

pub fn direction_for(code: u32) -> Option<Direction> {
    match binding_for(code)? {
        Binding::Move(direction) => Some(direction),
        Binding::Reset | Binding::Quit => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use strum::IntoEnumIterator;

    #[test]
    fn vi_and_arrow_keys_agree() {
        assert_eq!(direction_for(keys::K), Some(Direction::N));
        assert_eq!(direction_for(keys::UP), Some(Direction::N));
        assert_eq!(direction_for(keys::J), direction_for(keys::DOWN));
        assert_eq!(direction_for(keys::L), direction_for(keys::RIGHT));
        assert_eq!(direction_for(keys::H), direction_for(keys::LEFT));
    }

    #[test]
    fn diagonals_use_yubn() {
        assert_eq!(direction_for(keys::Y), Some(Direction::NW));
        assert_eq!(direction_for(keys::U), Some(Direction::NE));
        assert_eq!(direction_for(keys::B), Some(Direction::SW));
        assert_eq!(direction_for(keys::N), Some(Direction::SE));
    }

    #[test]
    fn every_direction_is_reachable() {
        let bound: HashSet<Direction> = KEY_BINDINGS
            .iter()
            .filter_map(|(_, binding)| match binding {
                Binding::Move(direction) => Some(*direction),
                _ => None,
            })
            .collect();
        for direction in Direction::iter() {
            assert!(bound.contains(&direction), "{direction} unbound");
        }
    }

    #[test]
    fn codes_are_unique() {
        let codes: HashSet<u32> = KEY_BINDINGS.iter().map(|(code, _)| *code).collect();
        assert_eq!(codes.len(), KEY_BINDINGS.len());
    }

    #[test]
    fn control_keys_and_unbound_codes() {
        assert_eq!(binding_for(keys::M), Some(Binding::Reset));
        assert_eq!(binding_for(keys::Q), Some(Binding::Quit));
        assert_eq!(direction_for(keys::M), None);
        assert_eq!(binding_for(0), None);
        assert_eq!(binding_for(88), None);
    }
}
