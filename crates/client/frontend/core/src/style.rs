//! Tile styling: colours, glyphs, and the style table.
//!
//! Styles are pure configuration. [`resolve`] is an exhaustive match, so a new
//! [`TileType`] variant fails to compile here until it is given a style.
use game_core::TileType;

/// 8-bit RGBA colour. `a == 255` is opaque.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn is_opaque(self) -> bool {
        self.a == 255
    }

    /// Source-over compositing of `self` onto an opaque `below`.
    pub fn over(self, below: Colour) -> Colour {
        let alpha = u32::from(self.a);
        let mix = |src: u8, dst: u8| {
            ((u32::from(src) * alpha + u32::from(dst) * (255 - alpha) + 127) / 255) as u8
        };

        Colour::rgb(
            mix(self.r, below.r),
            mix(self.g, below.g),
            mix(self.b, below.b),
        )
    }
}

/// Palette used by the built-in styles.
pub mod colours {
    use super::Colour;

    pub const WALL_BG: Colour = Colour::rgb(0x72, 0x4c, 0xf9);
    pub const WALL_FG: Colour = Colour::BLACK;
    pub const FLOOR_BG: Colour = Colour::BLACK;
    /// rgba(255, 255, 255, 0.3)
    pub const FLOOR_FG: Colour = Colour::rgba(255, 255, 255, 77);
    pub const PLAYER_BG: Colour = Colour::BLACK;
    pub const PLAYER_FG: Colour = Colour::rgb(0xf4, 0x22, 0x72);
    /// rgba(0, 0, 0, 0.5), painted over remembered tiles.
    pub const FOG: Colour = Colour::rgba(0, 0, 0, 128);
}

/// How to paint one tile category.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StyleOptions {
    pub text: &'static str,
    pub text_colour: Colour,
    pub bg_colour: Colour,
    /// Glyph height as a fraction of the tile size.
    pub font_scale: f32,
}

impl StyleOptions {
    /// Font size in pixels for a tile of `tile_size` pixels.
    pub fn font_size(&self, tile_size: u32) -> u32 {
        (tile_size as f32 * self.font_scale).floor() as u32
    }
}

pub const WALL_STYLE: StyleOptions = StyleOptions {
    text: "#",
    text_colour: colours::WALL_FG,
    bg_colour: colours::WALL_BG,
    font_scale: 0.8,
};

pub const FLOOR_STYLE: StyleOptions = StyleOptions {
    text: ".",
    text_colour: colours::FLOOR_FG,
    bg_colour: colours::FLOOR_BG,
    font_scale: 0.8,
};

pub const PLAYER_STYLE: StyleOptions = StyleOptions {
    text: "@",
    text_colour: colours::PLAYER_FG,
    bg_colour: colours::PLAYER_BG,
    font_scale: 0.9,
};

/// What is being painted: a map tile or the player on top of it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StyleKey {
    Tile(TileType),
    Player,
}

/// Looks up the style for `key`; `None` for tile types without a style.
pub const fn resolve(key: StyleKey) -> Option<StyleOptions> {
    match key {
        StyleKey::Tile(TileType::Wall) => Some(WALL_STYLE),
        StyleKey::Tile(TileType::Floor) => Some(FLOOR_STYLE),
        StyleKey::Player => Some(PLAYER_STYLE),
        StyleKey::Tile(TileType::Unknown(_)) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_keys_resolve() {
        assert_eq!(resolve(StyleKey::Tile(TileType::Wall)), Some(WALL_STYLE));
        assert_eq!(resolve(StyleKey::Tile(TileType::Floor)), Some(FLOOR_STYLE));
        assert_eq!(resolve(StyleKey::Player), Some(PLAYER_STYLE));
    }

    #[test]
    fn unknown_tile_has_no_style() {
        assert_eq!(resolve(StyleKey::Tile(TileType::Unknown(42))), None);
    }

    #[test]
    fn font_size_floors() {
        assert_eq!(WALL_STYLE.font_size(16), 12);
        assert_eq!(PLAYER_STYLE.font_size(16), 14);
        assert_eq!(WALL_STYLE.font_size(1), 0);
    }

    #[test]
    fn compositing_blends_toward_source() {
        assert_eq!(Colour::WHITE.over(Colour::BLACK), Colour::WHITE);
        assert_eq!(Colour::TRANSPARENT.over(colours::WALL_BG), colours::WALL_BG);
        assert_eq!(colours::FOG.over(Colour::WHITE), Colour::rgb(127, 127, 127));
        assert_eq!(colours::FLOOR_FG.over(Colour::BLACK), Colour::rgb(77, 77, 77));
    }
}
