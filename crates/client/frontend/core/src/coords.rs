//! Grid to pixel and grid to index conversions.
//!
//! Inputs are trusted: callers iterate within `[0, width) x [0, height)`.

/// Left edge of column `col`.
#[inline]
pub const fn pixel_x(tile_size: u32, col: i32) -> i32 {
    col * tile_size as i32
}

/// Top edge of row `row`.
#[inline]
pub const fn pixel_y(tile_size: u32, row: i32) -> i32 {
    row * tile_size as i32
}

/// Flat row-major index of `(row, col)` on a map `width` tiles wide.
#[inline]
pub const fn index(width: i32, row: i32, col: i32) -> usize {
    (width * row + col) as usize
}

/// Largest square tile that fits `cols` x `rows` tiles into the available
/// pixel area, capped at `max_tile_size`. Zero means nothing fits.
pub fn fit_tile_size(
    available_width: u32,
    available_height: u32,
    cols: u32,
    rows: u32,
    max_tile_size: u32,
) -> u32 {
    if cols == 0 || rows == 0 {
        return 0;
    }

    (available_width / cols)
        .min(available_height / rows)
        .min(max_tile_size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn pixels_scale_with_tile_size() {
        assert_eq!(pixel_x(16, 0), 0);
        assert_eq!(pixel_x(16, 3), 48);
        assert_eq!(pixel_y(24, 2), 48);
    }

    #[test]
    fn indices_cover_grid_exactly_once() {
        for (w, h) in [(1, 1), (1, 7), (7, 1), (5, 3), (54, 25)] {
            let mut seen = HashSet::new();
            for row in 0..h {
                for col in 0..w {
                    let i = index(w, row, col);
                    assert_eq!(i, (w * row + col) as usize);
                    assert!(i < (w * h) as usize);
                    assert!(seen.insert(i), "duplicate index {i} for {w}x{h}");
                }
            }
            assert_eq!(seen.len(), (w * h) as usize);
        }
    }

    #[test]
    fn tile_size_fits_tighter_axis() {
        assert_eq!(fit_tile_size(1000, 500, 50, 10, 64), 20);
        assert_eq!(fit_tile_size(1000, 500, 10, 50, 64), 10);
        assert_eq!(fit_tile_size(4000, 4000, 10, 10, 64), 64);
        assert_eq!(fit_tile_size(10, 10, 20, 20, 64), 0);
        assert_eq!(fit_tile_size(10, 10, 0, 20, 64), 0);
    }
}
