//! Text rendering of a bounded view onto the unbounded grid.
//!
//! Pure presentation: consumes a live set, holds no simulation logic. The
//! viewport is anchored at the origin; live cells outside it are simply not
//! drawn.

use crate::coord::{CellSet, Coord};

/// The `[0, width) x [0, height)` window drawn by [`render`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: i64,
    pub height: i64,
}

impl Viewport {
    #[inline]
    pub const fn square(side: i64) -> Self {
        Self {
            width: side,
            height: side,
        }
    }
}

/// Draws the viewport as one line per row, highest `y` first, with `1` for
/// live cells and `0` for dead ones, space-separated.
pub fn render(live: &CellSet, viewport: Viewport) -> String {
    let mut out = String::new();
    for y in (0..viewport.height).rev() {
        for x in 0..viewport.width {
            if x > 0 {
                out.push(' ');
            }
            let glyph = if live.contains(&Coord::new(x, y)) {
                '1'
            } else {
                '0'
            };
            out.push(glyph);
        }
        out.push('\n');
    }
    out
}
