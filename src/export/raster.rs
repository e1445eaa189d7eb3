//! # PNG Rendering
//!
//! Draws the board the way it looks on screen: one filled circle per lamp
//! on a transparent background, laid out on a fixed pitch.
//!
//! ## Geometry
//! - Lamp `(col, row)` is centered at `(col * PITCH + R, row * PITCH + R)`
//! - Image size is `columns * PITCH - GAP` by `rows * PITCH - GAP`

use anyhow::anyhow;
use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_filled_circle_mut;

use crate::board::Board;

pub const LAMP_RADIUS: u32 = 5;
/// Distance between neighbouring lamp centers
pub const LAMP_PITCH: u32 = 15;
pub const LAMP_GAP: u32 = LAMP_PITCH - 2 * LAMP_RADIUS;

/// Light yellow
pub const ON_COLOR: Rgba<u8> = Rgba([0xFF, 0xFF, 0xE0, 0xFF]);
pub const OFF_COLOR: Rgba<u8> = Rgba([0x44, 0x44, 0x44, 0xFF]);

/// Pixel size of the rendered image for a board of the given size.
pub fn image_size(columns: usize, rows: usize) -> anyhow::Result<(u32, u32)> {
    let side = |count: usize| -> anyhow::Result<u32> {
        u32::try_from(count)
            .ok()
            .and_then(|c| c.checked_mul(LAMP_PITCH))
            .map(|px| px - LAMP_GAP)
            .ok_or_else(|| anyhow!("board side of {} lamps is too large to render", count))
    };
    Ok((side(columns)?, side(rows)?))
}

pub fn render(board: &Board) -> anyhow::Result<RgbaImage> {
    let (width, height) = image_size(board.columns(), board.rows())?;
    let mut image = RgbaImage::new(width, height);

    for (index, cell) in board.cells().iter().enumerate() {
        let (col, row) = board.position_of(index);
        // Fits in i32: the image size check above bounds col and row.
        let center = (
            (col as u32 * LAMP_PITCH + LAMP_RADIUS) as i32,
            (row as u32 * LAMP_PITCH + LAMP_RADIUS) as i32,
        );
        let color = if cell.on { ON_COLOR } else { OFF_COLOR };
        draw_filled_circle_mut(&mut image, center, LAMP_RADIUS as i32, color);
    }

    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_leaves_no_trailing_gap() {
        assert_eq!(image_size(50, 30).unwrap(), (745, 445));
        assert_eq!(image_size(1, 1).unwrap(), (10, 10));
    }

    #[test]
    fn lamps_are_colored_by_state() {
        let mut board = Board::new(2, 1).unwrap();
        board.toggle(1);
        let image = render(&board).unwrap();

        assert_eq!(image.dimensions(), (25, 10));
        assert_eq!(*image.get_pixel(5, 5), OFF_COLOR);
        assert_eq!(*image.get_pixel(20, 5), ON_COLOR);
    }

    #[test]
    fn gaps_stay_transparent() {
        let board = Board::new(2, 2).unwrap();
        let image = render(&board).unwrap();
        assert_eq!(image.get_pixel(12, 5)[3], 0);
        assert_eq!(image.get_pixel(5, 12)[3], 0);
    }
}
