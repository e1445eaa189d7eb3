//! Conversions between lamp indices and screen positions.
//!
//! The grid is laid out row-major from `origin`, one lamp every `pitch`
//! pixels, each lamp a circle of `radius`.

use egui::{Pos2, Vec2};

/// Screen size of the whole grid.
pub fn grid_size(columns: usize, rows: usize, pitch: f32, radius: f32) -> Vec2 {
    let gap = pitch - 2.0 * radius;
    Vec2::new(columns as f32 * pitch - gap, rows as f32 * pitch - gap)
}

/// Center of the lamp at `index`.
pub fn lamp_center(index: usize, columns: usize, origin: Pos2, pitch: f32, radius: f32) -> Pos2 {
    let col = index % columns;
    let row = index / columns;
    origin + Vec2::new(col as f32 * pitch + radius, row as f32 * pitch + radius)
}

/// Lamp under `pos`, if any. Points in the gaps between lamps hit nothing.
pub fn lamp_at(
    pos: Pos2,
    origin: Pos2,
    columns: usize,
    rows: usize,
    pitch: f32,
    radius: f32,
) -> Option<usize> {
    let rel = pos - origin;
    if rel.x < 0.0 || rel.y < 0.0 {
        return None;
    }
    let col = (rel.x / pitch) as usize;
    let row = (rel.y / pitch) as usize;
    if col >= columns || row >= rows {
        return None;
    }
    let local = Vec2::new(rel.x - col as f32 * pitch, rel.y - row as f32 * pitch);
    let diameter = 2.0 * radius;
    if local.x > diameter || local.y > diameter {
        return None;
    }
    Some(row * columns + col)
}
