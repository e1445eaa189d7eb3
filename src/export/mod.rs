//! # Export
//!
//! Writes the current board to disk as a JSON state file or a PNG image.
//! File names carry a local timestamp so repeated exports never overwrite
//! each other.

pub mod raster;

use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::Local;
use image::ImageFormat;

use crate::board::Board;

pub const JSON_PREFIX: &str = "lamp_state";
pub const PNG_PREFIX: &str = "lamp_board";

pub fn timestamped_name(prefix: &str, extension: &str) -> String {
    let timestamp = Local::now().format("%Y%m%d_%H%M%S_%3f");
    format!("{}_{}.{}", prefix, timestamp, extension)
}

pub fn write_json(board: &Board, path: &Path) -> anyhow::Result<()> {
    std::fs::write(path, board.serialize().to_json())
        .with_context(|| format!("writing {}", path.display()))
}

pub fn write_png(board: &Board, path: &Path) -> anyhow::Result<()> {
    let image = raster::render(board)?;
    image
        .save_with_format(path, ImageFormat::Png)
        .with_context(|| format!("writing {}", path.display()))
}

/// Export the state array into `dir`, returning the written path.
pub fn export_json(board: &Board, dir: &Path) -> anyhow::Result<PathBuf> {
    std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    let path = dir.join(timestamped_name(JSON_PREFIX, "json"));
    write_json(board, &path)?;
    Ok(path)
}

/// Export the rendered board into `dir`, returning the written path.
pub fn export_png(board: &Board, dir: &Path) -> anyhow::Result<PathBuf> {
    std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    let path = dir.join(timestamped_name(PNG_PREFIX, "png"));
    write_png(board, &path)?;
    Ok(path)
}
