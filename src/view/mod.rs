//! # Board View
//!
//! Draws the lamp grid with the egui painter and turns pointer and keyboard
//! input into calls on [`LampBoard`]. The view keeps no lamp state of its
//! own; every frame is drawn from the board.
//!
//! ## Input
//! - Click or tap: toggle the lamp
//! - Primary-button drag: light every lamp the pointer passes over
//! - Arrow keys move the focus ring, Enter/Space toggles the focused lamp
//! - Ctrl/Cmd `+`/`-`/`0`: zoom

pub mod coordinate_transform;
pub mod style;

pub use style::LampStyle;

use egui::{PointerButton, Pos2, Rect, Sense, Stroke, Vec2};

use crate::controller::LampBoard;
use coordinate_transform::{grid_size, lamp_at, lamp_center};

/// Something the user did to the board this frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoardEvent {
    Toggled(usize),
    StrokeFinished,
}

pub struct BoardView {
    pub style: LampStyle,
    pub zoom: f32,
    /// Keyboard focus ring position
    cursor: usize,
    stroke_active: bool,
    hovered: Option<usize>,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            style: LampStyle::default(),
            zoom: 1.0,
            cursor: 0,
            stroke_active: false,
            hovered: None,
        }
    }
}

impl BoardView {
    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    pub fn show(&mut self, ui: &mut egui::Ui, lamps: &mut LampBoard) -> Option<BoardEvent> {
        let columns = lamps.board().columns();
        let rows = lamps.board().rows();
        let pitch = self.style.lamp_pitch * self.zoom;
        let radius = self.style.lamp_radius * self.zoom;
        self.cursor = self.cursor.min(lamps.board().len().saturating_sub(1));

        let (response, painter) =
            ui.allocate_painter(grid_size(columns, rows, pitch, radius), Sense::click_and_drag());
        let origin = response.rect.min;
        let hit = |pos: Pos2| lamp_at(pos, origin, columns, rows, pitch, radius);

        let mut event = None;

        // Drag painting
        if response.drag_started_by(PointerButton::Primary) {
            self.stroke_active = true;
            if let Some(index) = ui.input(|i| i.pointer.press_origin()).and_then(hit) {
                lamps.paint(index);
            }
        }
        if self.stroke_active && response.dragged_by(PointerButton::Primary) {
            if let Some(index) = response.interact_pointer_pos().and_then(hit) {
                lamps.paint(index);
                self.cursor = index;
            }
        }
        if self.stroke_active && !response.dragged_by(PointerButton::Primary) {
            self.stroke_active = false;
            if lamps.finish_stroke() {
                event = Some(BoardEvent::StrokeFinished);
            }
        }

        if response.clicked() {
            response.request_focus();
            if let Some(index) = response.interact_pointer_pos().and_then(hit) {
                lamps.handle_user_toggle(index);
                self.cursor = index;
                event = Some(BoardEvent::Toggled(index));
            }
        }

        if response.has_focus() {
            ui.memory_mut(|m| {
                m.set_focus_lock_filter(
                    response.id,
                    egui::EventFilter {
                        horizontal_arrows: true,
                        vertical_arrows: true,
                        ..Default::default()
                    },
                )
            });
            let (dx, dy, toggle) = ui.input(|i| {
                let dx = i.key_pressed(egui::Key::ArrowRight) as i64
                    - i.key_pressed(egui::Key::ArrowLeft) as i64;
                let dy = i.key_pressed(egui::Key::ArrowDown) as i64
                    - i.key_pressed(egui::Key::ArrowUp) as i64;
                let toggle = i.key_pressed(egui::Key::Enter) || i.key_pressed(egui::Key::Space);
                (dx, dy, toggle)
            });
            self.move_cursor(dx, dy, columns, rows);
            if toggle {
                lamps.handle_user_toggle(self.cursor);
                event = Some(BoardEvent::Toggled(self.cursor));
            }
        }

        if response.hovered() {
            self.handle_zoom(ui);
        }
        self.hovered = response.hover_pos().and_then(hit);

        // Painting
        let board = lamps.board();
        let lamp_size = Vec2::splat(2.0 * radius);
        for (index, cell) in board.cells().iter().enumerate() {
            let center = lamp_center(index, columns, origin, pitch, radius);
            if !ui.is_rect_visible(Rect::from_center_size(center, lamp_size)) {
                continue;
            }
            let color = if cell.on {
                self.style.on_color
            } else if self.hovered == Some(index) {
                self.style.hover_color
            } else {
                self.style.off_color
            };
            painter.circle_filled(center, radius, color);
        }
        if response.has_focus() && !board.is_empty() {
            let center = lamp_center(self.cursor, columns, origin, pitch, radius);
            painter.circle_stroke(center, radius + 1.5, Stroke::new(1.5, self.style.focus_color));
        }

        event
    }

    fn move_cursor(&mut self, dx: i64, dy: i64, columns: usize, rows: usize) {
        if dx == 0 && dy == 0 {
            return;
        }
        let col = (self.cursor % columns) as i64 + dx;
        let row = (self.cursor / columns) as i64 + dy;
        let col = col.clamp(0, columns as i64 - 1) as usize;
        let row = row.clamp(0, rows as i64 - 1) as usize;
        self.cursor = row * columns + col;
    }

    fn handle_zoom(&mut self, ui: &egui::Ui) {
        ui.input(|i| {
            if !i.modifiers.command {
                return;
            }
            if i.key_pressed(egui::Key::Plus) || i.key_pressed(egui::Key::Equals) {
                self.zoom = (self.zoom * 1.1).clamp(0.5, 4.0);
            }
            if i.key_pressed(egui::Key::Minus) {
                self.zoom = (self.zoom / 1.1).clamp(0.5, 4.0);
            }
            if i.key_pressed(egui::Key::Num0) {
                self.zoom = 1.0;
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_moves_within_grid() {
        let mut view = BoardView::default();
        view.move_cursor(1, 1, 3, 2);
        assert_eq!(view.cursor, 4);
        view.move_cursor(5, 5, 3, 2);
        assert_eq!(view.cursor, 5);
        view.move_cursor(-9, -9, 3, 2);
        assert_eq!(view.cursor, 0);
    }
}
