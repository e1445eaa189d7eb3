use std::path::Path;
use std::time::{Duration, Instant};

use eframe::egui;
use lamp_board::controller::LampBoard;
use lamp_board::export;
use lamp_board::loader::ImportLoader;
use lamp_board::notify::{Level, Notifier};
use lamp_board::parse_dimension;
use lamp_board::settings::{AppSettings, SETTINGS_PATH};
use lamp_board::view::{BoardEvent, BoardView};

fn main() -> eframe::Result<()> {
    env_logger::init();
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([900.0, 640.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Lamp Board",
        native_options,
        Box::new(|_cc| Ok(Box::new(LampApp::default()))),
    )
}

struct LampApp {
    lamps: LampBoard,
    view: BoardView,
    settings: AppSettings,
    // Raw text of the size fields, validated on "Apply"
    columns_input: String,
    rows_input: String,
    import_path: String,
    loader: ImportLoader,
    notifier: Notifier,
    show_log_window: bool,
}

impl Default for LampApp {
    fn default() -> Self {
        let settings = AppSettings::load_from(Path::new(SETTINGS_PATH));
        let mut notifier = Notifier::default();

        let lamps = LampBoard::new(settings.board_columns, settings.board_rows)
            .unwrap_or_else(|e| {
                notifier.error(format!("Saved board size ignored: {}", e));
                LampBoard::default()
            });
        notifier.log(format!(
            "[System] Board ready: {}x{}",
            lamps.board().columns(),
            lamps.board().rows()
        ));

        Self {
            columns_input: lamps.board().columns().to_string(),
            rows_input: lamps.board().rows().to_string(),
            import_path: settings.last_import_path.clone().unwrap_or_default(),
            lamps,
            view: BoardView::default(),
            settings,
            loader: ImportLoader::new(),
            notifier,
            show_log_window: false,
        }
    }
}

impl LampApp {
    fn save_settings(&mut self) {
        if let Err(e) = self.settings.save_to(Path::new(SETTINGS_PATH)) {
            log::error!("Failed to save settings: {:#}", e);
            self.notifier.log(format!("[Error] Failed to save settings: {:#}", e));
        }
    }

    fn apply_size(&mut self) {
        let requested = parse_dimension(&self.columns_input)
            .and_then(|columns| parse_dimension(&self.rows_input).map(|rows| (columns, rows)));
        let result = requested
            .and_then(|(columns, rows)| self.lamps.resize(columns, rows).map(|()| (columns, rows)));

        match result {
            Ok((columns, rows)) => {
                self.settings.board_columns = columns;
                self.settings.board_rows = rows;
                self.save_settings();
                self.notifier.info(format!("Size applied: {}x{}", columns, rows));
            }
            Err(e) => self
                .notifier
                .error(format!("Please enter valid dimensions ({})", e)),
        }
    }

    fn undo(&mut self) {
        match self.lamps.undo() {
            Ok(true) => self.notifier.log("[Board] Undo"),
            Ok(false) => {}
            Err(e) => self
                .notifier
                .error(format!("Cannot undo past the last resize ({})", e)),
        }
    }

    fn export_json(&mut self) {
        match export::export_json(self.lamps.board(), &self.settings.export_dir()) {
            Ok(path) => self
                .notifier
                .info(format!("Exported JSON to {}", path.display())),
            Err(e) => self.notifier.error(format!("JSON export failed: {:#}", e)),
        }
    }

    fn export_png(&mut self) {
        match export::export_png(self.lamps.board(), &self.settings.export_dir()) {
            Ok(path) => self
                .notifier
                .info(format!("Exported PNG to {}", path.display())),
            Err(e) => self.notifier.error(format!("PNG export failed: {:#}", e)),
        }
    }

    fn request_import(&mut self) {
        let path = self.import_path.trim().to_string();
        if path.is_empty() {
            self.notifier.error("Enter the path of a JSON file to import");
            return;
        }
        self.settings.last_import_path = Some(path.clone());
        self.save_settings();
        self.loader.request(path);
    }

    fn poll_imports(&mut self) {
        while let Some(loaded) = self.loader.poll() {
            let text = match loaded.contents {
                Ok(text) => text,
                Err(e) => {
                    self.notifier
                        .error(format!("Could not read {}: {}", loaded.path.display(), e));
                    continue;
                }
            };
            match self.lamps.import_json(&text) {
                Ok(()) => self
                    .notifier
                    .info(format!("Imported from {}", loaded.path.display())),
                Err(e) => self.notifier.error(format!("Import failed: {}", e)),
            }
        }
    }

    fn show_toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Columns:");
            ui.add(egui::TextEdit::singleline(&mut self.columns_input).desired_width(40.0));
            ui.label("Rows:");
            ui.add(egui::TextEdit::singleline(&mut self.rows_input).desired_width(40.0));
            if ui.button("Apply size").clicked() {
                self.apply_size();
            }
            ui.separator();

            let undo = ui.add_enabled(self.lamps.can_undo(), egui::Button::new("↶ Undo"));
            if undo.on_hover_text("Ctrl/Cmd+Z").clicked() {
                self.undo();
            }
            ui.separator();

            if ui.button("Export JSON").clicked() {
                self.export_json();
            }
            if ui.button("Export PNG").clicked() {
                self.export_png();
            }
            if ui
                .checkbox(&mut self.settings.export_to_desktop, "🖥 Desktop")
                .on_hover_text("Write exports to the Desktop instead of ./exports")
                .changed()
            {
                self.save_settings();
            }
            ui.separator();

            ui.label("Import:");
            ui.add(
                egui::TextEdit::singleline(&mut self.import_path)
                    .hint_text("path/to/state.json")
                    .desired_width(160.0),
            );
            let import = ui.add_enabled(!self.loader.is_busy(), egui::Button::new("Import JSON"));
            if import.clicked() {
                self.request_import();
            }
            ui.separator();

            if ui.button("Log").clicked() {
                self.show_log_window = !self.show_log_window;
            }
        });
    }

    fn show_status(&mut self, ui: &mut egui::Ui, now: Instant) {
        ui.horizontal(|ui| {
            let board = self.lamps.board();
            ui.label(format!(
                "{}x{} · {} lit · history {}",
                board.columns(),
                board.rows(),
                board.lit_count(),
                self.lamps.history().len()
            ));
            if let Some(index) = self.view.hovered() {
                let (col, row) = board.position_of(index);
                ui.separator();
                ui.label(format!("Lamp {} ({}, {})", index + 1, col + 1, row + 1));
            }
            if let Some(notification) = self.notifier.active(now) {
                ui.separator();
                let color = match notification.level {
                    Level::Info => ui.visuals().strong_text_color(),
                    Level::Error => egui::Color32::from_rgb(230, 80, 80),
                };
                ui.label(egui::RichText::new(&notification.text).color(color));
            }
        });
    }

    fn show_log(&mut self, ctx: &egui::Context) {
        let mut open = self.show_log_window;
        egui::Window::new("Output Log")
            .open(&mut open)
            .resizable(true)
            .collapsible(true)
            .default_width(500.0)
            .default_height(200.0)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    if ui.button("Clear").clicked() {
                        self.notifier.clear_logs();
                    }
                    ui.separator();
                    ui.label(format!("Count: {}", self.notifier.logs().len()));
                });
                ui.separator();
                egui::ScrollArea::both()
                    .stick_to_bottom(true)
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        for line in self.notifier.logs() {
                            ui.monospace(line);
                        }
                    });
            });
        self.show_log_window = open;
    }
}

impl eframe::App for LampApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_imports();
        if self.loader.is_busy() {
            ctx.request_repaint_after(Duration::from_millis(50));
        }

        // Ctrl+Z inside a text field belongs to the text field
        if !ctx.wants_keyboard_input()
            && ctx.input(|i| i.modifiers.command && i.key_pressed(egui::Key::Z))
        {
            self.undo();
        }

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            self.show_toolbar(ui);
        });

        let now = Instant::now();
        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            self.show_status(ui, now);
        });
        if let Some(remaining) = self.notifier.remaining(now) {
            ctx.request_repaint_after(remaining);
        }

        if self.show_log_window {
            self.show_log(ctx);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::both()
                .drag_to_scroll(false)
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    match self.view.show(ui, &mut self.lamps) {
                        Some(BoardEvent::Toggled(index)) => {
                            let state = if self.lamps.board().is_on(index) { "on" } else { "off" };
                            self.notifier.log(format!("[Board] Lamp {} {}", index + 1, state));
                        }
                        Some(BoardEvent::StrokeFinished) => self.notifier.log(format!(
                            "[Board] Stroke, {} lit",
                            self.lamps.board().lit_count()
                        )),
                        None => {}
                    }
                });
        });
    }
}
