#![windows_subsystem = "windows"]
//! Bombas Ayala contact form - Main entry point

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

mod app;
mod constants;
mod error;
mod feedback;
mod form;
mod handler;
mod settings;
mod theme;
mod transport;
mod types;
mod ui;
mod utils;
mod validation;

use app::App;
use constants::*;
use eframe::egui;
use tracing::info;

/// Daily rolling log file under `<data dir>/logs`, filtered by `RUST_LOG`.
/// Keep the returned guard alive or buffered lines are lost on exit.
fn init_logging(data_dir: &std::path::Path) -> tracing_appender::non_blocking::WorkerGuard {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let logs_dir = data_dir.join("logs");
    let log_dir_error = std::fs::create_dir_all(&logs_dir).err();

    let (writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::daily(&logs_dir, LOG_FILE));
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(LOG_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    if let Some(e) = log_dir_error {
        tracing::warn!(dir = %logs_dir.display(), error = %e, "Log directory could not be created");
    }
    guard
}

fn main() -> eframe::Result<()> {
    let data_dir = settings::data_dir();
    std::fs::create_dir_all(&data_dir).ok();

    // Initialize logging - guard must live for entire app lifetime
    let _log_guard = init_logging(&data_dir);

    info!(version = APP_VERSION, "{} starting", APP_NAME);

    // Load saved window position/size
    let settings = settings::Settings::load(&data_dir);
    let win_pos = match (settings.window_x, settings.window_y) {
        (Some(x), Some(y)) => Some(egui::pos2(x, y)),
        _ => None,
    };
    let win_size = match (settings.window_w, settings.window_h) {
        (Some(w), Some(h)) => Some(egui::vec2(w, h)),
        _ => None,
    };

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size(win_size.unwrap_or(egui::vec2(600.0, 780.0)))
        .with_min_inner_size([420.0, 560.0])
        .with_title(APP_NAME);

    if let Some(pos) = win_pos {
        viewport = viewport.with_position(pos);
    }

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        APP_NAME,
        options,
        Box::new(move |cc| Ok(Box::new(App::new(cc, settings, data_dir)?))),
    )
}

// ============================================================================
// MAIN UPDATE LOOP & UI RENDERING
// ============================================================================

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Track window position/size for saving on exit
        ctx.input(|i| {
            if let Some(rect) = i.viewport().outer_rect {
                self.window_pos = Some(rect.min);
            }
            if let Some(rect) = i.viewport().inner_rect {
                self.window_size = Some(rect.size());
            }
        });

        // Apply the result of a finished request, then age the banner
        self.poll_submit();
        self.tick_feedback(ctx);

        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(theme::BG_BASE)
                    .inner_margin(egui::Margin::symmetric(24, 0)),
            )
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        ui.vertical_centered(|ui| {
                            ui.set_max_width(theme::FORM_MAX_WIDTH);
                            ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
                                self.render_form(ui, ctx);
                            });
                            ui.add_space(theme::SPACING_XL);
                        });
                    });
            });
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("Application shutting down");
        self.save_settings();
    }
}
