//! App module - contains the main application state and logic

mod submit;
mod views;

use crate::error::TransportError;
use crate::form::FormView;
use crate::handler::{FormSubmissionHandler, PendingSubmission};
use crate::settings::Settings;
use crate::theme;
use crate::transport::HttpTransport;
use crate::types::ServerResponse;
use eframe::egui;
use std::path::PathBuf;
use tokio::sync::oneshot;
use tracing::info;

// ============================================================================
// APP STATE
// ============================================================================

/// A request running on the runtime, waiting to be applied to the view
pub(crate) struct InFlight {
    pub(crate) pending: PendingSubmission,
    pub(crate) rx: oneshot::Receiver<Result<ServerResponse, TransportError>>,
}

pub struct App {
    pub(crate) view: FormView,
    pub(crate) handler: FormSubmissionHandler<HttpTransport>,
    pub(crate) runtime: tokio::runtime::Runtime,
    pub(crate) in_flight: Option<InFlight>,
    // Settings
    pub(crate) settings: Settings,
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) data_dir: PathBuf,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings: Settings,
        data_dir: PathBuf,
    ) -> std::io::Result<Self> {
        // Force dark theme
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        // Add Phosphor icons font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        theme::apply_visuals(&cc.egui_ctx);

        let handler = FormSubmissionHandler::from_config(&settings.handler_config());
        info!(endpoint = %handler.transport().endpoint(), "Contact form ready");

        Ok(Self {
            view: FormView::default(),
            handler,
            runtime: tokio::runtime::Runtime::new()?,
            in_flight: None,
            settings,
            window_pos: None,
            window_size: None,
            data_dir,
        })
    }

    pub fn save_settings(&self) {
        let settings = Settings {
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
            ..self.settings.clone()
        };
        settings.save(&self.data_dir);
    }
}
