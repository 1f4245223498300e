//! Centralized theme constants for the contact form window
//! All colors, sizes, and styling should reference these constants

use crate::types::FeedbackKind;
use egui::Color32;

// =============================================================================
// COLORS - Backgrounds
// =============================================================================
pub const BG_BASE: Color32 = Color32::from_rgb(0x09, 0x09, 0x0b); // zinc-950
pub const BG_ELEVATED: Color32 = Color32::from_rgb(0x18, 0x18, 0x1b); // zinc-900
pub const BG_INPUT: Color32 = Color32::from_rgb(0x14, 0x14, 0x18); // input field background
pub const BG_SURFACE: Color32 = Color32::from_rgb(0x27, 0x27, 0x2a); // zinc-800

// =============================================================================
// COLORS - Accent (Blue, water pumps)
// =============================================================================
pub const ACCENT: Color32 = Color32::from_rgb(0x38, 0xbd, 0xf8); // sky-400

// =============================================================================
// COLORS - Text
// =============================================================================
pub const TEXT_PRIMARY: Color32 = Color32::WHITE;
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0xe4, 0xe4, 0xe7); // zinc-200
pub const TEXT_MUTED: Color32 = Color32::from_rgb(0xa1, 0xa1, 0xaa); // zinc-400
pub const TEXT_DIM: Color32 = Color32::from_rgb(0x71, 0x71, 0x7a); // zinc-500

// =============================================================================
// COLORS - Borders
// =============================================================================
pub const BORDER_SUBTLE: Color32 = Color32::from_rgb(0x27, 0x27, 0x2a); // zinc-800
pub const BORDER_FOCUS: Color32 = ACCENT;
pub const BORDER_INVALID: Color32 = Color32::from_rgb(0xff, 0x6b, 0x6b); // #ff6b6b

// =============================================================================
// COLORS - Buttons
// =============================================================================
pub const BTN_ACCENT: Color32 = ACCENT;
pub const BTN_ACCENT_TEXT: Color32 = Color32::from_rgb(0x08, 0x2f, 0x49); // sky-950
pub const BTN_DISABLED: Color32 = Color32::from_rgb(0x27, 0x27, 0x2a); // zinc-800
pub const BTN_DISABLED_TEXT: Color32 = Color32::from_rgb(0x71, 0x71, 0x7a); // zinc-500

// =============================================================================
// COLORS - Feedback messages
// =============================================================================

/// Returns (background, border, text) for a feedback banner
pub fn feedback_colors(kind: FeedbackKind) -> (Color32, Color32, Color32) {
    match kind {
        FeedbackKind::Success => (
            Color32::from_rgb(0xd4, 0xed, 0xda),
            Color32::from_rgb(0xc3, 0xe6, 0xcb),
            Color32::from_rgb(0x15, 0x57, 0x24),
        ),
        FeedbackKind::Error => (
            Color32::from_rgb(0xf8, 0xd7, 0xda),
            Color32::from_rgb(0xf5, 0xc6, 0xcb),
            Color32::from_rgb(0x72, 0x1c, 0x24),
        ),
        FeedbackKind::Info => (
            Color32::from_rgb(0xd1, 0xec, 0xf1),
            Color32::from_rgb(0xbe, 0xe5, 0xeb),
            Color32::from_rgb(0x0c, 0x54, 0x60),
        ),
    }
}

pub fn feedback_icon(kind: FeedbackKind) -> &'static str {
    match kind {
        FeedbackKind::Success => egui_phosphor::regular::CHECK_CIRCLE,
        FeedbackKind::Error => egui_phosphor::regular::WARNING_CIRCLE,
        FeedbackKind::Info => egui_phosphor::regular::INFO,
    }
}

// =============================================================================
// TYPOGRAPHY - Font Sizes
// =============================================================================
pub const FONT_TITLE: f32 = 18.0;
pub const FONT_BODY: f32 = 14.0;
pub const FONT_SMALL: f32 = 11.0;

// =============================================================================
// DIMENSIONS
// =============================================================================
pub const FORM_MAX_WIDTH: f32 = 520.0;
pub const BUTTON_HEIGHT_LARGE: f32 = 36.0;
pub const MESSAGE_ROWS: usize = 6;

// =============================================================================
// CORNER RADIUS
// =============================================================================
pub const RADIUS_DEFAULT: f32 = 4.0;
pub const RADIUS_LARGE: f32 = 8.0;

// =============================================================================
// STROKE WIDTHS
// =============================================================================
pub const STROKE_DEFAULT: f32 = 1.0;
pub const STROKE_MEDIUM: f32 = 1.5;

// =============================================================================
// SPACING
// =============================================================================
pub const SPACING_SM: f32 = 4.0;
pub const SPACING_MD: f32 = 8.0;
pub const SPACING_LG: f32 = 12.0;
pub const SPACING_XL: f32 = 16.0;

// =============================================================================
// HELPER - Apply global visuals
// =============================================================================
pub fn apply_visuals(ctx: &egui::Context) {
    ctx.set_visuals(egui::Visuals {
        dark_mode: true,
        panel_fill: BG_BASE,
        window_fill: Color32::from_rgb(0x1a, 0x1a, 0x1e),
        extreme_bg_color: BG_INPUT,
        faint_bg_color: BG_ELEVATED,
        hyperlink_color: ACCENT,
        selection: egui::style::Selection {
            bg_fill: Color32::from_rgb(0x3a, 0x3a, 0x3f),
            stroke: egui::Stroke::new(STROKE_DEFAULT, BORDER_FOCUS),
        },
        widgets: egui::style::Widgets {
            noninteractive: egui::style::WidgetVisuals {
                bg_fill: BG_ELEVATED,
                weak_bg_fill: BG_SURFACE,
                bg_stroke: egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE),
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, TEXT_PRIMARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
            inactive: egui::style::WidgetVisuals {
                bg_fill: BG_INPUT,
                weak_bg_fill: BG_ELEVATED,
                bg_stroke: egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE),
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, TEXT_SECONDARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
            hovered: egui::style::WidgetVisuals {
                bg_fill: BG_INPUT,
                weak_bg_fill: Color32::from_rgb(0x30, 0x30, 0x35),
                bg_stroke: egui::Stroke::new(STROKE_DEFAULT, TEXT_DIM),
                fg_stroke: egui::Stroke::new(STROKE_MEDIUM, TEXT_PRIMARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
            active: egui::style::WidgetVisuals {
                bg_fill: Color32::from_rgb(0x2e, 0x2e, 0x33),
                weak_bg_fill: Color32::from_rgb(0x2e, 0x2e, 0x33),
                bg_stroke: egui::Stroke::new(STROKE_DEFAULT, BORDER_FOCUS),
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, TEXT_PRIMARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
            open: egui::style::WidgetVisuals {
                bg_fill: BG_SURFACE,
                weak_bg_fill: BG_ELEVATED,
                bg_stroke: egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE),
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, TEXT_PRIMARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
        },
        interact_cursor: Some(egui::CursorIcon::PointingHand),
        window_corner_radius: egui::CornerRadius::same(8),
        menu_corner_radius: egui::CornerRadius::same(8),
        ..egui::Visuals::dark()
    });

    ctx.style_mut(|style| {
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.spacing.button_padding = egui::vec2(12.0, 6.0);
        style.spacing.scroll.bar_width = 6.0;
        style.spacing.scroll.floating = false;
    });
}

// =============================================================================
// HELPER - Form card frame
// =============================================================================
pub fn card_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(BG_ELEVATED)
        .stroke(egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE))
        .corner_radius(RADIUS_LARGE)
        .inner_margin(egui::Margin::same(SPACING_XL as i8))
}

// =============================================================================
// HELPER - Button styles
// =============================================================================

/// Primary submit button; greys out while a request is in flight
pub fn button_submit(text: impl Into<String>, enabled: bool) -> egui::Button<'static> {
    let (fill, color) = if enabled {
        (BTN_ACCENT, BTN_ACCENT_TEXT)
    } else {
        (BTN_DISABLED, BTN_DISABLED_TEXT)
    };
    egui::Button::new(egui::RichText::new(text.into()).color(color).strong())
        .fill(fill)
        .corner_radius(RADIUS_DEFAULT)
        .min_size(egui::vec2(0.0, BUTTON_HEIGHT_LARGE))
}
