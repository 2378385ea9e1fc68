// WellScope - ui/theme.rs
//
// Colour scheme, message-class colour mapping, and layout constants.
// No dependencies on app state or business logic.

use crate::core::model::MessageClass;
use egui::Color32;

/// Colour for an upload message class.
pub fn message_colour(class: MessageClass) -> Color32 {
    match class {
        MessageClass::Success => Color32::from_rgb(74, 222, 128), // Green 400
        MessageClass::Warning => Color32::from_rgb(251, 191, 36), // Amber 400
        MessageClass::Error => Color32::from_rgb(248, 113, 113),  // Red 400
    }
}

/// Curve trace colour.
pub const PLOT_LINE: Color32 = Color32::from_rgb(47, 128, 237);

/// Layout constants.
pub const SIDEBAR_WIDTH: f32 = 280.0;
pub const DEPTH_FIELD_WIDTH: f32 = 100.0;
pub const STATS_CARD_WIDTH: f32 = 110.0;
pub const INTERPRETATION_MAX_HEIGHT: f32 = 180.0;
