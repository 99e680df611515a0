//! egui editor surface for Shadowsmith.
//!
//! Widgets never change editor state themselves. Each one reads an
//! [`EditorState`] snapshot and returns the [`EditorAction`]s the user
//! triggered this frame; the host applies them with
//! [`EditorState::apply`]:
//!
//! - **Controls**: offset/blur/spread/opacity sliders, inset toggle, color input
//! - **Layers**: selectable, removable, drag-and-drop reorderable layer list
//! - **Preview**: live preview box and the generated CSS code panel
//! - **Layout**: card frames and section labels

pub mod controls;
pub mod layers;
pub mod layout;
pub mod preview;

pub use controls::{PreviewColorControls, ShadowControls};
pub use layers::{LayerDrag, LayerListView, move_action};
pub use layout::{card, card_frame, section_label, separator};
pub use preview::{CssCodePanel, ShadowPreview, egui_shadow, to_color32};

use egui::Ui;
use shadowsmith_core::{EditorAction, EditorState};

/// Standard sizing constants used across widgets.
pub mod sizing {
    /// Layer row color swatch size
    pub const SWATCH: f32 = 14.0;
    /// Preview area size
    pub const PREVIEW_WIDTH: f32 = 320.0;
    pub const PREVIEW_HEIGHT: f32 = 240.0;
    /// Size of the box the shadow is cast from
    pub const PREVIEW_BOX: f32 = 120.0;
    /// Standard corner radius
    pub const CORNER_RADIUS: u8 = 4;
    /// Card corner radius
    pub const CARD_RADIUS: u8 = 8;
}

/// Standard colors used across widgets.
pub mod theme {
    use egui::Color32;

    /// Text color (dark gray)
    pub const TEXT: Color32 = Color32::from_rgb(60, 60, 60);
    /// Muted text color
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 120, 120);
    /// Border color
    pub const BORDER: Color32 = Color32::from_rgb(220, 220, 220);
    /// Selection/active color (blue)
    pub const ACCENT: Color32 = Color32::from_rgb(59, 130, 246);
    /// Card background
    pub const CARD_BG: Color32 = Color32::from_rgb(255, 255, 255);
    /// Code block background
    pub const CODE_BG: Color32 = Color32::from_rgb(246, 246, 247);
}

/// Show the whole editor: controls and layers, preview, and CSS code.
///
/// Returns the actions triggered this frame, in the order they happened.
pub fn editor_panel(ui: &mut Ui, state: &EditorState) -> Vec<EditorAction> {
    let mut actions = Vec::new();

    card(ui, "Box-Shadow CSS Generator", |ui| {
        actions.extend(ShadowControls::new(state.form()).show(ui));
        separator(ui);

        section_label(ui, "Layers");
        actions.extend(
            LayerListView::new(state.layers(), state.selected_id()).show(ui),
        );
        if ui.button("Add layer").clicked() {
            actions.push(EditorAction::AddLayer);
        }
    });

    card(ui, "Preview", |ui| {
        actions.extend(PreviewColorControls::new(state.preview()).show(ui));
        ShadowPreview::new(state.layers(), state.preview()).show(ui);
    });

    card(ui, "CSS code", |ui| {
        if CssCodePanel::new(state.css_declaration()).show(ui) {
            log::info!("Copied box-shadow declaration to clipboard");
        }
    });

    actions
}

#[cfg(test)]
mod tests {
    use super::*;
    use shadowsmith_core::{LayerEdit, ShadowParams};

    fn run_frame(state: &EditorState) -> Vec<EditorAction> {
        let ctx = egui::Context::default();
        let mut actions = Vec::new();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                actions = editor_panel(ui, state);
            });
        });
        actions
    }

    #[test]
    fn test_idle_frame_emits_no_actions() {
        let state = EditorState::default();
        assert!(run_frame(&state).is_empty());
    }

    #[test]
    fn test_renders_multi_layer_state() {
        let state = EditorState::default()
            .apply_all([
                EditorAction::AddLayer,
                EditorAction::Edit(LayerEdit::Inset(true)),
                EditorAction::LoadParams(ShadowParams {
                    offset_x: -50,
                    offset_y: 50,
                    blur: 100,
                    spread: 100,
                    opacity: 1.0,
                    inset: true,
                    ..Default::default()
                }),
            ])
            .unwrap();
        assert!(run_frame(&state).is_empty());
    }
}
