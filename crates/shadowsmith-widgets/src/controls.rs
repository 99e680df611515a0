//! Shadow parameter controls: sliders, inset toggle and color inputs.

use egui::{Slider, TextEdit, TextStyle, Ui};
use shadowsmith_core::{
    BLUR_RANGE, EditorAction, HexColor, LayerEdit, OFFSET_RANGE, OPACITY_RANGE, OPACITY_STEP,
    PreviewColors, Rgb, SPREAD_RANGE, ShadowParams,
};

/// Edit form for the selected shadow layer.
pub struct ShadowControls {
    params: ShadowParams,
}

impl ShadowControls {
    /// Create controls showing the given form values.
    pub fn new(params: ShadowParams) -> Self {
        Self { params }
    }

    /// Show the controls and return the edits made this frame.
    pub fn show(self, ui: &mut Ui) -> Vec<EditorAction> {
        let mut edits = Vec::new();
        let ShadowParams {
            mut offset_x,
            mut offset_y,
            mut blur,
            mut spread,
            mut opacity,
            mut inset,
            color,
        } = self.params;

        if ui.add(Slider::new(&mut offset_x, OFFSET_RANGE).text("Shift right")).changed() {
            edits.push(LayerEdit::OffsetX(offset_x));
        }
        if ui.add(Slider::new(&mut offset_y, OFFSET_RANGE).text("Shift down")).changed() {
            edits.push(LayerEdit::OffsetY(offset_y));
        }
        if ui.add(Slider::new(&mut spread, SPREAD_RANGE).text("Spread")).changed() {
            edits.push(LayerEdit::Spread(spread));
        }
        if ui.add(Slider::new(&mut blur, BLUR_RANGE).text("Blur")).changed() {
            edits.push(LayerEdit::Blur(blur));
        }
        if ui
            .add(
                Slider::new(&mut opacity, OPACITY_RANGE)
                    .step_by(OPACITY_STEP)
                    .fixed_decimals(1)
                    .text("Opacity"),
            )
            .changed()
        {
            edits.push(LayerEdit::Opacity(opacity));
        }
        if ui.checkbox(&mut inset, "Inset").changed() {
            edits.push(LayerEdit::Inset(inset));
        }

        let mut actions: Vec<EditorAction> = edits.into_iter().map(EditorAction::Edit).collect();

        ui.horizontal(|ui| {
            if let Some(picked) = color_button(ui, color) {
                actions.push(EditorAction::Edit(LayerEdit::Color(picked)));
            }
            if let Some(text) = hex_input(ui, color) {
                actions.push(EditorAction::SetColorText(text));
            }
        });

        actions
    }
}

/// Pickers for the preview background and box colors.
pub struct PreviewColorControls {
    colors: PreviewColors,
}

impl PreviewColorControls {
    pub fn new(colors: PreviewColors) -> Self {
        Self { colors }
    }

    pub fn show(self, ui: &mut Ui) -> Vec<EditorAction> {
        let mut actions = Vec::new();
        ui.horizontal(|ui| {
            ui.label("Background");
            if let Some(color) = color_button(ui, self.colors.background) {
                actions.push(EditorAction::SetPreviewBackground(color));
            }
            ui.label("Box");
            if let Some(color) = color_button(ui, self.colors.box_color) {
                actions.push(EditorAction::SetPreviewBox(color));
            }
        });
        actions
    }
}

/// Color picker button; returns the new color if it changed.
fn color_button(ui: &mut Ui, color: HexColor) -> Option<HexColor> {
    let Rgb { r, g, b } = color.rgb();
    let mut srgb = [r, g, b];
    if ui.color_edit_button_srgb(&mut srgb).changed() {
        let [r, g, b] = srgb;
        Some(HexColor::from_rgb(r, g, b))
    } else {
        None
    }
}

/// Hex text field. The text is only submitted once editing ends, so
/// partially typed colors never reach the editor.
fn hex_input(ui: &mut Ui, color: HexColor) -> Option<String> {
    let id = ui.id().with("hex_input");
    let mut text = ui
        .data_mut(|data| data.get_temp::<String>(id))
        .unwrap_or_else(|| color.to_string());

    let response = ui.add(
        TextEdit::singleline(&mut text)
            .desired_width(72.0)
            .font(TextStyle::Monospace),
    );

    if response.lost_focus() {
        ui.data_mut(|data| data.remove::<String>(id));
        (text != color.to_string()).then_some(text)
    } else {
        if response.has_focus() {
            ui.data_mut(|data| data.insert_temp(id, text));
        }
        None
    }
}
