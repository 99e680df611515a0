//! Live preview of the composed shadow and the CSS code panel.

use egui::epaint::Shadow;
use egui::{Color32, CornerRadius, Rect, RichText, Sense, Stroke, StrokeKind, Ui, vec2};
use shadowsmith_core::{HexColor, LayerList, PreviewColors, ShadowLayer};

use crate::{sizing, theme};

/// Convert a hex color plus opacity fraction into an egui color.
pub fn to_color32(color: HexColor, opacity: f64) -> Color32 {
    let rgb = color.rgb();
    let alpha = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color32::from_rgba_unmultiplied(rgb.r, rgb.g, rgb.b, alpha)
}

/// The egui shadow matching an outer (non-inset) layer.
///
/// Layer values always fit: offsets are within ±50 and blur/spread within 0..=100.
pub fn egui_shadow(layer: &ShadowLayer) -> Shadow {
    Shadow {
        offset: [layer.offset_x() as i8, layer.offset_y() as i8],
        blur: layer.blur() as u8,
        spread: layer.spread() as u8,
        color: to_color32(layer.color(), layer.opacity()),
    }
}

/// Preview area with a box casting every layer's shadow.
pub struct ShadowPreview<'a> {
    layers: &'a LayerList,
    colors: PreviewColors,
}

impl<'a> ShadowPreview<'a> {
    pub fn new(layers: &'a LayerList, colors: PreviewColors) -> Self {
        Self { layers, colors }
    }

    pub fn show(self, ui: &mut Ui) {
        let (area, _) = ui.allocate_exact_size(
            vec2(sizing::PREVIEW_WIDTH, sizing::PREVIEW_HEIGHT),
            Sense::hover(),
        );
        if !ui.is_rect_visible(area) {
            return;
        }

        let painter = ui.painter_at(area);
        let radius = CornerRadius::same(sizing::CORNER_RADIUS);
        painter.rect_filled(area, radius, to_color32(self.colors.background, 1.0));

        let bx = Rect::from_center_size(area.center(), vec2(sizing::PREVIEW_BOX, sizing::PREVIEW_BOX));

        // The first CSS shadow is on top, so paint back to front.
        for layer in self.layers.iter().rev().filter(|layer| !layer.inset()) {
            painter.add(egui_shadow(layer).as_shape(bx, radius));
        }

        painter.rect_filled(bx, radius, to_color32(self.colors.box_color, 1.0));

        let inner = painter.with_clip_rect(bx.intersect(area));
        for layer in self.layers.iter().rev().filter(|layer| layer.inset()) {
            paint_inset(&inner, bx, layer);
        }
    }
}

/// Approximate an inset shadow: a solid rim outside the offset, shrunk
/// box, plus a half-transparent band as wide as the blur.
fn paint_inset(painter: &egui::Painter, bx: Rect, layer: &ShadowLayer) {
    let offset = vec2(layer.offset_x() as f32, layer.offset_y() as f32);
    let hole = bx.translate(offset).shrink(layer.spread() as f32);
    let color = to_color32(layer.color(), layer.opacity());
    let cover = bx.width().max(bx.height()) + 100.0;

    let blur = layer.blur() as f32;
    painter.rect_stroke(
        hole.shrink(blur / 2.0).expand(cover / 2.0),
        0.0,
        Stroke::new(cover, color.gamma_multiply(0.5)),
        StrokeKind::Middle,
    );
    painter.rect_stroke(
        hole.expand(cover / 2.0),
        0.0,
        Stroke::new(cover, color),
        StrokeKind::Middle,
    );
}

/// Read-only CSS declaration with a copy button.
pub struct CssCodePanel {
    declaration: String,
}

impl CssCodePanel {
    pub fn new(declaration: String) -> Self {
        Self { declaration }
    }

    /// Show the panel; returns true if the declaration was copied.
    pub fn show(self, ui: &mut Ui) -> bool {
        egui::Frame::new()
            .fill(theme::CODE_BG)
            .corner_radius(CornerRadius::same(sizing::CORNER_RADIUS))
            .inner_margin(egui::Margin::same(8))
            .show(ui, |ui| {
                ui.add(egui::Label::new(RichText::new(&self.declaration).monospace()).wrap());
            });

        let copied = ui.button("Copy").clicked();
        if copied {
            ui.ctx().copy_text(self.declaration);
        }
        copied
    }
}
