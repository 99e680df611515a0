//! Layer list with selection, removal and drag-and-drop reordering.

use egui::{Button, CornerRadius, Id, Sense, Stroke, Ui, vec2};
use shadowsmith_core::{EditorAction, LayerId, LayerList, ShadowLayer};

use crate::{preview::to_color32, sizing, theme};

/// Drag payload: index of the layer being dragged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerDrag(pub usize);

/// Translate a finished drag into a move action (`None` if nothing moves).
pub fn move_action(from: usize, to: usize) -> Option<EditorAction> {
    (from != to).then_some(EditorAction::MoveLayer { from, to })
}

/// The list of shadow layers, topmost first.
pub struct LayerListView<'a> {
    layers: &'a LayerList,
    selected: LayerId,
}

impl<'a> LayerListView<'a> {
    pub fn new(layers: &'a LayerList, selected: LayerId) -> Self {
        Self { layers, selected }
    }

    /// Show the list and return the actions triggered this frame.
    pub fn show(self, ui: &mut Ui) -> Vec<EditorAction> {
        let mut actions = Vec::new();
        let can_remove = self.layers.len() > 1;

        for (index, layer) in self.layers.iter().enumerate() {
            let row = ui
                .horizontal(|ui| self.row(ui, index, layer, can_remove, &mut actions))
                .response;

            if row.dnd_hover_payload::<LayerDrag>().is_some() {
                let rect = row.rect;
                ui.painter().hline(
                    rect.x_range(),
                    rect.top(),
                    Stroke::new(2.0, theme::ACCENT),
                );
            }
            if let Some(drag) = row.dnd_release_payload::<LayerDrag>() {
                actions.extend(move_action(drag.0, index));
            }
        }

        actions
    }

    fn row(
        &self,
        ui: &mut Ui,
        index: usize,
        layer: &ShadowLayer,
        can_remove: bool,
        actions: &mut Vec<EditorAction>,
    ) {
        let drag_id = Id::new(("shadow_layer", layer.id()));
        ui.dnd_drag_source(drag_id, LayerDrag(index), |ui| {
            ui.label(egui::RichText::new("☰").color(theme::TEXT_MUTED));
        })
        .response
        .on_hover_text("Drag to reorder");

        swatch(ui, layer);

        let selected = layer.id() == self.selected;
        let label = format!("Layer {}  {}", index + 1, summary(layer));
        if ui.selectable_label(selected, label).clicked() && !selected {
            actions.push(EditorAction::SelectLayer(layer.id()));
        }

        if ui
            .add_enabled(can_remove, Button::new("✕").small())
            .on_hover_text("Remove layer")
            .clicked()
        {
            actions.push(EditorAction::RemoveLayer(layer.id()));
        }
    }
}

/// Short description shown next to a layer, e.g. `inset 2,4 blur 5`.
fn summary(layer: &ShadowLayer) -> String {
    let prefix = if layer.inset() { "inset " } else { "" };
    format!(
        "{prefix}{},{} blur {}",
        layer.offset_x(),
        layer.offset_y(),
        layer.blur()
    )
}

fn swatch(ui: &mut Ui, layer: &ShadowLayer) {
    let (rect, _) = ui.allocate_exact_size(vec2(sizing::SWATCH, sizing::SWATCH), Sense::hover());
    if ui.is_rect_visible(rect) {
        let radius = CornerRadius::same(sizing::CORNER_RADIUS);
        ui.painter().rect_filled(rect, radius, to_color32(layer.color(), 1.0));
        ui.painter()
            .rect_stroke(rect, radius, Stroke::new(1.0, theme::BORDER), egui::StrokeKind::Inside);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shadowsmith_core::{EditorState, ShadowParams};

    #[test]
    fn test_move_action() {
        assert_eq!(move_action(0, 2), Some(EditorAction::MoveLayer { from: 0, to: 2 }));
        assert_eq!(move_action(1, 1), None);
    }

    #[test]
    fn test_drop_result_reorders_editor() {
        let state = EditorState::default()
            .apply_all([EditorAction::AddLayer, EditorAction::AddLayer])
            .unwrap();
        let ids = state.layers().ids();

        let action = move_action(2, 0).unwrap();
        let state = state.apply(action).unwrap();
        assert_eq!(state.layers().ids(), vec![ids[2], ids[0], ids[1]]);
    }

    #[test]
    fn test_summary() {
        let layer = ShadowLayer::new(ShadowParams {
            offset_x: 2,
            offset_y: -4,
            blur: 9,
            inset: true,
            ..Default::default()
        });
        assert_eq!(summary(&layer), "inset 2,-4 blur 9");
        assert_eq!(summary(&ShadowLayer::default()), "0,0 blur 5");
    }
}
