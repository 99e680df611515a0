//! Editor state and the actions that drive it.
//!
//! [`EditorState`] is an immutable snapshot of everything the editor UI
//! shows. Widgets report user input as [`EditorAction`]s and the host
//! replaces its state with the result of [`EditorState::apply`].

use crate::color::{ColorError, HexColor};
use crate::compose::{compose, declaration};
use crate::layer::{LayerEdit, LayerId, ShadowLayer, ShadowParams};
use crate::list::{LayerError, LayerList};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Editor errors. The state is never modified when one is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditorError {
    #[error(transparent)]
    Color(#[from] ColorError),
    #[error(transparent)]
    Layer(#[from] LayerError),
    #[error("Cannot remove the last shadow layer")]
    LastLayer,
    #[error("Invalid editor configuration: {0}")]
    Config(String),
}

/// Result type for editor transitions.
pub type EditorResult<T> = Result<T, EditorError>;

/// Colors of the preview surface (not part of the generated CSS).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewColors {
    /// Area behind the preview box.
    pub background: HexColor,
    /// Fill of the box the shadow is cast from.
    pub box_color: HexColor,
}

impl Default for PreviewColors {
    fn default() -> Self {
        Self {
            background: HexColor::white(),
            box_color: HexColor::from_rgb(0x3d, 0x9d, 0xf6),
        }
    }
}

/// Editor startup configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Parameters of the layer the editor starts with.
    pub initial: ShadowParams,
    pub preview: PreviewColors,
}

impl EditorConfig {
    /// Parse a configuration from JSON. Missing fields use defaults.
    pub fn from_json(json: &str) -> EditorResult<Self> {
        serde_json::from_str(json).map_err(|e| EditorError::Config(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// A user intent reported by the UI.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorAction {
    /// Edit one field of the selected layer.
    Edit(LayerEdit),
    /// Set the selected layer's color from text input.
    SetColorText(String),
    /// Replace all parameters of the selected layer.
    LoadParams(ShadowParams),
    /// Append a copy of the selected layer's parameters and select it.
    AddLayer,
    SelectLayer(LayerId),
    RemoveLayer(LayerId),
    /// A drag-and-drop move in the layer list.
    MoveLayer { from: usize, to: usize },
    SetPreviewBackground(HexColor),
    SetPreviewBox(HexColor),
}

/// Snapshot of the editor.
///
/// Always holds at least one layer, and the selected id always refers to a
/// layer in the list.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorState {
    layers: LayerList,
    selected: LayerId,
    preview: PreviewColors,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new(&EditorConfig::default())
    }
}

impl EditorState {
    /// Start with a single layer built from the configured parameters.
    pub fn new(config: &EditorConfig) -> Self {
        let layer = ShadowLayer::new(config.initial);
        let selected = layer.id();
        Self {
            layers: LayerList::new().append(layer),
            selected,
            preview: config.preview,
        }
    }

    pub fn layers(&self) -> &LayerList {
        &self.layers
    }

    pub fn selected_id(&self) -> LayerId {
        self.selected
    }

    pub fn selected_index(&self) -> usize {
        self.layers.position(self.selected).unwrap_or_default()
    }

    /// The currently selected layer.
    pub fn selected(&self) -> Option<&ShadowLayer> {
        self.layers.get(self.selected)
    }

    /// Values shown in the edit form (those of the selected layer).
    pub fn form(&self) -> ShadowParams {
        self.selected()
            .map(ShadowLayer::params)
            .unwrap_or_default()
    }

    pub fn preview(&self) -> PreviewColors {
        self.preview
    }

    /// The composed `box-shadow` value.
    pub fn css_value(&self) -> String {
        compose(&self.layers)
    }

    /// The full `box-shadow: ...;` declaration shown in the code panel.
    pub fn css_declaration(&self) -> String {
        declaration(&self.layers)
    }

    /// Apply an action and return the resulting state.
    pub fn apply(&self, action: EditorAction) -> EditorResult<EditorState> {
        let result = self.transition(&action);
        match &result {
            Ok(_) => log::debug!("Applied {action:?}"),
            Err(e) => log::warn!("Rejected {action:?}: {e}"),
        }
        result
    }

    /// Apply several actions in order. If any fails, none take effect.
    pub fn apply_all<I>(&self, actions: I) -> EditorResult<EditorState>
    where
        I: IntoIterator<Item = EditorAction>,
    {
        actions
            .into_iter()
            .try_fold(self.clone(), |state, action| state.apply(action))
    }

    fn transition(&self, action: &EditorAction) -> EditorResult<EditorState> {
        match action {
            EditorAction::Edit(edit) => self.edit_selected(|params| edit.apply(params)),
            EditorAction::SetColorText(text) => {
                let color: HexColor = text.parse()?;
                self.edit_selected(|params| LayerEdit::Color(color).apply(params))
            }
            EditorAction::LoadParams(params) => self.edit_selected(|_| *params),
            EditorAction::AddLayer => {
                let layer = ShadowLayer::new(self.form());
                let selected = layer.id();
                Ok(Self {
                    layers: self.layers.append(layer),
                    selected,
                    ..self.clone()
                })
            }
            EditorAction::SelectLayer(id) => {
                if !self.layers.contains(*id) {
                    return Err(LayerError::NotFound(*id).into());
                }
                Ok(Self {
                    selected: *id,
                    ..self.clone()
                })
            }
            EditorAction::RemoveLayer(id) => self.remove_layer(*id),
            EditorAction::MoveLayer { from, to } => Ok(Self {
                layers: self.layers.reorder(*from, *to)?,
                ..self.clone()
            }),
            EditorAction::SetPreviewBackground(color) => Ok(Self {
                preview: PreviewColors {
                    background: *color,
                    ..self.preview
                },
                ..self.clone()
            }),
            EditorAction::SetPreviewBox(color) => Ok(Self {
                preview: PreviewColors {
                    box_color: *color,
                    ..self.preview
                },
                ..self.clone()
            }),
        }
    }

    fn edit_selected<F>(&self, mutator: F) -> EditorResult<EditorState>
    where
        F: FnOnce(ShadowParams) -> ShadowParams,
    {
        Ok(Self {
            layers: self.layers.update(self.selected, mutator)?,
            ..self.clone()
        })
    }

    fn remove_layer(&self, id: LayerId) -> EditorResult<EditorState> {
        let index = self
            .layers
            .position(id)
            .ok_or(LayerError::NotFound(id))?;
        if self.layers.len() == 1 {
            return Err(EditorError::LastLayer);
        }

        let layers = self.layers.remove(id)?;
        // Keep the selection unless it was removed; then take the neighbour
        // that moved into its slot (or the new last layer).
        let selected = if id == self.selected {
            let neighbour = index.min(layers.len() - 1);
            layers.at(neighbour).map(ShadowLayer::id).unwrap_or(self.selected)
        } else {
            self.selected
        };

        Ok(Self {
            layers,
            selected,
            ..self.clone()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edit(state: &EditorState, edit: LayerEdit) -> EditorState {
        state.apply(EditorAction::Edit(edit)).unwrap()
    }

    #[test]
    fn test_starts_with_one_default_layer() {
        let state = EditorState::default();
        assert_eq!(state.layers().len(), 1);
        assert_eq!(state.selected_index(), 0);
        assert_eq!(state.form(), ShadowParams::default());
        assert_eq!(state.css_value(), "rgba(0,0,0,0.2) 0px 0px 5px 3px");
        assert_eq!(
            state.css_declaration(),
            "box-shadow: rgba(0,0,0,0.2) 0px 0px 5px 3px;"
        );
    }

    #[test]
    fn test_edit_updates_selected_layer_and_clamps() {
        let state = EditorState::default();
        let state = edit(&state, LayerEdit::OffsetX(999));
        let state = edit(&state, LayerEdit::Opacity(-1.0));
        let state = edit(&state, LayerEdit::Inset(true));

        assert_eq!(state.form().offset_x, 50);
        assert_eq!(state.form().opacity, 0.0);
        assert_eq!(state.css_value(), "inset rgba(0,0,0,0) 50px 0px 5px 3px");
    }

    #[test]
    fn test_add_layer_snapshots_form() {
        let state = edit(&EditorState::default(), LayerEdit::Blur(20));
        let first = state.selected_id();

        let state = state.apply(EditorAction::AddLayer).unwrap();
        assert_eq!(state.layers().len(), 2);
        assert_eq!(state.selected_index(), 1);
        assert_ne!(state.selected_id(), first);
        assert_eq!(state.form().blur, 20);

        // Editing the new layer leaves the first one alone.
        let state = edit(&state, LayerEdit::Blur(60));
        assert_eq!(state.layers().get(first).unwrap().blur(), 20);
        assert_eq!(state.form().blur, 60);
        assert_eq!(
            state.css_value(),
            "rgba(0,0,0,0.2) 0px 0px 20px 3px, rgba(0,0,0,0.2) 0px 0px 60px 3px"
        );
    }

    #[test]
    fn test_select_layer_loads_its_values() {
        let state = EditorState::default();
        let first = state.selected_id();
        let state = state.apply(EditorAction::AddLayer).unwrap();
        let state = edit(&state, LayerEdit::Spread(40));

        let state = state.apply(EditorAction::SelectLayer(first)).unwrap();
        assert_eq!(state.selected_index(), 0);
        assert_eq!(state.form().spread, 3);
    }

    #[test]
    fn test_select_unknown_layer_fails() {
        let state = EditorState::default();
        let missing = uuid::Uuid::new_v4();
        assert_eq!(
            state.apply(EditorAction::SelectLayer(missing)),
            Err(EditorError::Layer(LayerError::NotFound(missing)))
        );
    }

    #[test]
    fn test_invalid_color_text_leaves_state_unchanged() {
        let state = EditorState::default();
        let result = state.apply(EditorAction::SetColorText("#fff".to_string()));
        assert!(matches!(
            result,
            Err(EditorError::Color(ColorError::InvalidColorFormat(_)))
        ));

        let state = state
            .apply(EditorAction::SetColorText("#FF0000".to_string()))
            .unwrap();
        assert_eq!(state.form().color.to_string(), "#ff0000");
    }

    #[test]
    fn test_move_layer() {
        let state = EditorState::default();
        let a = state.selected_id();
        let state = state.apply(EditorAction::AddLayer).unwrap();
        let b = state.selected_id();
        let state = state.apply(EditorAction::AddLayer).unwrap();
        let c = state.selected_id();

        let moved = state.apply(EditorAction::MoveLayer { from: 0, to: 2 }).unwrap();
        assert_eq!(moved.layers().ids(), vec![b, c, a]);
        assert_eq!(moved.selected_id(), c);
        assert_eq!(moved.selected_index(), 1);

        assert_eq!(
            state.apply(EditorAction::MoveLayer { from: 0, to: 3 }),
            Err(EditorError::Layer(LayerError::IndexOutOfRange { index: 3, len: 3 }))
        );
    }

    #[test]
    fn test_remove_selected_layer_selects_neighbour() {
        let state = EditorState::default();
        let a = state.selected_id();
        let state = state.apply(EditorAction::AddLayer).unwrap();
        let b = state.selected_id();
        let state = state.apply(EditorAction::AddLayer).unwrap();
        let c = state.selected_id();

        let state = state.apply(EditorAction::SelectLayer(b)).unwrap();
        let state = state.apply(EditorAction::RemoveLayer(b)).unwrap();
        assert_eq!(state.layers().ids(), vec![a, c]);
        assert_eq!(state.selected_id(), c);

        let state = state.apply(EditorAction::RemoveLayer(c)).unwrap();
        assert_eq!(state.selected_id(), a);
    }

    #[test]
    fn test_remove_last_layer_is_rejected() {
        let state = EditorState::default();
        let id = state.selected_id();
        assert_eq!(
            state.apply(EditorAction::RemoveLayer(id)),
            Err(EditorError::LastLayer)
        );
    }

    #[test]
    fn test_apply_all_is_atomic() {
        let state = EditorState::default();
        let result = state.apply_all([
            EditorAction::AddLayer,
            EditorAction::MoveLayer { from: 0, to: 9 },
        ]);
        assert!(result.is_err());
        assert_eq!(state.layers().len(), 1);

        let state = state
            .apply_all([EditorAction::AddLayer, EditorAction::MoveLayer { from: 1, to: 0 }])
            .unwrap();
        assert_eq!(state.layers().len(), 2);
        assert_eq!(state.selected_index(), 0);
    }

    #[test]
    fn test_preview_colors() {
        let state = EditorState::default();
        assert_eq!(state.preview().box_color.to_string(), "#3d9df6");
        assert_eq!(state.preview().background.to_string(), "#ffffff");

        let state = state
            .apply(EditorAction::SetPreviewBackground(HexColor::black()))
            .unwrap();
        assert_eq!(state.preview().background, HexColor::black());
        assert_eq!(state.css_value(), EditorState::default().css_value());
    }

    #[test]
    fn test_config_from_json() {
        let config = EditorConfig::from_json(
            r##"{"initial": {"blur": 12, "inset": true}, "preview": {"background": "#222222"}}"##,
        )
        .unwrap();
        assert_eq!(config.initial.blur, 12);
        assert!(config.initial.inset);
        assert_eq!(config.initial.spread, 3);
        assert_eq!(config.preview.box_color, PreviewColors::default().box_color);

        let state = EditorState::new(&config);
        assert_eq!(state.css_value(), "inset rgba(0,0,0,0.2) 0px 0px 12px 3px");

        assert!(matches!(
            EditorConfig::from_json(r#"{"initial": {"color": "blue"}}"#),
            Err(EditorError::Config(_))
        ));
    }
}
