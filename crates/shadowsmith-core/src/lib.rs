//! Shadowsmith Core Library
//!
//! Platform-agnostic data structures and logic for the Shadowsmith
//! box-shadow editor: hex color conversion, shadow layer formatting,
//! the ordered layer list and the editor state machine.

pub mod color;
pub mod compose;
pub mod editor;
pub mod layer;
pub mod list;

pub use color::{ColorError, HexColor, Rgb, hex_to_rgb, to_rgba};
pub use compose::{compose, declaration};
pub use editor::{EditorAction, EditorConfig, EditorError, EditorResult, EditorState, PreviewColors};
pub use layer::{
    BLUR_RANGE, LayerEdit, LayerId, OFFSET_RANGE, OPACITY_RANGE, OPACITY_STEP, SPREAD_RANGE,
    ShadowLayer, ShadowParams, clamp_opacity, format_layer,
};
pub use list::{LayerError, LayerList, LayerResult};
