//! Shadow layer descriptors, input ranges and CSS formatting.

use crate::color::HexColor;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use uuid::Uuid;

/// Unique identifier for a shadow layer.
pub type LayerId = Uuid;

/// Allowed horizontal/vertical offset in pixels.
pub const OFFSET_RANGE: RangeInclusive<i32> = -50..=50;
/// Allowed blur radius in pixels.
pub const BLUR_RANGE: RangeInclusive<i32> = 0..=100;
/// Allowed spread radius in pixels.
pub const SPREAD_RANGE: RangeInclusive<i32> = 0..=100;
/// Allowed opacity fraction.
pub const OPACITY_RANGE: RangeInclusive<f64> = 0.0..=1.0;
/// Opacity slider granularity.
pub const OPACITY_STEP: f64 = 0.1;

fn clamp_to(value: i32, range: &RangeInclusive<i32>) -> i32 {
    value.clamp(*range.start(), *range.end())
}

/// Clamp an opacity into range and snap it to the slider step.
///
/// NaN is treated as fully transparent.
pub fn clamp_opacity(opacity: f64) -> f64 {
    if opacity.is_nan() {
        return *OPACITY_RANGE.start();
    }
    let clamped = opacity.clamp(*OPACITY_RANGE.start(), *OPACITY_RANGE.end());
    let steps = (1.0 / OPACITY_STEP).round();
    // Dividing (rather than multiplying by the step) keeps 0.3 as the literal 0.3.
    // Adding 0.0 turns -0.0 into 0.0.
    (clamped * steps).round() / steps + 0.0
}

/// Raw shadow parameters as entered in the edit form.
///
/// Values here are not guaranteed to be in range; they are clamped when
/// turned into a [`ShadowLayer`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShadowParams {
    /// Horizontal shift in pixels.
    pub offset_x: i32,
    /// Vertical shift in pixels.
    pub offset_y: i32,
    pub blur: i32,
    pub spread: i32,
    pub color: HexColor,
    /// Opacity fraction (0.0 = transparent, 1.0 = opaque).
    pub opacity: f64,
    /// Draw the shadow inside the border box.
    pub inset: bool,
}

impl Default for ShadowParams {
    fn default() -> Self {
        Self {
            offset_x: 0,
            offset_y: 0,
            blur: 5,
            spread: 3,
            color: HexColor::black(),
            opacity: 0.2,
            inset: false,
        }
    }
}

impl ShadowParams {
    /// Return a copy with every numeric field forced into its range.
    pub fn clamped(self) -> Self {
        Self {
            offset_x: clamp_to(self.offset_x, &OFFSET_RANGE),
            offset_y: clamp_to(self.offset_y, &OFFSET_RANGE),
            blur: clamp_to(self.blur, &BLUR_RANGE),
            spread: clamp_to(self.spread, &SPREAD_RANGE),
            opacity: clamp_opacity(self.opacity),
            ..self
        }
    }
}

/// A single field-level edit of a shadow layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LayerEdit {
    OffsetX(i32),
    OffsetY(i32),
    Blur(i32),
    Spread(i32),
    Opacity(f64),
    Color(HexColor),
    Inset(bool),
}

impl LayerEdit {
    /// Apply this edit to a set of parameters.
    pub fn apply(self, params: ShadowParams) -> ShadowParams {
        match self {
            LayerEdit::OffsetX(offset_x) => ShadowParams { offset_x, ..params },
            LayerEdit::OffsetY(offset_y) => ShadowParams { offset_y, ..params },
            LayerEdit::Blur(blur) => ShadowParams { blur, ..params },
            LayerEdit::Spread(spread) => ShadowParams { spread, ..params },
            LayerEdit::Opacity(opacity) => ShadowParams { opacity, ..params },
            LayerEdit::Color(color) => ShadowParams { color, ..params },
            LayerEdit::Inset(inset) => ShadowParams { inset, ..params },
        }
    }
}

/// One configured `box-shadow` entry.
///
/// All numeric fields are within their declared ranges; every way of
/// building a layer goes through [`ShadowParams::clamped`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "LayerRepr")]
pub struct ShadowLayer {
    id: LayerId,
    #[serde(flatten)]
    params: ShadowParams,
}

/// Deserialization shape; clamps on conversion.
#[derive(Deserialize)]
struct LayerRepr {
    #[serde(default = "Uuid::new_v4")]
    id: LayerId,
    #[serde(flatten)]
    params: ShadowParams,
}

impl From<LayerRepr> for ShadowLayer {
    fn from(repr: LayerRepr) -> Self {
        Self::reconstruct(repr.id, repr.params)
    }
}

impl Default for ShadowLayer {
    fn default() -> Self {
        Self::new(ShadowParams::default())
    }
}

impl ShadowLayer {
    /// Create a new layer with a fresh id.
    pub fn new(params: ShadowParams) -> Self {
        Self::reconstruct(Uuid::new_v4(), params)
    }

    /// Rebuild a layer with a specific id.
    pub(crate) fn reconstruct(id: LayerId, params: ShadowParams) -> Self {
        Self {
            id,
            params: params.clamped(),
        }
    }

    /// Same parameters, new identity.
    pub(crate) fn renewed(self) -> Self {
        Self {
            id: Uuid::new_v4(),
            ..self
        }
    }

    /// Replace the parameters, keeping the id.
    pub fn with_params(&self, params: ShadowParams) -> Self {
        Self::reconstruct(self.id, params)
    }

    pub fn id(&self) -> LayerId {
        self.id
    }

    /// The stored (clamped) parameters.
    pub fn params(&self) -> ShadowParams {
        self.params
    }

    pub fn offset_x(&self) -> i32 {
        self.params.offset_x
    }

    pub fn offset_y(&self) -> i32 {
        self.params.offset_y
    }

    pub fn blur(&self) -> i32 {
        self.params.blur
    }

    pub fn spread(&self) -> i32 {
        self.params.spread
    }

    pub fn color(&self) -> HexColor {
        self.params.color
    }

    pub fn opacity(&self) -> f64 {
        self.params.opacity
    }

    pub fn inset(&self) -> bool {
        self.params.inset
    }
}

/// Format one layer as a CSS shadow entry:
/// `[inset ]<rgba> <x>px <y>px <blur>px <spread>px`.
pub fn format_layer(layer: &ShadowLayer) -> String {
    layer.to_string()
}

impl fmt::Display for ShadowLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = &self.params;
        if p.inset {
            f.write_str("inset ")?;
        }
        write!(
            f,
            "{} {}px {}px {}px {}px",
            p.color.to_rgba(p.opacity),
            p.offset_x,
            p.offset_y,
            p.blur,
            p.spread
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layer_format() {
        let layer = ShadowLayer::default();
        assert_eq!(format_layer(&layer), "rgba(0,0,0,0.2) 0px 0px 5px 3px");
    }

    #[test]
    fn test_inset_layer_format() {
        let layer = ShadowLayer::new(ShadowParams {
            offset_x: -4,
            offset_y: 7,
            blur: 0,
            spread: 12,
            color: "#3d9df6".parse().unwrap(),
            opacity: 1.0,
            inset: true,
        });
        assert_eq!(layer.to_string(), "inset rgba(61,157,246,1) -4px 7px 0px 12px");
    }

    #[test]
    fn test_non_inset_has_no_leading_space() {
        let text = format_layer(&ShadowLayer::default());
        assert!(text.starts_with("rgba("));
        assert!(!text.contains("inset"));
    }

    #[test]
    fn test_clamping_on_construction() {
        let layer = ShadowLayer::new(ShadowParams {
            offset_x: 999,
            offset_y: -999,
            blur: -3,
            spread: 250,
            opacity: -1.0,
            ..Default::default()
        });
        assert_eq!(layer.offset_x(), 50);
        assert_eq!(layer.offset_y(), -50);
        assert_eq!(layer.blur(), 0);
        assert_eq!(layer.spread(), 100);
        assert_eq!(layer.opacity(), 0.0);
    }

    #[test]
    fn test_clamp_opacity() {
        assert_eq!(clamp_opacity(2.5), 1.0);
        assert_eq!(clamp_opacity(-1.0), 0.0);
        assert_eq!(clamp_opacity(f64::NAN), 0.0);
        assert_eq!(clamp_opacity(0.26), 0.3);
        assert_eq!(clamp_opacity(0.1 + 0.2), 0.3);
        assert_eq!(clamp_opacity(0.7), 0.7);
        assert_eq!(clamp_opacity(-0.0).to_string(), "0");
        assert_eq!(clamp_opacity(-0.01).to_string(), "0");
    }

    #[test]
    fn test_layer_edit_apply() {
        let params = ShadowParams::default();
        let edited = LayerEdit::Blur(40).apply(LayerEdit::Inset(true).apply(params));
        assert_eq!(edited.blur, 40);
        assert!(edited.inset);
        assert_eq!(edited.spread, params.spread);
    }

    #[test]
    fn test_with_params_keeps_id() {
        let layer = ShadowLayer::default();
        let edited = layer.with_params(ShadowParams {
            offset_x: 80,
            ..layer.params()
        });
        assert_eq!(edited.id(), layer.id());
        assert_eq!(edited.offset_x(), 50);
    }

    #[test]
    fn test_deserialize_clamps_and_assigns_id() {
        let layer: ShadowLayer =
            serde_json::from_str(r##"{"offset_x": 120, "opacity": 3.0, "color": "#FF0000"}"##).unwrap();
        assert_eq!(layer.offset_x(), 50);
        assert_eq!(layer.opacity(), 1.0);
        assert_eq!(layer.blur(), 5);
        assert_eq!(layer.color().to_string(), "#ff0000");
        assert!(!layer.id().is_nil());
    }

    #[test]
    fn test_serialize_roundtrip_keeps_id() {
        let layer = ShadowLayer::default();
        let json = serde_json::to_string(&layer).unwrap();
        assert!(json.contains("\"color\":\"#000000\""));
        let back: ShadowLayer = serde_json::from_str(&json).unwrap();
        assert_eq!(back, layer);
    }
}
