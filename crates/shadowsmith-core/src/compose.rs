//! Joins formatted layers into a `box-shadow` value.

use crate::layer::format_layer;
use crate::list::LayerList;

/// CSS property the composed value belongs to.
pub const PROPERTY: &str = "box-shadow";

/// Format every layer in list order and join them with `, `.
///
/// An empty list composes to an empty string.
pub fn compose(list: &LayerList) -> String {
    list.iter().map(format_layer).collect::<Vec<_>>().join(", ")
}

/// Full CSS declaration, e.g. `box-shadow: rgba(0,0,0,0.2) 0px 0px 5px 3px;`.
///
/// An empty list is shown as `box-shadow: none;`.
pub fn declaration(list: &LayerList) -> String {
    let value = compose(list);
    if value.is_empty() {
        format!("{PROPERTY}: none;")
    } else {
        format!("{PROPERTY}: {value};")
    }
}
