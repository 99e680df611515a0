//! Parsers for layer and move arguments.

use shadowsmith_core::{HexColor, LayerEdit};

/// Edits describing one layer, e.g. `x=2,y=4,blur=10,color=#333333,opacity=0.5,inset`.
///
/// Fields that are not mentioned keep the configured defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerSpec {
    pub edits: Vec<LayerEdit>,
}

/// A drag-and-drop style move, written `FROM:TO` (zero-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveSpec {
    pub from: usize,
    pub to: usize,
}

fn parse_int(key: &str, value: &str) -> Result<i32, String> {
    value
        .trim()
        .parse()
        .map_err(|_| format!("'{key}' expects an integer, got '{value}'"))
}

fn parse_bool(value: &str) -> Result<bool, String> {
    match value.trim() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        other => Err(format!("'inset' expects true or false, got '{other}'")),
    }
}

pub fn parse_layer(spec: &str) -> Result<LayerSpec, String> {
    let mut edits = Vec::new();

    for part in spec.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let (key, value) = match part.split_once('=') {
            Some((key, value)) => (key.trim(), Some(value)),
            None => (part, None),
        };

        let edit = match (key, value) {
            ("inset", None) => LayerEdit::Inset(true),
            ("inset", Some(v)) => LayerEdit::Inset(parse_bool(v)?),
            ("x" | "offset-x", Some(v)) => LayerEdit::OffsetX(parse_int(key, v)?),
            ("y" | "offset-y", Some(v)) => LayerEdit::OffsetY(parse_int(key, v)?),
            ("blur", Some(v)) => LayerEdit::Blur(parse_int(key, v)?),
            ("spread", Some(v)) => LayerEdit::Spread(parse_int(key, v)?),
            ("opacity", Some(v)) => LayerEdit::Opacity(
                v.trim()
                    .parse()
                    .map_err(|_| format!("'opacity' expects a number, got '{v}'"))?,
            ),
            ("color", Some(v)) => {
                LayerEdit::Color(v.parse::<HexColor>().map_err(|e| e.to_string())?)
            }
            (key, None) => return Err(format!("'{key}' needs a value ({key}=...)")),
            (key, Some(_)) => return Err(format!("unknown layer field '{key}'")),
        };
        edits.push(edit);
    }

    Ok(LayerSpec { edits })
}

pub fn parse_move(spec: &str) -> Result<MoveSpec, String> {
    let (from, to) = spec
        .split_once(':')
        .ok_or_else(|| format!("expected FROM:TO, got '{spec}'"))?;
    let index = |s: &str| {
        s.trim()
            .parse::<usize>()
            .map_err(|_| format!("'{s}' is not a layer index"))
    };
    Ok(MoveSpec {
        from: index(from)?,
        to: index(to)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_layer() {
        let spec = parse_layer("x=2, y=-4,blur=10,spread=1,color=#333333,opacity=0.5,inset").unwrap();
        assert_eq!(
            spec.edits,
            vec![
                LayerEdit::OffsetX(2),
                LayerEdit::OffsetY(-4),
                LayerEdit::Blur(10),
                LayerEdit::Spread(1),
                LayerEdit::Color(HexColor::from_rgb(0x33, 0x33, 0x33)),
                LayerEdit::Opacity(0.5),
                LayerEdit::Inset(true),
            ]
        );
    }

    #[test]
    fn test_parse_empty_layer() {
        assert!(parse_layer("").unwrap().edits.is_empty());
    }

    #[test]
    fn test_parse_layer_errors() {
        assert!(parse_layer("blur=soft").is_err());
        assert!(parse_layer("blur").is_err());
        assert!(parse_layer("glow=3").is_err());
        assert!(parse_layer("inset=maybe").is_err());

        let err = parse_layer("color=#fff").unwrap_err();
        assert!(err.contains("Invalid color format"));
    }

    #[test]
    fn test_parse_move() {
        assert_eq!(parse_move("0:2"), Ok(MoveSpec { from: 0, to: 2 }));
        assert!(parse_move("0-2").is_err());
        assert!(parse_move("-1:0").is_err());
    }
}
