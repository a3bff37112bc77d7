//! Preset and settings files.
//!
//! Presets are flat JSON objects mapping glyph labels to activation arrays.
//! Files are written pretty printed, except that simple arrays (all integers
//! or all plain strings) stay on one line so a truth table reads as a grid:
//!
//! ```text
//! {
//!   "0": [ 1, 1, 1, 1, 1, 1, 0 ],
//!   "1": [ 0, 1, 1, 0, 0, 0, 0 ]
//! }
//! ```

use std::path::Path;

use serde::Serialize;
use serde_json::{Number, Value};

use crate::error::PresetError;
use crate::settings::AppSettings;
use crate::truth_table::TruthTable;

const INDENT: &str = "  ";

/// Largest magnitude at which every integer is exactly representable as `f64`.
const MAX_EXACT_FLOAT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Serialize `value` as pretty JSON with simple arrays collapsed onto one line.
pub fn to_compact_json<T: Serialize + ?Sized>(value: &T) -> Result<String, PresetError> {
    let value = serde_json::to_value(value)?;
    let mut out = String::new();
    write_value(&mut out, &value, 0)?;
    Ok(out)
}

/// Re-format an arbitrary JSON document with compact arrays.
pub fn reformat_json(json: &str) -> Result<String, PresetError> {
    let value: Value = serde_json::from_str(json)?;
    to_compact_json(&value)
}

fn write_value(out: &mut String, value: &Value, depth: usize) -> Result<(), PresetError> {
    match value {
        Value::Array(items) if items.is_empty() => out.push_str("[]"),
        Value::Array(items) if is_simple_array(items) => {
            out.push_str("[ ");
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_scalar(out, item)?;
            }
            out.push_str(" ]");
        }
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                out.push_str(if i > 0 { ",\n" } else { "\n" });
                push_indent(out, depth + 1);
                write_value(out, item, depth + 1)?;
            }
            out.push('\n');
            push_indent(out, depth);
            out.push(']');
        }
        Value::Object(map) if map.is_empty() => out.push_str("{}"),
        Value::Object(map) => {
            out.push('{');
            for (i, (key, item)) in map.iter().enumerate() {
                out.push_str(if i > 0 { ",\n" } else { "\n" });
                push_indent(out, depth + 1);
                out.push_str(&serde_json::to_string(key)?);
                out.push_str(": ");
                write_value(out, item, depth + 1)?;
            }
            out.push('\n');
            push_indent(out, depth);
            out.push('}');
        }
        scalar => write_scalar(out, scalar)?,
    }
    Ok(())
}

/// Whole-number floats are written without a fraction (`32`, not `32.0`).
fn write_scalar(out: &mut String, value: &Value) -> Result<(), PresetError> {
    match value {
        Value::Number(n) => match integral_value(n) {
            Some(i) => out.push_str(&i.to_string()),
            None => out.push_str(&n.to_string()),
        },
        other => out.push_str(&serde_json::to_string(other)?),
    }
    Ok(())
}

fn integral_value(n: &Number) -> Option<i128> {
    if let Some(i) = n.as_i64() {
        return Some(i128::from(i));
    }
    if let Some(u) = n.as_u64() {
        return Some(i128::from(u));
    }
    let f = n.as_f64()?;
    (f.fract() == 0.0 && f.abs() <= MAX_EXACT_FLOAT_INTEGER).then_some(f as i128)
}

fn push_indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
}

/// All integers, or all non-empty strings without quote characters.
fn is_simple_array(items: &[Value]) -> bool {
    let all_integers = items
        .iter()
        .all(|v| matches!(v, Value::Number(n) if integral_value(n).is_some()));
    let all_plain_strings = items
        .iter()
        .all(|v| matches!(v, Value::String(s) if !s.is_empty() && !s.contains('"')));
    all_integers || all_plain_strings
}

/// Parse a truth-table preset from JSON.
pub fn parse_preset(json: &str) -> Result<TruthTable, PresetError> {
    let value: Value = serde_json::from_str(json)?;
    if !value.is_object() {
        return Err(PresetError::invalid_preset(
            "expected an object mapping labels to arrays",
        ));
    }
    Ok(serde_json::from_value(value)?)
}

/// Load a truth-table preset file.
pub fn load_preset(path: &Path) -> Result<TruthTable, PresetError> {
    log::info!("Loading preset from {:?}", path);
    let json = read_existing(path)?;
    let table = parse_preset(&json)?;
    log::info!(
        "Loaded {} label(s) over {} segment(s)",
        table.len(),
        table.segment_count()
    );
    Ok(table)
}

/// Write a truth-table preset file.
pub fn save_preset(table: &TruthTable, path: &Path) -> Result<(), PresetError> {
    let json = to_compact_json(table)?;
    write_creating_dirs(path, &json)?;
    log::info!("Saved preset with {} label(s) to {:?}", table.len(), path);
    Ok(())
}

/// Load an [`AppSettings`] file.
pub fn load_settings(path: &Path) -> Result<AppSettings, PresetError> {
    let json = read_existing(path)?;
    let settings = AppSettings::from_json(&json)?;
    log::info!("Loaded settings from {:?}", path);
    Ok(settings)
}

/// Write an [`AppSettings`] file, creating parent directories if needed.
pub fn save_settings(settings: &AppSettings, path: &Path) -> Result<(), PresetError> {
    let json = settings.to_json()?;
    write_creating_dirs(path, &json)?;
    log::info!("Saved settings to {:?}", path);
    Ok(())
}

fn read_existing(path: &Path) -> Result<String, PresetError> {
    if !path.exists() {
        return Err(PresetError::NotFound {
            path: path.to_path_buf(),
        });
    }
    Ok(std::fs::read_to_string(path)?)
}

fn write_creating_dirs(path: &Path, contents: &str) -> Result<(), PresetError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, contents)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "segment-designer-{}-{}",
            name,
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_truth_table_layout() {
        let table = TruthTable::new()
            .with_row("0", vec![1, 1, 0])
            .with_row("1", vec![0, 1, 1]);
        let json = to_compact_json(&table).unwrap();
        assert_eq!(json, "{\n  \"0\": [ 1, 1, 0 ],\n  \"1\": [ 0, 1, 1 ]\n}");
    }

    #[test]
    fn test_nested_and_mixed_arrays() {
        let json = reformat_json(
            r#"{"grid":[[1,-2],[3]],"names":["a","b c"],"mixed":[1,"x"],"floats":[0.5],"none":[],"obj":{}}"#,
        )
        .unwrap();
        let expected = "{\n  \"grid\": [\n    [ 1, -2 ],\n    [ 3 ]\n  ],\n  \"names\": [ \"a\", \"b c\" ],\n  \"mixed\": [\n    1,\n    \"x\"\n  ],\n  \"floats\": [\n    0.5\n  ],\n  \"none\": [],\n  \"obj\": {}\n}";
        assert_eq!(json, expected);
    }

    #[test]
    fn test_strings_with_quotes_not_collapsed() {
        let json = reformat_json(r#"["say \"hi\""]"#).unwrap();
        assert_eq!(json, "[\n  \"say \\\"hi\\\"\"\n]");
        let json = reformat_json(r#"["", "a"]"#).unwrap();
        assert_eq!(json, "[\n  \"\",\n  \"a\"\n]");
    }

    #[test]
    fn test_whole_number_floats_written_as_integers() {
        let json = to_compact_json(&serde_json::json!({
            "width": 32.0,
            "height": 8.5,
            "zero": -0.0,
            "steps": [1.0, 2.0, 3.0],
            "ratios": [1.0, 0.25]
        }))
        .unwrap();
        let expected = "{\n  \"width\": 32,\n  \"height\": 8.5,\n  \"zero\": 0,\n  \"steps\": [ 1, 2, 3 ],\n  \"ratios\": [\n    1,\n    0.25\n  ]\n}";
        assert_eq!(json, expected);
    }

    #[test]
    fn test_scalars() {
        assert_eq!(reformat_json("true").unwrap(), "true");
        assert_eq!(reformat_json("\"x\"").unwrap(), "\"x\"");
        assert!(reformat_json("{").is_err());
    }

    #[test]
    fn test_parse_preset_rejects_non_object() {
        let err = parse_preset("[[0, 1]]").unwrap_err();
        assert!(matches!(err, PresetError::InvalidPreset { .. }));
        assert!(matches!(
            parse_preset(r#"{ "A": [true] }"#).unwrap_err(),
            PresetError::Json(_)
        ));
    }

    #[test]
    fn test_preset_file_roundtrip() {
        let dir = scratch_dir("preset");
        let path = dir.join("nested").join("digits.json");
        let table = TruthTable::new()
            .with_row("b", vec![1, 0, 2])
            .with_row("a", vec![0, 0, -1]);

        save_preset(&table, &path).unwrap();
        let loaded = load_preset(&path).unwrap();
        assert_eq!(loaded, table);
        assert_eq!(loaded.labels().collect::<Vec<_>>(), vec!["b", "a"]);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_settings_file_roundtrip() {
        let dir = scratch_dir("settings");
        let path = dir.join("settings.json");
        let settings = AppSettings {
            num_segments: 2,
            truth_table: TruthTable::new().with_row("x", vec![1, 1]),
            ..AppSettings::default()
        };

        save_settings(&settings, &path).unwrap();
        assert_eq!(load_settings(&path).unwrap(), settings);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_missing_file() {
        let path = scratch_dir("missing").join("nope.json");
        assert!(matches!(
            load_preset(&path).unwrap_err(),
            PresetError::NotFound { .. }
        ));
    }
}
