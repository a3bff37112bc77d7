use wasm_bindgen::prelude::*;

use crate::color_utils::assign_color;
use crate::grouping::find_exact_groups;
use crate::preset::{parse_preset, reformat_json};
use crate::settings::AppSettings;

fn to_js_error(e: crate::error::PresetError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    web_sys::console::log_1(&"Segment designer WASM module loaded".into());
}

/// `[r, g, b, a]` for a segment, as a `Uint8Array`.
#[wasm_bindgen(js_name = getColor)]
pub fn get_color(num_segments: i32, segment_index: i32) -> Vec<u8> {
    assign_color(i64::from(num_segments), i64::from(segment_index))
        .to_array()
        .to_vec()
}

/// Groups of identical segments for a truth table given as JSON, returned as a
/// JSON array of index arrays.
#[wasm_bindgen(js_name = findExactGroups)]
pub fn find_exact_groups_json(truth_table_json: &str) -> Result<String, JsValue> {
    let table = parse_preset(truth_table_json).map_err(to_js_error)?;
    let groups: Vec<Vec<usize>> = find_exact_groups(&table)
        .into_iter()
        .map(Vec::from)
        .collect();
    serde_json::to_string(&groups).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Pretty print JSON with simple arrays kept on one line.
#[wasm_bindgen(js_name = stringifyCompactArrays)]
pub fn stringify_compact_arrays(json: &str) -> Result<String, JsValue> {
    reformat_json(json).map_err(to_js_error)
}

/// Settings JSON from localStorage, or the defaults when none are stored.
#[wasm_bindgen(js_name = loadSettings)]
pub fn load_settings() -> Result<String, JsValue> {
    AppSettings::load_from_local_storage()
        .unwrap_or_default()
        .to_json()
        .map_err(to_js_error)
}

#[wasm_bindgen(js_name = saveSettings)]
pub fn save_settings(settings_json: &str) -> Result<(), JsValue> {
    let settings = AppSettings::from_json(settings_json).map_err(to_js_error)?;
    settings.save_to_local_storage().map_err(to_js_error)
}
