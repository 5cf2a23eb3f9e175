use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::domain::{
    analysis::entities::BoundingBox, common::entities::app_errors::CoreError,
};

/// Opening or closing fence markers, with the language tag in any casing.
static CODE_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)```(?:json)?").expect("static fence pattern"));

/// Intermediate shape of one model-reported food, before classification.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedFood {
    pub name: String,
    pub purine_value: f64,
    pub level: Option<String>,
    pub bbox: Option<BoundingBox>,
    pub description: String,
}

/// Strips Markdown code-fence markers and surrounding whitespace.
pub fn strip_code_fences(raw: &str) -> String {
    CODE_FENCE.replace_all(raw, "").trim().to_string()
}

/// Parses the raw model reply into food entries, in detection order.
///
/// The reply is opaque and cannot be repaired: a non-JSON body or a missing
/// `foods` array fails the whole call. Individual entries are handled
/// leniently so one bad entry does not discard an otherwise usable list.
pub fn parse_model_reply(raw: &str) -> Result<Vec<ParsedFood>, CoreError> {
    let cleaned = strip_code_fences(raw);

    let reply: Value = serde_json::from_str(&cleaned)
        .map_err(|e| CoreError::MalformedResponse(format!("reply is not valid JSON: {e}")))?;

    let foods = reply
        .get("foods")
        .and_then(Value::as_array)
        .ok_or_else(|| CoreError::MalformedResponse("reply has no foods array".to_string()))?;

    Ok(foods.iter().filter_map(parse_entry).collect())
}

/// Returns `None` to drop an entry whose purine value is unusable.
fn parse_entry(entry: &Value) -> Option<ParsedFood> {
    let purine_value = entry.get("purine_value").and_then(parse_purine_value)?;

    let name = text_or_empty(entry.get("name"));
    let description = text_or_empty(entry.get("description"));
    let level = entry
        .get("level")
        .and_then(Value::as_str)
        .map(str::to_string);
    let bbox = parse_bbox(entry.get("bbox"));

    Some(ParsedFood {
        name,
        purine_value,
        level,
        bbox,
        description,
    })
}

fn parse_purine_value(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }?;

    if parsed >= 0.0 {
        Some(parsed)
    } else {
        tracing::debug!(purine_value = parsed, "dropping entry with negative purine value");
        None
    }
}

fn text_or_empty(value: Option<&Value>) -> String {
    value
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Anything other than exactly four numbers is treated as an absent box.
fn parse_bbox(value: Option<&Value>) -> Option<BoundingBox> {
    let coords = value?.as_array()?;
    if coords.len() != 4 {
        return None;
    }

    let mut bbox = [0.0; 4];
    for (slot, coord) in bbox.iter_mut().zip(coords) {
        *slot = coord.as_f64()?;
    }

    Some(BoundingBox(bbox))
}
