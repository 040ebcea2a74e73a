//! JSON exchange format: an ordered array of block objects.

use crate::block::Block;
use crate::error::{ModelError, ModelResult};
use crate::visitor::{collect_ids, find_duplicate_id};
use serde_json::Value;

/// Decode a JSON array of blocks
///
/// Fails with [`ModelError::InvalidFormat`] unless the payload is an array
/// whose every element is a well-formed block with a non-empty id, and ids
/// are unique across the whole tree.
pub fn parse_blocks(json: &str) -> ModelResult<Vec<Block>> {
    let value: Value = serde_json::from_str(json)
        .map_err(|e| ModelError::InvalidFormat(format!("not valid JSON: {}", e)))?;

    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(ModelError::InvalidFormat(format!(
                "expected an array of blocks, found {}",
                describe(&other)
            )))
        }
    };

    let blocks = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value::<Block>(item)
                .map_err(|e| ModelError::InvalidFormat(format!("block {}: {}", index, e)))
        })
        .collect::<ModelResult<Vec<_>>>()?;

    if collect_ids(&blocks).iter().any(|id| id.is_empty()) {
        return Err(ModelError::InvalidFormat("block is missing an id".to_string()));
    }
    if let Some(id) = find_duplicate_id(&blocks) {
        return Err(ModelError::InvalidFormat(format!("duplicate block id: {}", id)));
    }

    Ok(blocks)
}

/// Encode blocks as pretty-printed JSON (two-space indent)
pub fn blocks_to_json(blocks: &[Block]) -> ModelResult<String> {
    Ok(serde_json::to_string_pretty(blocks)?)
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
