//! Structured fragment discovery.
//!
//! Every JSON-LD block on the page yields one or more raw fragments. Top
//! level arrays and `@graph` containers are split into their nodes so each
//! fragment describes a single entity.

use serde_json::{Map, Value as Json};
use tracing::debug;

use super::document::Document;
use crate::error::FragmentResult;
use crate::types::record::CONTEXT_KEY;

const GRAPH_KEY: &str = "@graph";

/// Parse every embedded JSON-LD block into raw fragments.
///
/// A block that is not valid JSON fails the whole discovery; empty blocks
/// are ignored.
pub fn find_fragments(doc: &Document) -> FragmentResult<Vec<Json>> {
    let mut fragments = Vec::new();

    for block in doc.json_ld_blocks() {
        let block = block.trim();
        if block.is_empty() {
            continue;
        }
        let parsed: Json = serde_json::from_str(block)?;
        split_fragment(parsed, None, &mut fragments);
    }

    debug!(fragments = fragments.len(), "Discovered JSON-LD fragments");
    Ok(fragments)
}

fn split_fragment(value: Json, inherited_context: Option<&Json>, out: &mut Vec<Json>) {
    match value {
        Json::Array(items) => {
            for item in items {
                split_fragment(item, inherited_context, out);
            }
        }
        Json::Object(mut object) if object.contains_key(GRAPH_KEY) => {
            let context = object
                .remove(CONTEXT_KEY)
                .or_else(|| inherited_context.cloned());
            if let Some(graph) = object.remove(GRAPH_KEY) {
                split_fragment(graph, context.as_ref(), out);
            }
            if !object.is_empty() {
                out.push(with_context(object, context.as_ref()));
            }
        }
        Json::Object(object) => out.push(with_context(object, inherited_context)),
        other => out.push(other),
    }
}

/// Put an inherited context first, unless the node declares its own.
fn with_context(object: Map<String, Json>, context: Option<&Json>) -> Json {
    match context {
        Some(context) if !object.contains_key(CONTEXT_KEY) => {
            let mut node = Map::with_capacity(object.len() + 1);
            node.insert(CONTEXT_KEY.to_string(), context.clone());
            node.extend(object);
            Json::Object(node)
        }
        _ => Json::Object(object),
    }
}
