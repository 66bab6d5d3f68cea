use std::path::Path;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{ReaderError, Result};

/// Value substituted for a missing string field.
pub const MISSING_STRING: &str = "";
/// Value substituted for a missing integer field.
pub const MISSING_INT: i64 = -1;
/// Value substituted for a missing floating point field.
pub const MISSING_FLOAT: f64 = -1.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub source: i64,
    pub target: i64,
    pub cost: f64,
}

impl EdgeRecord {
    pub fn new(source: i64, target: i64, cost: f64) -> Self {
        Self {
            source,
            target,
            cost,
        }
    }
}

/// Primitive records of a graph, in input order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphPayload {
    pub nodes: Vec<NodeRecord>,
    pub edges: Vec<EdgeRecord>,
}

impl GraphPayload {
    pub fn new(nodes: Vec<NodeRecord>, edges: Vec<EdgeRecord>) -> Self {
        Self { nodes, edges }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    /// Writes `nodes.csv` (`id,label`) and `edges.csv` (`source,target,cost`)
    /// into `dir`.
    pub fn write_csv(&self, dir: &Path) -> anyhow::Result<()> {
        let mut wtr = csv::Writer::from_path(dir.join("nodes.csv"))?;
        wtr.write_record(["id", "label"])?;

        debug!("BEGIN writing {} node records", self.nodes.len());
        for (id, NodeRecord { label }) in self.nodes.iter().enumerate() {
            wtr.write_record([id.to_string(), label.clone()])?;
        }
        wtr.flush()?;

        let mut wtr = csv::Writer::from_path(dir.join("edges.csv"))?;
        wtr.write_record(["source", "target", "cost"])?;

        debug!("BEGIN writing {} edge records", self.edges.len());
        for EdgeRecord {
            source,
            target,
            cost,
        } in self.edges.iter()
        {
            wtr.write_record([source.to_string(), target.to_string(), cost.to_string()])?;
        }
        wtr.flush()?;
        debug!("FINISHED writing csv files");

        Ok(())
    }
}

/// Parses the payload text into primitive records.
///
/// The text must be a JSON object. Scalar fields that are missing or carry the
/// wrong type resolve to [`MISSING_STRING`], [`MISSING_INT`] and
/// [`MISSING_FLOAT`] instead of failing the whole parse; a missing `nodes` or
/// `edges` array resolves to an empty list.
pub fn parse_graph_payload(text: &str) -> Result<GraphPayload> {
    let root: Value = serde_json::from_str(text)?;
    let root = root.as_object().ok_or_else(|| ReaderError::NotAnObject {
        found: json_type(&root),
    })?;

    let nodes = retrieve_array(root, "nodes")
        .iter()
        .map(|obj| NodeRecord {
            label: retrieve_string(obj, "label"),
        })
        .collect::<Vec<_>>();

    let edges = retrieve_array(root, "edges")
        .iter()
        .map(|obj| EdgeRecord {
            source: retrieve_int(obj, "source"),
            target: retrieve_int(obj, "target"),
            cost: retrieve_float(obj, "cost"),
        })
        .collect::<Vec<_>>();

    info!(
        "Parsed payload with {} nodes and {} edges",
        nodes.len(),
        edges.len()
    );
    Ok(GraphPayload { nodes, edges })
}

type Object = Map<String, Value>;

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// Entries that are not JSON objects are kept as `None` so that every field
// lookup on them falls back to its sentinel.
fn retrieve_array<'a>(obj: &'a Object, key: &str) -> Vec<Option<&'a Object>> {
    match obj.get(key).and_then(Value::as_array) {
        Some(array) => array
            .iter()
            .enumerate()
            .map(|(i, value)| {
                let entry = value.as_object();
                if entry.is_none() {
                    warn!("[{}] entry {} is not an object", key, i);
                }
                entry
            })
            .collect(),
        None => {
            warn!("Array with name [{}] not found", key);
            Vec::new()
        }
    }
}

fn field<'a>(obj: &Option<&'a Object>, key: &str) -> Option<&'a Value> {
    let value = obj.and_then(|o| o.get(key));
    if value.is_none() {
        warn!("[{}] not found in object", key);
    }
    value
}

fn retrieve_string(obj: &Option<&Object>, key: &str) -> String {
    field(obj, key)
        .and_then(Value::as_str)
        .unwrap_or(MISSING_STRING)
        .to_string()
}

fn retrieve_int(obj: &Option<&Object>, key: &str) -> i64 {
    field(obj, key)
        .and_then(|v| {
            v.as_i64()
                .or_else(|| v.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64))
        })
        .unwrap_or(MISSING_INT)
}

fn retrieve_float(obj: &Option<&Object>, key: &str) -> f64 {
    field(obj, key)
        .and_then(Value::as_f64)
        .unwrap_or(MISSING_FLOAT)
}
