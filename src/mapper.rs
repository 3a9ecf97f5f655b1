//! Maps decoded JSON into typed records.

use regex::Regex;
use serde::de::{self, DeserializeOwned, Deserializer};
use serde::Deserialize;
use serde_json::Value;
use serde_path_to_error::Segment;
use tracing::debug;

use crate::error::SchemaValidationError;

lazy_static::lazy_static! {
    static ref MISSING_FIELD: Regex = Regex::new(r"missing field `([^`]+)`").unwrap();
    static ref LAYER_FIELD: Regex = Regex::new(r"(?s)^at `([^`]*)`: (.*)$").unwrap();
}

/// Builds `T` from `value`, failing with the path of the first offending field.
pub fn map_response<T: DeserializeOwned>(value: &Value) -> Result<T, SchemaValidationError> {
    serde_path_to_error::deserialize(value).map_err(|err| {
        let record = record_name::<T>();
        let segments = err.path().iter().collect::<Vec<_>>();
        let mut field = render_path(&segments);
        let mut message = err.inner().to_string();

        let layer = LAYER_FIELD
            .captures(&message)
            .map(|caps| (caps[1].to_string(), caps[2].to_string()));
        if let Some((inner_field, inner_message)) = layer {
            field = join_field(&field, &inner_field);
            message = inner_message;
        }

        let received = match MISSING_FIELD.captures(&message) {
            Some(caps) => {
                field = join_field(&field, &caps[1]);
                "<missing>".to_string()
            }
            None => lookup(value, &field)
                .map(Value::to_string)
                .unwrap_or_else(|| "<unavailable>".to_string()),
        };

        debug!(record, %field, %message, "payload rejected");
        SchemaValidationError::new(record, field, received, message)
    })
}

/// Reads one JSON object as two records: a summary and the fields layered on
/// top of it.
///
/// `#[serde(flatten)]` loses the path of a failing field, so each layer is
/// read separately and a failure is reported as ``at `path`: message``, which
/// [`map_response`] unfolds.
pub(crate) fn deserialize_layered<'de, D, S, R>(deserializer: D) -> Result<(S, R), D::Error>
where
    D: Deserializer<'de>,
    S: DeserializeOwned,
    R: DeserializeOwned,
{
    let payload = Value::deserialize(deserializer)?;
    let summary = read_layer(&payload)?;
    let rest = read_layer(&payload)?;
    Ok((summary, rest))
}

fn read_layer<T: DeserializeOwned, E: de::Error>(payload: &Value) -> Result<T, E> {
    serde_path_to_error::deserialize(payload).map_err(|err| {
        let segments = err.path().iter().collect::<Vec<_>>();
        E::custom(format_args!("at `{}`: {}", render_path(&segments), err.inner()))
    })
}

fn record_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

fn render_path(segments: &[&Segment]) -> String {
    let mut out = String::new();
    for segment in segments {
        match segment {
            Segment::Seq { index } => out.push_str(&format!("[{index}]")),
            Segment::Map { key } => out = join_field(&out, key),
            Segment::Enum { variant } => out = join_field(&out, variant),
            Segment::Unknown => out = join_field(&out, "?"),
        }
    }
    out
}

fn join_field(parent: &str, child: &str) -> String {
    match (parent.is_empty(), child.is_empty()) {
        (_, true) => parent.to_string(),
        (true, false) => child.to_string(),
        (false, false) => concat_str!(parent, ".", child),
    }
}

/// Follows a rendered path such as `items[1].area.url` back into `root`.
fn lookup<'v>(root: &'v Value, field: &str) -> Option<&'v Value> {
    if field.is_empty() {
        return Some(root);
    }
    field.split('.').try_fold(root, |node, part| {
        let (key, indices) = part.split_at(part.find('[').unwrap_or(part.len()));
        let node = if key.is_empty() { node } else { node.get(key)? };
        indices
            .split(']')
            .filter(|index| !index.is_empty())
            .try_fold(node, |node, index| {
                node.get(index.trim_start_matches('[').parse::<usize>().ok()?)
            })
    })
}
