//! Data models for collected results and their display classification.
//!
//! This module defines the core data structures used throughout the crate:
//! - [`ResultTree`]: Ordered mapping of section name to collected data
//! - [`Shape`]: Runtime classification that picks a render branch
//! - [`SectionStatus`]: Display-only "Collected"/"Missing" judgment
//!
//! The result tree is produced by the upstream collection tasks. Nothing in
//! this crate mutates it; both writers only borrow it.

use crate::error::{ReportError, Result};
use serde_json::{Map, Value};
use std::path::Path;
use tracing::{debug, instrument};

/// The ordered mapping of section name to arbitrarily-shaped collected data.
///
/// `serde_json` is built with `preserve_order`, so iteration follows
/// insertion order. The navigation, summary and body passes all rely on it.
pub type ResultTree = Map<String, Value>;

/// The render branch a value falls into.
///
/// Variants are listed in dispatch priority order: a sequence of mappings
/// is a [`Shape::RecordList`] before it is a [`Shape::GenericList`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape<'a> {
    /// A key/value mapping, rendered as a recursive two-column table.
    Mapping(&'a Map<String, Value>),
    /// A sequence whose every element is a mapping, rendered as flat cards.
    RecordList(&'a [Value]),
    /// Any other sequence, rendered as a flat unordered list.
    GenericList(&'a [Value]),
    /// `null`.
    Absent,
    /// Strings, numbers and booleans.
    Scalar(&'a Value),
}

impl<'a> Shape<'a> {
    /// Classify a value.
    ///
    /// An empty sequence satisfies "every element is a mapping" and is
    /// therefore a record list with no cards.
    pub fn of(value: &'a Value) -> Self {
        match value {
            Value::Object(map) => Shape::Mapping(map),
            Value::Array(items) if items.iter().all(Value::is_object) => Shape::RecordList(items),
            Value::Array(items) => Shape::GenericList(items),
            Value::Null => Shape::Absent,
            other => Shape::Scalar(other),
        }
    }
}

/// Whether a section produced any data, for display in the summary table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionStatus {
    Collected,
    Missing,
}

impl SectionStatus {
    /// Derive the status of a section body using generic truthiness.
    ///
    /// - `null` and `false` are missing
    /// - numbers are missing when zero
    /// - strings, sequences and mappings are missing when empty
    pub fn of(body: &Value) -> Self {
        let truthy = match body {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
            Value::String(s) => !s.is_empty(),
            Value::Array(items) => !items.is_empty(),
            Value::Object(map) => !map.is_empty(),
        };
        if truthy {
            SectionStatus::Collected
        } else {
            SectionStatus::Missing
        }
    }

    /// Human-readable badge text.
    pub fn label(self) -> &'static str {
        match self {
            SectionStatus::Collected => "Collected",
            SectionStatus::Missing => "Missing",
        }
    }

    /// Badge icon shown before the label.
    pub fn icon(self) -> &'static str {
        match self {
            SectionStatus::Collected => "✔️",
            SectionStatus::Missing => "⚠️",
        }
    }

    /// CSS class distinguishing the two badges.
    pub fn badge_class(self) -> &'static str {
        match self {
            SectionStatus::Collected => "success",
            SectionStatus::Missing => "fail",
        }
    }
}

/// Load a result tree from a JSON file written by the collection pipeline.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid JSON, or its
/// top level is not an object.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub fn load_result_tree(path: &Path) -> Result<ResultTree> {
    let raw = std::fs::read_to_string(path)?;
    match serde_json::from_str::<Value>(&raw)? {
        Value::Object(tree) => {
            debug!(sections = tree.len(), "Loaded result tree");
            Ok(tree)
        }
        other => Err(ReportError::Shape(format!(
            "expected an object at the top level, found {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
