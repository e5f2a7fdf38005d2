//! Asset document parsing and element selection.
//!
//! Asset definitions ship as YAML documents. A document is a tree of
//! mappings, and every mapping entry whose key names an element kind
//! (`Object`, `Ground`, `EquipmentSet`) declares a single element (mapping
//! value) or a batch of them (sequence value). Elements may appear at any
//! depth, including inside other elements.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};
use thiserror::Error;

use crate::literal::{self, LiteralError};

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// The element kinds a document can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Object,
    Ground,
    EquipmentSet,
}

impl ElementKind {
    /// The mapping key that declares an element of this kind.
    pub fn key(self) -> &'static str {
        match self {
            ElementKind::Object => "Object",
            ElementKind::Ground => "Ground",
            ElementKind::EquipmentSet => "EquipmentSet",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// One asset element: a single mapping pulled out of a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Element(Mapping);

impl Element {
    pub fn from_mapping(mapping: Mapping) -> Self {
        Element(mapping)
    }

    /// Parse a standalone element from YAML text.
    pub fn from_yaml(text: &str) -> Result<Self, DocumentError> {
        Ok(Element(serde_yaml::from_str(text)?))
    }

    pub fn has(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Raw field access.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Insert or replace a field.
    pub fn set(&mut self, key: &str, value: Value) {
        self.0.insert(Value::String(key.to_string()), value);
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(|v| v.as_str())
    }

    /// Read a field as a 16-bit identifier.
    ///
    /// Accepts YAML integers and string literals in either decimal or
    /// `0x` hex form. Wide values wrap to the low 16 bits.
    pub fn get_u16(&self, key: &str) -> Result<Option<u16>, LiteralError> {
        match self.get(key) {
            None => Ok(None),
            Some(Value::Number(n)) => match n.as_i64() {
                Some(v) => Ok(Some(v as u16)),
                None => Err(LiteralError::Invalid(n.to_string())),
            },
            Some(Value::String(s)) => literal::parse_u16(s).map(Some),
            Some(other) => Err(LiteralError::Invalid(value_repr(other))),
        }
    }

    pub fn get_i64(&self, key: &str) -> Result<Option<i64>, LiteralError> {
        match self.get(key) {
            None => Ok(None),
            Some(Value::Number(n)) => match n.as_i64() {
                Some(v) => Ok(Some(v)),
                None => Err(LiteralError::Invalid(n.to_string())),
            },
            Some(Value::String(s)) => literal::parse_i64(s).map(Some),
            Some(other) => Err(LiteralError::Invalid(value_repr(other))),
        }
    }

    pub fn get_f64(&self, key: &str) -> Result<Option<f64>, LiteralError> {
        match self.get(key) {
            None => Ok(None),
            Some(Value::Number(n)) => Ok(n.as_f64()),
            Some(Value::String(s)) => s
                .trim()
                .parse::<f64>()
                .map(Some)
                .map_err(|_| LiteralError::Invalid(s.to_string())),
            Some(other) => Err(LiteralError::Invalid(value_repr(other))),
        }
    }

    /// Presence marker: the field exists and is not explicitly `false`.
    ///
    /// Markers like `NoWalk: ~` carry meaning by being there at all.
    pub fn get_flag(&self, key: &str) -> bool {
        match self.get(key) {
            Some(Value::Bool(b)) => *b,
            Some(_) => true,
            None => false,
        }
    }

    /// Strict boolean: only `true`/`false` (any case, surrounding
    /// whitespace ignored) or a YAML bool count. Anything else is `None`.
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        match self.get(key) {
            Some(Value::Bool(b)) => Some(*b),
            Some(Value::String(s)) => {
                let s = s.trim();
                if s.eq_ignore_ascii_case("true") {
                    Some(true)
                } else if s.eq_ignore_ascii_case("false") {
                    Some(false)
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    /// Read a field as a list of strings. A lone string reads as a
    /// one-element list.
    pub fn get_str_list(&self, key: &str) -> Vec<String> {
        match self.get(key) {
            Some(Value::Sequence(seq)) => seq
                .iter()
                .filter_map(|v| v.as_str())
                .map(str::to_string)
                .collect(),
            Some(Value::String(s)) => vec![s.clone()],
            _ => Vec::new(),
        }
    }
}

fn value_repr(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "~".to_string(),
        _ => "<non-scalar>".to_string(),
    }
}

/// A parsed asset document with its source path, if it came from disk.
#[derive(Debug, Clone)]
pub struct Document {
    root: Value,
    source: Option<PathBuf>,
}

impl Document {
    /// Parse a document from YAML text.
    pub fn from_yaml(text: &str) -> Result<Self, DocumentError> {
        let root = serde_yaml::from_str(text)?;
        Ok(Document { root, source: None })
    }

    /// Read and parse a document from disk.
    pub fn from_file(path: &Path) -> Result<Self, DocumentError> {
        let text = std::fs::read_to_string(path).map_err(|source| DocumentError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let root = serde_yaml::from_str(&text).map_err(|source| DocumentError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Document {
            root,
            source: Some(path.to_path_buf()),
        })
    }

    /// The file this document was read from, if any.
    pub fn path(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Collect every element of the given kind, in document order.
    ///
    /// An element declared inside another element is still found, after
    /// its parent.
    pub fn select(&self, kind: ElementKind) -> Vec<Element> {
        let mut found = Vec::new();
        collect_elements(&self.root, kind.key(), &mut found);
        found
    }
}

fn collect_elements(value: &Value, key: &str, found: &mut Vec<Element>) {
    match value {
        Value::Mapping(map) => {
            for (k, v) in map {
                if k.as_str() == Some(key) {
                    match v {
                        Value::Mapping(elem) => found.push(Element::from_mapping(elem.clone())),
                        Value::Sequence(seq) => {
                            for item in seq {
                                if let Value::Mapping(elem) = item {
                                    found.push(Element::from_mapping(elem.clone()));
                                }
                            }
                        }
                        _ => {}
                    }
                }
                collect_elements(v, key, found);
            }
        }
        Value::Sequence(seq) => {
            for v in seq {
                collect_elements(v, key, found);
            }
        }
        _ => {}
    }
}
