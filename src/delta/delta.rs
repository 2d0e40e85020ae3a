//! The delta document and its operators.

use crate::error::{DeltaError, DeltaResult};
use crate::value::{Map, Value};
use indexmap::{IndexMap, IndexSet};
use serde::de::{self, Deserialize, Deserializer};
use serde::{Serialize, Serializer};
use std::fmt;

/// Operator names one group of a delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Set,
    SetOnInsert,
    Unset,
    Rename,
    Inc,
    Push,
    Pull,
}

impl Operator {
    /// The order groups are replayed in, whatever order the document lists
    /// them in.
    pub const APPLY_ORDER: [Operator; 7] = [
        Operator::Unset,
        Operator::Pull,
        Operator::Push,
        Operator::Rename,
        Operator::SetOnInsert,
        Operator::Set,
        Operator::Inc,
    ];

    /// Recognizes an operator key, with or without the leading `$`.
    pub fn parse(key: &str) -> Option<Operator> {
        match key.strip_prefix('$').unwrap_or(key) {
            "set" => Some(Operator::Set),
            "setOnInsert" => Some(Operator::SetOnInsert),
            "unset" => Some(Operator::Unset),
            "rename" => Some(Operator::Rename),
            "inc" => Some(Operator::Inc),
            "push" => Some(Operator::Push),
            "pull" => Some(Operator::Pull),
            _ => None,
        }
    }

    /// The key this operator is written under in the document form.
    pub fn key(self) -> &'static str {
        match self {
            Operator::Set => "$set",
            Operator::SetOnInsert => "$setOnInsert",
            Operator::Unset => "$unset",
            Operator::Rename => "$rename",
            Operator::Inc => "$inc",
            Operator::Push => "$push",
            Operator::Pull => "$pull",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

const EACH: &str = "$each";

/// Delta describes how to turn one tree into another.
///
/// Every group maps a dot-separated path to its operand. [`create`] only
/// fills `set`, `unset`, `push`, `pull` and `rename`; [`apply`] also honors
/// `set_on_insert` and `inc`.
///
/// [`create`]: super::create
/// [`apply`]: super::apply
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Delta {
    /// Values written unconditionally.
    pub set: IndexMap<String, Value>,
    /// Paths deleted.
    pub unset: IndexSet<String>,
    /// Elements appended to the list at each path.
    pub push: IndexMap<String, Vec<Value>>,
    /// Elements removed, by first equal match, from the list at each path.
    pub pull: IndexMap<String, Vec<Value>>,
    /// Old path to new path.
    pub rename: IndexMap<String, String>,
    /// Values written only where nothing exists yet.
    pub set_on_insert: IndexMap<String, Value>,
    /// Amounts added to the number at each path.
    pub inc: IndexMap<String, Value>,
}

impl Delta {
    pub fn new() -> Self {
        Delta::default()
    }

    /// Returns true when no group has an entry.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of entries across all groups.
    pub fn len(&self) -> usize {
        self.set.len()
            + self.unset.len()
            + self.push.len()
            + self.pull.len()
            + self.rename.len()
            + self.set_on_insert.len()
            + self.inc.len()
    }

    /// Lists every path the delta touches with the operator touching it.
    /// Renames contribute both their source and their target.
    pub fn paths(&self) -> Vec<(Operator, &str)> {
        let mut paths = Vec::with_capacity(self.len());
        paths.extend(self.set.keys().map(|p| (Operator::Set, p.as_str())));
        paths.extend(self.unset.iter().map(|p| (Operator::Unset, p.as_str())));
        paths.extend(self.push.keys().map(|p| (Operator::Push, p.as_str())));
        paths.extend(self.pull.keys().map(|p| (Operator::Pull, p.as_str())));
        for (from, to) in &self.rename {
            paths.push((Operator::Rename, from.as_str()));
            paths.push((Operator::Rename, to.as_str()));
        }
        paths.extend(self.set_on_insert.keys().map(|p| (Operator::SetOnInsert, p.as_str())));
        paths.extend(self.inc.keys().map(|p| (Operator::Inc, p.as_str())));
        paths
    }

    /// Renders the document form, omitting empty groups.
    pub fn to_value(&self) -> Value {
        fn each(items: &[Value]) -> Value {
            let mut operand = Map::new();
            operand.set(EACH, Value::List(items.to_vec()));
            Value::Map(operand)
        }

        let mut doc = Map::new();
        if !self.set.is_empty() {
            doc.set(Operator::Set.key(), Value::Map(self.set.clone().into_iter().collect()));
        }
        if !self.unset.is_empty() {
            let unset = self.unset.iter().map(|p| (p.clone(), Value::Int(1))).collect::<Map>();
            doc.set(Operator::Unset.key(), Value::Map(unset));
        }
        if !self.push.is_empty() {
            let push = self.push.iter().map(|(p, items)| (p.clone(), each(items))).collect::<Map>();
            doc.set(Operator::Push.key(), Value::Map(push));
        }
        if !self.pull.is_empty() {
            let pull = self.pull.iter().map(|(p, items)| (p.clone(), each(items))).collect::<Map>();
            doc.set(Operator::Pull.key(), Value::Map(pull));
        }
        if !self.rename.is_empty() {
            let rename = self
                .rename
                .iter()
                .map(|(from, to)| (from.clone(), Value::String(to.clone())))
                .collect::<Map>();
            doc.set(Operator::Rename.key(), Value::Map(rename));
        }
        if !self.set_on_insert.is_empty() {
            doc.set(
                Operator::SetOnInsert.key(),
                Value::Map(self.set_on_insert.clone().into_iter().collect()),
            );
        }
        if !self.inc.is_empty() {
            doc.set(Operator::Inc.key(), Value::Map(self.inc.clone().into_iter().collect()));
        }
        Value::Map(doc)
    }

    /// Parses the document form.
    ///
    /// Returns `Ok(None)` when the document has a key that is not an
    /// operator: such a document is a replacement value, not a delta.
    pub fn from_value(doc: &Value) -> DeltaResult<Option<Delta>> {
        let doc = doc
            .as_map()
            .ok_or_else(|| DeltaError::invalid_argument("delta", "map", doc.type_name()))?;

        let mut groups = Vec::with_capacity(doc.len());
        for (key, group) in doc.iter() {
            match Operator::parse(key) {
                Some(op) => groups.push((op, group)),
                None => return Ok(None),
            }
        }

        let mut delta = Delta::new();
        for (op, group) in groups {
            let entries = group.as_map().ok_or_else(|| {
                DeltaError::malformed_operand(
                    op.key(),
                    "",
                    format!("operator group must be a map, got {}", group.type_name()),
                )
            })?;
            for (path, operand) in entries.iter() {
                delta.insert_operand(op, path, operand)?;
            }
        }
        Ok(Some(delta))
    }

    fn insert_operand(&mut self, op: Operator, path: &str, operand: &Value) -> DeltaResult<()> {
        match op {
            Operator::Set => {
                self.set.insert(path.to_string(), operand.clone());
            }
            Operator::SetOnInsert => {
                self.set_on_insert.insert(path.to_string(), operand.clone());
            }
            Operator::Unset => {
                self.unset.insert(path.to_string());
            }
            Operator::Push => {
                let items = each_operand(op, path, operand)?;
                self.push.entry(path.to_string()).or_default().extend(items);
            }
            Operator::Pull => {
                let items = each_operand(op, path, operand)?;
                self.pull.entry(path.to_string()).or_default().extend(items);
            }
            Operator::Rename => {
                let to = operand.as_str().ok_or_else(|| {
                    DeltaError::malformed_operand(
                        op.key(),
                        path,
                        format!("target must be a string, got {}", operand.type_name()),
                    )
                })?;
                self.rename.insert(path.to_string(), to.to_string());
            }
            Operator::Inc => {
                if !operand.is_number() {
                    return Err(DeltaError::malformed_operand(
                        op.key(),
                        path,
                        format!("amount must be a number, got {}", operand.type_name()),
                    ));
                }
                self.inc.insert(path.to_string(), operand.clone());
            }
        }
        Ok(())
    }
}

/// Reads a push/pull operand. `{"$each": [...]}` (or `{"each": [...]}`)
/// lists several elements; anything else is a single element.
fn each_operand(op: Operator, path: &str, operand: &Value) -> DeltaResult<Vec<Value>> {
    let each = operand
        .as_map()
        .filter(|m| m.len() == 1)
        .and_then(|m| m.get(EACH).or_else(|| m.get("each")));
    match each {
        Some(Value::List(items)) => Ok(items.clone()),
        Some(other) => Err(DeltaError::malformed_operand(
            op.key(),
            path,
            format!("$each must be a list, got {}", other.type_name()),
        )),
        None => Ok(vec![operand.clone()]),
    }
}

impl Serialize for Delta {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Delta {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let doc = Value::deserialize(deserializer)?;
        Delta::from_value(&doc)
            .map_err(<D::Error as de::Error>::custom)?
            .ok_or_else(|| {
                <D::Error as de::Error>::custom("document has keys that are not delta operators")
            })
    }
}
