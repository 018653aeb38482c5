//! Argument normalization for the loosely typed entry point.
//!
//! Callers may pass paths, functions, descriptor objects, lists of those, and a trailing options
//! object in one argument list. [`normalize`] splits that into a criteria list and options.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::criterion::{Criterion, Descriptor, Direction};
use crate::path::FieldPath;

/// Options that apply to the whole sort.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SortOptions {
    /// Flips the final composed result once.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,
    /// Values listed here are compared by their position in this list.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub order: Vec<Value>,
}

impl SortOptions {
    pub fn desc() -> Self {
        Self {
            direction: Some(Direction::Desc),
            ..Self::default()
        }
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = Some(direction);
        self
    }

    pub fn with_order<I, V>(mut self, order: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.order = order.into_iter().map(Into::into).collect();
        self
    }

    /// Reads options out of a plain object. Fields of the wrong shape are ignored.
    pub fn from_object(object: &Map<String, Value>) -> Self {
        Self {
            direction: object
                .get("direction")
                .and_then(Value::as_str)
                .map(Direction::parse),
            order: match object.get("order") {
                Some(Value::Array(order)) => order.clone(),
                _ => Vec::new(),
            },
        }
    }

    pub fn to_object(&self) -> Map<String, Value> {
        let mut object = Map::new();
        if let Some(direction) = self.direction {
            object.insert("direction".into(), Value::from(direction.as_str()));
        }
        if !self.order.is_empty() {
            object.insert("order".into(), Value::Array(self.order.clone()));
        }
        object
    }
}

/// One argument of the loosely typed entry point.
#[derive(Debug, Clone)]
pub enum SortArg {
    Criterion(Criterion),
    /// A plain object: a descriptor if it has a `field` key, otherwise options when last.
    Object(Map<String, Value>),
    List(Vec<SortArg>),
}

impl From<Criterion> for SortArg {
    fn from(criterion: Criterion) -> Self {
        SortArg::Criterion(criterion)
    }
}

impl From<Descriptor> for SortArg {
    fn from(descriptor: Descriptor) -> Self {
        SortArg::Criterion(Criterion::Descriptor(descriptor))
    }
}

impl From<&str> for SortArg {
    fn from(path: &str) -> Self {
        SortArg::Criterion(Criterion::path(path))
    }
}

impl From<String> for SortArg {
    fn from(path: String) -> Self {
        SortArg::Criterion(Criterion::path(path))
    }
}

impl From<SortOptions> for SortArg {
    fn from(options: SortOptions) -> Self {
        SortArg::Object(options.to_object())
    }
}

impl From<Map<String, Value>> for SortArg {
    fn from(object: Map<String, Value>) -> Self {
        SortArg::Object(object)
    }
}

impl<T: Into<SortArg>> From<Vec<T>> for SortArg {
    fn from(items: Vec<T>) -> Self {
        SortArg::List(items.into_iter().map(Into::into).collect())
    }
}

impl From<Value> for SortArg {
    fn from(value: Value) -> Self {
        match value {
            Value::String(path) => SortArg::Criterion(Criterion::path(path)),
            Value::Number(n) => SortArg::Criterion(Criterion::path(n.to_string())),
            Value::Object(object) => SortArg::Object(object),
            Value::Array(items) => SortArg::List(items.into_iter().map(SortArg::from).collect()),
            Value::Null | Value::Bool(_) => SortArg::Criterion(Criterion::Natural),
        }
    }
}

/// Splits loose arguments into a criteria list and options.
///
/// Lists are flattened one level. If the last item is then an object without a `field` key it
/// is taken as options. Every other object is read as a descriptor.
pub fn normalize<I>(args: I) -> (Vec<Criterion>, SortOptions)
where
    I: IntoIterator,
    I::Item: Into<SortArg>,
{
    let mut flat = Vec::new();
    for arg in args {
        match arg.into() {
            SortArg::List(items) => flat.extend(items),
            other => flat.push(other),
        }
    }

    let mut options = SortOptions::default();
    if let Some(SortArg::Object(object)) = flat.last() {
        if !object.contains_key("field") {
            options = SortOptions::from_object(object);
            flat.pop();
            tracing::trace!(?options, "trailing object taken as sort options");
        }
    }

    let criteria = flat.into_iter().map(into_criterion).collect();
    (criteria, options)
}

fn into_criterion(arg: SortArg) -> Criterion {
    match arg {
        SortArg::Criterion(criterion) => criterion,
        SortArg::Object(object) => Criterion::Descriptor(descriptor_from_object(&object)),
        // Only reachable for lists nested two levels deep.
        SortArg::List(_) => Criterion::Natural,
    }
}

fn descriptor_from_object(object: &Map<String, Value>) -> Descriptor {
    let field = match object.get("field") {
        Some(Value::String(path)) => FieldPath::new(path.as_str()),
        Some(Value::Number(n)) => FieldPath::new(n.to_string()),
        _ => FieldPath::new(""),
    };
    let direction = object
        .get("direction")
        .and_then(Value::as_str)
        .map(Direction::parse)
        .unwrap_or_default();

    Descriptor { field, direction }
}
