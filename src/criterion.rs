//! Single sort criteria and how one of them compares two values.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::path::FieldPath;
use crate::rank::RankMap;
use crate::value;

/// The fallback handed to custom comparison functions: the default value ordering.
pub type Fallback<'a> = &'a dyn Fn(&Value, &Value) -> Ordering;

/// A user supplied comparison. Its result is used as is.
pub type CompareFn = Arc<dyn Fn(&Value, &Value, Fallback<'_>) -> Ordering + Send + Sync>;

/// Sort direction. Anything other than `"desc"` reads as ascending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl Direction {
    pub fn parse(s: &str) -> Self {
        if s == "desc" {
            Direction::Desc
        } else {
            Direction::Asc
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Asc => "asc",
            Direction::Desc => "desc",
        }
    }

    /// Applies this direction to an ascending result.
    #[inline]
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Direction::Asc => ordering,
            Direction::Desc => ordering.reverse(),
        }
    }
}

impl From<String> for Direction {
    fn from(s: String) -> Self {
        Direction::parse(&s)
    }
}

impl From<Direction> for &'static str {
    fn from(direction: Direction) -> Self {
        direction.as_str()
    }
}

/// A path with its own direction, independent of the global one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Descriptor {
    pub field: FieldPath,
    pub direction: Direction,
}

impl Descriptor {
    pub fn new(field: impl Into<FieldPath>, direction: Direction) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }

    pub fn asc(field: impl Into<FieldPath>) -> Self {
        Self::new(field, Direction::Asc)
    }

    pub fn desc(field: impl Into<FieldPath>) -> Self {
        Self::new(field, Direction::Desc)
    }
}

/// One ordering rule. Earlier criteria in a list dominate later ones.
#[derive(Clone)]
pub enum Criterion {
    /// Compare the values found at a path.
    Path(FieldPath),
    /// Delegate to a custom function.
    Function(CompareFn),
    /// A path with a local direction.
    Descriptor(Descriptor),
    /// Compare the values themselves.
    Natural,
}

impl Criterion {
    pub fn path(path: impl Into<FieldPath>) -> Self {
        Criterion::Path(path.into())
    }

    pub fn function<F>(f: F) -> Self
    where
        F: Fn(&Value, &Value, Fallback<'_>) -> Ordering + Send + Sync + 'static,
    {
        Criterion::Function(Arc::new(f))
    }

    pub fn asc(field: impl Into<FieldPath>) -> Self {
        Criterion::Descriptor(Descriptor::asc(field))
    }

    pub fn desc(field: impl Into<FieldPath>) -> Self {
        Criterion::Descriptor(Descriptor::desc(field))
    }
}

impl fmt::Debug for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Criterion::Path(path) => f.debug_tuple("Path").field(path).finish(),
            Criterion::Function(func) => f
                .debug_tuple("Function")
                .field(&std::any::type_name_of_val(&**func))
                .finish(),
            Criterion::Descriptor(descriptor) => {
                f.debug_tuple("Descriptor").field(descriptor).finish()
            }
            Criterion::Natural => f.write_str("Natural"),
        }
    }
}

impl From<FieldPath> for Criterion {
    fn from(path: FieldPath) -> Self {
        Criterion::Path(path)
    }
}

impl From<Descriptor> for Criterion {
    fn from(descriptor: Descriptor) -> Self {
        Criterion::Descriptor(descriptor)
    }
}

impl From<&str> for Criterion {
    fn from(path: &str) -> Self {
        Criterion::path(path)
    }
}

impl From<String> for Criterion {
    fn from(path: String) -> Self {
        Criterion::path(path)
    }
}

/// Compares two records under one criterion.
#[inline]
pub fn resolve(criterion: &Criterion, a: &Value, b: &Value, ranks: &RankMap) -> Ordering {
    match criterion {
        Criterion::Function(f) => (**f)(a, b, &value::compare_defined),
        Criterion::Descriptor(descriptor) => descriptor
            .direction
            .apply(resolve_path(&descriptor.field, a, b, ranks)),
        Criterion::Path(path) => resolve_path(path, a, b, ranks),
        Criterion::Natural => compare_values(Some(a), Some(b), ranks),
    }
}

fn resolve_path(path: &FieldPath, a: &Value, b: &Value, ranks: &RankMap) -> Ordering {
    // The raw records are checked against the rank map before any field is looked at.
    if let Some(ordering) = compare_ranked(Some(a), Some(b), ranks) {
        return ordering;
    }

    if !path.is_empty() && is_container(a) && is_container(b) {
        return compare_values(path.resolve(a), path.resolve(b), ranks);
    }

    value::compare(Some(a), Some(b))
}

/// Natural comparison of two possibly missing values, honoring the rank map.
#[inline]
pub fn compare_values(a: Option<&Value>, b: Option<&Value>, ranks: &RankMap) -> Ordering {
    compare_ranked(a, b, ranks).unwrap_or_else(|| value::compare(a, b))
}

#[inline]
fn compare_ranked(a: Option<&Value>, b: Option<&Value>, ranks: &RankMap) -> Option<Ordering> {
    if ranks.is_empty() {
        return None;
    }

    let (rank_a, rank_b) = (ranks.get(a), ranks.get(b));
    if rank_a.is_none() && rank_b.is_none() {
        return None;
    }

    Some(value::compare_ranks(rank_a, rank_b))
}

fn is_container(value: &Value) -> bool {
    matches!(value, Value::Object(_) | Value::Array(_))
}
