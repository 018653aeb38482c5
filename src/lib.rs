//! Multi-key sorting of JSON records.
//!
//! Records are ordered by a list of criteria: field paths, custom comparison functions, or
//! `{field, direction}` descriptors. Earlier criteria dominate and later ones only break ties.
//! An options object can flip the whole result and rank specific values by an explicit order.
//!
//! ```
//! use serde_json::json;
//!
//! let sorted = multisort::sort(
//!     json!([{"a": {"b": 2}}, {"a": {"b": 1}}]),
//!     ["a.b"],
//! )?;
//! assert_eq!(sorted, vec![json!({"a": {"b": 1}}), json!({"a": {"b": 2}})]);
//! # Ok::<(), multisort::SortError>(())
//! ```

pub mod args;
pub mod compose;
pub mod criterion;
pub mod error;
pub mod path;
pub mod patterns;
pub mod primitive;
pub mod rank;
pub mod value;

use serde_json::Value;

pub use args::{normalize, SortArg, SortOptions};
pub use compose::{compose, Comparator};
pub use criterion::{CompareFn, Criterion, Descriptor, Direction, Fallback};
pub use error::{Result, SortError};
pub use path::FieldPath;
pub use primitive::{Primitive, Stable, Unstable};
pub use rank::RankMap;

/// Sorts `input` by the given criteria and options, using the stable primitive.
///
/// `null` yields an empty vec. Any other non-array value is rejected.
pub fn sort<I>(input: Value, args: I) -> Result<Vec<Value>>
where
    I: IntoIterator,
    I::Item: Into<SortArg>,
{
    sort_with::<Stable, I>(input, args)
}

/// [`sort`] with an explicit sort primitive.
pub fn sort_with<P, I>(input: Value, args: I) -> Result<Vec<Value>>
where
    P: Primitive,
    I: IntoIterator,
    I::Item: Into<SortArg>,
{
    match input {
        Value::Null => Ok(Vec::new()),
        Value::Array(mut records) => {
            sort_records_with::<P, I>(&mut records, args);
            Ok(records)
        }
        other => {
            let found = value::kind_name(&other);
            tracing::debug!(found, "refusing to sort a non-array value");
            Err(SortError::NotAnArray { found })
        }
    }
}

/// Sorts `records` in place and hands the same slice back.
///
/// Without any arguments the records are ordered by their string form, as a plain sort over
/// mixed values would. Otherwise the arguments are normalized into criteria and options.
pub fn sort_records<I>(records: &mut [Value], args: I) -> &mut [Value]
where
    I: IntoIterator,
    I::Item: Into<SortArg>,
{
    sort_records_with::<Stable, I>(records, args)
}

/// [`sort_records`] with an explicit sort primitive.
pub fn sort_records_with<P, I>(records: &mut [Value], args: I) -> &mut [Value]
where
    P: Primitive,
    I: IntoIterator,
    I::Item: Into<SortArg>,
{
    let mut args = args.into_iter().map(Into::<SortArg>::into).peekable();

    if args.peek().is_none() {
        tracing::trace!(records = records.len(), primitive = %P::name(), "native ordering");
        P::sort_by(records, value::compare_native);
        return records;
    }

    let (criteria, options) = normalize(args);
    sort_by_criteria_with::<P>(records, criteria, &options)
}

/// Sorts `records` in place by an explicit criteria list. No argument sniffing happens here.
pub fn sort_by_criteria<'r>(
    records: &'r mut [Value],
    criteria: Vec<Criterion>,
    options: &SortOptions,
) -> &'r mut [Value] {
    sort_by_criteria_with::<Stable>(records, criteria, options)
}

/// [`sort_by_criteria`] with an explicit sort primitive.
pub fn sort_by_criteria_with<'r, P: Primitive>(
    records: &'r mut [Value],
    criteria: Vec<Criterion>,
    options: &SortOptions,
) -> &'r mut [Value] {
    let comparator = compose(criteria, options);

    tracing::debug!(
        records = records.len(),
        criteria = comparator.criteria().len(),
        ranked = comparator.ranks().len(),
        direction = comparator.direction().as_str(),
        primitive = %P::name(),
        "sorting records"
    );

    P::sort_by(records, comparator.as_fn());
    records
}
