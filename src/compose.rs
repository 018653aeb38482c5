//! Composes a criteria list into one comparator.

use std::cmp::Ordering;

use serde_json::Value;

use crate::args::SortOptions;
use crate::criterion::{self, Criterion, Direction};
use crate::rank::RankMap;

/// Everything one sort call needs to compare two records. Built once per call and borrowed by
/// the sort primitive for its duration.
#[derive(Debug, Clone)]
pub struct Comparator {
    criteria: Vec<Criterion>,
    ranks: RankMap,
    direction: Direction,
}

/// Builds the comparator for `criteria` under `options`.
pub fn compose(criteria: Vec<Criterion>, options: &SortOptions) -> Comparator {
    Comparator {
        criteria,
        ranks: RankMap::from_order(&options.order),
        direction: options.direction.unwrap_or_default(),
    }
}

impl Comparator {
    /// Evaluates the criteria in order and returns the first non-equal result, flipped once if
    /// the global direction is descending. An empty criteria list compares the records
    /// themselves.
    pub fn compare(&self, a: &Value, b: &Value) -> Ordering {
        let ordering = if self.criteria.is_empty() {
            criterion::resolve(&Criterion::Natural, a, b, &self.ranks)
        } else {
            self.criteria
                .iter()
                .map(|c| criterion::resolve(c, a, b, &self.ranks))
                .find(|ordering| ordering.is_ne())
                .unwrap_or(Ordering::Equal)
        };

        self.direction.apply(ordering)
    }

    /// The comparator as a closure, ready for a sort primitive.
    pub fn as_fn(&self) -> impl Fn(&Value, &Value) -> Ordering + '_ {
        move |a: &Value, b: &Value| self.compare(a, b)
    }

    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    pub fn ranks(&self) -> &RankMap {
        &self.ranks
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }
}
