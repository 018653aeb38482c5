//! Custom rank lookup built from `SortOptions::order`.

use std::collections::HashMap;

use ordered_float::OrderedFloat;
use serde_json::Value;

/// Maps specific scalar values to their position in a user supplied order.
///
/// Keys are typed, so `1` and `"1"` are different entries. Arrays and objects are never ranked.
#[derive(Debug, Clone, Default)]
pub struct RankMap {
    strings: HashMap<String, usize>,
    numbers: HashMap<OrderedFloat<f64>, usize>,
    bools: [Option<usize>; 2],
    null: Option<usize>,
}

impl RankMap {
    /// Position in `order` becomes the rank. A repeated value keeps its last position.
    pub fn from_order(order: &[Value]) -> Self {
        let mut ranks = Self::default();

        for (rank, value) in order.iter().enumerate() {
            match value {
                Value::String(s) => {
                    ranks.strings.insert(s.clone(), rank);
                }
                Value::Number(n) => {
                    if let Some(key) = number_key(n) {
                        ranks.numbers.insert(key, rank);
                    }
                }
                Value::Bool(b) => ranks.bools[usize::from(*b)] = Some(rank),
                Value::Null => ranks.null = Some(rank),
                Value::Array(_) | Value::Object(_) => {}
            }
        }

        ranks
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
            && self.numbers.is_empty()
            && self.bools.iter().all(Option::is_none)
            && self.null.is_none()
    }

    pub fn len(&self) -> usize {
        self.strings.len()
            + self.numbers.len()
            + self.bools.iter().filter(|b| b.is_some()).count()
            + usize::from(self.null.is_some())
    }

    /// Rank of `value`, if it was listed. A missing value is never ranked.
    #[inline]
    pub fn get(&self, value: Option<&Value>) -> Option<usize> {
        match value? {
            Value::String(s) => self.strings.get(s.as_str()).copied(),
            Value::Number(n) => self.numbers.get(&number_key(n)?).copied(),
            Value::Bool(b) => self.bools[usize::from(*b)],
            Value::Null => self.null,
            Value::Array(_) | Value::Object(_) => None,
        }
    }

    pub fn contains(&self, value: Option<&Value>) -> bool {
        self.get(value).is_some()
    }
}

fn number_key(n: &serde_json::Number) -> Option<OrderedFloat<f64>> {
    // Fold -0.0 into 0.0 so both spellings share a rank.
    n.as_f64().map(|f| OrderedFloat(if f == 0.0 { 0.0 } else { f }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn ranks_follow_positions() {
        let ranks = RankMap::from_order(&[json!("c"), json!("b"), json!("a")]);

        assert_eq!(ranks.get(Some(&json!("c"))), Some(0));
        assert_eq!(ranks.get(Some(&json!("a"))), Some(2));
        assert_eq!(ranks.get(Some(&json!("z"))), None);
        assert_eq!(ranks.get(None), None);
        assert_eq!(ranks.len(), 3);
    }

    #[test]
    fn keys_are_typed() {
        let ranks = RankMap::from_order(&[json!(1), json!("1"), json!(true), json!(null)]);

        assert_eq!(ranks.get(Some(&json!(1))), Some(0));
        assert_eq!(ranks.get(Some(&json!(1.0))), Some(0));
        assert_eq!(ranks.get(Some(&json!("1"))), Some(1));
        assert_eq!(ranks.get(Some(&json!(true))), Some(2));
        assert_eq!(ranks.get(Some(&json!(false))), None);
        assert_eq!(ranks.get(Some(&Value::Null)), Some(3));
    }

    #[test]
    fn repeated_value_keeps_last_position() {
        let ranks = RankMap::from_order(&[json!("x"), json!("y"), json!("x")]);

        assert_eq!(ranks.get(Some(&json!("x"))), Some(2));
        assert_eq!(ranks.len(), 2);
    }

    #[test]
    fn containers_are_never_ranked() {
        let ranks = RankMap::from_order(&[json!([1]), json!({"a": 1})]);

        assert!(ranks.is_empty());
        assert!(!ranks.contains(Some(&json!([1]))));
    }
}
