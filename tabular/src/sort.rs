//! Single-key stable ordering of row indices.

use std::cmp::Ordering;

use crate::record::{Record, Value};

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Ascending order (A-Z, 0-9).
    Asc,
    /// Descending order (Z-A, 9-0).
    Desc,
}

/// Reorders `order` by the `key` field of the rows it points into.
///
/// The sort is stable in both directions: rows whose values compare equal
/// keep their relative order from the input, so re-sorting after a filter
/// change never shuffles equal-valued rows.
pub fn apply<T: Record>(
    rows: &[T],
    mut order: Vec<usize>,
    key: &str,
    direction: Direction,
) -> Vec<usize> {
    order.sort_by(|&a, &b| {
        let ord = compare(rows[a].field(key).as_ref(), rows[b].field(key).as_ref());
        match direction {
            Direction::Asc => ord,
            Direction::Desc => ord.reverse(),
        }
    });
    order
}

/// Field comparison: numeric when both sides are numeric, otherwise
/// locale-independent lexicographic comparison of the string forms.
/// Missing values compare as empty strings.
fn compare(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    if let (Some(a), Some(b)) = (a, b)
        && let (Some(x), Some(y)) = (a.as_f64(), b.as_f64())
    {
        return x.total_cmp(&y);
    }

    let a = a.map(ToString::to_string).unwrap_or_default();
    let b = b.map(ToString::to_string).unwrap_or_default();
    a.cmp(&b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Value;

    #[derive(Clone)]
    struct Row {
        name: &'static str,
        score: i64,
        price: f64,
    }

    impl Record for Row {
        fn field(&self, key: &str) -> Option<Value> {
            match key {
                "name" => Some(Value::text(self.name)),
                "score" => Some(Value::Int(self.score)),
                "price" => Some(Value::Float(self.price)),
                _ => None,
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "Beta", score: 2, price: 9.5 },
            Row { name: "Alpha", score: 2, price: 110.0 },
            Row { name: "Gamma", score: 1, price: 20.0 },
        ]
    }

    fn all(rows: &[Row]) -> Vec<usize> {
        (0..rows.len()).collect()
    }

    #[test]
    fn test_lexicographic_ascending() {
        let rows = rows();
        assert_eq!(apply(&rows, all(&rows), "name", Direction::Asc), vec![1, 0, 2]);
    }

    #[test]
    fn test_numeric_not_lexicographic() {
        // Lexicographically "110" < "9.5"; numerically it is not.
        let rows = rows();
        assert_eq!(
            apply(&rows, all(&rows), "price", Direction::Asc),
            vec![0, 2, 1]
        );
    }

    #[test]
    fn test_ties_keep_input_order_both_directions() {
        let rows = rows();
        // Beta and Alpha tie on score; Beta comes first in the input.
        assert_eq!(apply(&rows, all(&rows), "score", Direction::Asc), vec![2, 0, 1]);
        assert_eq!(
            apply(&rows, all(&rows), "score", Direction::Desc),
            vec![0, 1, 2]
        );
    }

    #[test]
    fn test_round_trip_without_ties() {
        let rows = rows();
        let asc = apply(&rows, all(&rows), "price", Direction::Asc);
        let desc = apply(&rows, asc.clone(), "price", Direction::Desc);
        let mut reversed = asc;
        reversed.reverse();
        assert_eq!(desc, reversed);
    }

    #[test]
    fn test_missing_field_sorts_as_empty_and_stays_stable() {
        let rows = rows();
        assert_eq!(apply(&rows, all(&rows), "nope", Direction::Asc), vec![0, 1, 2]);
    }
}
