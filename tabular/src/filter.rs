//! Substring filtering over one designated field.

use crate::record::Record;

/// Returns the indices of rows whose `key` field contains `query` as a
/// case-insensitive substring, preserving the original order.
///
/// An empty query keeps every row. A row without the field is treated as
/// holding the empty string, so it matches nothing but an empty query.
pub fn apply<T: Record>(rows: &[T], key: &str, query: &str) -> Vec<usize> {
    if query.is_empty() {
        return (0..rows.len()).collect();
    }

    let needle = query.to_lowercase();
    rows.iter()
        .enumerate()
        .filter(|(_, row)| {
            row.field(key)
                .map(|value| value.to_string().to_lowercase().contains(&needle))
                .unwrap_or(false)
        })
        .map(|(index, _)| index)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Value;

    #[derive(Clone)]
    struct Row {
        name: &'static str,
        score: i64,
    }

    impl Record for Row {
        fn field(&self, key: &str) -> Option<Value> {
            match key {
                "name" => Some(Value::text(self.name)),
                "score" => Some(Value::Int(self.score)),
                _ => None,
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "Beta", score: 2 },
            Row { name: "Alpha", score: 2 },
            Row { name: "Gamma", score: 1 },
        ]
    }

    #[test]
    fn test_empty_query_is_identity() {
        let rows = rows();
        assert_eq!(apply(&rows, "name", ""), vec![0, 1, 2]);
    }

    #[test]
    fn test_case_insensitive_substring() {
        let rows = rows();
        assert_eq!(apply(&rows, "name", "ALPH"), vec![1]);
        assert_eq!(apply(&rows, "name", "a"), vec![0, 1, 2]);
    }

    #[test]
    fn test_no_match_is_empty_not_error() {
        let rows = rows();
        assert!(apply(&rows, "name", "zzz").is_empty());
    }

    #[test]
    fn test_missing_field_matches_nothing() {
        let rows = rows();
        assert!(apply(&rows, "nope", "a").is_empty());
        // ...but an empty query still keeps everything.
        assert_eq!(apply(&rows, "nope", "").len(), 3);
    }

    #[test]
    fn test_numeric_field_filters_on_string_form() {
        let rows = rows();
        assert_eq!(apply(&rows, "score", "2"), vec![0, 1]);
    }
}
