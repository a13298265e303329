use std::collections::BTreeSet;

use crate::domain::run::ColumnMatch;

/// Score assigned to every match. Identical name is the only match signal,
/// so the score carries no gradation.
pub const EXACT_MATCH_SCORE: f64 = 1.0;

/// Intersect two column-name sets and emit one `(name, name, 1.0)` triple
/// per common column, sorted lexically by name. Columns present on only one
/// side are dropped without signal. Duplicate headers collapse to one entry.
pub fn find_common_columns(columns1: &[String], columns2: &[String]) -> Vec<ColumnMatch> {
    let left: BTreeSet<&str> = columns1.iter().map(String::as_str).collect();
    let right: BTreeSet<&str> = columns2.iter().map(String::as_str).collect();

    left.intersection(&right)
        .map(|name| ColumnMatch(name.to_string(), name.to_string(), EXACT_MATCH_SCORE))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn cols(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_overlap_returns_only_shared_columns() {
        let result = find_common_columns(&cols(&["a", "b", "c"]), &cols(&["b", "c", "d"]));

        assert_eq!(
            result,
            vec![
                ColumnMatch("b".to_string(), "b".to_string(), 1.0),
                ColumnMatch("c".to_string(), "c".to_string(), 1.0),
            ]
        );
    }

    #[test]
    fn test_disjoint_columns_yield_empty_result() {
        let result = find_common_columns(&cols(&["a", "b"]), &cols(&["x", "y"]));
        assert!(result.is_empty());
    }

    #[test]
    fn test_output_is_sorted_regardless_of_input_order() {
        let result = find_common_columns(&cols(&["z", "m", "a"]), &cols(&["a", "z", "m"]));

        let names: Vec<&str> = result.iter().map(|m| m.name()).collect();
        assert_eq!(names, vec!["a", "m", "z"]);
    }

    #[test]
    fn test_duplicate_headers_collapse() {
        let result = find_common_columns(&cols(&["a", "a", "b"]), &cols(&["a", "b", "b"]));

        let names: Vec<&str> = result.iter().map(|m| m.name()).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[rstest]
    #[case(&["id", "name"], &["id", "name"], 2)]
    #[case(&["id"], &[], 0)]
    #[case(&[], &[], 0)]
    #[case(&["ID"], &["id"], 0)]
    fn test_overlap_counts(#[case] left: &[&str], #[case] right: &[&str], #[case] expected: usize) {
        assert_eq!(find_common_columns(&cols(left), &cols(right)).len(), expected);
    }

    #[test]
    fn test_every_match_scores_exactly_one() {
        let result = find_common_columns(&cols(&["a", "b"]), &cols(&["a", "b"]));
        assert!(result.iter().all(|m| m.score() == EXACT_MATCH_SCORE));
    }
}
