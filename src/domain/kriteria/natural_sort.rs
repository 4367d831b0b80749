//! Natural ordering of criterion codes (`C1, C2, C10` rather than `C1, C10, C2`).

use std::cmp::Ordering;

/// Trailing number of a code, if the code ends in digits.
fn numeric_suffix(kode: &str) -> Option<u64> {
    let trimmed = kode.trim();
    let digits_start = trimmed
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_ascii_digit())
        .last()
        .map(|(idx, _)| idx)?;
    trimmed[digits_start..].parse().ok()
}

/// Compares two codes by numeric suffix. Codes without a suffix sort after
/// numbered ones; equal suffixes fall back to plain string order.
pub fn compare_kode(a: &str, b: &str) -> Ordering {
    match (numeric_suffix(a), numeric_suffix(b)) {
        (Some(x), Some(y)) => x.cmp(&y).then_with(|| a.cmp(b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

/// Sorts items in place by the natural order of their code.
pub fn natural_sort_by_kode<T>(items: &mut [T], kode: impl Fn(&T) -> &str) {
    items.sort_by(|a, b| compare_kode(kode(a), kode(b)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn orders_by_numeric_suffix() {
        let mut codes = vec!["C10", "C2", "C1"];
        natural_sort_by_kode(&mut codes, |c| *c);
        assert_eq!(codes, vec!["C1", "C2", "C10"]);
    }

    #[test]
    fn codes_without_number_go_last() {
        let mut codes = vec!["X", "C3", "A"];
        natural_sort_by_kode(&mut codes, |c| *c);
        assert_eq!(codes, vec!["C3", "A", "X"]);
    }

    #[test]
    fn equal_suffix_falls_back_to_text() {
        assert_eq!(compare_kode("B1", "A1"), Ordering::Greater);
    }

    #[test]
    fn suffix_ignores_inner_digits() {
        assert_eq!(numeric_suffix("K2-10"), Some(10));
        assert_eq!(numeric_suffix("C"), None);
    }

    proptest! {
        #[test]
        fn numbered_codes_sort_numerically(mut numbers in proptest::collection::vec(0u32..500, 1..20)) {
            let mut codes: Vec<String> = numbers.iter().map(|n| format!("C{}", n)).collect();
            natural_sort_by_kode(&mut codes, |c| c.as_str());
            numbers.sort_unstable();
            let expected: Vec<String> = numbers.iter().map(|n| format!("C{}", n)).collect();
            prop_assert_eq!(codes, expected);
        }
    }
}
