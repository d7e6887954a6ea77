//! Filtering and positional slicing.
//!
//! Every function here reads its input and allocates a fresh output; source
//! order is always preserved. Predicates receive the element and its 0-based
//! source index.

/// Elements for which `pred(element, index)` holds.
pub fn where_<T, F>(input: &[T], mut pred: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, usize) -> bool,
{
    input
        .iter()
        .enumerate()
        .filter(|(i, v)| pred(*v, *i))
        .map(|(_, v)| v.clone())
        .collect()
}

/// Everything after the first `count` elements. Out-of-range counts clamp.
pub fn skip<T: Clone>(input: &[T], count: usize) -> Vec<T> {
    input.iter().skip(count).cloned().collect()
}

/// The first `count` elements. Out-of-range counts clamp.
pub fn take<T: Clone>(input: &[T], count: usize) -> Vec<T> {
    input.iter().take(count).cloned().collect()
}

/// Suffix starting at the first element for which `pred` is false. Empty if
/// the predicate never fails.
pub fn skip_while<T, F>(input: &[T], mut pred: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, usize) -> bool,
{
    match input.iter().enumerate().position(|(i, v)| !pred(v, i)) {
        Some(start) => input[start..].to_vec(),
        None => Vec::new(),
    }
}

/// Prefix while `pred` holds; the first failing element is excluded.
pub fn take_while<T, F>(input: &[T], mut pred: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, usize) -> bool,
{
    let end = input
        .iter()
        .enumerate()
        .position(|(i, v)| !pred(v, i))
        .unwrap_or(input.len());
    input[..end].to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn where_passes_source_index() {
        let v = vec![10, 11, 12, 13];
        assert_eq!(where_(&v, |_, i| i % 2 == 1), vec![11, 13]);
    }

    #[test]
    fn slicing_clamps() {
        let v = vec![1, 2, 3];
        assert_eq!(skip(&v, 10), Vec::<i32>::new());
        assert_eq!(take(&v, 10), v);
        assert_eq!(skip(&v, 0), v);
    }

    #[test]
    fn while_variants() {
        let v = vec![1, 2, 5, 1];
        assert_eq!(skip_while(&v, |x, _| *x < 3), vec![5, 1]);
        assert_eq!(skip_while(&v, |_, _| false), v);
        assert!(skip_while(&v, |_, _| true).is_empty());
        assert_eq!(take_while(&v, |x, _| *x < 3), vec![1, 2]);
        assert_eq!(take_while(&v, |_, i| i < 10), v);
    }
}
