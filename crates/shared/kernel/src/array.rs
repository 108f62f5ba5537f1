//! Small helpers over slices and vectors.

use std::borrow::Cow;

#[tessera_derive::tessera_error]
pub enum ArrayError {
    #[error("Item not found{}", format_context(.context))]
    NotFound { context: Option<Cow<'static, str>> },
}

/// Removes the first item equal to `item` and returns it.
///
/// # Errors
/// Returns [`ArrayError::NotFound`] if no item matches.
pub fn remove_item<T: PartialEq>(items: &mut Vec<T>, item: &T) -> Result<T, ArrayError> {
    let position = items.iter().position(|candidate| candidate == item).ok_or(ArrayError::NotFound { context: None })?;
    Ok(items.remove(position))
}

/// Items split by which of two slices contain them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Difference<T> {
    /// Items of `a` missing from `b`, in the order of `a`.
    pub a_only: Vec<T>,
    /// Items of `b` missing from `a`, in the order of `b`.
    pub b_only: Vec<T>,
    /// Items of `a` also present in `b`, in the order of `a`.
    pub both: Vec<T>,
}

/// Compares two slices by item equality.
pub fn difference<T: PartialEq + Clone>(a: &[T], b: &[T]) -> Difference<T> {
    let (both, a_only) = a.iter().cloned().partition(|item| b.contains(item));
    let b_only = b.iter().filter(|item| !a.contains(item)).cloned().collect();
    Difference { a_only, b_only, both }
}

/// Inserts `separator(i)` between item `i` and item `i + 1`.
pub fn interleave<T, I, F>(items: I, mut separator: F) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    F: FnMut(usize) -> T,
{
    let items = items.into_iter();
    let mut out = Vec::with_capacity(items.size_hint().0.saturating_mul(2));
    for (index, item) in items.enumerate() {
        if index > 0 {
            out.push(separator(index - 1));
        }
        out.push(item);
    }
    out
}

/// Every unordered pair of distinct positions, in lexicographic position order.
pub fn pairs<T>(items: &[T]) -> Vec<(&T, &T)> {
    items
        .iter()
        .enumerate()
        .flat_map(|(index, first)| items[index + 1..].iter().map(move |second| (first, second)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remove_item_removes_first_match() {
        let mut items = vec![1, 2, 3, 2];
        assert_eq!(remove_item(&mut items, &2).unwrap(), 2);
        assert_eq!(items, [1, 3, 2]);
        assert!(matches!(remove_item(&mut items, &9), Err(ArrayError::NotFound { .. })));
    }

    #[test]
    fn difference_partitions_items() {
        let diff = difference(&["a", "b", "c"], &["c", "d", "a"]);
        assert_eq!(diff.a_only, ["b"]);
        assert_eq!(diff.b_only, ["d"]);
        assert_eq!(diff.both, ["a", "c"]);
    }

    #[test]
    fn interleave_places_separators_between_items() {
        assert_eq!(interleave(["a", "b", "c"], |_| ","), ["a", ",", "b", ",", "c"]);
        assert_eq!(interleave(Vec::<i32>::new(), |_| 0), Vec::<i32>::new());
        assert_eq!(interleave([10, 20, 30], |i| i32::try_from(i).unwrap()), [10, 0, 20, 1, 30]);
    }

    #[test]
    fn pairs_of_three() {
        assert_eq!(pairs(&[1, 2, 3]), [(&1, &2), (&1, &3), (&2, &3)]);
        assert!(pairs(&[1]).is_empty());
    }
}
