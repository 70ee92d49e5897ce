//! In-place insertion sort over `i64` slices.

mod common;

pub use common::is_sorted_non_decreasing;

/// Work done by a single sort call.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SortStats {
    pub comparisons: usize,
    pub swaps: usize,
}

/// Sorts `data` in place into non-descending order and hands the same slice
/// back, so the call can be chained straight into a print.
///
/// Adjacent-swap insertion sort: each pass walks the next element left through
/// the sorted prefix and stops at the first neighbour that is not greater.
///
/// ```
/// let mut data = vec![2, 4, 5, 1, 3];
/// assert_eq!(insertion_sort::insertion_sort(&mut data), [1, 2, 3, 4, 5]);
/// ```
pub fn insertion_sort(data: &mut [i64]) -> &mut [i64] {
    insertion_sort_with_stats(data).0
}

/// Same as [`insertion_sort`], additionally reporting how many comparisons and
/// swaps were performed.
///
/// Sorted input costs `n - 1` comparisons and no swaps; strictly descending
/// input costs `n * (n - 1) / 2` of each.
pub fn insertion_sort_with_stats(data: &mut [i64]) -> (&mut [i64], SortStats) {
    let mut stats = SortStats::default();

    for i in 1..data.len() {
        for j in 0..i {
            let right = i - j;
            stats.comparisons += 1;
            if data[right - 1] > data[right] {
                data.swap(right - 1, right);
                stats.swaps += 1;
            } else {
                break;
            }
        }
    }

    debug_assert!(is_sorted_non_decreasing(data));
    tracing::debug!(
        len = data.len(),
        comparisons = stats.comparisons,
        swaps = stats.swaps,
        "insertion sort finished"
    );

    (data, stats)
}
