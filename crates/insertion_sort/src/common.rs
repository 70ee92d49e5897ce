#[inline]
pub fn is_sorted_non_decreasing(data: &[i64]) -> bool {
    data.windows(2).all(|pair| pair[0] <= pair[1])
}
