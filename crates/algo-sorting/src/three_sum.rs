/// Count the index triples `i < j < k` whose elements sum to zero.
///
/// Brute force over every triple, O(n³) — the baseline the sub-cubic
/// variants are measured against. Duplicate values produce distinct
/// triples as long as the indices differ.
///
/// # Examples
///
/// ```
/// use algo_sorting::three_sum_count;
///
/// let nums = [30, -40, -20, -10, 40, 0, 10, 5];
/// assert_eq!(three_sum_count(&nums), 4);
/// ```
pub fn three_sum_count(nums: &[i64]) -> usize {
    let mut count = 0;
    for i in 0..nums.len() {
        for j in i + 1..nums.len() {
            for k in j + 1..nums.len() {
                if nums[i] + nums[j] + nums[k] == 0 {
                    count += 1;
                }
            }
        }
    }
    count
}
