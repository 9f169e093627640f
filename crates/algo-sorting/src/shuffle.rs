use rand::Rng;

/// Knuth shuffle: uniformly permute the slice in place.
///
/// For each index `k` from the front, swap with a uniformly random index
/// in `[0, k]`. The generator is injected rather than global, so
/// shuffle-dependent algorithms stay deterministic under a seeded rng.
///
/// # Examples
///
/// ```
/// use algo_sorting::shuffle;
/// use rand::SeedableRng;
/// use rand_xoshiro::Xoshiro256StarStar;
///
/// let mut a = [1, 2, 3, 4, 5];
/// let mut b = a;
/// shuffle(&mut Xoshiro256StarStar::seed_from_u64(7), &mut a);
/// shuffle(&mut Xoshiro256StarStar::seed_from_u64(7), &mut b);
/// assert_eq!(a, b); // same seed, same permutation
/// ```
pub fn shuffle<T, R>(rng: &mut R, a: &mut [T])
where
    R: Rng + ?Sized,
{
    for k in 0..a.len() {
        let r = rng.gen_range(0..=k);
        a.swap(r, k);
    }
}
