//! Fisher–Yates shuffling over an injectable random source.

use rand::Rng;

/// Shuffles `items` in place.
///
/// `random_up_to_inclusive(n)` must return a number in `0..=n`. For every
/// index `i` from the last down to 1, the element at `i` is swapped with the
/// one at `random_up_to_inclusive(i)`. When the source is uniform every
/// permutation is equally likely. Slices shorter than two elements are left
/// untouched and the source is never called.
pub fn shuffle<T, F>(items: &mut [T], mut random_up_to_inclusive: F)
where
    F: FnMut(usize) -> usize,
{
    for i in (1..items.len()).rev() {
        let j = random_up_to_inclusive(i);
        debug_assert!(j <= i, "random source returned {j}, above its bound {i}");
        items.swap(i, j);
    }
}

/// Shuffles `items` in place, drawing from `rng`.
pub fn shuffle_with_rng<T, R>(items: &mut [T], rng: &mut R)
where
    R: Rng,
{
    shuffle(items, |bound| rng.random_range(0..=bound));
}
