use rand::seq::SliceRandom;
use rand::Rng;

/// Uniformly shuffle `items` (Fisher–Yates) and keep the first `count`.
pub fn pick_random<T, R: Rng + ?Sized>(mut items: Vec<T>, count: usize, rng: &mut R) -> Vec<T> {
    items.shuffle(rng);
    items.truncate(count);
    items
}
