//! Random Source Port - Seedable randomness for content selection.
//!
//! Every random choice in the system (tip picks, fallback replies) goes
//! through this seam so tests can drive the "randomized fallback" branch
//! deterministically.

/// Port for uniform random selection.
///
/// Implementations take `&self`; any state they keep (a seeded generator)
/// lives behind interior mutability.
pub trait RandomSource: Send + Sync {
    /// Returns a uniformly random index in `0..len`.
    ///
    /// # Panics
    ///
    /// Panics if `len` is zero. Callers always sample fixed, non-empty pools.
    fn pick_index(&self, len: usize) -> usize;

    /// Returns `true` with the given probability (strictly-less-than draw).
    fn chance(&self, probability: f64) -> bool;
}

/// Picks a uniformly random element of a non-empty slice.
pub fn random_pick<'a, T>(source: &dyn RandomSource, items: &'a [T]) -> &'a T {
    &items[source.pick_index(items.len())]
}
