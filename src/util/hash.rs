use std::hash::{BuildHasher, Hasher};

/// A hasher that ignores its input, so every element lands on the same hash. Membership then rests
/// entirely on `Eq`.
#[derive(Debug)]
pub struct ConstantHasher;

impl Hasher for ConstantHasher {
    fn finish(&self) -> u64 {
        0
    }

    fn write(&mut self, _bytes: &[u8]) {}
}

/// Builds [`ConstantHasher`]s, making every pair of elements in a Set collide.
#[derive(Debug, Default, Clone)]
pub struct CollideAll;

impl BuildHasher for CollideAll {
    type Hasher = ConstantHasher;

    fn build_hasher(&self) -> Self::Hasher {
        ConstantHasher
    }
}
