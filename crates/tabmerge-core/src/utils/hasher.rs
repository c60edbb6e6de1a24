//! Streaming xxh3 behind `std::hash`, for sets and maps keyed by field values.

use std::hash::{BuildHasher, Hasher};

use xxhash_rust::xxh3::Xxh3;

/// Stateless builder; every hasher starts from the default xxh3 seed.
#[derive(Clone, Copy, Default, Debug)]
pub struct Xxh3Builder;

impl BuildHasher for Xxh3Builder {
    type Hasher = Xxh3Stream;

    fn build_hasher(&self) -> Xxh3Stream {
        Xxh3Stream(Box::new(Xxh3::new()))
    }
}

/// Hasher feeding every written byte into one xxh3 state.
#[derive(Clone)]
pub struct Xxh3Stream(Box<Xxh3>);

impl Hasher for Xxh3Stream {
    fn write(&mut self, bytes: &[u8]) {
        self.0.update(bytes);
    }

    fn finish(&self) -> u64 {
        self.0.digest()
    }
}
