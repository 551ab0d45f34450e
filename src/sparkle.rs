//! Sparkle layer
//!
//! A fixed-size sliding window of pixel indices. Every frame the oldest index
//! drops off the front and a fresh random one is appended, so the sparkles
//! drift without the window ever growing or shrinking. Duplicates are allowed.

use heapless::Deque;
use rand::Rng;

use crate::config::{PIXEL_COUNT, SPARKLE_COUNT, SPARKLE_LAYER_LEN, STRING_COUNT};

#[derive(Debug, Clone)]
pub struct SparkleLayer {
    indices: Deque<usize, SPARKLE_LAYER_LEN>,
}

impl SparkleLayer {
    /// Create a full layer of random pixel indices
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut indices = Deque::new();
        while !indices.is_full() {
            let _ = indices.push_back(random_pixel(rng));
        }
        Self { indices }
    }

    /// Replace the oldest index with a new random one
    pub fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.indices.pop_front();
        let _ = self.indices.push_back(random_pixel(rng));
    }

    /// Sparkle positions assigned to a string
    ///
    /// String `i` owns the window slots `[SPARKLE_COUNT * i, SPARKLE_COUNT * (i + 1))`.
    /// Strings past `STRING_COUNT` have no sparkles.
    pub fn for_string(&self, string: usize) -> impl Iterator<Item = usize> + '_ {
        let count = if string < STRING_COUNT {
            SPARKLE_COUNT
        } else {
            0
        };
        self.indices
            .iter()
            .skip(SPARKLE_COUNT * string)
            .take(count)
            .copied()
    }

    /// All indices, oldest first
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

fn random_pixel<R: Rng + ?Sized>(rng: &mut R) -> usize {
    rng.gen_range(0..PIXEL_COUNT)
}
