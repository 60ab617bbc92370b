//! Memoized pseudo-random row labels.
//!
//! The bench models decorate generated rows with a short random word so that
//! rows differ visibly in width. Labels are generated on first use and cached
//! so repeated reads of a row are stable.
//!
//! The cache is a fixed array of `capacity` slots keyed by `row % capacity`.
//! Rows that share a slot share a label: with the default capacity of 1000,
//! row 1005 reads the label of row 5. Views never show that many distinct
//! rows at once, so the aliasing is kept rather than growing the cache.

use std::sync::Arc;

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Default number of cache slots.
pub const DEFAULT_LABEL_CAPACITY: usize = 1000;

/// Default seed for label generation.
pub const DEFAULT_LABEL_SEED: u64 = 0x5eed_1abe;

/// Bounded, modulo-indexed cache of generated labels.
pub struct RowLabelCache {
    slots: Vec<Option<String>>,
    rng: StdRng,
}

/// A label cache shared by every model of one panel.
pub type SharedLabels = Arc<Mutex<RowLabelCache>>;

impl RowLabelCache {
    /// Creates an empty cache.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize, seed: u64) -> Self {
        assert!(capacity > 0, "label cache capacity must be non-zero");
        Self {
            slots: vec![None; capacity],
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Creates an empty cache wrapped for sharing between models.
    pub fn shared(capacity: usize, seed: u64) -> SharedLabels {
        Arc::new(Mutex::new(Self::new(capacity, seed)))
    }

    /// Number of slots.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if the slot for `row` already holds a label.
    pub fn is_cached(&self, row: usize) -> bool {
        self.slots[row % self.slots.len()].is_some()
    }

    /// Returns the label for `row`, generating it on first use.
    pub fn label(&mut self, row: usize) -> String {
        let slot = row % self.slots.len();
        if let Some(label) = &self.slots[slot] {
            return label.clone();
        }

        let label = self.generate();
        self.slots[slot] = Some(label.clone());
        label
    }

    /// 3 to 14 letters, capitalized; longer words get a space in the middle.
    fn generate(&mut self) -> String {
        let len = 3 + self.rng.gen_range(0..12);
        let mut chars: Vec<u8> = (0..len)
            .map(|i| {
                let base = if i == 0 { b'A' } else { b'a' };
                base + self.rng.gen_range(0..26u8)
            })
            .collect();
        if len > 6 {
            chars[len / 2] = b' ';
        }
        chars.into_iter().map(char::from).collect()
    }
}

impl Default for RowLabelCache {
    fn default() -> Self {
        Self::new(DEFAULT_LABEL_CAPACITY, DEFAULT_LABEL_SEED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_is_memoized() {
        let mut cache = RowLabelCache::default();
        assert!(!cache.is_cached(42));
        let first = cache.label(42);
        assert!(cache.is_cached(42));
        assert_eq!(cache.label(42), first);
    }

    #[test]
    fn test_label_shape() {
        let mut cache = RowLabelCache::new(64, 7);
        for row in 0..64 {
            let label = cache.label(row);
            let bytes = label.as_bytes();
            assert!((3..=14).contains(&bytes.len()), "bad length: {label:?}");
            assert!(bytes[0].is_ascii_uppercase());
            for (i, b) in bytes.iter().enumerate().skip(1) {
                if bytes.len() > 6 && i == bytes.len() / 2 {
                    assert_eq!(*b, b' ');
                } else {
                    assert!(b.is_ascii_lowercase(), "bad char in {label:?}");
                }
            }
        }
    }

    #[test]
    fn test_rows_alias_modulo_capacity() {
        let mut cache = RowLabelCache::new(10, 1);
        let label = cache.label(3);
        assert!(cache.is_cached(13));
        assert_eq!(cache.label(13), label);
        assert_eq!(cache.label(1003), label);
    }

    #[test]
    fn test_same_seed_same_labels() {
        let mut a = RowLabelCache::new(100, 99);
        let mut b = RowLabelCache::new(100, 99);
        for row in [5, 50, 7, 99] {
            assert_eq!(a.label(row), b.label(row));
        }
    }

    #[test]
    #[should_panic(expected = "non-zero")]
    fn test_zero_capacity_panics() {
        let _ = RowLabelCache::new(0, 0);
    }
}
