//! Uniform random sampling without replacement.
//!
//! ## Purpose
//!
//! This module draws `k` distinct elements uniformly at random from a
//! population, in one of two modes:
//!
//! * **Known length**: a partial Fisher–Yates shuffle over the positions
//!   `0..n`, producing an [`IndexSample`].
//! * **Unknown length**: a single-pass [`Reservoir`] (Algorithm R) over any
//!   iterator.
//!
//! ## Design notes
//!
//! * **Sparse shuffle**: Only the displaced positions are stored, so choosing
//!   `k` of `n` positions costs `O(k)` memory regardless of `n`.
//! * **Ordered gathering**: An [`IndexSample`] fetches elements in ascending
//!   position order, each exactly once, and then places them in slot order.
//!   Populations with expensive random access are walked forward only.
//! * **Injected RNG**: Every draw comes from the generator the caller passes
//!   in; nothing here touches a global generator.
//!
//! ## Key concepts
//!
//! Algorithm R keeps the first `k` items, then for the `i`-th item (0-based,
//! `i >= k`) draws `j` uniformly from `[0, i]` and overwrites slot `j` when
//! `j < k`. Every `k`-subset of the items seen so far is equally likely to be
//! held by the reservoir.
//!
//! ## Invariants
//!
//! * The positions of an [`IndexSample`] are distinct and below the
//!   population size.
//! * A reservoir never holds more than `capacity` items.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::collections::HashMap;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use rand::Rng;
use rand::rngs::StdRng;

// Internal dependencies
use crate::primitives::errors::AlgorithmError;

// ============================================================================
// Reservoir (unknown length)
// ============================================================================

/// Fixed-capacity reservoir for sampling a stream of unknown length.
#[derive(Debug)]
pub struct Reservoir<T, R: Rng = StdRng> {
    slots: Vec<T>,
    capacity: usize,
    seen: usize,
    rng: R,
}

impl<T, R: Rng> Reservoir<T, R> {
    /// Create an empty reservoir holding at most `capacity` items.
    pub fn new(capacity: usize, rng: R) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            capacity,
            seen: 0,
            rng,
        }
    }

    /// Offer the next item of the stream.
    pub fn offer(&mut self, item: T) {
        if self.slots.len() < self.capacity {
            self.slots.push(item);
        } else if self.capacity > 0 {
            let j = self.rng.random_range(0..=self.seen);
            if j < self.capacity {
                self.slots[j] = item;
            }
        }
        self.seen += 1;
    }

    /// Number of items offered so far.
    pub fn seen(&self) -> usize {
        self.seen
    }

    /// Maximum number of items held.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether the reservoir holds `capacity` items.
    pub fn is_full(&self) -> bool {
        self.slots.len() == self.capacity
    }

    /// Consume the reservoir, returning its items in slot order.
    ///
    /// Fails if the stream ended before the reservoir filled up.
    pub fn finish(self) -> Result<Vec<T>, AlgorithmError> {
        if !self.is_full() {
            return Err(AlgorithmError::PopulationTooSmall {
                size: self.capacity,
                got: self.seen,
            });
        }
        Ok(self.slots)
    }
}

impl<T, R: Rng> Extend<T> for Reservoir<T, R> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.offer(item);
        }
    }
}

// ============================================================================
// Index Sample (known length)
// ============================================================================

/// Distinct population positions chosen by a partial Fisher–Yates shuffle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexSample {
    positions: Vec<usize>,
}

impl IndexSample {
    /// Chosen positions, in slot order.
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    /// Number of chosen positions.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether no position was chosen.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Fetch the element at every chosen position and return them in slot
    /// order.
    ///
    /// `fetch` is called once per position, in ascending position order. The
    /// first failure is returned and no further fetch happens.
    pub fn gather<T, E, F>(&self, mut fetch: F) -> Result<Vec<T>, E>
    where
        F: FnMut(usize) -> Result<T, E>,
    {
        let mut slots: Vec<usize> = (0..self.positions.len()).collect();
        slots.sort_unstable_by_key(|&slot| self.positions[slot]);

        let mut fetched = Vec::with_capacity(slots.len());
        for slot in slots {
            fetched.push((slot, fetch(self.positions[slot])?));
        }

        fetched.sort_unstable_by_key(|&(slot, _)| slot);
        Ok(fetched.into_iter().map(|(_, item)| item).collect())
    }

    /// Borrow the chosen elements of `items` in slot order.
    pub fn select<'a, T>(&self, items: &'a [T]) -> Vec<&'a T> {
        self.positions.iter().map(|&p| &items[p]).collect()
    }
}

/// Choose `size` distinct positions out of `0..population`.
pub fn choose_indices<R>(
    population: usize,
    size: usize,
    rng: &mut R,
) -> Result<IndexSample, AlgorithmError>
where
    R: Rng + ?Sized,
{
    if size > population {
        return Err(AlgorithmError::PopulationTooSmall {
            size,
            got: population,
        });
    }

    // Virtual array 0..population; only displaced entries are stored
    #[cfg(feature = "std")]
    let mut displaced: HashMap<usize, usize> = HashMap::with_capacity(size);
    #[cfg(not(feature = "std"))]
    let mut displaced: BTreeMap<usize, usize> = BTreeMap::new();
    let mut positions = Vec::with_capacity(size);

    for i in 0..size {
        let j = rng.random_range(i..population);
        let at_i = displaced.get(&i).copied().unwrap_or(i);
        let at_j = displaced.get(&j).copied().unwrap_or(j);
        positions.push(at_j);
        displaced.insert(j, at_i);
    }

    Ok(IndexSample { positions })
}

// ============================================================================
// Convenience
// ============================================================================

/// Sample `size` items from an iterator of unknown length.
pub fn sample_iter<I, R>(iter: I, size: usize, rng: R) -> Result<Vec<I::Item>, AlgorithmError>
where
    I: IntoIterator,
    R: Rng,
{
    tracing::debug!(size, mode = "reservoir", "sampling");
    let mut reservoir = Reservoir::new(size, rng);
    reservoir.extend(iter);
    reservoir.finish()
}

/// Sample `size` elements of a slice by reference.
pub fn sample_slice<'a, T, R>(
    items: &'a [T],
    size: usize,
    rng: &mut R,
) -> Result<Vec<&'a T>, AlgorithmError>
where
    R: Rng + ?Sized,
{
    tracing::debug!(size, population = items.len(), mode = "known_length", "sampling");
    Ok(choose_indices(items.len(), size, rng)?.select(items))
}
