//! Call-scoped random number generators.
//!
//! Randomized algorithms never reach for a global generator. Each call owns
//! one [`StdRng`], either seeded from the caller's value (fully reproducible)
//! or freshly seeded from operating-system entropy, so independent calls can
//! run concurrently without sharing state.

// External dependencies
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Build the generator for a single call.
pub fn call_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}
