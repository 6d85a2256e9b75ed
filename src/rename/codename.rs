//! Codename generation.
//!
//! A codename is one word from each of three pools, concatenated without
//! separators (`Nova` + `Echo` + `IX`). Draws come from an MT19937 stream
//! seeded and sampled the way CPython's `random.Random(seed).choice` is, so a
//! seed produces the same codenames as the scripts these tools replaced.

use std::collections::HashSet;

use rand_mt::Mt;

use crate::error::{Error, Result};

/// Leading words.
pub const PREFIXES: [&str; 26] = [
    "Astra", "Nova", "Vanta", "Orion", "Lyra", "Cyra", "Kairo", "Zara", "Nyx", "Helio", "Talon",
    "Sable", "Eon", "Vex", "Arden", "Riven", "Mira", "Sol", "Dax", "Kestrel", "Juno", "Axiom",
    "Vega", "Drift", "Quanta", "Zephyr",
];

/// Middle words.
pub const CORES: [&str; 21] = [
    "Specter", "Cipher", "Strider", "Warden", "Nomad", "Sentinel", "Vanguard", "Echo", "Pulse",
    "Shard", "Raptor", "Vector", "Catalyst", "Mirage", "Harbinger", "Lancer", "Rook", "Falcon",
    "Nexus", "Circuit", "Phantom",
];

/// Trailing words.
pub const SUFFIXES: [&str; 16] = [
    "IX", "VII", "Prime", "MkII", "MkIII", "Sigma", "Kappa", "Delta", "Zero", "One", "Nine",
    "Void", "Drake", "Rune", "Core", "Arc",
];

/// Draws codenames that are unique within one generator's lifetime.
pub struct CodenameGenerator {
    rng: Mt,
    used: HashSet<String>,
}

impl CodenameGenerator {
    /// Create a generator seeded with `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mt::new_with_key(seed_key(seed)),
            used: HashSet::new(),
        }
    }

    /// Total number of distinct draws the pools allow.
    pub fn capacity() -> usize {
        PREFIXES.len() * CORES.len() * SUFFIXES.len()
    }

    /// Uniform index in `0..n`: take the top `bit_length(n)` bits of one
    /// output word and reject values `>= n`.
    fn below(&mut self, n: usize) -> usize {
        let bits = usize::BITS - n.leading_zeros();
        loop {
            let r = (self.rng.next_u32() >> (32 - bits)) as usize;
            if r < n {
                return r;
            }
        }
    }

    /// Draw one candidate without reserving it.
    fn draw(&mut self) -> String {
        let prefix = PREFIXES[self.below(PREFIXES.len())];
        let core = CORES[self.below(CORES.len())];
        let suffix = SUFFIXES[self.below(SUFFIXES.len())];
        format!("{}{}{}", prefix, core, suffix)
    }

    /// Draw until a candidate not yet handed out comes up, then reserve it.
    pub fn next_unique(&mut self) -> Result<String> {
        if self.used.len() >= Self::capacity() {
            return Err(Error::CodenamesExhausted(self.used.len()));
        }

        let mut name = self.draw();
        while self.used.contains(&name) {
            tracing::debug!("Codename {} already used, redrawing", name);
            name = self.draw();
        }

        self.used.insert(name.clone());
        Ok(name)
    }
}

/// Split a seed into little-endian 32-bit key words, dropping a zero high word.
fn seed_key(seed: u64) -> Vec<u32> {
    let low = seed as u32;
    let high = (seed >> 32) as u32;
    if high == 0 {
        vec![low]
    } else {
        vec![low, high]
    }
}
