use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of randomness for scheme generation.
///
/// Generators only ever ask for uniform floats and bounded integers, so tests
/// can script exact values while production draws from a real PRNG.
pub trait Entropy {
    /// Uniform float in [0, 1).
    fn random_float(&mut self) -> f64;

    /// Uniform integer in [0, n). Returns 0 when `n` is 0.
    fn random_int(&mut self, n: usize) -> usize;

    /// `random_float() * span`, shorthand for jitter ranges.
    fn jitter(&mut self, span: f64) -> f64 {
        self.random_float() * span
    }

    /// Symmetric jitter in [-span/2, span/2).
    fn centered(&mut self, span: f64) -> f64 {
        (self.random_float() - 0.5) * span
    }
}

/// Production entropy backed by `StdRng`.
///
/// Each generation builds its own instance, so concurrent callers never share
/// generator state.
#[derive(Debug, Clone)]
pub struct SystemEntropy {
    rng: StdRng,
}

impl SystemEntropy {
    /// Seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible stream for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for SystemEntropy {
    fn default() -> Self {
        Self::new()
    }
}

impl Entropy for SystemEntropy {
    fn random_float(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    fn random_int(&mut self, n: usize) -> usize {
        if n == 0 {
            return 0;
        }
        self.rng.gen_range(0..n)
    }
}

/// Scripted entropy that replays a fixed list of floats in a loop.
///
/// Integers are derived from the same stream so name generation stays
/// deterministic too.
#[derive(Debug, Clone)]
pub struct ScriptedEntropy {
    values: Vec<f64>,
    cursor: usize,
}

impl ScriptedEntropy {
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        let mut values = values.into();
        if values.is_empty() {
            values.push(0.0);
        }
        for v in &mut values {
            *v = v.clamp(0.0, 1.0 - f64::EPSILON);
        }
        Self { values, cursor: 0 }
    }

    /// Every draw returns `value`.
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }
}

impl Entropy for ScriptedEntropy {
    fn random_float(&mut self) -> f64 {
        let v = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        v
    }

    fn random_int(&mut self, n: usize) -> usize {
        if n == 0 {
            return 0;
        }
        ((self.random_float() * n as f64) as usize).min(n - 1)
    }
}
