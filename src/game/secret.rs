//! Secret number draws
//!
//! The evaluator never calls an RNG directly; it asks a `SecretSource`, so
//! play uses the thread RNG while tests pin the secret or seed the RNG.

use rand::rngs::ThreadRng;
use rand::Rng;

/// Produces the secret number for a round
pub trait SecretSource {
    /// Draw a value uniformly from `min..=max`
    fn draw(&mut self, min: u32, max: u32) -> u32;
}

/// Uniform draws from any `rand` RNG
#[derive(Clone, Debug)]
pub struct RandomSecret<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomSecret<R> {
    pub fn new(rng: R) -> Self {
        RandomSecret { rng }
    }
}

impl RandomSecret<ThreadRng> {
    /// Draws backed by the thread-local RNG
    pub fn thread() -> Self {
        Self::new(rand::thread_rng())
    }
}

impl<R: Rng> SecretSource for RandomSecret<R> {
    fn draw(&mut self, min: u32, max: u32) -> u32 {
        self.rng.gen_range(min..=max)
    }
}

/// Always yields the same secret
#[cfg(test)]
#[derive(Clone, Copy, Debug)]
pub struct FixedSecret(pub u32);

#[cfg(test)]
impl SecretSource for FixedSecret {
    fn draw(&mut self, _min: u32, _max: u32) -> u32 {
        self.0
    }
}
