//! Random source port
//!
//! The resolver draws every random choice through this trait so tests and
//! `--seed` runs are reproducible.

pub trait RandomSource: Send {
    /// Uniform index in `0..len`. Callers never pass `len == 0`.
    fn next_index(&mut self, len: usize) -> usize;

    /// Uniform value in `[0, 1]`
    fn next_unit(&mut self) -> f64;
}
