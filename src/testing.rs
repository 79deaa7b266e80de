//! Randomized test drivers shared by the module test suites.

use rand::Rng;
use rand::rngs::ThreadRng;

/// An operation a `Tester` can choose to perform.
pub trait TestOp: Copy + Clone {}

/// Drives one data structure through randomly chosen operations.
pub trait Tester {
  /// Chooses and performs a single operation, checking its result.
  fn execute_op(&mut self, rng: &mut ThreadRng);
}

/// Picks an operation from `ops`, weighted by the paired probability.
/// The weights are expected to sum to 1.0; the last operation absorbs any
/// rounding slack.
pub fn choose_op<O: TestOp>(rng: &mut ThreadRng, ops: &[(O, f64)]) -> O {
  let f: f64 = rng.gen();
  let mut acc = 0.0;

  for &(op, p) in ops {
    acc += p;
    if f < acc {
      return op;
    }
  }

  ops[ops.len() - 1].0
}

/// Generates `n` random arguments.
pub fn gen_args(rng: &mut ThreadRng, n: usize) -> Vec<i32> {
  (0..n).map(|_| rng.gen()).collect()
}

/// Generates a random index in `[0, bound)`.
pub fn gen_index(rng: &mut ThreadRng, bound: usize) -> usize {
  rng.gen_range(0..bound)
}

/// Runs `n_ops` random operations through the tester.
pub fn test_random_ops<T: Tester>(mut tester: T, n_ops: usize) {
  let mut rng = rand::thread_rng();

  for _ in 0..n_ops {
    tester.execute_op(&mut rng);
  }
}
