//! Injectable randomness for weights, durations and effect targets.

/// Source of uniform values in `[0, 1)`. The provided helpers build on it.
pub trait RandomSource {
	/// Next uniform value in `[0, 1)`.
	fn next_f64(&mut self) -> f64;

	/// Uniform value in `[lo, hi)`.
	fn range(&mut self, lo: f64, hi: f64) -> f64 {
		lo + (hi - lo) * self.next_f64()
	}

	/// Uniform index in `0..len`. `len` must be non-zero.
	fn index(&mut self, len: usize) -> usize {
		((self.next_f64() * len as f64) as usize).min(len.saturating_sub(1))
	}

	/// Uniform integer in `lo..=hi`.
	fn between(&mut self, lo: usize, hi: usize) -> usize {
		if hi <= lo {
			return lo;
		}
		lo + self.index(hi - lo + 1)
	}

	/// `true` with probability `p`.
	fn chance(&mut self, p: f64) -> bool {
		self.next_f64() < p
	}

	/// `count` distinct indices from `0..len` (all of them if `count >= len`).
	fn pick_distinct(&mut self, len: usize, count: usize) -> Vec<usize> {
		let mut pool: Vec<usize> = (0..len).collect();
		let count = count.min(len);
		// Partial Fisher-Yates: the first `count` slots end up shuffled.
		for i in 0..count {
			let j = i + self.index(len - i);
			pool.swap(i, j);
		}
		pool.truncate(count);
		pool
	}
}

/// Browser randomness via `Math.random()`.
#[derive(Clone, Copy, Debug, Default)]
pub struct JsRandom;

impl RandomSource for JsRandom {
	fn next_f64(&mut self) -> f64 {
		js_sys::Math::random()
	}
}

/// Replays a fixed list of values, wrapping around at the end.
#[derive(Clone, Debug)]
pub struct SequenceRandom {
	values: Vec<f64>,
	pos: usize,
}

impl SequenceRandom {
	/// An empty list always yields `0.0`.
	pub fn new(values: Vec<f64>) -> Self {
		Self { values, pos: 0 }
	}
}

impl RandomSource for SequenceRandom {
	fn next_f64(&mut self) -> f64 {
		if self.values.is_empty() {
			return 0.0;
		}
		let value = self.values[self.pos % self.values.len()];
		self.pos += 1;
		value
	}
}
