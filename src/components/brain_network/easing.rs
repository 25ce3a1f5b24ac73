//! Timing curves used by the frame-driven animations.

use std::f64::consts::PI;

/// Cubic ease-in-out: `4t³` for the first half, mirrored for the second.
pub fn ease_in_out_cubic(t: f64) -> f64 {
	if t < 0.5 {
		4.0 * t * t * t
	} else {
		1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
	}
}

/// Cubic ease-out, fast start and slow finish.
pub fn ease_out_cubic(t: f64) -> f64 {
	1.0 - (1.0 - t).powi(3)
}

/// Linear interpolation from `a` to `b`.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
	a + (b - a) * t
}

/// Radius that swells by half mid-flight and returns to `base` at both ends.
pub fn pulse_radius(base: f64, progress: f64) -> f64 {
	base * (1.0 + 0.5 * (PI * progress).sin())
}

/// Fraction of `duration` elapsed since `start`, clamped to `[0, 1]`.
pub fn progress(start: f64, duration: f64, now: f64) -> f64 {
	if duration <= 0.0 {
		return 1.0;
	}
	((now - start) / duration).clamp(0.0, 1.0)
}
