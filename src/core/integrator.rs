use super::constants::{APPROACH_RATE, JITTER_AMPLITUDE, JITTER_FREQUENCY, JITTER_INDEX_PHASE};
use super::particles::ParticleStore;
use super::shapes::ShapeTargetSet;
use super::transition::TransitionController;
use glam::Vec3;

/// Cubic ease-out of transition progress.
#[inline]
pub fn ease_out_cubic(progress: f32) -> f32 {
    1.0 - (1.0 - progress.clamp(0.0, 1.0)).powi(3)
}

/// Fraction of the remaining distance covered this frame.
///
/// Closed form of a continuous approach at `APPROACH_RATE * ease` per second;
/// matches `ease * delta * APPROACH_RATE` for small steps and never overshoots.
#[inline]
pub fn approach_factor(ease: f32, delta: f32) -> f32 {
    1.0 - (-APPROACH_RATE * ease * delta.max(0.0)).exp()
}

/// Organic floating offset for particle `index` at `elapsed` seconds.
#[inline]
pub fn float_offset(index: usize, elapsed: f64) -> Vec3 {
    let i = index as f64;
    let amp = JITTER_AMPLITUDE as f64;
    Vec3::new(
        ((elapsed * JITTER_FREQUENCY[0] + i * JITTER_INDEX_PHASE[0]).sin() * amp) as f32,
        ((elapsed * JITTER_FREQUENCY[1] + i * JITTER_INDEX_PHASE[1]).cos() * amp) as f32,
        ((elapsed * JITTER_FREQUENCY[2] + i * JITTER_INDEX_PHASE[2]).sin() * amp) as f32,
    )
}

/// Advance the morph by `delta` seconds.
///
/// Ticks the controller, eases every particle toward its slot in the active
/// shape and writes `current + jitter` into the render-facing buffer. A
/// missing target slot is treated as the origin.
pub fn advance(
    particles: &mut ParticleStore,
    transition: &mut TransitionController,
    targets: &ShapeTargetSet,
    delta: f32,
    elapsed: f64,
) {
    transition.tick(delta);
    let ease = ease_out_cubic(transition.progress());
    let k = approach_factor(ease, delta);
    let target_shape = targets.get(transition.active_shape());

    let (current, rendered) = particles.positions_mut();
    for (i, (pos, out)) in current.iter_mut().zip(rendered.iter_mut()).enumerate() {
        let target = target_shape.get(i).copied().unwrap_or(Vec3::ZERO);
        *pos += (target - *pos) * k;
        *out = *pos + float_offset(i, elapsed);
    }
}
