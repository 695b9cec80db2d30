use super::constants::*;
use super::error::SceneError;
use super::integrator;
use super::particles::ParticleStore;
use super::shapes::{ShapeId, ShapeTargetSet};
use super::stars::Starfield;
use super::transition::{AutoCycle, TransitionController};
use rand::prelude::*;

/// User-facing scene configuration.
///
/// - `particle_count`: number of particles, `MIN_PARTICLE_COUNT..=MAX_PARTICLE_COUNT`
/// - `twinkle_speed`: forwarded untouched to the renderer
/// - `auto_cycle_interval_sec`: period of the tree/heart alternation
/// - `seed`: fixed RNG seed for reproducible geometry, entropy when `None`
#[derive(Clone, Debug, PartialEq)]
pub struct SceneParams {
    pub particle_count: usize,
    pub twinkle_speed: f32,
    pub auto_cycle_interval_sec: f64,
    pub seed: Option<u64>,
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            particle_count: DEFAULT_PARTICLE_COUNT,
            twinkle_speed: DEFAULT_TWINKLE_SPEED,
            auto_cycle_interval_sec: AUTO_CYCLE_INTERVAL_SEC,
            seed: None,
        }
    }
}

pub fn validate_particle_count(count: usize) -> Result<usize, SceneError> {
    if (MIN_PARTICLE_COUNT..=MAX_PARTICLE_COUNT).contains(&count) {
        Ok(count)
    } else {
        Err(SceneError::ParticleCountOutOfRange {
            count,
            min: MIN_PARTICLE_COUNT,
            max: MAX_PARTICLE_COUNT,
        })
    }
}

/// Everything the morph animation owns: configuration, randomness, target
/// shapes, particles, transition state, auto-cycle timer and the starfield.
///
/// UI handlers and the frame loop share one `Session` and call into it
/// explicitly; nothing lives in globals.
pub struct Session {
    params: SceneParams,
    rng: StdRng,
    targets: ShapeTargetSet,
    particles: ParticleStore,
    transition: TransitionController,
    auto_cycle: AutoCycle,
    starfield: Starfield,
    generation: u64,
    elapsed: f64,
}

impl Session {
    pub fn new(params: SceneParams) -> Result<Self, SceneError> {
        let rng = match params.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(params, rng)
    }

    /// Build a session drawing all randomness from `rng`.
    pub fn with_rng(params: SceneParams, mut rng: StdRng) -> Result<Self, SceneError> {
        let count = validate_particle_count(params.particle_count)?;
        let starfield = Starfield::generate(STAR_COUNT, &mut rng);
        let targets = ShapeTargetSet::generate(count, &mut rng)?;
        let particles = ParticleStore::initialize(count, &mut rng);
        log::info!(
            "[scene] created {} particles, {} stars",
            particles.len(),
            starfield.len()
        );
        Ok(Self {
            auto_cycle: AutoCycle::new(params.auto_cycle_interval_sec),
            params,
            rng,
            targets,
            particles,
            transition: TransitionController::transitioning_to(ShapeId::Tree),
            starfield,
            generation: 0,
            elapsed: 0.0,
        })
    }

    pub fn params(&self) -> &SceneParams {
        &self.params
    }

    pub fn particle_count(&self) -> usize {
        self.params.particle_count
    }

    pub fn particles(&self) -> &ParticleStore {
        &self.particles
    }

    pub fn targets(&self) -> &ShapeTargetSet {
        &self.targets
    }

    pub fn transition(&self) -> &TransitionController {
        &self.transition
    }

    pub fn starfield(&self) -> &Starfield {
        &self.starfield
    }

    pub fn active_shape(&self) -> ShapeId {
        self.transition.active_shape()
    }

    pub fn auto_cycle_enabled(&self) -> bool {
        self.auto_cycle.enabled()
    }

    /// Incremented every time particles and targets are rebuilt.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Elapsed time seen by the last `advance`.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn twinkle_speed(&self) -> f32 {
        self.params.twinkle_speed
    }

    pub fn set_twinkle_speed(&mut self, speed: f32) {
        self.params.twinkle_speed = speed;
    }

    /// Rebuild targets and particles for `count` particles.
    ///
    /// All-or-nothing: on error the previous state is untouched. On success
    /// any running morph is discarded and particles explode back into the
    /// tree.
    pub fn set_particle_count(&mut self, count: usize) -> Result<(), SceneError> {
        let count = validate_particle_count(count)?;
        let targets = ShapeTargetSet::generate(count, &mut self.rng)?;
        let particles = ParticleStore::initialize(count, &mut self.rng);

        self.targets = targets;
        self.particles = particles;
        self.params.particle_count = count;
        self.transition = TransitionController::transitioning_to(ShapeId::Tree);
        self.generation += 1;
        log::info!(
            "[scene] regenerated {} particles (generation {})",
            count,
            self.generation
        );
        Ok(())
    }

    /// Request a morph toward `shape`; dropped while another morph runs.
    pub fn select_shape(&mut self, shape: ShapeId) -> bool {
        let accepted = self.transition.select_shape(shape);
        if accepted {
            log::info!("[scene] morphing to {}", shape);
        } else {
            log::debug!("[scene] ignored {} while morphing", shape);
        }
        accepted
    }

    /// Explicit user choice of a shape: stops auto-cycling, then selects.
    pub fn show_shape(&mut self, shape: ShapeId) -> bool {
        self.auto_cycle.disable();
        self.select_shape(shape)
    }

    /// Flip auto-cycle mode. A running morph is never interrupted.
    pub fn toggle_auto_cycle(&mut self) -> bool {
        let enabled = self.auto_cycle.toggle(self.elapsed);
        log::info!("[scene] auto cycle {}", if enabled { "on" } else { "off" });
        enabled
    }

    /// Per-frame step: fire a due auto-cycle, then integrate particles.
    pub fn advance(&mut self, delta: f32, elapsed: f64) {
        self.elapsed = elapsed;
        if self.auto_cycle.poll(elapsed) {
            let next = self.transition.active_shape().other();
            self.select_shape(next);
        }
        integrator::advance(
            &mut self.particles,
            &mut self.transition,
            &self.targets,
            delta,
            elapsed,
        );
    }
}
