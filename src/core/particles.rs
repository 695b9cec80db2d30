use super::constants::{EXPLOSION_CUBE_SIDE, PALETTE, PARTICLE_SIZE_MIN, PARTICLE_SIZE_SPAN};
use glam::Vec3;
use rand::prelude::*;
use std::f32::consts::TAU;

/// Read-only view of a single particle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub index: usize,
    pub position: Vec3,
    pub color: Vec3,
    pub size: f32,
    pub phase: f32,
}

/// Struct-of-arrays particle state.
///
/// `current` holds the integrated, jitter-free positions. `rendered` is the
/// render-facing buffer (current plus floating jitter) rewritten every frame.
/// Colors, sizes and phases are fixed for the lifetime of the store; changing
/// the particle count means building a new store.
#[derive(Clone, Debug)]
pub struct ParticleStore {
    current: Vec<Vec3>,
    rendered: Vec<Vec3>,
    colors: Vec<Vec3>,
    sizes: Vec<f32>,
    phases: Vec<f32>,
}

impl ParticleStore {
    /// Scatter `count` particles through the explosion cube and assign each a
    /// palette color, a base size and a twinkle phase.
    pub fn initialize<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Self {
        let mut current = Vec::with_capacity(count);
        let mut colors = Vec::with_capacity(count);
        let mut sizes = Vec::with_capacity(count);
        let mut phases = Vec::with_capacity(count);
        for _ in 0..count {
            current.push(Vec3::new(
                (rng.gen::<f32>() - 0.5) * EXPLOSION_CUBE_SIDE,
                (rng.gen::<f32>() - 0.5) * EXPLOSION_CUBE_SIDE,
                (rng.gen::<f32>() - 0.5) * EXPLOSION_CUBE_SIDE,
            ));
            let rgb = PALETTE.choose(rng).copied().unwrap_or([1.0; 3]);
            colors.push(Vec3::from_array(rgb));
            sizes.push(PARTICLE_SIZE_MIN + rng.gen::<f32>() * PARTICLE_SIZE_SPAN);
            phases.push(rng.gen::<f32>() * TAU);
        }
        let rendered = current.clone();
        Self {
            current,
            rendered,
            colors,
            sizes,
            phases,
        }
    }

    pub fn len(&self) -> usize {
        self.current.len()
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Particle> {
        Some(Particle {
            index,
            position: *self.current.get(index)?,
            color: self.colors[index],
            size: self.sizes[index],
            phase: self.phases[index],
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = Particle> + '_ {
        (0..self.len()).filter_map(move |i| self.get(i))
    }

    /// Integrated positions without jitter.
    pub fn current(&self) -> &[Vec3] {
        &self.current
    }

    /// Positions as last written for rendering.
    pub fn rendered(&self) -> &[Vec3] {
        &self.rendered
    }

    /// Flat `[x, y, z, ...]` view of the render-facing positions (length 3n).
    pub fn position_array(&self) -> &[f32] {
        bytemuck::cast_slice(&self.rendered)
    }

    /// Flat `[r, g, b, ...]` view of the base colors (length 3n).
    pub fn color_array(&self) -> &[f32] {
        bytemuck::cast_slice(&self.colors)
    }

    pub fn sizes(&self) -> &[f32] {
        &self.sizes
    }

    pub fn phases(&self) -> &[f32] {
        &self.phases
    }

    /// Mutable access to the integrated and render-facing position arrays.
    pub(super) fn positions_mut(&mut self) -> (&mut [Vec3], &mut [Vec3]) {
        (&mut self.current, &mut self.rendered)
    }
}
