use super::constants::{STAR_RADIUS_MIN, STAR_RADIUS_SPAN};
use glam::Vec3;
use rand::Rng;
use std::f32::consts::TAU;

/// Static background stars on a thick spherical shell around the scene.
#[derive(Clone, Debug, Default)]
pub struct Starfield {
    pub positions: Vec<Vec3>,
    pub colors: Vec<Vec3>,
}

impl Starfield {
    pub fn generate<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Self {
        let mut positions = Vec::with_capacity(count);
        let mut colors = Vec::with_capacity(count);
        for _ in 0..count {
            let radius = STAR_RADIUS_MIN + rng.gen::<f32>() * STAR_RADIUS_SPAN;
            let theta = rng.gen::<f32>() * TAU;
            // acos of a uniform cosine gives an even spread over the sphere
            let phi = (rng.gen::<f32>() * 2.0 - 1.0).clamp(-1.0, 1.0).acos();
            positions.push(Vec3::new(
                radius * phi.sin() * theta.cos(),
                radius * phi.sin() * theta.sin(),
                radius * phi.cos(),
            ));

            let brightness = 0.5 + rng.gen::<f32>() * 0.5;
            colors.push(Vec3::new(
                brightness,
                brightness,
                brightness + rng.gen::<f32>() * 0.2,
            ));
        }
        Self { positions, colors }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
