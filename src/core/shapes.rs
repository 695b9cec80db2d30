use super::constants::*;
use super::error::SceneError;
use glam::Vec3;
use rand::Rng;
use std::f32::consts::{PI, TAU};
use std::fmt;

/// Identifier of a target silhouette.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeId {
    Tree,
    Heart,
}

impl ShapeId {
    pub const ALL: [ShapeId; 2] = [ShapeId::Tree, ShapeId::Heart];

    pub fn as_str(self) -> &'static str {
        match self {
            ShapeId::Tree => "tree",
            ShapeId::Heart => "heart",
        }
    }

    /// The shape an alternating cycle moves to next.
    pub fn other(self) -> ShapeId {
        match self {
            ShapeId::Tree => ShapeId::Heart,
            ShapeId::Heart => ShapeId::Tree,
        }
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Generate exactly `count` points approximating `shape`.
pub fn generate<R: Rng + ?Sized>(shape: ShapeId, count: usize, rng: &mut R) -> Vec<Vec3> {
    match shape {
        ShapeId::Tree => generate_tree(count, rng),
        ShapeId::Heart => generate_heart(count, rng),
    }
}

/// Target point clouds for every shape, all of the same length.
#[derive(Clone, Debug)]
pub struct ShapeTargetSet {
    tree: Vec<Vec3>,
    heart: Vec<Vec3>,
}

impl ShapeTargetSet {
    /// Generate both silhouettes for `count` particles.
    ///
    /// Fails when a generator does not return exactly `count` points; callers
    /// must not commit a partially valid set.
    pub fn generate<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Result<Self, SceneError> {
        let tree = checked(ShapeId::Tree, generate(ShapeId::Tree, count, rng), count)?;
        let heart = checked(ShapeId::Heart, generate(ShapeId::Heart, count, rng), count)?;
        Ok(Self { tree, heart })
    }

    pub fn get(&self, shape: ShapeId) -> &[Vec3] {
        match shape {
            ShapeId::Tree => &self.tree,
            ShapeId::Heart => &self.heart,
        }
    }

    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }
}

fn checked(shape: ShapeId, points: Vec<Vec3>, expected: usize) -> Result<Vec<Vec3>, SceneError> {
    if points.len() == expected {
        Ok(points)
    } else {
        Err(SceneError::TargetCountMismatch {
            shape,
            expected,
            actual: points.len(),
        })
    }
}

#[inline]
fn centered<R: Rng + ?Sized>(rng: &mut R, span: f32) -> f32 {
    (rng.gen::<f32>() - 0.5) * span
}

#[inline]
fn on_ring(angle: f32, radius: f32, y: f32) -> Vec3 {
    Vec3::new(angle.cos() * radius, y, angle.sin() * radius)
}

/// Number of loop iterations `i` with `i < quota * fraction`.
#[inline]
fn fraction_count(quota: usize, fraction: f32) -> usize {
    (quota as f32 * fraction).ceil() as usize
}

/// Layered cone: trunk, canopy layers, star, decorative spirals, then a
/// volume filler that tops up to `count` inside the cone envelope.
pub fn generate_tree<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Vec3> {
    let mut points = Vec::with_capacity(count);
    let half_h = TREE_HEIGHT / 2.0;
    let quota = count / (TREE_LAYERS + 2);

    // Trunk
    for _ in 0..fraction_count(quota, TREE_TRUNK_FRACTION) {
        let y = -half_h + rng.gen::<f32>() * TREE_TRUNK_HEIGHT;
        let angle = rng.gen::<f32>() * TAU;
        let radius = TREE_TRUNK_RADIUS_MIN + rng.gen::<f32>() * TREE_TRUNK_RADIUS_SPAN;
        points.push(on_ring(angle, radius, y));
    }

    // Canopy layers, shrinking toward the apex
    let canopy_base = -half_h + TREE_TRUNK_HEIGHT;
    let canopy_span = TREE_HEIGHT - TREE_TRUNK_HEIGHT;
    for layer in 0..TREE_LAYERS {
        let frac = layer as f32 / TREE_LAYERS as f32;
        let layer_y = canopy_base + frac * canopy_span;
        let layer_radius = TREE_BASE_RADIUS
            * (1.0 - frac)
            * (1.0 - TREE_LAYER_RADIUS_JITTER / 2.0 + rng.gen::<f32>() * TREE_LAYER_RADIUS_JITTER);
        let in_layer = (quota as f32 * (1.0 - frac * 0.5)).floor() as usize;
        for _ in 0..in_layer {
            let angle = rng.gen::<f32>() * TAU;
            let r = rng.gen::<f32>() * layer_radius;
            let y = layer_y + centered(rng, TREE_LAYER_Y_JITTER);
            points.push(on_ring(angle, r, y));
        }
    }

    // Star cluster above the apex
    let star_y = half_h + 1.0;
    for _ in 0..fraction_count(quota, TREE_STAR_FRACTION) {
        let angle = rng.gen::<f32>() * TAU;
        let r = rng.gen::<f32>() * TREE_STAR_RADIUS * TREE_STAR_SQUASH;
        let y = star_y + centered(rng, 1.0);
        points.push(on_ring(angle, r, y));
    }

    // Helical garlands
    let per_spiral = quota as f32 * TREE_SPIRAL_FRACTION;
    let spiral_base = -half_h + TREE_TRUNK_HEIGHT;
    let spiral_span = TREE_HEIGHT - 2.0 * TREE_TRUNK_HEIGHT;
    for s in 0..TREE_SPIRALS {
        let offset = s as f32 / TREE_SPIRALS as f32 * TAU;
        for i in 0..fraction_count(quota, TREE_SPIRAL_FRACTION) {
            let t = i as f32 / per_spiral;
            let y = spiral_base + t * spiral_span;
            let radius = TREE_BASE_RADIUS * (1.0 - t) * TREE_SPIRAL_RADIUS_SCALE;
            let angle = offset + t * TREE_SPIRAL_TURNS_RAD;
            points.push(on_ring(angle, radius, y));
        }
    }

    // Volume filler within the cone
    while points.len() < count {
        let y = -half_h + rng.gen::<f32>() * TREE_HEIGHT;
        let max_r = TREE_BASE_RADIUS * (1.0 - (y + half_h) / TREE_HEIGHT);
        let angle = rng.gen::<f32>() * TAU;
        let r = rng.gen::<f32>() * max_r;
        points.push(on_ring(angle, r, y));
    }

    points
}

/// Classic heart curve, `t` in radians, unscaled (x spans roughly ±16).
#[inline]
pub fn heart_curve(t: f32) -> (f32, f32) {
    let x = 16.0 * t.sin().powi(3);
    let y = 13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos();
    (x, y)
}

/// "I ❤ U": a vertical bar, a volumetric heart outline, a filled heart
/// interior and a U built from two strokes and a bottom arc.
pub fn generate_heart<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Vec3> {
    let mut points = Vec::with_capacity(count);
    let share = |fraction: f32| (count as f32 * fraction).floor() as usize;

    // "I"
    let i_x = -GLYPH_LETTER_SPACING * 1.5;
    for _ in 0..share(GLYPH_I_FRACTION) {
        points.push(Vec3::new(
            i_x + centered(rng, 1.0),
            centered(rng, GLYPH_SCALE),
            centered(rng, 1.0),
        ));
    }

    // Heart outline swept once around the curve
    let outline = share(GLYPH_HEART_OUTLINE_FRACTION);
    for i in 0..outline {
        let t = i as f32 / outline as f32 * TAU;
        let depth = 0.5 + rng.gen::<f32>() * 0.5;
        let (hx, hy) = heart_curve(t);
        let hx = hx + centered(rng, HEART_OUTLINE_JITTER);
        let hy = hy + centered(rng, HEART_OUTLINE_JITTER);
        let hz = centered(rng, HEART_OUTLINE_JITTER);
        points.push(Vec3::new(
            hx * HEART_CURVE_SCALE * depth,
            hy * HEART_CURVE_SCALE * depth,
            hz * depth,
        ));
    }

    // Heart interior
    for _ in 0..share(GLYPH_HEART_INTERIOR_FRACTION) {
        let t = rng.gen::<f32>() * TAU;
        let r = rng.gen::<f32>();
        let (hx, hy) = heart_curve(t);
        points.push(Vec3::new(
            hx * r * HEART_CURVE_SCALE,
            hy * r * HEART_CURVE_SCALE,
            centered(rng, 2.0),
        ));
    }

    // "U"
    let u_height = GLYPH_SCALE * U_HEIGHT_RATIO;
    let u_baseline = -u_height * U_BASELINE_RATIO;
    let u_center_x = GLYPH_LETTER_SPACING * 1.5;
    let half_w = U_WIDTH / 2.0;
    for _ in 0..share(GLYPH_U_FRACTION) {
        let region = rng.gen::<f32>();
        let (x, y) = if region < U_LEFT_STROKE_P {
            (u_center_x - half_w, rng.gen::<f32>() * u_height + u_baseline)
        } else if region < U_RIGHT_STROKE_P {
            (u_center_x + half_w, rng.gen::<f32>() * u_height + u_baseline)
        } else {
            let angle = PI + rng.gen::<f32>() * PI;
            (
                u_center_x + angle.cos() * half_w,
                u_baseline + angle.sin() * half_w * U_ARC_SQUASH,
            )
        };
        points.push(Vec3::new(
            x + centered(rng, U_JITTER),
            y + centered(rng, U_JITTER),
            centered(rng, 1.0),
        ));
    }

    // Pad by cloning existing points with a small offset
    while points.len() < count {
        let base = if points.is_empty() {
            Vec3::ZERO
        } else {
            points[rng.gen_range(0..points.len())]
        };
        points.push(
            base + Vec3::new(
                centered(rng, GLYPH_PAD_JITTER),
                centered(rng, GLYPH_PAD_JITTER),
                centered(rng, GLYPH_PAD_JITTER),
            ),
        );
    }

    points
}
