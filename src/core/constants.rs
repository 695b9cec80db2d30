// Shape, particle and animation tuning constants shared by the core and the web frontend.

// Particle count configuration
pub const DEFAULT_PARTICLE_COUNT: usize = 10_000;
pub const MIN_PARTICLE_COUNT: usize = 1_000;
pub const MAX_PARTICLE_COUNT: usize = 20_000;
pub const DEFAULT_TWINKLE_SPEED: f32 = 5.0;

// Tree silhouette
pub const TREE_HEIGHT: f32 = 15.0;
pub const TREE_BASE_RADIUS: f32 = 6.0;
pub const TREE_LAYERS: usize = 8;
pub const TREE_TRUNK_HEIGHT: f32 = 2.0;
pub const TREE_TRUNK_RADIUS_MIN: f32 = 0.3;
pub const TREE_TRUNK_RADIUS_SPAN: f32 = 0.3;
pub const TREE_TRUNK_FRACTION: f32 = 0.3; // of the per-layer quota
pub const TREE_LAYER_RADIUS_JITTER: f32 = 0.4; // layer radius scaled by 0.8..1.2
pub const TREE_LAYER_Y_JITTER: f32 = 0.8;
pub const TREE_STAR_FRACTION: f32 = 0.5;
pub const TREE_STAR_RADIUS: f32 = 1.5;
pub const TREE_STAR_SQUASH: f32 = 0.3;
pub const TREE_SPIRALS: usize = 3;
pub const TREE_SPIRAL_FRACTION: f32 = 0.3;
pub const TREE_SPIRAL_TURNS_RAD: f32 = std::f32::consts::PI * 6.0;
pub const TREE_SPIRAL_RADIUS_SCALE: f32 = 0.9;

// "I ❤ U" glyph
pub const GLYPH_SCALE: f32 = 8.0;
pub const GLYPH_LETTER_SPACING: f32 = 4.0;
pub const GLYPH_I_FRACTION: f32 = 0.15;
pub const GLYPH_HEART_OUTLINE_FRACTION: f32 = 0.5;
pub const GLYPH_HEART_INTERIOR_FRACTION: f32 = 0.15;
pub const GLYPH_U_FRACTION: f32 = 0.2;
pub const HEART_CURVE_SCALE: f32 = 0.15;
pub const HEART_OUTLINE_JITTER: f32 = 3.0;
pub const U_WIDTH: f32 = 1.8;
pub const U_HEIGHT_RATIO: f32 = 0.8; // of GLYPH_SCALE
pub const U_BASELINE_RATIO: f32 = 0.3; // of the U height, below the origin
pub const U_LEFT_STROKE_P: f32 = 0.35;
pub const U_RIGHT_STROKE_P: f32 = 0.70;
pub const U_ARC_SQUASH: f32 = 0.6;
pub const U_JITTER: f32 = 0.4;
pub const GLYPH_PAD_JITTER: f32 = 0.5;

// Particle store initial "explosion" and per-particle attributes
pub const EXPLOSION_CUBE_SIDE: f32 = 50.0;
pub const PARTICLE_SIZE_MIN: f32 = 0.1;
pub const PARTICLE_SIZE_SPAN: f32 = 0.3;

// Firefly palette
pub const PALETTE: [[f32; 3]; 8] = [
    [1.0, 0.2, 0.3], // red
    [0.0, 1.0, 0.5], // green
    [1.0, 0.8, 0.0], // yellow
    [0.0, 0.8, 1.0], // blue
    [1.0, 0.4, 0.7], // pink
    [0.8, 0.0, 1.0], // purple
    [1.0, 0.5, 0.0], // orange
    [1.0, 1.0, 1.0], // sparkling white
];

// Transition timing
pub const TRANSITION_SPEED_ACTIVE: f32 = 2.0; // progress per second while morphing
pub const TRANSITION_SPEED_IDLE: f32 = 0.5; // progress per second once settled
pub const APPROACH_RATE: f32 = 3.0; // exponential approach rate at full ease
pub const AUTO_CYCLE_INTERVAL_SEC: f64 = 5.0;

// Floating jitter
pub const JITTER_AMPLITUDE: f32 = 0.05;
pub const JITTER_FREQUENCY: [f64; 3] = [0.5, 0.3, 0.4];
pub const JITTER_INDEX_PHASE: [f64; 3] = [0.01, 0.01, 0.02];

// Background starfield
pub const STAR_COUNT: usize = 2_000;
pub const STAR_RADIUS_MIN: f32 = 50.0;
pub const STAR_RADIUS_SPAN: f32 = 100.0;
pub const STAR_SIZE: f32 = 0.3;
pub const STAR_OPACITY: f32 = 0.8;

// Scene atmosphere (#0a0a1a)
pub const BACKGROUND_RGB: [f32; 3] = [10.0 / 255.0, 10.0 / 255.0, 26.0 / 255.0];
pub const FOG_DENSITY: f32 = 0.015;

// Camera and orbit controls
pub const CAMERA_EYE: [f32; 3] = [0.0, 5.0, 25.0];
pub const CAMERA_FOVY_DEG: f32 = 60.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;
pub const ORBIT_DAMPING: f32 = 0.05;
pub const ORBIT_AUTO_ROTATE_SPEED: f32 = 0.5; // 2π/60 rad per second at speed 1
pub const ORBIT_MIN_DISTANCE: f32 = 10.0;
pub const ORBIT_MAX_DISTANCE: f32 = 50.0;
pub const ORBIT_ZOOM_STEP: f32 = 0.95;
pub const ORBIT_POLAR_EPSILON: f32 = 1e-6;

// Glow sprite sizing (pixels per world unit at unit depth)
pub const PARTICLE_POINT_SCALE: f32 = 300.0;
