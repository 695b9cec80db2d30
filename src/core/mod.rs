pub mod adapter;
pub mod camera;
pub mod clock;
pub mod constants;
pub mod error;
pub mod integrator;
pub mod particles;
pub mod session;
pub mod shapes;
pub mod stars;
pub mod transition;

pub use adapter::*;
pub use camera::*;
pub use clock::*;
pub use constants::*;
pub use error::*;
pub use integrator::{advance, approach_factor, ease_out_cubic, float_offset};
pub use particles::*;
pub use session::*;
pub use shapes::*;
pub use stars::*;
pub use transition::*;

// Shaders bundled as string constants
pub static PARTICLES_WGSL: &str = include_str!("../../shaders/particles.wgsl");
pub static STARS_WGSL: &str = include_str!("../../shaders/stars.wgsl");
