use super::camera::OrbitCamera;
use super::session::Session;
use glam::Mat4;

/// Static per-particle attributes, uploaded once per generation.
#[derive(Clone, Copy, Debug)]
pub struct ParticleAttributes<'a> {
    /// `[r, g, b, ...]`, length 3n
    pub colors: &'a [f32],
    /// length n
    pub sizes: &'a [f32],
    /// twinkle phase in radians, length n
    pub phases: &'a [f32],
}

/// Everything a renderer needs to draw one frame.
#[derive(Clone, Copy, Debug)]
pub struct RenderFrame<'a> {
    /// `[x, y, z, ...]`, length 3n
    pub positions: &'a [f32],
    pub elapsed: f32,
    pub twinkle_speed: f32,
    pub view: Mat4,
    pub projection: Mat4,
}

/// Drawing backend for the particle cloud.
pub trait RenderAdapter {
    type Error;

    /// Replace the static attributes; the particle count may have changed.
    fn upload_attributes(&mut self, attributes: &ParticleAttributes<'_>);

    fn draw(&mut self, frame: &RenderFrame<'_>) -> Result<(), Self::Error>;
}

/// Forwards session state to a `RenderAdapter`, re-uploading static
/// attributes only when the session has regenerated its particles.
#[derive(Clone, Debug, Default)]
pub struct FramePresenter {
    uploaded_generation: Option<u64>,
}

impl FramePresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn uploaded_generation(&self) -> Option<u64> {
        self.uploaded_generation
    }

    pub fn present<A: RenderAdapter>(
        &mut self,
        session: &Session,
        camera: &OrbitCamera,
        aspect: f32,
        adapter: &mut A,
    ) -> Result<(), A::Error> {
        let particles = session.particles();
        if self.uploaded_generation != Some(session.generation()) {
            adapter.upload_attributes(&ParticleAttributes {
                colors: particles.color_array(),
                sizes: particles.sizes(),
                phases: particles.phases(),
            });
            self.uploaded_generation = Some(session.generation());
        }
        adapter.draw(&RenderFrame {
            positions: particles.position_array(),
            elapsed: session.elapsed() as f32,
            twinkle_speed: session.twinkle_speed(),
            view: camera.view_matrix(),
            projection: camera.projection_matrix(aspect),
        })
    }
}
