use super::constants::*;
use glam::{Mat4, Vec3};
use std::f32::consts::{PI, TAU};

/// Tuning for the orbit controller.
#[derive(Clone, Debug)]
pub struct OrbitSettings {
    pub damping: f32,
    pub auto_rotate: bool,
    pub auto_rotate_speed: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub rotate_speed: f32,
    pub zoom_step: f32,
}

impl Default for OrbitSettings {
    fn default() -> Self {
        Self {
            damping: ORBIT_DAMPING,
            auto_rotate: true,
            auto_rotate_speed: ORBIT_AUTO_ROTATE_SPEED,
            min_distance: ORBIT_MIN_DISTANCE,
            max_distance: ORBIT_MAX_DISTANCE,
            rotate_speed: 1.0,
            zoom_step: ORBIT_ZOOM_STEP,
        }
    }
}

/// Damped orbit camera circling a fixed target, with perspective projection.
///
/// Position is kept in spherical coordinates around `target` (Y up):
/// `theta` is the azimuth measured from +Z toward +X, `phi` the polar angle
/// from +Y. Input accumulates into pending deltas which `update` bleeds off
/// by the damping factor each frame. Panning is not supported.
#[derive(Clone, Debug)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
    pub settings: OrbitSettings,
    radius: f32,
    theta: f32,
    phi: f32,
    delta_theta: f32,
    delta_phi: f32,
    zoom_scale: f32,
    dragging: bool,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new(Vec3::from_array(CAMERA_EYE), Vec3::ZERO, OrbitSettings::default())
    }
}

impl OrbitCamera {
    pub fn new(eye: Vec3, target: Vec3, settings: OrbitSettings) -> Self {
        let offset = eye - target;
        let radius = offset.length().clamp(settings.min_distance, settings.max_distance);
        let theta = offset.x.atan2(offset.z);
        let phi = if offset.length() > 0.0 {
            (offset.y / offset.length()).clamp(-1.0, 1.0).acos()
        } else {
            PI / 2.0
        };
        Self {
            target,
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
            settings,
            radius,
            theta,
            phi: clamp_polar(phi),
            delta_theta: 0.0,
            delta_phi: 0.0,
            zoom_scale: 1.0,
            dragging: false,
        }
    }

    pub fn distance(&self) -> f32 {
        self.radius
    }

    pub fn azimuth(&self) -> f32 {
        self.theta
    }

    pub fn polar(&self) -> f32 {
        self.phi
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn begin_drag(&mut self) {
        self.dragging = true;
    }

    pub fn end_drag(&mut self) {
        self.dragging = false;
    }

    /// Queue a rotation for a pointer drag of `(dx, dy)` pixels on a viewport
    /// `viewport_height` pixels tall. A full-height drag is one revolution.
    pub fn rotate_by_pixels(&mut self, dx: f32, dy: f32, viewport_height: f32) {
        let h = viewport_height.max(1.0);
        self.delta_theta -= TAU * dx / h * self.settings.rotate_speed;
        self.delta_phi -= TAU * dy / h * self.settings.rotate_speed;
    }

    /// Apply a wheel notch; positive `wheel_delta_y` moves away from the target.
    pub fn zoom(&mut self, wheel_delta_y: f32) {
        if wheel_delta_y > 0.0 {
            self.zoom_scale /= self.settings.zoom_step;
        } else if wheel_delta_y < 0.0 {
            self.zoom_scale *= self.settings.zoom_step;
        }
    }

    /// Integrate pending input and auto-rotation for a frame of `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        if self.settings.auto_rotate && !self.dragging {
            self.delta_theta -= TAU / 60.0 * self.settings.auto_rotate_speed * dt.max(0.0);
        }
        let damping = self.settings.damping.clamp(0.0, 1.0);

        self.theta += self.delta_theta * damping;
        self.phi = clamp_polar(self.phi + self.delta_phi * damping);
        self.radius = (self.radius * self.zoom_scale)
            .clamp(self.settings.min_distance, self.settings.max_distance);

        self.delta_theta *= 1.0 - damping;
        self.delta_phi *= 1.0 - damping;
        self.zoom_scale = 1.0;
    }

    pub fn eye(&self) -> Vec3 {
        let sin_phi = self.phi.sin();
        self.target
            + Vec3::new(
                self.radius * sin_phi * self.theta.sin(),
                self.radius * self.phi.cos(),
                self.radius * sin_phi * self.theta.cos(),
            )
    }

    /// World to view transform.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), self.target, Vec3::Y)
    }

    /// Clip-space projection for a viewport with the given aspect ratio.
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, aspect.max(1e-3), self.znear, self.zfar)
    }
}

#[inline]
fn clamp_polar(phi: f32) -> f32 {
    phi.clamp(ORBIT_POLAR_EPSILON, PI - ORBIT_POLAR_EPSILON)
}
