use glam::Vec2;
use web_sys as web;

/// Pointer drag bookkeeping for the orbit camera.
#[derive(Default, Clone, Copy, Debug)]
pub struct DragState {
    pub active: bool,
    pub pointer_id: i32,
    pub last: Vec2,
}

impl DragState {
    pub fn begin(&mut self, pointer_id: i32, at: Vec2) {
        self.active = true;
        self.pointer_id = pointer_id;
        self.last = at;
    }

    /// Movement since the previous sample, or `None` when not dragging with
    /// this pointer.
    pub fn drag_to(&mut self, pointer_id: i32, at: Vec2) -> Option<Vec2> {
        if !self.active || pointer_id != self.pointer_id {
            return None;
        }
        let delta = at - self.last;
        self.last = at;
        Some(delta)
    }

    /// Returns true when this pointer was the one dragging.
    pub fn end(&mut self, pointer_id: i32) -> bool {
        let was = self.active && pointer_id == self.pointer_id;
        if was {
            self.active = false;
        }
        was
    }
}

/// Normalize a wheel delta to a notch direction (-1, 0 or 1).
#[inline]
pub fn wheel_notch(delta_y: f64) -> f32 {
    if delta_y > 0.0 {
        1.0
    } else if delta_y < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Parse a slider value, rejecting anything that is not a finite number.
#[inline]
pub fn parse_slider(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Twinkle speed is a whole number; fractional slider values are truncated.
#[inline]
pub fn parse_twinkle_speed(value: &str) -> Option<f32> {
    parse_slider(value).map(|v| v.trunc() as f32)
}

// ---------------- Pointer helpers ----------------
#[inline]
pub fn pointer_client_px(ev: &web::PointerEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

#[inline]
pub fn canvas_client_height(canvas: &web::HtmlCanvasElement) -> f32 {
    canvas.get_bounding_client_rect().height() as f32
}
