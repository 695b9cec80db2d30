/// Static per-point attributes; positions live in a separate buffer.
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct PointInstance {
    pub(crate) color: [f32; 3],
    pub(crate) size: f32,
    pub(crate) phase: f32,
}

const POSITION_ATTRS: [wgpu::VertexAttribute; 1] = [wgpu::VertexAttribute {
    format: wgpu::VertexFormat::Float32x3,
    offset: 0,
    shader_location: 0,
}];
const INSTANCE_ATTRS: [wgpu::VertexAttribute; 3] = [
    wgpu::VertexAttribute {
        format: wgpu::VertexFormat::Float32x3,
        offset: 0,
        shader_location: 1,
    },
    wgpu::VertexAttribute {
        format: wgpu::VertexFormat::Float32,
        offset: 12,
        shader_location: 2,
    },
    wgpu::VertexAttribute {
        format: wgpu::VertexFormat::Float32,
        offset: 16,
        shader_location: 3,
    },
];

pub(crate) fn vertex_layouts() -> [wgpu::VertexBufferLayout<'static>; 2] {
    [
        // slot 0: positions, rewritten every frame
        wgpu::VertexBufferLayout {
            array_stride: (std::mem::size_of::<f32>() * 3) as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &POSITION_ATTRS,
        },
        // slot 1: instance data
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<PointInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &INSTANCE_ATTRS,
        },
    ]
}

/// GPU buffers for one point layer (particles or stars).
pub(crate) struct PointBuffers {
    label: &'static str,
    positions: wgpu::Buffer,
    instances: wgpu::Buffer,
    capacity: usize,
    count: usize,
}

impl PointBuffers {
    pub(crate) fn new(device: &wgpu::Device, label: &'static str, capacity: usize) -> Self {
        let (positions, instances) = create_buffers(device, label, capacity);
        Self {
            label,
            positions,
            instances,
            capacity: capacity.max(1),
            count: 0,
        }
    }

    pub(crate) fn count(&self) -> usize {
        self.count
    }

    /// Replace the static attributes, growing the buffers when needed.
    pub(crate) fn upload_instances(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        instances: &[PointInstance],
    ) {
        if instances.len() > self.capacity {
            let (positions, buffer) = create_buffers(device, self.label, instances.len());
            self.positions = positions;
            self.instances = buffer;
            self.capacity = instances.len();
            log::info!("[gpu] {} buffers grown to {}", self.label, self.capacity);
        }
        self.count = instances.len();
        if !instances.is_empty() {
            queue.write_buffer(&self.instances, 0, bytemuck::cast_slice(instances));
        }
    }

    /// Write `[x, y, z, ...]` positions; anything beyond `count` is ignored.
    pub(crate) fn upload_positions(&self, queue: &wgpu::Queue, positions: &[f32]) {
        let n = (positions.len() / 3).min(self.count);
        if n > 0 {
            queue.write_buffer(&self.positions, 0, bytemuck::cast_slice(&positions[..n * 3]));
        }
    }

    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        if self.count == 0 {
            return;
        }
        rpass.set_vertex_buffer(0, self.positions.slice(..));
        rpass.set_vertex_buffer(1, self.instances.slice(..));
        rpass.draw(0..6, 0..self.count as u32);
    }
}

fn create_buffers(
    device: &wgpu::Device,
    label: &str,
    capacity: usize,
) -> (wgpu::Buffer, wgpu::Buffer) {
    let capacity = capacity.max(1);
    let positions = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some(&format!("{label}_positions")),
        size: (std::mem::size_of::<f32>() * 3 * capacity) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let instances = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some(&format!("{label}_instances")),
        size: (std::mem::size_of::<PointInstance>() * capacity) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    (positions, instances)
}
