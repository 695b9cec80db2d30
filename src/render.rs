use crate::core::{
    ParticleAttributes, RenderAdapter, RenderFrame, Starfield, BACKGROUND_RGB, FOG_DENSITY,
    PARTICLE_POINT_SCALE, STAR_OPACITY, STAR_SIZE,
};
use web_sys as web;

mod helpers;
mod points;
use points::{PointBuffers, PointInstance};

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct SceneUniforms {
    proj: [[f32; 4]; 4],
    view: [[f32; 4]; 4],
    resolution: [f32; 2],
    time: f32,
    twinkle_speed: f32,
    fog_color: [f32; 3],
    fog_density: f32,
    particle_point_scale: f32,
    star_point_scale: f32,
    star_opacity: f32,
    _pad: f32,
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    particle_pipeline: wgpu::RenderPipeline,
    star_pipeline: wgpu::RenderPipeline,

    particles: PointBuffers,
    stars: PointBuffers,

    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl<'a> GpuState<'a> {
    pub async fn new(
        canvas: &'a web::HtmlCanvasElement,
        starfield: &Starfield,
        particle_capacity: usize,
    ) -> anyhow::Result<Self> {
        let width = canvas.width();
        let height = canvas.height();

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        // Palette and background are authored in display space.
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8Unorm | wgpu::TextureFormat::Rgba8Unorm
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: width.max(1),
            height: height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("scene_uniforms"),
            size: std::mem::size_of::<SceneUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bgl = helpers::uniform_bind_group_layout(&device, "scene_bgl");
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("scene_bg"),
            layout: &bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("points_layout"),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });

        let particle_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("particles_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::core::PARTICLES_WGSL.into()),
        });
        let star_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("stars_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::core::STARS_WGSL.into()),
        });
        let layouts = points::vertex_layouts();
        let particle_pipeline = helpers::make_points_pipeline(
            &device,
            "particle_pipeline",
            &pipeline_layout,
            &particle_shader,
            "vs_particle",
            "fs_particle",
            &layouts,
            format,
        );
        let star_pipeline = helpers::make_points_pipeline(
            &device,
            "star_pipeline",
            &pipeline_layout,
            &star_shader,
            "vs_star",
            "fs_star",
            &layouts,
            format,
        );

        let particles = PointBuffers::new(&device, "particles", particle_capacity);
        let mut stars = PointBuffers::new(&device, "stars", starfield.len());
        let star_instances: Vec<PointInstance> = starfield
            .colors
            .iter()
            .map(|c| PointInstance {
                color: c.to_array(),
                size: STAR_SIZE,
                phase: 0.0,
            })
            .collect();
        stars.upload_instances(&device, &queue, &star_instances);
        let star_positions: Vec<f32> = starfield
            .positions
            .iter()
            .flat_map(|p| p.to_array())
            .collect();
        stars.upload_positions(&queue, &star_positions);

        log::info!(
            "[gpu] ready: {}x{} {:?}, {} stars",
            width,
            height,
            format,
            stars.count()
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            uniform_buffer,
            bind_group,
            particle_pipeline,
            star_pipeline,
            particles,
            stars,
            width,
            height,
            clear_color: wgpu::Color {
                r: BACKGROUND_RGB[0] as f64,
                g: BACKGROUND_RGB[1] as f64,
                b: BACKGROUND_RGB[2] as f64,
                a: 1.0,
            },
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    pub fn aspect(&self) -> f32 {
        self.width.max(1) as f32 / self.height.max(1) as f32
    }

    fn write_uniforms(&self, frame: &RenderFrame<'_>) {
        let height = self.height.max(1) as f32;
        let u = SceneUniforms {
            proj: frame.projection.to_cols_array_2d(),
            view: frame.view.to_cols_array_2d(),
            resolution: [self.width.max(1) as f32, height],
            time: frame.elapsed,
            twinkle_speed: frame.twinkle_speed,
            fog_color: BACKGROUND_RGB,
            fog_density: FOG_DENSITY,
            particle_point_scale: PARTICLE_POINT_SCALE,
            star_point_scale: height * 0.5,
            star_opacity: STAR_OPACITY,
            _pad: 0.0,
        };
        self.queue
            .write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&u));
    }
}

impl<'a> RenderAdapter for GpuState<'a> {
    type Error = wgpu::SurfaceError;

    fn upload_attributes(&mut self, attributes: &ParticleAttributes<'_>) {
        let instances: Vec<PointInstance> = attributes
            .colors
            .chunks_exact(3)
            .zip(attributes.sizes.iter().zip(attributes.phases))
            .map(|(c, (&size, &phase))| PointInstance {
                color: [c[0], c[1], c[2]],
                size,
                phase,
            })
            .collect();
        self.particles
            .upload_instances(&self.device, &self.queue, &instances);
        log::info!("[gpu] uploaded {} particle attributes", instances.len());
    }

    fn draw(&mut self, frame: &RenderFrame<'_>) -> Result<(), Self::Error> {
        self.write_uniforms(frame);
        self.particles.upload_positions(&self.queue, frame.positions);

        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_bind_group(0, &self.bind_group, &[]);

            rpass.set_pipeline(&self.star_pipeline);
            self.stars.draw(&mut rpass);

            rpass.set_pipeline(&self.particle_pipeline);
            self.particles.draw(&mut rpass);
        }
        self.queue.submit(Some(encoder.finish()));
        output.present();
        Ok(())
    }
}
