use crate::constants::{
    CLEAR_COLOR, GRATICULE_SAMPLES, GRATICULE_STEP_DEGREES, SPHERE_RINGS, SPHERE_SEGMENTS,
    STAR_POINT_BRIGHTNESS,
};
use globe_core::constants::{hex_rgb, GRATICULE_COLOR, GRATICULE_OPACITY, GRATICULE_RADIUS_FACTOR};
use globe_core::{FrameUniforms, RingInstance, SceneSnapshot, SphereInstance};
use glam::Vec3;
use web_sys as web;

mod helpers;
mod mesh;
mod pipelines;

use helpers::InstanceBuffer;
use pipelines::{FlatVertex, Pipelines};

pub static GLOBE_WGSL: &str = include_str!("../shaders/globe.wgsl");

const SPHERE_INSTANCE_CAPACITY: usize = 1024;
const RING_INSTANCE_CAPACITY: usize = 16;

struct StaticBuffers {
    sphere_vb: wgpu::Buffer,
    sphere_ib: wgpu::Buffer,
    sphere_index_count: u32,
    quad_vb: wgpu::Buffer,
    graticule_vb: wgpu::Buffer,
    graticule_count: u32,
    star_vb: wgpu::Buffer,
    star_count: u32,
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    pipelines: Pipelines,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    statics: StaticBuffers,
    spheres: InstanceBuffer,
    atmosphere: InstanceBuffer,
    rings: InstanceBuffer,
    depth_view: wgpu::TextureView,
    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl<'a> GpuState<'a> {
    pub async fn new(
        canvas: &'a web::HtmlCanvasElement,
        stars: &[Vec3],
        earth_radius: f32,
    ) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

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
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
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
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("globe_shader"),
            source: wgpu::ShaderSource::Wgsl(GLOBE_WGSL.into()),
        });
        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("frame_uniforms"),
            size: std::mem::size_of::<FrameUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("frame_bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("frame_bg"),
            layout: &bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("globe_pl"),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });
        let pipelines = pipelines::create_pipelines(&device, &pipeline_layout, &shader, format);

        let statics = build_static_buffers(&device, stars, earth_radius);
        let (_, depth_view) = helpers::create_depth_texture(&device, width, height);

        Ok(Self {
            spheres: InstanceBuffer::new::<SphereInstance>(
                &device,
                "sphere_instances",
                SPHERE_INSTANCE_CAPACITY,
            ),
            atmosphere: InstanceBuffer::new::<SphereInstance>(&device, "atmosphere_instance", 1),
            rings: InstanceBuffer::new::<RingInstance>(
                &device,
                "ring_instances",
                RING_INSTANCE_CAPACITY,
            ),
            surface,
            device,
            queue,
            config,
            pipelines,
            uniform_buffer,
            bind_group,
            statics,
            depth_view,
            width,
            height,
            clear_color: wgpu::Color {
                r: CLEAR_COLOR[0],
                g: CLEAR_COLOR[1],
                b: CLEAR_COLOR[2],
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
            let (_, depth_view) = helpers::create_depth_texture(&self.device, width, height);
            self.depth_view = depth_view;
        }
    }

    pub fn render(&mut self, scene: &SceneSnapshot) -> Result<(), wgpu::SurfaceError> {
        self.queue
            .write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&scene.uniforms));
        self.spheres.write(&self.device, &self.queue, &scene.spheres);
        self.atmosphere
            .write(&self.device, &self.queue, std::slice::from_ref(&scene.atmosphere));
        self.rings.write(&self.device, &self.queue, &scene.rings);

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("globe_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_bind_group(0, &self.bind_group, &[]);

            if self.statics.star_count > 0 {
                rpass.set_pipeline(&self.pipelines.stars);
                rpass.set_vertex_buffer(0, self.statics.star_vb.slice(..));
                rpass.draw(0..self.statics.star_count, 0..1);
            }

            if !self.spheres.is_empty() {
                rpass.set_pipeline(&self.pipelines.spheres);
                rpass.set_vertex_buffer(0, self.statics.sphere_vb.slice(..));
                rpass.set_vertex_buffer(1, self.spheres.slice());
                rpass.set_index_buffer(self.statics.sphere_ib.slice(..), wgpu::IndexFormat::Uint16);
                rpass.draw_indexed(0..self.statics.sphere_index_count, 0, 0..self.spheres.len());
            }

            rpass.set_pipeline(&self.pipelines.graticule);
            rpass.set_vertex_buffer(0, self.statics.graticule_vb.slice(..));
            rpass.draw(0..self.statics.graticule_count, 0..1);

            if !self.rings.is_empty() {
                rpass.set_pipeline(&self.pipelines.rings);
                rpass.set_vertex_buffer(0, self.statics.quad_vb.slice(..));
                rpass.set_vertex_buffer(1, self.rings.slice());
                rpass.draw(0..6, 0..self.rings.len());
            }

            rpass.set_pipeline(&self.pipelines.atmosphere);
            rpass.set_vertex_buffer(0, self.statics.sphere_vb.slice(..));
            rpass.set_vertex_buffer(1, self.atmosphere.slice());
            rpass.set_index_buffer(self.statics.sphere_ib.slice(..), wgpu::IndexFormat::Uint16);
            rpass.draw_indexed(0..self.statics.sphere_index_count, 0, 0..1);
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

fn build_static_buffers(device: &wgpu::Device, stars: &[Vec3], earth_radius: f32) -> StaticBuffers {
    let sphere = mesh::uv_sphere(SPHERE_SEGMENTS, SPHERE_RINGS);
    let sphere_vb = helpers::create_vertex_buffer(device, "sphere_vb", &sphere.positions);
    let sphere_ib = helpers::create_index_buffer(device, "sphere_ib", &sphere.indices);

    // Quad as two triangles spanning [-1, 1]; the ring shader masks the annulus.
    let quad_vertices: [f32; 12] = [
        -1.0, -1.0, 1.0, -1.0, 1.0, 1.0, -1.0, -1.0, 1.0, 1.0, -1.0, 1.0,
    ];
    let quad_vb = helpers::create_vertex_buffer(device, "quad_vb", &quad_vertices);

    let grid_color = hex_rgb(GRATICULE_COLOR).extend(GRATICULE_OPACITY).to_array();
    let graticule: Vec<FlatVertex> = mesh::graticule(
        earth_radius * GRATICULE_RADIUS_FACTOR,
        GRATICULE_STEP_DEGREES,
        GRATICULE_SAMPLES,
    )
    .into_iter()
    .map(|position| FlatVertex {
        position,
        color: grid_color,
    })
    .collect();
    let graticule_vb = helpers::create_vertex_buffer(device, "graticule_vb", &graticule);

    let star_color = [STAR_POINT_BRIGHTNESS, STAR_POINT_BRIGHTNESS, STAR_POINT_BRIGHTNESS, 1.0];
    let star_vertices: Vec<FlatVertex> = stars
        .iter()
        .map(|p| FlatVertex {
            position: p.to_array(),
            color: star_color,
        })
        .collect();
    // wgpu rejects zero-sized vertex buffers
    let star_vb = if star_vertices.is_empty() {
        helpers::create_vertex_buffer(
            device,
            "star_vb",
            &[FlatVertex {
                position: [0.0; 3],
                color: [0.0; 4],
            }],
        )
    } else {
        helpers::create_vertex_buffer(device, "star_vb", &star_vertices)
    };

    StaticBuffers {
        sphere_vb,
        sphere_ib,
        sphere_index_count: sphere.indices.len() as u32,
        quad_vb,
        graticule_count: graticule.len() as u32,
        graticule_vb,
        star_count: star_vertices.len() as u32,
        star_vb,
    }
}
