use super::helpers::DEPTH_FORMAT;
use globe_core::{RingInstance, SphereInstance};

/// Graticule and star vertex.
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct FlatVertex {
    pub(crate) position: [f32; 3],
    pub(crate) color: [f32; 4],
}

const SPHERE_MESH_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];
const QUAD_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];
const FLAT_ATTRS: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x4];

// Both instance records share one layout: vec3, f32, vec3, f32, vec3, f32.
const SPHERE_INSTANCE_ATTRS: [wgpu::VertexAttribute; 6] = wgpu::vertex_attr_array![
    1 => Float32x3,
    2 => Float32,
    3 => Float32x3,
    4 => Float32,
    5 => Float32x3,
    6 => Float32,
];
const RING_INSTANCE_ATTRS: [wgpu::VertexAttribute; 6] = SPHERE_INSTANCE_ATTRS;

#[derive(Clone, Copy)]
struct PipelineDesc<'a> {
    label: &'a str,
    vs_entry: &'a str,
    fs_entry: &'a str,
    topology: wgpu::PrimitiveTopology,
    cull_mode: Option<wgpu::Face>,
    depth_write: bool,
}

fn make_pipeline(
    device: &wgpu::Device,
    layout: &wgpu::PipelineLayout,
    shader: &wgpu::ShaderModule,
    color_format: wgpu::TextureFormat,
    buffers: &[wgpu::VertexBufferLayout],
    desc: PipelineDesc,
) -> wgpu::RenderPipeline {
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(desc.label),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: shader,
            entry_point: Some(desc.vs_entry),
            buffers,
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState {
            topology: desc.topology,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: desc.cull_mode,
            ..Default::default()
        },
        depth_stencil: Some(wgpu::DepthStencilState {
            format: DEPTH_FORMAT,
            depth_write_enabled: desc.depth_write,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: Some(desc.fs_entry),
            targets: &[Some(wgpu::ColorTargetState {
                format: color_format,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    })
}

pub(crate) struct Pipelines {
    pub(crate) spheres: wgpu::RenderPipeline,
    pub(crate) atmosphere: wgpu::RenderPipeline,
    pub(crate) rings: wgpu::RenderPipeline,
    pub(crate) graticule: wgpu::RenderPipeline,
    pub(crate) stars: wgpu::RenderPipeline,
}

pub(crate) fn create_pipelines(
    device: &wgpu::Device,
    layout: &wgpu::PipelineLayout,
    shader: &wgpu::ShaderModule,
    color_format: wgpu::TextureFormat,
) -> Pipelines {
    let sphere_buffers = [
        // slot 0: unit sphere positions
        wgpu::VertexBufferLayout {
            array_stride: (std::mem::size_of::<f32>() * 3) as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &SPHERE_MESH_ATTRS,
        },
        // slot 1: instance data
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<SphereInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &SPHERE_INSTANCE_ATTRS,
        },
    ];
    let ring_buffers = [
        wgpu::VertexBufferLayout {
            array_stride: (std::mem::size_of::<f32>() * 2) as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &QUAD_ATTRS,
        },
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<RingInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &RING_INSTANCE_ATTRS,
        },
    ];
    let flat_buffers = [wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<FlatVertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &FLAT_ATTRS,
    }];

    let build = |buffers: &[wgpu::VertexBufferLayout], desc| {
        make_pipeline(device, layout, shader, color_format, buffers, desc)
    };

    Pipelines {
        spheres: build(
            &sphere_buffers,
            PipelineDesc {
                label: "sphere_pipeline",
                vs_entry: "vs_sphere",
                fs_entry: "fs_sphere",
                topology: wgpu::PrimitiveTopology::TriangleList,
                cull_mode: Some(wgpu::Face::Back),
                depth_write: true,
            },
        ),
        atmosphere: build(
            &sphere_buffers,
            PipelineDesc {
                label: "atmosphere_pipeline",
                vs_entry: "vs_sphere",
                fs_entry: "fs_atmosphere",
                topology: wgpu::PrimitiveTopology::TriangleList,
                cull_mode: Some(wgpu::Face::Front),
                depth_write: false,
            },
        ),
        rings: build(
            &ring_buffers,
            PipelineDesc {
                label: "ring_pipeline",
                vs_entry: "vs_ring",
                fs_entry: "fs_ring",
                topology: wgpu::PrimitiveTopology::TriangleList,
                cull_mode: None,
                depth_write: false,
            },
        ),
        graticule: build(
            &flat_buffers,
            PipelineDesc {
                label: "graticule_pipeline",
                vs_entry: "vs_graticule",
                fs_entry: "fs_flat",
                topology: wgpu::PrimitiveTopology::LineList,
                cull_mode: None,
                depth_write: false,
            },
        ),
        stars: build(
            &flat_buffers,
            PipelineDesc {
                label: "star_pipeline",
                vs_entry: "vs_star",
                fs_entry: "fs_flat",
                topology: wgpu::PrimitiveTopology::PointList,
                cull_mode: None,
                depth_write: false,
            },
        ),
    }
}
