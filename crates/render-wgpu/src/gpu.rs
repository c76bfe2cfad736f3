use crate::camera::OrbitCamera;
use crate::mesh;
use crate::shaders;
use bytemuck::{Pod, Zeroable};
use glam::Mat4;
use hauntyard_scene::{Light, MeshKind, Scene};
use wgpu::util::DeviceExt;

const MAX_POINT_LIGHTS: usize = 8;
const MAX_INSTANCES: u64 = 1024;

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct PointLightUniform {
    position: [f32; 3],
    range: f32,
    color: [f32; 3],
    intensity: f32,
}

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct Uniforms {
    view_proj: [[f32; 4]; 4],
    camera_pos: [f32; 4],
    ambient: [f32; 4],
    dir_direction: [f32; 4],
    dir_color: [f32; 4],
    fog_color: [f32; 4],
    fog_params: [f32; 4],
    points: [PointLightUniform; MAX_POINT_LIGHTS],
}

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct InstanceData {
    model_0: [f32; 4],
    model_1: [f32; 4],
    model_2: [f32; 4],
    model_3: [f32; 4],
    color: [f32; 4],
}

struct GpuMesh {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
}

impl GpuMesh {
    fn upload(device: &wgpu::Device, label: &str, data: &mesh::MeshData) -> Self {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label}_vertex_buffer")),
            contents: bytemuck::cast_slice(&data.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label}_index_buffer")),
            contents: bytemuck::cast_slice(&data.indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        Self {
            vertex_buffer,
            index_buffer,
            index_count: data.indices.len() as u32,
        }
    }
}

// Slot per mesh kind; the cone is tessellated at the roof's four segments.
const SLOT_COUNT: usize = 4;

fn mesh_slot(kind: MeshKind) -> usize {
    match kind {
        MeshKind::Cube => 0,
        MeshKind::Cone { .. } => 1,
        MeshKind::Sphere => 2,
        MeshKind::Plane => 3,
    }
}

/// wgpu-based diorama renderer: instanced unit meshes shaded by the scene's
/// lights and fog.
pub struct WgpuRenderer {
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    uniform_bind_group: wgpu::BindGroup,
    meshes: [GpuMesh; SLOT_COUNT],
    instance_buffer: wgpu::Buffer,
    depth_texture: wgpu::TextureView,
    surface_format: wgpu::TextureFormat,
}

impl WgpuRenderer {
    pub fn new(
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        width: u32,
        height: u32,
    ) -> Self {
        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("uniform_buffer"),
            contents: bytemuck::bytes_of(&Uniforms {
                view_proj: Mat4::IDENTITY.to_cols_array_2d(),
                camera_pos: [0.0; 4],
                ambient: [0.0; 4],
                dir_direction: [0.0, -1.0, 0.0, 0.0],
                dir_color: [0.0; 4],
                fog_color: [0.0; 4],
                fog_params: [1.0e9, 2.0e9, 0.0, 0.0],
                points: [PointLightUniform::zeroed(); MAX_POINT_LIGHTS],
            }),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("uniform_bind_group_layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let uniform_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("uniform_bind_group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pipeline_layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("diorama_shader"),
            source: wgpu::ShaderSource::Wgsl(shaders::DIORAMA_SHADER.into()),
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("diorama_pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[
                    wgpu::VertexBufferLayout {
                        array_stride: std::mem::size_of::<mesh::Vertex>() as u64,
                        step_mode: wgpu::VertexStepMode::Vertex,
                        attributes: &wgpu::vertex_attr_array![
                            0 => Float32x3,
                            1 => Float32x3,
                        ],
                    },
                    wgpu::VertexBufferLayout {
                        array_stride: std::mem::size_of::<InstanceData>() as u64,
                        step_mode: wgpu::VertexStepMode::Instance,
                        attributes: &wgpu::vertex_attr_array![
                            2 => Float32x4,
                            3 => Float32x4,
                            4 => Float32x4,
                            5 => Float32x4,
                            6 => Float32x4,
                        ],
                    },
                ],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                // No culling: the ground and door planes are double-sided.
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: wgpu::TextureFormat::Depth32Float,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: Default::default(),
                bias: Default::default(),
            }),
            multisample: Default::default(),
            multiview: None,
            cache: None,
        });

        let meshes = [
            GpuMesh::upload(device, "cube", &mesh::cube()),
            GpuMesh::upload(device, "cone", &mesh::cone(4)),
            GpuMesh::upload(device, "sphere", &mesh::sphere(16, 16)),
            GpuMesh::upload(device, "plane", &mesh::plane()),
        ];

        let instance_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("instance_buffer"),
            size: MAX_INSTANCES * std::mem::size_of::<InstanceData>() as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let depth_texture = Self::create_depth_texture(device, width, height);

        Self {
            pipeline,
            uniform_buffer,
            uniform_bind_group,
            meshes,
            instance_buffer,
            depth_texture,
            surface_format,
        }
    }

    pub fn resize(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        self.depth_texture = Self::create_depth_texture(device, width, height);
    }

    pub fn surface_format(&self) -> wgpu::TextureFormat {
        self.surface_format
    }

    /// Render one frame of the scene through the given camera.
    pub fn render(
        &self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        view: &wgpu::TextureView,
        camera: &OrbitCamera,
        scene: &Scene,
    ) {
        queue.write_buffer(
            &self.uniform_buffer,
            0,
            bytemuck::bytes_of(&self.build_uniforms(camera, scene)),
        );

        // Group instances per mesh slot, then flatten into one buffer.
        let mut groups: [Vec<InstanceData>; SLOT_COUNT] = Default::default();
        for node in scene.nodes().values() {
            let t = &node.transform;
            let model = Mat4::from_scale_rotation_translation(t.scale, t.rotation, t.position);
            let cols = model.to_cols_array_2d();
            groups[mesh_slot(node.mesh)].push(InstanceData {
                model_0: cols[0],
                model_1: cols[1],
                model_2: cols[2],
                model_3: cols[3],
                color: node.material.color.0,
            });
        }

        let mut instances: Vec<InstanceData> = Vec::with_capacity(scene.node_count());
        let mut ranges: [(u32, u32); SLOT_COUNT] = [(0, 0); SLOT_COUNT];
        for (slot, group) in groups.iter().enumerate() {
            let start = instances.len() as u32;
            instances.extend_from_slice(group);
            ranges[slot] = (start, instances.len() as u32);
        }
        if instances.len() as u64 > MAX_INSTANCES {
            tracing::warn!(
                count = instances.len(),
                max = MAX_INSTANCES,
                "instance overflow; truncating"
            );
            instances.truncate(MAX_INSTANCES as usize);
        }
        if !instances.is_empty() {
            queue.write_buffer(&self.instance_buffer, 0, bytemuck::cast_slice(&instances));
        }

        let clear = scene.clear_color.0;
        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("render_encoder"),
        });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("diorama_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: clear[0] as f64,
                            g: clear[1] as f64,
                            b: clear[2] as f64,
                            a: clear[3] as f64,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_texture,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                ..Default::default()
            });

            pass.set_pipeline(&self.pipeline);
            pass.set_bind_group(0, &self.uniform_bind_group, &[]);
            pass.set_vertex_buffer(1, self.instance_buffer.slice(..));

            for (slot, gpu_mesh) in self.meshes.iter().enumerate() {
                let (start, end) = ranges[slot];
                if start == end || start >= MAX_INSTANCES as u32 {
                    continue;
                }
                let end = end.min(MAX_INSTANCES as u32);
                pass.set_vertex_buffer(0, gpu_mesh.vertex_buffer.slice(..));
                pass.set_index_buffer(gpu_mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint16);
                pass.draw_indexed(0..gpu_mesh.index_count, 0, start..end);
            }
        }

        queue.submit(std::iter::once(encoder.finish()));
    }

    fn build_uniforms(&self, camera: &OrbitCamera, scene: &Scene) -> Uniforms {
        let eye = camera.eye();
        let mut uniforms = Uniforms {
            view_proj: camera.view_projection().to_cols_array_2d(),
            camera_pos: [eye.x, eye.y, eye.z, 1.0],
            ambient: {
                let c = scene.ambient.color.0;
                [c[0], c[1], c[2], scene.ambient.intensity]
            },
            dir_direction: [0.0, -1.0, 0.0, 0.0],
            dir_color: [0.0; 4],
            fog_color: [0.0; 4],
            // Fog defaults far beyond the scene when disabled.
            fog_params: [1.0e9, 2.0e9, 0.0, 0.0],
            points: [PointLightUniform::zeroed(); MAX_POINT_LIGHTS],
        };

        if let Some(fog) = scene.fog {
            let c = fog.color.0;
            uniforms.fog_color = c;
            uniforms.fog_params[0] = fog.near;
            uniforms.fog_params[1] = fog.far;
        }

        let mut point_count = 0usize;
        for light in scene.lights().values() {
            match light {
                Light::Directional(d) => {
                    let dir = d.direction();
                    uniforms.dir_direction = [dir.x, dir.y, dir.z, 0.0];
                    let c = d.color.0;
                    uniforms.dir_color = [c[0], c[1], c[2], d.intensity];
                }
                Light::Point(p) => {
                    if point_count == MAX_POINT_LIGHTS {
                        tracing::warn!(max = MAX_POINT_LIGHTS, "too many point lights; dropping");
                        continue;
                    }
                    uniforms.points[point_count] = PointLightUniform {
                        position: p.position.to_array(),
                        range: p.range,
                        color: [p.color.0[0], p.color.0[1], p.color.0[2]],
                        intensity: p.intensity,
                    };
                    point_count += 1;
                }
            }
        }
        uniforms.fog_params[2] = point_count as f32;

        uniforms
    }

    fn create_depth_texture(device: &wgpu::Device, width: u32, height: u32) -> wgpu::TextureView {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("depth_texture"),
            size: wgpu::Extent3d {
                width: width.max(1),
                height: height.max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Depth32Float,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        texture.create_view(&Default::default())
    }
}
