#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TileVertex {
    /// Window pixels, bottom-left origin.
    pub position: [f32; 2],
    pub uv: [f32; 2],
}

impl TileVertex {
    const ATTRIBS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x2,  // position
        1 => Float32x2,  // uv
    ];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<TileVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBS,
        }
    }
}

/// Two triangles covering the pixel rectangle `[x, x+w] × [y, y+h]`.
///
/// `uv_min` is the texel at the region's top-left, so the quad's top edge
/// (`y + h`) samples `uv_min.y` and its bottom edge samples `uv_max.y`.
pub fn tile_quad(x: f32, y: f32, w: f32, h: f32, uv_min: [f32; 2], uv_max: [f32; 2]) -> [TileVertex; 6] {
    let bl = TileVertex { position: [x,     y    ], uv: [uv_min[0], uv_max[1]] };
    let br = TileVertex { position: [x + w, y    ], uv: [uv_max[0], uv_max[1]] };
    let tl = TileVertex { position: [x,     y + h], uv: [uv_min[0], uv_min[1]] };
    let tr = TileVertex { position: [x + w, y + h], uv: [uv_max[0], uv_min[1]] };
    // Counter-clockwise with Y up.
    [bl, br, tl, br, tr, tl]
}

pub struct TilePipeline {
    pub render_pipeline: wgpu::RenderPipeline,
    /// Group 0: the projection uniform.
    pub projection_bind_group_layout: wgpu::BindGroupLayout,
    /// Group 1: the tileset texture and its sampler.
    pub atlas_bind_group_layout: wgpu::BindGroupLayout,
}

fn bind_group_layout(
    device: &wgpu::Device,
    label: &str,
    visibility: wgpu::ShaderStages,
    bindings: &[wgpu::BindingType],
) -> wgpu::BindGroupLayout {
    let entries: Vec<_> = bindings
        .iter()
        .zip(0..)
        .map(|(&ty, binding)| wgpu::BindGroupLayoutEntry { binding, visibility, ty, count: None })
        .collect();
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some(label),
        entries: &entries,
    })
}

/// Textured, alpha-blended quads with no depth buffer; one draw per batch.
pub fn create_tile_pipeline(device: &wgpu::Device, surface_format: wgpu::TextureFormat) -> TilePipeline {
    let projection_bind_group_layout = bind_group_layout(
        device,
        "tile_projection",
        wgpu::ShaderStages::VERTEX,
        &[wgpu::BindingType::Buffer {
            ty: wgpu::BufferBindingType::Uniform,
            has_dynamic_offset: false,
            min_binding_size: wgpu::BufferSize::new(std::mem::size_of::<[f32; 16]>() as u64),
        }],
    );
    let atlas_bind_group_layout = bind_group_layout(
        device,
        "tile_atlas",
        wgpu::ShaderStages::FRAGMENT,
        &[
            wgpu::BindingType::Texture {
                sample_type: wgpu::TextureSampleType::Float { filterable: true },
                view_dimension: wgpu::TextureViewDimension::D2,
                multisampled: false,
            },
            wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
        ],
    );

    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("tile_shader"),
        source: wgpu::ShaderSource::Wgsl(include_str!("shaders/tile.wgsl").into()),
    });
    let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("tile_pipeline_layout"),
        bind_group_layouts: &[&projection_bind_group_layout, &atlas_bind_group_layout],
        ..Default::default()
    });
    let target = wgpu::ColorTargetState {
        format: surface_format,
        blend: Some(wgpu::BlendState::ALPHA_BLENDING),
        write_mask: wgpu::ColorWrites::ALL,
    };

    let render_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("tile_pipeline"),
        layout: Some(&layout),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            buffers: &[TileVertex::layout()],
            compilation_options: Default::default(),
        },
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_main"),
            targets: &[Some(target)],
            compilation_options: Default::default(),
        }),
        // Quads are wound counter-clockwise, but nothing is culled.
        primitive: wgpu::PrimitiveState::default(),
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        multiview_mask: None,
        cache: None,
    });

    TilePipeline { render_pipeline, projection_bind_group_layout, atlas_bind_group_layout }
}

/// Orthographic projection (column-major) mapping window pixels with a
/// **bottom-left** origin to clip space:
/// ```text
/// x_ndc = 2x/w - 1
/// y_ndc = 2y/h - 1
/// ```
pub fn orthographic_projection(width: f32, height: f32) -> [f32; 16] {
    [
        2.0 / width, 0.0,          0.0, 0.0,
        0.0,         2.0 / height, 0.0, 0.0,
        0.0,         0.0,          1.0, 0.0,
        -1.0,        -1.0,         0.0, 1.0,
    ]
}

// ── Tests ─────────────────────────────────────────────────────────────────────
