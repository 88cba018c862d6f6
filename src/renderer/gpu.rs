use std::ops::Range;
use std::sync::Arc;

use image::RgbaImage;
use tracing::{debug, trace};
use wgpu::util::DeviceExt;
use winit::dpi::PhysicalSize;
use winit::window::Window;

use super::atlas::TileRegion;
use super::pipeline::{TilePipeline, TileVertex, create_tile_pipeline, orthographic_projection, tile_quad};
use super::{Surface, SurfaceError};

/// Handle to a texture uploaded through [`GpuSurface::create_texture`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GpuTexture {
    index: usize,
    pub width: u32,
    pub height: u32,
}

/// Consecutive quads sharing one texture.
struct Batch {
    texture: usize,
    vertices: Range<u32>,
}

/// wgpu surface on a winit window.
///
/// Blits are queued as textured quads and drawn in call order by
/// [`GpuSurface::present`].
pub struct GpuSurface {
    pub window: Arc<Window>,
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    pipeline: TilePipeline,
    projection_buffer: wgpu::Buffer,
    projection_bind_group: wgpu::BindGroup,
    /// One bind group per uploaded texture, indexed by `GpuTexture::index`.
    texture_bind_groups: Vec<wgpu::BindGroup>,
    vertices: Vec<TileVertex>,
    batches: Vec<Batch>,
}

impl GpuSurface {
    pub async fn new(window: Arc<Window>) -> Result<Self, SurfaceError> {
        let size = window.inner_size();

        let instance = wgpu::Instance::default();
        let surface = instance
            .create_surface(Arc::clone(&window))
            .map_err(|e| SurfaceError::Backend(e.to_string()))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                compatible_surface: Some(&surface),
                ..Default::default()
            })
            .await
            .map_err(|e| SurfaceError::Backend(format!("no suitable GPU adapter found: {e}")))?;

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor::default())
            .await
            .map_err(|e| SurfaceError::Backend(format!("failed to create device: {e}")))?;

        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .first()
            .copied()
            .ok_or_else(|| SurfaceError::Backend("surface reports no formats".into()))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let pipeline = create_tile_pipeline(&device, format);

        let proj = orthographic_projection(config.width as f32, config.height as f32);
        let projection_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("projection_buffer"),
            contents: bytemuck::cast_slice(&proj),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let projection_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("projection_bg"),
            layout: &pipeline.projection_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: projection_buffer.as_entire_binding(),
            }],
        });

        debug!(width = config.width, height = config.height, ?format, "gpu surface configured");

        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            pipeline,
            projection_buffer,
            projection_bind_group,
            texture_bind_groups: Vec::new(),
            vertices: Vec::new(),
            batches: Vec::new(),
        })
    }

    pub fn resize(&mut self, new_size: PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);

        let proj = orthographic_projection(new_size.width as f32, new_size.height as f32);
        self.queue
            .write_buffer(&self.projection_buffer, 0, bytemuck::cast_slice(&proj));
    }

    /// Number of quads queued since the last [`GpuSurface::present`].
    pub fn queued_quads(&self) -> usize {
        self.vertices.len() / 6
    }

    /// Draw every queued blit in call order, present the frame and empty the
    /// queue.  The queue is emptied even when the frame could not be acquired.
    pub fn present(&mut self) -> Result<(), wgpu::SurfaceError> {
        let vertices = std::mem::take(&mut self.vertices);
        let batches = std::mem::take(&mut self.batches);

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor { label: Some("tile_encoder") });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("tile_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    depth_slice: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

            if !vertices.is_empty() {
                let vbuf = self.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("tile_vertex_buffer"),
                    contents: bytemuck::cast_slice(&vertices),
                    usage: wgpu::BufferUsages::VERTEX,
                });
                pass.set_pipeline(&self.pipeline.render_pipeline);
                pass.set_bind_group(0, &self.projection_bind_group, &[]);
                pass.set_vertex_buffer(0, vbuf.slice(..));
                for batch in &batches {
                    pass.set_bind_group(1, &self.texture_bind_groups[batch.texture], &[]);
                    pass.draw(batch.vertices.clone(), 0..1);
                }
            }
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        frame.present();
        Ok(())
    }
}

impl Surface for GpuSurface {
    type Texture = GpuTexture;

    fn viewport_size(&self) -> (u32, u32) {
        (self.config.width, self.config.height)
    }

    fn create_texture(&mut self, image: &RgbaImage) -> Result<GpuTexture, SurfaceError> {
        let (width, height) = image.dimensions();
        let max = self.device.limits().max_texture_dimension_2d;
        if width > max || height > max {
            return Err(SurfaceError::TextureTooLarge { width, height, max });
        }

        let texture = self.device.create_texture_with_data(
            &self.queue,
            &wgpu::TextureDescriptor {
                label: Some("tileset"),
                size: wgpu::Extent3d { width, height, depth_or_array_layers: 1 },
                mip_level_count: 1,
                sample_count: 1,
                dimension: wgpu::TextureDimension::D2,
                format: wgpu::TextureFormat::Rgba8UnormSrgb,
                usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
                view_formats: &[],
            },
            wgpu::util::TextureDataOrder::LayerMajor,
            image.as_raw(),
        );

        let texture_view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let sampler = self.device.create_sampler(&wgpu::SamplerDescriptor {
            mag_filter: wgpu::FilterMode::Nearest,
            min_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        let bind_group = self.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("tileset_bg"),
            layout: &self.pipeline.atlas_bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&texture_view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&sampler),
                },
            ],
        });

        let index = self.texture_bind_groups.len();
        self.texture_bind_groups.push(bind_group);
        debug!(index, width, height, "texture uploaded");
        Ok(GpuTexture { index, width, height })
    }

    fn blit(&mut self, texture: &GpuTexture, region: TileRegion, x: i64, y: i64) {
        trace!(x, y, ?region, "blit");
        let (uv_min, uv_max) = region.uv(texture.width, texture.height);
        let quad = tile_quad(
            x as f32,
            y as f32,
            region.width as f32,
            region.height as f32,
            uv_min,
            uv_max,
        );

        let start = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&quad);
        let end = self.vertices.len() as u32;

        match self.batches.last_mut() {
            Some(batch) if batch.texture == texture.index => batch.vertices.end = end,
            _ => self.batches.push(Batch { texture: texture.index, vertices: start..end }),
        }
    }
}
