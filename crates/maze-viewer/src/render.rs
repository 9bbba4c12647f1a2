// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Render helper: uploads block instances and draws the maze + egui.

use crate::{
    gpu::{Globals, Instance},
    viewport::Viewport,
};
use egui_wgpu::wgpu;
use glam::Mat4;
use tracing::{error, warn};

const LIGHT_DIR: [f32; 3] = [0.3, 0.8, 0.5];
const SKY: wgpu::Color = wgpu::Color {
    r: 0.02,
    g: 0.02,
    b: 0.04,
    a: 1.0,
};

pub struct FrameInput<'a> {
    pub instances: &'a [Instance],
    pub view_proj: Mat4,
    pub wireframe: bool,
    pub paint_jobs: Vec<egui::epaint::ClippedPrimitive>,
    pub textures_delta: egui::TexturesDelta,
    pub screen_desc: egui_wgpu::ScreenDescriptor,
}

pub enum RenderOutcome {
    Presented,
    Skipped,
    /// Device is out of memory; the caller should exit.
    Fatal,
}

pub fn render_frame(vp: &mut Viewport, input: FrameInput<'_>) -> RenderOutcome {
    let FrameInput {
        instances,
        view_proj,
        wireframe,
        paint_jobs,
        textures_delta,
        screen_desc,
    } = input;
    let gpu = &mut vp.gpu;

    let globals = Globals {
        view_proj: view_proj.to_cols_array_2d(),
        light_dir: LIGHT_DIR,
        _pad: 0.0,
    };
    gpu.queue
        .write_buffer(&gpu.globals_buf, 0, bytemuck::bytes_of(&globals));

    gpu.ensure_instance_capacity(instances.len());
    gpu.queue
        .write_buffer(&gpu.instance_buf, 0, bytemuck::cast_slice(instances));

    let frame = match gpu.surface.get_current_texture() {
        Ok(f) => f,
        Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
            gpu.resize(egui_winit::winit::dpi::PhysicalSize::new(
                gpu.config.width,
                gpu.config.height,
            ));
            match gpu.surface.get_current_texture() {
                Ok(f) => f,
                Err(err) => {
                    warn!(%err, "surface unavailable after reconfigure");
                    return RenderOutcome::Skipped;
                }
            }
        }
        Err(wgpu::SurfaceError::OutOfMemory) => {
            error!("surface out of memory");
            return RenderOutcome::Fatal;
        }
        Err(_) => return RenderOutcome::Skipped,
    };
    let view = frame
        .texture
        .create_view(&wgpu::TextureViewDescriptor::default());
    let (color_view, resolve_view) = if let Some(msaa) = &gpu.msaa_view {
        (msaa, Some(&view))
    } else {
        (&view, None)
    };

    let mut encoder = gpu
        .device
        .create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("main-encoder"),
        });

    {
        let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("main"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: color_view,
                resolve_target: resolve_view,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(SKY),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: &gpu.depth,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(1.0),
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            occlusion_query_set: None,
            timestamp_writes: None,
        });

        if !instances.is_empty() {
            let pipeline = if wireframe {
                &gpu.pipelines.wire
            } else {
                &gpu.pipelines.solid
            };
            rpass.set_pipeline(pipeline);
            rpass.set_bind_group(0, &gpu.bind_group, &[]);
            rpass.set_vertex_buffer(0, gpu.cube.vbuf.slice(..));
            rpass.set_vertex_buffer(
                1,
                gpu.instance_buf
                    .slice(..(instances.len() as u64 * std::mem::size_of::<Instance>() as u64)),
            );
            rpass.set_index_buffer(gpu.cube.ibuf.slice(..), wgpu::IndexFormat::Uint16);
            rpass.draw_indexed(0..gpu.cube.count, 0, 0..instances.len() as u32);
        }
    }

    let cmd_main = encoder.finish();

    let egui_renderer = &mut vp.egui_renderer;
    let cmd_ui = {
        let mut egui_encoder = gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("egui-encoder"),
            });

        for (id, delta) in textures_delta.set {
            egui_renderer.update_texture(&gpu.device, &gpu.queue, id, &delta);
        }
        egui_renderer.update_buffers(
            &gpu.device,
            &gpu.queue,
            &mut egui_encoder,
            &paint_jobs,
            &screen_desc,
        );
        {
            let rpass = egui_encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("egui"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                occlusion_query_set: None,
                timestamp_writes: None,
            });
            let mut rpass = rpass.forget_lifetime();
            egui_renderer.render(&mut rpass, &paint_jobs, &screen_desc);
        }
        for id in textures_delta.free {
            egui_renderer.free_texture(&id);
        }

        egui_encoder.finish()
    };

    gpu.queue.submit([cmd_main, cmd_ui]);
    frame.present();
    RenderOutcome::Presented
}
