/// Main application entry point
/// Handles window creation, input, and the fixed-rate frame loop
use anyhow::Context as _;
use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::{Duration, Instant};
use voxel_viewer::*;
use winit::{
    event::*,
    event_loop::{ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{CursorGrabMode, Window, WindowBuilder},
};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::args().nth(1) {
        Some(path) => ViewerConfig::load(&path).with_context(|| format!("loading {path}"))?,
        None => ViewerConfig::default(),
    };

    log::info!("=== Voxel Viewer - Software Rasterizer ===");
    log::info!("Controls: WASD move, Space/Shift up/down, mouse look, click to capture, ESC exit");

    let event_loop = EventLoop::new().context("creating event loop")?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title("Voxel Viewer")
            .with_inner_size(winit::dpi::PhysicalSize::new(
                config.screen_width as u32,
                config.screen_height as u32,
            ))
            .build(&event_loop)
            .context("creating window")?,
    );

    let context = softbuffer::Context::new(window.clone())
        .map_err(|e| anyhow::anyhow!("{e}"))
        .context("creating softbuffer context")?;
    let mut surface = softbuffer::Surface::new(&context, window.clone())
        .map_err(|e| anyhow::anyhow!("{e}"))
        .context("creating softbuffer surface")?;

    let build_start = Instant::now();
    let mut viewer = Viewer::new(&config);
    log::info!(
        "Startup: {:.2}ms ({} chunks, {} faces)",
        build_start.elapsed().as_secs_f64() * 1000.0,
        viewer.world().chunk_count(),
        viewer.world().face_count()
    );
    let size = window.inner_size();
    viewer
        .renderer_mut()
        .resize(size.width as usize, size.height as usize);

    let mut controller = config.camera_controller();
    let frame_budget = config.frame_duration();
    let mut next_frame = Instant::now();

    // Pointer motion accumulated between frames
    let mut pointer_delta = (0.0f64, 0.0f64);
    let mut mouse_captured = false;

    let mut frame_count = 0u32;
    let mut fps_timer = Instant::now();

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::Resized(new_size) => {
                viewer
                    .renderer_mut()
                    .resize(new_size.width as usize, new_size.height as usize);
            }
            WindowEvent::KeyboardInput { event, .. } => {
                let pressed = event.state == ElementState::Pressed;
                if let PhysicalKey::Code(keycode) = event.physical_key {
                    match keycode {
                        KeyCode::KeyW => controller.forward_pressed = pressed,
                        KeyCode::KeyS => controller.backward_pressed = pressed,
                        KeyCode::KeyA => controller.left_pressed = pressed,
                        KeyCode::KeyD => controller.right_pressed = pressed,
                        KeyCode::Space => controller.up_pressed = pressed,
                        KeyCode::ShiftLeft => controller.down_pressed = pressed,
                        KeyCode::KeyB if pressed => {
                            let rasterizer = &mut viewer.renderer_mut().rasterizer;
                            rasterizer.backface_culling = !rasterizer.backface_culling;
                            log::info!(
                                "Backface culling: {}",
                                if rasterizer.backface_culling { "ON" } else { "OFF" }
                            );
                        }
                        KeyCode::Escape if pressed => {
                            if mouse_captured {
                                mouse_captured = false;
                                release_cursor(&window);
                            } else {
                                elwt.exit();
                            }
                        }
                        _ => {}
                    }
                }
            }
            WindowEvent::MouseInput { state, button, .. } => {
                if button == MouseButton::Left && state == ElementState::Pressed {
                    mouse_captured = true;
                    capture_cursor(&window);
                }
            }
            WindowEvent::RedrawRequested => {
                let frame_start = Instant::now();

                let (dx, dy) = std::mem::take(&mut pointer_delta);
                let input = FrameInput {
                    movement: controller.movement_delta(viewer.camera()),
                    rotation: controller.rotation_delta(dx as f32, dy as f32),
                };
                viewer.update(input);

                let (width, height) = (viewer.renderer().width(), viewer.renderer().height());
                let (Some(w), Some(h)) = (
                    NonZeroU32::new(width as u32),
                    NonZeroU32::new(height as u32),
                ) else {
                    // Minimized
                    return;
                };
                if let Err(e) = present(&mut surface, w, h, viewer.render()) {
                    log::error!("Presenting frame failed: {e:#}");
                    elwt.exit();
                    return;
                }

                let frame_time = frame_start.elapsed();
                if frame_time > frame_budget {
                    log::warn!(
                        "Frame overran budget: {:.2}ms > {:.2}ms",
                        frame_time.as_secs_f64() * 1000.0,
                        frame_budget.as_secs_f64() * 1000.0
                    );
                }

                frame_count += 1;
                if fps_timer.elapsed() >= Duration::from_secs(1) {
                    let stats = viewer.last_frame_stats();
                    log::info!(
                        "FPS: {} | Faces: {} | Triangles: {} | Pixels: {}",
                        frame_count,
                        stats.faces_submitted,
                        stats.triangles_rasterized,
                        stats.pixels_written
                    );
                    #[cfg(feature = "profiling")]
                    {
                        FUNCTION_COUNTERS.snapshot().log_report();
                        FUNCTION_COUNTERS.reset();
                    }
                    frame_count = 0;
                    fps_timer = Instant::now();
                }
            }
            _ => {}
        },
        Event::DeviceEvent {
            event: DeviceEvent::MouseMotion { delta },
            ..
        } => {
            if mouse_captured {
                pointer_delta.0 += delta.0;
                pointer_delta.1 += delta.1;
            }
        }
        Event::AboutToWait => {
            // Fixed pacing: one update + render per frame slot
            let now = Instant::now();
            if now >= next_frame {
                window.request_redraw();
                next_frame += frame_budget;
                if next_frame < now {
                    next_frame = now + frame_budget;
                }
            }
            elwt.set_control_flow(ControlFlow::WaitUntil(next_frame));
        }
        _ => {}
    })?;

    Ok(())
}

fn present(
    surface: &mut softbuffer::Surface<Arc<Window>, Arc<Window>>,
    width: NonZeroU32,
    height: NonZeroU32,
    pixels: &[u32],
) -> anyhow::Result<()> {
    surface
        .resize(width, height)
        .map_err(|e| anyhow::anyhow!("{e}"))
        .context("resizing surface")?;
    let mut buffer = surface
        .buffer_mut()
        .map_err(|e| anyhow::anyhow!("{e}"))
        .context("acquiring surface buffer")?;
    buffer.copy_from_slice(pixels);
    buffer
        .present()
        .map_err(|e| anyhow::anyhow!("{e}"))
        .context("presenting buffer")?;
    Ok(())
}

fn capture_cursor(window: &Window) {
    let grabbed = window
        .set_cursor_grab(CursorGrabMode::Locked)
        .or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined));
    if let Err(e) = grabbed {
        log::warn!("Cursor grab unavailable: {e}");
    }
    window.set_cursor_visible(false);
}

fn release_cursor(window: &Window) {
    let _ = window.set_cursor_grab(CursorGrabMode::None);
    window.set_cursor_visible(true);
}
