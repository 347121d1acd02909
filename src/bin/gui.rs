use clap::Parser;
use log::{error, info};
use mandelbrot_explorer::input::gui::GuiInputQueue;
use mandelbrot_explorer::presenters::pixels::presenter::PixelsPresenter;
use mandelbrot_explorer::{CliArgs, FrameLoop, FrameOutcome};
use std::error::Error;
use winit::{
    dpi::PhysicalSize,
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    keyboard::PhysicalKey,
    window::{Window, WindowBuilder},
};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let args = CliArgs::parse();
    let config = args.to_config().validate()?;
    info!("{:?}", config);

    let event_loop = EventLoop::new()?;

    // Leak the window to get a 'static reference for pixels
    let window: &'static Window = Box::leak(Box::new(
        WindowBuilder::new()
            .with_title("Mandelbrot")
            .with_inner_size(PhysicalSize::new(
                config.grid_size.width(),
                config.grid_size.height(),
            ))
            .with_resizable(false)
            .build(&event_loop)?,
    ));

    let mut presenter = PixelsPresenter::new(window, config.grid_size)?;
    let mut input = GuiInputQueue::new(config.grid_size);
    let mut frame_loop = FrameLoop::new(&config);
    let mut failure: Option<Box<dyn Error>> = None;

    event_loop.run(|event, elwt| match event {
        Event::WindowEvent { event, window_id } if window_id == window.id() => match event {
            WindowEvent::CloseRequested => input.handle_close_requested(),
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key_code) = event.physical_key {
                    input.handle_key_event(key_code, event.state);
                }
            }
            WindowEvent::CursorMoved { position, .. } => input.handle_cursor_moved(position),
            WindowEvent::MouseInput { state, button, .. } => {
                input.handle_mouse_input(button, state, window.inner_size());
            }
            WindowEvent::MouseWheel { delta, .. } => input.handle_scroll(delta),
            WindowEvent::Resized(size) => {
                if let Err(err) = presenter.resize_surface(size.width, size.height) {
                    error!("resize failed: {}", err);
                    failure = Some(Box::new(err));
                    elwt.exit();
                }
            }
            WindowEvent::RedrawRequested => match frame_loop.step(&mut input, &mut presenter) {
                Ok(FrameOutcome::Presented(_)) => {}
                Ok(FrameOutcome::Terminated) => elwt.exit(),
                Err(err) => {
                    failure = Some(Box::new(err));
                    elwt.exit();
                }
            },
            _ => {}
        },
        Event::AboutToWait => window.request_redraw(),
        _ => {}
    })?;

    match failure {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
