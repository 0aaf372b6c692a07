use crate::error::{Error, Result};
use crate::img::RawImage;
use log::error;
use pixels::{Pixels, SurfaceTexture};
use std::cmp::{max, min};
use winit::{
    dpi::PhysicalSize,
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::{Window, WindowBuilder},
};

pub struct Gfx {
    pub window: Window,
    pixels: Pixels,
}

impl Gfx {
    pub fn new(width: u32, height: u32, title: &str) -> Result<(Self, EventLoop<()>)> {
        // dumps are tiny, scale them up to roughly fill a 1500x1000 area
        let pixel_scale = max(1, min(1000 / height.max(1), 1500 / width.max(1)));
        let event_loop = EventLoop::new();
        let physical_size = PhysicalSize::new(width * pixel_scale, height * pixel_scale);

        let window = WindowBuilder::new()
            .with_title(title)
            .with_inner_size(physical_size)
            .with_resizable(false)
            .build(&event_loop)
            .map_err(|e| Error::Preview(e.to_string()))?;

        // the surface is window sized, the frame buffer stays at width x height
        let surface_texture =
            SurfaceTexture::new(physical_size.width, physical_size.height, &window);
        let pixels =
            Pixels::new(width, height, surface_texture).map_err(|e| Error::Preview(e.to_string()))?;

        Ok((Gfx { window, pixels }, event_loop))
    }

    pub fn render(&mut self) -> Result<()> {
        self.pixels
            .render()
            .map_err(|e| Error::Preview(e.to_string()))
    }

    pub fn display(&mut self, img: &RawImage) {
        let rgba = img.to_rgba();
        let frame = self.pixels.frame_mut();
        let n = min(frame.len(), rgba.len());
        frame[..n].copy_from_slice(&rgba[..n]);
    }
}

/// Shows `img` in a window until it is closed.
pub fn show(img: &RawImage, title: &str) -> Result<()> {
    let (mut gfx, event_loop) = Gfx::new(img.width, img.height, title)?;
    gfx.display(img);
    gfx.window.request_redraw();

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => *control_flow = ControlFlow::Exit,
            Event::RedrawRequested(_) => {
                if let Err(e) = gfx.render() {
                    error!("{}", e);
                    *control_flow = ControlFlow::Exit;
                }
            }
            _ => {}
        }
    })
}
