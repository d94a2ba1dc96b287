use instant::Instant;
use snapdeck_core::{
    DeckConfig, Frame, InputEvent, NavKey, SlideBridge, SlideController, SlideRequest,
};
use std::cell::RefCell;
use std::rc::Rc;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, Event, MouseScrollDelta, TouchPhase, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::keyboard::{Key, NamedKey};
use winit::window::WindowBuilder;

const DEFAULT_SLIDES: usize = 11;
// Pixels per wheel line when the platform reports line deltas.
const LINE_HEIGHT_PX: f64 = 40.0;

/// Virtual scroll surface standing in for a DOM container.
struct Viewer {
    controller: SlideController,
    offset: f64,
    origin: Instant,
}

impl Viewer {
    fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }

    fn input(&mut self, event: InputEvent) {
        let now = self.now_ms();
        if let Some(tween) = self.controller.handle_input(event, self.offset, now).started {
            log::info!("[input] {:?} -> slide {}", event, tween.target_index);
        }
    }

    fn request(&mut self, request: SlideRequest) {
        let now = self.now_ms();
        self.controller.request(request, self.offset, now);
    }

    fn frame(&mut self) -> Option<usize> {
        let now = self.now_ms();
        match self.controller.frame(now)? {
            Frame::Moving { offset } => {
                self.offset = offset;
                log::debug!("[frame] offset {:.1}px", offset);
                None
            }
            Frame::Landed { offset, index } => {
                self.offset = offset;
                Some(index)
            }
        }
    }
}

fn slide_title(index: usize, total: usize) -> String {
    format!("snapdeck: slide {}/{}", index + 1, total)
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let total = match std::env::args().nth(1) {
        Some(arg) => arg
            .parse::<usize>()
            .map_err(|e| anyhow::anyhow!("slide count {:?}: {}", arg, e))?,
        None => DEFAULT_SLIDES,
    };
    let config = DeckConfig::new(total)?;

    let event_loop = EventLoop::new()?;
    let window = Rc::new(
        WindowBuilder::new()
            .with_title(slide_title(0, total))
            .with_inner_size(LogicalSize::new(960.0, 720.0))
            .build(&event_loop)?,
    );

    let height = window.inner_size().height as f64;
    let viewer = Rc::new(RefCell::new(Viewer {
        controller: SlideController::new(config, height),
        offset: 0.0,
        origin: Instant::now(),
    }));

    // The window title is a bridge consumer; so is the Home key below.
    let bridge = SlideBridge::new();
    let binding = {
        let viewer = Rc::downgrade(&viewer);
        bridge.bind(0, move |index| {
            if let Some(viewer) = viewer.upgrade() {
                viewer.borrow_mut().request(SlideRequest::To(index));
            }
        })?
    };
    let _title = {
        let window = window.clone();
        bridge.subscribe(move |index| window.set_title(&slide_title(index, total)))
    };

    let mut touch: Option<u64> = None;
    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::Resized(size) => {
                let mut v = viewer.borrow_mut();
                if let Some(offset) = v.controller.set_viewport_height(size.height as f64) {
                    v.offset = offset;
                }
            }
            WindowEvent::MouseWheel { delta, .. } => {
                // winit reports positive y for scrolling up; flip to DOM sign.
                let delta_y = match delta {
                    MouseScrollDelta::LineDelta(_, y) => -(y as f64) * LINE_HEIGHT_PX,
                    MouseScrollDelta::PixelDelta(p) => -p.y,
                };
                viewer.borrow_mut().input(InputEvent::Wheel { delta_y });
            }
            WindowEvent::Touch(t) => {
                let event = match t.phase {
                    TouchPhase::Started if touch.is_none() => {
                        touch = Some(t.id);
                        Some(InputEvent::TouchStart { y: t.location.y })
                    }
                    // A second finger aborts the swipe.
                    TouchPhase::Started => {
                        touch = None;
                        Some(InputEvent::TouchCancel)
                    }
                    TouchPhase::Moved => None,
                    TouchPhase::Ended if touch == Some(t.id) => {
                        touch = None;
                        Some(InputEvent::TouchEnd { y: t.location.y })
                    }
                    TouchPhase::Cancelled if touch == Some(t.id) => {
                        touch = None;
                        Some(InputEvent::TouchCancel)
                    }
                    TouchPhase::Ended | TouchPhase::Cancelled => None,
                };
                if let Some(event) = event {
                    viewer.borrow_mut().input(event);
                }
            }
            WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed => {
                let name = match &event.logical_key {
                    Key::Named(NamedKey::ArrowDown) => Some("ArrowDown"),
                    Key::Named(NamedKey::ArrowUp) => Some("ArrowUp"),
                    Key::Named(NamedKey::PageDown) => Some("PageDown"),
                    Key::Named(NamedKey::PageUp) => Some("PageUp"),
                    Key::Named(NamedKey::Home) => {
                        bridge.jump(0);
                        None
                    }
                    Key::Named(NamedKey::Escape) => {
                        elwt.exit();
                        None
                    }
                    _ => None,
                };
                if let Some(key) = name.and_then(NavKey::from_key) {
                    viewer.borrow_mut().input(InputEvent::Key(key));
                }
            }
            WindowEvent::RedrawRequested => {
                let landed = viewer.borrow_mut().frame();
                if let Some(index) = landed {
                    log::info!("[deck] landed on slide {}", index);
                    binding.publish(index);
                }
            }
            _ => {}
        },
        Event::AboutToWait => {
            if viewer.borrow().controller.is_animating() {
                window.request_redraw();
                elwt.set_control_flow(ControlFlow::Poll);
            } else {
                elwt.set_control_flow(ControlFlow::Wait);
            }
        }
        _ => {}
    })?;
    Ok(())
}
