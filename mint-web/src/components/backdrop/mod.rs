//! Animated canvas background.
//!
//! Geometry lives in [`scene`]; this module only owns the canvas, keeps it
//! sized to the window and replays the draw commands once per animation frame.

pub mod scene;

use std::cell::Cell;
use std::f64::consts::TAU;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use scene::{accent, compose, DrawOp, Phase, Viewport, LINE_WIDTH};

struct Painter {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    phase: Cell<Phase>,
}

impl Painter {
    fn new(canvas: HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self {
            canvas,
            ctx,
            phase: Cell::new(Phase::default()),
        })
    }

    fn fit_to_window(&self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let dimension = |v: Result<wasm_bindgen::JsValue, _>| {
            v.ok().and_then(|v| v.as_f64()).unwrap_or_default() as u32
        };
        self.canvas.set_width(dimension(window.inner_width()));
        self.canvas.set_height(dimension(window.inner_height()));
    }

    fn viewport(&self) -> Viewport {
        Viewport {
            width: f64::from(self.canvas.width()),
            height: f64::from(self.canvas.height()),
        }
    }

    fn draw_next(&self) {
        let phase = self.phase.get();
        let viewport = self.viewport();
        let ctx = &self.ctx;
        ctx.set_line_width(LINE_WIDTH);

        for op in compose(phase, viewport) {
            match op {
                DrawOp::Clear => ctx.clear_rect(0.0, 0.0, viewport.width, viewport.height),
                DrawOp::Line { from, to, alpha } => {
                    ctx.set_stroke_style_str(&accent(alpha));
                    ctx.begin_path();
                    ctx.move_to(from.x, from.y);
                    ctx.line_to(to.x, to.y);
                    ctx.stroke();
                }
                DrawOp::Ring { center, radius, alpha } => {
                    ctx.set_stroke_style_str(&accent(alpha));
                    ctx.begin_path();
                    if ctx.arc(center.x, center.y, radius, 0.0, TAU).is_ok() {
                        ctx.stroke();
                    }
                }
                DrawOp::Dot { center, radius, alpha } => {
                    ctx.set_fill_style_str(&accent(alpha));
                    ctx.begin_path();
                    if ctx.arc(center.x, center.y, radius, 0.0, TAU).is_ok() {
                        ctx.fill();
                    }
                }
            }
        }

        self.phase.set(phase.step());
    }
}

type FrameCallback = Box<dyn FnOnce()>;

/// Draw on every frame handed out by `request` until `alive` is cleared.
///
/// Once cleared, the pending frame returns without drawing and no further
/// frame is requested.
fn schedule_frame<D, S>(draw: Rc<D>, alive: Arc<AtomicBool>, request: S)
where
    D: Fn() + 'static,
    S: Fn(FrameCallback) + Clone + 'static,
{
    let next = request.clone();
    request(Box::new(move || {
        if !alive.load(Ordering::Relaxed) {
            return;
        }
        (*draw)();
        schedule_frame(draw, alive, next);
    }));
}

#[component]
pub fn Backdrop() -> impl IntoView {
    let canvas_ref = NodeRef::<html::Canvas>::new();

    Effect::new(move |_| {
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        let Some(painter) = Painter::new(canvas) else {
            log::warn!("Canvas 2d context unavailable, background disabled");
            return;
        };

        let painter = Rc::new(painter);
        painter.fit_to_window();

        let on_resize = Rc::clone(&painter);
        let resize = window_event_listener(ev::resize, move |_| on_resize.fit_to_window());

        let alive = Arc::new(AtomicBool::new(true));
        let guard = Arc::clone(&alive);
        on_cleanup(move || {
            guard.store(false, Ordering::Relaxed);
            resize.remove();
        });

        let draw = Rc::new(move || painter.draw_next());
        schedule_frame(draw, alive, |frame: FrameCallback| request_animation_frame(frame));
    });

    view! {
        <canvas node_ref=canvas_ref class="backdrop-canvas" aria-hidden="true"></canvas>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_frames_stop_after_cleanup() {
        let pending: Rc<RefCell<Vec<FrameCallback>>> = Rc::default();
        let draws = Rc::new(Cell::new(0));
        let alive = Arc::new(AtomicBool::new(true));

        let queue = Rc::clone(&pending);
        let counter = Rc::clone(&draws);
        schedule_frame(
            Rc::new(move || counter.set(counter.get() + 1)),
            Arc::clone(&alive),
            move |frame| queue.borrow_mut().push(frame),
        );

        let run_frames = || {
            let frames: Vec<FrameCallback> = pending.borrow_mut().drain(..).collect();
            for frame in frames {
                frame();
            }
        };

        for _ in 0..3 {
            run_frames();
        }
        assert_eq!(draws.get(), 3);
        assert_eq!(pending.borrow().len(), 1);

        alive.store(false, Ordering::Relaxed);
        run_frames();
        assert_eq!(draws.get(), 3);
        assert!(pending.borrow().is_empty());
    }
}
