use crate::core::{StyleUpdate, TrailState};
use crate::dom;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub trail: Rc<RefCell<TrailState>>,
    pub slots: Vec<web::HtmlElement>,
    pub origin: Instant,
    pub updates: Vec<StyleUpdate>,
}

impl FrameContext {
    pub fn new(trail: Rc<RefCell<TrailState>>, slots: Vec<web::HtmlElement>) -> Self {
        let capacity = slots.len();
        Self {
            trail,
            slots,
            origin: Instant::now(),
            updates: Vec::with_capacity(capacity),
        }
    }

    /// Run one frame; returns whether another frame is wanted.
    pub fn frame(&mut self) -> bool {
        let now = self.origin.elapsed().as_secs_f64();
        self.updates.clear();
        let report = self.trail.borrow_mut().frame(now, &mut self.updates);

        for update in &self.updates {
            if let Some(el) = self.slots.get(update.slot) {
                dom::apply_style(el, &update.style);
            }
        }
        if !report.completed.is_empty() {
            log::debug!("[frame] completed slots {:?}", report.completed);
        }
        report.keep_running
    }
}

struct LoopInner {
    ctx: RefCell<FrameContext>,
    tick: RefCell<Option<Closure<dyn FnMut()>>>,
    handle: Cell<Option<i32>>,
}

impl LoopInner {
    fn schedule(&self) {
        if self.handle.get().is_some() {
            return;
        }
        let Some(window) = web::window() else {
            return;
        };
        let tick = self.tick.borrow();
        let Some(tick) = tick.as_ref() else {
            return;
        };
        match window.request_animation_frame(tick.as_ref().unchecked_ref()) {
            Ok(id) => self.handle.set(Some(id)),
            Err(e) => log::error!("[frame] requestAnimationFrame failed: {:?}", e),
        }
    }

    fn cancel(&self) {
        if let Some(id) = self.handle.take() {
            if let Some(window) = web::window() {
                _ = window.cancel_animation_frame(id);
            }
        }
    }
}

impl Drop for LoopInner {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// requestAnimationFrame loop with an explicit start/stop handle.
///
/// The loop parks itself (stops re-requesting frames) once the trail no
/// longer wants frames; `start` wakes it again. The tick closure only holds a
/// weak reference, so dropping the last handle cancels everything.
#[derive(Clone)]
pub struct FrameLoop {
    inner: Rc<LoopInner>,
}

impl FrameLoop {
    pub fn new(ctx: FrameContext) -> Self {
        let inner = Rc::new_cyclic(|weak: &Weak<LoopInner>| {
            let weak = weak.clone();
            let tick = Closure::wrap(Box::new(move || {
                let Some(inner) = weak.upgrade() else {
                    return;
                };
                inner.handle.set(None);
                let keep_running = inner.ctx.borrow_mut().frame();
                if keep_running {
                    inner.schedule();
                } else {
                    log::debug!("[frame] loop parked");
                }
            }) as Box<dyn FnMut()>);
            LoopInner {
                ctx: RefCell::new(ctx),
                tick: RefCell::new(Some(tick)),
                handle: Cell::new(None),
            }
        });
        Self { inner }
    }

    pub fn start(&self) {
        self.inner.schedule();
    }

    pub fn stop(&self) {
        self.inner.cancel();
    }

    pub fn is_running(&self) -> bool {
        self.inner.handle.get().is_some()
    }
}
