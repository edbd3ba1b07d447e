use crate::core::TrailState;
use crate::frame::FrameLoop;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub container: web::Element,
    pub trail: Rc<RefCell<TrailState>>,
    pub frame_loop: FrameLoop,
}

/// Enter/leave listeners on the container plus the window move listener they
/// toggle. The closures are kept here so detaching removes exactly the
/// functions that were attached.
pub struct PointerListeners {
    container: web::Element,
    window: web::Window,
    trail: Rc<RefCell<TrailState>>,
    on_move: Closure<dyn FnMut(web::PointerEvent)>,
    on_enter: Closure<dyn FnMut(web::PointerEvent)>,
    on_leave: Closure<dyn FnMut(web::PointerEvent)>,
}

#[inline]
pub fn pointer_client_pos(ev: &web::PointerEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

fn move_fn(on_move: &Closure<dyn FnMut(web::PointerEvent)>) -> js_sys::Function {
    on_move.as_ref().unchecked_ref::<js_sys::Function>().clone()
}

pub fn wire_input_handlers(w: InputWiring) -> anyhow::Result<PointerListeners> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;

    let trail_move = w.trail.clone();
    let on_move = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        trail_move.borrow_mut().pointer_moved(pointer_client_pos(&ev));
    }) as Box<dyn FnMut(_)>);
    let move_enter = move_fn(&on_move);
    let move_leave = move_fn(&on_move);

    let trail_enter = w.trail.clone();
    let window_enter = window.clone();
    let frame_loop = w.frame_loop.clone();
    let on_enter = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        {
            let mut trail = trail_enter.borrow_mut();
            if !trail.engage() {
                return;
            }
            trail.pointer_moved(pointer_client_pos(&ev));
        }
        _ = window_enter.add_event_listener_with_callback("pointermove", &move_enter);
        frame_loop.start();
        log::debug!("[pointer] engaged");
    }) as Box<dyn FnMut(_)>);

    let trail_leave = w.trail.clone();
    let window_leave = window.clone();
    let on_leave = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        if !trail_leave.borrow_mut().disengage() {
            return;
        }
        _ = window_leave.remove_event_listener_with_callback("pointermove", &move_leave);
        log::debug!("[pointer] disengaged");
    }) as Box<dyn FnMut(_)>);

    w.container
        .add_event_listener_with_callback("pointerenter", on_enter.as_ref().unchecked_ref())
        .map_err(|e| anyhow::anyhow!("attach pointerenter: {:?}", e))?;
    w.container
        .add_event_listener_with_callback("pointerleave", on_leave.as_ref().unchecked_ref())
        .map_err(|e| anyhow::anyhow!("attach pointerleave: {:?}", e))?;

    Ok(PointerListeners {
        container: w.container,
        window,
        trail: w.trail,
        on_move,
        on_enter,
        on_leave,
    })
}

impl Drop for PointerListeners {
    fn drop(&mut self) {
        _ = self.container.remove_event_listener_with_callback(
            "pointerenter",
            self.on_enter.as_ref().unchecked_ref(),
        );
        _ = self.container.remove_event_listener_with_callback(
            "pointerleave",
            self.on_leave.as_ref().unchecked_ref(),
        );
        _ = self
            .window
            .remove_event_listener_with_callback("pointermove", self.on_move.as_ref().unchecked_ref());
        if let Ok(mut trail) = self.trail.try_borrow_mut() {
            trail.disengage();
        }
    }
}
