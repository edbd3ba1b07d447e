#![cfg(target_arch = "wasm32")]
use crate::core::{TrailState, DEFAULT_CONTAINER_SELECTOR};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod core;
mod dom;
mod events;
mod frame;
mod overlay;

thread_local! {
    static DEFAULT_TRAIL: RefCell<Option<ImageTrail>> = const { RefCell::new(None) };
}

/// A mounted image trail. Dropping it (or calling `destroy`) cancels the
/// frame loop and detaches every listener it added.
#[wasm_bindgen]
pub struct ImageTrail {
    // Dropped first so no enter handler can restart the loop.
    _listeners: events::PointerListeners,
    frame_loop: frame::FrameLoop,
    trail: Rc<RefCell<TrailState>>,
}

#[wasm_bindgen]
impl ImageTrail {
    #[wasm_bindgen(constructor)]
    pub fn new(container: web::Element) -> Result<ImageTrail, JsValue> {
        mount(container).map_err(|e| JsValue::from_str(&format!("{:#}", e)))
    }

    pub fn destroy(self) {
        if self.frame_loop.is_running() {
            log::debug!("[trail] cancelling pending frame");
        }
        self.frame_loop.stop();
        log::info!("[trail] destroyed");
    }

    #[wasm_bindgen(js_name = isIdle)]
    pub fn is_idle(&self) -> bool {
        self.trail.borrow().is_idle()
    }

    #[wasm_bindgen(js_name = isEngaged)]
    pub fn is_engaged(&self) -> bool {
        self.trail.borrow().is_engaged()
    }

    #[wasm_bindgen(js_name = slotCount)]
    pub fn slot_count(&self) -> usize {
        self.trail.borrow().pool_size()
    }
}

fn mount(container: web::Element) -> anyhow::Result<ImageTrail> {
    let slots = dom::collect_slots(&container)?;
    let config = dom::read_config(&container);
    let trail = Rc::new(RefCell::new(TrailState::new(slots.len(), config)?));
    log::info!(
        "[trail] pool={} threshold={:.1} smoothing={:.2}",
        slots.len(),
        trail.borrow().config.threshold,
        trail.borrow().config.smoothing
    );

    let frame_loop = frame::FrameLoop::new(frame::FrameContext::new(trail.clone(), slots));
    let listeners = events::wire_input_handlers(events::InputWiring {
        container: container.clone(),
        trail: trail.clone(),
        frame_loop: frame_loop.clone(),
    })?;

    overlay::signal_ready(&container);

    Ok(ImageTrail {
        _listeners: listeners,
        frame_loop,
        trail,
    })
}

fn mount_default() -> anyhow::Result<Option<ImageTrail>> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let Some(container) = document
        .query_selector(DEFAULT_CONTAINER_SELECTOR)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
    else {
        return Ok(None);
    };
    mount(container).map(Some)
}

/// Tear down the trail mounted automatically at start, if any.
#[wasm_bindgen(js_name = unmountDefault)]
pub fn unmount_default() {
    if let Some(trail) = DEFAULT_TRAIL.with(|t| t.borrow_mut().take()) {
        trail.destroy();
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("image-trail starting");

    match mount_default() {
        Ok(Some(trail)) => DEFAULT_TRAIL.with(|t| *t.borrow_mut() = Some(trail)),
        Ok(None) => log::info!(
            "[trail] no {} container, waiting for manual mount",
            DEFAULT_CONTAINER_SELECTOR
        ),
        Err(e) => log::warn!("[trail] auto-mount skipped: {:#}", e),
    }
    Ok(())
}
