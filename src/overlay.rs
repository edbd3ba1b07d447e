use crate::core::{LOADING_CLASS, READY_EVENT};
use web_sys as web;

/// One-shot readiness signal: drop the loading overlay and notify listeners.
pub fn signal_ready(container: &web::Element) {
    _ = container.class_list().remove_1(LOADING_CLASS);
    if let Ok(Some(wrapper)) = container.closest(&format!(".{}", LOADING_CLASS)) {
        _ = wrapper.class_list().remove_1(LOADING_CLASS);
    }
    match web::Event::new(READY_EVENT) {
        Ok(ev) => {
            _ = container.dispatch_event(&ev);
        }
        Err(e) => log::warn!("[overlay] could not create {}: {:?}", READY_EVENT, e),
    }
}
