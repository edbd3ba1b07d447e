use crate::core::{ElementStyle, TrailConfig, SLOT_SELECTOR};
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Collect the pooled trail elements under `container`, in document order.
pub fn collect_slots(container: &web::Element) -> anyhow::Result<Vec<web::HtmlElement>> {
    let nodes = container
        .query_selector_all(SLOT_SELECTOR)
        .map_err(|e| anyhow::anyhow!("query {} failed: {:?}", SLOT_SELECTOR, e))?;
    let mut slots = Vec::with_capacity(nodes.length() as usize);
    for i in 0..nodes.length() {
        let Some(node) = nodes.get(i) else {
            continue;
        };
        let el = node
            .dyn_into::<web::HtmlElement>()
            .map_err(|_| anyhow::anyhow!("{} #{} is not an HTML element", SLOT_SELECTOR, i))?;
        slots.push(el);
    }
    Ok(slots)
}

pub fn apply_style(el: &web::HtmlElement, style: &ElementStyle) {
    let css = el.style();
    _ = css.set_property("opacity", &format!("{:.4}", style.opacity));
    _ = css.set_property("z-index", &style.z_index.to_string());
    _ = css.set_property(
        "transform",
        &format!(
            "translate({:.2}px, {:.2}px) scale({:.4})",
            style.x, style.y, style.scale
        ),
    );
}

fn parse_attr(el: &web::Element, name: &str) -> Option<f32> {
    let raw = el.get_attribute(name)?;
    match raw.trim().parse::<f32>() {
        Ok(v) if v.is_finite() => Some(v),
        _ => {
            log::warn!("[config] ignoring {}={:?}", name, raw);
            None
        }
    }
}

/// Defaults overridden by `data-trail-*` attributes on the container.
pub fn read_config(container: &web::Element) -> TrailConfig {
    let mut config = TrailConfig::default();
    if let Some(v) = parse_attr(container, "data-trail-threshold") {
        if v >= 0.0 {
            config.threshold = v;
        } else {
            log::warn!("[config] threshold must be non-negative, got {}", v);
        }
    }
    if let Some(v) = parse_attr(container, "data-trail-smoothing") {
        if v > 0.0 && v <= 1.0 {
            config.smoothing = v;
        } else {
            log::warn!("[config] smoothing must be in (0, 1], got {}", v);
        }
    }
    let ox = parse_attr(container, "data-trail-offset-x");
    let oy = parse_attr(container, "data-trail-offset-y");
    if ox.is_some() || oy.is_some() {
        config.element_offset = Vec2::new(
            ox.unwrap_or(config.element_offset.x),
            oy.unwrap_or(config.element_offset.y),
        );
    }
    config
}
