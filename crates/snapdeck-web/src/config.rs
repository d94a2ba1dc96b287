use crate::attrs::{parse_millis, parse_slide_count};
use crate::constants::{DATA_DURATION_MS, DATA_SETTLE_MS, DATA_SLIDES};
use snapdeck_core::{DeckConfig, Timing};
use web_sys as web;

/// Build a deck configuration from the container's data attributes,
/// counting child elements when `data-slides` is absent.
pub fn from_element(el: &web::Element) -> anyhow::Result<DeckConfig> {
    let total = parse_slide_count(el.get_attribute(DATA_SLIDES).as_deref())
        .unwrap_or(el.child_element_count() as usize);
    let defaults = Timing::default();
    let duration = parse_millis(el.get_attribute(DATA_DURATION_MS).as_deref())
        .unwrap_or(defaults.duration_ms());
    let settle = parse_millis(el.get_attribute(DATA_SETTLE_MS).as_deref())
        .unwrap_or(defaults.settle_ms());
    let config = DeckConfig::new(total)?.with_timing(Timing::new(duration, settle)?);
    Ok(config)
}
