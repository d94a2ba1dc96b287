// DOM hooks shared with the host page.

// Elements
pub const CONTAINER_ID: &str = "snap-container"; // default scroll container id
pub const TO_TOP_ID: &str = "to-top"; // "return to top" button, optional

// Classes toggled by the controller
pub const VISIBLE_CLASS: &str = "is-visible"; // on the to-top button past half a slide
pub const CURRENT_CLASS: &str = "is-current"; // on the landed slide section

// Container data attributes
pub const DATA_SLIDES: &str = "data-slides";
pub const DATA_DURATION_MS: &str = "data-duration-ms";
pub const DATA_SETTLE_MS: &str = "data-settle-ms";
