// Trail tuning constants shared by the core state machine and the web frontend.

// Trigger
pub const SPAWN_DISTANCE_THRESHOLD: f32 = 80.0; // viewport px between spawns
pub const SMOOTHING_FACTOR: f32 = 0.1; // lerp weight toward the raw pointer per frame

// Element placement: half of the element box, so the image is centred on the pointer
pub const ELEMENT_OFFSET: [f32; 2] = [50.0, 50.0];

// Stacking
pub const Z_INDEX_BASE: u32 = 1;

// Phase A: pop in and travel from the smoothed position to the pointer
pub const APPEAR_OFFSET_SEC: f32 = 0.0;
pub const APPEAR_DURATION_SEC: f32 = 0.4;
pub const APPEAR_SCALE_FROM: f32 = 0.0;
pub const APPEAR_SCALE_TO: f32 = 1.0;

// Phase B: fade and shrink, overlapping the tail of phase A's timeline
pub const FADE_OFFSET_SEC: f32 = 0.45;
pub const FADE_DURATION_SEC: f32 = 0.4;
pub const FADE_SCALE_TO: f32 = 0.2;

// DOM hooks
pub const DEFAULT_CONTAINER_SELECTOR: &str = ".content";
pub const SLOT_SELECTOR: &str = ".content__div";
pub const LOADING_CLASS: &str = "loading";
pub const READY_EVENT: &str = "imagetrail:ready";
