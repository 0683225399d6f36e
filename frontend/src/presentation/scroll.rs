//! Pure mapping from the window's scroll offset to the welcome section's
//! shrink/fade parameters. Everything here is total: negative offsets, NaN and
//! degenerate thresholds all land on a defined value.

const SHRINK_START_FRACTION: f64 = 0.3;
// Shrinks to 20% of original size and fades to 30% opacity.
const SCALE_RANGE: f64 = 0.8;
const FADE_RANGE: f64 = 0.7;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollState {
    pub scroll_y: f64,
    pub is_scrolled: bool,
    pub show_main_content: bool,
}

impl ScrollState {
    pub fn from_offset(scroll_y: f64, hide_welcome: f64) -> Self {
        let scroll_y = sanitize(scroll_y);
        Self {
            scroll_y,
            is_scrolled: scroll_y > 0.0,
            show_main_content: scroll_y > hide_welcome,
        }
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self {
            scroll_y: 0.0,
            is_scrolled: false,
            show_main_content: false,
        }
    }
}

pub fn shrink_start(hide_welcome: f64) -> f64 {
    hide_welcome * SHRINK_START_FRACTION
}

/// 0 before the shrink starts, 1 once the threshold is reached.
pub fn shrink_progress(scroll_offset: f64, hide_welcome: f64) -> f64 {
    if !(hide_welcome.is_finite() && hide_welcome > 0.0) {
        return 0.0;
    }
    let start = shrink_start(hide_welcome);
    let progress = (sanitize(scroll_offset) - start) / (hide_welcome - start);
    progress.clamp(0.0, 1.0)
}

/// Visual parameters for one frame of the welcome section.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WelcomeTransform {
    pub shrink_progress: f64,
    pub scale: f64,
    pub opacity: f64,
    pub center_x: f64,
    pub center_y: f64,
    pub caption_opacity: f64,
    pub caption_y: f64,
    pub visible: bool,
}

impl WelcomeTransform {
    pub fn at(scroll_offset: f64, hide_welcome: f64) -> Self {
        let p = shrink_progress(scroll_offset, hide_welcome);
        Self {
            shrink_progress: p,
            scale: 1.0 - p * SCALE_RANGE,
            opacity: 1.0 - p * FADE_RANGE,
            center_x: p * 50.0,
            center_y: p * 30.0,
            caption_opacity: 1.0 - p,
            caption_y: p * 100.0,
            // Hard cutover: past the threshold the section is removed rather
            // than faded to zero.
            visible: sanitize(scroll_offset) <= hide_welcome,
        }
    }
}

fn sanitize(offset: f64) -> f64 {
    if offset.is_nan() {
        0.0
    } else {
        offset.max(0.0)
    }
}
