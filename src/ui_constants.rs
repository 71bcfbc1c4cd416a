// UI constants extracted from scattered magic numbers across the codebase.
// Gesture thresholds and animation timings mirror the product design values.

/// UI spacing constants
pub mod spacing {
    /// Small spacing (4px)
    pub const SMALL: f32 = 4.0;

    /// Medium spacing (8px)
    pub const MEDIUM: f32 = 8.0;

    /// Large spacing (16px)
    pub const LARGE: f32 = 16.0;

    /// Extra large spacing (24px)
    pub const XLARGE: f32 = 24.0;
}

/// Card-specific layout constants
pub mod card {
    /// Border radius of card corners
    pub const ROUNDING: f32 = 16.0;

    /// Border radius of the title plaque over the image
    pub const TITLE_ROUNDING: f32 = 8.0;

    /// Inner padding of the title plaque
    pub const TITLE_PADDING: f32 = 12.0;

    /// Title plaque width limit as a fraction of the image width
    pub const TITLE_MAX_WIDTH: f32 = 0.8;

    /// Inner padding of the summary section
    pub const CONTENT_PADDING: f32 = 20.0;

    /// Height of one selection bar
    pub const BAR_HEIGHT: f32 = 3.0;

    /// Border radius of the follow button
    pub const FOLLOW_ROUNDING: f32 = 12.0;

    /// Height of the action footer
    pub const FOOTER_HEIGHT: f32 = 64.0;
}

/// Swipe gesture thresholds, in logical pixels
pub mod gesture {
    /// Minimum dominant-axis travel before a drag is treated as a swipe
    /// rather than a tap or scroll
    pub const ACTIVATION_THRESHOLD: f32 = 20.0;

    /// Release threshold for touch hosts
    pub const RELEASE_THRESHOLD_TOUCH: f32 = 50.0;

    /// Release threshold for pointer hosts (mouse/trackpad drags are noisier)
    pub const RELEASE_THRESHOLD_POINTER: f32 = 80.0;

    /// Maximum drag travel as a fraction of the viewport width; the outgoing
    /// card never fully leaves the screen before release is evaluated
    pub const MAX_DRAG_FRACTION: f32 = 0.8;
}

/// Card transition timings and spring parameters
pub mod anim {
    /// Outgoing slide duration in milliseconds
    pub const SLIDE_OUT_MS: u64 = 300;

    /// Outgoing fade duration in milliseconds (finishes before the slide)
    pub const FADE_OUT_MS: u64 = 150;

    /// Incoming slide/fade duration in milliseconds
    pub const SLIDE_IN_MS: u64 = 300;

    /// Snap-back spring stiffness (mass is 1)
    pub const SPRING_STIFFNESS: f32 = 100.0;

    /// Snap-back spring damping; underdamped, so the card can overshoot
    pub const SPRING_DAMPING: f32 = 8.0;

    /// Snap-back is settled once the amplitude envelope falls below this
    pub const SPRING_REST_DELTA: f32 = 0.5;
}

/// Toast notification constants
pub mod toast {
    /// How long a toast stays on screen, in milliseconds
    pub const LIFETIME_MS: u64 = 2500;

    /// Offset from the bottom edge
    pub const BOTTOM_MARGIN: f32 = 24.0;
}
