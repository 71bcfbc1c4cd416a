// Shared value types: navigation direction and the host capability profile.

use crate::ui_constants::gesture;

/// Direction of a carousel navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum Direction {
    Previous,
    Next,
}

impl Direction {
    /// Direction implied by a horizontal drag offset. Dragging right
    /// (positive dx) reveals the previous card.
    pub fn from_offset(dx: f32) -> Option<Direction> {
        if dx > 0.0 {
            Some(Direction::Previous)
        } else if dx < 0.0 {
            Some(Direction::Next)
        } else {
            None
        }
    }
}

/// Primary input modality of the host surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum InputModality {
    Touch,
    Pointer,
}

impl InputModality {
    /// Drag travel required to commit a navigation on release.
    pub fn release_threshold(&self) -> f32 {
        match self {
            InputModality::Touch => gesture::RELEASE_THRESHOLD_TOUCH,
            InputModality::Pointer => gesture::RELEASE_THRESHOLD_POINTER,
        }
    }
}

/// Whether the host can show an in-app browser surface or only hand URLs
/// to the system browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowserCapability {
    Embedded,
    ExternalOnly,
}

/// Host capability profile, selected once at startup and passed down to the
/// animator and the action bridge. Components never re-check the platform
/// ad hoc.
#[derive(Debug, Clone, Copy)]
pub struct HostCapability {
    pub input: InputModality,
    pub browser: BrowserCapability,
}

impl HostCapability {
    pub fn detect() -> Self {
        if cfg!(any(target_os = "android", target_os = "ios")) {
            Self {
                input: InputModality::Touch,
                browser: BrowserCapability::Embedded,
            }
        } else if cfg!(target_arch = "wasm32") {
            // Browser hosts get a new tab instead of a nested surface.
            Self {
                input: InputModality::Pointer,
                browser: BrowserCapability::ExternalOnly,
            }
        } else {
            Self {
                input: InputModality::Pointer,
                browser: BrowserCapability::Embedded,
            }
        }
    }
}
