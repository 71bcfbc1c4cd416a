// Swipe gesture state machine driving the card transform.
//
// Three states: Idle (neutral transform), Dragging (transform tracks the
// pointer), Transitioning (programmatic animation in flight, input dropped).
// All motion is time-based so behavior is identical across refresh rates.

use std::time::Instant;

use eframe::egui::{self, lerp};

use crate::types::{Direction, InputModality};
use crate::ui_constants::{anim, gesture};

/// Visual transform of the card layer: horizontal offset in logical pixels
/// plus opacity. Owned by the animator; the renderer only reads it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformState {
    pub offset_x: f32,
    pub opacity: f32,
}

impl TransformState {
    pub const NEUTRAL: Self = Self {
        offset_x: 0.0,
        opacity: 1.0,
    };
}

/// Which directions the carousel can actually move in from its current
/// index. Computed by the carousel state, consumed on drag release.
#[derive(Debug, Clone, Copy)]
pub struct BoundaryGate {
    pub can_previous: bool,
    pub can_next: bool,
}

/// Emitted by `tick` when the outgoing phase of a committed swipe finishes
/// and the carousel should advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimatorEvent {
    Committed(Direction),
}

#[derive(Clone, Copy)]
enum Phase {
    Idle,
    Dragging {
        /// Raw accumulated drag vector; the rendered offset is this clamped.
        raw: egui::Vec2,
    },
    Transitioning(Transition),
}

#[derive(Clone, Copy)]
enum Transition {
    /// Outgoing half of a committed swipe: slide to `∓width`, fade to 0.
    Exit {
        direction: Direction,
        started: Instant,
        from: f32,
        width: f32,
    },
    /// Incoming half: the new card starts fully offset on the side the
    /// swipe came from and slides to center.
    Enter { started: Instant, from: f32 },
    /// Springy return to neutral after a refused or interrupted drag.
    SnapBack {
        started: Instant,
        from_offset: f32,
        from_opacity: f32,
    },
}

pub struct Animator {
    input: InputModality,
    phase: Phase,
    transform: TransformState,
    /// Drag travel accumulated before the activation threshold is met.
    pending: egui::Vec2,
}

impl Animator {
    pub fn new(input: InputModality) -> Self {
        Self {
            input,
            phase: Phase::Idle,
            transform: TransformState::NEUTRAL,
            pending: egui::Vec2::ZERO,
        }
    }

    pub fn transform(&self) -> TransformState {
        self.transform
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, Phase::Dragging { .. })
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.phase, Phase::Transitioning(_))
    }

    /// Feed one frame worth of pointer movement. Ignored mid-transition.
    ///
    /// A drag only activates once its dominant axis is horizontal and it has
    /// traveled past the activation threshold; this keeps taps and vertical
    /// scrolls from moving the card. While dragging, the offset is the
    /// accumulated travel clamped to `±MAX_DRAG_FRACTION × width`, and
    /// opacity stays untouched.
    pub fn on_drag_delta(&mut self, delta: egui::Vec2, viewport_width: f32) {
        match self.phase {
            Phase::Transitioning(_) => {}
            Phase::Dragging { raw } => {
                let raw = raw + delta;
                self.transform.offset_x = clamp_drag(raw.x, viewport_width);
                self.phase = Phase::Dragging { raw };
            }
            Phase::Idle => {
                self.pending += delta;
                let horizontal = self.pending.x.abs() > self.pending.y.abs();
                if horizontal && self.pending.x.abs() > gesture::ACTIVATION_THRESHOLD {
                    let raw = self.pending;
                    self.pending = egui::Vec2::ZERO;
                    self.transform.offset_x = clamp_drag(raw.x, viewport_width);
                    self.phase = Phase::Dragging { raw };
                }
            }
        }
    }

    /// Decide the outcome of a finished drag: commit when the travel clears
    /// the modality threshold and the implied direction is open, otherwise
    /// snap back. A release without an active drag just clears the pending
    /// accumulator.
    pub fn on_drag_release(&mut self, gate: BoundaryGate, viewport_width: f32, now: Instant) {
        self.pending = egui::Vec2::ZERO;
        if !matches!(self.phase, Phase::Dragging { .. }) {
            return;
        }

        let dx = self.transform.offset_x;
        let threshold = self.input.release_threshold();
        if dx > threshold && gate.can_previous {
            self.begin_exit(Direction::Previous, viewport_width, now);
        } else if dx < -threshold && gate.can_next {
            self.begin_exit(Direction::Next, viewport_width, now);
        } else {
            self.begin_snap_back(now);
        }
    }

    /// Host-level gesture cancellation. Redirects any in-flight motion
    /// toward neutral; the card is never left resting partially offset.
    pub fn interrupt(&mut self, now: Instant) {
        self.pending = egui::Vec2::ZERO;
        match self.phase {
            Phase::Idle => {}
            Phase::Dragging { .. } | Phase::Transitioning(_) => self.begin_snap_back(now),
        }
    }

    /// Advance any in-flight animation to `now`. Returns `Committed` exactly
    /// once per swipe, at the moment the outgoing phase finishes and the
    /// carousel should navigate.
    pub fn tick(&mut self, now: Instant) -> Option<AnimatorEvent> {
        let Phase::Transitioning(transition) = self.phase else {
            return None;
        };

        match transition {
            Transition::Exit {
                direction,
                started,
                from,
                width,
            } => {
                let t = now.saturating_duration_since(started).as_secs_f32();
                let target = match direction {
                    Direction::Next => -width,
                    Direction::Previous => width,
                };
                let slide = (t / ms(anim::SLIDE_OUT_MS)).min(1.0);
                let fade = (t / ms(anim::FADE_OUT_MS)).min(1.0);
                self.transform.offset_x = lerp(from..=target, ease_in_out(slide));
                self.transform.opacity = 1.0 - fade;
                if slide >= 1.0 && fade >= 1.0 {
                    // Incoming card enters from the opposite side, invisible.
                    self.transform = TransformState {
                        offset_x: -target,
                        opacity: 0.0,
                    };
                    self.phase = Phase::Transitioning(Transition::Enter {
                        started: now,
                        from: -target,
                    });
                    return Some(AnimatorEvent::Committed(direction));
                }
            }
            Transition::Enter { started, from } => {
                let t = now.saturating_duration_since(started).as_secs_f32();
                let p = (t / ms(anim::SLIDE_IN_MS)).min(1.0);
                self.transform.offset_x = lerp(from..=0.0, ease_in_out(p));
                self.transform.opacity = p;
                if p >= 1.0 {
                    // Terminal settled state must be exact, not near-zero.
                    self.transform = TransformState::NEUTRAL;
                    self.phase = Phase::Idle;
                }
            }
            Transition::SnapBack {
                started,
                from_offset,
                from_opacity,
            } => {
                let t = now.saturating_duration_since(started).as_secs_f32();
                let (x, envelope) = spring_position(from_offset, t);
                if envelope < anim::SPRING_REST_DELTA {
                    self.transform = TransformState::NEUTRAL;
                    self.phase = Phase::Idle;
                } else {
                    self.transform.offset_x = x;
                    let fade = (t / ms(anim::FADE_OUT_MS)).min(1.0);
                    self.transform.opacity = lerp(from_opacity..=1.0, fade);
                }
            }
        }
        None
    }

    fn begin_exit(&mut self, direction: Direction, width: f32, now: Instant) {
        self.phase = Phase::Transitioning(Transition::Exit {
            direction,
            started: now,
            from: self.transform.offset_x,
            width,
        });
    }

    fn begin_snap_back(&mut self, now: Instant) {
        self.phase = Phase::Transitioning(Transition::SnapBack {
            started: now,
            from_offset: self.transform.offset_x,
            from_opacity: self.transform.opacity,
        });
    }
}

fn clamp_drag(dx: f32, viewport_width: f32) -> f32 {
    let max = gesture::MAX_DRAG_FRACTION * viewport_width;
    dx.clamp(-max, max)
}

fn ms(millis: u64) -> f32 {
    millis as f32 / 1000.0
}

fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Underdamped spring toward 0 (unit mass), returning the displacement and
/// the decaying amplitude envelope used to detect rest.
fn spring_position(from: f32, t: f32) -> (f32, f32) {
    let omega = anim::SPRING_STIFFNESS.sqrt();
    let zeta = anim::SPRING_DAMPING / (2.0 * omega);
    let omega_d = omega * (1.0 - zeta * zeta).sqrt();
    let decay = (-zeta * omega * t).exp();
    let x = from * decay * ((omega_d * t).cos() + (zeta * omega / omega_d) * (omega_d * t).sin());
    (x, from.abs() * decay)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    const WIDTH: f32 = 400.0;

    fn gate(can_previous: bool, can_next: bool) -> BoundaryGate {
        BoundaryGate {
            can_previous,
            can_next,
        }
    }

    fn dragged_to(animator: &mut Animator, dx: f32) {
        // First delta clears the activation threshold, second supplies the rest.
        let activate = 25.0f32.copysign(dx);
        animator.on_drag_delta(egui::vec2(activate, 2.0), WIDTH);
        animator.on_drag_delta(egui::vec2(dx - activate, 0.0), WIDTH);
        assert!(animator.is_dragging());
    }

    #[test]
    fn vertical_drag_never_activates() {
        let mut animator = Animator::new(InputModality::Touch);
        animator.on_drag_delta(egui::vec2(5.0, 40.0), WIDTH);
        animator.on_drag_delta(egui::vec2(3.0, 30.0), WIDTH);
        assert!(!animator.is_dragging());
        assert_eq!(animator.transform(), TransformState::NEUTRAL);
    }

    #[test]
    fn small_horizontal_drag_stays_idle() {
        let mut animator = Animator::new(InputModality::Touch);
        animator.on_drag_delta(egui::vec2(15.0, 2.0), WIDTH);
        assert!(!animator.is_dragging());
    }

    #[test]
    fn drag_offset_is_clamped_to_viewport_fraction() {
        let mut animator = Animator::new(InputModality::Touch);
        dragged_to(&mut animator, -1000.0);
        assert_eq!(animator.transform().offset_x, -0.8 * WIDTH);
        // Opacity is untouched while dragging.
        assert_eq!(animator.transform().opacity, 1.0);
    }

    #[test]
    fn committed_swipe_runs_exit_then_enter_and_settles_exactly() {
        let t0 = Instant::now();
        let mut animator = Animator::new(InputModality::Touch);
        dragged_to(&mut animator, -90.0);
        animator.on_drag_release(gate(false, true), WIDTH, t0);
        assert!(animator.is_animating());

        // Mid-exit: sliding left, fading out.
        assert!(animator.tick(t0 + Duration::from_millis(100)).is_none());
        assert!(animator.transform().offset_x < -90.0);
        assert!(animator.transform().opacity < 1.0);

        // Exit done: commit fires once, incoming card waits on the right.
        let event = animator.tick(t0 + Duration::from_millis(310));
        assert_eq!(event, Some(AnimatorEvent::Committed(Direction::Next)));
        assert_eq!(animator.transform().offset_x, WIDTH);
        assert_eq!(animator.transform().opacity, 0.0);

        // Enter done: exact neutral, back to idle.
        assert!(animator.tick(t0 + Duration::from_millis(620)).is_none());
        assert!(!animator.is_animating());
        assert_eq!(animator.transform(), TransformState::NEUTRAL);
    }

    #[test]
    fn rightward_swipe_commits_previous() {
        let t0 = Instant::now();
        let mut animator = Animator::new(InputModality::Touch);
        dragged_to(&mut animator, 90.0);
        animator.on_drag_release(gate(true, true), WIDTH, t0);
        let event = animator.tick(t0 + Duration::from_millis(310));
        assert_eq!(event, Some(AnimatorEvent::Committed(Direction::Previous)));
        assert_eq!(animator.transform().offset_x, -WIDTH);
    }

    #[test]
    fn boundary_blocks_commit_despite_threshold() {
        // "Previous" from the first card: snap back even at 90px of travel.
        let t0 = Instant::now();
        let mut animator = Animator::new(InputModality::Touch);
        dragged_to(&mut animator, 90.0);
        animator.on_drag_release(gate(false, true), WIDTH, t0);
        assert!(animator.tick(t0 + Duration::from_secs(5)).is_none());
        assert!(!animator.is_animating());
        assert_eq!(animator.transform(), TransformState::NEUTRAL);
    }

    #[test]
    fn release_below_threshold_snaps_back() {
        let t0 = Instant::now();
        let mut animator = Animator::new(InputModality::Touch);
        dragged_to(&mut animator, -40.0);
        animator.on_drag_release(gate(true, true), WIDTH, t0);
        assert!(animator.tick(t0 + Duration::from_secs(5)).is_none());
        assert_eq!(animator.transform(), TransformState::NEUTRAL);
    }

    #[test]
    fn pointer_threshold_is_higher_than_touch() {
        let t0 = Instant::now();
        // 60px commits on touch...
        let mut touch = Animator::new(InputModality::Touch);
        dragged_to(&mut touch, -60.0);
        touch.on_drag_release(gate(true, true), WIDTH, t0);
        assert_eq!(
            touch.tick(t0 + Duration::from_millis(310)),
            Some(AnimatorEvent::Committed(Direction::Next))
        );
        // ...but snaps back on a pointer host.
        let mut pointer = Animator::new(InputModality::Pointer);
        dragged_to(&mut pointer, -60.0);
        pointer.on_drag_release(gate(true, true), WIDTH, t0);
        assert!(pointer.tick(t0 + Duration::from_millis(310)).is_none());
        assert!(pointer.tick(t0 + Duration::from_secs(5)).is_none());
        assert_eq!(pointer.transform(), TransformState::NEUTRAL);
    }

    #[test]
    fn snap_back_spring_overshoots_center() {
        let t0 = Instant::now();
        let mut animator = Animator::new(InputModality::Touch);
        dragged_to(&mut animator, 90.0);
        animator.on_drag_release(gate(false, false), WIDTH, t0);

        // Half an oscillation period in: the card has crossed to the other
        // side of center and is still in flight.
        let omega = anim::SPRING_STIFFNESS.sqrt();
        let zeta = anim::SPRING_DAMPING / (2.0 * omega);
        let omega_d = omega * (1.0 - zeta * zeta).sqrt();
        let half_period = std::f32::consts::PI / omega_d;
        animator.tick(t0 + Duration::from_secs_f32(half_period));
        assert!(animator.is_animating());
        assert!(animator.transform().offset_x < 0.0);
    }

    #[test]
    fn interrupted_drag_returns_to_neutral() {
        let t0 = Instant::now();
        let mut animator = Animator::new(InputModality::Touch);
        dragged_to(&mut animator, -70.0);
        animator.interrupt(t0);
        assert!(animator.is_animating());
        assert!(animator.tick(t0 + Duration::from_secs(5)).is_none());
        assert_eq!(animator.transform(), TransformState::NEUTRAL);
    }

    #[test]
    fn input_is_dropped_mid_transition() {
        let t0 = Instant::now();
        let mut animator = Animator::new(InputModality::Touch);
        dragged_to(&mut animator, -90.0);
        animator.on_drag_release(gate(true, true), WIDTH, t0);
        animator.tick(t0 + Duration::from_millis(100));
        let frozen = animator.transform();

        animator.on_drag_delta(egui::vec2(50.0, 0.0), WIDTH);
        assert_eq!(animator.transform(), frozen);
        animator.on_drag_release(gate(true, true), WIDTH, t0 + Duration::from_millis(110));
        assert_eq!(animator.transform(), frozen);
    }

    #[test]
    fn release_without_activation_clears_pending_travel() {
        let t0 = Instant::now();
        let mut animator = Animator::new(InputModality::Touch);
        animator.on_drag_delta(egui::vec2(15.0, 0.0), WIDTH);
        animator.on_drag_release(gate(true, true), WIDTH, t0);
        // A fresh 15px drag must not inherit the old travel and activate.
        animator.on_drag_delta(egui::vec2(15.0, 0.0), WIDTH);
        assert!(!animator.is_dragging());
    }
}
