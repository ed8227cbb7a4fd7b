//! Drag and inertia state machine.
//!
//! `Idle -> Dragging -> Idle` with an optional coasting phase after release.
//! Only one rotation driver is ever active: starting a drag drops any
//! residual inertia, and inertia is only armed when a drag ends.

use crate::constants::{DRAG_DEGREES_PER_PX, INERTIA_DECAY, INERTIA_STOP_SPEED};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputSource {
    /// Pointer events, keyed by `pointerId` so a second finger or pen
    /// cannot take over a gesture in progress.
    Pointer(i32),
    Touch,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragPhase {
    Idle,
    Dragging,
    Coasting,
}

#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct DragState {
    pub dragging: bool,
    pub last_x: f64,
    pub velocity_x: f64,
    pub source: Option<InputSource>,
}

/// Rotation change in degrees for a horizontal pointer delta in px.
#[inline]
pub fn rotation_delta(dx: f64) -> f64 {
    dx * -DRAG_DEGREES_PER_PX
}

/// Residual velocity after a drag is released.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Inertia {
    velocity_x: f64,
}

impl Inertia {
    pub fn new(velocity_x: f64) -> Self {
        Self {
            velocity_x: if velocity_x.is_finite() { velocity_x } else { 0.0 },
        }
    }

    pub fn velocity_x(&self) -> f64 {
        self.velocity_x
    }

    /// Decay the velocity by one frame. Returns the rotation delta for this
    /// frame, or `None` once the orbit has come to rest.
    pub fn step(&mut self) -> Option<f64> {
        self.velocity_x *= INERTIA_DECAY;
        if self.velocity_x.abs() < INERTIA_STOP_SPEED {
            return None;
        }
        Some(rotation_delta(self.velocity_x))
    }
}

#[derive(Default, Clone, Debug)]
pub struct DragController {
    state: DragState,
    inertia: Option<Inertia>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn phase(&self) -> DragPhase {
        if self.state.dragging {
            DragPhase::Dragging
        } else if self.inertia.is_some() {
            DragPhase::Coasting
        } else {
            DragPhase::Idle
        }
    }

    /// Begin a gesture. Ignored while a different source owns the drag.
    pub fn start(&mut self, source: InputSource, x: f64) -> bool {
        if self.state.dragging && self.state.source != Some(source) {
            return false;
        }
        self.cancel_inertia();
        self.state = DragState {
            dragging: true,
            last_x: x,
            velocity_x: 0.0,
            source: Some(source),
        };
        true
    }

    /// Track the pointer. Returns the rotation delta to apply.
    pub fn move_to(&mut self, source: InputSource, x: f64) -> Option<f64> {
        if !self.state.dragging || self.state.source != Some(source) || !x.is_finite() {
            return None;
        }
        let dx = x - self.state.last_x;
        self.state.last_x = x;
        self.state.velocity_x = dx;
        Some(rotation_delta(dx))
    }

    /// Release (or lose) the gesture and arm inertia with the last velocity.
    /// Returns true when inertia was armed.
    pub fn end(&mut self, source: InputSource) -> bool {
        if !self.state.dragging || self.state.source != Some(source) {
            return false;
        }
        let velocity_x = self.state.velocity_x;
        self.state = DragState::default();
        if velocity_x == 0.0 {
            return false;
        }
        self.inertia = Some(Inertia::new(velocity_x));
        true
    }

    /// Advance the coasting phase by one frame. Clears the inertia when it
    /// comes to rest.
    pub fn step_inertia(&mut self) -> Option<f64> {
        let delta = self.inertia.as_mut()?.step();
        if delta.is_none() {
            self.inertia = None;
        }
        delta
    }

    /// Drop residual inertia. Returns true when there was some.
    pub fn cancel_inertia(&mut self) -> bool {
        self.inertia.take().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drag_inverts_pointer_direction() {
        assert_eq!(rotation_delta(4.0), -1.0);
        assert_eq!(rotation_delta(-8.0), 2.0);
    }

    #[test]
    fn non_finite_velocity_never_coasts() {
        let mut inertia = Inertia::new(f64::NAN);
        assert_eq!(inertia.step(), None);
        let mut inertia = Inertia::new(f64::INFINITY);
        assert_eq!(inertia.step(), None);
    }
}
