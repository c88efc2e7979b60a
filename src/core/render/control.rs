use crate::core::camera::CameraState;

use std::collections::VecDeque;

/// Source of camera state, polled once per frame.
pub trait ControlChannel {
    fn consume_state(&mut self) -> CameraState;
}

/// Replays a fixed list of states, then asks the loop to stop.
pub struct ScriptedControl {
    states: VecDeque<CameraState>,
    last: CameraState,
}

impl ScriptedControl {
    pub fn new(states: Vec<CameraState>) -> Self {
        ScriptedControl {
            states: VecDeque::from(states),
            last: CameraState::default(),
        }
    }

    /// The `frames - 1` states following `initial` on an orbit about y of
    /// `degrees_per_frame` per frame. A loop starting from `initial` renders
    /// `frames` frames.
    pub fn orbit(initial: &CameraState, frames: u32, degrees_per_frame: f32) -> Self {
        let states = (1..frames)
            .map(|i| CameraState {
                rotation_y_degrees: initial.rotation_y_degrees + degrees_per_frame * i as f32,
                stop: false,
                ..initial.clone()
            })
            .collect();
        let mut control = Self::new(states);
        control.last = initial.clone();
        return control;
    }
}

impl ControlChannel for ScriptedControl {
    fn consume_state(&mut self) -> CameraState {
        match self.states.pop_front() {
            Some(state) => {
                self.last = state.clone();
                state
            }
            None => CameraState {
                stop: true,
                ..self.last.clone()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_001() {
        let mut control = ScriptedControl::orbit(&CameraState::default(), 3, 10.0);
        let a = control.consume_state();
        let b = control.consume_state();
        assert_eq!(a.rotation_y_degrees, 10.0);
        assert!(!a.stop);
        assert_eq!(b.rotation_y_degrees, 20.0);
        assert!(!b.stop);
        let c = control.consume_state();
        assert!(c.stop);
        assert_eq!(c.rotation_y_degrees, 20.0);
    }

    #[test]
    fn empty_script_stops_immediately() {
        let mut control = ScriptedControl::new(Vec::new());
        assert!(control.consume_state().stop);
    }
}
