use glam::Vec3;

/// Totals of all input contributions within one frame.
///
/// `Default` is the neutral frame: zero movement, zero scalars, focus
/// unlatched.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameInput {
    /// Sum of all move contributions, in rig-local space
    /// (direction * magnitude).
    pub movement: Vec3,
    /// Sum of all rotate contributions.
    pub rotate: f32,
    /// Sum of all zoom contributions (negative = in, positive = out).
    pub zoom: f32,
    /// Whether any producer requested a focus snap this frame.
    pub focus: bool,
}

impl FrameInput {
    /// Whether the frame carries no input at all.
    #[must_use]
    pub fn is_neutral(&self) -> bool {
        self.movement == Vec3::ZERO
            && self.rotate == 0.0
            && self.zoom == 0.0
            && !self.focus
    }
}

/// Per-frame input buffer summing contributions from any number of
/// producers until a single consumer takes the frame.
///
/// Producers call the mutators at any point between ticks; the consuming
/// tick calls [`take`](Self::take) exactly once, which hands the totals
/// over by value and leaves the buffer neutral. Move, rotate, and zoom
/// accumulate additively; focus is a level-triggered latch. No camera or
/// transform access happens here, which is what lets keyboard, mouse,
/// gamepad, and scripted producers coexist without ordering constraints.
#[derive(Debug, Default)]
pub struct InputAccumulator {
    frame: FrameInput,
}

impl InputAccumulator {
    /// Empty accumulator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a move contribution. Callers supply already-normalized
    /// direction * magnitude vectors; no validation happens here.
    pub fn add_move(&mut self, v: Vec3) {
        self.frame.movement += v;
    }

    /// Add a rotate contribution.
    pub fn add_rotate(&mut self, amount: f32) {
        self.frame.rotate += amount;
    }

    /// Add a zoom contribution. Negative zooms in, positive zooms out.
    pub fn add_zoom(&mut self, amount: f32) {
        self.frame.zoom += amount;
    }

    /// Latch a focus request for this frame.
    ///
    /// Level-triggered: `active == false` is the expected steady state
    /// and leaves the latch untouched, so producers may re-issue it
    /// every frame.
    pub fn request_focus(&mut self, active: bool) {
        if active {
            self.frame.focus = true;
        }
    }

    /// Current totals without consuming them.
    #[must_use]
    pub fn peek(&self) -> FrameInput {
        self.frame
    }

    /// Take the frame totals, resetting the buffer to neutral.
    ///
    /// This is the one consuming call per tick; ownership of the totals
    /// moves to the caller and the next frame starts from zero.
    #[must_use]
    pub fn take(&mut self) -> FrameInput {
        std::mem::take(&mut self.frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_contributions_sum_componentwise() {
        let mut acc = InputAccumulator::new();
        acc.add_move(Vec3::new(1.0, 0.0, 0.0));
        acc.add_move(Vec3::new(0.0, 0.0, 2.0));
        acc.add_move(Vec3::new(-0.5, 0.0, 1.0));
        assert!(
            (acc.peek().movement - Vec3::new(0.5, 0.0, 3.0)).length() < 1e-5
        );
    }

    #[test]
    fn rotate_and_zoom_accumulate_additively() {
        let mut acc = InputAccumulator::new();
        acc.add_rotate(1.0);
        acc.add_rotate(-0.25);
        acc.add_zoom(-1.0);
        acc.add_zoom(0.5);
        assert!((acc.peek().rotate - 0.75).abs() < 1e-5);
        assert!((acc.peek().zoom + 0.5).abs() < 1e-5);
    }

    #[test]
    fn focus_latch_survives_inactive_reissue() {
        let mut acc = InputAccumulator::new();
        acc.request_focus(false);
        assert!(!acc.peek().focus);

        acc.request_focus(true);
        // The steady-state "not active" signal must not clear the latch.
        acc.request_focus(false);
        assert!(acc.peek().focus);
    }

    #[test]
    fn take_resets_every_channel_to_neutral() {
        let mut acc = InputAccumulator::new();
        acc.add_move(Vec3::ONE);
        acc.add_rotate(3.0);
        acc.add_zoom(-2.0);
        acc.request_focus(true);

        let frame = acc.take();
        assert!(!frame.is_neutral());
        assert!(acc.peek().is_neutral());
        assert!(acc.take().is_neutral());
    }
}
