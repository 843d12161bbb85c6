use crate::config::GestureOptions;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragState {
    Idle,
    Dragging { start_x: f32, end_x: f32 },
}

/// Navigation a completed drag asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    Prev,
    Next,
}

/// Pointer and touch drags share this tracker; only the x coordinate matters.
#[derive(Debug)]
pub struct DragTracker {
    state: DragState,
    swipe_threshold: f32,
    suppress_threshold: f32,
}

impl DragTracker {
    pub fn new(opts: GestureOptions) -> Self {
        Self {
            state: DragState::Idle,
            swipe_threshold: opts.swipe_threshold,
            suppress_threshold: opts.suppress_threshold,
        }
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    pub fn start(&mut self, x: f32) {
        self.state = DragState::Dragging {
            start_x: x,
            end_x: x,
        };
    }

    /// Records the pointer position. Returns true once the drag has travelled
    /// far enough that the host should stop scrolling/selecting.
    pub fn moved(&mut self, x: f32) -> bool {
        match &mut self.state {
            DragState::Idle => false,
            DragState::Dragging { start_x, end_x } => {
                *end_x = x;
                (*end_x - *start_x).abs() > self.suppress_threshold
            }
        }
    }

    /// Ends the drag. Always returns to idle; yields a swipe only if the
    /// travel reached the threshold. Non-finite travel never swipes.
    pub fn end(&mut self) -> Option<Swipe> {
        let DragState::Dragging { start_x, end_x } = self.state else {
            return None;
        };
        self.state = DragState::Idle;
        let diff = end_x - start_x;
        if !diff.is_finite() || diff.abs() < self.swipe_threshold {
            return None;
        }
        if diff > 0.0 {
            Some(Swipe::Prev)
        } else {
            Some(Swipe::Next)
        }
    }
}
