/// Continuous move input is sampled at most once per this window; samples
/// inside the window are dropped, not queued. Pointer-down and pointer-up are
/// never throttled.
pub const MOVE_THROTTLE_MS: f64 = 10.0;

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Phase {
    Idle,
    Drawing,
}

/// Absolute pixel position of an input sample.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// A segment in the local canvas's pixel space, before normalization for the
/// wire. Producing one always means both a local draw and a transmission.
#[derive(Clone, PartialEq, Debug)]
pub struct PixelSegment {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
    pub color: String,
    pub width: f32,
}

/// Per-client drawing state. Two phases: Idle and Drawing. A pointer-down
/// enters Drawing, pointer-up/leave exits it, and moves in between emit one
/// segment each from the previous accepted sample to the new one.
pub struct Session {
    pub phase: Phase,
    pub last: Position,
    pub color: String,
    pub width: f32,
    last_move_ms: f64,
}

impl Session {
    pub fn new(color: String, width: f32) -> Self {
        Self {
            phase: Phase::Idle,
            last: Position::default(),
            color,
            width,
            last_move_ms: f64::NEG_INFINITY,
        }
    }

    pub fn pointer_down(&mut self, pos: Position) {
        self.phase = Phase::Drawing;
        self.last = pos;
    }

    /// Returns the segment to draw and transmit, or None when idle or when
    /// the sample falls inside the throttle window. A dropped sample does not
    /// update `last`: the next accepted sample connects back to the previous
    /// accepted one, so intermediate positions are simply lost.
    pub fn pointer_move(&mut self, pos: Position, now_ms: f64) -> Option<PixelSegment> {
        if self.phase != Phase::Drawing {
            return None;
        }
        if now_ms - self.last_move_ms < MOVE_THROTTLE_MS {
            return None;
        }
        self.last_move_ms = now_ms;
        let segment = self.segment_to(pos);
        self.last = pos;
        Some(segment)
    }

    /// Ends the stroke. The terminal segment bypasses the throttle so the
    /// stroke's end point is always transmitted.
    pub fn pointer_up(&mut self, pos: Position) -> Option<PixelSegment> {
        if self.phase != Phase::Drawing {
            return None;
        }
        self.phase = Phase::Idle;
        Some(self.segment_to(pos))
    }

    /// Leaving the canvas ends the stroke at the last known position.
    pub fn pointer_leave(&mut self) -> Option<PixelSegment> {
        let last = self.last;
        self.pointer_up(last)
    }

    fn segment_to(&self, pos: Position) -> PixelSegment {
        PixelSegment {
            x0: self.last.x,
            y0: self.last.y,
            x1: pos.x,
            y1: pos.y,
            color: self.color.clone(),
            width: self.width,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new("#000000".to_string(), 5.0)
    }

    fn pos(x: f64, y: f64) -> Position {
        Position { x, y }
    }

    #[test]
    fn move_without_down_is_no_op() {
        let mut session = session();
        assert_eq!(session.pointer_move(pos(10.0, 10.0), 100.0), None);
        assert_eq!(session.pointer_up(pos(10.0, 10.0)), None);
        assert_eq!(session.phase, Phase::Idle);
    }

    #[test]
    fn down_move_up_emits_chained_segments() {
        let mut session = session();
        session.pointer_down(pos(0.0, 0.0));
        let first = session.pointer_move(pos(10.0, 5.0), 0.0).expect("segment");
        assert_eq!((first.x0, first.y0, first.x1, first.y1), (0.0, 0.0, 10.0, 5.0));
        let last = session.pointer_up(pos(20.0, 15.0)).expect("terminal segment");
        assert_eq!((last.x0, last.y0, last.x1, last.y1), (10.0, 5.0, 20.0, 15.0));
        assert_eq!(session.phase, Phase::Idle);
    }

    #[test]
    fn moves_inside_window_are_dropped_not_queued() {
        let mut session = session();
        session.pointer_down(pos(0.0, 0.0));
        assert!(session.pointer_move(pos(1.0, 0.0), 0.0).is_some());
        // 3ms later: dropped, and `last` stays at the accepted sample.
        assert!(session.pointer_move(pos(2.0, 0.0), 3.0).is_none());
        let next = session.pointer_move(pos(5.0, 0.0), 12.0).expect("segment");
        assert_eq!(next.x0, 1.0);
        assert_eq!(next.x1, 5.0);
    }

    #[test]
    fn one_ms_moves_for_fifty_ms_yield_five_segments() {
        let mut session = session();
        session.pointer_down(pos(0.0, 0.0));
        // Pointer-down at t=0, then a move every 1ms from t=1 to t=50.
        // Acceptances land at t=1, 11, 21, 31, 41.
        let mut emitted = 0;
        for ms in 1..=50 {
            if session.pointer_move(pos(ms as f64, 0.0), ms as f64).is_some() {
                emitted += 1;
            }
        }
        assert_eq!(emitted, 5);
    }

    #[test]
    fn pointer_up_bypasses_throttle() {
        let mut session = session();
        session.pointer_down(pos(0.0, 0.0));
        assert!(session.pointer_move(pos(1.0, 0.0), 0.0).is_some());
        assert!(session.pointer_move(pos(2.0, 0.0), 1.0).is_none());
        // Well inside the window, yet the terminal segment is emitted.
        let terminal = session.pointer_up(pos(3.0, 0.0)).expect("terminal segment");
        assert_eq!(terminal.x0, 1.0);
        assert_eq!(terminal.x1, 3.0);
    }

    #[test]
    fn leave_ends_stroke_at_last_position() {
        let mut session = session();
        session.pointer_down(pos(4.0, 4.0));
        assert!(session.pointer_move(pos(8.0, 8.0), 0.0).is_some());
        let terminal = session.pointer_leave().expect("terminal segment");
        assert_eq!((terminal.x0, terminal.y0, terminal.x1, terminal.y1), (8.0, 8.0, 8.0, 8.0));
        assert_eq!(session.phase, Phase::Idle);
        assert_eq!(session.pointer_leave(), None);
    }

    #[test]
    fn color_and_width_apply_to_subsequent_segments() {
        let mut session = session();
        session.pointer_down(pos(0.0, 0.0));
        session.color = "#ff0000".to_string();
        session.width = 12.0;
        let segment = session.pointer_move(pos(1.0, 1.0), 0.0).expect("segment");
        assert_eq!(segment.color, "#ff0000");
        assert_eq!(segment.width, 12.0);
    }
}
