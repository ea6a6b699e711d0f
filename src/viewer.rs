//! Lightbox session state machine.
//!
//! A [`ViewerSession`] is either closed or open on one image of an image set
//! of fixed length. It also carries the current zoom scale, which is always
//! within [`scale::MIN_SCALE`]..=[`scale::MAX_SCALE`].
//!
//! ```text
//!            open(i)                 next / prev / zoom*
//!   Closed ───────────▶ Open{index} ◀──────────────────┐
//!     ▲                    │  └────────────────────────┘
//!     └──── close() ───────┘
//! ```
//!
//! Stray input never fails. Navigation and zoom while closed are ignored,
//! indices wrap, scales clamp. `reset_zoom` is the one mutation that applies
//! in both states.
//!
//! Zoom is kept when moving between images. The viewer lets a visitor browse
//! at a fixed magnification; `open` and `close` are the only transitions that
//! reset it.

use crate::scale;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Closed,
    Open { index: usize },
}

/// Interactive lightbox state for an image set of `len` images.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerSession {
    len: usize,
    state: State,
    scale: f64,
}

/// Render-facing copy of a session's state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ViewerSnapshot {
    pub is_open: bool,
    /// Index of the displayed image. Meaningless while closed; reported as 0.
    pub current_index: usize,
    pub scale: f64,
}

impl ViewerSession {
    /// A closed session over an image set of `len` images.
    pub fn new(len: usize) -> Self {
        Self {
            len,
            state: State::Closed,
            scale: scale::MIN_SCALE,
        }
    }

    /// Number of images the session navigates over.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, State::Open { .. })
    }

    /// Index of the displayed image, if open.
    pub fn current_index(&self) -> Option<usize> {
        match self.state {
            State::Open { index } => Some(index),
            State::Closed => None,
        }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn snapshot(&self) -> ViewerSnapshot {
        ViewerSnapshot {
            is_open: self.is_open(),
            current_index: self.current_index().unwrap_or(0),
            scale: self.scale,
        }
    }

    /// Position counter shown in the lightbox toolbar, e.g. `"3 / 8"`.
    pub fn counter_label(&self) -> Option<String> {
        self.current_index()
            .map(|index| format!("{} / {}", index + 1, self.len))
    }

    /// Open on `index`, wrapped into the image set. No-op for an empty set.
    pub fn open(&mut self, index: i64) {
        if self.len == 0 {
            return;
        }
        let index = index.rem_euclid(self.len as i64) as usize;
        self.state = State::Open { index };
        self.scale = scale::MIN_SCALE;
    }

    pub fn close(&mut self) {
        self.state = State::Closed;
        self.scale = scale::MIN_SCALE;
    }

    pub fn next(&mut self) {
        if let State::Open { index } = self.state {
            self.state = State::Open {
                index: (index + 1) % self.len,
            };
        }
    }

    pub fn prev(&mut self) {
        if let State::Open { index } = self.state {
            self.state = State::Open {
                index: (index + self.len - 1) % self.len,
            };
        }
    }

    pub fn zoom_in(&mut self) {
        self.zoom_by(scale::BUTTON_STEP);
    }

    pub fn zoom_out(&mut self) {
        self.zoom_by(-scale::BUTTON_STEP);
    }

    /// Zoom from a wheel event. Only the sign of `delta` matters: scrolling
    /// down/away (positive) zooms out, scrolling up zooms in. A zero or NaN
    /// delta leaves the scale alone.
    pub fn zoom_by_wheel(&mut self, delta: f64) {
        let sign = if delta > 0.0 {
            1.0
        } else if delta < 0.0 {
            -1.0
        } else {
            return;
        };
        self.zoom_by(-sign * scale::WHEEL_STEP);
    }

    /// Back to 1×, whether open or closed.
    pub fn reset_zoom(&mut self) {
        self.scale = scale::MIN_SCALE;
    }

    fn zoom_by(&mut self, delta: f64) {
        if self.is_open() {
            self.scale = scale::step(self.scale, delta);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_session(len: usize, index: i64) -> ViewerSession {
        let mut session = ViewerSession::new(len);
        session.open(index);
        session
    }

    #[test]
    fn new_session_is_closed_at_unit_scale() {
        let session = ViewerSession::new(4);
        assert!(!session.is_open());
        assert_eq!(session.current_index(), None);
        assert_eq!(session.scale(), 1.0);
        assert_eq!(session.counter_label(), None);
    }

    #[test]
    fn open_then_next_wraps_around() {
        let mut session = open_session(3, 1);
        assert_eq!(session.current_index(), Some(1));
        session.next();
        assert_eq!(session.current_index(), Some(2));
        session.next();
        assert_eq!(session.current_index(), Some(0));
    }

    #[test]
    fn prev_from_first_goes_to_last() {
        let mut session = open_session(5, 0);
        session.prev();
        assert_eq!(session.current_index(), Some(4));
    }

    #[test]
    fn full_cycle_returns_to_start() {
        for len in 1..=7 {
            for start in 0..len {
                let mut forward = open_session(len, start as i64);
                let mut backward = forward.clone();
                for _ in 0..len {
                    forward.next();
                    backward.prev();
                }
                assert_eq!(forward.current_index(), Some(start));
                assert_eq!(backward.current_index(), Some(start));
            }
        }
    }

    #[test]
    fn open_wraps_out_of_range_indices() {
        assert_eq!(open_session(3, 3).current_index(), Some(0));
        assert_eq!(open_session(3, 7).current_index(), Some(1));
        assert_eq!(open_session(3, -1).current_index(), Some(2));
        assert_eq!(open_session(3, -4).current_index(), Some(2));
    }

    #[test]
    fn open_on_empty_set_stays_closed() {
        let mut session = ViewerSession::new(0);
        session.open(0);
        assert!(!session.is_open());
        session.next();
        session.prev();
        assert!(!session.is_open());
    }

    #[test]
    fn single_image_navigation_stays_put() {
        let mut session = open_session(1, 0);
        session.next();
        assert_eq!(session.current_index(), Some(0));
        session.prev();
        assert_eq!(session.current_index(), Some(0));
    }

    #[test]
    fn zoom_buttons_step_by_a_quarter() {
        let mut session = open_session(3, 0);
        session.zoom_in();
        session.zoom_in();
        session.zoom_in();
        assert_eq!(session.scale(), 1.75);
        session.zoom_out();
        assert_eq!(session.scale(), 1.5);
    }

    #[test]
    fn zoom_in_then_out_is_symmetric() {
        let mut session = open_session(3, 0);
        session.zoom_by_wheel(-1.0);
        session.zoom_by_wheel(-1.0);
        session.zoom_by_wheel(-1.0);
        let before = session.scale();
        assert!(before > 1.0 && before < 2.75);
        session.zoom_in();
        session.zoom_out();
        assert_eq!(session.scale(), before);
    }

    #[test]
    fn wheel_down_clamps_at_minimum() {
        let mut session = open_session(3, 0);
        for _ in 0..10 {
            session.zoom_by_wheel(1.0);
            assert_eq!(session.scale(), 1.0);
        }
    }

    #[test]
    fn wheel_up_clamps_at_maximum() {
        let mut session = open_session(3, 0);
        for _ in 0..30 {
            session.zoom_by_wheel(-1.0);
            assert!(session.scale() >= 1.0 && session.scale() <= 3.0);
        }
        assert_eq!(session.scale(), 3.0);
    }

    #[test]
    fn wheel_uses_only_the_sign_of_the_delta() {
        let mut session = open_session(3, 0);
        session.zoom_by_wheel(-120.0);
        assert_eq!(session.scale(), 1.1);
        session.zoom_by_wheel(0.0);
        session.zoom_by_wheel(f64::NAN);
        assert_eq!(session.scale(), 1.1);
    }

    #[test]
    fn mixed_zoom_sequence_stays_in_bounds() {
        let mut session = open_session(2, 0);
        let ops: [fn(&mut ViewerSession); 4] = [
            ViewerSession::zoom_in,
            ViewerSession::zoom_out,
            |s| s.zoom_by_wheel(1.0),
            |s| s.zoom_by_wheel(-1.0),
        ];
        for i in 0..200 {
            ops[(i * 7 + i / 3) % 4](&mut session);
            assert!((1.0..=3.0).contains(&session.scale()));
        }
    }

    #[test]
    fn zoom_persists_across_navigation() {
        let mut session = open_session(3, 0);
        session.zoom_in();
        session.next();
        assert_eq!(session.scale(), 1.25);
        session.prev();
        assert_eq!(session.scale(), 1.25);
    }

    #[test]
    fn close_resets_scale_and_reopen_starts_fresh() {
        let mut session = open_session(3, 2);
        session.zoom_in();
        session.close();
        assert!(!session.is_open());
        assert_eq!(session.scale(), 1.0);
        session.open(1);
        assert_eq!(session.scale(), 1.0);
    }

    #[test]
    fn open_while_open_resets_zoom() {
        let mut session = open_session(3, 0);
        session.zoom_in();
        session.open(2);
        assert_eq!(session.current_index(), Some(2));
        assert_eq!(session.scale(), 1.0);
    }

    #[test]
    fn operations_while_closed_are_ignored() {
        let mut session = ViewerSession::new(3);
        let before = session.clone();
        session.next();
        session.prev();
        session.zoom_in();
        session.zoom_out();
        session.zoom_by_wheel(-1.0);
        session.close();
        assert_eq!(session, before);
    }

    #[test]
    fn reset_zoom_always_yields_unit_scale() {
        let mut session = open_session(3, 0);
        session.zoom_in();
        session.zoom_in();
        session.reset_zoom();
        assert_eq!(session.scale(), 1.0);
        assert!(session.is_open());

        let mut closed = ViewerSession::new(3);
        closed.reset_zoom();
        assert_eq!(closed.scale(), 1.0);
    }

    #[test]
    fn counter_label_is_one_based() {
        let session = open_session(8, 2);
        assert_eq!(session.counter_label().as_deref(), Some("3 / 8"));
    }

    #[test]
    fn snapshot_reflects_state() {
        let mut session = open_session(4, 3);
        session.zoom_in();
        assert_eq!(
            session.snapshot(),
            ViewerSnapshot {
                is_open: true,
                current_index: 3,
                scale: 1.25,
            }
        );
        session.close();
        assert!(!session.snapshot().is_open);
    }
}
