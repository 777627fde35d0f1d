// SPDX-License-Identifier: MPL-2.0
//! Horizontal swipe detection for touch input.

use crate::domain::ui::SwipeThreshold;

/// Identifier of a touch point, as reported by the platform.
pub type FingerId = u64;

/// Horizontal travel up to which a touch on the scrim still counts as a tap.
pub const TAP_SLOP_PX: f32 = 10.0;

/// Direction the finger travelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger moved right-to-left (shows the next image).
    Left,
    /// Finger moved left-to-right (shows the previous image).
    Right,
}

/// What a finished touch gesture amounts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchGesture {
    Swipe(SwipeDirection),
    /// A touch that began and ended on the scrim without moving.
    ScrimTap,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct GestureStart {
    finger: FingerId,
    x: f32,
    on_scrim: bool,
}

/// Tracks one gesture from touch start to touch end.
///
/// Only the finger that started the gesture can finish it; other fingers
/// are ignored until it is released or lost.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SwipeTracker {
    start: Option<GestureStart>,
}

impl SwipeTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the horizontal position where a gesture begins.
    pub fn start(&mut self, finger: FingerId, x: f32) {
        self.begin(finger, x, false);
    }

    /// Same as [`start`](Self::start), for a touch that landed on the scrim.
    pub fn start_on_scrim(&mut self, finger: FingerId, x: f32) {
        self.begin(finger, x, true);
    }

    fn begin(&mut self, finger: FingerId, x: f32, on_scrim: bool) {
        if self.start.is_none() {
            self.start = Some(GestureStart {
                finger,
                x,
                on_scrim,
            });
        }
    }

    /// Ends the gesture and classifies it.
    ///
    /// Returns `None` when the finger is not the tracked one, or when the
    /// travel `abs(start_x - end_x)` does not exceed `threshold` and the
    /// gesture was not a tap on the scrim.
    pub fn finish(
        &mut self,
        finger: FingerId,
        x: f32,
        threshold: SwipeThreshold,
    ) -> Option<TouchGesture> {
        let start = self.start?;
        if start.finger != finger {
            return None;
        }
        self.start = None;

        let diff = start.x - x;
        if threshold.is_exceeded_by(diff) {
            let direction = if diff > 0.0 {
                SwipeDirection::Left
            } else {
                SwipeDirection::Right
            };
            return Some(TouchGesture::Swipe(direction));
        }
        (start.on_scrim && diff.abs() <= TAP_SLOP_PX).then_some(TouchGesture::ScrimTap)
    }

    /// Drops the gesture if `finger` is the tracked one.
    pub fn cancel(&mut self, finger: FingerId) {
        if matches!(self.start, Some(start) if start.finger == finger) {
            self.start = None;
        }
    }

    /// Drops any gesture in progress.
    pub fn reset(&mut self) {
        self.start = None;
    }

    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.start.is_some()
    }
}
