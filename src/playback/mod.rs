//! Cursor over a recorded step sequence
//!
//! [`Playback`] never owns steps. It only tracks a position in `0..len` and
//! the auto-play clock, so it works the same for a fixed run and for a BST
//! session whose history keeps growing.

use std::time::{Duration, Instant};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlaybackError {
    #[error("Already at the first step")]
    AtStart,

    #[error("Already at the last step")]
    AtEnd,

    #[error("Nothing has been recorded")]
    Empty,
}

#[derive(Debug, Clone)]
pub struct Playback {
    position: usize,
    len: usize,
    interval: Duration,
    playing: bool,
    last_tick: Instant,
}

impl Playback {
    pub fn new(len: usize, interval: Duration) -> Self {
        Playback {
            position: 0,
            len,
            interval,
            playing: false,
            last_tick: Instant::now(),
        }
    }

    /// Current step index
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn at_start(&self) -> bool {
        self.position == 0
    }

    pub fn at_end(&self) -> bool {
        self.position + 1 >= self.len
    }

    /// Jump to `index`, clamped into range
    pub fn seek(&mut self, index: usize) {
        self.position = index.min(self.len.saturating_sub(1));
    }

    pub fn rewind_to_start(&mut self) {
        self.playing = false;
        self.position = 0;
    }

    pub fn jump_to_end(&mut self) {
        self.playing = false;
        self.seek(self.len.saturating_sub(1));
    }

    pub fn step_forward(&mut self) -> Result<(), PlaybackError> {
        if self.len == 0 {
            return Err(PlaybackError::Empty);
        }
        if self.at_end() {
            return Err(PlaybackError::AtEnd);
        }
        self.position += 1;
        Ok(())
    }

    pub fn step_backward(&mut self) -> Result<(), PlaybackError> {
        if self.len == 0 {
            return Err(PlaybackError::Empty);
        }
        if self.position == 0 {
            return Err(PlaybackError::AtStart);
        }
        self.position -= 1;
        Ok(())
    }

    /// Step forward up to `n` times, returning how many steps were taken
    pub fn step_forward_by(&mut self, n: usize) -> usize {
        let target = (self.position + n).min(self.len.saturating_sub(1));
        let taken = target.saturating_sub(self.position);
        self.position = target;
        taken
    }

    /// Toggle auto-play. Starting at the end restarts from the first step.
    pub fn toggle_play(&mut self, now: Instant) -> bool {
        self.playing = !self.playing;
        if self.playing {
            if self.at_end() {
                self.position = 0;
            }
            self.last_tick = now;
        }
        self.playing
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    /// Advance one step if playing and the interval has elapsed. Playback
    /// stops by itself on the last step.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.playing || now.saturating_duration_since(self.last_tick) < self.interval {
            return false;
        }
        self.last_tick = now;
        match self.step_forward() {
            Ok(()) => {
                if self.at_end() {
                    self.playing = false;
                }
                true
            }
            Err(_) => {
                self.playing = false;
                false
            }
        }
    }

    /// The history grew to `len` steps; the position is kept
    pub fn extend_to(&mut self, len: usize) {
        self.len = len.max(self.len);
    }

    /// Replace the sequence length outright (history was cleared or reset)
    pub fn reset_len(&mut self, len: usize) {
        self.len = len;
        self.playing = false;
        self.seek(self.position);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playback(len: usize) -> Playback {
        Playback::new(len, Duration::from_millis(100))
    }

    #[test]
    fn test_bounds_are_errors_not_panics() {
        let mut p = playback(2);
        assert_eq!(p.step_backward(), Err(PlaybackError::AtStart));
        assert!(p.step_forward().is_ok());
        assert_eq!(p.step_forward(), Err(PlaybackError::AtEnd));
        assert_eq!(playback(0).step_forward(), Err(PlaybackError::Empty));
    }

    #[test]
    fn test_seek_clamps() {
        let mut p = playback(5);
        p.seek(99);
        assert_eq!(p.position(), 4);
        p.rewind_to_start();
        assert_eq!(p.step_forward_by(3), 3);
        assert_eq!(p.step_forward_by(3), 1);
        assert!(p.at_end());
    }

    #[test]
    fn test_tick_advances_on_interval_and_stops_at_end() {
        let mut p = playback(3);
        let t0 = Instant::now();
        assert!(p.toggle_play(t0));
        assert!(!p.tick(t0 + Duration::from_millis(50)));
        assert!(p.tick(t0 + Duration::from_millis(100)));
        assert_eq!(p.position(), 1);
        assert!(p.tick(t0 + Duration::from_millis(200)));
        assert_eq!(p.position(), 2);
        assert!(!p.is_playing());
        assert!(!p.tick(t0 + Duration::from_millis(300)));
    }

    #[test]
    fn test_play_from_end_restarts() {
        let mut p = playback(3);
        p.jump_to_end();
        p.toggle_play(Instant::now());
        assert_eq!(p.position(), 0);
    }

    #[test]
    fn test_growing_history_keeps_position() {
        let mut p = playback(4);
        p.seek(2);
        p.extend_to(10);
        assert_eq!(p.position(), 2);
        assert_eq!(p.len(), 10);

        p.reset_len(1);
        assert_eq!(p.position(), 0);
    }
}
