// Multi-tap recognition. Fires once when the configured number of quick taps lands inside
// the timing and distance windows, then starts over.

use crate::config::TapSettings;

#[derive(Debug, Clone)]
pub struct TapRecognizer {
    settings: TapSettings,
    pointer: Option<i32>,
    taps: u32,
    down_at: f64,
    last_up_at: f64,
    origin_x: f64,
    origin_y: f64,
}

impl TapRecognizer {
    pub fn new(settings: TapSettings) -> Self {
        Self {
            settings,
            pointer: None,
            taps: 0,
            down_at: 0.0,
            last_up_at: 0.0,
            origin_x: 0.0,
            origin_y: 0.0,
        }
    }

    #[cfg(test)]
    pub fn taps(&self) -> u32 {
        self.taps
    }

    fn within_distance(&self, x: f64, y: f64) -> bool {
        (x - self.origin_x).hypot(y - self.origin_y) <= self.settings.max_distance
    }

    pub fn down(&mut self, pointer_id: i32, x: f64, y: f64, now_ms: f64) {
        if self.pointer.is_some() {
            // Another finger joined mid-tap.
            self.reset();
            return;
        }
        let continues = self.taps > 0
            && now_ms - self.last_up_at <= self.settings.max_delay_ms
            && self.within_distance(x, y);
        if !continues {
            self.taps = 0;
            self.origin_x = x;
            self.origin_y = y;
        }
        self.pointer = Some(pointer_id);
        self.down_at = now_ms;
    }

    pub fn moved(&mut self, pointer_id: i32, x: f64, y: f64) {
        if self.pointer == Some(pointer_id) && !self.within_distance(x, y) {
            self.reset();
        }
    }

    /// Returns true when this release completes the tap sequence.
    pub fn up(&mut self, pointer_id: i32, x: f64, y: f64, now_ms: f64) -> bool {
        if self.pointer != Some(pointer_id) {
            return false;
        }
        self.pointer = None;
        if !self.within_distance(x, y) || now_ms - self.down_at > self.settings.max_duration_ms {
            self.reset();
            return false;
        }
        self.taps += 1;
        self.last_up_at = now_ms;
        if self.taps >= self.settings.count.max(1) {
            self.reset();
            return true;
        }
        false
    }

    /// Drops a press whose release landed outside the tap region.
    pub fn release_elsewhere(&mut self, pointer_id: i32) {
        if self.pointer == Some(pointer_id) {
            self.reset();
        }
    }

    pub fn reset(&mut self) {
        self.pointer = None;
        self.taps = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn double_tap() -> TapRecognizer {
        TapRecognizer::new(TapSettings::default())
    }

    fn tap(rec: &mut TapRecognizer, at_ms: f64) -> bool {
        rec.down(1, 20.0, 20.0, at_ms);
        rec.up(1, 20.0, 20.0, at_ms + 60.0)
    }

    #[test]
    fn fires_on_second_quick_tap_only() {
        let mut rec = double_tap();
        assert!(!tap(&mut rec, 0.0));
        assert_eq!(rec.taps(), 1);
        assert!(tap(&mut rec, 200.0));
        assert_eq!(rec.taps(), 0);
    }

    #[test]
    fn resets_after_firing() {
        let mut rec = double_tap();
        tap(&mut rec, 0.0);
        assert!(tap(&mut rec, 150.0));
        assert!(!tap(&mut rec, 300.0));
        assert!(tap(&mut rec, 450.0));
    }

    #[test]
    fn late_second_press_starts_a_new_sequence() {
        let mut rec = double_tap();
        tap(&mut rec, 0.0);
        // release at 60ms, next press 600ms later
        assert!(!tap(&mut rec, 660.0));
        assert_eq!(rec.taps(), 1);
        assert!(tap(&mut rec, 900.0));
    }

    #[test]
    fn long_press_fails() {
        let mut rec = double_tap();
        tap(&mut rec, 0.0);
        rec.down(1, 20.0, 20.0, 150.0);
        assert!(!rec.up(1, 20.0, 20.0, 900.0));
        assert_eq!(rec.taps(), 0);
    }

    #[test]
    fn movement_past_max_distance_fails() {
        let mut rec = double_tap();
        tap(&mut rec, 0.0);
        rec.down(1, 20.0, 20.0, 150.0);
        rec.moved(1, 45.0, 20.0);
        assert!(!rec.up(1, 45.0, 20.0, 200.0));
        assert_eq!(rec.taps(), 0);
    }

    #[test]
    fn small_jitter_is_tolerated() {
        let mut rec = double_tap();
        rec.down(1, 20.0, 20.0, 0.0);
        rec.moved(1, 23.0, 24.0);
        assert!(!rec.up(1, 23.0, 24.0, 80.0));
        rec.down(2, 18.0, 21.0, 200.0);
        assert!(rec.up(2, 18.0, 21.0, 260.0));
    }

    #[test]
    fn distant_second_tap_is_a_fresh_first_tap() {
        let mut rec = double_tap();
        tap(&mut rec, 0.0);
        rec.down(1, 200.0, 200.0, 150.0);
        assert!(!rec.up(1, 200.0, 200.0, 200.0));
        assert_eq!(rec.taps(), 1);
    }

    #[test]
    fn second_finger_cancels() {
        let mut rec = double_tap();
        tap(&mut rec, 0.0);
        rec.down(1, 20.0, 20.0, 150.0);
        rec.down(2, 30.0, 30.0, 160.0);
        assert!(!rec.up(1, 20.0, 20.0, 200.0));
        assert_eq!(rec.taps(), 0);
    }

    #[test]
    fn release_off_target_does_not_wedge_the_next_sequence() {
        let mut rec = double_tap();
        rec.down(1, 20.0, 20.0, 0.0);
        rec.release_elsewhere(1);
        assert!(!tap(&mut rec, 100.0));
        assert!(tap(&mut rec, 300.0));
    }

    #[test]
    fn release_elsewhere_after_completed_tap_is_a_noop() {
        let mut rec = double_tap();
        tap(&mut rec, 0.0);
        rec.release_elsewhere(1);
        assert_eq!(rec.taps(), 1);
    }

    #[test]
    fn single_tap_count_fires_immediately() {
        let mut rec = TapRecognizer::new(TapSettings {
            count: 1,
            ..TapSettings::default()
        });
        assert!(tap(&mut rec, 0.0));
    }
}
