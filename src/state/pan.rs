// One-pointer pan tracking. Emits incremental motion once the pointer has travelled past the
// activation distance from its press point.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanChange {
    pub dx: f64,
    pub dy: f64,
    /// True for the update that activated the pan.
    pub began: bool,
}

#[derive(Debug, Clone, Default)]
pub struct PanRecognizer {
    activation_distance: f64,
    pointer: Option<i32>,
    active: bool,
    start_x: f64,
    start_y: f64,
    last_x: f64,
    last_y: f64,
}

impl PanRecognizer {
    pub fn new(activation_distance: f64) -> Self {
        Self {
            activation_distance: activation_distance.max(0.0),
            ..Default::default()
        }
    }

    /// Starts tracking `pointer_id` unless another pointer is already being tracked.
    pub fn down(&mut self, pointer_id: i32, x: f64, y: f64) -> bool {
        if self.pointer.is_some() {
            return false;
        }
        self.pointer = Some(pointer_id);
        self.active = false;
        self.start_x = x;
        self.start_y = y;
        self.last_x = x;
        self.last_y = y;
        true
    }

    pub fn moved(&mut self, pointer_id: i32, x: f64, y: f64) -> Option<PanChange> {
        if self.pointer != Some(pointer_id) {
            return None;
        }
        let mut began = false;
        if !self.active {
            let travelled = (x - self.start_x).hypot(y - self.start_y);
            if travelled == 0.0 || travelled < self.activation_distance {
                return None;
            }
            // The activating update carries the whole translation since the press.
            self.active = true;
            began = true;
        }
        let dx = x - self.last_x;
        let dy = y - self.last_y;
        self.last_x = x;
        self.last_y = y;
        if dx == 0.0 && dy == 0.0 {
            return None;
        }
        Some(PanChange { dx, dy, began })
    }

    /// Ends the gesture for `pointer_id`. Returns whether a pan had been active.
    pub fn up(&mut self, pointer_id: i32) -> bool {
        if self.pointer != Some(pointer_id) {
            return false;
        }
        let was_active = self.active;
        self.reset();
        was_active
    }

    pub fn reset(&mut self) {
        self.pointer = None;
        self.active = false;
    }
}
