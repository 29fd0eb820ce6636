//! Interaction state for a single sticker.
//! Offset and size are independent cells; both live inside one reducer so the widget
//! re-renders from a single handle.

use std::rc::Rc;
use yew::{AttrValue, Reducible};

/// Image reference handed to the sticker. Opaque to the widget; the browser resolves it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StickerSource(AttrValue);

impl StickerSource {
    pub fn to_attr(&self) -> AttrValue {
        self.0.clone()
    }
}

impl From<&'static str> for StickerSource {
    fn from(src: &'static str) -> Self {
        Self(AttrValue::Static(src))
    }
}

impl From<String> for StickerSource {
    fn from(src: String) -> Self {
        Self(AttrValue::from(src))
    }
}

impl From<AttrValue> for StickerSource {
    fn from(src: AttrValue) -> Self {
        Self(src)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Offset {
    pub dx: f64,
    pub dy: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StickerState {
    /// Edge length at 1x scale, fixed for the widget's lifetime.
    pub base_size: f64,
    pub offset: Offset,
    /// Target edge length. The rendered size springs toward this.
    pub size: f64,
}

impl StickerState {
    pub fn new(base_size: f64) -> Self {
        Self {
            base_size,
            offset: Offset::default(),
            size: base_size,
        }
    }

    /// Size the next double tap would produce.
    ///
    /// The "already doubled" check is an exact float comparison against `base_size * 2`.
    /// A size that drifted off the exact doubled value keeps doubling instead of shrinking.
    #[allow(clippy::float_cmp)]
    pub fn toggled_size(&self) -> f64 {
        if self.size != self.base_size * 2.0 {
            self.size * 2.0
        } else {
            (self.size / 2.0).round()
        }
    }
}

#[derive(Clone, Debug)]
pub enum StickerAction {
    /// Incremental pan motion since the previous update.
    Drag { dx: f64, dy: f64 },
    DoubleTap,
}

impl Reducible for StickerState {
    type Action = StickerAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use StickerAction::*;
        let mut new = (*self).clone();
        match action {
            Drag { dx, dy } => {
                new.offset.dx += dx;
                new.offset.dy += dy;
            }
            DoubleTap => {
                new.size = new.toggled_size();
            }
        }
        Rc::new(new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(state: StickerState, actions: impl IntoIterator<Item = StickerAction>) -> StickerState {
        let mut rc = Rc::new(state);
        for action in actions {
            rc = rc.reduce(action);
        }
        (*rc).clone()
    }

    #[test]
    fn starts_at_base_size_with_zero_offset() {
        let state = StickerState::new(100.0);
        assert_eq!(state.size, 100.0);
        assert_eq!(state.offset, Offset { dx: 0.0, dy: 0.0 });
    }

    #[test]
    fn drag_deltas_accumulate() {
        let state = apply(
            StickerState::new(100.0),
            [
                StickerAction::Drag { dx: 5.0, dy: 3.0 },
                StickerAction::Drag { dx: -2.0, dy: 4.0 },
                StickerAction::Drag { dx: 10.0, dy: 0.0 },
            ],
        );
        assert_eq!(state.offset, Offset { dx: 13.0, dy: 7.0 });
    }

    #[test]
    fn drag_is_unbounded() {
        let state = apply(
            StickerState::new(40.0),
            [StickerAction::Drag { dx: -5000.0, dy: 12000.0 }],
        );
        assert_eq!(state.offset, Offset { dx: -5000.0, dy: 12000.0 });
    }

    #[test]
    fn double_tap_toggles_between_base_and_double() {
        let doubled = apply(StickerState::new(100.0), [StickerAction::DoubleTap]);
        assert_eq!(doubled.size, 200.0);

        let restored = apply(doubled, [StickerAction::DoubleTap]);
        assert_eq!(restored.size, 100.0);
    }

    #[test]
    fn shrink_rounds_to_nearest_integer() {
        let state = StickerState {
            size: 81.0,
            ..StickerState::new(40.5)
        };
        // 81 == 40.5 * 2, so this shrinks: round(40.5) rounds half away from zero
        let shrunk = apply(state, [StickerAction::DoubleTap]);
        assert_eq!(shrunk.size, 41.0);
        // 41 is no longer the exact doubled value of 40.5 nor the base, so it doubles
        let again = apply(shrunk, [StickerAction::DoubleTap]);
        assert_eq!(again.size, 82.0);
    }

    #[test]
    fn drifted_size_keeps_doubling() {
        let state = StickerState {
            size: 99.9999,
            ..StickerState::new(100.0)
        };
        let next = apply(state, [StickerAction::DoubleTap]);
        assert_eq!(next.size, 99.9999 * 2.0);
        let next = apply(next, [StickerAction::DoubleTap]);
        assert_eq!(next.size, 99.9999 * 4.0);
    }

    #[test]
    fn drag_and_double_tap_do_not_interfere() {
        let dragged = apply(
            StickerState::new(100.0),
            [StickerAction::Drag { dx: 7.0, dy: -3.0 }],
        );
        assert_eq!(dragged.size, 100.0);

        let tapped = apply(dragged, [StickerAction::DoubleTap]);
        assert_eq!(tapped.offset, Offset { dx: 7.0, dy: -3.0 });
        assert_eq!(tapped.size, 200.0);
    }

    #[test]
    fn instances_are_isolated() {
        let a = Rc::new(StickerState::new(40.0));
        let b = Rc::new(StickerState::new(100.0));

        let a2 = a.clone().reduce(StickerAction::DoubleTap);
        let a3 = a2.reduce(StickerAction::Drag { dx: 1.0, dy: 2.0 });

        assert_eq!(a3.size, 80.0);
        assert_eq!(a3.offset, Offset { dx: 1.0, dy: 2.0 });
        assert_eq!(*b, StickerState::new(100.0));
        assert_eq!(*a, StickerState::new(40.0));
    }
}
