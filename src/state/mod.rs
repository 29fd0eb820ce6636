pub mod pan;
pub mod tap;

pub use pan::{PanChange, PanRecognizer};
pub use tap::TapRecognizer;
