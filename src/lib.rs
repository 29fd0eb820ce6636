pub mod animation;
pub mod components;
pub mod config;
pub mod error;
pub mod model;
pub mod spring;
pub mod state;
pub mod util;

pub use components::{App, EmojiSticker, EmojiStickerProps};
pub use config::StickerConfig;
pub use model::{StickerSource, StickerState};
