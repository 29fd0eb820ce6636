pub mod app;
pub mod emoji_sticker;

pub use app::App;
pub use emoji_sticker::{EmojiSticker, EmojiStickerProps};
