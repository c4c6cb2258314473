pub mod format;
pub mod health;
pub mod webhook;

/// Bot identity reported in every format result.
pub const BOT_USERNAME: &str = "code-formatter-bot";

/// Event tag on every format result.
pub const EVENT_MESSAGE_FORMATTED: &str = "message_formatted";
