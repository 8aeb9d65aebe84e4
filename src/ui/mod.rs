pub mod board;
pub mod messages;
pub mod timeline;
