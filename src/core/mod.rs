pub mod confirm;
pub mod duration;
pub mod format;
pub mod session;
