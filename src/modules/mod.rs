pub mod file;
pub mod settings;
pub mod shortlink;
pub mod tag;
pub mod textshare;
pub mod usage;
