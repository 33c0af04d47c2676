pub mod handle;
pub mod route;

pub use route::ConfigCommand;
