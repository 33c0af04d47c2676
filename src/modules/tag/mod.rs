pub mod handle;
pub mod route;
pub mod schema;
pub mod service;

pub use route::TagCommand;
pub use service::TagService;
