pub mod handle;
pub mod model;
pub mod repository;
pub mod repository_sqlite;
pub mod route;
pub mod schema;
pub mod service;

pub use repository::TextShareRepository;
pub use repository_sqlite::TextShareSqliteRepository;
pub use route::TextShareCommand;
pub use service::TextShareService;
