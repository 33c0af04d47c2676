pub mod handle;
pub mod model;
pub mod repository;
pub mod repository_sqlite;
pub mod route;
pub mod schema;
pub mod service;

pub use repository::ShortLinkRepository;
pub use repository_sqlite::ShortLinkSqliteRepository;
pub use route::ShortLinkCommand;
pub use service::ShortLinkService;
