pub mod handle;
pub mod model;
pub mod repository;
pub mod repository_sqlite;
pub mod route;
pub mod schema;
pub mod service;

pub use repository::UploadedFileRepository;
pub use repository_sqlite::UploadedFileSqliteRepository;
pub use route::FileCommand;
pub use service::FileService;
