pub mod domain;
pub mod repository;
pub mod service;

pub use domain::JobStats;
pub use repository::{JobRepository, SeaOrmJobRepository};
pub use service::JobService;
