pub mod event_repo;
pub mod history_repo;
pub mod link_repo;
pub mod professor_repo;
pub mod schema;
pub mod store;
pub mod student_repo;
pub mod subject_repo;
pub mod user_repo;
pub mod util;

pub use store::DbStore;
