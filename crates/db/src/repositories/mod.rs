//! Per-entity repositories over the shared connection pool.
//!
//! Each repository is a stateless unit struct with associated async
//! functions; every operation is a single independent statement.

pub mod bin_inventory_repo;
pub mod bin_location_repo;
pub mod complaint_repo;
pub mod feedback_repo;
pub mod request_repo;
pub mod role_repo;
pub mod schedule_repo;
pub mod user_repo;

pub use bin_inventory_repo::BinInventoryRepo;
pub use bin_location_repo::BinLocationRepo;
pub use complaint_repo::ComplaintRepo;
pub use feedback_repo::FeedbackRepo;
pub use request_repo::RequestRepo;
pub use role_repo::RoleRepo;
pub use schedule_repo::ScheduleRepo;
pub use user_repo::UserRepo;
