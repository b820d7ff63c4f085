pub mod job;
pub mod user;

pub use job::{JobApplication, JobStatus, JobUpdate, NewJobApplication, Priority};
pub use user::User;
