// Service exports
pub mod feedback;

pub use feedback::{FeedbackClient, FeedbackError};
