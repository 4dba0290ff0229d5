// Core algorithm exports
pub mod dates;
pub mod error;
pub mod insights;
pub mod progress;
pub mod questions;
pub mod scorer;
pub mod scoring;

pub use dates::{date_compatibility, parse_birth_date, score_date_compatibility};
pub use error::ScoringError;
pub use progress::{progress, QuizProgress};
pub use questions::{standard_questions, QuestionBank};
pub use scorer::Scorer;
pub use scoring::{score_all_categories, score_category};
