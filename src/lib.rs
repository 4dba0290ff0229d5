//! Lume Compat - Relationship compatibility scoring for the Lume dating app
//!
//! This library provides the compatibility quiz scoring used by Lume: a
//! date-only quick estimate, a weighted questionnaire broken down by
//! relationship category, and the feedback email channel.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{score_date_compatibility, QuestionBank, Scorer, ScoringError};
pub use models::{Answer, AnswerSet, Category, CompatibilityTier, FeatureFlags, Question, TestResult};
