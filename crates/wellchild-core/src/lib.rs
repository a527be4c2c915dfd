//! Wellchild Shared Types
//!
//! Common domain types for the wellchild child-health toolkit:
//! - Health record snapshots (measurements, blood type, allergies)
//! - Screening test definitions and completed attempts
//! - Status and risk tiers shared by the scoring engines
//! - Checkup scheduling and age helpers
//!
//! Everything here is plain data: records are created and persisted by the
//! surrounding application, and handed to the scoring engines by value or
//! read-only reference.

pub mod health;
pub mod schedule;
pub mod screening;

pub use health::{BloodType, HealthRecord, HealthStatus, RiskLevel};
pub use schedule::{age_months_on, age_on, checkup_status, next_checkup_due, CheckupStatus};
pub use screening::{CompletedTest, GradingFamily, Question, TestDefinition, TestType};

use thiserror::Error;

/// Errors raised when decoding identifier strings from the record store
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown test type: '{0}'")]
    UnknownTestType(String),
    #[error("unknown blood type: '{0}'")]
    UnknownBloodType(String),
}
