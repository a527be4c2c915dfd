//! Wellchild Scoring Engines
//!
//! Pure scoring and grading for child-health records and screening tests:
//!
//! - Health scores (0-100) with a three-tier status classification,
//!   computed from the latest height/weight/allergy snapshot
//! - Screening-test grading for objective tests (color vision, visual
//!   acuity) and frequency questionnaires (ADHD screening), including the
//!   result narrative and follow-up recommendations
//! - The built-in screening content and cohort-level report aggregation
//!
//! Both engines are stateless, total functions: a missing record reads as
//! worst case, partial measurements degrade the affected term instead of
//! failing, and every returned score is clamped to the 0-100 range. Calls
//! never retain their inputs, so the engines can be shared freely across
//! threads.
//!
//! # Example
//!
//! ```rust
//! use wellchild_core::HealthRecord;
//! use wellchild_scoring::{compute_health_score, HealthStatus};
//!
//! let record = HealthRecord {
//!     height_cm: Some(132.0),
//!     weight_kg: Some(36.0),
//!     blood_type: None,
//!     allergies: vec![],
//! };
//!
//! let result = compute_health_score(Some(&record));
//! assert_eq!(result.score, 90);
//! assert_eq!(result.status, HealthStatus::Healthy);
//! ```

pub mod catalog;
pub mod grading;
pub mod health;
pub mod narrative;
pub mod report;

pub use grading::{grade_test, TestGrade};
pub use health::{compute_health_score, BmiBand, HealthScore};
pub use narrative::{recommendations, result_text, COMMON_RECOMMENDATIONS};
pub use report::{
    class_performance, monthly_trends, risk_distribution, summarize_cohort, AssessmentRow,
    ClassPerformance, CohortSummary, MonthlyTrend, RiskDistribution,
};

// Re-export the shared types engine callers work with, so most callers
// only need this crate.
pub use wellchild_core::{
    CompletedTest, GradingFamily, HealthRecord, HealthStatus, Question, RiskLevel, TestDefinition,
    TestType,
};
