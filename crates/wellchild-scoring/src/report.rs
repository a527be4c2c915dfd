//! Cohort-level report aggregation.
//!
//! Pure summaries over already-fetched assessment rows; fetching and
//! rendering belong to the application shell. Averages are rounded to one
//! decimal, matching the report cards.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::health::HealthScore;
use wellchild_core::{HealthStatus, RiskLevel};

/// One student's standing, as fetched for the administrative reports.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AssessmentRow {
    pub student_name: String,
    pub class_group: String,
    pub health: HealthScore,
    pub completed_tests: u32,
    pub pending_tests: u32,
    /// Date of the most recent assessment, when one exists
    pub last_assessed: Option<NaiveDate>,
}

/// Cohort-wide figures for the report overview cards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CohortSummary {
    pub total_students: usize,
    pub healthy_students: usize,
    pub students_needing_attention: usize,
    pub students_at_risk: usize,
    pub completed_assessments: u64,
    pub pending_assessments: u64,
    /// Mean health score, one decimal; 0 for an empty cohort
    pub average_score: f64,
}

/// Headcount per risk tier, for the risk-distribution chart.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskDistribution {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
}

/// Mean score and headcount for one class group.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClassPerformance {
    pub class_group: String,
    pub average_score: f64,
    pub students: usize,
}

/// Assessment volume and mean score for one calendar month.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MonthlyTrend {
    pub year: i32,
    pub month: u32,
    pub assessments: usize,
    pub average_score: f64,
}

/// Summarize a cohort for the overview cards.
pub fn summarize_cohort(rows: &[AssessmentRow]) -> CohortSummary {
    let mut summary = CohortSummary {
        total_students: rows.len(),
        healthy_students: 0,
        students_needing_attention: 0,
        students_at_risk: 0,
        completed_assessments: 0,
        pending_assessments: 0,
        average_score: 0.0,
    };

    let mut score_sum = 0u64;
    for row in rows {
        match row.health.status {
            HealthStatus::Healthy => summary.healthy_students += 1,
            HealthStatus::NeedsAttention => summary.students_needing_attention += 1,
            HealthStatus::AtRisk => summary.students_at_risk += 1,
        }
        summary.completed_assessments += row.completed_tests as u64;
        summary.pending_assessments += row.pending_tests as u64;
        score_sum += row.health.score as u64;
    }

    if !rows.is_empty() {
        summary.average_score = round1(score_sum as f64 / rows.len() as f64);
    }
    summary
}

/// Headcounts per risk tier.
pub fn risk_distribution(rows: &[AssessmentRow]) -> RiskDistribution {
    let mut distribution = RiskDistribution::default();
    for row in rows {
        match row.health.status.risk_level() {
            RiskLevel::Low => distribution.low += 1,
            RiskLevel::Medium => distribution.medium += 1,
            RiskLevel::High => distribution.high += 1,
        }
    }
    distribution
}

/// Mean score and headcount per class group, ordered by class name.
pub fn class_performance(rows: &[AssessmentRow]) -> Vec<ClassPerformance> {
    let mut groups: BTreeMap<&str, (u64, usize)> = BTreeMap::new();
    for row in rows {
        let entry = groups.entry(row.class_group.as_str()).or_default();
        entry.0 += row.health.score as u64;
        entry.1 += 1;
    }

    groups
        .into_iter()
        .map(|(class_group, (score_sum, students))| ClassPerformance {
            class_group: class_group.to_string(),
            average_score: round1(score_sum as f64 / students as f64),
            students,
        })
        .collect()
}

/// Assessment volume and mean score per calendar month, chronological.
///
/// Rows without an assessment date are left out.
pub fn monthly_trends(rows: &[AssessmentRow]) -> Vec<MonthlyTrend> {
    let mut months: BTreeMap<(i32, u32), (u64, usize)> = BTreeMap::new();
    for row in rows {
        let Some(assessed) = row.last_assessed else {
            continue;
        };
        let entry = months.entry((assessed.year(), assessed.month())).or_default();
        entry.0 += row.health.score as u64;
        entry.1 += 1;
    }

    months
        .into_iter()
        .map(|((year, month), (score_sum, assessments))| MonthlyTrend {
            year,
            month,
            assessments,
            average_score: round1(score_sum as f64 / assessments as f64),
        })
        .collect()
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
