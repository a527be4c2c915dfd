//! Grading for completed screening tests.

use serde::{Deserialize, Serialize};

use crate::narrative;
use wellchild_core::{GradingFamily, TestDefinition};

/// Highest rating on the questionnaire frequency scale (Very Often)
pub const MAX_SEVERITY: u32 = 3;

/// Outcome of grading one completed test.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TestGrade {
    /// Overall score in 0..=100
    pub score: u8,
    /// Correct answers for objective tests. For questionnaires this is the
    /// positive-indicator statistic `n - floor(total_severity / 2)`, kept
    /// verbatim for report compatibility; high-severity sheets drive it
    /// negative.
    pub correct_answers: i32,
    /// Narrative classification of the result
    pub result_text: String,
    /// Follow-up guidance, most specific items first
    pub recommendations: Vec<String>,
}

/// Grade a completed test against its definition.
///
/// Callers are responsible for aligning answers with questions. When the
/// lengths differ, grading covers the shorter of the two: a missing answer
/// counts as incorrect for objective tests and as zero severity for
/// questionnaires. The returned score is clamped to 0..=100 on every
/// branch, so out-of-range answer values yield an unusual but well-formed
/// grade rather than an error.
pub fn grade_test(test: &TestDefinition, answers: &[u32]) -> TestGrade {
    let (score, correct_answers) = match test.test_type.family() {
        GradingFamily::Objective => grade_objective(test, answers),
        GradingFamily::Questionnaire => grade_questionnaire(test, answers),
    };

    TestGrade {
        score,
        correct_answers,
        result_text: narrative::result_text(test.test_type, score).to_string(),
        recommendations: narrative::recommendations(test.test_type, score),
    }
}

fn grade_objective(test: &TestDefinition, answers: &[u32]) -> (u8, i32) {
    let total = test.questions.len();
    if total == 0 {
        // an empty test carries no evidence, which reads as worst case
        return (0, 0);
    }

    let correct = test
        .questions
        .iter()
        .zip(answers)
        .filter(|(question, answer)| question.correct_answer == Some(**answer))
        .count();

    let score = (correct as f64 / total as f64 * 100.0).round().clamp(0.0, 100.0) as u8;
    (score, correct as i32)
}

fn grade_questionnaire(test: &TestDefinition, answers: &[u32]) -> (u8, i32) {
    let total = test.questions.len();
    if total == 0 {
        return (0, 0);
    }

    let total_severity: u64 = answers.iter().take(total).map(|&a| a as u64).sum();
    let max_severity = total as u64 * MAX_SEVERITY as u64;

    let score = ((max_severity as f64 - total_severity as f64) / max_severity as f64 * 100.0)
        .round()
        .clamp(0.0, 100.0) as u8;
    let positive_indicators = total as i64 - (total_severity / 2) as i64;

    (score, positive_indicators as i32)
}
