//! Result narratives and follow-up recommendations for graded tests.
//!
//! Thresholds and wording match the published screening report text; the
//! tier tables here are the compatibility surface for everything the
//! application has already stored.

use wellchild_core::TestType;

/// Recommendations appended to every graded test, always in this order
pub const COMMON_RECOMMENDATIONS: [&str; 3] = [
    "Share these results with your healthcare provider",
    "Schedule regular check-ups as recommended",
    "Monitor any changes in symptoms or behavior",
];

/// Narrative classification for a graded score.
pub fn result_text(test_type: TestType, score: u8) -> &'static str {
    match test_type {
        TestType::ColorBlindness => {
            if score >= 80 {
                "Normal color vision detected. No signs of color blindness."
            } else if score >= 60 {
                "Mild color vision deficiency may be present. Consider professional evaluation."
            } else {
                "Color vision deficiency detected. Professional evaluation recommended."
            }
        }
        TestType::VisualAcuity => {
            if score >= 90 {
                "Excellent visual acuity. 20/20 vision or better."
            } else if score >= 70 {
                "Good visual acuity with minor concerns."
            } else {
                "Visual acuity concerns detected. Eye examination recommended."
            }
        }
        TestType::AdhdScreening => {
            if score >= 80 {
                "Low likelihood of ADHD-related concerns."
            } else if score >= 60 {
                "Some attention or hyperactivity concerns noted. Monitoring recommended."
            } else {
                "Significant attention or hyperactivity concerns detected. Professional evaluation recommended."
            }
        }
    }
}

/// Follow-up guidance for a graded score.
///
/// Scores at or above the test's referral threshold get a single
/// reassurance item; lower scores get the remediation list. The
/// [`COMMON_RECOMMENDATIONS`] tail always comes last.
pub fn recommendations(test_type: TestType, score: u8) -> Vec<String> {
    let head: &[&str] = match test_type {
        TestType::ColorBlindness => {
            if score < 80 {
                &[
                    "Consult with an eye care professional for comprehensive color vision testing",
                    "Inform teachers about potential color vision differences",
                    "Consider alternative teaching methods that don't rely solely on color",
                ]
            } else {
                &["Continue regular eye examinations"]
            }
        }
        TestType::VisualAcuity => {
            if score < 80 {
                &[
                    "Schedule a comprehensive eye examination",
                    "Ensure proper lighting when reading or studying",
                    "Limit screen time and take regular breaks",
                ]
            } else {
                &["Maintain good eye health habits"]
            }
        }
        TestType::AdhdScreening => {
            if score < 70 {
                &[
                    "Consider consultation with a pediatric psychologist or psychiatrist",
                    "Implement structured routines and clear expectations",
                    "Provide frequent breaks during focused activities",
                    "Consider classroom accommodations if needed",
                ]
            } else {
                &["Continue supportive parenting strategies"]
            }
        }
    };

    head.iter()
        .chain(COMMON_RECOMMENDATIONS.iter())
        .map(|item| item.to_string())
        .collect()
}
