//! Screening test definitions and completed attempts.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ParseError;

/// The screening tests offered by the application.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TestType {
    ColorBlindness,
    VisualAcuity,
    AdhdScreening,
}

impl TestType {
    pub const ALL: [TestType; 3] = [
        TestType::ColorBlindness,
        TestType::VisualAcuity,
        TestType::AdhdScreening,
    ];

    /// How attempts at this test are graded.
    pub fn family(&self) -> GradingFamily {
        match self {
            TestType::ColorBlindness | TestType::VisualAcuity => GradingFamily::Objective,
            TestType::AdhdScreening => GradingFamily::Questionnaire,
        }
    }

    /// Display name shown on reports and the test intro card.
    pub fn name(&self) -> &'static str {
        match self {
            TestType::ColorBlindness => "Color Vision Test",
            TestType::VisualAcuity => "Visual Acuity Test",
            TestType::AdhdScreening => "ADHD Screening",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            TestType::ColorBlindness => {
                "This test screens for color blindness using Ishihara plates"
            }
            TestType::VisualAcuity => "This test measures the clarity of your vision",
            TestType::AdhdScreening => {
                "This screening helps identify potential attention and hyperactivity concerns"
            }
        }
    }

    /// Instructions read to the child (or caregiver) before starting.
    pub fn instructions(&self) -> &'static str {
        match self {
            TestType::ColorBlindness => {
                "Look at each image carefully and select the number you see in the colored dots."
            }
            TestType::VisualAcuity => {
                "Look at each letter E and select the direction it is pointing."
            }
            TestType::AdhdScreening => {
                "Answer each question based on your observations of the child's behavior."
            }
        }
    }

    /// Stable identifier used by the record store.
    pub fn as_str(&self) -> &'static str {
        match self {
            TestType::ColorBlindness => "color-blindness",
            TestType::VisualAcuity => "visual-acuity",
            TestType::AdhdScreening => "adhd-screening",
        }
    }
}

impl fmt::Display for TestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TestType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "color-blindness" => Ok(TestType::ColorBlindness),
            "visual-acuity" => Ok(TestType::VisualAcuity),
            "adhd-screening" => Ok(TestType::AdhdScreening),
            _ => Err(ParseError::UnknownTestType(s.to_string())),
        }
    }
}

/// The two grading schemes a test can use.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradingFamily {
    /// Each question has a single correct option
    Objective,
    /// Answers are ordinal frequency ratings; no correct option exists
    Questionnaire,
}

/// One question within a screening test.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub prompt: String,
    /// Selectable options, in presentation order
    pub options: Vec<String>,
    /// 1-based index of the correct option; `None` for questionnaire items
    pub correct_answer: Option<u32>,
    /// Stimulus image shown with the question, when the test uses plates
    pub plate: Option<String>,
}

impl Question {
    /// An objective question with a single correct option.
    pub fn objective(
        prompt: impl Into<String>,
        options: Vec<String>,
        correct_answer: u32,
    ) -> Self {
        Question {
            prompt: prompt.into(),
            options,
            correct_answer: Some(correct_answer),
            plate: None,
        }
    }

    /// A questionnaire item rated on an ordinal frequency scale.
    pub fn scale(prompt: impl Into<String>, options: Vec<String>) -> Self {
        Question {
            prompt: prompt.into(),
            options,
            correct_answer: None,
            plate: None,
        }
    }

    pub fn with_plate(mut self, plate: impl Into<String>) -> Self {
        self.plate = Some(plate.into());
        self
    }
}

/// Static description of one screening test.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TestDefinition {
    pub test_type: TestType,
    /// Questions in presentation order
    pub questions: Vec<Question>,
}

/// One test-taking session, immutable once submitted.
///
/// `answers` holds one entry per question, in question order: the selected
/// 1-based option index for objective tests, or the 0..=3 severity rating
/// for questionnaire tests.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CompletedTest {
    pub test_type: TestType,
    pub answers: Vec<u32>,
    /// Elapsed wall time; informational only, never used in scoring
    pub completion_time_secs: u32,
}

impl CompletedTest {
    /// Completion time as `m:ss`, the way the results card shows it.
    pub fn completion_time_display(&self) -> String {
        let mins = self.completion_time_secs / 60;
        let secs = self.completion_time_secs % 60;
        format!("{}:{:02}", mins, secs)
    }
}
