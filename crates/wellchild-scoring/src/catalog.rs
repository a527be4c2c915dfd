//! Built-in screening content.
//!
//! The fixed question sets the application ships: Ishihara-style color
//! plates, a tumbling-E acuity chart, and the ADHD frequency
//! questionnaire. Plate readings and charted answers are content
//! constants; they are reproduced as published, not derived.

use wellchild_core::{Question, TestDefinition, TestType};

/// Correct reading and plate asset for each color vision question
const COLOR_PLATES: [(u32, &str); 11] = [
    (5, "cb10.png"),
    (7, "cb11.png"),
    (2, "cb12.png"),
    (6, "cb13.png"),
    (2, "cb14.png"),
    (7, "cb15.png"),
    (6, "cb16.png"),
    (7, "cb17.png"),
    (6, "cb18.png"),
    (7, "cb19.png"),
    (2, "cb20.png"),
];

/// Charted answer per tumbling-E line, as published
const ACUITY_ANSWERS: [u32; 5] = [1, 0, 3, 2, 1];

const ACUITY_DIRECTIONS: [&str; 4] = ["Left", "Right", "Up", "Down"];

/// Frequency scale shared by every questionnaire item
const FREQUENCY_SCALE: [&str; 4] = ["Never", "Sometimes", "Often", "Very Often"];

const ADHD_PROMPTS: [&str; 5] = [
    "How often does the child have trouble keeping attention on tasks or play activities?",
    "How often does the child have trouble organizing tasks and activities?",
    "How often does the child fidget with hands or feet or squirm in seat?",
    "How often does the child interrupt or intrude on others?",
    "How often does the child have difficulty waiting their turn?",
];

/// The built-in definition for one test type.
pub fn standard_test(test_type: TestType) -> TestDefinition {
    match test_type {
        TestType::ColorBlindness => color_vision_test(),
        TestType::VisualAcuity => visual_acuity_test(),
        TestType::AdhdScreening => adhd_screening(),
    }
}

/// All built-in tests, one per test type.
pub fn standard_tests() -> Vec<TestDefinition> {
    TestType::ALL.into_iter().map(standard_test).collect()
}

fn color_vision_options() -> Vec<String> {
    let mut options: Vec<String> = (1..=9).map(|digit| digit.to_string()).collect();
    options.push("I can't see any number".to_string());
    options
}

fn color_vision_test() -> TestDefinition {
    TestDefinition {
        test_type: TestType::ColorBlindness,
        questions: COLOR_PLATES
            .iter()
            .map(|&(reading, plate)| {
                Question::objective(
                    "What number do you see in this circle?",
                    color_vision_options(),
                    reading,
                )
                .with_plate(plate)
            })
            .collect(),
    }
}

fn visual_acuity_test() -> TestDefinition {
    TestDefinition {
        test_type: TestType::VisualAcuity,
        questions: ACUITY_ANSWERS
            .iter()
            .map(|&answer| {
                Question::objective(
                    "Which direction is the letter E pointing?",
                    ACUITY_DIRECTIONS.map(String::from).to_vec(),
                    answer,
                )
            })
            .collect(),
    }
}

fn adhd_screening() -> TestDefinition {
    TestDefinition {
        test_type: TestType::AdhdScreening,
        questions: ADHD_PROMPTS
            .iter()
            .map(|&prompt| Question::scale(prompt, FREQUENCY_SCALE.map(String::from).to_vec()))
            .collect(),
    }
}
