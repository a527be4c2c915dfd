//! Health record snapshots and the status tiers derived from them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ParseError;

/// One snapshot of a child's physical measurements.
///
/// A caregiver edits measurements through the record store; the scoring
/// engine only ever reads the most recent snapshot. A missing height or
/// weight leaves the record valid - dependent calculations skip the
/// measurement instead of failing.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HealthRecord {
    /// Standing height in centimeters
    pub height_cm: Option<f64>,
    /// Body weight in kilograms
    pub weight_kg: Option<f64>,
    pub blood_type: Option<BloodType>,
    /// Recorded allergy names, in entry order
    pub allergies: Vec<String>,
}

impl HealthRecord {
    /// Body mass index (kg/m²), when both measurements are present and
    /// the height is usable.
    pub fn bmi(&self) -> Option<f64> {
        let height_m = self.height_cm? / 100.0;
        let weight_kg = self.weight_kg?;
        if height_m <= 0.0 {
            return None;
        }
        Some(weight_kg / (height_m * height_m))
    }

    /// BMI rounded to one decimal, as shown on profile cards.
    pub fn bmi_display(&self) -> Option<f64> {
        self.bmi().map(|bmi| (bmi * 10.0).round() / 10.0)
    }
}

/// Overall health classification shown on child profiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HealthStatus {
    /// Score of 90 or above
    Healthy,
    /// Score in 70..=89
    NeedsAttention,
    /// Score below 70, or no health record at all
    AtRisk,
}

impl HealthStatus {
    /// Classify a 0-100 health score into its status tier.
    pub fn from_score(score: u8) -> Self {
        if score >= 90 {
            HealthStatus::Healthy
        } else if score >= 70 {
            HealthStatus::NeedsAttention
        } else {
            HealthStatus::AtRisk
        }
    }

    /// Human-readable badge label.
    pub fn label(&self) -> &'static str {
        match self {
            HealthStatus::Healthy => "Healthy",
            HealthStatus::NeedsAttention => "Needs Attention",
            HealthStatus::AtRisk => "At Risk",
        }
    }

    /// Risk tier used by the administrative reports.
    pub fn risk_level(&self) -> RiskLevel {
        match self {
            HealthStatus::Healthy => RiskLevel::Low,
            HealthStatus::NeedsAttention => RiskLevel::Medium,
            HealthStatus::AtRisk => RiskLevel::High,
        }
    }
}

/// Risk tier for report filtering and the risk-distribution chart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low Risk",
            RiskLevel::Medium => "Medium Risk",
            RiskLevel::High => "High Risk",
        }
    }
}

/// ABO/Rh blood groups as stored on health records.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BloodType {
    #[serde(rename = "A+")]
    APositive,
    #[serde(rename = "A-")]
    ANegative,
    #[serde(rename = "B+")]
    BPositive,
    #[serde(rename = "B-")]
    BNegative,
    #[serde(rename = "AB+")]
    AbPositive,
    #[serde(rename = "AB-")]
    AbNegative,
    #[serde(rename = "O+")]
    OPositive,
    #[serde(rename = "O-")]
    ONegative,
}

impl BloodType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BloodType::APositive => "A+",
            BloodType::ANegative => "A-",
            BloodType::BPositive => "B+",
            BloodType::BNegative => "B-",
            BloodType::AbPositive => "AB+",
            BloodType::AbNegative => "AB-",
            BloodType::OPositive => "O+",
            BloodType::ONegative => "O-",
        }
    }
}

impl fmt::Display for BloodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BloodType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A+" => Ok(BloodType::APositive),
            "A-" => Ok(BloodType::ANegative),
            "B+" => Ok(BloodType::BPositive),
            "B-" => Ok(BloodType::BNegative),
            "AB+" => Ok(BloodType::AbPositive),
            "AB-" => Ok(BloodType::AbNegative),
            "O+" => Ok(BloodType::OPositive),
            "O-" => Ok(BloodType::ONegative),
            _ => Err(ParseError::UnknownBloodType(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bmi_from_measurements() {
        let record = HealthRecord {
            height_cm: Some(130.0),
            weight_kg: Some(38.0),
            blood_type: None,
            allergies: vec![],
        };

        let bmi = record.bmi().unwrap();
        assert!((bmi - 22.485).abs() < 0.001);
        assert_eq!(record.bmi_display(), Some(22.5));
    }

    #[test]
    fn test_bmi_requires_both_measurements() {
        let mut record = HealthRecord {
            height_cm: Some(130.0),
            weight_kg: None,
            blood_type: None,
            allergies: vec![],
        };
        assert_eq!(record.bmi(), None);

        record.weight_kg = Some(38.0);
        record.height_cm = None;
        assert_eq!(record.bmi(), None);

        record.height_cm = Some(0.0);
        assert_eq!(record.bmi(), None);
    }

    #[test]
    fn test_status_tiers() {
        assert_eq!(HealthStatus::from_score(100), HealthStatus::Healthy);
        assert_eq!(HealthStatus::from_score(90), HealthStatus::Healthy);
        assert_eq!(HealthStatus::from_score(89), HealthStatus::NeedsAttention);
        assert_eq!(HealthStatus::from_score(70), HealthStatus::NeedsAttention);
        assert_eq!(HealthStatus::from_score(69), HealthStatus::AtRisk);
        assert_eq!(HealthStatus::from_score(0), HealthStatus::AtRisk);
    }

    #[test]
    fn test_status_wire_names() {
        let json = serde_json::to_value(HealthStatus::NeedsAttention).unwrap();
        assert_eq!(json, serde_json::json!("needs-attention"));

        let parsed: HealthStatus = serde_json::from_str("\"at-risk\"").unwrap();
        assert_eq!(parsed, HealthStatus::AtRisk);
    }

    #[test]
    fn test_risk_levels() {
        assert_eq!(HealthStatus::Healthy.risk_level(), RiskLevel::Low);
        assert_eq!(HealthStatus::NeedsAttention.risk_level(), RiskLevel::Medium);
        assert_eq!(HealthStatus::AtRisk.risk_level(), RiskLevel::High);

        let json = serde_json::to_value(RiskLevel::Medium).unwrap();
        assert_eq!(json, serde_json::json!("medium"));
    }

    #[test]
    fn test_badge_labels() {
        assert_eq!(HealthStatus::NeedsAttention.label(), "Needs Attention");
        assert_eq!(HealthStatus::AtRisk.label(), "At Risk");
        assert_eq!(RiskLevel::Low.label(), "Low Risk");
        assert_eq!(RiskLevel::High.label(), "High Risk");
    }

    #[test]
    fn test_blood_type_round_trip() {
        for raw in ["A+", "A-", "B+", "B-", "AB+", "AB-", "O+", "O-"] {
            let parsed: BloodType = raw.parse().unwrap();
            assert_eq!(parsed.to_string(), raw);
        }

        // record-store strings arrive with whatever casing was typed
        assert_eq!("ab+".parse::<BloodType>().unwrap(), BloodType::AbPositive);
        assert_eq!(" o- ".parse::<BloodType>().unwrap(), BloodType::ONegative);

        let err = "Q+".parse::<BloodType>().unwrap_err();
        assert_eq!(err, ParseError::UnknownBloodType("Q+".to_string()));
    }

    #[test]
    fn test_blood_type_wire_names() {
        let json = serde_json::to_value(BloodType::AbNegative).unwrap();
        assert_eq!(json, serde_json::json!("AB-"));
    }
}
