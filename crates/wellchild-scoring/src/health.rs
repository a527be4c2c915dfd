//! Health score computation over measurement snapshots.

use serde::{Deserialize, Serialize};

use wellchild_core::{HealthRecord, HealthStatus};

/// Starting point before measurement adjustments are applied
pub const BASE_SCORE: f64 = 80.0;

/// Points deducted per recorded allergy
pub const ALLERGY_PENALTY: f64 = 2.0;

/// BMI brackets used by the health score.
///
/// Boundaries are inclusive toward the more favorable band: a BMI of
/// exactly 24.9 still counts as the healthy range, and exactly 30.0 as
/// moderately high rather than far out of range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BmiBand {
    /// Below 16
    SeverelyUnderweight,
    /// 16 up to (but not including) 18.5
    Underweight,
    /// 18.5 through 24.9 inclusive
    HealthyRange,
    /// Above 24.9 through 30 inclusive
    Overweight,
    /// Above 30
    Obese,
}

impl BmiBand {
    /// Classify a BMI value into its band.
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 16.0 {
            BmiBand::SeverelyUnderweight
        } else if bmi < 18.5 {
            BmiBand::Underweight
        } else if bmi <= 24.9 {
            BmiBand::HealthyRange
        } else if bmi <= 30.0 {
            BmiBand::Overweight
        } else {
            BmiBand::Obese
        }
    }

    /// Score adjustment contributed by this band.
    pub fn score_adjustment(&self) -> f64 {
        match self {
            BmiBand::HealthyRange => 10.0,
            BmiBand::Underweight | BmiBand::Overweight => -5.0,
            BmiBand::SeverelyUnderweight | BmiBand::Obese => -15.0,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            BmiBand::SeverelyUnderweight => "Severely underweight",
            BmiBand::Underweight => "Underweight",
            BmiBand::HealthyRange => "Healthy range",
            BmiBand::Overweight => "Overweight",
            BmiBand::Obese => "Obese",
        }
    }
}

/// A computed health score with its status tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthScore {
    /// Overall score in 0..=100
    pub score: u8,
    pub status: HealthStatus,
}

/// Compute the health score for a child's latest measurement snapshot.
///
/// A missing record reads as worst case (score 0, at risk), never as
/// healthy. A record with only partial measurements skips the BMI term and
/// keeps the rest of the calculation. Arithmetic stays real-valued until
/// the final half-up round and clamp to 0..=100.
pub fn compute_health_score(record: Option<&HealthRecord>) -> HealthScore {
    let Some(record) = record else {
        return HealthScore {
            score: 0,
            status: HealthStatus::AtRisk,
        };
    };

    let mut score = BASE_SCORE;

    if let Some(bmi) = record.bmi() {
        score += BmiBand::from_bmi(bmi).score_adjustment();
    }

    score -= ALLERGY_PENALTY * record.allergies.len() as f64;

    let score = score.round().clamp(0.0, 100.0) as u8;
    HealthScore {
        score,
        status: HealthStatus::from_score(score),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(height_cm: f64, weight_kg: f64, allergies: usize) -> HealthRecord {
        HealthRecord {
            height_cm: Some(height_cm),
            weight_kg: Some(weight_kg),
            blood_type: None,
            allergies: (0..allergies).map(|i| format!("allergen-{i}")).collect(),
        }
    }

    #[test]
    fn test_missing_record_is_worst_case() {
        let result = compute_health_score(None);
        assert_eq!(result.score, 0);
        assert_eq!(result.status, HealthStatus::AtRisk);
    }

    #[test]
    fn test_healthy_bmi_no_allergies() {
        // 140 cm / 40 kg -> BMI 20.4
        let result = compute_health_score(Some(&record(140.0, 40.0, 0)));
        assert_eq!(result.score, 90);
        assert_eq!(result.status, HealthStatus::Healthy);
    }

    #[test]
    fn test_severely_underweight() {
        // 140 cm / 29 kg -> BMI 14.8
        let result = compute_health_score(Some(&record(140.0, 29.0, 0)));
        assert_eq!(result.score, 65);
        assert_eq!(result.status, HealthStatus::AtRisk);
    }

    #[test]
    fn test_mild_bands_share_penalty() {
        // underweight: BMI 17.3
        let result = compute_health_score(Some(&record(140.0, 34.0, 0)));
        assert_eq!(result.score, 75);

        // overweight: BMI 26.5
        let result = compute_health_score(Some(&record(140.0, 52.0, 0)));
        assert_eq!(result.score, 75);
    }

    #[test]
    fn test_missing_measurement_skips_bmi_term() {
        let partial = HealthRecord {
            height_cm: Some(140.0),
            weight_kg: None,
            blood_type: None,
            allergies: vec!["peanuts".to_string()],
        };
        let result = compute_health_score(Some(&partial));
        assert_eq!(result.score, 78);
        assert_eq!(result.status, HealthStatus::NeedsAttention);
    }

    #[test]
    fn test_each_allergy_costs_two_points() {
        let mut previous = compute_health_score(Some(&record(140.0, 40.0, 0))).score;
        for n in 1..=10 {
            let score = compute_health_score(Some(&record(140.0, 40.0, n))).score;
            assert_eq!(previous - score, 2, "allergy {n} should cost 2 points");
            previous = score;
        }
    }

    #[test]
    fn test_score_floors_at_zero() {
        let result = compute_health_score(Some(&record(140.0, 40.0, 60)));
        assert_eq!(result.score, 0);
        assert_eq!(result.status, HealthStatus::AtRisk);
    }

    #[test]
    fn test_bmi_band_boundaries() {
        assert_eq!(BmiBand::from_bmi(15.99), BmiBand::SeverelyUnderweight);
        assert_eq!(BmiBand::from_bmi(16.0), BmiBand::Underweight);
        assert_eq!(BmiBand::from_bmi(18.5), BmiBand::HealthyRange);
        assert_eq!(BmiBand::from_bmi(24.9), BmiBand::HealthyRange);
        assert_eq!(BmiBand::from_bmi(24.91), BmiBand::Overweight);
        assert_eq!(BmiBand::from_bmi(30.0), BmiBand::Overweight);
        assert_eq!(BmiBand::from_bmi(30.01), BmiBand::Obese);
        assert_eq!(BmiBand::from_bmi(21.0).description(), "Healthy range");
    }

    #[test]
    fn test_idempotent() {
        let snapshot = record(128.0, 31.5, 3);
        let first = compute_health_score(Some(&snapshot));
        let second = compute_health_score(Some(&snapshot));
        assert_eq!(first, second);
    }
}
