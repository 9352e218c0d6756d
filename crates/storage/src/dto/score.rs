use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::Score;
use crate::services::scoring::Criteria;

/// The four required judging criteria. Each is scored 0-10.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CriteriaRequest {
    #[validate(range(min = 0.0, max = 10.0, message = "innovation must be 0-10"))]
    pub innovation: f64,
    #[validate(range(min = 0.0, max = 10.0, message = "technical must be 0-10"))]
    pub technical: f64,
    #[validate(range(min = 0.0, max = 10.0, message = "presentation must be 0-10"))]
    pub presentation: f64,
    #[validate(range(min = 0.0, max = 10.0, message = "design must be 0-10"))]
    pub design: f64,
}

impl CriteriaRequest {
    pub fn to_criteria(&self) -> Criteria {
        Criteria {
            innovation: Decimal::from_f64_retain(self.innovation).unwrap_or_default(),
            technical: Decimal::from_f64_retain(self.technical).unwrap_or_default(),
            presentation: Decimal::from_f64_retain(self.presentation).unwrap_or_default(),
            design: Decimal::from_f64_retain(self.design).unwrap_or_default(),
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SubmitScoreRequest {
    pub registration_id: Uuid,
    #[validate(nested)]
    pub criteria: CriteriaRequest,
    #[validate(length(max = 2000))]
    pub feedback: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ScoreResponse {
    pub score_id: Uuid,
    pub event_id: Uuid,
    pub registration_id: Uuid,
    pub judge_id: Uuid,
    pub innovation: f64,
    pub technical: f64,
    pub presentation: f64,
    pub design: f64,
    pub total: f64,
    pub feedback: Option<String>,
    pub locked: bool,
    pub updated_at: chrono::NaiveDateTime,
}

impl From<Score> for ScoreResponse {
    fn from(score: Score) -> Self {
        Self {
            score_id: score.score_id,
            event_id: score.event_id,
            registration_id: score.registration_id,
            judge_id: score.judge_id,
            innovation: decimal_to_f64(score.innovation),
            technical: decimal_to_f64(score.technical),
            presentation: decimal_to_f64(score.presentation),
            design: decimal_to_f64(score.design),
            total: decimal_to_f64(score.total),
            feedback: score.feedback,
            locked: score.locked,
            updated_at: score.updated_at,
        }
    }
}

pub(crate) fn decimal_to_f64(decimal: Decimal) -> f64 {
    decimal.to_string().parse().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::scoring::weighted_total;

    #[test]
    fn test_criteria_conversion_keeps_exact_values() {
        let request = CriteriaRequest {
            innovation: 8.0,
            technical: 6.0,
            presentation: 4.0,
            design: 2.0,
        };

        let total = weighted_total(&request.to_criteria());
        assert_eq!(total, Decimal::new(60, 1));
    }

    #[test]
    fn test_out_of_range_criterion_fails_validation() {
        let request = CriteriaRequest {
            innovation: 11.0,
            technical: 5.0,
            presentation: 5.0,
            design: 5.0,
        };
        assert!(request.validate().is_err());

        let request = CriteriaRequest {
            innovation: 5.0,
            technical: -1.0,
            presentation: 5.0,
            design: 5.0,
        };
        assert!(request.validate().is_err());
    }
}
