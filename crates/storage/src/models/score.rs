use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// One judge's weighted evaluation of one registration. At most one row
/// per (registration, judge) pair; re-submission overwrites until the
/// hosting event is finalized and the row is locked.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Score {
    pub score_id: Uuid,
    pub event_id: Uuid,
    pub registration_id: Uuid,
    pub judge_id: Uuid,
    #[schema(value_type = f64)]
    pub innovation: Decimal,
    #[schema(value_type = f64)]
    pub technical: Decimal,
    #[schema(value_type = f64)]
    pub presentation: Decimal,
    #[schema(value_type = f64)]
    pub design: Decimal,
    #[schema(value_type = f64)]
    pub total: Decimal,
    pub feedback: Option<String>,
    pub locked: bool,
    pub created_at: chrono::NaiveDateTime,
    pub updated_at: chrono::NaiveDateTime,
}
