// Billing plan identifiers as returned by GET /api/plan

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub plan_monthly_id: String,
    pub plan_annual_id: String,
    pub client_id: String,
}
