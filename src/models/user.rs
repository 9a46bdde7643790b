// Account record as returned by GET /api/user

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub email: String,
    #[serde(default)]
    pub active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_token: Option<String>,
    #[serde(default)]
    pub notification_enabled: bool,
    /// Billing provider subscription id; `None` on the free plan.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription_id: Option<String>,
}

impl User {
    pub fn is_subscribed(&self) -> bool {
        self.subscription_id.is_some()
    }
}
