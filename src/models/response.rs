// Response envelope shared by every portal endpoint

use serde::{Deserialize, Serialize};

/// `{ success, message?, data?, parameters_messages? }`. Every field except
/// `success` is omitted when empty, and older endpoints omit `success` on
/// plain data responses, so everything defaults on deserialize.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters_messages: Option<Vec<ParameterMessages>>,
}

/// Per-field validation messages attached to a 400 response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterMessages {
    pub parameter: String,
    pub messages: Vec<String>,
}
