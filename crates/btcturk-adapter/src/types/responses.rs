/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Generic response envelope wrapping every payload
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When the envelope layout changes
*/

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `{"success": bool, "message": string|null, "code": int, "data": ...}`
///
/// `code == 0` marks success. `data` defaults to raw JSON so the payload
/// is only decoded once the code has been checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T = Value> {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    pub code: i64,
    #[serde(default)]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    pub fn is_success(&self) -> bool {
        self.code == 0
    }
}
