/*
[INPUT]:  Hotel name, room code and post-checkout room status
[OUTPUT]: Generated or existing automatic cleaning task
[POS]:    HTTP layer - automatic cleaning task endpoint
[UPDATE]: When the cleaning endpoint contract changes
*/

use reqwest::{Method, StatusCode};
use serde_json::Value;

use crate::http::client::decode_json;
use crate::http::{HousekeepingClient, Result};
use crate::types::{AutomaticCleaningTaskRequest, AutomaticCleaningTaskResponse};

impl HousekeepingClient {
    /// Generate a cleaning task for a room, or fetch the one already open
    ///
    /// POST /api/v1/automatic-cleaning-tasks
    ///
    /// Business failures may arrive with a 4xx/5xx status; a body that decodes
    /// as `{success: false, ...}` is returned as a regular response.
    pub async fn generate_cleaning_task(
        &self,
        req: &AutomaticCleaningTaskRequest,
    ) -> Result<AutomaticCleaningTaskResponse> {
        let builder = self
            .request(Method::POST, "/api/v1/automatic-cleaning-tasks")?
            .json(req);
        let raw = self.send_raw(builder).await?;

        if !raw.status.is_success() && raw.status != StatusCode::UNAUTHORIZED {
            if let Some(response) = business_failure(&raw.body) {
                tracing::debug!(
                    status = raw.status.as_u16(),
                    hotel = %req.hotel_name,
                    room = %req.room_code,
                    "cleaning endpoint reported business failure"
                );
                return Ok(response);
            }
        }

        decode_json(raw)
    }
}

/// Decode a body that explicitly carries `"success": false`
fn business_failure(body: &[u8]) -> Option<AutomaticCleaningTaskResponse> {
    let value: Value = serde_json::from_slice(body).ok()?;
    if value.get("success") != Some(&Value::Bool(false)) {
        return None;
    }
    serde_json::from_value(value).ok()
}
