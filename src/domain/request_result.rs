use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResponseData {
    Json(Value),
    Text(String),
}

impl ResponseData {
    pub fn from_body(body: String) -> Self {
        match serde_json::from_str::<Value>(&body) {
            Ok(json) => ResponseData::Json(json),
            Err(_) => ResponseData::Text(body),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<ResponseData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl RequestResult {
    pub fn succeeded(status_code: u16, data: ResponseData) -> Self {
        RequestResult {
            success: true,
            status_code: Some(status_code),
            data: Some(data),
            message: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        RequestResult {
            success: false,
            status_code: None,
            data: None,
            message: Some(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{RequestResult, ResponseData};

    #[test]
    fn response_data_prefers_json() {
        assert_eq!(
            ResponseData::from_body(r#"{"ok":true}"#.to_string()),
            ResponseData::Json(json!({"ok": true}))
        );
        assert_eq!(
            ResponseData::from_body("<html>saved</html>".to_string()),
            ResponseData::Text("<html>saved</html>".to_string())
        );
    }

    #[test]
    fn request_result_serializes_without_absent_fields() {
        let failed = serde_json::to_value(RequestResult::failed("No emails provided")).unwrap();
        assert_eq!(
            failed,
            json!({"success": false, "message": "No emails provided"})
        );

        let succeeded = serde_json::to_value(RequestResult::succeeded(
            200,
            ResponseData::Text("ok".to_string()),
        ))
        .unwrap();
        assert_eq!(
            succeeded,
            json!({"success": true, "status_code": 200, "data": "ok"})
        );
    }
}
