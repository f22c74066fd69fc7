use std::collections::HashMap;

use crate::{
    domain::request_result::{RequestResult, ResponseData},
    error::status_error,
};

use super::Transport;

pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded; charset=UTF-8";
pub const NO_EMAILS_MESSAGE: &str = "No emails provided";

/// Posts the rewritten payload. An empty `emails` list short-circuits
/// without touching the network.
pub async fn submit<T: Transport + ?Sized>(
    transport: &T,
    url: &str,
    headers: &HashMap<String, String>,
    body: String,
    emails: &[String],
) -> RequestResult {
    if emails.is_empty() {
        return RequestResult::failed(NO_EMAILS_MESSAGE);
    }

    log::info!("Submitting payload with the following emails:");
    for email in emails {
        log::info!("- {}", email);
    }
    log::info!("Sending POST request to: {}", url);

    let headers = with_form_content_type(headers);
    let reply = match transport.post_form(url, &headers, body).await {
        Ok(reply) => reply,
        Err(e) => {
            log::error!("Request failed: {}", e);
            return RequestResult::failed(e.to_string());
        }
    };

    if let Some(e) = status_error(reply.status, &reply.body) {
        log::error!("Request failed: {}", e);
        return RequestResult::failed(e.to_string());
    }

    log::info!("Request successful with status code: {}", reply.status);
    let data = ResponseData::from_body(reply.body);
    match &data {
        ResponseData::Json(json) => log::info!("Response JSON: {}", json),
        ResponseData::Text(text) => log::info!("Response text (not JSON): {}", text),
    }

    RequestResult::succeeded(reply.status, data)
}

fn with_form_content_type(headers: &HashMap<String, String>) -> HashMap<String, String> {
    let mut headers = headers.clone();
    if !headers
        .keys()
        .any(|name| name.eq_ignore_ascii_case("content-type"))
    {
        headers.insert("Content-Type".to_string(), FORM_CONTENT_TYPE.to_string());
    }

    headers
}
