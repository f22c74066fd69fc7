use crate::{
    configuration::PipelineConfig,
    domain::{reader::rewrite_payload_with_type, request_result::RequestResult},
    services::{fetch_accepted_emails, submit, Transport, NO_EMAILS_MESSAGE},
};

/// Fetches the accepted emails, rewrites the captured payload and submits it.
/// A failing stage stops the run and nothing after it is sent.
pub async fn run<T: Transport + ?Sized>(transport: &T, config: &PipelineConfig) -> RequestResult {
    let emails = fetch_accepted_emails(
        transport,
        &config.source_url,
        &config.accepted_domain_suffix,
    )
    .await;

    if emails.is_empty() {
        log::warn!(
            "No emails were fetched from {}, check that it returns {{\"emails\": [...]}}",
            config.source_url
        );
        return RequestResult::failed(NO_EMAILS_MESSAGE);
    }

    let payload = match rewrite_payload_with_type(
        &config.captured_payload,
        &emails,
        &config.group_prefix,
        &config.reader_type,
    ) {
        Ok(payload) => payload,
        Err(e) => {
            log::error!("Could not rewrite the captured payload: {}", e);
            return RequestResult::failed(e.to_string());
        }
    };

    submit(
        transport,
        &config.destination_url,
        &config.headers,
        payload,
        &emails,
    )
    .await
}
