use serde_json::Value;

use crate::{
    domain::email::{partition_emails, EmailPartition},
    error::{status_error, ReaderSyncError},
};

use super::Transport;

const EMAILS_KEY: &str = "emails";

pub async fn try_fetch_emails<T: Transport + ?Sized>(
    transport: &T,
    url: &str,
    accepted_domain_suffix: &str,
) -> Result<EmailPartition, ReaderSyncError> {
    log::info!("Fetching emails from: {}", url);

    let reply = transport.get(url).await?;
    if let Some(e) = status_error(reply.status, &reply.body) {
        return Err(e);
    }

    let json: Value = serde_json::from_str(&reply.body)?;
    let emails = match json.get(EMAILS_KEY) {
        Some(Value::Array(emails)) => emails,
        Some(_) => {
            return Err(ReaderSyncError::Schema(format!(
                "'{}' field is not a list",
                EMAILS_KEY
            )))
        }
        None => {
            return Err(ReaderSyncError::Schema(format!(
                "'{}' field not found in response",
                EMAILS_KEY
            )))
        }
    };
    log::info!("Fetched {} email(s) from {}", emails.len(), url);

    let partition = partition_emails(emails, accepted_domain_suffix);
    partition.log_summary(accepted_domain_suffix);

    Ok(partition)
}

/// Accepted emails in response order. Every failure is logged and yields an
/// empty list.
pub async fn fetch_accepted_emails<T: Transport + ?Sized>(
    transport: &T,
    url: &str,
    accepted_domain_suffix: &str,
) -> Vec<String> {
    match try_fetch_emails(transport, url, accepted_domain_suffix).await {
        Ok(partition) => partition.accepted,
        Err(e @ ReaderSyncError::Schema(_)) => {
            log::warn!("{}, treating as no emails", e);
            vec![]
        }
        Err(e) => {
            log::error!("Error fetching emails from {}: {}", url, e);
            vec![]
        }
    }
}
