use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct EmailPartition {
    pub accepted: Vec<String>,
    pub rejected: Vec<String>,
    pub malformed: Vec<Value>,
}

pub fn is_accepted(email: &str, accepted_domain_suffix: &str) -> bool {
    email
        .to_lowercase()
        .ends_with(&accepted_domain_suffix.to_lowercase())
}

pub fn partition_emails(values: &[Value], accepted_domain_suffix: &str) -> EmailPartition {
    let mut partition = EmailPartition::default();

    for value in values {
        match value {
            Value::String(email) => match is_accepted(email, accepted_domain_suffix) {
                true => partition.accepted.push(email.clone()),
                false => partition.rejected.push(email.clone()),
            },
            other => partition.malformed.push(other.clone()),
        }
    }

    partition
}

impl EmailPartition {
    pub fn log_summary(&self, accepted_domain_suffix: &str) {
        for value in self.malformed.iter() {
            log::warn!("Skipping invalid email format: {}", value);
        }

        log::info!(
            "Email filtering summary | accepted: {} | rejected: {}",
            self.accepted.len(),
            self.rejected.len()
        );

        if !self.rejected.is_empty() {
            log::warn!(
                "Rejected {} address(es) not ending with {}",
                self.rejected.len(),
                accepted_domain_suffix
            );
            for (idx, email) in self.rejected.iter().enumerate() {
                log::warn!("  {}. {}", idx + 1, email);
            }
        }

        for (idx, email) in self.accepted.iter().enumerate() {
            log::info!("Accepted {}. {}", idx + 1, email);
        }
    }
}
