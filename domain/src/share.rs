//! Share a generated summary with a list of email recipients.
//!
//! Delivery is an intentional stub: recipients are filtered for syntactic
//! validity, the subject and body are synthesized, and a fixed delay stands
//! in for transport latency — but no email is transmitted.

use crate::error::Error;
use chrono::{DateTime, Local};
use log::*;
use regex::Regex;
use serde::Serialize;
use service::config::Config;
use std::sync::LazyLock;
use std::time::Duration;

/// Recipient filter: exactly one `@` with a `.` segment after it and no
/// whitespace anywhere.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// Outcome of a (simulated) share delivery.
#[derive(Debug, Serialize)]
pub struct SharedSummary {
    pub success: bool,
    pub message: String,
    /// The recipients that passed the filter, in their original order.
    pub recipients: Vec<String>,
    pub subject: String,
}

/// Returns true when `email` passes the recipient filter.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Validate, filter and "deliver" a summary to the given recipients.
pub async fn share(
    config: &Config,
    summary: &str,
    recipients: Vec<String>,
) -> Result<SharedSummary, Error> {
    if summary.is_empty() || recipients.is_empty() {
        return Err(Error::validation("Summary and recipients are required"));
    }

    let valid_recipients: Vec<String> = recipients
        .into_iter()
        .filter(|recipient| {
            let valid = is_valid_email(recipient);
            if !valid {
                debug!("Dropping invalid recipient address: {recipient}");
            }
            valid
        })
        .collect();

    if valid_recipients.is_empty() {
        return Err(Error::validation("No valid email addresses provided"));
    }

    let now = Local::now();
    let subject = build_subject(&now);
    let body = build_email_body(summary, &now);
    debug!("Prepared share email body ({} chars)", body.len());

    info!(
        "Simulating delivery to {} recipient(s)",
        valid_recipients.len()
    );
    tokio::time::sleep(Duration::from_millis(config.share_delay_ms)).await;

    Ok(SharedSummary {
        success: true,
        message: format!(
            "Summary successfully sent to {} recipient(s)",
            valid_recipients.len()
        ),
        recipients: valid_recipients,
        subject,
    })
}

fn build_subject(sent_at: &DateTime<Local>) -> String {
    format!("Meeting Summary - {}", sent_at.format("%-m/%-d/%Y"))
}

fn build_email_body(summary: &str, sent_at: &DateTime<Local>) -> String {
    format!(
        "Dear Recipient,\n\n\
         Please find the meeting summary below:\n\n\
         {summary}\n\n\
         ---\n\
         This summary was generated using AI Meeting Notes Summarizer.\n\
         Generated on: {}\n\n\
         Best regards,\n\
         Meeting Notes Team",
        sent_at.format("%-m/%-d/%Y, %-I:%M:%S %p")
    )
}
