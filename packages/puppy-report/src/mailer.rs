use anyhow::{Context, Result};
use async_trait::async_trait;
use ses_rs::{SendEmailRequest, SesClient, SesOptions};
use tracing::info;

use crate::config::Config;

/// Trait for report delivery (to allow mocking)
#[async_trait]
pub trait ReportMailer: Send + Sync {
    async fn send(&self, subject: &str, html_body: &str) -> Result<()>;
}

/// Sends reports through Amazon SES.
pub struct SesMailer {
    client: SesClient,
    from: String,
    recipients: Vec<String>,
}

impl SesMailer {
    pub fn new(config: &Config) -> Result<Self> {
        let access_key_id = config
            .aws_access_key_id
            .clone()
            .context("AWS_ACCESS_KEY_ID must be set to send mail")?;
        let secret_access_key = config
            .aws_secret_access_key
            .clone()
            .context("AWS_SECRET_ACCESS_KEY must be set to send mail")?;

        let client = SesClient::new(SesOptions {
            region: config.region.clone(),
            access_key_id,
            secret_access_key,
            session_token: config.aws_session_token.clone(),
        });

        Ok(Self {
            client,
            from: config.email_from.clone(),
            recipients: config.email_to.clone(),
        })
    }
}

#[async_trait]
impl ReportMailer for SesMailer {
    async fn send(&self, subject: &str, html_body: &str) -> Result<()> {
        info!(
            from = %self.from,
            recipients = self.recipients.len(),
            "Sending report through SES"
        );

        let request =
            SendEmailRequest::html(&self.from, self.recipients.clone(), subject, html_body);
        let response = self
            .client
            .send_email(&request)
            .await
            .context("Failed to send email through SES")?;

        info!(
            message_id = response.message_id.as_deref().unwrap_or(""),
            "Email sent successfully"
        );
        Ok(())
    }
}
