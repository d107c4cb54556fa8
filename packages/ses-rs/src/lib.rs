//! Minimal Amazon SES v2 REST client.
//!
//! Supports the single operation this workspace needs: sending one HTML
//! email via `SendEmail`. Requests are signed with AWS Signature V4.
//!
//! # Example
//!
//! ```rust,ignore
//! use ses_rs::{SendEmailRequest, SesClient, SesOptions};
//!
//! let client = SesClient::new(SesOptions {
//!     region: "us-east-1".into(),
//!     access_key_id: key_id,
//!     secret_access_key: secret,
//!     session_token: None,
//! });
//!
//! let request = SendEmailRequest::html("from@example.com", recipients, "Hello", "<p>Hi</p>");
//! let response = client.send_email(&request).await?;
//! println!("{:?}", response.message_id);
//! ```

pub mod error;
pub mod types;

mod sign;

pub use error::{Result, SesError};
pub use types::{SendEmailRequest, SendEmailResponse};

use sign::{sign_post, SigningParams};

const SEND_EMAIL_PATH: &str = "/v2/email/outbound-emails";

/// Service name used in the SigV4 credential scope.
const SERVICE: &str = "ses";

#[derive(Debug, Clone)]
pub struct SesOptions {
    pub region: String,
    pub access_key_id: String,
    pub secret_access_key: String,
    pub session_token: Option<String>,
}

pub struct SesClient {
    client: reqwest::Client,
    options: SesOptions,
}

impl SesClient {
    pub fn new(options: SesOptions) -> Self {
        Self {
            client: reqwest::Client::new(),
            options,
        }
    }

    /// Send one email. Returns the SES message id on success.
    pub async fn send_email(&self, request: &SendEmailRequest) -> Result<SendEmailResponse> {
        let host = format!("email.{}.amazonaws.com", self.options.region);
        let url = format!("https://{host}{SEND_EMAIL_PATH}");
        let body = serde_json::to_vec(request)
            .map_err(|e| SesError::InvalidRequest(e.to_string()))?;

        let params = SigningParams {
            access_key_id: &self.options.access_key_id,
            secret_access_key: &self.options.secret_access_key,
            session_token: self.options.session_token.as_deref(),
            region: &self.options.region,
            service: SERVICE,
        };
        let signed = sign_post(&params, &host, SEND_EMAIL_PATH, &body, chrono::Utc::now());

        tracing::debug!(host = %host, recipients = request.destination.to_addresses.len(), "Sending email through SES");

        let mut req = self
            .client
            .post(&url)
            .header("content-type", "application/json")
            .header("x-amz-date", &signed.amz_date)
            .header("authorization", &signed.authorization);
        if let Some(token) = &signed.security_token {
            req = req.header("x-amz-security-token", token);
        }

        let resp = req.body(body).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            tracing::error!(status = %status, message = %message, "SES rejected the send");
            return Err(SesError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let data: SendEmailResponse = resp.json().await?;
        Ok(data)
    }
}
