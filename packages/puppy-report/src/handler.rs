use anyhow::Result;
use serde_json::Value;
use tracing::{error, info};

use crate::config::Config;
use crate::fetcher::HttpFetcher;
use crate::mailer::SesMailer;
use crate::pipeline::{self, RunOutcome};

/// Outcome of one invocation: an HTTP-style status plus a short message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerResponse {
    pub status_code: u16,
    pub body: String,
}

impl HandlerResponse {
    fn new(status_code: u16, body: impl Into<String>) -> Self {
        Self {
            status_code,
            body: body.into(),
        }
    }
}

/// Entry point: run one report cycle and map every outcome to a status.
///
/// 400 marks missing delivery configuration, 500 any other failure. A run
/// that finds no puppies is a success; no error escapes unformatted.
pub async fn handle(event: Value) -> HandlerResponse {
    info!("Notifier started");
    info!(event = %event, "Invocation event");

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            let message = format!("{e:#}");
            error!(error = %message, "Configuration error");
            return HandlerResponse::new(400, message);
        }
    };

    let fetcher = match HttpFetcher::new() {
        Ok(fetcher) => fetcher,
        Err(e) => {
            let message = format!("{e:#}");
            error!(error = %message, "Failed to build HTTP client");
            return HandlerResponse::new(500, message);
        }
    };

    let mailer = match SesMailer::new(&config) {
        Ok(mailer) => mailer,
        Err(e) => {
            let message = format!("{e:#}");
            error!(error = %message, "Failed to build SES mailer");
            return HandlerResponse::new(500, message);
        }
    };

    pipeline_response(pipeline::run(&fetcher, &mailer).await)
}

fn pipeline_response(result: Result<RunOutcome>) -> HandlerResponse {
    match result {
        Ok(outcome) if outcome.puppy_count == 0 => {
            info!("No puppies found, sent empty report");
            HandlerResponse::new(200, "No puppies found")
        }
        Ok(outcome) => {
            info!(puppies = outcome.puppy_count, "Notifier completed successfully");
            HandlerResponse::new(200, "Email sent successfully!")
        }
        Err(e) => {
            let message = format!("{e:#}");
            error!(error = %message, "Run failed");
            HandlerResponse::new(500, message)
        }
    }
}
