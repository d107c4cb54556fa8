use serde::{Deserialize, Serialize};

/// SES v2 SendEmail request body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SendEmailRequest {
    pub from_email_address: String,
    pub destination: Destination,
    pub content: EmailContent,
}

impl SendEmailRequest {
    /// Build a simple HTML email to one or more recipients.
    pub fn html(from: &str, to: Vec<String>, subject: &str, html_body: &str) -> Self {
        Self {
            from_email_address: from.to_string(),
            destination: Destination { to_addresses: to },
            content: EmailContent {
                simple: Message {
                    subject: Content::utf8(subject),
                    body: Body {
                        html: Some(Content::utf8(html_body)),
                        text: None,
                    },
                },
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Destination {
    pub to_addresses: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct EmailContent {
    pub simple: Message,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Message {
    pub subject: Content,
    pub body: Body,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Body {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<Content>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Content {
    pub data: String,
    pub charset: String,
}

impl Content {
    fn utf8(data: &str) -> Self {
        Self {
            data: data.to_string(),
            charset: "UTF-8".to_string(),
        }
    }
}

/// SES v2 SendEmail response body.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SendEmailResponse {
    pub message_id: Option<String>,
}
