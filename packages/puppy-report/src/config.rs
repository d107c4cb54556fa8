use anyhow::{bail, Context, Result};
use dotenvy::dotenv;
use std::env;

/// Base URL of the Petango adoptable-search web service.
pub const BASE_URL: &str = "https://ws.petango.com/webservices/adoptablesearch/";

/// Host that parent-relative image paths resolve against.
pub const IMAGE_HOST: &str = "https://ws.petango.com/";

/// Fully parameterized listing search: all dogs, all age groups, all sites,
/// on-hold animals included, ordered by ID.
pub const SHELTER_URL: &str = "https://ws.petango.com/webservices/adoptablesearch/wsAdoptableAnimals2.aspx?species=Dog&sex=A&agegroup=All&location=&site=&onhold=A&orderby=ID&colnum=4&authkey=htr0d8cmdxn6kjq4i3brxlvgmx8e610khmut6wkjxayue3rdff&recAmount=&detailsInPopup=Yes&featuredPet=Include&stageID=";

pub const EMAIL_SUBJECT: &str = "Daily Adoptable Puppies Report";

/// Maximum age in months to still count as a puppy (strictly less-than).
pub const MAX_AGE_MONTHS: u32 = 6;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub region: String,
    pub email_from: String,
    pub email_to: Vec<String>,
    pub aws_access_key_id: Option<String>,
    pub aws_secret_access_key: Option<String>,
    pub aws_session_token: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Sender and recipients are the only hard requirements; AWS credentials
    /// are read leniently and enforced when the mailer is built.
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        let email_from = env::var("EMAIL_FROM").context("EMAIL_FROM must be set")?;
        let email_to =
            parse_recipients(&env::var("EMAIL_TO").context("EMAIL_TO must be set")?);
        if email_to.is_empty() {
            bail!("EMAIL_TO must contain at least one address");
        }

        Ok(Self {
            region: env::var("AWS_REGION").unwrap_or_else(|_| "us-east-1".to_string()),
            email_from,
            email_to,
            aws_access_key_id: env::var("AWS_ACCESS_KEY_ID").ok(),
            aws_secret_access_key: env::var("AWS_SECRET_ACCESS_KEY").ok(),
            aws_session_token: env::var("AWS_SESSION_TOKEN").ok(),
        })
    }
}

/// Split a comma-delimited recipient string into individual addresses.
pub fn parse_recipients(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|addr| addr.trim().to_string())
        .filter(|addr| !addr.is_empty())
        .collect()
}
