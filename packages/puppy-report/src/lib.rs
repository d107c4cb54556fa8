//! Daily adoptable-puppies report pipeline.
//!
//! Fetches the shelter's adoptable-animals listing, filters for puppies under
//! six months old, pulls each puppy's detail page, and emails an HTML report
//! through SES. Markup goes in one end, a rendered report comes out the
//! other; every stage degrades per animal rather than aborting the run.

pub mod age;
pub mod config;
pub mod detail;
pub mod fetcher;
pub mod handler;
pub mod links;
pub mod listing;
pub mod mailer;
pub mod pipeline;
pub mod report;
pub mod types;

pub use config::Config;
pub use handler::{handle, HandlerResponse};
pub use types::{AnimalRecord, ListingSummary, Report};
