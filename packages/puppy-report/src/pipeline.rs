use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::age::age_to_months;
use crate::config::{EMAIL_SUBJECT, MAX_AGE_MONTHS, SHELTER_URL};
use crate::detail::extract_detail;
use crate::fetcher::PageFetcher;
use crate::listing::extract_listing;
use crate::mailer::ReportMailer;
use crate::report::render_report;
use crate::types::AnimalRecord;

/// Result of one full run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOutcome {
    pub puppy_count: usize,
}

/// Fetch the listing and resolve every puppy candidate to a full record.
///
/// The listing fetch is fatal on failure. Candidates are processed
/// sequentially in listing order and degrade independently: a failed detail
/// fetch or an unrecognized page drops that candidate only.
pub async fn fetch_and_filter_puppies(fetcher: &impl PageFetcher) -> Result<Vec<AnimalRecord>> {
    info!(url = SHELTER_URL, "Fetching adoptable animals listing");
    let listing_html = fetcher
        .fetch(SHELTER_URL)
        .await
        .context("Failed to fetch listing page")?;
    info!(bytes = listing_html.len(), "Listing fetched");

    let summaries = extract_listing(&listing_html);
    info!(entries = summaries.len(), "Parsed listing entries");

    let mut puppies = Vec::new();
    for summary in summaries {
        let months = age_to_months(&summary.age_text);
        debug!(name = %summary.name, age = %summary.age_text, months, "Processing animal");
        if months >= MAX_AGE_MONTHS {
            continue;
        }

        info!(name = %summary.name, url = %summary.detail_url, "Fetching details");
        let detail_html = match fetcher.fetch(&summary.detail_url).await {
            Ok(html) => html,
            Err(e) => {
                warn!(name = %summary.name, error = %e, "Failed to fetch detail page, skipping");
                continue;
            }
        };

        match extract_detail(&detail_html, &summary.name, &summary.detail_url) {
            Some(record) => puppies.push(record),
            None => warn!(name = %summary.name, "Detail page shape unrecognized, skipping"),
        }
    }

    info!(
        puppies = puppies.len(),
        max_age_months = MAX_AGE_MONTHS,
        "Filtered to puppies"
    );
    Ok(puppies)
}

/// Run the whole pipeline: listing, filter, details, report, delivery.
///
/// The report is rendered and sent even when no puppy qualified; delivery
/// failure is fatal.
pub async fn run(fetcher: &impl PageFetcher, mailer: &impl ReportMailer) -> Result<RunOutcome> {
    let puppies = fetch_and_filter_puppies(fetcher).await?;
    let report = render_report(&puppies);

    mailer
        .send(EMAIL_SUBJECT, &report.html)
        .await
        .context("Failed to deliver report")?;

    Ok(RunOutcome {
        puppy_count: report.puppy_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BASE_URL;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    struct MockFetcher {
        pages: HashMap<String, String>,
    }

    impl MockFetcher {
        fn new(pages: Vec<(String, String)>) -> Self {
            Self {
                pages: pages.into_iter().collect(),
            }
        }
    }

    #[async_trait]
    impl PageFetcher for MockFetcher {
        async fn fetch(&self, url: &str) -> Result<String> {
            self.pages
                .get(url)
                .cloned()
                .ok_or_else(|| anyhow::anyhow!("HTTP 404 Not Found for {url}"))
        }
    }

    #[derive(Default)]
    struct MockMailer {
        sent: Mutex<Vec<(String, String)>>,
    }

    #[async_trait]
    impl ReportMailer for MockMailer {
        async fn send(&self, subject: &str, html_body: &str) -> Result<()> {
            self.sent
                .lock()
                .unwrap()
                .push((subject.to_string(), html_body.to_string()));
            Ok(())
        }
    }

    struct FailingMailer;

    #[async_trait]
    impl ReportMailer for FailingMailer {
        async fn send(&self, _subject: &str, _html_body: &str) -> Result<()> {
            anyhow::bail!("SES API error (454): throttled")
        }
    }

    fn listing_entry(name: &str, age: &str, id: u32) -> String {
        format!(
            r#"<li>
                <a href="javascript:poptastic('Detail.aspx?id={id}');">
                    <div class="list-animal-name">{name}</div>
                    <div class="list-animal-age">{age}</div>
                </a>
            </li>"#
        )
    }

    fn listing_page(entries: &[String]) -> String {
        format!("<html><body><ul>{}</ul></body></html>", entries.join("\n"))
    }

    fn detail_page(name: &str, breed: &str) -> String {
        format!(
            r#"<html><body><div id="DefaultLayoutDiv">
                <span id="lbName">{name}</span>
                <span id="lbBreed">{breed}</span>
                <img id="imgAnimalPhoto" src="../Photos/{name}.jpg">
            </div></body></html>"#
        )
    }

    fn detail_url(id: u32) -> String {
        format!("{BASE_URL}Detail.aspx?id={id}")
    }

    #[tokio::test]
    async fn test_end_to_end_single_puppy_report() {
        let fetcher = MockFetcher::new(vec![
            (
                SHELTER_URL.to_string(),
                listing_page(&[
                    listing_entry("Rex", "3 months", 1),
                    listing_entry("Bella", "2 years", 2),
                ]),
            ),
            (detail_url(1), detail_page("Rex", "Lab Mix")),
        ]);
        let mailer = MockMailer::default();

        let outcome = run(&fetcher, &mailer).await.expect("run succeeds");
        assert_eq!(outcome.puppy_count, 1);

        let sent = mailer.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        let (subject, body) = &sent[0];
        assert_eq!(subject, EMAIL_SUBJECT);
        assert!(body.contains("1 Found"));
        assert!(body.contains("<h2>Rex</h2>"));
        assert!(body.contains("Lab Mix"));
        assert!(!body.contains("Bella"));
    }

    #[tokio::test]
    async fn test_entry_missing_age_is_skipped_run_still_delivers() {
        let broken_entry = r#"<li>
            <a href="javascript:poptastic('Detail.aspx?id=9');">
                <div class="list-animal-name">Mystery</div>
            </a>
        </li>"#
            .to_string();
        let fetcher = MockFetcher::new(vec![
            (
                SHELTER_URL.to_string(),
                listing_page(&[broken_entry, listing_entry("Rex", "3 months", 1)]),
            ),
            (detail_url(1), detail_page("Rex", "Lab Mix")),
        ]);
        let mailer = MockMailer::default();

        let outcome = run(&fetcher, &mailer).await.expect("run succeeds");
        assert_eq!(outcome.puppy_count, 1);

        let sent = mailer.sent.lock().unwrap();
        assert!(sent[0].1.contains("Rex"));
        assert!(!sent[0].1.contains("Mystery"));
    }

    #[tokio::test]
    async fn test_zero_candidates_sends_empty_report() {
        let fetcher = MockFetcher::new(vec![(
            SHELTER_URL.to_string(),
            listing_page(&[listing_entry("Bella", "2 years", 2)]),
        )]);
        let mailer = MockMailer::default();

        let outcome = run(&fetcher, &mailer).await.expect("run succeeds");
        assert_eq!(outcome.puppy_count, 0);

        let sent = mailer.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert!(sent[0].1.contains("No puppies under 6 months found today."));
    }

    #[tokio::test]
    async fn test_age_threshold_is_strict() {
        let fetcher = MockFetcher::new(vec![
            (
                SHELTER_URL.to_string(),
                listing_page(&[
                    listing_entry("AtThreshold", "6 months", 1),
                    listing_entry("UnderThreshold", "5 months", 2),
                ]),
            ),
            (detail_url(1), detail_page("AtThreshold", "Beagle")),
            (detail_url(2), detail_page("UnderThreshold", "Beagle")),
        ]);

        let puppies = fetch_and_filter_puppies(&fetcher).await.expect("fetch succeeds");
        assert_eq!(puppies.len(), 1);
        assert_eq!(puppies[0].name, "UnderThreshold");
    }

    #[tokio::test]
    async fn test_unknown_age_counts_as_candidate() {
        // Policy: text with no age token reads as 0 months.
        let fetcher = MockFetcher::new(vec![
            (
                SHELTER_URL.to_string(),
                listing_page(&[listing_entry("NoAge", "Adult", 1)]),
            ),
            (detail_url(1), detail_page("NoAge", "Husky")),
        ]);

        let puppies = fetch_and_filter_puppies(&fetcher).await.expect("fetch succeeds");
        assert_eq!(puppies.len(), 1);
    }

    #[tokio::test]
    async fn test_detail_fetch_failure_drops_single_candidate() {
        let fetcher = MockFetcher::new(vec![
            (
                SHELTER_URL.to_string(),
                listing_page(&[
                    listing_entry("Gone", "2 months", 1),
                    listing_entry("Rex", "3 months", 2),
                ]),
            ),
            // No page for id=1: that fetch fails.
            (detail_url(2), detail_page("Rex", "Lab Mix")),
        ]);

        let puppies = fetch_and_filter_puppies(&fetcher).await.expect("fetch succeeds");
        assert_eq!(puppies.len(), 1);
        assert_eq!(puppies[0].name, "Rex");
    }

    #[tokio::test]
    async fn test_unrecognized_detail_shape_drops_candidate() {
        let fetcher = MockFetcher::new(vec![
            (
                SHELTER_URL.to_string(),
                listing_page(&[listing_entry("Odd", "2 months", 1)]),
            ),
            (
                detail_url(1),
                "<html><body><div id='Unexpected'></div></body></html>".to_string(),
            ),
        ]);

        let puppies = fetch_and_filter_puppies(&fetcher).await.expect("fetch succeeds");
        assert!(puppies.is_empty());
    }

    #[tokio::test]
    async fn test_listing_fetch_failure_is_fatal_and_nothing_sent() {
        let fetcher = MockFetcher::new(vec![]);
        let mailer = MockMailer::default();

        let result = run(&fetcher, &mailer).await;
        assert!(result.is_err());
        assert!(mailer.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delivery_failure_is_fatal() {
        let fetcher = MockFetcher::new(vec![(
            SHELTER_URL.to_string(),
            listing_page(&[listing_entry("Bella", "2 years", 2)]),
        )]);

        let result = run(&fetcher, &FailingMailer).await;
        let err = result.expect_err("delivery failure surfaces");
        assert!(format!("{err:#}").contains("Failed to deliver report"));
    }
}
