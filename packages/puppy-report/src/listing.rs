use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};

use crate::links::resolve_detail_url;
use crate::types::ListingSummary;

/// Parse the listing page into one summary per animal, in document order.
///
/// Items missing their age or name markers, or without a resolvable detail
/// link, are dropped individually; a partially broken page still yields the
/// entries it can.
pub fn extract_listing(html: &str) -> Vec<ListingSummary> {
    let document = Html::parse_document(html);

    let (Ok(item_sel), Ok(age_sel), Ok(name_sel), Ok(link_sel)) = (
        Selector::parse("li"),
        Selector::parse(".list-animal-age"),
        Selector::parse(".list-animal-name"),
        Selector::parse("a"),
    ) else {
        return vec![];
    };

    let mut summaries = Vec::new();
    for item in document.select(&item_sel) {
        let Some(age_text) = element_text(&item, &age_sel) else {
            debug!("Listing item without an age marker, skipping");
            continue;
        };
        let Some(name) = element_text(&item, &name_sel).filter(|name| !name.is_empty()) else {
            debug!("Listing item without a usable name, skipping");
            continue;
        };

        let href = item
            .select(&link_sel)
            .next()
            .and_then(|link| link.value().attr("href"));
        let Some(href) = href else {
            warn!(name = %name, "No link found for animal");
            continue;
        };
        let Some(detail_url) = resolve_detail_url(href) else {
            warn!(name = %name, "Could not parse detail URL from script link");
            continue;
        };

        summaries.push(ListingSummary {
            name,
            age_text,
            detail_url,
        });
    }
    summaries
}

fn element_text(item: &ElementRef, selector: &Selector) -> Option<String> {
    item.select(selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
}
