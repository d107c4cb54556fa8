/// One listing-page entry that survived extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingSummary {
    pub name: String,
    /// Raw displayed age, e.g. "2 years 3 months". May be empty.
    pub age_text: String,
    /// Absolute detail-page URL resolved from the entry's script link.
    pub detail_url: String,
}

/// Fully resolved detail record for one animal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimalRecord {
    pub name: String,
    pub id: String,
    pub breed: String,
    pub age: String,
    pub gender: String,
    pub size: String,
    pub color: String,
    pub detail_url: String,
    /// Discovery order, main photo first, duplicates suppressed.
    /// Every URL is absolute by the time the record is built.
    pub image_urls: Vec<String>,
    /// The detail page's content root with image sources rewritten absolute.
    pub detail_html: String,
}

/// Rendered report ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub html: String,
    pub puppy_count: usize,
}
