use crate::config::MAX_AGE_MONTHS;
use crate::types::{AnimalRecord, Report};

/// Render the full report for a set of records, in input order.
///
/// Pure and deterministic: the same records always produce byte-identical
/// HTML. An empty set renders the fixed empty-state body instead of a
/// zero-section document.
pub fn render_report(records: &[AnimalRecord]) -> Report {
    if records.is_empty() {
        return Report {
            html: format!("<p>No puppies under {MAX_AGE_MONTHS} months found today.</p>"),
            puppy_count: 0,
        };
    }

    let sections: String = records.iter().map(render_animal_section).collect();

    let html = format!(
        "<html>\n<head>\n<style>\n\
         body {{ font-family: Arial, sans-serif; }}\n\
         h1 {{ color: #333366; }}\n\
         h2 {{ color: #4CAF50; }}\n\
         table {{ margin-bottom: 15px; }}\n\
         td {{ padding: 5px; }}\n\
         </style>\n</head>\n<body>\n\
         <h1>Adoptable Puppies (&lt; {MAX_AGE_MONTHS} Months) - {count} Found</h1>\n\
         {sections}</body>\n</html>\n",
        count = records.len(),
    );

    Report {
        html,
        puppy_count: records.len(),
    }
}

fn render_animal_section(record: &AnimalRecord) -> String {
    let mut section = format!(
        "<div style='margin-bottom:30px; border-bottom:1px solid #ccc; padding-bottom:20px;'>\n\
         <h2>{name}</h2>\n\
         <table style='width:100%; border-collapse: collapse;'>\n\
         <tr><td style='font-weight:bold;width:150px;'>ID:</td><td>{id}</td></tr>\n\
         <tr><td style='font-weight:bold;'>Breed:</td><td>{breed}</td></tr>\n\
         <tr><td style='font-weight:bold;'>Age:</td><td>{age}</td></tr>\n\
         <tr><td style='font-weight:bold;'>Gender:</td><td>{gender}</td></tr>\n\
         <tr><td style='font-weight:bold;'>Size:</td><td>{size}</td></tr>\n\
         <tr><td style='font-weight:bold;'>Color:</td><td>{color}</td></tr>\n\
         </table>\n\
         <div style='margin-top:15px;'>\n",
        name = record.name,
        id = record.id,
        breed = record.breed,
        age = record.age,
        gender = record.gender,
        size = record.size,
        color = record.color,
    );

    for image_url in &record.image_urls {
        section.push_str(&format!(
            "<img src='{image_url}' style='max-width:100%; margin:5px 0;' /><br>\n"
        ));
    }

    section.push_str(&format!(
        "</div>\n<div style='margin-top:10px;'>\n\
         <a href='{url}' style='background-color:#4CAF50; color:white; padding:10px 15px; \
         text-decoration:none; display:inline-block; border-radius:4px;'>View Details</a>\n\
         </div>\n</div>\n",
        url = record.detail_url,
    ));

    section
}
