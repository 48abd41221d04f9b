//! Output formatting for rendered selections and listings

use crate::binder::mapping::DisplayMapping;
use crate::binder::session::Rendered;

#[cfg(feature = "colored-output")]
use colored::Colorize;

/// Format a rendered selection as the result line
pub fn format_text(rendered: &Rendered, use_color: bool) -> String {
    let text = rendered.text();
    if use_color {
        #[cfg(feature = "colored-output")]
        {
            let text = if rendered.is_found() {
                text.green()
            } else {
                text.yellow()
            };
            return format!("Translation: {}", text);
        }
    }
    format!("Translation: {}", text)
}

/// Format a rendered selection as JSON
pub fn format_json(rendered: &Rendered) -> Result<String, serde_json::Error> {
    use serde_json::json;

    serde_json::to_string_pretty(&json!({
        "language": {
            "label": rendered.language,
            "code": rendered.language_code,
        },
        "country": {
            "label": rendered.country,
            "code": rendered.country_code,
        },
        "translation": rendered.translation,
        "text": rendered.text(),
    }))
}

/// Format a display mapping as one `label (code)` per line
pub fn format_listing(mapping: &DisplayMapping) -> String {
    let mut result = String::new();
    for (label, code) in mapping.iter() {
        result.push_str(&format!("{} ({})\n", label, code));
    }
    result
}

/// Format a display mapping as a JSON array of `{label, code}` objects
pub fn format_listing_json(mapping: &DisplayMapping) -> Result<String, serde_json::Error> {
    use serde_json::json;

    let items: Vec<_> = mapping
        .iter()
        .map(|(label, code)| json!({ "label": label, "code": code }))
        .collect();

    serde_json::to_string_pretty(&items)
}
