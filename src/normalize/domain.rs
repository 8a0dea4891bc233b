use crate::error::{ParseError, parse_link};

/// Returns the last two labels of the link's hostname.
///
/// This is a naive registrable-domain heuristic: no public suffix list is
/// consulted, so `sub.example.co.uk` yields `co.uk`.
pub fn extract_domain(link: &str) -> Result<String, ParseError> {
    let url = parse_link(link)?;
    let host = url.host_str().unwrap_or_default();
    Ok(last_two_labels(host))
}

fn last_two_labels(host: &str) -> String {
    let labels: Vec<&str> = host.split('.').collect();
    let start = labels.len().saturating_sub(2);
    labels[start..].join(".")
}
