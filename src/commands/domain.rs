use anyhow::Result;
use serde::Serialize;

use crate::normalize::extract_domain;

#[derive(Debug, Serialize)]
pub struct DomainResult {
    pub link: String,
    pub domain: String,
}

pub fn run(link: String) -> Result<DomainResult> {
    let domain = extract_domain(&link)?;
    Ok(DomainResult { link, domain })
}
