use anyhow::Result;
use serde::Serialize;

use crate::config::Config;
use crate::normalize::add_or_update_referrer_with;

#[derive(Debug, Serialize)]
pub struct ReferrerResult {
    pub link: String,
    pub tagged: String,
    pub changed: bool,
}

pub fn run(link: String, identity: Option<String>, config: &Config) -> Result<ReferrerResult> {
    let tagged = add_or_update_referrer_with(&config.referrer_table(), &link, identity.as_deref())?;
    let changed = tagged != link;
    Ok(ReferrerResult {
        link,
        tagged,
        changed,
    })
}
