use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumString};
use tracing::debug;
use url::Url;

use crate::error::{ParseError, parse_link};

/// The query parameter a publishing platform reads its referrer from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr, EnumString)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum ReferrerParam {
    ReferrerAddress,
    Referrer,
    Ref,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferrerRule {
    /// Matched against the end of the hostname.
    pub suffix: String,
    pub param: ReferrerParam,
}

impl ReferrerRule {
    pub fn new(suffix: impl Into<String>, param: ReferrerParam) -> Self {
        Self {
            suffix: suffix.into(),
            param,
        }
    }
}

const PLATFORMS: &[(&str, ReferrerParam)] = &[
    ("mirror.xyz", ReferrerParam::ReferrerAddress),
    ("paragraph.xyz", ReferrerParam::Referrer),
    ("zora.co", ReferrerParam::Referrer),
    ("manifold.xyz", ReferrerParam::Referrer),
    ("foundation.app", ReferrerParam::Ref),
];

/// Ordered host-suffix rules. The first matching rule wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferrerTable {
    rules: Vec<ReferrerRule>,
}

impl Default for ReferrerTable {
    fn default() -> Self {
        Self {
            rules: PLATFORMS
                .iter()
                .map(|&(suffix, param)| ReferrerRule::new(suffix, param))
                .collect(),
        }
    }
}

impl ReferrerTable {
    /// The built-in platforms followed by `extra`, which can never shadow them.
    pub fn with_extra(extra: impl IntoIterator<Item = ReferrerRule>) -> Self {
        let mut table = Self::default();
        table.rules.extend(extra);
        table
    }

    pub fn rules(&self) -> &[ReferrerRule] {
        &self.rules
    }

    pub fn param_for_host(&self, host: &str) -> Option<ReferrerParam> {
        self.rules
            .iter()
            .find(|rule| host.ends_with(rule.suffix.as_str()))
            .map(|rule| rule.param)
    }
}

/// Tags `link` with `identity` using the built-in platform table.
pub fn add_or_update_referrer(link: &str, identity: Option<&str>) -> Result<String, ParseError> {
    add_or_update_referrer_with(&ReferrerTable::default(), link, identity)
}

/// Tags `link` with `identity` for platforms known to `table`.
///
/// Without an identity the link comes back untouched and is not parsed.
/// Otherwise the link is reserialized, so query strings of unmatched hosts
/// may still be re-encoded.
pub fn add_or_update_referrer_with(
    table: &ReferrerTable,
    link: &str,
    identity: Option<&str>,
) -> Result<String, ParseError> {
    let Some(identity) = identity.filter(|id| !id.is_empty()) else {
        return Ok(link.to_owned());
    };

    let mut url = parse_link(link)?;
    let param = url
        .host_str()
        .and_then(|host| table.param_for_host(host));

    if let Some(param) = param {
        debug!(link, param = param.as_ref(), "tagging outbound link");
        set_query_param(&mut url, param.as_ref(), identity);
    }

    Ok(url.to_string())
}

/// Replaces the first `name` pair in place and drops later duplicates,
/// appending when the name is absent.
fn set_query_param(url: &mut Url, name: &str, value: &str) {
    let mut pairs: Vec<(String, String)> = Vec::new();
    let mut replaced = false;

    for (key, existing) in url.query_pairs() {
        if key == name {
            if !replaced {
                pairs.push((key.into_owned(), value.to_owned()));
                replaced = true;
            }
            continue;
        }
        pairs.push((key.into_owned(), existing.into_owned()));
    }

    if !replaced {
        pairs.push((name.to_owned(), value.to_owned()));
    }

    url.query_pairs_mut().clear().extend_pairs(pairs);
}
