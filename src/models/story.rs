use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A submitted link as handed over by the feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Story {
    /// Hex digest without the `0x` prefix.
    pub index: String,
    pub title: String,
    pub href: String,
    /// Unix seconds.
    pub timestamp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identity: Option<String>,
    #[serde(default)]
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collateral: Option<Value>,
    /// Ad price in wei as a decimal string. Wei amounts overflow JSON
    /// numbers, so numeric prices are ignored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_comment: Option<LastComment>,
}

impl Story {
    /// Sponsored when `collateral` holds anything but a falsy JSON value.
    pub fn is_ad(&self) -> bool {
        match &self.collateral {
            None | Some(Value::Null) => false,
            Some(Value::Bool(b)) => *b,
            Some(Value::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0),
            Some(Value::String(s)) => !s.is_empty(),
            Some(Value::Array(_) | Value::Object(_)) => true,
        }
    }

    pub fn image(&self) -> Option<&str> {
        self.metadata.as_ref()?.image.as_deref()
    }

    pub fn price_wei(&self) -> Option<u128> {
        match self.price.as_ref()? {
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LastComment {
    pub title: String,
    pub identity: CommentIdentity,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentIdentity {
    #[serde(default)]
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub safe_avatar: Option<String>,
}
