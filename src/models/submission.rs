// ABOUTME: Submitted form snapshot with its generated id and shareable link

use super::form::FormData;
use anyhow::{Context, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};
use url::Url;

/// Exclusive upper bound of generated form ids
pub const FORM_ID_LIMIT: u64 = 10_000_000_000;

/// Placeholder host used in shareable links
pub const DEFAULT_SHARE_DOMAIN: &str = "yourdomain.com";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedRecord {
    #[serde(flatten)]
    pub data: FormData,
    pub form_id: u64,
    pub shareable_url: String,
}

impl SubmittedRecord {
    pub fn new(data: FormData, form_id: u64, share_domain: &str) -> Self {
        Self {
            data,
            form_id,
            shareable_url: shareable_url(share_domain, form_id),
        }
    }
}

/// Pick a pseudo-random id in `[0, FORM_ID_LIMIT)`
pub fn generate_form_id() -> u64 {
    rand::thread_rng().gen_range(0..FORM_ID_LIMIT)
}

/// `http://<domain>/form/<id>`
pub fn shareable_url(domain: &str, form_id: u64) -> String {
    format!("http://{domain}/form/{form_id}")
}

/// Check that a configured domain yields a well-formed link
pub fn validate_share_domain(domain: &str) -> Result<()> {
    let url = Url::parse(&shareable_url(domain, 0))
        .with_context(|| format!("Invalid share domain '{domain}'"))?;
    if url.host_str().is_none() || url.path() != "/form/0" {
        anyhow::bail!("Share domain '{domain}' must be a bare host name");
    }
    Ok(())
}
