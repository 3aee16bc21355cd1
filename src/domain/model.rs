use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Normalized Notion page identifier: 32 hex digits, hyphens stripped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageId(String);

impl PageId {
    /// Extracts a page ID from a share URL.
    ///
    /// Matches either a 32-character hex run or a 36-character hyphenated
    /// run, followed by `?` or the end of the string. Returns `None` when
    /// the URL carries no such run.
    pub fn from_url(url: &str) -> Option<Self> {
        let re = Regex::new(r"([a-f0-9]{32}|[a-f0-9-]{36})(?:\?|$)").unwrap();
        let captures = re.captures(url)?;
        let raw = captures.get(1)?.as_str();

        Some(Self(raw.replace('-', "")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Request body for the getPublicPageData endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageDataRequest {
    #[serde(rename = "pageId")]
    pub page_id: String,

    #[serde(rename = "type")]
    pub request_type: String,
}

impl PageDataRequest {
    /// 固定的請求體:頁面內容容器在API中稱為block-space
    pub fn block_space(page_id: &PageId) -> Self {
        Self {
            page_id: page_id.as_str().to_string(),
            request_type: "block-space".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_from_share_url() {
        let id = PageId::from_url(
            "https://warm-hip-fe9.notion.site/LM-PC-2e0753ebc013807e8c78e7f403e83a90",
        )
        .unwrap();
        assert_eq!(id.as_str(), "2e0753ebc013807e8c78e7f403e83a90");
    }

    #[test]
    fn test_extract_strips_hyphens_from_uuid_form() {
        let id = PageId::from_url(
            "https://www.notion.so/2e0753eb-c013-807e-8c78-e7f403e83a90",
        )
        .unwrap();
        assert_eq!(id.as_str(), "2e0753ebc013807e8c78e7f403e83a90");
    }

    #[test]
    fn test_extract_allows_trailing_query() {
        let id = PageId::from_url(
            "https://www.notion.so/Page-2e0753ebc013807e8c78e7f403e83a90?pvs=4",
        )
        .unwrap();
        assert_eq!(id.as_str(), "2e0753ebc013807e8c78e7f403e83a90");
    }

    #[test]
    fn test_extract_missing_id() {
        assert!(PageId::from_url("https://www.notion.so/My-Page").is_none());
    }

    #[test]
    fn test_extract_rejects_short_hex_run() {
        // 31個十六進制字符不足以構成頁面ID
        assert!(PageId::from_url("https://www.notion.so/2e0753ebc013807e8c78e7f403e83a9").is_none());
    }

    #[test]
    fn test_extract_rejects_id_with_trailing_path() {
        // 後面跟著的不是`?`或字串結尾
        assert!(
            PageId::from_url("https://www.notion.so/2e0753ebc013807e8c78e7f403e83a90/extra")
                .is_none()
        );
    }

    #[test]
    fn test_block_space_payload_shape() {
        let id = PageId::from_url(
            "https://warm-hip-fe9.notion.site/LM-PC-2e0753ebc013807e8c78e7f403e83a90",
        )
        .unwrap();
        let payload = PageDataRequest::block_space(&id);

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "pageId": "2e0753ebc013807e8c78e7f403e83a90",
                "type": "block-space"
            })
        );
    }
}
