//! Wire types for the search response.
//!
//! Only the fields the relay reads are modelled; everything else is ignored.

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub items: Vec<SearchItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchItem {
    #[serde(default)]
    pub id: Option<ItemId>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ItemId {
    #[serde(rename = "videoId", default)]
    pub video_id: Option<String>,
}

impl SearchResponse {
    /// Video id of the first item, if the provider returned one.
    pub fn first_video_id(&self) -> Option<&str> {
        self.items.first()?.id.as_ref()?.video_id.as_deref()
    }
}
