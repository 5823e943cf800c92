use serde::{Deserialize, Serialize};

/// Static metadata for the one listing this site markets. Everything here is
/// injected content, never computed.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ListingInfo {
    pub name: String,
    pub suite_name: String,
    pub rating: f32,
    pub review_count: u32,
    pub locality: String,
    pub city: String,
    pub state: String,
    pub map_embed_url: String,
    pub host_avatar_url: String,
    pub bedrooms: u8,
    pub baths: u8,
    pub room_type: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Amenity {
    pub icon: String,
    pub label: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Highlight {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PolicyItem {
    pub icon: String,
    pub text: String,
}

/// One entry in the share dialog. `share_url` is a prefix the page appends
/// an URL-encoded message to; an empty prefix means the target has no web
/// share intent and the link goes to `fallback_url` instead.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ShareTarget {
    pub icon: String,
    pub name: String,
    pub share_url: String,
    pub fallback_url: String,
}
