//! Response types for the GIPHY search endpoint.

use serde::Deserialize;

/// A single rendition of a GIF.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ImageData {
    pub url: String,
    pub width: String,
    pub height: String,
    pub size: String,
    pub frames: String,
}

/// The renditions GIPHY returns for every GIF.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ImageVariants {
    pub original: ImageData,
    pub fixed_height: ImageData,
    pub fixed_height_still: ImageData,
    pub fixed_height_downsampled: ImageData,
    pub fixed_width: ImageData,
    pub fixed_width_still: ImageData,
    pub fixed_width_downsampled: ImageData,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Gif {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: String,
    pub url: String,
    pub embed_url: String,
    pub images: ImageVariants,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Pagination {
    pub total_count: u64,
}

/// Body of a `/v1/gifs/search` response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SearchResponse {
    pub data: Vec<Gif>,
    pub pagination: Pagination,
}

/// The part of a [`Gif`] the bot replies with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageResult {
    pub id: String,
    pub source_url: String,
    pub preview_url: String,
}

impl From<&Gif> for ImageResult {
    fn from(gif: &Gif) -> Self {
        Self {
            id: gif.id.clone(),
            source_url: gif.url.clone(),
            preview_url: gif.images.fixed_height_downsampled.url.clone(),
        }
    }
}

impl SearchResponse {
    /// Results in API order, reduced to their preview renditions.
    pub fn results(&self) -> Vec<ImageResult> {
        self.data.iter().map(ImageResult::from).collect()
    }
}
