//! GIPHY search API client.

mod client;
mod models;

pub use client::{GiphyClient, ImageSearch, RESULT_LIMIT};
pub use models::{Gif, ImageData, ImageResult, ImageVariants, Pagination, SearchResponse};
