//! Turning message text into a search query and picking a result.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;

use crate::giphy::ImageResult;

const RANDOM_PREFIX: &str = "random";
const ENCODED_SPACE: &str = "%20";

/// How a result is picked from the search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    /// Always the first (most relevant) result.
    Specific,
    /// Any result, uniformly.
    Random,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageQuery {
    /// Lowercased query with spaces encoded as `%20`.
    pub encoded: String,
    pub mode: SelectionMode,
}

impl ImageQuery {
    /// Build a query from the text left after the address tag was removed.
    ///
    /// Text starting with lowercase `random` selects [`SelectionMode::Random`]
    /// and the word stays part of the query. Any other casing of a leading
    /// `random` is dropped from the query and the first result is used.
    pub fn parse(text: &str) -> Self {
        let mode = if text.starts_with(RANDOM_PREFIX) {
            SelectionMode::Random
        } else {
            SelectionMode::Specific
        };

        let mut encoded = text.to_lowercase().replace(' ', ENCODED_SPACE);
        if mode == SelectionMode::Specific
            && let Some(rest) = encoded.strip_prefix("random%20")
        {
            encoded = rest.to_string();
        }

        Self { encoded, mode }
    }

    /// The query as the user typed it, for user-facing text.
    pub fn display(&self) -> String {
        self.encoded.replace(ENCODED_SPACE, " ")
    }
}

/// Pick a result according to `mode`. Returns `None` for an empty result set.
pub fn select_result<'a>(
    results: &'a [ImageResult],
    mode: SelectionMode,
    rng: &mut StdRng,
) -> Option<&'a ImageResult> {
    match mode {
        SelectionMode::Specific => results.first(),
        SelectionMode::Random => results.choose(rng),
    }
}
