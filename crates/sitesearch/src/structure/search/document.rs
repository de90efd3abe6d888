// Copyright (c) 2025-2026 Sitesearch and contributors

// SPDX-License-Identifier: MIT
// Third-party contributions licensed under DCO

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to
// deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NON-INFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING
// FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS
// IN THE SOFTWARE.

// ----------------------------------------------------------------------------

//! Search document.

use serde::{Deserialize, Serialize};

use crate::config::SearchConfig;
use crate::structure::page::{Page, PageExtra};

use super::striptags::striptags;

// ----------------------------------------------------------------------------
// Structs
// ----------------------------------------------------------------------------

/// Search document.
///
/// The flattened record extracted per page for indexing - one document per
/// page, in page order. Documents only live for the duration of the build
/// step, as they're consumed by the indexer right after collection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchDocument {
    /// Document identifier, the 1-based position of the page.
    pub id: String,
    /// Document title, copied verbatim from the page.
    pub title: String,
    /// Document content with all markup tags removed.
    pub content: String,
    /// Document permalink, if configured to be included.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permalink: Option<String>,
    /// Document extra metadata, passed through from the page.
    pub extra: PageExtra,
}

// ----------------------------------------------------------------------------
// Implementations
// ----------------------------------------------------------------------------

impl SearchDocument {
    /// Creates a search document from the page at the given 1-based ordinal.
    pub fn new(ordinal: usize, page: &Page, config: &SearchConfig) -> Self {
        Self {
            id: ordinal.to_string(),
            title: page.title.clone(),
            content: striptags(&page.content),
            permalink: config
                .include_permalink
                .then(|| page.permalink.clone()),
            extra: page.extra.clone(),
        }
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structure::dynamic::Dynamic;

    #[test]
    fn test_new() {
        let mut page = Page {
            title: String::from("A"),
            content: String::from("<i>x</i>"),
            permalink: String::from("https://example.com/a/"),
            extra: PageExtra::new(),
        };
        page.extra
            .insert(String::from("date"), Dynamic::from("2021-01-01"));

        // Extra metadata must be passed through unchanged
        let document =
            SearchDocument::new(1, &page, &SearchConfig::default());
        assert_eq!(document.id, "1");
        assert_eq!(document.title, "A");
        assert_eq!(document.content, "x");
        assert_eq!(document.permalink, None);
        assert_eq!(document.extra, page.extra);
    }

    #[test]
    fn test_new_with_permalink() {
        let page = Page {
            permalink: String::from("https://example.com/a/"),
            ..Page::default()
        };

        let config = SearchConfig { include_permalink: true };
        let document = SearchDocument::new(1, &page, &config);
        assert_eq!(
            document.permalink.as_deref(),
            Some("https://example.com/a/")
        );
    }
}
