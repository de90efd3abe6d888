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

//! Page.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::dynamic::Dynamic;

// ----------------------------------------------------------------------------
// Structs
// ----------------------------------------------------------------------------

/// Page.
///
/// One content unit from the site's build pipeline, e.g. a blog post, scoped
/// to the data the search index needs. The pipeline owns content rendering
/// and page ordering - we receive pages fully materialized, in the order the
/// pipeline defines, and never mutate them.
///
/// All fields default when absent: a page without a title or content is
/// treated as having empty text, and a page without extra metadata as having
/// an empty mapping. Missing fields are not an error.
#[derive(
    Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize,
)]
#[serde(default)]
pub struct Page {
    /// Page title.
    pub title: String,
    /// Page content as raw markup.
    pub content: String,
    /// Page permalink.
    pub permalink: String,
    /// Page extra metadata.
    pub extra: PageExtra,
}

// ----------------------------------------------------------------------------
// Type aliases
// ----------------------------------------------------------------------------

/// Page extra metadata.
pub type PageExtra = BTreeMap<String, Dynamic>;

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_sparse() {
        let page: Page = serde_json::from_str(r#"{"title": "A"}"#).unwrap();
        assert_eq!(page.title, "A");
        assert_eq!(page.content, "");
        assert_eq!(page.permalink, "");
        assert_eq!(page.extra, PageExtra::new());
    }

    #[test]
    fn test_deserialize_extra() {
        let page: Page = serde_json::from_str(
            r#"{"title": "A", "extra": {"date": "2021-01-01", "weight": 2}}"#,
        )
        .unwrap();
        assert_eq!(
            page.extra.get("date"),
            Some(&Dynamic::from("2021-01-01"))
        );
        assert_eq!(page.extra.get("weight"), Some(&Dynamic::Integer(2)));
    }
}
