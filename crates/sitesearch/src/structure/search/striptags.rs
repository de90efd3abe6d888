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

//! Markup tag stripping.

use regex::Regex;
use std::sync::LazyLock;

// ----------------------------------------------------------------------------
// Constants
// ----------------------------------------------------------------------------

/// Markup tag regex, matching comments and tags.
static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->|<[^>]*>").unwrap());

// ----------------------------------------------------------------------------
// Functions
// ----------------------------------------------------------------------------

/// Strips all markup tags from the given value.
///
/// Text nodes are kept in their relative order with whitespace preserved, so
/// adjacent text nodes concatenate with whatever whitespace sat between the
/// tags. HTML entities are not re-encoded - what the markup renderer emitted
/// is what the search index sees.
#[must_use]
pub fn striptags(value: &str) -> String {
    TAG_RE.replace_all(value, "").into_owned()
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_striptags() {
        let test_cases = vec![
            ("<p>Hello <b>world</b></p>", "Hello world"),
            ("y", "y"),
            ("", ""),
            ("<i>x</i>", "x"),
            ("<a href=\"https://example.com\">link</a>", "link"),
            ("<p>a</p>\n<p>b</p>", "a\nb"),
            ("a <!-- note --> b", "a  b"),
            ("a <!-- multi\nline --> b", "a  b"),
            ("a &amp; b", "a &amp; b"),
            ("<br/>", ""),
            ("<p class='x'>text</p>", "text"),
        ];

        for (value, expected) in test_cases {
            assert_eq!(
                striptags(value),
                expected,
                "Failed for value: {value}"
            );
        }
    }
}
