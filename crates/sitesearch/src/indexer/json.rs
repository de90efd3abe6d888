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

//! JSON indexer.

use serde::Serialize;

use crate::structure::search::SearchDocument;

use super::error::{IndexerError, Result};
use super::Indexer;

// ----------------------------------------------------------------------------
// Structs
// ----------------------------------------------------------------------------

/// JSON indexer.
///
/// A reference indexer that serializes the document list and field list into
/// a single JSON artifact, leaving index construction to the consumer, e.g.
/// a browser-side search widget that builds its index on load. It's also what
/// tests run against, as it exercises the full indexer contract without
/// pulling in an actual full-text engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct JsonIndexer;

/// JSON artifact layout.
#[derive(Serialize)]
struct Artifact<'a> {
    /// Indexed fields.
    fields: &'a [&'a str],
    /// Search documents.
    documents: &'a [SearchDocument],
}

// ----------------------------------------------------------------------------
// Trait implementations
// ----------------------------------------------------------------------------

impl Indexer for JsonIndexer {
    type Artifact = String;

    /// Serializes documents and fields into a JSON artifact.
    fn index(
        &self, documents: &[SearchDocument], fields: &[&str],
    ) -> Result<String> {
        let artifact = Artifact { fields, documents };
        serde_json::to_string(&artifact).map_err(IndexerError::new)
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indexer::FIELDS;
    use crate::structure::page::PageExtra;

    #[test]
    fn test_index_empty() {
        let artifact = JsonIndexer.index(&[], FIELDS).unwrap();
        assert_eq!(
            artifact,
            r#"{"fields":["title","content","permalink"],"documents":[]}"#
        );
    }

    #[test]
    fn test_index_documents() {
        let documents = vec![SearchDocument {
            id: String::from("1"),
            title: String::from("A"),
            content: String::from("x"),
            permalink: None,
            extra: PageExtra::new(),
        }];

        // Permalinks that are not populated must not be serialized
        let artifact = JsonIndexer.index(&documents, FIELDS).unwrap();
        assert_eq!(
            artifact,
            concat!(
                r#"{"fields":["title","content","permalink"],"#,
                r#""documents":[{"id":"1","title":"A","content":"x","#,
                r#""extra":{}}]}"#
            )
        );
    }
}
