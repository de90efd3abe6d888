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

//! Search index.

use serde::Serialize;

use crate::config::SearchConfig;
use crate::indexer::{Indexer, Result, FIELDS};

use super::page::Page;

mod document;
mod striptags;

pub use document::SearchDocument;
pub use striptags::striptags;

// ----------------------------------------------------------------------------
// Structs
// ----------------------------------------------------------------------------

/// Search index.
///
/// The ordered list of search documents collected from an ordered collection
/// of pages, together with the configuration it was collected under. This is
/// the input to the indexer, not the searchable artifact itself - building
/// that is delegated via [`SearchIndex::index_with`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SearchIndex {
    /// Search configuration.
    pub config: SearchConfig,
    /// Search documents.
    pub documents: Vec<SearchDocument>,
}

// ----------------------------------------------------------------------------
// Implementations
// ----------------------------------------------------------------------------

impl SearchIndex {
    /// Creates a search index from pages.
    ///
    /// This is a single pass over the pages, in order: every page yields
    /// exactly one document, with its identifier assigned from its 1-based
    /// position in the collection. Pages are never dropped or reordered, and
    /// since the pass is a pure function of its input, rebuilding from the
    /// same pages yields an identical index.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip_all, fields(pages = pages.len()))
    )]
    pub fn new(pages: &[Page], config: SearchConfig) -> Self {
        let mut documents = Vec::with_capacity(pages.len());

        // Assemble search documents, assigning each page its ordinal
        for (index, page) in pages.iter().enumerate() {
            documents.push(SearchDocument::new(index + 1, page, &config));
        }

        // Return search index
        Self { config, documents }
    }

    /// Builds the searchable artifact by delegating to the given indexer.
    ///
    /// The indexer is always invoked, even for an empty document list, and
    /// always with the full field list. Its result is returned unchanged,
    /// and so is any error it raises.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip_all, fields(documents = self.documents.len()))
    )]
    pub fn index_with<I>(&self, indexer: &I) -> Result<I::Artifact>
    where
        I: Indexer,
    {
        indexer.index(&self.documents, FIELDS)
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use thiserror::Error;

    use super::*;
    use crate::indexer::IndexerError;
    use crate::structure::dynamic::Dynamic;
    use crate::structure::page::PageExtra;

    /// Indexer returning the document count and fields it was invoked with.
    struct RecordingIndexer;

    impl Indexer for RecordingIndexer {
        type Artifact = (usize, Vec<String>);

        fn index(
            &self, documents: &[SearchDocument], fields: &[&str],
        ) -> Result<Self::Artifact> {
            let fields = fields.iter().map(ToString::to_string).collect();
            Ok((documents.len(), fields))
        }
    }

    /// Indexer rejecting any input.
    struct RejectingIndexer;

    /// Rejection raised by [`RejectingIndexer`].
    #[derive(Debug, Error)]
    #[error("documents rejected")]
    struct Rejection;

    impl Indexer for RejectingIndexer {
        type Artifact = ();

        fn index(
            &self, _documents: &[SearchDocument], _fields: &[&str],
        ) -> Result<()> {
            Err(IndexerError::new(Rejection))
        }
    }

    fn page(title: &str, content: &str) -> Page {
        Page {
            title: title.to_string(),
            content: content.to_string(),
            ..Page::default()
        }
    }

    #[test]
    fn test_new() {
        let pages = vec![page("A", "<i>x</i>"), page("B", "y")];
        let search = SearchIndex::new(&pages, SearchConfig::default());
        assert_eq!(
            search.documents,
            vec![
                SearchDocument {
                    id: String::from("1"),
                    title: String::from("A"),
                    content: String::from("x"),
                    permalink: None,
                    extra: PageExtra::new(),
                },
                SearchDocument {
                    id: String::from("2"),
                    title: String::from("B"),
                    content: String::from("y"),
                    permalink: None,
                    extra: PageExtra::new(),
                },
            ]
        );
    }

    #[test]
    fn test_new_assigns_ordinals() {
        let pages: Vec<Page> = (0..100)
            .map(|index| page(&format!("Page {index}"), ""))
            .collect();

        // Identifiers must be unique and increase in collection order
        let search = SearchIndex::new(&pages, SearchConfig::default());
        assert_eq!(search.documents.len(), pages.len());
        for (index, document) in search.documents.iter().enumerate() {
            assert_eq!(document.id, (index + 1).to_string());
            assert_eq!(document.title, pages[index].title);
        }
    }

    #[test]
    fn test_new_is_idempotent() {
        let mut pages = vec![page("A", "<p>Hello <b>world</b></p>")];
        pages[0]
            .extra
            .insert(String::from("date"), Dynamic::from("2021-01-01"));

        let fst = SearchIndex::new(&pages, SearchConfig::default());
        let snd = SearchIndex::new(&pages, SearchConfig::default());
        assert_eq!(fst, snd);
    }

    #[test]
    fn test_new_passes_extra_through() {
        let mut pages = vec![page("A", "")];
        pages[0]
            .extra
            .insert(String::from("date"), Dynamic::from("2021-01-01"));

        let search = SearchIndex::new(&pages, SearchConfig::default());
        assert_eq!(search.documents[0].extra, pages[0].extra);
    }

    #[test]
    fn test_index_with() {
        let pages = vec![page("A", "<i>x</i>"), page("B", "y")];
        let search = SearchIndex::new(&pages, SearchConfig::default());

        let (count, fields) = search.index_with(&RecordingIndexer).unwrap();
        assert_eq!(count, 2);
        assert_eq!(fields, vec!["title", "content", "permalink"]);
    }

    #[test]
    fn test_index_with_empty() {
        let search = SearchIndex::new(&[], SearchConfig::default());
        assert!(search.documents.is_empty());

        // The indexer must still be invoked, with the full field list
        let (count, fields) = search.index_with(&RecordingIndexer).unwrap();
        assert_eq!(count, 0);
        assert_eq!(fields, vec!["title", "content", "permalink"]);
    }

    #[test]
    fn test_index_with_propagates_errors() {
        let search = SearchIndex::new(&[], SearchConfig::default());

        // The indexer's error must surface unchanged
        let err = search.index_with(&RejectingIndexer).unwrap_err();
        assert_eq!(err.to_string(), "documents rejected");
        assert!(err.into_inner().downcast::<Rejection>().is_ok());
    }

    #[test]
    fn test_serialize() {
        let pages = vec![page("A", "<i>x</i>")];
        let search = SearchIndex::new(&pages, SearchConfig::default());

        let data = serde_json::to_string(&search).unwrap();
        assert_eq!(
            data,
            concat!(
                r#"{"config":{"include_permalink":false},"#,
                r#""documents":[{"id":"1","title":"A","content":"x","#,
                r#""extra":{}}]}"#
            )
        );
    }
}
