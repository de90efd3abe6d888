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

//! Search index generation for static sites.
//!
//! This crate turns an ordered collection of pages into an ordered list of
//! flat search documents, and hands that list to an external indexer which
//! builds the actual searchable artifact. Tokenization, scoring, and the
//! index data structure itself are the indexer's business, not ours - the
//! collector is a single deterministic pass over the pages.

#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]

mod config;
mod indexer;
mod structure;

pub use config::SearchConfig;
pub use indexer::{Indexer, IndexerError, JsonIndexer, Result, FIELDS};
pub use structure::dynamic::Dynamic;
pub use structure::page::{Page, PageExtra};
pub use structure::search::{striptags, SearchDocument, SearchIndex};
