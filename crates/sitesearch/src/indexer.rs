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

//! Indexer contract.

use crate::structure::search::SearchDocument;

mod error;
mod json;

pub use error::{IndexerError, Result};
pub use json::JsonIndexer;

// ----------------------------------------------------------------------------
// Constants
// ----------------------------------------------------------------------------

/// Indexed fields.
///
/// Note that `permalink` is declared regardless of whether documents carry a
/// permalink - see [`SearchConfig`][crate::SearchConfig] for the switch that
/// governs population. Indexers are expected to tolerate declared fields that
/// are absent from documents.
pub const FIELDS: &[&str] = &["title", "content", "permalink"];

// ----------------------------------------------------------------------------
// Traits
// ----------------------------------------------------------------------------

/// Indexer.
///
/// This trait is the seam to the external full-text indexer. The indexer
/// receives the ordered document list together with the list of fields to
/// index over, and returns an opaque artifact, e.g. a serialized inverted
/// index for consumption by a browser-side search widget. Implementations
/// own tokenization, scoring, and persistence format - none of which are
/// specified here.
///
/// Errors are surfaced to the caller unchanged, wrapped in
/// [`IndexerError`]. Indexers must accept an empty document list.
pub trait Indexer {
    /// Index artifact.
    type Artifact;

    /// Builds an index artifact from the given documents and fields.
    fn index(
        &self, documents: &[SearchDocument], fields: &[&str],
    ) -> Result<Self::Artifact>;
}
