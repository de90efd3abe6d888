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

//! Search configuration.

use serde::{Deserialize, Serialize};

// ----------------------------------------------------------------------------
// Structs
// ----------------------------------------------------------------------------

/// Search configuration.
///
/// Configuration is deliberately minimal, as almost everything about the
/// search experience is determined by the indexer, not by us. It's filled in
/// by the embedding build pipeline, which owns configuration file parsing.
#[derive(
    Clone, Debug, Default, Hash, PartialEq, Eq, Serialize, Deserialize,
)]
#[serde(default)]
pub struct SearchConfig {
    /// Whether to copy page permalinks into search documents.
    ///
    /// The indexed field list always declares `permalink`, but historically
    /// the field was never populated on any document, so the default mirrors
    /// that behavior. Enable this to make search results link back to pages.
    pub include_permalink: bool,
}
