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

//! Indexer error.

use std::{error, result};
use thiserror::Error;

// ----------------------------------------------------------------------------
// Structs
// ----------------------------------------------------------------------------

/// Indexer error.
///
/// Indexers are external collaborators, so we don't prescribe an error type,
/// but pass whatever they raise through to the caller unmodified. A failure
/// aborts index generation - no partial artifact is emitted, and nothing is
/// retried, since the operation is deterministic.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct IndexerError(#[from] Box<dyn error::Error + Send + Sync>);

// ----------------------------------------------------------------------------
// Implementations
// ----------------------------------------------------------------------------

impl IndexerError {
    /// Creates an indexer error from any error.
    pub fn new<E>(err: E) -> Self
    where
        E: error::Error + Send + Sync + 'static,
    {
        Self(Box::new(err))
    }

    /// Returns the wrapped error.
    #[must_use]
    pub fn into_inner(self) -> Box<dyn error::Error + Send + Sync> {
        self.0
    }
}

// ----------------------------------------------------------------------------
// Type aliases
// ----------------------------------------------------------------------------

/// Indexer result.
pub type Result<T = ()> = result::Result<T, IndexerError>;
