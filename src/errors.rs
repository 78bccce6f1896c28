// Copyright (c) The quick-allure Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use thiserror::Error;

/// An error that occurs while serializing a [`Report`](crate::Report).
///
/// Returned by [`Report::serialize`](crate::Report::serialize) and
/// [`Report::to_string`](crate::Report::to_string). Covers both XML encoding
/// failures and write failures on the output sink; either is fatal to the
/// invocation.
#[derive(Debug, Error)]
#[error("error serializing Allure report")]
pub struct SerializeError {
    #[from]
    inner: quick_xml::Error,
}

impl SerializeError {
    /// Returns the underlying XML or I/O error.
    pub fn inner(&self) -> &quick_xml::Error {
        &self.inner
    }
}
