// Copyright 2026 twofold Project Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::panic::Location;

/// The failure raised when a payload is extracted from the variant that does not carry it.
///
/// Invalid extraction is a programmer error. The panicking extractors (`unwrap`, `unwrap_err`) go through
/// [`InvalidExtraction::raise`]; the `try_*` extractors hand the value back as an [`ExtractResult`] instead.
///
/// ## Display
///
/// Each case renders the message the panic carries:
///
/// ```rust
/// # use twofold_common::error::InvalidExtraction;
/// assert_eq!(
///     InvalidExtraction::UnwrapOnNone.to_string(),
///     "called `unwrap` on a `None` value"
/// );
/// ```
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvalidExtraction {
    /// `unwrap` on an empty option.
    #[error("called `unwrap` on a `None` value")]
    UnwrapOnNone,
    /// `unwrap` on a failed result.
    #[error("called `unwrap` on an `Err` value")]
    UnwrapOnErr,
    /// `unwrap_err` on a successful result.
    #[error("called `unwrap_err` on an `Ok` value")]
    UnwrapErrOnOk,
}

impl InvalidExtraction {
    /// The extractor that was misused.
    pub fn operation(&self) -> &'static str {
        match self {
            InvalidExtraction::UnwrapOnNone | InvalidExtraction::UnwrapOnErr => "unwrap",
            InvalidExtraction::UnwrapErrOnOk => "unwrap_err",
        }
    }

    /// The variant that was active when the extractor was called.
    pub fn variant(&self) -> &'static str {
        match self {
            InvalidExtraction::UnwrapOnNone => "None",
            InvalidExtraction::UnwrapOnErr => "Err",
            InvalidExtraction::UnwrapErrOnOk => "Ok",
        }
    }

    /// Log the invalid extraction and panic at the caller's location.
    ///
    /// The panic payload is the [`Display`](std::fmt::Display) message of `self`.
    #[cold]
    #[inline(never)]
    #[track_caller]
    pub fn raise(self) -> ! {
        let location = Location::caller();
        tracing::error!(
            operation = self.operation(),
            variant = self.variant(),
            %location,
            "[twofold]: invalid extraction"
        );
        panic!("{}", self)
    }
}

/// Result type of the non-panicking extractors.
pub type ExtractResult<T> = std::result::Result<T, InvalidExtraction>;
