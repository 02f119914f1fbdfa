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

use twofold_common::error::{ExtractResult, InvalidExtraction};

/// The outcome of an operation: a success value of type `T` or an error value of type `E`.
///
/// Construct it with [`Result::ok`] or [`Result::err`]. The active variant is fixed at construction, and
/// the error payload is plain data. Only a misused extractor panics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Result<T, E> {
    /// Success value.
    Ok(T),
    /// Error value.
    Err(E),
}

impl<T, E> Result<T, E> {
    /// Wrap a success value.
    pub fn ok(value: T) -> Self {
        Result::Ok(value)
    }

    /// Wrap an error value.
    pub fn err(error: E) -> Self {
        Result::Err(error)
    }

    /// Returns `true` if the result holds a success value.
    pub fn is_ok(&self) -> bool {
        matches!(self, Result::Ok(_))
    }

    /// Returns `true` if the result holds an error value.
    pub fn is_err(&self) -> bool {
        matches!(self, Result::Err(_))
    }

    /// Call exactly one of the handlers, chosen by the active variant, with that variant's payload.
    ///
    /// ```rust
    /// # use twofold_result::Result;
    /// let parsed: Result<u16, String> = Result::err("not a port".to_string());
    /// let port = parsed.match_with(|port| port, |_| 8080);
    /// assert_eq!(port, 8080);
    /// ```
    pub fn match_with<U, O, F>(self, ok: O, err: F) -> U
    where
        O: FnOnce(T) -> U,
        F: FnOnce(E) -> U,
    {
        match self {
            Result::Ok(value) => ok(value),
            Result::Err(error) => err(error),
        }
    }

    /// Maps `Result<T, E>` to `Result<U, E>` by applying `f` to the success value.
    ///
    /// An error passes through untouched and `f` is not called.
    pub fn map<U, F>(self, f: F) -> Result<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Result::Ok(value) => Result::Ok(f(value)),
            Result::Err(error) => Result::Err(error),
        }
    }

    /// Maps `Result<T, E>` to `Result<T, F>` by applying `g` to the error value.
    ///
    /// A success passes through untouched and `g` is not called.
    pub fn map_err<F, G>(self, g: G) -> Result<T, F>
    where
        G: FnOnce(E) -> F,
    {
        match self {
            Result::Ok(value) => Result::Ok(value),
            Result::Err(error) => Result::Err(g(error)),
        }
    }

    /// Returns the success value, or `default` if the result holds an error.
    pub fn or(self, default: T) -> T {
        match self {
            Result::Ok(value) => value,
            Result::Err(_) => default,
        }
    }

    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics with [`InvalidExtraction::UnwrapOnErr`] if the result holds an error.
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self.try_unwrap() {
            ExtractResult::Ok(value) => value,
            ExtractResult::Err(e) => e.raise(),
        }
    }

    /// Returns the error value.
    ///
    /// # Panics
    ///
    /// Panics with [`InvalidExtraction::UnwrapErrOnOk`] if the result holds a success value.
    #[track_caller]
    pub fn unwrap_err(self) -> E {
        match self.try_unwrap_err() {
            ExtractResult::Ok(error) => error,
            ExtractResult::Err(e) => e.raise(),
        }
    }

    /// Returns the success value, or [`InvalidExtraction::UnwrapOnErr`].
    pub fn try_unwrap(self) -> ExtractResult<T> {
        match self {
            Result::Ok(value) => ExtractResult::Ok(value),
            Result::Err(_) => ExtractResult::Err(InvalidExtraction::UnwrapOnErr),
        }
    }

    /// Returns the error value, or [`InvalidExtraction::UnwrapErrOnOk`].
    pub fn try_unwrap_err(self) -> ExtractResult<E> {
        match self {
            Result::Ok(_) => ExtractResult::Err(InvalidExtraction::UnwrapErrOnOk),
            Result::Err(error) => ExtractResult::Ok(error),
        }
    }

    /// Converts from `&Result<T, E>` to `Result<&T, &E>`.
    pub fn as_ref(&self) -> Result<&T, &E> {
        match self {
            Result::Ok(value) => Result::Ok(value),
            Result::Err(error) => Result::Err(error),
        }
    }

    /// Converts from `&mut Result<T, E>` to `Result<&mut T, &mut E>`.
    pub fn as_mut(&mut self) -> Result<&mut T, &mut E> {
        match self {
            Result::Ok(value) => Result::Ok(value),
            Result::Err(error) => Result::Err(error),
        }
    }
}

impl<T, E> From<core::result::Result<T, E>> for Result<T, E> {
    fn from(value: core::result::Result<T, E>) -> Self {
        match value {
            core::result::Result::Ok(value) => Result::Ok(value),
            core::result::Result::Err(error) => Result::Err(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for core::result::Result<T, E> {
    fn from(value: Result<T, E>) -> Self {
        match value {
            Result::Ok(value) => core::result::Result::Ok(value),
            Result::Err(error) => core::result::Result::Err(error),
        }
    }
}
