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

//! twofold provides two closed sum types that make absence and failure explicit.
//!
//! - [`Option`](option::Option) is either `Some` with a value or `None`.
//! - [`Result`](result::Result) is either `Ok` with a success value or `Err` with an error value.
//!
//! Both expose the same small operation set: construction, variant checks, `match_with`, `map`, `or`, and
//! `unwrap`. [`Result`](result::Result) adds `map_err` and `unwrap_err`.
//!
//! ```rust
//! use twofold::prelude::*;
//!
//! assert_eq!(Option::some(5).map(|x| x * 2).unwrap(), 10);
//! assert_eq!(Option::<i32>::none().map(|x| x * 2).or(0), 0);
//! assert_eq!(Result::<i32, &str>::ok(5).map_err(|e| format!("wrapped:{e}")).unwrap(), 5);
//! assert_eq!(Result::<i32, &str>::err("boom").map(|x| x + 1).unwrap_err(), "boom");
//! ```
//!
//! Calling `unwrap` on `None` or `Err`, or `unwrap_err` on `Ok`, panics with an
//! [`InvalidExtraction`](common::error::InvalidExtraction). Use `or`, `match_with` or the `try_*` extractors
//! when the other variant is expected.
//!
//! The prelude shadows [`core::option::Option`] and [`core::result::Result`]. Both convert to and from their
//! core counterparts with [`From`].

pub use twofold_common as common;
pub use twofold_option as option;
pub use twofold_result as result;

/// The recommended import for twofold.
pub mod prelude;
