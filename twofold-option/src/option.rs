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

/// A value that may or may not be present.
///
/// Construct it with [`Option::some`] or [`Option::none`]. The active variant is fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Option<T> {
    /// No value.
    None,
    /// Some value of type `T`.
    Some(T),
}

impl<T> Option<T> {
    /// The empty value.
    ///
    /// `None` carries no payload, so every empty option is this constant.
    pub const NONE: Self = Option::None;

    /// Wrap a present value.
    pub fn some(value: T) -> Self {
        Option::Some(value)
    }

    /// The empty value, see [`Option::NONE`].
    pub fn none() -> Self {
        Self::NONE
    }

    /// Returns `true` if the option holds a value.
    pub fn is_some(&self) -> bool {
        matches!(self, Option::Some(_))
    }

    /// Returns `true` if the option is empty.
    pub fn is_none(&self) -> bool {
        matches!(self, Option::None)
    }

    /// Call exactly one of the handlers, chosen by the active variant, and return what it returns.
    ///
    /// Only `some` receives the payload.
    ///
    /// ```rust
    /// # use twofold_option::Option;
    /// let greeting = Option::some("twofold").match_with(|name| format!("hello, {name}"), || "nobody".to_string());
    /// assert_eq!(greeting, "hello, twofold");
    /// ```
    pub fn match_with<U, S, N>(self, some: S, none: N) -> U
    where
        S: FnOnce(T) -> U,
        N: FnOnce() -> U,
    {
        match self {
            Option::Some(value) => some(value),
            Option::None => none(),
        }
    }

    /// Maps `Option<T>` to `Option<U>` by applying `f` to the held value.
    ///
    /// `f` is never called on an empty option.
    pub fn map<U, F>(self, f: F) -> Option<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Option::Some(value) => Option::Some(f(value)),
            Option::None => Option::None,
        }
    }

    /// Returns the held value, or `default` if the option is empty.
    pub fn or(self, default: T) -> T {
        match self {
            Option::Some(value) => value,
            Option::None => default,
        }
    }

    /// Returns the held value.
    ///
    /// # Panics
    ///
    /// Panics with [`InvalidExtraction::UnwrapOnNone`] if the option is empty. Use [`Option::or`],
    /// [`Option::match_with`] or [`Option::try_unwrap`] when emptiness is expected.
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self.try_unwrap() {
            Ok(value) => value,
            Err(e) => e.raise(),
        }
    }

    /// Returns the held value, or [`InvalidExtraction::UnwrapOnNone`] if the option is empty.
    pub fn try_unwrap(self) -> ExtractResult<T> {
        match self {
            Option::Some(value) => Ok(value),
            Option::None => Err(InvalidExtraction::UnwrapOnNone),
        }
    }

    /// Converts from `&Option<T>` to `Option<&T>`.
    pub fn as_ref(&self) -> Option<&T> {
        match self {
            Option::Some(value) => Option::Some(value),
            Option::None => Option::None,
        }
    }

    /// Converts from `&mut Option<T>` to `Option<&mut T>`.
    pub fn as_mut(&mut self) -> Option<&mut T> {
        match self {
            Option::Some(value) => Option::Some(value),
            Option::None => Option::None,
        }
    }
}

impl<T> Default for Option<T> {
    fn default() -> Self {
        Self::NONE
    }
}

impl<T> From<core::option::Option<T>> for Option<T> {
    fn from(value: core::option::Option<T>) -> Self {
        match value {
            core::option::Option::Some(value) => Option::Some(value),
            core::option::Option::None => Option::None,
        }
    }
}

impl<T> From<Option<T>> for core::option::Option<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Option::Some(value) => core::option::Option::Some(value),
            Option::None => core::option::Option::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    fn is_send_sync_static<T: Send + Sync + 'static>() {}

    #[test]
    fn test_send_sync_static() {
        is_send_sync_static::<Option<u64>>();
        is_send_sync_static::<Option<String>>();
    }

    #[test]
    fn test_variant_checks() {
        let some = Option::some(42);
        assert!(some.is_some());
        assert!(!some.is_none());

        let none = Option::<i32>::none();
        assert!(!none.is_some());
        assert!(none.is_none());
    }

    #[test]
    fn test_none_is_shared() {
        assert_eq!(Option::<i32>::none(), Option::NONE);
        assert_eq!(Option::<i32>::default(), Option::NONE);
        assert_ne!(Option::some(0), Option::NONE);
    }

    #[test]
    fn test_map() {
        assert_eq!(Option::some(5).map(|x| x * 2), Option::some(10));
        assert_eq!(Option::some("twofold").map(str::len), Option::some(7));

        let calls = Cell::new(0);
        let mapped = Option::<i32>::none().map(|x| {
            calls.set(calls.get() + 1);
            x * 2
        });
        assert_eq!(mapped, Option::none());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_or() {
        assert_eq!(Option::some(5).or(0), 5);
        assert_eq!(Option::none().or(0), 0);
        assert_eq!(Option::none().map(|x: i32| x * 2).or(0), 0);
    }

    #[test]
    fn test_unwrap() {
        assert_eq!(Option::some(5).map(|x| x * 2).unwrap(), 10);
        assert_eq!(Option::some(String::from("v")).unwrap(), "v");
    }

    #[test_log::test]
    #[should_panic(expected = "called `unwrap` on a `None` value")]
    fn test_unwrap_none() {
        Option::<i32>::none().unwrap();
    }

    #[test]
    fn test_try_unwrap() {
        assert_eq!(Option::some(1).try_unwrap(), Ok(1));
        assert_eq!(Option::<i32>::none().try_unwrap(), Err(InvalidExtraction::UnwrapOnNone));
    }

    #[test]
    fn test_match_dispatch() {
        let some_calls = Cell::new(0);
        let none_calls = Cell::new(0);

        let res = Option::some(3).match_with(
            |v| {
                some_calls.set(some_calls.get() + 1);
                v + 1
            },
            || {
                none_calls.set(none_calls.get() + 1);
                0
            },
        );
        assert_eq!(res, 4);
        assert_eq!((some_calls.get(), none_calls.get()), (1, 0));

        let res = Option::<i32>::none().match_with(
            |v| {
                some_calls.set(some_calls.get() + 1);
                v + 1
            },
            || {
                none_calls.set(none_calls.get() + 1);
                0
            },
        );
        assert_eq!(res, 0);
        assert_eq!((some_calls.get(), none_calls.get()), (1, 1));
    }

    #[test]
    fn test_as_ref_as_mut() {
        let mut opt = Option::some(String::from("twofold"));
        assert_eq!(opt.as_ref().map(|s| s.len()).or(0), 7);

        opt.as_mut().map(|s| s.push_str("-rs"));
        assert_eq!(opt, Option::some(String::from("twofold-rs")));

        let mut none = Option::<String>::none();
        assert!(none.as_ref().is_none());
        assert!(none.as_mut().is_none());
    }

    #[test]
    fn test_core_conversion() {
        assert_eq!(Option::from(Some(1)), Option::some(1));
        assert_eq!(Option::<i32>::from(None), Option::none());

        let core: core::option::Option<i32> = Option::some(1).into();
        assert_eq!(core, Some(1));
        let core: core::option::Option<i32> = Option::none().into();
        assert_eq!(core, None);
    }

    #[test]
    fn test_laws_random() {
        for _ in 0..1000 {
            let v: i64 = rand::random();
            let d: i64 = rand::random();
            let f = |x: i64| x.wrapping_mul(3).wrapping_add(1);

            assert_eq!(Option::some(v).map(f), Option::some(f(v)));
            assert_eq!(Option::<i64>::none().map(f), Option::none());
            assert_eq!(Option::some(v).or(d), v);
            assert_eq!(Option::none().or(d), d);
            assert_eq!(Option::some(v).unwrap(), v);
        }
    }

    #[test]
    fn test_purity() {
        let opt = Option::some(vec![1, 2, 3]);
        let sum = |v: Vec<i32>| v.iter().sum::<i32>();
        assert_eq!(opt.clone().map(sum), opt.clone().map(sum));
        assert_eq!(opt.clone().or(vec![]), opt.clone().or(vec![]));
        assert_eq!(opt, Option::some(vec![1, 2, 3]));
    }

    #[test]
    fn test_share_across_threads() {
        let opt = Option::some(String::from("shared"));
        std::thread::scope(|s| {
            for _ in 0..4 {
                s.spawn(|| assert_eq!(opt.as_ref().map(|s| s.len()).or(0), 6));
            }
        });
    }
}
