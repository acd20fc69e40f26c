//! # RemoteData
//!
//! The four-state value describing where an asynchronous piece of data stands:
//! never requested, in flight, failed, or arrived.
//!
//! This module only models the value and the ways to inspect it. Deciding *when*
//! a value moves from one state to another is the business of whoever produces it
//! (typically a [`Resource`](dioxus::prelude::Resource) or a signal written by a task).

use serde::{Deserialize, Serialize};

/// The lifecycle of a remotely obtained value.
///
/// # Type Parameters
///
/// * `E` - The error payload carried by [`RemoteData::Failure`]
/// * `A` - The value carried by [`RemoteData::Success`]
///
/// # Examples
///
/// ```rust
/// use remote_view::prelude::*;
///
/// let data: RemoteData<String, u32> = RemoteData::Success(42);
/// assert!(data.is_success());
/// assert_eq!(data.map(|n| n + 1).success(), Some(43));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "state", content = "value")]
pub enum RemoteData<E, A> {
    /// Nothing has been requested yet
    NotAsked,
    /// The request is in flight
    Loading,
    /// The request failed with the given error
    Failure(E),
    /// The request succeeded with the given value
    Success(A),
}

impl<E, A> Default for RemoteData<E, A> {
    fn default() -> Self {
        RemoteData::NotAsked
    }
}

impl<E, A> RemoteData<E, A> {
    pub fn is_not_asked(&self) -> bool {
        matches!(self, RemoteData::NotAsked)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, RemoteData::Loading)
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, RemoteData::Failure(_))
    }

    pub fn is_success(&self) -> bool {
        matches!(self, RemoteData::Success(_))
    }

    /// Invokes exactly one of the given functions, the one matching the current variant.
    ///
    /// The payloads of [`RemoteData::Failure`] and [`RemoteData::Success`] are handed
    /// over by value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use remote_view::prelude::*;
    ///
    /// let data: RemoteData<&str, u32> = RemoteData::Failure("timeout");
    /// let text = data.fold(
    ///     || "idle".to_owned(),
    ///     || "loading".to_owned(),
    ///     |e| format!("error: {e}"),
    ///     |v| format!("value: {v}"),
    /// );
    /// assert_eq!(text, "error: timeout");
    /// ```
    pub fn fold<R>(
        self,
        not_asked: impl FnOnce() -> R,
        loading: impl FnOnce() -> R,
        failure: impl FnOnce(E) -> R,
        success: impl FnOnce(A) -> R,
    ) -> R {
        match self {
            RemoteData::NotAsked => not_asked(),
            RemoteData::Loading => loading(),
            RemoteData::Failure(e) => failure(e),
            RemoteData::Success(a) => success(a),
        }
    }

    /// Creates a view of the `RemoteData` holding references to the payloads.
    pub fn as_ref(&self) -> RemoteData<&E, &A> {
        match self {
            RemoteData::NotAsked => RemoteData::NotAsked,
            RemoteData::Loading => RemoteData::Loading,
            RemoteData::Failure(e) => RemoteData::Failure(e),
            RemoteData::Success(a) => RemoteData::Success(a),
        }
    }

    /// Maps the success value, leaving every other variant untouched.
    pub fn map<B, F: FnOnce(A) -> B>(self, f: F) -> RemoteData<E, B> {
        match self {
            RemoteData::NotAsked => RemoteData::NotAsked,
            RemoteData::Loading => RemoteData::Loading,
            RemoteData::Failure(e) => RemoteData::Failure(e),
            RemoteData::Success(a) => RemoteData::Success(f(a)),
        }
    }

    /// Maps the error payload, leaving every other variant untouched.
    pub fn map_err<F2, F: FnOnce(E) -> F2>(self, f: F) -> RemoteData<F2, A> {
        match self {
            RemoteData::NotAsked => RemoteData::NotAsked,
            RemoteData::Loading => RemoteData::Loading,
            RemoteData::Failure(e) => RemoteData::Failure(f(e)),
            RemoteData::Success(a) => RemoteData::Success(a),
        }
    }

    pub fn success(self) -> Option<A> {
        match self {
            RemoteData::Success(a) => Some(a),
            _ => None,
        }
    }

    pub fn failure(self) -> Option<E> {
        match self {
            RemoteData::Failure(e) => Some(e),
            _ => None,
        }
    }

    /// Short name of the current variant, used in log lines
    pub fn state_name(&self) -> &'static str {
        match self {
            RemoteData::NotAsked => "NotAsked",
            RemoteData::Loading => "Loading",
            RemoteData::Failure(_) => "Failure",
            RemoteData::Success(_) => "Success",
        }
    }
}

/// A settled outcome is either a success or a failure.
impl<E, A> From<Result<A, E>> for RemoteData<E, A> {
    fn from(value: Result<A, E>) -> Self {
        match value {
            Ok(a) => RemoteData::Success(a),
            Err(e) => RemoteData::Failure(e),
        }
    }
}

/// `None` is how Dioxus resources report a future that has not completed yet,
/// so it maps to [`RemoteData::Loading`].
impl<E, A> From<Option<Result<A, E>>> for RemoteData<E, A> {
    fn from(value: Option<Result<A, E>>) -> Self {
        match value {
            None => RemoteData::Loading,
            Some(r) => r.into(),
        }
    }
}
