//! Conversions from Dioxus reactive types to `RemoteData`.
//!
//! Each conversion reads the current value of the reactive source, which subscribes
//! the calling scope to it: a component converting a [`Resource`] is re-rendered
//! when the resource completes.
//!
//! # Examples
//!
//! ```rust,no_run
//! use remote_view::prelude::*;
//!
//! #[component]
//! fn Quote() -> Element {
//!     let quote = use_resource(|| async { Ok::<_, String>("Stay hungry".to_owned()) });
//!
//!     rsx! {
//!         RemoteView::<String, String> {
//!             data: quote,
//!             delay: 200,
//!             success: |q: String| rsx! { blockquote { "{q}" } },
//!             failure: |e: String| rsx! { "{e}" },
//!             loading: |_: ()| rsx! { "Loading..." },
//!         }
//!     }
//! }
//! ```

use dioxus::{
    hooks::Resource,
    signals::{Memo, ReadOnlySignal, Readable, Signal},
};

use super::remote_data::RemoteData;

/// A running resource is `Loading`, a completed one is `Success` or `Failure`.
impl<E: Clone + 'static, A: Clone + 'static> From<Resource<Result<A, E>>> for RemoteData<E, A> {
    fn from(value: Resource<Result<A, E>>) -> Self {
        value.read().clone().into()
    }
}

impl<E: Clone + 'static, A: Clone + 'static> From<ReadOnlySignal<Option<Result<A, E>>>>
    for RemoteData<E, A>
{
    fn from(value: ReadOnlySignal<Option<Result<A, E>>>) -> Self {
        value.read().clone().into()
    }
}

impl<E, A> From<Memo<Option<Result<A, E>>>> for RemoteData<E, A>
where
    E: Clone + PartialEq + 'static,
    A: Clone + PartialEq + 'static,
{
    fn from(value: Memo<Option<Result<A, E>>>) -> Self {
        value.read().clone().into()
    }
}

impl<E: Clone + 'static, A: Clone + 'static> From<ReadOnlySignal<RemoteData<E, A>>>
    for RemoteData<E, A>
{
    fn from(value: ReadOnlySignal<RemoteData<E, A>>) -> Self {
        value.read().clone()
    }
}

impl<E: Clone + 'static, A: Clone + 'static> From<Signal<RemoteData<E, A>>> for RemoteData<E, A> {
    fn from(value: Signal<RemoteData<E, A>>) -> Self {
        value.read().clone()
    }
}

impl<E, A> From<Memo<RemoteData<E, A>>> for RemoteData<E, A>
where
    E: Clone + PartialEq + 'static,
    A: Clone + PartialEq + 'static,
{
    fn from(value: Memo<RemoteData<E, A>>) -> Self {
        value.read().clone()
    }
}
