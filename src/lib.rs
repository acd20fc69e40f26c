//! # Remote View
//!
//! A Dioxus component rendering the state of an asynchronous value.
//!
//! A value obtained remotely goes through four states: nothing requested yet,
//! request in flight, request failed, value arrived. [`RemoteData`](remote_data::RemoteData)
//! models these states and [`RemoteView`](component::RemoteView) renders one view
//! per state.
//!
//! The loading view can be delayed: when the value usually arrives fast, showing a
//! spinner for a few milliseconds only makes the UI flicker. With `delay: 300`, the
//! loading view appears only if the value is still loading 300ms after the component
//! first saw it loading.
//!
//! ## Core Concepts
//!
//! - [`RemoteData`](remote_data::RemoteData): The four-state value, with `fold`, `map`, `map_err`...
//! - [`RemoteView`](component::RemoteView): The component dispatching on a `RemoteData`
//! - [`LoadingGate`](gate::LoadingGate): The delay bookkeeping, independent of Dioxus
//! - Converters from Dioxus `Resource`, `Signal`, `ReadOnlySignal` and `Memo`
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use remote_view::prelude::*;
//!
//! #[component]
//! fn Greeting() -> Element {
//!     let name = use_resource(|| async { Ok::<_, String>("Satoshi".to_owned()) });
//!
//!     rsx! {
//!         RemoteView::<String, String> {
//!             data: name,
//!             delay: 250,
//!             success: |name: String| rsx! { h1 { "Hello {name}" } },
//!             failure: |e: String| rsx! { p { class: "text-error", "{e}" } },
//!             loading: |_: ()| rsx! { span { class: "loading loading-spinner" } },
//!         }
//!     }
//! }
//! ```

pub mod component;
mod converters;
pub mod gate;
pub mod remote_data;
pub mod utils;

/// Prelude module that re-exports commonly used types and traits.
///
/// It also re-exports the Dioxus prelude, so a single glob import is enough to
/// write components using [`RemoteView`](component::RemoteView).
///
/// # Example
///
/// ```rust
/// use remote_view::prelude::*;
/// ```
pub mod prelude {
    pub use super::component::RemoteView;
    pub use super::gate::{DelayScheduler, LoadingGate};
    pub use super::remote_data::RemoteData;
    pub use super::utils::log_error;
    pub use dioxus::prelude::*;
}
