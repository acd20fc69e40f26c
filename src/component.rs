use std::{sync::Arc, time::Duration};

use dioxus::prelude::*;

use super::{
    gate::{DelayScheduler, LoadingGate},
    remote_data::RemoteData,
};

/// Renders one view per state of a [`RemoteData`].
///
/// - `Success(a)`: renders `success(a)`
/// - `Failure(e)`: renders `failure(e)`
/// - `Loading`: renders `loading(())`, but only once `delay` milliseconds have
///   elapsed since `Loading` was first rendered. Nothing is rendered before that,
///   so a response faster than `delay` never flashes a spinner.
/// - `NotAsked`: renders `not_asked(())`, or nothing if it is not provided
///
/// `did_mount` is called exactly once with the data present at that time. It runs
/// during the first render, before the returned view is mounted, so it must not
/// expect the view to exist yet.
///
/// # Type Parameters
///
/// * `E` - The failure payload
/// * `A` - The success value
///
/// # Parameters
///
/// * `data` - The current state; anything converting into a `RemoteData` is accepted
///   (a `Resource<Result<A, E>>`, a signal, ...)
/// * `success` - Renders the success value
/// * `failure` - Renders the failure payload
/// * `loading` - Renders the loading indicator
/// * `not_asked` - Renders the not-asked state
/// * `did_mount` - Mount hook, its result is ignored
/// * `delay` - Minimum time in milliseconds `Loading` must last before the loading
///   view shows up, `0` by default
///
/// # Examples
///
/// ```rust,no_run
/// use remote_view::prelude::*;
///
/// #[component]
/// fn Balance(balance: RemoteData<String, u64>) -> Element {
///     rsx! {
///         RemoteView::<String, u64> {
///             data: balance,
///             delay: 300,
///             success: |sat: u64| rsx! { span { "{sat} sat" } },
///             failure: |e: String| rsx! { span { class: "text-error", "{e}" } },
///             loading: |_: ()| rsx! { span { class: "skeleton", "..." } },
///             not_asked: |_: ()| rsx! { span { "Not synced yet" } },
///         }
///     }
/// }
/// ```
#[component]
pub fn RemoteView<E: Clone + PartialEq + 'static, A: Clone + PartialEq + 'static>(
    #[props(into)] data: RemoteData<E, A>,
    success: Callback<A, Element>,
    failure: Callback<E, Element>,
    loading: Callback<(), Element>,
    not_asked: Option<Callback<(), Element>>,
    did_mount: Option<Callback<RemoteData<E, A>>>,
    #[props(default)] delay: u64,
) -> Element {
    log::debug!("RemoteView Rendered: {}", data.state_name());

    let delay = Duration::from_millis(delay);
    let mut gate = use_hook(|| CopyValue::new(LoadingGate::<Task>::new(delay)));
    let update = use_hook(schedule_update);

    use_hook(|| {
        if let Some(did_mount) = did_mount {
            did_mount.call(data.clone());
        }
    });

    let drop_update = update.clone();
    use_drop(move || {
        log::debug!("RemoteView Dropped");
        let mut scheduler = TaskScheduler {
            gate,
            update: drop_update,
        };
        // The storage may already be gone if the whole runtime is shutting down
        if let Ok(mut g) = gate.try_write() {
            g.teardown(&mut scheduler);
        }
    });

    let mut scheduler = TaskScheduler { gate, update };
    match data {
        RemoteData::Success(a) => {
            gate.write().settle(&mut scheduler);
            success.call(a)
        }
        RemoteData::Failure(e) => {
            gate.write().settle(&mut scheduler);
            failure.call(e)
        }
        RemoteData::Loading => {
            let may_render = gate.write().render_loading(delay, &mut scheduler);
            if may_render {
                loading.call(())
            } else {
                rsx! {}
            }
        }
        RemoteData::NotAsked => match not_asked {
            Some(not_asked) => not_asked.call(()),
            None => rsx! {},
        },
    }
}

/// Runs the loading delay as a Dioxus task owned by the [`RemoteView`] scope.
struct TaskScheduler {
    gate: CopyValue<LoadingGate<Task>>,
    update: Arc<dyn Fn() + Send + Sync>,
}
impl DelayScheduler for TaskScheduler {
    type Handle = Task;

    fn schedule(&mut self, delay: Duration) -> Task {
        let mut gate = self.gate;
        let update = self.update.clone();
        spawn(async move {
            tokio::time::sleep(delay).await;
            gate.write().fire();
            update();
        })
    }

    fn cancel(&mut self, handle: Task) {
        handle.cancel();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use dioxus::dioxus_core::NoOpMutations;

    use super::*;

    thread_local! {
        static CALLS: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
    }
    fn record(call: impl Into<String>) {
        CALLS.with(|c| c.borrow_mut().push(call.into()));
    }
    fn take_calls() -> Vec<String> {
        CALLS.with(|c| c.take())
    }

    #[derive(Props, Clone, PartialEq)]
    struct HarnessProps {
        data: RemoteData<String, u32>,
        #[props(default)]
        delay: u64,
        #[props(default)]
        with_not_asked: bool,
    }

    #[allow(non_snake_case)]
    fn Harness(props: HarnessProps) -> Element {
        let not_asked = props.with_not_asked.then(|| {
            Callback::new(|_: ()| {
                record("not_asked");
                rsx! {
                    p { "idle" }
                }
            })
        });
        rsx! {
            RemoteView::<String, u32> {
                data: props.data.clone(),
                delay: props.delay,
                success: |n: u32| {
                    record(format!("success:{n}"));
                    rsx! {
                        p { "value {n}" }
                    }
                },
                failure: |e: String| {
                    record(format!("failure:{e}"));
                    rsx! {
                        p { "error {e}" }
                    }
                },
                loading: |_: ()| {
                    record("loading");
                    rsx! {
                        p { "loading" }
                    }
                },
                not_asked,
                did_mount: |d: RemoteData<String, u32>| record(format!("mount:{}", d.state_name())),
            }
        }
    }

    fn mount(data: RemoteData<String, u32>, delay: u64, with_not_asked: bool) -> VirtualDom {
        let mut dom = VirtualDom::new_with_props(
            Harness,
            HarnessProps {
                data,
                delay,
                with_not_asked,
            },
        );
        dom.rebuild_in_place();
        dom
    }

    #[test]
    fn dispatches_exactly_the_matching_callback() {
        let dom = mount(RemoteData::Success(42), 0, true);
        assert_eq!(dioxus_ssr::render(&dom), "<p>value 42</p>");
        assert_eq!(take_calls(), vec!["mount:Success", "success:42"]);

        let dom = mount(RemoteData::Failure("unreachable".into()), 0, true);
        assert_eq!(dioxus_ssr::render(&dom), "<p>error unreachable</p>");
        assert_eq!(take_calls(), vec!["mount:Failure", "failure:unreachable"]);

        let dom = mount(RemoteData::NotAsked, 0, true);
        assert_eq!(dioxus_ssr::render(&dom), "<p>idle</p>");
        assert_eq!(take_calls(), vec!["mount:NotAsked", "not_asked"]);

        let dom = mount(RemoteData::Loading, 0, true);
        assert_eq!(dioxus_ssr::render(&dom), "<p>loading</p>");
        assert_eq!(take_calls(), vec!["mount:Loading", "loading"]);
    }

    #[test]
    fn not_asked_without_callback_renders_nothing() {
        let dom = mount(RemoteData::NotAsked, 0, false);
        assert_eq!(dioxus_ssr::render(&dom), "");
        assert_eq!(take_calls(), vec!["mount:NotAsked"]);
    }

    #[tokio::test(start_paused = true)]
    async fn delayed_loading_view_appears_after_the_delay() {
        let mut dom = mount(RemoteData::Loading, 200, false);
        assert!(!dioxus_ssr::render(&dom).contains("<p>"));
        assert_eq!(take_calls(), vec!["mount:Loading"]);

        let started = tokio::time::Instant::now();
        tokio::time::timeout(Duration::from_secs(5), dom.wait_for_work())
            .await
            .expect("the delay timer should wake the component");
        dom.render_immediate(&mut NoOpMutations);

        assert!(started.elapsed() >= Duration::from_millis(200));
        assert_eq!(dioxus_ssr::render(&dom), "<p>loading</p>");
        // The mount hook does not run again on re-render
        assert_eq!(take_calls(), vec!["loading"]);
    }

    #[allow(non_snake_case)]
    fn FastResponse() -> Element {
        let mut data = use_signal(|| RemoteData::<String, u32>::Loading);
        use_future(move || async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            data.set(RemoteData::Success(7));
        });
        rsx! {
            RemoteView::<String, u32> {
                data,
                delay: 100,
                success: |n: u32| {
                    record(format!("success:{n}"));
                    rsx! {
                        p { "value {n}" }
                    }
                },
                failure: |e: String| rsx! {
                    p { "error {e}" }
                },
                loading: |_: ()| {
                    record("loading");
                    rsx! {
                        p { "loading" }
                    }
                },
            }
        }
    }

    #[tokio::test(start_paused = true)]
    async fn success_before_the_delay_cancels_the_loading_timer() {
        let mut dom = VirtualDom::new(FastResponse);
        dom.rebuild_in_place();
        assert!(!dioxus_ssr::render(&dom).contains("<p>"));

        tokio::time::timeout(Duration::from_secs(5), dom.wait_for_work())
            .await
            .expect("the response should arrive");
        dom.render_immediate(&mut NoOpMutations);
        assert_eq!(dioxus_ssr::render(&dom), "<p>value 7</p>");
        assert_eq!(take_calls(), vec!["success:7"]);

        // Well past the delay: a surviving timer would force one more render
        let _ = tokio::time::timeout(Duration::from_secs(1), dom.wait_for_work()).await;
        dom.render_immediate(&mut NoOpMutations);
        assert_eq!(dioxus_ssr::render(&dom), "<p>value 7</p>");
        assert!(take_calls().is_empty());
    }

    #[allow(non_snake_case)]
    fn UnmountedWhileLoading() -> Element {
        let mut shown = use_signal(|| true);
        use_future(move || async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            shown.set(false);
        });
        rsx! {
            if shown() {
                RemoteView::<String, u32> {
                    data: RemoteData::Loading,
                    delay: 100,
                    success: |n: u32| rsx! {
                        p { "value {n}" }
                    },
                    failure: |e: String| rsx! {
                        p { "error {e}" }
                    },
                    loading: |_: ()| {
                        record("loading");
                        rsx! {
                            p { "loading" }
                        }
                    },
                }
            }
        }
    }

    #[tokio::test(start_paused = true)]
    async fn unmount_cancels_the_loading_timer() {
        let mut dom = VirtualDom::new(UnmountedWhileLoading);
        dom.rebuild_in_place();

        tokio::time::timeout(Duration::from_secs(5), dom.wait_for_work())
            .await
            .expect("the parent should hide the view");
        dom.render_immediate(&mut NoOpMutations);

        // The 100ms timer died with the view: nothing left to wake the dom
        let more_work = tokio::time::timeout(Duration::from_millis(500), dom.wait_for_work()).await;
        assert!(more_work.is_err());
        dom.render_immediate(&mut NoOpMutations);
        assert!(take_calls().is_empty());
    }

    #[allow(non_snake_case)]
    fn BackToNotAsked() -> Element {
        let mut data = use_signal(|| RemoteData::<String, u32>::Loading);
        use_future(move || async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            data.set(RemoteData::NotAsked);
        });
        rsx! {
            RemoteView::<String, u32> {
                data,
                delay: 100,
                success: |n: u32| rsx! {
                    p { "value {n}" }
                },
                failure: |e: String| rsx! {
                    p { "error {e}" }
                },
                loading: |_: ()| {
                    record("loading");
                    rsx! {
                        p { "loading" }
                    }
                },
                not_asked: |_: ()| {
                    record("not_asked");
                    rsx! {
                        p { "idle" }
                    }
                },
            }
        }
    }

    #[tokio::test(start_paused = true)]
    async fn timer_left_pending_by_not_asked_still_fires_once() {
        let mut dom = VirtualDom::new(BackToNotAsked);
        dom.rebuild_in_place();
        assert!(take_calls().is_empty());

        tokio::time::timeout(Duration::from_secs(5), dom.wait_for_work())
            .await
            .expect("the data should go back to NotAsked");
        dom.render_immediate(&mut NoOpMutations);
        assert_eq!(dioxus_ssr::render(&dom), "<p>idle</p>");
        assert_eq!(take_calls(), vec!["not_asked"]);

        // NotAsked does not cancel the timer: it fires and re-renders one more time
        tokio::time::timeout(Duration::from_secs(5), dom.wait_for_work())
            .await
            .expect("the pending timer should still fire");
        dom.render_immediate(&mut NoOpMutations);
        assert_eq!(dioxus_ssr::render(&dom), "<p>idle</p>");
        assert_eq!(take_calls(), vec!["not_asked"]);

        let more_work = tokio::time::timeout(Duration::from_millis(500), dom.wait_for_work()).await;
        assert!(more_work.is_err());
    }
}
