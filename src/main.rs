#![windows_subsystem = "windows"]

use std::time::Duration;

use remote_view::prelude::*;

static TITLE: &'static str = "Remote View Demo";

/// Delay before the loading view shows up
const LOADING_DELAY_MS: u64 = 500;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Scenario {
    Fast,
    Slow,
    Failing,
}
impl Scenario {
    fn latency(self) -> Duration {
        match self {
            Scenario::Fast => Duration::from_millis(LOADING_DELAY_MS / 5),
            Scenario::Slow | Scenario::Failing => Duration::from_millis(LOADING_DELAY_MS * 4),
        }
    }
}

async fn simulated_request(scenario: Scenario) -> Result<u64, String> {
    tokio::time::sleep(scenario.latency()).await;
    match scenario {
        Scenario::Fast => Ok(21),
        Scenario::Slow => Ok(2_100_000_000_000_000),
        Scenario::Failing => Err(log_error("the remote end did not answer")),
    }
}

#[allow(non_snake_case)]
fn App() -> Element {
    log::debug!("App reload");

    let mut data = use_signal(RemoteData::<String, u64>::default);
    let mut in_flight: Signal<Option<Task>> = use_signal(|| None);

    let mut run = move |scenario: Scenario| {
        if let Some(previous) = in_flight.take() {
            previous.cancel();
        }
        log::info!("running scenario {scenario:?}");
        data.set(RemoteData::Loading);
        let task = spawn(async move {
            data.set(simulated_request(scenario).await.into());
            in_flight.set(None);
        });
        in_flight.set(Some(task));
    };

    use_drop(|| log::debug!("App Dropped"));

    rsx! {
        document::Title { "{TITLE}" }
        div { id: "app", style: "font-family: sans-serif; padding: 2rem;",
            h1 { "{TITLE}" }
            p { "The loading view only shows up if a request lasts more than {LOADING_DELAY_MS}ms." }
            div { style: "display: flex; gap: 0.5rem; margin-bottom: 1rem;",
                button { onclick: move |_| run(Scenario::Fast), "Fast request" }
                button { onclick: move |_| run(Scenario::Slow), "Slow request" }
                button { onclick: move |_| run(Scenario::Failing), "Failing request" }
                button {
                    onclick: move |_| {
                        if let Some(previous) = in_flight.take() {
                            previous.cancel();
                        }
                        data.set(RemoteData::NotAsked);
                    },
                    "Reset"
                }
            }
            RemoteView::<String, u64> {
                data,
                delay: LOADING_DELAY_MS,
                success: |sat: u64| rsx! {
                    p { style: "color: green;", "Balance: {sat} sat" }
                },
                failure: |e: String| rsx! {
                    p { style: "color: red;", "Error: {e}" }
                },
                loading: |_: ()| rsx! {
                    p { style: "color: gray;", "Loading..." }
                },
                not_asked: |_: ()| rsx! {
                    p { "Pick a request above." }
                },
                did_mount: |d: RemoteData<String, u64>| log::info!("RemoteView mounted in state {}", d.state_name()),
            }
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_micros()
        .init();

    log::info!("starting demo");
    use dioxus::desktop::{Config, WindowBuilder};
    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_menu(None).with_window(
                WindowBuilder::new()
                    .with_title(TITLE)
                    .with_inner_size(dioxus::desktop::LogicalSize::new(800, 600))
                    .with_resizable(true),
            ),
        )
        .launch(App)
}
