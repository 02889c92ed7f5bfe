//! The dashboard view-controller.
//!
//! Owns all client state. Local state is never the source of truth: every
//! successful mutation triggers an unconditional refetch of the writer list,
//! and the fetched envelope replaces local state wholesale. Concurrent
//! reloads race and the last response to land wins.

use crate::{
    api::{
        client::ApiClient,
        models::{ExportRequest, StatsUpdate, Writer, WriterData},
    },
    components::{
        add_writer_dialog::AddWriterDialog, export_panel::ExportPanel,
        notification::Toaster, update_stats_dialog::UpdateStatsDialog,
    },
    config,
    util::{download, fmt},
};
use gloo::dialogs::confirm;
use gloo::net::Error;
use log::{debug, error};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

const REPORT_FILE_NAME: &str = "writer-report.png";

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let toaster = use_context::<Toaster>().expect("ToastProvider wraps the app");

    let data = use_state(|| Option::<WriterData>::None);
    // Dialog visibility flags are independent, not mutually exclusive.
    let is_adding = use_state(|| false);
    let is_updating = use_state(|| false);
    let selected_writer = use_state(|| Option::<Writer>::None);

    let reload = {
        let data = data.clone();
        let toaster = toaster.clone();
        Callback::from(move |()| {
            let data = data.clone();
            let toaster = toaster.clone();
            spawn_local(async move {
                let client = ApiClient::new(config::api_base_url());
                let result = client.list_writers().await;
                if let Err(err) = &result {
                    error!("Failed to fetch writer data: {err}");
                    toaster.error("Failed to load writers");
                }
                // A failed fetch keeps the prior state on screen.
                data.set(apply_fetch((*data).clone(), result));
            });
        })
    };

    {
        let reload = reload.clone();
        use_effect_with((), move |_| {
            reload.emit(());
        });
    }

    let on_add_open = {
        let is_adding = is_adding.clone();
        Callback::from(move |_| is_adding.set(true))
    };
    let on_add_cancel = {
        let is_adding = is_adding.clone();
        Callback::from(move |()| is_adding.set(false))
    };
    let on_add_submit = {
        let is_adding = is_adding.clone();
        let reload = reload.clone();
        let toaster = toaster.clone();
        Callback::from(move |name: String| {
            let is_adding = is_adding.clone();
            let reload = reload.clone();
            let toaster = toaster.clone();
            spawn_local(async move {
                let client = ApiClient::new(config::api_base_url());
                let result = client.add_writer(&name).await;
                match &result {
                    Ok(()) => {
                        debug!("Added writer {name}");
                        // Closing unmounts the dialog and clears its input.
                        is_adding.set(false);
                    }
                    Err(err) => {
                        // Dialog stays open with the input intact for a retry.
                        error!("Failed to add writer: {err}");
                        toaster.error("Failed to add writer");
                    }
                }
                if mutation_reloads(&result) {
                    reload.emit(());
                }
            });
        })
    };

    let on_update_open = {
        let is_updating = is_updating.clone();
        let selected_writer = selected_writer.clone();
        Callback::from(move |writer: Writer| {
            selected_writer.set(Some(writer));
            is_updating.set(true);
        })
    };
    let on_update_cancel = {
        let is_updating = is_updating.clone();
        Callback::from(move |()| is_updating.set(false))
    };
    let on_update_submit = {
        let is_updating = is_updating.clone();
        let selected_writer = selected_writer.clone();
        let reload = reload.clone();
        let toaster = toaster.clone();
        Callback::from(move |update: StatsUpdate| {
            let Some(writer) = (*selected_writer).clone() else {
                return;
            };
            // The dialog closes on submit regardless of the request outcome.
            is_updating.set(false);
            let reload = reload.clone();
            let toaster = toaster.clone();
            spawn_local(async move {
                let client = ApiClient::new(config::api_base_url());
                let result = client.update_stats(&writer.id, update).await;
                match &result {
                    Ok(()) => debug!("Updated stats for writer {}", writer.id),
                    Err(err) => {
                        error!("Failed to update stats for writer {}: {err}", writer.id);
                        toaster.error("Failed to update writer stats");
                    }
                }
                if mutation_reloads(&result) {
                    reload.emit(());
                }
            });
        })
    };

    let on_delete = {
        let reload = reload.clone();
        let toaster = toaster.clone();
        Callback::from(move |writer: Writer| {
            let answer = confirm("Are you sure you want to delete this writer?");
            if delete_decision(answer) == DeleteDecision::Abort {
                return;
            }
            let reload = reload.clone();
            let toaster = toaster.clone();
            spawn_local(async move {
                let client = ApiClient::new(config::api_base_url());
                let result = client.delete_writer(&writer.id).await;
                match &result {
                    Ok(()) => debug!("Deleted writer {}", writer.id),
                    Err(err) => {
                        error!("Failed to delete writer {}: {err}", writer.id);
                        toaster.error("Failed to delete writer");
                    }
                }
                if mutation_reloads(&result) {
                    reload.emit(());
                }
            });
        })
    };

    let on_export = {
        let toaster = toaster.clone();
        Callback::from(move |request: ExportRequest| {
            let toaster = toaster.clone();
            spawn_local(async move {
                let client = ApiClient::new(config::api_base_url());
                match client.export_report(request).await {
                    Ok(bytes) => {
                        if let Err(err) = download::save_bytes(&bytes, REPORT_FILE_NAME) {
                            error!("Failed to save report: {err:?}");
                            toaster.error("Failed to save the report");
                        } else {
                            toaster.success("Report exported");
                        }
                    }
                    Err(err) => {
                        error!("Failed to export report: {err}");
                        toaster.error("Failed to export report");
                    }
                }
            });
        })
    };

    // No partial table before the first successful load.
    let Some(writer_data) = &*data else {
        return html! { <div class="loading">{"Loading..."}</div> };
    };
    let WriterData { writers, summary } = writer_data;

    let update_dialog_writer = if *is_updating {
        (*selected_writer).clone()
    } else {
        None
    };

    let tiles = [
        ("Total Writers", summary.total_writers.to_string()),
        ("Total Articles", summary.total_articles.to_string()),
        ("Total Views", fmt::format_count(summary.total_views)),
        (
            "Avg Views/Article",
            fmt::format_average(summary.avg_views_per_article),
        ),
    ];

    html! {
        <div class="dashboard">
            <div class="dashboard-header">
                <h1>{"Writer Reports"}</h1>
                <button class="button-primary" onclick={on_add_open}>{"Add Writer"}</button>
            </div>

            <ExportPanel {on_export} />

            <div class="summary-tiles">
                { for tiles.iter().map(|(label, value)| html! {
                    <div class="summary-tile" key={*label}>
                        <dt>{ *label }</dt>
                        <dd>{ value.clone() }</dd>
                    </div>
                })}
            </div>

            // Narrow viewports get cards, wide viewports the table; the CSS
            // media query toggles between them.
            <div class="writer-cards">
                { for writers.iter().enumerate().map(|(index, writer)| {
                    let on_update_open = on_update_open.clone();
                    let on_delete = on_delete.clone();
                    let update_target = writer.clone();
                    let delete_target = writer.clone();
                    html! {
                        <div class="writer-card" key={writer.id.clone()}>
                            <div class="writer-card-header">
                                <span class="writer-card-name">{ row_title(index, &writer.name) }</span>
                                <div class="writer-card-actions">
                                    <button
                                        class="link-button"
                                        onclick={Callback::from(move |_| on_update_open.emit(update_target.clone()))}
                                    >
                                        {"Update"}
                                    </button>
                                    <button
                                        class="link-button link-button-danger"
                                        onclick={Callback::from(move |_| on_delete.emit(delete_target.clone()))}
                                    >
                                        {"Delete"}
                                    </button>
                                </div>
                            </div>
                            <div class="writer-card-stats">
                                <div>
                                    <span class="stat-label">{"Articles"}</span>
                                    <span>{ writer.articles.to_string() }</span>
                                </div>
                                <div>
                                    <span class="stat-label">{"Views"}</span>
                                    <span>{ fmt::format_count(writer.views) }</span>
                                </div>
                                <div>
                                    <span class="stat-label">{"Avg Views"}</span>
                                    <span>{ fmt::format_average(writer.avg_views) }</span>
                                </div>
                            </div>
                        </div>
                    }
                })}
            </div>

            <table class="writer-table">
                <thead>
                    <tr>
                        <th>{"Writer"}</th>
                        <th>{"Articles"}</th>
                        <th>{"Views"}</th>
                        <th>{"Avg Views"}</th>
                        <th class="actions">{"Actions"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for writers.iter().enumerate().map(|(index, writer)| {
                        let on_update_open = on_update_open.clone();
                        let on_delete = on_delete.clone();
                        let update_target = writer.clone();
                        let delete_target = writer.clone();
                        html! {
                            <tr key={writer.id.clone()}>
                                <td>{ row_title(index, &writer.name) }</td>
                                <td>{ writer.articles.to_string() }</td>
                                <td>{ fmt::format_count(writer.views) }</td>
                                <td>{ fmt::format_average(writer.avg_views) }</td>
                                <td class="actions">
                                    <button
                                        class="link-button"
                                        onclick={Callback::from(move |_| on_update_open.emit(update_target.clone()))}
                                    >
                                        {"Update"}
                                    </button>
                                    <button
                                        class="link-button link-button-danger"
                                        onclick={Callback::from(move |_| on_delete.emit(delete_target.clone()))}
                                    >
                                        {"Delete"}
                                    </button>
                                </td>
                            </tr>
                        }
                    })}
                </tbody>
            </table>

            if let Some(writer) = update_dialog_writer {
                <UpdateStatsDialog
                    {writer}
                    on_submit={on_update_submit}
                    on_cancel={on_update_cancel}
                />
            }
            if *is_adding {
                <AddWriterDialog on_submit={on_add_submit} on_cancel={on_add_cancel} />
            }
        </div>
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DeleteDecision {
    Send,
    Abort,
}

/// Declining the blocking confirm aborts before any request is built.
fn delete_decision(confirmed: bool) -> DeleteDecision {
    if confirmed {
        DeleteDecision::Send
    } else {
        DeleteDecision::Abort
    }
}

/// A finished mutation schedules exactly one list reload, and only when the
/// request succeeded.
fn mutation_reloads(result: &Result<(), Error>) -> bool {
    result.is_ok()
}

/// Applies a finished list fetch. Success replaces the state wholesale,
/// failure keeps whatever was loaded before.
fn apply_fetch(
    current: Option<WriterData>,
    fetched: Result<WriterData, Error>,
) -> Option<WriterData> {
    match fetched {
        Ok(fresh) => Some(fresh),
        Err(_) => current,
    }
}

/// 1-based display label shared by the table and the card layout.
fn row_title(index: usize, name: &str) -> String {
    format!("{}. {}", index + 1, name)
}

#[cfg(test)]
mod tests {
    use super::{DeleteDecision, apply_fetch, delete_decision, mutation_reloads, row_title};
    use crate::api::models::{Summary, Writer, WriterData};
    use gloo::net::Error;

    fn sample_data() -> WriterData {
        WriterData {
            writers: vec![Writer {
                id: "42".to_string(),
                name: "Jane Doe".to_string(),
                articles: 10,
                views: 5000,
                avg_views: 500.0,
            }],
            summary: Summary {
                total_writers: 1,
                total_articles: 10,
                total_views: 5000,
                avg_views_per_article: 500.0,
            },
        }
    }

    #[test]
    fn declining_the_confirm_aborts_the_delete() {
        assert_eq!(delete_decision(false), DeleteDecision::Abort);
        assert_eq!(delete_decision(true), DeleteDecision::Send);
    }

    #[test]
    fn only_successful_mutations_trigger_a_reload() {
        assert!(mutation_reloads(&Ok(())));
        assert!(!mutation_reloads(&Err(Error::GlooError(
            "server responded with 500".to_string()
        ))));
    }

    #[test]
    fn failed_fetch_keeps_prior_data() {
        let prior = sample_data();
        let after = apply_fetch(
            Some(prior.clone()),
            Err(Error::GlooError("network error".to_string())),
        );
        assert_eq!(after, Some(prior));
    }

    #[test]
    fn successful_fetch_replaces_state_wholesale() {
        let first = sample_data();
        assert_eq!(apply_fetch(None, Ok(first.clone())), Some(first.clone()));

        let mut second = sample_data();
        second.writers.clear();
        second.summary.total_writers = 0;
        assert_eq!(apply_fetch(Some(first), Ok(second.clone())), Some(second));
    }

    #[test]
    fn rows_are_labelled_with_a_one_based_index() {
        assert_eq!(row_title(0, "Jane Doe"), "1. Jane Doe");
        assert_eq!(row_title(2, "John Roe"), "3. John Roe");
    }
}
