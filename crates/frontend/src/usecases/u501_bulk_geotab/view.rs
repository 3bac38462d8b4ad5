use super::api::HttpGeotabClient;
use super::executor::run_bulk_operation;
use crate::shared::api_utils::truncate_error;
use crate::shared::config::use_api_config;
use crate::shared::csv_importer::parser::{parse_rows, read_csv_from_file};
use crate::shared::csv_importer::CsvTable;
use crate::shared::export::download_sample;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use crate::system::auth::context::use_auth;
use contracts::usecases::u501_bulk_geotab::{
    BatchProgress, BatchSummary, OperationMode, OperationResult,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;
use wasm_bindgen::JsCast;

#[component]
pub fn BulkGeotabModal(
    /// Callback when the modal should close
    on_close: Callback<()>,
    /// Fired after the last row settles; the host refreshes its listing
    on_complete: Callback<()>,
) -> impl IntoView {
    let (auth_state, _) = use_auth();
    let config = StoredValue::new(use_api_config());

    let (mode, set_mode) = signal(OperationMode::Pair);
    let (table, set_table) = signal(Option::<CsvTable>::None);
    let (parse_error, set_parse_error) = signal(Option::<String>::None);
    let (validation_error, set_validation_error) = signal(Option::<String>::None);
    let (is_running, set_is_running) = signal(false);
    let (progress, set_progress) = signal(Option::<BatchProgress>::None);
    let (results, set_results) = signal(Vec::<OperationResult>::new());
    let (summary, set_summary) = signal(Option::<BatchSummary>::None);
    let (drag_over, set_drag_over) = signal(false);

    let accept_file = move |file: web_sys::File| {
        set_parse_error.set(None);
        set_validation_error.set(None);
        set_table.set(None);
        set_results.set(Vec::new());
        set_progress.set(None);
        set_summary.set(None);

        spawn_local(async move {
            let file_name = file.name();
            match read_csv_from_file(file).await {
                Ok(text) => match CsvTable::from_raw(parse_rows(&text), file_name) {
                    Ok(t) => set_table.set(Some(t)),
                    Err(e) => set_parse_error.set(Some(e)),
                },
                Err(e) => set_parse_error.set(Some(e)),
            }
        });
    };

    let handle_file_select = move |ev: web_sys::Event| {
        let input = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok());

        if let Some(input) = input {
            if let Some(files) = input.files() {
                if let Some(file) = files.get(0) {
                    accept_file(file);
                }
            }
        }
    };

    let handle_drag_over = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        if !is_running.get() {
            set_drag_over.set(true);
        }
    };

    let handle_drag_leave = move |_: leptos::ev::DragEvent| {
        set_drag_over.set(false);
    };

    let handle_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        set_drag_over.set(false);
        if is_running.get() {
            return;
        }
        if let Some(data_transfer) = ev.data_transfer() {
            if let Some(files) = data_transfer.files() {
                if let Some(file) = files.get(0) {
                    accept_file(file);
                }
            }
        }
    };

    let start_disabled = Signal::derive(move || {
        is_running.get() || table.get().is_none() || !auth_state.get().has_token()
    });

    let on_start = move |_| {
        let Some(t) = table.get() else {
            return;
        };
        // Precondition: without a token the run is simply not started.
        let Some(session) = auth_state.get().session else {
            return;
        };
        if !session.has_token() {
            return;
        }

        let run_mode = mode.get();

        set_is_running.set(true);
        set_validation_error.set(None);
        set_results.set(Vec::new());
        set_progress.set(None);
        set_summary.set(None);

        let base_url = config.get_value().base_url;
        spawn_local(async move {
            let client = HttpGeotabClient::new(base_url, session.token.clone());
            let outcome = run_bulk_operation(&client, &t, run_mode, &session, |p, snapshot| {
                set_progress.set(Some(p));
                set_results.set(snapshot.to_vec());
            })
            .await;

            match outcome {
                Ok(s) => {
                    set_summary.set(Some(s));
                    on_complete.run(());
                }
                Err(e) => {
                    // Batch-level validation: blocking message, zero rows touched.
                    let message = e.to_string();
                    if let Some(window) = web_sys::window() {
                        let _ = window.alert_with_message(&message);
                    }
                    set_validation_error.set(Some(message));
                }
            }
            set_is_running.set(false);
        });
    };

    let success_count = Signal::derive(move || results.get().iter().filter(|r| r.success).count());
    let failure_count = Signal::derive(move || results.get().iter().filter(|r| !r.success).count());

    view! {
        <Modal
            title="Bulk Geotab pairing".to_string()
            on_close=on_close
            close_disabled=Signal::derive(move || is_running.get())
        >
            <div class="csv-importer">
                <div class="form__group">
                    <label class="form__label">"Operation:"</label>
                    <div class="csv-importer__modes">
                        <label class="form__radio-wrapper">
                            <input
                                class="form__radio"
                                type="radio"
                                name="bulk-geotab-mode"
                                prop:checked=move || mode.get() == OperationMode::Pair
                                prop:disabled=move || is_running.get()
                                on:change=move |_| set_mode.set(OperationMode::Pair)
                            />
                            <span>"Pair with Geotab"</span>
                        </label>
                        <label class="form__radio-wrapper">
                            <input
                                class="form__radio"
                                type="radio"
                                name="bulk-geotab-mode"
                                prop:checked=move || mode.get() == OperationMode::Unpair
                                prop:disabled=move || is_running.get()
                                on:change=move |_| set_mode.set(OperationMode::Unpair)
                            />
                            <span>"Unpair from Geotab"</span>
                        </label>
                    </div>
                    <div class="info-box">
                        {move || format!(
                            "Required columns: {}",
                            mode.get().required_columns().join(", ")
                        )}
                    </div>
                </div>

                <div
                    class="csv-importer__dropzone"
                    class:csv-importer__dropzone--active=move || drag_over.get()
                    on:dragover=handle_drag_over
                    on:dragleave=handle_drag_leave
                    on:drop=handle_drop
                >
                    <div class="csv-importer__dropzone-hint">
                        {icon("upload")}
                        " Drop a CSV file here, or"
                    </div>
                    <label class="button button--primary csv-importer__file-btn" for="csv-file-input">
                        {icon("file")}
                        " Choose file"
                    </label>
                    <input
                        id="csv-file-input"
                        type="file"
                        accept=".csv"
                        on:change=handle_file_select
                        prop:disabled=move || is_running.get()
                        class="hidden"
                    />
                    {move || if let Some(t) = table.get() {
                        view! {
                            <span class="csv-importer__fileinfo">
                                <strong>{t.file_name.clone()}</strong>
                                {format!(" ({} rows)", t.row_count())}
                            </span>
                        }.into_any()
                    } else {
                        view! {
                            <span class="csv-importer__filehint">"No file selected"</span>
                        }.into_any()
                    }}
                </div>

                <div class="csv-importer__samples">
                    <button
                        class="button button--secondary"
                        on:click=move |_| {
                            if let Err(e) = download_sample(OperationMode::Pair) {
                                log::error!("sample download failed: {}", e);
                            }
                        }
                    >
                        {icon("download")}
                        " Pair sample CSV"
                    </button>
                    <button
                        class="button button--secondary"
                        on:click=move |_| {
                            if let Err(e) = download_sample(OperationMode::Unpair) {
                                log::error!("sample download failed: {}", e);
                            }
                        }
                    >
                        {icon("download")}
                        " Unpair sample CSV"
                    </button>
                </div>

                {move || parse_error.get().map(|e| {
                    view! {
                        <div class="warning-box warning-box--error">
                            <span class="warning-box__icon">"⚠"</span>
                            <span class="warning-box__text">{e}</span>
                        </div>
                    }
                })}

                {move || validation_error.get().map(|e| {
                    view! {
                        <div class="warning-box warning-box--error">
                            <span class="warning-box__icon">"⚠"</span>
                            <span class="warning-box__text">{e}</span>
                        </div>
                    }
                })}

                <div class="csv-importer__actions">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=on_start
                        disabled=start_disabled
                    >
                        {icon("upload")}
                        {move || {
                            let label = match mode.get() {
                                OperationMode::Pair => "Pair",
                                OperationMode::Unpair => "Unpair",
                            };
                            if let Some(t) = table.get() {
                                format!(" {} {} rows", label, t.row_count())
                            } else {
                                format!(" {}", label)
                            }
                        }}
                    </Button>
                    <Show when=move || is_running.get()>
                        <Space gap=SpaceGap::Small>
                            <Spinner />
                            <span style="color: var(--color-text-tertiary);">"Processing..."</span>
                        </Space>
                    </Show>
                </div>

                {move || progress.get().map(|p| {
                    let percent = p.percent();
                    view! {
                        <div class="csv-importer__progress">
                            <div class="csv-importer__progress-meta">
                                {p.current} " / " {p.total}
                            </div>
                            <div style="height: 16px; border-radius: var(--radius-sm); background: var(--color-neutral-200); overflow: hidden;">
                                <div style={format!(
                                    "width: {}%; height: 100%; background: var(--color-primary); transition: width 0.3s ease;",
                                    percent
                                )}></div>
                            </div>
                        </div>
                    }
                })}

                {move || summary.get().map(|s| {
                    let secs = (s.finished_at - s.started_at).num_seconds();
                    let elapsed = format!("{:02}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60);
                    view! {
                        <div class="info-box">
                            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                                <Space gap=SpaceGap::Small>
                                    {if s.failed == 0 {
                                        view! {
                                            <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Success>
                                                "Completed"
                                            </Badge>
                                        }.into_any()
                                    } else {
                                        view! {
                                            <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Danger>
                                                "Completed with errors"
                                            </Badge>
                                        }.into_any()
                                    }}
                                    <span>{format!("{} ok / {} failed", s.succeeded, s.failed)}</span>
                                </Space>
                                <span style="color: var(--color-text-muted); font-size: var(--font-size-xs);">
                                    {format!("Elapsed: {}", elapsed)}
                                </span>
                            </Flex>
                        </div>
                    }
                })}

                <Show when=move || !results.get().is_empty()>
                    <div class="csv-importer__results">
                        <div class="csv-importer__results-header">
                            <span class="csv-importer__count csv-importer__count--ok">
                                {icon("check")}
                                {move || format!(" {}", success_count.get())}
                            </span>
                            <span class="csv-importer__count csv-importer__count--failed">
                                {icon("x")}
                                {move || format!(" {}", failure_count.get())}
                            </span>
                        </div>
                        <ul class="csv-importer__result-list">
                            {move || results.get().into_iter().map(|r| {
                                let row_class = if r.success {
                                    "csv-importer__result csv-importer__result--ok"
                                } else {
                                    "csv-importer__result csv-importer__result--failed"
                                };
                                view! {
                                    <li class=row_class>
                                        <span class="csv-importer__result-icon">
                                            {icon(if r.success { "check" } else { "x" })}
                                        </span>
                                        <span class="csv-importer__result-mac">{r.mac_address.clone()}</span>
                                        {r.error.as_deref().map(|e| view! {
                                            <span class="csv-importer__result-error">
                                                {truncate_error(e, 120)}
                                            </span>
                                        })}
                                    </li>
                                }
                            }).collect_view()}
                        </ul>
                    </div>
                </Show>
            </div>
        </Modal>
    }
}
