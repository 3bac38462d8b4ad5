pub mod state;

use self::state::create_state;
use crate::domain::a001_supertag::api::fetch_supertags;
use crate::shared::config::use_api_config;
use crate::shared::icons::icon;
use crate::shared::list_utils::{get_sort_class, get_sort_indicator, sort_list, Sortable};
use crate::system::auth::context::use_auth;
use crate::usecases::u501_bulk_geotab::BulkGeotabModal;
use contracts::domain::a001_supertag::Supertag;
use leptos::prelude::*;
use std::cmp::Ordering;

#[derive(Clone, Debug)]
pub struct SupertagRow {
    pub mac_address: String,
    pub name: String,
    pub geotab_serial_number: String,
    pub area_name: String,
    pub last_seen: String,
    pub is_paired: bool,
}

impl From<Supertag> for SupertagRow {
    fn from(tag: Supertag) -> Self {
        Self {
            is_paired: tag.is_paired(),
            mac_address: tag.mac_address,
            name: tag.name,
            geotab_serial_number: tag.geotab_serial_number.unwrap_or_else(|| "-".to_string()),
            area_name: tag.area_name.unwrap_or_else(|| "-".to_string()),
            last_seen: tag
                .last_seen
                .map(format_timestamp)
                .unwrap_or_else(|| "-".to_string()),
        }
    }
}

fn format_timestamp(dt: chrono::DateTime<chrono::Utc>) -> String {
    dt.format("%Y-%m-%d %H:%M:%S").to_string()
}

impl Sortable for SupertagRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "mac_address" => self.mac_address.cmp(&other.mac_address),
            "name" => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
            "geotab_serial_number" => self
                .geotab_serial_number
                .cmp(&other.geotab_serial_number),
            "area_name" => self
                .area_name
                .to_lowercase()
                .cmp(&other.area_name.to_lowercase()),
            "last_seen" => self.last_seen.cmp(&other.last_seen),
            _ => Ordering::Equal,
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn SupertagList() -> impl IntoView {
    let (auth_state, _) = use_auth();
    let config = StoredValue::new(use_api_config());
    let state = create_state();
    let (items, set_items) = signal::<Vec<SupertagRow>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (show_bulk_modal, set_show_bulk_modal) = signal(false);

    let fetch = move || {
        let base_url = config.get_value().base_url;
        let Some(session) = auth_state.get_untracked().session else {
            return;
        };
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_supertags(&base_url, &session.token).await {
                Ok(tags) => {
                    let rows: Vec<SupertagRow> = tags.into_iter().map(Into::into).collect();
                    set_items.set(rows);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let toggle_sort = move |field: &'static str| {
        move |_| {
            state.update(|s| {
                if s.sort_field == field {
                    s.sort_ascending = !s.sort_ascending;
                } else {
                    s.sort_field = field.to_string();
                    s.sort_ascending = true;
                }
            });
        }
    };

    let sorted_items = move || {
        let mut items_vec = items.get();
        let s = state.get();
        sort_list(&mut items_vec, &s.sort_field, s.sort_ascending);
        items_vec
    };

    let paired_count = Signal::derive(move || items.get().iter().filter(|t| t.is_paired).count());

    fetch();

    view! {
        <div class="content">
            <div class="header">
                <h2>"Supertags"</h2>
                <div class="header__actions">
                    <button
                        class="button button--primary"
                        on:click=move |_| set_show_bulk_modal.set(true)
                    >
                        {icon("link")}
                        " Bulk Geotab pairing"
                    </button>
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        {icon("refresh")}
                        " Refresh"
                    </button>
                </div>
            </div>

            <div class="info-box">
                {move || format!(
                    "{} supertags, {} paired with Geotab",
                    items.get().len(),
                    paired_count.get()
                )}
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("mac_address")>
                                "MAC address"
                                <span class={move || get_sort_class(&state.get().sort_field, "mac_address")}>
                                    {move || get_sort_indicator(&state.get().sort_field, "mac_address", state.get().sort_ascending)}
                                </span>
                            </th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("name")>
                                "Name"
                                <span class={move || get_sort_class(&state.get().sort_field, "name")}>
                                    {move || get_sort_indicator(&state.get().sort_field, "name", state.get().sort_ascending)}
                                </span>
                            </th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("geotab_serial_number")>
                                "Geotab serial"
                                <span class={move || get_sort_class(&state.get().sort_field, "geotab_serial_number")}>
                                    {move || get_sort_indicator(&state.get().sort_field, "geotab_serial_number", state.get().sort_ascending)}
                                </span>
                            </th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("area_name")>
                                "Area"
                                <span class={move || get_sort_class(&state.get().sort_field, "area_name")}>
                                    {move || get_sort_indicator(&state.get().sort_field, "area_name", state.get().sort_ascending)}
                                </span>
                            </th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("last_seen")>
                                "Last seen"
                                <span class={move || get_sort_class(&state.get().sort_field, "last_seen")}>
                                    {move || get_sort_indicator(&state.get().sort_field, "last_seen", state.get().sort_ascending)}
                                </span>
                            </th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || sorted_items().into_iter().map(|row| {
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{row.mac_address}</td>
                                    <td class="table__cell">{row.name}</td>
                                    <td class="table__cell">
                                        {if row.is_paired {
                                            view! {
                                                <span class="badge badge--success">
                                                    {row.geotab_serial_number}
                                                </span>
                                            }.into_any()
                                        } else {
                                            view! { <span>{row.geotab_serial_number}</span> }.into_any()
                                        }}
                                    </td>
                                    <td class="table__cell">{row.area_name}</td>
                                    <td class="table__cell">{row.last_seen}</td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>

            <Show when=move || show_bulk_modal.get()>
                <BulkGeotabModal
                    on_close=Callback::new(move |_| set_show_bulk_modal.set(false))
                    on_complete=Callback::new(move |_| fetch())
                />
            </Show>
        </div>
    }
}
