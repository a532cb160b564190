mod view_model;

pub use view_model::HistoryViewModel;

use contracts::domain::a001_upload_history::UploadHistoryRecord;
use leptos::prelude::*;

use crate::domain::a001_upload_history::state::{FilterDimension, HistoryTable, STATUS_OPTIONS};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::date_utils::format_session_date;
use crate::shared::icons::icon;
use crate::shared::number_format::format_file_size;

const COLUMN_COUNT: &str = "6";

#[derive(Clone, Debug)]
pub struct HistoryRow {
    pub id: String,
    pub date: String,
    pub employee: String,
    pub file_name: String,
    pub size: String,
    pub status: String,
}

impl From<&UploadHistoryRecord> for HistoryRow {
    fn from(r: &UploadHistoryRecord) -> Self {
        Self {
            id: r.id.clone(),
            date: format_session_date(&r.session_date),
            employee: r.employee_display().to_string(),
            file_name: r.original_name.clone(),
            size: format_file_size(r.file_size),
            status: r.validation_status.clone(),
        }
    }
}

fn employee_option(name: String, is_selected: bool) -> impl IntoView {
    let value = name.clone();
    view! { <option value=value selected=is_selected>{name}</option> }
}

enum TableBody {
    Error(String),
    Empty,
    Rows(Vec<HistoryRow>),
}

#[component]
#[allow(non_snake_case)]
pub fn HistoryList(vm: HistoryViewModel) -> impl IntoView {
    let body = move || {
        vm.state.with(|s| match s.table() {
            HistoryTable::Error(e) => TableBody::Error(e.to_string()),
            HistoryTable::Empty => TableBody::Empty,
            HistoryTable::Rows(rows) => TableBody::Rows(rows.into_iter().map(Into::into).collect()),
        })
    };

    let render_row = move |row: HistoryRow| {
        let id = row.id;
        view! {
            <tr>
                <td>{row.date}</td>
                <td>{row.employee}</td>
                <td>{row.file_name}</td>
                <td>{row.size}</td>
                <td>
                    <span class=format!("status-badge status-{}", row.status)>
                        {row.status.clone()}
                    </span>
                </td>
                <td>
                    <button class="action-btn" on:click=move |_| vm.view_details(&id)>
                        {icon("eye")}
                        " View"
                    </button>
                </td>
            </tr>
        }
    };

    let selected = move |dimension: FilterDimension| {
        vm.state
            .with(|s| s.filters().get(dimension).map(str::to_string))
            .unwrap_or_default()
    };

    view! {
        <div class="history">
            <div class="history__filters">
                <input
                    type="month"
                    class="form-control"
                    prop:value=move || selected(FilterDimension::Month)
                    on:change=move |ev| vm.set_filter(FilterDimension::Month, event_target_value(&ev))
                />
                <select
                    class="form-select"
                    prop:value=move || selected(FilterDimension::Employee)
                    on:change=move |ev| vm.set_filter(FilterDimension::Employee, event_target_value(&ev))
                >
                    <option value="">"All Employees"</option>
                    {move || {
                        let employees = vm.state.with(|s| s.employee_options().to_vec());
                        if employees.is_empty() {
                            view! { <option disabled=true>"No employees found"</option> }.into_any()
                        } else {
                            employees
                                .into_iter()
                                .map(|name| {
                                    let is_selected = selected(FilterDimension::Employee) == name;
                                    employee_option(name, is_selected)
                                })
                                .collect_view()
                                .into_any()
                        }
                    }}
                </select>
                <select
                    class="form-select"
                    prop:value=move || selected(FilterDimension::Status)
                    on:change=move |ev| vm.set_filter(FilterDimension::Status, event_target_value(&ev))
                >
                    <option value="">"All Statuses"</option>
                    {STATUS_OPTIONS
                        .iter()
                        .map(|&status| view! { <option value=status>{status}</option> })
                        .collect_view()}
                </select>
            </div>

            <table class="table">
                <thead>
                    <tr>
                        <th>"Date"</th>
                        <th>"Employee"</th>
                        <th>"File"</th>
                        <th>"Size"</th>
                        <th>"Status"</th>
                        <th>"Action"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || match body() {
                        TableBody::Error(e) => view! {
                            <tr>
                                <td colspan=COLUMN_COUNT class="text-danger text-center">{e}</td>
                            </tr>
                        }.into_any(),
                        TableBody::Empty => view! {
                            <tr>
                                <td colspan=COLUMN_COUNT class="text-center">"No records found"</td>
                            </tr>
                        }.into_any(),
                        TableBody::Rows(rows) => rows
                            .into_iter()
                            .map(render_row)
                            .collect_view()
                            .into_any(),
                    }}
                </tbody>
            </table>

            <PaginationControls
                links=Signal::derive(move || vm.state.with(|s| s.pagination()))
                on_page_change=Callback::new(move |page| vm.change_page(page))
            />
        </div>
    }
}
