use leptos::prelude::*;

use crate::bridge::{self, HostBridge};
use crate::domain::a001_upload_history::api;
use crate::domain::a001_upload_history::state::{FilterDimension, HistoryFilters, HistoryState};
use crate::domain::a001_upload_history::ui::details::details_popup;
use crate::shared::date_utils::current_month;

/// ViewModel for the upload history table
#[derive(Clone, Copy)]
pub struct HistoryViewModel {
    pub state: RwSignal<HistoryState>,
    user_id: Option<i64>,
}

impl HistoryViewModel {
    /// Starts filtered to the current month
    pub fn new(user_id: Option<i64>) -> Self {
        Self {
            state: RwSignal::new(HistoryState::new(HistoryFilters::for_month(current_month()))),
            user_id,
        }
    }

    /// Re-fetch the whole history. Responses to superseded requests are dropped.
    pub fn refresh(&self) {
        let state = self.state;
        let user_id = self.user_id;
        let Some(token) = state.try_update(|s| s.begin_fetch()) else {
            return;
        };

        wasm_bindgen_futures::spawn_local(async move {
            let result = api::fetch_history(user_id).await;
            match &result {
                Ok(records) => log::debug!("Received {} history records", records.len()),
                Err(e) => log::error!("{}", e),
            }
            let applied = state
                .try_update(|s| s.apply_fetch(token, result))
                .unwrap_or(false);
            if !applied {
                log::debug!("Dropped stale history response");
            }
        });
    }

    pub fn set_filter(&self, dimension: FilterDimension, value: String) {
        self.state.update(|s| s.set_filter(dimension, Some(value)));
    }

    pub fn change_page(&self, page: usize) {
        self.state.maybe_update(|s| s.change_page(page));
    }

    /// Show the record in a host popup; unknown ids do nothing
    pub fn view_details(&self, id: &str) {
        let Some(popup) = self
            .state
            .with_untracked(|s| s.record_by_id(id).map(details_popup))
        else {
            return;
        };
        bridge::show_popup(HostBridge::detect().as_ref(), popup);
    }
}
