use crate::bridge::{HostBridge, UserInfo};
use crate::domain::a001_upload_history::ui::list::{HistoryList, HistoryViewModel};
use crate::usecases::u501_file_upload::UploadPanel;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let bridge = HostBridge::detect();
    let user = match &bridge {
        Some(b) => {
            b.expand();
            b.user()
        }
        None => {
            log::warn!("Host WebApp bridge not found, running as a plain web page");
            None
        }
    };

    let history = HistoryViewModel::new(user.as_ref().and_then(|u| u.id));
    history.refresh();

    view! {
        <div class="container">
            <UserInfo user=user />
            <UploadPanel on_uploaded=Callback::new(move |_| history.refresh()) />
            <HistoryList vm=history />
        </div>
    }
}
