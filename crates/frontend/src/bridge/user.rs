use leptos::prelude::*;
use serde::Deserialize;

/// User identity from the host's `initDataUnsafe.user`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BridgeUser {
    #[serde(default)]
    pub id: Option<i64>,
    pub first_name: String,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
}

impl BridgeUser {
    pub fn greeting(&self) -> String {
        format!(
            "Welcome, {} {}",
            self.first_name,
            self.last_name.as_deref().unwrap_or("")
        )
        .trim_end()
        .to_string()
    }

    pub fn handle(&self) -> String {
        format!("Username: @{}", self.username.as_deref().unwrap_or("N/A"))
    }
}

/// Greeting block; renders nothing when the host did not share a user
#[component]
pub fn UserInfo(user: Option<BridgeUser>) -> impl IntoView {
    user.map(|u| {
        view! {
            <div class="user-info">
                <p>{u.greeting()}</p>
                <p>{u.handle()}</p>
            </div>
        }
    })
}
