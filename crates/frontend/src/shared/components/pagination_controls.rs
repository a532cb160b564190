use crate::domain::a001_upload_history::PageLink;
use leptos::prelude::*;

/// PaginationControls component - Previous, page numbers, Next
///
/// Renders nothing when `links` is empty.
#[component]
pub fn PaginationControls(
    /// Links to render, in order
    #[prop(into)]
    links: Signal<Vec<PageLink>>,

    /// Callback with the requested page (1-indexed, may be out of range)
    on_page_change: Callback<usize>,
) -> impl IntoView {
    view! {
        <ul class="pagination">
            {move || {
                links
                    .get()
                    .into_iter()
                    .map(|link| {
                        let class = if link.disabled {
                            "page-item disabled"
                        } else if link.active {
                            "page-item active"
                        } else {
                            "page-item"
                        };
                        let target = link.target;
                        view! {
                            <li class=class>
                                <a
                                    class="page-link"
                                    href="#"
                                    on:click=move |ev| {
                                        ev.prevent_default();
                                        on_page_change.run(target);
                                    }
                                >
                                    {link.label}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()
            }}
        </ul>
    }
}
