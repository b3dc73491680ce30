use dioxus::prelude::*;
use crate::components::icons::{AlertTriangleIcon, SearchIcon};
use crate::components::{ArtworkCard, ArtworkCardSkeleton, SearchInput};
use crate::services::artic::{ArticApi, Artwork, DEFAULT_LIMIT};
use crate::stores::search_session::{SearchSession, SearchView, SUGGESTIONS};
use crate::utils::{page_summary, results_count_label};

/// Placeholder for the gallery feature: log and tell the user
fn add_to_gallery(artwork: Artwork) {
    log::info!("Adding to gallery: {} ({})", artwork.title, artwork.id);

    let notice = format!(
        "\"{}\" will be added to gallery! (Feature coming soon)",
        artwork.title
    );
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.alert_with_message(&notice) {
            log::warn!("Failed to show notice: {:?}", e);
        }
    }
}

#[component]
pub fn Home() -> Element {
    let mut session = use_signal(SearchSession::new);

    let handle_search = use_callback(move |query: String| {
        let request = session.write().begin(&query);

        spawn(async move {
            let api = ArticApi::new();
            let outcome = request.execute(&api).await;
            session.write().complete(&query, outcome);
        });
    });

    let state = session.read();
    let is_loading = state.is_loading;
    let public_domain_only = state.public_domain_only;

    rsx! {
        div {
            class: "space-y-8",

            SearchInput {
                on_search: handle_search,
                is_loading: is_loading,
            }

            label {
                class: "flex items-center justify-center gap-2 text-sm text-muted-foreground cursor-pointer select-none",
                input {
                    r#type: "checkbox",
                    checked: public_domain_only,
                    disabled: is_loading,
                    onchange: move |evt| session.write().set_public_domain_only(evt.checked()),
                }
                "Public domain only"
            }

            match state.view() {
                SearchView::Empty => rsx! {
                    div {
                        class: "flex flex-col items-center text-center gap-3 py-12",
                        SearchIcon { class: "w-12 h-12 text-muted-foreground".to_string() }
                        h2 { class: "text-2xl font-semibold", "Start Your Art Journey" }
                        p { class: "text-muted-foreground", "Search for artworks by artist, style, or subject" }

                        div {
                            class: "mt-4 space-y-2",
                            p { class: "text-sm text-muted-foreground", "Try searching for:" }
                            div {
                                class: "flex flex-wrap justify-center gap-2",
                                for (query, label) in SUGGESTIONS {
                                    button {
                                        key: "{query}",
                                        class: "px-4 py-1.5 text-sm rounded-full border border-border hover:bg-muted transition",
                                        onclick: move |_| handle_search.call(query.to_string()),
                                        "{label}"
                                    }
                                }
                            }
                        }
                    }
                },

                SearchView::Loading => rsx! {
                    div {
                        class: "space-y-6",
                        p { class: "text-center text-muted-foreground animate-pulse", "Searching for artworks..." }
                        div {
                            class: "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-6",
                            for i in 0..DEFAULT_LIMIT {
                                ArtworkCardSkeleton { key: "{i}" }
                            }
                        }
                    }
                },

                SearchView::Error(message) => rsx! {
                    div {
                        class: "flex items-center justify-center gap-3 p-4 rounded-lg border border-red-500/30 bg-red-500/10 text-red-600",
                        AlertTriangleIcon { class: "w-5 h-5 flex-shrink-0".to_string() }
                        p { "{message}" }
                    }
                },

                SearchView::Results(artworks) => rsx! {
                    div {
                        class: "space-y-6",

                        div {
                            class: "flex flex-wrap items-baseline justify-between gap-2",
                            h2 {
                                class: "text-xl font-semibold",
                                "Search Results for \"{state.query}\""
                            }
                            p {
                                class: "text-sm text-muted-foreground",
                                "{results_count_label(artworks.len())}"
                                if let Some(summary) = page_summary(artworks.len(), state.total) {
                                    " · {summary}"
                                }
                            }
                        }

                        div {
                            class: "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-6",
                            for artwork in artworks.iter() {
                                ArtworkCard {
                                    key: "{artwork.id}",
                                    artwork: artwork.clone(),
                                    on_add_to_gallery: move |artwork: Artwork| add_to_gallery(artwork),
                                }
                            }
                        }
                    }
                },
            }
        }
    }
}
