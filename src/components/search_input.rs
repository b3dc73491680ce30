use dioxus::prelude::*;
use crate::components::icons::SearchIcon;

/// Query to submit for the current input text, if any
///
/// Whitespace-only text and submissions while a search is running are
/// swallowed.
pub fn submitted_query(text: &str, busy: bool) -> Option<String> {
    if busy {
        return None;
    }

    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct SearchInputProps {
    pub on_search: EventHandler<String>,
    #[props(default = false)]
    pub is_loading: bool,
}

#[component]
pub fn SearchInput(props: SearchInputProps) -> Element {
    let mut query = use_signal(|| String::new());
    let is_loading = props.is_loading;
    let on_search = props.on_search;

    let can_submit = !is_loading && !query.read().trim().is_empty();

    rsx! {
        div {
            class: "w-full max-w-2xl mx-auto",

            form {
                class: "relative flex items-center gap-2",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    if let Some(q) = submitted_query(&query.read(), is_loading) {
                        on_search.call(q);
                    }
                },

                input {
                    r#type: "text",
                    value: "{query}",
                    placeholder: "Search artworks (e.g., Monet, impressionism, landscapes...)",
                    aria_label: "Search artworks",
                    disabled: is_loading,
                    class: "w-full px-5 py-3 bg-muted border border-border rounded-full text-sm focus:outline-none focus:ring-2 focus:ring-primary disabled:opacity-50 disabled:cursor-not-allowed",
                    oninput: move |evt| query.set(evt.value()),
                }

                button {
                    r#type: "submit",
                    aria_label: "Search",
                    disabled: !can_submit,
                    class: "flex items-center gap-2 px-5 py-3 bg-primary text-primary-foreground rounded-full text-sm font-medium transition hover:opacity-90 disabled:opacity-50 disabled:cursor-not-allowed",

                    if is_loading {
                        span { class: "w-4 h-4 border-2 border-current border-t-transparent rounded-full animate-spin" }
                        "Searching..."
                    } else {
                        SearchIcon { class: "w-4 h-4".to_string() }
                        "Search"
                    }
                }
            }
        }
    }
}
