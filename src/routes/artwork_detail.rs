use dioxus::prelude::*;
use crate::components::icons::{ArrowLeftIcon, CheckIcon, ImageIcon};
use crate::routes::Route;
use crate::services::artic::{get_image_url, ArticApi, Artwork, ArtworkSource, DETAIL_IMAGE_SIZE};

/// Label/value rows for the detail table, skipping empty values
fn detail_rows(artwork: &Artwork) -> Vec<(&'static str, String)> {
    [
        ("Artist", artwork.artist_title.as_str()),
        ("Date", artwork.date_display.as_str()),
        ("Medium", artwork.medium_display.as_str()),
        ("Dimensions", artwork.dimensions.as_str()),
        ("Type", artwork.artwork_type_title.as_str()),
        ("Department", artwork.department_title.as_str()),
        ("Credit", artwork.credit_line.as_str()),
    ]
    .into_iter()
    .filter(|(_, value)| !value.is_empty())
    .map(|(label, value)| (label, value.to_string()))
    .collect()
}

#[component]
pub fn ArtworkDetail(id: u64) -> Element {
    // Refetches whenever the route id changes
    let artwork = use_resource(use_reactive!(|id| async move {
        let api = ArticApi::new();
        api.artwork(id).await
    }));

    rsx! {
        div {
            class: "space-y-6",

            Link {
                to: Route::Home {},
                class: "inline-flex items-center gap-2 text-sm text-muted-foreground hover:text-foreground transition",
                ArrowLeftIcon { class: "w-4 h-4".to_string() }
                "Back to search"
            }

            match artwork.read_unchecked().as_ref() {
                None => rsx! {
                    div {
                        class: "grid md:grid-cols-2 gap-8 animate-pulse",
                        div { class: "aspect-square bg-muted rounded-lg" }
                        div {
                            class: "space-y-4",
                            div { class: "h-8 bg-muted rounded w-3/4" }
                            div { class: "h-4 bg-muted rounded w-1/2" }
                            div { class: "h-4 bg-muted rounded w-1/3" }
                        }
                    }
                },

                Some(Err(e)) => rsx! {
                    div {
                        class: "p-8 text-center border border-border rounded-lg",
                        ImageIcon { class: "w-12 h-12 text-muted-foreground mx-auto mb-4".to_string() }
                        h2 { class: "text-2xl font-bold mb-2", "Artwork not found" }
                        p { class: "text-muted-foreground", "{e}" }
                    }
                },

                Some(Ok(artwork)) => {
                    let image_url = get_image_url(artwork.image_id.as_deref(), DETAIL_IMAGE_SIZE);
                    let rows = detail_rows(artwork);

                    rsx! {
                        div {
                            class: "grid md:grid-cols-2 gap-8",

                            div {
                                class: "bg-muted rounded-lg overflow-hidden flex items-center justify-center min-h-64",
                                if let Some(url) = image_url {
                                    img {
                                        src: "{url}",
                                        alt: "{artwork.title}",
                                        class: "w-full h-auto object-contain"
                                    }
                                } else {
                                    div {
                                        class: "flex flex-col items-center gap-2 py-24 text-muted-foreground",
                                        ImageIcon { class: "w-16 h-16".to_string() }
                                        p { "No image available" }
                                    }
                                }
                            }

                            div {
                                class: "space-y-4",
                                h2 { class: "text-3xl font-bold", "{artwork.title}" }

                                if artwork.is_public_domain {
                                    span {
                                        class: "inline-flex items-center gap-1 px-2 py-0.5 text-xs font-medium rounded-full bg-green-500/10 text-green-600",
                                        CheckIcon { class: "w-3 h-3".to_string() }
                                        "Public Domain"
                                    }
                                }

                                dl {
                                    class: "divide-y divide-border",
                                    for (label, value) in rows {
                                        div {
                                            key: "{label}",
                                            class: "grid grid-cols-3 gap-4 py-2 text-sm",
                                            dt { class: "text-muted-foreground", "{label}" }
                                            dd { class: "col-span-2", "{value}" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::artic::schema::validate_artwork;
    use serde_json::json;

    #[test]
    fn test_rows_skip_empty_values() {
        let artwork = validate_artwork(json!({
            "id": 1,
            "title": "The Bedroom",
            "artist_title": "Vincent van Gogh",
            "credit_line": "Helen Birch Bartlett Memorial Collection"
        }))
        .unwrap();

        let labels: Vec<&str> = detail_rows(&artwork).iter().map(|(label, _)| *label).collect();
        assert_eq!(
            labels,
            vec!["Artist", "Date", "Medium", "Dimensions", "Credit"]
        );
    }
}
