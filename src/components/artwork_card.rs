use dioxus::prelude::*;
use crate::components::icons::{CheckIcon, ImageIcon, PlusIcon};
use crate::routes::Route;
use crate::services::artic::{get_image_url, Artwork, DEFAULT_IMAGE_SIZE};

/// Which control fills a card's action slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAction {
    /// Caller supplied its own element
    Custom,
    /// Built-in "Add to Gallery" button
    AddToGallery,
    Hidden,
}

/// A custom action always wins; the default button needs both the flag and a callback.
pub fn card_action(has_custom: bool, show_add_button: bool, has_callback: bool) -> CardAction {
    if has_custom {
        CardAction::Custom
    } else if show_add_button && has_callback {
        CardAction::AddToGallery
    } else {
        CardAction::Hidden
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct ArtworkCardProps {
    pub artwork: Artwork,
    #[props(default)]
    pub on_add_to_gallery: Option<EventHandler<Artwork>>,
    #[props(default = true)]
    pub show_add_button: bool,
    /// Replaces the default add button when present
    #[props(default)]
    pub action: Option<Element>,
}

#[component]
pub fn ArtworkCard(props: ArtworkCardProps) -> Element {
    let ArtworkCardProps {
        artwork,
        on_add_to_gallery,
        show_add_button,
        action,
    } = props;

    let image_url = get_image_url(artwork.image_id.as_deref(), DEFAULT_IMAGE_SIZE);
    let artwork_for_add = artwork.clone();

    let action_slot = match card_action(action.is_some(), show_add_button, on_add_to_gallery.is_some()) {
        CardAction::Custom => action.unwrap_or_else(|| rsx! {}),
        CardAction::AddToGallery => rsx! {
            button {
                class: "w-full flex items-center justify-center gap-2 px-3 py-2 text-sm font-medium rounded-lg bg-primary text-primary-foreground hover:opacity-90 transition",
                aria_label: "Add {artwork.title} to gallery",
                onclick: move |_| {
                    if let Some(handler) = on_add_to_gallery {
                        handler.call(artwork_for_add.clone());
                    }
                },
                PlusIcon { class: "w-4 h-4".to_string() }
                "Add to Gallery"
            }
        },
        CardAction::Hidden => rsx! {},
    };

    rsx! {
        div {
            class: "flex flex-col bg-card border border-border rounded-lg overflow-hidden hover:shadow-lg transition",

            // Image
            div {
                class: "aspect-square bg-muted flex items-center justify-center overflow-hidden",
                if let Some(url) = image_url {
                    img {
                        src: "{url}",
                        alt: "{artwork.title}",
                        class: "w-full h-full object-cover",
                        loading: "lazy"
                    }
                } else {
                    div {
                        class: "flex flex-col items-center gap-2 text-muted-foreground",
                        ImageIcon { class: "w-10 h-10".to_string() }
                        p { class: "text-sm", "No image available" }
                    }
                }
            }

            // Info
            div {
                class: "flex flex-col flex-1 gap-1 p-4",

                Link {
                    to: Route::ArtworkDetail { id: artwork.id },
                    class: "font-semibold leading-snug hover:underline",
                    h3 { "{artwork.title}" }
                }

                p {
                    class: "text-sm text-muted-foreground",
                    "{artwork.artist_title}"
                }

                if let Some(date) = artwork.known_date() {
                    p { class: "text-xs text-muted-foreground", "{date}" }
                }

                if let Some(medium) = artwork.known_medium() {
                    p { class: "text-xs text-muted-foreground italic", "{medium}" }
                }

                if artwork.is_public_domain {
                    span {
                        class: "inline-flex items-center gap-1 self-start mt-1 px-2 py-0.5 text-xs font-medium rounded-full bg-green-500/10 text-green-600",
                        CheckIcon { class: "w-3 h-3".to_string() }
                        "Public Domain"
                    }
                }

                div {
                    class: "mt-auto pt-3",
                    {action_slot}
                }
            }
        }
    }
}

#[component]
pub fn ArtworkCardSkeleton() -> Element {
    rsx! {
        div {
            class: "flex flex-col border border-border rounded-lg overflow-hidden animate-pulse",
            div { class: "aspect-square bg-muted" }
            div {
                class: "p-4 space-y-2",
                div { class: "h-4 bg-muted rounded w-3/4" }
                div { class: "h-3 bg-muted rounded w-1/2" }
                div { class: "h-3 bg-muted rounded w-1/3" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_action_replaces_default() {
        assert_eq!(card_action(true, true, true), CardAction::Custom);
        assert_eq!(card_action(true, false, false), CardAction::Custom);
    }

    #[test]
    fn test_default_add_needs_callback() {
        assert_eq!(card_action(false, true, true), CardAction::AddToGallery);
        assert_eq!(card_action(false, true, false), CardAction::Hidden);
    }

    #[test]
    fn test_add_button_can_be_hidden() {
        assert_eq!(card_action(false, false, true), CardAction::Hidden);
    }
}
