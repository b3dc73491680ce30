use dioxus::prelude::*;

pub mod artwork_detail;
pub mod home;

use artwork_detail::ArtworkDetail;
use home::Home;

/// App routes
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/")]
        Home {},

        #[route("/artworks/:id")]
        ArtworkDetail { id: u64 },
}

#[component]
fn Layout() -> Element {
    rsx! {
        div {
            class: "min-h-screen flex flex-col bg-background text-foreground transition-colors",

            header {
                class: "py-10 px-4 text-center border-b border-border",
                Link {
                    to: Route::Home {},
                    h1 { class: "text-3xl md:text-4xl font-bold", "🎨 Art Institute Explorer" }
                }
                p {
                    class: "mt-2 text-muted-foreground",
                    "Discover and explore masterpieces from the Art Institute of Chicago"
                }
            }

            main {
                class: "flex-1 w-full max-w-6xl mx-auto px-4 py-8",
                Outlet::<Route> {}
            }

            footer {
                class: "py-6 text-center text-sm text-muted-foreground border-t border-border",
                p {
                    "Data provided by the "
                    a {
                        href: "https://www.artic.edu/",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        class: "underline hover:text-foreground",
                        "Art Institute of Chicago"
                    }
                }
            }
        }
    }
}
