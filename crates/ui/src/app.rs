use dioxus::prelude::*;
use dioxus_router::Router;

use crate::context::ResultHandoff;
use crate::routes::Route;

#[component]
pub fn App() -> Element {
    // Submission results travel between routes through this slot only;
    // they have no client-side persistence.
    use_context_provider(|| Signal::new(None::<ResultHandoff>));

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        // Stable OS/window title. Per-route headings live in the views.
        document::Title { "Wiki Quiz" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                Router::<Route> {}
            }
        }
    }
}
