use dioxus::prelude::*;

#[component]
pub fn LeaderboardView() -> Element {
    rsx! {
        div { class: "page placeholder",
            p { "Leaderboard - Coming Soon" }
        }
    }
}

#[component]
pub fn LearnView() -> Element {
    rsx! {
        div { class: "page placeholder",
            p { "Learn More - Coming Soon" }
        }
    }
}
