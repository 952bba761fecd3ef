use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{
    HistoryView, HomeView, LearnView, LeaderboardView, QuizView, ResultsView,
};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/history", HistoryView)] History {},
        #[route("/quiz/:quiz_id", QuizView)] Quiz { quiz_id: String },
        #[route("/results/:quiz_id", ResultsView)] Results { quiz_id: String },
        #[route("/leaderboard", LeaderboardView)] Leaderboard {},
        #[route("/learn", LearnView)] Learn {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Header {}
            Navigation {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Header() -> Element {
    rsx! {
        header { class: "header",
            div { class: "brand",
                h1 { "AI Wiki Quiz Generator" }
                p { class: "tagline", "Transform Wikipedia articles into interactive quizzes" }
            }
        }
    }
}

#[component]
fn Navigation() -> Element {
    rsx! {
        nav { class: "tabs",
            ul {
                li { Link { to: Route::Home {}, "Generate Quiz" } }
                li { Link { to: Route::History {}, "Quiz History" } }
                li { Link { to: Route::Leaderboard {}, "Leaderboard" } }
                li { Link { to: Route::Learn {}, "Learn More" } }
            }
        }
    }
}
