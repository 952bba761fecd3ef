use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};

use quiz_core::model::Difficulty;
use services::HistoryQuery;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{HistoryCardVm, difficulty_class, map_history_cards};

const PAGE_SIZE: u32 = 10;

#[derive(Clone, Debug, PartialEq)]
struct HistoryData {
    cards: Vec<HistoryCardVm>,
    total: u64,
    page_count: u32,
}

#[component]
pub fn HistoryView() -> Element {
    let ctx = use_context::<AppContext>();
    let api = ctx.quiz_api();

    let mut page = use_signal(|| 1u32);
    let mut search = use_signal(String::new);
    let mut difficulty = use_signal(|| None::<Difficulty>);

    // Reading page/search/difficulty here makes them dependencies of the
    // resource: any change re-issues the listing request. Nothing is
    // cached across page changes.
    let mut resource = use_resource(move || {
        let api = api.clone();
        let query = HistoryQuery {
            page: page(),
            limit: PAGE_SIZE,
            search: Some(search()),
            difficulty: difficulty(),
        };
        async move {
            let listing = api
                .list_quizzes(&query)
                .await
                .map_err(|err| ViewError::from(&err))?;
            Ok(HistoryData {
                page_count: listing.page_count(),
                total: listing.total,
                cards: map_history_cards(&listing.quizzes),
            })
        }
    });
    let state = view_state_from_resource(&resource);

    let has_filter = !search().trim().is_empty() || difficulty().is_some();

    rsx! {
        div { class: "page page-history",
            h2 { "Quiz History" }
            p { class: "subtitle", "Review your previously generated quizzes and track your progress" }

            div { class: "card filters",
                input {
                    r#type: "text",
                    placeholder: "Search quizzes by title or topic...",
                    value: "{search}",
                    oninput: move |evt| {
                        search.set(evt.value());
                        page.set(1);
                    },
                }
                select {
                    onchange: move |evt| {
                        difficulty.set(evt.value().parse::<Difficulty>().ok());
                        page.set(1);
                    },
                    option { value: "", selected: difficulty().is_none(), "All Difficulties" }
                    option { value: "easy", selected: difficulty() == Some(Difficulty::Easy), "Easy" }
                    option { value: "medium", selected: difficulty() == Some(Difficulty::Medium), "Medium" }
                    option { value: "hard", selected: difficulty() == Some(Difficulty::Hard), "Hard" }
                }
            }

            match state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { class: "muted", "Loading quiz history..." }
                },
                ViewState::Error(err) => rsx! {
                    div { class: "banner banner-error",
                        p { "{err.message()}" }
                        button {
                            class: "btn",
                            onclick: move |_| resource.restart(),
                            "Retry"
                        }
                    }
                },
                ViewState::Ready(data) => rsx! {
                    if data.cards.is_empty() {
                        div { class: "card empty-state",
                            h3 { "No quizzes found" }
                            if has_filter {
                                p { "Try adjusting your search criteria" }
                            } else {
                                p { "Generate your first quiz to get started!" }
                                Link { class: "btn btn-primary", to: Route::Home {}, "Generate Quiz" }
                            }
                        }
                    } else {
                        ul { class: "history-list",
                            for card in data.cards {
                                HistoryCard { card }
                            }
                        }
                        if data.page_count > 1 {
                            div { class: "pagination",
                                button {
                                    class: "btn",
                                    disabled: page() <= 1,
                                    onclick: move |_| page.set(page().saturating_sub(1).max(1)),
                                    "Previous"
                                }
                                for page_num in 1..=data.page_count {
                                    button {
                                        class: if page() == page_num { "btn btn-primary" } else { "btn" },
                                        onclick: move |_| page.set(page_num),
                                        "{page_num}"
                                    }
                                }
                                button {
                                    class: "btn",
                                    disabled: page() >= data.page_count,
                                    onclick: move |_| page.set((page() + 1).min(data.page_count)),
                                    "Next"
                                }
                            }
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn HistoryCard(card: HistoryCardVm) -> Element {
    let navigator = use_navigator();
    let quiz_id = card.id.to_string();

    rsx! {
        li { class: "history-card",
            button {
                class: "history-link",
                onclick: move |_| {
                    navigator.push(Route::Quiz { quiz_id: quiz_id.clone() });
                },
                div { class: "history-card-head",
                    h3 { "{card.title}" }
                    span { class: difficulty_class(card.badge), "{card.badge.label()}" }
                }
                p { class: "summary", "{card.summary}" }
                p { class: "meta",
                    "{card.question_count} questions | {card.generated_at_str} | "
                    span { class: "count-easy", "{card.easy} easy " }
                    span { class: "count-medium", "{card.medium} medium " }
                    span { class: "count-hard", "{card.hard} hard" }
                }
            }
        }
    }
}
