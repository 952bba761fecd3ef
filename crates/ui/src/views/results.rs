use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};

use quiz_core::model::{QuestionResult, QuizId};

use crate::context::{AppContext, ResultHandoff};
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{format_score, score_class, score_message};

#[component]
pub fn ResultsView(quiz_id: String) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let api = ctx.quiz_api();
    let handoff = use_context::<Signal<Option<ResultHandoff>>>();

    let related_id = quiz_id.clone();
    let related = use_resource(move || {
        let api = api.clone();
        let id = QuizId::new(related_id.clone());
        async move {
            api.related_topics(&id)
                .await
                .map_err(|err| ViewError::from(&err))
        }
    });
    let related_state = view_state_from_resource(&related);

    // Results exist only as in-memory navigation state from a submission;
    // a direct load of this route has none.
    let current = handoff()
        .filter(|value| value.result.quiz_id == QuizId::new(quiz_id.clone()));
    let Some(ResultHandoff { quiz: _, result }) = current else {
        return rsx! {
            div { class: "page page-results",
                div { class: "card empty-state",
                    p { "No results found" }
                    Link { class: "btn btn-primary", to: Route::Home {}, "Go Home" }
                }
            }
        };
    };

    let retake_id = quiz_id.clone();

    rsx! {
        div { class: "page page-results",
            div { class: "results-head",
                Link { class: "back-link", to: Route::Home {}, "Back to Home" }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| {
                        navigator.push(Route::Quiz { quiz_id: retake_id.clone() });
                    },
                    "Retake Quiz"
                }
            }

            ScoreSummary {
                score: result.score,
                correct: result.correct_answers,
                total: result.total_questions,
                feedback: result.performance_feedback.clone(),
            }

            div { class: "card detailed-results",
                h3 { "Detailed Results" }
                ul {
                    for (index, item) in result.results.iter().enumerate() {
                        QuestionResultCard { index, item: item.clone() }
                    }
                }
            }

            if !result.suggested_topics.is_empty() {
                div { class: "card suggested-topics",
                    h3 { "Suggested Topics for Further Learning" }
                    ul {
                        for topic in result.suggested_topics.clone() {
                            li { "{topic}" }
                        }
                    }
                }
            }

            if let ViewState::Ready(topics) = related_state {
                if !topics.is_empty() {
                    div { class: "card related-topics",
                        h3 { "Related Topics" }
                        ul {
                            for topic in topics {
                                li { "{topic}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn ScoreSummary(score: f64, correct: u32, total: u32, feedback: String) -> Element {
    let incorrect = total.saturating_sub(correct);
    rsx! {
        div { class: "card score-summary",
            div { class: score_class(score), "{format_score(score)}" }
            p { class: "score-message", "{score_message(score)}" }
            p { class: "muted", "{correct} out of {total} questions correct" }
            div { class: "banner banner-info", p { "{feedback}" } }
            div { class: "score-counts",
                div { span { class: "count-correct", "{correct}" } span { "Correct" } }
                div { span { class: "count-incorrect", "{incorrect}" } span { "Incorrect" } }
                div { span { class: "count-total", "{total}" } span { "Total" } }
            }
        }
    }
}

#[component]
fn QuestionResultCard(index: usize, item: QuestionResult) -> Element {
    let number = index + 1;
    rsx! {
        li { class: "question-result",
            div { class: "question-result-head",
                span { class: "muted", "Question {number}" }
                if item.is_correct {
                    span { class: "verdict verdict-correct", "Correct" }
                } else {
                    span { class: "verdict verdict-incorrect", "Incorrect" }
                }
            }
            p {
                strong { "Your Answer: " }
                if item.user_answer.is_empty() {
                    "Not answered"
                } else {
                    "{item.user_answer}"
                }
            }
            if !item.is_correct {
                p {
                    strong { "Correct Answer: " }
                    "{item.correct_answer}"
                }
            }
            p { class: "explanation",
                strong { "Explanation: " }
                "{item.explanation}"
            }
        }
    }
}
