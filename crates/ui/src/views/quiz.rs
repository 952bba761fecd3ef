use chrono::Utc;
use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};

use quiz_core::QuizSession;
use quiz_core::model::{Quiz, QuizId, QuizSubmission};

use crate::context::{AppContext, ResultHandoff};
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{difficulty_class, palette_class, palette_states};

#[component]
pub fn QuizView(quiz_id: String) -> Element {
    let ctx = use_context::<AppContext>();
    let api = ctx.quiz_api();

    let resource = use_resource(move || {
        let api = api.clone();
        let id = QuizId::new(quiz_id.clone());
        async move { api.quiz(&id).await.map_err(|err| ViewError::from(&err)) }
    });
    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page page-quiz",
            match state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { class: "muted", "Loading quiz..." }
                },
                ViewState::Error(err) => rsx! {
                    div { class: "banner banner-error",
                        p { "Error loading quiz: {err.message()}" }
                        Link { class: "btn btn-primary", to: Route::Home {}, "Go Home" }
                    }
                },
                ViewState::Ready(quiz) => rsx! {
                    QuizTaker { quiz }
                },
            }
        }
    }
}

#[component]
fn QuizTaker(quiz: Quiz) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let api = ctx.quiz_api();
    let mut handoff = use_context::<Signal<Option<ResultHandoff>>>();

    let questions = quiz.questions.clone();
    let mut session = use_signal(move || QuizSession::new(questions));
    let mut submitting = use_signal(|| false);
    let mut submit_error = use_signal(|| None::<String>);

    let quiz_for_submit = quiz.clone();
    let on_submit = use_callback(move |()| {
        if submitting() {
            return;
        }
        let api = api.clone();
        let quiz = quiz_for_submit.clone();
        let submission = QuizSubmission {
            quiz_id: quiz.id.clone(),
            answers: session.read().selections(),
            completed_at: Some(Utc::now()),
        };
        submitting.set(true);
        submit_error.set(None);
        spawn(async move {
            match api.submit_quiz(&submission).await {
                Ok(result) => {
                    let quiz_id = quiz.id.to_string();
                    handoff.set(Some(ResultHandoff { quiz, result }));
                    navigator.push(Route::Results { quiz_id });
                }
                Err(err) => {
                    submitting.set(false);
                    submit_error.set(Some(err.user_message()));
                }
            }
        });
    });

    // One immutable snapshot per render; mutations go through the signal.
    let snapshot = session.read().clone();

    let Some(current) = snapshot.current_question().cloned() else {
        return rsx! {
            div { class: "card empty-state",
                p { "This quiz has no questions." }
                Link { class: "btn btn-primary", to: Route::Home {}, "Go Home" }
            }
        };
    };

    if snapshot.completed() {
        return rsx! {
            div { class: "card completion",
                h2 { "Quiz Completed!" }
                p { "You have answered all questions. Ready to see your results?" }
                if let Some(message) = submit_error() {
                    div { class: "banner banner-error", p { "{message}" } }
                }
                div { class: "actions",
                    button {
                        class: "btn btn-primary",
                        disabled: submitting(),
                        onclick: move |_| on_submit.call(()),
                        if submitting() { "Submitting..." } else { "View Results" }
                    }
                    button {
                        class: "btn",
                        onclick: move |_| session.write().reset(),
                        "Retake Quiz"
                    }
                }
            }
        };
    }

    let total = snapshot.total_questions();
    let cursor = snapshot.cursor();
    let question_number = cursor + 1;
    let is_last = cursor + 1 == total;
    let current_answered = snapshot.current_answered();
    let progress = snapshot.progress();
    let selected = snapshot.answer_for(&current.id).map(str::to_string);
    let palette = palette_states(&snapshot);
    let current_id = current.id.clone();

    rsx! {
        div { class: "quiz-head",
            Link { class: "back-link", to: Route::Home {}, "Back to Home" }
            div { class: "quiz-title",
                h2 { "{quiz.title}" }
                p { class: "muted", "Question {question_number} of {total}" }
            }
        }

        div { class: "progress-track",
            div { class: "progress-fill", style: "width: {progress}%" }
        }

        div { class: "palette",
            for (index, state) in palette.into_iter().enumerate() {
                button {
                    class: palette_class(state),
                    onclick: move |_| session.write().go_to_question(index),
                    {(index + 1).to_string()}
                }
            }
        }

        div { class: "card question-card",
            div { class: "question-meta",
                span { class: difficulty_class(current.difficulty), "{current.difficulty.label()}" }
                if let Some(section) = current.section_reference.as_deref() {
                    span { class: "muted", "From section: {section}" }
                }
            }
            h3 { "{current.prompt}" }

            div { class: "options",
                for option in current.options.clone() {
                    button {
                        class: if selected.as_deref() == Some(option.as_str()) {
                            "option option-selected"
                        } else {
                            "option"
                        },
                        onclick: {
                            let question_id = current_id.clone();
                            let option = option.clone();
                            move |_| session.write().select_answer(&question_id, option.clone())
                        },
                        "{option}"
                    }
                }
            }
        }

        if let Some(message) = submit_error() {
            div { class: "banner banner-error", p { "{message}" } }
        }

        div { class: "quiz-nav",
            button {
                class: "btn",
                disabled: cursor == 0,
                onclick: move |_| session.write().previous_question(),
                "Previous"
            }
            if is_last {
                // UI gate only: the session itself accepts partial answers.
                button {
                    class: "btn btn-primary",
                    disabled: !current_answered || submitting(),
                    onclick: move |_| on_submit.call(()),
                    "Submit Quiz"
                }
            } else {
                button {
                    class: "btn btn-primary",
                    disabled: !current_answered,
                    onclick: move |_| session.write().next_question(),
                    "Next"
                }
            }
        }
    }
}
