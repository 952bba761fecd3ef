use dioxus::prelude::*;
use dioxus_router::use_navigator;

use quiz_core::model::GenerationDifficulty;
use quiz_core::validate::validate_article_url;
use services::{GenerateQuizRequest, RequestSequencer};

use crate::context::AppContext;
use crate::routes::Route;

const QUESTION_COUNT_CHOICES: [u8; 6] = [5, 6, 7, 8, 9, 10];

const SAMPLE_ARTICLES: [&str; 4] = [
    "https://en.wikipedia.org/wiki/Alan_Turing",
    "https://en.wikipedia.org/wiki/Machine_learning",
    "https://en.wikipedia.org/wiki/Climate_change",
    "https://en.wikipedia.org/wiki/Artificial_intelligence",
];

#[derive(Clone, Debug, PartialEq)]
struct GeneratedNote {
    title: String,
    question_count: usize,
}

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let api = ctx.quiz_api();
    // Overlapping generate requests race; the sequencer makes the latest
    // dispatch win and drops stale responses.
    let sequencer = use_hook(RequestSequencer::new);

    let mut url = use_signal(String::new);
    let mut question_count = use_signal(|| 8u8);
    let mut difficulty = use_signal(GenerationDifficulty::default);
    let mut loading = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);
    let mut generated = use_signal(|| None::<GeneratedNote>);

    let on_generate = use_callback(move |()| {
        let raw = url();
        // Validation failures never reach the transport client.
        if let Err(err) = validate_article_url(&raw) {
            error.set(Some(err.to_string()));
            return;
        }
        error.set(None);
        generated.set(None);
        loading.set(true);

        let api = api.clone();
        let sequencer = sequencer.clone();
        let tag = sequencer.begin();
        let request = GenerateQuizRequest {
            url: raw.trim().to_string(),
            question_count: question_count(),
            difficulty: difficulty(),
        };
        spawn(async move {
            let outcome = api.generate_quiz(&request).await;
            if !sequencer.is_current(tag) {
                // A newer dispatch owns the tri-state now.
                return;
            }
            loading.set(false);
            match outcome {
                Ok(quiz) => {
                    generated.set(Some(GeneratedNote {
                        title: quiz.title.clone(),
                        question_count: quiz.question_count(),
                    }));
                    navigator.push(Route::Quiz {
                        quiz_id: quiz.id.to_string(),
                    });
                }
                Err(err) => error.set(Some(err.user_message())),
            }
        });
    });

    rsx! {
        div { class: "page page-generate",
            div { class: "hero",
                h2 { "Generate AI-Powered Quiz" }
                p { "Transform any Wikipedia article into an interactive quiz with AI-generated questions" }
            }

            form { class: "card generate-form",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    on_generate.call(());
                },

                label { r#for: "wikipedia-url", "Wikipedia Article URL" }
                input {
                    id: "wikipedia-url",
                    r#type: "url",
                    placeholder: "https://en.wikipedia.org/wiki/Article_Title",
                    value: "{url}",
                    disabled: loading(),
                    oninput: move |evt| url.set(evt.value()),
                }

                div { class: "form-row",
                    div {
                        label { "Number of Questions" }
                        select {
                            onchange: move |evt| {
                                if let Ok(value) = evt.value().parse::<u8>() {
                                    question_count.set(value);
                                }
                            },
                            for choice in QUESTION_COUNT_CHOICES {
                                option {
                                    value: "{choice}",
                                    selected: question_count() == choice,
                                    "{choice} Questions"
                                }
                            }
                        }
                    }
                    div {
                        label { "Difficulty Level" }
                        select {
                            onchange: move |evt| {
                                if let Ok(value) = evt.value().parse::<GenerationDifficulty>() {
                                    difficulty.set(value);
                                }
                            },
                            for mode in GenerationDifficulty::ALL {
                                option {
                                    value: "{mode}",
                                    selected: difficulty() == mode,
                                    "{mode.label()}"
                                }
                            }
                        }
                    }
                }

                button {
                    r#type: "submit",
                    class: "btn btn-primary",
                    disabled: loading() || url().trim().is_empty(),
                    if loading() { "Generating Quiz..." } else { "Generate Quiz" }
                }
            }

            if let Some(message) = error() {
                div { class: "banner banner-error", p { "{message}" } }
            }

            if let Some(note) = generated() {
                div { class: "banner banner-success",
                    p {
                        "Quiz generated successfully! "
                        strong { "{note.title}" }
                        " - {note.question_count} questions"
                    }
                }
            }

            div { class: "card samples",
                h3 { "Try These Popular Articles" }
                div { class: "sample-grid",
                    for sample in SAMPLE_ARTICLES {
                        button {
                            class: "sample-btn",
                            onclick: move |_| url.set(sample.to_string()),
                            span { class: "sample-title", {sample_title(sample)} }
                            span { class: "sample-hint", "Click to use this article" }
                        }
                    }
                }
            }

            div { class: "card how-it-works",
                h3 { "How It Works" }
                ol {
                    li { "Enter URL - paste any Wikipedia article URL" }
                    li { "AI Generation - the backend analyzes the content and creates questions" }
                    li { "Take Quiz - test your knowledge with interactive questions" }
                }
            }
        }
    }
}

/// Article title from a /wiki/ URL, underscores turned back into spaces.
fn sample_title(url: &str) -> String {
    url.rsplit_once("/wiki/")
        .map_or("Article".to_string(), |(_, slug)| slug.replace('_', " "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_titles_are_readable() {
        assert_eq!(
            sample_title("https://en.wikipedia.org/wiki/Machine_learning"),
            "Machine learning"
        );
        assert_eq!(sample_title("https://example.com"), "Article");
    }
}
