use dioxus::core::NoOpMutations;
use dioxus::prelude::*;

use super::placeholders::{LearnView, LeaderboardView};
use super::results::{ScoreSummary, ScoreSummaryProps};

fn render_to_html(mut dom: VirtualDom) -> String {
    dom.rebuild(&mut NoOpMutations);
    dioxus_ssr::render(&dom)
}

#[tokio::test(flavor = "current_thread")]
async fn score_summary_renders_band_and_counts() {
    let dom = VirtualDom::new_with_props(
        ScoreSummary,
        ScoreSummaryProps {
            score: 87.5,
            correct: 7,
            total: 8,
            feedback: "Solid grasp of the article.".to_string(),
        },
    );
    let html = render_to_html(dom);
    assert!(html.contains("88%"), "missing rounded score in {html}");
    assert!(html.contains("Great job!"), "missing band message in {html}");
    assert!(
        html.contains("7 out of 8 questions correct"),
        "missing counts in {html}"
    );
    assert!(html.contains("Solid grasp of the article."));
}

#[tokio::test(flavor = "current_thread")]
async fn low_score_gets_the_practice_band() {
    let dom = VirtualDom::new_with_props(
        ScoreSummary,
        ScoreSummaryProps {
            score: 25.0,
            correct: 2,
            total: 8,
            feedback: "Revisit the article sections.".to_string(),
        },
    );
    let html = render_to_html(dom);
    assert!(html.contains("Keep practicing!"), "missing band in {html}");
    assert!(html.contains("score-low"), "missing score class in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn placeholder_routes_render() {
    let html = render_to_html(VirtualDom::new(LeaderboardView));
    assert!(html.contains("Leaderboard - Coming Soon"));
    let html = render_to_html(VirtualDom::new(LearnView));
    assert!(html.contains("Learn More - Coming Soon"));
}
