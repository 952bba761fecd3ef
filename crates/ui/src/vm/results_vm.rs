/// Message band for a score percentage.
#[must_use]
pub fn score_message(score: f64) -> &'static str {
    if score >= 90.0 {
        "Outstanding!"
    } else if score >= 70.0 {
        "Great job!"
    } else if score >= 50.0 {
        "Good effort!"
    } else {
        "Keep practicing!"
    }
}

/// CSS hook for the big score number, banded like the message.
#[must_use]
pub fn score_class(score: f64) -> &'static str {
    if score >= 90.0 {
        "score score-high"
    } else if score >= 70.0 {
        "score score-good"
    } else if score >= 50.0 {
        "score score-fair"
    } else {
        "score score-low"
    }
}

/// "87%" style display; the backend may return fractional percentages.
#[must_use]
pub fn format_score(score: f64) -> String {
    format!("{}%", score.round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_change_at_thresholds() {
        assert_eq!(score_message(100.0), "Outstanding!");
        assert_eq!(score_message(90.0), "Outstanding!");
        assert_eq!(score_message(89.9), "Great job!");
        assert_eq!(score_message(70.0), "Great job!");
        assert_eq!(score_message(50.0), "Good effort!");
        assert_eq!(score_message(49.9), "Keep practicing!");
    }

    #[test]
    fn class_bands_match_message_bands() {
        assert_eq!(score_class(95.0), "score score-high");
        assert_eq!(score_class(75.0), "score score-good");
        assert_eq!(score_class(55.0), "score score-fair");
        assert_eq!(score_class(10.0), "score score-low");
    }

    #[test]
    fn fractional_scores_round_for_display() {
        assert_eq!(format_score(87.5), "88%");
        assert_eq!(format_score(0.0), "0%");
    }
}
