use quiz_core::QuizSession;

/// Visual state of one button in the question index palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaletteState {
    Current,
    Answered,
    Unanswered,
}

/// Palette states for every question, in question order. The palette is
/// what makes the session's free jumping (`go_to_question`) visible.
#[must_use]
pub fn palette_states(session: &QuizSession) -> Vec<PaletteState> {
    (0..session.total_questions())
        .map(|index| {
            if index == session.cursor() {
                PaletteState::Current
            } else if session.is_answered(index) {
                PaletteState::Answered
            } else {
                PaletteState::Unanswered
            }
        })
        .collect()
}

#[must_use]
pub fn palette_class(state: PaletteState) -> &'static str {
    match state {
        PaletteState::Current => "palette-btn palette-current",
        PaletteState::Answered => "palette-btn palette-answered",
        PaletteState::Unanswered => "palette-btn",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::{Difficulty, Question, QuestionId};

    fn question(id: &str) -> Question {
        Question {
            id: QuestionId::new(id),
            prompt: id.to_string(),
            options: vec!["A".into(), "B".into()],
            answer: "A".into(),
            difficulty: Difficulty::Easy,
            explanation: String::new(),
            evidence_span: None,
            section_reference: None,
        }
    }

    #[test]
    fn palette_marks_current_and_answered() {
        let mut session = QuizSession::new(vec![question("q1"), question("q2"), question("q3")]);
        session.select_answer(&QuestionId::new("q1"), "A");
        session.go_to_question(1);

        assert_eq!(
            palette_states(&session),
            vec![
                PaletteState::Answered,
                PaletteState::Current,
                PaletteState::Unanswered,
            ]
        );
    }

    #[test]
    fn current_wins_over_answered() {
        let mut session = QuizSession::new(vec![question("q1"), question("q2")]);
        session.select_answer(&QuestionId::new("q1"), "A");
        assert_eq!(palette_states(&session)[0], PaletteState::Current);
    }
}
