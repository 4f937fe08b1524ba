//! Canned answer explanations for the results review panel.

use quiz_core::model::{Language, QuizResult};

/// Explanation for `result` in `language`, quoting the correct option.
#[must_use]
pub fn explain(result: &QuizResult, language: Language) -> String {
    let correct = result.correct_option();
    match language {
        Language::English => format!(
            "The correct answer is \"{correct}\" because this option represents the \
             fundamental concept accurately. The other options are incorrect as they either \
             provide incomplete information or misstate key facts related to computer concepts."
        ),
        Language::Hindi => format!(
            "सही उत्तर \"{correct}\" है क्योंकि यह विकल्प मूल अवधारणा को सटीक रूप से दर्शाता है। \
             अन्य विकल्प गलत हैं क्योंकि वे या तो अधूरी जानकारी देते हैं या कंप्यूटर अवधारणाओं \
             से जुड़े मुख्य तथ्यों को गलत बताते हैं।"
        ),
        Language::Gujarati => format!(
            "સાચો જવાબ \"{correct}\" છે કારણ કે આ વિકલ્પ મૂળભૂત ખ્યાલને ચોક્કસ રીતે રજૂ કરે છે. \
             અન્ય વિકલ્પો ખોટા છે કારણ કે તે અધૂરી માહિતી આપે છે અથવા કમ્પ્યુટર ખ્યાલો સંબંધિત \
             મુખ્ય તથ્યોને ખોટી રીતે રજૂ કરે છે."
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::QuestionId;

    fn result() -> QuizResult {
        QuizResult {
            question_id: QuestionId::new("ic001_0"),
            prompt: "What does CPU stand for?".into(),
            options: vec![
                "Central Processing Unit".into(),
                "Computer Personal Unit".into(),
                "Central Program Utility".into(),
                "Core Processing Unit".into(),
            ],
            correct_answer: 0,
            user_answer: Some(1),
            is_correct: false,
        }
    }

    #[test]
    fn every_language_quotes_the_correct_option() {
        for language in Language::EXPLANATION {
            let text = explain(&result(), language);
            assert!(text.contains("\"Central Processing Unit\""), "{language}: {text}");
        }
    }

    #[test]
    fn english_text_is_stable() {
        let text = explain(&result(), Language::English);
        assert!(text.starts_with("The correct answer is \"Central Processing Unit\" because"));
        assert!(text.ends_with("related to computer concepts."));
    }
}
