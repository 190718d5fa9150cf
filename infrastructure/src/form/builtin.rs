//! Built-in form catalog

use intake_domain::{Condition, Question, QuestionId, Questionnaire};

/// The built-in federal tax intake interview for tax year 2024.
///
/// Seven questions; the dependent-details question fires only on a "yes"
/// to the dependents question, and the 1095 follow-up only on a "no" to
/// the coverage question.
pub fn tax_year_2024() -> Questionnaire {
    let q = |id: u32, text: &str, explanation: &str| {
        Question::new(QuestionId::new(id), text, explanation)
    };

    Questionnaire::new(vec![
        q(
            1,
            "What is your full legal name as it appears on your Social Security card?",
            "This is required for IRS identification.",
        ),
        q(
            2,
            "What is your Social Security Number?",
            "The IRS uses your SSN to match your tax records.",
        ),
        q(
            3,
            "What was your marital status on December 31, 2024?",
            "Your marital status affects your filing status.",
        ),
        q(
            4,
            "Did you support any dependents in 2024?",
            "Dependents may qualify you for credits.",
        ),
        q(
            5,
            "If yes, please provide the name and SSN of each dependent:",
            "The IRS requires dependent details.",
        )
        .with_condition(Condition::answer_equals(QuestionId::new(4), "yes")),
        q(
            6,
            "Did you have health insurance coverage for all of 2024?",
            "Health coverage may affect your taxes.",
        ),
        q(
            7,
            "Did you receive a 1095-A, B, or C form for health coverage?",
            "These forms report your health coverage.",
        )
        .with_condition(Condition::answer_equals(QuestionId::new(6), "no")),
    ])
    .expect("built-in form satisfies questionnaire invariants")
}
