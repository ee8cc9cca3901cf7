//! Multiple-choice quiz bank.
//!
//! The bank is an immutable table; answering a question never mutates it.

use dx_core::{Error, Result};
use serde::Serialize;

/// One multiple-choice question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    /// Question text.
    pub prompt: &'static str,
    /// Answer options, in display order.
    pub options: &'static [&'static str],
    /// Index of the correct option.
    pub answer: usize,
    /// Explanation revealed after answering.
    pub solution: &'static str,
}

/// A named set of questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Quiz {
    /// Stable identifier (e.g., "quiz-hyper").
    pub id: &'static str,
    /// Display title.
    pub title: &'static str,
    /// Questions in display order.
    pub questions: &'static [Question],
}

/// Result of answering one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizOutcome {
    /// Quiz identifier.
    pub quiz_id: String,
    /// Zero-based question index.
    pub question: usize,
    /// Option picked.
    pub chosen: usize,
    /// Correct option.
    pub answer: usize,
    /// `chosen == answer`.
    pub correct: bool,
    /// Text of the picked option.
    pub chosen_text: &'static str,
    /// Text of the correct option.
    pub answer_text: &'static str,
    /// Explanation.
    pub solution: &'static str,
}

const fn q(
    prompt: &'static str,
    options: &'static [&'static str],
    answer: usize,
    solution: &'static str,
) -> Question {
    Question { prompt, options, answer, solution }
}

const HYPER: &[Question] = &[
    q(
        "In a Hypergeometric distribution, are trials independent?",
        &["Yes", "No", "Only if N is large"],
        1,
        "No! Because we are sampling WITHOUT replacement, the result of one pick affects the probability of the next.",
    ),
    q(
        "What does 'N' represent in the formula?",
        &["Sample size", "Number of successes", "Total population size"],
        2,
        "Big N stands for the Total Population size.",
    ),
    q(
        "If you have 10 balls (5 red, 5 blue) and pick 1 red, what is the chance the next is red?",
        &["5/10", "4/9", "5/9"],
        1,
        "You took 1 red out. So 4 red remain out of 9 total. 4/9.",
    ),
    q(
        "Which parameter is the 'Sample Size'?",
        &["N", "K", "n"],
        2,
        "Little 'n' is the sample size (how many you pick).",
    ),
    q(
        "Hypergeometric is used for sampling...",
        &["With replacement", "Without replacement", "Infinite populations"],
        1,
        "It is specifically for sampling WITHOUT replacement from a finite population.",
    ),
];

const POISSON: &[Question] = &[
    q(
        "What is the main parameter for Poisson?",
        &["Alpha", "Beta", "Lambda (\u{03BB})"],
        2,
        "Lambda (\u{03BB}) represents the average rate of occurrence.",
    ),
    q(
        "Poisson models events that are...",
        &["Dependent", "Independent", "Correlated"],
        1,
        "Events in a Poisson process are assumed to be independent of each other.",
    ),
    q(
        "If \u{03BB} = 4, what is the average number of events?",
        &["2", "4", "16"],
        1,
        "Lambda IS the average. So it's 4.",
    ),
    q(
        "Can Poisson be used for continuous data?",
        &["Yes", "No"],
        1,
        "No, Poisson is a Discrete distribution (counts of events: 0, 1, 2...).",
    ),
    q(
        "Which is a good example of Poisson?",
        &["Coin flips", "Height of students", "Number of emails per hour"],
        2,
        "Counting rare events (emails) over a fixed interval (hour) is classic Poisson.",
    ),
];

const MIXED_1: &[Question] = &[
    q(
        "If N is very large (infinite), Hypergeometric approaches...",
        &["Poisson", "Binomial", "Normal"],
        1,
        "It approaches Binomial because 'without replacement' doesn't matter much in a huge population.",
    ),
    q(
        "Which distribution uses 'e' (Euler's number)?",
        &["Hypergeometric", "Poisson", "Both"],
        1,
        "The Poisson formula uses e^(-\u{03BB}).",
    ),
    q(
        "Drawing 5 cards from a deck is...",
        &["Hypergeometric", "Poisson", "Binomial"],
        0,
        "Hypergeometric, because you don't put the cards back (without replacement).",
    ),
    q(
        "Number of typos on a page is...",
        &["Hypergeometric", "Poisson", "Binomial"],
        1,
        "Poisson. Typos are rare events in a fixed space (the page).",
    ),
    q(
        "In Hypergeometric, can x be larger than n?",
        &["Yes", "No"],
        1,
        "No. You can't have more successes (x) than the number of items you picked (n).",
    ),
];

const MIXED_2: &[Question] = &[
    q(
        "If \u{03BB} = 3, what is P(X=0)?",
        &["0", "e^-3", "3 * e^-3"],
        1,
        "Formula: (e^-3 * 3^0)/0! = e^-3 * 1 / 1 = e^-3.",
    ),
    q(
        "Which distribution has a fixed number of trials?",
        &["Poisson", "Hypergeometric"],
        1,
        "Hypergeometric has a fixed sample size 'n'. Poisson theoretically goes to infinity.",
    ),
    q(
        "Mean of Poisson distribution is...",
        &["\u{03BB}", "\u{03BB}^2", "\u{221A}\u{03BB}"],
        0,
        "The mean (and variance!) of a Poisson distribution is equal to \u{03BB}.",
    ),
    q(
        "Sampling 10 people from a town of 100...",
        &["Hypergeometric", "Binomial"],
        0,
        "Finite population (100) without replacement = Hypergeometric.",
    ),
    q(
        "Is 'Time between calls' a Poisson distribution?",
        &["Yes", "No"],
        1,
        "No! The COUNT of calls is Poisson. The TIME between them is Exponential.",
    ),
];

const MIXED_3: &[Question] = &[
    q(
        "Variance of Poisson is equal to...",
        &["Mean", "Standard Deviation", "0"],
        0,
        "Unique property: Mean = Variance = \u{03BB}.",
    ),
    q(
        "Hypergeometric: N=20, K=10, n=5. Max value of x?",
        &["5", "10", "20"],
        0,
        "Max x is min(n, K). min(5, 10) is 5.",
    ),
    q(
        "Which is simpler to calculate for large N?",
        &["Hypergeometric", "Binomial"],
        1,
        "Binomial is computationally simpler and is a good approximation.",
    ),
    q(
        "Poisson shape for large \u{03BB}?",
        &["Skewed Left", "Skewed Right", "Symmetric"],
        2,
        "It becomes symmetric (Normal approximation).",
    ),
    q(
        "Can x be negative in either distribution?",
        &["Yes", "No"],
        1,
        "No. You can't have negative counts of events or successes.",
    ),
];

/// Every quiz, in display order.
pub static QUIZZES: &[Quiz] = &[
    Quiz { id: "quiz-hyper", title: "Hypergeometric", questions: HYPER },
    Quiz { id: "quiz-poisson", title: "Poisson", questions: POISSON },
    Quiz { id: "quiz-mixed1", title: "Mixed Practice 1", questions: MIXED_1 },
    Quiz { id: "quiz-mixed2", title: "Mixed Practice 2", questions: MIXED_2 },
    Quiz { id: "quiz-mixed3", title: "Mixed Practice 3", questions: MIXED_3 },
];

/// Look up a quiz by id.
pub fn quiz(id: &str) -> Option<&'static Quiz> {
    QUIZZES.iter().find(|q| q.id == id)
}

/// Grade one answer.
pub fn check_answer(quiz_id: &str, question: usize, chosen: usize) -> Result<QuizOutcome> {
    let bank = quiz(quiz_id)
        .ok_or_else(|| Error::Validation(format!("unknown quiz id: {}", quiz_id)))?;
    let item = bank.questions.get(question).ok_or_else(|| {
        Error::Validation(format!(
            "question index {} out of range for {} ({} questions)",
            question,
            quiz_id,
            bank.questions.len()
        ))
    })?;
    let chosen_text = item.options.get(chosen).copied().ok_or_else(|| {
        Error::Validation(format!(
            "option index {} out of range ({} options)",
            chosen,
            item.options.len()
        ))
    })?;

    Ok(QuizOutcome {
        quiz_id: bank.id.to_string(),
        question,
        chosen,
        answer: item.answer,
        correct: chosen == item.answer,
        chosen_text,
        answer_text: item.options[item.answer],
        solution: item.solution,
    })
}
