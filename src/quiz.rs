//! Money-personality quiz: action vs. patience leanings
//!
//! Seven fixed questions, each with three options mapped to a leaning. The
//! answer tally classifies the taker into one of three profiles.

use serde::{Deserialize, Serialize};

/// The leaning an answer option expresses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Leaning {
    Action,
    Balanced,
    Patience,
}

/// One selectable option within a question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuizOption {
    pub text: &'static str,
    pub leaning: Leaning,
}

/// A single quiz question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuizQuestion {
    pub id: u32,
    pub prompt: &'static str,
    pub options: [QuizOption; 3],
}

const fn option(text: &'static str, leaning: Leaning) -> QuizOption {
    QuizOption { text, leaning }
}

/// The fixed question bank, in presentation order
pub const QUESTIONS: [QuizQuestion; 7] = [
    QuizQuestion {
        id: 1,
        prompt: "When the stock market drops 10% in a week, what is your typical response?",
        options: [
            option("Immediately sell to prevent further losses", Leaning::Action),
            option("Review my portfolio and consider rebalancing", Leaning::Balanced),
            option("Stay the course and view it as a buying opportunity", Leaning::Patience),
        ],
    },
    QuizQuestion {
        id: 2,
        prompt: "You receive an unexpected $5,000. What do you do?",
        options: [
            option("Invest it immediately in the hottest stock or crypto", Leaning::Action),
            option("Research options and make a decision within a week", Leaning::Balanced),
            option("Put it in savings while I carefully consider the best long-term use", Leaning::Patience),
        ],
    },
    QuizQuestion {
        id: 3,
        prompt: "How do you approach major financial decisions?",
        options: [
            option("I trust my gut and decide quickly", Leaning::Action),
            option("I gather information and consult with others before deciding", Leaning::Balanced),
            option("I take my time, analyze thoroughly, and wait for the right moment", Leaning::Patience),
        ],
    },
    QuizQuestion {
        id: 4,
        prompt: "A friend suggests a \"can't miss\" investment opportunity. You:",
        options: [
            option("Jump in quickly before the opportunity passes", Leaning::Action),
            option("Do some quick research and decide within 24 hours", Leaning::Balanced),
            option("Thoroughly investigate and likely pass on time-pressured opportunities", Leaning::Patience),
        ],
    },
    QuizQuestion {
        id: 5,
        prompt: "How often do you check your investment accounts?",
        options: [
            option("Daily or multiple times per day", Leaning::Action),
            option("Weekly or monthly", Leaning::Balanced),
            option("Quarterly or only when rebalancing", Leaning::Patience),
        ],
    },
    QuizQuestion {
        id: 6,
        prompt: "Your approach to debt repayment is:",
        options: [
            option("Pay minimums and invest extra money for higher returns", Leaning::Action),
            option("Balance debt payoff with some investing", Leaning::Balanced),
            option("Aggressively pay down high-interest debt first", Leaning::Patience),
        ],
    },
    QuizQuestion {
        id: 7,
        prompt: "When everyone is talking about a hot investment trend, you:",
        options: [
            option("Get excited and want to participate", Leaning::Action),
            option("Consider it but remain cautious", Leaning::Balanced),
            option("Become more skeptical and likely avoid it", Leaning::Patience),
        ],
    },
];

/// Per-leaning answer counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub action: u32,
    pub balanced: u32,
    pub patience: u32,
}

impl Tally {
    /// Count the given answers; unanswered questions simply do not count
    pub fn from_answers(answers: &[Leaning]) -> Self {
        let mut tally = Tally::default();
        for answer in answers {
            match answer {
                Leaning::Action => tally.action += 1,
                Leaning::Balanced => tally.balanced += 1,
                Leaning::Patience => tally.patience += 1,
            }
        }
        tally
    }

    pub fn total(&self) -> u32 {
        self.action + self.balanced + self.patience
    }

    /// Classify the tally into a profile
    pub fn profile(&self) -> Profile {
        if self.patience >= 5 {
            Profile::PatienceMaster
        } else if self.balanced >= 4 {
            Profile::BalancedDecider
        } else {
            Profile::ActionOriented
        }
    }
}

/// Money-personality profiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Profile {
    PatienceMaster,
    BalancedDecider,
    ActionOriented,
}

impl Profile {
    pub fn title(&self) -> &'static str {
        match self {
            Profile::PatienceMaster => "Strategic Patience Master",
            Profile::BalancedDecider => "Balanced Decision Maker",
            Profile::ActionOriented => "Action-Oriented Achiever",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Profile::PatienceMaster => {
                "You understand that patience and strategic inaction are powerful tools \
                 in wealth building."
            }
            Profile::BalancedDecider => {
                "You have a good mix of action and patience. You could benefit from \
                 learning when strategic inaction provides the greatest advantage."
            }
            Profile::ActionOriented => {
                "You prefer quick action and decisive moves. While this can be valuable, \
                 learning when to embrace strategic patience could significantly improve \
                 your financial outcomes."
            }
        }
    }

    /// Suggested next steps for this profile
    pub fn recommendations(&self) -> &'static [&'static str] {
        match self {
            Profile::PatienceMaster => &[
                "Read the chapter on the power of strategic waiting",
                "Use the growth forecaster to see your patience advantage",
                "Keep your rebalancing cadence; avoid overchecking",
            ],
            Profile::BalancedDecider => &[
                "Read the chapter on when to act versus when to wait",
                "Run your next big decision through the decision evaluator",
                "Learn how the patience premium compounds in investing",
            ],
            Profile::ActionOriented => &[
                "Start with the chapter on the cost of constant action",
                "Compare a hold-steady scenario in the growth forecaster",
                "Add a cooling-off period before major money moves",
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_bank_shape() {
        assert_eq!(QUESTIONS.len(), 7);
        for (idx, question) in QUESTIONS.iter().enumerate() {
            assert_eq!(question.id, idx as u32 + 1);
            // Each question offers all three leanings exactly once
            let tally = Tally::from_answers(&question.options.map(|o| o.leaning));
            assert_eq!(tally, Tally { action: 1, balanced: 1, patience: 1 });
        }
    }

    #[test]
    fn test_patience_master_threshold() {
        let answers = [Leaning::Patience; 5];
        assert_eq!(Tally::from_answers(&answers).profile(), Profile::PatienceMaster);

        let answers = [
            Leaning::Patience,
            Leaning::Patience,
            Leaning::Patience,
            Leaning::Patience,
            Leaning::Action,
            Leaning::Action,
            Leaning::Action,
        ];
        assert_ne!(Tally::from_answers(&answers).profile(), Profile::PatienceMaster);
    }

    #[test]
    fn test_balanced_decider() {
        let answers = [
            Leaning::Balanced,
            Leaning::Balanced,
            Leaning::Balanced,
            Leaning::Balanced,
            Leaning::Patience,
            Leaning::Patience,
            Leaning::Action,
        ];
        assert_eq!(Tally::from_answers(&answers).profile(), Profile::BalancedDecider);
    }

    #[test]
    fn test_action_oriented_fallback() {
        let answers = [
            Leaning::Action,
            Leaning::Action,
            Leaning::Action,
            Leaning::Balanced,
            Leaning::Balanced,
            Leaning::Patience,
            Leaning::Patience,
        ];
        assert_eq!(Tally::from_answers(&answers).profile(), Profile::ActionOriented);
    }

    #[test]
    fn test_partial_answers_allowed() {
        let answers = [Leaning::Patience, Leaning::Balanced];
        let tally = Tally::from_answers(&answers);

        assert_eq!(tally.total(), 2);
        assert_eq!(tally.profile(), Profile::ActionOriented);
    }
}
