//! 30-day financial habit challenge
//!
//! A fixed 30-task schedule plus a progress record tracking which days are
//! done and when the challenge started. Day arithmetic takes an explicit
//! as-of date.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Number of days in the challenge
pub const CHALLENGE_DAYS: u32 = 30;

/// Task categories across the schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskCategory {
    Assessment,
    Awareness,
    Planning,
    Optimization,
    Saving,
    Protection,
    Automation,
    Investment,
    Education,
    Income,
    Reflection,
    Communication,
    Legacy,
    Values,
    Commitment,
}

/// One day's task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChallengeTask {
    pub day: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub action: &'static str,
    pub category: TaskCategory,
    pub estimated_minutes: u32,
}

const fn task(
    day: u32,
    title: &'static str,
    description: &'static str,
    action: &'static str,
    category: TaskCategory,
    estimated_minutes: u32,
) -> ChallengeTask {
    ChallengeTask {
        day,
        title,
        description,
        action,
        category,
        estimated_minutes,
    }
}

/// The full 30-day schedule, one task per day in order
pub const SCHEDULE: [ChallengeTask; 30] = [
    task(1, "Calculate Your Net Worth", "Know where you stand financially", "List all assets and liabilities", TaskCategory::Assessment, 30),
    task(2, "Track Every Expense", "Awareness is the first step", "Record all spending for today", TaskCategory::Awareness, 15),
    task(3, "Create a Budget", "Plan your money intentionally", "Allocate income to categories", TaskCategory::Planning, 45),
    task(4, "Set Financial Goals", "Define what you want to achieve", "Write 3 short and 3 long-term goals", TaskCategory::Planning, 20),
    task(5, "Review Subscriptions", "Cut unnecessary recurring costs", "Cancel unused subscriptions", TaskCategory::Optimization, 30),
    task(6, "Start Emergency Fund", "Begin building financial security", "Save $50 in separate account", TaskCategory::Saving, 10),
    task(7, "Review Insurance", "Ensure adequate protection", "Check coverage and compare rates", TaskCategory::Protection, 40),
    task(8, "Automate Savings", "Make saving effortless", "Set up automatic transfers", TaskCategory::Automation, 15),
    task(9, "Check Credit Score", "Know your credit health", "Get free credit report", TaskCategory::Assessment, 20),
    task(10, "List All Debts", "Face your debt reality", "Document all debts with interest rates", TaskCategory::Assessment, 30),
    task(11, "Create Debt Payoff Plan", "Strategic debt elimination", "Prioritize high-interest debt", TaskCategory::Planning, 45),
    task(12, "Negotiate Bills", "Reduce monthly expenses", "Call providers for better rates", TaskCategory::Optimization, 60),
    task(13, "Meal Plan Week", "Save on food costs", "Plan meals and grocery list", TaskCategory::Saving, 30),
    task(14, "Review Retirement", "Check retirement accounts", "Review 401k/IRA contributions", TaskCategory::Investment, 30),
    task(15, "Increase Retirement", "Boost future savings", "Increase contribution by 1%", TaskCategory::Investment, 15),
    task(16, "Research Investments", "Learn investment basics", "Read about index funds and ETFs", TaskCategory::Education, 45),
    task(17, "Side Income Ideas", "Explore earning opportunities", "List 5 potential side hustles", TaskCategory::Income, 30),
    task(18, "Sell Unused Items", "Declutter and earn", "List items online for sale", TaskCategory::Income, 60),
    task(19, "Review Tax Strategy", "Optimize tax efficiency", "Check deductions and credits", TaskCategory::Optimization, 45),
    task(20, "Estate Planning Basics", "Protect your legacy", "Create or update will", TaskCategory::Protection, 60),
    task(21, "Financial Education", "Invest in knowledge", "Read one chapter of financial book", TaskCategory::Education, 30),
    task(22, "Review Progress", "Celebrate achievements", "Document wins and lessons", TaskCategory::Reflection, 20),
    task(23, "Optimize Banking", "Maximize interest earnings", "Compare high-yield savings accounts", TaskCategory::Optimization, 30),
    task(24, "Investment Account", "Start investing journey", "Open brokerage account", TaskCategory::Investment, 45),
    task(25, "Diversification Check", "Review investment mix", "Analyze portfolio allocation", TaskCategory::Investment, 30),
    task(26, "Financial Partner Talk", "Align with spouse/partner", "Discuss financial goals together", TaskCategory::Communication, 60),
    task(27, "Teach Kids Money", "Pass financial wisdom", "Have money conversation with children", TaskCategory::Legacy, 30),
    task(28, "Charitable Giving", "Plan purposeful giving", "Set charitable giving budget", TaskCategory::Values, 20),
    task(29, "Long-term Vision", "Define your financial freedom", "Write your 10-year financial vision", TaskCategory::Planning, 45),
    task(30, "Commit to Continue", "Make it a lifestyle", "Schedule monthly financial reviews", TaskCategory::Commitment, 30),
];

/// Look up the task for a given day (1..=30)
pub fn task_for_day(day: u32) -> Option<&'static ChallengeTask> {
    SCHEDULE.get(day.checked_sub(1)? as usize)
}

/// Progress through the challenge
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeProgress {
    /// Day numbers marked complete
    pub completed_days: BTreeSet<u32>,

    /// When the challenge was started; None when not started
    pub start_date: Option<NaiveDate>,
}

impl ChallengeProgress {
    /// Start (or restart) the challenge on the given date, clearing any
    /// prior completions
    pub fn start(&mut self, as_of: NaiveDate) {
        self.start_date = Some(as_of);
        self.completed_days.clear();
    }

    /// Clear all progress and the start date
    pub fn reset(&mut self) {
        self.completed_days.clear();
        self.start_date = None;
    }

    /// Flip a day's completion; days outside 1..=30 are ignored
    pub fn toggle_day(&mut self, day: u32) {
        if day == 0 || day > CHALLENGE_DAYS {
            return;
        }
        if !self.completed_days.remove(&day) {
            self.completed_days.insert(day);
        }
    }

    pub fn is_complete(&self, day: u32) -> bool {
        self.completed_days.contains(&day)
    }

    /// Completion percentage over the 30 days
    pub fn progress_pct(&self) -> f64 {
        self.completed_days.len() as f64 / CHALLENGE_DAYS as f64 * 100.0
    }

    /// The scheduled day number as of the given date: elapsed days plus one,
    /// clamped to 30. Returns 0 when the challenge has not been started.
    pub fn current_day(&self, as_of: NaiveDate) -> u32 {
        match self.start_date {
            Some(start) => {
                let elapsed = as_of.signed_duration_since(start).num_days().max(0);
                (elapsed as u32 + 1).min(CHALLENGE_DAYS)
            }
            None => 0,
        }
    }
}
