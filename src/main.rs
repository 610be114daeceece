//! Financial Tools CLI
//!
//! Command-line interface for the planning calculators

use anyhow::Context;
use chrono::Local;
use clap::{Parser, Subcommand, ValueEnum};

use financial_tools::challenge::{self, CHALLENGE_DAYS, SCHEDULE};
use financial_tools::decision::{DecisionFactors, Reversibility, Urgency};
use financial_tools::emergency::{EmergencyFundPlan, MonthlyExpenses};
use financial_tools::export;
use financial_tools::goals::GoalSummary;
use financial_tools::growth::GrowthPlan;
use financial_tools::networth::NetWorthSnapshot;
use financial_tools::quiz::{Leaning, Tally, QUESTIONS};
use financial_tools::scenario::{align_by_year, ScenarioRunner};
use financial_tools::store::{JsonFileStore, Repository};

#[derive(Parser)]
#[command(name = "financial-tools", version, about = "Personal-finance planning calculators")]
struct Cli {
    /// Directory for persisted tool state
    #[arg(long, default_value = "data", global = true)]
    data_dir: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Project compound growth of an investment plan
    Grow {
        /// Starting balance
        #[arg(long, default_value_t = 10_000.0)]
        initial: f64,

        /// Monthly contribution
        #[arg(long, default_value_t = 500.0)]
        monthly: f64,

        /// Annual return in percent
        #[arg(long, default_value_t = 7.0)]
        rate: f64,

        /// Projection horizon in years
        #[arg(long, default_value_t = 30)]
        years: u32,

        /// Also show the standard comparison scenarios
        #[arg(long)]
        compare: bool,

        /// Write the year-by-year table to a CSV file
        #[arg(long)]
        csv: Option<String>,
    },

    /// Score a decision: act now or wait
    Decide {
        #[arg(long, value_enum, default_value = "medium")]
        urgency: UrgencyArg,

        /// Dollar amount at stake
        #[arg(long, default_value_t = 5_000.0)]
        impact: f64,

        /// Time horizon in months
        #[arg(long, default_value_t = 12)]
        horizon: u32,

        #[arg(long, value_enum, default_value = "moderate")]
        reversibility: ReversibilityArg,

        /// Emotional pressure, 1-10
        #[arg(long, default_value_t = 5)]
        pressure: u8,

        /// Information available, 1-10
        #[arg(long, default_value_t = 5)]
        info: u8,
    },

    /// Summarize stored assets and liabilities
    Networth,

    /// Compute an emergency fund report
    Emergency {
        #[arg(long, default_value_t = 0.0)]
        housing: f64,
        #[arg(long, default_value_t = 0.0)]
        utilities: f64,
        #[arg(long, default_value_t = 0.0)]
        food: f64,
        #[arg(long, default_value_t = 0.0)]
        transportation: f64,
        #[arg(long, default_value_t = 0.0)]
        insurance: f64,
        #[arg(long, default_value_t = 0.0)]
        healthcare: f64,
        #[arg(long, default_value_t = 0.0)]
        debt: f64,
        #[arg(long, default_value_t = 0.0)]
        other: f64,

        /// Current emergency savings
        #[arg(long, default_value_t = 0.0)]
        savings: f64,

        /// Amount saved per month
        #[arg(long, default_value_t = 0.0)]
        monthly_savings: f64,

        /// Coverage target in months of expenses
        #[arg(long, default_value_t = 12)]
        months: u32,
    },

    /// List stored goals with progress
    Goals,

    /// Track the 30-day challenge
    Challenge {
        #[command(subcommand)]
        action: ChallengeAction,
    },

    /// Show the quiz questions or score an answer string
    Quiz {
        /// Comma-separated answers, e.g. "p,b,a,p,p,b,p"
        #[arg(long)]
        answers: Option<String>,
    },
}

#[derive(Subcommand)]
enum ChallengeAction {
    /// Show progress and today's task
    Status,
    /// Start (or restart) the challenge today
    Start,
    /// Toggle completion of a day
    Toggle { day: u32 },
    /// Clear all progress
    Reset,
}

#[derive(Clone, Copy, ValueEnum)]
enum UrgencyArg {
    Low,
    Medium,
    High,
}

impl From<UrgencyArg> for Urgency {
    fn from(arg: UrgencyArg) -> Self {
        match arg {
            UrgencyArg::Low => Urgency::Low,
            UrgencyArg::Medium => Urgency::Medium,
            UrgencyArg::High => Urgency::High,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum ReversibilityArg {
    Easy,
    Moderate,
    Difficult,
}

impl From<ReversibilityArg> for Reversibility {
    fn from(arg: ReversibilityArg) -> Self {
        match arg {
            ReversibilityArg::Easy => Reversibility::Easy,
            ReversibilityArg::Moderate => Reversibility::Moderate,
            ReversibilityArg::Difficult => Reversibility::Difficult,
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Grow {
            initial,
            monthly,
            rate,
            years,
            compare,
            csv,
        } => run_grow(initial, monthly, rate, years, compare, csv),
        Command::Decide {
            urgency,
            impact,
            horizon,
            reversibility,
            pressure,
            info,
        } => {
            run_decide(DecisionFactors::new(
                urgency.into(),
                impact,
                horizon,
                reversibility.into(),
                pressure,
                info,
            ));
            Ok(())
        }
        Command::Networth => run_networth(&cli.data_dir),
        Command::Emergency {
            housing,
            utilities,
            food,
            transportation,
            insurance,
            healthcare,
            debt,
            other,
            savings,
            monthly_savings,
            months,
        } => {
            let plan = EmergencyFundPlan {
                expenses: MonthlyExpenses {
                    housing,
                    utilities,
                    food,
                    transportation,
                    insurance,
                    healthcare,
                    debt,
                    other,
                },
                current_savings: savings,
                monthly_savings,
                target_months: months,
            };
            run_emergency(plan);
            Ok(())
        }
        Command::Goals => run_goals(&cli.data_dir),
        Command::Challenge { action } => run_challenge(&cli.data_dir, action),
        Command::Quiz { answers } => run_quiz(answers.as_deref()),
    }
}

fn run_grow(
    initial: f64,
    monthly: f64,
    rate: f64,
    years: u32,
    compare: bool,
    csv: Option<String>,
) -> anyhow::Result<()> {
    let plan = GrowthPlan::new(initial, monthly, rate, years);
    let runner = ScenarioRunner::new(plan);
    let projection = runner.run_base();

    println!("Growth Projection ({} years at {:.1}%):", years, rate);
    println!("{:>5} {:>14} {:>16} {:>14}", "Year", "Balance", "Contributions", "Earnings");
    println!("{}", "-".repeat(53));
    for point in &projection.points {
        println!(
            "{:>5} {:>14} {:>16} {:>14}",
            point.year,
            format!("${}", point.balance),
            format!("${}", point.contributions),
            format!("${}", point.earnings),
        );
    }

    let summary = projection.summary();
    println!("\nSummary:");
    println!("  Final Balance:       ${}", summary.final_balance);
    println!("  Total Contributions: ${}", summary.total_contributions);
    println!("  Total Earnings:      ${}", summary.total_earnings);
    println!("  Return on Contributions: {:.0}%", summary.earnings_pct_of_contributions);
    println!("  Growth Multiple:     {:.2}x", summary.growth_multiple);

    if compare {
        let scenarios = runner.run_comparison();
        println!("\nScenario Comparison:");
        print!("{:>5}", "Year");
        for scenario in &scenarios {
            print!(" {:>26}", scenario.name);
        }
        println!();
        for row in align_by_year(&scenarios) {
            print!("{:>5}", row.year);
            for balance in &row.balances {
                print!(" {:>26}", format!("${}", balance));
            }
            println!();
        }
        println!(
            "\nMonthly contributions add ${} over the one-time investment alone.",
            runner.contribution_advantage()
        );
    }

    if let Some(path) = csv {
        export::write_projection_to_path(&path, &projection)
            .with_context(|| format!("writing projection CSV to {}", path))?;
        println!("\nFull results written to: {}", path);
    }

    Ok(())
}

fn run_decide(factors: DecisionFactors) {
    let score = factors.score();

    println!("Decision Analysis:");
    println!("  Action Score:   {} ({:.0}%)", score.action_score, score.action_pct);
    println!("  Patience Score: {} ({:.0}%)", score.patience_score, score.patience_pct);
    println!("\nRecommendation: {}", score.recommendation.title());
    println!("  {}", score.recommendation.description());

    let insights = factors.insights();
    if !insights.is_empty() {
        println!("\nKey Factors:");
        for insight in insights {
            println!("  - {}", insight.text);
        }
    }
}

fn run_networth(data_dir: &str) -> anyhow::Result<()> {
    let repo = Repository::new(JsonFileStore::open(data_dir)?);
    let assets = repo.load_assets().context("loading stored assets")?;
    let liabilities = repo.load_liabilities().context("loading stored liabilities")?;

    let snapshot = NetWorthSnapshot::from_entries(&assets, &liabilities);

    println!("Net Worth Snapshot:");
    println!("  Total Assets:      ${:.2}", snapshot.total_assets);
    println!("  Total Liabilities: ${:.2}", snapshot.total_liabilities);
    println!("  Net Worth:         ${:.2}", snapshot.net_worth);

    if !snapshot.assets_by_category.is_empty() {
        println!("\nAssets by Category:");
        for total in &snapshot.assets_by_category {
            println!("  {:<20} ${:.2}", total.label, total.value);
        }
    }
    if !snapshot.liabilities_by_category.is_empty() {
        println!("\nLiabilities by Category:");
        for total in &snapshot.liabilities_by_category {
            println!("  {:<20} ${:.2}", total.label, total.value);
        }
    }

    Ok(())
}

fn run_emergency(plan: EmergencyFundPlan) {
    let report = plan.report();

    println!("Emergency Fund Report:");
    println!("  Monthly Expenses: ${:.2}", report.total_monthly_expenses);
    println!("  Target ({} months): ${:.2}", plan.target_months, report.target_amount);
    println!("  Current Savings:  ${:.2}", plan.current_savings);
    println!("  Remaining:        ${:.2}", report.remaining);
    println!("  Progress:         {:.1}%", report.progress_pct);
    match report.months_to_goal {
        Some(0) => println!("  Months to Goal:   reached"),
        Some(months) => println!("  Months to Goal:   {}", months),
        None => println!("  Months to Goal:   n/a (no monthly savings)"),
    }
    println!("\n{}", report.status.message());
}

fn run_goals(data_dir: &str) -> anyhow::Result<()> {
    let repo = Repository::new(JsonFileStore::open(data_dir)?);
    let goals = repo.load_goals().context("loading stored goals")?;

    if goals.is_empty() {
        println!("No goals stored yet.");
        return Ok(());
    }

    let today = Local::now().date_naive();
    println!("Financial Goals:");
    for goal in &goals {
        let deadline = match goal.days_remaining(today) {
            Some(days) if days < 0 => format!("{} days overdue", -days),
            Some(days) => format!("{} days left", days),
            None => "no deadline".to_string(),
        };
        println!(
            "  [{}] {} - ${:.0} of ${:.0} ({:.0}%), {}",
            if goal.is_complete() { "x" } else { " " },
            goal.name,
            goal.current_amount,
            goal.target_amount,
            goal.progress_pct(),
            deadline,
        );
    }

    let summary = GoalSummary::from_goals(&goals);
    println!(
        "\nOverall: ${:.0} of ${:.0} ({:.1}%), {} of {} complete",
        summary.total_current,
        summary.total_target,
        summary.overall_progress_pct,
        summary.completed,
        summary.total,
    );

    Ok(())
}

fn run_challenge(data_dir: &str, action: ChallengeAction) -> anyhow::Result<()> {
    let mut repo = Repository::new(JsonFileStore::open(data_dir)?);
    let mut progress = repo.load_challenge().context("loading challenge progress")?;
    let today = Local::now().date_naive();

    match action {
        ChallengeAction::Status => {
            match progress.start_date {
                Some(start) => {
                    let current = progress.current_day(today);
                    println!("Challenge started {} (day {} of {})", start, current, CHALLENGE_DAYS);
                    println!(
                        "Completed: {} of {} ({:.0}%)",
                        progress.completed_days.len(),
                        CHALLENGE_DAYS,
                        progress.progress_pct()
                    );
                    if let Some(task) = challenge::task_for_day(current) {
                        println!("\nToday's task: {} - {}", task.title, task.action);
                        println!("  ~{} min, {:?}", task.estimated_minutes, task.category);
                    }
                }
                None => println!("Challenge not started. Run `challenge start`."),
            }
            println!("\nSchedule:");
            for task in &SCHEDULE {
                println!(
                    "  [{}] Day {:>2}: {}",
                    if progress.is_complete(task.day) { "x" } else { " " },
                    task.day,
                    task.title,
                );
            }
        }
        ChallengeAction::Start => {
            progress.start(today);
            repo.save_challenge(&progress)?;
            println!("Challenge started on {}.", today);
        }
        ChallengeAction::Toggle { day } => {
            if day == 0 || day > CHALLENGE_DAYS {
                anyhow::bail!("day must be between 1 and {}", CHALLENGE_DAYS);
            }
            progress.toggle_day(day);
            repo.save_challenge(&progress)?;
            println!(
                "Day {} marked {}.",
                day,
                if progress.is_complete(day) { "complete" } else { "incomplete" }
            );
        }
        ChallengeAction::Reset => {
            progress.reset();
            repo.save_challenge(&progress)?;
            println!("Challenge progress cleared.");
        }
    }

    Ok(())
}

fn run_quiz(answers: Option<&str>) -> anyhow::Result<()> {
    match answers {
        None => {
            println!("Money Personality Quiz:");
            for question in &QUESTIONS {
                println!("\n{}. {}", question.id, question.prompt);
                for (option, letter) in question.options.iter().zip(["a", "b", "p"]) {
                    println!("   ({}) {}", letter, option.text);
                }
            }
            println!("\nScore with: quiz --answers a,b,p,... (a=action, b=balanced, p=patience)");
        }
        Some(raw) => {
            let answers = parse_answers(raw)?;
            let tally = Tally::from_answers(&answers);
            let profile = tally.profile();

            println!(
                "Answers: {} action, {} balanced, {} patience",
                tally.action, tally.balanced, tally.patience
            );
            println!("\nProfile: {}", profile.title());
            println!("  {}", profile.description());
            println!("\nRecommendations:");
            for recommendation in profile.recommendations() {
                println!("  - {}", recommendation);
            }
        }
    }
    Ok(())
}

fn parse_answers(raw: &str) -> anyhow::Result<Vec<Leaning>> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| match part.to_ascii_lowercase().as_str() {
            "a" | "action" => Ok(Leaning::Action),
            "b" | "balanced" => Ok(Leaning::Balanced),
            "p" | "patience" => Ok(Leaning::Patience),
            other => anyhow::bail!("unknown answer '{}' (use a, b, or p)", other),
        })
        .collect()
}
