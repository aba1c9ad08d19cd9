//! Corpus Planner CLI
//!
//! Command-line interface for running corpus projections

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use corpus_planner::{
    assumptions::DEFAULT_CONFIG_PATH,
    export,
    profile::load_session,
    projection::{ProjectionCache, ProjectionResult},
    Assumptions, BudgetSummary, GrowthModel, ProjectionConfig, ProjectionEngine, ScenarioRunner, SessionInput,
};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "corpus-planner", version, about = "Project savings corpus for retirement and education goals")]
struct Cli {
    /// Defaults source with sample data and the default expected return
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Project every goal of a session
    Project {
        /// Session file (YAML or JSON); sample data when omitted
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Expected annual return in percent (0-20)
        #[arg(short, long)]
        return_pct: Option<f64>,

        #[arg(short, long, value_enum, default_value_t = ModelArg::StepUp)]
        model: ModelArg,

        /// Write the projection table to this CSV file
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Print the year-by-year balance of each goal
        #[arg(long)]
        schedule: bool,

        /// Write the year-by-year balances of every goal to this CSV file
        #[arg(long)]
        schedule_csv: Option<PathBuf>,
    },

    /// Total corpus across a range of expected returns
    Sweep {
        #[arg(short, long)]
        input: Option<PathBuf>,

        #[arg(short, long, value_enum, default_value_t = ModelArg::StepUp)]
        model: ModelArg,

        /// Step between swept returns, in percent
        #[arg(long, default_value_t = 1.0)]
        step_pct: f64,

        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Print the sample session as YAML
    Defaults,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModelArg {
    /// Annual loop with contribution step-up
    StepUp,
    /// Closed-form monthly annuity
    Monthly,
}

impl From<ModelArg> for GrowthModel {
    fn from(arg: ModelArg) -> Self {
        match arg {
            ModelArg::StepUp => GrowthModel::AnnualStepUp,
            ModelArg::Monthly => GrowthModel::MonthlyAnnuity,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let assumptions = Assumptions::load_or_default(&cli.config)
        .with_context(|| format!("loading defaults from {}", cli.config.display()))?;

    match cli.command {
        Command::Project {
            input,
            return_pct,
            model,
            csv,
            schedule,
            schedule_csv,
        } => {
            let session = read_session(input, &assumptions)?;
            let mut config = match return_pct {
                Some(pct) => ProjectionConfig::from_percent(pct, model.into()),
                None => assumptions.projection_config(model.into()),
            };
            config.detailed_output = schedule || schedule_csv.is_some();

            print_input_summary(&BudgetSummary::from_session(&session));

            let mut cache = ProjectionCache::new();
            let result = ProjectionEngine::new(config).project_session_cached(&session, &mut cache);
            print_projection(&result);
            if schedule {
                print_schedules(&result);
            }

            if let Some(path) = csv {
                export::write_projection_csv_path(&path, &result)
                    .with_context(|| format!("writing {}", path.display()))?;
                println!("\nProjection written to: {}", path.display());
            }
            if let Some(path) = schedule_csv {
                export::write_schedule_csv_path(&path, &result)
                    .with_context(|| format!("writing {}", path.display()))?;
                println!("Schedules written to: {}", path.display());
            }
        }
        Command::Sweep { input, model, step_pct, csv } => {
            let session = read_session(input, &assumptions)?;
            let runner = ScenarioRunner::new(session);
            let points = runner.rate_sweep(model.into(), step_pct).context("invalid sweep")?;

            println!("{:>10} {:>20}", "Return %", "Total Corpus");
            println!("{}", "-".repeat(31));
            for point in &points {
                println!("{:>10.1} {:>20.2}", point.return_pct, point.result.summary().total_projected_corpus);
            }

            if let Some(path) = csv {
                let file = std::fs::File::create(&path).with_context(|| format!("creating {}", path.display()))?;
                export::write_sweep_csv(file, &points)?;
                println!("\nSweep written to: {}", path.display());
            }
        }
        Command::Defaults => {
            let session = SessionInput::from_assumptions(&assumptions);
            print!("{}", serde_yaml::to_string(&session)?);
        }
    }

    Ok(())
}

fn read_session(input: Option<PathBuf>, assumptions: &Assumptions) -> Result<SessionInput> {
    let session = match input {
        Some(path) => load_session(&path).with_context(|| format!("loading session {}", path.display()))?,
        None => SessionInput::from_assumptions(assumptions),
    };
    let session = session.normalized();
    session.validate().context("session input rejected")?;
    Ok(session)
}

fn print_input_summary(summary: &BudgetSummary) {
    println!("Input Summary");
    println!("=============");
    println!("  Years to Retirement:    {}", summary.years_to_retirement);
    println!("  Total Current Savings:  {:.2}", summary.total_current_savings);
    println!("  Monthly Income:         {:.2}", summary.monthly_income);
    println!("  Annual Savings Increase: {:.2}%", summary.annual_savings_increase * 100.0);
    println!("  Total Expenses:         {:.2}", summary.total_allocation);
    println!("  Disposable Income:      {:.2}", summary.disposable_income);
    if summary.overspent {
        println!("  Warning: total expenses exceed monthly income!");
    }

    println!("\n{:<28} {:>14} {:>8}", "Category", "Amount", "Share");
    for share in &summary.shares {
        println!("{:<28} {:>14.2} {:>7.1}%", share.category, share.amount, share.fraction * 100.0);
    }
    println!();
}

fn print_projection(result: &ProjectionResult) {
    println!(
        "Corpus Projection ({:.1}% expected return, {})",
        result.config.annual_return * 100.0,
        result.config.model.label()
    );
    println!(
        "{:<20} {:>6} {:>16} {:>16} {:>10} {:>18}",
        "Goal", "Years", "Monthly", "Initial", "Step-up", "Projected Corpus"
    );
    println!("{}", "-".repeat(91));

    for row in &result.rows {
        println!(
            "{:<20} {:>6} {:>16.2} {:>16.2} {:>9.1}% {:>18.2}",
            row.goal,
            row.years,
            row.monthly_contribution,
            row.initial_amount,
            row.annual_savings_increase * 100.0,
            row.projected_corpus,
        );
    }

    let summary = result.summary();
    println!("\nSummary:");
    println!("  Goals: {}", summary.goal_count);
    println!("  Total Monthly Contribution: {:.2}", summary.total_monthly_contribution);
    println!("  Total Projected Corpus: {:.2}", summary.total_projected_corpus);
    if let Some(goal) = summary.largest_goal {
        println!("  Largest Goal: {}", goal);
    }
}

fn print_schedules(result: &ProjectionResult) {
    for row in result.rows.iter().filter(|r| !r.schedule.is_empty()) {
        println!("\n{}", row.goal);
        println!("{:>5} {:>16} {:>14} {:>14} {:>16}", "Year", "Opening", "Contribution", "Growth", "Closing");
        for year in &row.schedule {
            println!(
                "{:>5} {:>16.2} {:>14.2} {:>14.2} {:>16.2}",
                year.year, year.opening_balance, year.contribution, year.growth, year.closing_balance
            );
        }
    }
}
