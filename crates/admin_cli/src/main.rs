use std::{error::Error, path::PathBuf, process::ExitCode};

use clap::{Args, Parser, Subcommand, ValueEnum};
use engine::{Engine, EngineError, ExportFormat, ForecastRequest, ProjectionInput};
use migration::MigratorTrait;
use sea_orm::{Database, DatabaseConnection};

#[derive(Parser, Debug)]
#[command(name = "fire_admin")]
#[command(about = "Admin utilities for the expense ledger (categories, imports, exports)")]
struct Cli {
    /// Database connection string (also read from `DATABASE_URL`).
    #[arg(
        long,
        env = "DATABASE_URL",
        default_value = "sqlite:./expenses.db?mode=rwc"
    )]
    database_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Category(Category),
    Expense(Expense),
    /// Write the ledger to `expenses.<format>` inside `--out`.
    Export(ExportArgs),
    /// Print the income and asset forecast.
    Forecast(ForecastArgs),
    /// Run schema migrations.
    Migrate {
        #[arg(value_enum, default_value_t = MigrateAction::Up)]
        action: MigrateAction,
    },
}

#[derive(Args, Debug)]
struct Category {
    #[command(subcommand)]
    command: CategoryCommand,
}

#[derive(Subcommand, Debug)]
enum CategoryCommand {
    Add { name: String },
    List,
    Remove { name: String },
}

#[derive(Args, Debug)]
struct Expense {
    #[command(subcommand)]
    command: ExpenseCommand,
}

#[derive(Subcommand, Debug)]
enum ExpenseCommand {
    /// Add one expense per product, e.g. `--products "Coffee, Tea" --costs "300, 450"`.
    Add(ExpenseAddArgs),
    List,
    Delete {
        #[arg(required = true)]
        ids: Vec<i64>,
    },
}

#[derive(Args, Debug)]
struct ExpenseAddArgs {
    #[arg(long)]
    category: String,
    #[arg(long)]
    products: String,
    #[arg(long)]
    costs: String,
}

#[derive(Args, Debug)]
struct ExportArgs {
    format: ExportFormat,
    #[arg(long, default_value = ".")]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct ForecastArgs {
    #[arg(long, default_value_t = 0.0)]
    income: f64,
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    income_rate: f64,
    #[arg(long, default_value_t = 0.0)]
    assets: f64,
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    assets_rate: f64,
    #[arg(long, default_value_t = 10)]
    years: u32,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum MigrateAction {
    Up,
    Down,
    Fresh,
    Status,
}

async fn connect_db(
    database_url: &str,
) -> Result<DatabaseConnection, Box<dyn Error + Send + Sync>> {
    let db = Database::connect(database_url).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

/// Print rejected input for the user and fail with status 1. Storage and
/// export failures propagate.
fn exit_status(
    err: Box<dyn Error + Send + Sync>,
) -> Result<ExitCode, Box<dyn Error + Send + Sync>> {
    let rejected = !matches!(
        err.downcast_ref::<EngineError>(),
        None | Some(EngineError::Database(_) | EngineError::Export(_))
    );
    if !rejected {
        return Err(err);
    }
    eprintln!("{err}");
    Ok(ExitCode::FAILURE)
}

async fn migrate(
    database_url: &str,
    action: MigrateAction,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    let db = Database::connect(database_url).await?;
    match action {
        MigrateAction::Up => migration::Migrator::up(&db, None).await?,
        MigrateAction::Down => migration::Migrator::down(&db, None).await?,
        MigrateAction::Fresh => migration::Migrator::fresh(&db).await?,
        MigrateAction::Status => migration::Migrator::status(&db).await?,
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn Error + Send + Sync>> {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Migrate { action } => migrate(&cli.database_url, action).await,
        command => {
            let db = connect_db(&cli.database_url).await?;
            let engine = Engine::builder().database(db).build().await?;
            run(&engine, command).await
        }
    };

    match result {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(err) => exit_status(err),
    }
}

async fn run(ledger: &Engine, command: Command) -> Result<(), Box<dyn Error + Send + Sync>> {
    match command {
        Command::Category(Category { command }) => match command {
            CategoryCommand::Add { name } => {
                let id = ledger.add_category(&name).await?;
                println!("created category: {} ({id})", name.trim());
            }
            CategoryCommand::List => {
                let categories = ledger.categories().await?;
                if categories.is_empty() {
                    println!(
                        "no categories yet, defaults: {}",
                        engine::DEFAULT_CATEGORIES.join(", ")
                    );
                }
                for category in categories {
                    println!("{:>6}  {}", category.id, category.name);
                }
            }
            CategoryCommand::Remove { name } => {
                let removed = ledger.delete_category(&name).await?;
                println!("removed {removed} categories named {name}");
            }
        },
        Command::Expense(Expense { command }) => match command {
            ExpenseCommand::Add(args) => {
                let created = ledger
                    .bulk_add(&args.category, &args.products, &args.costs)
                    .await?;
                println!("added {created} expenses to {}", args.category);
            }
            ExpenseCommand::List => {
                let expenses = ledger.list_expenses().await?;
                if expenses.is_empty() {
                    println!("no expenses recorded yet");
                }
                for expense in expenses {
                    println!(
                        "{:>6}  {:<16} {:<24} {:>10}",
                        expense.id, expense.category, expense.product, expense.cost
                    );
                }
            }
            ExpenseCommand::Delete { ids } => {
                let deleted = ledger.delete_expenses(&ids).await?;
                println!("deleted {deleted} of {} selected expenses", ids.len());
            }
        },
        Command::Export(args) => {
            let snapshot = ledger.list_expenses().await?;
            let bytes = args.format.encode(&snapshot)?;
            let path = args.out.join(args.format.file_name());
            std::fs::write(&path, bytes)?;
            println!("wrote {} rows to {}", snapshot.len(), path.display());
        }
        Command::Forecast(args) => {
            let forecast = engine::forecast(&ForecastRequest {
                income: ProjectionInput {
                    base: args.income,
                    rate_percent: args.income_rate,
                },
                assets: ProjectionInput {
                    base: args.assets,
                    rate_percent: args.assets_rate,
                },
                years: args.years,
            })?;

            println!(
                "{:>5}  {:>16}  {:>16}",
                "year", forecast.income.label, forecast.assets.label
            );
            for ((year, income), assets) in forecast
                .periods
                .iter()
                .zip(&forecast.income.values)
                .zip(&forecast.assets.values)
            {
                println!("{year:>5}  {income:>16.2}  {assets:>16.2}");
            }
        }
        Command::Migrate { .. } => {
            return Err("migrations run without opening the ledger".into());
        }
    }

    Ok(())
}
