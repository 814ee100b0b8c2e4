use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};

use expense_tracker::config::{Settings, TrackerPaths};
use expense_tracker::display::{format_contact_list, format_expense_list};
use expense_tracker::export::{
    export_expenses_csv, export_expenses_json, export_expenses_yaml, load_document,
};
use expense_tracker::filters::{reduce, ContactFilterState, FilterAction};
use expense_tracker::logging::init_logging;
use expense_tracker::models::SortMode;
use expense_tracker::query::{query_contacts, query_with, SearchMode};

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Filter and sort expense records",
    long_about = "Loads a JSON document of contacts and expenses and prints the \
                  expenses that match a search term and date range, in the \
                  chosen order."
)]
struct Cli {
    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Use this directory for settings instead of the default
    #[arg(long, global = true, env = "EXPENSE_TRACKER_DIR")]
    config_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List expenses matching the filters
    Query {
        /// Expense document (JSON)
        file: PathBuf,
        /// Case-insensitive search in description and note
        #[arg(short, long)]
        term: Option<String>,
        /// byNewest, byOldest, byAmountDescending or byAmountAscending
        #[arg(short, long)]
        sort: Option<String>,
        /// First day to include (YYYY-MM-DD)
        #[arg(long)]
        from: Option<NaiveDate>,
        /// Last day to include (YYYY-MM-DD)
        #[arg(long)]
        to: Option<NaiveDate>,
        /// Treat the search term as a regular expression
        #[arg(long)]
        pattern: bool,
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// List contacts matching the filters
    Contacts {
        /// Expense document (JSON)
        file: PathBuf,
        #[arg(short, long)]
        term: Option<String>,
        /// Only contacts carrying one of these categories
        #[arg(short, long)]
        category: Vec<String>,
        /// byNewest, byOldest, byNameAscending or byNameDescending
        #[arg(short, long)]
        sort: Option<String>,
    },

    /// Show resolved paths and settings
    Config,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
    Yaml,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let paths = match cli.config_dir {
        Some(dir) => TrackerPaths::with_base_dir(dir),
        None => TrackerPaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Commands::Query {
            file,
            term,
            sort,
            from,
            to,
            pattern,
            format,
        } => {
            let mut filters = settings.initial_filters();
            if let Some(name) = sort {
                filters = filters.set_sort_by_name(&name)?;
            }
            let actions = [
                FilterAction::SetSearchTerm(term.unwrap_or_default()),
                FilterAction::SetStartDate(from),
                FilterAction::SetEndDate(to),
            ];
            let filters = actions.into_iter().fold(filters, reduce);

            let search_mode = if pattern {
                SearchMode::Pattern
            } else {
                settings.search_mode
            };

            let document = load_document(&file)
                .with_context(|| format!("Could not load {}", file.display()))?;
            let expenses = query_with(&document.expenses, &filters, search_mode)?;

            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            match format {
                OutputFormat::Table => {
                    write!(out, "{}", format_expense_list(&expenses, &settings)?)?
                }
                OutputFormat::Json => export_expenses_json(&expenses, &filters, &mut out)?,
                OutputFormat::Csv => export_expenses_csv(&expenses, &mut out)?,
                OutputFormat::Yaml => export_expenses_yaml(&expenses, &filters, &mut out)?,
            }
        }
        Commands::Contacts {
            file,
            term,
            category,
            sort,
        } => {
            let mut filters = ContactFilterState::new()
                .set_categories(&category)
                .set_search_term(term.unwrap_or_default());
            if let Some(name) = sort {
                filters = filters.set_sort_by(name.parse()?);
            }

            let document = load_document(&file)
                .with_context(|| format!("Could not load {}", file.display()))?;
            let contacts = query_contacts(&document.contacts.list()?, &filters)?;
            print!("{}", format_contact_list(&contacts, &settings));
        }
        Commands::Config => {
            println!("Expense tracker configuration");
            println!("=============================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!(
                "  Default sort:    {} ({})",
                settings.default_sort,
                settings.default_sort.title()
            );
            println!("  Search mode:     {:?}", settings.search_mode);
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!();
            println!("Sort modes:");
            for mode in SortMode::ALL {
                println!("  {:<20} {}", mode.as_str(), mode.title());
            }
        }
    }

    Ok(())
}
