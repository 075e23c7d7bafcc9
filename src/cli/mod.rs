use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use clap::Parser;

use crate::application::LedgerService;
use crate::domain::{MonthKey, format_amount};
use crate::io::export::DEFAULT_REPORT_PATH;

/// Mensis - monthly income and expense ledger
#[derive(Parser)]
#[command(name = "mensis")]
#[command(about = "Record income/expense entries for the session and export them as a monthly Excel report")]
#[command(version)]
pub struct Cli {
    /// Report output path
    #[arg(short, long, default_value = DEFAULT_REPORT_PATH)]
    pub output: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// The four free-text form fields, given inline on the `add` command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddInput {
    pub date: String,
    pub category: String,
    pub income: String,
    pub expense: String,
}

/// One session command. The original form had two buttons (add, export);
/// `show` and `months` replace its always-visible entry table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `None` prompts for each field, which allows categories with spaces.
    Add(Option<AddInput>),
    Show { key: MonthKey, json: bool },
    Months,
    Export,
    Help,
    Quit,
}

impl Command {
    /// Parse one line of session input. `Ok(None)` for a blank line.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some((&name, args)) = tokens.split_first() else {
            return Ok(None);
        };

        let command = match name {
            "add" => match args {
                [] => Command::Add(None),
                [date, category, rest @ ..] if rest.len() <= 2 => Command::Add(Some(AddInput {
                    date: date.to_string(),
                    category: category.to_string(),
                    income: rest.first().unwrap_or(&"").to_string(),
                    expense: rest.get(1).unwrap_or(&"").to_string(),
                })),
                _ => bail!("Usage: add [<dd/mm/yyyy> <category> [income] [expense]]"),
            },
            "show" => match args {
                [key] | [key, "table"] => Command::Show {
                    key: parse_month_key(key)?,
                    json: false,
                },
                [key, "json"] => Command::Show {
                    key: parse_month_key(key)?,
                    json: true,
                },
                _ => bail!("Usage: show <YYYY-MM> [table|json]"),
            },
            "months" => Command::Months,
            "export" => Command::Export,
            "help" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => bail!("Unknown command '{other}'. Type 'help' for commands."),
        };

        Ok(Some(command))
    }
}

fn parse_month_key(input: &str) -> Result<MonthKey> {
    input
        .parse()
        .map_err(|err| anyhow::anyhow!("Invalid month '{input}': {err}"))
}

impl Cli {
    /// Run the interactive session. The ledger is created empty here and
    /// discarded when the loop ends; only `export` writes anything to disk.
    pub fn run(self) -> Result<()> {
        let mut service = LedgerService::new();
        let stdin = io::stdin();
        let mut lines = stdin.lock().lines();

        println!("mensis session - entries live in memory until you quit.");
        println!("Type 'help' for commands.");

        loop {
            print!("> ");
            io::stdout().flush()?;
            let Some(line) = lines.next() else { break };
            let line = line?;

            let command = match Command::parse(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(err) => {
                    eprintln!("Error: {err}");
                    continue;
                }
            };

            match command {
                Command::Add(input) => run_add(&mut service, &mut lines, input, self.verbose)?,
                Command::Show { key, json } => run_show(&service, &key, json)?,
                Command::Months => run_months(&service),
                Command::Export => run_export(&service, &self.output, self.verbose),
                Command::Help => print_help(),
                Command::Quit => break,
            }
        }

        Ok(())
    }
}

fn run_add(
    service: &mut LedgerService,
    lines: &mut impl Iterator<Item = io::Result<String>>,
    input: Option<AddInput>,
    verbose: bool,
) -> Result<()> {
    let input = match input {
        Some(input) => input,
        None => AddInput {
            date: prompt_field(lines, "Date (dd/mm/yyyy)")?,
            category: prompt_field(lines, "Category")?,
            income: prompt_field(lines, "Income")?,
            expense: prompt_field(lines, "Expense")?,
        },
    };

    match service.add_entry(&input.date, &input.category, &input.income, &input.expense) {
        Ok(entry) => {
            println!("Entry added for {}!", entry.display_date());
            let key = entry.month_key();
            if verbose {
                eprintln!(
                    "[add] {} now holds {} entries",
                    key,
                    service.month_entries(&key).len()
                );
            }
            print_month_table(service, &key);
        }
        Err(err) => eprintln!("Error: {err}"),
    }

    Ok(())
}

fn run_show(service: &LedgerService, key: &MonthKey, json: bool) -> Result<()> {
    let entries = service.month_entries(key);
    if json {
        println!("{}", serde_json::to_string_pretty(entries)?);
    } else if entries.is_empty() {
        println!("No entries for {key}.");
    } else {
        print_month_table(service, key);
    }
    Ok(())
}

fn run_months(service: &LedgerService) {
    let keys = service.month_keys();
    if keys.is_empty() {
        println!("No entries recorded yet.");
        return;
    }

    for key in keys {
        let entries = service.month_entries(&key);
        let closing = entries
            .last()
            .map(|e| format_amount(e.balance))
            .unwrap_or_else(|| "0".to_string());
        println!("{key}  {} entries, closing balance {closing}", entries.len());
    }
}

fn run_export(service: &LedgerService, path: &Path, verbose: bool) {
    if verbose {
        eprintln!("[export] writing {}", path.display());
    }
    match service.export_report(path) {
        Ok(summary) => println!(
            "Exported {} month sheet(s) ({} entries) to {}",
            summary.sheet_count,
            summary.entry_count,
            summary.path.display()
        ),
        Err(err) => eprintln!("Error: {err}"),
    }
}

fn prompt_field(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    label: &str,
) -> Result<String> {
    print!("{label}: ");
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(line?),
        None => Ok(String::new()),
    }
}

fn print_month_table(service: &LedgerService, key: &MonthKey) {
    let entries = service.month_entries(key);
    println!(
        "{:<12} {:<20} {:>10} {:>10} {:>10}",
        "Date", "Category", "Income", "Expense", "Balance"
    );
    for entry in entries {
        println!(
            "{:<12} {:<20} {:>10} {:>10} {:>10}",
            entry.display_date(),
            entry.category,
            format_amount(entry.income),
            format_amount(entry.expense),
            format_amount(entry.balance)
        );
    }
}

fn print_help() {
    println!("Commands:");
    println!("  add                                     add an entry (prompts for each field)");
    println!("  add <dd/mm/yyyy> <category> [in] [out]  add an entry inline");
    println!("  show <YYYY-MM> [table|json]             print one month's entries");
    println!("  months                                  list populated months");
    println!("  export                                  write the Excel report");
    println!("  quit                                    end the session (ledger is discarded)");
}
