use anyhow::Result;
use rust_decimal::Decimal;
use std::path::Path;
use std::str::FromStr;

use crate::db::Database;
use crate::models::ExpenseFilter;
use crate::util::{format_amount, truncate};
use crate::{export, report};

pub(crate) fn as_cli(args: &[String], db: &mut Database) -> Result<()> {
    match args[1].as_str() {
        "add" => cli_add(&args[2..], db),
        "list" | "ls" => cli_list(&args[2..], db),
        "delete" | "rm" => cli_delete(&args[2..], db),
        "report" | "r" => cli_report(&args[2..], db),
        "export" => cli_export(&args[2..], db),
        "chart" => cli_chart(&args[2..], db),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("spendlog {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

pub(crate) fn print_usage() {
    println!("SpendLog — local-only personal expense tracker");
    println!();
    println!("Usage: spendlog <command>");
    println!();
    println!("Commands:");
    println!("  add <date|today> <category> <amount> [notes]");
    println!("                                Record an expense (date: YYYY-MM-DD)");
    println!("  list [filters]                List matching expenses");
    println!("  delete <id>                   Delete an expense by id");
    println!("  report [filters]              Print total, category breakdown, monthly trend");
    println!("  export [path] [filters]       Export matching expenses to CSV");
    println!("  chart pie [path] [filters]    Save a category pie chart PNG");
    println!("  chart trend [path] [filters]  Save a monthly trend chart PNG");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
    println!();
    println!("Filters:");
    println!("  --from <YYYY-MM-DD>           Earliest date (inclusive)");
    println!("  --to <YYYY-MM-DD>             Latest date (inclusive)");
    println!("  --category <name>             Exact category (case-insensitive)");
    println!("  --min <amount>                Minimum amount (inclusive)");
    println!("  --max <amount>                Maximum amount (inclusive)");
}

fn cli_add(args: &[String], db: &mut Database) -> Result<()> {
    if args.len() < 3 {
        anyhow::bail!("Usage: spendlog add <date|today> <category> <amount> [notes]");
    }

    let date = if args[0] == "today" {
        chrono::Local::now().format("%Y-%m-%d").to_string()
    } else {
        args[0].clone()
    };
    let amount = Decimal::from_str(&args[2])
        .map_err(|_| anyhow::anyhow!("Invalid amount: {}", args[2]))?;
    let notes = args[3..].join(" ");

    let id = db.add_expense(&date, &args[1], amount, &notes)?;
    println!("Added expense #{id}: {date} {} {}", args[1], format_amount(amount));
    Ok(())
}

fn cli_list(args: &[String], db: &mut Database) -> Result<()> {
    let filter = parse_filter(args)?;
    let expenses = db.get_expenses(&filter)?;
    if expenses.is_empty() {
        println!("No matching expenses");
        return Ok(());
    }

    println!(
        "{:<6} {:<12} {:<20} {:>12}  Notes",
        "ID", "Date", "Category", "Amount"
    );
    println!("{}", "─".repeat(68));
    for e in &expenses {
        println!(
            "{:<6} {:<12} {:<20} {:>12}  {}",
            e.id.unwrap_or(0),
            e.date,
            truncate(&e.category, 20),
            format_amount(e.amount),
            e.notes,
        );
    }
    println!("{}", "─".repeat(68));
    println!(
        "{} expenses, total {}",
        expenses.len(),
        format_amount(report::total(&expenses))
    );
    Ok(())
}

fn cli_delete(args: &[String], db: &mut Database) -> Result<()> {
    let id: i64 = args
        .first()
        .and_then(|a| a.parse().ok())
        .ok_or_else(|| anyhow::anyhow!("Usage: spendlog delete <id>"))?;

    let expense = db
        .get_expense_by_id(id)?
        .ok_or(crate::error::Error::NotFound(id))?;
    db.delete_expense(id)?;
    println!("Deleted expense #{id}: {} {}", expense.date, expense.category);
    Ok(())
}

fn cli_report(args: &[String], db: &mut Database) -> Result<()> {
    let filter = parse_filter(args)?;
    let expenses = db.get_expenses(&filter)?;
    if expenses.is_empty() {
        println!("No matching expenses");
        return Ok(());
    }

    let scope = if filter.is_empty() { "" } else { " (filtered)" };
    println!("SpendLog — {} expenses{scope}", expenses.len());
    println!("{}", "─".repeat(40));
    println!("  Total spent: {}", format_amount(report::total(&expenses)));

    println!();
    println!("By category:");
    for (name, amount) in report::by_category(&expenses) {
        println!("  {:<24} {:>12}", truncate(&name, 24), format_amount(amount));
    }

    println!();
    println!("Monthly trend:");
    for (month, amount) in report::monthly_trend(&expenses) {
        println!("  {month:<24} {:>12}", format_amount(amount));
    }
    Ok(())
}

fn cli_export(args: &[String], db: &mut Database) -> Result<()> {
    let filter = parse_filter(args)?;

    // Output path is the first non-flag argument
    let output_path = args
        .first()
        .filter(|a| !a.starts_with('-'))
        .map(|a| shellexpand(a))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
            let today = chrono::Local::now().format("%Y-%m-%d");
            format!("{home}/spendlog-export-{today}.csv")
        });

    let expenses = db.get_expenses(&filter)?;
    let count = export::export_csv(Path::new(&output_path), &expenses)?;
    println!("Exported {count} expenses to {output_path}");
    Ok(())
}

fn cli_chart(args: &[String], db: &mut Database) -> Result<()> {
    let kind = args.first().map(String::as_str).unwrap_or("");
    let (default_name, rest) = match kind {
        "pie" => ("category_pie.png", &args[1..]),
        "trend" => ("monthly_trend.png", &args[1..]),
        _ => anyhow::bail!("Usage: spendlog chart <pie|trend> [path] [filters]"),
    };

    let filter = parse_filter(rest)?;
    let output_path = rest
        .first()
        .filter(|a| !a.starts_with('-'))
        .map(|a| shellexpand(a))
        .unwrap_or_else(|| default_name.to_string());

    let expenses = db.get_expenses(&filter)?;
    if kind == "pie" {
        export::render_category_pie(Path::new(&output_path), &report::by_category(&expenses))?;
    } else {
        export::render_monthly_trend(Path::new(&output_path), &report::monthly_trend(&expenses))?;
    }
    println!("Chart saved to {output_path}");
    Ok(())
}

// ── Argument helpers ─────────────────────────────────────────

fn parse_filter(args: &[String]) -> Result<ExpenseFilter> {
    let mut filter = ExpenseFilter::default();
    for w in args.windows(2) {
        match w[0].as_str() {
            "--from" => filter.from = Some(parse_date_arg(&w[1])?),
            "--to" => filter.to = Some(parse_date_arg(&w[1])?),
            "--category" => filter.category = Some(w[1].clone()),
            "--min" => filter.min_amount = Some(parse_amount_arg(&w[1])?),
            "--max" => filter.max_amount = Some(parse_amount_arg(&w[1])?),
            _ => {}
        }
    }
    Ok(filter)
}

fn parse_date_arg(s: &str) -> Result<String> {
    chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| anyhow::anyhow!("Invalid date (expected YYYY-MM-DD): {s}"))?;
    Ok(s.to_string())
}

fn parse_amount_arg(s: &str) -> Result<Decimal> {
    Decimal::from_str(s).map_err(|_| anyhow::anyhow!("Invalid amount: {s}"))
}

pub(crate) fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
        format!("{home}/{rest}")
    } else {
        path.to_string()
    }
}
