use clap::{Parser, Subcommand};
use dotenv::dotenv;
use inquire::validator::Validation;
use inquire::{CustomType, Text};
use prettytable::{Cell, Row, Table, format};
use std::{error::Error, fs, path::PathBuf};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use timesheet_gen::config::FormDefaults;
use timesheet_gen::{DayType, TimesheetRecord, TimesheetRequest, generate, parse_day_list};

// --- CLI Structure ---
#[derive(Parser)]
#[command(name = "Timesheet Generator")]
#[command(about = "Generate a monthly attendance timesheet as an Excel file", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the month grid and billing summary
    Preview,
    /// Write Timesheet_<Month>_<Year>.xlsx
    Export {
        /// Directory to write the workbook into
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    dotenv().ok(); // Reads the .env file

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let defaults = FormDefaults::from_env();

    match cli.command {
        Commands::Preview => handle_preview(&defaults)?,
        Commands::Export { output_dir } => handle_export(&defaults, output_dir)?,
    }

    Ok(())
}

// --- Form ---
fn prompt_request(defaults: &FormDefaults) -> Result<TimesheetRequest, Box<dyn Error>> {
    println!("\n--- Automated Timesheet Generator ---");

    let employee_name = Text::new("Employee Name:")
        .with_default(&defaults.employee_name)
        .prompt()?;

    let month = CustomType::<u32>::new("Month (1-12):")
        .with_default(defaults.month)
        .with_validator(|m: &u32| in_range(*m, 1, 12, "Month must be between 1 and 12"))
        .prompt()?;
    let year = CustomType::<i32>::new("Year:")
        .with_default(defaults.year)
        .with_validator(|y: &i32| in_range(*y, 2020, 2100, "Year must be between 2020 and 2100"))
        .prompt()?;

    let po_number = Text::new("PO Number:")
        .with_default(&defaults.po_number)
        .prompt()?;
    let project_id = Text::new("Project ID:")
        .with_default(&defaults.project_id)
        .prompt()?;
    let tata_manager_name = Text::new("Tata Technologies Manager:")
        .with_default(&defaults.tata_manager_name)
        .prompt()?;
    let client_manager_name = Text::new("Client Manager:")
        .with_default(&defaults.client_manager_name)
        .prompt()?;

    let monthly_rate = CustomType::<f64>::new("Monthly Rate:")
        .with_default(defaults.monthly_rate)
        .with_validator(|r: &f64| {
            in_range(*r, 0.0, 1_000_000.0, "Rate must be between 0 and 1000000")
        })
        .prompt()?;
    let contract_days = CustomType::<u32>::new("Contract Days:")
        .with_default(defaults.contract_days)
        .with_validator(|d: &u32| in_range(*d, 1, 31, "Contract days must be between 1 and 31"))
        .prompt()?;

    let leaves = Text::new("Leave Days (comma separated):")
        .with_default(&defaults.leave_days)
        .prompt()?;
    let holidays = Text::new("Holiday Days (comma separated):")
        .with_default(&defaults.holiday_days)
        .prompt()?;

    Ok(TimesheetRequest {
        employee_name,
        month,
        year,
        po_number,
        project_id,
        tata_manager_name,
        client_manager_name,
        monthly_rate,
        contract_days,
        leave_days: parse_day_list(&leaves),
        holiday_days: parse_day_list(&holidays),
    })
}

fn in_range<T: PartialOrd>(
    value: T,
    min: T,
    max: T,
    message: &'static str,
) -> Result<Validation, inquire::CustomUserError> {
    if value >= min && value <= max {
        Ok(Validation::Valid)
    } else {
        Ok(Validation::Invalid(message.into()))
    }
}

// --- Preview: Matrix of days for the month ---
fn handle_preview(defaults: &FormDefaults) -> Result<(), Box<dyn Error>> {
    let request = prompt_request(defaults)?;
    let generated = generate(&request)?;

    println!(
        "\nTimesheet: {} {}",
        generated.record.month_name(),
        generated.record.year()
    );
    timesheet_table(&generated.record).printstd();
    println!("\n{}", generated.billing);

    Ok(())
}

fn timesheet_table(record: &TimesheetRecord) -> Table {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);

    // --- Header Row: Emp Name | Mon 01 | Tue 02 | ... ---
    let mut header_cells = vec![Cell::new("Emp Name").style_spec("b")];
    for entry in record.days() {
        header_cells.push(
            Cell::new(&format!("{}\n{:02}", entry.weekday_abbrev(), entry.day)).style_spec("bc"),
        );
    }
    table.set_titles(Row::new(header_cells));

    let mut row_cells = vec![Cell::new(record.employee_name())];
    for entry in record.days() {
        let cell = match entry.kind {
            DayType::Worked => Cell::new("1").style_spec("c"),
            DayType::Weekend => Cell::new("WO").style_spec("c"),
            DayType::Holiday => Cell::new("H").style_spec("bcFr"),
            DayType::Leave => Cell::new("L").style_spec("bcFy"),
        };
        row_cells.push(cell);
    }
    table.add_row(Row::new(row_cells));

    table
}

// --- Export Timesheet to Excel ---
fn handle_export(
    defaults: &FormDefaults,
    output_dir: Option<PathBuf>,
) -> Result<(), Box<dyn Error>> {
    let request = prompt_request(defaults)?;
    let generated = generate(&request)?;

    println!("\n{}", generated.billing);

    let output_dir = output_dir.unwrap_or_else(|| defaults.output_dir.clone());
    fs::create_dir_all(&output_dir)?;
    let path = output_dir.join(&generated.filename);
    fs::write(&path, &generated.bytes)?;

    println!("File successfully generated: {}", path.display());
    Ok(())
}
