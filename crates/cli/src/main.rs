use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;

use report_adapter::MarkdownReportWriter;
use sheet_adapter::CsvSheetStore;
use tracker_core::application::TrackerService;
use tracker_core::ports::{Category, RecordStore};
use tracker_core::utils::{format_brl, parse_entry_date};
use tracker_core::{Error, Result, Vehicle};

/// CLI tool to log vehicle fuel and maintenance expenses in CSV worksheets
/// and render aggregate expense reports as Markdown
#[derive(Parser, Debug)]
#[command(name = "controle-veiculos")]
#[command(about = "Logs fuel purchases and maintenance events and builds expense reports")]
struct Cli {
    /// Directory holding the worksheet files
    #[arg(long = "data-dir", default_value = "dados")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Record a fuel purchase
    AddFuel {
        /// Vehicle: carro or moto
        #[arg(long)]
        vehicle: Vehicle,

        /// Current odometer reading in km
        #[arg(long)]
        odometer: f64,

        /// Liters filled
        #[arg(long)]
        liters: f64,

        /// Price per liter
        #[arg(long)]
        price: f64,

        /// Purchase date (defaults to today)
        #[arg(long)]
        date: Option<String>,
    },

    /// Record a maintenance event
    AddMaintenance {
        /// Vehicle: carro or moto
        #[arg(long)]
        vehicle: Vehicle,

        /// What was done
        #[arg(long)]
        description: String,

        /// Amount spent
        #[arg(long)]
        cost: f64,

        /// Event date (defaults to today)
        #[arg(long)]
        date: Option<String>,
    },

    /// List stored records, newest first
    List {
        /// Category to list: consumo or manutencao
        category: Category,
    },

    /// Write the aggregate Markdown report
    Report {
        /// Path of the report file
        #[arg(long, default_value = "relatorio.md")]
        output: PathBuf,
    },
}

fn main() {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        if e.is_validation() {
            eprintln!("Warning: {e}");
        } else {
            eprintln!("Error: {e}");
        }
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    // Instantiate the concrete store adapter and inject it into the core service
    let store: Box<dyn RecordStore> = Box::new(CsvSheetStore::new(cli.data_dir.clone()));
    let service = TrackerService::new(store);

    match cli.command {
        Command::AddFuel {
            vehicle,
            odometer,
            liters,
            price,
            date,
        } => {
            let date = resolve_date(date.as_deref())?;
            let record = service.submit_fuel(date, vehicle, odometer, liters, price)?;
            println!(
                "Recorded fuel purchase for {} on {}: {:.2} L, total {}",
                record.vehicle,
                record.date,
                record.liters,
                format_brl(record.total_cost)
            );
        }

        Command::AddMaintenance {
            vehicle,
            description,
            cost,
            date,
        } => {
            let date = resolve_date(date.as_deref())?;
            let record = service.submit_maintenance(date, vehicle, &description, cost)?;
            println!(
                "Recorded maintenance for {} on {}: {} ({})",
                record.vehicle,
                record.date,
                record.description,
                format_brl(record.cost)
            );
        }

        Command::List { category } => match category {
            Category::Fuel => {
                let records = service.fuel_records();
                if records.is_empty() {
                    println!("No fuel records.");
                }
                for r in &records {
                    println!(
                        "{}  {:<5}  {:>9.1} km  {:>6.2} L  {}/L  {}",
                        r.date,
                        r.vehicle.label(),
                        r.odometer_km,
                        r.liters,
                        format_brl(r.price_per_liter),
                        format_brl(r.total_cost)
                    );
                }
            }
            Category::Maintenance => {
                let records = service.maintenance_records();
                if records.is_empty() {
                    println!("No maintenance records.");
                }
                for r in &records {
                    println!(
                        "{}  {:<5}  {:>10}  {}",
                        r.date,
                        r.vehicle.label(),
                        format_brl(r.cost),
                        r.description
                    );
                }
            }
        },

        Command::Report { output } => {
            let writer = MarkdownReportWriter::new(&output);
            service.write_report(&writer)?;
            println!("Report written to {}", output.display());
        }
    }

    Ok(())
}

fn resolve_date(arg: Option<&str>) -> Result<NaiveDate> {
    match arg {
        None => Ok(Local::now().date_naive()),
        Some(input) => parse_entry_date(input)
            .ok_or_else(|| Error::Validation(format!("could not parse date '{input}'"))),
    }
}
