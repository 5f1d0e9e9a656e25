use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use client_core::{
    load_or_empty, load_settings, render_dashboard,
    views::{create_failure_message, CREATE_SUCCESS_MESSAGE},
    EmployeeGateway, HttpEmployeeGateway, RecordStore,
};
use shared::domain::{EmployeeForm, ACTIVE_STATUS};
use tracing_subscriber::EnvFilter;

mod output;

#[derive(Parser, Debug)]
#[command(name = "employee-records", about = "Headless client for the employee records API")]
struct Args {
    /// Base URL of the employee API; overrides the settings file and environment.
    #[arg(long, global = true)]
    api_base: Option<String>,
    /// Settings file to read instead of the default locations.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Total, active and average net pay.
    Summary,
    /// The five most recently added employees, newest first.
    Recent,
    /// Every employee with a 1-based row number.
    List {
        /// Print the raw records as JSON instead of a table.
        #[arg(long)]
        json: bool,
    },
    /// Employees whose id or name contains QUERY (case-insensitive).
    Search { query: String },
    /// Post a new employee, then print the refreshed summary.
    Add {
        #[arg(long)]
        id: String,
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        dept: String,
        #[arg(long, default_value = "")]
        phone: String,
        #[arg(long, default_value = "")]
        salary: String,
        #[arg(long, default_value = "")]
        net_pay: String,
        #[arg(long, default_value = ACTIVE_STATUS)]
        status: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let settings = load_settings(args.config.as_deref(), args.api_base.as_deref())?;
    let gateway = HttpEmployeeGateway::from_settings(&settings);

    match args.command {
        Command::Summary => {
            let store = load_store(&gateway).await;
            print!("{}", output::summary(&render_dashboard(&store, "").cards));
        }
        Command::Recent => {
            let store = load_store(&gateway).await;
            print!("{}", output::recent_table(&render_dashboard(&store, "").recent));
        }
        Command::List { json } => {
            let store = load_store(&gateway).await;
            if json {
                println!("{}", serde_json::to_string_pretty(store.get())?);
            } else {
                print!("{}", output::full_table(&render_dashboard(&store, "").table));
            }
        }
        Command::Search { query } => {
            let store = load_store(&gateway).await;
            print!("{}", output::full_table(&render_dashboard(&store, &query).table));
        }
        Command::Add {
            id,
            name,
            dept,
            phone,
            salary,
            net_pay,
            status,
        } => {
            let form = EmployeeForm {
                emp_id: id,
                emp_name: name,
                emp_dept: dept,
                emp_phone: phone,
                emp_salary: salary,
                emp_net_pay: net_pay,
                emp_status: status,
            };
            if let Err(err) = gateway.create(&form).await {
                tracing::error!("create employee failed: {err}");
                bail!("{}", create_failure_message(&err));
            }
            println!("{CREATE_SUCCESS_MESSAGE}");
            let store = load_store(&gateway).await;
            print!("{}", output::summary(&render_dashboard(&store, "").cards));
        }
    }

    Ok(())
}

async fn load_store(gateway: &HttpEmployeeGateway) -> RecordStore {
    let mut store = RecordStore::new();
    store.replace(load_or_empty(gateway).await);
    store
}
