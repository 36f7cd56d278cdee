#![deny(
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used
)]
#![allow(clippy::print_stdout)]

use clap::{Args, Parser, Subcommand};
use openstates_sdk::{
    config::Config,
    jurisdictions::{HttpJurisdictionClient, JurisdictionApiClient, JurisdictionClassification},
    people::{FilterType, HttpPeopleClient, Inclusion, OrgClassification, PeopleApiClient, PeopleQuery},
};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

/// Query the Open States jurisdictions and people API.
#[derive(Debug, Parser)]
#[command(name = "openstates", version)]
struct Cli {
    /// YAML config file (defaults to ./openstates.yaml when present)
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Jurisdiction lookups
    #[command(subcommand)]
    Jurisdictions(JurisdictionsCommand),
    /// Legislator lookups
    #[command(subcommand)]
    People(PeopleCommand),
}

#[derive(Debug, Args)]
struct InclusionFlags {
    /// Include chambers and their districts
    #[arg(long)]
    organizations: bool,
    /// Include legislative sessions
    #[arg(long)]
    sessions: bool,
}

#[derive(Debug, Subcommand)]
enum JurisdictionsCommand {
    /// List one page of jurisdictions
    List {
        #[arg(long, default_value = "state")]
        classification: JurisdictionClassification,
        #[command(flatten)]
        include: InclusionFlags,
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, default_value_t = 10)]
        per_page: u32,
    },
    /// Fetch one jurisdiction by OCD id
    Get {
        id: String,
        #[command(flatten)]
        include: InclusionFlags,
    },
}

#[derive(Debug, Subcommand)]
enum PeopleCommand {
    /// List one page of people matching filters
    List {
        #[arg(long)]
        jurisdiction: Option<String>,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        district: Option<String>,
        /// OCD person id; repeatable
        #[arg(long = "id")]
        ids: Vec<String>,
        #[arg(long)]
        org_classification: Option<OrgClassification>,
        /// other_names, other_identifiers or links; repeatable
        #[arg(long)]
        include: Vec<Inclusion>,
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, default_value_t = 10)]
        per_page: u32,
    },
    /// List people representing a coordinate
    Geo {
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        #[arg(long, allow_hyphen_values = true)]
        lng: f64,
        #[arg(long)]
        include: Vec<Inclusion>,
    },
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn run_jurisdictions(config: &Config, command: JurisdictionsCommand) -> anyhow::Result<()> {
    let client = HttpJurisdictionClient::from_config(&config.api)?;

    match command {
        JurisdictionsCommand::List {
            classification,
            include,
            page,
            per_page,
        } => {
            let list = client
                .list_jurisdictions(
                    classification,
                    include.organizations,
                    include.sessions,
                    page,
                    per_page,
                )
                .await?;
            tracing::info!(
                results = list.results.len(),
                total = list.pagination.total_items,
                "listed jurisdictions"
            );
            print_json(&list)
        }
        JurisdictionsCommand::Get { id, include } => {
            let jurisdiction = client
                .get_jurisdiction(&id, include.organizations, include.sessions)
                .await?;
            print_json(&jurisdiction)
        }
    }
}

async fn run_people(config: &Config, command: PeopleCommand) -> anyhow::Result<()> {
    let client = HttpPeopleClient::from_config(&config.api)?;

    match command {
        PeopleCommand::List {
            jurisdiction,
            name,
            district,
            ids,
            org_classification,
            include,
            page,
            per_page,
        } => {
            let mut query = PeopleQuery::new().page(page).per_page(per_page);
            for (kind, value) in [
                (FilterType::Jurisdiction, jurisdiction),
                (FilterType::Name, name),
                (FilterType::District, district),
            ] {
                if let Some(value) = value {
                    query = query.filter(kind, value);
                }
            }
            query.ids = ids;
            query.org_classification = org_classification;
            query.include = include;

            let list = client.list_people(&query).await?;
            tracing::info!(
                results = list.results.len(),
                total = list.pagination.total_items,
                "listed people"
            );
            print_json(&list)
        }
        PeopleCommand::Geo { lat, lng, include } => {
            let list = client.list_people_geo(lat, lng, &include).await?;
            print_json(&list)
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();

    // Load and validate configuration first (fail-fast)
    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .map_err(|e| anyhow::anyhow!("{e}"))?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.level))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(
        version = env!("CARGO_PKG_VERSION"),
        base_url = %config.api.base_url,
        "openstates client starting"
    );

    match cli.command {
        Command::Jurisdictions(command) => run_jurisdictions(&config, command).await,
        Command::People(command) => run_people(&config, command).await,
    }
}
