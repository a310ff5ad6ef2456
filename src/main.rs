use chrono::Local;
use clap::Parser;
use color_eyre::eyre::{bail, WrapErr};
use color_eyre::Result;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

use etrack::export::{export_csv, export_json};
use etrack::generator::Generator;
use etrack::layout::BuildingLayout;
use etrack::model::{PropertyStatus, PropertyType};
use etrack::query::{parse_selection, PropertyFilter};
use etrack::session::{SessionStore, UserDirectory, DEFAULT_SESSION_FILE};
use etrack::ui::App;

#[derive(Parser, Debug)]
#[command(name = "etrack")]
#[command(about = "Etrack - browse a building's rooms and track the equipment in them")]
#[command(version)]
struct Args {
    /// Seed for reproducible equipment generation
    #[arg(long)]
    seed: Option<u64>,

    /// Building layout file (TOML); the built-in layout is used otherwise
    #[arg(long, value_name = "FILE")]
    layout: Option<PathBuf>,

    /// Export the inventory to CSV
    #[arg(long, value_name = "FILE")]
    csv: Option<PathBuf>,

    /// Export the whole building to JSON
    #[arg(long, value_name = "FILE")]
    json: Option<PathBuf>,

    /// Only export this property type (or "all")
    #[arg(long = "type", value_name = "TYPE", default_value = "all")]
    property_type: String,

    /// Only export this status (or "all")
    #[arg(long, value_name = "STATUS", default_value = "all")]
    status: String,

    /// Sign in with this email
    #[arg(long, requires = "password")]
    email: Option<String>,

    /// Password for --email
    #[arg(long, requires = "email")]
    password: Option<String>,

    /// Sign out and exit
    #[arg(long)]
    logout: bool,

    /// Where the signed-in user is stored
    #[arg(long, value_name = "FILE", default_value = DEFAULT_SESSION_FILE)]
    session_file: PathBuf,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

fn init_tracing(log_file: Option<&Path>) -> Result<()> {
    // stderr shares the terminal with the dashboard, so keep it quiet there
    let (writer, default_filter) = match log_file {
        Some(path) => {
            let file = File::create(path)
                .wrap_err_with(|| format!("failed to create log file '{}'", path.display()))?;
            (BoxMakeWriter::new(Mutex::new(file)), "etrack=info")
        }
        None => (BoxMakeWriter::new(std::io::stderr), "etrack=warn"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(writer)
        .with_ansi(log_file.is_none())
        .init();

    Ok(())
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    init_tracing(args.log_file.as_deref())?;

    let session = SessionStore::new(&args.session_file);

    if args.logout {
        session.clear()?;
        println!("Signed out");
        return Ok(());
    }

    let layout = match &args.layout {
        Some(path) => BuildingLayout::load(path)?,
        None => BuildingLayout::default(),
    };

    let today = Local::now().date_naive();
    let building = match args.seed {
        Some(seed) => Generator::seeded(seed, today).building(&layout)?,
        None => Generator::from_entropy(today).building(&layout)?,
    };

    if args.csv.is_some() || args.json.is_some() {
        if let Some(csv_path) = &args.csv {
            let filter = PropertyFilter::new()
                .property_type(parse_selection::<PropertyType>(&args.property_type)?)
                .status(parse_selection::<PropertyStatus>(&args.status)?);
            let rows = export_csv(&building, &filter, csv_path)?;
            println!("Exported {rows} properties to CSV: {}", csv_path.display());
        }

        if let Some(json_path) = &args.json {
            export_json(&building, json_path)?;
            println!("Exported to JSON: {}", json_path.display());
        }

        return Ok(());
    }

    let user = match (&args.email, &args.password) {
        (Some(email), Some(password)) => {
            let Some(user) = UserDirectory::default().login(email, password) else {
                bail!("invalid email or password");
            };
            session.save(&user)?;
            user
        }
        _ => match session.load()? {
            Some(user) => user,
            None => bail!("not signed in; pass --email and --password"),
        },
    };

    let terminal = ratatui::init();
    let result = App::new(building, user, today).run(terminal);
    ratatui::restore();
    result
}
