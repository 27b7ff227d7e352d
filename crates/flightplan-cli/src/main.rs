use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use flightplan_cli::commands::menu::Menu;
use flightplan_cli::commands::route::{handle_route_command, RouteCommandArgs};
use flightplan_cli::commands::search::{handle_search_command, SearchKind};
use flightplan_cli::commands::sort::handle_sort_command;
use flightplan_cli::commands::{OutputOptions, Session};
use flightplan_cli::output::OutputFormat;
use flightplan_cli::terminal::Palette;
use flightplan_lib::{Criterion, RouteId, SortAlgorithm, SortKey};

#[derive(Parser, Debug)]
#[command(author, version, about = "Plan, search and sort flight routes")]
struct Cli {
    /// Directory holding airports.csv, flights.csv and routes.csv.
    /// Defaults to $FLIGHTPLAN_DATA_DIR, then the platform data directory.
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Output format for results.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Disable ANSI colors.
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Find the best route between two airports.
    Route {
        /// Origin IATA code.
        #[arg(long = "from")]
        from: String,
        /// Destination IATA code.
        #[arg(long = "to")]
        to: String,
        /// cheapest, fastest, slowest or fewest-stopovers.
        #[arg(long, default_value_t = Criterion::Cheapest)]
        criterion: Criterion,
        /// Append the route to routes.csv.
        #[arg(long)]
        save: bool,
    },
    /// Look up airports and flights.
    Search {
        #[arg(value_enum)]
        kind: SearchKind,
        value: String,
    },
    /// Sort saved routes.
    Sort {
        /// Route ids to sort, comma separated; all saved routes when omitted.
        #[arg(long, value_delimiter = ',')]
        ids: Vec<RouteId>,
        /// price, duration, stopovers or combined.
        #[arg(long = "by", default_value_t = SortKey::Price)]
        key: SortKey,
        /// merge or quick.
        #[arg(long, default_value_t = SortAlgorithm::Merge)]
        algorithm: SortAlgorithm,
    },
    /// Start the interactive console menu.
    Menu,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let options = OutputOptions {
        format: cli.format,
        palette: Palette::detect(cli.no_color),
    };
    let mut session = Session::load(cli.data_dir.as_deref())?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Route {
            from,
            to,
            criterion,
            save,
        } => {
            let args = RouteCommandArgs {
                from,
                to,
                criterion,
                save,
            };
            handle_route_command(&mut session, &args, &options, &mut out)?;
        }
        Command::Search { kind, value } => {
            handle_search_command(&session.network, kind, &value, &options, &mut out)?;
        }
        Command::Sort {
            ids,
            key,
            algorithm,
        } => {
            handle_sort_command(&session.book, &ids, key, algorithm, &options, &mut out)?;
        }
        Command::Menu => {
            let stdin = io::stdin();
            Menu::new(&mut session, stdin.lock(), &mut out, options.palette).run()?;
        }
    }

    out.flush()?;
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
