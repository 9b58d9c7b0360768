//! Command-line shim around the library.
//!
//! Runs one plate lookup against the catalog API, loads the review feed and
//! prints both screens:
//!
//! ```text
//! ancora ABC1D23 --base-url https://catalogo.example.com/api
//! ```
//!
//! Configuration is read from `--config`, or from `<config dir>/ancora/config.toml`
//! when present. Command-line flags win over the file.

use ancora::service::{HttpLookupService, MockReviewSource};
use ancora::ui::{render_reviews, render_search};
use ancora::{handle_event, initialize, perform, AncoraError, AppState, Config, Event};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(name = "ancora", about = "Look up a vehicle by license plate")]
struct Args {
    /// License plate, e.g. ABC1234 or ABC1D23.
    plate: String,

    /// Catalog API base URL.
    #[arg(long)]
    base_url: Option<String>,

    /// Path to a TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Built-in palette name.
    #[arg(long)]
    palette: Option<String>,

    /// Output width in columns.
    #[arg(long, default_value_t = 72)]
    width: usize,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(AncoraError::InvalidPlate(message)) => {
            eprintln!("{message}");
            ExitCode::from(2)
        }
        Err(e) => {
            eprintln!("ancora: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> ancora::Result<()> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(base_url) = args.base_url {
        config.lookup_base_url = base_url;
    }
    if let Some(palette) = args.palette {
        config.palette_file = None;
        config.palette_name = Some(palette);
    }

    ancora::observability::init_tracing(&config);

    let lookup = HttpLookupService::new(&config.lookup_base_url, config.request_timeout())?;
    let reviews = MockReviewSource::builtin(config.review_delay())?;
    let mut state = initialize(&config, Arc::new(lookup), Arc::new(reviews));

    let mut actions = handle_event(&mut state, Event::PlateChanged(args.plate))?;
    actions.extend(handle_event(&mut state, Event::SubmitSearch)?);
    actions.extend(handle_event(&mut state, Event::ReviewsRequested)?);

    let events = futures_util::future::join_all(actions.iter().map(|action| perform(&state, action))).await;
    for event in events.into_iter().flatten() {
        handle_event(&mut state, event)?;
    }

    print_screens(&state, args.width);
    Ok(())
}

fn load_config(explicit: Option<&std::path::Path>) -> ancora::Result<Config> {
    if let Some(path) = explicit {
        return Config::load(path);
    }

    match dirs::config_dir().map(|dir| dir.join("ancora").join("config.toml")) {
        Some(path) if path.is_file() => Config::load(path),
        _ => Ok(Config::default()),
    }
}

fn print_screens(state: &AppState, width: usize) {
    print!("{}", render_search(&state.search_viewmodel(), &state.palette, width));
    println!();
    print!("{}", render_reviews(&state.reviews_viewmodel(), &state.palette, width));
}
