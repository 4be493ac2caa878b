use clap::{Parser, Subcommand};
use std::path::PathBuf;

use event_iq::{catalog, config, export, output, scoring};

const EXIT_SUCCESS: i32 = 0;
const EXIT_IO: i32 = 1;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score an event described in a YAML file
    Analyze {
        /// Path to the event YAML file
        event: PathBuf,

        /// Write the export record as JSON (to PATH, or a default name in export_dir)
        #[arg(long, value_name = "PATH", num_args = 0..=1)]
        export: Option<Option<PathBuf>>,

        /// Print the export record as JSON instead of the summary
        #[arg(long)]
        json: bool,
    },
    /// Create a profile config interactively
    Init,
    /// List the known firms, industries and event tags
    Catalog,
}

#[derive(Parser, Debug)]
#[command(name = "event-iq")]
#[command(about = "Consulting recruiting event scorer", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/event-iq/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn print_catalog() {
    let lists: [(&str, &[&str]); 5] = [
        ("Target firms", catalog::TARGET_FIRMS),
        ("Target industries", catalog::TARGET_INDUSTRIES),
        ("Case topics", catalog::CASE_TOPICS),
        ("Speaker qualities", catalog::SPEAKER_QUALITIES),
        ("Networking features", catalog::NETWORKING_FEATURES),
    ];
    for (title, entries) in lists {
        println!("{}:", title);
        for entry in entries {
            println!("  {}", entry);
        }
    }

    let event_types: Vec<String> = scoring::EventType::ALL.iter().map(yaml_name).collect();
    println!("Event types: {}", event_types.join(", "));
    let industries: Vec<String> = scoring::Industry::ALL.iter().map(yaml_name).collect();
    println!("Industries: {}", industries.join(", "));
}

/// The spelling an enum value takes in an event file.
fn yaml_name<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_value(value)
        .ok()
        .and_then(|v| v.as_str().map(String::from))
        .unwrap_or_default()
}

fn analyze(
    config: &config::Config,
    event_path: &std::path::Path,
    export_target: Option<Option<PathBuf>>,
    json: bool,
) -> i32 {
    let event = match config::load_event(event_path) {
        Ok(e) => e,
        Err(e) => {
            eprintln!("Event error: {:#}", e);
            return EXIT_CONFIG;
        }
    };

    if let Err(errors) = scoring::validate_event(&event) {
        eprintln!("Event errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        return EXIT_CONFIG;
    }

    for warning in scoring::range_warnings(&event, &config.profile) {
        log::warn!("{}", warning);
    }
    for warning in scoring::unknown_tags(&event, &config.profile) {
        log::warn!("{}", warning);
    }

    let event = event.clamped();
    let profile = config.profile.clamped();
    let result = scoring::score(&event, &profile);

    let record = export::ExportRecord::new(&event, &result, chrono::Utc::now());

    if json {
        match record.to_json() {
            Ok(s) => println!("{}", s),
            Err(e) => {
                eprintln!("Export error: {:#}", e);
                return EXIT_IO;
            }
        }
    } else {
        let use_colors = output::should_use_colors();
        println!(
            "{}",
            output::format_result(&event, &profile, &result, use_colors)
        );
    }

    if let Some(explicit) = export_target {
        let path = export::resolve_export_path(
            explicit.as_deref(),
            config.export_dir.as_deref(),
            &event.name,
        );
        if let Err(e) = export::write_export(&path, &record) {
            eprintln!("Export error: {:#}", e);
            return EXIT_IO;
        }
        eprintln!("Saved analysis to {}", path.display());
    }

    EXIT_SUCCESS
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config_path = cli.config.map(PathBuf::from);

    let code = match cli.command {
        Commands::Init => match config::init::run_init_wizard(config_path) {
            Ok(()) => EXIT_SUCCESS,
            Err(e) => {
                eprintln!("Init failed: {:#}", e);
                EXIT_IO
            }
        },
        Commands::Catalog => {
            print_catalog();
            EXIT_SUCCESS
        }
        Commands::Analyze {
            event,
            export,
            json,
        } => match config::load_config(config_path) {
            Ok(config) => {
                log::debug!("Profile: {:?}", config.profile);
                analyze(&config, &event, export, json)
            }
            Err(e) => {
                eprintln!("Config error: {:#}", e);
                EXIT_CONFIG
            }
        },
    };

    std::process::exit(code);
}
