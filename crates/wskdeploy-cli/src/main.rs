//! wskdeploy CLI tool.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "wskdeploy")]
#[command(about = "OpenWhisk action packaging CLI", long_about = None)]
struct Cli {
    /// Path to the tool configuration (defaults to ./wskdeploy.kdl if present)
    #[arg(long, env = "WSKDEPLOY_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve an artifact into an action exec descriptor
    Exec {
        /// Source file, zip bundle or docker image
        artifact: String,
        /// Runtime kind (inferred from the extension when omitted)
        #[arg(long)]
        kind: Option<String>,
        /// Treat the artifact as a docker image
        #[arg(long)]
        docker: bool,
        /// Entry point (Java main class)
        #[arg(long)]
        main: Option<String>,
    },
    /// Set the web export annotations of an action
    Web {
        /// Web export mode: yes, true, no, false or raw
        mode: String,
        /// Existing annotation as key=value (value parsed as JSON when possible)
        #[arg(short, long = "annotation")]
        annotations: Vec<String>,
        /// Action or sequence name
        #[arg(long, default_value = "action")]
        name: String,
        /// Annotations are still to be fetched from the platform
        #[arg(long)]
        fetch: bool,
    },
    /// Zip a directory (entries rooted under its name)
    ZipDir {
        /// Directory or file to archive
        src: PathBuf,
        /// Destination zip file
        dest: PathBuf,
    },
    /// Zip a set of files at the archive root
    ZipFiles {
        /// Destination zip file
        dest: PathBuf,
        /// Files to add
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Validate and show the tool configuration
    Config {
        /// API host overriding the configured one
        #[arg(long, env = "WSK_APIHOST")]
        apihost: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = commands::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Exec {
            artifact,
            kind,
            docker,
            main,
        } => {
            commands::exec::run(&config, &artifact, kind, docker, main)?;
        }
        Commands::Web {
            mode,
            annotations,
            name,
            fetch,
        } => {
            commands::web::run(&mode, &annotations, &name, fetch)?;
        }
        Commands::ZipDir { src, dest } => {
            commands::archive::zip_dir(&src, &dest)?;
        }
        Commands::ZipFiles { dest, files } => {
            commands::archive::zip_files(&dest, &files)?;
        }
        Commands::Config { apihost } => {
            commands::show_config(config, apihost)?;
        }
    }

    Ok(())
}
