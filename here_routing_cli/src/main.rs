use clap::{Parser, Subcommand};
use tracing::debug;

use crate::{
    generate::GenerateSubcommands,
    mode::{DecodeArgs, EncodeArgs},
    waypoints::WaypointsArgs,
};

mod generate;
mod logging;
mod mode;
mod parsers;
mod waypoints;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a routing mode into its request parameter
    #[command(visible_alias = "e")]
    Encode {
        #[command(flatten)]
        args: EncodeArgs,
    },
    /// Decode a routing mode request parameter and print it as JSON
    #[command(visible_alias = "d")]
    Decode {
        #[command(flatten)]
        args: DecodeArgs,
    },
    /// Print the waypoints of a calculate-route response
    Waypoints {
        #[command(flatten)]
        args: WaypointsArgs,
    },
    #[command(visible_alias = "g")]
    Generate {
        #[command(subcommand)]
        commands: GenerateSubcommands,
    },
}

fn main() -> Result<(), anyhow::Error> {
    let dotenv = dotenvy::from_filename("./.env.local");

    let cli = Cli::parse();
    logging::init(cli.debug);

    if let Ok(path) = dotenv {
        debug!("Loaded environment from {}", path.display());
    }

    match cli.command {
        Some(Commands::Encode { args }) => mode::run_encode(args)?,
        Some(Commands::Decode { args }) => mode::run_decode(args)?,
        Some(Commands::Waypoints { args }) => waypoints::run(args)?,
        Some(Commands::Generate { commands }) => generate::run(commands)?,
        None => {
            // Handle no command provided
        }
    }

    Ok(())
}
