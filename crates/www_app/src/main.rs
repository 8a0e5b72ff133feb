//! raziel-www: stages the admin UI's static assets and exercises the page
//! behavior controller from the command line.

mod platform;

use std::path::PathBuf;

use anyhow::Result;
use asset_stager::StageOptions;
use clap::{Parser, Subcommand};
use page_core::Viewport;

use platform::logging::LogDestination;

#[derive(Parser, Debug)]
#[command(name = "raziel-www")]
#[command(about = "Stage the admin UI's static assets into www/", long_about = None)]
struct Cli {
    /// Where log output goes
    #[arg(long, value_enum, default_value_t = LogDestination::Terminal, global = true)]
    log: LogDestination,

    /// Log debug detail
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Clean the output trees, then copy every manifest entry (default)
    Stage {
        #[command(flatten)]
        project: ProjectArgs,
        /// Fail when an entry matches nothing
        #[arg(long)]
        strict: bool,
        /// Allow cleaning the project root or paths outside it
        #[arg(long)]
        force: bool,
        /// Write a JSON report of the staged files
        #[arg(long, value_name = "PATH")]
        report: Option<PathBuf>,
    },
    /// Remove the output trees only
    Clean {
        #[command(flatten)]
        project: ProjectArgs,
        #[arg(long)]
        force: bool,
    },
    /// Print the effective manifest
    Manifest {
        #[command(flatten)]
        project: ProjectArgs,
    },
    /// Print the responsive layout for a viewport
    #[command(allow_negative_numbers = true)]
    Layout {
        #[arg(long)]
        width: i32,
        #[arg(long)]
        height: i32,
        /// Fallback reading used when --width is not positive
        #[arg(long)]
        screen_width: Option<i32>,
        /// Fallback reading used when --height is not positive
        #[arg(long)]
        screen_height: Option<i32>,
    },
    /// Replay a scripted page session and print the final document state
    Simulate {
        #[arg(long, value_name = "PATH")]
        page: PathBuf,
    },
}

#[derive(clap::Args, Debug)]
struct ProjectArgs {
    /// Project root the manifest paths are relative to
    #[arg(long, value_name = "DIR", default_value = ".")]
    root: PathBuf,
    /// Manifest file (defaults to <root>/www.ron, then the built-in manifest)
    #[arg(long, value_name = "PATH")]
    manifest: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    platform::logging::initialize(cli.log, cli.verbose);

    let command = cli.command.unwrap_or(Command::Stage {
        project: ProjectArgs {
            root: PathBuf::from("."),
            manifest: None,
        },
        strict: false,
        force: false,
        report: None,
    });

    match command {
        Command::Stage {
            project,
            strict,
            force,
            report,
        } => platform::run_stage(platform::StageArgs {
            root: &project.root,
            manifest: project.manifest.as_deref(),
            options: StageOptions { strict, force },
            report: report.as_deref(),
        }),
        Command::Clean { project, force } => platform::run_clean(
            &project.root,
            project.manifest.as_deref(),
            StageOptions {
                strict: false,
                force,
            },
        ),
        Command::Manifest { project } => {
            platform::run_print_manifest(&project.root, project.manifest.as_deref())
        }
        Command::Layout {
            width,
            height,
            screen_width,
            screen_height,
        } => platform::run_layout(
            Viewport::new(width, height)
                .with_screen(screen_width.unwrap_or(width), screen_height.unwrap_or(height)),
        ),
        Command::Simulate { page } => platform::run_simulate(&page),
    }
}
