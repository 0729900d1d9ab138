use clap::Parser;
use clap::error::ErrorKind;
use manga_builder::generate::Templates;
use manga_builder::output;
use manga_builder::pipeline::{self, BuildOptions};
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "manga-builder")]
#[command(about = "Build a static reading site from a folder of manga chapters")]
#[command(long_about = "\
Build a static reading site from a folder of manga chapters

Every subdirectory of DATA_PATH is a chapter; the .png and .jpg files in it
are its pages, read in filename order. Chapters are ordered shortest name
first, then alphabetically, so 9 comes before 10.

  manga/
  ├── 1/
  │   ├── 001.jpg
  │   └── 002.jpg
  ├── 2/
  └── 10/

The site is written into DATA_PATH itself:

  manga/index.html          chapter list
  manga/pages/<chapter>.html

The build refuses to run if pages/ or index.html already exists.")]
#[command(version = env!("MANGA_BUILDER_VERSION"))]
struct Cli {
    /// Folder holding one subdirectory per chapter
    data_path: PathBuf,

    /// Render with `index.html` and `page.html` Tera templates from this directory
    #[arg(long, value_name = "DIR")]
    template_dir: Option<PathBuf>,

    /// Exit with status 1 when the arguments are invalid, the build is refused,
    /// or any page fails
    #[arg(long)]
    fail_on_error: bool,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stdout)
        .with_ansi(std::io::stdout().is_terminal())
        .with_target(false)
        .without_time()
        .init();
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        // Bad arguments print usage and end the run like any other refusal.
        // The flag is read from the raw arguments since parsing failed.
        Err(e) => {
            println!("{}", e.render());
            return if std::env::args_os().any(|arg| arg == "--fail-on-error") {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    init_logging();

    let options = BuildOptions {
        templates: cli.template_dir.map_or(Templates::Builtin, Templates::Directory),
        ..BuildOptions::default()
    };

    let failed = match pipeline::build(&cli.data_path, &options) {
        Ok(report) => {
            output::print_build_output(&report, &cli.data_path);
            !report.is_complete()
        }
        Err(e) => {
            println!("{e}");
            true
        }
    };

    if failed && cli.fail_on_error {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
