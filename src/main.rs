//! siku-md - catalog HTML to Markdown converter

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use siku_md::{ConvertConfig, Converter, LinkConfig, RenderConfig, default_output_path};

#[derive(Parser)]
#[command(name = "siku-md")]
#[command(
    version,
    about = "Convert the Siku Quanshu Cunmu Congshu catalog to linked Markdown",
    long_about = None
)]
#[command(after_help = "EXAMPLES:
    siku-md index.html              Write index.md next to the input
    siku-md index.html out/list.md  Write to an explicit path
    siku-md -v index.html           Log section changes while converting")]
struct Cli {
    /// Input HTML file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output Markdown file (defaults to INPUT with an .md extension)
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// URL prefix for generated volume links
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Also link volume references on bulleted catalog entries
    #[arg(long)]
    annotate_entries: bool,

    /// Suppress the success message
    #[arg(short, long)]
    quiet: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn config(&self) -> ConvertConfig {
        let mut links = LinkConfig::default();
        if let Some(ref url) = self.base_url {
            links = links.with_base_url(url.as_str());
        }
        let render = RenderConfig {
            annotate_catalog_entries: self.annotate_entries,
        };
        ConvertConfig::default()
            .with_links(links)
            .with_render(render)
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&cli.input));

    // Conversion failures are reported but do not change the exit status.
    match Converter::with_config(cli.config()).convert_file(&cli.input, &output) {
        Ok(()) => {
            if !cli.quiet {
                println!("Successfully converted HTML to Markdown: {}", output.display());
            }
        }
        Err(e) => println!("Error converting file: {e}"),
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time(),
        )
        .init();
}
