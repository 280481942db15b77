use clap::{Parser, Subcommand};
use docnav::{output, patch, render, scan};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "docnav")]
#[command(about = "Sidebar navigation generator for static documentation sites")]
#[command(long_about = "\
Sidebar navigation generator for static documentation sites

Your filesystem is the data source. Top-level directories under the docs
root become sidebar sections, nested directories become collapsible groups,
and markdown files become links, ordered by numeric prefix.

Content structure:

  docs/
  ├── guides/                      # Category → sidebar section
  │   ├── 01-intro.md              # Numbered = ordered first
  │   ├── 02-setup.md
  │   ├── advanced/                # Subdirectory → collapsible group
  │   │   └── 01-tuning.md
  │   └── README.md                # Never listed
  ├── api/
  │   └── payments.md
  ├── _drafts/                     # Underscore prefix = skipped
  └── .cache/                      # Hidden = skipped

Titles come from filenames: the numeric prefix is stripped, dashes and
underscores become spaces, and ALL-CAPS names are title-cased
(01-OVERVIEW.md → \"Overview\").

'docnav preview' prints the generated sidebar for review; 'docnav update'
splices it into the layout file between the <aside class=\"sidebar\"> and
</aside> markers.")]
#[command(version)]
struct Cli {
    /// Documentation root directory
    #[arg(long, default_value = "docs", global = true)]
    source: PathBuf,

    /// Layout file containing the sidebar markers
    #[arg(long, default_value = "_layouts/default.html", global = true)]
    layout: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Scan and print the generated sidebar HTML without writing anything
    Preview {
        /// Dump the scanned structure as JSON instead of HTML
        #[arg(long)]
        json: bool,
    },
    /// Scan, render, and splice the sidebar into the layout file
    Update,
    /// Scan and print the documentation structure without rendering
    Check,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    // Preview is the default when invoked bare
    let command = cli.command.unwrap_or(Command::Preview { json: false });

    match command {
        Command::Preview { json } => {
            println!("==> Scanning {}", cli.source.display());
            let categories = scan::scan(&cli.source)?;
            output::print_scan_output(&categories);
            println!();

            if json {
                println!("{}", serde_json::to_string_pretty(&categories)?);
            } else {
                let sidebar = render::render_sidebar(&categories);
                output::print_preview_output(&sidebar);
            }
        }
        Command::Update => {
            println!("==> Scanning {}", cli.source.display());
            let categories = scan::scan(&cli.source)?;
            output::print_scan_output(&categories);

            println!();
            println!("==> Updating {}", cli.layout.display());
            let sidebar = render::render_sidebar(&categories);
            patch::patch_layout(&cli.layout, &sidebar)?;
            println!("==> Updated {}", cli.layout.display());
        }
        Command::Check => {
            println!("==> Scanning {}", cli.source.display());
            let categories = scan::scan(&cli.source)?;
            output::print_scan_output(&categories);
        }
    }

    Ok(())
}
