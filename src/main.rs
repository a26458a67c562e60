use authors_page::config::{self, PluginConfig};
use authors_page::load;
use authors_page::plugin::AuthorsPlugin;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "authors-page")]
#[command(about = "Generate a contributors page for a documentation site")]
#[command(long_about = "\
Generate a contributors page for a documentation site

Reads a YAML file describing the project's authors and renders it as a
Markdown page with per-author avatar, affiliation, bio, email, and social
links. The authors file lives next to the docs directory:

  project/
  ├── .authors.yml                 # Authors data (this tool's input)
  ├── authors-page.toml            # Tool config (optional)
  └── docs/                        # Documentation content root
      └── index.md

Authors file structure:

  page_params:                     # Optional page-level settings
    title: Our Team
    avatar_size: 120               # Pixels, default 100
    avatar_shape: circle           # circle | square (default)
    avatar_align: left             # left | right | center (default)
  authors:
    jdoe:                          # Key becomes the author id
      name: Jane Doe
      affiliation: Example Labs
      avatar: https://example.com/jane.png
      github: jdoe

A missing or malformed authors file never fails the run; the page degrades
to a fixed notice instead.

Run 'authors-page gen-config' to print a documented authors-page.toml.")]
#[command(version)]
struct Cli {
    /// Documentation content directory; the authors file is looked up one
    /// level above it
    #[arg(long, default_value = "docs", global = true)]
    docs_dir: PathBuf,

    /// Tool config file (TOML); stock defaults are used when absent
    #[arg(long, default_value = "authors-page.toml", global = true)]
    config: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the authors page to stdout or a file
    Render {
        /// Write the page here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Load the authors file and report what would be rendered
    Check,
    /// Print a stock authors-page.toml with all options documented
    GenConfig,
}

/// Map `-v` count to a log filter, with `RUST_LOG` taking precedence.
fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match cli.command {
        Command::Render { out } => {
            let config = PluginConfig::load(&cli.config)?;
            let mut plugin = AuthorsPlugin::new(config);
            let page = plugin.generate(&cli.docs_dir);
            match out {
                Some(path) => {
                    std::fs::write(&path, page)?;
                    println!("Authors page written to {}", path.display());
                }
                None => print!("{page}"),
            }
        }
        Command::Check => {
            let config = PluginConfig::load(&cli.config)?;
            let plugin = AuthorsPlugin::new(config);
            let source = plugin.source_path(&cli.docs_dir);
            match std::fs::read_to_string(&source) {
                Ok(raw) => {
                    let doc = load::load(&raw, &plugin.config().page_params_key);
                    println!("{}: ok", source.display());
                    println!("  title:   {}", doc.page_params.title);
                    println!("  authors: {}", doc.authors.len());
                    for author in &doc.authors {
                        let name = author.name.as_deref().unwrap_or("(unnamed)");
                        println!("    {} ({})", name, author.id);
                    }
                }
                Err(err) => {
                    println!("{}: not readable ({err})", source.display());
                    println!("The page would contain the fallback notice.");
                }
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
