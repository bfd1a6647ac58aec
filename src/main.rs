//! # DevFolio CLI (`folio`)
//!
//! The `folio` binary is a personal DevOps portfolio for the terminal. It
//! carries the same content as the hosted site: a searchable project
//! catalog, reusable Dockerfile and pipeline templates, a skill matrix, a
//! career timeline, and a contact card wired to a mail relay.
//!
//! ## Usage
//!
//! ```bash
//! folio [--config ./folio.toml] <command>
//! ```
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `folio projects [QUERY]` | List projects, filtered by a search query |
//! | `folio save <PROJECT>` | Download a project's showcase document |
//! | `folio templates` | List Dockerfile and pipeline templates |
//! | `folio templates show <NAME>` | Print a template to stdout |
//! | `folio templates save <NAME>...` | Write templates to disk |
//! | `folio skills` | Show the technical skill matrix |
//! | `folio timeline` | Show the career timeline |
//! | `folio about` | Show the introduction block |
//! | `folio contact` | Show the contact card |
//! | `folio contact send` | Deliver a message through the mail relay |
//! | `folio completions <SHELL>` | Generate shell completion scripts |
//!
//! ## Examples
//!
//! ```bash
//! # Full project catalog, in its curated order
//! folio projects
//!
//! # Case-insensitive substring search
//! folio projects kube
//!
//! # Save a Dockerfile template into the current directory
//! folio templates save node
//!
//! # Send a message (requires [relay] endpoint in folio.toml)
//! folio contact send --name "Ada" --email ada@example.com --message "Hello!"
//! ```

use std::path::PathBuf;
use std::time::Duration;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use devfolio::{about, config, contact, projects, save, skills, templates, timeline};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// DevFolio CLI. A DevOps portfolio for the terminal.
///
/// All commands accept a `--config` flag pointing to a TOML configuration
/// file. See `folio.example.toml` for a full example; without one, the
/// builtin portfolio content is used.
#[derive(Parser)]
#[command(
    name = "folio",
    about = "A personal DevOps portfolio for the terminal",
    version,
    long_about = "DevFolio renders a DevOps portfolio as a terminal tool: a searchable project \
    catalog, production-ready Dockerfile and CI/CD pipeline templates you can save to disk, a \
    skill matrix, a career timeline, and a contact card that can deliver messages through a \
    configured mail relay."
)]
struct Cli {
    /// Path to configuration file (TOML).
    ///
    /// Defaults to `./folio.toml`. The file is optional: when it does not
    /// exist, the builtin portfolio content is used as is.
    #[arg(long, global = true, default_value = "./folio.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
enum Commands {
    /// List portfolio projects, optionally filtered.
    ///
    /// The filter is a case-insensitive substring match over each project's
    /// title and description. Without a query the whole catalog is shown in
    /// its curated order.
    Projects {
        /// Search query. Whitespace is matched literally, not trimmed.
        query: Option<String>,

        /// Maximum number of projects to show.
        #[arg(long)]
        limit: Option<usize>,

        /// Emit the matching projects as a JSON array.
        #[arg(long)]
        json: bool,
    },

    /// Download a project's showcase document.
    ///
    /// Works for projects whose reference is a hosted PDF. When the download
    /// fails the published link is printed instead and the command still
    /// succeeds.
    Save {
        /// Project title, a unique part of it, or its position in the list.
        project: String,

        /// Directory to write into. Defaults to `[output] dir` from config.
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Browse Dockerfile and pipeline templates.
    ///
    /// Without a subcommand, lists every template by name.
    Templates {
        #[command(subcommand)]
        action: Option<TemplatesAction>,
    },

    /// Show the technical skill matrix.
    Skills,

    /// Show the career timeline.
    Timeline,

    /// Show the introduction block.
    About,

    /// Show the contact card, or send a message.
    Contact {
        #[command(subcommand)]
        action: Option<ContactAction>,
    },

    /// Generate shell completion scripts.
    ///
    /// Writes a completion script for the given shell to stdout.
    Completions {
        /// Shell to generate completions for.
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Template subcommands.
#[derive(Subcommand)]
enum TemplatesAction {
    /// List templates, optionally filtered (the default action).
    List {
        /// Search query over template titles and descriptions.
        query: Option<String>,

        /// Restrict to one collection: `dockerfile` or `pipeline`.
        #[arg(long)]
        kind: Option<String>,

        /// Emit the matching templates as a JSON array.
        #[arg(long)]
        json: bool,
    },

    /// Print a template's content to stdout.
    ///
    /// The output is the raw template, suitable for piping into a file.
    Show {
        /// Template name, e.g. `node` or `azure-pipelines`.
        name: String,
    },

    /// Write templates to disk under their download file names.
    Save {
        /// Template names, e.g. `node` or `azure-pipelines`.
        #[arg(required_unless_present = "all")]
        names: Vec<String>,

        /// Save every template.
        #[arg(long)]
        all: bool,

        /// Directory to write into. Defaults to `[output] dir` from config.
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

/// Contact subcommands.
#[derive(Subcommand)]
enum ContactAction {
    /// Send a message through the configured mail relay.
    ///
    /// Requires `endpoint` under `[relay]` in the config file. The message
    /// is delivered as a single JSON POST; failure exits non-zero.
    Send {
        /// Sender name.
        #[arg(long)]
        name: String,

        /// Reply-to email address.
        #[arg(long)]
        email: String,

        /// Message body.
        #[arg(long)]
        message: String,
    },
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(atty::is(atty::Stream::Stderr))
        .init();
}

fn http_client() -> anyhow::Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .connect_timeout(CONNECT_TIMEOUT)
        .timeout(HTTP_TIMEOUT)
        .redirect(reqwest::redirect::Policy::limited(5))
        .build()?;
    Ok(client)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    // Completions don't need config
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        clap_complete::generate(*shell, &mut cmd, name, &mut std::io::stdout());
        return Ok(());
    }

    let cfg = config::load_or_builtin(&cli.config)?;

    match cli.command {
        Commands::Projects { query, limit, json } => {
            projects::run_projects(&cfg, query, limit, json)?;
        }
        Commands::Save { project, out } => {
            let client = http_client()?;
            save::run_save(&cfg, &client, &project, out).await?;
        }
        Commands::Templates { action } => {
            let action = action.unwrap_or(TemplatesAction::List {
                query: None,
                kind: None,
                json: false,
            });
            match action {
                TemplatesAction::List { query, kind, json } => {
                    templates::run_list(query, kind, json)?;
                }
                TemplatesAction::Show { name } => {
                    templates::run_show(&name)?;
                }
                TemplatesAction::Save { names, all, out } => {
                    templates::run_template_save(&cfg, &names, all, out)?;
                }
            }
        }
        Commands::Skills => {
            skills::run_skills()?;
        }
        Commands::Timeline => {
            timeline::run_timeline()?;
        }
        Commands::About => {
            about::run_about(&cfg)?;
        }
        Commands::Contact { action } => match action {
            None => {
                contact::run_card(&cfg)?;
            }
            Some(ContactAction::Send {
                name,
                email,
                message,
            }) => {
                let client = http_client()?;
                contact::run_send(&cfg, &client, &name, &email, &message).await?;
            }
        },
        Commands::Completions { .. } => {
            // Handled above (before config loading)
            unreachable!()
        }
    }

    Ok(())
}
