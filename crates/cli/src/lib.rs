use anyhow::{Context as AnyhowContext, Result};
use clap::{Args, Parser, Subcommand};
use command::{
    CategoriesOutput, CommandAction, CommandHandler, CommandRequest, CommandResponse, ListOutput,
    ListPayload, LookupState, RelatedOutput, RelatedPayload, SearchOutput, SearchPayload,
    ShowOutput, ShowPayload,
};
use serde::Serialize;
use showcase_catalog::Catalog;
use std::env;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

mod command;
mod report;

const CATALOG_ENV: &str = "SHOWCASE_CATALOG";

/// Exit code for a detail lookup that missed; the caller should go back to the index.
const EXIT_NOT_FOUND: u8 = 2;

fn print_stdout(text: &str) -> Result<()> {
    use std::io::Write;

    let mut stdout = io::stdout().lock();
    if let Err(err) = stdout
        .write_all(text.as_bytes())
        .and_then(|_| stdout.write_all(b"\n"))
        .and_then(|_| stdout.flush())
    {
        if err.kind() == io::ErrorKind::BrokenPipe {
            return Ok(());
        }
        return Err(err.into());
    }
    Ok(())
}

#[derive(Parser)]
#[command(name = "showcase")]
#[command(about = "Browse a portfolio catalog by category, id and search", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Catalog file (JSON or TOML); defaults to $SHOWCASE_CATALOG, then the bundled portfolio
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors
    #[arg(long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Execute a JSON Command API request
    Command(CommandArgs),

    /// List project cards, optionally filtered by category and search text
    List(ListArgs),

    /// List categories (with the "all" pseudo-category first)
    Categories(OutputArgs),

    /// Show one project with resolved defaults and related projects
    Show(ShowArgs),

    /// List projects in the same category as the given one
    Related(RelatedArgs),

    /// Ranked fuzzy search over titles, descriptions and technologies
    Search(SearchArgs),
}

#[derive(Args)]
struct CommandArgs {
    /// Inline JSON payload (mutually exclusive with --file)
    #[arg(long, conflicts_with = "file")]
    json: Option<String>,

    /// Path to file containing JSON payload
    #[arg(long)]
    file: Option<PathBuf>,

    /// Pretty-print JSON response
    #[arg(long)]
    pretty: bool,
}

#[derive(Args)]
struct OutputArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct ListArgs {
    /// Category to show ("all" for no filter)
    #[arg(short, long, default_value = "all")]
    category: String,

    /// Substring filter over title, description, category and technologies
    #[arg(short, long)]
    search: Option<String>,

    /// Comma-separated ids to highlight
    #[arg(long)]
    highlight: Option<String>,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args)]
struct ShowArgs {
    /// Project id
    id: String,

    /// Maximum number of related projects
    #[arg(long, default_value_t = showcase_catalog::DEFAULT_RELATED_LIMIT)]
    related: usize,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args)]
struct RelatedArgs {
    /// Project id
    id: String,

    /// Maximum number of results
    #[arg(short, long, default_value_t = showcase_catalog::DEFAULT_RELATED_LIMIT)]
    limit: usize,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args)]
struct SearchArgs {
    /// Search query
    query: String,

    /// Maximum number of results
    #[arg(short, long, default_value_t = 10)]
    limit: usize,

    #[command(flatten)]
    output: OutputArgs,
}

pub fn main_entry() -> Result<ExitCode> {
    let mut cli = Cli::parse();

    let json_output = match &cli.command {
        Commands::Command(_) => true,
        Commands::List(args) => args.output.json,
        Commands::Categories(args) => args.json,
        Commands::Show(args) => args.output.json,
        Commands::Related(args) => args.output.json,
        Commands::Search(args) => args.output.json,
    };
    if json_output {
        cli.quiet = true;
    }

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    let catalog = load_catalog(cli.catalog.as_ref())?;
    let handler = CommandHandler::new(&catalog);

    match cli.command {
        Commands::Command(args) => run_command(&handler, args),
        Commands::List(args) => run_list(&handler, args),
        Commands::Categories(args) => run_categories(&handler, args),
        Commands::Show(args) => run_show(&handler, args),
        Commands::Related(args) => run_related(&handler, args),
        Commands::Search(args) => run_search(&handler, args),
    }
}

fn load_catalog(flag: Option<&PathBuf>) -> Result<Catalog> {
    let path = flag
        .cloned()
        .or_else(|| env::var_os(CATALOG_ENV).map(PathBuf::from));
    let catalog = match path {
        Some(path) => Catalog::from_file(&path)
            .with_context(|| format!("Failed to load catalog {}", path.display()))?,
        None => Catalog::builtin().context("Bundled catalog is invalid")?,
    };
    log::debug!(
        "catalog '{}' ready: {} items",
        catalog.name().unwrap_or("unnamed"),
        catalog.len()
    );
    Ok(catalog)
}

fn run_command(handler: &CommandHandler<'_>, args: CommandArgs) -> Result<ExitCode> {
    let raw = read_payload(&args)?;
    let request: CommandRequest =
        serde_json::from_str(&raw).context("Invalid JSON passed to --json/--file")?;

    let response = handler.execute(request);

    let output = if args.pretty {
        serde_json::to_string_pretty(&response)?
    } else {
        serde_json::to_string(&response)?
    };
    print_stdout(&output)?;

    Ok(if response.is_error() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

fn read_payload(args: &CommandArgs) -> Result<String> {
    if let Some(raw) = &args.json {
        return Ok(raw.clone());
    }
    if let Some(path) = &args.file {
        return fs::read_to_string(path)
            .with_context(|| format!("Failed to read JSON from {}", path.display()));
    }

    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read JSON from stdin")?;

    if buffer.trim().is_empty() {
        anyhow::bail!("Command request is empty. Provide --json, --file, or pipe JSON via stdin.");
    }

    Ok(buffer)
}

fn dispatch<P: Serialize>(
    handler: &CommandHandler<'_>,
    action: CommandAction,
    payload: P,
) -> Result<CommandResponse> {
    let request = CommandRequest {
        action,
        payload: serde_json::to_value(payload)?,
    };
    let response = handler.execute(request);
    if response.is_error() {
        anyhow::bail!(
            "{}",
            response.message.as_deref().unwrap_or("Unknown error")
        );
    }
    for hint in &response.hints {
        log::info!("{}", hint.text);
    }
    Ok(response)
}

fn run_list(handler: &CommandHandler<'_>, args: ListArgs) -> Result<ExitCode> {
    let payload = ListPayload {
        category: Some(args.category),
        search: args.search,
        highlight: args.highlight,
    };
    let response = dispatch(handler, CommandAction::List, payload)?;
    if args.output.json {
        print_stdout(&serde_json::to_string_pretty(&response)?)?;
    } else {
        let out: ListOutput = response.data_as()?;
        print_stdout(&report::render_list(&out))?;
    }
    Ok(ExitCode::SUCCESS)
}

fn run_categories(handler: &CommandHandler<'_>, args: OutputArgs) -> Result<ExitCode> {
    let response = dispatch(handler, CommandAction::Categories, serde_json::json!({}))?;
    if args.json {
        print_stdout(&serde_json::to_string_pretty(&response)?)?;
    } else {
        let out: CategoriesOutput = response.data_as()?;
        print_stdout(&report::render_categories(&out))?;
    }
    Ok(ExitCode::SUCCESS)
}

fn run_show(handler: &CommandHandler<'_>, args: ShowArgs) -> Result<ExitCode> {
    let payload = ShowPayload {
        id: args.id,
        related_limit: Some(args.related),
    };
    let response = dispatch(handler, CommandAction::Show, payload)?;
    let out: ShowOutput = response.data_as()?;

    if args.output.json {
        print_stdout(&serde_json::to_string_pretty(&response)?)?;
    } else if let Some(detail) = &out.detail {
        print_stdout(&report::render_detail(detail))?;
    } else {
        eprintln!(
            "Project '{}' not found. Back to {}",
            out.id,
            out.redirect.as_deref().unwrap_or(showcase_catalog::INDEX_ROUTE)
        );
    }

    Ok(match out.state {
        LookupState::Found => ExitCode::SUCCESS,
        LookupState::NotFound => ExitCode::from(EXIT_NOT_FOUND),
    })
}

fn run_related(handler: &CommandHandler<'_>, args: RelatedArgs) -> Result<ExitCode> {
    let payload = RelatedPayload {
        id: args.id,
        limit: Some(args.limit),
    };
    let response = dispatch(handler, CommandAction::Related, payload)?;
    let out: RelatedOutput = response.data_as()?;

    if args.output.json {
        print_stdout(&serde_json::to_string_pretty(&response)?)?;
    } else if out.state == LookupState::Found {
        print_stdout(&report::render_related(&out))?;
    } else {
        eprintln!("Project '{}' not found", out.id);
    }

    Ok(match out.state {
        LookupState::Found => ExitCode::SUCCESS,
        LookupState::NotFound => ExitCode::from(EXIT_NOT_FOUND),
    })
}

fn run_search(handler: &CommandHandler<'_>, args: SearchArgs) -> Result<ExitCode> {
    let payload = SearchPayload {
        query: args.query,
        limit: Some(args.limit),
    };
    let response = dispatch(handler, CommandAction::Search, payload)?;
    if args.output.json {
        print_stdout(&serde_json::to_string_pretty(&response)?)?;
    } else {
        let out: SearchOutput = response.data_as()?;
        print_stdout(&report::render_search(&out))?;
    }
    Ok(ExitCode::SUCCESS)
}
