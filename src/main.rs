use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use tunescout::{cli, config, error, types::SortCriterion, types::SortDirection, utils};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print the song catalog as a table
    List(ListOptions),

    /// Browse the catalog interactively and play previews
    Browse(CatalogOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct CatalogOptions {
    /// Search term sent to the iTunes API (default: TUNESCOUT_SEARCH_TERM or "Taylor Swift")
    #[clap(long)]
    pub term: Option<String>,

    /// Maximum number of songs to fetch (default: TUNESCOUT_SEARCH_LIMIT or 200)
    #[clap(long)]
    pub limit: Option<u32>,
}

#[derive(Parser, Debug, Clone)]
pub struct ListOptions {
    #[clap(flatten)]
    pub catalog: CatalogOptions,

    /// Only show songs whose track or album name contains this text
    #[clap(long)]
    pub search: Option<String>,

    /// Sort field: track or album
    #[clap(long, default_value = "track", value_parser = utils::parse_sort_criterion)]
    pub sort: SortCriterion,

    /// Sort descending
    #[clap(long)]
    pub desc: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

impl CatalogOptions {
    fn resolve(self) -> (String, u32) {
        (
            self.term.unwrap_or_else(config::search_term),
            self.limit
                .filter(|limit| *limit > 0)
                .unwrap_or_else(config::search_limit),
        )
    }
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::List(opt) => {
            let (term, limit) = opt.catalog.resolve();
            let direction = if opt.desc {
                SortDirection::Descending
            } else {
                SortDirection::Ascending
            };
            cli::list_songs(term, limit, opt.search, opt.sort, direction).await
        }
        Command::Browse(opt) => {
            let (term, limit) = opt.resolve();
            cli::browse(term, limit).await
        }
        Command::Completions(opt) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
