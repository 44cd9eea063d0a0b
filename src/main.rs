use clap::{
    ArgAction, CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};
use tracing_subscriber::EnvFilter;

use shrtcli::{cli, config, warning};

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
    /// Base address of the shortening service (overrides SHRT_SERVICE_URL)
    #[clap(long, global = true)]
    service_url: Option<String>,

    /// More diagnostic output on stderr; repeat for debug level
    #[clap(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List recent short URLs
    List,

    /// Create a short URL
    Shorten(ShortenOptions),

    /// Resolve a short code
    Open(OpenOptions),

    /// Copy the short link of a code to the clipboard
    Copy(CopyOptions),

    /// Run the local web front end
    Serve(ServeOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct ShortenOptions {
    /// URL to shorten
    pub url: String,

    /// Copy the new short link to the clipboard
    #[clap(long)]
    pub copy: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct OpenOptions {
    /// Short code to resolve
    pub short_code: String,

    /// Open the resolved URL in the default browser
    #[clap(long)]
    pub browse: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct CopyOptions {
    pub short_code: String,
}

#[derive(Parser, Debug, Clone)]
pub struct ServeOptions {
    /// Bind address (overrides SHRT_SERVER_ADDRESS)
    #[clap(long)]
    pub addr: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = config::load_env().await {
        warning!("Cannot load environment. Err: {}", e);
    }

    let service_url = cli.service_url.unwrap_or_else(config::service_url);

    match cli.command {
        Command::List => cli::list(&service_url).await,
        Command::Shorten(opt) => cli::shorten(&service_url, opt.url, opt.copy).await,
        Command::Open(opt) => cli::open(&service_url, &opt.short_code, opt.browse).await,
        Command::Copy(opt) => cli::copy(&service_url, &opt.short_code).await,
        Command::Serve(opt) => {
            let addr = opt.addr.unwrap_or_else(config::server_addr);
            cli::serve(&service_url, &addr).await
        }
        Command::Completions(opt) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
