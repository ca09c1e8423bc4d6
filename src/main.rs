mod commands;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use lexicon_core::{config, Catalog};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "lexicon",
    version,
    about = "Look up texts in a directory of <base>_<lang>.properties files"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file.
    #[arg(short, long, default_value = "lexicon.toml")]
    config: String,

    /// Directory holding the language files (overrides config).
    #[arg(long, global = true)]
    dir: Option<String>,

    /// Base name of the language files (overrides config).
    #[arg(long, global = true)]
    base_name: Option<String>,

    /// Fallback language code (overrides config).
    #[arg(long, global = true)]
    default_lang: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// List loaded language codes.
    Langs,
    /// Print the text for a key.
    Get {
        /// The text key, e.g. `welcome.message`.
        key: String,
        /// Language code; unknown codes fall back to the default language.
        #[arg(short, long)]
        lang: Option<String>,
        /// Placeholder value as `name=value`; repeatable.
        #[arg(short, long = "param", value_parser = commands::parse_param)]
        params: Vec<(String, String)>,
    },
    /// Print every entry of a language, sorted by key.
    Dump {
        /// Language code; unknown codes fall back to the default language.
        #[arg(short, long)]
        lang: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut cfg = load_config(&cli.config, log_filter("warn"), std::io::stderr)?;
    if let Some(dir) = cli.dir {
        cfg.catalog.dir = dir;
    }
    if let Some(base_name) = cli.base_name {
        cfg.catalog.base_name = base_name;
    }
    if let Some(default_lang) = cli.default_lang {
        cfg.catalog.default_lang = default_lang;
    }

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(&cfg.lexicon.log_level))
        .with_writer(std::io::stderr)
        .init();

    let catalog = Catalog::from_config(&cfg.catalog).with_context(|| {
        format!(
            "cannot load '{}' catalog from {}",
            cfg.catalog.base_name, cfg.catalog.dir
        )
    })?;

    let output = match cli.command {
        Commands::Langs => commands::langs(&catalog),
        Commands::Get { key, lang, params } => {
            if key.is_empty() {
                anyhow::bail!("no key provided. Usage: lexicon get <key>");
            }
            commands::get(&catalog, lang.as_deref(), &key, &params)?
        }
        Commands::Dump { lang } => commands::dump(&catalog, lang.as_deref())?,
    };
    println!("{output}");

    Ok(())
}

/// `RUST_LOG` if set, else `default`.
fn log_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Load the config under a temporary subscriber so loader events are not
/// dropped before the configured `log_level` is known.
fn load_config<W>(path: &str, filter: EnvFilter, writer: W) -> anyhow::Result<config::Config>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let bootstrap = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .finish();
    let cfg = tracing::subscriber::with_default(bootstrap, || config::load(path))?;
    Ok(cfg)
}
