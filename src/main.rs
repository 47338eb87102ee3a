//! Prefix Index - command-line entrypoint.
//!
//! Builds prefix tries from word lists or fruit catalogues and prints exact
//! lookups, autocomplete suggestions and rendered trees.

use anyhow::Context;
use clap::{Parser, Subcommand};
use prefix_index_lib::catalog::{self, Fruit};
use prefix_index_lib::config::{self, ConfigLoader, LogConfig, PrefixIndexConfig};
use prefix_index_lib::data_structures::{KeyNormalizer, PrefixTrie};
use prefix_index_lib::error::{PrefixIndexError, PrefixIndexResult};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Words indexed by the `demo` command.
const DEMO_WORDS: [&str; 6] = ["apple", "application", "apply", "banana", "band", "bat"];

/// Command line arguments for the prefix index.
#[derive(Parser, Debug)]
#[clap(name = "prefix_index", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Where the keys of a trie come from.
#[derive(clap::Args, Debug)]
struct WordSource {
    /// File with one key per line
    #[clap(short, long, value_parser)]
    words: Option<PathBuf>,

    /// Keys given directly on the command line
    keys: Vec<String>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Run the reference scenario and print the results
    Demo,

    /// Print every key that starts with a prefix
    Suggest {
        /// Prefix to complete
        #[clap(short, long)]
        prefix: String,

        #[clap(flatten)]
        source: WordSource,
    },

    /// Print the trie as an indented tree
    Render {
        #[clap(flatten)]
        source: WordSource,
    },

    /// Autocomplete fruit names and print the matching records as JSON
    Fruits {
        /// Prefix to complete
        #[clap(short, long)]
        prefix: String,

        /// JSON catalogue to use instead of the built-in sample
        #[clap(long, value_parser)]
        catalog: Option<PathBuf>,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the configured level. Logs go to stderr so
/// that command output on stdout stays machine-readable.
fn init_logging(log: &LogConfig) -> PrefixIndexResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(log.source_location)
        .with_line_number(log.source_location)
        .with_writer(std::io::stderr);

    let installed = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };
    installed.map_err(|e| {
        PrefixIndexError::Custom(format!("Failed to set global tracing subscriber: {e}"))
    })
}

/// Builds a trie of normalized keys from a word source.
fn build_trie(source: &WordSource, normalizer: KeyNormalizer) -> anyhow::Result<PrefixTrie> {
    let mut keys = source.keys.clone();
    if let Some(path) = &source.words {
        let words = catalog::read_word_list(path)
            .with_context(|| format!("failed to read word list {}", path.display()))?;
        keys.extend(words);
    }

    let mut trie = PrefixTrie::new();
    for key in &keys {
        trie.insert(normalizer.normalize(key).chars());
    }
    info!(keys = trie.len(), nodes = trie.node_count(), "trie built");
    Ok(trie)
}

fn load_fruits(path: Option<&Path>) -> anyhow::Result<Vec<Fruit>> {
    match path {
        Some(path) => catalog::read_fruit_catalog(path)
            .with_context(|| format!("failed to read fruit catalogue {}", path.display())),
        None => Ok(catalog::sample_fruits().to_vec()),
    }
}

fn run_demo() {
    let trie: PrefixTrie = DEMO_WORDS.iter().map(|w| w.chars()).collect();

    println!("Words inserted into the trie: {DEMO_WORDS:?}");
    for word in ["apple", "app", "banana", "ball"] {
        println!("Is '{word}' in trie? {}", trie.search(word.chars()));
    }
    for prefix in ["app", "ban", "cat"] {
        println!("Does any word start with '{prefix}'? {}", trie.starts_with(prefix.chars()));
    }
    for prefix in ["app", "ba"] {
        let suggestions: Vec<String> = trie.get_suggestions(prefix.chars());
        println!("Suggestions for '{prefix}': {suggestions:?}");
    }
    println!("\nTrie structure:\n{}", trie.render());
}

fn run(command: Command, settings: &PrefixIndexConfig) -> anyhow::Result<()> {
    let index = &settings.index;
    match command {
        Command::Demo => run_demo(),
        Command::Suggest { prefix, source } => {
            let normalizer = index.normalizer();
            let trie = build_trie(&source, normalizer)?;
            let suggestions: Vec<String> =
                trie.get_suggestions(normalizer.normalize(&prefix).chars());
            for word in index.present(suggestions, |w| w.clone()) {
                println!("{word}");
            }
        }
        Command::Render { source } => {
            let trie = build_trie(&source, index.normalizer())?;
            print!("{}", trie.render());
        }
        Command::Fruits {
            prefix,
            catalog: catalog_path,
        } => {
            let fruits = load_fruits(catalog_path.as_deref())?;
            let fruit_index = catalog::build_fruit_index(&fruits, index.normalizer());
            let matches = index.present(
                fruit_index.get_suggestions_with_payload(&prefix),
                |fruit| fruit.name.clone(),
            );
            info!(prefix = %prefix, matches = matches.len(), "fruit autocomplete");
            println!("{}", serde_json::to_string_pretty(&matches)?);
        }
        Command::Validate => println!("Configuration is valid"),
        Command::GenConfig { output } => {
            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
            let toml = toml::to_string_pretty(&PrefixIndexConfig::default())
                .context("failed to serialize default configuration")?;
            std::fs::write(&output, toml)
                .with_context(|| format!("failed to write {}", output.display()))?;
            println!("Default configuration written to {}", output.display());
        }
    }
    Ok(())
}

/// Main entry point for the application.
fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let settings = ConfigLoader::new(args.config.as_deref(), config::ENV_PREFIX)
        .load()
        .context("failed to load configuration")?;
    init_logging(&settings.log)?;

    run(args.command.unwrap_or(Command::Demo), &settings)
}
