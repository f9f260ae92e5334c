//! bind-docs — extract function documentation from DocBook reference pages.
//!
//! Two modes:
//!
//! - **symbol mode**: `bind-docs -d Docs Clear BindBuffer=BindBuffer:target,buffer`
//! - **index mode**: `bind-docs -d Docs --filter 'Uniform*'` documents every
//!   indexed page whose name matches

use anyhow::{bail, Context, Result};
use bind_docs::render::{self, Entry};
use bind_docs::{
    DocProcessor, EnumTranslator, FunctionSymbol, IdentityTranslator, Legacy, PascalCaseTranslator,
    Settings,
};
use clap::{Parser, ValueEnum};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "bind-docs",
    about = "Extract normalized function documentation from DocBook reference pages"
)]
struct Cli {
    /// Symbols as CANONICAL[=TRIMMED][:PARAM,PARAM...]. If omitted, every
    /// indexed page is documented.
    symbols: Vec<String>,

    /// Primary documentation directory
    #[arg(short = 'd', long)]
    doc_path: Option<PathBuf>,

    /// Fallback documentation directory
    #[arg(short = 'F', long)]
    fallback_doc_path: Option<PathBuf>,

    /// Prefix turning a symbol name into a file name (default: gl)
    #[arg(long)]
    function_prefix: Option<String>,

    /// Prefix stripped from <constant> text before translation (default: GL_)
    #[arg(long)]
    constant_prefix: Option<String>,

    /// Legacy compatibility mode (repeatable)
    #[arg(long, value_enum)]
    legacy: Vec<Legacy>,

    /// How constant names are rewritten
    #[arg(long, value_enum, default_value_t = Translation::Pascal)]
    translate: Translation,

    /// Output format: markdown (default), json
    #[arg(short = 'f', long, default_value = "markdown")]
    format: String,

    /// Filter indexed pages by glob on the symbol name. Prefix with ! to
    /// exclude. Can be specified multiple times.
    #[arg(long)]
    filter: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Log lookups and cache activity
    #[arg(short = 'v', long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Translation {
    /// COLOR_BUFFER_BIT → ColorBufferBit
    Pascal,
    /// Leave constant names as written
    Identity,
}

impl Cli {
    fn settings(&self) -> Settings {
        let defaults = Settings::default();
        Settings {
            doc_path: self.doc_path.clone().unwrap_or(defaults.doc_path),
            fallback_doc_path: self
                .fallback_doc_path
                .clone()
                .unwrap_or(defaults.fallback_doc_path),
            function_prefix: self
                .function_prefix
                .clone()
                .unwrap_or(defaults.function_prefix),
            constant_prefix: self
                .constant_prefix
                .clone()
                .unwrap_or(defaults.constant_prefix),
            legacy: self.legacy.iter().copied().collect(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let renderer = render::create_renderer(&cli.format)?;
    let mut processor =
        DocProcessor::new(cli.settings()).context("failed to index documentation directories")?;

    let symbols = if cli.symbols.is_empty() {
        indexed_symbols(&processor, &cli.filter)?
    } else {
        cli.symbols
            .iter()
            .map(|s| parse_symbol(s))
            .collect::<Result<Vec<_>>>()?
    };

    let translator: &dyn EnumTranslator = match cli.translate {
        Translation::Pascal => &PascalCaseTranslator,
        Translation::Identity => &IdentityTranslator,
    };
    let docs: Vec<_> = symbols
        .iter()
        .map(|symbol| processor.process(symbol, translator))
        .collect();

    let stats = processor.stats();
    tracing::info!(
        symbols = symbols.len(),
        files_parsed = stats.files_parsed,
        symbol_cache_hits = stats.symbol_cache_hits,
        file_cache_hits = stats.file_cache_hits,
        placeholders = stats.placeholders,
        "documentation processed"
    );

    let entries: Vec<Entry> = symbols
        .iter()
        .zip(&docs)
        .map(|(symbol, docs)| Entry {
            name: &symbol.canonical_name,
            docs,
        })
        .collect();
    let output = renderer.render(&entries)?;

    match cli.output {
        Some(ref path) => fs::write(path, &output)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => print!("{}", output),
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "bind_docs=debug" } else { "bind_docs=warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Parse `CANONICAL[=TRIMMED][:PARAM,PARAM...]`. The trimmed name defaults
/// to the canonical name.
fn parse_symbol(arg: &str) -> Result<FunctionSymbol> {
    let (names, params) = match arg.split_once(':') {
        Some((names, params)) => (names, Some(params)),
        None => (arg, None),
    };
    let (canonical, trimmed) = names.split_once('=').unwrap_or((names, names));
    let canonical = canonical.trim();
    let trimmed = trimmed.trim();
    if canonical.is_empty() || trimmed.is_empty() {
        bail!("invalid symbol: {:?}", arg);
    }
    let params = params
        .map(|p| {
            p.split(',')
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .collect::<Vec<_>>()
        })
        .unwrap_or_default();
    Ok(FunctionSymbol::new(canonical, trimmed, params))
}

/// One symbol per indexed `<prefix><name>.xml` page, filtered by glob.
fn indexed_symbols(processor: &DocProcessor, filters: &[String]) -> Result<Vec<FunctionSymbol>> {
    let mut include = Vec::new();
    let mut exclude = Vec::new();
    for filter in filters {
        let (list, pattern) = match filter.strip_prefix('!') {
            Some(excluded) => (&mut exclude, excluded),
            None => (&mut include, filter.as_str()),
        };
        list.push(
            glob::Pattern::new(pattern)
                .with_context(|| format!("invalid filter pattern: {}", filter))?,
        );
    }

    let prefix = &processor.settings().function_prefix;
    let symbols: Vec<FunctionSymbol> = processor
        .index()
        .names()
        .filter_map(|file| file.strip_prefix(prefix.as_str())?.strip_suffix(".xml"))
        .filter(|name| !name.is_empty())
        .filter(|name| include.is_empty() || include.iter().any(|p| p.matches(name)))
        .filter(|name| !exclude.iter().any(|p| p.matches(name)))
        .map(|name| FunctionSymbol::new(name, name, Vec::<String>::new()))
        .collect();

    if symbols.is_empty() {
        tracing::warn!("no documentation pages matched");
    }
    Ok(symbols)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_name_only() {
        let s = parse_symbol("Clear").unwrap();
        assert_eq!(s, FunctionSymbol::new("Clear", "Clear", Vec::<String>::new()));
    }

    #[test]
    fn symbol_with_trimmed_and_params() {
        let s = parse_symbol("Uniform4fv=Uniform4:location, count,value").unwrap();
        assert_eq!(s.canonical_name, "Uniform4fv");
        assert_eq!(s.trimmed_name, "Uniform4");
        assert_eq!(s.parameters, ["location", "count", "value"]);
    }

    #[test]
    fn symbol_params_without_trimmed() {
        let s = parse_symbol("Clear:mask").unwrap();
        assert_eq!(s.trimmed_name, "Clear");
        assert_eq!(s.parameters, ["mask"]);
    }

    #[test]
    fn symbol_empty_name_rejected() {
        assert!(parse_symbol("=Foo").is_err());
        assert!(parse_symbol(":a,b").is_err());
    }
}
