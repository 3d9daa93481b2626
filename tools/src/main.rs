use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use codec::{Character, ParseOptions, SaveVersion};
use d2s_tools::{format_summary, resave, summarize};
use tables::TableSet;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "d2s-tools",
    version,
    about = "Inspect, convert and rebuild d2s character saves"
)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,
    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct GlobalArgs {
    /// Warn about a stale checksum or file size instead of failing.
    #[arg(long, global = true)]
    lenient_checksum: bool,
    /// Decode unknown save versions with the nearest known layout.
    #[arg(long, global = true)]
    allow_unknown_version: bool,
    /// Table set JSON to use instead of the built-in tables.
    #[arg(long, global = true)]
    tables: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Convert a save to JSON.
    Convert { input: PathBuf, output: PathBuf },
    /// Print a summary of a save.
    Inspect {
        input: PathBuf,
        /// Output format.
        #[arg(long, value_enum, default_value_t = InspectFormat::Text)]
        format: InspectFormat,
    },
    /// Re-encode a save and verify the result.
    Resave { input: PathBuf, output: PathBuf },
    /// Build a save from its JSON form.
    Build { input: PathBuf, output: PathBuf },
    /// Dump the built-in tables as JSON.
    Tables {
        /// Raw save version, e.g. 96 for classic or 98 for Resurrected 2.4.
        #[arg(long, default_value_t = SaveVersion::CLASSIC.raw())]
        version: u32,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum InspectFormat {
    Text,
    Json,
}

impl GlobalArgs {
    fn parse_options(&self) -> ParseOptions {
        ParseOptions::default()
            .with_strict_checksum(!self.lenient_checksum)
            .with_allow_unknown_version(self.allow_unknown_version)
    }

    fn load_tables(&self) -> Result<Option<TableSet>> {
        let Some(path) = &self.tables else {
            return Ok(None);
        };
        let json =
            fs::read_to_string(path).with_context(|| format!("read tables {}", path.display()))?;
        let set = TableSet::from_json(&json)
            .with_context(|| format!("load tables {}", path.display()))?;
        Ok(Some(set))
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let options = cli.global.parse_options();
    let custom_tables = cli.global.load_tables()?;

    match cli.command {
        Command::Convert { input, output } => {
            let bytes = read_save(&input)?;
            let tables = pick_tables(custom_tables.as_ref(), &bytes);
            let character = codec::parse_with_tables(&bytes, &options, tables)
                .with_context(|| format!("parse {}", input.display()))?;
            let json = serde_json::to_string_pretty(&character).context("serialize json")?;
            write_file(&output, json.as_bytes())?;
        }
        Command::Inspect { input, format } => {
            let bytes = read_save(&input)?;
            let tables = pick_tables(custom_tables.as_ref(), &bytes);
            let character = codec::parse_with_tables(&bytes, &options, tables)
                .with_context(|| format!("parse {}", input.display()))?;
            let summary = summarize(&bytes, &character, tables);
            match format {
                InspectFormat::Text => print!("{}", format_summary(&summary)),
                InspectFormat::Json => {
                    let json = serde_json::to_string_pretty(&summary).context("serialize json")?;
                    println!("{json}");
                }
            }
        }
        Command::Resave { input, output } => {
            let bytes = read_save(&input)?;
            let tables = pick_tables(custom_tables.as_ref(), &bytes);
            let report = resave(&bytes, &options, tables)
                .with_context(|| format!("resave {}", input.display()))?;
            if !report.verified {
                bail!("re-encoded save does not decode to the same document");
            }
            write_file(&output, &report.bytes)?;
            let note = if report.identical {
                "identical"
            } else {
                "size or checksum updated"
            };
            println!(
                "wrote {} ({} bytes, checksum 0x{:08x}, {note})",
                output.display(),
                report.bytes.len(),
                report.checksum
            );
        }
        Command::Build { input, output } => {
            let json = fs::read_to_string(&input)
                .with_context(|| format!("read {}", input.display()))?;
            let character: Character =
                serde_json::from_str(&json).context("parse character json")?;
            let tables = custom_tables
                .as_ref()
                .unwrap_or_else(|| TableSet::builtin(character.header.version));
            let bytes = codec::encode_with_tables(&character, tables)
                .with_context(|| format!("encode {}", input.display()))?;
            write_file(&output, &bytes)?;
        }
        Command::Tables { version } => {
            let tables = custom_tables
                .as_ref()
                .unwrap_or_else(|| TableSet::builtin(SaveVersion::new(version)));
            let json = serde_json::to_string_pretty(tables).context("serialize tables")?;
            println!("{json}");
        }
    }
    Ok(())
}

fn read_save(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("read save {}", path.display()))
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    fs::write(path, bytes).with_context(|| format!("write {}", path.display()))
}

/// Custom tables when given, else the built-in set for the save's version.
fn pick_tables<'a>(custom: Option<&'a TableSet>, bytes: &[u8]) -> &'a TableSet {
    custom.unwrap_or_else(|| {
        let version = layout::read_u32(bytes, layout::offsets::VERSION).unwrap_or_default();
        TableSet::builtin(SaveVersion::new(version))
    })
}
