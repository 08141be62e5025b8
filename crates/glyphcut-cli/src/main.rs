//! Command-line interface for glyphcut
//!
//! Subcommands cover the whole workflow around the core splitter: extract
//! a radical from a font glyph into the component store, re-clean a stored
//! component, add hand-edited records, export whole characters as SVG
//! documents, and dump raw glyph paths.

mod store;
mod svgout;

use std::collections::BTreeMap;
use std::io::BufRead;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use glyphcut::{BBox, CLEANUP_TOLERANCE, EXTRACT_TOLERANCE, Policy, SplitSpec, extract_component};
use glyphcut_font::GlyphFont;
use miette::{IntoDiagnostic, Result, bail, miette};
use serde::{Deserialize, Serialize};

use store::{ComponentRecord, DEFAULT_SCALE_Y, Store};

const DEFAULT_STORE: &str = "radicals.json";
const DEFAULT_FONT: &str = "fonts/NotoSerifSC-VariableFont_wght.ttf";

#[derive(Parser)]
#[command(
    name = "glyphcut",
    version,
    about = "Carve radical components out of CJK font glyphs"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Extract one side of a character's outline into the component store
    Extract(ExtractArgs),
    /// Re-clean a stored component against a max-x line
    Clean(CleanArgs),
    /// Add a hand-edited component record to the store
    Add(AddArgs),
    /// Export whole characters as standalone SVG documents
    Export(ExportArgs),
    /// Dump raw glyph paths for characters as JSON
    Dump(DumpArgs),
    /// List the components in the store
    List(ListArgs),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ExtractSide {
    Left,
    Right,
}

impl ExtractSide {
    fn policy(self) -> Policy {
        match self {
            ExtractSide::Left => Policy::Left,
            ExtractSide::Right => Policy::Right,
        }
    }

    fn label(self) -> &'static str {
        match self {
            ExtractSide::Left => "left",
            ExtractSide::Right => "right",
        }
    }
}

#[derive(Args)]
struct ExtractArgs {
    /// Character containing the target component, e.g. 持
    #[arg(required_unless_present = "batch", conflicts_with = "batch")]
    ch: Option<char>,

    /// Which side of the cut line to keep
    #[arg(long, value_enum, default_value = "left")]
    side: ExtractSide,

    /// Cut line position; defaults to a fraction of the glyph width
    #[arg(long)]
    cut_x: Option<f64>,

    /// Component name; defaults to "<char>_<side>"
    #[arg(long)]
    name: Option<String>,

    /// Boundary slack in design units
    #[arg(long, default_value_t = EXTRACT_TOLERANCE)]
    tolerance: f64,

    /// Batch job file: a JSON list of {"char", "side"?, "cut_x"?, "name"?}
    #[arg(long)]
    batch: Option<PathBuf>,

    /// Component store to update
    #[arg(long, default_value = DEFAULT_STORE)]
    output: PathBuf,

    /// Font file to extract from
    #[arg(long, default_value = DEFAULT_FONT)]
    font: PathBuf,
}

#[derive(Args)]
struct CleanArgs {
    /// Component name in the store
    name: String,

    /// Max-x line; defaults to the record's cut_x
    #[arg(long)]
    max_x: Option<f64>,

    /// Boundary slack in design units
    #[arg(long, default_value_t = CLEANUP_TOLERANCE)]
    tolerance: f64,

    /// Component store to read
    #[arg(long, default_value = DEFAULT_STORE)]
    file: PathBuf,

    /// Write here instead of overwriting the store
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Args)]
struct AddArgs {
    /// Component name, e.g. "冰2"
    name: String,

    /// Provenance tag, e.g. "冯_left_manual"
    #[arg(long)]
    source: String,

    /// Path data; read from stdin (lines until blank) when omitted
    #[arg(long)]
    path: Option<String>,

    #[arg(long)]
    note: Option<String>,

    /// Vertical scale for rendering; omitted from the file at the -0.2 default
    #[arg(long)]
    scale_y: Option<f64>,

    /// Component store to update
    #[arg(long, default_value = DEFAULT_STORE)]
    file: PathBuf,
}

#[derive(Args)]
struct ExportArgs {
    /// Characters to export (as one string or separate arguments)
    #[arg(required = true)]
    chars: Vec<String>,

    #[arg(long, default_value = "output_svg")]
    out_dir: PathBuf,

    /// Font file to extract from
    #[arg(long, default_value = DEFAULT_FONT)]
    font: PathBuf,
}

#[derive(Args)]
struct DumpArgs {
    /// Characters to dump (as one string or separate arguments)
    #[arg(required = true)]
    chars: Vec<String>,

    /// JSON file to write
    #[arg(long, default_value = DEFAULT_STORE)]
    output: PathBuf,

    /// Font file to extract from
    #[arg(long, default_value = DEFAULT_FONT)]
    font: PathBuf,
}

#[derive(Args)]
struct ListArgs {
    /// Component store to read
    #[arg(long, default_value = DEFAULT_STORE)]
    file: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match Cli::parse().command {
        Command::Extract(args) => run_extract(args),
        Command::Clean(args) => run_clean(args),
        Command::Add(args) => run_add(args),
        Command::Export(args) => run_export(args),
        Command::Dump(args) => run_dump(args),
        Command::List(args) => run_list(args),
    }
}

// ---------------------------------------------------------------------------
// extract
// ---------------------------------------------------------------------------

/// One extraction request, from the command line or a batch file.
struct ExtractJob {
    ch: char,
    side: ExtractSide,
    cut_x: Option<f64>,
    name: Option<String>,
}

#[derive(Deserialize)]
struct BatchJob {
    char: String,
    #[serde(default)]
    side: Option<String>,
    #[serde(default, alias = "split_x")]
    cut_x: Option<f64>,
    #[serde(default)]
    name: Option<String>,
}

impl BatchJob {
    fn into_job(self) -> Result<ExtractJob> {
        let ch = self
            .char
            .chars()
            .next()
            .ok_or_else(|| miette!("batch job with an empty \"char\" field"))?;
        let side = match self.side.as_deref() {
            Some("right") => ExtractSide::Right,
            _ => ExtractSide::Left,
        };
        Ok(ExtractJob {
            ch,
            side,
            cut_x: self.cut_x,
            name: self.name,
        })
    }
}

fn run_extract(args: ExtractArgs) -> Result<()> {
    let font = GlyphFont::load(&args.font).into_diagnostic()?;
    println!(
        "loaded font {} ({} glyphs)",
        args.font.display(),
        font.glyph_count()
    );

    let jobs: Vec<ExtractJob> = match &args.batch {
        Some(batch_path) => {
            let text = std::fs::read_to_string(batch_path).into_diagnostic()?;
            let jobs: Vec<BatchJob> = serde_json::from_str(&text).into_diagnostic()?;
            jobs.into_iter()
                .map(BatchJob::into_job)
                .collect::<Result<_>>()?
        }
        None => {
            let ch = args.ch.ok_or_else(|| miette!("no character given"))?;
            vec![ExtractJob {
                ch,
                side: args.side,
                cut_x: args.cut_x,
                name: args.name.clone(),
            }]
        }
    };

    let mut store = Store::load(&args.output).into_diagnostic()?;
    let total = jobs.len();
    let mut done = 0;

    for job in jobs {
        match extract_one(&font, &job, args.tolerance) {
            Ok((name, record)) => {
                store.upsert(name.clone(), record);
                store.save().into_diagnostic()?;
                println!("saved '{name}' to {}", store.file_path().display());
                done += 1;
            }
            // recoverable per-character conditions: skip and keep going
            Err(msg) => eprintln!("skipping '{}': {msg}", job.ch),
        }
    }

    if total > 1 {
        println!("{done}/{total} components extracted");
    }
    Ok(())
}

fn extract_one(
    font: &GlyphFont,
    job: &ExtractJob,
    tolerance: f64,
) -> std::result::Result<(String, ComponentRecord), String> {
    let glyph = font
        .glyph(job.ch)
        .ok_or("character has no glyph in this font")?;
    let bounds = glyph.bounds.ok_or("glyph has an empty outline")?;
    let bounds = BBox::from_array(bounds);

    let policy = job.side.policy();
    let cut = job.cut_x.unwrap_or_else(|| policy.suggested_cut(bounds));
    println!(
        "  '{}': x spans {:.0} to {:.0}, cutting at x = {cut:.0}",
        job.ch, bounds.min.x, bounds.max.x
    );

    let component = extract_component(&glyph.path, bounds, SplitSpec::new(cut, tolerance), policy)
        .map_err(|e| e.to_string())?
        .ok_or("no component at this cut; adjust --cut-x")?;

    let name = job
        .name
        .clone()
        .unwrap_or_else(|| format!("{}_{}", job.ch, job.side.label()));

    let source = format!("{}_{}", job.ch, job.side.label());
    let mut record = ComponentRecord::new(source, component.path);
    record.cut_x = Some(round1(cut));
    record.bounds = Some(component.bounds.to_array().map(round1));
    record.note = Some(format!(
        "extracted from '{}', x {} {cut:.0}; touch up in a vector editor",
        job.ch,
        match job.side {
            ExtractSide::Left => "<",
            ExtractSide::Right => ">",
        }
    ));
    Ok((name, record))
}

// ---------------------------------------------------------------------------
// clean
// ---------------------------------------------------------------------------

fn run_clean(args: CleanArgs) -> Result<()> {
    let mut store = Store::load(&args.file).into_diagnostic()?;
    let record = store
        .get(&args.name)
        .ok_or_else(|| miette!("no component named '{}' in {}", args.name, args.file.display()))?
        .clone();

    let max_x = args
        .max_x
        .or(record.cut_x)
        .ok_or_else(|| miette!("record has no cut_x; pass --max-x"))?;

    // the cleanup policy never consults the caller bounds
    let bounds = BBox::from_array(record.bounds.unwrap_or_default());
    let component = extract_component(
        &record.path,
        bounds,
        SplitSpec::new(max_x, args.tolerance),
        Policy::Cleanup,
    )
    .into_diagnostic()?;

    let Some(component) = component else {
        bail!("cleaning left nothing below x = {max_x:.0}; raise --max-x");
    };
    println!(
        "cleaned '{}': {} chars -> {} chars",
        args.name,
        record.path.len(),
        component.path.len()
    );

    let mut updated = record;
    updated.path = component.path;
    updated.bounds = Some(component.bounds.to_array().map(round1));
    updated.note = Some(format!(
        "cleaned from '{}', x < {max_x:.0}",
        updated.source
    ));
    store.upsert(args.name.clone(), updated);

    match &args.output {
        Some(path) => store.save_as(path).into_diagnostic()?,
        None => store.save().into_diagnostic()?,
    }
    let written = args.output.as_deref().unwrap_or(&args.file);
    println!("saved to {}", written.display());
    Ok(())
}

// ---------------------------------------------------------------------------
// add
// ---------------------------------------------------------------------------

fn run_add(args: AddArgs) -> Result<()> {
    let raw = match args.path {
        Some(path) => path,
        None => read_path_from_stdin()?,
    };
    let path = normalize_path_data(&raw);
    if path.is_empty() {
        bail!("path data is empty");
    }

    let mut store = Store::load(&args.file).into_diagnostic()?;
    let mut record = ComponentRecord::new(args.source, path);
    record.note = args.note;
    record.scale_y = args
        .scale_y
        .filter(|v| (v - DEFAULT_SCALE_Y).abs() > f64::EPSILON);
    store.upsert(args.name.clone(), record);
    store.save().into_diagnostic()?;

    println!(
        "added '{}' to {} ({} components)",
        args.name,
        store.file_path().display(),
        store.len()
    );
    Ok(())
}

/// Collapse whitespace and both comma forms to single spaces. Hand-edited
/// paths pass through otherwise untouched.
fn normalize_path_data(raw: &str) -> String {
    raw.replace(['，', ','], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn read_path_from_stdin() -> Result<String> {
    println!("paste path data, end with an empty line:");
    let mut lines = Vec::new();
    for line in std::io::stdin().lock().lines() {
        let line = line.into_diagnostic()?;
        if line.trim().is_empty() {
            break;
        }
        lines.push(line);
    }
    Ok(lines.join(" "))
}

// ---------------------------------------------------------------------------
// export / dump
// ---------------------------------------------------------------------------

fn run_export(args: ExportArgs) -> Result<()> {
    let font = GlyphFont::load(&args.font).into_diagnostic()?;
    std::fs::create_dir_all(&args.out_dir).into_diagnostic()?;

    for ch in args.chars.iter().flat_map(|s| s.chars()) {
        let Some(glyph) = font.glyph(ch) else {
            eprintln!("'{ch}': no glyph in this font");
            continue;
        };
        if glyph.path.is_empty() {
            eprintln!("'{ch}': empty outline");
            continue;
        }
        let file = args.out_dir.join(format!("{ch}.svg"));
        svg::save(&file, &svgout::wrap_glyph(&glyph.path)).into_diagnostic()?;
        println!("{ch} -> {}", file.display());
    }
    Ok(())
}

#[derive(Serialize)]
struct GlyphRecord {
    glyph_name: Option<String>,
    path: String,
    unicode: String,
}

fn run_dump(args: DumpArgs) -> Result<()> {
    let font = GlyphFont::load(&args.font).into_diagnostic()?;
    println!(
        "loaded font {} ({} glyphs)",
        args.font.display(),
        font.glyph_count()
    );

    let mut out = BTreeMap::new();
    let mut total = 0usize;
    for ch in args.chars.iter().flat_map(|s| s.chars()) {
        total += 1;
        match font.glyph(ch) {
            Some(glyph) if !glyph.path.is_empty() => {
                println!("{ch} ({})", glyph.name.as_deref().unwrap_or("unnamed"));
                out.insert(
                    ch.to_string(),
                    GlyphRecord {
                        glyph_name: glyph.name,
                        path: glyph.path,
                        unicode: format!("U+{:04X}", ch as u32),
                    },
                );
            }
            Some(_) => eprintln!("'{ch}': empty outline"),
            None => eprintln!("'{ch}': no glyph in this font"),
        }
    }

    let text = serde_json::to_string_pretty(&out).into_diagnostic()?;
    std::fs::write(&args.output, text + "\n").into_diagnostic()?;
    println!(
        "{}/{} glyphs dumped to {}",
        out.len(),
        total,
        args.output.display()
    );
    Ok(())
}

// ---------------------------------------------------------------------------
// list
// ---------------------------------------------------------------------------

fn run_list(args: ListArgs) -> Result<()> {
    let store = Store::load(&args.file).into_diagnostic()?;
    if store.is_empty() {
        println!("no components in {}", args.file.display());
        return Ok(());
    }
    for (name, record) in store.iter() {
        match record.cut_x {
            Some(cut) => println!("{name}  (cut_x {cut})"),
            None => println!("{name}"),
        }
    }
    Ok(())
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_collapses_whitespace_and_commas() {
        assert_eq!(
            normalize_path_data("M 0,0\n  L10，20\r\n Z"),
            "M 0 0 L10 20 Z"
        );
        assert_eq!(normalize_path_data("  \n "), "");
    }

    #[test]
    fn round1_keeps_one_decimal() {
        assert_eq!(round1(412.46), 412.5);
        assert_eq!(round1(-0.04), -0.0);
        assert_eq!(round1(100.0), 100.0);
    }
}
