use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use fs2::FileExt;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use vitalog_core::*;

#[derive(Parser)]
#[command(name = "vitalog")]
#[command(about = "Lab-reading dashboard for vitamin and mineral panels", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the latest reading, status, and change for each metric (default)
    Overview,

    /// Show the reading history as a table
    History {
        /// History window (30d, 90d, 6m, 1y, all); defaults to the
        /// configured range
        #[arg(long)]
        range: Option<String>,

        /// Column to sort by (date, vitaminD, calcium, thiamine, notes)
        #[arg(long, default_value = "date")]
        sort: String,

        /// Sort in descending order
        #[arg(long)]
        desc: bool,

        /// Reference date for the window (defaults to the latest reading)
        #[arg(long)]
        as_of: Option<NaiveDate>,
    },

    /// Export readings to a CSV file
    Export {
        /// History window (30d, 90d, 6m, 1y, all)
        #[arg(long, default_value = "all")]
        range: String,

        /// Output file path (defaults to the configured export location)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Reference date for the window (defaults to the latest reading)
        #[arg(long)]
        as_of: Option<NaiveDate>,
    },

    /// Show reference information and tips for a metric
    Guide {
        /// Metric key (vitaminD, calcium, thiamine)
        metric: String,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    vitalog_core::logging::init();

    let cli = Cli::parse();

    let config = Config::load()?;
    let store = default_store()?;

    match cli.command {
        Some(Commands::History {
            range,
            sort,
            desc,
            as_of,
        }) => cmd_history(&store, &config, range, &sort, desc, as_of),
        Some(Commands::Export {
            range,
            output,
            as_of,
        }) => cmd_export(&store, &config, &range, output, as_of),
        Some(Commands::Guide { metric }) => cmd_guide(&metric),
        Some(Commands::Overview) | None => cmd_overview(&store),
    }
}

fn cmd_overview(store: &ReadingStore) -> Result<()> {
    let latest = store.latest()?;

    println!("\n╭─────────────────────────────────────────╮");
    println!("│  LATEST RESULTS ({})", format_display_date(latest.date));
    println!("╰─────────────────────────────────────────╯");

    for summary in overview(store)? {
        println!();
        println!("  {} [{}]", summary.label, summary.status.as_str());
        println!(
            "  → Latest: {} {}",
            format_tenths(summary.latest),
            summary.unit
        );
        println!("  → Change: {} since last check", fmt_signed(summary.delta));
        println!(
            "  → Goal:   {} {}",
            format_tenths(summary.goal),
            summary.unit
        );
    }

    if let Some(ref notes) = latest.notes {
        println!();
        println!("  ℹ Note: {}", notes);
    }

    println!();
    Ok(())
}

fn cmd_history(
    store: &ReadingStore,
    config: &Config,
    range: Option<String>,
    sort: &str,
    desc: bool,
    as_of: Option<NaiveDate>,
) -> Result<()> {
    let token = range.unwrap_or_else(|| config.display.default_range.clone());
    let range: HistoryRange = token.parse()?;
    let reference = match as_of {
        Some(date) => date,
        None => store.latest()?.date,
    };

    let rows = filter_since(store, reference, range);
    let direction = if desc {
        SortDirection::Desc
    } else {
        SortDirection::Asc
    };
    let rows = sort_readings(&rows, parse_sort_column(sort), direction);

    println!(
        "\n  {} of {} readings ({} window)",
        rows.len(),
        store.len(),
        range.as_str()
    );
    println!();
    println!(
        "  {:<12} {:>8} {:>9} {:>7}  Notes",
        "Date", "Vit D", "Calcium", "B1"
    );

    for row in &rows {
        println!(
            "  {:<12} {:>8} {:>9} {:>7}  {}",
            format_display_date(row.date),
            format_tenths(row.vitamin_d),
            format_tenths(row.calcium),
            format_tenths(row.thiamine),
            row.notes.as_deref().unwrap_or("-"),
        );
    }

    println!();
    Ok(())
}

fn cmd_export(
    store: &ReadingStore,
    config: &Config,
    range: &str,
    output: Option<PathBuf>,
    as_of: Option<NaiveDate>,
) -> Result<()> {
    let range: HistoryRange = range.parse()?;
    let reference = match as_of {
        Some(date) => date,
        None => store.latest()?.date,
    };

    let rows = filter_since(store, reference, range);
    let text = encode(&rows);

    let path = output
        .unwrap_or_else(|| config.export.output_dir.join(&config.export.file_name));
    save_atomic(&path, &text)?;

    println!("✓ Exported {} readings", rows.len());
    println!("  CSV: {}", path.display());

    Ok(())
}

fn cmd_guide(metric: &str) -> Result<()> {
    let descriptor = registry().describe_key(metric)?;

    println!("\n╭─────────────────────────────────────────╮");
    println!("│  {}", descriptor.label.to_uppercase());
    println!("╰─────────────────────────────────────────╯");
    println!();
    println!(
        "  Reference range: {}-{} {}",
        format_tenths(descriptor.low),
        format_tenths(descriptor.high),
        descriptor.unit
    );
    println!(
        "  Goal: {} {}",
        format_tenths(descriptor.goal),
        descriptor.unit
    );
    println!();
    println!("  {}", descriptor.description);
    println!();

    for tip in &descriptor.tips {
        println!("  → {}", tip);
    }

    println!();
    Ok(())
}

/// Map a sort token to its field tag
///
/// Unknown tokens fall back to date order with a warning; choosing the
/// fallback is this layer's job, not the core's.
fn parse_sort_column(token: &str) -> SortField {
    match token {
        "date" => SortField::Date,
        "vitaminD" | "vitamin_d" => SortField::VitaminD,
        "calcium" => SortField::Calcium,
        "thiamine" => SortField::Thiamine,
        "notes" => SortField::Notes,
        other => {
            eprintln!("Unknown sort column: {}. Sorting by date.", other);
            SortField::Date
        }
    }
}

/// Format a delta with an explicit sign, rounded to one decimal
fn fmt_signed(value: f64) -> String {
    let text = format_tenths(value);
    if text.starts_with('-') {
        text
    } else {
        format!("+{}", text)
    }
}

/// Atomically save the export artifact
///
/// Writes to a temp file in the destination directory under an exclusive
/// lock, syncs, then renames over the target, so a concurrent reader sees
/// either the old or the new file.
fn save_atomic(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let temp = NamedTempFile::new_in(path.parent().ok_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::Other, "export path missing parent")
    })?)?;

    temp.as_file().lock_exclusive()?;

    {
        let mut writer = std::io::BufWriter::new(temp.as_file());
        writer.write_all(contents.as_bytes())?;
        writer.flush()?;
    }

    temp.as_file().sync_all()?;
    temp.as_file().unlock()?;

    temp.persist(path).map_err(|e| Error::Io(e.error))?;

    tracing::debug!("Saved export to {:?}", path);
    Ok(())
}
