//! timetable — exam timetable generator.
//!
//! Loads a class → subjects catalog, per-subject preferences and a holiday
//! list, generates up to three shuffled timetable variants for one class,
//! and writes each variant to its own CSV file.
//!
//! ```text
//! timetable --catalog data/subjects.csv --class 10 --start 2025-06-02 \
//!           --variants 3 --subject-config data/subject_config.csv
//! timetable --config data/run.toml --seed 42
//! RUST_LOG=debug timetable --config data/run.toml
//! ```

mod run_file;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use clap::Parser;

use tt_catalog::{SubjectConfigs, load_catalog_csv, load_holidays_csv, load_subject_configs_csv};
use tt_core::HolidaySet;
use tt_core::time::format_day;
use tt_gen::{
    GenerationObserver, GenerationSession, GeneratorBuilder, RandomOrder, Timetable,
    TruncationWarning,
};
use tt_output::{CsvWriter, TimetableOutputObserver, TimetableWriter};

use run_file::{Inputs, RunFile, RunOverrides};

// ── Command line ──────────────────────────────────────────────────────────────

/// Generate randomized exam timetables for one class
#[derive(Debug, Parser)]
#[command(name = "timetable", version)]
struct Args {
    /// Class → subjects catalog (CSV: class,subjects)
    #[arg(long, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Class to schedule
    #[arg(long, value_name = "CLASS")]
    class: Option<String>,

    /// First exam-eligible date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    start: Option<NaiveDate>,

    /// Last date an exam may fall on (default: start + 20 days)
    #[arg(long, value_name = "DATE")]
    end: Option<NaiveDate>,

    /// Number of timetable variants
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=3))]
    variants: Option<u8>,

    /// Exam type shown in the summary (e.g. "Terminal Exam")
    #[arg(long, value_name = "TEXT")]
    exam_type: Option<String>,

    /// Per-subject preferences (CSV: subject,session,start_time,duration,gap_days)
    #[arg(long, value_name = "FILE")]
    subject_config: Option<PathBuf>,

    /// Holiday list replacing the built-in one (CSV: date[,name])
    #[arg(long, value_name = "FILE")]
    holidays: Option<PathBuf>,

    /// Seed for reproducible subject orderings
    #[arg(long)]
    seed: Option<u64>,

    /// TOML run file; command-line flags override its values
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output directory for the exported CSV files
    #[arg(long, value_name = "DIR")]
    out: Option<PathBuf>,

    /// Print the classes in the catalog and exit
    #[arg(long)]
    list_classes: bool,
}

impl Args {
    fn inputs(&self) -> Inputs {
        Inputs {
            catalog:        self.catalog.clone(),
            subject_config: self.subject_config.clone(),
            holidays:       self.holidays.clone(),
            out:            self.out.clone(),
        }
    }

    fn overrides(&self) -> RunOverrides {
        RunOverrides {
            class:     self.class.clone(),
            start:     self.start,
            end:       self.end,
            variants:  self.variants,
            exam_type: self.exam_type.clone(),
            seed:      self.seed,
        }
    }
}

// ── Observer wrapper to print progress ───────────────────────────────────────

struct ProgressObserver<W: TimetableWriter> {
    inner:     TimetableOutputObserver<W>,
    truncated: usize,
}

impl<W: TimetableWriter> ProgressObserver<W> {
    fn new(inner: TimetableOutputObserver<W>) -> Self {
        Self { inner, truncated: 0 }
    }
}

impl<W: TimetableWriter> GenerationObserver for ProgressObserver<W> {
    fn on_variant_start(&mut self, label: &str) {
        self.inner.on_variant_start(label);
    }

    fn on_truncated(&mut self, warning: &TruncationWarning) {
        self.truncated += 1;
        self.inner.on_truncated(warning);
    }

    fn on_variant_end(&mut self, timetable: &Timetable) {
        println!(
            "  {:<12} {:>5} {:>5}   {:<22} {:<22}",
            timetable.label,
            timetable.exam_count(),
            timetable.len(),
            timetable.first_date().map(format_day).unwrap_or_else(|| "-".into()),
            timetable.last_date().map(format_day).unwrap_or_else(|| "-".into()),
        );
        self.inner.on_variant_end(timetable);
    }

    fn on_generation_end(&mut self, variants: usize) {
        self.inner.on_generation_end(variants);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    // 1. Run file (optional) merged under the command line.
    let file = match &args.config {
        Some(path) => RunFile::load(path)?,
        None => RunFile::default(),
    };
    let inputs = args.inputs().or(file.inputs);

    // 2. Catalog.
    let Some(catalog_path) = inputs.catalog else {
        bail!("no subject catalog given (use --catalog or [inputs].catalog)");
    };
    let catalog = load_catalog_csv(&catalog_path)
        .with_context(|| format!("Failed to load catalog: {}", catalog_path.display()))?;

    if args.list_classes {
        for class in catalog.classes() {
            let subjects = catalog.subjects(class).unwrap_or_default();
            println!("{class:<8} {}", subjects.join(", "));
        }
        return Ok(());
    }

    // 3. Run settings.
    let config = args.overrides().apply(file.run)?;
    let Some(subjects) = catalog.subjects(&config.class_label) else {
        let known: Vec<&str> = catalog.classes().collect();
        bail!(
            "class {:?} not found in {} (known: {})",
            config.class_label,
            catalog_path.display(),
            known.join(", ")
        );
    };

    // 4. Subject preferences and holidays.
    let configs = match &inputs.subject_config {
        Some(path) => load_subject_configs_csv(path)
            .with_context(|| format!("Failed to load subject config: {}", path.display()))?,
        None => SubjectConfigs::new(),
    };
    let holidays = match &inputs.holidays {
        Some(path) => load_holidays_csv(path)
            .with_context(|| format!("Failed to load holidays: {}", path.display()))?,
        None => HolidaySet::reference(),
    };

    println!("=== timetable — class {} ({}) ===", config.class_label, config.exam_type);
    println!(
        "Subjects: {}  |  {} to {}  |  Variants: {}  |  Holidays: {}",
        subjects.len(),
        config.start_date,
        config.effective_end_date(),
        config.variants,
        holidays.len(),
    );
    if let Some(seed) = config.seed {
        println!("Seed: {seed}");
    }
    println!();

    // 5. Build and run, exporting each variant as it completes.
    let builder = GeneratorBuilder::new(
        config.clone(),
        subjects.iter().cloned(),
        RandomOrder::from_optional_seed(config.seed),
    )
    .subject_configs(configs)
    .holidays(holidays);

    let out_dir = inputs.out.unwrap_or_else(|| PathBuf::from("output").join("timetable"));
    let writer = CsvWriter::new(&out_dir)?;
    let mut obs = ProgressObserver::new(TimetableOutputObserver::new(writer, &config.class_label));
    let mut session = GenerationSession::new();

    println!("  {:<12} {:>5} {:>5}   {:<22} {:<22}", "Variant", "Exams", "Days", "First", "Last");
    println!("  {}", "-".repeat(72));

    let t0 = Instant::now();
    let set = session.generate(builder, &mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("export error: {e}");
    }

    // 6. Summary.
    println!();
    println!("Generated {} variant(s) in {:.3} s", set.len(), elapsed.as_secs_f64());
    for path in obs.inner.writer().written() {
        println!("  {}", path.display());
    }

    if obs.truncated > 0 {
        println!();
        for w in &set.warnings {
            println!("warning: {w}");
        }
    }

    Ok(())
}
