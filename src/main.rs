use std::collections::HashMap;
use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use date_extract::calendar::{EpochKind, EpochTable};
use date_extract::corpus;
use date_extract::pipeline::{DateScanner, NormalizedDate};

const OUTPUT_DIR: &str = "output";

#[derive(Parser)]
#[command(
    name = "date_extract",
    about = "Multi-script date recognition and ISO 8601 normalization"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Scan a corpus of .txt/.md files → output/dates.json
    Scan {
        /// Path to corpus root directory
        #[arg(default_value = ".")]
        corpus: PathBuf,
    },
    /// Normalize dates in literal text (or stdin when empty), print JSON
    Parse {
        /// Text to scan, e.g. "民國105年10月10日" or "Oct. 1st, 2016"
        text: Vec<String>,
    },
    /// Convert an era-relative year to a Gregorian year
    Convert {
        /// Era token, e.g. "民國", "平成"
        era: String,
        /// Era-relative year (must be >= 1 for fixed-offset eras)
        year: i32,
    },
    /// Print the known calendar epoch inventory
    Eras,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Some(Command::Scan { corpus }) => run_scan(&corpus),
        Some(Command::Parse { text }) => run_parse(&text),
        Some(Command::Convert { era, year }) => run_convert(&era, year),
        Some(Command::Eras) => run_eras(),
        // Default: scan the current directory
        None => run_scan(Path::new(".")),
    }
}

// ═══════════════════════════════════════════════════════════════════════
//  OUTPUT FILE HELPERS
// ═══════════════════════════════════════════════════════════════════════

fn write_json<T: serde::Serialize>(name: &str, data: &T) {
    let path = Path::new(OUTPUT_DIR).join(name);
    let json = serde_json::to_string_pretty(data).expect("JSON serialization failed");
    std::fs::write(&path, &json).unwrap_or_else(|e| panic!("cannot write {}: {e}", path.display()));
    eprintln!("  {} ({} bytes)", path.display(), json.len());
}

// ═══════════════════════════════════════════════════════════════════════
//  SCAN MODE: full corpus processing → output/dates.json
// ═══════════════════════════════════════════════════════════════════════

#[derive(serde::Serialize)]
struct FileDates {
    file: String,
    dates: Vec<NormalizedDate>,
}

fn run_scan(root: &Path) {
    eprintln!("Scanning corpus at: {}", root.display());

    let files = corpus::scan_corpus(root);
    eprintln!("Found {} text files", files.len());

    let scanner = DateScanner::with_defaults();
    let mut results: Vec<FileDates> = Vec::new();
    let mut by_grammar: HashMap<String, usize> = HashMap::new();
    let mut failed = 0usize;

    for doc in &files {
        let content = match std::fs::read_to_string(&doc.path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Cannot read {}: {e}", doc.path.display());
                failed += 1;
                continue;
            }
        };

        let dates = scanner.scan(&content);
        if dates.is_empty() {
            continue;
        }
        for d in &dates {
            *by_grammar.entry(d.grammar.clone()).or_insert(0) += 1;
        }
        results.push(FileDates {
            file: doc.path.display().to_string(),
            dates,
        });
    }

    let total: usize = results.iter().map(|f| f.dates.len()).sum();

    eprintln!("\n══════════════════════════════════════════");
    eprintln!("  EXTRACTION STATISTICS");
    eprintln!("══════════════════════════════════════════");
    eprintln!("\nExtracted {} dates from {} files", total, results.len());
    if failed > 0 {
        eprintln!("  ({failed} files could not be read)");
    }

    let mut grammar_counts: Vec<_> = by_grammar.iter().collect();
    grammar_counts.sort_by_key(|(_, c)| std::cmp::Reverse(**c));
    eprintln!("\nBy grammar:");
    for (grammar, count) in &grammar_counts {
        eprintln!("  {grammar}: {count} dates");
    }

    eprintln!("\nSample dates (first 10):");
    for d in results.iter().flat_map(|f| &f.dates).take(10) {
        eprintln!("  [{}] {} ← {:?}", d.grammar, d.date, d.raw);
    }

    eprintln!("\n══════════════════════════════════════════");
    eprintln!("  WRITING OUTPUT FILES");
    eprintln!("══════════════════════════════════════════\n");

    std::fs::create_dir_all(OUTPUT_DIR).expect("cannot create output/");
    write_json("dates.json", &results);
}

// ═══════════════════════════════════════════════════════════════════════
//  PARSE MODE: literal text → stdout JSON
// ═══════════════════════════════════════════════════════════════════════

fn run_parse(text_args: &[String]) {
    let text = if text_args.is_empty() {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .unwrap_or_else(|e| {
                eprintln!("Cannot read stdin: {e}");
                std::process::exit(1);
            });
        buf
    } else {
        text_args.join(" ")
    };

    let scanner = DateScanner::with_defaults();
    let results = scanner.scan(&text);

    eprintln!("Found {} date(s)", results.len());
    let json = serde_json::to_string_pretty(&results).expect("JSON serialization");
    println!("{json}");
}

// ═══════════════════════════════════════════════════════════════════════
//  CONVERT MODE: standalone era-year conversion
// ═══════════════════════════════════════════════════════════════════════

fn run_convert(era: &str, year: i32) {
    let table = EpochTable::default_table();
    match table.convert(era, year) {
        Some(gregorian) => println!("{gregorian}"),
        None => {
            eprintln!("Cannot convert {era}{year}: unknown era or out-of-range year");
            eprintln!(
                "  known eras: {}",
                table
                    .entries()
                    .iter()
                    .map(|e| e.token.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            );
            std::process::exit(1);
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
//  ERAS MODE: print the epoch inventory
// ═══════════════════════════════════════════════════════════════════════

fn run_eras() {
    let table = EpochTable::default_table();
    for entry in table.entries() {
        match entry.kind {
            EpochKind::FixedOffset(offset) => {
                println!(
                    "{}  fixed offset +{offset} (year 1 = {})",
                    entry.token,
                    offset + 1
                );
            }
            EpochKind::CurrentYear => {
                println!(
                    "{}  current-year marker (resolves to {})",
                    entry.token,
                    table.current_year()
                );
            }
        }
    }
}
