//! Configuration for the huffpack command-line tool.
//!
//! Handles parsing command-line arguments with sensible defaults. The tool
//! works with zero arguments: it generates a seeded sample input, runs the
//! demo round-trip, and prints a summary. All defaults are printable so
//! runs are reproducible.

use std::path::PathBuf;

/// What the tool should do with the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Compress a file (or a generated sample) into a container
    Compress,
    /// Decompress a container file back into a byte stream
    Decompress,
    /// Compress, write, read back, decompress, verify
    Demo,
}

/// Complete configuration for one run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Operating mode
    pub mode: Mode,

    /// Input file path (None = generate sample; rejected for decompress)
    pub input_file: Option<PathBuf>,

    /// Output file path
    pub output_file: PathBuf,

    /// Seed for sample generation
    pub seed: u64,

    /// Size of the generated sample when no input file is given
    pub sample_bytes: usize,

    /// Whether to dump the code table before encoding
    pub print_codes: bool,

    /// Whether to print the resolved configuration
    pub print_config: bool,

    /// Whether to print the metrics summary
    pub print_metrics: bool,
}

impl Config {
    /// Parse configuration from command-line arguments.
    pub fn from_args(args: &[String]) -> Result<Self, String> {
        let mut mode = Mode::Demo;
        let mut input_file: Option<PathBuf> = None;
        let mut output_file: Option<PathBuf> = None;
        let mut seed: Option<u64> = None;
        let mut sample_bytes: Option<usize> = None;
        let mut print_codes = false;
        let mut print_config = false;
        let mut print_metrics = true;

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--mode" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--mode requires compress, decompress or demo".to_string());
                    }
                    mode = match args[i].as_str() {
                        "compress" => Mode::Compress,
                        "decompress" => Mode::Decompress,
                        "demo" => Mode::Demo,
                        other => return Err(format!("unknown mode: {}", other)),
                    };
                }
                "--in" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--in requires a path".to_string());
                    }
                    input_file = Some(PathBuf::from(&args[i]));
                }
                "--out" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--out requires a path".to_string());
                    }
                    output_file = Some(PathBuf::from(&args[i]));
                }
                "--seed" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--seed requires a number".to_string());
                    }
                    seed = Some(args[i].parse().map_err(|_| "invalid seed")?);
                }
                "--sample-bytes" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--sample-bytes requires a number".to_string());
                    }
                    sample_bytes = Some(args[i].parse().map_err(|_| "invalid sample-bytes")?);
                }
                "--print-codes" => {
                    print_codes = true;
                }
                "--print-config" => {
                    print_config = true;
                }
                "--no-metrics" => {
                    print_metrics = false;
                }
                "--help" | "-h" => {
                    print_help();
                    std::process::exit(0);
                }
                _ => {
                    return Err(format!("unknown argument: {}", args[i]));
                }
            }
            i += 1;
        }

        if mode == Mode::Decompress && input_file.is_none() {
            return Err("--mode decompress requires --in <PATH>".to_string());
        }

        let seed = seed.unwrap_or_else(|| {
            use std::time::{SystemTime, UNIX_EPOCH};
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|t| t.as_millis() as u64)
                .unwrap_or(0)
        });

        Ok(Config {
            mode,
            input_file,
            output_file: output_file.unwrap_or_else(|| match mode {
                Mode::Decompress => PathBuf::from("./out.txt"),
                _ => PathBuf::from("./out.hpk"),
            }),
            seed,
            sample_bytes: sample_bytes.unwrap_or(65536),
            print_codes,
            print_config,
            print_metrics,
        })
    }

    /// Print the configuration in human-readable form.
    pub fn print(&self) {
        println!("=== Configuration ===");
        println!("Mode: {:?}", self.mode);
        println!(
            "Input file:  {}",
            self.input_file
                .as_ref()
                .map_or("(generate sample)", |p| p.to_str().unwrap_or("?"))
        );
        println!(
            "Output file: {}",
            self.output_file.to_str().unwrap_or("?")
        );
        println!("Seed: {}", self.seed);
        println!("Sample size: {} bytes", self.sample_bytes);
        println!();
    }
}

fn print_help() {
    println!("huffpack: Huffman file compressor");
    println!();
    println!("USAGE:");
    println!("    huffpack [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    --mode <MODE>        compress | decompress | demo (default: demo)");
    println!("    --in <PATH>          Input file (default: generate sample)");
    println!("    --out <PATH>         Output file (default: ./out.hpk, ./out.txt when decompressing)");
    println!("    --seed <N>           Seed for sample generation");
    println!("    --sample-bytes <N>   Generated sample size (default: 65536)");
    println!();
    println!("    --print-codes        Dump the code table before encoding");
    println!("    --print-config       Print resolved configuration");
    println!("    --no-metrics         Don't print the run summary");
    println!("    --help, -h           Print this help");
    println!();
    println!("EXAMPLES:");
    println!("    huffpack                                      # Demo round-trip on a sample");
    println!("    huffpack --mode compress --in book.txt --out book.hpk");
    println!("    huffpack --mode decompress --in book.hpk --out book.txt");
    println!();
}
