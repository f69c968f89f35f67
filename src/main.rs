use base_r::VariantsConfig;
use clap::Parser;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "base-r")]
#[command(version)]
#[command(about = "Encode and decode binary data with base-N codec variants", long_about = None)]
struct Cli {
    /// Codec variant to use for encoding/decoding
    #[arg(short, long, default_value = "z85")]
    codec: String,

    /// File to encode/decode (if not provided, reads from stdin)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Decode instead of encode
    #[arg(short, long)]
    decode: bool,

    /// List available codec variants
    #[arg(short, long)]
    list: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Load variant configuration with user overrides
    let config = VariantsConfig::load_with_overrides()?;

    if cli.list {
        println!("Available codec variants:\n");
        let mut variants: Vec<_> = config.variants.iter().collect();
        variants.sort_by_key(|(name, _)| *name);

        for (name, variant) in variants {
            let padded = if variant.padding.is_some() {
                "padded"
            } else {
                ""
            };
            println!(
                "  {:<18} {:<8} base-{:<3} {}",
                name,
                variant.family.name(),
                variant.family.radix(),
                padded
            );
        }
        return Ok(());
    }

    let variant_config = config.get(&cli.codec).ok_or_else(|| {
        format!(
            "Codec '{}' not found. Use --list to see available variants.",
            cli.codec
        )
    })?;
    let codec = variant_config.build()?;

    // Read input data
    let input_data = if let Some(file_path) = cli.file {
        fs::read(&file_path)?
    } else {
        let mut buffer = Vec::new();
        io::stdin().read_to_end(&mut buffer)?;
        buffer
    };

    if cli.decode {
        let input_str = String::from_utf8(input_data)
            .map_err(|_| "Input must be valid UTF-8 for decoding")?;
        let decoded = codec.decode(input_str.trim())?;
        io::stdout().write_all(&decoded)?;
    } else {
        let encoded = codec.encode(&input_data);
        println!("{}", encoded);
    }

    Ok(())
}
