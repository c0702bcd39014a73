//! FLI Forge CLI - Write FLI files and corpora from JSON specifications.

use std::fs;
use std::path::Path;

use fli_forge::{
    corpus::{generate_corpus, write_corpus},
    schema::{CorpusConfig, ImageSpec, Preset},
};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 && args[1] == "--example" {
        print_example_config();
        return;
    }

    if args.len() < 3 {
        print_usage(&args[0]);
        std::process::exit(1);
    }

    match args[1].as_str() {
        "--preset" => {
            let Some(output) = args.get(3) else {
                print_usage(&args[0]);
                std::process::exit(1);
            };
            let preset = Preset::from_name(&args[2]).unwrap_or_else(|| {
                eprintln!("Unknown preset: {} (expected copy or signed)", args[2]);
                std::process::exit(1);
            });
            write_image(&preset.spec(), Path::new(output));
        }
        "--corpus" => {
            let Some(output) = args.get(3) else {
                print_usage(&args[0]);
                std::process::exit(1);
            };
            run_corpus(Path::new(&args[2]), Path::new(output));
        }
        spec_path => {
            let spec: ImageSpec = read_json(Path::new(spec_path));
            write_image(&spec, Path::new(&args[2]));
        }
    }
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} <spec.json> <output.fli>", program);
    eprintln!("       {} --preset <copy|signed> <output.fli>", program);
    eprintln!("       {} --corpus <corpus.json> <output-dir>", program);
    eprintln!("       {} --example", program);
    eprintln!();
    eprintln!("Write single-frame FLI files, optionally with corrupted chunk sizes.");
    eprintln!();
    eprintln!("Presets:");
    eprintln!("  copy    100x100 image with one short FLI_COPY chunk");
    eprintln!("  signed  1x1 image with two chunks declaring negative sizes");
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> T {
    let contents = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading {}: {}", path.display(), e);
        std::process::exit(1);
    });
    serde_json::from_str(&contents).unwrap_or_else(|e| {
        eprintln!("Error parsing {}: {}", path.display(), e);
        std::process::exit(1);
    })
}

fn write_image(spec: &ImageSpec, output: &Path) {
    let bytes = spec.encode().unwrap_or_else(|e| {
        eprintln!("Error encoding image: {}", e);
        std::process::exit(1);
    });

    fs::write(output, &bytes).unwrap_or_else(|e| {
        eprintln!("Error writing {}: {}", output.display(), e);
        std::process::exit(1);
    });

    log::info!(
        "wrote {} ({}x{}, {} chunks, size override {})",
        output.display(),
        spec.width,
        spec.height,
        spec.chunks.len(),
        spec.size_override
    );
    println!("Wrote {} bytes to {}", bytes.len(), output.display());
}

fn run_corpus(config_path: &Path, output: &Path) {
    let config: CorpusConfig = read_json(config_path);

    let paths = generate_corpus(&config)
        .and_then(|entries| write_corpus(&entries, output))
        .unwrap_or_else(|e| {
            eprintln!("Error generating corpus: {}", e);
            std::process::exit(1);
        });

    println!("Wrote {} files to {}", paths.len(), output.display());
}

fn print_example_config() {
    let spec = Preset::SignedChunkSize.spec();
    let corpus = CorpusConfig::default();

    println!("Example image spec (spec.json):");
    println!(
        "{}",
        serde_json::to_string_pretty(&spec).unwrap_or_default()
    );
    println!();
    println!("Example corpus config (corpus.json):");
    println!(
        "{}",
        serde_json::to_string_pretty(&corpus).unwrap_or_default()
    );
}
