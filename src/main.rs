use clap::Parser;
use solarkit::cli::commands::{Cli, Commands};
use solarkit::config::Config;
use solarkit::domain::values::embedding_mode::EmbeddingMode;
use solarkit::domain::values::extraction_mode::ExtractionMode;
use solarkit::domain::values::image_source::ImageSource;
use solarkit::SolarKit;
use std::path::Path;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading configuration: {e}");
            std::process::exit(1);
        }
    };
    let kit = SolarKit::new(&config);

    if let Err(e) = run_command(kit, cli.command).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run_command(kit: SolarKit, cmd: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        Commands::Embed { text, mode } => {
            let mode: EmbeddingMode = mode.parse().map_err(|e: String| e)?;
            let vector = kit.embed(&text, mode).await?;
            println!("{}", serde_json::to_string(&vector)?);
        }
        Commands::Search { data, top } => {
            let dataset = kit.load_dataset(Path::new(&data))?;
            println!(
                "Loaded {} passages and {} queries from {data}",
                dataset.passage_count(),
                dataset.queries.len()
            );

            let report = kit.search_and_save(&dataset, top).await?;
            for (i, result) in report.results.iter().enumerate() {
                println!();
                println!("Query {}/{}: {}", i + 1, report.results.len(), result.query);
                for r in result.top_k(top)? {
                    let preview: String = r.text.chars().take(50).collect();
                    println!("  {}. [passage {}] {:.4} - {preview}", r.rank, r.passage_index + 1, r.score);
                }
            }
            println!();
            for path in &report.artifacts.markdown_paths {
                println!("Saved {}", path.display());
            }
            println!("Saved {}", report.artifacts.json_path.display());
        }
        Commands::Extract {
            image,
            schema,
            enhanced,
        } => {
            let source: ImageSource = image.parse().map_err(|e: String| e)?;
            let mode = ExtractionMode::from_enhanced(enhanced);
            let report = kit.extract_and_save(source, Path::new(&schema), mode).await?;
            println!("{}", serde_json::to_string_pretty(&report.outcome.data)?);
            println!("Saved {}", report.artifacts.json_path.display());
            println!("Saved {}", report.artifacts.markdown_path.display());
            println!("Saved {}", report.artifacts.image_path.display());
        }
    }
    Ok(())
}
