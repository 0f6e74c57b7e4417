use clap::{Parser, Subcommand};

pub const DEFAULT_DATA_PATH: &str = "data/embeddings/data_002.json";
pub const DEFAULT_SCHEMA_PATH: &str = "data/universal_extraction/schema.json";

#[derive(Parser)]
#[command(name = "solarkit", about = "Embedding similarity search and document extraction")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Embed a single text and print the vector as JSON
    Embed {
        text: String,
        /// Embedding mode (query, passage)
        #[arg(long, default_value = "query")]
        mode: String,
    },
    /// Rank dataset passages against each query and save the results
    Search {
        /// JSON file with `passages` (category -> texts) and `queries`
        #[arg(long, default_value = DEFAULT_DATA_PATH)]
        data: String,
        /// How many results per query to print
        #[arg(long, default_value = "5")]
        top: usize,
    },
    /// Extract structured data from an image according to a JSON schema
    Extract {
        /// Image file path or http(s) URL
        image: String,
        /// JSON schema file
        #[arg(short, long, default_value = DEFAULT_SCHEMA_PATH)]
        schema: String,
        /// Use enhanced extraction mode instead of standard
        #[arg(long)]
        enhanced: bool,
    },
}
