use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Recipe generation with gram conversions", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Args, Debug, Clone, Default)]
pub struct ModelArgs {
    /// Base URL of the Ollama server (overrides OLLAMA_URL)
    #[arg(long)]
    pub ollama_url: Option<String>,

    /// Model to generate with (overrides OLLAMA_MODEL)
    #[arg(long)]
    pub model: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a recipe and annotate its quantities with grams
    Generate {
        /// What to cook, e.g. "chocolate chip cookies"
        #[arg(required = true, num_args = 1..)]
        dish: Vec<String>,

        /// Kitchen temperature in °C (overrides KITCHEN_TEMPERATURE_C)
        #[arg(short, long, allow_hyphen_values = true)]
        temperature: Option<f64>,

        #[command(flatten)]
        model: ModelArgs,
    },
    /// Annotate recipe text from a file, or stdin when no file is given
    Annotate {
        /// Path to the recipe text file
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Kitchen temperature in °C (overrides KITCHEN_TEMPERATURE_C)
        #[arg(short, long, allow_hyphen_values = true)]
        temperature: Option<f64>,
    },
    /// Convert a single ingredient quantity to grams
    Convert {
        /// Quantity, e.g. "2", "0.5", "3/4" or "1 1/2"
        quantity: String,

        /// Unit, e.g. "cups" or "tbsp"
        unit: String,

        /// Ingredient name, e.g. "brown sugar"
        #[arg(required = true, num_args = 1..)]
        ingredient: Vec<String>,

        /// Temperature in °C (overrides KITCHEN_TEMPERATURE_C)
        #[arg(short, long, allow_hyphen_values = true)]
        temperature: Option<f64>,
    },
    /// Print the ingredient density table as CSV
    Ingredients,
    /// List the units a single conversion accepts
    Units,
    /// Interactive session: generate recipes and browse the ones saved so far
    Chat {
        /// Kitchen temperature in °C (overrides KITCHEN_TEMPERATURE_C)
        #[arg(short, long, allow_hyphen_values = true)]
        temperature: Option<f64>,

        #[command(flatten)]
        model: ModelArgs,
    },
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
