use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use video_cost_estimator::usage::UsageInput;

#[derive(Parser, Debug)]
#[command(name = "cost-estimator", version, about = "Video model contract cost estimator")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config.toml", global = true)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Estimate contract cost (default)
    Estimate(EstimateArgs),

    /// Pricing table commands
    Pricing {
        #[command(subcommand)]
        action: PricingCommands,
    },

    /// Serve the estimator over HTTP
    Serve {
        /// Override the configured bind host
        #[arg(long)]
        host: Option<String>,

        /// Override the configured port
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Configuration management commands
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },

    /// Show version information
    Version,
}

/// Usage flags; any flag left out falls back to the configured defaults
#[derive(Args, Debug, Clone, Default)]
pub struct EstimateArgs {
    /// Marengo video hours indexed
    #[arg(long)]
    pub marengo_video_hours: Option<f64>,

    /// Marengo search API calls per day
    #[arg(long)]
    pub marengo_search_calls: Option<f64>,

    /// Pegasus video hours indexed
    #[arg(long)]
    pub pegasus_video_hours: Option<f64>,

    /// Pegasus generate API calls per day
    #[arg(long)]
    pub pegasus_generate_calls: Option<f64>,

    /// Pegasus input tokens per call
    #[arg(long)]
    pub pegasus_input_tokens: Option<f64>,

    /// Pegasus output tokens per call
    #[arg(long)]
    pub pegasus_output_tokens: Option<f64>,

    /// Number of video embeddings
    #[arg(long)]
    pub embedding_videos: Option<f64>,

    /// Audio embeddings, in thousands
    #[arg(long)]
    pub embedding_audio_k: Option<f64>,

    /// Image embeddings, in thousands
    #[arg(long)]
    pub embedding_images_k: Option<f64>,

    /// Text embeddings, in thousands
    #[arg(long)]
    pub embedding_text_k: Option<f64>,

    /// Contract length in years
    #[arg(short = 'y', long)]
    pub contract_years: Option<u32>,

    /// Reindex passes per year
    #[arg(short, long)]
    pub reindex_frequency: Option<u32>,

    /// Enterprise discount as a fraction (0.0 - 1.0)
    #[arg(short, long, allow_negative_numbers = true)]
    pub discount: Option<f64>,

    /// Pricing override file (TOML, or JSON by extension)
    #[arg(short, long)]
    pub pricing: Option<PathBuf>,

    /// Round amounts to whole dollars
    #[arg(long)]
    pub whole_dollars: bool,

    /// Hide line items that are zero for both models
    #[arg(long)]
    pub hide_zero: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

impl EstimateArgs {
    /// Overlay the flags that were given onto `base`
    pub fn apply_to(&self, base: &UsageInput) -> UsageInput {
        let mut usage = base.clone();

        if let Some(v) = self.marengo_video_hours {
            usage.marengo.video_hours = v;
        }
        if let Some(v) = self.marengo_search_calls {
            usage.marengo.search_calls_per_day = v;
        }
        if let Some(v) = self.pegasus_video_hours {
            usage.pegasus.video_hours = v;
        }
        if let Some(v) = self.pegasus_generate_calls {
            usage.pegasus.generate_calls_per_day = v;
        }
        if let Some(v) = self.pegasus_input_tokens {
            usage.pegasus.input_tokens_per_call = v;
        }
        if let Some(v) = self.pegasus_output_tokens {
            usage.pegasus.output_tokens_per_call = v;
        }
        if let Some(v) = self.embedding_videos {
            usage.embeddings.video_count = v;
        }
        if let Some(v) = self.embedding_audio_k {
            usage.embeddings.audio_count_k = v;
        }
        if let Some(v) = self.embedding_images_k {
            usage.embeddings.image_count_k = v;
        }
        if let Some(v) = self.embedding_text_k {
            usage.embeddings.text_count_k = v;
        }
        if let Some(v) = self.contract_years {
            usage.contract.contract_years = v;
        }
        if let Some(v) = self.reindex_frequency {
            usage.contract.reindex_frequency_per_year = v;
        }
        if let Some(v) = self.discount {
            usage.contract.enterprise_discount = v;
        }

        usage
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum PricingCommands {
    /// Display the effective pricing table
    Show {
        /// Pricing override file to merge before display
        #[arg(short, long)]
        pricing: Option<PathBuf>,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Display current configuration
    Show,

    /// Validate configuration file
    Validate,
}

impl Cli {
    /// Get the command to execute, defaulting to Estimate if none provided
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or_else(|| Commands::Estimate(EstimateArgs::default()))
    }
}
