use clap::{Parser, Subcommand, ValueEnum};
use jido_algo::AddressView;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Coordinate-to-address resolution pipeline", long_about = None)]
pub struct Cli {
    /// Set the logging level
    #[arg(long, default_value = "info")]
    pub log_level: tracing::Level,

    /// Worker threads for spatial resolution ("auto" or a count)
    #[arg(long, default_value = "auto")]
    pub threads: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve each point to its parcel number (PNU)
    Resolve {
        #[command(flatten)]
        inputs: PipelineInputs,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Write the full enriched join (one row per distinct PNU)
    Enrich {
        #[command(flatten)]
        inputs: PipelineInputs,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Project a fixed address view from the enriched join
    View {
        /// Which address view to project
        #[arg(long, value_enum)]
        kind: ViewKind,
        #[command(flatten)]
        inputs: PipelineInputs,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Tag each point with its H3 hex cell (bypasses the join pipeline)
    Hex {
        /// Points dataset (.csv or .parquet)
        #[arg(long)]
        points: PathBuf,
        /// H3 resolution level (0-15)
        #[arg(long)]
        level: u8,
        #[command(flatten)]
        coords: CoordColumns,
        #[command(flatten)]
        output: OutputArgs,
    },
}

/// Inputs shared by the join-pipeline commands.
#[derive(clap::Args, Debug)]
pub struct PipelineInputs {
    /// Points dataset (.csv or .parquet)
    #[arg(long)]
    pub points: PathBuf,
    /// Parcel polygon CSV with PNU and WKT geometry columns
    #[arg(long)]
    pub polygons: PathBuf,
    /// Attribute table keyed by bupjungdong_code (.csv or .parquet)
    #[arg(long)]
    pub table: PathBuf,
    #[command(flatten)]
    pub coords: CoordColumns,
}

#[derive(clap::Args, Debug)]
pub struct CoordColumns {
    /// Longitude column of the points dataset
    #[arg(long, default_value = "x")]
    pub x_col: String,
    /// Latitude column of the points dataset
    #[arg(long, default_value = "y")]
    pub y_col: String,
}

#[derive(clap::Args, Debug)]
pub struct OutputArgs {
    /// Output Parquet path
    #[arg(short, long)]
    pub out: PathBuf,
    /// Comma-separated column list for hive-style output partitioning
    #[arg(long)]
    pub out_partitions: Option<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ViewKind {
    Zipcode,
    AdminDistrict,
    RoadAddress,
    LotAddress,
}

impl From<ViewKind> for AddressView {
    fn from(kind: ViewKind) -> Self {
        match kind {
            ViewKind::Zipcode => AddressView::Zipcode,
            ViewKind::AdminDistrict => AddressView::AdminDistrict,
            ViewKind::RoadAddress => AddressView::RoadAddress,
            ViewKind::LotAddress => AddressView::LotAddress,
        }
    }
}
