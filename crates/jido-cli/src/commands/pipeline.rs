//! Handlers for the join-pipeline commands (`resolve`, `enrich`, `view`).

use crate::cli::{OutputArgs, PipelineInputs, ViewKind};
use crate::commands::util::parse_partitions;
use anyhow::{Context, Result};
use jido_algo::{persist_dataframe, ParcelPipeline, DISTRICT_CODE_COLUMN, PNU_COLUMN};
use jido_io::{ensure_columns, load_parcels_csv, read_dataframe};
use tracing::info;

/// Load all three inputs and construct the pipeline (which computes both
/// cached results up front).
fn build_pipeline(inputs: &PipelineInputs) -> Result<ParcelPipeline> {
    let origin = read_dataframe(&inputs.points)
        .with_context(|| format!("loading points '{}'", inputs.points.display()))?;
    ensure_columns(&origin, &[&inputs.coords.x_col, &inputs.coords.y_col])
        .context("points dataset")?;

    let parcels = load_parcels_csv(&inputs.polygons)
        .with_context(|| format!("loading parcels '{}'", inputs.polygons.display()))?;

    let table = read_dataframe(&inputs.table)
        .with_context(|| format!("loading attribute table '{}'", inputs.table.display()))?;
    ensure_columns(&table, &[DISTRICT_CODE_COLUMN]).context("attribute table")?;

    info!(
        points = origin.height(),
        parcels = parcels.len(),
        attribute_rows = table.height(),
        "inputs loaded"
    );
    ParcelPipeline::new(
        origin,
        &parcels,
        &table,
        &inputs.coords.x_col,
        &inputs.coords.y_col,
    )
}

pub fn handle_resolve(inputs: &PipelineInputs, output: &OutputArgs) -> Result<()> {
    let pipeline = build_pipeline(inputs)?;
    let mut assignments = pipeline.resolve_parcel();
    let unresolved = assignments.column(PNU_COLUMN)?.null_count();
    let partitions = parse_partitions(output.out_partitions.as_ref());
    persist_dataframe(&mut assignments, &output.out, &partitions)?;
    println!(
        "Resolved {} points ({} without a containing parcel) -> {}",
        assignments.height(),
        unresolved,
        output.out.display()
    );
    Ok(())
}

pub fn handle_enrich(inputs: &PipelineInputs, output: &OutputArgs) -> Result<()> {
    let pipeline = build_pipeline(inputs)?;
    let mut enriched = pipeline.enriched_join();
    let partitions = parse_partitions(output.out_partitions.as_ref());
    persist_dataframe(&mut enriched, &output.out, &partitions)?;
    println!(
        "Enriched join: {} distinct parcel rows -> {}",
        enriched.height(),
        output.out.display()
    );
    Ok(())
}

pub fn handle_view(kind: ViewKind, inputs: &PipelineInputs, output: &OutputArgs) -> Result<()> {
    let view: jido_algo::AddressView = kind.into();
    let pipeline = build_pipeline(inputs)?;
    let mut projected = pipeline.view(view)?;
    let partitions = parse_partitions(output.out_partitions.as_ref());
    persist_dataframe(&mut projected, &output.out, &partitions)?;
    println!(
        "View {}: {} rows -> {}",
        view.as_str(),
        projected.height(),
        output.out.display()
    );
    Ok(())
}
