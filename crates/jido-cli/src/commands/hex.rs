//! Handler for the `hex` command. Tags points directly; no polygon set or
//! attribute table is loaded and no join pipeline is constructed.

use crate::cli::{CoordColumns, OutputArgs};
use crate::commands::util::parse_partitions;
use anyhow::{Context, Result};
use jido_algo::{persist_dataframe, tag_hex_cells, HEX_COLUMN};
use jido_io::{ensure_columns, read_dataframe};
use std::path::Path;

pub fn handle(points: &Path, level: u8, coords: &CoordColumns, output: &OutputArgs) -> Result<()> {
    let origin = read_dataframe(points)
        .with_context(|| format!("loading points '{}'", points.display()))?;
    ensure_columns(&origin, &[&coords.x_col, &coords.y_col]).context("points dataset")?;

    let mut tagged = tag_hex_cells(&origin, &coords.x_col, &coords.y_col, level)?;
    let untagged = tagged.column(HEX_COLUMN)?.null_count();
    let partitions = parse_partitions(output.out_partitions.as_ref());
    persist_dataframe(&mut tagged, &output.out, &partitions)?;
    println!(
        "Tagged {} points at H3 level {} ({} with invalid coordinates) -> {}",
        tagged.height(),
        level,
        untagged,
        output.out.display()
    );
    Ok(())
}
