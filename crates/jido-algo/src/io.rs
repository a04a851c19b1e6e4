//! Parquet persistence for pipeline outputs.
//!
//! Writes a frame either as a single Parquet file or, when partition
//! columns are given, as a hive-style directory tree of
//! `key=value/part-NNNN.parquet` files under the output path.

use anyhow::{Context, Result};
use polars::frame::group_by::GroupsIndicator;
use polars::prelude::{DataFrame, IdxCa, NamedFrom, ParquetWriter};
use std::fs::{self, File};
use std::path::Path;

/// Persist `df` to `output`. With an empty `partitions` list this writes a
/// single Parquet file (creating parent directories); otherwise one file
/// per distinct combination of the partition columns.
pub fn persist_dataframe(df: &mut DataFrame, output: &Path, partitions: &[String]) -> Result<()> {
    if partitions.is_empty() {
        if let Some(parent) = output.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output directory '{}'", parent.display()))?;
        }
        write_parquet(df, output)
    } else {
        write_partitioned(df, output, partitions)
    }
}

fn write_parquet(df: &mut DataFrame, path: &Path) -> Result<()> {
    let mut file = File::create(path)
        .with_context(|| format!("creating Parquet output '{}'", path.display()))?;
    ParquetWriter::new(&mut file)
        .finish(df)
        .with_context(|| format!("writing Parquet output '{}'", path.display()))?;
    Ok(())
}

fn write_partitioned(df: &DataFrame, output: &Path, partitions: &[String]) -> Result<()> {
    let group_by = df.group_by(partitions)?;
    for (index, group) in group_by.get_groups().iter().enumerate() {
        let (mut partition_df, first_row) = match group {
            GroupsIndicator::Idx((first, indices)) => {
                let idx_ca = IdxCa::new("row_idx", indices.as_slice());
                (df.take(&idx_ca)?, first as usize)
            }
            GroupsIndicator::Slice([first, len]) => {
                (df.slice(first as i64, len as usize), first as usize)
            }
        };

        // Directory per partition key combination, named from the values
        // of the group's first row.
        let mut dir = output.to_path_buf();
        for key in partitions {
            let value = df.column(key)?.get(first_row)?.to_string();
            dir.push(format!("{key}={}", sanitize_partition_value(&value)));
        }
        fs::create_dir_all(&dir)
            .with_context(|| format!("creating partition directory '{}'", dir.display()))?;
        write_parquet(&mut partition_df, &dir.join(format!("part-{index:04}.parquet")))?;
    }
    Ok(())
}

fn sanitize_partition_value(value: &str) -> String {
    value
        .trim_matches('"')
        .replace(std::path::MAIN_SEPARATOR, "_")
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::Series;

    fn sample() -> DataFrame {
        DataFrame::new(vec![
            Series::new("PNU", vec!["1111010100100010000", "2611010100100020000"]),
            Series::new("zipcode", vec!["03187", "48058"]),
        ])
        .unwrap()
    }

    #[test]
    fn writes_single_parquet_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("zip.parquet");
        persist_dataframe(&mut sample(), &path, &[]).unwrap();
        assert!(path.is_file());
    }

    #[test]
    fn writes_one_directory_per_partition_value() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("byzip");
        persist_dataframe(&mut sample(), &out, &["zipcode".to_string()]).unwrap();
        let mut partition_dirs: Vec<String> = fs::read_dir(&out)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        partition_dirs.sort();
        assert_eq!(partition_dirs, vec!["zipcode=03187", "zipcode=48058"]);
    }
}
