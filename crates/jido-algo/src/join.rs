//! Attribute join: parcel assignments to enriched address records.
//!
//! The attribute table is keyed by `bupjungdong_code`, the administrative
//! district code that forms the first 10 characters of a PNU. The join is
//! left-outer on that prefix, so every assignment row survives and rows
//! without a match (including null PNUs) carry null attribute fields.
//!
//! Both sides are deduplicated: the table by district code before the join,
//! the result by PNU after it. Dedup keeps the first row in frame order;
//! since upstream order carries no guarantee, which duplicate survives is
//! documented as unspecified. Only the "exactly one survives" invariant is
//! contractual.

use crate::resolve::PNU_COLUMN;
use anyhow::{anyhow, Context, Result};
use polars::prelude::*;

/// Key column of the attribute table.
pub const DISTRICT_CODE_COLUMN: &str = "bupjungdong_code";

/// Length of the district-code prefix of a PNU.
pub const DISTRICT_CODE_LEN: usize = 10;

/// Helper key column; dropped from the joined output.
const JOIN_KEY_COLUMN: &str = "__district_key";

/// District-code prefix of a PNU: its first 10 characters, or the whole
/// string when shorter (substring semantics).
pub fn district_prefix(pnu: &str) -> &str {
    match pnu.char_indices().nth(DISTRICT_CODE_LEN) {
        Some((idx, _)) => &pnu[..idx],
        None => pnu,
    }
}

/// Join parcel assignments against the attribute table.
///
/// Output: one row per distinct PNU (the null-PNU group collapses to a
/// single all-null-attribute row), with every table column except the key
/// appended, plus `bupjungdong_code` itself so district views can project
/// it. Null PNUs never match.
pub fn join_with_table(pnu_df: &DataFrame, table_df: &DataFrame) -> Result<DataFrame> {
    if !has_column(table_df, DISTRICT_CODE_COLUMN) {
        return Err(anyhow!(
            "attribute table is missing key column '{DISTRICT_CODE_COLUMN}'"
        ));
    }

    // Table side: drop rows without a code, keep one row per code, and
    // duplicate the code under the helper key so the code itself survives
    // the join for the district view.
    let table = table_df
        .clone()
        .lazy()
        .drop_nulls(Some(vec![col(DISTRICT_CODE_COLUMN)]))
        .unique_stable(
            Some(vec![DISTRICT_CODE_COLUMN.to_string()]),
            UniqueKeepStrategy::First,
        )
        .with_column(col(DISTRICT_CODE_COLUMN).alias(JOIN_KEY_COLUMN))
        .collect()
        .context("deduplicating attribute table by district code")?;

    // Assignment side: prefix key derived from the PNU column.
    let pnu = pnu_df
        .column(PNU_COLUMN)
        .context("assignment frame is missing the PNU column")?
        .utf8()
        .context("PNU column is not a string column")?;
    let keys: Vec<Option<&str>> = pnu.into_iter().map(|v| v.map(district_prefix)).collect();
    let mut left = pnu_df.clone();
    left.with_column(Series::new(JOIN_KEY_COLUMN, keys))
        .context("appending district join key")?;

    let joined = left
        .lazy()
        .left_join(table.lazy(), col(JOIN_KEY_COLUMN), col(JOIN_KEY_COLUMN))
        .unique_stable(
            Some(vec![PNU_COLUMN.to_string()]),
            UniqueKeepStrategy::First,
        )
        .collect()
        .context("joining assignments with attribute table")?;
    joined
        .drop(JOIN_KEY_COLUMN)
        .context("dropping district join key")
}

pub(crate) fn has_column(df: &DataFrame, name: &str) -> bool {
    df.get_column_names().iter().any(|column| *column == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assignments(pnus: &[Option<&str>]) -> DataFrame {
        DataFrame::new(vec![
            Series::new("id", (0..pnus.len() as i64).collect::<Vec<i64>>()),
            Series::new(
                PNU_COLUMN,
                pnus.iter()
                    .map(|v| v.map(str::to_string))
                    .collect::<Vec<Option<String>>>(),
            ),
        ])
        .unwrap()
    }

    fn table(rows: &[(&str, &str)]) -> DataFrame {
        DataFrame::new(vec![
            Series::new(
                DISTRICT_CODE_COLUMN,
                rows.iter().map(|r| r.0.to_string()).collect::<Vec<String>>(),
            ),
            Series::new(
                "zipcode",
                rows.iter().map(|r| r.1.to_string()).collect::<Vec<String>>(),
            ),
        ])
        .unwrap()
    }

    fn zipcode_at(df: &DataFrame, idx: usize) -> Option<String> {
        df.column("zipcode")
            .unwrap()
            .utf8()
            .unwrap()
            .get(idx)
            .map(str::to_string)
    }

    #[test]
    fn district_prefix_truncates_to_ten() {
        assert_eq!(district_prefix("1111010100100010000"), "1111010100");
        assert_eq!(district_prefix("11110"), "11110");
    }

    #[test]
    fn prefix_match_joins_attributes() {
        let left = assignments(&[Some("1111010100100010000")]);
        let right = table(&[("1111010100", "03187")]);
        let joined = join_with_table(&left, &right).unwrap();
        assert_eq!(joined.height(), 1);
        assert_eq!(zipcode_at(&joined, 0), Some("03187".to_string()));
        // The key column itself survives for the district view.
        assert!(has_column(&joined, DISTRICT_CODE_COLUMN));
    }

    #[test]
    fn changed_prefix_character_breaks_the_match() {
        let left = assignments(&[Some("2111010100100010000")]);
        let right = table(&[("1111010100", "03187")]);
        let joined = join_with_table(&left, &right).unwrap();
        assert_eq!(joined.height(), 1);
        assert_eq!(zipcode_at(&joined, 0), None);
    }

    #[test]
    fn null_pnu_rows_survive_with_null_attributes() {
        let left = assignments(&[Some("1111010100100010000"), None]);
        let right = table(&[("1111010100", "03187")]);
        let joined = join_with_table(&left, &right).unwrap();
        assert_eq!(joined.height(), 2);
        let pnus: Vec<Option<&str>> = joined
            .column(PNU_COLUMN)
            .unwrap()
            .utf8()
            .unwrap()
            .into_iter()
            .collect();
        let null_row = pnus.iter().position(|v| v.is_none()).unwrap();
        assert_eq!(zipcode_at(&joined, null_row), None);
    }

    #[test]
    fn duplicate_district_codes_keep_exactly_one_row() {
        let left = assignments(&[Some("1111010100100010000")]);
        let right = table(&[("1111010100", "03187"), ("1111010100", "99999")]);
        let joined = join_with_table(&left, &right).unwrap();
        // One table row survived, so the assignment matches exactly once.
        assert_eq!(joined.height(), 1);
        assert!(zipcode_at(&joined, 0).is_some());
    }

    #[test]
    fn output_has_one_row_per_distinct_pnu() {
        let left = assignments(&[
            Some("1111010100100010000"),
            Some("1111010100100010000"),
            None,
            None,
        ]);
        let right = table(&[("1111010100", "03187")]);
        let joined = join_with_table(&left, &right).unwrap();
        // Two distinct PNU groups: the parcel and the null group.
        assert_eq!(joined.height(), 2);
    }

    #[test]
    fn null_table_codes_are_dropped_before_the_join() {
        let left = assignments(&[Some("1111010100100010000")]);
        let right = DataFrame::new(vec![
            Series::new(DISTRICT_CODE_COLUMN, vec![None::<String>]),
            Series::new("zipcode", vec![Some("03187".to_string())]),
        ])
        .unwrap();
        let joined = join_with_table(&left, &right).unwrap();
        assert_eq!(joined.height(), 1);
        assert_eq!(zipcode_at(&joined, 0), None);
    }

    #[test]
    fn missing_key_column_is_an_error() {
        let left = assignments(&[Some("1111010100100010000")]);
        let right = DataFrame::new(vec![Series::new("zipcode", vec!["03187"])]).unwrap();
        let err = join_with_table(&left, &right).unwrap_err();
        assert!(err.to_string().contains(DISTRICT_CODE_COLUMN));
    }
}
