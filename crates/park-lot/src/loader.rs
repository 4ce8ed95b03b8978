//! CSV layout loader.
//!
//! # CSV format
//!
//! One row per spot.  Ids must cover `0..N` exactly once; row order does not
//! matter.
//!
//! ```csv
//! spot_id,column,row,floor
//! 0,0,1,1
//! 1,1,1,1
//! 2,1,1,2
//! ```

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use park_core::SpotId;

use crate::{LotError, SpotLayout, SpotLayoutBuilder};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct SpotRecord {
    spot_id: u32,
    column:  u32,
    row:     u32,
    floor:   u32,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a [`SpotLayout`] from a CSV file.
pub fn load_layout_csv(path: &Path) -> Result<SpotLayout, LotError> {
    let file = std::fs::File::open(path).map_err(LotError::Io)?;
    load_layout_reader(file)
}

/// Like [`load_layout_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`).
pub fn load_layout_reader<R: Read>(reader: R) -> Result<SpotLayout, LotError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut by_id: BTreeMap<u32, SpotRecord> = BTreeMap::new();

    for result in csv_reader.deserialize::<SpotRecord>() {
        let row = result.map_err(|e| LotError::Parse(e.to_string()))?;
        if row.floor == 0 {
            return Err(LotError::InvalidFloor { spot: SpotId(row.spot_id) });
        }
        let id = row.spot_id;
        if by_id.insert(id, row).is_some() {
            return Err(LotError::DuplicateSpot(SpotId(id)));
        }
    }

    // BTreeMap iterates in id order; any gap shows up as a mismatch.
    let mut builder = SpotLayoutBuilder::new();
    for (expected, (id, rec)) in by_id.into_iter().enumerate() {
        if id as usize != expected {
            return Err(LotError::MissingSpot(SpotId(expected as u32)));
        }
        builder.add_spot(rec.column, rec.row, rec.floor);
    }
    Ok(builder.build())
}
