//! File I/O for saving and loading the piece catalogue.
//!
//! The catalogue is a single JSON document:
//!
//! ```json
//! {
//!   "puzzles": {
//!     "P1": {
//!       "total_pieces": 3,
//!       "pieces": { "1": [10, 20], "2": [10, 30] },
//!       "connections": [{ "parent": 1, "piece_id": 2, "edge_code": 10 }]
//!     }
//!   }
//! }
//! ```

use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::Path;

use log::debug;
use tempfile::NamedTempFile;

use crate::error::StoreError;
use crate::store::MemoryStore;

/// Default catalogue location, relative to the working directory.
pub const DEFAULT_STORE_PATH: &str = "puzzles.json";

/// Loads a catalogue, or returns an empty store if the file does not exist.
pub fn load(path: &Path) -> Result<MemoryStore, StoreError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("no catalogue at {}, starting empty", path.display());
            return Ok(MemoryStore::new());
        }
        Err(e) => return Err(e.into()),
    };

    let mut store: MemoryStore = serde_json::from_reader(BufReader::new(file))?;
    store.rebuild_indexes();
    debug!("loaded catalogue from {}", path.display());
    Ok(store)
}

/// Saves the catalogue as pretty-printed JSON.
///
/// Writes to a temporary file beside `path` and renames it into place, so an
/// interrupted save leaves the previous catalogue intact. The temporary file
/// is removed if any step fails.
pub fn save(store: &MemoryStore, path: &Path) -> Result<(), StoreError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(dir)?;
    {
        let mut writer = BufWriter::new(temp.as_file_mut());
        serde_json::to_writer_pretty(&mut writer, store)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
    }
    temp.persist(path).map_err(|e| e.error)?;
    debug!("saved catalogue to {}", path.display());
    Ok(())
}
