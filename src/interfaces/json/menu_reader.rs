use crate::domain::menu::{Catalog, MenuItem};
use crate::error::Result;
use std::io::Read;

/// Loads a catalog from a JSON array of `{id, name, price}` objects.
pub struct MenuReader<R: Read> {
    source: R,
}

impl<R: Read> MenuReader<R> {
    pub fn new(source: R) -> Self {
        Self { source }
    }

    /// Parses the whole source. Duplicate item ids are rejected.
    pub fn read_catalog(self) -> Result<Catalog> {
        let items: Vec<MenuItem> = serde_json::from_reader(self.source)?;
        Catalog::new(items)
    }
}
