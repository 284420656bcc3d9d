use orderdesk::application::engine::OrderEngine;
use orderdesk::domain::menu::{Catalog, MenuItem};
use orderdesk::infrastructure::in_memory::InMemoryOrderStore;
use rust_decimal_macros::dec;
use std::io::Write;
use tempfile::NamedTempFile;

#[allow(dead_code)]
pub fn two_item_catalog() -> Catalog {
    Catalog::new(vec![
        MenuItem::new(1, "Nasi Goreng", dec!(25000)),
        MenuItem::new(2, "Mie Goreng", dec!(20000)),
    ])
    .expect("catalog ids are unique")
}

#[allow(dead_code)]
pub fn in_memory_engine(catalog: Catalog) -> OrderEngine {
    OrderEngine::new(catalog, Box::new(InMemoryOrderStore::new()))
}

#[allow(dead_code)]
pub fn requests_file(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("failed to create temp file");
    for line in lines {
        writeln!(file, "{}", line).expect("failed to write request");
    }
    file
}
