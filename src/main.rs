use clap::Parser;
use miette::{IntoDiagnostic, Result};
use orderdesk::application::engine::OrderEngine;
use orderdesk::domain::menu::Catalog;
use orderdesk::domain::ports::OrderStoreBox;
use orderdesk::infrastructure::in_memory::InMemoryOrderStore;
use orderdesk::interfaces::json::handler::{handle, reject};
use orderdesk::interfaces::json::menu_reader::MenuReader;
use orderdesk::interfaces::json::request_reader::RequestReader;
use orderdesk::interfaces::json::response_writer::ResponseWriter;
use orderdesk::telemetry::setup_tracing;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Requests file, one JSON request per line. Reads stdin when omitted.
    input: Option<PathBuf>,

    /// Menu file (JSON array of {id, name, price}). Uses the built-in menu when omitted.
    #[arg(long)]
    menu: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_tracing();
    let cli = Cli::parse();

    let catalog = match cli.menu {
        Some(path) => {
            let file = File::open(path).into_diagnostic()?;
            MenuReader::new(BufReader::new(file))
                .read_catalog()
                .into_diagnostic()?
        }
        None => Catalog::default(),
    };
    info!(items = catalog.list().len(), "catalog loaded");

    let store: OrderStoreBox = Box::new(InMemoryOrderStore::new());
    let engine = OrderEngine::new(catalog, store);

    let input: Box<dyn BufRead> = match cli.input {
        Some(path) => Box::new(BufReader::new(File::open(path).into_diagnostic()?)),
        None => Box::new(io::stdin().lock()),
    };

    let stdout = io::stdout();
    let mut writer = ResponseWriter::new(stdout.lock());
    for request in RequestReader::new(input).requests() {
        let response = match request {
            Ok(request) => handle(&engine, request).await,
            Err(e) => reject(&e),
        };
        writer.write_response(&response).into_diagnostic()?;
    }
    writer.flush().into_diagnostic()?;

    Ok(())
}
