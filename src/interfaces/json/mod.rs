//! JSON-lines transport: one request per input line, one response per
//! output line.

pub mod handler;
pub mod menu_reader;
pub mod request_reader;
pub mod response_writer;
