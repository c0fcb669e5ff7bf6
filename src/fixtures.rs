//! Loading client books from fixture files.
//!
//! JSON fixtures may mix the structured shape and the flat legacy shape
//! (`fullName` + `location`); CSV fixtures are always flat.

use std::fs;
use std::io::Read;
use std::path::Path;

use serde_json::Value;

use crate::domain::client::Client;
use crate::domain::legacy::LegacyClient;
use crate::repository::errors::RepositoryResult;

const DEFAULT_CLIENTS: &str = include_str!("../fixtures/clients.json");

/// The bundled sample client book.
pub fn default_clients() -> RepositoryResult<Vec<Client>> {
    parse_clients_json(DEFAULT_CLIENTS)
}

fn is_legacy_record(record: &Value) -> bool {
    record.get("fullName").is_some() || record.get("location").is_some()
}

/// Parses a JSON array of client records in either shape.
pub fn parse_clients_json(raw: &str) -> RepositoryResult<Vec<Client>> {
    let records: Vec<Value> = serde_json::from_str(raw)?;

    records
        .into_iter()
        .map(|record| -> RepositoryResult<Client> {
            if is_legacy_record(&record) {
                let legacy: LegacyClient = serde_json::from_value(record)?;
                Ok(Client::try_from(legacy)?)
            } else {
                Ok(serde_json::from_value::<Client>(record)?)
            }
        })
        .collect()
}

/// Parses flat CSV rows with a header line (`id,fullName,email,location,...`).
pub fn parse_legacy_csv<R: Read>(reader: R) -> RepositoryResult<Vec<Client>> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let mut clients = Vec::new();
    for row in csv_reader.deserialize::<LegacyClient>() {
        clients.push(Client::try_from(row?)?);
    }
    Ok(clients)
}

/// Reads a fixture file, choosing the parser by extension.
pub fn load_clients_from_path(path: &Path) -> RepositoryResult<Vec<Client>> {
    let is_csv = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

    if is_csv {
        parse_legacy_csv(fs::File::open(path)?)
    } else {
        parse_clients_json(&fs::read_to_string(path)?)
    }
}
