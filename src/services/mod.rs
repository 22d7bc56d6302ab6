mod csv_store;

pub use csv_store::{CreateUserOutcome, CsvStore};
