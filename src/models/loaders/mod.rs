pub mod ttl_loader;

pub use ttl_loader::{load_imdb_ids, IdScanner};
