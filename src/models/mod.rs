pub mod loaders;
pub mod movie;

pub use loaders::{load_imdb_ids, IdScanner};
pub use movie::{FindResponse, ImdbId, LookupFailure, LookupResult, MatchedRecord, MovieCandidate};
