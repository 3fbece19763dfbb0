pub mod dictionary;
pub mod explain;
pub mod preprocess;

pub use dictionary::{DictionarySearch, LookupError};
pub use explain::{ExplainError, Explainer};
