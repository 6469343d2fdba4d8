mod schema;
mod vocab;

pub use schema::SchemaCommands;
pub use vocab::{VocabCommands, Vocabulary};
