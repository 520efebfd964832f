use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize};

/// Genre names stored as a JSON array column.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct Genres(pub Vec<String>);
