use serde::{Deserialize, Serialize};

/// Content-addressed location descriptor. Two specs with the same
/// (home, city, street) triple identify the same location record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct LocationSpec {
    pub home: bool,
    pub city: String,
    pub street: String,
}
