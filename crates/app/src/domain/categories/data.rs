//! Categories Data

use crate::domain::categories::records::CategoryUuid;

/// New Category Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCategory {
    pub uuid: CategoryUuid,
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub featured: Vec<String>,
}

/// Category Update Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryUpdate {
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub featured: Vec<String>,
}
