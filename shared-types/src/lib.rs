use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct HotelRecord {
    pub id: String,
    pub name: String,
    pub location: String,
    pub description: String,
    pub image: String,
}

/// The signed-in guest, if any. Absence means "not logged in".
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
}

impl CurrentUser {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }
}
