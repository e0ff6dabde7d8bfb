use serde::{Deserialize, Serialize};

/// A user record as returned by the users API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub address: Address,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub company: Company,
}

/// Postal address nested in a user record
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Address {
    pub street: String,
    pub suite: String,
    pub city: String,
    pub zipcode: String,
    pub geo: Geo,
}

/// Geo-coordinates, kept as the strings the API sends
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Geo {
    pub lat: String,
    pub lng: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Company {
    pub name: String,
    pub catch_phrase: String,
    /// Classification string ("bs" on the wire)
    pub bs: String,
}

impl User {
    /// Company catch-phrase, if the record carries one
    pub fn catch_phrase(&self) -> Option<&str> {
        let phrase = self.company.catch_phrase.as_str();
        if phrase.is_empty() {
            None
        } else {
            Some(phrase)
        }
    }
}
