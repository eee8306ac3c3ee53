use serde::Deserialize;
use std::fmt;

/// User record as returned by the placeholder API (`/users`).
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct UserRecord {
    pub id: u32,
    pub name: String,
    pub email: String,
}

/// Post record as returned by the placeholder API (`/posts`).
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct PostRecord {
    pub id: u32,
    pub title: String,
}

/// Display record for one trip card. Rebuilt on every load, never stored.
#[derive(Clone, Debug, PartialEq)]
pub struct Trip {
    pub id: u32,
    pub city: String,
    pub traveler: String,
    pub email: String,
    pub description: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Condition {
    Sunny,
    Cloudy,
    Rainy,
}

impl Condition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::Sunny => "Sunny",
            Condition::Cloudy => "Cloudy",
            Condition::Rainy => "Rainy",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display record for one simulated weather card.
#[derive(Clone, Debug, PartialEq)]
pub struct WeatherSample {
    pub city: String,
    pub temperature: String,
    pub condition: Condition,
    pub note: String,
}
