use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InterestId(pub String);

impl InterestId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for InterestId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for InterestId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for InterestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterestCategory {
    FoodAndDrink,
    Outdoors,
    Entertainment,
    ArtsAndCulture,
    Wellness,
    Travel,
    Technology,
}

impl InterestCategory {
    pub fn label(&self) -> &'static str {
        match self {
            Self::FoodAndDrink => "Food & Drink",
            Self::Outdoors => "Outdoors",
            Self::Entertainment => "Entertainment",
            Self::ArtsAndCulture => "Arts & Culture",
            Self::Wellness => "Wellness",
            Self::Travel => "Travel",
            Self::Technology => "Technology",
        }
    }
}

/// A topic a user can tag on their profile. Immutable, owned by the catalog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interest {
    pub id: InterestId,
    pub label: String,
    pub emoji: String,
    pub category: InterestCategory,
}

impl Interest {
    /// Chip rendering used by listing and suggestion output.
    pub fn display(&self) -> String {
        format!("{} {}", self.emoji, self.label)
    }
}
