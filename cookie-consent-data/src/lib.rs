use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CookieCategory {
    pub id: String,
    pub title: String,
    pub description: String,
}

impl CookieCategory {
    pub fn new(id: &str, title: &str, description: &str) -> Self {
        CookieCategory {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
        }
    }
}

/// Ordered list of cookie categories with unique, non-empty ids.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct CookieCategories {
    categories: Vec<CookieCategory>,
}

impl CookieCategories {
    pub fn new(categories: Vec<CookieCategory>) -> Result<Self, Error> {
        let mut seen = HashSet::with_capacity(categories.len());
        for (index, category) in categories.iter().enumerate() {
            if category.id.is_empty() {
                return Err(Error::EmptyId { index });
            }
            if !seen.insert(category.id.as_str()) {
                return Err(Error::DuplicateId {
                    id: category.id.clone(),
                });
            }
        }
        log::debug!("Loaded {} cookie categories", categories.len());
        Ok(CookieCategories { categories })
    }

    /// Parses a JSON array of `{id, title, description}` records.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let categories: Vec<CookieCategory> = serde_json::from_str(json)?;
        Self::new(categories)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CookieCategory> {
        self.categories.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|category| category.id.as_str())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids().any(|known| known == id)
    }
}

impl Default for CookieCategories {
    fn default() -> Self {
        CookieCategories {
            categories: vec![
                CookieCategory::new(
                    "pc",
                    "Performance cookies",
                    "These cookies collect information about how visitors use the site, \
                     such as which pages are visited most often. The data is aggregated \
                     and only used to improve how the site works.",
                ),
                CookieCategory::new(
                    "fc",
                    "Functional cookies",
                    "These cookies remember choices you make, such as your language or \
                     region, to provide enhanced and more personal features.",
                ),
                CookieCategory::new(
                    "tc",
                    "Targeting cookies",
                    "These cookies are set by advertising partners to build a profile of \
                     your interests and show you relevant adverts on other sites.",
                ),
            ],
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("could not parse categories: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("category at position {index} has an empty id")]
    EmptyId { index: usize },
    #[error("duplicate category id: {id}")]
    DuplicateId { id: String },
}
