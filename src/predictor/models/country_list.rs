//! Country list model
//!
//! The ordered reference list of country names offered for selection.
//! Empty until the first successful load; a later load replaces it wholesale.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountryList {
    countries: Vec<String>,
    loaded: bool,
}

impl CountryList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole list with a freshly loaded one
    pub fn replace(&mut self, countries: Vec<String>) {
        self.countries = countries;
        self.loaded = true;
    }

    pub fn as_slice(&self) -> &[String] {
        &self.countries
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.countries.iter().map(String::as_str)
    }

    pub fn contains(&self, country: &str) -> bool {
        self.countries.iter().any(|c| c == country)
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    /// Whether any load has succeeded yet
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }
}
