//! Feature form model
//!
//! Holds the raw values the user has entered for each prediction feature.
//! Values are stored verbatim as strings; numeric conversion is left to the
//! prediction service.

use crate::predictor::error::ValidationError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// The nine named fields of the prediction form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FeatureField {
    Year,
    Country,
    Gender,
    TuberculosisTreatment,
    HospitalBeds,
    UrbanPopulation,
    RuralPopulation,
    Gdp,
    Model,
}

impl FeatureField {
    /// All fields in request order
    pub const ALL: [FeatureField; 9] = [
        FeatureField::Year,
        FeatureField::Country,
        FeatureField::Gender,
        FeatureField::TuberculosisTreatment,
        FeatureField::HospitalBeds,
        FeatureField::UrbanPopulation,
        FeatureField::RuralPopulation,
        FeatureField::Gdp,
        FeatureField::Model,
    ];

    /// Key used for this field in the request body
    pub fn wire_name(self) -> &'static str {
        match self {
            FeatureField::Year => "year",
            FeatureField::Country => "country",
            FeatureField::Gender => "gender",
            FeatureField::TuberculosisTreatment => "tuberculosisTreatment",
            FeatureField::HospitalBeds => "hospitalBeds",
            FeatureField::UrbanPopulation => "urbanPopulation",
            FeatureField::RuralPopulation => "ruralPopulation",
            FeatureField::Gdp => "gdp",
            FeatureField::Model => "model",
        }
    }
}

impl fmt::Display for FeatureField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

impl FromStr for FeatureField {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FeatureField::ALL
            .into_iter()
            .find(|field| field.wire_name() == s)
            .ok_or_else(|| ValidationError::UnknownField(s.to_string()))
    }
}

/// Selectable gender values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl FromStr for Gender {
    type Err = String;

    /// Case-insensitive, so a lowercase `male` selects `Male`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            other => Err(format!("unknown gender: {other}")),
        }
    }
}

/// Prediction models offered by the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModelKind {
    Linear,
    Gradient,
    RandomForest,
    #[default]
    Ensemble,
}

impl ModelKind {
    pub const ALL: [ModelKind; 4] = [
        ModelKind::Linear,
        ModelKind::Gradient,
        ModelKind::RandomForest,
        ModelKind::Ensemble,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ModelKind::Linear => "linear",
            ModelKind::Gradient => "gradient",
            ModelKind::RandomForest => "random_forest",
            ModelKind::Ensemble => "ensemble",
        }
    }
}

impl FromStr for ModelKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        ModelKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| format!("unknown model: {s}"))
    }
}

/// Current form values. Serializes to the prediction request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureForm {
    year: String,
    country: String,
    gender: String,
    tuberculosis_treatment: String,
    hospital_beds: String,
    urban_population: String,
    rural_population: String,
    gdp: String,
    model: String,
}

impl FeatureForm {
    /// Empty form with the default gender and model preselected
    pub fn new() -> Self {
        Self {
            year: String::new(),
            country: String::new(),
            gender: Gender::Male.as_str().to_string(),
            tuberculosis_treatment: String::new(),
            hospital_beds: String::new(),
            urban_population: String::new(),
            rural_population: String::new(),
            gdp: String::new(),
            model: ModelKind::default().as_str().to_string(),
        }
    }

    fn slot(&self, field: FeatureField) -> &String {
        match field {
            FeatureField::Year => &self.year,
            FeatureField::Country => &self.country,
            FeatureField::Gender => &self.gender,
            FeatureField::TuberculosisTreatment => &self.tuberculosis_treatment,
            FeatureField::HospitalBeds => &self.hospital_beds,
            FeatureField::UrbanPopulation => &self.urban_population,
            FeatureField::RuralPopulation => &self.rural_population,
            FeatureField::Gdp => &self.gdp,
            FeatureField::Model => &self.model,
        }
    }

    fn slot_mut(&mut self, field: FeatureField) -> &mut String {
        match field {
            FeatureField::Year => &mut self.year,
            FeatureField::Country => &mut self.country,
            FeatureField::Gender => &mut self.gender,
            FeatureField::TuberculosisTreatment => &mut self.tuberculosis_treatment,
            FeatureField::HospitalBeds => &mut self.hospital_beds,
            FeatureField::UrbanPopulation => &mut self.urban_population,
            FeatureField::RuralPopulation => &mut self.rural_population,
            FeatureField::Gdp => &mut self.gdp,
            FeatureField::Model => &mut self.model,
        }
    }

    /// Current value of one field
    pub fn get(&self, field: FeatureField) -> &str {
        self.slot(field)
    }

    /// All fields with their current values, in request order
    pub fn fields(&self) -> impl Iterator<Item = (FeatureField, &str)> + '_ {
        FeatureField::ALL
            .into_iter()
            .map(move |field| (field, self.get(field)))
    }

    /// Replace exactly one field's value. Stored verbatim.
    pub fn update(&mut self, field: FeatureField, value: impl Into<String>) {
        *self.slot_mut(field) = value.into();
    }

    /// Same as `update`, addressing the field by its wire name
    pub fn update_by_name(
        &mut self,
        name: &str,
        value: impl Into<String>,
    ) -> Result<FeatureField, ValidationError> {
        let field = name.parse::<FeatureField>()?;
        self.update(field, value);
        Ok(field)
    }

    /// Restore every field to its initial default
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Fields that are still empty
    pub fn missing_fields(&self) -> Vec<FeatureField> {
        self.fields()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(field, _)| field)
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Every field is required; reports the first empty one
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self.missing_fields().first() {
            Some(field) => Err(ValidationError::MissingField(*field)),
            None => Ok(()),
        }
    }
}

impl Default for FeatureForm {
    fn default() -> Self {
        Self::new()
    }
}
