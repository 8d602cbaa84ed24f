use std::ffi::OsString;

use crate::predictor::models::{FeatureField, Gender, ModelKind};
pub use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct ClapArgs {
    /// Profile name
    /// Profile to read the service URL from. Default is 'default'.
    /// If the profile is not configured, http://localhost:8000 is used.
    #[clap(short = 'p', long, default_value = "default", help = "profile name")]
    profile: String,

    /// Verbose mode
    /// Optional. Print debug logs to stderr.
    #[clap(
        short = 'v',
        long,
        help = "Print verbose message",
        default_value = "false"
    )]
    verbose: bool,

    /// Print the countries known to the service and exit
    #[clap(long, default_value = "false")]
    list_countries: bool,

    #[clap(long, help = "calendar year, e.g. 2010")]
    year: Option<String>,

    #[clap(long, help = "country name as listed by --list-countries")]
    country: Option<String>,

    #[clap(long, value_parser = parse_gender, help = "Male or Female")]
    gender: Option<Gender>,

    #[clap(long, help = "tuberculosis treatment success rate")]
    tuberculosis_treatment: Option<String>,

    #[clap(long, help = "hospital beds per 1000 people")]
    hospital_beds: Option<String>,

    #[clap(long, help = "urban population share")]
    urban_population: Option<String>,

    #[clap(long, help = "rural population share")]
    rural_population: Option<String>,

    #[clap(long, help = "GDP per capita")]
    gdp: Option<String>,

    #[clap(long, value_parser = parse_model, help = "linear, gradient, random_forest or ensemble")]
    model: Option<ModelKind>,
}

fn parse_gender(s: &str) -> Result<Gender, String> {
    s.parse()
}

fn parse_model(s: &str) -> Result<ModelKind, String> {
    s.parse()
}

#[derive(Debug, Clone)]
pub struct CommandLineArgs {
    profile: String,
    verbose: bool,
    list_countries: bool,
    field_values: Vec<(FeatureField, String)>,
}

impl CommandLineArgs {
    pub fn parse() -> Self {
        Self::from_clap(ClapArgs::parse())
    }

    pub fn parse_from<I, T>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::from_clap(ClapArgs::parse_from(itr))
    }

    fn from_clap(args: ClapArgs) -> Self {
        let candidates = [
            (FeatureField::Year, args.year),
            (FeatureField::Country, args.country),
            (FeatureField::Gender, args.gender.map(|g| g.as_str().to_string())),
            (FeatureField::TuberculosisTreatment, args.tuberculosis_treatment),
            (FeatureField::HospitalBeds, args.hospital_beds),
            (FeatureField::UrbanPopulation, args.urban_population),
            (FeatureField::RuralPopulation, args.rural_population),
            (FeatureField::Gdp, args.gdp),
            (FeatureField::Model, args.model.map(|m| m.as_str().to_string())),
        ];

        Self {
            profile: args.profile,
            verbose: args.verbose,
            list_countries: args.list_countries,
            field_values: candidates
                .into_iter()
                .filter_map(|(field, value)| value.map(|v| (field, v)))
                .collect(),
        }
    }

    pub fn profile(&self) -> &String {
        &self.profile
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    pub fn list_countries(&self) -> bool {
        self.list_countries
    }

    /// Form fields given on the command line, in request order
    pub fn field_values(&self) -> &[(FeatureField, String)] {
        &self.field_values
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_args_profile_only() {
        let args = CommandLineArgs::parse_from(["program", "--profile", "test"]);
        assert_eq!(args.profile(), "test");
        assert!(!args.verbose());
        assert!(args.field_values().is_empty());
    }

    #[test]
    fn test_parse_args_short_flags() {
        let args = CommandLineArgs::parse_from(["program", "-p", "dev", "-v"]);
        assert_eq!(args.profile(), "dev");
        assert!(args.verbose());
    }

    #[test]
    fn test_default_values() {
        let args = CommandLineArgs::parse_from(["program"]);
        assert_eq!(args.profile(), "default");
        assert!(!args.list_countries());
    }

    #[test]
    fn test_field_values_in_request_order() {
        let args = CommandLineArgs::parse_from([
            "program",
            "--gdp",
            "1200",
            "--year",
            "2012",
            "--hospital-beds",
            "2.5",
        ]);
        assert_eq!(
            args.field_values(),
            [
                (FeatureField::Year, "2012".to_string()),
                (FeatureField::HospitalBeds, "2.5".to_string()),
                (FeatureField::Gdp, "1200".to_string()),
            ]
        );
    }

    #[test]
    fn test_gender_and_model_are_normalized() {
        let args =
            CommandLineArgs::parse_from(["program", "--gender", "male", "--model", "Random_Forest"]);
        assert_eq!(
            args.field_values(),
            [
                (FeatureField::Gender, "Male".to_string()),
                (FeatureField::Model, "random_forest".to_string()),
            ]
        );
    }

    #[test]
    fn test_invalid_model_is_rejected() {
        let result = ClapArgs::try_parse_from(["program", "--model", "svm"]);
        assert!(result.is_err());
    }
}
