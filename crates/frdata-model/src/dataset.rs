//! Supported dataset kinds and their column contracts.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Column names shared by the pipeline stages.
pub mod columns {
    // Death records
    pub const DEATH_DATE: &str = "Date Décès";
    pub const BIRTH_DATE: &str = "Date Naissance";
    pub const AGE: &str = "Age";
    pub const DEATH_YEAR: &str = "Année Décès";
    pub const DEATH_REGION: &str = "Nom Actuel Région Décès";
    pub const DEATH_DEPARTMENT: &str = "Nom Actuel Département Décès";
    pub const SEX: &str = "Sexe";

    // Food-service listings
    pub const NAME: &str = "Nom";
    pub const TYPE: &str = "Type";
    pub const COMMUNE: &str = "Commune";
    pub const REGION: &str = "Région";
    pub const DEPARTMENT: &str = "Département";
    pub const OSM_POINT: &str = "OSM Point";
    pub const LATITUDE: &str = "latitude";
    pub const LONGITUDE: &str = "longitude";
    pub const FULL_NAME: &str = "nom_complet";
}

/// Which source schema a run is processing.
///
/// Selected once when the source is chosen and passed explicitly to the
/// cleaner and the metrics builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DatasetKind {
    /// INSEE death records (one row per deceased person).
    Deaths,
    /// OpenStreetMap restaurants, cafés and bars.
    FoodService,
}

impl DatasetKind {
    pub const ALL: [DatasetKind; 2] = [DatasetKind::Deaths, DatasetKind::FoodService];

    /// Stable identifier used on the command line and in config files.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Deaths => "deaths",
            Self::FoodService => "food-service",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Deaths => "Décès en France",
            Self::FoodService => "Restauration en France (OSM)",
        }
    }

    /// Source columns that must exist, after name normalization, before cleaning.
    ///
    /// The death-date column is located by pattern rather than by exact name
    /// (see [`DatasetKind::is_death_date_column`]) and is therefore not listed.
    pub const fn required_source_columns(self) -> &'static [&'static str] {
        match self {
            Self::Deaths => &[columns::BIRTH_DATE, columns::DEATH_REGION],
            Self::FoodService => &[
                columns::NAME,
                columns::COMMUNE,
                columns::REGION,
                columns::DEPARTMENT,
                columns::OSM_POINT,
            ],
        }
    }

    /// Fields that must be present on every row of the cleaned table.
    pub const fn required_fields(self) -> &'static [&'static str] {
        match self {
            Self::Deaths => &[columns::AGE, columns::DEATH_YEAR, columns::DEATH_REGION],
            Self::FoodService => &[columns::LATITUDE, columns::LONGITUDE],
        }
    }

    /// Columns added by the cleaner.
    pub const fn derived_columns(self) -> &'static [&'static str] {
        match self {
            Self::Deaths => &[
                columns::DEATH_DATE,
                columns::BIRTH_DATE,
                columns::AGE,
                columns::DEATH_YEAR,
            ],
            Self::FoodService => &[columns::LATITUDE, columns::LONGITUDE, columns::FULL_NAME],
        }
    }

    /// Default file name of the raw dataset inside the raw-data directory.
    pub const fn raw_file_name(self) -> &'static str {
        match self {
            Self::Deaths => "decees_en_france_raw.csv",
            Self::FoodService => "restaurants_france_raw.csv",
        }
    }

    /// Default file name of the cleaned dataset inside the cleaned-data directory.
    pub const fn cleaned_file_name(self) -> &'static str {
        match self {
            Self::Deaths => "cleaneddata.csv",
            Self::FoodService => "restaurants_cleaned.csv",
        }
    }

    /// Whether `name` is the death-date column of a death-records file.
    ///
    /// Source files spell this header inconsistently, so any header containing
    /// both `Date` and `Déc` qualifies.
    pub fn is_death_date_column(name: &str) -> bool {
        name.contains("Date") && name.contains("Déc")
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DatasetKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "deaths" | "deces" => Ok(Self::Deaths),
            "food-service" | "food_service" | "restaurants" => Ok(Self::FoodService),
            other => Err(format!("unknown dataset kind '{other}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn death_date_column_is_matched_by_pattern() {
        assert!(DatasetKind::is_death_date_column("Date Décès"));
        assert!(DatasetKind::is_death_date_column("Date  Décès (jour)"));
        assert!(!DatasetKind::is_death_date_column("Date Naissance"));
        assert!(!DatasetKind::is_death_date_column("Décès"));
    }

    #[test]
    fn kind_parses_from_cli_names() {
        assert_eq!("deaths".parse::<DatasetKind>(), Ok(DatasetKind::Deaths));
        assert_eq!(
            "Food-Service".parse::<DatasetKind>(),
            Ok(DatasetKind::FoodService)
        );
        assert!("parking".parse::<DatasetKind>().is_err());
    }
}
