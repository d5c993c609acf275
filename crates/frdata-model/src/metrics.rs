//! Typed aggregate views handed to the presentation layer.
//!
//! Each named view is a `Vec` of one record type. Serialized field names match
//! the source column names so that a consumer keyed on `"Count"`, `"Type"` or
//! `"Année Décès"` keeps working.

use serde::{Deserialize, Serialize};

use crate::dataset::DatasetKind;
use crate::error::{DataError, Result};

// =============================================================================
// DEATH RECORDS
// =============================================================================

/// Mean age at death for one year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgeByYear {
    #[serde(rename = "Année Décès")]
    pub year: i64,
    #[serde(rename = "Age")]
    pub mean_age: f64,
}

/// Mean age at death for one department.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgeByDepartment {
    #[serde(rename = "Nom Actuel Département Décès")]
    pub department: String,
    #[serde(rename = "Age")]
    pub mean_age: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SexCount {
    #[serde(rename = "Sexe")]
    pub sex: String,
    #[serde(rename = "Count")]
    pub count: u64,
}

/// Number of deaths for one (year, region) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeathsByYearRegion {
    #[serde(rename = "Année Décès")]
    pub year: i64,
    #[serde(rename = "Nom Actuel Région Décès")]
    pub region: String,
    #[serde(rename = "Count")]
    pub count: u64,
}

/// Views computed from the death-records dataset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeathMetrics {
    pub age_moyen_par_an: Vec<AgeByYear>,
    pub age_moyen_par_departement: Vec<AgeByDepartment>,
    pub repartition_sexe: Vec<SexCount>,
    pub deces_par_region_annee: Vec<DeathsByYearRegion>,
    /// Every individual age, in cleaned-table order, for histograms.
    pub distribution_ages: Vec<i64>,
}

impl DeathMetrics {
    pub const VIEW_NAMES: [&'static str; 5] = [
        "age_moyen_par_an",
        "age_moyen_par_departement",
        "repartition_sexe",
        "deces_par_region_annee",
        "distribution_ages",
    ];
}

// =============================================================================
// FOOD SERVICE
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeCount {
    #[serde(rename = "Type")]
    pub kind: String,
    #[serde(rename = "Count")]
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentTypeCount {
    #[serde(rename = "Département")]
    pub department: String,
    #[serde(rename = "Type")]
    pub kind: String,
    #[serde(rename = "Count")]
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionCount {
    #[serde(rename = "Région")]
    pub region: String,
    #[serde(rename = "Count")]
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommuneCount {
    #[serde(rename = "Commune")]
    pub commune: String,
    #[serde(rename = "Count")]
    pub count: u64,
}

/// One establishment with coordinates, for map markers.
///
/// `name` is `None` (serialized as `null`) for establishments without a name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    #[serde(rename = "Nom")]
    pub name: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
}

/// Distinct establishment types present in a department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentTypes {
    #[serde(rename = "Département")]
    pub department: String,
    #[serde(rename = "Type")]
    pub kinds: Vec<String>,
}

/// Distinct establishment names for a (department, type) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentTypeNames {
    #[serde(rename = "Département")]
    pub department: String,
    #[serde(rename = "Type")]
    pub kind: String,
    #[serde(rename = "Nom")]
    pub names: Vec<String>,
}

/// Views computed from the food-service dataset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FoodServiceMetrics {
    pub restaurants_par_type: Vec<TypeCount>,
    pub restaurants_par_departement: Vec<DepartmentTypeCount>,
    pub restaurants_par_region: Vec<RegionCount>,
    pub restaurants_par_commune: Vec<CommuneCount>,
    pub geo_points: Vec<GeoPoint>,
    pub type_departement: Vec<DepartmentTypes>,
    pub nom_type: Vec<DepartmentTypeNames>,
}

impl FoodServiceMetrics {
    pub const VIEW_NAMES: [&'static str; 7] = [
        "restaurants_par_type",
        "restaurants_par_departement",
        "restaurants_par_region",
        "restaurants_par_commune",
        "geo_points",
        "type_departement",
        "nom_type",
    ];
}

// =============================================================================
// METRICS MAP
// =============================================================================

/// The complete set of views for one run.
///
/// Serializes untagged, so the JSON form is a flat object keyed by view name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricsMap {
    Deaths(DeathMetrics),
    FoodService(FoodServiceMetrics),
}

/// Something with a `Count` column, for "top N" views.
pub trait Counted {
    fn count(&self) -> u64;
}

macro_rules! impl_counted {
    ($($ty:ty),* $(,)?) => {
        $(impl Counted for $ty {
            fn count(&self) -> u64 {
                self.count
            }
        })*
    };
}

impl_counted!(
    SexCount,
    DeathsByYearRegion,
    TypeCount,
    DepartmentTypeCount,
    RegionCount,
    CommuneCount
);

impl MetricsMap {
    pub fn kind(&self) -> DatasetKind {
        match self {
            Self::Deaths(_) => DatasetKind::Deaths,
            Self::FoodService(_) => DatasetKind::FoodService,
        }
    }

    /// Fixed view names for this map's dataset kind.
    pub fn view_names(&self) -> &'static [&'static str] {
        match self {
            Self::Deaths(_) => &DeathMetrics::VIEW_NAMES,
            Self::FoodService(_) => &FoodServiceMetrics::VIEW_NAMES,
        }
    }

    /// Number of records in a named view, `None` for an unknown name.
    pub fn view_len(&self, name: &str) -> Option<usize> {
        let len = match self {
            Self::Deaths(m) => match name {
                "age_moyen_par_an" => m.age_moyen_par_an.len(),
                "age_moyen_par_departement" => m.age_moyen_par_departement.len(),
                "repartition_sexe" => m.repartition_sexe.len(),
                "deces_par_region_annee" => m.deces_par_region_annee.len(),
                "distribution_ages" => m.distribution_ages.len(),
                _ => return None,
            },
            Self::FoodService(m) => match name {
                "restaurants_par_type" => m.restaurants_par_type.len(),
                "restaurants_par_departement" => m.restaurants_par_departement.len(),
                "restaurants_par_region" => m.restaurants_par_region.len(),
                "restaurants_par_commune" => m.restaurants_par_commune.len(),
                "geo_points" => m.geo_points.len(),
                "type_departement" => m.type_departement.len(),
                "nom_type" => m.nom_type.len(),
                _ => return None,
            },
        };
        Some(len)
    }

    /// JSON object keyed by view name.
    pub fn to_json_value(&self) -> Result<serde_json::Value> {
        serde_json::to_value(self)
            .map_err(|e| DataError::unknown(format!("failed to serialize metrics: {e}")))
    }

    pub fn as_deaths(&self) -> Option<&DeathMetrics> {
        match self {
            Self::Deaths(m) => Some(m),
            Self::FoodService(_) => None,
        }
    }

    pub fn as_food_service(&self) -> Option<&FoodServiceMetrics> {
        match self {
            Self::FoodService(m) => Some(m),
            Self::Deaths(_) => None,
        }
    }
}
