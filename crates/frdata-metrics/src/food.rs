//! Views over cleaned food-service establishments.

use polars::prelude::DataFrame;

use frdata_common::{f64_column, require_columns, string_column};
use frdata_model::{
    CommuneCount, DepartmentTypeCount, DepartmentTypeNames, DepartmentTypes, FoodServiceMetrics,
    GeoPoint, RegionCount, Result, TypeCount, columns,
};

use crate::group::{distinct, sort_by_count_desc, tally};

const GROUPING_COLUMNS: [&str; 7] = [
    columns::NAME,
    columns::TYPE,
    columns::COMMUNE,
    columns::REGION,
    columns::DEPARTMENT,
    columns::LATITUDE,
    columns::LONGITUDE,
];

pub(crate) fn food_service_metrics(data: &DataFrame) -> Result<FoodServiceMetrics> {
    require_columns(data, &GROUPING_COLUMNS)?;

    let names = string_column(data, columns::NAME)?;
    let kinds = string_column(data, columns::TYPE)?;
    let communes = string_column(data, columns::COMMUNE)?;
    let regions = string_column(data, columns::REGION)?;
    let departments = string_column(data, columns::DEPARTMENT)?;
    let latitudes = f64_column(data, columns::LATITUDE)?;
    let longitudes = f64_column(data, columns::LONGITUDE)?;

    let has_name: Vec<bool> = names.iter().map(Option::is_some).collect();
    let department_kind: Vec<Option<(String, String)>> = departments
        .iter()
        .zip(&kinds)
        .map(|(department, kind)| Some((department.clone()?, kind.clone()?)))
        .collect();

    let mut restaurants_par_type: Vec<TypeCount> =
        tally(kinds.iter().cloned().map(|kind| (kind, true)))
            .into_iter()
            .map(|(kind, count)| TypeCount { kind, count })
            .collect();
    sort_by_count_desc(&mut restaurants_par_type, |r| r.count, |r| r.kind.as_str());

    let restaurants_par_departement = tally(
        department_kind.iter().cloned().zip(has_name.iter().copied()),
    )
    .into_iter()
    .map(|((department, kind), count)| DepartmentTypeCount {
        department,
        kind,
        count,
    })
    .collect();

    let restaurants_par_region = tally(regions.iter().cloned().zip(has_name.iter().copied()))
        .into_iter()
        .map(|(region, count)| RegionCount { region, count })
        .collect();

    let restaurants_par_commune = tally(communes.iter().cloned().zip(has_name.iter().copied()))
        .into_iter()
        .map(|(commune, count)| CommuneCount { commune, count })
        .collect();

    let geo_points = names
        .iter()
        .zip(latitudes.iter().zip(&longitudes))
        .filter_map(|(name, (latitude, longitude))| {
            Some(GeoPoint {
                name: name.clone(),
                latitude: (*latitude)?,
                longitude: (*longitude)?,
            })
        })
        .collect();

    let type_departement = distinct(departments.iter().cloned().zip(kinds.iter().cloned()))
        .into_iter()
        .map(|(department, kinds)| DepartmentTypes { department, kinds })
        .collect();

    let nom_type = distinct(department_kind.into_iter().zip(names))
        .into_iter()
        .map(|((department, kind), names)| DepartmentTypeNames {
            department,
            kind,
            names,
        })
        .collect();

    Ok(FoodServiceMetrics {
        restaurants_par_type,
        restaurants_par_departement,
        restaurants_par_region,
        restaurants_par_commune,
        geo_points,
        type_departement,
        nom_type,
    })
}
