//! Views over cleaned death records.

use polars::prelude::DataFrame;

use frdata_common::{i64_column, require_columns, string_column};
use frdata_model::{
    AgeByDepartment, AgeByYear, DeathMetrics, DeathsByYearRegion, Result, SexCount, columns,
};

use crate::group::{mean, sort_by_count_desc, tally};

const GROUPING_COLUMNS: [&str; 5] = [
    columns::AGE,
    columns::DEATH_YEAR,
    columns::DEATH_DEPARTMENT,
    columns::DEATH_REGION,
    columns::SEX,
];

pub(crate) fn death_metrics(data: &DataFrame) -> Result<DeathMetrics> {
    require_columns(data, &GROUPING_COLUMNS)?;

    let ages = i64_column(data, columns::AGE)?;
    let years = i64_column(data, columns::DEATH_YEAR)?;
    let departments = string_column(data, columns::DEATH_DEPARTMENT)?;
    let regions = string_column(data, columns::DEATH_REGION)?;
    let sexes = string_column(data, columns::SEX)?;

    let age_moyen_par_an = mean(years.iter().copied().zip(ages.iter().copied()))
        .into_iter()
        .map(|(year, mean_age)| AgeByYear { year, mean_age })
        .collect();

    let age_moyen_par_departement = mean(departments.iter().cloned().zip(ages.iter().copied()))
        .into_iter()
        .map(|(department, mean_age)| AgeByDepartment {
            department,
            mean_age,
        })
        .collect();

    let mut repartition_sexe: Vec<SexCount> = tally(sexes.iter().cloned().map(|sex| (sex, true)))
        .into_iter()
        .map(|(sex, count)| SexCount { sex, count })
        .collect();
    sort_by_count_desc(&mut repartition_sexe, |r| r.count, |r| r.sex.as_str());

    let year_region = years.iter().zip(&regions).map(|(year, region)| match (year, region) {
        (Some(year), Some(region)) => (Some((*year, region.clone())), true),
        _ => (None, false),
    });
    let deces_par_region_annee = tally(year_region)
        .into_iter()
        .map(|((year, region), count)| DeathsByYearRegion {
            year,
            region,
            count,
        })
        .collect();

    let distribution_ages = ages.iter().flatten().copied().collect();

    Ok(DeathMetrics {
        age_moyen_par_an,
        age_moyen_par_departement,
        repartition_sexe,
        deces_par_region_annee,
        distribution_ages,
    })
}
