//! Row-order independence of the aggregate views.

use frdata_metrics::aggregate;
use frdata_model::{DatasetKind, MetricsMap, RawTable};
use frdata_transform::clean;
use proptest::prelude::*;

const REGIONS: [&str; 3] = ["Bretagne", "Normandie", "Occitanie"];
const DEPARTMENTS: [&str; 3] = ["Finistère", "Manche", "Hérault"];
const SEXES: [&str; 2] = ["F", "M"];
const KINDS: [&str; 3] = ["Bar", "Café", "Pizzeria"];
const NAMES: [&str; 4] = ["", "Atlas", "Le Zinc", "Mistral"];
const COMMUNES: [&str; 3] = ["Brest", "Caen", "Sète"];

type DeathRow = (usize, usize, usize, i32, i32);
type FoodRow = (usize, usize, usize, usize);

fn death_table(rows: &[DeathRow]) -> RawTable {
    let mut table = RawTable::new(
        [
            "Date Décès",
            "Date Naissance",
            "Nom Actuel Région Décès",
            "Nom Actuel Département Décès",
            "Sexe",
        ]
        .iter()
        .map(|h| (*h).to_string())
        .collect(),
    );
    for &(region, department, sex, death_year, age) in rows {
        table.push_row(vec![
            format!("{death_year}-06-15"),
            format!("{}-03-01", death_year - age),
            REGIONS[region].to_string(),
            DEPARTMENTS[department].to_string(),
            SEXES[sex].to_string(),
        ]);
    }
    table
}

fn deaths(table: &RawTable) -> MetricsMap {
    aggregate(&clean(table, DatasetKind::Deaths).unwrap()).unwrap()
}

fn food_table(rows: &[FoodRow]) -> RawTable {
    let mut table = RawTable::new(
        ["Nom", "Type", "Commune", "Région", "Département", "OSM Point"]
            .iter()
            .map(|h| (*h).to_string())
            .collect(),
    );
    for &(department, kind, name, commune) in rows {
        table.push_row(vec![
            NAMES[name].to_string(),
            KINDS[kind].to_string(),
            COMMUNES[commune].to_string(),
            REGIONS[department].to_string(),
            DEPARTMENTS[department].to_string(),
            "48.39,-4.48".to_string(),
        ]);
    }
    table
}

fn food_service(table: &RawTable) -> MetricsMap {
    aggregate(&clean(table, DatasetKind::FoodService).unwrap()).unwrap()
}

fn with_shuffle<T: Clone + std::fmt::Debug>(
    rows: impl Strategy<Value = Vec<T>>,
) -> impl Strategy<Value = (Vec<T>, Vec<T>)> {
    rows.prop_flat_map(|rows| (Just(rows.clone()), Just(rows).prop_shuffle()))
}

fn rows_and_shuffle() -> impl Strategy<Value = (Vec<DeathRow>, Vec<DeathRow>)> {
    with_shuffle(prop::collection::vec(
        (0usize..3, 0usize..3, 0usize..2, 2015i32..2023, 0i32..100),
        1..40,
    ))
}

fn food_rows_and_shuffle() -> impl Strategy<Value = (Vec<FoodRow>, Vec<FoodRow>)> {
    with_shuffle(prop::collection::vec(
        (0usize..3, 0usize..3, 0usize..4, 0usize..3),
        1..40,
    ))
}

proptest! {
    #[test]
    fn death_views_do_not_depend_on_row_order((rows, shuffled) in rows_and_shuffle()) {
        let original = deaths(&death_table(&rows));
        let permuted = deaths(&death_table(&shuffled));
        let (a, b) = (original.as_deaths().unwrap(), permuted.as_deaths().unwrap());

        prop_assert_eq!(&a.age_moyen_par_an, &b.age_moyen_par_an);
        prop_assert_eq!(&a.age_moyen_par_departement, &b.age_moyen_par_departement);
        prop_assert_eq!(&a.repartition_sexe, &b.repartition_sexe);
        prop_assert_eq!(&a.deces_par_region_annee, &b.deces_par_region_annee);

        let mut ages_a = a.distribution_ages.clone();
        let mut ages_b = b.distribution_ages.clone();
        ages_a.sort_unstable();
        ages_b.sort_unstable();
        prop_assert_eq!(ages_a, ages_b);
    }

    #[test]
    fn food_service_views_do_not_depend_on_row_order(
        (rows, shuffled) in food_rows_and_shuffle()
    ) {
        let original = food_service(&food_table(&rows));
        let permuted = food_service(&food_table(&shuffled));
        let (a, b) = (
            original.as_food_service().unwrap(),
            permuted.as_food_service().unwrap(),
        );

        prop_assert_eq!(&a.restaurants_par_type, &b.restaurants_par_type);
        prop_assert_eq!(&a.restaurants_par_departement, &b.restaurants_par_departement);
        prop_assert_eq!(&a.restaurants_par_region, &b.restaurants_par_region);
        prop_assert_eq!(&a.restaurants_par_commune, &b.restaurants_par_commune);
        prop_assert_eq!(&a.type_departement, &b.type_departement);
        prop_assert_eq!(&a.nom_type, &b.nom_type);

        let mut names_a: Vec<_> = a.geo_points.iter().map(|p| p.name.clone()).collect();
        let mut names_b: Vec<_> = b.geo_points.iter().map(|p| p.name.clone()).collect();
        names_a.sort_unstable();
        names_b.sort_unstable();
        prop_assert_eq!(names_a, names_b);
    }
}
