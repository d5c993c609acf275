//! Read-only queries over a metrics snapshot.
//!
//! These are the lookups an interactive front end needs (department lists,
//! drill-down options, ranked views). Each takes the snapshot explicitly and
//! returns owned or borrowed data without touching any shared state.

use std::collections::BTreeSet;

use reqwest::Url;

use frdata_model::{Counted, DataError, DepartmentTypeCount, FoodServiceMetrics, Result};

const SEARCH_ENDPOINT: &str = "https://www.google.com/search";

/// Sorted distinct departments that have at least one establishment.
pub fn departments(metrics: &FoodServiceMetrics) -> Vec<&str> {
    metrics
        .restaurants_par_departement
        .iter()
        .map(|r| r.department.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Per-type counts for one department.
pub fn department_breakdown<'a>(
    metrics: &'a FoodServiceMetrics,
    department: &str,
) -> Vec<&'a DepartmentTypeCount> {
    metrics
        .restaurants_par_departement
        .iter()
        .filter(|r| r.department == department)
        .collect()
}

/// Sorted distinct establishment types present in `department`.
///
/// Empty when the department is unknown.
pub fn types_in_department<'a>(metrics: &'a FoodServiceMetrics, department: &str) -> Vec<&'a str> {
    metrics
        .type_departement
        .iter()
        .filter(|r| r.department == department)
        .flat_map(|r| r.kinds.iter().map(String::as_str))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Sorted distinct, non-empty establishment names for a (department, type) pair.
pub fn names_for<'a>(
    metrics: &'a FoodServiceMetrics,
    department: &str,
    kind: &str,
) -> Vec<&'a str> {
    metrics
        .nom_type
        .iter()
        .filter(|r| r.department == department && r.kind == kind)
        .flat_map(|r| r.names.iter().map(String::as_str))
        .filter(|name| !name.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// The `n` records with the largest count, largest first.
///
/// Ties keep their relative order from `records`.
///
/// # Examples
///
/// ```
/// use frdata_metrics::top_by_count;
/// use frdata_model::CommuneCount;
///
/// let communes = vec![
///     CommuneCount { commune: "Lyon".into(), count: 2 },
///     CommuneCount { commune: "Nice".into(), count: 1 },
///     CommuneCount { commune: "Paris".into(), count: 5 },
/// ];
/// let top = top_by_count(&communes, 2);
/// assert_eq!(top[0].commune, "Paris");
/// assert_eq!(top[1].commune, "Lyon");
/// ```
pub fn top_by_count<T: Counted + Clone>(records: &[T], n: usize) -> Vec<T> {
    let mut ranked = records.to_vec();
    ranked.sort_by_key(|r| std::cmp::Reverse(r.count()));
    ranked.truncate(n);
    ranked
}

/// Web search link for one establishment.
pub fn search_url(name: &str, kind: &str, department: &str) -> Result<String> {
    let query = [name, kind, department]
        .iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    let url = Url::parse_with_params(SEARCH_ENDPOINT, &[("q", query)])
        .map_err(|e| DataError::unknown(format!("invalid search url: {e}")))?;
    Ok(url.to_string())
}
