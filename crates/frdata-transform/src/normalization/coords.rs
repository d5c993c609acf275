//! OSM point parsing.

/// Parses an OSM `"lat,lon"` point, splitting on the first comma.
///
/// Returns `None` when either half is not a finite number or falls outside
/// the valid latitude/longitude range.
///
/// # Examples
///
/// ```
/// use frdata_transform::normalization::parse_point;
///
/// assert_eq!(parse_point("48.85,2.35"), Some((48.85, 2.35)));
/// assert_eq!(parse_point("not a point"), None);
/// ```
pub fn parse_point(value: &str) -> Option<(f64, f64)> {
    let (lat, lon) = value.split_once(',')?;
    let latitude = parse_coordinate(lat)?;
    let longitude = parse_coordinate(lon)?;
    if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
        return None;
    }
    Some((latitude, longitude))
}

fn parse_coordinate(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_first_comma_only() {
        assert_eq!(parse_point(" 43.3 , 5.37 "), Some((43.3, 5.37)));
        assert_eq!(parse_point("43.3,5.37,12"), None);
    }

    #[test]
    fn rejects_incomplete_or_out_of_range_points() {
        assert_eq!(parse_point(""), None);
        assert_eq!(parse_point("48.85"), None);
        assert_eq!(parse_point("48.85,"), None);
        assert_eq!(parse_point("95.0,2.35"), None);
        assert_eq!(parse_point("48.85,NaN"), None);
    }
}
