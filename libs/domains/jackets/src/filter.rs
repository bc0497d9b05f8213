//! Translation of listing parameters into a store query.

use database::mongodb::bson::{Document, doc};

use crate::models::JacketFilter;

/// Build the conjunctive MongoDB filter for `filter`; absent parameters and an empty
/// `activity` add no clause.
pub fn build_filter(filter: &JacketFilter) -> Document {
    let mut doc = doc! {};

    if let Some(gender) = filter.gender {
        doc.insert("gender", gender.to_string());
    }

    if let Some(activity) = filter.activity.as_deref().filter(|a| !a.is_empty()) {
        doc.insert("activity", doc! { "$in": [activity] });
    }

    if let Some(min_temp) = filter.min_temp {
        doc.insert("temperature_min_c", doc! { "$lte": min_temp });
    }

    if let Some(max_temp) = filter.max_temp {
        doc.insert("temperature_max_c", doc! { "$gte": max_temp });
    }

    doc
}

/// Exact slug match
pub fn slug_filter(slug: &str) -> Document {
    doc! { "slug": slug }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Gender;

    #[test]
    fn test_empty_filter() {
        assert_eq!(build_filter(&JacketFilter::default()), doc! {});
    }

    #[test]
    fn test_all_clauses() {
        let filter = JacketFilter {
            gender: Some(Gender::Women),
            activity: Some("city".to_string()),
            min_temp: Some(-10),
            max_temp: Some(5),
        };

        assert_eq!(
            build_filter(&filter),
            doc! {
                "gender": "women",
                "activity": { "$in": ["city"] },
                "temperature_min_c": { "$lte": -10 },
                "temperature_max_c": { "$gte": 5 },
            }
        );
    }

    #[test]
    fn test_zero_temperatures_are_kept() {
        let filter = JacketFilter {
            min_temp: Some(0),
            max_temp: Some(0),
            ..Default::default()
        };

        let doc = build_filter(&filter);
        assert_eq!(doc.get_document("temperature_min_c").unwrap(), &doc! { "$lte": 0 });
        assert_eq!(doc.get_document("temperature_max_c").unwrap(), &doc! { "$gte": 0 });
        assert!(!doc.contains_key("gender"));
    }

    #[test]
    fn test_empty_activity_adds_no_clause() {
        let filter = JacketFilter {
            activity: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(build_filter(&filter), doc! {});
    }

    #[test]
    fn test_slug_filter() {
        assert_eq!(slug_filter("arctic-x"), doc! { "slug": "arctic-x" });
    }
}
