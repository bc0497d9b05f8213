//! Launch catalog inserted into an empty store at startup.

use crate::models::{Activity, Gender, Jacket};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

pub fn sample_jackets() -> Vec<Jacket> {
    vec![
        Jacket {
            name: "Glacier Pro 3.0".to_string(),
            slug: "glacier-pro-3".to_string(),
            gender: Gender::Unisex,
            activity: vec![
                Activity::Travel,
                Activity::City,
                Activity::Hike,
                Activity::Commute,
            ],
            temperature_min_c: -30,
            temperature_max_c: 5,
            battery_life_hours: 10.0,
            warmth_level: 9,
            colors: strings(&["glacier", "onyx", "aurora"]),
            sizes: strings(&["XS", "S", "M", "L", "XL", "XXL"]),
            price: 349.0,
            images: strings(&[
                "/images/jackets/glacier-pro/1.jpg",
                "/images/jackets/glacier-pro/2.jpg",
                "/images/jackets/glacier-pro/3.jpg",
            ]),
            features: strings(&["waterproof", "windproof", "rechargeable", "lightweight"]),
        },
        Jacket {
            name: "Aurora Lite".to_string(),
            slug: "aurora-lite".to_string(),
            gender: Gender::Women,
            activity: vec![Activity::City, Activity::Travel, Activity::Commute],
            temperature_min_c: -10,
            temperature_max_c: 10,
            battery_life_hours: 12.0,
            warmth_level: 7,
            colors: strings(&["frost", "rose-ice", "onyx"]),
            sizes: strings(&["XS", "S", "M", "L", "XL"]),
            price: 289.0,
            images: strings(&[
                "/images/jackets/aurora-lite/1.jpg",
                "/images/jackets/aurora-lite/2.jpg",
            ]),
            features: strings(&["water-resistant", "windproof", "featherweight"]),
        },
        Jacket {
            name: "Arctic X".to_string(),
            slug: "arctic-x".to_string(),
            gender: Gender::Men,
            activity: vec![Activity::Hike, Activity::Bike, Activity::Snow],
            temperature_min_c: -40,
            temperature_max_c: 0,
            battery_life_hours: 8.0,
            warmth_level: 10,
            colors: strings(&["onyx", "glacier"]),
            sizes: strings(&["S", "M", "L", "XL", "XXL"]),
            price: 399.0,
            images: strings(&["/images/jackets/arctic-x/1.jpg"]),
            features: strings(&["waterproof", "windproof", "impact-resistant"]),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use validator::Validate;

    #[test]
    fn test_samples_are_valid_and_unique() {
        let samples = sample_jackets();
        assert_eq!(samples.len(), 3);

        let slugs: HashSet<_> = samples.iter().map(|j| j.slug.as_str()).collect();
        assert_eq!(slugs.len(), samples.len());

        for jacket in &samples {
            assert!(jacket.validate().is_ok(), "{} is invalid", jacket.slug);
            assert!(jacket.temperature_min_c <= jacket.temperature_max_c);
        }
    }
}
