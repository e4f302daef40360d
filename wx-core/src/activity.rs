//! Catalog of activities offered on the first wizard step.

/// One selectable activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Activity {
    /// Wire value sent as the `activity` query parameter
    pub slug: &'static str,
    /// Button label
    pub label: &'static str,
    /// Font Awesome icon class
    pub icon: &'static str,
}

pub static ACTIVITIES: [Activity; 6] = [
    Activity { slug: "hiking", label: "Hiking", icon: "fas fa-hiking" },
    Activity { slug: "picnic", label: "Picnic", icon: "fas fa-utensils" },
    Activity { slug: "beach", label: "Beach Day", icon: "fas fa-umbrella-beach" },
    Activity { slug: "skiing", label: "Skiing", icon: "fas fa-skiing" },
    Activity { slug: "fishing", label: "Fishing", icon: "fas fa-fish" },
    Activity { slug: "stargazing", label: "Stargazing", icon: "fas fa-star" },
];

/// Look up a catalog entry by its slug.
pub fn find(slug: &str) -> Option<&'static Activity> {
    ACTIVITIES.iter().find(|a| a.slug == slug)
}

/// Uppercase the first character and keep the rest as-is ("hiking" -> "Hiking").
pub fn capitalize_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize_first() {
        assert_eq!(capitalize_first("hiking"), "Hiking");
        assert_eq!(capitalize_first("beach day"), "Beach day");
        assert_eq!(capitalize_first("Skiing"), "Skiing");
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn test_find() {
        assert_eq!(find("fishing").map(|a| a.label), Some("Fishing"));
        assert!(find("surfing").is_none());
    }

    #[test]
    fn test_slugs_are_unique() {
        for (i, a) in ACTIVITIES.iter().enumerate() {
            assert!(ACTIVITIES[i + 1..].iter().all(|b| b.slug != a.slug));
        }
    }
}
