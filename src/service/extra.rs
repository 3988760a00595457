use std::collections::HashMap;

const VALID_FIELD_NAMES: &[&str] = &[
    "favorite color",
    "favorite band",
    "hours spent asleep in elevator",
];

/// Extra attribute names that are safe to show to end users.
pub fn valid_field_names() -> &'static [&'static str] {
    VALID_FIELD_NAMES
}

/// Copy of `extra` restricted to `valid_field_names`; anything else is dropped.
pub fn filter_extra(extra: &HashMap<String, String>) -> HashMap<String, String> {
    extra
        .iter()
        .filter(|(name, _)| VALID_FIELD_NAMES.contains(&name.as_str()))
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_drops_unlisted_keys() {
        let extra = HashMap::from([
            ("favorite color".to_string(), "blue".to_string()),
            ("secret".to_string(), "x".to_string()),
        ]);
        let filtered = filter_extra(&extra);
        assert_eq!(
            filtered,
            HashMap::from([("favorite color".to_string(), "blue".to_string())])
        );
    }

    #[test]
    fn filter_keeps_every_listed_key() {
        let extra: HashMap<String, String> = valid_field_names()
            .iter()
            .map(|n| (n.to_string(), "v".to_string()))
            .collect();
        assert_eq!(filter_extra(&extra), extra);
    }

    #[test]
    fn filter_is_case_sensitive() {
        let extra = HashMap::from([("Favorite Color".to_string(), "red".to_string())]);
        assert!(filter_extra(&extra).is_empty());
    }
}
