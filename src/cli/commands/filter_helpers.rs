use crate::core::models::profile::Profile;

/// Keep the settings whose key or value contains `term`,
/// case-insensitively. An empty term keeps everything.
///
/// Display-only narrowing for `show` and `diff`; the merge commands
/// never filter, so a merge always sees the full profiles.
pub fn filter_profile(profile: &Profile, term: &str) -> Profile {
    if term.is_empty() {
        return profile.clone();
    }

    let needle = term.to_lowercase();
    let mut filtered = Profile::new();
    for setting in profile.iter() {
        if setting.key.to_lowercase().contains(&needle)
            || setting.value.to_lowercase().contains(&needle)
        {
            filtered.insert(&setting.key, &setting.value);
        }
    }
    filtered
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_profile(pairs: &[(&str, &str)]) -> Profile {
        let mut profile = Profile::new();
        for (k, v) in pairs {
            profile.insert(*k, *v);
        }
        profile
    }

    #[test]
    fn matches_keys_case_insensitively() {
        let profile = make_profile(&[("GroundItems.highlight", "yes"), ("banking.sort", "no")]);

        let filtered = filter_profile(&profile, "grounditems");
        assert_eq!(filtered.len(), 1);
        assert!(filtered.contains_key("GroundItems.highlight"));
    }

    #[test]
    fn matches_values_too() {
        let profile = make_profile(&[("a.color", "DarkRed"), ("b.color", "blue")]);

        let filtered = filter_profile(&profile, "darkred");
        assert_eq!(filtered.len(), 1);
        assert!(filtered.contains_key("a.color"));
    }

    #[test]
    fn empty_term_keeps_everything() {
        let profile = make_profile(&[("a", "1"), ("b", "2")]);
        assert_eq!(filter_profile(&profile, ""), profile);
    }

    #[test]
    fn no_match_yields_empty_profile() {
        let profile = make_profile(&[("a", "1")]);
        assert!(filter_profile(&profile, "zzz").is_empty());
    }
}
