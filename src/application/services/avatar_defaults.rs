use crate::domain::entities::{AvatarDefault, AvatarOption};

/// Adds the Avataurus providers to the host's list of default avatars.
///
/// Existing entries keep their position; an entry already using one of our
/// identifiers gets its label refreshed instead of being duplicated.
pub fn register_default_avatars(defaults: &mut Vec<AvatarOption>) {
    for provider in AvatarDefault::ALL {
        if let Some(existing) = defaults.iter_mut().find(|o| o.id == provider.id()) {
            existing.label = provider.label().to_string();
        } else {
            defaults.push(AvatarOption::new(provider.id(), provider.label()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appends_after_host_entries() {
        let mut defaults = vec![
            AvatarOption::new("mystery", "Mystery Person"),
            AvatarOption::new("identicon", "Identicon"),
        ];

        register_default_avatars(&mut defaults);

        let ids: Vec<&str> = defaults.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["mystery", "identicon", "avataurus", "avataurus_initial"]
        );
        assert_eq!(defaults[2].label, "Avataurus (Face)");
        assert_eq!(defaults[3].label, "Avataurus (Initial)");
    }

    #[test]
    fn test_registering_twice_does_not_duplicate() {
        let mut defaults = vec![AvatarOption::new("avataurus", "stale")];

        register_default_avatars(&mut defaults);
        register_default_avatars(&mut defaults);

        assert_eq!(defaults.len(), 2);
        assert_eq!(defaults[0].label, "Avataurus (Face)");
    }
}
