//! Named option values shared by renderer and builder configuration.
//!
//! Each option is a small closed set of names. Configuration files and
//! `key=value` overrides may carry anything; names that are not recognized
//! resolve to the option's default instead of failing.

/// A closed set of named values with a documented default.
pub trait StyleOption: Copy + Default + PartialEq + 'static {
    /// Recognized names and the value each selects.
    const VALUES: &'static [(&'static str, Self)];

    /// Resolve a name (case-insensitive), falling back to the default.
    fn parse_or_default(value: &str) -> Self {
        let value = value.trim();
        match Self::VALUES
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(value))
        {
            Some(&(_, option)) => option,
            None => {
                log::debug!(
                    "Unrecognized option value {:?}, using {:?}",
                    value,
                    Self::default().name()
                );
                Self::default()
            }
        }
    }

    /// Canonical name of this value.
    fn name(self) -> &'static str {
        Self::VALUES
            .iter()
            .find(|(_, option)| *option == self)
            .map(|(name, _)| *name)
            .unwrap_or("")
    }
}
