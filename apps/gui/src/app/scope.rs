use serde::Deserialize;

/// Where keyboard focus currently is; decides which bindings apply.
#[derive(Hash, Eq, Default, PartialEq, Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Scope {
    #[default]
    Global,
    /// The catalog grid, i.e. nothing is being typed into
    Main,
    SearchBar,
}

impl Scope {
    /// Scopes from most specific to `Global`, the order bindings are tried in.
    /// Typing into the search bar must not page through the catalog, so
    /// `SearchBar` skips `Main`.
    pub fn hierarchy(&self) -> Vec<Scope> {
        match self {
            Scope::SearchBar => vec![Scope::SearchBar, Scope::Global],
            Scope::Main => vec![Scope::Main, Scope::Global],
            Scope::Global => vec![Scope::Global],
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Scope::Global, vec![Scope::Global])]
    #[case(Scope::Main, vec![Scope::Main, Scope::Global])]
    #[case(Scope::SearchBar, vec![Scope::SearchBar, Scope::Global])]
    fn test_hierarchy(#[case] scope: Scope, #[case] expected: Vec<Scope>) {
        assert_eq!(scope.hierarchy(), expected);
    }
}
