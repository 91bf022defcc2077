use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UserCommand {
    QuitApplication,
    ToggleFullScreen,
    ToggleTheme,

    FocusSearch,
    ClearSearch,
    Refresh,

    NextPage,
    PrevPage,
    FirstPage,
    LastPage,
}

impl UserCommand {
    /// Page a navigation command leads to from `current` of `total` pages.
    /// `None` for non-navigation commands and for moves past either end.
    pub fn target_page(self, current: u32, total: u32) -> Option<u32> {
        let total = total.max(1);
        let target = match self {
            UserCommand::NextPage => current.saturating_add(1).min(total),
            UserCommand::PrevPage => current.saturating_sub(1).max(1),
            UserCommand::FirstPage => 1,
            UserCommand::LastPage => total,
            _ => return None,
        };
        (target != current).then_some(target)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(UserCommand::NextPage, 1, 3, Some(2))]
    #[case(UserCommand::NextPage, 3, 3, None)]
    #[case(UserCommand::PrevPage, 2, 3, Some(1))]
    #[case(UserCommand::PrevPage, 1, 3, None)]
    #[case(UserCommand::FirstPage, 5, 9, Some(1))]
    #[case(UserCommand::FirstPage, 1, 9, None)]
    #[case(UserCommand::LastPage, 5, 9, Some(9))]
    #[case(UserCommand::LastPage, 1, 0, None)]
    #[case(UserCommand::Refresh, 1, 9, None)]
    fn test_target_page(
        #[case] command: UserCommand,
        #[case] current: u32,
        #[case] total: u32,
        #[case] expected: Option<u32>,
    ) {
        assert_eq!(command.target_page(current, total), expected);
    }
}
