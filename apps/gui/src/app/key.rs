use crate::app::Scope;
use crate::app::UserCommand;
use egui::{Key, KeyboardShortcut, Modifiers};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::collections::HashMap;
use std::str::FromStr;

/// A key chord written as `Mod-Mod-Key`, e.g. `Ctrl-Shift-F` or `F5`.
#[derive(PartialEq, Eq, Hash, Debug, Clone, derive_more::From)]
pub struct KeyShortcut(pub KeyboardShortcut);

impl std::ops::Deref for KeyShortcut {
    type Target = KeyboardShortcut;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'de> Deserialize<'de> for KeyShortcut {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<KeyShortcut>().map_err(de::Error::custom)
    }
}

impl Serialize for KeyShortcut {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.format_string())
    }
}

fn set_modifier(modifiers: &mut Modifiers, name: &str) -> Result<(), String> {
    let flag = match name {
        "C" | "Ctrl" | "Control" => &mut modifiers.ctrl,
        "S" | "Shift" => &mut modifiers.shift,
        "A" | "Alt" | "Opt" | "Option" => &mut modifiers.alt,
        "M" | "Meta" | "Cmd" | "Command" | "Super" | "Win" => &mut modifiers.command,
        _ => return Err(format!("Unknown modifier: {name}")),
    };
    if *flag {
        return Err(format!("Duplicate modifier: {name}"));
    }
    *flag = true;
    Ok(())
}

impl FromStr for KeyShortcut {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // `-` is the separator, so the minus key is spelled `Minus`
        let parts: Vec<&str> = s.split('-').collect();
        let Some((key_name, modifier_names)) = parts.split_last() else {
            return Err("Empty key string".to_string());
        };

        let mut modifiers = Modifiers::NONE;
        for name in modifier_names {
            set_modifier(&mut modifiers, name)?;
        }

        Key::from_name(key_name)
            .map(|key| Self(KeyboardShortcut::new(modifiers, key)))
            .ok_or_else(|| "No key specified".to_string())
    }
}

impl KeyShortcut {
    pub fn format_string(&self) -> String {
        let modifiers = self.0.modifiers;
        let mut s = String::new();
        for (held, name) in [
            (modifiers.ctrl, "Ctrl-"),
            (modifiers.alt, "Alt-"),
            (modifiers.shift, "Shift-"),
            (modifiers.command, "Cmd-"),
        ] {
            if held {
                s.push_str(name);
            }
        }
        s.push_str(self.0.logical_key.name());
        s
    }
}

pub type KeyConfig = HashMap<Scope, HashMap<KeyShortcut, UserCommand>>;

/// Bindings in `delta` override those in `base`; anything else in `base` stays.
pub fn merge_key_config(base: &mut KeyConfig, delta: KeyConfig) {
    for (scope, shortcuts) in delta {
        base.entry(scope).or_default().extend(shortcuts);
    }
}

#[macro_export]
macro_rules! key_config {
    // Pattern: Scope => { "Key" => Command, ... }, ...
    (
        $(
            $scope:expr => {
                $( $key_str:literal => $cmd:expr ),* $(,)?
            }
        ),* $(,)?
    ) => {{
        let mut config = KeyConfig::new();

        $(
            let mut scope_map = std::collections::HashMap::new();
            $(
                let key: KeyShortcut = $key_str
                    .parse()
                    .expect(concat!("Invalid key binding string: ", $key_str));

                if scope_map.insert(key, $cmd).is_some() {
                    panic!("Duplicate key binding defined for scope: {:?}", $scope);
                }
            )*
            config.insert($scope, scope_map);
        )*

        config
    }};
}

pub fn default_key_config() -> KeyConfig {
    key_config! {
        Scope::Global => {
            "Ctrl-Q" => UserCommand::QuitApplication,
            "F11" => UserCommand::ToggleFullScreen,
            "Ctrl-T" => UserCommand::ToggleTheme,
            "Ctrl-F" => UserCommand::FocusSearch,
            "F5" => UserCommand::Refresh,
        },
        Scope::Main => {
            "Right" => UserCommand::NextPage,
            "Left" => UserCommand::PrevPage,
            "Ctrl-N" => UserCommand::NextPage,
            "Ctrl-P" => UserCommand::PrevPage,
            "Home" => UserCommand::FirstPage,
            "End" => UserCommand::LastPage,
        },
        Scope::SearchBar => {
            "Esc" => UserCommand::ClearSearch,
        }
    }
}

pub struct KeyHandler(KeyConfig);

impl KeyHandler {
    pub fn new(key_config: KeyConfig) -> Self {
        Self(key_config)
    }

    /// Consumes every bound shortcut pressed this frame, walking the scope
    /// hierarchy of `current_scope`.
    pub fn handle(&self, ctx: &egui::Context, current_scope: Scope) -> Vec<(Scope, UserCommand)> {
        let mut matched = Vec::new();

        for scope in current_scope.hierarchy() {
            let Some(bindings) = self.0.get(&scope) else {
                continue;
            };
            for (key_shortcut, user_command) in bindings {
                if ctx.input_mut(|i| i.consume_shortcut(key_shortcut)) {
                    matched.push((scope, *user_command));
                }
            }
        }

        matched
    }
}
