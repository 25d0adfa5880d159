use crossterm::event::{KeyCode, KeyModifiers};
use dirchooser::config::Config;
use dirchooser::keymap::{Action, KeyBinding, Keymap, KeymapPreset};
use tempfile::TempDir;

#[test]
fn test_keymap_override_in_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");

    let mut config = Config::default();
    config.keymap.preset = KeymapPreset::Vim;
    // 'x' quits instead of 'q', 'w' moves up instead of 'k'
    config
        .keymap
        .overrides
        .push(KeyBinding::new("x", Action::Quit));
    config
        .keymap
        .overrides
        .push(KeyBinding::new("w", Action::MoveUp));

    config.save(&config_path).unwrap();
    let loaded = Config::load_or_create(&config_path).unwrap();

    assert_eq!(loaded.keymap.preset, KeymapPreset::Vim);
    assert_eq!(loaded.keymap.overrides.len(), 2);

    let keymap = &loaded.keymap;
    assert_eq!(
        keymap.get_action(KeyCode::Char('x'), KeyModifiers::NONE),
        Some(Action::Quit)
    );
    assert_eq!(
        keymap.get_action(KeyCode::Char('w'), KeyModifiers::NONE),
        Some(Action::MoveUp)
    );

    // Preset bindings for overridden actions are shadowed
    assert_eq!(
        keymap.get_action(KeyCode::Char('q'), KeyModifiers::NONE),
        None
    );
    assert_eq!(
        keymap.get_action(KeyCode::Char('k'), KeyModifiers::NONE),
        None
    );

    // Untouched actions keep their preset keys
    assert_eq!(
        keymap.get_action(KeyCode::Char('j'), KeyModifiers::NONE),
        Some(Action::MoveDown)
    );
    assert_eq!(
        keymap.get_action(KeyCode::Char('h'), KeyModifiers::NONE),
        Some(Action::NavigateUp)
    );
}

#[test]
fn test_keymap_override_with_modifiers() {
    let mut keymap = Keymap::new(KeymapPreset::Standard);
    keymap
        .overrides
        .push(KeyBinding::new("ctrl+o", Action::Select));

    assert_eq!(
        keymap.get_action(KeyCode::Char('o'), KeyModifiers::CONTROL),
        Some(Action::Select)
    );
    assert_ne!(
        keymap.get_action(KeyCode::Char('o'), KeyModifiers::NONE),
        Some(Action::Select)
    );
    // 's' was the standard Select key
    assert_eq!(
        keymap.get_action(KeyCode::Char('s'), KeyModifiers::NONE),
        None
    );
}

#[test]
fn test_display_reflects_overrides() {
    let keymap = Keymap {
        preset: KeymapPreset::Vim,
        overrides: vec![KeyBinding::new("w", Action::MoveUp)],
    };

    assert_eq!(keymap.navigation_display(), "W/J");
    assert_eq!(keymap.get_key_display_for_action(Action::Create), "O");
}

#[test]
fn test_keymap_override_serialization_format() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");

    let mut config = Config::default();
    config.keymap.preset = KeymapPreset::Emacs;
    config
        .keymap
        .overrides
        .push(KeyBinding::new("f2", Action::Create));
    config
        .keymap
        .overrides
        .push(KeyBinding::new("ctrl+h", Action::NavigateUp));
    config.save(&config_path).unwrap();

    let content = std::fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("[keymap]"));
    assert!(content.contains("preset = \"emacs\""));
    assert!(content.contains("action = \"navigate_up\""));

    let loaded = Config::load_or_create(&config_path).unwrap();
    assert_eq!(
        loaded.keymap.get_action(KeyCode::F(2), KeyModifiers::NONE),
        Some(Action::Create)
    );
    assert_eq!(
        loaded
            .keymap
            .get_action(KeyCode::Char('h'), KeyModifiers::CONTROL),
        Some(Action::NavigateUp)
    );
    // '+' was the emacs Create key
    assert_eq!(
        loaded
            .keymap
            .get_action(KeyCode::Char('+'), KeyModifiers::NONE),
        None
    );
}

#[test]
fn test_invalid_override_is_reported_and_ignored() {
    let keymap = Keymap {
        preset: KeymapPreset::Standard,
        overrides: vec![KeyBinding::new("hyper+x", Action::Refresh)],
    };

    let invalid = keymap.invalid_overrides();
    assert_eq!(invalid.len(), 1);
    assert_eq!(invalid[0].0, "hyper+x");

    // The broken override still shadows the preset keys for Refresh
    assert_eq!(
        keymap.get_action(KeyCode::Char('r'), KeyModifiers::NONE),
        None
    );
}
