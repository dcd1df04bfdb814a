// Integration tests for selection handling and payload derivation

use proptest::prelude::*;
use sandtty::catalog::{get_files, FrameworkId};
use sandtty::controller::{SelectionState, SelectorController};
use sandtty::error::{Control, SelectionError};
use sandtty::sandbox::{JsonHost, NullHost, SandboxConfig};
use sandtty::theme::{ThemeId, DRACULA};

#[test]
fn test_initial_state_is_react_with_sandpack_dark() {
    let controller = SelectorController::new(NullHost);

    assert_eq!(
        controller.selection(),
        SelectionState {
            framework: FrameworkId::React,
            theme: ThemeId::SandpackDark,
        }
    );
    assert_eq!(controller.config().visible_files(), ["/App.js", "/styles.css"]);
    assert_eq!(controller.config().template, FrameworkId::React);
}

#[test]
fn test_vue_with_dracula() {
    let mut controller = SelectorController::new(NullHost);
    controller.select_framework_id("vue").expect("vue is a framework");
    controller.select_theme_id("dracula").expect("dracula is a theme");

    let config = controller.config();
    assert!(config.files.contains("/src/App.vue"));
    assert_eq!(config.visible_files(), ["/src/App.vue"]);
    assert_eq!(config.theme, &DRACULA);
    assert!(std::ptr::eq(config.theme, &DRACULA));
}

#[test]
fn test_angular_has_three_component_files() {
    let mut controller = SelectorController::new(NullHost);
    controller.select_framework_id("angular").expect("angular is a framework");

    let mut paths = controller.config().files.paths();
    paths.sort_unstable();
    assert_eq!(
        paths,
        vec![
            "/src/app/app.component.css",
            "/src/app/app.component.html",
            "/src/app/app.component.ts",
        ]
    );
}

#[test]
fn test_selecting_twice_is_idempotent() {
    for framework in FrameworkId::ALL {
        let mut controller = SelectorController::new(NullHost);
        controller.select_framework(framework);
        let first = controller.config().clone();
        controller.select_framework(framework);
        assert_eq!(controller.config(), &first);
    }
}

#[test]
fn test_theme_field_is_the_lookup_object() {
    let mut controller = SelectorController::new(NullHost);
    for theme in ThemeId::ALL {
        controller.select_theme(theme);
        assert!(std::ptr::eq(controller.config().theme, theme.theme()));
        for other in ThemeId::ALL.into_iter().filter(|t| *t != theme) {
            assert!(!std::ptr::eq(controller.config().theme, other.theme()));
        }
    }
}

#[test]
fn test_fields_change_independently() {
    let mut controller = SelectorController::new(NullHost);
    controller.select_framework(FrameworkId::Angular);

    let files_before = controller.config().files;
    controller.select_theme(ThemeId::NightOwl);
    assert_eq!(controller.config().files, files_before);

    let theme_before = controller.config().theme;
    controller.select_framework(FrameworkId::Vue);
    assert!(std::ptr::eq(controller.config().theme, theme_before));
}

#[test]
fn test_unknown_ids_are_rejected() {
    let mut controller = SelectorController::new(NullHost);

    let err = controller.select_framework_id("svelte").unwrap_err();
    let SelectionError::InvalidSelection { control, value, expected } = err;
    assert_eq!(control, Control::Framework);
    assert_eq!(value, "svelte");
    assert_eq!(expected, "react, vue, angular");

    let err = controller.select_theme_id("Night Owl").unwrap_err();
    assert!(matches!(
        err,
        SelectionError::InvalidSelection { control: Control::Theme, .. }
    ));

    assert_eq!(controller.selection(), SelectionState::default());
}

#[test]
fn test_json_host_receives_every_change() {
    let mut controller = SelectorController::new(JsonHost::new(Vec::new()));
    controller.select_framework(FrameworkId::Vue);
    controller.select_theme(ThemeId::AtomDark);
    controller.select_theme(ThemeId::AtomDark);

    let host = controller.into_host();
    assert_eq!(host.written(), 3);

    let out = String::from_utf8(host.into_inner()).expect("utf-8 output");
    let last: serde_json::Value =
        serde_json::from_str(out.lines().last().expect("three lines")).expect("valid json");
    assert_eq!(last["template"], "vue");
    assert_eq!(last["theme"]["colors"]["accent"], "#c678dd");
    assert_eq!(last["files"]["/src/App.vue"], get_files(FrameworkId::Vue).get("/src/App.vue").unwrap());
    assert_eq!(last["options"]["visibleFiles"], serde_json::json!(["/src/App.vue"]));
    assert_eq!(last["options"]["showConsole"], false);
    assert_eq!(last["options"]["showConsoleButton"], true);
}

#[derive(Debug, Clone, Copy)]
enum Op {
    Framework(usize),
    Theme(usize),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0usize..FrameworkId::ALL.len()).prop_map(Op::Framework),
        (0usize..ThemeId::ALL.len()).prop_map(Op::Theme),
    ]
}

proptest! {
    #[test]
    fn config_depends_only_on_the_latest_selection(ops in prop::collection::vec(op(), 0..24)) {
        let mut controller = SelectorController::new(NullHost);
        let mut expected = SelectionState::default();

        for op in ops {
            match op {
                Op::Framework(i) => {
                    expected.framework = FrameworkId::ALL[i];
                    controller.select_framework(expected.framework);
                }
                Op::Theme(i) => {
                    expected.theme = ThemeId::ALL[i];
                    controller.select_theme(expected.theme);
                }
            }
        }

        prop_assert_eq!(controller.selection(), expected);
        prop_assert_eq!(controller.config(), &SandboxConfig::derive(&expected));
        let paths = get_files(expected.framework).paths();
        prop_assert_eq!(controller.config().visible_files(), paths.as_slice());
    }
}
