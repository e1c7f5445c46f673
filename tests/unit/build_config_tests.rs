/*!
 * Tests for the front-end build configuration
 */

use vardnica::build_config::{
    Adapter, BuildConfig, Position, Preprocessor, ServerAdapterOptions, StaticAdapterOptions,
    Warning, WarningAction, WarningFilter,
};
use vardnica::errors::BuildConfigError;

#[test]
fn test_decideCode_withSuppressedPrefixes_shouldSuppress() {
    let filter = WarningFilter::default();

    assert_eq!(filter.decide_code("a11y-missing-attribute"), WarningAction::Suppress);
    assert_eq!(filter.decide_code("a11y-"), WarningAction::Suppress);
    assert_eq!(filter.decide_code("css-unused-selector"), WarningAction::Suppress);
    assert_eq!(filter.decide_code("css-unused-selector-foo"), WarningAction::Suppress);
}

#[test]
fn test_decideCode_withOtherCodes_shouldForward() {
    let filter = WarningFilter::default();

    assert_eq!(filter.decide_code("unused-export-let"), WarningAction::Forward);
    assert_eq!(filter.decide_code("a11y"), WarningAction::Forward);
    assert_eq!(filter.decide_code("A11Y-missing-attribute"), WarningAction::Forward);
    assert_eq!(filter.decide_code("css-unused"), WarningAction::Forward);
    assert_eq!(filter.decide_code("x-a11y-foo"), WarningAction::Forward);
    assert_eq!(filter.decide_code(""), WarningAction::Forward);
}

#[test]
fn test_onWarn_withSuppressedWarning_shouldNotCallHandler() {
    let config = BuildConfig::default();
    let warning = Warning::new("a11y-click-events-have-key-events", "Missing key handler");
    let mut forwarded = Vec::new();

    let action = config.on_warn(&warning, |w| forwarded.push(w.code.clone()));

    assert_eq!(action, WarningAction::Suppress);
    assert!(forwarded.is_empty());
}

#[test]
fn test_onWarn_withForwardedWarning_shouldCallHandlerOnce() {
    let config = BuildConfig::default();
    let warning = Warning {
        code: "unused-export-let".to_string(),
        message: "Component has unused export property".to_string(),
        filename: Some("src/routes/+page.svelte".to_string()),
        start: Some(Position { line: 3, column: 12 }),
    };
    let mut forwarded = Vec::new();

    let action = config.on_warn(&warning, |w| forwarded.push(w.clone()));

    assert_eq!(action, WarningAction::Forward);
    assert_eq!(forwarded, vec![warning]);
}

#[test]
fn test_default_withNoParameters_shouldSelectOneStaticAdapterAndOnePreprocessor() {
    let config = BuildConfig::default();

    assert_eq!(config.preprocess.len(), 1);
    assert_eq!(config.preprocess[0].name, "vite");
    assert!(config.preprocess[0].options.is_empty());

    match &config.adapter {
        Adapter::Static(options) => {
            assert_eq!(options.pages, "build");
            assert_eq!(options.assets, "build");
            assert_eq!(options.fallback, None);
            assert!(!options.precompress);
            assert!(options.strict);
        }
        other => panic!("expected static adapter, got {:?}", other),
    }
    assert!(!config.adapter.requires_server());
    assert!(config.validate().is_ok());
}

#[test]
fn test_validate_withServerAdapter_shouldFail() {
    for adapter in [
        Adapter::Node(ServerAdapterOptions::default()),
        Adapter::Auto(ServerAdapterOptions::default()),
    ] {
        let config = BuildConfig {
            adapter,
            ..BuildConfig::default()
        };
        assert!(matches!(
            config.validate().unwrap_err(),
            BuildConfigError::ServerAdapter(_)
        ));
    }
}

#[test]
fn test_validate_withEmptyEntries_shouldReportIndex() {
    let mut config = BuildConfig::default();
    config.warning_filter.suppressed_prefixes.push(String::new());
    assert!(matches!(config.validate().unwrap_err(), BuildConfigError::EmptyPrefix(2)));

    let mut config = BuildConfig::default();
    config.preprocess.push(Preprocessor {
        name: " ".to_string(),
        options: Default::default(),
    });
    assert!(matches!(config.validate().unwrap_err(), BuildConfigError::EmptyPreprocessor(1)));

    let config = BuildConfig {
        adapter: Adapter::Static(StaticAdapterOptions {
            pages: String::new(),
            ..StaticAdapterOptions::default()
        }),
        ..BuildConfig::default()
    };
    assert!(matches!(config.validate().unwrap_err(), BuildConfigError::EmptyOutputDir("pages")));
}

#[test]
fn test_deserialize_withEmptyObject_shouldUseDefaults() {
    let config: BuildConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config, BuildConfig::default());
}

#[test]
fn test_deserialize_withSpaFallback_shouldKeepOtherDefaults() {
    let json = r#"{
        "adapter": { "kind": "static", "fallback": "index.html" },
        "preprocess": [{ "name": "vite", "options": { "script": true } }]
    }"#;

    let config: BuildConfig = serde_json::from_str(json).unwrap();

    match &config.adapter {
        Adapter::Static(options) => {
            assert_eq!(options.fallback.as_deref(), Some("index.html"));
            assert_eq!(options.pages, "build");
            assert!(options.strict);
        }
        other => panic!("expected static adapter, got {:?}", other),
    }
    assert_eq!(config.preprocess[0].options["script"], true);
    assert_eq!(config.warning_filter, WarningFilter::default());
}

#[test]
fn test_deserialize_withUnknownField_shouldFail() {
    assert!(serde_json::from_str::<BuildConfig>(r#"{ "ssr": true }"#).is_err());
    assert!(serde_json::from_str::<BuildConfig>(r#"{ "adapter": { "kind": "vercel" } }"#).is_err());
}

#[test]
fn test_serialize_withDefault_shouldTagAdapterKind() {
    let value = serde_json::to_value(BuildConfig::default()).unwrap();

    assert_eq!(value["adapter"]["kind"], "static");
    assert_eq!(value["warning_filter"]["suppressed_prefixes"][0], "a11y-");
    assert_eq!(value["warning_filter"]["suppressed_prefixes"][1], "css-unused-selector");
    assert!(value["adapter"].get("fallback").is_none());
}

#[test]
fn test_warningAction_display_shouldBeLowercase() {
    assert_eq!(WarningAction::Suppress.to_string(), "suppress");
    assert_eq!(WarningAction::Forward.to_string(), "forward");
}

#[test]
fn test_deserialize_withServerAdapterFields_shouldFail() {
    assert!(serde_json::from_str::<BuildConfig>(r#"{ "adapter": { "kind": "node", "out": "x" } }"#).is_err());
    assert!(serde_json::from_str::<BuildConfig>(r#"{ "adapter": { "kind": "auto", "pages": "build" } }"#).is_err());

    let config: BuildConfig = serde_json::from_str(r#"{ "adapter": { "kind": "node" } }"#).unwrap();
    assert_eq!(config.adapter, Adapter::Node(ServerAdapterOptions::default()));
    assert_eq!(serde_json::to_value(&config.adapter).unwrap(), serde_json::json!({ "kind": "node" }));
}
