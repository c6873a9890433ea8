use highlightr_config::{
    ConfigError, Highlighter, HighlighterMethod, HighlighterStyle, MarkupTemplate, Settings,
};
use pretty_assertions::assert_eq;

#[test]
fn test_default_palette_order_and_templates() {
    let settings = Settings::default();
    let names: Vec<&str> = settings
        .highlighters
        .iter()
        .map(|h| h.color.as_str())
        .collect();
    assert_eq!(
        names,
        vec![
            "Pink", "Red", "Orange", "Yellow", "Green", "Cyan", "Blue", "Purple", "Grey"
        ]
    );

    let yellow = settings.find("Yellow").unwrap();
    assert_eq!(
        yellow.template(),
        MarkupTemplate::highlight("#FFF3A3A6")
    );
    assert!(settings.validate().is_ok());
}

#[test]
fn test_partial_json_merges_over_defaults() {
    let settings = Settings::from_json_str(r#"{ "highlighterStyle": "rounded" }"#).unwrap();
    assert_eq!(settings.highlighter_style, HighlighterStyle::Rounded);
    assert_eq!(settings.highlighter_methods, HighlighterMethod::InlineStyles);
    assert_eq!(settings.highlighters, Settings::default().highlighters);
}

#[test]
fn test_json_field_names() {
    let settings = Settings {
        highlighter_style: HighlighterStyle::Lowlight,
        highlighter_methods: HighlighterMethod::CssClasses,
        highlighters: vec![Highlighter::new("Mint", "#b2f2bb")],
    };
    let json = settings.to_json_string().unwrap();
    assert!(json.contains("\"highlighterStyle\": \"lowlight\""));
    assert!(json.contains("\"highlighterMethods\": \"css-classes\""));
    assert!(json.contains("\"color\": \"Mint\""));

    let parsed = Settings::from_json_str(&json).unwrap();
    assert_eq!(parsed, settings);
}

#[test]
fn test_invalid_json_is_reported() {
    let err = Settings::from_json_str("{ not json").unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
}

#[test]
fn test_validate_rejects_duplicates_and_blanks() {
    let mut settings = Settings::default();
    settings.highlighters.push(Highlighter::new("Red", "#f00"));
    assert!(matches!(
        settings.validate(),
        Err(ConfigError::DuplicateColor(name)) if name == "Red"
    ));

    settings.highlighters = vec![Highlighter::new("  ", "#f00")];
    assert!(matches!(
        settings.validate(),
        Err(ConfigError::EmptyColorName(0))
    ));

    settings.highlighters = vec![Highlighter::new("Red", "")];
    assert!(matches!(
        settings.validate(),
        Err(ConfigError::EmptyColorValue(name)) if name == "Red"
    ));
}

#[test]
fn test_style_body_classes() {
    let classes = HighlighterStyle::Floating.body_classes();
    assert_eq!(
        classes,
        [
            ("highlightr-lowlight", false),
            ("highlightr-floating", true),
            ("highlightr-rounded", false),
            ("highlightr-realistic", false),
        ]
    );
    assert!(
        HighlighterStyle::None
            .body_classes()
            .iter()
            .all(|(_, on)| !on)
    );
}

#[test]
fn test_load_missing_file_and_save_load() {
    let dir = std::env::temp_dir().join(format!("highlightr-config-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("data.json");
    let _ = std::fs::remove_file(&path);

    assert_eq!(Settings::load(&path).unwrap(), Settings::default());

    let mut settings = Settings::default();
    settings.highlighter_style = HighlighterStyle::Realistic;
    settings.highlighters.truncate(2);
    settings.save(&path).unwrap();

    assert_eq!(Settings::load(&path).unwrap(), settings);
    std::fs::remove_dir_all(&dir).unwrap();
}
