use gridly_sync::culture::CultureMapper;
use gridly_types::GridlySettings;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn available() -> Vec<String> {
    vec![
        "en-US".to_string(),
        "de-DE".to_string(),
        "ja".to_string(),
    ]
}

// ── from Gridly ─────────────────────────────────────────────────

#[test]
fn from_gridly_exact_match() {
    let settings = GridlySettings::default();
    let mapper = CultureMapper::new(&settings);
    assert_eq!(
        mapper.convert_from_gridly(&available(), "enUS"),
        Some("en-US".to_string())
    );
    assert_eq!(
        mapper.convert_from_gridly(&available(), "deDE"),
        Some("de-DE".to_string())
    );
}

#[test]
fn from_gridly_language_only_fallback() {
    let settings = GridlySettings::default();
    let mapper = CultureMapper::new(&settings);
    // jaJP does not match "ja" exactly, but the language part does.
    assert_eq!(
        mapper.convert_from_gridly(&available(), "jaJP"),
        Some("ja".to_string())
    );
}

#[test]
fn from_gridly_unresolvable_culture() {
    let settings = GridlySettings::default();
    let mapper = CultureMapper::new(&settings);
    assert_eq!(mapper.convert_from_gridly(&available(), "frFR"), None);
}

#[test]
fn from_gridly_empty_input() {
    let settings = GridlySettings::default();
    let mapper = CultureMapper::new(&settings);
    assert_eq!(mapper.convert_from_gridly(&available(), ""), None);
}

#[test]
fn from_gridly_without_region_block() {
    let settings = GridlySettings::default();
    let mapper = CultureMapper::new(&settings);
    // A lowercase-only identifier does not fit the structural rule;
    // it needs a custom mapping entry instead.
    assert_eq!(mapper.convert_from_gridly(&available(), "en"), None);
}

#[test]
fn from_gridly_custom_mapping_wins() {
    let mut settings = GridlySettings::default();
    settings
        .custom_culture_mapping
        .insert("no-NO".to_string(), "nor".to_string());
    let mapper = CultureMapper::new(&settings);
    // The mapped culture need not be in the available set.
    assert_eq!(
        mapper.convert_from_gridly(&available(), "nor"),
        Some("no-NO".to_string())
    );
}

#[test]
fn from_gridly_custom_mapping_disabled() {
    let mut settings = GridlySettings::default();
    settings.use_custom_culture_mapping = false;
    settings
        .custom_culture_mapping
        .insert("no-NO".to_string(), "nor".to_string());
    let mapper = CultureMapper::new(&settings);
    assert_eq!(mapper.convert_from_gridly(&available(), "nor"), None);
}

// ── to Gridly ───────────────────────────────────────────────────

#[test]
fn to_gridly_strips_first_dash() {
    let settings = GridlySettings::default();
    let mapper = CultureMapper::new(&settings);
    assert_eq!(
        mapper.convert_to_gridly("en-US"),
        Some("enUS".to_string())
    );
}

#[test]
fn to_gridly_only_first_dash() {
    let settings = GridlySettings::default();
    let mapper = CultureMapper::new(&settings);
    assert_eq!(
        mapper.convert_to_gridly("zh-Hans-CN"),
        Some("zhHans-CN".to_string())
    );
}

#[test]
fn to_gridly_dashless_passes_through() {
    let settings = GridlySettings::default();
    let mapper = CultureMapper::new(&settings);
    assert_eq!(mapper.convert_to_gridly("en"), Some("en".to_string()));
}

#[test]
fn to_gridly_empty_input() {
    let settings = GridlySettings::default();
    let mapper = CultureMapper::new(&settings);
    assert_eq!(mapper.convert_to_gridly(""), None);
}

#[test]
fn to_gridly_custom_mapping_wins() {
    let mut settings = GridlySettings::default();
    settings
        .custom_culture_mapping
        .insert("en-US".to_string(), "english".to_string());
    let mapper = CultureMapper::new(&settings);
    assert_eq!(
        mapper.convert_to_gridly("en-US"),
        Some("english".to_string())
    );
}

// ── structural round trip ───────────────────────────────────────

proptest! {
    #[test]
    fn round_trips_language_region_cultures(
        language in "[a-z]{2,3}",
        region in "[A-Z]{2}",
    ) {
        let culture = format!("{language}-{region}");
        let settings = GridlySettings::default();
        let mapper = CultureMapper::new(&settings);

        let gridly = mapper.convert_to_gridly(&culture).unwrap();
        prop_assert_eq!(&gridly, &format!("{language}{region}"));

        let available = vec![culture.clone()];
        let back = mapper.convert_from_gridly(&available, &gridly);
        prop_assert_eq!(back, Some(culture));
    }
}
