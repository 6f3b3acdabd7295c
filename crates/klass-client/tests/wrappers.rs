//! Wrapper construction from decoded fixture responses. No network.

use klass_model::{
    ClassificationDetails, CorrespondenceTableDetails, FamilyDetails, SearchResponse,
    VariantDetails, VersionDetails,
};
use klass_tables::LookupOptions;

use klass_client::{
    Classification, ClientError, Correspondence, Family, SearchClassifications, Variant, Version,
};

fn classification() -> Classification {
    let details: ClassificationDetails =
        serde_json::from_str(include_str!("fixtures/classification.json")).unwrap();
    Classification::from_details("19", details)
}

#[test]
fn versions_lookup_maps_id_to_name() {
    let lookup = classification().versions_lookup();
    assert_eq!(lookup.get("50").map(String::as_str), Some("Sivilstand 1993"));
    assert_eq!(lookup.get("51").map(String::as_str), Some("Sivilstand 1964"));
}

#[test]
fn newest_version_wins_by_valid_from() {
    assert_eq!(classification().newest_version_id().unwrap(), "50");
}

#[test]
fn classification_display_lists_versions() {
    let rendered = classification().to_string();
    assert!(rendered.starts_with("Classification 19: Standard for sivilstand"));
    assert!(rendered.contains("Sivilstand 1964"));
    assert!(rendered.contains("Sivilstand 1993"));
}

#[test]
fn version_builds_its_codelist_frame() {
    let details: VersionDetails =
        serde_json::from_str(include_str!("fixtures/version.json")).unwrap();
    let version = Version::from_details(details).unwrap();
    assert_eq!(version.data().height(), 4);
    assert_eq!(version.levels().name_of("1"), Some("Sivilstand"));

    let lookup = version.to_lookup("name", &LookupOptions::default()).unwrap();
    assert_eq!(lookup.get("2"), Some("Gift"));

    let variants = version.variants_lookup();
    assert_eq!(
        variants.get("1104").map(String::as_str),
        Some("Sivilstand - gruppering for demografi")
    );
    let correspondences = version.correspondences_lookup();
    assert!(correspondences.contains_key("447"));
}

#[test]
fn version_level_selector_filters_items() {
    let details: VersionDetails =
        serde_json::from_str(include_str!("fixtures/version.json")).unwrap();
    let version = Version::with_level(details, Some("Sivilstand")).unwrap();
    assert_eq!(version.data().height(), 4);

    let details: VersionDetails =
        serde_json::from_str(include_str!("fixtures/version.json")).unwrap();
    let err = Version::with_level(details, Some("Kommune")).unwrap_err();
    assert!(matches!(err, ClientError::Table(_)));
}

#[test]
fn variant_becomes_a_join_input() {
    let details: VariantDetails =
        serde_json::from_str(include_str!("fixtures/variant.json")).unwrap();
    let variant = Variant::from_details(details).unwrap();
    let secondary = variant.as_secondary();
    assert_eq!(secondary.key_column, "code");
    assert_eq!(secondary.value_column, "parentCode");
    assert_eq!(secondary.label, variant.name());
}

#[test]
fn correspondence_lookup_maps_source_to_target() {
    let details: CorrespondenceTableDetails =
        serde_json::from_str(include_str!("fixtures/correspondence_table.json")).unwrap();
    let correspondence = Correspondence::from_table(&details).unwrap();
    assert_eq!(correspondence.label(), details.target.as_str());
    let lookup = correspondence.to_lookup(&LookupOptions::default()).unwrap();
    assert!(!lookup.is_empty());
    for (source, target) in lookup.iter() {
        assert!(!source.is_empty());
        assert!(!target.is_empty());
    }
}

#[test]
fn search_results_format_as_id_name_lines() {
    let response: SearchResponse =
        serde_json::from_str(include_str!("fixtures/search.json")).unwrap();
    let search = SearchClassifications::from_response("kommune", response, false);
    let rendered = search.simple_search_result();
    for line in rendered.lines() {
        let (id, name) = line.split_once(": ").unwrap();
        assert!(id.chars().all(|c| c.is_ascii_digit()));
        assert!(!name.is_empty());
    }
}

#[test]
fn search_dedupes_by_classification_id() {
    let response: SearchResponse =
        serde_json::from_str(include_str!("fixtures/search.json")).unwrap();
    let all = SearchClassifications::from_response("kommune", response.clone(), false);
    let deduped = SearchClassifications::from_response("kommune", response, true);
    assert!(deduped.results().len() <= all.results().len());
}

#[test]
fn empty_search_says_so() {
    let search =
        SearchClassifications::from_response("tomt", SearchResponse::default(), false);
    assert_eq!(search.simple_search_result(), "No results for 'tomt'");
}

#[test]
fn family_lists_member_classifications() {
    let details: FamilyDetails =
        serde_json::from_str(include_str!("fixtures/family.json")).unwrap();
    let family = Family::from_details(details);
    assert!(!family.classifications().is_empty());
    let rendered = family.to_string();
    assert!(rendered.starts_with("Family: "));
}
