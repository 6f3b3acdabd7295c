//! Deserialization tests against captured KLASS response shapes.

use klass_model::{
    ChangesResponse, ClassificationDetails, CodesResponse, CorrespondenceTableDetails,
    CorrespondsResponse, FamilyDetails, FamilyListResponse, Language, SearchResponse,
    SsbSectionsResponse, VariantDetails, VersionDetails,
};

#[test]
fn classification_details_decode() {
    let details: ClassificationDetails =
        serde_json::from_str(include_str!("fixtures/classification.json"))
            .expect("decode classification");
    assert_eq!(details.name, "Standard for sivilstand");
    assert_eq!(details.primary_language, Some(Language::Nb));
    assert!(!details.copyrighted);
    assert_eq!(details.versions.len(), 2);
    assert_eq!(details.versions[1].version_id().unwrap(), "50");
    assert_eq!(details.versions[0].valid_to.as_deref(), Some("1993-01-01"));
    assert_eq!(details.links.self_id().unwrap(), "19");
}

#[test]
fn version_details_decode() {
    let version: VersionDetails =
        serde_json::from_str(include_str!("fixtures/version.json")).expect("decode version");
    assert_eq!(version.name, "Sivilstand 1993");
    assert_eq!(version.levels.len(), 1);
    assert_eq!(version.levels[0].level_number, 1);
    assert_eq!(version.levels[0].level_name, "Sivilstand");
    assert_eq!(version.classification_items.len(), 4);
    assert_eq!(version.classification_items[0].code, "1");
    assert_eq!(
        version.classification_items[0].name.as_deref(),
        Some("Ugift")
    );
    assert_eq!(version.correspondence_tables.len(), 1);
    assert_eq!(version.correspondence_tables[0].table_id().unwrap(), "447");
    assert_eq!(version.classification_variants.len(), 1);
    assert_eq!(
        version.classification_variants[0].table_id().unwrap(),
        "1104"
    );
    assert_eq!(
        version.changelogs[0].change_occured.as_deref(),
        Some("2016-10-07T12:06:18.000+0000")
    );
}

#[test]
fn version_without_valid_to_decodes() {
    let version: VersionDetails =
        serde_json::from_str(include_str!("fixtures/version.json")).expect("decode version");
    assert!(version.valid_to.is_none());
}

#[test]
fn variant_details_decode() {
    let variant: VariantDetails =
        serde_json::from_str(include_str!("fixtures/variant.json")).expect("decode variant");
    assert_eq!(variant.variant_id().unwrap(), "1965");
    assert_eq!(variant.levels.len(), 2);
    assert_eq!(variant.classification_items.len(), 3);
    assert_eq!(
        variant.classification_items[2].parent_code.as_deref(),
        Some("01-07")
    );
}

#[test]
fn codes_response_decode() {
    let codes: CodesResponse =
        serde_json::from_str(include_str!("fixtures/codes.json")).expect("decode codes");
    assert_eq!(codes.codes.len(), 2);
    assert_eq!(codes.codes[0].code, "1");
    assert_eq!(codes.codes[0].name.as_deref(), Some("Mann"));
    assert_eq!(
        codes.codes[0].valid_from_in_requested_range.as_deref(),
        Some("2023-01-01")
    );
    assert!(codes.codes[0].valid_from.is_none());
}

#[test]
fn correspondence_table_decode() {
    let table: CorrespondenceTableDetails =
        serde_json::from_str(include_str!("fixtures/correspondence_table.json"))
            .expect("decode correspondence table");
    assert_eq!(table.source, "Kommuneinndeling 2024");
    assert_eq!(table.target_id, 2109);
    assert!(!table.change_table);
    assert_eq!(table.correspondence_maps.len(), 2);
    assert_eq!(
        table.correspondence_maps[0].target_code.as_deref(),
        Some("03")
    );
}

#[test]
fn corresponds_decode() {
    let corresponds: CorrespondsResponse =
        serde_json::from_str(include_str!("fixtures/corresponds.json")).expect("decode");
    assert_eq!(corresponds.correspondence_items.len(), 2);
    assert_eq!(
        corresponds.correspondence_items[1].source_name.as_deref(),
        Some("Bergen")
    );
}

#[test]
fn search_response_decode() {
    let search: SearchResponse =
        serde_json::from_str(include_str!("fixtures/search.json")).expect("decode search");
    let results = search.results();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].classification_id().unwrap(), "2");
    assert!(results[0].search_score.unwrap() > 1.0);
}

#[test]
fn search_response_without_embedded_is_empty() {
    let search: SearchResponse = serde_json::from_str(r#"{"_links": {}}"#).expect("decode");
    assert!(search.results().is_empty());
}

#[test]
fn family_responses_decode() {
    let list: FamilyListResponse =
        serde_json::from_str(include_str!("fixtures/families.json")).expect("decode families");
    assert_eq!(list.families().len(), 2);
    assert_eq!(list.families()[0].family_id().unwrap(), "20");
    assert_eq!(list.families()[1].number_of_classifications, 12);

    let family: FamilyDetails =
        serde_json::from_str(include_str!("fixtures/family.json")).expect("decode family");
    assert_eq!(family.name, "Utdanning");
    assert_eq!(family.classifications.len(), 2);
    assert_eq!(
        family.classifications[0].classification_id().unwrap(),
        "36"
    );
}

#[test]
fn changes_decode() {
    let changes: ChangesResponse =
        serde_json::from_str(include_str!("fixtures/changes.json")).expect("decode changes");
    assert_eq!(changes.code_changes.len(), 2);
    assert!(changes.code_changes[1].old_code.is_none());
    assert_eq!(
        changes.code_changes[1].change_occurred.as_deref(),
        Some("2022-10-01")
    );
}

#[test]
fn sections_decode() {
    let sections: SsbSectionsResponse =
        serde_json::from_str(include_str!("fixtures/sections.json")).expect("decode sections");
    let names: Vec<&str> = sections.names().collect();
    assert_eq!(names.len(), 3);
    assert!(names.contains(&"320 - Seksjon for befolkningsstatistikk"));
}
