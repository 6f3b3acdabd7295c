use polars::prelude::{AnyValue, DataFrame, NamedFrom, Series};

use klass_tables::{JoinOptions, SecondaryTable, TableError, join_secondary};

fn frame(columns: &[(&str, &[Option<&str>])]) -> DataFrame {
    DataFrame::new(
        columns
            .iter()
            .map(|(name, values)| {
                Series::new(
                    (*name).into(),
                    values.iter().map(|v| v.map(str::to_string)).collect::<Vec<_>>(),
                )
                .into()
            })
            .collect(),
    )
    .unwrap()
}

fn column(df: &DataFrame, name: &str) -> Vec<Option<String>> {
    let column = df.column(name).unwrap();
    (0..df.height())
        .map(|idx| match column.get(idx).unwrap() {
            AnyValue::Null => None,
            other => Some(other.to_string().trim_matches('"').to_string()),
        })
        .collect()
}

fn gender_base() -> DataFrame {
    frame(&[
        ("code", &[Some("1"), Some("2")]),
        ("name", &[Some("Mann"), Some("Kvinne")]),
    ])
}

fn binary_grouping() -> SecondaryTable {
    SecondaryTable::variant(
        "Binary Gender Grouping",
        frame(&[
            ("code", &[Some("1"), Some("2")]),
            ("parentCode", &[Some("M"), Some("K")]),
        ]),
    )
}

#[test]
fn variant_mapping_becomes_a_new_column() {
    let options = JoinOptions {
        shortname_word_count: 2,
        ..JoinOptions::default()
    };
    let joined = join_secondary(&gender_base(), &[binary_grouping()], &options).unwrap();
    assert_eq!(
        column(&joined, "binary_gender"),
        vec![Some("M".to_string()), Some("K".to_string())]
    );
}

#[test]
fn joining_is_purely_additive() {
    let base = gender_base();
    let joined =
        join_secondary(&base, &[binary_grouping()], &JoinOptions::default()).unwrap();
    assert_eq!(joined.height(), base.height());
    assert_eq!(column(&joined, "code"), column(&base, "code"));
    assert_eq!(column(&joined, "name"), column(&base, "name"));
    assert_eq!(joined.width(), base.width() + 1);
}

#[test]
fn unmapped_codes_get_nulls() {
    let base = frame(&[
        ("code", &[Some("1"), Some("9")]),
        ("name", &[Some("Mann"), Some("Ufordelt")]),
    ]);
    let options = JoinOptions {
        shortname_word_count: 2,
        ..JoinOptions::default()
    };
    let joined = join_secondary(&base, &[binary_grouping()], &options).unwrap();
    assert_eq!(
        column(&joined, "binary_gender"),
        vec![Some("M".to_string()), None]
    );
}

#[test]
fn correspondence_secondary_maps_source_to_target() {
    let nuts = SecondaryTable::correspondence(
        "NUTS regions",
        frame(&[
            ("sourceCode", &[Some("1"), Some("2")]),
            ("targetCode", &[Some("NO01"), Some("NO02")]),
        ]),
    );
    let joined = join_secondary(&gender_base(), &[nuts], &JoinOptions::default()).unwrap();
    assert_eq!(
        column(&joined, "nuts_regions"),
        vec![Some("NO01".to_string()), Some("NO02".to_string())]
    );
}

#[test]
fn collision_with_base_column_is_rejected() {
    let base = frame(&[
        ("code", &[Some("1")]),
        ("binary_gender", &[Some("taken")]),
    ]);
    let options = JoinOptions {
        shortname_word_count: 2,
        ..JoinOptions::default()
    };
    let err = join_secondary(&base, &[binary_grouping()], &options).unwrap_err();
    assert!(matches!(err, TableError::ShortNameCollision { ref name } if name == "binary_gender"));
}

#[test]
fn collision_between_secondaries_is_rejected_before_writing() {
    let options = JoinOptions {
        shortname_word_count: 1,
        include_columns: vec!["parentCode".to_string()],
        ..JoinOptions::default()
    };
    // Both labels shorten to "binary" at one word; the second table
    // must fail outright rather than add its include column first.
    let err = join_secondary(
        &gender_base(),
        &[binary_grouping(), binary_grouping()],
        &options,
    )
    .unwrap_err();
    assert!(matches!(err, TableError::ShortNameCollision { ref name } if name == "binary"));
}

#[test]
fn include_columns_are_copied_with_prefixed_names() {
    let grouping = SecondaryTable::variant(
        "Binary Gender Grouping",
        frame(&[
            ("code", &[Some("1"), Some("2")]),
            ("parentCode", &[Some("M"), Some("K")]),
            ("name", &[Some("Menn"), Some("Kvinner")]),
        ]),
    );
    let options = JoinOptions {
        shortname_word_count: 2,
        include_columns: vec!["name".to_string()],
        ..JoinOptions::default()
    };
    let joined = join_secondary(&gender_base(), &[grouping], &options).unwrap();
    assert_eq!(
        column(&joined, "binary_gender_name"),
        vec![Some("Menn".to_string()), Some("Kvinner".to_string())]
    );
}

#[test]
fn absent_include_columns_are_skipped() {
    let options = JoinOptions {
        shortname_word_count: 2,
        include_columns: vec!["shortName".to_string()],
        ..JoinOptions::default()
    };
    let joined = join_secondary(&gender_base(), &[binary_grouping()], &options).unwrap();
    assert!(joined.column("binary_gender_shortName").is_err());
    assert!(joined.column("binary_gender").is_ok());
}

#[test]
fn blank_label_is_rejected() {
    let mut secondary = binary_grouping();
    secondary.label = "  ".to_string();
    let err =
        join_secondary(&gender_base(), &[secondary], &JoinOptions::default()).unwrap_err();
    assert!(matches!(err, TableError::MissingLabel { .. }));
}
