//! Integration tests for medix-common library.

use std::io::Write;

use medix_common::{
    CountsReport, Error, Format, GroupedTitles, IconTable, ProgressReport, Report, TitleItem,
    UnusedIconsReport, decode, encode, load_report,
};

#[test]
fn test_counts_to_progress_workflow() {
    let counts = CountsReport::parse(
        br#"[
            { "genre": "Comedy", "raw": 3, "png": 3, "ico": 3 },
            { "genre": "Action", "raw": 12, "png": 9, "ico": 5 },
            { "genre": "Western", "raw": 2, "png": 2, "ico": 2 }
        ]"#,
    )
    .expect("counts parse failed");

    let report = ProgressReport::from_counts(counts.0, &IconTable::builtin());

    assert_eq!(report.genres[0].genre, "Action");
    assert_eq!(report.genres[0].icon.as_deref(), Some("🔥"));
    assert_eq!(report.done, 2);
    assert_eq!(report.total, 3);
    assert_eq!(report.percent, 66);

    // Encode as CBOR and reparse through the report path
    let cbor = encode(&report, Format::Cbor).expect("CBOR encode failed");
    let reparsed = ProgressReport::parse(&cbor).expect("CBOR reparse failed");
    assert_eq!(reparsed, report);

    let json = encode(&report, Format::Json).expect("JSON encode failed");
    let decoded: ProgressReport = decode(&json, Format::Json).expect("JSON decode failed");
    assert_eq!(decoded.genres.len(), 3);
}

#[test]
fn test_invalid_reports_name_their_kind() {
    let cases: Vec<(Error, &str)> = vec![
        (ProgressReport::parse(b"{}").unwrap_err(), "progress"),
        (GroupedTitles::parse(b"[]").unwrap_err(), "title list"),
        (UnusedIconsReport::parse(b"not json").unwrap_err(), "unused icons"),
    ];

    for (err, expected) in cases {
        match err {
            Error::InvalidReport { kind, .. } => assert_eq!(kind, expected),
            other => panic!("expected InvalidReport, got {other}"),
        }
    }
}

#[test]
fn test_unused_icon_groups_keep_document_order() {
    let report = UnusedIconsReport::parse(
        br#"{ "groups": {
            "Western": [ { "name": "Rio Bravo.ico", "source": "personal" } ],
            "Action": [ { "name": "Heat.ico" } ]
        } }"#,
    )
    .unwrap();

    let keys: Vec<_> = report.groups().iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(keys, ["Western", "Action"]);
    assert_eq!(report.groups()[1].1[0].source, "");
}

#[tokio::test]
async fn test_load_grouped_titles_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{ "Horror": [ {{ "name": "Alien", "status": "ok" }},
                         {{ "name": "Scream Collection", "group": [ {{ "name": "Scream" }} ] }} ] }}"#
    )
    .unwrap();

    let titles: GroupedTitles = load_report(file.path()).await.unwrap();
    let (genre, items) = &titles.0.0[0];
    assert_eq!(genre, "Horror");
    assert!(matches!(items[0], TitleItem::Title(_)));
    assert!(matches!(items[1], TitleItem::Collection { .. }));
}
