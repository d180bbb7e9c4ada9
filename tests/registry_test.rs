use chrono::{FixedOffset, TimeZone};
use dtfmt::catalog::{self, dmy, hms, second, ymd};
use dtfmt::registry::{entries, lookup, resolve};
use dtfmt::render;

#[test]
fn test_every_entry_renders() {
    let moment = FixedOffset::east_opt(0)
        .unwrap()
        .with_ymd_and_hms(2021, 7, 15, 13, 35, 46)
        .unwrap();

    for entry in entries() {
        assert!(
            render(&moment, entry.template).is_ok(),
            "{} ({}) failed to render",
            entry.name,
            entry.template
        );
    }
}

#[test]
fn test_entry_count() {
    // 24 field directives, 12 time composites, 26 date composites, 5 misc
    assert_eq!(entries().len(), 67);
}

#[test]
fn test_lookup() {
    assert_eq!(lookup("dmy.slashed"), Some(dmy::SLASHED));
    assert_eq!(lookup("ymd.slashed_and_hms_colon"), Some(ymd::SLASHED_AND_HMS_COLON));
    assert_eq!(lookup("second.msec"), Some(second::MSEC));
    assert_eq!(lookup("locale.datetime"), Some(catalog::LOCALE_DTTM));
    assert_eq!(lookup("percentage"), Some(catalog::PERCENTAGE));
}

#[test]
fn test_lookup_ignores_case_and_padding() {
    assert_eq!(lookup("DMY.SLASHED"), Some(dmy::SLASHED));
    assert_eq!(lookup("Hms.Colon"), Some(hms::COLON));
    assert_eq!(lookup("  ymd.dashed "), Some(ymd::DASHED));
}

#[test]
fn test_lookup_unknown() {
    assert_eq!(lookup("dmy"), None);
    assert_eq!(lookup("dmy.sideways"), None);
    assert_eq!(lookup(""), None);
}

#[test]
fn test_resolve() {
    assert_eq!(resolve("dmy.thin"), dmy::THIN);
    assert_eq!(resolve("%Y-%m-%d %H:%M"), "%Y-%m-%d %H:%M");
    assert_eq!(resolve("not.a.name"), "not.a.name");
}

#[test]
fn test_entries_serialize() {
    let json = serde_json::to_string(&entries()[0]).unwrap();
    assert_eq!(json, r#"{"name":"year.full","template":"%Y"}"#);
}
