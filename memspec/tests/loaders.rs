use std::path::{Path, PathBuf};

use memspec::{
    Error, IdVariant as _, MEMSPEC_KEY, MemSpecContainer, MemSpecVariant, MemSpecVariantKind,
    Variant as _, parse_memspec_from_buffer, parse_memspec_from_file, parse_memspec_from_json,
    read_memspec,
    standards::ddr3::{MemArchitectureSpecDdr3, MemSpecDdr3, MemTimingSpecDdr3},
};
use serde_json::{Value, json};

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name)
}

fn test_ddr3() -> MemSpecDdr3 {
    MemSpecDdr3 {
        memory_id: "Test_DDR3".to_string(),
        architecture: MemArchitectureSpecDdr3 {
            nbr_of_rows: 10,
            ..Default::default()
        },
        timing: MemTimingSpecDdr3 {
            cke: 11,
            ..Default::default()
        },
    }
}

fn assert_test_ddr3(memspec: &MemSpecVariant) {
    let Some(MemSpecVariantKind::Ddr3(ddr3)) = memspec.get_variant() else {
        panic!("expected DDR3, got {:?}", memspec.id());
    };
    assert_eq!(ddr3.memory_id, "Test_DDR3");
    assert_eq!(ddr3.architecture.nbr_of_rows, 10);
    assert_eq!(ddr3.timing.cke, 11);
}

fn test_ddr3_document() -> anyhow::Result<Value> {
    Ok(MemSpecVariant::from(test_ddr3()).to_document()?)
}

#[test]
fn container_file_roundtrip() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("memspec.json");

    MemSpecContainer::from(MemSpecVariant::from(test_ddr3())).save(&path)?;

    let container = MemSpecContainer::load(&path)?;
    assert_test_ddr3(&container.memspec);

    let parsed = parse_memspec_from_file(&path, Some(MEMSPEC_KEY)).expect("saved memspec parses");
    assert_eq!(parsed, container.memspec);
    Ok(())
}

#[test]
fn fixture_file() {
    let memspec = parse_memspec_from_file(fixture("ddr4_8gb_x8_2400.json"), Some(MEMSPEC_KEY))
        .expect("fixture parses");
    assert_eq!(memspec.id(), Some("DDR4"));

    let Some(MemSpecVariantKind::Ddr4(ddr4)) = memspec.get_variant() else {
        unreachable!()
    };
    assert_eq!(ddr4.memory_id, "JEDEC_8Gb_DDR4-2400_8bit_A");
    assert_eq!(ddr4.architecture.nbr_of_bank_groups, 4);
    assert_eq!(ddr4.architecture.max_burst_length, None);
    assert_eq!(ddr4.timing.rfc4, 192);
    assert_eq!(ddr4.power.idd5_f4, 0.16);
    assert_eq!(ddr4.power.i_beta, None);
    assert_eq!(ddr4.bank_wise.as_ref().map(|bank_wise| bank_wise.fact_rho), Some(1.0));
    assert!(ddr4.pre_postamble.is_none());
}

#[test]
fn buffer_and_json() -> anyhow::Result<()> {
    let document = test_ddr3_document()?;
    let container = json!({ "memspec": document });

    let from_json = parse_memspec_from_json(&container, Some(MEMSPEC_KEY)).expect("keyed");
    assert_test_ddr3(&from_json);

    let from_buffer =
        parse_memspec_from_buffer(&container.to_string(), Some(MEMSPEC_KEY)).expect("keyed");
    assert_eq!(from_buffer, from_json);

    // The bare memspec parses the same with or without a key
    let bare = parse_memspec_from_json(&document, None).expect("bare");
    assert_eq!(bare, from_json);
    let bare_keyed = parse_memspec_from_json(&document, Some(MEMSPEC_KEY)).expect("bare, keyed");
    assert_eq!(bare_keyed, from_json);
    Ok(())
}

#[test]
fn unregistered_keyed_type_falls_back_to_root() -> anyhow::Result<()> {
    let mut document = test_ddr3_document()?;
    document[MEMSPEC_KEY] = json!({ "memoryType": "DDR9", "memoryId": "future" });

    let memspec = read_memspec(&document, Some(MEMSPEC_KEY))?;
    assert_test_ddr3(&memspec);
    Ok(())
}

#[test]
fn keyed_failures_do_not_fall_back() -> anyhow::Result<()> {
    let mut document = test_ddr3_document()?;

    // Registered, but the record is broken
    document[MEMSPEC_KEY] = json!({ "memoryType": "DDR3", "memoryId": "broken" });
    let error = read_memspec(&document, Some(MEMSPEC_KEY)).unwrap_err();
    assert!(matches!(error, Error::Document(_)));

    document[MEMSPEC_KEY] = json!({ "memoryId": "untagged" });
    let error = read_memspec(&document, Some(MEMSPEC_KEY)).unwrap_err();
    assert!(matches!(error, Error::MissingDiscriminator { key: "memoryType" }));
    Ok(())
}

#[test]
fn discriminator_failures() {
    let untagged = json!({ "memspec": { "memoryId": "x" } });
    assert!(parse_memspec_from_json(&untagged, Some(MEMSPEC_KEY)).is_none());
    assert!(parse_memspec_from_json(&untagged, None).is_none());

    let numeric = json!({ "memoryType": 4 });
    assert!(matches!(
        read_memspec(&numeric, None),
        Err(Error::InvalidDiscriminator { key: "memoryType" })
    ));

    let unknown = json!({ "memspec": { "memoryType": "DDR9" } });
    assert!(parse_memspec_from_json(&unknown, Some(MEMSPEC_KEY)).is_none());
    let error = read_memspec(&unknown, Some(MEMSPEC_KEY)).unwrap_err();
    // The root has no memoryType either
    assert!(matches!(error, Error::MissingDiscriminator { .. }));
}

#[test]
fn unreadable_sources() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    assert!(parse_memspec_from_file(dir.path().join("missing.json"), Some(MEMSPEC_KEY)).is_none());

    let malformed = dir.path().join("malformed.json");
    std::fs::write(&malformed, r#"{ "memspec": { "memoryType": "DDR3", "#)?;
    assert!(parse_memspec_from_file(&malformed, Some(MEMSPEC_KEY)).is_none());
    assert!(parse_memspec_from_buffer("", None).is_none());

    assert!(matches!(MemSpecContainer::load(&malformed), Err(Error::Document(_))));
    assert!(matches!(MemSpecContainer::load(dir.path().join("missing.json")), Err(Error::Io(_))));
    Ok(())
}

#[test]
fn missing_member_field() -> anyhow::Result<()> {
    let mut document = test_ddr3_document()?;
    let removed = document["memarchitecturespec"]
        .as_object_mut()
        .and_then(|architecture| architecture.remove("nbrOfRows"));
    assert_eq!(removed, Some(json!(10)));

    assert!(parse_memspec_from_json(&document, None).is_none());

    let error = read_memspec(&document, None).unwrap_err();
    assert!(matches!(error, Error::Document(_)));
    assert!(!error.is_bad_variant_access());
    assert!(error.to_string().contains("nbrOfRows"));
    Ok(())
}
