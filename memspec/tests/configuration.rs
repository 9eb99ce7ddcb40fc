use std::path::PathBuf;

use memspec::{
    Error, IdVariant as _, MEMSPEC_KEY, MemSpecContainer, MemSpecVariant, Variant as _,
    config::{Configuration, MemSpecSource, MemSpecSourceKind, TogglingRateIdlePattern},
    standards::MemSpecHbm2,
};
use serde_json::json;

fn hbm2(memory_id: &str) -> MemSpecVariant {
    MemSpecHbm2 {
        memory_id: memory_id.to_string(),
        ..Default::default()
    }
    .into()
}

#[test]
fn inline_memspec() -> anyhow::Result<()> {
    let document = json!({ "memspec": hbm2("inline").to_document()? });
    let configuration = Configuration::from_buffer(&document.to_string())?;

    assert!(matches!(configuration.memspec.get_variant(), Some(MemSpecSourceKind::Inline(_))));
    assert_eq!(configuration.toggling_rate, None);

    let memspec = configuration.memspec("/nonexistent")?;
    assert_eq!(memspec, hbm2("inline"));
    Ok(())
}

#[test]
fn referenced_file_is_relative_to_base_dir() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    std::fs::create_dir(dir.path().join("memspecs"))?;

    // A container file and a bare memspec file are both accepted
    MemSpecContainer::from(hbm2("container")).save(dir.path().join("memspecs/container.json"))?;
    std::fs::write(
        dir.path().join("memspecs/bare.json"),
        serde_json::to_string(&hbm2("bare"))?,
    )?;

    let configuration = Configuration::from_buffer(r#"{ "memspec": "memspecs/container.json" }"#)?;
    assert_eq!(
        configuration.memspec.get_variant(),
        Some(&MemSpecSourceKind::File(PathBuf::from("memspecs/container.json")))
    );
    assert_eq!(configuration.memspec(dir.path())?, hbm2("container"));

    let configuration = Configuration::from_buffer(r#"{ "memspec": "memspecs/bare.json" }"#)?;
    assert_eq!(configuration.memspec(dir.path())?, hbm2("bare"));

    let configuration = Configuration::from_buffer(r#"{ "memspec": "memspecs/missing.json" }"#)?;
    assert!(matches!(configuration.memspec(dir.path()), Err(Error::Io(_))));
    Ok(())
}

#[test]
fn configuration_file() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("config.json");

    let configuration = Configuration {
        memspec: MemSpecSource::from(hbm2("from_file")),
        toggling_rate: None,
    };
    std::fs::write(&path, serde_json::to_string_pretty(&configuration)?)?;

    let loaded = Configuration::from_file(&path)?;
    assert_eq!(loaded, configuration);

    let written: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path)?)?;
    assert_eq!(written[MEMSPEC_KEY]["memoryType"], "HBM2");
    assert_eq!(written["togglingRate"], serde_json::Value::Null);

    assert!(matches!(Configuration::from_file(dir.path().join("missing.json")), Err(Error::Io(_))));
    Ok(())
}

#[test]
fn toggling_rate() -> anyhow::Result<()> {
    let configuration = Configuration::from_buffer(
        r#"{
            "memspec": "ddr4.json",
            "togglingRate": {
                "togglingRateRead": 0.25,
                "togglingRateWrite": 0.5,
                "dutyCycleRead": 0.5,
                "dutyCycleWrite": 0.75,
                "idlePatternRead": "H",
                "idlePatternWrite": "X"
            }
        }"#,
    )?;

    let toggling_rate = configuration.toggling_rate.expect("toggling rate is set");
    assert_eq!(toggling_rate.toggling_rate_read, 0.25);
    assert_eq!(toggling_rate.duty_cycle_write, 0.75);
    assert_eq!(toggling_rate.idle_pattern_read, TogglingRateIdlePattern::H);
    assert_eq!(toggling_rate.idle_pattern_write, TogglingRateIdlePattern::Invalid);

    let explicit_null =
        Configuration::from_buffer(r#"{ "memspec": "a.json", "togglingRate": null }"#)?;
    assert_eq!(explicit_null.toggling_rate, None);
    Ok(())
}

#[test]
fn unusable_memspec_entry() -> anyhow::Result<()> {
    // Tagged with an unregistered type, and not a path either
    let configuration =
        Configuration::from_buffer(r#"{ "memspec": { "memoryType": "DDR9", "memoryId": "x" } }"#)?;
    assert!(configuration.memspec.is_empty());
    assert!(matches!(configuration.memspec("."), Err(Error::EmptyVariant)));

    let configuration = Configuration::from_buffer(r#"{ "memspec": 12 }"#)?;
    assert!(configuration.memspec.is_empty());

    let empty = Configuration {
        memspec: MemSpecSource::default(),
        toggling_rate: None,
    };
    assert_eq!(serde_json::to_value(&empty)?, json!({ "memspec": null, "togglingRate": null }));
    Ok(())
}
