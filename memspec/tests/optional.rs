use memspec::{
    Error,
    document::{read_optional, write_optional},
};
use serde_json::json;

#[derive(Debug, PartialEq, serde::Serialize, serde::Deserialize)]
struct Architecture {
    rows: u64,
    #[serde(default, with = "memspec::serde::optional")]
    max_burst_length: Option<u64>,
}

#[test]
fn empty_written_as_null() -> anyhow::Result<()> {
    let architecture = Architecture {
        rows: 4,
        max_burst_length: None,
    };
    assert_eq!(
        serde_json::to_value(&architecture)?,
        json!({ "rows": 4, "max_burst_length": null })
    );
    Ok(())
}

#[test]
fn null_and_absent_read_as_empty() -> anyhow::Result<()> {
    let expected = Architecture {
        rows: 4,
        max_burst_length: None,
    };

    let from_null: Architecture =
        serde_json::from_value(json!({ "rows": 4, "max_burst_length": null }))?;
    let from_absent: Architecture = serde_json::from_value(json!({ "rows": 4 }))?;
    assert_eq!(from_null, expected);
    assert_eq!(from_absent, expected);

    let present: Architecture =
        serde_json::from_value(json!({ "rows": 4, "max_burst_length": 16 }))?;
    assert_eq!(present.max_burst_length, Some(16));

    assert!(
        serde_json::from_value::<Architecture>(json!({ "rows": 4, "max_burst_length": "16" }))
            .is_err()
    );
    Ok(())
}

#[test]
fn keyed_write() -> anyhow::Result<()> {
    let mut document = json!({ "existing": true });
    write_optional(&mut document, Some("present"), &Some(2.5))?;
    write_optional(&mut document, Some("missing"), &None::<f64>)?;
    assert_eq!(
        document,
        json!({ "existing": true, "present": 2.5, "missing": null })
    );

    let mut document = json!("not an object");
    assert!(matches!(
        write_optional(&mut document, Some("key"), &Some(1)),
        Err(Error::ExpectedObject)
    ));
    Ok(())
}

#[test]
fn unkeyed_write() -> anyhow::Result<()> {
    let mut document = json!({ "untouched": 1 });
    write_optional(&mut document, None, &None::<u64>)?;
    assert_eq!(document, json!({ "untouched": 1 }));

    write_optional(&mut document, None, &Some("replaced"))?;
    assert_eq!(document, json!("replaced"));
    Ok(())
}

#[test]
fn keyed_and_unkeyed_read() -> anyhow::Result<()> {
    let document = json!({ "value": 3, "nothing": null });

    assert_eq!(read_optional::<u64>(&document, Some("value"))?, Some(3));
    assert_eq!(read_optional::<u64>(&document, Some("nothing"))?, None);
    assert_eq!(read_optional::<u64>(&document, Some("absent"))?, None);
    assert!(matches!(
        read_optional::<String>(&document, Some("value")),
        Err(Error::Document(_))
    ));

    assert_eq!(read_optional::<u64>(&json!(7), None)?, Some(7));
    assert_eq!(read_optional::<u64>(&json!(null), None)?, None);
    Ok(())
}
