use memspec::{config::TogglingRateIdlePattern, standards::lpddr4::PasrMode};
use serde_json::json;

#[test]
fn idle_pattern_strings() -> anyhow::Result<()> {
    for (pattern, text) in [
        (TogglingRateIdlePattern::L, "L"),
        (TogglingRateIdlePattern::H, "H"),
        (TogglingRateIdlePattern::Z, "Z"),
    ] {
        assert_eq!(serde_json::to_value(pattern)?, json!(text));
        assert_eq!(serde_json::from_value::<TogglingRateIdlePattern>(json!(text))?, pattern);
    }
    Ok(())
}

#[test]
fn pasr_mode_numbers() -> anyhow::Result<()> {
    assert_eq!(serde_json::to_value(PasrMode::Pasr0)?, json!(0));
    assert_eq!(serde_json::to_value(PasrMode::Pasr7)?, json!(7));
    assert_eq!(serde_json::from_value::<PasrMode>(json!(5))?, PasrMode::Pasr5);
    Ok(())
}

#[test]
fn unknown_values_are_invalid() -> anyhow::Result<()> {
    assert_eq!(
        serde_json::from_value::<TogglingRateIdlePattern>(json!("X"))?,
        TogglingRateIdlePattern::Invalid
    );
    assert_eq!(
        serde_json::from_value::<TogglingRateIdlePattern>(json!("l"))?,
        TogglingRateIdlePattern::Invalid
    );
    assert_eq!(serde_json::from_value::<PasrMode>(json!(8))?, PasrMode::Invalid);
    assert_eq!(serde_json::from_value::<PasrMode>(json!("PASR_1"))?, PasrMode::Invalid);

    assert_eq!(serde_json::to_value(PasrMode::Invalid)?, json!(null));
    assert_eq!(PasrMode::default(), PasrMode::Invalid);
    Ok(())
}

#[test]
fn invalid_reads_back_as_empty() -> anyhow::Result<()> {
    use memspec::standards::lpddr4::BankWiseSpecLpddr4;

    let bank_wise = BankWiseSpecLpddr4 {
        pasr_mode: Some(PasrMode::Invalid),
        ..Default::default()
    };

    let document = serde_json::to_value(&bank_wise)?;
    assert_eq!(document["pasrMode"], json!(null));

    let parsed: BankWiseSpecLpddr4 = serde_json::from_value(document)?;
    assert_eq!(parsed.pasr_mode, None);
    Ok(())
}
