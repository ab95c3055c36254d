use super::{classify, extract_card_payee, extract_hold_payee, ReferenceKind, NOTIFICATION_FEE_PAYEE, TRANSFER_PAYEE};

use anyhow::{anyhow, Result};
use chrono::NaiveDate;

use crate::models::SourceRecord;
use crate::types::Amount;

const CARD_DESCRIPTION: &str = r"510621++++++1234    12345678\RUS\MOSCOW\STREET 1\PYATEROCHKA  15.03.24 13.03.24 500.00 RUR";
const HOLD_DESCRIPTION: &str = "4276 VISA YANDEX.TAXI MOSCOW RU>MOSCOW 15.03.24";

fn create_record(reference: &str, description: &str) -> Result<SourceRecord> {
    Ok(SourceRecord {
        account_type: "Текущий счёт".to_string(),
        account_number: "40817810000000000001".to_string(),
        currency: "RUR".to_string(),
        date: NaiveDate::from_ymd_opt(2024, 3, 15).ok_or_else(|| anyhow!("invalid date"))?,
        reference: reference.to_string(),
        description: description.to_string(),
        inflow: Amount::zero(),
        outflow: Amount::parse_local("500,00")?
    })
}

#[test]
fn test_reference_kind_follows_rule_order() {
    let test_cases = vec![
        ("HOLD", ReferenceKind::Hold),
        ("HOLD1", ReferenceKind::Other),
        ("CRD_1234", ReferenceKind::Card),
        ("CRD1234", ReferenceKind::Transfer),
        ("MOPJ0001", ReferenceKind::NotificationFee),
        ("C01234567", ReferenceKind::Transfer),
        ("B12345", ReferenceKind::Transfer),
        ("MOP", ReferenceKind::Other),
        ("crd_1234", ReferenceKind::Other),
        ("", ReferenceKind::Other),
    ];

    for (reference, expected_kind) in test_cases {
        assert_eq!(ReferenceKind::from_reference(reference), expected_kind, "reference '{reference}'");
    }
}

#[test]
fn test_hold_pattern_captures_text_up_to_angle_bracket() {
    assert_eq!(extract_hold_payee("123 CARD SHOPNAME RU MOSCOW>1234"), Some("SHOPNAME RU MOSCOW"));
    assert_eq!(extract_hold_payee("CARD SHOPNAME>1"), Some("SHOPNAME"));
    assert_eq!(extract_hold_payee(HOLD_DESCRIPTION), Some("YANDEX.TAXI MOSCOW RU"));
}

#[test]
fn test_hold_pattern_consumes_leading_digits_greedily() {
    assert_eq!(extract_hold_payee("123 SHOPNAME RU MOSCOW>1234"), Some("RU MOSCOW"));
}

#[test]
fn test_hold_pattern_without_match_yields_nothing() {
    assert_eq!(extract_hold_payee("NOSPACE"), None);
    assert_eq!(extract_hold_payee(""), None);
}

#[test]
fn test_card_pattern_captures_merchant_after_fourth_backslash() {
    assert_eq!(extract_card_payee(CARD_DESCRIPTION), Some("PYATEROCHKA"));
    assert_eq!(extract_card_payee(r"Оплата 1\2\3\4\MAGNIT  x"), Some("MAGNIT"));
}

#[test]
fn test_card_pattern_without_match_yields_nothing() {
    assert_eq!(extract_card_payee(r"510621++++++1234    12345678\643\MOSCOW\PYATEROCHKA  15.03.24"), None);
    assert_eq!(extract_card_payee("no backslashes here  "), None);
    assert_eq!(extract_card_payee(r" T\A\B\C\  "), None);
}

#[test]
fn test_card_rule_takes_precedence_over_transfer_prefix() -> Result<()> {
    let destination = classify(&create_record("CRD_1234", CARD_DESCRIPTION)?);

    assert_eq!(destination.payee, "PYATEROCHKA");
    assert_eq!(destination.memo, "");

    Ok(())
}

#[test]
fn test_hold_rule_extracts_payee() -> Result<()> {
    let destination = classify(&create_record("HOLD", HOLD_DESCRIPTION)?);

    assert_eq!(destination.payee, "YANDEX.TAXI MOSCOW RU");
    assert_eq!(destination.memo, "");

    Ok(())
}

#[test]
fn test_notification_fee_rule_sets_fixed_payee_and_memo() -> Result<()> {
    let description = "Плата за оповещения об операциях по карте 510621++++++1234";
    let destination = classify(&create_record("MOPJ00112233", description)?);

    assert_eq!(destination.payee, NOTIFICATION_FEE_PAYEE);
    assert_eq!(destination.memo, description);

    Ok(())
}

#[test]
fn test_transfer_rules_set_fixed_payee_and_verbatim_memo() -> Result<()> {
    let description = " Перевод с карты на карту  ";

    for reference in ["B12345", "C01234567"] {
        let destination = classify(&create_record(reference, description)?);

        assert_eq!(destination.payee, TRANSFER_PAYEE);
        assert_eq!(destination.memo, description);
    }

    Ok(())
}

#[test]
fn test_unmatched_patterns_fall_back_to_description() -> Result<()> {
    let destination = classify(&create_record("HOLD", "NOSPACE")?);
    assert_eq!(destination.payee, "NOSPACE");
    assert_eq!(destination.memo, "");

    let destination = classify(&create_record("CRD_1234", "Покупка без реквизитов")?);
    assert_eq!(destination.payee, "Покупка без реквизитов");
    assert_eq!(destination.memo, "");

    Ok(())
}

#[test]
fn test_unknown_reference_falls_back_to_description() -> Result<()> {
    let destination = classify(&create_record("A0001", "Выплата процентов")?);

    assert_eq!(destination.payee, "Выплата процентов");
    assert_eq!(destination.memo, "");

    Ok(())
}

#[test]
fn test_classify_carries_date_and_amounts_unchanged() -> Result<()> {
    let source = create_record("B12345", "Перевод")?;
    let destination = classify(&source);

    assert_eq!(destination.date, source.date);
    assert_eq!(destination.inflow, source.inflow);
    assert_eq!(destination.outflow, source.outflow);
    assert_eq!(destination.outflow.to_string(), "500.00");

    Ok(())
}
