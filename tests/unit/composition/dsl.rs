use super::*;
use crate::foundation::error::ReelError;

fn builder() -> CompositionBuilder {
    CompositionBuilder::new(
        "Cut",
        Fps::integer(30).unwrap(),
        Canvas {
            width: 1920,
            height: 1080,
        },
    )
}

#[test]
fn duration_defaults_to_section_total() {
    let c = builder()
        .section(SectionId::Foundations, 480)
        .section(SectionId::PublicKey, 120)
        .build()
        .unwrap();
    assert_eq!(c.duration(), 600);
    assert_eq!(c.sections().len(), 2);
}

#[test]
fn explicit_duration_wins() {
    let c = builder()
        .section(SectionId::Dkg, 300)
        .duration(250)
        .build()
        .unwrap();
    assert_eq!(c.duration(), 250);
}

#[test]
fn no_sections_is_invalid_table() {
    let err = builder().build().unwrap_err();
    assert!(matches!(err, ReelError::InvalidTable(_)));
}

#[test]
fn zero_length_section_is_invalid_table() {
    let err = builder().section(SectionId::Bls, 0).build().unwrap_err();
    assert!(matches!(err, ReelError::InvalidTable(_)));
}

#[test]
fn sections_from_table_match_preset() {
    let c = builder().sections(&SectionTable::manga()).build().unwrap();
    assert_eq!(c.sections(), &SectionTable::manga());
    assert_eq!(c.duration(), 3600);
}
