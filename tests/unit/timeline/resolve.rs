use super::*;
use crate::foundation::error::ReelError;
use crate::timeline::table::SectionEntry;

fn two_sections() -> SectionTable {
    SectionTable::new(vec![
        SectionEntry::new(SectionId::Foundations, 480),
        SectionEntry::new(SectionId::PublicKey, 120),
    ])
    .unwrap()
}

#[test]
fn boundary_frame_starts_next_section() {
    let p = resolve(480, &two_sections()).unwrap();
    assert_eq!(p.section_id, SectionId::PublicKey);
    assert_eq!(p.section_index, 1);
    assert_eq!(p.section_start_frame, 480);
    assert_eq!(p.section_local_frame, 0);
    assert_eq!(p.section_progress, 0.0);
}

#[test]
fn last_frame_inside_section_is_not_complete() {
    let p = resolve(479, &two_sections()).unwrap();
    assert_eq!(p.section_id, SectionId::Foundations);
    assert_eq!(p.section_local_frame, 479);
    assert!(p.section_progress < 1.0);
}

#[test]
fn total_duration_clamps_to_last_section() {
    let p = resolve(600, &two_sections()).unwrap();
    assert_eq!(p.section_id, SectionId::PublicKey);
    assert_eq!(p.section_progress, 1.0);
    assert_eq!(p.overall_progress, 1.0);
    assert_eq!(p.section_local_frame, 120);
}

#[test]
fn far_past_end_keeps_last_section() {
    let p = resolve(10_000, &two_sections()).unwrap();
    assert_eq!(p.section_id, SectionId::PublicKey);
    assert_eq!(p.section_start_frame, 480);
    assert_eq!(p.section_progress, 1.0);
    assert_eq!(p.overall_progress, 1.0);
}

#[test]
fn negative_frame_is_invalid() {
    let err = resolve(-1, &two_sections()).unwrap_err();
    assert!(matches!(err, ReelError::InvalidFrame(_)));
}

#[test]
fn every_frame_resolves_inside_its_section() {
    let table = SectionTable::new(vec![
        SectionEntry::new(SectionId::Intro, 3),
        SectionEntry::new(SectionId::Shamir, 1),
        SectionEntry::new(SectionId::Dkg, 7),
    ])
    .unwrap();
    for f in 0..table.total_frames() {
        let p = resolve(f as i64, &table).unwrap();
        let entry = table.entries()[p.section_index];
        assert_eq!(entry.name, p.section_id);
        assert!(p.section_local_frame < entry.duration_frames);
        assert_eq!(p.section_start_frame + p.section_local_frame, f);
        assert!((0.0..1.0).contains(&p.section_progress));
    }
}

#[test]
fn overall_progress_is_non_decreasing_and_hits_one_at_total() {
    let table = SectionTable::manga();
    let total = table.total_frames();
    let mut prev = 0.0;
    for f in 0..=total + 10 {
        let p = resolve(f as i64, &table).unwrap();
        assert!(p.overall_progress >= prev);
        assert_eq!(p.overall_progress == 1.0, f >= total, "frame {f}");
        prev = p.overall_progress;
    }
}

#[test]
fn single_section_preview_needs_no_special_case() {
    let table = SectionTable::single(SectionId::Bls, 540).unwrap();
    let p = table.resolve(270).unwrap();
    assert_eq!(p.section_id, SectionId::Bls);
    assert_eq!(p.section_start_frame, 0);
    assert_eq!(p.section_progress, 0.5);
    assert_eq!(p.overall_progress, 0.5);
}

#[test]
fn duplicate_names_resolve_by_position() {
    let table = SectionTable::new(vec![
        SectionEntry::new(SectionId::Intro, 10),
        SectionEntry::new(SectionId::Intro, 10),
    ])
    .unwrap();
    assert_eq!(table.resolve(15).unwrap().section_index, 1);
}
