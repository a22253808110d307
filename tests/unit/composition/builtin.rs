use super::*;
use std::collections::BTreeSet;

#[test]
fn ids_are_unique_and_compositions_validate() {
    let all = compositions();
    assert_eq!(all.len(), 12);
    let ids: BTreeSet<&str> = all.iter().map(|c| c.id()).collect();
    assert_eq!(ids.len(), all.len());
    for c in &all {
        c.validate().unwrap();
        assert_eq!(c.fps().as_f64(), 30.0);
        assert_eq!((c.canvas().width, c.canvas().height), (1920, 1080));
        assert_eq!(c.duration(), c.sections().total_frames(), "{}", c.id());
    }
}

#[test]
fn full_cuts() {
    let manga = find("MangaCryptoExplainer").unwrap();
    assert_eq!(manga.duration(), 3600);
    assert_eq!(manga.sections(), &SectionTable::manga());

    let cubist = find("CubistCryptoExplainer").unwrap();
    assert_eq!(cubist.sections(), &SectionTable::cubist());
}

#[test]
fn previews_cover_one_section() {
    let bls = find("BLSPreview").unwrap();
    assert_eq!(bls.duration(), 540);
    assert_eq!(bls.sections().entries()[0].name, SectionId::Bls);

    let dkg = find("DKGPreview").unwrap();
    assert_eq!(dkg.evaluate(150).unwrap().position.section_progress, 0.5);
}

#[test]
fn unknown_id_is_none() {
    assert!(find("IntroPreview").is_none());
}
