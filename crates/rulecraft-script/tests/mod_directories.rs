use rulecraft_script::{Assembler, AssemblyConfig, ModId, ModSource, SpecialAbility};
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures/mods")
        .join(name)
}

fn read_all(config: &AssemblyConfig, names: &[&str]) -> Vec<ModSource> {
    names
        .iter()
        .map(|name| ModSource::from_dir(fixture(name), config).expect("read mod dir"))
        .collect()
}

#[test]
fn reads_manifest_and_sorted_documents() {
    let config = AssemblyConfig::default();
    let source = ModSource::from_dir(fixture("bigger-soldiers"), &config).unwrap();

    assert_eq!(source.info.id().as_str(), "bigger-soldiers");
    assert_eq!(source.info.master(), "xcom1");
    assert_eq!(
        source.info.external_resource_dirs().to_vec(),
        vec!["Resources/BiggerSprites".to_string()]
    );
    let names: Vec<_> = source.documents.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["a_units.ron", "b_armor.ron"]);
}

#[test]
fn directory_without_manifest_keeps_placeholders() {
    let source = ModSource::from_dir(fixture("plain-tweaks"), &AssemblyConfig::default()).unwrap();
    assert_eq!(source.info.id().as_str(), "plain-tweaks");
    assert_eq!(source.info.name(), "plain-tweaks");
    assert!(!source.info.is_master());
    assert_eq!(source.info.master(), "");
    assert_eq!(source.documents.len(), 1);
}

#[test]
fn missing_directory_is_an_error() {
    assert!(ModSource::from_dir(fixture("does-not-exist"), &AssemblyConfig::default()).is_err());
}

#[test]
fn assembles_fixture_mods_in_order() {
    let config = AssemblyConfig::default();
    let mods = read_all(
        &config,
        &["bigger-soldiers", "tftd-aquanauts", "xcom1", "plain-tweaks"],
    );
    let assembly = Assembler::new(config).assemble(mods).unwrap();

    assert_eq!(
        assembly.report.loaded,
        vec![
            ModId::new("xcom1"),
            ModId::new("bigger-soldiers"),
            ModId::new("plain-tweaks"),
        ]
    );
    assert_eq!(assembly.report.skipped, vec![ModId::new("tftd-aquanauts")]);
    assert!(assembly.report.is_clean());

    let store = &assembly.store;
    assert_eq!(store.len(), 2);
    assert!(store.unit("STR_AQUANAUT").is_none());

    let soldier = store.unit("STR_SOLDIER").unwrap();
    assert_eq!(soldier.stand_height(), 24);
    assert_eq!(soldier.kneel_height(), 16);
    assert_eq!(soldier.loftemps(), 3);
    assert_eq!(soldier.armor(), "STR_PERSONAL_ARMOR_UC");
    assert_eq!(soldier.stats().time_units, 50);
    assert_eq!(soldier.race(), "STR_HUMAN");

    let sectoid = store.unit("STR_SECTOID_SOLDIER").unwrap();
    assert_eq!(sectoid.aggression(), 3);
    assert_eq!(sectoid.intelligence(), 2);
    assert_eq!(sectoid.special_ability(), SpecialAbility::ExplodeOnDeath);
}

#[test]
fn other_master_sees_only_its_mods() {
    let config = AssemblyConfig::with_master("xcom2");
    let mut mods = read_all(&config, &["tftd-aquanauts", "plain-tweaks"]);
    let mut tftd = rulecraft_script::ModInfo::new("standard/xcom2");
    tftd.load_str("(isMaster: true)").unwrap();
    mods.push(ModSource::new(tftd, Vec::new()));

    let assembly = Assembler::new(config).assemble(mods).unwrap();
    assert!(assembly.store.unit("STR_AQUANAUT").is_some());
    // plain-tweaks targets a unit xcom2 never defined, so it creates one
    let sectoid = assembly.store.unit("STR_SECTOID_SOLDIER").unwrap();
    assert_eq!(sectoid.race(), "");
    assert_eq!(sectoid.aggression(), 3);
}
