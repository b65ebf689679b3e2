//! End-to-end tests for the construct builder against an in-memory database.

use std::fs;
use std::path::Path;

use proteindb::constructs;
use proteindb::constructs::builder::{self, BuildError};
use proteindb::constructs::definition::ConstructDefinition;
use proteindb::models::protein::{NewProtein, Protein};
use proteindb::models::residue::NewResidue;
use proteindb::settings::Settings;
use proteindb::store::Store;

fn test_settings(data_dir: &Path) -> Settings {
    Settings {
        database_url: ":memory:".to_string(),
        data_dir: data_dir.to_path_buf(),
        default_protein_state: "inactive".to_string(),
        default_numbering_scheme: "generic".to_string(),
    }
}

/// Seeds a wild-type parent protein with one residue per sequence letter.
/// `segments` assigns inclusive position ranges to segment slugs. Every
/// residue gets a generic number and one alternative generic number in a
/// second scheme.
fn seed_parent(
    store: &mut Store,
    entry_name: &str,
    sequence: &str,
    segments: &[(&str, i32, i32)],
) -> Protein {
    let (family, _) = store.get_or_create_protein_family("class-a", "Class A").unwrap();
    let (species, _) = store.get_or_create_species("Homo sapiens", "Human").unwrap();
    let (scheme, _) = store
        .get_or_create_numbering_scheme("generic", "GEN", "Generic residue numbering", None)
        .unwrap();
    let (alt_scheme, _) = store
        .get_or_create_numbering_scheme("alt", "ALT", "Alternative numbering", Some(scheme.id))
        .unwrap();
    let (sequence_type, _) = store
        .get_or_create_protein_sequence_type("wt", "Wild-type")
        .unwrap();
    let (source, _) = store.get_or_create_protein_source("SWISSPROT").unwrap();
    let (state, _) = store.get_or_create_protein_state("inactive", "Inactive").unwrap();

    let parent = store
        .create_protein(&NewProtein {
            entry_name,
            name: entry_name,
            parent_id: None,
            family_id: Some(family.id),
            species_id: Some(species.id),
            residue_numbering_scheme_id: Some(scheme.id),
            sequence_type_id: sequence_type.id,
            source_id: source.id,
            sequence,
        })
        .unwrap();
    let conformation = store
        .create_protein_conformation(parent.id, state.id)
        .unwrap();

    for (index, amino_acid) in sequence.chars().enumerate() {
        let position = index as i32 + 1;
        let segment_slug = segments
            .iter()
            .find(|(_, start, end)| position >= *start && position <= *end)
            .map(|(slug, _, _)| *slug)
            .expect("position not covered by a segment");
        let (segment, _) = store
            .get_or_create_protein_segment(segment_slug, segment_slug, "helix")
            .unwrap();
        let (generic_number, _) = store
            .get_or_create_generic_number(&format!("g{}", position), scheme.id, Some(segment.id))
            .unwrap();
        let (alternative, _) = store
            .get_or_create_generic_number(&format!("a{}", position), alt_scheme.id, Some(segment.id))
            .unwrap();
        let residue = store
            .create_residue(&NewResidue {
                protein_conformation_id: conformation.id,
                sequence_number: position,
                amino_acid: &amino_acid.to_string(),
                protein_segment_id: Some(segment.id),
                generic_number_id: Some(generic_number.id),
                display_generic_number_id: Some(generic_number.id),
            })
            .unwrap();
        store
            .add_alternative_generic_number(residue.id, alternative.id)
            .unwrap();
    }
    parent
}

fn definition(protein: &str, name: &str) -> ConstructDefinition {
    ConstructDefinition {
        protein: Some(protein.to_string()),
        name: Some(name.to_string()),
        truncations: Vec::new(),
        mutations: Vec::new(),
        fusion_proteins: Vec::new(),
    }
}

#[test]
fn truncation_and_verified_mutation() {
    let dir = tempfile::tempdir().unwrap();
    let settings = test_settings(dir.path());
    let mut store = Store::open_in_memory().unwrap();
    let parent = seed_parent(&mut store, "adrb2_human", "MAVQK", &[("TM1", 1, 5)]);

    let mut def = definition("adrb2_human", "Beta-2 test construct");
    def.truncations = vec![[1, 1]];
    def.mutations = vec!["A2V".to_string()];
    let construct = builder::build_construct(&mut store, &settings, &def).unwrap();

    // position 1 dropped, position 2 mutated A -> V
    assert_eq!(construct.sequence, "VVQK");
    assert_eq!(construct.entry_name, "beta-2-test-construct");
    assert_eq!(construct.parent_id, Some(parent.id));
    assert_eq!(construct.family_id, parent.family_id);
    assert_eq!(construct.species_id, parent.species_id);
    assert_eq!(
        construct.residue_numbering_scheme_id,
        parent.residue_numbering_scheme_id
    );

    let stored = store.find_protein("beta-2-test-construct").unwrap().unwrap();
    assert_eq!(stored.sequence, "VVQK");

    let (conformation, _) = store
        .find_protein_conformation("beta-2-test-construct", "inactive")
        .unwrap()
        .unwrap();
    let residues = store.residues_for_conformation(conformation.id).unwrap();

    // the sequence string and the residue set never diverge
    let concatenated: String = residues.iter().map(|r| r.amino_acid.as_str()).collect();
    assert_eq!(concatenated, stored.sequence);
    assert_eq!(residues.len(), stored.sequence.len());

    let positions: Vec<i32> = residues.iter().map(|r| r.sequence_number).collect();
    assert_eq!(positions, vec![2, 3, 4, 5]);
    assert_eq!(residues[0].amino_acid, "V");

    // generic numbers carried over from the parent, alternatives copied
    let (parent_conformation, _) = store
        .find_protein_conformation("adrb2_human", "inactive")
        .unwrap()
        .unwrap();
    let parent_residues = store
        .residues_for_conformation(parent_conformation.id)
        .unwrap();
    let parent_r3 = parent_residues.iter().find(|r| r.sequence_number == 3).unwrap();
    let construct_r3 = residues.iter().find(|r| r.sequence_number == 3).unwrap();
    assert_eq!(construct_r3.generic_number_id, parent_r3.generic_number_id);
    assert_eq!(
        store.alternative_generic_number_ids(construct_r3.id).unwrap(),
        store.alternative_generic_number_ids(parent_r3.id).unwrap()
    );
}

#[test]
fn mutation_mismatch_keeps_parent_residue() {
    let dir = tempfile::tempdir().unwrap();
    let settings = test_settings(dir.path());
    let mut store = Store::open_in_memory().unwrap();
    seed_parent(&mut store, "adrb1_human", "MGVQK", &[("TM1", 1, 5)]);

    let mut def = definition("adrb1_human", "Mismatch construct");
    def.mutations = vec!["A2V".to_string()];
    let construct = builder::build_construct(&mut store, &settings, &def).unwrap();

    // declared wild type A does not match the actual G: mutation dropped
    assert_eq!(construct.sequence, "MGVQK");
}

#[test]
fn missing_parent_creates_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let settings = test_settings(dir.path());
    let mut store = Store::open_in_memory().unwrap();

    let def = definition("nosuch_human", "Ghost construct");
    let result = builder::build_construct(&mut store, &settings, &def);
    assert!(matches!(result, Err(BuildError::ParentNotFound(_))));
    assert!(store.find_protein("ghost-construct").unwrap().is_none());
}

#[test]
fn fusion_splits_single_segment() {
    let dir = tempfile::tempdir().unwrap();
    let settings = test_settings(dir.path());
    let mut store = Store::open_in_memory().unwrap();
    seed_parent(
        &mut store,
        "adrb2_human",
        "MAVQKLWSTP",
        &[("TM1", 1, 3), ("ICL3", 4, 9), ("TM2", 10, 10)],
    );

    let mut def = definition("adrb2_human", "Fusion construct");
    def.fusion_proteins = vec![proteindb::constructs::definition::FusionDefinition {
        name: "T4 Lysozyme".to_string(),
        sequence: "NIFEMLRIDEG".to_string(),
        positions: [5, 8],
    }];
    let construct = builder::build_construct(&mut store, &settings, &def).unwrap();

    // the fusion sequence itself is not materialized as residues
    assert_eq!(construct.sequence, "MAVQKLWSTP");

    let icl3_1 = store.find_protein_segment("ICL3_1").unwrap().unwrap();
    let icl3_2 = store.find_protein_segment("ICL3_2").unwrap().unwrap();
    let tm1 = store.find_protein_segment("TM1").unwrap().unwrap();
    let tm2 = store.find_protein_segment("TM2").unwrap().unwrap();
    assert_eq!(icl3_1.name, "ICL3");
    assert_eq!(icl3_1.category, "helix");

    let (conformation, _) = store
        .find_protein_conformation("fusion-construct", "inactive")
        .unwrap()
        .unwrap();
    let residues = store.residues_for_conformation(conformation.id).unwrap();
    let segment_of = |position: i32| {
        residues
            .iter()
            .find(|r| r.sequence_number == position)
            .unwrap()
            .protein_segment_id
    };

    assert_eq!(segment_of(1), Some(tm1.id));
    assert_eq!(segment_of(3), Some(tm1.id));
    // at or before the fusion start
    assert_eq!(segment_of(4), Some(icl3_1.id));
    assert_eq!(segment_of(5), Some(icl3_1.id));
    // strictly inside the fusion span: replaced by the insertion
    assert_eq!(segment_of(6), None);
    assert_eq!(segment_of(7), None);
    // at or after the fusion end
    assert_eq!(segment_of(8), Some(icl3_2.id));
    assert_eq!(segment_of(9), Some(icl3_2.id));
    assert_eq!(segment_of(10), Some(tm2.id));

    let placements = store.fusion_placements_for_protein(construct.id).unwrap();
    assert_eq!(placements.len(), 1);
    assert_eq!(placements[0].segment_before_id, icl3_1.id);
    assert_eq!(placements[0].segment_after_id, icl3_2.id);

    let (fusion, created) = store
        .get_or_create_protein_fusion("T4 Lysozyme", "NIFEMLRIDEG")
        .unwrap();
    assert!(!created);
    assert_eq!(fusion.sequence, "NIFEMLRIDEG");
}

#[test]
fn fusion_spanning_two_segments_is_recorded_without_split() {
    let dir = tempfile::tempdir().unwrap();
    let settings = test_settings(dir.path());
    let mut store = Store::open_in_memory().unwrap();
    seed_parent(
        &mut store,
        "adrb2_human",
        "MAVQKLWSTP",
        &[("TM1", 1, 5), ("TM2", 6, 10)],
    );

    let mut def = definition("adrb2_human", "Spanning fusion construct");
    def.fusion_proteins = vec![proteindb::constructs::definition::FusionDefinition {
        name: "T4 Lysozyme".to_string(),
        sequence: "NIFEMLRIDEG".to_string(),
        positions: [3, 8],
    }];
    let construct = builder::build_construct(&mut store, &settings, &def).unwrap();

    // no split segments, residues keep their original assignment
    assert!(store.find_protein_segment("TM1_1").unwrap().is_none());
    assert!(store.find_protein_segment("TM2_1").unwrap().is_none());

    let tm1 = store.find_protein_segment("TM1").unwrap().unwrap();
    let tm2 = store.find_protein_segment("TM2").unwrap().unwrap();
    let (conformation, _) = store
        .find_protein_conformation("spanning-fusion-construct", "inactive")
        .unwrap()
        .unwrap();
    let residues = store.residues_for_conformation(conformation.id).unwrap();
    assert!(residues
        .iter()
        .filter(|r| r.sequence_number <= 5)
        .all(|r| r.protein_segment_id == Some(tm1.id)));
    assert!(residues
        .iter()
        .filter(|r| r.sequence_number > 5)
        .all(|r| r.protein_segment_id == Some(tm2.id)));

    // the placement is still recorded, anchored on the endpoint segments
    let placements = store.fusion_placements_for_protein(construct.id).unwrap();
    assert_eq!(placements.len(), 1);
    assert_eq!(placements[0].segment_before_id, tm1.id);
    assert_eq!(placements[0].segment_after_id, tm2.id);
}

fn write_construct_file(data_dir: &Path, filename: &str, contents: &str) {
    let dir = data_dir.join("structure_data").join("constructs");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(filename), contents).unwrap();
}

#[test]
fn job_processes_each_file_independently() {
    let dir = tempfile::tempdir().unwrap();
    let settings = test_settings(dir.path());
    let mut store = Store::open_in_memory().unwrap();
    seed_parent(&mut store, "adrb2_human", "MAVQK", &[("TM1", 1, 5)]);

    write_construct_file(
        dir.path(),
        "good.yaml",
        "protein: adrb2_human\nname: Good construct\ntruncations:\n- [1, 1]\nmutations:\n- A2V\n",
    );
    write_construct_file(dir.path(), "no_protein.yaml", "name: Orphan construct\n");
    write_construct_file(
        dir.path(),
        "ghost.yaml",
        "protein: nosuch_human\nname: Ghost construct\n",
    );

    let report = constructs::run(&mut store, &settings, &[], false);
    assert_eq!(report.created(), 1);
    assert_eq!(report.skipped(), 1);
    assert_eq!(report.failed(), 1);

    let built = store.find_protein("good-construct").unwrap().unwrap();
    assert_eq!(built.sequence, "VVQK");
}

#[test]
fn filename_filter_restricts_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let settings = test_settings(dir.path());
    let mut store = Store::open_in_memory().unwrap();
    seed_parent(&mut store, "adrb2_human", "MAVQK", &[("TM1", 1, 5)]);

    write_construct_file(
        dir.path(),
        "first.yaml",
        "protein: adrb2_human\nname: First construct\n",
    );
    write_construct_file(
        dir.path(),
        "second.yaml",
        "protein: adrb2_human\nname: Second construct\n",
    );

    let report = constructs::run(&mut store, &settings, &["first.yaml".to_string()], false);
    assert_eq!(report.created(), 1);
    assert!(store.find_protein("first-construct").unwrap().is_some());
    assert!(store.find_protein("second-construct").unwrap().is_none());
}

#[test]
fn purge_rebuilds_constructs_with_fresh_identifiers() {
    let dir = tempfile::tempdir().unwrap();
    let settings = test_settings(dir.path());
    let mut store = Store::open_in_memory().unwrap();
    seed_parent(&mut store, "adrb2_human", "MAVQK", &[("TM1", 1, 5)]);

    write_construct_file(
        dir.path(),
        "good.yaml",
        "protein: adrb2_human\nname: Good construct\n",
    );

    let first = constructs::run(&mut store, &settings, &[], false);
    assert_eq!(first.created(), 1);
    let original = store.find_protein("good-construct").unwrap().unwrap();

    // re-running without purge cannot recreate the same entry name
    let second = constructs::run(&mut store, &settings, &[], false);
    assert_eq!(second.created(), 0);
    assert_eq!(second.failed(), 1);
    assert_eq!(
        store.find_protein("good-construct").unwrap().unwrap().id,
        original.id
    );

    // purging deletes all constructs, the import then recreates them
    let third = constructs::run(&mut store, &settings, &[], true);
    assert_eq!(third.created(), 1);
    let rebuilt = store.find_protein("good-construct").unwrap().unwrap();
    assert_ne!(rebuilt.id, original.id);

    let constructs_left = store.proteins_with_sequence_type("mod").unwrap();
    assert_eq!(constructs_left.len(), 1);
    // the wild-type parent is untouched by the purge
    assert!(store.find_protein("adrb2_human").unwrap().is_some());
}
