//! Builds one construct: clones the parent protein, then reconstructs its
//! residues under truncations, point mutations and fusion insertions.

use log::{error, info, warn};
use std::collections::{BTreeSet, HashMap};

use super::definition::{ConstructDefinition, DefinitionError, FusionDefinition, Mutation};
use super::definition::{expand_truncations, parse_mutations};
use crate::models::protein::{NewProtein, NewProteinFusionProtein, Protein, ProteinSegment};
use crate::models::residue::{NewResidue, Residue};
use crate::settings::Settings;
use crate::store::{Store, StoreError};
use crate::text::{slugify, strip_tags, title_case};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("Cannot read {}: {source}", .path.display())]
    Io {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot parse {}: {source}", .path.display())]
    Yaml {
        path: std::path::PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Protein not specified for construct")]
    MissingProtein,

    #[error("Name not specified for construct")]
    MissingName,

    #[error("Parent protein {0} not found")]
    ParentNotFound(String),

    #[error("Residue {position} of {entry_name} not found")]
    ResidueNotFound { entry_name: String, position: i32 },

    #[error("Fusion {fusion} endpoint {position} has no segment")]
    FusionOutsideSegment { fusion: String, position: i32 },

    #[error(transparent)]
    Definition(#[from] DefinitionError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// A segment split in two by a fusion insertion, keyed by the original
/// segment id. Residues at or before the start boundary belong to the
/// `_1` segment, residues at or after the end boundary to `_2`.
struct SplitSegment {
    start_position: i32,
    end_position: i32,
    segment_before: ProteinSegment,
    segment_after: ProteinSegment,
}

/// Creates the construct protein, its conformation and its residues from a
/// definition, and returns the stored protein with its derived sequence.
pub fn build_construct(
    store: &mut Store,
    settings: &Settings,
    definition: &ConstructDefinition,
) -> Result<Protein, BuildError> {
    let parent_entry = definition.protein.as_deref().ok_or(BuildError::MissingProtein)?;
    let display_name = definition.name.as_deref().ok_or(BuildError::MissingName)?;

    // Parse the edits before touching the database, so a malformed file
    // leaves no partial construct behind.
    let truncations = expand_truncations(&definition.truncations);
    let mutations = parse_mutations(&definition.mutations)?;

    let (parent_conformation, parent) = store
        .find_protein_conformation(parent_entry, &settings.default_protein_state)?
        .ok_or_else(|| BuildError::ParentNotFound(parent_entry.to_string()))?;

    let (sequence_type, _) =
        store.get_or_create_protein_sequence_type(super::CONSTRUCT_SEQUENCE_TYPE, "Modified")?;
    let (source, _) = store.get_or_create_protein_source("OTHER")?;
    let (state, _) = store.get_or_create_protein_state(
        &settings.default_protein_state,
        &title_case(&settings.default_protein_state),
    )?;

    let entry_name = slugify(&strip_tags(display_name));
    let construct = store.create_protein(&NewProtein {
        entry_name: &entry_name,
        name: display_name,
        parent_id: Some(parent.id),
        family_id: parent.family_id,
        species_id: parent.species_id,
        residue_numbering_scheme_id: parent.residue_numbering_scheme_id,
        sequence_type_id: sequence_type.id,
        source_id: source.id,
        sequence: &parent.sequence,
    })?;
    info!(
        "created construct {} with parent protein {}",
        construct.name, parent.entry_name
    );

    let conformation = store.create_protein_conformation(construct.id, state.id)?;

    let mut split_segments: HashMap<i32, SplitSegment> = HashMap::new();
    for fusion in &definition.fusion_proteins {
        place_fusion(store, construct.id, parent_conformation.id, &parent, fusion, &mut split_segments)?;
    }

    let updated_sequence = create_residues(
        store,
        conformation.id,
        parent_conformation.id,
        &construct,
        &parent,
        &truncations,
        &mutations,
        &split_segments,
    )?;

    store.update_protein_sequence(construct.id, &updated_sequence)?;
    Ok(Protein {
        sequence: updated_sequence,
        ..construct
    })
}

/// Records a fusion insertion. When both endpoints fall in the same parent
/// segment (the usual case), that segment is split into `_1`/`_2`
/// sub-segments and the boundary is remembered for the residue loop. A
/// fusion spanning two segments is only recorded structurally.
fn place_fusion(
    store: &mut Store,
    construct_id: i32,
    parent_conformation_id: i32,
    parent: &Protein,
    fusion: &FusionDefinition,
    split_segments: &mut HashMap<i32, SplitSegment>,
) -> Result<(), BuildError> {
    let [start_position, end_position] = fusion.positions;
    let start = residue_at(store, parent_conformation_id, parent, start_position)?;
    let end = residue_at(store, parent_conformation_id, parent, end_position)?;

    let start_segment_id = start.protein_segment_id.ok_or_else(|| {
        BuildError::FusionOutsideSegment {
            fusion: fusion.name.clone(),
            position: start_position,
        }
    })?;
    let end_segment_id = end.protein_segment_id.ok_or_else(|| {
        BuildError::FusionOutsideSegment {
            fusion: fusion.name.clone(),
            position: end_position,
        }
    })?;

    let (segment_before, segment_after) = if start_segment_id == end_segment_id {
        let segment = store.protein_segment_by_id(start_segment_id)?;
        let (before, _) = store.get_or_create_protein_segment(
            &format!("{}_1", segment.slug),
            &segment.name,
            &segment.category,
        )?;
        let (after, _) = store.get_or_create_protein_segment(
            &format!("{}_2", segment.slug),
            &segment.name,
            &segment.category,
        )?;
        let previous = split_segments.insert(
            segment.id,
            SplitSegment {
                start_position,
                end_position,
                segment_before: before.clone(),
                segment_after: after.clone(),
            },
        );
        if let Some(previous) = previous {
            // One split per segment; the boundary of the later fusion wins.
            warn!(
                "segment {} was already split at {}..{}; fusion {} overrides the boundary",
                segment.slug, previous.start_position, previous.end_position, fusion.name
            );
        }
        (before, after)
    } else {
        warn!(
            "fusion {} spans two segments in {}; residues keep their original segments",
            fusion.name, parent.entry_name
        );
        (
            store.protein_segment_by_id(start_segment_id)?,
            store.protein_segment_by_id(end_segment_id)?,
        )
    };

    let (record, _) = store.get_or_create_protein_fusion(&fusion.name, &fusion.sequence)?;
    store.create_protein_fusion_protein(&NewProteinFusionProtein {
        protein_id: construct_id,
        fusion_id: record.id,
        segment_before_id: segment_before.id,
        segment_after_id: segment_after.id,
    })?;
    Ok(())
}

fn residue_at(
    store: &mut Store,
    conformation_id: i32,
    parent: &Protein,
    position: i32,
) -> Result<Residue, BuildError> {
    store
        .find_residue(conformation_id, position)?
        .ok_or_else(|| BuildError::ResidueNotFound {
            entry_name: parent.entry_name.clone(),
            position,
        })
}

/// Walks the parent residues in sequence order, applying truncations,
/// segment splits and mutations, and returns the derived sequence.
#[allow(clippy::too_many_arguments)]
fn create_residues(
    store: &mut Store,
    conformation_id: i32,
    parent_conformation_id: i32,
    construct: &Protein,
    parent: &Protein,
    truncations: &BTreeSet<i32>,
    mutations: &HashMap<i32, Mutation>,
    split_segments: &HashMap<i32, SplitSegment>,
) -> Result<String, BuildError> {
    let parent_residues = store.residues_for_conformation(parent_conformation_id)?;

    let mut updated_sequence = String::with_capacity(parent.sequence.len());
    for parent_residue in &parent_residues {
        if truncations.contains(&parent_residue.sequence_number) {
            continue;
        }

        let segment_id = resolve_segment(parent_residue, split_segments);
        let amino_acid = resolve_amino_acid(parent_residue, mutations, construct, parent);
        updated_sequence.push_str(amino_acid);

        let residue = store.create_residue(&NewResidue {
            protein_conformation_id: conformation_id,
            sequence_number: parent_residue.sequence_number,
            amino_acid,
            protein_segment_id: segment_id,
            generic_number_id: parent_residue.generic_number_id,
            display_generic_number_id: parent_residue.display_generic_number_id,
        })?;

        // Alternative generic numbers are an additive copy from the parent.
        for generic_number_id in store.alternative_generic_number_ids(parent_residue.id)? {
            store.add_alternative_generic_number(residue.id, generic_number_id)?;
        }
    }
    Ok(updated_sequence)
}

fn resolve_segment(
    residue: &Residue,
    split_segments: &HashMap<i32, SplitSegment>,
) -> Option<i32> {
    let original = residue.protein_segment_id?;
    match split_segments.get(&original) {
        Some(split) => {
            if residue.sequence_number <= split.start_position {
                Some(split.segment_before.id)
            } else if residue.sequence_number >= split.end_position {
                Some(split.segment_after.id)
            } else {
                // Logically replaced by the fusion insertion.
                None
            }
        }
        None => Some(original),
    }
}

/// Applies a mutation only when its declared wild type matches the parent's
/// actual residue; a mismatch keeps the parent residue and is logged.
fn resolve_amino_acid<'a>(
    residue: &'a Residue,
    mutations: &'a HashMap<i32, Mutation>,
    construct: &Protein,
    parent: &Protein,
) -> &'a str {
    match mutations.get(&residue.sequence_number) {
        Some(mutation) if mutation.wild_type == residue.amino_acid => &mutation.mutant,
        Some(mutation) => {
            error!(
                "mutation {} in construct {} does not match wild-type sequence of {}",
                mutation.token, construct.name, parent.entry_name
            );
            &residue.amino_acid
        }
        None => &residue.amino_acid,
    }
}
