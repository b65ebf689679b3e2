use diesel::prelude::*;
use log::warn;

use super::{Store, StoreError};
use crate::models::protein::*;
use crate::schema::{
    protein_anomalies, protein_anomaly_rule_sets, protein_anomaly_rules, protein_anomaly_types,
    protein_conformations, protein_families, protein_fusion_proteins, protein_fusions,
    protein_segments, protein_sequence_types, protein_sources, protein_states, proteins, species,
};

impl Store {
    pub fn get_or_create_protein_family(
        &mut self,
        slug: &str,
        name: &str,
    ) -> Result<(ProteinFamily, bool), StoreError> {
        let existing = protein_families::table
            .filter(protein_families::slug.eq(slug))
            .select(ProteinFamily::as_select())
            .first(&mut self.conn)
            .optional()?;
        if let Some(existing) = existing {
            return Ok((existing, false));
        }
        let created = diesel::insert_into(protein_families::table)
            .values(&NewProteinFamily { slug, name })
            .returning(ProteinFamily::as_returning())
            .get_result(&mut self.conn)?;
        Ok((created, true))
    }

    pub fn get_or_create_species(
        &mut self,
        latin_name: &str,
        common_name: &str,
    ) -> Result<(Species, bool), StoreError> {
        let existing = species::table
            .filter(species::latin_name.eq(latin_name))
            .select(Species::as_select())
            .first(&mut self.conn)
            .optional()?;
        if let Some(existing) = existing {
            return Ok((existing, false));
        }
        let created = diesel::insert_into(species::table)
            .values(&NewSpecies {
                latin_name,
                common_name,
            })
            .returning(Species::as_returning())
            .get_result(&mut self.conn)?;
        Ok((created, true))
    }

    pub fn find_protein_segment(&mut self, slug: &str) -> Result<Option<ProteinSegment>, StoreError> {
        Ok(protein_segments::table
            .filter(protein_segments::slug.eq(slug))
            .select(ProteinSegment::as_select())
            .first(&mut self.conn)
            .optional()?)
    }

    pub fn protein_segment_by_id(&mut self, id: i32) -> Result<ProteinSegment, StoreError> {
        Ok(protein_segments::table
            .find(id)
            .select(ProteinSegment::as_select())
            .first(&mut self.conn)?)
    }

    pub fn get_or_create_protein_segment(
        &mut self,
        slug: &str,
        name: &str,
        category: &str,
    ) -> Result<(ProteinSegment, bool), StoreError> {
        if let Some(existing) = self.find_protein_segment(slug)? {
            return Ok((existing, false));
        }
        let created = diesel::insert_into(protein_segments::table)
            .values(&NewProteinSegment {
                slug,
                name,
                category,
            })
            .returning(ProteinSegment::as_returning())
            .get_result(&mut self.conn)?;
        Ok((created, true))
    }

    pub fn get_or_create_protein_state(
        &mut self,
        slug: &str,
        name: &str,
    ) -> Result<(ProteinState, bool), StoreError> {
        let existing = protein_states::table
            .filter(protein_states::slug.eq(slug))
            .select(ProteinState::as_select())
            .first(&mut self.conn)
            .optional()?;
        if let Some(existing) = existing {
            return Ok((existing, false));
        }
        let created = diesel::insert_into(protein_states::table)
            .values(&NewProteinState { slug, name })
            .returning(ProteinState::as_returning())
            .get_result(&mut self.conn)?;
        Ok((created, true))
    }

    pub fn find_protein_sequence_type(
        &mut self,
        slug: &str,
    ) -> Result<Option<ProteinSequenceType>, StoreError> {
        Ok(protein_sequence_types::table
            .filter(protein_sequence_types::slug.eq(slug))
            .select(ProteinSequenceType::as_select())
            .first(&mut self.conn)
            .optional()?)
    }

    pub fn get_or_create_protein_sequence_type(
        &mut self,
        slug: &str,
        name: &str,
    ) -> Result<(ProteinSequenceType, bool), StoreError> {
        if let Some(existing) = self.find_protein_sequence_type(slug)? {
            return Ok((existing, false));
        }
        let created = diesel::insert_into(protein_sequence_types::table)
            .values(&NewProteinSequenceType { slug, name })
            .returning(ProteinSequenceType::as_returning())
            .get_result(&mut self.conn)?;
        Ok((created, true))
    }

    pub fn get_or_create_protein_source(
        &mut self,
        name: &str,
    ) -> Result<(ProteinSource, bool), StoreError> {
        let existing = protein_sources::table
            .filter(protein_sources::name.eq(name))
            .select(ProteinSource::as_select())
            .first(&mut self.conn)
            .optional()?;
        if let Some(existing) = existing {
            return Ok((existing, false));
        }
        let created = diesel::insert_into(protein_sources::table)
            .values(&NewProteinSource { name })
            .returning(ProteinSource::as_returning())
            .get_result(&mut self.conn)?;
        Ok((created, true))
    }

    pub fn find_protein(&mut self, entry_name: &str) -> Result<Option<Protein>, StoreError> {
        Ok(proteins::table
            .filter(proteins::entry_name.eq(entry_name))
            .select(Protein::as_select())
            .first(&mut self.conn)
            .optional()?)
    }

    pub fn create_protein(&mut self, new: &NewProtein) -> Result<Protein, StoreError> {
        Ok(diesel::insert_into(proteins::table)
            .values(new)
            .returning(Protein::as_returning())
            .get_result(&mut self.conn)?)
    }

    pub fn update_protein_sequence(
        &mut self,
        protein_id: i32,
        sequence: &str,
    ) -> Result<(), StoreError> {
        diesel::update(proteins::table.find(protein_id))
            .set(proteins::sequence.eq(sequence))
            .execute(&mut self.conn)?;
        Ok(())
    }

    pub fn create_protein_conformation(
        &mut self,
        protein_id: i32,
        state_id: i32,
    ) -> Result<ProteinConformation, StoreError> {
        Ok(diesel::insert_into(protein_conformations::table)
            .values(&NewProteinConformation {
                protein_id,
                state_id,
            })
            .returning(ProteinConformation::as_returning())
            .get_result(&mut self.conn)?)
    }

    /// Looks up a protein's conformation in the given state, returning the
    /// conformation together with its protein record.
    pub fn find_protein_conformation(
        &mut self,
        entry_name: &str,
        state_slug: &str,
    ) -> Result<Option<(ProteinConformation, Protein)>, StoreError> {
        Ok(protein_conformations::table
            .inner_join(proteins::table)
            .inner_join(protein_states::table)
            .filter(proteins::entry_name.eq(entry_name))
            .filter(protein_states::slug.eq(state_slug))
            .select((ProteinConformation::as_select(), Protein::as_select()))
            .first(&mut self.conn)
            .optional()?)
    }

    pub fn get_or_create_protein_anomaly_type(
        &mut self,
        slug: &str,
        name: &str,
    ) -> Result<(ProteinAnomalyType, bool), StoreError> {
        let existing = protein_anomaly_types::table
            .filter(protein_anomaly_types::slug.eq(slug))
            .select(ProteinAnomalyType::as_select())
            .first(&mut self.conn)
            .optional()?;
        if let Some(existing) = existing {
            return Ok((existing, false));
        }
        let created = diesel::insert_into(protein_anomaly_types::table)
            .values(&NewProteinAnomalyType { slug, name })
            .returning(ProteinAnomalyType::as_returning())
            .get_result(&mut self.conn)?;
        Ok((created, true))
    }

    pub fn get_or_create_protein_anomaly(
        &mut self,
        anomaly_type_id: i32,
        generic_number_id: i32,
    ) -> Result<(ProteinAnomaly, bool), StoreError> {
        let existing = protein_anomalies::table
            .filter(protein_anomalies::anomaly_type_id.eq(anomaly_type_id))
            .filter(protein_anomalies::generic_number_id.eq(generic_number_id))
            .select(ProteinAnomaly::as_select())
            .first(&mut self.conn)
            .optional()?;
        if let Some(existing) = existing {
            return Ok((existing, false));
        }
        let created = diesel::insert_into(protein_anomalies::table)
            .values(&NewProteinAnomaly {
                anomaly_type_id,
                generic_number_id,
            })
            .returning(ProteinAnomaly::as_returning())
            .get_result(&mut self.conn)?;
        Ok((created, true))
    }

    pub fn create_protein_anomaly_rule_set(
        &mut self,
        protein_anomaly_id: i32,
        exclusive: bool,
    ) -> Result<ProteinAnomalyRuleSet, StoreError> {
        Ok(diesel::insert_into(protein_anomaly_rule_sets::table)
            .values(&NewProteinAnomalyRuleSet {
                protein_anomaly_id,
                exclusive,
            })
            .returning(ProteinAnomalyRuleSet::as_returning())
            .get_result(&mut self.conn)?)
    }

    pub fn create_protein_anomaly_rule(
        &mut self,
        new: &NewProteinAnomalyRule,
    ) -> Result<ProteinAnomalyRule, StoreError> {
        Ok(diesel::insert_into(protein_anomaly_rules::table)
            .values(new)
            .returning(ProteinAnomalyRule::as_returning())
            .get_result(&mut self.conn)?)
    }

    pub fn rules_for_anomaly(
        &mut self,
        protein_anomaly_id: i32,
    ) -> Result<Vec<ProteinAnomalyRule>, StoreError> {
        Ok(protein_anomaly_rules::table
            .inner_join(protein_anomaly_rule_sets::table)
            .filter(protein_anomaly_rule_sets::protein_anomaly_id.eq(protein_anomaly_id))
            .order(protein_anomaly_rules::id.asc())
            .select(ProteinAnomalyRule::as_select())
            .load(&mut self.conn)?)
    }

    pub fn get_or_create_protein_fusion(
        &mut self,
        name: &str,
        sequence: &str,
    ) -> Result<(ProteinFusion, bool), StoreError> {
        let existing = protein_fusions::table
            .filter(protein_fusions::name.eq(name))
            .select(ProteinFusion::as_select())
            .first(&mut self.conn)
            .optional()?;
        if let Some(existing) = existing {
            return Ok((existing, false));
        }
        let created = diesel::insert_into(protein_fusions::table)
            .values(&NewProteinFusion { name, sequence })
            .returning(ProteinFusion::as_returning())
            .get_result(&mut self.conn)?;
        Ok((created, true))
    }

    pub fn create_protein_fusion_protein(
        &mut self,
        new: &NewProteinFusionProtein,
    ) -> Result<ProteinFusionProtein, StoreError> {
        Ok(diesel::insert_into(protein_fusion_proteins::table)
            .values(new)
            .returning(ProteinFusionProtein::as_returning())
            .get_result(&mut self.conn)?)
    }

    pub fn fusion_placements_for_protein(
        &mut self,
        protein_id: i32,
    ) -> Result<Vec<ProteinFusionProtein>, StoreError> {
        Ok(protein_fusion_proteins::table
            .filter(protein_fusion_proteins::protein_id.eq(protein_id))
            .select(ProteinFusionProtein::as_select())
            .load(&mut self.conn)?)
    }

    pub fn proteins_with_sequence_type(
        &mut self,
        sequence_type_slug: &str,
    ) -> Result<Vec<Protein>, StoreError> {
        Ok(proteins::table
            .inner_join(protein_sequence_types::table)
            .filter(protein_sequence_types::slug.eq(sequence_type_slug))
            .select(Protein::as_select())
            .load(&mut self.conn)?)
    }

    /// Deletes every protein tagged with the given sequence type. The
    /// cascade removes conformations, residues, alternative-number links and
    /// fusion placements along with each protein.
    pub fn purge_proteins_by_sequence_type(
        &mut self,
        sequence_type_slug: &str,
    ) -> Result<usize, StoreError> {
        let Some(sequence_type) = self.find_protein_sequence_type(sequence_type_slug)? else {
            warn!(
                "sequence type {} not found: nothing to delete",
                sequence_type_slug
            );
            return Ok(0);
        };
        let deleted = diesel::delete(
            proteins::table.filter(proteins::sequence_type_id.eq(sequence_type.id)),
        )
        .execute(&mut self.conn)?;
        Ok(deleted)
    }
}
