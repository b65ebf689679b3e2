use diesel::prelude::*;

use super::{Store, StoreError};
use crate::models::residue::*;
use crate::schema::{
    residue_alternative_generic_numbers, residue_generic_numbers, residue_numbering_schemes,
    residues,
};

impl Store {
    pub fn find_numbering_scheme(
        &mut self,
        slug: &str,
    ) -> Result<Option<ResidueNumberingScheme>, StoreError> {
        Ok(residue_numbering_schemes::table
            .filter(residue_numbering_schemes::slug.eq(slug))
            .select(ResidueNumberingScheme::as_select())
            .first(&mut self.conn)
            .optional()?)
    }

    pub fn get_or_create_numbering_scheme(
        &mut self,
        slug: &str,
        short_name: &str,
        name: &str,
        parent_id: Option<i32>,
    ) -> Result<(ResidueNumberingScheme, bool), StoreError> {
        if let Some(existing) = self.find_numbering_scheme(slug)? {
            return Ok((existing, false));
        }
        let created = diesel::insert_into(residue_numbering_schemes::table)
            .values(&NewResidueNumberingScheme {
                slug,
                short_name,
                name,
                parent_id,
            })
            .returning(ResidueNumberingScheme::as_returning())
            .get_result(&mut self.conn)?;
        Ok((created, true))
    }

    pub fn find_generic_number(
        &mut self,
        label: &str,
        scheme_id: i32,
    ) -> Result<Option<ResidueGenericNumber>, StoreError> {
        Ok(residue_generic_numbers::table
            .filter(residue_generic_numbers::label.eq(label))
            .filter(residue_generic_numbers::scheme_id.eq(scheme_id))
            .select(ResidueGenericNumber::as_select())
            .first(&mut self.conn)
            .optional()?)
    }

    pub fn get_or_create_generic_number(
        &mut self,
        label: &str,
        scheme_id: i32,
        protein_segment_id: Option<i32>,
    ) -> Result<(ResidueGenericNumber, bool), StoreError> {
        if let Some(existing) = self.find_generic_number(label, scheme_id)? {
            return Ok((existing, false));
        }
        let created = diesel::insert_into(residue_generic_numbers::table)
            .values(&NewResidueGenericNumber {
                label,
                scheme_id,
                protein_segment_id,
            })
            .returning(ResidueGenericNumber::as_returning())
            .get_result(&mut self.conn)?;
        Ok((created, true))
    }

    pub fn create_residue(&mut self, new: &NewResidue) -> Result<Residue, StoreError> {
        Ok(diesel::insert_into(residues::table)
            .values(new)
            .returning(Residue::as_returning())
            .get_result(&mut self.conn)?)
    }

    pub fn find_residue(
        &mut self,
        protein_conformation_id: i32,
        sequence_number: i32,
    ) -> Result<Option<Residue>, StoreError> {
        Ok(residues::table
            .filter(residues::protein_conformation_id.eq(protein_conformation_id))
            .filter(residues::sequence_number.eq(sequence_number))
            .select(Residue::as_select())
            .first(&mut self.conn)
            .optional()?)
    }

    /// All residues of a conformation in ascending sequence order.
    pub fn residues_for_conformation(
        &mut self,
        protein_conformation_id: i32,
    ) -> Result<Vec<Residue>, StoreError> {
        Ok(residues::table
            .filter(residues::protein_conformation_id.eq(protein_conformation_id))
            .order(residues::sequence_number.asc())
            .select(Residue::as_select())
            .load(&mut self.conn)?)
    }

    pub fn alternative_generic_number_ids(
        &mut self,
        residue_id: i32,
    ) -> Result<Vec<i32>, StoreError> {
        Ok(residue_alternative_generic_numbers::table
            .filter(residue_alternative_generic_numbers::residue_id.eq(residue_id))
            .select(residue_alternative_generic_numbers::generic_number_id)
            .load(&mut self.conn)?)
    }

    /// Attaches an alternative generic number to a residue. Purely additive;
    /// an already-attached number is left as is.
    pub fn add_alternative_generic_number(
        &mut self,
        residue_id: i32,
        generic_number_id: i32,
    ) -> Result<(), StoreError> {
        diesel::insert_into(residue_alternative_generic_numbers::table)
            .values(&NewResidueAlternativeGenericNumber {
                residue_id,
                generic_number_id,
            })
            .on_conflict((
                residue_alternative_generic_numbers::residue_id,
                residue_alternative_generic_numbers::generic_number_id,
            ))
            .do_nothing()
            .execute(&mut self.conn)?;
        Ok(())
    }
}
