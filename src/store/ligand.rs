use diesel::prelude::*;

use super::{Store, StoreError};
use crate::models::ligand::*;
use crate::schema::{ligand_properties, ligand_property_web_links, ligand_types, ligands};

impl Store {
    pub fn get_or_create_ligand_type(
        &mut self,
        slug: &str,
        name: &str,
    ) -> Result<(LigandType, bool), StoreError> {
        let existing = ligand_types::table
            .filter(ligand_types::slug.eq(slug))
            .select(LigandType::as_select())
            .first(&mut self.conn)
            .optional()?;
        if let Some(existing) = existing {
            return Ok((existing, false));
        }
        let created = diesel::insert_into(ligand_types::table)
            .values(&NewLigandType { slug, name })
            .returning(LigandType::as_returning())
            .get_result(&mut self.conn)?;
        Ok((created, true))
    }

    /// Creates a fresh properties row without looking for an existing one.
    /// Used when neither SMILES nor InChIKey is known yet: such rows must not
    /// be shared between ligands, in case the structures get determined later.
    pub fn create_ligand_properties(
        &mut self,
        new: &NewLigandProperties,
    ) -> Result<LigandProperties, StoreError> {
        Ok(diesel::insert_into(ligand_properties::table)
            .values(new)
            .returning(LigandProperties::as_returning())
            .get_result(&mut self.conn)?)
    }

    pub fn get_or_create_ligand_properties(
        &mut self,
        smiles: Option<&str>,
        inchikey: Option<&str>,
        ligand_type_id: Option<i32>,
    ) -> Result<(LigandProperties, bool), StoreError> {
        let mut query = ligand_properties::table
            .select(LigandProperties::as_select())
            .into_boxed();
        query = match smiles {
            Some(smiles) => query.filter(ligand_properties::smiles.eq(smiles)),
            None => query.filter(ligand_properties::smiles.is_null()),
        };
        query = match inchikey {
            Some(inchikey) => query.filter(ligand_properties::inchikey.eq(inchikey)),
            None => query.filter(ligand_properties::inchikey.is_null()),
        };
        query = match ligand_type_id {
            Some(id) => query.filter(ligand_properties::ligand_type_id.eq(id)),
            None => query.filter(ligand_properties::ligand_type_id.is_null()),
        };
        if let Some(existing) = query.first(&mut self.conn).optional()? {
            return Ok((existing, false));
        }

        let created = self.create_ligand_properties(&NewLigandProperties {
            smiles,
            inchikey,
            ligand_type_id,
        })?;
        Ok((created, true))
    }

    pub fn link_ligand_property_web_link(
        &mut self,
        ligand_property_id: i32,
        web_link_id: i32,
    ) -> Result<(), StoreError> {
        diesel::insert_into(ligand_property_web_links::table)
            .values(&NewLigandPropertyWebLink {
                ligand_property_id,
                web_link_id,
            })
            .on_conflict((
                ligand_property_web_links::ligand_property_id,
                ligand_property_web_links::web_link_id,
            ))
            .do_nothing()
            .execute(&mut self.conn)?;
        Ok(())
    }

    /// Whether a ligand with this identity already exists with undetermined
    /// structure (null SMILES on its properties row).
    pub fn ligand_exists_without_structure(
        &mut self,
        name: &str,
        canonical: bool,
        ambiguous_alias: Option<&str>,
    ) -> Result<bool, StoreError> {
        let base = ligands::table
            .inner_join(ligand_properties::table)
            .filter(ligands::name.eq(name))
            .filter(ligands::canonical.eq(canonical))
            .filter(ligand_properties::smiles.is_null());
        let count: i64 = match ambiguous_alias {
            Some(alias) => base
                .filter(ligands::ambiguous_alias.eq(alias))
                .count()
                .get_result(&mut self.conn)?,
            None => base
                .filter(ligands::ambiguous_alias.is_null())
                .count()
                .get_result(&mut self.conn)?,
        };
        Ok(count > 0)
    }

    pub fn get_or_create_ligand(
        &mut self,
        name: &str,
        canonical: bool,
        ambiguous_alias: Option<&str>,
        properties_id: i32,
    ) -> Result<(Ligand, bool), StoreError> {
        let base = ligands::table
            .filter(ligands::name.eq(name))
            .filter(ligands::canonical.eq(canonical))
            .filter(ligands::properties_id.eq(properties_id));
        let existing = match ambiguous_alias {
            Some(alias) => base
                .filter(ligands::ambiguous_alias.eq(alias))
                .select(Ligand::as_select())
                .first(&mut self.conn)
                .optional()?,
            None => base
                .filter(ligands::ambiguous_alias.is_null())
                .select(Ligand::as_select())
                .first(&mut self.conn)
                .optional()?,
        };
        if let Some(existing) = existing {
            return Ok((existing, false));
        }
        let created = diesel::insert_into(ligands::table)
            .values(&NewLigand {
                name,
                canonical,
                ambiguous_alias,
                properties_id,
            })
            .returning(Ligand::as_returning())
            .get_result(&mut self.conn)?;
        Ok((created, true))
    }

    pub fn count_ligands(&mut self) -> Result<i64, StoreError> {
        Ok(ligands::table.count().get_result(&mut self.conn)?)
    }
}
