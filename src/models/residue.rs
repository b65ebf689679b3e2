use diesel::prelude::*;

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = crate::schema::residue_numbering_schemes)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ResidueNumberingScheme {
    pub id: i32,
    pub slug: String,
    pub short_name: String,
    pub name: String,
    pub parent_id: Option<i32>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::residue_numbering_schemes)]
pub struct NewResidueNumberingScheme<'a> {
    pub slug: &'a str,
    pub short_name: &'a str,
    pub name: &'a str,
    pub parent_id: Option<i32>,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = crate::schema::residue_generic_numbers)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ResidueGenericNumber {
    pub id: i32,
    pub label: String,
    pub scheme_id: i32,
    pub protein_segment_id: Option<i32>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::residue_generic_numbers)]
pub struct NewResidueGenericNumber<'a> {
    pub label: &'a str,
    pub scheme_id: i32,
    pub protein_segment_id: Option<i32>,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = crate::schema::residues)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Residue {
    pub id: i32,
    pub protein_conformation_id: i32,
    pub sequence_number: i32,
    pub amino_acid: String,
    pub protein_segment_id: Option<i32>,
    pub generic_number_id: Option<i32>,
    pub display_generic_number_id: Option<i32>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::residues)]
pub struct NewResidue<'a> {
    pub protein_conformation_id: i32,
    pub sequence_number: i32,
    pub amino_acid: &'a str,
    pub protein_segment_id: Option<i32>,
    pub generic_number_id: Option<i32>,
    pub display_generic_number_id: Option<i32>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::residue_alternative_generic_numbers)]
pub struct NewResidueAlternativeGenericNumber {
    pub residue_id: i32,
    pub generic_number_id: i32,
}
