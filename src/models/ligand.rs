use diesel::prelude::*;

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = crate::schema::ligand_types)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct LigandType {
    pub id: i32,
    pub slug: String,
    pub name: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::ligand_types)]
pub struct NewLigandType<'a> {
    pub slug: &'a str,
    pub name: &'a str,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = crate::schema::ligand_properties)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct LigandProperties {
    pub id: i32,
    pub smiles: Option<String>,
    pub inchikey: Option<String>,
    pub ligand_type_id: Option<i32>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::ligand_properties)]
pub struct NewLigandProperties<'a> {
    pub smiles: Option<&'a str>,
    pub inchikey: Option<&'a str>,
    pub ligand_type_id: Option<i32>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::ligand_property_web_links)]
pub struct NewLigandPropertyWebLink {
    pub ligand_property_id: i32,
    pub web_link_id: i32,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = crate::schema::ligands)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Ligand {
    pub id: i32,
    pub name: String,
    pub canonical: bool,
    pub ambiguous_alias: Option<String>,
    pub properties_id: i32,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::ligands)]
pub struct NewLigand<'a> {
    pub name: &'a str,
    pub canonical: bool,
    pub ambiguous_alias: Option<&'a str>,
    pub properties_id: i32,
}
