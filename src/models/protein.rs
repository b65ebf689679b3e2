use diesel::prelude::*;

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = crate::schema::protein_families)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ProteinFamily {
    pub id: i32,
    pub slug: String,
    pub name: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::protein_families)]
pub struct NewProteinFamily<'a> {
    pub slug: &'a str,
    pub name: &'a str,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = crate::schema::species)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Species {
    pub id: i32,
    pub latin_name: String,
    pub common_name: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::species)]
pub struct NewSpecies<'a> {
    pub latin_name: &'a str,
    pub common_name: &'a str,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = crate::schema::protein_segments)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ProteinSegment {
    pub id: i32,
    pub slug: String,
    pub name: String,
    pub category: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::protein_segments)]
pub struct NewProteinSegment<'a> {
    pub slug: &'a str,
    pub name: &'a str,
    pub category: &'a str,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = crate::schema::protein_states)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ProteinState {
    pub id: i32,
    pub slug: String,
    pub name: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::protein_states)]
pub struct NewProteinState<'a> {
    pub slug: &'a str,
    pub name: &'a str,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = crate::schema::protein_sequence_types)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ProteinSequenceType {
    pub id: i32,
    pub slug: String,
    pub name: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::protein_sequence_types)]
pub struct NewProteinSequenceType<'a> {
    pub slug: &'a str,
    pub name: &'a str,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = crate::schema::protein_sources)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ProteinSource {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::protein_sources)]
pub struct NewProteinSource<'a> {
    pub name: &'a str,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = crate::schema::proteins)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Protein {
    pub id: i32,
    pub entry_name: String,
    pub name: String,
    pub parent_id: Option<i32>,
    pub family_id: Option<i32>,
    pub species_id: Option<i32>,
    pub residue_numbering_scheme_id: Option<i32>,
    pub sequence_type_id: i32,
    pub source_id: i32,
    pub sequence: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::proteins)]
pub struct NewProtein<'a> {
    pub entry_name: &'a str,
    pub name: &'a str,
    pub parent_id: Option<i32>,
    pub family_id: Option<i32>,
    pub species_id: Option<i32>,
    pub residue_numbering_scheme_id: Option<i32>,
    pub sequence_type_id: i32,
    pub source_id: i32,
    pub sequence: &'a str,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = crate::schema::protein_conformations)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ProteinConformation {
    pub id: i32,
    pub protein_id: i32,
    pub state_id: i32,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::protein_conformations)]
pub struct NewProteinConformation {
    pub protein_id: i32,
    pub state_id: i32,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = crate::schema::protein_anomaly_types)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ProteinAnomalyType {
    pub id: i32,
    pub slug: String,
    pub name: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::protein_anomaly_types)]
pub struct NewProteinAnomalyType<'a> {
    pub slug: &'a str,
    pub name: &'a str,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = crate::schema::protein_anomalies)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ProteinAnomaly {
    pub id: i32,
    pub anomaly_type_id: i32,
    pub generic_number_id: i32,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::protein_anomalies)]
pub struct NewProteinAnomaly {
    pub anomaly_type_id: i32,
    pub generic_number_id: i32,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = crate::schema::protein_anomaly_rule_sets)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ProteinAnomalyRuleSet {
    pub id: i32,
    pub protein_anomaly_id: i32,
    pub exclusive: bool,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::protein_anomaly_rule_sets)]
pub struct NewProteinAnomalyRuleSet {
    pub protein_anomaly_id: i32,
    pub exclusive: bool,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = crate::schema::protein_anomaly_rules)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ProteinAnomalyRule {
    pub id: i32,
    pub rule_set_id: i32,
    pub generic_number_id: i32,
    pub amino_acid: String,
    pub negative: bool,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::protein_anomaly_rules)]
pub struct NewProteinAnomalyRule<'a> {
    pub rule_set_id: i32,
    pub generic_number_id: i32,
    pub amino_acid: &'a str,
    pub negative: bool,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = crate::schema::protein_fusions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ProteinFusion {
    pub id: i32,
    pub name: String,
    pub sequence: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::protein_fusions)]
pub struct NewProteinFusion<'a> {
    pub name: &'a str,
    pub sequence: &'a str,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = crate::schema::protein_fusion_proteins)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ProteinFusionProtein {
    pub id: i32,
    pub protein_id: i32,
    pub fusion_id: i32,
    pub segment_before_id: i32,
    pub segment_after_id: i32,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::protein_fusion_proteins)]
pub struct NewProteinFusionProtein {
    pub protein_id: i32,
    pub fusion_id: i32,
    pub segment_before_id: i32,
    pub segment_after_id: i32,
}
