use diesel::prelude::*;

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = crate::schema::web_resources)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct WebResource {
    pub id: i32,
    pub slug: String,
    pub name: String,
    pub url: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::web_resources)]
pub struct NewWebResource<'a> {
    pub slug: &'a str,
    pub name: &'a str,
    pub url: &'a str,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = crate::schema::web_links)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct WebLink {
    pub id: i32,
    pub web_resource_id: i32,
    pub index: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::web_links)]
pub struct NewWebLink<'a> {
    pub web_resource_id: i32,
    pub index: &'a str,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = crate::schema::publication_journals)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PublicationJournal {
    pub id: i32,
    pub slug: String,
    pub name: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::publication_journals)]
pub struct NewPublicationJournal<'a> {
    pub slug: &'a str,
    pub name: &'a str,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = crate::schema::publications)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Publication {
    pub id: i32,
    pub title: String,
    pub authors: String,
    pub year: i32,
    pub reference: String,
    pub journal_id: i32,
    pub web_link_id: i32,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::publications)]
pub struct NewPublication<'a> {
    pub title: &'a str,
    pub authors: &'a str,
    pub year: i32,
    pub reference: &'a str,
    pub journal_id: i32,
    pub web_link_id: i32,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = crate::schema::documentation)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Documentation {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub image: String,
    pub html: Option<String>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::documentation)]
pub struct NewDocumentation<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub image: &'a str,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = crate::schema::news)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct News {
    pub id: i32,
    pub image: String,
    pub date: String,
    pub html: Option<String>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::news)]
pub struct NewNews<'a> {
    pub image: &'a str,
    pub date: &'a str,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = crate::schema::pages)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Page {
    pub id: i32,
    pub title: String,
    pub html: Option<String>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::pages)]
pub struct NewPage<'a> {
    pub title: &'a str,
}
