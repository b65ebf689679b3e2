use diesel::prelude::*;

use super::{Store, StoreError};
use crate::models::common::*;
use crate::schema::{
    documentation, news, pages, publication_journals, publications, web_links, web_resources,
};

impl Store {
    pub fn find_web_resource(&mut self, slug: &str) -> Result<Option<WebResource>, StoreError> {
        Ok(web_resources::table
            .filter(web_resources::slug.eq(slug))
            .select(WebResource::as_select())
            .first(&mut self.conn)
            .optional()?)
    }

    pub fn get_or_create_web_resource(
        &mut self,
        slug: &str,
        name: &str,
        url: &str,
    ) -> Result<(WebResource, bool), StoreError> {
        if let Some(existing) = self.find_web_resource(slug)? {
            return Ok((existing, false));
        }
        let created = diesel::insert_into(web_resources::table)
            .values(&NewWebResource { slug, name, url })
            .returning(WebResource::as_returning())
            .get_result(&mut self.conn)?;
        Ok((created, true))
    }

    pub fn find_web_link(
        &mut self,
        web_resource_id: i32,
        index: &str,
    ) -> Result<Option<WebLink>, StoreError> {
        Ok(web_links::table
            .filter(web_links::web_resource_id.eq(web_resource_id))
            .filter(web_links::index.eq(index))
            .select(WebLink::as_select())
            .first(&mut self.conn)
            .optional()?)
    }

    pub fn get_or_create_web_link(
        &mut self,
        web_resource_id: i32,
        index: &str,
    ) -> Result<(WebLink, bool), StoreError> {
        if let Some(existing) = self.find_web_link(web_resource_id, index)? {
            return Ok((existing, false));
        }
        let created = diesel::insert_into(web_links::table)
            .values(&NewWebLink {
                web_resource_id,
                index,
            })
            .returning(WebLink::as_returning())
            .get_result(&mut self.conn)?;
        Ok((created, true))
    }

    pub fn get_or_create_publication_journal(
        &mut self,
        slug: &str,
        name: &str,
    ) -> Result<(PublicationJournal, bool), StoreError> {
        let existing = publication_journals::table
            .filter(publication_journals::slug.eq(slug))
            .select(PublicationJournal::as_select())
            .first(&mut self.conn)
            .optional()?;
        if let Some(existing) = existing {
            return Ok((existing, false));
        }
        let created = diesel::insert_into(publication_journals::table)
            .values(&NewPublicationJournal { slug, name })
            .returning(PublicationJournal::as_returning())
            .get_result(&mut self.conn)?;
        Ok((created, true))
    }

    pub fn get_or_create_publication(
        &mut self,
        new: &NewPublication,
    ) -> Result<(Publication, bool), StoreError> {
        let existing = publications::table
            .filter(publications::title.eq(new.title))
            .filter(publications::authors.eq(new.authors))
            .filter(publications::year.eq(new.year))
            .filter(publications::reference.eq(new.reference))
            .filter(publications::journal_id.eq(new.journal_id))
            .filter(publications::web_link_id.eq(new.web_link_id))
            .select(Publication::as_select())
            .first(&mut self.conn)
            .optional()?;
        if let Some(existing) = existing {
            return Ok((existing, false));
        }
        let created = diesel::insert_into(publications::table)
            .values(new)
            .returning(Publication::as_returning())
            .get_result(&mut self.conn)?;
        Ok((created, true))
    }

    pub fn get_or_create_documentation(
        &mut self,
        title: &str,
        description: &str,
        image: &str,
    ) -> Result<(Documentation, bool), StoreError> {
        let existing = documentation::table
            .filter(documentation::title.eq(title))
            .select(Documentation::as_select())
            .first(&mut self.conn)
            .optional()?;
        if let Some(existing) = existing {
            return Ok((existing, false));
        }
        let created = diesel::insert_into(documentation::table)
            .values(&NewDocumentation {
                title,
                description,
                image,
            })
            .returning(Documentation::as_returning())
            .get_result(&mut self.conn)?;
        Ok((created, true))
    }

    pub fn set_documentation_html(&mut self, id: i32, html: &str) -> Result<(), StoreError> {
        diesel::update(documentation::table.find(id))
            .set(documentation::html.eq(html))
            .execute(&mut self.conn)?;
        Ok(())
    }

    pub fn get_or_create_news(
        &mut self,
        image: &str,
        date: &str,
    ) -> Result<(News, bool), StoreError> {
        let existing = news::table
            .filter(news::image.eq(image))
            .filter(news::date.eq(date))
            .select(News::as_select())
            .first(&mut self.conn)
            .optional()?;
        if let Some(existing) = existing {
            return Ok((existing, false));
        }
        let created = diesel::insert_into(news::table)
            .values(&NewNews { image, date })
            .returning(News::as_returning())
            .get_result(&mut self.conn)?;
        Ok((created, true))
    }

    pub fn set_news_html(&mut self, id: i32, html: &str) -> Result<(), StoreError> {
        diesel::update(news::table.find(id))
            .set(news::html.eq(html))
            .execute(&mut self.conn)?;
        Ok(())
    }

    pub fn get_or_create_page(&mut self, title: &str) -> Result<(Page, bool), StoreError> {
        let existing = pages::table
            .filter(pages::title.eq(title))
            .select(Page::as_select())
            .first(&mut self.conn)
            .optional()?;
        if let Some(existing) = existing {
            return Ok((existing, false));
        }
        let created = diesel::insert_into(pages::table)
            .values(&NewPage { title })
            .returning(Page::as_returning())
            .get_result(&mut self.conn)?;
        Ok((created, true))
    }

    pub fn set_page_html(&mut self, id: i32, html: &str) -> Result<(), StoreError> {
        diesel::update(pages::table.find(id))
            .set(pages::html.eq(html))
            .execute(&mut self.conn)?;
        Ok(())
    }

    pub fn find_documentation(&mut self, title: &str) -> Result<Option<Documentation>, StoreError> {
        Ok(documentation::table
            .filter(documentation::title.eq(title))
            .select(Documentation::as_select())
            .first(&mut self.conn)
            .optional()?)
    }

    pub fn find_page(&mut self, title: &str) -> Result<Option<Page>, StoreError> {
        Ok(pages::table
            .filter(pages::title.eq(title))
            .select(Page::as_select())
            .first(&mut self.conn)
            .optional()?)
    }
}
