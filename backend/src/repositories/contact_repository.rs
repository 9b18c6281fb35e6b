use diesel::prelude::*;

use crate::{
    error::StoreError,
    models::contact_models::{Contact, NewContact},
    schema::contacts,
    DbPool,
};

/// Storage for contact form submissions.
#[cfg_attr(test, mockall::automock)]
pub trait ContactStore: Send + Sync {
    /// Saves a submission and returns its row id.
    fn insert_contact(&self, new_contact: &NewContact) -> Result<i32, StoreError>;
    /// All submissions, newest first.
    fn list_contacts(&self) -> Result<Vec<Contact>, StoreError>;
}

pub struct ContactRepository {
    pool: DbPool,
}

impl ContactRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl ContactStore for ContactRepository {
    fn insert_contact(&self, new_contact: &NewContact) -> Result<i32, StoreError> {
        let mut conn = self.pool.get()?;
        let id = diesel::insert_into(contacts::table)
            .values(new_contact)
            .returning(contacts::id)
            .get_result::<i32>(&mut conn)?;
        Ok(id)
    }

    fn list_contacts(&self) -> Result<Vec<Contact>, StoreError> {
        let mut conn = self.pool.get()?;
        let rows = contacts::table
            .order((contacts::created_at.desc(), contacts::id.desc()))
            .select(Contact::as_select())
            .load::<Contact>(&mut conn)?;
        Ok(rows)
    }
}
