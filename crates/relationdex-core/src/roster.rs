use crate::domain::{Contact, ContactId};
use std::collections::btree_map::{BTreeMap, Entry};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RosterError {
    #[error("duplicate contact id: {0}")]
    DuplicateId(ContactId),
}

/// In-memory set of contacts keyed by id. Ids are unique.
#[derive(Debug, Clone, Default)]
pub struct ContactRoster {
    contacts: BTreeMap<ContactId, Contact>,
}

impl ContactRoster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, contact: Contact) -> Result<&Contact, RosterError> {
        match self.contacts.entry(contact.id().clone()) {
            Entry::Occupied(entry) => Err(RosterError::DuplicateId(entry.key().clone())),
            Entry::Vacant(entry) => Ok(entry.insert(contact)),
        }
    }

    pub fn get(&self, id: &ContactId) -> Option<&Contact> {
        self.contacts.get(id)
    }

    pub fn get_mut(&mut self, id: &ContactId) -> Option<&mut Contact> {
        self.contacts.get_mut(id)
    }

    pub fn contains(&self, id: &ContactId) -> bool {
        self.contacts.contains_key(id)
    }

    pub fn remove(&mut self, id: &ContactId) -> Option<Contact> {
        self.contacts.remove(id)
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Contact> {
        self.contacts.values()
    }
}
