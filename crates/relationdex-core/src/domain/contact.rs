use crate::domain::frequency::FrequencyDays;
use crate::domain::ids::ContactId;
use crate::domain::interaction::InteractionKind;
use crate::domain::name::ContactName;
use crate::error::ValidationError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A tracked person: who they are, when you last talked or met, and how
/// often you would like to.
///
/// `None` for either date means the interaction has never been recorded.
/// The id cannot change once the contact exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    id: ContactId,
    name: ContactName,
    #[serde(default)]
    notes: String,
    #[serde(rename = "lastTalkedDate")]
    last_talked: Option<DateTime<Utc>>,
    #[serde(rename = "lastSeenDate")]
    last_seen: Option<DateTime<Utc>>,
    #[serde(rename = "desiredTalkFrequency")]
    talk_frequency: FrequencyDays,
    #[serde(rename = "desiredSeeFrequency")]
    see_frequency: FrequencyDays,
}

/// Raw input for [`Contact::new`]. A missing id is generated.
#[derive(Debug, Clone, Default)]
pub struct ContactNew {
    pub id: Option<String>,
    pub name: String,
    pub notes: String,
    pub last_talked: Option<DateTime<Utc>>,
    pub last_seen: Option<DateTime<Utc>>,
    pub talk_frequency: FrequencyDays,
    pub see_frequency: FrequencyDays,
}

impl Contact {
    pub fn new(input: ContactNew) -> Result<Self, ValidationError> {
        let id = match input.id {
            Some(raw) => ContactId::new(raw)?,
            None => ContactId::generate(),
        };
        let name = ContactName::new(&input.name)?;

        Ok(Self {
            id,
            name,
            notes: input.notes,
            last_talked: input.last_talked,
            last_seen: input.last_seen,
            talk_frequency: input.talk_frequency,
            see_frequency: input.see_frequency,
        })
    }

    pub fn id(&self) -> &ContactId {
        &self.id
    }

    pub fn name(&self) -> &ContactName {
        &self.name
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn last_talked(&self) -> Option<DateTime<Utc>> {
        self.last_talked
    }

    pub fn last_seen(&self) -> Option<DateTime<Utc>> {
        self.last_seen
    }

    pub fn talk_frequency(&self) -> FrequencyDays {
        self.talk_frequency
    }

    pub fn see_frequency(&self) -> FrequencyDays {
        self.see_frequency
    }

    pub fn last_interaction(&self, kind: InteractionKind) -> Option<DateTime<Utc>> {
        match kind {
            InteractionKind::Talk => self.last_talked,
            InteractionKind::See => self.last_seen,
        }
    }

    pub fn frequency(&self, kind: InteractionKind) -> FrequencyDays {
        match kind {
            InteractionKind::Talk => self.talk_frequency,
            InteractionKind::See => self.see_frequency,
        }
    }

    /// Logs an interaction at `at`. Returns `false` and leaves the record
    /// untouched when a later interaction of the same kind is already known.
    pub fn record_interaction(&mut self, kind: InteractionKind, at: DateTime<Utc>) -> bool {
        let slot = match kind {
            InteractionKind::Talk => &mut self.last_talked,
            InteractionKind::See => &mut self.last_seen,
        };
        match *slot {
            Some(existing) if existing > at => false,
            _ => {
                *slot = Some(at);
                true
            }
        }
    }

    pub fn record_talk(&mut self, at: DateTime<Utc>) -> bool {
        self.record_interaction(InteractionKind::Talk, at)
    }

    pub fn record_seen(&mut self, at: DateTime<Utc>) -> bool {
        self.record_interaction(InteractionKind::See, at)
    }

    pub fn set_frequency(&mut self, kind: InteractionKind, days: FrequencyDays) {
        match kind {
            InteractionKind::Talk => self.talk_frequency = days,
            InteractionKind::See => self.see_frequency = days,
        }
    }

    pub fn set_talk_frequency(&mut self, days: FrequencyDays) {
        self.talk_frequency = days;
    }

    pub fn set_see_frequency(&mut self, days: FrequencyDays) {
        self.see_frequency = days;
    }

    pub fn rename(&mut self, name: &str) -> Result<(), ValidationError> {
        self.name = ContactName::new(name)?;
        Ok(())
    }

    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.notes = notes.into();
    }
}
