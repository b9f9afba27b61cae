use crate::commands::{print_json, Context};
use crate::error::invalid_input;
use crate::util::read_contact;
use anyhow::Result;
use clap::Args;
use relationdex_core::time::parse_timestamp;
use relationdex_core::{Contact, ContactNew, FrequencyDays};
use tracing::debug;

#[derive(Debug, Args)]
pub struct NewArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub id: Option<String>,
    #[arg(long, default_value = "")]
    pub notes: String,
    #[arg(long, value_name = "DAYS")]
    pub talk_every: Option<FrequencyDays>,
    #[arg(long, value_name = "DAYS")]
    pub see_every: Option<FrequencyDays>,
    #[arg(long, value_name = "WHEN")]
    pub last_talked: Option<String>,
    #[arg(long, value_name = "WHEN")]
    pub last_seen: Option<String>,
}

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Contact JSON file, or `-` for stdin
    pub input: String,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub notes: Option<String>,
    #[arg(long, value_name = "DAYS")]
    pub talk_every: Option<FrequencyDays>,
    #[arg(long, value_name = "DAYS")]
    pub see_every: Option<FrequencyDays>,
}

pub fn new_contact(ctx: &Context<'_>, args: NewArgs) -> Result<()> {
    let last_talked = match args.last_talked {
        Some(value) => Some(parse_timestamp(&value)?),
        None => None,
    };
    let last_seen = match args.last_seen {
        Some(value) => Some(parse_timestamp(&value)?),
        None => None,
    };

    let contact = Contact::new(ContactNew {
        id: args.id,
        name: args.name,
        notes: args.notes,
        last_talked,
        last_seen,
        talk_frequency: args
            .talk_every
            .unwrap_or(ctx.config.default_talk_frequency),
        see_frequency: args.see_every.unwrap_or(ctx.config.default_see_frequency),
    })?;

    debug!(id = %contact.id(), "contact created");
    print_json(&contact)
}

pub fn edit_contact(_ctx: &Context<'_>, args: EditArgs) -> Result<()> {
    if args.name.is_none()
        && args.notes.is_none()
        && args.talk_every.is_none()
        && args.see_every.is_none()
    {
        return Err(invalid_input("no updates provided"));
    }

    let mut contact = read_contact(&args.input)?;
    if let Some(name) = args.name {
        contact.rename(&name)?;
    }
    if let Some(notes) = args.notes {
        contact.set_notes(notes);
    }
    if let Some(days) = args.talk_every {
        contact.set_talk_frequency(days);
    }
    if let Some(days) = args.see_every {
        contact.set_see_frequency(days);
    }

    debug!(id = %contact.id(), "contact updated");
    print_json(&contact)
}
