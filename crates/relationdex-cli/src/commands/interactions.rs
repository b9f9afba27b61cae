use crate::commands::{print_json, Context};
use crate::util::{read_contact, timestamp_or_now};
use anyhow::Result;
use clap::Args;
use relationdex_core::time::format_timestamp;
use relationdex_core::InteractionKind;
use tracing::{debug, warn};

#[derive(Debug, Args)]
pub struct LogArgs {
    /// Contact JSON file, or `-` for stdin
    pub input: String,
    /// talk (call, message) or see (in person)
    pub kind: InteractionKind,
    #[arg(long, value_name = "WHEN")]
    pub at: Option<String>,
}

pub fn log_interaction(_ctx: &Context<'_>, args: LogArgs) -> Result<()> {
    let mut contact = read_contact(&args.input)?;
    let at = timestamp_or_now(args.at.as_deref())?;

    if contact.record_interaction(args.kind, at) {
        debug!(
            id = %contact.id(),
            kind = %args.kind,
            at = %format_timestamp(at),
            "interaction recorded"
        );
    } else {
        warn!(
            id = %contact.id(),
            kind = %args.kind,
            at = %format_timestamp(at),
            "newer interaction already recorded, keeping it"
        );
    }

    print_json(&contact)
}
