use crate::commands::{print_json, Context};
use crate::util::{format_last, read_contact};
use anyhow::Result;
use clap::Args;
use relationdex_core::InteractionKind;

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Contact JSON file, or `-` for stdin
    pub input: String,
}

pub fn check_contact(ctx: &Context<'_>, args: CheckArgs) -> Result<()> {
    let contact = read_contact(&args.input)?;

    if ctx.json {
        return print_json(&contact);
    }

    println!("{} {}", contact.id(), contact.name());
    for kind in [InteractionKind::Talk, InteractionKind::See] {
        println!(
            "  {}: last {}, every {}",
            kind,
            format_last(contact.last_interaction(kind)),
            contact.frequency(kind)
        );
    }
    if !contact.notes().is_empty() {
        println!("  notes: {}", contact.notes());
    }
    Ok(())
}
