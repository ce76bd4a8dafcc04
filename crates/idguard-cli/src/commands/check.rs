use crate::commands::{print_json, Context};
use crate::error::invalid_input;
use crate::util::read_stdin_lines;
use anyhow::{Context as _, Result};
use clap::Args;
use idguard_core::dto::CandidateCheckDto;
use idguard_core::{Decision, FacebookId};
use tracing::debug;

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Candidate ids; read one per stdin line when omitted
    #[arg(allow_hyphen_values = true, trailing_var_arg = true)]
    pub candidates: Vec<String>,
}

pub fn check(ctx: &Context<'_>, args: CheckArgs) -> Result<()> {
    let candidates = if args.candidates.is_empty() {
        read_stdin_lines()?
    } else {
        args.candidates
    };
    if candidates.is_empty() {
        return Err(invalid_input("no candidates given"));
    }

    let mut checks = Vec::with_capacity(candidates.len());
    let mut failure = None;
    for raw in &candidates {
        let parsed = FacebookId::parse(raw);
        let decision = Decision::of(&parsed);
        debug!(candidate = ?raw, decision = %decision, "candidate checked");
        checks.push(CandidateCheckDto::new(raw, decision, parsed.as_ref().ok()));
        if let Err(err) = parsed {
            failure.get_or_insert(err);
        }
    }

    if ctx.json {
        print_json(&checks)?;
    } else {
        print_human(&checks);
    }

    if let Some(err) = failure {
        let rejected_count = checks
            .iter()
            .filter(|item| item.decision == Decision::Reject)
            .count();
        return Err(err).with_context(|| {
            format!("{rejected_count} of {} candidates rejected", checks.len())
        });
    }
    Ok(())
}

fn print_human(checks: &[CandidateCheckDto]) {
    for item in checks {
        match item.shape {
            Some(shape) => println!("accept {shape} {}", item.normalized),
            None => println!("reject {:?}", item.raw),
        }
    }
}
