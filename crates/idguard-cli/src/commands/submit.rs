use crate::alert::AlertSink;
use crate::commands::{print_json, Context};
use crate::error::{invalid_input, not_found};
use crate::util::field_value_from_body;
use anyhow::{Context as _, Result};
use clap::{ArgGroup, Args};
use idguard_core::dto::{ButtonStateDto, CandidateCheckDto, SubmissionReportDto};
use idguard_core::{
    ButtonElement, FacebookId, InputElement, SubmissionGuard, SubmitEvent, SubmitEventState,
};
use tracing::debug;

#[derive(Debug, Args)]
#[command(group(ArgGroup::new("input").required(true).args(["value", "body"])))]
pub struct SubmitArgs {
    /// Value typed into the identifier field
    #[arg(long, allow_hyphen_values = true)]
    pub value: Option<String>,
    /// Urlencoded form body, as the browser would post it
    #[arg(long)]
    pub body: Option<String>,
}

pub fn submit(ctx: &Context<'_>, args: SubmitArgs) -> Result<()> {
    let field_id = ctx.config.form.field_id.as_str();
    let raw = match (args.value, args.body) {
        (Some(value), _) => value,
        (None, Some(body)) => field_value_from_body(&body, field_id)
            .ok_or_else(|| not_found(format!("form field {field_id}")))?,
        (None, None) => return Err(invalid_input("either --value or --body is required")),
    };

    let field = InputElement::new(raw.as_str());
    let mut button = ButtonElement::new(ctx.config.form.submit_label.as_str());
    let mut alerts = AlertSink::for_backend(ctx.config.alerts.backend);
    let mut event = SubmitEventState::default();

    let decision =
        SubmissionGuard::new(&field, &mut button, &mut alerts).handle_submit(&mut event);
    debug!(field_id, decision = %decision, "submission handled");

    let parsed = FacebookId::parse(&raw);
    let report = SubmissionReportDto {
        field_id: field_id.to_string(),
        check: CandidateCheckDto::new(&raw, decision, parsed.as_ref().ok()),
        default_prevented: event.default_prevented(),
        button: ButtonStateDto::from_control(&button),
        alert: alerts.shown().last().map(str::to_string),
    };

    if ctx.json {
        print_json(&report)?;
    } else {
        print_human(&report);
    }

    parsed.context("submission blocked")?;
    Ok(())
}

fn print_human(report: &SubmissionReportDto) {
    let state = if report.button.disabled {
        "disabled"
    } else {
        "enabled"
    };
    match report.check.shape {
        Some(shape) => println!("submitted {} ({shape})", report.check.normalized),
        None => println!("blocked {}={:?}", report.field_id, report.check.raw),
    }
    println!("button: {state} {:?}", report.button.label);
}
