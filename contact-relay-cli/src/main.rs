//! contact-relay command-line entry point
//!
//! Fills the contact form from flags, submits it once to every configured
//! destination and prints the result. When every destination failed, the
//! `mailto:` fallback is printed so the message can still be sent by hand.
//!
//! Destinations come from the environment (`CONTACT_RELAY_FORM_IDS`,
//! `CONTACT_RELAY_EMAILS`, ...); any flag given here overrides its variable.

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use clap::builder::{PossibleValue, PossibleValuesParser, TypedValueParser};
use contact_relay_core::config::{KEY_EMAILS, KEY_ENDPOINT_BASE, KEY_ENV, KEY_FORM_IDS};
use contact_relay_core::types::{DispatchOutcome, InquiryCategory};
use contact_relay_core::{EnvSource, FormController, FormEffect, FormMessage, FormState};
use serde::Serialize;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// contact-relay - deliver a contact form to several form endpoints at once
#[derive(Parser)]
#[command(name = "contact-relay", version)]
#[command(about = "Submit a contact form to every configured destination", long_about = None)]
struct Cli {
    /// Sender email address
    #[arg(long)]
    email: String,

    /// Inquiry category
    #[arg(long, default_value = "hospital", value_parser = category_parser())]
    category: InquiryCategory,

    /// Message text
    #[arg(long, default_value = "")]
    message: String,

    /// Comma-separated endpoint identifiers (overrides CONTACT_RELAY_FORM_IDS)
    #[arg(long)]
    form_ids: Option<String>,

    /// Comma-separated display addresses (overrides CONTACT_RELAY_EMAILS)
    #[arg(long)]
    emails: Option<String>,

    /// Execution mode; `development` prints configuration diagnostics
    #[arg(long)]
    env: Option<String>,

    /// Base URL endpoint identifiers are appended to
    #[arg(long)]
    endpoint_base: Option<String>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

/// `--category` accepts the wire values, each documented with its menu label.
fn category_parser() -> impl TypedValueParser<Value = InquiryCategory> {
    PossibleValuesParser::new(
        InquiryCategory::ALL.map(|c| PossibleValue::new(c.as_str()).help(c.menu_label())),
    )
    .map(|value| value.parse::<InquiryCategory>().unwrap_or_default())
}

impl Cli {
    /// Environment snapshot with command-line overrides applied.
    fn config_source(&self) -> EnvSource {
        [
            (KEY_FORM_IDS, &self.form_ids),
            (KEY_EMAILS, &self.emails),
            (KEY_ENV, &self.env),
            (KEY_ENDPOINT_BASE, &self.endpoint_base),
        ]
        .into_iter()
        .fold(EnvSource::capture(), |source, (key, value)| match value {
            Some(value) => source.with(key, value.clone()),
            None => source,
        })
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Report<'a> {
    state: FormState,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    outcome: Option<&'a DispatchOutcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    fallback: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    // 日志输出到 stderr，stdout 只留给结果
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time()
                .with_ansi(false),
        )
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(FormState::Succeeded) => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<FormState> {
    let mut controller = FormController::from_source(Arc::new(cli.config_source()));

    controller.update(FormMessage::EditEmail(cli.email.clone()));
    controller.update(FormMessage::EditCategory(cli.category));
    controller.update(FormMessage::EditMessage(cli.message.clone()));

    if !controller.can_submit() {
        anyhow::bail!("An email address is required");
    }

    let state = controller.submit().await;

    let fallback = match controller.update(FormMessage::RequestFallback) {
        FormEffect::OpenCompose(target) => Some(target.uri()),
        _ => None,
    };

    let model = controller.model();
    if cli.json {
        let report = Report {
            state,
            status: controller.status_text(),
            outcome: model.last_outcome.as_ref(),
            error: model.last_error.as_ref().map(ToString::to_string),
            fallback,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(state);
    }

    if let Some(status) = controller.status_text() {
        println!("{status}");
    }
    if let Some(outcome) = model.last_outcome.as_ref().filter(|_| state == FormState::Succeeded) {
        println!(
            "Delivered to {} of {} destination(s)",
            outcome.accepted_count(),
            outcome.results.len()
        );
    }
    if let Some(uri) = fallback {
        println!("Send via email instead:\n{uri}");
    }

    Ok(state)
}
