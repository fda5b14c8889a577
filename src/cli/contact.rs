//! Contact form CLI commands.

use std::path::Path;

use clap::{Args, Subcommand};
use serde::Serialize;

use crate::cli::common::{load_content, print_json, CliError, CliResult};
use crate::contact::{ContactErrors, ContactFormSubmission, ContactValidator};

/// Contact form commands
#[derive(Args, Debug)]
pub struct ContactArgs {
    #[command(subcommand)]
    command: ContactCommand,
}

#[derive(Subcommand, Debug)]
enum ContactCommand {
    /// Validate a submission without sending it
    Validate(ContactValidateArgs),
}

/// Validate a contact submission
#[derive(Args, Debug)]
pub struct ContactValidateArgs {
    /// Sender name
    #[arg(long, default_value = "")]
    name: String,

    /// Sender email
    #[arg(long, default_value = "")]
    email: String,

    /// Subject line
    #[arg(long, default_value = "")]
    subject: String,

    /// Message body
    #[arg(long, default_value = "")]
    message: String,

    /// Phone number
    #[arg(long)]
    phone: Option<String>,

    /// Service of interest (one of the catalog titles)
    #[arg(long)]
    service: Option<String>,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize, Debug)]
struct ValidationOutput<'a> {
    valid: bool,
    errors: &'a ContactErrors,
}

impl ContactArgs {
    /// Execute contact subcommand
    pub fn execute(&self, content_dir: Option<&Path>) -> CliResult<()> {
        match &self.command {
            ContactCommand::Validate(args) => args.execute(content_dir),
        }
    }
}

impl ContactValidateArgs {
    fn submission(&self) -> ContactFormSubmission {
        ContactFormSubmission {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            subject: self.subject.clone(),
            service: self.service.clone(),
            message: self.message.clone(),
        }
    }

    /// Execute validate command
    pub fn execute(&self, content_dir: Option<&Path>) -> CliResult<()> {
        let content = load_content(content_dir)?;
        let validator = ContactValidator::new(content.contact_service_options());
        let errors = validator.validate(&self.submission());

        if self.json {
            print_json(&ValidationOutput {
                valid: errors.is_empty(),
                errors: &errors,
            })?;
        } else if errors.is_empty() {
            println!("✓ Submission is valid");
        } else {
            println!("✗ Submission has {} error(s):", errors.len());
            for (field, message) in errors.iter() {
                println!("  {field}: {message}");
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(CliError::validation("Validation failed"))
        }
    }
}
