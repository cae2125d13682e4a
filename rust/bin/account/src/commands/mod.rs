pub mod config;
pub mod password;
pub mod profile;
pub mod token;

use std::collections::HashMap;
use std::process::ExitCode;
use std::sync::{Arc, Mutex};

use account_client::{HttpAccountApi, StorageToken};
use account_profile::{FormChange, FormId, Outcome, ProfileApp, ProfileBff};
use account_storage::{LocalStorage, RedbStorage};
use anyhow::Result;
use tracing::debug;

use crate::config::ClientConfig;

/// Open the local storage database named by the config.
pub fn open_storage(config: &ClientConfig) -> Result<Arc<dyn LocalStorage>> {
    let path = config.storage_path();
    debug!(path = %path.display(), "opening local storage");
    let storage = RedbStorage::open(&path)
        .map_err(|e| anyhow::anyhow!("Failed to open storage {}: {}", path.display(), e))?;
    Ok(Arc::new(storage))
}

/// Build a profile page controller wired to the configured server and
/// storage, printing message changes to stdout.
pub fn open_app(config: &ClientConfig) -> Result<ProfileApp> {
    let server = config.require_server()?;
    let storage = open_storage(config)?;

    debug!(server, "connecting");
    let api = Arc::new(HttpAccountApi::new(server));
    let tokens = Arc::new(StorageToken::new(storage));
    let app = ProfileApp::new(ProfileBff::new(api, tokens));

    let printer = MessagePrinter::default();
    app.subscribe(None, move |change| {
        if let Some(line) = printer.observe(change) {
            println!("{}", line);
        }
    });
    Ok(app)
}

/// Whether a submission ran and was accepted.
pub fn succeeded(outcome: Option<&Outcome>) -> bool {
    outcome.is_some_and(Outcome::is_success)
}

/// Exit status for a finished submission.
pub fn exit_code(outcome: Option<&Outcome>) -> ExitCode {
    if succeeded(outcome) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Turns state changes into `<message-id>: <message>` lines, one per
/// actual message change.
#[derive(Default)]
pub struct MessagePrinter {
    last: Mutex<HashMap<FormId, String>>,
}

impl MessagePrinter {
    pub fn observe(&self, change: &FormChange) -> Option<String> {
        let form = change.form();
        let message = change.message();
        let mut last = self.last.lock().unwrap_or_else(|e| e.into_inner());
        let previous = last.get(&form).map(String::as_str).unwrap_or("");
        if previous == message {
            return None;
        }
        last.insert(form, message.to_string());
        if message.is_empty() {
            return None;
        }
        Some(format!("{}: {}", form.message_id(), message))
    }
}
