//! Session and settings-change notifications.
//!
//! [`HighlightrSession`] is the explicit context a host keeps instead of a global plugin object:
//! it owns the current [`Settings`], the [`CommandExecutor`] built from them, and a list of
//! subscribers that are told whenever the settings change.
//!
//! # Example
//!
//! ```rust
//! use highlightr_core::{Highlighter, HighlightrSession, Settings};
//! use std::sync::{Arc, Mutex};
//!
//! let mut session = HighlightrSession::new(Settings::default()).unwrap();
//!
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let sink = seen.clone();
//! session.subscribe(move |change| {
//!     sink.lock().unwrap().push(change.new_version);
//! });
//!
//! session
//!     .update_settings(|settings| {
//!         settings.highlighters.push(Highlighter::new("Mint", "#b2f2bb"));
//!     })
//!     .unwrap();
//!
//! assert!(session.executor().registry().get("Mint").is_some());
//! assert_eq!(*seen.lock().unwrap(), vec![1]);
//! ```

use crate::buffer::TextBuffer;
use crate::commands::{CommandExecutor, CommandRegistry, CommandResult};
use crate::error::CommandError;
use highlightr_config::Settings;
use tracing::debug;

/// Settings change type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsChangeType {
    /// The palette changed, so the command set was regenerated.
    CommandsRegenerated,
    /// Only the visual style variant changed.
    StyleChanged,
    /// Nothing observable changed (e.g. the rendering method).
    Other,
}

/// Settings change record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsChange {
    /// Change type
    pub change_type: SettingsChangeType,
    /// Old version number
    pub old_version: u64,
    /// New version number
    pub new_version: u64,
}

/// Settings change callback function type
pub type SettingsChangeCallback = Box<dyn FnMut(&SettingsChange) + Send>;

/// Explicit per-host context for the highlight commands.
pub struct HighlightrSession {
    settings: Settings,
    executor: CommandExecutor,
    version: u64,
    callbacks: Vec<SettingsChangeCallback>,
}

impl HighlightrSession {
    /// Validate `settings` and build the command set for them.
    pub fn new(settings: Settings) -> Result<Self, CommandError> {
        let executor = CommandExecutor::from_settings(&settings)?;
        Ok(Self {
            settings,
            executor,
            version: 0,
            callbacks: Vec::new(),
        })
    }

    /// Current settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Executor for the current settings.
    pub fn executor(&self) -> &CommandExecutor {
        &self.executor
    }

    /// Settings version (incremented on every accepted update).
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Body CSS classes for the current style variant.
    pub fn style_classes(&self) -> [(&'static str, bool); 4] {
        self.settings.highlighter_style.body_classes()
    }

    /// Subscribe to settings changes.
    pub fn subscribe<F>(&mut self, callback: F)
    where
        F: FnMut(&SettingsChange) + Send + 'static,
    {
        self.callbacks.push(Box::new(callback));
    }

    /// Mutate the settings, then regenerate commands and notify subscribers.
    ///
    /// If the mutated settings fail validation they are discarded, the previous settings stay
    /// in effect and no one is notified.
    pub fn update_settings<F>(&mut self, mutate: F) -> Result<SettingsChange, CommandError>
    where
        F: FnOnce(&mut Settings),
    {
        let mut next = self.settings.clone();
        mutate(&mut next);
        next.validate()?;

        let change_type = if next.highlighters != self.settings.highlighters {
            self.executor.set_registry(CommandRegistry::from_settings(&next));
            SettingsChangeType::CommandsRegenerated
        } else if next.highlighter_style != self.settings.highlighter_style {
            SettingsChangeType::StyleChanged
        } else {
            SettingsChangeType::Other
        };
        self.settings = next;

        let old_version = self.version;
        self.version += 1;
        debug!(?change_type, version = self.version, "settings updated");

        let change = SettingsChange {
            change_type,
            old_version,
            new_version: self.version,
        };
        self.notify_callbacks(&change);
        Ok(change)
    }

    /// Run the command `id` against `buffer`.
    pub fn execute<B>(&self, id: &str, buffer: &mut B) -> Result<CommandResult, CommandError>
    where
        B: TextBuffer + ?Sized,
    {
        self.executor.execute(id, buffer)
    }

    /// Notify all callbacks
    fn notify_callbacks(&mut self, change: &SettingsChange) {
        for callback in &mut self.callbacks {
            callback(change);
        }
    }
}
