//! Command Interface Layer
//!
//! Turns the configured palette into a set of named commands and runs them against a host
//! buffer.
//!
//! # Overview
//!
//! - one **menu** command (`highlighter-plugin-menu`) that asks the host to show the palette
//! - one **toggle** command per highlighter (id and name are the highlighter's color name)
//! - one shared **strip** command (`unhighlight`) that removes all highlight markup from the
//!   selection
//!
//! # Example
//!
//! ```rust
//! use highlightr_core::{CommandExecutor, Position, RopeBuffer, Settings};
//!
//! let executor = CommandExecutor::from_settings(&Settings::default()).unwrap();
//! let mut buffer = RopeBuffer::new("say hello");
//! buffer.select(Position::new(0, 4), Position::new(0, 9));
//!
//! executor.execute("Yellow", &mut buffer).unwrap();
//! assert_eq!(
//!     buffer.text(),
//!     "say <mark style=\"background: #FFF3A3A6;\">hello</mark> "
//! );
//! ```

use crate::buffer::TextBuffer;
use crate::error::CommandError;
use crate::strip::StripEngine;
use crate::toggle::{ToggleEngine, ToggleRequest, ToggleResult};
use highlightr_config::{MarkupTemplate, Settings};
use std::time::Duration;
use tracing::{debug, trace};

/// Icon shared by the menu and toggle commands.
pub const TOGGLE_ICON: &str = "highlightpen";
/// Id of the menu command.
pub const MENU_COMMAND_ID: &str = "highlighter-plugin-menu";
/// Display name of the menu command.
pub const MENU_COMMAND_NAME: &str = "Open Highlightr";
/// Id of the strip command.
pub const STRIP_COMMAND_ID: &str = "unhighlight";
/// Display name of the strip command.
pub const STRIP_COMMAND_NAME: &str = "Remove highlight";
/// Icon of the strip command.
pub const STRIP_ICON: &str = "eraser";
/// Delay before focus returns to the editor after a toggle.
pub const FOCUS_RESTORE_DELAY: Duration = Duration::from_millis(10);

/// What a command does when run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandAction {
    /// Ask the host to show the highlighter palette.
    OpenMenu,
    /// Wrap/unwrap the selection with a template.
    Toggle(MarkupTemplate),
    /// Remove all highlight markup from the selection.
    Strip,
}

/// A registered command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    /// Unique id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Icon name.
    pub icon: &'static str,
    /// Behavior.
    pub action: CommandAction,
}

/// Command execution result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    /// A toggle was committed.
    Toggled(ToggleResult),
    /// The selection was replaced by its stripped text.
    Stripped {
        /// Text written over the selection.
        text: String,
    },
    /// The host should present these toggle commands as a menu. The buffer is untouched.
    MenuRequested {
        /// Toggle command ids in palette order.
        commands: Vec<String>,
    },
}

/// Commands derived from [`Settings`]: the menu command, then the toggles in palette order, then
/// the strip command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandRegistry {
    commands: Vec<CommandSpec>,
}

impl CommandRegistry {
    /// Build the menu command, one toggle command per highlighter and the strip command.
    pub fn from_settings(settings: &Settings) -> Self {
        let mut commands = vec![CommandSpec {
            id: MENU_COMMAND_ID.to_string(),
            name: MENU_COMMAND_NAME.to_string(),
            icon: TOGGLE_ICON,
            action: CommandAction::OpenMenu,
        }];
        commands.extend(settings.highlighters.iter().map(|highlighter| CommandSpec {
            id: highlighter.color.clone(),
            name: highlighter.color.clone(),
            icon: TOGGLE_ICON,
            action: CommandAction::Toggle(highlighter.template()),
        }));
        commands.push(CommandSpec {
            id: STRIP_COMMAND_ID.to_string(),
            name: STRIP_COMMAND_NAME.to_string(),
            icon: STRIP_ICON,
            action: CommandAction::Strip,
        });
        Self { commands }
    }

    /// Register `spec`, replacing (and returning) any command with the same id.
    ///
    /// Registries are rebuilt from scratch when the palette changes, so hosts that add their own
    /// commands must register them again after a regeneration.
    pub fn register(&mut self, spec: CommandSpec) -> Option<CommandSpec> {
        match self.commands.iter_mut().find(|c| c.id == spec.id) {
            Some(existing) => Some(std::mem::replace(existing, spec)),
            None => {
                self.commands.push(spec);
                None
            }
        }
    }

    /// Look up a command by id.
    pub fn get(&self, id: &str) -> Option<&CommandSpec> {
        self.commands.iter().find(|c| c.id == id)
    }

    /// All commands in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &CommandSpec> {
        self.commands.iter()
    }

    /// Number of registered commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns `true` if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Ids of the toggle commands in registration order.
    pub fn toggle_ids(&self) -> Vec<String> {
        self.commands
            .iter()
            .filter(|c| matches!(c.action, CommandAction::Toggle(_)))
            .map(|c| c.id.clone())
            .collect()
    }
}

/// Toggle `template` around the buffer's current selection and commit the result.
///
/// Reads the selection and both boundary windows from `buffer`, writes the replacement and
/// restores the cursor (or selection). Focus is left to the caller. `template` must have a
/// non-empty prefix.
pub fn toggle_markup<B>(buffer: &mut B, template: &MarkupTemplate) -> ToggleResult
where
    B: TextBuffer + ?Sized,
{
    let selection_text = buffer.selection_text();
    let selection = buffer.selection();
    let (before, after) = ToggleEngine::boundary_ranges(selection, template);
    let boundary_before = buffer.range_text(before.start, before.end);
    let boundary_after = buffer.range_text(after.start, after.end);
    trace!(%boundary_before, %boundary_after, "read toggle boundaries");

    let result = ToggleEngine::apply(&ToggleRequest {
        selection_text: &selection_text,
        selection,
        boundary_before: &boundary_before,
        boundary_after: &boundary_after,
        template,
    });

    buffer.replace_range(
        &result.new_text,
        result.replaced_range.start,
        result.replaced_range.end,
    );
    match result.new_selection {
        Some(range) => buffer.set_selection(range),
        None => buffer.set_cursor(result.new_cursor),
    }
    result
}

/// Replace the buffer's selection with its markup-free text and return that text.
pub fn strip_markup<B>(buffer: &mut B, engine: &StripEngine) -> String
where
    B: TextBuffer + ?Sized,
{
    let stripped = engine.strip(&buffer.selection_text());
    buffer.replace_selection(&stripped);
    stripped
}

/// Runs registered commands against a host buffer.
#[derive(Debug, Clone)]
pub struct CommandExecutor {
    registry: CommandRegistry,
    strip: StripEngine,
}

impl CommandExecutor {
    /// Create an executor over an existing registry.
    pub fn new(registry: CommandRegistry) -> Result<Self, CommandError> {
        Ok(Self {
            registry,
            strip: StripEngine::highlight()?,
        })
    }

    /// Validate `settings` and build an executor for them.
    pub fn from_settings(settings: &Settings) -> Result<Self, CommandError> {
        settings.validate()?;
        Self::new(CommandRegistry::from_settings(settings))
    }

    /// Registered commands.
    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Replace the registered commands.
    pub fn set_registry(&mut self, registry: CommandRegistry) {
        self.registry = registry;
    }

    /// Run the command `id` against `buffer`.
    pub fn execute<B>(&self, id: &str, buffer: &mut B) -> Result<CommandResult, CommandError>
    where
        B: TextBuffer + ?Sized,
    {
        let spec = self
            .registry
            .get(id)
            .ok_or_else(|| CommandError::UnknownCommand(id.to_string()))?;

        match &spec.action {
            CommandAction::OpenMenu => {
                let commands = self.registry.toggle_ids();
                debug!(command = %spec.id, entries = commands.len(), "requested highlighter menu");
                Ok(CommandResult::MenuRequested { commands })
            }
            CommandAction::Toggle(template) => {
                if !template.is_well_formed() {
                    return Err(CommandError::EmptyPrefix(spec.id.clone()));
                }
                let result = toggle_markup(buffer, template);
                debug!(command = %spec.id, action = ?result.action, "toggled markup");
                buffer.schedule_focus(FOCUS_RESTORE_DELAY);
                Ok(CommandResult::Toggled(result))
            }
            CommandAction::Strip => {
                let text = strip_markup(buffer, &self.strip);
                debug!(command = %spec.id, len = text.len(), "stripped markup");
                buffer.focus();
                Ok(CommandResult::Stripped { text })
            }
        }
    }
}
