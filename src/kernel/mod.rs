//! kernel
//!
//! Command registry, boot state machine, and lookup.
//!
//! # Lifecycle
//!
//! ```text
//! idle --boot()--> booted
//! ```
//!
//! A kernel is constructed, configured (loaders, global flags, default
//! command) while `idle`, then booted exactly once. Configuration calls
//! after boot fail with a state-conflict error naming the attempted
//! operation. Repeat `boot()` calls are no-ops.
//!
//! # Boot semantics
//!
//! Boot queries each loader's metadata sequentially in registration order
//! (no parallel fan-out, so the merged command list is deterministic),
//! places the default command first, derives namespaces and aliases, and
//! commits. Boot is transactional: on any loader failure the kernel remains
//! `idle` with nothing committed, so a fixed configuration can be retried.
//!
//! # Concurrency
//!
//! `boot()` carries no internal lock; a single initiator is assumed. After
//! boot every read operation is pure, since no further mutation occurs.

mod help;

use std::fmt;

use thiserror::Error;
use tracing::{debug, trace};

use crate::command::CommandConstructor;
use crate::descriptor::{CommandMetaData, FlagDescriptor};
use crate::loader::{DeferredLoader, Loader, LoaderError, LoaderFut};
use crate::parser::{bind, tokenize, FlagUniverse, ParsedOutput};

/// Kernel boot state. Monotonic: the only transition is `Idle -> Booted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KernelState {
    /// Accepting configuration; no commands committed.
    Idle,
    /// Command list committed; read-only from here on.
    Booted,
}

impl fmt::Display for KernelState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KernelState::Idle => f.write_str("idle"),
            KernelState::Booted => f.write_str("booted"),
        }
    }
}

/// Errors from kernel operations.
#[derive(Debug, Error)]
pub enum KernelError {
    /// A mutating call arrived after boot.
    #[error("cannot {operation} while the kernel is {state}")]
    StateConflict {
        /// The attempted operation.
        operation: &'static str,
        /// The kernel's current state.
        state: KernelState,
    },

    /// Lookup miss: no command or alias matches.
    #[error("command not found: '{0}'")]
    CommandNotFound(String),

    /// Metadata is registered but no loader can materialize the command.
    /// Signals an internal consistency bug, not a normal lookup miss.
    #[error("command '{0}' is registered but no loader provides it")]
    CommandUnresolvable(String),

    /// A global flag with this name already exists.
    #[error("global flag '{0}' is already defined")]
    DuplicateGlobalFlag(String),

    /// A command's flag collides with a kernel global flag.
    #[error("flag '{flag}' on command '{command}' collides with a global flag")]
    DuplicateFlag {
        /// The colliding flag name.
        flag: String,
        /// The command declaring it.
        command: String,
    },

    /// A loader failed during boot; propagated unchanged.
    #[error(transparent)]
    Loader(#[from] LoaderError),
}

/// The control core: owns loaders, global flags, the default command, and
/// the committed command list.
pub struct Kernel {
    state: KernelState,
    loaders: Vec<Box<dyn Loader>>,
    global_flags: Vec<FlagDescriptor>,
    default_command: Option<(CommandMetaData, CommandConstructor)>,
    commands: Vec<CommandMetaData>,
    namespaces: Vec<String>,
    aliases: Vec<(String, String)>,
    default_ctor: Option<CommandConstructor>,
}

impl Kernel {
    /// Create an idle kernel with no loaders, no global flags, and the
    /// built-in help listing as its default command.
    pub fn new() -> Self {
        Self {
            state: KernelState::Idle,
            loaders: Vec::new(),
            global_flags: Vec::new(),
            default_command: None,
            commands: Vec::new(),
            namespaces: Vec::new(),
            aliases: Vec::new(),
            default_ctor: None,
        }
    }

    fn ensure_idle(&self, operation: &'static str) -> Result<(), KernelError> {
        match self.state {
            KernelState::Idle => Ok(()),
            KernelState::Booted => Err(KernelError::StateConflict {
                operation,
                state: self.state,
            }),
        }
    }

    /// Register a loader. Loaders are queried in registration order.
    ///
    /// # Errors
    ///
    /// [`KernelError::StateConflict`] once booted.
    pub fn add_loader(&mut self, loader: impl Loader + 'static) -> Result<(), KernelError> {
        self.ensure_idle("add loader")?;
        self.loaders.push(Box::new(loader));
        Ok(())
    }

    /// Register a loader through a zero-argument factory, resolved (possibly
    /// asynchronously) and cached on first successful query. A factory whose
    /// resolution fails runs again on the next boot attempt.
    ///
    /// # Errors
    ///
    /// [`KernelError::StateConflict`] once booted.
    pub fn add_loader_factory(
        &mut self,
        factory: impl Fn() -> LoaderFut + Send + Sync + 'static,
    ) -> Result<(), KernelError> {
        self.ensure_idle("add loader")?;
        self.loaders.push(Box::new(DeferredLoader::new(factory)));
        Ok(())
    }

    /// Define a global flag, merged into every command's validation
    /// universe but kept separate from per-command flag lists.
    ///
    /// # Errors
    ///
    /// [`KernelError::StateConflict`] once booted;
    /// [`KernelError::DuplicateGlobalFlag`] on a name collision.
    pub fn define_flag(&mut self, flag: FlagDescriptor) -> Result<(), KernelError> {
        self.ensure_idle("define global flag")?;
        if self.global_flags.iter().any(|own| own.name == flag.name) {
            return Err(KernelError::DuplicateGlobalFlag(flag.name));
        }
        self.global_flags.push(flag);
        Ok(())
    }

    /// Register the default command: invoked when no command is named, and
    /// always first in [`commands`](Self::commands).
    ///
    /// # Errors
    ///
    /// [`KernelError::StateConflict`] once booted.
    pub fn register_default_command(
        &mut self,
        meta: CommandMetaData,
        ctor: CommandConstructor,
    ) -> Result<(), KernelError> {
        self.ensure_idle("register default command")?;
        self.default_command = Some((meta, ctor));
        Ok(())
    }

    /// Boot the kernel: query every loader once, merge metadata, derive
    /// namespaces and aliases, and transition to `Booted`.
    ///
    /// Idempotent: only the first call performs work; later calls return
    /// the committed state unchanged. Transactional: on any loader failure
    /// the kernel remains `Idle` with no partial command list.
    pub async fn boot(&mut self) -> Result<KernelState, KernelError> {
        if self.state == KernelState::Booted {
            return Ok(self.state);
        }
        debug!(loaders = self.loaders.len(), "booting kernel");

        let (default_meta, default_ctor) = match self.default_command.clone() {
            Some((meta, ctor)) => (meta, ctor),
            None => help::builtin_default(),
        };

        let mut staged = vec![default_meta];
        for loader in &self.loaders {
            let metas = loader.metadata().await?;
            trace!(count = metas.len(), "merged loader metadata");
            staged.extend(metas);
        }

        for meta in &staged {
            for flag in &meta.flags {
                if self.global_flags.iter().any(|own| own.name == flag.name) {
                    return Err(KernelError::DuplicateFlag {
                        flag: flag.name.clone(),
                        command: meta.command_name.clone(),
                    });
                }
            }
        }

        // Namespaces: unique, first-seen order, default command excluded.
        let mut namespaces: Vec<String> = Vec::new();
        for meta in &staged[1..] {
            if let Some(namespace) = meta.namespace() {
                if !namespaces.iter().any(|own| own == namespace) {
                    namespaces.push(namespace.to_string());
                }
            }
        }

        // Aliases: in-command-order concatenation, default command excluded.
        let mut aliases: Vec<(String, String)> = Vec::new();
        for meta in &staged[1..] {
            for alias in &meta.aliases {
                aliases.push((alias.clone(), meta.command_name.clone()));
            }
        }

        debug!(commands = staged.len(), "kernel booted");
        self.commands = staged;
        self.namespaces = namespaces;
        self.aliases = aliases;
        self.default_ctor = Some(default_ctor);
        self.state = KernelState::Booted;
        Ok(self.state)
    }

    /// Current boot state.
    pub fn state(&self) -> KernelState {
        self.state
    }

    /// The committed command list. The default command is always at index 0.
    pub fn commands(&self) -> &[CommandMetaData] {
        &self.commands
    }

    /// The default command's metadata: the committed entry after boot, or
    /// the registered one (if any) before.
    pub fn default_command(&self) -> Option<&CommandMetaData> {
        match self.state {
            KernelState::Booted => self.commands.first(),
            KernelState::Idle => self.default_command.as_ref().map(|(meta, _)| meta),
        }
    }

    /// Derived namespaces, unique and first-seen ordered.
    pub fn namespaces(&self) -> &[String] {
        &self.namespaces
    }

    /// Derived alias names, in command order.
    pub fn aliases(&self) -> Vec<&str> {
        self.aliases.iter().map(|(alias, _)| alias.as_str()).collect()
    }

    /// The alias table: `(alias, command_name)` pairs in command order.
    pub fn alias_table(&self) -> &[(String, String)] {
        &self.aliases
    }

    /// Kernel global flags.
    pub fn global_flags(&self) -> &[FlagDescriptor] {
        &self.global_flags
    }

    /// Look up a command by exact name, then by alias.
    ///
    /// # Errors
    ///
    /// [`KernelError::CommandNotFound`] when neither matches.
    pub fn find_command(&self, name: &str) -> Result<&CommandMetaData, KernelError> {
        if let Some(meta) = self.commands.iter().find(|meta| meta.command_name == name) {
            return Ok(meta);
        }
        if let Some((_, target)) = self.aliases.iter().find(|(alias, _)| alias == name) {
            if let Some(meta) = self
                .commands
                .iter()
                .find(|meta| &meta.command_name == target)
            {
                return Ok(meta);
            }
        }
        Err(KernelError::CommandNotFound(name.to_string()))
    }

    /// Materialize the constructor for a found metadata entry, trying each
    /// loader in registration order.
    ///
    /// # Errors
    ///
    /// [`KernelError::CommandUnresolvable`] when the metadata is registered
    /// but every loader reports absent, an internal consistency violation
    /// rather than a normal not-found.
    pub async fn resolve_command(
        &self,
        meta: &CommandMetaData,
    ) -> Result<CommandConstructor, KernelError> {
        let is_default = self
            .commands
            .first()
            .is_some_and(|first| first.command_name == meta.command_name);
        if is_default {
            if let Some(ctor) = &self.default_ctor {
                return Ok(ctor.clone());
            }
        }

        for loader in &self.loaders {
            if let Some(ctor) = loader.command(meta).await? {
                return Ok(ctor);
            }
        }
        Err(KernelError::CommandUnresolvable(meta.command_name.clone()))
    }

    /// The full flag universe for one command: its own flags plus the
    /// kernel's global flags.
    pub fn flag_universe(&self, meta: &CommandMetaData) -> FlagUniverse {
        FlagUniverse::new(&meta.flags, &self.global_flags)
    }

    /// Tokenize and bind an argument vector against a command's declared
    /// surface.
    pub fn parse(&self, meta: &CommandMetaData, argv: &[String]) -> ParsedOutput {
        let universe = self.flag_universe(meta);
        bind(tokenize(argv, &universe), &meta.args, &universe)
    }
}

impl Default for Kernel {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Kernel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Kernel")
            .field("state", &self.state)
            .field("loaders", &self.loaders.len())
            .field("commands", &self.commands.len())
            .finish()
    }
}
