//! The code → message registry and its process-wide instance.
//!
//! # Architecture
//!
//! ```text
//! RegistryBuilder::new()            sentinels (0, -1)
//!       │ .with_builtin()           + built-in groups
//!       │ .entries(MY_ENTRIES)      + collaborator groups
//!       ▼ .build()
//! Registry { entries: Vec, index: HashMap<code, first position> }
//!       │
//!       ▼ install(), once, before first use
//! GLOBAL: OnceLock<Registry>  ──►  describe(code)
//! ```
//!
//! A registry never changes after it is built. Lookups go through a hash
//! index that records the *first* entry for each code, so duplicate codes
//! resolve exactly as a front-to-back scan of the table would.

use std::borrow::Cow;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::io::{self, Write};
use std::sync::OnceLock;

use errspace_core::{kdebug, kwarn, RegistryError, RegistryResult};

use crate::codes::{self, APP_CODE_BASE, ERR_NONE, ERR_UNSPECIFIED, SENTINEL_ENTRIES};
use crate::config::RegistryConfig;
use crate::platform;
use crate::ErrorEntry;

/// Immutable table of application error descriptions.
pub struct Registry {
    entries: Vec<ErrorEntry>,
    index: HashMap<i32, usize>,
}

impl Registry {
    /// Registry holding the sentinels and every built-in group.
    pub fn builtin() -> Self {
        // Built-in codes are unique, in range and non-empty (see the
        // codes tests), so no check can fail here.
        Self::index(builtin_table())
    }

    /// Start building a custom registry. The sentinels are always included.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    fn index(entries: Vec<ErrorEntry>) -> Self {
        let mut index = HashMap::with_capacity(entries.len());
        for (pos, entry) in entries.iter().enumerate() {
            index.entry(entry.code).or_insert(pos);
        }
        Self { entries, index }
    }

    /// The first entry registered for `code`.
    #[inline]
    pub fn entry(&self, code: i32) -> Option<&ErrorEntry> {
        self.index.get(&code).map(|&pos| &self.entries[pos])
    }

    /// The table message for `code`, without platform fallback.
    #[inline]
    pub fn lookup(&self, code: i32) -> Option<&'static str> {
        self.entry(code).map(|e| e.message)
    }

    /// Describe any code: the table message if there is one, otherwise the
    /// platform's own description. Never empty.
    pub fn describe(&self, code: i32) -> Cow<'static, str> {
        match self.lookup(code) {
            Some(message) => Cow::Borrowed(message),
            None => Cow::Owned(platform::os_describe(code)),
        }
    }

    /// Write `"<label>: <describe(code)>\n"` to `out`.
    pub fn report_code_to<W: Write>(&self, out: &mut W, label: &str, code: i32) -> io::Result<()> {
        writeln!(out, "{}: {}", label, self.describe(code))
    }

    /// All entries in registration order, duplicates included.
    pub fn entries(&self) -> &[ErrorEntry] {
        &self.entries
    }

    /// Number of entries, duplicates included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pairs of `(kept, shadowed)` entries for every repeated code.
    pub fn duplicates(&self) -> Vec<(ErrorEntry, ErrorEntry)> {
        self.entries
            .iter()
            .enumerate()
            .filter_map(|(pos, entry)| {
                let first = self.index[&entry.code];
                (first != pos).then(|| (self.entries[first], *entry))
            })
            .collect()
    }
}

impl core::fmt::Debug for Registry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Registry")
            .field("entries", &self.entries.len())
            .field("codes", &self.index.len())
            .finish()
    }
}

fn builtin_table() -> Vec<ErrorEntry> {
    codes::builtin_entries().copied().collect()
}

// ── Builder ───────────────────────────────────────────────────────

/// Collects entries and checks them before freezing a [`Registry`].
///
/// Empty messages are always rejected. Duplicate codes and application
/// entries below [`APP_CODE_BASE`] are rejected in strict mode and logged
/// (first entry wins) otherwise.
#[derive(Debug, Clone)]
pub struct RegistryBuilder {
    entries: Vec<ErrorEntry>,
    config: RegistryConfig,
}

impl RegistryBuilder {
    /// A lenient builder holding only the sentinels.
    pub fn new() -> Self {
        Self {
            entries: SENTINEL_ENTRIES.to_vec(),
            config: RegistryConfig::default(),
        }
    }

    /// Add every built-in group after whatever is already registered.
    pub fn with_builtin(mut self) -> Self {
        self.entries
            .extend(codes::builtin_entries().filter(|e| !is_sentinel(e.code)).copied());
        self
    }

    /// Append one entry.
    pub fn entry(mut self, entry: ErrorEntry) -> Self {
        self.entries.push(entry);
        self
    }

    /// Append a whole group, keeping its order.
    pub fn entries(mut self, entries: &[ErrorEntry]) -> Self {
        self.entries.extend_from_slice(entries);
        self
    }

    /// Replace the validation settings.
    pub fn config(mut self, config: RegistryConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> RegistryResult<Registry> {
        let RegistryBuilder { entries, config } = self;
        let mut first: HashMap<i32, &'static str> = HashMap::with_capacity(entries.len());

        for entry in &entries {
            if entry.message.is_empty() {
                return Err(RegistryError::EmptyMessage { code: entry.code });
            }

            if !is_sentinel(entry.code) && entry.code < APP_CODE_BASE {
                if config.strict {
                    return Err(RegistryError::CodeOutOfRange {
                        code: entry.code,
                        name: entry.name,
                        base: APP_CODE_BASE,
                    });
                }
                if config.warn_anomalies {
                    kwarn!(
                        "errspace: {} ({}) is in the platform range and shadows its errno text",
                        entry.name,
                        entry.code
                    );
                }
            }

            match first.entry(entry.code) {
                Entry::Vacant(slot) => {
                    slot.insert(entry.name);
                }
                Entry::Occupied(slot) => {
                    if config.strict {
                        return Err(RegistryError::DuplicateCode {
                            code: entry.code,
                            first: *slot.get(),
                            second: entry.name,
                        });
                    }
                    if config.warn_anomalies {
                        kwarn!(
                            "errspace: duplicate code {}: {} shadowed by earlier {}",
                            entry.code,
                            entry.name,
                            slot.get()
                        );
                    }
                }
            }
        }

        Ok(Registry::index(entries))
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[inline]
fn is_sentinel(code: i32) -> bool {
    code == ERR_NONE || code == ERR_UNSPECIFIED
}

// ── Process-wide registry ─────────────────────────────────────────

static GLOBAL: OnceLock<Registry> = OnceLock::new();

/// Install the process-wide registry.
///
/// Must run before anything resolves a code; the first `describe` freezes
/// the built-in table in place. Fails with `AlreadyInitialized` after that.
pub fn install(registry: Registry) -> RegistryResult<()> {
    let len = registry.len();
    GLOBAL
        .set(registry)
        .map_err(|_| RegistryError::AlreadyInitialized)?;
    kdebug!("errspace: installed registry with {} entries", len);
    Ok(())
}

/// Build the built-in table plus `extra` groups with
/// [`RegistryConfig::from_env`] and install it.
///
/// The usual daemon start-up call:
///
/// ```ignore
/// errspace::registry::init_with(&[my_codes::ENTRIES])?;
/// ```
pub fn init_with(extra: &[&[ErrorEntry]]) -> RegistryResult<()> {
    let builder = extra
        .iter()
        .fold(Registry::builder().with_builtin(), |b, group| b.entries(group));
    install(builder.config(RegistryConfig::from_env()).build()?)
}

/// The process-wide registry, built-in unless one was installed first.
#[inline]
pub fn global() -> &'static Registry {
    GLOBAL.get_or_init(Registry::builtin)
}
