//! KVSTORE command - a small key-value store
//!
//! Entries live in memory and, when a path is configured, are mirrored to a
//! JSON object on disk after every change. A change only reaches memory once
//! it has been written, and a backing file that failed to load is never
//! overwritten.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard};

use tracing::{debug, info};
use webterm_core::StorageError;
use webterm_plugin::prelude::*;

const USAGE: &str = "kvstore set <key> <value> | get <key> | del <key> | list | clear";

static KVSTORE_EXAMPLES: [&str; 4] = [
    "kvstore set name Ada",
    r#"kvstore set motto "hello world""#,
    "kvstore get name",
    "kvstore list",
];

type Entries = BTreeMap<String, String>;

pub struct Kvstore {
    entries: Mutex<Entries>,
    path: Option<PathBuf>,
    /// Set once the backing file (if any) has been read successfully
    synced: AtomicBool,
}

impl Kvstore {
    /// In-memory store
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(BTreeMap::new()),
            path: None,
            synced: AtomicBool::new(true),
        }
    }

    /// Store backed by a JSON file, loaded on initialize
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            entries: Mutex::new(BTreeMap::new()),
            path: Some(path.into()),
            synced: AtomicBool::new(false),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Entries>, StorageError> {
        self.entries.lock().map_err(|_| StorageError::Poisoned)
    }

    fn load(&self) -> Result<usize, StorageError> {
        let Some(path) = &self.path else {
            return Ok(0);
        };
        if !path.exists() {
            debug!(path = %path.display(), "kvstore file missing, starting empty");
            self.synced.store(true, Ordering::SeqCst);
            return Ok(0);
        }
        let content = fs::read_to_string(path)?;
        let loaded: Entries = serde_json::from_str(&content)?;
        let count = loaded.len();
        *self.lock()? = loaded;
        self.synced.store(true, Ordering::SeqCst);
        Ok(count)
    }

    fn persist(&self, entries: &Entries) -> Result<(), StorageError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if !self.synced.load(Ordering::SeqCst) {
            return Err(StorageError::Unloaded(path.display().to_string()));
        }
        fs::write(path, serde_json::to_string_pretty(entries)?)?;
        Ok(())
    }

    /// Apply `change` to a copy of the entries, persist the copy, then swap it in.
    fn commit(&self, change: impl FnOnce(&mut Entries)) -> Result<(), TermError> {
        let mut entries = self.lock()?;
        let mut next = entries.clone();
        change(&mut next);
        self.persist(&next)?;
        *entries = next;
        Ok(())
    }

    fn set(&self, args: &[String], ctx: &mut ShellContext<'_>) -> Result<(), TermError> {
        let (key, value) = match args {
            [key, rest @ ..] if !rest.is_empty() => (key, rest.join(" ")),
            _ => return Err(TermError::usage("kvstore set", "kvstore set <key> <value>")),
        };
        self.commit(|entries| {
            entries.insert(key.clone(), value);
        })?;
        ctx.emit_line(&format!("Stored: {}", escape_html(key)));
        Ok(())
    }

    fn get(&self, args: &[String], ctx: &mut ShellContext<'_>) -> Result<(), TermError> {
        let [key] = args else {
            return Err(TermError::usage("kvstore get", "kvstore get <key>"));
        };
        let entries = self.lock()?;
        match entries.get(key) {
            Some(value) => ctx.emit_line(&format!("{} = {}", escape_html(key), escape_html(value))),
            None => ctx.emit_line(&format!("Key not found: {}", escape_html(key))),
        }
        Ok(())
    }

    fn del(&self, args: &[String], ctx: &mut ShellContext<'_>) -> Result<(), TermError> {
        let [key] = args else {
            return Err(TermError::usage("kvstore del", "kvstore del <key>"));
        };
        let present = self.lock()?.contains_key(key);
        if present {
            self.commit(|entries| {
                entries.remove(key);
            })?;
            ctx.emit_line(&format!("Deleted: {}", escape_html(key)));
        } else {
            ctx.emit_line(&format!("Key not found: {}", escape_html(key)));
        }
        Ok(())
    }

    fn list(&self, ctx: &mut ShellContext<'_>) -> Result<(), TermError> {
        let entries = self.lock()?;
        if entries.is_empty() {
            ctx.emit_line("Store is empty.");
        }
        for (key, value) in entries.iter() {
            ctx.emit_line(&format!("{} = {}", escape_html(key), escape_html(value)));
        }
        Ok(())
    }

    fn clear(&self, ctx: &mut ShellContext<'_>) -> Result<(), TermError> {
        self.commit(|entries| entries.clear())?;
        ctx.emit_line("Store cleared.");
        Ok(())
    }
}

impl Default for Kvstore {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandPlugin for Kvstore {
    fn meta(&self) -> CommandMeta {
        CommandMeta {
            name: "kvstore",
            description: "Stores, reads and deletes key-value pairs.",
            usage: USAGE,
            examples: &KVSTORE_EXAMPLES,
        }
    }

    fn initialize(&self) -> Result<(), TermError> {
        let count = self.load()?;
        if let Some(path) = &self.path {
            info!(path = %path.display(), entries = count, "kvstore loaded");
        }
        Ok(())
    }

    fn detect(&self, line: &str) -> bool {
        tokenize(&line.trim().to_lowercase())
            .first()
            .map_or(false, |cmd| cmd == "kvstore")
    }

    fn execute(&self, line: &str, ctx: &mut ShellContext<'_>) -> Result<(), TermError> {
        let args = tokenize(line);
        let sub = args.get(1).map(|s| s.to_lowercase());
        let rest = args.get(2..).unwrap_or(&[]);

        match sub.as_deref() {
            Some("set") => self.set(rest, ctx),
            Some("get") => self.get(rest, ctx),
            Some("del") | Some("delete") => self.del(rest, ctx),
            Some("list") => self.list(ctx),
            Some("clear") => self.clear(ctx),
            Some(other) => {
                ctx.emit_line(&format!("Unknown kvstore subcommand: {}", escape_html(other)));
                ctx.emit_line(&format!("Usage: {}", escape_html(USAGE)));
                Ok(())
            }
            None => {
                ctx.emit_line(&format!("Usage: {}", escape_html(USAGE)));
                Ok(())
            }
        }
    }
}
