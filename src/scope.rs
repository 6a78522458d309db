//! Scope handles for attaching declarations to a deployment graph.
//!
//! A [`Scope`] names one node in the construct tree. Handles are cheap to
//! clone and all point at the shared graph owned by the
//! [`Stack`](crate::Stack); attaching a child, resource, or output mutates
//! that graph under its lock and is visible to every other handle
//! immediately.

use std::sync::{Arc, RwLock};

use tracing::debug;

use crate::error::SynthError;
use crate::naming;
use crate::stack::StackInner;
use crate::template::{OutputEntry, ResourceEntry};
use crate::token::Token;

/// A handle naming one node in the construct tree.
#[derive(Debug, Clone)]
pub struct Scope {
    pub(crate) inner: Arc<RwLock<StackInner>>,
    pub(crate) path: Vec<String>,
}

impl Scope {
    /// Register a child node under this scope and return its handle.
    ///
    /// Fails with [`SynthError::InvalidArgument`] for a malformed id (before
    /// any mutation) and [`SynthError::Framework`] when a sibling of the same
    /// name is already attached.
    pub fn child(&self, id: &str) -> Result<Scope, SynthError> {
        naming::validate_logical_id(id)?;

        let mut child_path = self.path.clone();
        child_path.push(id.to_string());
        let key = child_path.join("/");

        let mut guard = self.inner.write()?;
        if !guard.paths.insert(key.clone()) {
            return Err(SynthError::Framework(format!(
                "a child named '{id}' is already attached under '{}'",
                self.path_string()
            )));
        }
        debug!(event = "Attach", phase = "Child", path = key);

        Ok(Scope {
            inner: Arc::clone(&self.inner),
            path: child_path,
        })
    }

    /// Slash-separated path of this scope from the root. Empty at the root.
    pub fn path_string(&self) -> String {
        self.path.join("/")
    }

    /// Logical id for `local` under this scope: the path segments and the
    /// local id concatenated, so a root-level name survives verbatim.
    fn logical_name(&self, local: &str) -> String {
        let mut name = self.path.concat();
        name.push_str(local);
        name
    }

    pub(crate) fn register_resource(
        &self,
        local_id: &str,
        kind: &str,
        properties: serde_json::Value,
    ) -> Result<String, SynthError> {
        naming::validate_logical_id(local_id)?;
        let logical_id = self.logical_name(local_id);

        let mut guard = self.inner.write()?;
        if guard.resources.contains_key(&logical_id) {
            return Err(SynthError::Framework(format!(
                "duplicate resource registration for '{logical_id}'"
            )));
        }
        guard
            .resources
            .insert(logical_id.clone(), ResourceEntry::new(kind, properties));
        debug!(event = "Attach", phase = "Resource", logical_id = logical_id.as_str(), kind);

        Ok(logical_id)
    }

    pub(crate) fn register_output(&self, name: &str, value: Token) -> Result<String, SynthError> {
        naming::validate_logical_id(name)?;
        let logical_id = self.logical_name(name);

        let mut guard = self.inner.write()?;
        if guard.outputs.contains_key(&logical_id) {
            return Err(SynthError::Framework(format!(
                "an output named '{name}' is already registered on '{}'",
                self.path_string()
            )));
        }
        guard.outputs.insert(logical_id.clone(), OutputEntry::new(value));
        debug!(event = "Attach", phase = "Output", logical_id = logical_id.as_str());

        Ok(logical_id)
    }
}
