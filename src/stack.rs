//! The deployment stack: root of the construct tree and synthesis entry
//! point.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, RwLock};
use std::time::Instant;

use tracing::debug;

use crate::error::SynthError;
use crate::metrics::{self, SynthesisStats};
use crate::scope::Scope;
use crate::template::{OutputEntry, ResourceEntry, Template};

#[derive(Debug, Default)]
pub(crate) struct StackInner {
    pub(crate) paths: BTreeSet<String>,
    pub(crate) resources: BTreeMap<String, ResourceEntry>,
    pub(crate) outputs: BTreeMap<String, OutputEntry>,
}

/// The root handle for one deployment graph. Cloneable and thread-safe.
#[derive(Debug, Clone, Default)]
pub struct Stack {
    inner: Arc<RwLock<StackInner>>,
}

impl Stack {
    pub fn new() -> Self {
        Self::default()
    }

    /// The root scope. Constructs attach below it; outputs registered here
    /// keep their literal names in the descriptor.
    pub fn root(&self) -> Scope {
        Scope {
            inner: Arc::clone(&self.inner),
            path: Vec::new(),
        }
    }

    /// Walk the accumulated declarations and emit the deployment descriptor.
    ///
    /// Synthesis never resolves deferred values; it only assembles what
    /// registration already recorded.
    pub fn synth(&self) -> Result<Template, SynthError> {
        let start = Instant::now();
        let guard = self.inner.read()?;
        let template = Template::from_parts(guard.resources.clone(), guard.outputs.clone());

        debug!(
            event = "Synthesis",
            phase = "Emit",
            resources = guard.resources.len(),
            outputs = guard.outputs.len()
        );
        metrics::record_synthesis(&SynthesisStats {
            resources: guard.resources.len(),
            outputs: guard.outputs.len(),
            duration: start.elapsed(),
        });

        Ok(template)
    }
}
