use eyre::Result;

use super::CompilationContext;

/// Observer around every phase of a [`Pipeline`](super::Pipeline) run.
///
/// Hooks see the context as the phase leaves it, so a plugin can record the
/// descriptors after `extract` or add diagnostics of its own. Returning an
/// error stops the run. [`SnapshotPlugin`](super::SnapshotPlugin) is the
/// built-in example: it dumps the context to disk after each phase.
pub trait Plugin: Send + Sync {
    fn name(&self) -> &'static str;

    #[allow(unused_variables)]
    fn on_before_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
        Ok(())
    }

    #[allow(unused_variables)]
    fn on_after_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
        Ok(())
    }
}
