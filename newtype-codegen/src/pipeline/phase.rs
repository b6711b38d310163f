use eyre::Result;

use super::CompilationContext;

/// Name and one-line summary of a phase, as listed by `newtype explain`.
#[derive(Debug, Clone)]
pub struct PhaseInfo {
    pub name: &'static str,
    pub description: &'static str,
}

/// One step from manifest to descriptors.
///
/// The pipeline always runs `validate` then `extract`; user phases run
/// afterwards and see `ctx.descriptors` populated. Problems that should not
/// stop generation belong in `ctx.diagnostics`; an `Err` aborts the run.
pub trait Phase: Send + Sync {
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    fn run(&self, ctx: &mut CompilationContext) -> Result<()>;

    fn info(&self) -> PhaseInfo {
        PhaseInfo {
            name: self.name(),
            description: self.description(),
        }
    }
}
