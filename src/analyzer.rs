//! Analysis pipeline: clone, walk, assemble the report

use std::path::Path;
use std::time::Instant;

use log::{error, info, warn};

use crate::error::AnalysisError;
use crate::git::{CloneConfig, Cloner, GitCloner};
use crate::types::RepoAnalysis;
use crate::walker::{RepoWalker, WalkerConfig};
use crate::workspace::Workspace;

/// Runs a full analysis of one repository URL.
pub struct Analyzer<C: Cloner = GitCloner> {
    cloner: C,
    walker: RepoWalker,
}

impl Analyzer<GitCloner> {
    /// Analyzer that clones with libgit2.
    pub fn with_git(clone_config: CloneConfig, walker_config: WalkerConfig) -> Self {
        Self::new(GitCloner::new(clone_config), walker_config)
    }
}

impl<C: Cloner> Analyzer<C> {
    pub fn new(cloner: C, walker_config: WalkerConfig) -> Self {
        Self {
            cloner,
            walker: RepoWalker::new(walker_config),
        }
    }

    pub fn cloner(&self) -> &C {
        &self.cloner
    }

    /// Clone `url` into a fresh workspace and analyze it.
    ///
    /// Never fails: any error ends up in the report's `error` field, with the
    /// other fields left as they were when the error occurred. The workspace
    /// is removed before returning on every path.
    pub fn analyze(&self, url: &str) -> RepoAnalysis {
        let started = Instant::now();
        let mut analysis = RepoAnalysis::new(url);

        if let Err(e) = self.run(url, &mut analysis) {
            error!("error analyzing repository: {}", e);
            analysis.error = Some(e.to_string());
        }

        info!(
            "analysis of {} finished in {}",
            url,
            humantime::format_duration(started.elapsed())
        );
        analysis
    }

    fn run(&self, url: &str, analysis: &mut RepoAnalysis) -> Result<(), AnalysisError> {
        let mut workspace = Workspace::create()?;

        let result = self
            .cloner
            .clone_repo(url, workspace.path())
            .map_err(AnalysisError::from)
            .and_then(|()| self.analyze_path(workspace.path(), analysis));

        if let Err(e) = workspace.cleanup() {
            warn!("{}", e);
        }
        result
    }

    /// Walk an already checked-out repository at `root` and fill in the size,
    /// folder and submodule fields of `analysis`.
    ///
    /// Fields are only written once the walk has succeeded, so a failed walk
    /// leaves `analysis` untouched.
    pub fn analyze_path(
        &self,
        root: &Path,
        analysis: &mut RepoAnalysis,
    ) -> Result<(), AnalysisError> {
        let walked = self.walker.walk(root)?;
        let has_submodules = self.cloner.has_submodules(root);

        analysis.set_total_bytes(walked.total_bytes);
        analysis.folders = walked.folders;
        analysis.has_submodules = has_submodules;
        Ok(())
    }
}
