use std::path::{Path, PathBuf};
use anyhow::Result;
use crate::operations::{
    concat::{delete_manifests, GroupOutcome, MergeStatus, Merger},
    folder::check_folder,
    group::{group_files, FileGroup},
    scan::{scan_video_files, VideoFile},
    threshold::select_threshold,
};

/// Outcome of every group in a run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    pub outcomes: Vec<GroupOutcome>,
}

impl RunReport {
    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(GroupOutcome::is_merged)
    }

    pub fn failed(&self) -> impl Iterator<Item = &GroupOutcome> {
        self.outcomes.iter().filter(|x| !x.is_merged())
    }

    /// Exit code of the first failed group, groups that never started count as 1
    pub fn exit_code(&self) -> Result<(), u8> {
        match self.failed().next().map(|x| &x.status) {
            None => Ok(()),
            Some(MergeStatus::Failed { code }) => Err(*code),
            Some(_) => Err(1),
        }
    }
}

/// Finds segment files in `source` and merges them group by group
#[derive(Debug, Clone)]
pub struct Runner {
    /// Absolute path of the scanned folder
    pub source: PathBuf,
    pub merger: Merger,
}

impl Runner {
    /// Runner working in the current directory, `source` defaults to `/`
    pub fn new(source: Option<&Path>) -> Result<Self> {
        let work_dir = std::env::current_dir()?;
        Ok(Self {
            source: crate::util::expand_path(source)?,
            merger: Merger::from_env(work_dir),
        })
    }

    pub fn with_merger(mut self, merger: Merger) -> Self {
        self.merger = merger;
        self
    }

    /// Validate the folder and work out the groups without merging anything
    pub fn plan(&self) -> Result<Vec<FileGroup>> {
        check_folder(&self.source)?;

        let files: Vec<VideoFile> = scan_video_files(&self.source)?;

        let threshold = select_threshold(&files);
        log::debug!("Using threshold of {} bytes", threshold);

        let groups = group_files(&files, threshold);
        log::info!("{} files split into {} groups", files.len(), groups.len());

        Ok(groups)
    }

    pub fn run(&self) -> Result<RunReport> {
        let groups = self.plan()?;

        let mut report = RunReport::default();
        for group in groups.iter() {
            report.outcomes.push(self.merger.merge_group(&self.source, group));
        }

        // the merges already happened, a failed cleanup must not hide their outcome
        if let Err(err) = delete_manifests(&self.merger.work_dir) {
            log::warn!("Could not clean up manifests: {:#}", err);
        }

        Ok(report)
    }
}
