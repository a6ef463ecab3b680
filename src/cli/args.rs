/// Arguments specific to the merge command
#[derive(Debug, Clone)]
pub struct MergeArgs {
    /// Start commit of the range; prompted for when absent.
    pub from: Option<String>,
    /// End commit of the range; reserved, the range always ends at HEAD.
    pub to: Option<String>,
    /// New commit message; prompted for when absent.
    pub msg: Option<String>,
}

/// Arguments specific to the squash command
#[derive(Debug, Clone)]
pub struct SquashArgs {
    /// Number of commits to cover; config then DEFAULT_SQUASH_COUNT apply.
    pub number: Option<u32>,
    /// Rewrite the whole history instead of the last N commits.
    pub all: bool,
}

/// Arguments specific to the reset command
#[derive(Debug, Clone)]
pub struct ResetArgs {
    /// Skip the destructive-action confirmation.
    pub yes: bool,
}

/// Arguments specific to the rebase command
#[derive(Debug, Clone)]
pub struct RebaseArgs {
    /// Upstream ref to rebase onto; defaults to the configured upstream.
    pub upstream: Option<String>,
}
