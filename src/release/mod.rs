use semver::Version;

/// Classification of a version string, governing whether the update
/// notifier may be put to sleep for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseType {
    /// A stable release (plain semver, no pre-release tag or build metadata)
    Production,
    /// A pre-release or development build
    Snapshot,
    /// Anything we could not parse as a version
    Unknown,
}

impl ReleaseType {
    /// Whether the user may snooze update prompts for this release type.
    /// Only production releases qualify; snapshot users should always be
    /// told about newer builds.
    pub fn allows_sleep(&self) -> bool {
        *self == ReleaseType::Production
    }
}

/// Classify a version string into a release type
///
/// Total over any input: unparseable strings (including empty) fall back to
/// `Unknown` rather than erroring.
pub fn classify(version: &str) -> ReleaseType {
    let trimmed = version.trim();
    let trimmed = trimmed.strip_prefix('v').unwrap_or(trimmed);

    let Ok(parsed) = Version::parse(trimmed) else {
        return ReleaseType::Unknown;
    };

    if parsed.pre.is_empty() && parsed.build.is_empty() {
        ReleaseType::Production
    } else {
        ReleaseType::Snapshot
    }
}
