//! Property-test run profile parsing for CI and local overrides.
//!
//! Suites call [`ProptestRunProfile::load`] with their own defaults; CI can
//! raise or lower case counts for every suite at once through the
//! environment.

use std::env;

/// Environment variable overriding proptest case counts.
pub const TONARI_PBT_CASES_ENV_KEY: &str = "TONARI_PBT_CASES";
/// Environment variable toggling forked proptest execution.
pub const TONARI_PBT_FORK_ENV_KEY: &str = "TONARI_PBT_FORK";

/// Runtime profile for property-test execution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
    fork: bool,
}

impl ProptestRunProfile {
    /// Loads a profile from the environment, falling back to the supplied
    /// defaults for unset or invalid values.
    ///
    /// # Examples
    ///
    /// ```
    /// use tonari_test_support::ci::property_test_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(64, false);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32, default_fork: bool) -> Self {
        Self::from_overrides(
            env::var(TONARI_PBT_CASES_ENV_KEY).ok().as_deref(),
            env::var(TONARI_PBT_FORK_ENV_KEY).ok().as_deref(),
            default_cases,
            default_fork,
        )
    }

    /// Builds a profile from raw override strings.
    ///
    /// # Examples
    ///
    /// ```
    /// use tonari_test_support::ci::property_test_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::from_overrides(Some("12"), Some("yes"), 64, false);
    /// assert_eq!(profile.cases(), 12);
    /// assert!(profile.fork());
    /// ```
    #[must_use]
    pub fn from_overrides(
        cases: Option<&str>,
        fork: Option<&str>,
        default_cases: u32,
        default_fork: bool,
    ) -> Self {
        Self {
            cases: resolve(TONARI_PBT_CASES_ENV_KEY, cases, default_cases, parse_cases),
            fork: resolve(TONARI_PBT_FORK_ENV_KEY, fork, default_fork, parse_bool),
        }
    }

    /// Number of cases to run per property.
    #[must_use]
    pub fn cases(&self) -> u32 {
        self.cases
    }

    /// Whether to run proptest cases in forked subprocesses.
    #[must_use]
    pub fn fork(&self) -> bool {
        self.fork
    }
}

fn resolve<T>(
    key: &'static str,
    raw: Option<&str>,
    default: T,
    parser: fn(&str) -> Result<T, String>,
) -> T {
    let Some(raw) = raw else {
        return default;
    };
    parser(raw).unwrap_or_else(|reason| {
        tracing::warn!(
            env = key,
            raw = %raw,
            reason = %reason,
            "invalid property-test profile override; using default",
        );
        default
    })
}

fn parse_cases(raw: &str) -> Result<u32, String> {
    match raw.trim().parse::<u32>() {
        Ok(0) => Err("cases must be > 0".to_owned()),
        Ok(cases) => Ok(cases),
        Err(error) => Err(format!("parse error: {error}")),
    }
}

fn parse_bool(raw: &str) -> Result<bool, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err("expected one of: true/false/1/0/yes/no/on/off".to_owned()),
    }
}
