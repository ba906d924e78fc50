use crate::error::Result;
use config::{Config, File};
use core::str::FromStr;
use serde_derive::Deserialize;
use std::path::PathBuf;

/// Recorded shape and outcome of a test run, replayed through the reporter.
#[derive(Debug, Deserialize)]
pub struct Manifest {
    pub name: String,
    #[serde(default)]
    pub suites: Vec<SuiteEntry>,
}

#[derive(Debug, Deserialize)]
pub struct SuiteEntry {
    pub title: String,
    pub file: Option<String>,
    #[serde(default)]
    pub tests: Vec<TestEntry>,
    #[serde(default)]
    pub suites: Vec<SuiteEntry>,
}

#[derive(Debug, Deserialize)]
pub struct TestEntry {
    pub title: String,
    pub file: Option<String>,
    #[serde(with = "crate::configuration::deserialize::outcome")]
    pub outcome: Outcome,
    /// Failure reason, only meaningful for failed tests.
    pub message: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    Pass,
    Fail,
    Pending,
}

impl FromStr for Outcome {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pass" | "passed" => Ok(Outcome::Pass),
            "fail" | "failed" => Ok(Outcome::Fail),
            "pending" | "skip" | "skipped" => Ok(Outcome::Pending),
            _ => Err(format!("Outcome '{}' not supported", s)),
        }
    }
}

impl Manifest {
    /// Loads a manifest from a YAML, JSON, TOML or HJSON file.
    pub fn from(file: PathBuf) -> Result<Self> {
        let mut config = Config::new();
        config.merge(File::from(file))?;
        Ok(config.try_into()?)
    }

    pub fn test_count(&self) -> usize {
        fn count(suites: &[SuiteEntry]) -> usize {
            suites.iter().map(|s| s.tests.len() + count(&s.suites)).sum()
        }
        count(&self.suites)
    }
}
