use crate::domain::{CommandOutput, CommandSpec, ProcessRunner};
use anyhow::{Result, bail};
use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;
use std::sync::RwLock;

pub const DEFAULT_COMPOSE_VERSION: &str = "2.27.0";

/// In-memory `ProcessRunner` that records every call.
///
/// Commands are recorded as their display line (`docker compose ... up --build -d`),
/// PATH lookups as `which:<program>`. Scripted behaviour is matched by substring
/// against the display line.
#[derive(Debug)]
pub struct MockRunner {
    commands: RwLock<Vec<String>>,
    dirs: RwLock<Vec<Option<PathBuf>>>,
    missing: RwLock<HashSet<String>>,
    unspawnable: RwLock<Vec<String>>,
    fail_on: RwLock<Vec<String>>,
    outputs: RwLock<Vec<(String, String)>>,
    touch_on: RwLock<Vec<(String, PathBuf)>>,
}

impl MockRunner {
    pub fn new() -> Self {
        let runner = Self {
            commands: RwLock::new(Vec::new()),
            dirs: RwLock::new(Vec::new()),
            missing: RwLock::new(HashSet::new()),
            unspawnable: RwLock::new(Vec::new()),
            fail_on: RwLock::new(Vec::new()),
            outputs: RwLock::new(Vec::new()),
            touch_on: RwLock::new(Vec::new()),
        };
        runner.set_output("compose version", DEFAULT_COMPOSE_VERSION);
        runner
    }

    /// `program` is no longer found on PATH
    pub fn set_missing(&self, program: &str) {
        self.missing.write().unwrap().insert(program.to_string());
    }

    /// Matching commands exit with status 1
    pub fn set_fail_on(&self, pattern: &str) {
        self.fail_on.write().unwrap().push(pattern.to_string());
    }

    /// Matching commands cannot be spawned at all
    pub fn set_unspawnable(&self, pattern: &str) {
        self.unspawnable.write().unwrap().push(pattern.to_string());
    }

    /// Captured stdout for matching commands. Later calls take precedence.
    pub fn set_output(&self, pattern: &str, stdout: &str) {
        self.outputs
            .write()
            .unwrap()
            .insert(0, (pattern.to_string(), stdout.to_string()));
    }

    /// Creates `path` (and its parents) when a matching command succeeds
    pub fn touch_on(&self, pattern: &str, path: PathBuf) {
        self.touch_on
            .write()
            .unwrap()
            .push((pattern.to_string(), path));
    }

    pub fn get_commands(&self) -> Vec<String> {
        self.commands.read().unwrap().clone()
    }

    /// Working directories of the recorded commands, in order (PATH lookups excluded)
    pub fn get_dirs(&self) -> Vec<Option<PathBuf>> {
        self.dirs.read().unwrap().clone()
    }

    fn record_command(&self, cmd: &str) {
        self.commands.write().unwrap().push(cmd.to_string());
    }

    fn execute(&self, spec: &CommandSpec) -> Result<CommandOutput> {
        let line = spec.to_string();
        self.record_command(&line);
        self.dirs
            .write()
            .unwrap()
            .push(spec.get_current_dir().map(PathBuf::from));

        if any_match(&self.unspawnable.read().unwrap(), &line) {
            bail!("Mock spawn failure on: {}", line);
        }

        if any_match(&self.fail_on.read().unwrap(), &line) {
            return Ok(CommandOutput {
                code: Some(1),
                stdout: String::new(),
                stderr: format!("Mock failure on: {line}"),
            });
        }

        for (pattern, path) in self.touch_on.read().unwrap().iter() {
            if line.contains(pattern.as_str()) {
                if let Some(parent) = path.parent() {
                    fs::create_dir_all(parent)?;
                }
                fs::write(path, b"mock")?;
            }
        }

        let stdout = self
            .outputs
            .read()
            .unwrap()
            .iter()
            .find(|(pattern, _)| line.contains(pattern.as_str()))
            .map(|(_, stdout)| format!("{stdout}\n"))
            .unwrap_or_default();

        Ok(CommandOutput {
            code: Some(0),
            stdout,
            stderr: String::new(),
        })
    }
}

impl Default for MockRunner {
    fn default() -> Self {
        Self::new()
    }
}

fn any_match(patterns: &[String], line: &str) -> bool {
    patterns.iter().any(|pattern| line.contains(pattern.as_str()))
}

impl ProcessRunner for MockRunner {
    fn run(&self, command: &CommandSpec) -> Result<CommandOutput> {
        let mut output = self.execute(command)?;
        // Inherited stdio is never captured.
        output.stdout.clear();
        output.stderr.clear();
        Ok(output)
    }

    fn capture(&self, command: &CommandSpec) -> Result<CommandOutput> {
        self.execute(command)
    }

    fn resolve(&self, program: &str) -> Option<PathBuf> {
        self.record_command(&format!("which:{}", program));

        if self.missing.read().unwrap().contains(program) {
            return None;
        }
        Some(PathBuf::from("/usr/bin").join(program))
    }
}
