//! Sandbox planning for translated commands
//!
//! The planner shows how a command would be wrapped by an isolation tool
//! (`bwrap` or `firejail`) under the configured limits. It never spawns a
//! process and never touches the filesystem.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use aether_core::prelude::*;
use aether_core::CommandContext;
use serde::{Deserialize, Serialize};

/// Constraints for command execution
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SandboxConfig {
    #[serde(default = "default_base_workdir")]
    pub base_workdir: PathBuf,

    /// Executable basenames that may be planned
    #[serde(default = "default_allowed_binaries")]
    pub allowed_binaries: Vec<String>,

    #[serde(default)]
    pub allow_network: bool,

    #[serde(default = "default_memory_limit_mb")]
    pub memory_limit_mb: u32,

    #[serde(default = "default_cpu_shares")]
    pub cpu_shares: u32,
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            base_workdir: default_base_workdir(),
            allowed_binaries: default_allowed_binaries(),
            allow_network: false,
            memory_limit_mb: default_memory_limit_mb(),
            cpu_shares: default_cpu_shares(),
        }
    }
}

fn default_base_workdir() -> PathBuf {
    PathBuf::from("/tmp/aetheros-sandbox")
}

fn default_allowed_binaries() -> Vec<String> {
    ["ls", "cat", "echo", "uname", "df"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_memory_limit_mb() -> u32 {
    512
}

fn default_cpu_shares() -> u32 {
    512
}

/// Isolation tool found on `PATH`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IsolationTool {
    Bubblewrap(PathBuf),
    Firejail(PathBuf),
}

impl IsolationTool {
    /// Look for `bwrap`, then `firejail`
    pub fn detect() -> Option<Self> {
        which::which("bwrap")
            .map(IsolationTool::Bubblewrap)
            .or_else(|_| which::which("firejail").map(IsolationTool::Firejail))
            .ok()
    }

    pub fn binary(&self) -> &Path {
        match self {
            IsolationTool::Bubblewrap(path) | IsolationTool::Firejail(path) => path,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            IsolationTool::Bubblewrap(_) => "bwrap",
            IsolationTool::Firejail(_) => "firejail",
        }
    }
}

/// Builds sandbox-enforced argv for allowlisted commands
#[derive(Debug, Clone)]
pub struct SandboxPlanner {
    config: SandboxConfig,
    tool: Option<IsolationTool>,
}

impl SandboxPlanner {
    /// Planner using whichever isolation tool is installed
    pub fn new(config: SandboxConfig) -> Self {
        let tool = IsolationTool::detect();
        debug!(
            "Sandbox isolation tool: {}",
            tool.as_ref().map_or("none", IsolationTool::name)
        );
        Self { config, tool }
    }

    /// Planner with an explicit isolation tool (or none)
    pub fn with_tool(config: SandboxConfig, tool: Option<IsolationTool>) -> Self {
        Self { config, tool }
    }

    pub fn config(&self) -> &SandboxConfig {
        &self.config
    }

    pub fn tool(&self) -> Option<&IsolationTool> {
        self.tool.as_ref()
    }

    /// Whether the command's executable basename is allowlisted
    pub fn is_allowed(&self, command: &[String]) -> bool {
        command
            .first()
            .map(|program| executable_name(program))
            .is_some_and(|name| self.config.allowed_binaries.iter().any(|b| *b == name))
    }

    /// Build the argv that would run `command` inside the sandbox
    pub fn build_command(&self, command: &[String]) -> Result<Vec<String>> {
        let program = command.first().ok_or(Error::EmptyCommand)?;
        if !self.is_allowed(command) {
            return Err(Error::command_not_allowed(program.clone()));
        }

        let wrapped = match &self.tool {
            Some(tool) => {
                let mut argv = self.isolation_flags(tool);
                argv.extend(command.iter().cloned());
                argv
            }
            None => command.to_vec(),
        };
        Ok(wrapped)
    }

    fn isolation_flags(&self, tool: &IsolationTool) -> Vec<String> {
        let workdir = self.config.base_workdir.display().to_string();
        let mut flags = vec![tool.binary().display().to_string()];

        match tool {
            IsolationTool::Bubblewrap(_) => {
                if !self.config.allow_network {
                    flags.push("--unshare-net".to_string());
                }
                for dir in ["/usr", "/bin", "/lib", "/lib64"] {
                    flags.extend(["--ro-bind".to_string(), dir.to_string(), dir.to_string()]);
                }
                flags.extend([
                    "--dir".to_string(),
                    workdir.clone(),
                    "--chdir".to_string(),
                    workdir,
                    "--die-with-parent".to_string(),
                    "--new-session".to_string(),
                ]);
            }
            IsolationTool::Firejail(_) => {
                flags.extend([
                    "--quiet".to_string(),
                    "--private".to_string(),
                    "--private-tmp".to_string(),
                ]);
                if !self.config.allow_network {
                    flags.push("--net=none".to_string());
                }
                flags.push(format!("--cpu={}", self.config.cpu_shares));
                flags.push(format!("--rlimit-as={}M", self.config.memory_limit_mb));
            }
        }

        flags.push("--".to_string());
        flags
    }

    /// Summary of the active sandbox constraints
    /// Context a request is translated under when this planner runs it
    pub fn request_context(&self) -> CommandContext {
        CommandContext {
            working_directory: self.config.base_workdir.display().to_string(),
            allow_network: self.config.allow_network,
            ..CommandContext::default()
        }
    }

    pub fn describe(&self) -> BTreeMap<&'static str, String> {
        let mut allowed = self.config.allowed_binaries.clone();
        allowed.sort();

        BTreeMap::from([
            ("base_workdir", self.config.base_workdir.display().to_string()),
            ("allowed_binaries", allowed.join(",")),
            (
                "network",
                if self.config.allow_network {
                    "enabled"
                } else {
                    "disabled"
                }
                .to_string(),
            ),
            ("memory_limit_mb", self.config.memory_limit_mb.to_string()),
            ("cpu_shares", self.config.cpu_shares.to_string()),
            (
                "isolation",
                self.tool
                    .as_ref()
                    .map_or("none", IsolationTool::name)
                    .to_string(),
            ),
        ])
    }
}

fn executable_name(program: &str) -> &str {
    Path::new(program)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(program)
}
