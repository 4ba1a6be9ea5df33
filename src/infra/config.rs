use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const DEFAULT_TOOLBOX_TOML_NAME: &str = "toolbox.toml";
pub const DEFAULT_ENV_FILE: &str = ".env";
pub const DEFAULT_COMPOSE_FILE: &str = "docker-compose.yml";
pub const DEFAULT_ARTIFACT_DIR: &str = "target";
pub const DEFAULT_ARTIFACT_NAME: &str = "sonar-plugin";
pub const DEFAULT_VERSION_KEY: &str = "PLUGIN_VERSION";
pub const DEFAULT_MIN_COMPOSE_MAJOR: u32 = 2;

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct ArtifactSection {
    pub dir: Option<PathBuf>,
    pub name: Option<String>,
    pub version_key: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct ComposeSection {
    pub file: Option<PathBuf>,
    pub env_file: Option<PathBuf>,
    pub min_major_version: Option<u32>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct ToolsSection {
    pub container_runtime: Option<String>,
    pub java: Option<String>,
    pub build_tool: Option<String>,
}

/// Shape of `toolbox.toml`. Every key is optional.
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub artifact: ArtifactSection,
    #[serde(default)]
    pub compose: ComposeSection,
    #[serde(default)]
    pub tools: ToolsSection,
}

/// External executables the orchestrator drives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tools {
    pub container_runtime: String,
    pub java: String,
    pub build_tool: String,
}

impl Default for Tools {
    fn default() -> Self {
        Self {
            container_runtime: "docker".to_string(),
            java: "java".to_string(),
            build_tool: "mvn".to_string(),
        }
    }
}

/// Resolved configuration for one invocation. Loaded once in `main`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolboxConfig {
    /// Directory holding the env file, the compose file and the Maven project
    pub project_dir: PathBuf,
    pub compose_file: PathBuf,
    pub env_file: PathBuf,
    pub artifact_dir: PathBuf,
    pub artifact_name: String,
    pub version_key: String,
    /// Value of `version_key` in the env file, if any
    pub plugin_version: Option<String>,
    pub min_compose_major: u32,
    pub tools: Tools,
}

impl ToolboxConfig {
    /// Defaults rooted at `project_dir`, without reading anything from disk.
    pub fn with_project_dir(project_dir: impl Into<PathBuf>) -> Self {
        let project_dir = project_dir.into();
        Self {
            compose_file: project_dir.join(DEFAULT_COMPOSE_FILE),
            env_file: project_dir.join(DEFAULT_ENV_FILE),
            artifact_dir: project_dir.join(DEFAULT_ARTIFACT_DIR),
            artifact_name: DEFAULT_ARTIFACT_NAME.to_string(),
            version_key: DEFAULT_VERSION_KEY.to_string(),
            plugin_version: None,
            min_compose_major: DEFAULT_MIN_COMPOSE_MAJOR,
            tools: Tools::default(),
            project_dir,
        }
    }

    pub fn with_plugin_version(mut self, version: impl Into<String>) -> Self {
        self.plugin_version = Some(version.into());
        self
    }

    /// Expected location of the built plugin: `<artifact_dir>/<name>-<version>.jar`
    pub fn artifact_path(&self) -> Result<PathBuf> {
        let Some(version) = self.plugin_version.as_deref() else {
            bail!(
                "variável {} não definida em {:?}",
                self.version_key,
                self.env_file
            );
        };

        Ok(self
            .artifact_dir
            .join(format!("{}-{}.jar", self.artifact_name, version)))
    }
}

pub fn load_config(project_dir: &Path) -> Result<ToolboxConfig> {
    let expanded = shellexpand::tilde(project_dir.to_string_lossy().as_ref()).into_owned();
    let project_dir = PathBuf::from(expanded);

    let toml_path = project_dir.join(DEFAULT_TOOLBOX_TOML_NAME);
    let file_config = if toml_path.exists() {
        let content =
            fs::read_to_string(&toml_path).with_context(|| format!("lendo {:?}", toml_path))?;
        toml::from_str(&content).with_context(|| format!("parse de {:?}", toml_path))?
    } else {
        FileConfig::default()
    };

    let mut config = resolve(project_dir, file_config);

    if config.env_file.exists() {
        let content = fs::read_to_string(&config.env_file)
            .with_context(|| format!("lendo {:?}", config.env_file))?;
        let vars = parse_env_file(&content);
        config.plugin_version = vars.get(&config.version_key).cloned();
    } else {
        warn!("  Arquivo de ambiente ausente: {:?}", config.env_file);
    }

    debug!("configuração carregada: {:?}", config);
    Ok(config)
}

fn resolve(project_dir: PathBuf, file: FileConfig) -> ToolboxConfig {
    let mut config = ToolboxConfig::with_project_dir(project_dir);

    if let Some(dir) = file.artifact.dir {
        config.artifact_dir = config.project_dir.join(dir);
    }
    if let Some(name) = file.artifact.name {
        config.artifact_name = name;
    }
    if let Some(key) = file.artifact.version_key {
        config.version_key = key;
    }
    if let Some(compose_file) = file.compose.file {
        config.compose_file = config.project_dir.join(compose_file);
    }
    if let Some(env_file) = file.compose.env_file {
        config.env_file = config.project_dir.join(env_file);
    }
    if let Some(min) = file.compose.min_major_version {
        config.min_compose_major = min;
    }
    if let Some(runtime) = file.tools.container_runtime {
        config.tools.container_runtime = runtime;
    }
    if let Some(java) = file.tools.java {
        config.tools.java = java;
    }
    if let Some(build_tool) = file.tools.build_tool {
        config.tools.build_tool = build_tool;
    }

    config
}

/// Parses `KEY=VALUE` lines. Blank lines, `#` comments and an `export ` prefix are accepted.
/// Matching single or double quotes around the value are stripped; unquoted values end at
/// an inline ` #` comment.
pub fn parse_env_file(content: &str) -> HashMap<String, String> {
    let mut vars = HashMap::new();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let line = line.strip_prefix("export ").unwrap_or(line);
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };

        let key = key.trim();
        if key.is_empty() {
            continue;
        }

        vars.insert(key.to_string(), env_value(value).to_string());
    }

    vars
}

fn env_value(value: &str) -> &str {
    let value = value.trim();
    for quote in ['"', '\''] {
        if let Some(rest) = value.strip_prefix(quote) {
            if let Some(end) = rest.find(quote) {
                return &rest[..end];
            }
        }
    }

    let end = value
        .char_indices()
        .find(|&(idx, c)| c == '#' && value[..idx].ends_with(&[' ', '\t'][..]))
        .map_or(value.len(), |(idx, _)| idx);
    value[..end].trim_end()
}
