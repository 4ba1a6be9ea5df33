use thiserror::Error;

/// Environment checks, in the order they run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    ContainerRuntime,
    ComposePlugin,
    ComposeVersion,
    JavaRuntime,
    BuildTool,
}

impl Check {
    pub const ORDER: [Check; 5] = [
        Check::ContainerRuntime,
        Check::ComposePlugin,
        Check::ComposeVersion,
        Check::JavaRuntime,
        Check::BuildTool,
    ];

    pub fn code(self) -> u8 {
        match self {
            Check::ContainerRuntime => 1,
            Check::ComposePlugin => 2,
            Check::ComposeVersion => 3,
            Check::JavaRuntime => 4,
            Check::BuildTool => 5,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EnvironmentError {
    #[error("runtime de containers '{0}' não encontrado no PATH")]
    ContainerRuntimeMissing(String),
    #[error("subcomando '{0} compose' indisponível")]
    ComposePluginMissing(String),
    #[error("docker compose '{found}' não suportado (mínimo: v{minimum})")]
    ComposeVersionUnsupported { found: String, minimum: u32 },
    #[error("runtime Java '{0}' não encontrado no PATH")]
    JavaRuntimeMissing(String),
    #[error("ferramenta de build '{0}' não encontrada no PATH")]
    BuildToolMissing(String),
}

impl EnvironmentError {
    pub fn check(&self) -> Check {
        match self {
            Self::ContainerRuntimeMissing(_) => Check::ContainerRuntime,
            Self::ComposePluginMissing(_) => Check::ComposePlugin,
            Self::ComposeVersionUnsupported { .. } => Check::ComposeVersion,
            Self::JavaRuntimeMissing(_) => Check::JavaRuntime,
            Self::BuildToolMissing(_) => Check::BuildTool,
        }
    }

    pub fn code(&self) -> u8 {
        self.check().code()
    }
}

/// Failure of one dispatched action. The payload is the already formatted cause.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaskError {
    #[error("init falhou: {0}")]
    Init(String),
    #[error("start falhou: {0}")]
    Start(String),
    #[error("stop falhou: {0}")]
    Stop(String),
    #[error("clean falhou: {0}")]
    Clean(String),
    #[error("logs falhou: {0}")]
    Logs(String),
    #[error("artefato ausente: {0}")]
    ArtifactMissing(String),
    #[error("comando repassado ao compose falhou: {0}")]
    Passthrough(String),
}

impl TaskError {
    pub fn code(&self) -> u8 {
        match self {
            Self::Init(_) => 1,
            Self::Start(_) => 2,
            Self::Stop(_) => 3,
            Self::Clean(_) => 4,
            Self::Logs(_) => 5,
            Self::ArtifactMissing(_) => 6,
            Self::Passthrough(_) => 7,
        }
    }
}

/// Top level failure of one invocation, mapped onto the process exit code.
#[derive(Debug, Error)]
pub enum ToolboxError {
    #[error("opções inválidas: {0:#}")]
    Options(anyhow::Error),
    #[error("ambiente incompleto (verificação {code}): {0}", code = .0.code())]
    Environment(#[from] EnvironmentError),
    #[error("tarefa falhou (código {code}): {0}", code = .0.code())]
    Task(#[from] TaskError),
}

impl ToolboxError {
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Options(_) => 1,
            Self::Environment(_) => 2,
            Self::Task(_) => 3,
        }
    }
}
