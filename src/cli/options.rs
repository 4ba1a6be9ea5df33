use clap::Parser;
use std::path::PathBuf;

/// Parsed command line. Built once in `main` and only read afterwards.
///
/// The first token that is not one of the flags below starts the pass-through list;
/// it and everything after it go to the compose tool untouched.
#[derive(Parser, Debug, Clone, Default, PartialEq, Eq)]
#[command(
    name = "toolbox",
    about = "Prepara o sandbox local do plugin (build + docker compose)",
    disable_help_flag = true,
    disable_version_flag = true,
    args_override_self = true
)]
pub struct OptionSet {
    /// Mostra a ajuda
    #[arg(short = 'h', long)]
    pub help: bool,

    /// Constrói o plugin se necessário e cria os containers
    #[arg(short = 'i', long)]
    pub init: bool,

    /// Inicia os containers existentes
    #[arg(short = 's', long)]
    pub start: bool,

    /// Para os containers
    #[arg(short = 't', long)]
    pub stop: bool,

    /// Remove containers e volumes
    #[arg(short = 'c', long)]
    pub clean: bool,

    /// Acompanha os logs dos containers
    #[arg(short = 'l', long)]
    pub logs: bool,

    /// Log detalhado
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Diretório do projeto (.env, docker-compose.yml, pom.xml)
    #[arg(long, env = "TOOLBOX_PROJECT_DIR", default_value = ".")]
    pub project_dir: PathBuf,

    /// Argumentos repassados ao docker compose
    #[arg(
        value_name = "ARGS",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub passthrough: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ShowHelp,
    Init,
    Start,
    Stop,
    Clean,
    ShowLogs,
    /// Pass-through arguments with no action flag: run them as a compose subcommand
    Passthrough,
}

impl OptionSet {
    /// Actions to execute, in the order they must run.
    pub fn actions(&self) -> Vec<Action> {
        if self.help {
            return vec![Action::ShowHelp];
        }

        let mut actions = Vec::new();
        for (enabled, action) in [
            (self.init, Action::Init),
            (self.start, Action::Start),
            (self.stop, Action::Stop),
            (self.clean, Action::Clean),
            (self.logs, Action::ShowLogs),
        ] {
            if enabled {
                actions.push(action);
            }
        }

        if actions.is_empty() {
            if self.passthrough.is_empty() {
                return vec![Action::ShowHelp];
            }
            actions.push(Action::Passthrough);
        }

        actions
    }
}
