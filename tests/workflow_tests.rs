use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use toolbox::test_support::MockRunner;
use toolbox::{Dispatcher, OptionSet, TaskError, ToolboxConfig};

fn artifact(dir: &Path) -> PathBuf {
    dir.join("target/sonar-plugin-3.2.0.jar")
}

fn setup(dir: &Path) -> (Dispatcher, Arc<MockRunner>) {
    let config = ToolboxConfig::with_project_dir(dir).with_plugin_version("3.2.0");
    let mock = Arc::new(MockRunner::new());
    let dispatcher = Dispatcher::new(mock.clone(), Arc::new(config));
    (dispatcher, mock)
}

fn write_artifact(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir.join("target"))?;
    fs::write(artifact(dir), b"jar")?;
    Ok(())
}

fn compose_subcommands(commands: &[String]) -> Vec<String> {
    commands
        .iter()
        .filter_map(|c| c.split_once("docker-compose.yml ").map(|(_, sub)| sub.to_string()))
        .collect()
}

#[test]
fn test_init_builds_then_creates_containers() -> Result<()> {
    let temp_dir = tempfile::tempdir()?;
    let (dispatcher, mock) = setup(temp_dir.path());
    mock.touch_on("mvn clean package", artifact(temp_dir.path()));

    let options = OptionSet {
        init: true,
        ..OptionSet::default()
    };
    dispatcher.run(&options, &mut Vec::new())?;

    let commands = mock.get_commands();
    assert_eq!(commands.len(), 2);
    assert_eq!(commands[0], "mvn clean package -DskipTests");
    assert_eq!(compose_subcommands(&commands), vec!["up --build -d"]);

    Ok(())
}

#[test]
fn test_init_with_existing_artifact_skips_build() -> Result<()> {
    let temp_dir = tempfile::tempdir()?;
    write_artifact(temp_dir.path())?;
    let (dispatcher, mock) = setup(temp_dir.path());

    let options = OptionSet {
        init: true,
        ..OptionSet::default()
    };
    dispatcher.run(&options, &mut Vec::new())?;

    let commands = mock.get_commands();
    assert!(!commands.iter().any(|c| c.starts_with("mvn")));
    assert_eq!(compose_subcommands(&commands), vec!["up --build -d"]);

    Ok(())
}

#[test]
fn test_init_without_artifact_after_build_never_touches_containers() -> Result<()> {
    let temp_dir = tempfile::tempdir()?;
    let (dispatcher, mock) = setup(temp_dir.path());

    let options = OptionSet {
        init: true,
        start: true,
        ..OptionSet::default()
    };
    let err = dispatcher.run(&options, &mut Vec::new()).unwrap_err();

    assert!(matches!(err, TaskError::ArtifactMissing(_)));
    assert_eq!(err.code(), 6);
    assert_eq!(mock.get_commands(), vec!["mvn clean package -DskipTests"]);

    Ok(())
}

#[test]
fn test_failing_init_prevents_start() -> Result<()> {
    let temp_dir = tempfile::tempdir()?;
    write_artifact(temp_dir.path())?;
    let (dispatcher, mock) = setup(temp_dir.path());
    mock.set_fail_on(" up --build");

    let options = OptionSet {
        init: true,
        start: true,
        logs: true,
        ..OptionSet::default()
    };
    let err = dispatcher.run(&options, &mut Vec::new()).unwrap_err();

    assert_eq!(err.code(), 1);
    assert_eq!(compose_subcommands(&mock.get_commands()), vec!["up --build -d"]);

    Ok(())
}

#[test]
fn test_start_requires_artifact() -> Result<()> {
    let temp_dir = tempfile::tempdir()?;
    let (dispatcher, mock) = setup(temp_dir.path());

    let options = OptionSet {
        start: true,
        ..OptionSet::default()
    };
    let err = dispatcher.run(&options, &mut Vec::new()).unwrap_err();

    assert_eq!(err.code(), 6);
    assert!(mock.get_commands().is_empty());

    Ok(())
}

#[test]
fn test_all_actions_run_in_precedence_order() -> Result<()> {
    let temp_dir = tempfile::tempdir()?;
    write_artifact(temp_dir.path())?;
    let (dispatcher, mock) = setup(temp_dir.path());

    let options = OptionSet {
        logs: true,
        clean: true,
        stop: true,
        start: true,
        init: true,
        ..OptionSet::default()
    };
    dispatcher.run(&options, &mut Vec::new())?;

    assert_eq!(
        compose_subcommands(&mock.get_commands()),
        vec!["up --build -d", "start", "stop", "down -v", "logs -f"]
    );

    Ok(())
}

#[test]
fn test_each_action_failure_has_its_own_code() -> Result<()> {
    let cases = [
        (
            OptionSet {
                stop: true,
                ..OptionSet::default()
            },
            " stop",
            3,
        ),
        (
            OptionSet {
                clean: true,
                ..OptionSet::default()
            },
            " down -v",
            4,
        ),
        (
            OptionSet {
                logs: true,
                ..OptionSet::default()
            },
            " logs -f",
            5,
        ),
        (
            OptionSet {
                passthrough: vec!["ps".to_string()],
                ..OptionSet::default()
            },
            " ps",
            7,
        ),
    ];

    for (options, fail_on, code) in cases {
        let temp_dir = tempfile::tempdir()?;
        let (dispatcher, mock) = setup(temp_dir.path());
        mock.set_fail_on(fail_on);

        let err = dispatcher.run(&options, &mut Vec::new()).unwrap_err();
        assert_eq!(err.code(), code, "falha em '{fail_on}'");
    }

    Ok(())
}

#[test]
fn test_start_failure_code() -> Result<()> {
    let temp_dir = tempfile::tempdir()?;
    write_artifact(temp_dir.path())?;
    let (dispatcher, mock) = setup(temp_dir.path());
    mock.set_fail_on(" start");

    let options = OptionSet {
        start: true,
        stop: true,
        ..OptionSet::default()
    };
    let err = dispatcher.run(&options, &mut Vec::new()).unwrap_err();

    assert!(matches!(err, TaskError::Start(_)));
    assert_eq!(compose_subcommands(&mock.get_commands()), vec!["start"]);

    Ok(())
}

#[test]
fn test_spawn_failure_maps_to_action_code() -> Result<()> {
    let temp_dir = tempfile::tempdir()?;
    let (dispatcher, mock) = setup(temp_dir.path());
    mock.set_unspawnable("docker");

    let options = OptionSet {
        clean: true,
        ..OptionSet::default()
    };
    let err = dispatcher.run(&options, &mut Vec::new()).unwrap_err();

    assert_eq!(err.code(), 4);
    assert!(err.to_string().contains("Mock spawn failure"));

    Ok(())
}

#[test]
fn test_passthrough_only_runs_raw_compose() -> Result<()> {
    let temp_dir = tempfile::tempdir()?;
    let (dispatcher, mock) = setup(temp_dir.path());

    let options = OptionSet {
        passthrough: vec!["exec".into(), "sonarqube".into(), "bash".into()],
        ..OptionSet::default()
    };
    dispatcher.run(&options, &mut Vec::new())?;

    assert_eq!(
        compose_subcommands(&mock.get_commands()),
        vec!["exec sonarqube bash"]
    );

    Ok(())
}

#[test]
fn test_passthrough_is_appended_to_actions() -> Result<()> {
    let temp_dir = tempfile::tempdir()?;
    let (dispatcher, mock) = setup(temp_dir.path());

    let options = OptionSet {
        stop: true,
        logs: true,
        passthrough: vec!["sonarqube".into()],
        ..OptionSet::default()
    };
    dispatcher.run(&options, &mut Vec::new())?;

    assert_eq!(
        compose_subcommands(&mock.get_commands()),
        vec!["stop sonarqube", "logs -f sonarqube"]
    );

    Ok(())
}

#[test]
fn test_help_is_terminal() -> Result<()> {
    let temp_dir = tempfile::tempdir()?;
    let (dispatcher, mock) = setup(temp_dir.path());

    let options = OptionSet {
        help: true,
        init: true,
        clean: true,
        ..OptionSet::default()
    };
    let mut out = Vec::new();
    dispatcher.run(&options, &mut out)?;

    assert_eq!(String::from_utf8(out)?, toolbox::cli::help::USAGE);
    assert!(mock.get_commands().is_empty());

    Ok(())
}
