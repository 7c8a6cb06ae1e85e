use iced::{Subscription, Task};
use tracing::{error, info, warn};
use tracing_subscriber::filter::LevelFilter;

use signup_ui::{theme::Theme, widget::Element};

use crate::{
    app::{self, config::Config as AppConfig, config::ConfigError},
    dir::SignupDirectory,
    logger::setup_logger,
    services::registration::RegistrationClient,
    VERSION,
};

pub struct GUI {
    app: app::App,
}

#[derive(Debug, Clone)]
pub enum Message {
    CtrlC,
    App(app::Message),
}

async fn ctrl_c() -> Result<(), ()> {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("{}", e);
    };
    info!("Signal received, exiting");
    Ok(())
}

/// Reads the gui configuration file. Defaults are returned along with the error if it could
/// not be used, so that the caller can report it once logging is set up.
fn read_config(directory: &SignupDirectory) -> (AppConfig, Option<ConfigError>) {
    match AppConfig::from_file(&directory.config_path()) {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    }
}

/// Writes a default configuration file if there was none, logs why the file was ignored
/// otherwise.
fn recover_config(directory: &SignupDirectory, config: &AppConfig, error: ConfigError) {
    let path = directory.config_path();
    match error {
        ConfigError::NotFound => {
            info!("No configuration file at {}, writing defaults", path.display());
            if let Err(e) = config.to_file(&path) {
                warn!("Failed to write default configuration: {}", e);
            }
        }
        e => warn!("Ignoring configuration file {}: {}", path.display(), e),
    }
}

impl GUI {
    pub fn title(&self) -> String {
        format!("Signup v{}", VERSION)
    }

    pub fn new((config, log_level): (Config, Option<LevelFilter>)) -> (GUI, Task<Message>) {
        if !config.signup_directory.exists() {
            if let Err(e) = config.signup_directory.init() {
                eprintln!("Failed to create data directory: {}", e);
            }
        }
        let (app_config, config_error) = read_config(&config.signup_directory);
        let log_level = log_level
            .or_else(|| app_config.log_level().ok())
            .unwrap_or(LevelFilter::INFO);
        if let Err(e) = setup_logger(log_level, &config.signup_directory) {
            eprintln!("Error while setting up logger: {}", e);
        }
        if let Some(e) = config_error {
            recover_config(&config.signup_directory, &app_config, e);
        }

        info!(
            "Using data directory {}",
            config.signup_directory.path().display()
        );
        let api_url = app_config.api_url();
        info!("Using registration api at {}", api_url);
        let (app, cmd) = app::App::new(RegistrationClient::new(api_url), &app_config);
        (
            Self { app },
            Task::batch(vec![
                Task::perform(ctrl_c(), |_| Message::CtrlC),
                cmd.map(Message::App),
            ]),
        )
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::CtrlC => iced::exit(),
            Message::App(msg) => self.app.update(msg).map(Message::App),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        self.app.view().map(Message::App)
    }

    pub fn subscription(&self) -> Subscription<Message> {
        self.app.subscription().map(Message::App)
    }

    pub fn theme(&self) -> Theme {
        self.app.theme()
    }
}

pub struct Config {
    pub signup_directory: SignupDirectory,
}

impl Config {
    pub fn new(signup_directory: SignupDirectory) -> Self {
        Self { signup_directory }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dir::GUI_LOG_FILE_NAME;

    #[test]
    fn writes_default_config_when_missing() {
        let tmp = tempfile::tempdir().unwrap();
        let directory = SignupDirectory::new(tmp.path().to_path_buf());

        let (config, error) = read_config(&directory);
        assert_eq!(config, AppConfig::default());
        assert_eq!(error, Some(ConfigError::NotFound));
        assert!(!directory.config_path().exists());

        recover_config(&directory, &config, ConfigError::NotFound);
        assert_eq!(
            AppConfig::from_file(&directory.config_path()).unwrap(),
            config
        );
    }

    #[test]
    fn invalid_config_falls_back_to_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let directory = SignupDirectory::new(tmp.path().to_path_buf());
        std::fs::write(directory.config_path(), "log_level = \"loud\"\n").unwrap();

        let (config, error) = read_config(&directory);
        assert_eq!(config, AppConfig::default());
        assert!(matches!(
            error,
            Some(ConfigError::InvalidField("log_level", _))
        ));
    }

    // The only test of this binary installing the global subscriber.
    #[test]
    fn invalid_config_is_reported_in_log_file() {
        let tmp = tempfile::tempdir().unwrap();
        let directory = SignupDirectory::new(tmp.path().to_path_buf());
        std::fs::write(directory.config_path(), "log_level = \"loud\"\n").unwrap();

        let (gui, _) = GUI::new((Config::new(directory.clone()), None));
        assert_eq!(gui.theme(), Theme::light());

        let log = std::fs::read_to_string(tmp.path().join(GUI_LOG_FILE_NAME)).unwrap();
        assert!(log.contains("Ignoring configuration file"));
        assert!(log.contains("Using registration api at"));
        // The invalid file is left untouched.
        assert_eq!(
            std::fs::read_to_string(directory.config_path()).unwrap(),
            "log_level = \"loud\"\n"
        );
    }
}
