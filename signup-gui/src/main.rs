#![windows_subsystem = "windows"]

use std::{error::Error, io::Write, path::PathBuf, process};

#[cfg(target_os = "linux")]
use iced::window::settings::PlatformSpecific;
use iced::{Settings, Size};
use tracing::error;

use signup_ui::{component::text, font};

use signup_gui::{
    dir::SignupDirectory,
    gui::{Config, GUI},
    logger::parse_log_level,
    VERSION,
};

#[derive(Debug, PartialEq)]
enum Arg {
    DatadirPath(SignupDirectory),
}

fn parse_args(args: Vec<String>) -> Result<Vec<Arg>, Box<dyn Error>> {
    let mut res = Vec::new();

    if args.len() > 1 && (args[1] == "--version" || args[1] == "-v") {
        eprintln!("{}", VERSION);
        process::exit(1);
    }

    if args.len() > 1 && (args[1] == "--help" || args[1] == "-h") {
        eprintln!(
            r#"
Usage: signup-gui [OPTIONS]

Options:
    --datadir <PATH>    Path of signup datadir
    -v, --version       Display signup-gui version
    -h, --help          Print help

Environment:
    SIGNUP_API_URL      Base url of the registration api
    LOG_LEVEL           One of error, warn, info, debug, trace
        "#
        );
        process::exit(1);
    }

    let mut args = args.into_iter().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--datadir" {
            match args.next() {
                Some(a) => res.push(Arg::DatadirPath(SignupDirectory::new(PathBuf::from(a)))),
                None => return Err("missing arg to --datadir".into()),
            }
        } else {
            return Err(format!("unknown argument '{}'", arg).into());
        }
    }

    Ok(res)
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = parse_args(std::env::args().collect())?;
    let config = match args.as_slice() {
        [] => Config::new(SignupDirectory::new_default()?),
        [Arg::DatadirPath(datadir_path)] => Config::new(datadir_path.clone()),
        _ => {
            return Err("Unknown args combination".into());
        }
    };

    let log_level = parse_log_level()?;

    setup_panic_hook();

    let settings = Settings {
        id: Some("Signup".to_string()),
        antialiasing: false,

        default_text_size: text::P1_SIZE.into(),
        default_font: font::REGULAR,
        ..Default::default()
    };

    #[allow(unused_mut)]
    let mut window_settings = iced::window::Settings {
        size: Size {
            width: 900.0,
            height: 800.0,
        },
        position: iced::window::Position::Centered,
        min_size: Some(Size {
            width: 480.0,
            height: 640.0,
        }),
        ..Default::default()
    };

    #[cfg(target_os = "linux")]
    {
        window_settings.platform_specific = PlatformSpecific {
            application_id: "Signup".to_string(),
            ..Default::default()
        };
    }

    if let Err(e) = iced::application(GUI::title, GUI::update, GUI::view)
        .theme(GUI::theme)
        .subscription(GUI::subscription)
        .settings(settings)
        .window(window_settings)
        .run_with(move || GUI::new((config, log_level)))
    {
        error!("{}", e);
        Err(format!("Failed to launch UI: {}", e).into())
    } else {
        Ok(())
    }
}

// A panic in any thread should stop the main thread, and print the panic.
fn setup_panic_hook() {
    std::panic::set_hook(Box::new(move |panic_info| {
        error!("Panic occurred");
        let file = panic_info
            .location()
            .map(|l| l.file())
            .unwrap_or_else(|| "'unknown'");
        let line = panic_info
            .location()
            .map(|l| l.line().to_string())
            .unwrap_or_else(|| "'unknown'".to_string());

        let bt = backtrace::Backtrace::new();
        let info = panic_info
            .payload()
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| panic_info.payload().downcast_ref::<String>().cloned());
        error!(
            "panic occurred at line {} of file {}: {:?}\n{:?}",
            line, file, info, bt
        );

        let _ = std::io::stdout().flush();
        std::process::exit(1);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_args() {
        assert!(parse_args(vec!["signup-gui".into(), "--meth".into()]).is_err());
        assert!(parse_args(vec!["signup-gui".into(), "--datadir".into()]).is_err());
        assert!(parse_args(vec!["signup-gui".into()]).unwrap().is_empty());
        assert_eq!(
            Some(vec![Arg::DatadirPath(SignupDirectory::new(PathBuf::from(
                "hello"
            )))]),
            parse_args(
                "signup-gui --datadir hello"
                    .split(' ')
                    .map(|a| a.to_string())
                    .collect()
            )
            .ok()
        );
    }
}
