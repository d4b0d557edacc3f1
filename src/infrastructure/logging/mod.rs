//! Logging bootstrap using `log` + `log4rs`.

mod consts;

pub use consts::*;

use log::LevelFilter;
use log4rs::{
    append::{
        console::{ConsoleAppender, Target},
        rolling_file::{
            policy::compound::{roll::fixed_window::FixedWindowRoller, trigger::size::SizeTrigger, CompoundPolicy},
            RollingFileAppender,
        },
    },
    config::{Appender, Logger, Root},
    encode::pattern::PatternEncoder,
    Config,
};
use std::io::IsTerminal;
use std::path::PathBuf;

const CONSOLE_APPENDER: &str = "stderr";
const LOG_FILE_APPENDER: &str = "log_file";

/// Parsed filter expression.
///
/// Grammar: a comma-separated list of either a bare level (the app level for
/// whitelisted crates), `root=<level>` (opt-in for all third-party crates),
/// or `<module>=<level>` (per-module override).
struct Filters {
    app_level: LevelFilter,
    root_level: LevelFilter,
    modules: Vec<(String, LevelFilter)>,
}

fn parse_filters(expr: &str) -> Filters {
    let mut filters = Filters { app_level: LevelFilter::Info, root_level: LevelFilter::Off, modules: Vec::new() };
    for part in expr.split(',').map(str::trim).filter(|part| !part.is_empty()) {
        match part.split_once('=') {
            None => {
                if let Ok(level) = part.parse() {
                    filters.app_level = level;
                }
            }
            Some((module, level)) => {
                let (module, level) = (module.trim(), level.trim());
                let Ok(level) = level.parse() else { continue };
                if module == "root" {
                    filters.root_level = level;
                } else if !module.is_empty() {
                    filters.modules.push((module.to_string(), level));
                }
            }
        }
    }
    filters
}

/// Initialize the global logger with optional file output.
///
/// - `log_dir`: directory for the rotated log file; console-only when `None`.
/// - `filters`: filter expression, e.g. `"info"`, `"covault=debug"`,
///   `"root=warn"`.
///
/// The logger is global; repeated calls are ignored. Console output goes to
/// stderr.
pub fn init_logger(log_dir: Option<&str>, filters: &str) {
    let filters = parse_filters(filters);

    let use_ansi = std::io::stderr().is_terminal();
    let console_pattern = if use_ansi { LOG_LINE_PATTERN_COLORED } else { LOG_LINE_PATTERN };
    let console = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(console_pattern)))
        .build();

    let mut config_builder = Config::builder().appender(Appender::builder().build(CONSOLE_APPENDER, Box::new(console)));
    let mut appender_names: Vec<String> = vec![CONSOLE_APPENDER.to_string()];

    if let Some(dir) = log_dir.map(str::trim).filter(|dir| !dir.is_empty()) {
        let log_path = PathBuf::from(dir).join(LOG_FILE_NAME);
        let archive_pattern = PathBuf::from(dir).join(format!("{LOG_FILE_NAME}.{{}}.gz"));

        let roller = FixedWindowRoller::builder()
            .base(1)
            .build(archive_pattern.to_str().unwrap_or("covault.log.{}.gz"), LOG_FILE_MAX_ROLLS)
            .unwrap();
        let trigger = SizeTrigger::new(LOG_FILE_MAX_SIZE);
        let policy = CompoundPolicy::new(Box::new(trigger), Box::new(roller));

        let file_appender = RollingFileAppender::builder()
            .encoder(Box::new(PatternEncoder::new(LOG_LINE_PATTERN)))
            .build(log_path, Box::new(policy))
            .unwrap();

        config_builder = config_builder.appender(Appender::builder().build(LOG_FILE_APPENDER, Box::new(file_appender)));
        appender_names.push(LOG_FILE_APPENDER.to_string());
    }

    // Whitelist our crate at the requested app level unless the user set it explicitly.
    for crate_name in WHITELISTED_CRATES {
        if !filters.modules.iter().any(|(module, _)| module == *crate_name) {
            config_builder = config_builder.logger(
                Logger::builder().appenders(appender_names.clone()).additive(false).build(*crate_name, filters.app_level),
            );
        }
    }

    for (module, level) in &filters.modules {
        config_builder = config_builder
            .logger(Logger::builder().appenders(appender_names.clone()).additive(false).build(module, *level));
    }

    let config = config_builder.build(Root::builder().appenders(appender_names).build(filters.root_level)).unwrap();
    let _ = log4rs::init_config(config);
}
