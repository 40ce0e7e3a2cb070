use std::str::FromStr;

use anyhow::anyhow;
use anyhow::Context;
use anyhow::Result;
use log::LevelFilter;
use log4rs::append::console::ConsoleAppender;
use log4rs::append::console::Target;
use log4rs::config::Appender;
use log4rs::config::Config;
use log4rs::config::Root;
use log4rs::encode::pattern::PatternEncoder;

static LOG_PATTERN: &str = "{h({l})} {m}{n}";

pub fn get_log_level(verbose: bool, configured: &str) -> Result<LevelFilter> {
    if verbose {
        return Ok(LevelFilter::Debug);
    }
    LevelFilter::from_str(configured).map_err(|_| anyhow!("Unknown log level: {}", configured))
}

pub fn init_logging(level: LevelFilter) -> Result<()> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))
        .context("Invalid logging configuration")?;
    log4rs::init_config(config).context("Failed to initialize logging")?;
    Ok(())
}
