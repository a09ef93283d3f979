use crate::config::CONFIG_FILE_NAME;
use crate::io;
use anyhow::Result;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG: &str = r#"# Copilot ROI calculator configuration

# Starting values. Anything left out uses the built-in default.
[inputs]
agent_count = 50
monthly_tickets = 10000
avg_handle_time = 15        # minutes
hourly_wage = 28            # fully loaded
ai_cost_per_ticket = 0.04
time_reduction = 0.50       # fraction, not percent
fcr_improvement = 0.15
escalation_cost = 75
implementation_cost = 50000 # one-time, fixed during a session

# Allowed range for an input. Values outside it are clamped (or rejected
# with --strict).
# [ranges.hourly_wage]
# min = 15
# max = 120
# step = 1

[display]
hours_per_fte = 2080
# color = "auto"            # auto, always or never

[output]
default_format = "terminal" # terminal, json, markdown or html
"#;

pub fn init_config(force: bool) -> Result<PathBuf> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);
    init_config_at(&config_path, force)?;
    println!("Created {CONFIG_FILE_NAME} configuration file");
    Ok(config_path)
}

pub fn init_config_at(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    io::write_file(config_path, DEFAULT_CONFIG)
}
