use std::{env, fs, path::PathBuf};

use tracing::info;

use crate::filter_structs::filter_config_struct::FilterConfig;

/// Loads the filter definitions of one transformation step from a TOML file.
pub struct FilterConfigLoader {
    pub transformation_name: String,
    pub step_name: String,
}

impl FilterConfigLoader {
    pub fn new(transformation_name: impl Into<String>, step_name: impl Into<String>) -> Self {
        Self {
            transformation_name: transformation_name.into(),
            step_name: step_name.into(),
        }
    }

    /// Load the filter configuration for this transformation step.
    ///
    /// Reads `configuration_data/{transformation}-{step}-filters.toml` under
    /// the current directory. A missing file yields the default (empty)
    /// configuration; a malformed file is a hard error.
    pub fn load_filter_config(&self) -> FilterConfig {
        let mut conf_file_path = PathBuf::new();
        conf_file_path.push(env::current_dir().unwrap());
        conf_file_path.push("configuration_data");
        conf_file_path.push(format!(
            "{}-{}-filters.toml",
            self.transformation_name, self.step_name
        ));

        info!("Configuration file path: {:?}", conf_file_path.as_os_str());

        let read_conf = fs::read_to_string(conf_file_path.as_os_str());

        match read_conf {
            Ok(conf) => match toml::from_str(&conf) {
                Ok(conf) => conf,
                Err(e) => {
                    panic!("Error parsing configuration file: {:?}", e);
                }
            },
            Err(_) => FilterConfig::default(),
        }
    }
}
