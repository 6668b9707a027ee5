use config::{Config, Value};
use serde::{Deserialize, Serialize};
///  struct GetDefault;
///  struct GetOption;
///  struct Has;
///
///  fn settings() -> &'static RwLock<Config>
///  fn numkit() -> &'static RwLock<Numkit>
///  fn defaults() -> Defaults
///
///  struct Numkit
use std::sync::{OnceLock, RwLock};

//get or default
pub struct GetDefault;
pub struct GetOption;
pub struct Has;

/// get settings
/// it's not recommand to call settings() directly
/// use numkit() / defaults() or GetOption::xxx | GetDefault::xxx | Has::has
///
/// # Returns
/// * `&'static RwLock<Config>` - config instance
pub fn settings() -> &'static RwLock<Config> {
    static CONFIG: OnceLock<RwLock<Config>> = OnceLock::new();
    CONFIG.get_or_init(|| RwLock::new(init_config()))
}

/// get numkit instance
/// # Returns
/// * `&'static RwLock<Numkit>` - numkit instance, built-in defaults when nothing is configured
pub fn numkit() -> &'static RwLock<Numkit> {
    static NUMKIT: OnceLock<RwLock<Numkit>> = OnceLock::new();
    NUMKIT.get_or_init(|| {
        let loaded = match settings().read() {
            Ok(guard) => load_numkit(&guard),
            Err(e) => {
                tracing::warn!("settings lock poisoned: {}", e);
                Numkit::default()
            },
        };
        RwLock::new(loaded)
    })
}

/// deserialize the numkit root from a built config; fields missing from every source keep their defaults
pub fn load_numkit(config: &Config) -> Numkit {
    config.clone().try_deserialize::<Numkit>().unwrap_or_else(|e| {
        tracing::warn!("numkit settings invalid, using defaults: {}", e);
        Numkit::default()
    })
}

/// snapshot of the formatting defaults
pub fn defaults() -> Defaults {
    match numkit().read() {
        Ok(guard) => guard.defaults.clone(),
        Err(_) => Defaults::default(),
    }
}

/// init config
/// # Returns
/// * `Config` - config instance
fn init_config() -> Config {
    //development production testing
    let run_mode = std::env::var("NUMK_RUN_MODE").unwrap_or("development".to_string());

    tracing::info!("NUMK_RUN_MODE={}", run_mode);

    let config_path = std::env::var("NUMK_CONFIG_PATH").unwrap_or("config".to_string());

    tracing::info!("Config file path: {}", config_path);

    let conf = config::File::with_name(&format!("{config_path}/numkit.yml")).required(false);
    let mode = config::File::with_name(&format!("{config_path}/{run_mode}.yml")).required(false);
    let local = config::File::with_name(&format!("{config_path}/local.yml")).required(false);

    #[allow(unused_mut)]
    let mut builder = Config::builder().add_source(conf).add_source(mode).add_source(local);
    #[cfg(test)]
    {
        use crate::tools::tests::tools::project_dir;

        let tests_load = format!("{}/tests/using-test-config.yml", project_dir().to_string_lossy());
        tracing::info!("test mode, loading: {}", tests_load);

        builder = builder.add_source(config::File::with_name(tests_load.as_str()).required(false));
    }

    let builder = builder.add_source(environment());

    builder.build().unwrap_or_else(|e| {
        tracing::warn!("config build failed, falling back to empty config: {}", e);
        Config::default()
    })
}

/// `NUMK_DEFAULTS__PRECISION=3` overrides `defaults.precision`
fn environment() -> config::Environment {
    config::Environment::with_prefix("NUMK").prefix_separator("_").separator("__").try_parsing(true)
}

/// make getter for settings, if not found, return default value
macro_rules! make_setting_getter_default {
    ($name:ident, $type:ty, $getter:ident) => {
        pub fn $name(k: &str, default: $type) -> $type {
            match settings().read() {
                Ok(guard) => guard.$getter(k).unwrap_or(default),
                Err(_) => default,
            }
        }
    };
}

/// make getter for settings, return Option value
macro_rules! make_setting_getter_option {
    ($name:ident, $type:ty, $getter:ident) => {
        pub fn $name(k: &str) -> Option<$type> {
            match settings().read() {
                Ok(guard) => guard.$getter(k).ok(),
                Err(_) => None,
            }
        }
    };
}

/// make getter for settings
macro_rules! make_setting_getter {
    ($name:ident, $type:ty, $getter:ident) => {
        impl GetDefault {
            make_setting_getter_default!($name, $type, $getter);
        }

        impl GetOption {
            make_setting_getter_option!($name, $type, $getter);
        }
    };
}

make_setting_getter!(string, String, get_string);
make_setting_getter!(boolean, bool, get_bool);
make_setting_getter!(int, i64, get_int);
make_setting_getter!(float, f64, get_float);
make_setting_getter!(table, std::collections::HashMap<String, Value>, get_table);

impl GetOption {
    pub fn get<'de, T: Deserialize<'de>>(key: &str) -> Option<T> {
        match settings().read() {
            Ok(guard) => guard.get(key).ok(),
            Err(_) => None,
        }
    }
}

impl GetDefault {
    pub fn get<'de, T: Deserialize<'de>>(key: &str, default: T) -> T {
        match settings().read() {
            Ok(guard) => guard.get(key).unwrap_or(default),
            Err(_) => default,
        }
    }
}

impl Has {
    pub fn has<T: for<'a> serde::Deserialize<'a>>(k: &str) -> bool {
        match settings().read() {
            Ok(guard) => guard.get::<T>(k).is_ok(),
            Err(_) => false,
        }
    }
}

/// Numkit config
/// # Fields
/// * `name` - application name
/// * `short` - four letter short name, used as the first part of error codes
/// * `defaults` - formatting defaults
/// * `log` - log config
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct Numkit {
    pub name: String,
    pub short: String,
    pub defaults: Defaults,
    pub log: Option<Log>,
}

/// Formatting defaults, used by the functions without an explicit precision / locale
/// # Fields
/// * `precision` - decimals kept by abbreviate
/// * `size_precision` - decimals kept by file_size
/// * `percent_decimals` - decimals kept by percentage
/// * `scientific_precision` - mantissa decimals of to_scientific
/// * `locale` - currency locale
/// * `currency` - currency code
/// * `epsilon` - tolerance of approximately_d
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct Defaults {
    pub precision: usize,
    pub size_precision: usize,
    pub percent_decimals: usize,
    pub scientific_precision: usize,
    pub locale: String,
    pub currency: String,
    pub epsilon: f64,
}

/// Numkit log config
/// # Fields
/// * `level` - EnvFilter directives
/// * `console` - log to stdout
/// * `dirs` - daily rolling log directory, empty to disable
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Log {
    pub level: String,
    pub console: bool,
    pub dirs: String,
}

impl Default for Log {
    fn default() -> Self {
        Log { level: "info".to_string(), console: true, dirs: "".to_string() }
    }
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            precision: 1,
            size_precision: 2,
            percent_decimals: 2,
            scientific_precision: 2,
            locale: "en_US".to_string(),
            currency: "USD".to_string(),
            epsilon: 1e-9,
        }
    }
}

impl Default for Numkit {
    fn default() -> Self {
        Self { name: "Numkit".to_string(), short: "NUMK".to_string(), defaults: Default::default(), log: None }
    }
}
