use anyhow::Result;

use crate::infra::config::AppConfig;

pub trait ConfigAdapter {
    fn load(&self) -> Result<AppConfig>;

    /// Human-readable origin of the loaded values.
    fn describe_source(&self) -> String;
}
