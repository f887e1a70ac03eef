//! # Data sourcing
//!
//! Everything `relx` knows about a build service comes through this module.
//!
//! - `command_exec` runs `osc` with an explicit argument vector
//! - `parsers` turns its line and XML output into records
//! - `osc` is the backend that ties the two together
//! - `DataSourcer` is the facade the commands depend on
//!
//! ```rust,no_run
//! use relx::providers::{create_data_sourcer, SearchMode};
//!
//! let sourcer = create_data_sourcer();
//! let users = sourcer.get_users("https://api.opensuse.org", "jdoe", SearchMode::Login)?;
//! # Ok::<(), relx::error::RelxError>(())
//! ```

pub mod command_exec;
pub mod osc;
pub mod parsers;
pub mod traits;
pub mod types;

pub use command_exec::{CommandOutput, CommandRunner, SystemRunner};
pub use osc::OscProvider;
pub use traits::DataProvider;
pub use types::{ExclusionRules, GroupRecord, SearchMode, UserRecord};

use crate::error::Result;

/// Stable entry point over a single backend chosen at construction.
#[derive(Debug, Clone)]
pub struct DataSourcer<P = OscProvider> {
    provider: P,
}

impl<P: DataProvider> DataSourcer<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn list_packages(&self, instance: &str, project: &str) -> Result<Vec<String>> {
        self.provider.list_packages(instance, project)
    }

    pub fn list_artifacts(
        &self,
        instance: &str,
        project: &str,
        package: &str,
        repo_name: &str,
        rules: &ExclusionRules,
    ) -> Result<Vec<String>> {
        self.provider
            .list_artifacts(instance, project, package, repo_name, rules)
    }

    pub fn get_group(&self, instance: &str, group: &str, full_list: bool) -> Result<GroupRecord> {
        self.provider.get_group(instance, group, full_list)
    }

    pub fn get_users(
        &self,
        instance: &str,
        search_text: &str,
        mode: SearchMode,
    ) -> Result<Vec<UserRecord>> {
        self.provider.get_users(instance, search_text, mode)
    }
}

/// Build the default sourcer backed by the `osc` client.
pub fn create_data_sourcer() -> DataSourcer {
    DataSourcer::new(OscProvider::new())
}
