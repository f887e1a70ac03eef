use crate::error::Result;
use crate::providers::types::{ExclusionRules, GroupRecord, SearchMode, UserRecord};

/// A backend able to answer the four build-service lookups.
///
/// `OscProvider` is the only implementation today; a direct HTTP client for
/// the OBS API would implement the same trait.
pub trait DataProvider {
    /// Source packages of `project`, in backend order.
    fn list_packages(&self, instance: &str, project: &str) -> Result<Vec<String>>;

    /// Built files of `package` in `repo_name`, with noise removed.
    fn list_artifacts(
        &self,
        instance: &str,
        project: &str,
        package: &str,
        repo_name: &str,
        rules: &ExclusionRules,
    ) -> Result<Vec<String>>;

    fn get_group(&self, instance: &str, group: &str, full_list: bool) -> Result<GroupRecord>;

    fn get_users(
        &self,
        instance: &str,
        search_text: &str,
        mode: SearchMode,
    ) -> Result<Vec<UserRecord>>;
}
