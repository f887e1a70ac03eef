use crate::artifacts::filter::filter_artifacts;
use crate::constants::OSC_PROGRAM;
use crate::error::Result;
use crate::providers::command_exec::{CommandRunner, SystemRunner};
use crate::providers::parsers;
use crate::providers::traits::DataProvider;
use crate::providers::types::{ExclusionRules, GroupRecord, SearchMode, UserRecord};

/// Backend that answers every query by shelling out to `osc`.
#[derive(Debug, Clone)]
pub struct OscProvider<R = SystemRunner> {
    program: String,
    runner: R,
}

impl OscProvider<SystemRunner> {
    pub fn new() -> Self {
        Self::with_runner(SystemRunner)
    }
}

impl Default for OscProvider<SystemRunner> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: CommandRunner> OscProvider<R> {
    pub fn with_runner(runner: R) -> Self {
        Self {
            program: OSC_PROGRAM.to_string(),
            runner,
        }
    }

    /// Use a different `osc` executable (path or name on `PATH`).
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// `osc -A <instance> <args...>`
    fn argv(&self, instance: &str, args: &[&str]) -> Vec<String> {
        let mut argv = Vec::with_capacity(args.len() + 3);
        argv.push(self.program.clone());
        argv.push("-A".to_string());
        argv.push(instance.to_string());
        argv.extend(args.iter().map(|a| a.to_string()));
        argv
    }

    fn stdout(&self, instance: &str, args: &[&str]) -> Result<String> {
        Ok(self.runner.run(&self.argv(instance, args))?.stdout)
    }
}

impl<R: CommandRunner> DataProvider for OscProvider<R> {
    fn list_packages(&self, instance: &str, project: &str) -> Result<Vec<String>> {
        let stdout = self.stdout(instance, &["ls", project])?;
        Ok(parsers::parse_lines(&stdout))
    }

    fn list_artifacts(
        &self,
        instance: &str,
        project: &str,
        package: &str,
        repo_name: &str,
        rules: &ExclusionRules,
    ) -> Result<Vec<String>> {
        let stdout = self.stdout(instance, &["ls", project, package, "-b", "-r", repo_name])?;
        let lines = parsers::parse_lines(&stdout);
        Ok(filter_artifacts(&lines, repo_name, rules))
    }

    fn get_group(&self, instance: &str, group: &str, full_list: bool) -> Result<GroupRecord> {
        let path = format!("/group/{}", group);
        let stdout = self.stdout(instance, &["api", &path])?;
        parsers::parse_group(&stdout, full_list)
    }

    fn get_users(
        &self,
        instance: &str,
        search_text: &str,
        mode: SearchMode,
    ) -> Result<Vec<UserRecord>> {
        let path = format!("/search/person?match={}", mode.match_expression(search_text));
        let stdout = self.stdout(instance, &["api", &path])?;
        parsers::parse_users(&stdout)
    }
}
