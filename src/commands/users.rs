use crate::error::{RelxError, Result};
use crate::providers::{DataProvider, DataSourcer, GroupRecord, SearchMode, UserRecord};
use crate::ui::{self, progress::Spinner};
use crate::utils::machine_output::{self, OutputFormat};
use crate::utils::sanitize;

/// What the users command looks up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    Group,
    User(SearchMode),
}

impl Lookup {
    /// Map the CLI selector flags; exactly one must be set.
    pub fn from_flags(group: bool, login: bool, email: bool, name: bool) -> Result<Self> {
        match (group, login || email || name) {
            (true, false) => Ok(Lookup::Group),
            (false, true) => SearchMode::from_flags(login, email, name).map(Lookup::User),
            (false, false) => Err(RelxError::InvalidQuery(
                "select one of --group, --login, --email or --name".to_string(),
            )),
            (true, true) => Err(RelxError::InvalidQuery(
                "--group cannot be combined with a user search mode".to_string(),
            )),
        }
    }
}

/// Options for the users command
pub struct UsersOptions {
    pub instance: String,
    pub lookup: Lookup,
    pub search_text: String,
    pub format: OutputFormat,
}

pub fn run<P: DataProvider>(sourcer: &DataSourcer<P>, options: UsersOptions) -> Result<()> {
    match options.lookup {
        Lookup::Group => {
            sanitize::validate_group_name(&options.search_text)?;
            let group = find_group(sourcer, &options)?;
            if options.format.is_machine() {
                return machine_output::emit_v1("users", group, vec![], vec![], options.format);
            }
            display_group(&group);
        }
        Lookup::User(mode) => {
            sanitize::validate_search_text(&options.search_text)?;
            let users = find_users(sourcer, &options, mode)?;
            if options.format.is_machine() {
                return machine_output::emit_v1("users", users, vec![], vec![], options.format);
            }
            display_users(&users);
        }
    }
    Ok(())
}

/// Group lookup; always requests the full member listing.
pub fn find_group<P: DataProvider>(
    sourcer: &DataSourcer<P>,
    options: &UsersOptions,
) -> Result<GroupRecord> {
    let mut spinner = spinner_for(options, "Looking up group");
    let group = sourcer.get_group(&options.instance, &options.search_text, true);
    spinner.stop();

    let group = group?;
    if group.is_empty() {
        return Err(RelxError::NotFound(format!(
            "{} not found.",
            options.search_text
        )));
    }
    Ok(group)
}

pub fn find_users<P: DataProvider>(
    sourcer: &DataSourcer<P>,
    options: &UsersOptions,
    mode: SearchMode,
) -> Result<Vec<UserRecord>> {
    let mut spinner = spinner_for(options, "Searching users");
    ui::debug(&format!("matching on {}", mode));
    let users = sourcer.get_users(&options.instance, &options.search_text, mode);
    spinner.stop();

    let users = users?;
    if users.is_empty() {
        return Err(RelxError::NotFound(format!(
            "{} not found.",
            options.search_text
        )));
    }
    Ok(users)
}

fn spinner_for(options: &UsersOptions, message: &str) -> Spinner {
    Spinner::start(message, !options.format.is_machine() && !ui::is_quiet())
}

fn display_group(group: &GroupRecord) {
    ui::keyval("Group", group.group_name.as_deref().unwrap_or("-"));
    ui::keyval("Email", group.email.as_deref().unwrap_or("-"));
    ui::keyval("Maintainers", &join_or_dash(&group.maintainers));
    if let Some(users) = &group.users {
        ui::keyval("Users", &join_or_dash(users));
    }
}

fn display_users(users: &[UserRecord]) {
    for user in users {
        ui::keyval("User", &user.login);
        ui::keyval("Email", &user.email);
        ui::keyval("Name", &user.realname);
        ui::keyval("State", &user.state);
        ui::separator();
    }
}

fn join_or_dash(items: &[String]) -> String {
    if items.is_empty() {
        "-".to_string()
    } else {
        items.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::ExclusionRules;

    struct StaticProvider {
        group: GroupRecord,
        users: Vec<UserRecord>,
    }

    impl DataProvider for StaticProvider {
        fn list_packages(&self, _: &str, _: &str) -> Result<Vec<String>> {
            Ok(vec![])
        }

        fn list_artifacts(
            &self,
            _: &str,
            _: &str,
            _: &str,
            _: &str,
            _: &ExclusionRules,
        ) -> Result<Vec<String>> {
            Ok(vec![])
        }

        fn get_group(&self, _: &str, _: &str, full_list: bool) -> Result<GroupRecord> {
            assert!(full_list, "group lookups always request members");
            Ok(self.group.clone())
        }

        fn get_users(&self, _: &str, _: &str, _: SearchMode) -> Result<Vec<UserRecord>> {
            Ok(self.users.clone())
        }
    }

    fn options(lookup: Lookup, text: &str) -> UsersOptions {
        UsersOptions {
            instance: "https://api.example.org".to_string(),
            lookup,
            search_text: text.to_string(),
            format: OutputFormat::Json,
        }
    }

    #[test]
    fn lookup_flags() {
        assert_eq!(
            Lookup::from_flags(true, false, false, false).unwrap(),
            Lookup::Group
        );
        assert_eq!(
            Lookup::from_flags(false, false, true, false).unwrap(),
            Lookup::User(SearchMode::Email)
        );
        assert!(Lookup::from_flags(false, false, false, false).is_err());
        assert!(Lookup::from_flags(true, true, false, false).is_err());
        assert!(Lookup::from_flags(false, true, false, true).is_err());
    }

    #[test]
    fn empty_group_is_not_found() {
        let sourcer = DataSourcer::new(StaticProvider {
            group: GroupRecord::default(),
            users: vec![],
        });
        let err = find_group(&sourcer, &options(Lookup::Group, "ghosts")).unwrap_err();
        assert!(matches!(err, RelxError::NotFound(msg) if msg == "ghosts not found."));
    }

    #[test]
    fn group_without_title_is_still_found() {
        let sourcer = DataSourcer::new(StaticProvider {
            group: GroupRecord {
                maintainers: vec!["lead".to_string()],
                ..Default::default()
            },
            users: vec![],
        });
        let group = find_group(&sourcer, &options(Lookup::Group, "team")).unwrap();
        assert_eq!(group.maintainers, vec!["lead"]);
    }

    #[test]
    fn no_matching_users_is_not_found() {
        let sourcer = DataSourcer::new(StaticProvider {
            group: GroupRecord::default(),
            users: vec![],
        });
        let opts = options(Lookup::User(SearchMode::Login), "nobody");
        let err = find_users(&sourcer, &opts, SearchMode::Login).unwrap_err();
        assert!(matches!(err, RelxError::NotFound(_)));
    }

    #[test]
    fn unsafe_search_text_is_rejected_before_querying() {
        let sourcer = DataSourcer::new(StaticProvider {
            group: GroupRecord::default(),
            users: vec![],
        });
        let err = run(
            &sourcer,
            options(Lookup::User(SearchMode::Login), "x\" or \"1"),
        )
        .unwrap_err();
        assert!(matches!(err, RelxError::InvalidQuery(_)));
    }
}
