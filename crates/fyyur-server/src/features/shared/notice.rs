//! One-line messages shown after a create, edit or delete

/// Past-tense verb of the action a notice reports on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Listed,
    Updated,
    Deleted,
}

impl Action {
    fn as_str(self) -> &'static str {
        match self {
            Action::Listed => "listed",
            Action::Updated => "updated",
            Action::Deleted => "deleted",
        }
    }
}

/// `Venue The Musical Hop was successfully listed!`
pub fn succeeded(entity: &str, name: &str, action: Action) -> String {
    if name.trim().is_empty() {
        format!("{} was successfully {}!", entity, action.as_str())
    } else {
        format!("{} {} was successfully {}!", entity, name, action.as_str())
    }
}

/// `An error occurred. Venue The Musical Hop could not be listed.`
///
/// A blank name is left out: `An error occurred. Show could not be listed.`
pub fn failed(entity: &str, name: &str, action: Action) -> String {
    if name.trim().is_empty() {
        format!("An error occurred. {} could not be {}.", entity, action.as_str())
    } else {
        format!(
            "An error occurred. {} {} could not be {}.",
            entity,
            name,
            action.as_str()
        )
    }
}
