//! Read-only roster reference data.
//!
//! People are supplied to the engine at startup and never mutated by it.

use serde::{Deserialize, Serialize};

/// A roster entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: String,
    pub name: String,
    /// Free-text role shown under the name in the sidebar.
    pub role: String,
    /// Avatar image reference (URL or asset key).
    pub avatar: String,
}

impl Person {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        role: impl Into<String>,
        avatar: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role: role.into(),
            avatar: avatar.into(),
        }
    }
}

/// The built-in six-person demo roster.
pub fn builtin_roster() -> Vec<Person> {
    [
        ("1", "John Doe", "Chef"),
        ("2", "Alice Smith", "Prep Cook"),
        ("3", "Bob Johnson", "Service"),
        ("4", "Emma Davis", "Supervisor"),
        ("5", "Michael Wilson", "Reception"),
        ("6", "Michele Wilson", "Reception"),
    ]
    .into_iter()
    .map(|(id, name, role)| {
        let avatar = format!("https://api.dicebear.com/7.x/avataaars/svg?seed={id}");
        Person::new(id, name, role, avatar)
    })
    .collect()
}
