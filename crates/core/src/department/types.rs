use serde::Serialize;

/// A department that signs off on student requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Department {
    /// Stable lower-case code, also used as the explicit match key.
    pub id: &'static str,
    /// Display name shown on the timeline.
    pub name: &'static str,
    /// Icon reference for the UI.
    pub icon: &'static str,
}

/// Fixed, ordered list of departments every request must clear.
///
/// `placement` and `training` both mention "placement" in their names.
pub static CANONICAL_DEPARTMENTS: [Department; 10] = [
    Department::new("library", "Library", "book"),
    Department::new("hostel", "Hostel Office", "home"),
    Department::new("accounts", "Accounts Section", "wallet"),
    Department::new("sports", "Sports Department", "trophy"),
    Department::new("laboratory", "Laboratory", "flask"),
    Department::new("examination", "Examination Cell", "clipboard"),
    Department::new("placement", "Placement Cell", "briefcase"),
    Department::new("training", "Training and Placement", "graduation-cap"),
    Department::new("transport", "Transport Office", "bus"),
    Department::new("hod", "Head of Department", "user-check"),
];

impl Department {
    pub const fn new(id: &'static str, name: &'static str, icon: &'static str) -> Self {
        Self { id, name, icon }
    }

    /// Look up a canonical department by id, ignoring ASCII case.
    pub fn find(id: &str) -> Option<&'static Department> {
        let id = id.trim();
        CANONICAL_DEPARTMENTS
            .iter()
            .find(|d| d.id.eq_ignore_ascii_case(id))
    }

    /// All canonical departments in canonical order.
    pub fn all() -> &'static [Department] {
        &CANONICAL_DEPARTMENTS
    }
}
