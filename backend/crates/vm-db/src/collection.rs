use std::fmt;

/// The four document collections served by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Volunteers,
    Events,
    Tasks,
    Attendance,
}

impl Collection {
    /// Value stored in `documents.collection`
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Volunteers => "volunteers",
            Self::Events => "events",
            Self::Tasks => "tasks",
            Self::Attendance => "attendance",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
