use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique, immutable identifier of a student record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StudentId(pub u32);

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// One student record. Serializes as a flat object with integer `id`,
/// string `name`, and integer `score`.
///
/// `score` is by convention in the 0-100 range; the registry uses the
/// value but does not enforce the bound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    pub score: i32,
}

/// The roster the service boots with.
pub fn seed_roster() -> Vec<Student> {
    vec![
        Student {
            id: StudentId(7_789_322),
            name: "Rodrigo Rosario".to_string(),
            score: 85,
        },
        Student {
            id: StudentId(7_776_522),
            name: "Alex Montellano".to_string(),
            score: 92,
        },
        Student {
            id: StudentId(5_489_322),
            name: "Sebastian Carballo".to_string(),
            score: 76,
        },
        Student {
            id: StudentId(7_939_322),
            name: "Joaquin Perez".to_string(),
            score: 45,
        },
    ]
}
