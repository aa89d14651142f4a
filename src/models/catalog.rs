// Course catalog module
// Immutable seed data created once at startup; lookups by id, section sorting on copies

/// A single meeting section of a course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub time: String,
    pub room: String,
    pub professor: String,
}

/// A course in the catalog. Seed data, never mutated at runtime.
#[derive(Debug, Clone)]
pub struct Course {
    pub id: String,
    pub title: String,
    pub description: String,
    pub credits: u32,
    pub sections: Vec<Section>,
}

/// Sort key for course sections, validated against an allow-list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionSort {
    Time,
    Professor,
    Room,
}

impl SectionSort {
    /// Resolve a query-supplied sort value. Unrecognized or absent values
    /// fall back to `Time` (the original section order).
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("professor") => Self::Professor,
            Some("room") => Self::Room,
            _ => Self::Time,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Time => "time",
            Self::Professor => "professor",
            Self::Room => "room",
        }
    }
}

impl Course {
    /// Return a sorted copy of this course's sections.
    ///
    /// The stored sequence is never touched; `Time` keeps the declaration
    /// order and the other keys sort lexicographically. `sort_by` is stable,
    /// so equal keys preserve their relative order.
    pub fn sections_sorted(&self, sort: SectionSort) -> Vec<Section> {
        let mut sections = self.sections.clone();
        match sort {
            SectionSort::Time => {}
            SectionSort::Professor => sections.sort_by(|a, b| a.professor.cmp(&b.professor)),
            SectionSort::Room => sections.sort_by(|a, b| a.room.cmp(&b.room)),
        }
        sections
    }
}

/// The course catalog, enumerated in declaration order.
#[derive(Debug)]
pub struct Catalog {
    courses: Vec<Course>,
}

impl Catalog {
    /// Build the seed catalog.
    pub fn seed() -> Self {
        Self {
            courses: vec![
                Course {
                    id: "CS121".to_string(),
                    title: "Introduction to Programming".to_string(),
                    description: "Learn programming fundamentals using JavaScript and basic web development concepts.".to_string(),
                    credits: 3,
                    sections: vec![
                        section("9:00 AM", "STC 392", "Brother Jack"),
                        section("2:00 PM", "STC 394", "Sister Enkey"),
                        section("11:00 AM", "STC 390", "Brother Keers"),
                    ],
                },
                Course {
                    id: "MATH110".to_string(),
                    title: "College Algebra".to_string(),
                    description: "Fundamental algebraic concepts including functions, graphing, and problem solving.".to_string(),
                    credits: 4,
                    sections: vec![
                        section("8:00 AM", "MC 301", "Sister Anderson"),
                        section("1:00 PM", "MC 305", "Brother Miller"),
                        section("3:00 PM", "MC 307", "Brother Thompson"),
                    ],
                },
                Course {
                    id: "ENG101".to_string(),
                    title: "Academic Writing".to_string(),
                    description: "Develop writing skills for academic and professional communication.".to_string(),
                    credits: 3,
                    sections: vec![
                        section("10:00 AM", "GEB 201", "Sister Anderson"),
                        section("12:00 PM", "GEB 205", "Brother Davis"),
                        section("4:00 PM", "GEB 203", "Sister Enkey"),
                    ],
                },
            ],
        }
    }

    pub fn get(&self, id: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == id)
    }

    pub fn list(&self) -> &[Course] {
        &self.courses
    }
}

fn section(time: &str, room: &str, professor: &str) -> Section {
    Section {
        time: time.to_string(),
        room: room.to_string(),
        professor: professor.to_string(),
    }
}
