// Faculty directory module
// Single repository capability; absence is always `None`, never a sentinel record

use async_trait::async_trait;

/// A member of the faculty directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacultyMember {
    pub id: u32,
    pub slug: String,
    pub name: String,
    pub department: String,
    pub title: String,
}

/// Sort key for the faculty list, validated against an allow-list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacultySort {
    Name,
    Department,
    Title,
}

impl FacultySort {
    /// Resolve a query-supplied sort value, silently defaulting to `Name`.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("department") => Self::Department,
            Some("title") => Self::Title,
            _ => Self::Name,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Department => "department",
            Self::Title => "title",
        }
    }
}

/// Data access for the faculty directory.
///
/// A key may be either a slug or a numeric id; both historical lookup
/// variants resolve through this one method.
#[async_trait]
pub trait FacultyRepository: Send + Sync {
    async fn get_by_key(&self, key: &str) -> Option<FacultyMember>;
    async fn list_sorted(&self, sort: FacultySort) -> Vec<FacultyMember>;
}

/// In-memory faculty directory seeded at startup.
pub struct SeedFacultyRepository {
    members: Vec<FacultyMember>,
}

impl SeedFacultyRepository {
    pub fn seed() -> Self {
        Self {
            members: vec![
                member(1, "jack", "Brother Jack", "Computer Science", "Professor"),
                member(2, "enkey", "Sister Enkey", "Computer Science", "Instructor"),
                member(3, "keers", "Brother Keers", "Computer Science", "Associate Professor"),
                member(4, "anderson", "Sister Anderson", "Mathematics", "Professor"),
                member(5, "miller", "Brother Miller", "Mathematics", "Instructor"),
                member(6, "thompson", "Brother Thompson", "Mathematics", "Associate Professor"),
                member(7, "davis", "Brother Davis", "English", "Professor"),
            ],
        }
    }
}

#[async_trait]
impl FacultyRepository for SeedFacultyRepository {
    async fn get_by_key(&self, key: &str) -> Option<FacultyMember> {
        self.members
            .iter()
            .find(|m| m.slug == key || m.id.to_string() == key)
            .cloned()
    }

    async fn list_sorted(&self, sort: FacultySort) -> Vec<FacultyMember> {
        // Sort a copy; the canonical store keeps its seed order
        let mut members = self.members.clone();
        match sort {
            FacultySort::Name => members.sort_by(|a, b| a.name.cmp(&b.name)),
            FacultySort::Department => members.sort_by(|a, b| a.department.cmp(&b.department)),
            FacultySort::Title => members.sort_by(|a, b| a.title.cmp(&b.title)),
        }
        members
    }
}

fn member(id: u32, slug: &str, name: &str, department: &str, title: &str) -> FacultyMember {
    FacultyMember {
        id,
        slug: slug.to_string(),
        name: name.to_string(),
        department: department.to_string(),
        title: title.to_string(),
    }
}
