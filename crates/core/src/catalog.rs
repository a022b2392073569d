//! Fixed project catalog.
//!
//! The catalog is a read-only table mapping project ids to display
//! metadata. It is built once at startup and never mutated; a trigger
//! referencing an id the catalog does not hold is a valid lookup miss,
//! not a fault.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Portfolio category. The set is fixed; cards and filter buttons refer
/// to categories by slug, the modal displays the label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    UxDesign,
    InstructionalDesign,
    TechEthics,
}

impl Category {
    /// Display label shown in cards and the project dialog.
    pub fn label(self) -> &'static str {
        match self {
            Category::UxDesign => "UX Design",
            Category::InstructionalDesign => "Instructional Design",
            Category::TechEthics => "Tech Ethics",
        }
    }

    /// Slug used as the `data-category` / `data-filter` marker.
    pub fn slug(self) -> &'static str {
        match self {
            Category::UxDesign => "ux-design",
            Category::InstructionalDesign => "instructional-design",
            Category::TechEthics => "tech-ethics",
        }
    }

    pub const ALL: [Category; 3] = [
        Category::UxDesign,
        Category::InstructionalDesign,
        Category::TechEthics,
    ];
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown category: {0}")]
pub struct CategoryParseError(pub String);

impl FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.slug() == s || c.label() == s)
            .ok_or_else(|| CategoryParseError(s.to_string()))
    }
}

/// One block of a project's rich description. The typed counterpart of
/// the source's inline HTML fragments — renderers decide the markup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DescriptionBlock {
    Heading(String),
    Paragraph(String),
    List(Vec<String>),
}

impl DescriptionBlock {
    fn heading(s: &str) -> Self {
        DescriptionBlock::Heading(s.to_string())
    }

    fn para(s: &str) -> Self {
        DescriptionBlock::Paragraph(s.to_string())
    }

    fn list(items: &[&str]) -> Self {
        DescriptionBlock::List(items.iter().map(|s| (*s).to_string()).collect())
    }
}

/// Display metadata for one project. Immutable after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub id: u32,
    pub title: String,
    pub category: Category,
    pub image_path: String,
    pub description: Vec<DescriptionBlock>,
    pub tags: Vec<String>,
}

/// Read-only id → entry table with O(1) lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    entries: HashMap<u32, ProjectEntry>,
}

impl Catalog {
    /// Build a catalog from explicit entries. Later duplicates of an id
    /// replace earlier ones.
    pub fn new(entries: impl IntoIterator<Item = ProjectEntry>) -> Self {
        Self {
            entries: entries.into_iter().map(|e| (e.id, e)).collect(),
        }
    }

    /// Load a catalog from a JSON array of entries, for deployments that
    /// keep the project table outside the binary.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let entries: Vec<ProjectEntry> = serde_json::from_str(json)?;
        Ok(Self::new(entries))
    }

    /// Look up an entry. A miss is a valid outcome the caller ignores.
    pub fn get(&self, id: u32) -> Option<&ProjectEntry> {
        self.entries.get(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = &ProjectEntry> {
        self.entries.values()
    }

    /// The built-in six-project table.
    pub fn builtin() -> Self {
        Self::new(builtin_entries())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn entry(
    id: u32,
    title: &str,
    category: Category,
    image: &str,
    description: Vec<DescriptionBlock>,
    tags: &[&str],
) -> ProjectEntry {
    ProjectEntry {
        id,
        title: title.to_string(),
        category,
        image_path: image.to_string(),
        description,
        tags: tags.iter().map(|t| (*t).to_string()).collect(),
    }
}

fn builtin_entries() -> Vec<ProjectEntry> {
    use DescriptionBlock as D;

    vec![
        entry(
            1,
            "Mobile App Redesign",
            Category::UxDesign,
            "assets/projects/ux-project-1.jpg",
            vec![
                D::heading("Project Overview"),
                D::para(
                    "A comprehensive mobile app redesign project completed as part of the \
                     Google UX Design Certificate program. The project focused on creating \
                     an accessible, user-centered design for a food ordering application.",
                ),
                D::heading("My Role"),
                D::para(
                    "Lead UX Designer responsible for user research, wireframing, \
                     prototyping, and usability testing.",
                ),
                D::heading("Process"),
                D::list(&[
                    "Conducted user interviews and created personas",
                    "Developed user journey maps and information architecture",
                    "Created low and high-fidelity wireframes in Figma",
                    "Built interactive prototypes for usability testing",
                    "Iterated based on user feedback",
                ]),
                D::heading("Outcomes"),
                D::para(
                    "The redesigned app achieved a 40% improvement in task completion \
                     rates during usability testing and received positive feedback for \
                     its accessibility features.",
                ),
            ],
            &["Figma", "User Research", "Prototyping", "Accessibility"],
        ),
        entry(
            2,
            "Bay Cove Learning Database",
            Category::InstructionalDesign,
            "assets/projects/instructional-1.jpg",
            vec![
                D::heading("Project Overview"),
                D::para(
                    "Designed and implemented a comprehensive learning management \
                     database for Bay Cove Human Services to streamline employee \
                     training and professional development tracking.",
                ),
                D::heading("Challenge"),
                D::para(
                    "The organization needed a centralized system to track employee \
                     training completions, certifications, and professional development \
                     across multiple departments.",
                ),
                D::heading("Solution"),
                D::list(&[
                    "Conducted needs assessment with stakeholders",
                    "Designed database architecture and user workflows",
                    "Created intuitive interface for administrators and employees",
                    "Implemented automated tracking and reporting features",
                ]),
                D::heading("Impact"),
                D::para(
                    "The new system reduced administrative time for training tracking \
                     by 60% and improved compliance documentation accuracy.",
                ),
            ],
            &["LMS Design", "Training", "Database", "Workflow Design"],
        ),
        entry(
            3,
            "Mentorship Program",
            Category::InstructionalDesign,
            "assets/projects/instructional-2.jpg",
            vec![
                D::heading("Project Overview"),
                D::para(
                    "Developed a structured mentorship program with comprehensive \
                     curriculum design, training materials, and assessment frameworks \
                     to support new employee onboarding and professional growth.",
                ),
                D::heading("Components"),
                D::list(&[
                    "Mentorship curriculum and guidelines",
                    "Training materials for mentors",
                    "Progress tracking tools",
                    "Assessment and feedback frameworks",
                ]),
                D::heading("Results"),
                D::para(
                    "The program increased new employee retention by 25% and received \
                     high satisfaction ratings from both mentors and mentees.",
                ),
            ],
            &["Curriculum Design", "Mentorship", "Assessment", "Training"],
        ),
        entry(
            4,
            "Responsive Web Design",
            Category::UxDesign,
            "assets/projects/ux-project-2.jpg",
            vec![
                D::heading("Project Overview"),
                D::para(
                    "A responsive web design project demonstrating mobile-first design \
                     principles and cross-platform consistency for a nonprofit \
                     organization's website.",
                ),
                D::heading("Approach"),
                D::list(&[
                    "Mobile-first design methodology",
                    "Cross-browser compatibility testing",
                    "Performance optimization",
                    "Accessibility compliance (WCAG 2.1)",
                ]),
            ],
            &["Responsive Design", "Web Design", "Adobe XD", "CSS"],
        ),
        entry(
            5,
            "Digital Wellbeing Research",
            Category::TechEthics,
            "assets/projects/ethics-1.jpg",
            vec![
                D::heading("Project Overview"),
                D::para(
                    "Research and editorial work exploring the intersection of \
                     technology, mental health, and ethical design practices. This \
                     includes freelance editing work for Jonathan Haidt on topics \
                     related to digital wellbeing.",
                ),
                D::heading("Focus Areas"),
                D::list(&[
                    "Impact of social media on mental health",
                    "Ethical design patterns vs. dark patterns",
                    "Digital wellbeing frameworks",
                    "Youth and technology use",
                ]),
                D::heading("Recognition"),
                D::para(
                    "Recognized as a \"super-editor\" by Jonathan Haidt for editorial \
                     contributions to his work on technology and mental health.",
                ),
            ],
            &["Research", "Writing", "Ethics", "Mental Health"],
        ),
        entry(
            6,
            "User Research Case Study",
            Category::UxDesign,
            "assets/projects/ux-project-3.jpg",
            vec![
                D::heading("Project Overview"),
                D::para(
                    "A comprehensive user research project including interviews, \
                     surveys, persona development, and journey mapping for a \
                     healthcare technology application.",
                ),
                D::heading("Methodology"),
                D::list(&[
                    "Stakeholder interviews",
                    "User surveys (n=150+)",
                    "Contextual inquiry",
                    "Affinity mapping and synthesis",
                ]),
                D::heading("Deliverables"),
                D::list(&[
                    "User personas (3 primary, 2 secondary)",
                    "Customer journey maps",
                    "Research insights report",
                    "Design recommendations",
                ]),
            ],
            &["User Research", "Personas", "Journey Maps", "Analysis"],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_holds_six_fixed_entries() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 6);
        for id in 1..=6 {
            assert!(catalog.get(id).is_some(), "missing entry {id}");
        }
    }

    #[test]
    fn lookup_miss_is_none() {
        let catalog = Catalog::builtin();
        assert!(catalog.get(0).is_none());
        assert!(catalog.get(999).is_none());
    }

    #[test]
    fn entry_fields_match_table() {
        let catalog = Catalog::builtin();
        let p1 = catalog.get(1).unwrap();
        assert_eq!(p1.title, "Mobile App Redesign");
        assert_eq!(p1.category, Category::UxDesign);
        assert_eq!(p1.tags, ["Figma", "User Research", "Prototyping", "Accessibility"]);

        let p5 = catalog.get(5).unwrap();
        assert_eq!(p5.title, "Digital Wellbeing Research");
        assert_eq!(p5.category, Category::TechEthics);
        assert_eq!(p5.image_path, "assets/projects/ethics-1.jpg");
    }

    #[test]
    fn categories_cover_all_three() {
        let catalog = Catalog::builtin();
        for cat in Category::ALL {
            assert!(
                catalog.entries().any(|e| e.category == cat),
                "no entry in {cat}"
            );
        }
    }

    #[test]
    fn category_parses_from_slug_and_label() {
        assert_eq!("ux-design".parse::<Category>(), Ok(Category::UxDesign));
        assert_eq!("Tech Ethics".parse::<Category>(), Ok(Category::TechEthics));
        assert!("3d-printing".parse::<Category>().is_err());
    }

    #[test]
    fn from_json_round_trips_entries() {
        let catalog = Catalog::builtin();
        let entries: Vec<&ProjectEntry> = catalog.entries().collect();
        let json = serde_json::to_string(&entries).unwrap();
        let loaded = Catalog::from_json(&json).unwrap();
        assert_eq!(loaded.len(), 6);
        assert_eq!(loaded.get(3).unwrap().title, "Mentorship Program");
    }
}
