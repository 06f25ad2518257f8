// ============================
// crates/backend-lib/src/catalog.rs
// ============================
//! Read-only course content catalog.
//!
//! Seeded once at startup and never mutated; the auth core only consumes it
//! through the lookup interface.
use std::collections::HashMap;

use serde::Serialize;

/// Course listing entry
#[derive(Debug, Clone, Serialize)]
pub struct CourseSummary {
    pub id: String,
    pub title: String,
}

/// One unit of course content
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseUnit {
    pub unit_id: String,
    pub title: String,
    pub content: String,
}

/// Full course detail
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub title: String,
    pub units: Vec<CourseUnit>,
    pub updated_at: String,
}

/// Static course catalog
pub struct ContentCatalog {
    courses: HashMap<String, Course>,
}

impl ContentCatalog {
    /// Build a catalog from explicit content
    pub fn new(courses: HashMap<String, Course>) -> Self {
        Self { courses }
    }

    /// Build the catalog with the bundled sample courses
    pub fn with_sample_courses() -> Self {
        let mut courses = HashMap::new();

        courses.insert(
            "math101".to_string(),
            Course {
                title: "Mathematics 101".to_string(),
                units: vec![
                    CourseUnit {
                        unit_id: "unit1".to_string(),
                        title: "Introduction".to_string(),
                        content: "<p>This unit covers the basics of math, including numbers, operations, and basic algebra.</p>".to_string(),
                    },
                    CourseUnit {
                        unit_id: "unit2".to_string(),
                        title: "Advanced Topics".to_string(),
                        content: "<p>This unit dives into advanced concepts like calculus and statistics.</p>".to_string(),
                    },
                ],
                updated_at: "2023-03-28T12:34:56Z".to_string(),
            },
        );

        courses.insert(
            "physics101".to_string(),
            Course {
                title: "Physics 101".to_string(),
                units: vec![
                    CourseUnit {
                        unit_id: "unit1".to_string(),
                        title: "Introduction".to_string(),
                        content: "<p>This unit covers the basics of physics..</p>".to_string(),
                    },
                    CourseUnit {
                        unit_id: "unit2".to_string(),
                        title: "Quantum Physics".to_string(),
                        content: "<p>This unit dives into the topic of Quantum Physics.</p>"
                            .to_string(),
                    },
                    CourseUnit {
                        unit_id: "unit3".to_string(),
                        title: "General Relativity".to_string(),
                        content: "<p>This unit dives into the topic of general relativity.</p>"
                            .to_string(),
                    },
                ],
                updated_at: "2023-03-28T12:34:56Z".to_string(),
            },
        );

        courses.insert(
            "chem101".to_string(),
            Course {
                title: "Chemistry 101".to_string(),
                units: vec![CourseUnit {
                    unit_id: "unit1".to_string(),
                    title: "Introduction".to_string(),
                    content: "<p>This unit covers the basics of chem..</p>".to_string(),
                }],
                updated_at: "2023-03-28T12:34:56Z".to_string(),
            },
        );

        Self::new(courses)
    }

    /// List all courses, sorted by id for a stable listing
    pub fn list_courses(&self) -> Vec<CourseSummary> {
        let mut summaries: Vec<CourseSummary> = self
            .courses
            .iter()
            .map(|(id, course)| CourseSummary {
                id: id.clone(),
                title: course.title.clone(),
            })
            .collect();
        summaries.sort_by(|a, b| a.id.cmp(&b.id));
        summaries
    }

    /// Look up one course by id
    pub fn get_course(&self, id: &str) -> Option<&Course> {
        self.courses.get(id)
    }
}
