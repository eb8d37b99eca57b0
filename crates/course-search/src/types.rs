//! Record types searched by the dashboard filters.
//!
//! Each type maps its fields onto [`SearchableRecord`]; the mapping is the
//! whole of its search behavior.

use serde::{Deserialize, Serialize};

use crate::record::SearchableRecord;

/// A course as listed on the "my courses" dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Concept names covered by the course.
    #[serde(default)]
    pub concepts: Vec<String>,
}

impl SearchableRecord for Course {
    fn primary_text(&self) -> &str {
        self.name.as_str()
    }

    fn secondary_text(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn tags(&self) -> Vec<&str> {
        self.concepts.iter().map(String::as_str).collect()
    }
}

/// A published course (experiment, LTI or course-data entry).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishedCourse {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Id of the course the entry was published from.
    #[serde(default)]
    pub source_course_id: Option<String>,
    /// Folder path of the course the entry was published from.
    #[serde(default)]
    pub course_folder: Option<String>,
}

impl SearchableRecord for PublishedCourse {
    fn primary_text(&self) -> &str {
        self.name.as_str()
    }

    fn secondary_text(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn identifier_text(&self) -> Option<&str> {
        Some(self.id.as_str())
    }

    fn reference_texts(&self) -> Vec<&str> {
        self.source_course_id
            .as_deref()
            .into_iter()
            .chain(self.course_folder.as_deref())
            .collect()
    }
}

/// A named collection of published courses.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseCollection {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub courses: Vec<PublishedCourse>,
}

impl SearchableRecord for CourseCollection {
    fn primary_text(&self) -> &str {
        self.name.as_str()
    }

    fn secondary_text(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn identifier_text(&self) -> Option<&str> {
        Some(self.id.as_str())
    }

    fn children(&self) -> Vec<&dyn SearchableRecord> {
        self.courses
            .iter()
            .map(|course| course as &dyn SearchableRecord)
            .collect()
    }
}

/// One entry of the mixed published-courses list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PublishedItem {
    Course(PublishedCourse),
    Collection(CourseCollection),
}

impl PublishedItem {
    fn as_record(&self) -> &dyn SearchableRecord {
        match self {
            Self::Course(course) => course,
            Self::Collection(collection) => collection,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Self::Course(course) => course.id.as_str(),
            Self::Collection(collection) => collection.id.as_str(),
        }
    }
}

impl From<PublishedCourse> for PublishedItem {
    fn from(course: PublishedCourse) -> Self {
        Self::Course(course)
    }
}

impl From<CourseCollection> for PublishedItem {
    fn from(collection: CourseCollection) -> Self {
        Self::Collection(collection)
    }
}

impl SearchableRecord for PublishedItem {
    fn primary_text(&self) -> &str {
        self.as_record().primary_text()
    }

    fn secondary_text(&self) -> Option<&str> {
        self.as_record().secondary_text()
    }

    fn identifier_text(&self) -> Option<&str> {
        self.as_record().identifier_text()
    }

    fn tags(&self) -> Vec<&str> {
        self.as_record().tags()
    }

    fn reference_texts(&self) -> Vec<&str> {
        self.as_record().reference_texts()
    }

    fn children(&self) -> Vec<&dyn SearchableRecord> {
        self.as_record().children()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn published(id: &str, name: &str) -> PublishedCourse {
        PublishedCourse {
            id: id.to_string(),
            name: name.to_string(),
            ..PublishedCourse::default()
        }
    }

    #[test]
    fn course_tags_are_concepts() {
        let course = Course {
            name: "Squad Tactics".to_string(),
            description: None,
            concepts: vec!["Movement".to_string(), "Cover".to_string()],
        };
        assert_eq!(course.tags(), vec!["Movement", "Cover"]);
        assert!(course.identifier_text().is_none());
        assert!(course.children().is_empty());
    }

    #[test]
    fn published_course_references_source_course() {
        let mut course = published("pc-1", "Pilot Study");
        course.source_course_id = Some("course-9".to_string());
        course.course_folder = Some("Public/Pilot".to_string());
        assert_eq!(course.identifier_text(), Some("pc-1"));
        assert_eq!(course.reference_texts(), vec!["course-9", "Public/Pilot"]);

        course.source_course_id = None;
        assert_eq!(course.reference_texts(), vec!["Public/Pilot"]);
    }

    #[test]
    fn collection_children_are_courses() {
        let collection = CourseCollection {
            id: "col-1".to_string(),
            name: "Spring Cohort".to_string(),
            description: Some("All spring studies".to_string()),
            courses: vec![published("a", "Alpha"), published("b", "Beta")],
        };
        let children = collection.children();
        assert_eq!(children.len(), 2);
        assert_eq!(children[1].primary_text(), "Beta");
        assert_eq!(collection.identifier_text(), Some("col-1"));
    }

    #[test]
    fn published_item_delegates() {
        let item = PublishedItem::from(published("pc-2", "Field Test"));
        assert_eq!(item.primary_text(), "Field Test");
        assert_eq!(item.id(), "pc-2");
    }

    #[test]
    fn deserializes_camel_case_records() {
        let json = r#"[
            {"kind": "course", "id": "pc-1", "name": "Pilot", "sourceCourseId": "c-1"},
            {"kind": "collection", "id": "col-1", "name": "Bundle",
             "courses": [{"id": "pc-2", "name": "Child", "courseFolder": "Public/Child"}]}
        ]"#;
        let items: Vec<PublishedItem> = serde_json::from_str(json).unwrap();
        match &items[0] {
            PublishedItem::Course(course) => {
                assert_eq!(course.source_course_id.as_deref(), Some("c-1"));
                assert!(course.description.is_none());
            }
            other => panic!("expected course, got {other:?}"),
        }
        match &items[1] {
            PublishedItem::Collection(collection) => {
                assert_eq!(collection.courses.len(), 1);
                assert_eq!(
                    collection.courses[0].course_folder.as_deref(),
                    Some("Public/Child")
                );
            }
            other => panic!("expected collection, got {other:?}"),
        }
    }
}
