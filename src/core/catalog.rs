//! # Catalog
//!
//! Read-only source of everything the dashboard displays. The core only ever
//! talks to the [`Catalog`] trait, so the builtin data and a deck file on disk
//! are interchangeable.
//!
//! Deck files are JSON:
//!
//! ```text
//! { "categories": [ { ..., "topics": [ { ..., "questions": [ ... ] } ] } ],
//!   "upcoming_reviews": [ ... ],
//!   "recent_progress": [ ... ] }
//! ```

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::fs;
use std::path::Path;

use log::{debug, info};
use serde::Deserialize;

use crate::core::model::{
    Category, CategoryIcon, Difficulty, ProgressStatus, Question, RecentProgress, Topic,
    TopicStatus, UpcomingReview,
};

/// Read-only provider of categories, topics, questions and dashboard panels.
///
/// Lookups for unknown categories or topics return an empty slice.
pub trait Catalog {
    fn categories(&self) -> &[Category];
    fn topics(&self, category: &Category) -> &[Topic];
    fn questions(&self, category: &Category, topic: &Topic) -> &[Question];
    fn upcoming_reviews(&self) -> &[UpcomingReview];
    fn recent_progress(&self) -> &[RecentProgress];
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum CatalogError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Invalid(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Io(e) => write!(f, "deck I/O error: {e}"),
            CatalogError::Parse(e) => write!(f, "deck parse error: {e}"),
            CatalogError::Invalid(msg) => write!(f, "invalid deck: {msg}"),
        }
    }
}

impl std::error::Error for CatalogError {}

// ============================================================================
// StaticCatalog
// ============================================================================

/// In-memory catalog. Built once at startup, never mutated.
#[derive(Debug, Default)]
pub struct StaticCatalog {
    categories: Vec<Category>,
    topics: HashMap<u32, Vec<Topic>>,
    questions: HashMap<(u32, u32), Vec<Question>>,
    upcoming: Vec<UpcomingReview>,
    recent: Vec<RecentProgress>,
}

impl Catalog for StaticCatalog {
    fn categories(&self) -> &[Category] {
        &self.categories
    }

    fn topics(&self, category: &Category) -> &[Topic] {
        self.topics
            .get(&category.id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    fn questions(&self, category: &Category, topic: &Topic) -> &[Question] {
        self.questions
            .get(&(category.id, topic.id))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    fn upcoming_reviews(&self) -> &[UpcomingReview] {
        &self.upcoming
    }

    fn recent_progress(&self) -> &[RecentProgress] {
        &self.recent
    }
}

impl StaticCatalog {
    /// The sample deck: four categories, each with the same three topics,
    /// each topic with the same two questions.
    pub fn builtin() -> Self {
        let categories = vec![
            builtin_category(1, "Technical", CategoryIcon::Code, 25, 65),
            builtin_category(2, "Behavioral", CategoryIcon::Brain, 15, 45),
            builtin_category(3, "Technologies", CategoryIcon::Database, 30, 30),
            builtin_category(4, "Problem Solving", CategoryIcon::BookOpen, 20, 55),
        ];

        let mut topics = HashMap::new();
        let mut questions = HashMap::new();
        for category in &categories {
            let category_topics = builtin_topics();
            for topic in &category_topics {
                questions.insert((category.id, topic.id), builtin_questions());
            }
            topics.insert(category.id, category_topics);
        }

        Self {
            categories,
            topics,
            questions,
            upcoming: vec![
                upcoming(1, "Kafka Architecture", "Technologies", "2 hours"),
                upcoming(2, "System Design Basics", "Technical", "4 hours"),
                upcoming(3, "Leadership Experience", "Behavioral", "1 day"),
            ],
            recent: vec![
                recent(1, "Database Indexing", "Technical", ProgressStatus::Mastered),
                recent(2, "Team Conflicts", "Behavioral", ProgressStatus::InProgress),
                recent(3, "Elasticsearch", "Technologies", ProgressStatus::Started),
            ],
        }
    }

    /// Parse and validate a deck from its JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let deck: DeckFile = serde_json::from_str(json).map_err(CatalogError::Parse)?;
        deck.into_catalog()
    }
}

/// Load a deck file from disk.
pub fn load_deck(path: &Path) -> Result<StaticCatalog, CatalogError> {
    let contents = fs::read_to_string(path).map_err(CatalogError::Io)?;
    let catalog = StaticCatalog::from_json_str(&contents)?;
    info!(
        "Loaded deck from {} ({} categories)",
        path.display(),
        catalog.categories.len()
    );
    Ok(catalog)
}

fn builtin_category(id: u32, name: &str, icon: CategoryIcon, count: u32, progress: u8) -> Category {
    Category {
        id,
        name: name.to_string(),
        icon,
        topic_count: count,
        progress,
    }
}

fn builtin_topics() -> Vec<Topic> {
    let topic = |id, title: &str, progress, last: &str, next: &str, difficulty, status| Topic {
        id,
        title: title.to_string(),
        progress,
        last_reviewed: last.to_string(),
        next_review: next.to_string(),
        difficulty,
        status,
    };
    vec![
        topic(
            1,
            "Basic Concepts",
            85,
            "2 days ago",
            "3 days",
            Difficulty::Easy,
            TopicStatus::Mastered,
        ),
        topic(
            2,
            "Advanced Topics",
            45,
            "1 day ago",
            "1 day",
            Difficulty::Hard,
            TopicStatus::InProgress,
        ),
        topic(
            3,
            "Common Patterns",
            60,
            "5 days ago",
            "Today",
            Difficulty::Medium,
            TopicStatus::ReviewNeeded,
        ),
    ]
}

fn builtin_questions() -> Vec<Question> {
    vec![
        Question {
            id: 1,
            prompt: "What is the main concept behind this topic?".to_string(),
            answer: "This is the explanation of the main concept...".to_string(),
            hints: vec![
                "Think about the basics".to_string(),
                "Consider the use cases".to_string(),
            ],
        },
        Question {
            id: 2,
            prompt: "How would you implement this in a real scenario?".to_string(),
            answer: "The implementation would involve...".to_string(),
            hints: vec![
                "Start with the requirements".to_string(),
                "Consider edge cases".to_string(),
            ],
        },
    ]
}

fn upcoming(id: u32, topic: &str, category: &str, due_in: &str) -> UpcomingReview {
    UpcomingReview {
        id,
        topic: topic.to_string(),
        category: category.to_string(),
        due_in: due_in.to_string(),
    }
}

fn recent(id: u32, topic: &str, category: &str, status: ProgressStatus) -> RecentProgress {
    RecentProgress {
        id,
        topic: topic.to_string(),
        category: category.to_string(),
        status,
    }
}

// ============================================================================
// Deck File Format
// ============================================================================

#[derive(Debug, Deserialize)]
struct DeckFile {
    categories: Vec<DeckCategory>,
    #[serde(default)]
    upcoming_reviews: Vec<UpcomingReview>,
    #[serde(default)]
    recent_progress: Vec<RecentProgress>,
}

#[derive(Debug, Deserialize)]
struct DeckCategory {
    id: u32,
    name: String,
    #[serde(default)]
    icon: CategoryIcon,
    /// Falls back to the number of topics in the file.
    topic_count: Option<u32>,
    #[serde(default)]
    progress: u8,
    #[serde(default)]
    topics: Vec<DeckTopic>,
}

#[derive(Debug, Deserialize)]
struct DeckTopic {
    id: u32,
    title: String,
    #[serde(default)]
    progress: u8,
    #[serde(default)]
    last_reviewed: String,
    #[serde(default)]
    next_review: String,
    difficulty: Difficulty,
    status: TopicStatus,
    #[serde(default)]
    questions: Vec<Question>,
}

impl DeckFile {
    fn into_catalog(self) -> Result<StaticCatalog, CatalogError> {
        let mut catalog = StaticCatalog {
            upcoming: self.upcoming_reviews,
            recent: self.recent_progress,
            ..Default::default()
        };
        let mut category_ids = HashSet::new();

        for deck_category in self.categories {
            if !category_ids.insert(deck_category.id) {
                return Err(CatalogError::Invalid(format!(
                    "duplicate category id {}",
                    deck_category.id
                )));
            }
            check_progress(deck_category.progress, &deck_category.name)?;

            let mut topic_ids = HashSet::new();
            let mut topics = Vec::with_capacity(deck_category.topics.len());
            for deck_topic in deck_category.topics {
                if !topic_ids.insert(deck_topic.id) {
                    return Err(CatalogError::Invalid(format!(
                        "duplicate topic id {} in category '{}'",
                        deck_topic.id, deck_category.name
                    )));
                }
                check_progress(deck_topic.progress, &deck_topic.title)?;

                let mut question_ids = HashSet::new();
                for question in &deck_topic.questions {
                    if !question_ids.insert(question.id) {
                        return Err(CatalogError::Invalid(format!(
                            "duplicate question id {} in topic '{}'",
                            question.id, deck_topic.title
                        )));
                    }
                }

                catalog
                    .questions
                    .insert((deck_category.id, deck_topic.id), deck_topic.questions);
                topics.push(Topic {
                    id: deck_topic.id,
                    title: deck_topic.title,
                    progress: deck_topic.progress,
                    last_reviewed: deck_topic.last_reviewed,
                    next_review: deck_topic.next_review,
                    difficulty: deck_topic.difficulty,
                    status: deck_topic.status,
                });
            }

            debug!(
                "Deck category '{}' has {} topics",
                deck_category.name,
                topics.len()
            );
            catalog.categories.push(Category {
                id: deck_category.id,
                topic_count: deck_category
                    .topic_count
                    .unwrap_or(u32::try_from(topics.len()).unwrap_or(u32::MAX)),
                name: deck_category.name,
                icon: deck_category.icon,
                progress: deck_category.progress,
            });
            catalog.topics.insert(deck_category.id, topics);
        }

        Ok(catalog)
    }
}

fn check_progress(progress: u8, owner: &str) -> Result<(), CatalogError> {
    if progress > 100 {
        return Err(CatalogError::Invalid(format!(
            "progress {progress} for '{owner}' is above 100"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SMALL_DECK: &str = r#"
{
  "categories": [
    {
      "id": 7,
      "name": "Systems",
      "icon": "database",
      "progress": 40,
      "topics": [
        {
          "id": 1,
          "title": "Caching",
          "progress": 20,
          "last_reviewed": "yesterday",
          "next_review": "Today",
          "difficulty": "hard",
          "status": "review_needed",
          "questions": [
            { "id": 1, "prompt": "What is a write-back cache?",
              "answer": "Writes land in cache first.", "hints": ["Think about latency"] },
            { "id": 2, "prompt": "Name an eviction policy.", "answer": "LRU." }
          ]
        }
      ]
    }
  ],
  "upcoming_reviews": [
    { "id": 1, "topic": "Caching", "category": "Systems", "due_in": "1 hour" }
  ]
}
"#;

    #[test]
    fn test_builtin_has_four_categories_with_three_topics_each() {
        let catalog = StaticCatalog::builtin();
        assert_eq!(catalog.categories().len(), 4);
        for category in catalog.categories() {
            assert_eq!(catalog.topics(category).len(), 3);
        }
        assert_eq!(catalog.categories()[0].name, "Technical");
        assert_eq!(catalog.categories()[0].topic_count, 25);
        assert_eq!(catalog.upcoming_reviews().len(), 3);
        assert_eq!(catalog.recent_progress().len(), 3);
    }

    #[test]
    fn test_builtin_topics_have_two_questions() {
        let catalog = StaticCatalog::builtin();
        let technical = &catalog.categories()[0];
        let basics = &catalog.topics(technical)[0];
        assert_eq!(basics.title, "Basic Concepts");
        let questions = catalog.questions(technical, basics);
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].hints.len(), 2);
    }

    #[test]
    fn test_unknown_lookups_return_empty() {
        let catalog = StaticCatalog::builtin();
        let stranger = Category {
            id: 99,
            name: "Unknown".into(),
            icon: CategoryIcon::Code,
            topic_count: 0,
            progress: 0,
        };
        assert!(catalog.topics(&stranger).is_empty());
        let topic = catalog.topics(&catalog.categories()[0])[0].clone();
        assert!(catalog.questions(&stranger, &topic).is_empty());
    }

    #[test]
    fn test_parse_small_deck() {
        let catalog = StaticCatalog::from_json_str(SMALL_DECK).unwrap();
        let systems = &catalog.categories()[0];
        assert_eq!(systems.icon, CategoryIcon::Database);
        // topic_count falls back to the topics present
        assert_eq!(systems.topic_count, 1);

        let caching = &catalog.topics(systems)[0];
        assert_eq!(caching.status, TopicStatus::ReviewNeeded);
        assert_eq!(caching.difficulty, Difficulty::Hard);

        let questions = catalog.questions(systems, caching);
        assert_eq!(questions.len(), 2);
        assert!(questions[1].hints.is_empty());
        assert_eq!(catalog.upcoming_reviews()[0].due_in, "1 hour");
        assert!(catalog.recent_progress().is_empty());
    }

    #[test]
    fn test_rejects_duplicate_category_ids() {
        let json = r#"{"categories": [
            {"id": 1, "name": "A"},
            {"id": 1, "name": "B"}
        ]}"#;
        let err = StaticCatalog::from_json_str(json).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::Invalid(ref msg) if msg.contains("duplicate category id 1")
        ));
    }

    #[test]
    fn test_rejects_duplicate_topic_ids() {
        let json = r#"{"categories": [{"id": 1, "name": "A", "topics": [
            {"id": 3, "title": "x", "difficulty": "easy", "status": "mastered"},
            {"id": 3, "title": "y", "difficulty": "easy", "status": "mastered"}
        ]}]}"#;
        let err = StaticCatalog::from_json_str(json).unwrap_err();
        assert!(err.to_string().contains("duplicate topic id 3"));
    }

    #[test]
    fn test_rejects_duplicate_question_ids() {
        let json = r#"{"categories": [{"id": 1, "name": "A", "topics": [
            {"id": 1, "title": "x", "difficulty": "easy", "status": "mastered", "questions": [
                {"id": 1, "prompt": "p", "answer": "a"},
                {"id": 1, "prompt": "q", "answer": "b"}
            ]}
        ]}]}"#;
        let err = StaticCatalog::from_json_str(json).unwrap_err();
        assert!(err.to_string().contains("duplicate question id 1 in topic 'x'"));
    }

    #[test]
    fn test_rejects_progress_above_100() {
        let json = r#"{"categories": [{"id": 1, "name": "A", "progress": 101}]}"#;
        let err = StaticCatalog::from_json_str(json).unwrap_err();
        assert!(err.to_string().contains("above 100"));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = StaticCatalog::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn test_load_deck_from_disk() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("deck.json");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(SMALL_DECK.as_bytes()).unwrap();

        let catalog = load_deck(&path).unwrap();
        assert_eq!(catalog.categories()[0].name, "Systems");
    }

    #[test]
    fn test_load_deck_missing_file_is_io_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = load_deck(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Io(_)));
    }
}
