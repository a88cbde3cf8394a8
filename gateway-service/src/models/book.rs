use serde::{Deserialize, Serialize};

const MAX_SUBJECTS: usize = 5;

/// One `docs` entry from the Open Library search response. Every field can
/// be absent in practice, so everything is optional here.
#[derive(Debug, Clone, Deserialize)]
pub struct BookRecord {
    pub title: Option<String>,
    pub author_name: Option<Vec<String>>,
    pub first_publish_year: Option<u32>,
    pub publisher: Option<Vec<String>>,
    pub subject: Option<Vec<String>>,
    pub cover_i: Option<u64>,
    pub key: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct OpenLibraryResponse {
    #[serde(default)]
    pub docs: Vec<BookRecord>,
}

/// Display-ready book, derived once from exactly one BookRecord.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookViewModel {
    pub title: String,
    pub author: String,
    pub first_publish_year: Option<u32>,
    pub publisher: String,
    pub subjects: Vec<String>,
    pub cover_id: Option<u64>,
    pub key: String,
}

fn join_or_unknown(names: Option<Vec<String>>) -> String {
    match names {
        Some(names) if !names.is_empty() => names.join(", "),
        _ => "Unknown".to_string(),
    }
}

impl BookViewModel {
    /// Normalizes one provider record. Records with no title are unusable
    /// and yield None.
    pub fn from_record(record: BookRecord) -> Option<Self> {
        let title = record.title?;

        let mut subjects = record.subject.unwrap_or_default();
        subjects.truncate(MAX_SUBJECTS);

        Some(BookViewModel {
            title,
            author: join_or_unknown(record.author_name),
            first_publish_year: record.first_publish_year,
            publisher: join_or_unknown(record.publisher),
            subjects,
            cover_id: record.cover_i,
            key: record.key.unwrap_or_default(),
        })
    }
}
