//! Minerva content catalog - the static list of courses and library books
//!
//! Read-only data loaded at startup. There is no write path: the catalog
//! is versioned with the application, not stored per user.
//!
//! A note on keys: the purchase ledger is keyed by display **title** for
//! both courses and books (inherited product behavior), while completion
//! tracking is keyed by the immutable course **id**. `content_key()`
//! returns the ledger key; renaming a title orphans prior purchase
//! records, which is accepted as-is rather than silently migrated.

mod books;
mod courses;

use serde::{Deserialize, Serialize};

pub use books::builtin_books;
pub use courses::builtin_courses;

/// Fixed price in ETH for every paid course
pub const COURSE_PRICE_ETH: f64 = 0.01;

/// Fixed price in ETH for every paid book
pub const BOOK_PRICE_ETH: f64 = 0.01;

/// Course audience category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// General catalog
    Regular,
    /// Courses designed for deaf and hard-of-hearing learners
    Deaf,
}

/// A course catalog entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Price in ETH; zero for free courses
    pub price: f64,
    pub video_url: String,
    pub ipfs_link: String,
    pub video_cid: String,
    pub is_paid: bool,
    pub duration: String,
    pub instructor: String,
    pub category: Category,
    pub icon: String,
    pub topics: Vec<String>,
    pub certificate_template: String,
    pub sign_language: String,
    pub subtitles: bool,
    pub special_features: Vec<String>,
}

impl Course {
    /// The key this course is recorded under in the purchase ledger
    pub fn content_key(&self) -> &str {
        &self.title
    }
}

/// A digital library book entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    pub id: u32,
    pub title: String,
    pub author: String,
    pub cover_image: String,
    pub description: String,
    pub is_paid: bool,
    /// Price in ETH; zero for free books
    pub price: f64,
    pub pdf_url: String,
    pub is_audio: bool,
}

impl Book {
    /// The key this book is recorded under in the purchase ledger
    pub fn content_key(&self) -> &str {
        &self.title
    }
}

/// Library shelf filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookFilter {
    All,
    Free,
    Paid,
    Audio,
}

/// The full static catalog
#[derive(Debug, Clone)]
pub struct Catalog {
    courses: Vec<Course>,
    books: Vec<Book>,
}

impl Catalog {
    /// Load the built-in catalog
    pub fn builtin() -> Self {
        Self {
            courses: builtin_courses(),
            books: builtin_books(),
        }
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn course_by_id(&self, id: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == id)
    }

    pub fn course_by_title(&self, title: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.title == title)
    }

    pub fn book_by_id(&self, id: u32) -> Option<&Book> {
        self.books.iter().find(|b| b.id == id)
    }

    pub fn book_by_title(&self, title: &str) -> Option<&Book> {
        self.books.iter().find(|b| b.title == title)
    }

    /// Books matching a library shelf filter
    pub fn filtered_books(&self, filter: BookFilter) -> Vec<&Book> {
        self.books
            .iter()
            .filter(|b| match filter {
                BookFilter::All => true,
                BookFilter::Free => !b.is_paid,
                BookFilter::Paid => b.is_paid,
                BookFilter::Audio => b.is_audio,
            })
            .collect()
    }
}
