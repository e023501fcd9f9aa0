use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VideoId(String);

impl VideoId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Relevant,
    Spam,
    Appreciation,
    Grievance,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Relevant,
        Category::Spam,
        Category::Appreciation,
        Category::Grievance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Relevant => "relevant",
            Category::Spam => "spam",
            Category::Appreciation => "appreciation",
            Category::Grievance => "grievance",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Comments partitioned by category, each bucket in fetch order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedBuckets {
    pub relevant: Vec<String>,
    pub spam: Vec<String>,
    pub appreciation: Vec<String>,
    pub grievance: Vec<String>,
}

impl ClassifiedBuckets {
    pub fn push(&mut self, category: Category, comment: String) {
        self.bucket_mut(category).push(comment);
    }

    pub fn get(&self, category: Category) -> &[String] {
        match category {
            Category::Relevant => &self.relevant,
            Category::Spam => &self.spam,
            Category::Appreciation => &self.appreciation,
            Category::Grievance => &self.grievance,
        }
    }

    pub fn total(&self) -> usize {
        Category::ALL.iter().map(|c| self.get(*c).len()).sum()
    }

    fn bucket_mut(&mut self, category: Category) -> &mut Vec<String> {
        match category {
            Category::Relevant => &mut self.relevant,
            Category::Spam => &mut self.spam,
            Category::Appreciation => &mut self.appreciation,
            Category::Grievance => &mut self.grievance,
        }
    }
}
