/// A blog the runner knows how to scrape, and the category it follows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogTarget {
    pub name: String,
    pub blog_id: String,
    pub category: String,
}

/// Display name -> blog lookup, handed to whoever needs to resolve a blog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogRegistry {
    targets: Vec<BlogTarget>,
}

impl BlogRegistry {
    pub fn new(targets: Vec<BlogTarget>) -> Self {
        Self { targets }
    }

    pub fn resolve(&self, name: &str) -> Option<&BlogTarget> {
        self.targets.iter().find(|target| target.name == name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.targets.iter().map(|target| target.name.as_str()).collect()
    }
}

impl Default for BlogRegistry {
    fn default() -> Self {
        Self::new(vec![
            BlogTarget {
                name: "조양마트".to_string(),
                blog_id: "joyangmart".to_string(),
                category: "와인입고소식".to_string(),
            },
            BlogTarget {
                name: "삐에로마켓".to_string(),
                blog_id: "pierrot_market".to_string(),
                category: "와인소개".to_string(),
            },
        ])
    }
}
