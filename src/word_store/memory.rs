use crate::word_store::WordStore;

#[derive(Default, Debug, Clone)]
pub struct InMemoryWordStore {
    words: Vec<String>,
}

impl InMemoryWordStore {
    #[must_use]
    pub fn new(words: Vec<String>) -> Self {
        Self { words }
    }
}

impl From<Vec<String>> for InMemoryWordStore {
    fn from(words: Vec<String>) -> Self {
        Self::new(words)
    }
}

#[async_trait::async_trait]
impl WordStore for InMemoryWordStore {
    async fn list(&self) -> Vec<String> {
        self.words.clone()
    }

    async fn len(&self) -> usize {
        self.words.len()
    }

    async fn get(&self, index: usize) -> Option<String> {
        self.words.get(index).cloned()
    }

    async fn append(&mut self, word: String) -> usize {
        self.words.push(word);
        self.words.len() - 1
    }
}
