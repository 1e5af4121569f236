use dashmap::DashMap;
use uuid::Uuid;

/// Caller-owned store mapping opaque tokens to in-flight values, e.g.
/// uploaded datasets awaiting a batch run or finished batch reports.
///
/// The store holds nothing globally; the embedding service creates one,
/// passes it by reference, and decides when entries expire. Entries live
/// only as long as the process.
pub struct TokenStore<T> {
    entries: DashMap<Uuid, T>,
}

impl<T> TokenStore<T> {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Store a value and hand back the opaque token that retrieves it.
    pub fn insert(&self, value: T) -> Uuid {
        let token = Uuid::new_v4();
        self.entries.insert(token, value);
        token
    }

    /// Remove and return the value for a token, if still present.
    pub fn take(&self, token: &Uuid) -> Option<T> {
        self.entries.remove(token).map(|(_, value)| value)
    }

    pub fn contains(&self, token: &Uuid) -> bool {
        self.entries.contains_key(token)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: Clone> TokenStore<T> {
    /// Fetch a copy of the value without removing it.
    pub fn fetch(&self, token: &Uuid) -> Option<T> {
        self.entries.get(token).map(|entry| entry.value().clone())
    }
}

impl<T> Default for TokenStore<T> {
    fn default() -> Self {
        Self::new()
    }
}
