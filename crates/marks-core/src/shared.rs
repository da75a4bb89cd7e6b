//! Shared handles for bookmark metadata and tags
//!
//! A bookmark copies its `metadata` and `tags` shallowly: the handle is
//! copied, the contents are not. Every clone of a [`Shared`] points at the
//! same storage, so a change made through one handle is visible through all
//! of them. Use [`Shared::deep_clone`] to get independent storage.
//!
//! Handles are `Rc`-based and therefore confined to a single thread.

use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::tags::join_tags;

/// Open, unvalidated bag of descriptive attributes
pub type MetadataMap = Map<String, Value>;

/// Shared handle to bookmark metadata
pub type Metadata = Shared<MetadataMap>;

/// Shared handle to an ordered list of tags
pub type Tags = Shared<Vec<String>>;

/// Single-threaded shared, interior-mutable value
pub struct Shared<T>(Rc<RefCell<T>>);

impl<T> Shared<T> {
    /// Wrap a value in a new handle
    pub fn new(value: T) -> Self {
        Self(Rc::new(RefCell::new(value)))
    }

    /// Borrow the contents
    ///
    /// # Panics
    ///
    /// Panics if the contents are currently mutably borrowed.
    pub fn borrow(&self) -> Ref<'_, T> {
        self.0.borrow()
    }

    /// Mutably borrow the contents
    ///
    /// The change is observed by every handle sharing this storage.
    ///
    /// # Panics
    ///
    /// Panics if the contents are currently borrowed.
    pub fn borrow_mut(&self) -> RefMut<'_, T> {
        self.0.borrow_mut()
    }

    /// Whether both handles point at the same storage
    pub fn is_shared_with(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Number of handles sharing this storage
    pub fn handle_count(&self) -> usize {
        Rc::strong_count(&self.0)
    }
}

impl<T: Clone> Shared<T> {
    /// Copy the contents into fresh, unshared storage
    pub fn deep_clone(&self) -> Self {
        Self::new(self.0.borrow().clone())
    }

    /// Snapshot of the current contents
    pub fn get(&self) -> T {
        self.0.borrow().clone()
    }
}

impl Shared<MetadataMap> {
    /// Look up a single attribute
    pub fn attribute(&self, key: &str) -> Option<Value> {
        self.0.borrow().get(key).cloned()
    }

    /// The `title` attribute, when it is a string
    pub fn title(&self) -> Option<String> {
        match self.0.borrow().get("title") {
            Some(Value::String(title)) => Some(title.clone()),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }
}

impl Shared<Vec<String>> {
    pub fn contains(&self, tag: &str) -> bool {
        self.0.borrow().iter().any(|t| t == tag)
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// Tags joined with `sep`, in order
    pub fn joined(&self, sep: &str) -> String {
        join_tags(&self.0.borrow(), sep)
    }
}

// Clone shares storage; it never copies the contents.
impl<T> Clone for Shared<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T: Default> Default for Shared<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: PartialEq> PartialEq for Shared<T> {
    fn eq(&self, other: &Self) -> bool {
        self.is_shared_with(other) || *self.0.borrow() == *other.0.borrow()
    }
}

impl<T: fmt::Debug> fmt::Debug for Shared<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0.borrow(), f)
    }
}

impl<T> From<T> for Shared<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl From<Vec<&str>> for Tags {
    fn from(tags: Vec<&str>) -> Self {
        Self::new(tags.into_iter().map(String::from).collect())
    }
}

impl<T: Serialize> Serialize for Shared<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.borrow().serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Shared<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        T::deserialize(deserializer).map(Self::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_clone_shares_storage() {
        let tags: Tags = vec!["news", "tech"].into();
        let other = tags.clone();

        assert!(tags.is_shared_with(&other));
        assert_eq!(tags.handle_count(), 2);

        other.borrow_mut().push("rust".to_string());
        assert_eq!(tags.get(), vec!["news", "tech", "rust"]);
    }

    #[test]
    fn test_deep_clone_detaches() {
        let tags: Tags = vec!["news"].into();
        let copy = tags.deep_clone();

        assert!(!tags.is_shared_with(&copy));
        assert_eq!(tags, copy);

        copy.borrow_mut().push("tech".to_string());
        assert_eq!(tags.len(), 1);
        assert_eq!(copy.len(), 2);
        assert_ne!(tags, copy);
    }

    #[test]
    fn test_equality_is_by_contents() {
        let a: Tags = vec!["a", "b"].into();
        let b: Tags = vec!["a", "b"].into();
        let reordered: Tags = vec!["b", "a"].into();

        assert_eq!(a, b);
        assert!(!a.is_shared_with(&b));
        assert_ne!(a, reordered);
    }

    #[test]
    fn test_metadata_title() {
        let mut map = MetadataMap::new();
        map.insert("title".to_string(), json!("Example"));
        map.insert("visits".to_string(), json!(3));
        let metadata = Metadata::new(map);

        assert_eq!(metadata.title(), Some("Example".to_string()));
        assert_eq!(metadata.attribute("visits"), Some(json!(3)));
        assert_eq!(metadata.attribute("missing"), None);
        assert_eq!(metadata.len(), 2);
    }

    #[test]
    fn test_metadata_title_requires_string() {
        let mut map = MetadataMap::new();
        map.insert("title".to_string(), json!(42));
        let metadata = Metadata::new(map);

        assert_eq!(metadata.title(), None);
    }

    #[test]
    fn test_tags_keep_duplicates_and_order() {
        let tags: Tags = vec!["b", "a", "b"].into();
        assert_eq!(tags.len(), 3);
        assert!(tags.contains("a"));
        assert!(!tags.contains("c"));
        assert_eq!(tags.joined(","), "b,a,b");
    }

    #[test]
    fn test_serde_is_transparent() {
        let tags: Tags = vec!["news", "tech"].into();
        let json = serde_json::to_string(&tags).unwrap();
        assert_eq!(json, r#"["news","tech"]"#);

        let parsed: Tags = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, tags);
        assert!(!parsed.is_shared_with(&tags));
    }

    #[test]
    fn test_debug_shows_contents() {
        let tags: Tags = vec!["news"].into();
        assert_eq!(format!("{:?}", tags), r#"["news"]"#);
    }
}
