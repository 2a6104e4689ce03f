use chrono::{DateTime, Local};
use uuid::Uuid;

/// 列表条目
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: String,
    pub text: String,
    pub created_at: DateTime<Local>,
}

impl Item {
    pub fn new(text: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text,
            created_at: Local::now(),
        }
    }
}

/// 内存中的条目列表，按插入顺序排列
#[derive(Debug, Clone, Default)]
pub struct ItemStore {
    items: Vec<Item>,
}

impl ItemStore {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// 追加新条目，返回其 ID
    pub fn add(&mut self, text: String) -> String {
        let item = Item::new(text);
        let id = item.id.clone();
        self.items.push(item);
        id
    }

    /// 替换条目文本；ID 不存在时不做任何事
    pub fn update(&mut self, id: &str, text: String) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.text = text;
                true
            }
            None => false,
        }
    }

    /// 删除条目，其余条目保持相对顺序
    pub fn delete(&mut self, id: &str) -> Option<Item> {
        let index = self.position(id)?;
        Some(self.items.remove(index))
    }

    pub fn get(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn texts(store: &ItemStore) -> Vec<&str> {
        store.items().iter().map(|item| item.text.as_str()).collect()
    }

    #[test]
    fn test_add_appends_in_order() {
        let mut store = ItemStore::new();
        let first = store.add("Buy milk".to_string());
        let second = store.add("Walk dog".to_string());

        assert_eq!(store.len(), 2);
        assert_eq!(texts(&store), vec!["Buy milk", "Walk dog"]);
        assert_eq!(store.items()[0].id, first);
        assert_eq!(store.items()[1].id, second);
        assert_ne!(first, second);
    }

    #[test]
    fn test_add_accepts_empty_text() {
        let mut store = ItemStore::new();
        let id = store.add(String::new());

        assert_eq!(store.get(&id).map(|item| item.text.as_str()), Some(""));
    }

    #[test]
    fn test_update_changes_only_text() {
        let mut store = ItemStore::new();
        let a = store.add("a".to_string());
        let b = store.add("b".to_string());
        let before = store.get(&a).cloned().unwrap();

        assert!(store.update(&a, "a2".to_string()));

        let after = store.get(&a).unwrap();
        assert_eq!(after.text, "a2");
        assert_eq!(after.id, before.id);
        assert_eq!(after.created_at, before.created_at);
        assert_eq!(store.get(&b).unwrap().text, "b");
    }

    #[test]
    fn test_update_missing_id_is_noop() {
        let mut store = ItemStore::new();
        store.add("a".to_string());
        let before = store.items().to_vec();

        assert!(!store.update("missing", "x".to_string()));
        assert_eq!(store.items(), before.as_slice());
    }

    #[test]
    fn test_delete_keeps_order() {
        let mut store = ItemStore::new();
        store.add("a".to_string());
        let b = store.add("b".to_string());
        store.add("c".to_string());

        let removed = store.delete(&b).unwrap();
        assert_eq!(removed.text, "b");
        assert_eq!(texts(&store), vec!["a", "c"]);
        assert!(store.delete(&b).is_none());
        assert_eq!(store.len(), 2);
    }

    proptest! {
        #[test]
        fn adds_preserve_count_and_order(inputs in prop::collection::vec(".{0,12}", 0..40)) {
            let mut store = ItemStore::new();
            for text in &inputs {
                store.add(text.clone());
            }
            prop_assert_eq!(store.len(), inputs.len());
            let stored: Vec<String> = store.items().iter().map(|item| item.text.clone()).collect();
            prop_assert_eq!(stored, inputs);
        }

        #[test]
        fn ids_stay_unique(count in 0usize..100) {
            let mut store = ItemStore::new();
            for i in 0..count {
                store.add(i.to_string());
            }
            let mut ids: Vec<&str> = store.items().iter().map(|item| item.id.as_str()).collect();
            ids.sort_unstable();
            ids.dedup();
            prop_assert_eq!(ids.len(), count);
        }

        #[test]
        fn delete_removes_exactly_one(count in 1usize..30, pick in any::<prop::sample::Index>()) {
            let mut store = ItemStore::new();
            for i in 0..count {
                store.add(i.to_string());
            }
            let before = store.items().to_vec();
            let index = pick.index(count);
            let id = before[index].id.clone();

            prop_assert!(store.delete(&id).is_some());
            prop_assert_eq!(store.len(), count - 1);

            let mut expected = before;
            expected.remove(index);
            prop_assert_eq!(store.items(), expected.as_slice());
        }

        #[test]
        fn update_touches_only_target(count in 1usize..30, pick in any::<prop::sample::Index>(), text in ".{0,12}") {
            let mut store = ItemStore::new();
            for i in 0..count {
                store.add(i.to_string());
            }
            let before = store.items().to_vec();
            let index = pick.index(count);

            prop_assert!(store.update(&before[index].id, text.clone()));

            for (i, (old, new)) in before.iter().zip(store.items()).enumerate() {
                prop_assert_eq!(&old.id, &new.id);
                if i == index {
                    prop_assert_eq!(&new.text, &text);
                } else {
                    prop_assert_eq!(old, new);
                }
            }
        }

        #[test]
        fn unknown_ids_leave_store_unchanged(count in 0usize..20, text in ".{0,12}") {
            let mut store = ItemStore::new();
            for i in 0..count {
                store.add(i.to_string());
            }
            let before = store.items().to_vec();

            prop_assert!(!store.update("not-an-id", text));
            prop_assert!(store.delete("not-an-id").is_none());
            prop_assert_eq!(store.items(), before.as_slice());
        }
    }
}
