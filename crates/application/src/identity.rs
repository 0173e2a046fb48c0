//! 外部标识映射
//!
//! 领域对象本身没有公开标识，接收层为每个对象生成一个不透明的 UUID 字符串，
//! 并维护正反两个方向的索引。

use std::collections::HashMap;
use std::hash::Hash;

use uuid::Uuid;

#[derive(Debug)]
pub struct IdentityMap<T> {
    ids_by_item: HashMap<T, String>,
    items_by_id: HashMap<String, T>,
}

impl<T> Default for IdentityMap<T> {
    fn default() -> Self {
        Self {
            ids_by_item: HashMap::new(),
            items_by_id: HashMap::new(),
        }
    }
}

impl<T: Eq + Hash + Clone> IdentityMap<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// 为对象生成新标识；已登记过的对象返回原有标识。
    pub fn mint(&mut self, item: T) -> String {
        if let Some(existing) = self.ids_by_item.get(&item) {
            return existing.clone();
        }
        let id = Uuid::new_v4().to_string();
        self.items_by_id.insert(id.clone(), item.clone());
        self.ids_by_item.insert(item, id.clone());
        id
    }

    pub fn id_of(&self, item: &T) -> Option<&str> {
        self.ids_by_item.get(item).map(String::as_str)
    }

    pub fn resolve(&self, id: &str) -> Option<&T> {
        self.items_by_id.get(id)
    }

    pub fn len(&self) -> usize {
        self.ids_by_item.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids_by_item.is_empty()
    }
}
