pub const ROOT_CATEGORY_ID: i64 = 1;

/// Normalized catalog category and its subtree.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: i64,
    pub parent_id: i64,
    pub name: String,
    pub is_active: bool,
    pub position: i64,
    pub level: i64,
    pub product_count: u64,
    pub children: Vec<Category>,
}

impl Category {
    /// Local root the backend never returns; its children are the
    /// top-level categories.
    pub fn synthetic_root(children: Vec<Category>) -> Self {
        Self {
            id: ROOT_CATEGORY_ID,
            parent_id: 0,
            name: "Root".to_string(),
            is_active: true,
            position: 0,
            level: 0,
            product_count: 0,
            children,
        }
    }

    /// Stand-in record for a category id. No lookup is performed, so the id
    /// is not checked against the real tree.
    pub fn placeholder(id: i64) -> Self {
        Self {
            id,
            parent_id: ROOT_CATEGORY_ID,
            name: format!("Category {}", id),
            is_active: true,
            position: 0,
            level: 1,
            product_count: 0,
            children: Vec::new(),
        }
    }

    /// Copy of the tree with inactive categories and their subtrees removed.
    pub fn without_inactive(&self) -> Self {
        Self {
            children: self
                .children
                .iter()
                .filter(|c| c.is_active)
                .map(Category::without_inactive)
                .collect(),
            ..self.clone_shallow()
        }
    }

    fn clone_shallow(&self) -> Self {
        Self {
            id: self.id,
            parent_id: self.parent_id,
            name: self.name.clone(),
            is_active: self.is_active,
            position: self.position,
            level: self.level,
            product_count: self.product_count,
            children: Vec::new(),
        }
    }
}
