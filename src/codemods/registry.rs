use super::traits::Codemod;

pub struct CodemodRegistry {
    codemods: Vec<Box<dyn Codemod>>,
}

impl CodemodRegistry {
    pub fn new(codemods: Vec<Box<dyn Codemod>>) -> Self {
        Self { codemods }
    }

    pub fn find_codemod(&self, name: &str) -> Option<&dyn Codemod> {
        self.codemods
            .iter()
            .find(|c| c.name() == name)
            .map(|c| c.as_ref())
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.codemods.iter().map(|c| c.name()).collect()
    }
}

pub fn default_registry() -> CodemodRegistry {
    let codemods: Vec<Box<dyn Codemod>> = vec![
        Box::new(super::RowCheckCodemod),
        Box::new(super::IndexedFetchCodemod),
        Box::new(super::RowcountCodemod),
    ];
    CodemodRegistry::new(codemods)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_finds_each_codemod() {
        let registry = default_registry();
        assert!(registry.find_codemod("add-row-checks").is_some());
        assert!(registry.find_codemod("split-indexed-fetch").is_some());
        assert!(registry.find_codemod("rowcount").is_some());
        assert!(registry.find_codemod("unknown").is_none());
    }

    #[test]
    fn test_names_are_unique() {
        let mut names = default_registry().names();
        let len = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), len);
    }

    #[test]
    fn test_only_row_checks_exclude_helper() {
        let registry = default_registry();
        let helper = "utils/db_helpers.py";
        assert!(registry.find_codemod("add-row-checks").unwrap().excludes(helper));
        assert!(!registry.find_codemod("split-indexed-fetch").unwrap().excludes(helper));
        assert!(!registry.find_codemod("rowcount").unwrap().excludes(helper));
    }
}
