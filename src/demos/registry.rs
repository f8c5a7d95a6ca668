// registry.rs - Demo registry for managing available demonstrations

use super::{
    ArrayBasicsDemo, ArrayIndexingDemo, ArrayOpsDemo, Demo, DemoGroup, DictDemo, FilesDemo,
    ListDemo, MemoryDemo, PerformanceDemo, SetDemo, TupleDemo,
};
use crate::error::{DemoError, DemoResult};
use indexmap::IndexMap;

/// Name that selects every registered demo
pub const ALL: &str = "all";

/// Registry of available demos, kept in tour order
pub struct DemoRegistry {
    demos: IndexMap<String, Box<dyn Demo>>,
}

impl DemoRegistry {
    pub fn new() -> Self {
        let mut registry = Self {
            demos: IndexMap::new(),
        };

        // Container tour
        registry.register_demo(Box::new(ListDemo));
        registry.register_demo(Box::new(TupleDemo));
        registry.register_demo(Box::new(DictDemo));
        registry.register_demo(Box::new(SetDemo));

        // Array tour
        registry.register_demo(Box::new(ArrayBasicsDemo));
        registry.register_demo(Box::new(ArrayOpsDemo));
        registry.register_demo(Box::new(ArrayIndexingDemo));
        registry.register_demo(Box::new(PerformanceDemo));
        registry.register_demo(Box::new(MemoryDemo));
        registry.register_demo(Box::new(FilesDemo));

        registry
    }

    /// Register a demo under its own name; re-registering replaces it in place
    pub fn register_demo(&mut self, demo: Box<dyn Demo>) {
        self.demos.insert(demo.name().to_string(), demo);
    }

    pub fn get_demo(&self, name: &str) -> Option<&dyn Demo> {
        self.demos.get(name).map(|d| d.as_ref())
    }

    pub fn has_demo(&self, name: &str) -> bool {
        self.demos.contains_key(name)
    }

    /// Group names accepted by `resolve` in addition to demo names
    pub fn group_names() -> [&'static str; 3] {
        [
            DemoGroup::Containers.name(),
            DemoGroup::Arrays.name(),
            ALL,
        ]
    }

    /// True for a demo name or a group name
    pub fn is_selectable(&self, name: &str) -> bool {
        self.has_demo(name) || Self::group_names().contains(&name)
    }

    /// `(name, description)` pairs in tour order
    pub fn list_demos(&self) -> Vec<(&str, &str)> {
        self.demos
            .values()
            .map(|d| (d.name(), d.description()))
            .collect()
    }

    pub fn get_demo_names(&self) -> Vec<&str> {
        self.demos.keys().map(|s| s.as_str()).collect()
    }

    fn in_group(&self, group: DemoGroup) -> impl Iterator<Item = &dyn Demo> {
        self.demos
            .values()
            .map(|d| d.as_ref())
            .filter(move |d| d.group() == group)
    }

    /// Expand demo and group names into demos to run.
    /// The result follows tour order and holds each demo once; an empty
    /// selection means everything.
    pub fn resolve<S: AsRef<str>>(&self, selection: &[S]) -> DemoResult<Vec<&dyn Demo>> {
        let mut chosen: Vec<&str> = Vec::new();

        if selection.is_empty() {
            chosen.extend(self.demos.keys().map(|s| s.as_str()));
        }

        for name in selection.iter().map(|s| s.as_ref().trim()) {
            match name {
                ALL => chosen.extend(self.demos.keys().map(|s| s.as_str())),
                "containers" => chosen.extend(self.in_group(DemoGroup::Containers).map(|d| d.name())),
                "arrays" => chosen.extend(self.in_group(DemoGroup::Arrays).map(|d| d.name())),
                other if self.has_demo(other) => chosen.push(other),
                other => return Err(DemoError::UnknownDemo(other.to_string())),
            }
        }

        Ok(self
            .demos
            .values()
            .map(|d| d.as_ref())
            .filter(|d| chosen.contains(&d.name()))
            .collect())
    }
}

impl Default for DemoRegistry {
    fn default() -> Self {
        Self::new()
    }
}
