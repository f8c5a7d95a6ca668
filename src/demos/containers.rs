// containers.rs - Sequence, tuple, mapping and set walkthroughs

use super::{Demo, DemoContext, DemoGroup};
use crate::containers::{FrozenSequence, Mapping, Sequence, Value, ValueSet};
use crate::error::DemoResult;
use crate::output::Report;
use crate::values;
use std::io::Write;

/// Render a value the way `print(item)` would: text without quotes
fn plain(value: &Value) -> String {
    match value.as_text() {
        Some(text) => text.to_string(),
        None => value.to_string(),
    }
}

#[derive(Debug, Default)]
pub struct ListDemo;

impl Demo for ListDemo {
    fn name(&self) -> &'static str {
        "list"
    }

    fn description(&self) -> &'static str {
        "Ordered mutable sequence: indexing, slicing, insert, remove, pop"
    }

    fn group(&self) -> DemoGroup {
        DemoGroup::Containers
    }

    fn run(&self, _ctx: &mut DemoContext, report: &mut Report) -> DemoResult<()> {
        report.section("list")?;

        let mut my_list: Sequence<Value> = values![1, 2, 3, "apple", "banana"].into();
        writeln!(report, "Original list: {}", my_list)?;

        writeln!(report, "First element: {}", plain(my_list.get(0)?))?;
        writeln!(report, "Last element: {}", plain(my_list.get(-1)?))?;
        writeln!(
            report,
            "Slice from index 1 to 3 (exclusive): {}",
            my_list.slice(Some(1), Some(4))
        )?;

        my_list.set(0, Value::from(10))?;
        writeln!(report, "List after modifying first element: {}", my_list)?;

        my_list.append(Value::from("cherry"));
        writeln!(report, "List after appending 'cherry': {}", my_list)?;
        my_list.insert(1, Value::from("orange"));
        writeln!(report, "List after inserting 'orange' at index 1: {}", my_list)?;

        my_list.remove(&Value::from("banana"))?;
        writeln!(report, "List after removing 'banana': {}", my_list)?;
        let popped = my_list.pop(None)?;
        writeln!(
            report,
            "List after popping last element: {}, Popped item: {}",
            my_list,
            plain(&popped)
        )?;
        my_list.delete(0)?;
        writeln!(report, "List after deleting element at index 0: {}", my_list)?;

        writeln!(report, "Length of the list: {}", my_list.len())?;
        writeln!(
            report,
            "Is 'apple' in the list? {}",
            Value::from(my_list.contains(&Value::from("apple")))
        )?;

        writeln!(report, "Iterating through the list:")?;
        for item in &my_list {
            writeln!(report, "{}", plain(item))?;
        }
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct TupleDemo;

impl Demo for TupleDemo {
    fn name(&self) -> &'static str {
        "tuple"
    }

    fn description(&self) -> &'static str {
        "Ordered immutable sequence: access, slicing, concatenation, mutation error"
    }

    fn group(&self) -> DemoGroup {
        DemoGroup::Containers
    }

    fn run(&self, _ctx: &mut DemoContext, report: &mut Report) -> DemoResult<()> {
        report.section("tuple")?;

        let my_tuple: FrozenSequence<Value> = values![1, 2, "apple", "banana"].into();
        writeln!(report, "Original tuple: {}", my_tuple)?;

        writeln!(report, "First element: {}", plain(my_tuple.get(0)?))?;
        writeln!(report, "Last element: {}", plain(my_tuple.get(-1)?))?;
        writeln!(
            report,
            "Slice from index 1 to 3 (exclusive): {}",
            my_tuple.slice(Some(1), Some(4))
        )?;

        if let Err(e) = my_tuple.try_set(0, Value::from(10)) {
            writeln!(report, "Error trying to modify a tuple: {}", e)?;
        }

        writeln!(report, "Length of the tuple: {}", my_tuple.len())?;

        let another_tuple: FrozenSequence<Value> = values!["cherry", "date"].into();
        let combined = my_tuple.concat(&another_tuple);
        writeln!(report, "Combined tuple: {}", combined)?;

        writeln!(report, "Iterating through the tuple:")?;
        for item in &my_tuple {
            writeln!(report, "{}", plain(item))?;
        }
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct DictDemo;

impl Demo for DictDemo {
    fn name(&self) -> &'static str {
        "dict"
    }

    fn description(&self) -> &'static str {
        "Key-unique mapping: lookup, safe lookup, pop, delete, views"
    }

    fn group(&self) -> DemoGroup {
        DemoGroup::Containers
    }

    fn run(&self, _ctx: &mut DemoContext, report: &mut Report) -> DemoResult<()> {
        report.section("dict")?;

        let key = |name: &str| Value::from(name);
        let mut my_dict: Mapping<Value, Value> = [
            (key("name"), Value::from("Alice")),
            (key("age"), Value::from(30)),
            (key("city"), Value::from("New York")),
        ]
        .into_iter()
        .collect();
        writeln!(report, "Original dictionary: {}", my_dict)?;

        writeln!(report, "Name: {}", plain(my_dict.lookup(&key("name"))?))?;
        let age = my_dict.get(&key("age")).map(plain);
        writeln!(report, "Age: {}", age.as_deref().unwrap_or("None"))?;

        my_dict.insert(key("age"), Value::from(31));
        writeln!(report, "Dictionary after modifying age: {}", my_dict)?;

        my_dict.insert(key("occupation"), Value::from("Engineer"));
        writeln!(report, "Dictionary after adding occupation: {}", my_dict)?;

        let removed = my_dict.pop(&key("city"))?;
        writeln!(
            report,
            "Dictionary after removing city: {}, Removed value: {}",
            my_dict,
            plain(&removed)
        )?;
        my_dict.delete(&key("name"))?;
        writeln!(report, "Dictionary after deleting name: {}", my_dict)?;

        writeln!(report, "Length of the dictionary: {}", my_dict.len())?;

        writeln!(report, "Keys: {}", my_dict.keys())?;
        writeln!(report, "Values: {}", my_dict.values())?;
        writeln!(report, "Items (key-value pairs): {}", my_dict.items())?;

        writeln!(report, "Iterating through dictionary keys:")?;
        for key in my_dict.keys() {
            writeln!(report, "{}", plain(key))?;
        }
        writeln!(report, "Iterating through dictionary values:")?;
        for value in my_dict.values() {
            writeln!(report, "{}", plain(value))?;
        }
        writeln!(report, "Iterating through dictionary items:")?;
        for (key, value) in my_dict.items() {
            writeln!(report, "{}: {}", plain(key), plain(value))?;
        }
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct SetDemo;

impl Demo for SetDemo {
    fn name(&self) -> &'static str {
        "set"
    }

    fn description(&self) -> &'static str {
        "Unique-element set: add, update, remove, discard, pop, set algebra"
    }

    fn group(&self) -> DemoGroup {
        DemoGroup::Containers
    }

    fn run(&self, _ctx: &mut DemoContext, report: &mut Report) -> DemoResult<()> {
        report.section("set")?;

        let mut my_set: ValueSet<i64> = [1, 2, 3, 2, 4, 1].into_iter().collect();
        writeln!(report, "Original set: {}", my_set)?;

        my_set.add(5);
        writeln!(report, "Set after adding 5: {}", my_set)?;
        my_set.update([6, 7, 1]);
        writeln!(report, "Set after updating with [6, 7, 1]: {}", my_set)?;

        my_set.remove(&3)?;
        writeln!(report, "Set after removing 3: {}", my_set)?;
        my_set.discard(&10);
        writeln!(report, "Set after discarding 10: {}", my_set)?;
        let popped = my_set.pop()?;
        writeln!(
            report,
            "Set after popping an element: {}, Popped item: {}",
            my_set, popped
        )?;

        writeln!(report, "Length of the set: {}", my_set.len())?;
        writeln!(
            report,
            "Is 4 in the set? {}",
            Value::from(my_set.contains(&4))
        )?;

        let set_a: ValueSet<i64> = [1, 2, 3, 4].into_iter().collect();
        let set_b: ValueSet<i64> = [3, 4, 5, 6].into_iter().collect();
        writeln!(report, "Set A: {}", set_a)?;
        writeln!(report, "Set B: {}", set_b)?;

        writeln!(report, "Union (all unique elements): {}", set_a.union(&set_b))?;
        writeln!(
            report,
            "Intersection (common elements): {}",
            set_a.intersection(&set_b)
        )?;
        writeln!(
            report,
            "Difference (elements in A but not in B): {}",
            set_a.difference(&set_b)
        )?;
        writeln!(
            report,
            "Symmetric difference (elements in either A or B, but not both): {}",
            set_a.symmetric_difference(&set_b)
        )?;

        writeln!(report, "Iterating through the set:")?;
        for item in &my_set {
            writeln!(report, "{}", item)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_demo(demo: &dyn Demo) -> String {
        let mut ctx = DemoContext::new(".");
        let mut report = Report::captured();
        demo.run(&mut ctx, &mut report).unwrap();
        report.contents()
    }

    #[test]
    fn test_list_walkthrough() {
        let out = run_demo(&ListDemo);
        assert!(out.contains("Original list: [1, 2, 3, 'apple', 'banana']"));
        assert!(out.contains("First element: 1"));
        assert!(out.contains("Last element: banana"));
        assert!(out.contains("Slice from index 1 to 3 (exclusive): [2, 3, 'apple']"));
        assert!(out.contains(
            "List after inserting 'orange' at index 1: [10, 'orange', 2, 3, 'apple', 'banana', 'cherry']"
        ));
        assert!(out.contains(
            "List after popping last element: [10, 'orange', 2, 3, 'apple'], Popped item: cherry"
        ));
        assert!(out.contains("List after deleting element at index 0: ['orange', 2, 3, 'apple']"));
        assert!(out.contains("Length of the list: 4"));
        assert!(out.contains("Is 'apple' in the list? True"));
        assert!(out.ends_with("Iterating through the list:\norange\n2\n3\napple\n"));
    }

    #[test]
    fn test_tuple_walkthrough() {
        let out = run_demo(&TupleDemo);
        assert!(out.contains("Original tuple: (1, 2, 'apple', 'banana')"));
        assert!(out.contains(
            "Error trying to modify a tuple: 'tuple' object does not support item assignment"
        ));
        assert!(out.contains("Combined tuple: (1, 2, 'apple', 'banana', 'cherry', 'date')"));
        assert!(out.contains("Length of the tuple: 4"));
    }

    #[test]
    fn test_dict_walkthrough() {
        let out = run_demo(&DictDemo);
        assert!(out.contains(
            "Original dictionary: {'name': 'Alice', 'age': 30, 'city': 'New York'}"
        ));
        assert!(out.contains("Name: Alice"));
        assert!(out.contains("Age: 30"));
        assert!(out.contains("Removed value: New York"));
        assert!(out.contains("Dictionary after deleting name: {'age': 31, 'occupation': 'Engineer'}"));
        assert!(out.contains("Keys: dict_keys(['age', 'occupation'])"));
        assert!(out.contains("Items (key-value pairs): dict_items([('age', 31), ('occupation', 'Engineer')])"));
        assert!(out.ends_with("Iterating through dictionary items:\nage: 31\noccupation: Engineer\n"));
    }

    #[test]
    fn test_set_walkthrough() {
        let out = run_demo(&SetDemo);
        assert!(out.contains("Length of the set: 5"));
        assert!(out.contains("Is 4 in the set? True") || out.contains("Popped item: 4"));
        assert!(out.contains("Difference (elements in A but not in B): {"));
        // Iteration prints one element per line for the five survivors
        let tail = out.split("Iterating through the set:\n").nth(1).unwrap();
        assert_eq!(tail.lines().count(), 5);
    }
}
