//! Entity/relation dictionaries and training triples

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::dataset::facts::Fact;

pub const ENTITIES_FILE: &str = "entities.dict";
pub const RELATIONS_FILE: &str = "relations.dict";
pub const TRAIN_FILE: &str = "train.txt";

/// Names with IDs assigned in first-seen order, starting at 0
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    names: Vec<String>,
    ids: HashMap<String, usize>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the ID for `name`, assigning the next free one if it is new
    pub fn intern(&mut self, name: &str) -> usize {
        if let Some(&id) = self.ids.get(name) {
            return id;
        }
        let id = self.names.len();
        self.names.push(name.to_string());
        self.ids.insert(name.to_string(), id);
        id
    }

    pub fn id(&self, name: &str) -> Option<usize> {
        self.ids.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// `(id, name)` pairs in ID order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.names.iter().enumerate().map(|(id, name)| (id, name.as_str()))
    }

    fn write_to<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        for (id, name) in self.iter() {
            writeln!(out, "{}\t{}", id, name)?;
        }
        Ok(())
    }
}

/// A training triple with both entities resolved to their IDs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Triple<'a> {
    pub head_id: usize,
    pub relation: &'a str,
    pub tail_id: usize,
}

#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub entities: Dictionary,
    pub relations: Dictionary,
    pub facts: Vec<Fact>,
}

impl Dataset {
    pub fn from_facts(facts: Vec<Fact>) -> Self {
        let mut entities = Dictionary::new();
        let mut relations = Dictionary::new();

        for fact in &facts {
            entities.intern(&fact.head);
            entities.intern(&fact.tail);
            relations.intern(&fact.relation);
        }

        Self {
            entities,
            relations,
            facts,
        }
    }

    pub fn triples(&self) -> impl Iterator<Item = Triple<'_>> {
        self.facts.iter().filter_map(|fact| {
            Some(Triple {
                head_id: self.entities.id(&fact.head)?,
                relation: &fact.relation,
                tail_id: self.entities.id(&fact.tail)?,
            })
        })
    }

    /// Write `entities.dict`, `relations.dict` and `train.txt` into `dir`
    pub fn write<P: AsRef<Path>>(&self, dir: P) -> Result<()> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create output directory: {:?}", dir))?;

        let entities_path = dir.join(ENTITIES_FILE);
        tracing::info!("Writing {:?}", entities_path);
        write_file(&entities_path, |out| self.entities.write_to(out))?;

        let relations_path = dir.join(RELATIONS_FILE);
        tracing::info!("Writing {:?}", relations_path);
        write_file(&relations_path, |out| self.relations.write_to(out))?;

        let train_path = dir.join(TRAIN_FILE);
        tracing::info!("Writing {:?}", train_path);
        write_file(&train_path, |out| {
            for triple in self.triples() {
                writeln!(out, "{}\t{}\t{}", triple.head_id, triple.relation, triple.tail_id)?;
            }
            Ok(())
        })?;

        Ok(())
    }
}

fn write_file<F>(path: &Path, body: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<std::fs::File>) -> std::io::Result<()>,
{
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create {:?}", path))?;
    let mut out = BufWriter::new(file);
    body(&mut out)
        .and_then(|_| out.flush())
        .with_context(|| format!("Failed to write {:?}", path))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::facts::parse_facts;
    use tempfile::TempDir;

    fn fact(relation: &str, head: &str, tail: &str) -> Fact {
        Fact {
            relation: relation.to_string(),
            head: head.to_string(),
            tail: tail.to_string(),
        }
    }

    #[test]
    fn test_single_fact_ids() {
        let dataset = Dataset::from_facts(vec![fact("knows", "alice", "bob")]);

        assert_eq!(dataset.entities.id("alice"), Some(0));
        assert_eq!(dataset.entities.id("bob"), Some(1));
        assert_eq!(dataset.relations.id("knows"), Some(0));

        let triples: Vec<_> = dataset.triples().collect();
        assert_eq!(
            triples,
            vec![Triple {
                head_id: 0,
                relation: "knows",
                tail_id: 1,
            }]
        );
    }

    #[test]
    fn test_first_seen_order() {
        let dataset = Dataset::from_facts(vec![
            fact("parent", "bob", "carol"),
            fact("knows", "alice", "bob"),
            fact("parent", "carol", "alice"),
        ]);

        let entities: Vec<_> = dataset.entities.iter().collect();
        assert_eq!(entities, vec![(0, "bob"), (1, "carol"), (2, "alice")]);
        let relations: Vec<_> = dataset.relations.iter().collect();
        assert_eq!(relations, vec![(0, "parent"), (1, "knows")]);
        assert_eq!(dataset.triples().count(), 3);
    }

    #[test]
    fn test_write_dataset() {
        let temp_dir = TempDir::new().unwrap();
        let out_dir = temp_dir.path().join("my_dataset");

        let parsed = parse_facts("knows(alice,bob).\n% comment\nlikes(bob, alice).\n");
        let dataset = Dataset::from_facts(parsed.facts);
        dataset.write(&out_dir).unwrap();

        let entities = std::fs::read_to_string(out_dir.join(ENTITIES_FILE)).unwrap();
        assert_eq!(entities, "0\talice\n1\tbob\n");
        let relations = std::fs::read_to_string(out_dir.join(RELATIONS_FILE)).unwrap();
        assert_eq!(relations, "0\tknows\n1\tlikes\n");
        let train = std::fs::read_to_string(out_dir.join(TRAIN_FILE)).unwrap();
        assert_eq!(train, "0\tknows\t1\n1\tlikes\t0\n");
    }
}
