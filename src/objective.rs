// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! Objective tree structure.
//!
//! An __objective__ is one token of the naming hierarchy that a project's
//! subspaces collectively spell out. Running the pathname extraction over
//! every subspace yields one token sequence per subspace; inserting all of
//! them into a shared prefix trie merges the sequences wherever they agree,
//! so `Sc010_Shot0100/AssetA.blend` and `Sc010_Shot0100/Shot0100_AssetB.blend`
//! end up as siblings under the same `Shot0100` node no matter how
//! redundantly they were named on disk.
//!
//! The tree is an arena: nodes live in one `Vec` and refer to each other by
//! index, with index zero reserved for a virtual root that carries no data.
//! It is rebuilt from a fresh directory scan on every access and never
//! cached; project trees are hundreds of entries, not millions, so a
//! rebuild costs less than any invalidation scheme would.

use crate::{name::normalize_name, subspace::NodeData};

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    path::{Path, PathBuf},
};

/// Classification of an objective node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectiveType {
    /// Some subspace whose normalized name ends in this token is a
    /// directory.
    Directory,

    /// Subspaces end in this token, but none of them is a directory.
    File,

    /// No subspace's normalized name ends exactly here; the token exists
    /// only as an intermediate prefix.
    Phantom,
}

#[derive(Debug)]
struct RawNode {
    name: String,
    subspaces: Vec<PathBuf>,
    parent: usize,
    children: Vec<usize>,
}

/// Prefix trie over the pathname token sequences of an omoospace.
#[derive(Debug)]
pub struct ObjectiveTree {
    title: String,
    nodes: Vec<RawNode>,
}

impl ObjectiveTree {
    /// Construct an empty tree titled after its omoospace.
    pub(crate) fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            nodes: vec![RawNode {
                name: String::new(),
                subspaces: Vec::new(),
                parent: 0,
                children: Vec::new(),
            }],
        }
    }

    /// Insert one extracted token sequence, merging with existing nodes.
    ///
    /// At each depth an existing sibling with the same name absorbs the new
    /// data's contributing subspaces (set union by path); otherwise a new
    /// node is appended.
    pub(crate) fn insert(&mut self, data: impl IntoIterator<Item = NodeData>) {
        let mut current = 0;
        for item in data {
            let found = self.nodes[current]
                .children
                .iter()
                .copied()
                .find(|&child| self.nodes[child].name == item.name);

            current = match found {
                Some(child) => {
                    for subspace in item.subspaces {
                        if !self.nodes[child].subspaces.contains(&subspace) {
                            self.nodes[child].subspaces.push(subspace);
                        }
                    }
                    child
                }
                None => {
                    let index = self.nodes.len();
                    self.nodes.push(RawNode {
                        name: item.name,
                        subspaces: item.subspaces,
                        parent: current,
                        children: Vec::new(),
                    });
                    self.nodes[current].children.push(index);
                    index
                }
            };
        }
    }

    /// Number of objectives in the tree, excluding the virtual root.
    pub fn count(&self) -> usize {
        self.nodes.len() - 1
    }

    /// Check if the tree holds no objectives at all.
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Get an objective by node name or full pathname.
    ///
    /// First tries an exact match on any single node's name (pre-order,
    /// first hit wins); failing that, the input is read as an
    /// underscore-joined path from the root and matched as a whole chain.
    pub fn get(&self, name_or_pathname: &str) -> Option<Objective<'_>> {
        if let Some(index) = self
            .preorder()
            .into_iter()
            .find(|&index| self.nodes[index].name == name_or_pathname)
        {
            return Some(Objective { tree: self, index });
        }

        let mut current = 0;
        for token in name_or_pathname.split('_') {
            current = self.nodes[current]
                .children
                .iter()
                .copied()
                .find(|&child| self.nodes[child].name == token)?;
        }

        (current != 0).then_some(Objective {
            tree: self,
            index: current,
        })
    }

    /// Iterate over every objective in pre-order.
    pub fn iter(&self) -> impl Iterator<Item = Objective<'_>> {
        self.preorder()
            .into_iter()
            .map(move |index| Objective { tree: self, index })
    }

    /// Render the tree as an indented listing titled with the omoospace
    /// name.
    pub fn format(&self) -> String {
        let mut out = self.title.clone();
        self.render(0, "", &mut out);
        out
    }

    fn render(&self, index: usize, prefix: &str, out: &mut String) {
        let children = &self.nodes[index].children;
        for (position, &child) in children.iter().enumerate() {
            let is_last = position + 1 == children.len();
            out.push('\n');
            out.push_str(prefix);
            out.push_str(if is_last { "╰── " } else { "├── " });
            out.push_str(&self.nodes[child].name);

            let next_prefix = format!("{prefix}{}", if is_last { "    " } else { "│   " });
            self.render(child, &next_prefix, out);
        }
    }

    fn preorder(&self) -> Vec<usize> {
        let mut order = Vec::with_capacity(self.count());
        let mut stack: Vec<usize> = self.nodes[0].children.iter().rev().copied().collect();
        while let Some(index) = stack.pop() {
            order.push(index);
            stack.extend(self.nodes[index].children.iter().rev());
        }

        order
    }
}

/// Handle to one node of an [`ObjectiveTree`].
#[derive(Debug, Clone, Copy)]
pub struct Objective<'a> {
    tree: &'a ObjectiveTree,
    index: usize,
}

impl<'a> Objective<'a> {
    /// Canonical token of this objective.
    pub fn name(&self) -> &'a str {
        &self.tree.nodes[self.index].name
    }

    /// Root-relative chain of names from the top-level ancestor down to
    /// this node.
    fn chain(&self) -> Vec<&'a str> {
        let mut names = Vec::new();
        let mut current = self.index;
        while current != 0 {
            names.push(self.tree.nodes[current].name.as_str());
            current = self.tree.nodes[current].parent;
        }
        names.reverse();
        names
    }

    /// Root-relative slash-joined chain of names.
    pub fn path(&self) -> String {
        self.chain().join("/")
    }

    /// Root-relative underscore-joined chain of names.
    pub fn pathname(&self) -> String {
        self.chain().join("_")
    }

    /// Parent objective, if this node is not a top-level one.
    pub fn parent(&self) -> Option<Objective<'a>> {
        let parent = self.tree.nodes[self.index].parent;
        (parent != 0).then_some(Objective {
            tree: self.tree,
            index: parent,
        })
    }

    /// Child objectives in insertion order.
    pub fn children(&self) -> Vec<Objective<'a>> {
        self.tree.nodes[self.index]
            .children
            .iter()
            .map(|&index| Objective {
                tree: self.tree,
                index,
            })
            .collect()
    }

    /// Contributing subspace paths of exactly this node.
    pub fn subspaces(&self) -> &'a [PathBuf] {
        &self.tree.nodes[self.index].subspaces
    }

    /// First contributing subspace that is a directory, if any.
    pub fn root_dir(&self) -> Option<&'a Path> {
        self.subspaces()
            .iter()
            .find(|subspace| subspace.is_dir())
            .map(PathBuf::as_path)
    }

    /// Classify this objective.
    ///
    /// An __endpoint__ subspace is one whose normalized stem ends exactly in
    /// this node's name. No endpoints means the node is phantom; otherwise
    /// the node is a directory or file objective depending on what the
    /// endpoints are on disk.
    pub fn kind(&self) -> ObjectiveType {
        let endpoints: Vec<&PathBuf> = self
            .subspaces()
            .iter()
            .filter(|subspace| {
                let stem = subspace
                    .file_stem()
                    .map(|stem| stem.to_string_lossy().into_owned())
                    .unwrap_or_default();
                normalize_name(&stem, false).split('_').next_back() == Some(self.name())
            })
            .collect();

        if endpoints.is_empty() {
            ObjectiveType::Phantom
        } else if endpoints.iter().any(|subspace| subspace.is_dir()) {
            ObjectiveType::Directory
        } else {
            ObjectiveType::File
        }
    }
}

impl Display for Objective<'_> {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> FmtResult {
        fmt.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    fn sample_tree() -> ObjectiveTree {
        let mut tree = ObjectiveTree::new("Sample");
        tree.insert([
            NodeData::new("Sc010", "/p/Sc010_Shot0100"),
            NodeData::new("Shot0100", "/p/Sc010_Shot0100"),
            NodeData::new("AssetA", "/p/Sc010_Shot0100/AssetA.blend"),
        ]);
        tree.insert([
            NodeData::new("Sc010", "/p/Sc010_Shot0100"),
            NodeData::new("Shot0100", "/p/Sc010_Shot0100"),
            NodeData::new("AssetB", "/p/Sc010_Shot0100/AssetB.blend"),
        ]);
        tree.insert([NodeData::new("Props", "/p/Props")]);
        tree
    }

    #[test]
    fn insert_merges_shared_prefixes() {
        let tree = sample_tree();
        assert_eq!(tree.count(), 5);

        let shot = tree.get("Shot0100").unwrap();
        assert_eq!(shot.children().len(), 2);
        assert_eq!(shot.subspaces().len(), 1);
    }

    #[test]
    fn get_by_name_and_by_pathname() {
        let tree = sample_tree();

        let by_name = tree.get("AssetB").unwrap();
        assert_eq!(by_name.pathname(), "Sc010_Shot0100_AssetB");

        let by_pathname = tree.get("Sc010_Shot0100_AssetA").unwrap();
        assert_eq!(by_pathname.name(), "AssetA");
        assert_eq!(by_pathname.path(), "Sc010/Shot0100/AssetA");

        assert!(tree.get("Nowhere").is_none());
        assert!(tree.get("Sc010_Nowhere").is_none());
    }

    #[test]
    fn parent_chain_stops_at_root() {
        let tree = sample_tree();
        let asset = tree.get("AssetA").unwrap();
        let shot = asset.parent().unwrap();
        let scene = shot.parent().unwrap();

        assert_eq!(shot.name(), "Shot0100");
        assert_eq!(scene.name(), "Sc010");
        assert!(scene.parent().is_none());
    }

    #[test]
    fn preorder_iteration_is_deterministic() {
        let tree = sample_tree();
        let names: Vec<&str> = tree.iter().map(|objective| objective.name()).collect();
        assert_eq!(names, vec!["Sc010", "Shot0100", "AssetA", "AssetB", "Props"]);
    }

    #[test]
    fn format_renders_indented_listing() {
        let tree = sample_tree();
        let expect = indoc! {"
            Sample
            ├── Sc010
            │   ╰── Shot0100
            │       ├── AssetA
            │       ╰── AssetB
            ╰── Props"};
        assert_eq!(tree.format(), expect);
    }
}
