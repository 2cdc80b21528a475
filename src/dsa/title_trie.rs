//! Prefix tree over lower-cased bookmark titles.
//!
//! Backs autocomplete and exact-title membership queries. A terminal node
//! stores the URLs of every live bookmark carrying that title, so deleting
//! one of two same-titled bookmarks leaves the survivor searchable.

use std::collections::HashMap;

/// One autocomplete hit: a stored title (lower-cased) and an owning URL.
#[derive(Debug, Clone, PartialEq)]
pub struct PrefixMatch {
    pub word: String,
    pub url: String,
}

#[derive(Default)]
struct TrieNode {
    children: HashMap<char, TrieNode>,
    /// URLs of bookmarks whose title ends at this node. Non-empty means the
    /// node is a terminal.
    urls: Vec<String>,
}

impl TrieNode {
    fn is_terminal(&self) -> bool {
        !self.urls.is_empty()
    }
}

/// Case-insensitive prefix tree keyed by bookmark title.
#[derive(Default)]
pub struct TitleTrie {
    root: TrieNode,
    word_count: usize,
}

impl TitleTrie {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `title` (lower-cased) with `url` as an owner. Inserting the
    /// same title twice with different URLs records both owners; re-inserting
    /// an existing (title, url) pair is a no-op.
    pub fn insert(&mut self, title: &str, url: &str) {
        let mut node = &mut self.root;
        for ch in title.to_lowercase().chars() {
            node = node.children.entry(ch).or_default();
        }
        if !node.is_terminal() {
            self.word_count += 1;
        }
        if !node.urls.iter().any(|u| u == url) {
            node.urls.push(url.to_string());
        }
    }

    /// Exact-match membership test, case-insensitive.
    pub fn search(&self, title: &str) -> bool {
        self.descend(&title.to_lowercase())
            .map(TrieNode::is_terminal)
            .unwrap_or(false)
    }

    /// All stored titles starting with `prefix` (case-insensitive), one
    /// match per owning URL. Order is unspecified (depth-first over an
    /// unordered child map).
    pub fn search_by_prefix(&self, prefix: &str) -> Vec<PrefixMatch> {
        let prefix = prefix.to_lowercase();
        let mut results = Vec::new();
        if let Some(node) = self.descend(&prefix) {
            Self::dfs_collect(node, &prefix, &mut results);
        }
        results
    }

    /// Removes `url` as an owner of `title`. The terminal marker survives
    /// while other owners remain; nodes left childless and non-terminal are
    /// pruned walking back toward the root. Returns whether the (title, url)
    /// pair was present.
    pub fn delete(&mut self, title: &str, url: &str) -> bool {
        let chars: Vec<char> = title.to_lowercase().chars().collect();
        let mut removed = false;
        Self::delete_helper(&mut self.root, &chars, url, &mut removed);
        if removed {
            // delete_helper only clears the terminal when the last owner goes.
            if !Self::still_terminal(&self.root, &chars) {
                self.word_count -= 1;
            }
        }
        removed
    }

    /// All stored titles with their owners.
    pub fn all_words(&self) -> Vec<PrefixMatch> {
        let mut results = Vec::new();
        Self::dfs_collect(&self.root, "", &mut results);
        results
    }

    /// Number of distinct titles stored.
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Follows `path` (already lower-cased) from the root.
    fn descend(&self, path: &str) -> Option<&TrieNode> {
        let mut node = &self.root;
        for ch in path.chars() {
            node = node.children.get(&ch)?;
        }
        Some(node)
    }

    fn dfs_collect(node: &TrieNode, word: &str, results: &mut Vec<PrefixMatch>) {
        for url in &node.urls {
            results.push(PrefixMatch {
                word: word.to_string(),
                url: url.clone(),
            });
        }
        for (ch, child) in &node.children {
            let mut next = word.to_string();
            next.push(*ch);
            Self::dfs_collect(child, &next, results);
        }
    }

    /// Recursive deletion. Returns whether the caller should prune the child
    /// it descended into (the child ended up childless and non-terminal).
    fn delete_helper(node: &mut TrieNode, rest: &[char], url: &str, removed: &mut bool) -> bool {
        match rest.split_first() {
            None => {
                if let Some(pos) = node.urls.iter().position(|u| u == url) {
                    node.urls.remove(pos);
                    *removed = true;
                }
                node.children.is_empty() && !node.is_terminal()
            }
            Some((ch, tail)) => {
                let prune_child = match node.children.get_mut(ch) {
                    Some(child) => Self::delete_helper(child, tail, url, removed),
                    None => return false,
                };
                if prune_child {
                    node.children.remove(ch);
                }
                node.children.is_empty() && !node.is_terminal()
            }
        }
    }

    fn still_terminal(root: &TrieNode, chars: &[char]) -> bool {
        let mut node = root;
        for ch in chars {
            match node.children.get(ch) {
                Some(child) => node = child,
                None => return false,
            }
        }
        node.is_terminal()
    }
}
