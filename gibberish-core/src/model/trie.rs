use std::collections::BTreeMap;

/// Key of a child in a [`TrieNode`].
///
/// `End` is reserved for the end of a word and can never collide with
/// a real character.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Symbol {
	Char(char),
	End,
}

impl Symbol {
	/// Returns the character carried by this symbol, `None` for `End`.
	pub fn as_char(&self) -> Option<char> {
		match self {
			Symbol::Char(c) => Some(*c),
			Symbol::End => None,
		}
	}
}

/// A node of a substring frequency trie.
///
/// The path from the root to a node spells one substring; `count` is the
/// number of times that substring was observed at a given start offset of a
/// corpus word. The `End` child of a node records how often the substring was
/// directly followed by the end of a word.
///
/// # Invariants
/// - The root has no symbol. Its count grows once per insertion and carries
///   no meaning.
/// - Every other node's count is the number of insertions that walked
///   through it, which makes counts independent of insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TrieNode {
	symbol: Option<Symbol>,
	count: usize,
	/// Ordered so that sampling with a seeded RNG is reproducible.
	children: BTreeMap<Symbol, TrieNode>,
}

impl TrieNode {
	/// Creates an empty root node.
	pub fn new() -> Self {
		Self::default()
	}

	fn with_symbol(symbol: Symbol) -> Self {
		Self {
			symbol: Some(symbol),
			count: 0,
			children: BTreeMap::new(),
		}
	}

	/// Records one occurrence of `substring` followed by the end of a word.
	///
	/// Every prefix of `substring` gets its count increased by one, and so does
	/// the `End` child of the node reached by the whole substring. Inserting
	/// `"abc"` counts `"a"`, `"ab"`, `"abc"` and the end after `"abc"`.
	pub fn insert(&mut self, substring: &str) {
		let mut node = self;
		node.count += 1;
		for c in substring.chars() {
			let key = Symbol::Char(c);
			node = node.children.entry(key).or_insert_with(|| TrieNode::with_symbol(key));
			node.count += 1;
		}
		node.children
			.entry(Symbol::End)
			.or_insert_with(|| TrieNode::with_symbol(Symbol::End))
			.count += 1;
	}

	/// Returns the node spelled by `substring`, or `None` if any character is missing.
	///
	/// The empty substring resolves to `self`.
	pub fn lookup(&self, substring: &str) -> Option<&TrieNode> {
		self.lookup_chars(substring.chars())
	}

	/// Same as [`TrieNode::lookup`], for an arbitrary character sequence.
	pub fn lookup_chars<I: IntoIterator<Item = char>>(&self, chars: I) -> Option<&TrieNode> {
		let mut node = self;
		for c in chars {
			node = node.children.get(&Symbol::Char(c))?;
		}
		Some(node)
	}

	/// The symbol this node adds to its parent's substring (`None` for the root).
	pub fn symbol(&self) -> Option<Symbol> {
		self.symbol
	}

	/// Number of times this substring was observed.
	pub fn count(&self) -> usize {
		self.count
	}

	/// Number of times this substring ended a word.
	pub fn end_count(&self) -> usize {
		self.children.get(&Symbol::End).map_or(0, |end| end.count)
	}

	/// Returns the child reached through `symbol`.
	pub fn child(&self, symbol: Symbol) -> Option<&TrieNode> {
		self.children.get(&symbol)
	}

	/// Iterates over children in symbol order (characters first, `End` last).
	pub fn children(&self) -> impl Iterator<Item = (Symbol, &TrieNode)> {
		self.children.iter().map(|(symbol, node)| (*symbol, node))
	}

	/// Returns `true` if nothing was ever inserted below this node.
	pub fn is_empty(&self) -> bool {
		self.children.is_empty()
	}
}
