//! Random access zipper
//!
//! This version keeps one element per leaf of a persistent
//! tree, with a probabilistic level on every internal node
//! deciding the shape. A focused sequence is a cursor level
//! between two streams of entries; entries nearest the cursor
//! are explicit element-level pairs, while everything further
//! out stays packaged as fragments of the unfocused tree until
//! `trim` pulls it apart. Edits beside the cursor are O(1),
//! refocusing and rebuilding the whole tree are O(log n)
//! expected. Every edit shares all other data; cloning is fast
//! and expected

use std::cmp::min;
use std::rc::Rc;

use rand;
use rand::Rng;

use crate::stack::Stack;
use crate::seqzip::{Seq, SeqZip};
use crate::tree::{Tree, Level, Count, append};
use crate::zip::{Dir, Zip};

/// An unfocused sequence: the tree alone
#[derive(Debug,Clone,PartialEq,Eq)]
pub struct RazSeq<T>(Rc<Tree<T>>);

/// A focused sequence: a cursor level between two streams,
/// each ordered nearest-the-cursor first
#[derive(Debug,Clone)]
pub struct Raz<T> {
	l: TList<T>,
	lev: Level,
	r: TList<T>,
}

// One side of a zipper. `Cons` holds an exposed element along
// with the level separating it from the rest of its side;
// `Trees` holds the fragments not yet pulled apart, nearest
// fragment first. An empty `Trees` list ends the side.
#[derive(Debug,Clone)]
enum TList<T> {
	Cons(T,Level,Rc<TList<T>>),
	Trees(Stack<Rc<Tree<T>>>),
}

/// Cursor edits, each aimed at one side of the zipper
#[derive(PartialEq,Eq,Debug,Clone)]
pub enum Cmd<T> {
	Insert(Dir,T,Level),
	Remove(Dir),
	Replace(Dir,T),
	Move(Dir),
}

pub struct Iter<T> {
	next: Raz<T>,
}

/// Draws a level from the thread rng
///
/// Counts the leading zeros of a random word, a geometric
/// distribution matching the heights of a balanced binary
/// tree. Level 0 is left for empty trees and leaves.
pub fn gen_level() -> Level {
	let num = rand::random::<usize>();
	num.leading_zeros() as Level + 1
}

/// Draws a level from a caller-supplied rng
pub fn gen_level_with<R: Rng>(rng: &mut R) -> Level {
	let num = rng.gen::<usize>();
	num.leading_zeros() as Level + 1
}

// Exposes the next element-level pair of a stream. `dir` names
// the zipper side the stream sits on, so splitting a bin visits
// the branch nearest the cursor first. An element must be
// followed by its separating level; a bin over two `Nil`
// branches is that level, kept in tree form.
fn trim<T: Clone>(dir: Dir, tl: &TList<T>) -> Option<(T,Level,TList<T>)> {
	match *tl {
		TList::Cons(ref elm, lev, ref rest) => Some((elm.clone(), lev, (**rest).clone())),
		TList::Trees(ref trees) => {
			let mut trees = trees.clone();
			let mut next = None;
			loop {
				let head = match trees.peek() {
					None => {
						if next.is_some() { panic!("trim: element without a level") }
						return None;
					}
					Some(tree) => tree.clone(),
				};
				trees = trees.pull().unwrap();
				match *head {
					Tree::Nil => {}
					Tree::Leaf(ref elm) => {
						if next.is_some() { panic!("trim: adjacent leaves") }
						next = Some(elm.clone());
					}
					Tree::Bin(lev,_,ref l,ref r) => {
						if l.is_nil() & r.is_nil() {
							match next.take() {
								Some(elm) => return Some((elm, lev, TList::Trees(trees))),
								None => panic!("trim: level without an element"),
							}
						} else {
							let (near,far) = match dir { Dir::L => (r,l), Dir::R => (l,r) };
							trees = trees.push(far.clone());
							trees = trees.push(Tree::level_bin(lev));
							trees = trees.push(near.clone());
						}
					}
				}
			}
		}
	}
}

// Folds one stream back into a tree, walking outward from the
// cursor; on the left side new entries are prepended, on the
// right appended, so the result reads in sequence order
fn grow<T: Clone>(dir: Dir, seed: Rc<Tree<T>>, tl: &TList<T>) -> Rc<Tree<T>> {
	let mut tree = seed;
	let mut tl = tl;
	loop {
		match *tl {
			TList::Cons(ref elm, lev, ref rest) => {
				let leaf = Rc::new(Tree::Leaf(elm.clone()));
				tree = match dir {
					Dir::L => append(&append(&Tree::level_bin(lev), &leaf), &tree),
					Dir::R => append(&tree, &append(&leaf, &Tree::level_bin(lev))),
				};
				tl = &**rest;
			}
			TList::Trees(ref trees) => {
				for fragment in trees.iter() {
					tree = match dir {
						Dir::L => append(fragment, &tree),
						Dir::R => append(&tree, fragment),
					};
				}
				return tree;
			}
		}
	}
}

impl<T: Clone> Raz<T> {
	/// a zipper over no elements; the level seeds the bin an
	/// immediate `unfocus` would produce
	pub fn empty(lev: Level) -> Raz<T> {
		Raz {
			l: TList::Trees(Stack::new()),
			lev: lev,
			r: TList::Trees(Stack::new()),
		}
	}

	pub fn new() -> Raz<T> {
		Raz::empty(gen_level())
	}

	pub fn singleton(elm: T) -> Raz<T> {
		Raz::new().insert(Dir::L, elm, gen_level())
	}

	/// puts `elm` beside the cursor on the chosen side, with
	/// `lev` separating it from the rest of that side
	pub fn insert(&self, dir: Dir, elm: T, lev: Level) -> Raz<T> {
		let stream = TList::Cons(elm, lev, Rc::new(self.stream(dir).clone()));
		self.with_stream(dir, stream)
	}

	/// takes the element nearest the cursor off the chosen
	/// side, along with its separating level; identity when
	/// that side is exhausted
	pub fn remove(&self, dir: Dir) -> Raz<T> {
		match trim(dir, self.stream(dir)) {
			Some((_,_,rest)) => self.with_stream(dir, rest),
			None => self.clone(),
		}
	}

	/// swaps the element nearest the cursor on the chosen side
	/// for `elm`, keeping its separating level; identity when
	/// that side is exhausted
	pub fn replace(&self, dir: Dir, elm: T) -> Raz<T> {
		match trim(dir, self.stream(dir)) {
			Some((_,lev,rest)) => self.with_stream(dir, TList::Cons(elm, lev, Rc::new(rest))),
			None => self.clone(),
		}
	}

	/// steps the cursor over the nearest element on the chosen
	/// side; the exposed level takes the cursor's place and the
	/// old cursor level crosses with the element; identity when
	/// that side is exhausted
	pub fn move_cursor(&self, dir: Dir) -> Raz<T> {
		match self.try_move(dir) {
			Some(raz) => raz,
			None => self.clone(),
		}
	}

	pub fn do_cmd(&self, cmd: Cmd<T>) -> Raz<T> {
		match cmd {
			Cmd::Insert(dir,elm,lev) => self.insert(dir,elm,lev),
			Cmd::Remove(dir) => self.remove(dir),
			Cmd::Replace(dir,elm) => self.replace(dir,elm),
			Cmd::Move(dir) => self.move_cursor(dir),
		}
	}

	/// rebuilds the one tree holding every element, with the
	/// cursor level as the separator standing in the cursor's
	/// gap
	pub fn unfocus(&self) -> RazSeq<T> {
		let l_tree = grow(Dir::L, Rc::new(Tree::Nil), &self.l);
		let r_tree = grow(Dir::R, Tree::level_bin(self.lev), &self.r);
		RazSeq(append(&l_tree, &r_tree))
	}

	fn try_move(&self, dir: Dir) -> Option<Raz<T>> {
		trim(dir, self.stream(dir)).map(|(elm,lev,rest)| {
			let crossed = TList::Cons(elm, self.lev, Rc::new(self.stream(dir.rev()).clone()));
			match dir {
				Dir::L => Raz { l: rest, lev: lev, r: crossed },
				Dir::R => Raz { l: crossed, lev: lev, r: rest },
			}
		})
	}

	fn stream(&self, dir: Dir) -> &TList<T> {
		match dir { Dir::L => &self.l, Dir::R => &self.r }
	}

	fn with_stream(&self, dir: Dir, stream: TList<T>) -> Raz<T> {
		match dir {
			Dir::L => Raz { l: stream, lev: self.lev, r: self.r.clone() },
			Dir::R => Raz { l: self.l.clone(), lev: self.lev, r: stream },
		}
	}
}

impl<T: Clone> RazSeq<T> {
	/// cached element count at the root
	pub fn count(&self) -> Count {
		let RazSeq(ref tree) = *self;
		tree.count()
	}

	pub fn is_empty(&self) -> bool {
		self.count() == 0
	}

	/// places the cursor in the gap before the `pos`-th
	/// element, clipping `pos` to the element count
	///
	/// The descent stops at the bin whose level stands in the
	/// requested gap; that level becomes the cursor and the
	/// bin's branches seed the two streams. Sibling trees
	/// passed on the way down are held under one-sided
	/// placeholder bins for `trim` to split later.
	pub fn focus(&self, pos: usize) -> Raz<T> {
		let RazSeq(ref tree) = *self;
		let mut pos = min(pos, tree.count());
		let mut tree = tree.clone();
		let mut l_trees = Stack::new();
		let mut r_trees = Stack::new();
		loop {
			let (lev,l,r) = match *tree {
				Tree::Bin(lev,_,ref l,ref r) => (lev, l.clone(), r.clone()),
				_ => panic!("focus: reached a leaf or nil"),
			};
			let left_count = l.count();
			if pos == left_count {
				return Raz {
					l: TList::Trees(l_trees.push(l)),
					lev: lev,
					r: TList::Trees(r_trees.push(r)),
				};
			} else if pos < left_count {
				r_trees = r_trees.push(Rc::new(Tree::Bin(lev, r.count(), Rc::new(Tree::Nil), r)));
				tree = l;
			} else {
				l_trees = l_trees.push(Rc::new(Tree::Bin(lev, left_count, l, Rc::new(Tree::Nil))));
				pos -= left_count;
				tree = r;
			}
		}
	}

	pub fn iter(&self) -> Iter<T> {
		Iter { next: self.focus(0) }
	}
}

impl<T: Clone> Iterator for Iter<T> {
	type Item = T;

	fn next(&mut self) -> Option<Self::Item> {
		self.next.peek_r().ok().map(|val| {
			self.next = self.next.pull_r().unwrap();
			val
		})
	}
}

impl<T: Clone> Zip<T> for Raz<T> {
	fn zip_l(&self) -> Result<Self,&str> {
		match self.try_move(Dir::L) {
			Some(raz) => Ok(raz),
			None => Err("Raz: move past beginning of sequence"),
		}
	}
	fn zip_r(&self) -> Result<Self,&str> {
		match self.try_move(Dir::R) {
			Some(raz) => Ok(raz),
			None => Err("Raz: move past end of sequence"),
		}
	}
	fn peek_l(&self) -> Result<T,&str> {
		match trim(Dir::L, &self.l) {
			Some((elm,_,_)) => Ok(elm),
			None => Err("Raz: peek past beginning of sequence"),
		}
	}
	fn peek_r(&self) -> Result<T,&str> {
		match trim(Dir::R, &self.r) {
			Some((elm,_,_)) => Ok(elm),
			None => Err("Raz: peek past end of sequence"),
		}
	}
	fn push_l(&self, val: T) -> Self {
		self.insert(Dir::L, val, gen_level())
	}
	fn push_r(&self, val: T) -> Self {
		self.insert(Dir::R, val, gen_level())
	}
	fn pull_l(&self) -> Result<Self,&str> {
		match trim(Dir::L, &self.l) {
			Some((_,_,rest)) => Ok(self.with_stream(Dir::L, rest)),
			None => Err("Raz: pull past beginning of sequence"),
		}
	}
	fn pull_r(&self) -> Result<Self,&str> {
		match trim(Dir::R, &self.r) {
			Some((_,_,rest)) => Ok(self.with_stream(Dir::R, rest)),
			None => Err("Raz: pull past end of sequence"),
		}
	}
}

impl<T: Clone> Seq<T,Raz<T>> for RazSeq<T> {
	// out-of-range locations clip to the end of the sequence
	fn zip_to(&self, loc: usize) -> Result<Raz<T>,&str> {
		Ok(self.focus(loc))
	}
}

impl<T: Clone> SeqZip<T,RazSeq<T>> for Raz<T> {
	fn unzip(&self) -> RazSeq<T> {
		self.unfocus()
	}
}
