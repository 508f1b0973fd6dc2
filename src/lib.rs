//! Persistent sequences with a random access zipper
//!
//! A sequence is either an unfocused tree (`raz::RazSeq`) or a
//! zipper focused at an edit cursor (`raz::Raz`). Edits beside
//! the cursor cost O(1) each; placing the cursor at any index
//! and rebuilding the unfocused tree cost O(log n) expected.
//! Balance comes from a probabilistic level on every separator
//! between elements, so no rebalancing pass ever runs. All
//! values are immutable and share structure, so cloning and
//! keeping old versions is cheap.

extern crate rand;

pub mod stack;
pub mod zip;
pub mod seqzip;
pub mod tree;
pub mod raz;

#[cfg(test)]
mod tests {
	use rand::{Rng, thread_rng};

	use crate::zip::{Dir, Zip};
	use crate::seqzip::{Seq, SeqZip};
	use crate::raz::{Raz, RazSeq, Cmd, gen_level_with};

	#[test]
	fn test_raz_zipper() {
		// define a sequence
		let none = Raz::new();
		let some = none.push_r(3).push_r(7).push_r(1).push_r(0);
		let seq: RazSeq<usize> = some.unzip();
		let result = seq.iter().collect::<Vec<_>>();
		assert_eq!(vec![0,1,7,3], result);

		// save some of it for later
		let save = some.pull_r().unwrap().pull(Dir::R).unwrap();

		// use a zip to edit it
		let cur = seq.zip_to(2).unwrap();
		assert_eq!(Ok(1), cur.peek_l());
		let fix = cur.edit(Dir::R, 2).unwrap();

		// unzip back to a sequence to see the result
		let restore = fix.unzip();
		let result = restore.iter().collect::<Vec<_>>();
		assert_eq!(vec![0,1,2,3], result);

		// show off that this is a persistent structure
		assert_eq!(Ok(7), save.peek_r());
	}

	#[test]
	fn test_commands_build_a_sequence() {
		let cur = Raz::empty(3)
			.do_cmd(Cmd::Insert(Dir::L, 'a', 2))
			.do_cmd(Cmd::Insert(Dir::R, 'c', 1))
			.do_cmd(Cmd::Insert(Dir::R, 'b', 4))
			.do_cmd(Cmd::Move(Dir::R));
		let seq = cur.unfocus();
		assert_eq!(3, seq.count());
		assert_eq!(vec!['a','b','c'], seq.iter().collect::<Vec<_>>());
	}

	#[test]
	fn test_random_edits_match_vec() {
		let mut rng = thread_rng();
		let mut vec: Vec<usize> = Vec::new();
		let mut seq = Raz::empty(gen_level_with(&mut rng)).unfocus();

		for val in 0..100 {
			let pos = rng.gen_range(0..vec.len() + 1);
			vec.insert(pos, val);
			seq = seq.focus(pos)
				.insert(Dir::L, val, gen_level_with(&mut rng))
				.unfocus();
		}
		assert_eq!(vec, seq.iter().collect::<Vec<_>>());

		for _ in 0..50 {
			let pos = rng.gen_range(0..vec.len());
			vec.remove(pos);
			seq = seq.focus(pos).remove(Dir::R).unfocus();
		}
		assert_eq!(vec, seq.iter().collect::<Vec<_>>());
		assert_eq!(50, seq.count());
	}

	#[test]
	fn test_refocus_walk() {
		let mut raz = Raz::new();
		for val in 0..20 {
			raz = raz.push_l(val);
		}
		let seq = raz.unzip();
		for pos in 0..20 {
			let cur = seq.zip_to(pos + 1).unwrap();
			assert_eq!(Ok(pos), cur.peek_l());
		}
	}
}
