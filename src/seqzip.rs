// Trait for a sequence-zipper pair, a sequence that can be converted
// to and from a zipper at different locations.
// This conversion is assumed to be efficient (O(log n) or better)

use crate::zip::Zip;

pub trait Seq<T,Z>: Sized where Z: SeqZip<T,Self> {
	fn zip_to(&self, loc: usize) -> Result<Z,&str>;
}

pub trait SeqZip<T,S>: Zip<T> where S: Seq<T,Self> {
	fn unzip(&self) -> S;
}
