//! This crate provides a random-access double-ended queue, implemented as
//! a chunked block list.
//!
//! The [`Deque`] keeps array-like indexed access together with list-like
//! cheap insertion and removal at arbitrary positions. Pushing and popping
//! at either end is amortized *O*(1); indexing, positional insertion and
//! removal, and cursor arithmetic are amortized *O*(√*n*).
//!
//! Here is a quick example showing how the deque works.
//!
//! ```
//! use chunked_deque::Deque;
//!
//! let mut deque: Deque<i32> = (0..6).collect();
//!
//! let cursor = deque.seek(deque.cursor_start(), 3)?;
//! assert_eq!(deque.get(cursor), Ok(&3));
//!
//! let cursor = deque.insert(cursor, 42)?; // [0, 1, 2, 42, 3, 4, 5]
//! assert_eq!(deque.at(3), Ok(&42));
//!
//! let following = deque.erase(cursor)?; // [0, 1, 2, 3, 4, 5]
//! assert_eq!(deque.get(following), Ok(&3));
//!
//! assert_eq!(deque.distance(deque.cursor_start(), deque.cursor_end()), Ok(6));
//! # Ok::<(), chunked_deque::Error>(())
//! ```
//!
//! # Memory Layout
//!
//! The elements are cut into a sequence of blocks, each an owned run of
//! slots bounded by the chunk size (512 unless configured with
//! [`Deque::with_chunk_size`]):
//!
//! ```text
//!                 Deque (len = 7)
//!   ╔═════════╦═════════╦═════════╗
//!   ║ Block 1 ║ Block 2 ║ Block 3 ║      block list; a block's ordinal
//!   ╚════╤════╩════╤════╩════╤════╝      is its position in the list
//!        │         │         │
//!   ┌────▼────┐ ┌──▼──────┐ ┌▼────────┐
//!   │ A B     │ │ C D E   │ │ F G     │  slots: one element each, fewer
//!   └─────────┘ └─────────┘ └─────────┘  than `chunk` per block
//! ```
//!
//! Maintenance keeps the cut balanced: a block reaching `chunk` elements
//! splits down the middle, two neighbors holding `chunk / 2` elements or
//! fewer between them fuse, and a block that runs empty is dropped (unless
//! it is the only one). Every block except a sole survivor therefore stays
//! more than half full, which is what bounds the block count — and with it
//! indexing and cursor arithmetic — by *O*(√*n*).
//!
//! # Iteration
//!
//! Iterating over the deque is by the [`Iter`] and [`IterMut`] iterators.
//! These are double-ended, exact-size and fused, and flatten the block
//! structure transparently. [`IterMut`] provides mutability of the
//! elements, but not of the sequence itself.
//!
//! ```
//! use chunked_deque::Deque;
//!
//! let mut deque = Deque::from([1, 2, 3]);
//! deque.iter_mut().for_each(|item| *item *= 2);
//! assert_eq!(Vec::from_iter(deque), vec![2, 4, 6]);
//! ```
//!
//! # Cursors
//!
//! A [`Cursor`] names a position without borrowing the deque, so it can be
//! kept across mutations and fed back into [`Deque::insert`] and
//! [`Deque::erase`]. In a deque with length *n* there are *n* + 2 cursor
//! positions: one per element, one past the back, and one before the
//! front (the off-end pair takes part in arithmetic only). A cursor stays
//! pinned to its element until that element is erased or the surrounding
//! block is restructured; a cursor used after that — or against a deque it
//! does not belong to — reports [`Error::InvalidIterator`] instead of
//! touching anything.
//!
//! # Errors
//!
//! Fallible operations return [`Error`]: [`Error::IndexOutOfBound`] from
//! indexed access, [`Error::ContainerEmpty`] from boundary access on an
//! empty deque, and [`Error::InvalidIterator`] from stale, foreign or
//! off-end cursors. Checks precede mutation, so a failed call never
//! changes the deque.

#[doc(inline)]
pub use deque::cursor::Cursor;
#[doc(inline)]
pub use deque::iterator::{IntoIter, Iter, IterMut};
#[doc(inline)]
pub use deque::{Deque, DEFAULT_CHUNK_SIZE};
pub use error::Error;

pub mod deque;
pub mod error;
