use std::fmt;
use std::hash::{Hash, Hasher};

use log::debug;
use paste::paste;
use rand::Rng;

use crate::error::{BigboardError, Result};
use crate::position::Position;

/// Number of bits in one storage word.
pub const WORD_BITS: usize = u64::BITS as usize;

/// log2(WORD_BITS).
const WORD_SHIFT: u32 = WORD_BITS.trailing_zeros();

/// Word that holds bit `index`.
#[inline]
pub const fn word_index(index: usize) -> usize {
    index >> WORD_SHIFT
}

/// Position of bit `index` inside its word.
#[inline]
pub const fn bit_offset(index: usize) -> usize {
    index & (WORD_BITS - 1)
}

/// Number of words needed to hold `size` bits.
#[inline]
pub const fn words_for(size: usize) -> usize {
    size.div_ceil(WORD_BITS)
}

/// Mask of the bits of the last word that lie on a board of `size` bits.
#[inline]
pub const fn trailing_mask(size: usize) -> u64 {
    match size % WORD_BITS {
        0 => u64::MAX,
        rem => (1u64 << rem) - 1,
    }
}

/// An immutable `width × height` bitboard, packed LERF into 64-bit words.
///
/// Every operation returns a fresh board; the receiver is never touched, so a
/// `Bigboard` can be shared freely between threads. Bits at or beyond
/// `width * height` are always zero.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bigboard {
    width: usize,
    height: usize,
    words: Box<[u64]>,
    trailing_mask: u64,
}

/// Generates the board⊗board operators together with their checked forms.
/// Operands share dimensions, so none of these can set a padding bit.
macro_rules! binary_ops {
    ($($(#[$meta:meta])* $name:ident => $op:tt;)*) => {
        paste! {
            $(
                $(#[$meta])*
                ///
                /// # Panics
                ///
                /// Panics if the boards have different dimensions.
                #[inline]
                pub fn $name(&self, other: &Bigboard) -> Bigboard {
                    self.[<try_ $name>](other).unwrap_or_else(|e| panic!("{e}"))
                }

                #[doc = concat!("Checked form of [`Bigboard::", stringify!($name), "`].")]
                pub fn [<try_ $name>](&self, other: &Bigboard) -> Result<Bigboard> {
                    self.check_shape(other)?;
                    let words = self
                        .words
                        .iter()
                        .zip(other.words.iter())
                        .map(|(a, b)| a $op b)
                        .collect();
                    Ok(self.derive(words))
                }
            )*
        }
    };
}

/// Generates the single-bit mutators together with their checked forms.
macro_rules! bit_ops {
    ($($(#[$meta:meta])* $name:ident => |$word:ident, $bit:ident| $body:expr;)*) => {
        paste! {
            $(
                $(#[$meta])*
                ///
                /// # Panics
                ///
                /// Panics if `index >= self.size()`.
                #[inline]
                pub fn $name(&self, index: usize) -> Bigboard {
                    self.[<try_ $name>](index).unwrap_or_else(|e| panic!("{e}"))
                }

                #[doc = concat!("Checked form of [`Bigboard::", stringify!($name), "`].")]
                pub fn [<try_ $name>](&self, index: usize) -> Result<Bigboard> {
                    self.check_index(index)?;
                    let mut words = self.words.clone();
                    let $word = &mut words[word_index(index)];
                    let $bit = 1u64 << bit_offset(index);
                    $body;
                    Ok(self.derive(words))
                }
            )*
        }
    };
}

impl Bigboard {
    /// Empty board of the given dimensions.
    ///
    /// # Panics
    ///
    /// Panics if `width` or `height` is zero.
    pub fn new(width: usize, height: usize) -> Self {
        Self::try_new(width, height).unwrap_or_else(|e| panic!("{e}"))
    }

    pub fn try_new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            debug!("rejecting {width}x{height} board");
            return Err(BigboardError::EmptyDimension { width, height });
        }
        let Some(size) = width.checked_mul(height) else {
            debug!("rejecting {width}x{height} board: size overflows");
            return Err(BigboardError::TooLarge { width, height });
        };
        Ok(Bigboard {
            width,
            height,
            words: vec![0; words_for(size)].into_boxed_slice(),
            trailing_mask: trailing_mask(size),
        })
    }

    /// Board whose lowest word is `value`. Bits of `value` at or above
    /// `width * height` are dropped.
    pub fn from_word(width: usize, height: usize, value: u64) -> Self {
        Self::try_from_word(width, height, value).unwrap_or_else(|e| panic!("{e}"))
    }

    pub fn try_from_word(width: usize, height: usize, value: u64) -> Result<Self> {
        let mut board = Self::try_new(width, height)?;
        board.words[0] = value;
        Ok(board.masked())
    }

    /// Board with only bit `index` set.
    ///
    /// # Panics
    ///
    /// Panics if `index` is outside the board.
    pub fn single(width: usize, height: usize, index: usize) -> Self {
        Self::new(width, height).set(index)
    }

    /// Board with every bit in `indices` set.
    ///
    /// # Panics
    ///
    /// Panics if any index is outside the board.
    pub fn from_indices<I>(width: usize, height: usize, indices: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        let mut board = Self::new(width, height);
        for index in indices {
            if let Err(e) = board.check_index(index) {
                panic!("{e}");
            }
            board.words[word_index(index)] |= 1u64 << bit_offset(index);
        }
        board
    }

    /// Board with every cell set.
    pub fn full(width: usize, height: usize) -> Self {
        Self::new(width, height).not()
    }

    /// Board filled with random bits drawn from `rng`.
    pub fn random<R: Rng + ?Sized>(width: usize, height: usize, rng: &mut R) -> Self {
        let mut board = Self::new(width, height);
        for word in board.words.iter_mut() {
            *word = rng.next_u64();
        }
        board.masked()
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells, `width * height`. Construction guarantees this does not overflow.
    #[inline]
    pub fn size(&self) -> usize {
        self.width * self.height
    }

    /// Raw storage, lowest word first. Padding bits read as zero.
    #[inline]
    pub fn words(&self) -> &[u64] {
        &self.words
    }

    #[inline]
    pub fn num_words(&self) -> usize {
        self.words.len()
    }

    /// Valid-bit mask of the last word.
    #[inline]
    pub fn trailing_mask(&self) -> u64 {
        self.trailing_mask
    }

    /// Test whether bit `index` is set.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.size()`.
    #[inline]
    pub fn get(&self, index: usize) -> bool {
        self.try_get(index).unwrap_or_else(|e| panic!("{e}"))
    }

    pub fn try_get(&self, index: usize) -> Result<bool> {
        self.check_index(index)?;
        Ok((self.words[word_index(index)] >> bit_offset(index)) & 1 != 0)
    }

    /// Test the cell at file `x`, rank `y`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is off the board.
    #[inline]
    pub fn get_xy(&self, x: usize, y: usize) -> bool {
        let pos = Position::new(x, y);
        assert!(
            pos.is_valid(self.width, self.height),
            "position {pos} off a {}x{} board",
            self.width,
            self.height
        );
        self.get(pos.to_index(self.width))
    }

    binary_ops! {
        /// Bitwise AND of two boards.
        and => &;
        /// Bitwise OR of two boards.
        or => |;
        /// Bitwise XOR of two boards.
        xor => ^;
    }

    /// Complement of every cell.
    #[allow(clippy::should_implement_trait)]
    pub fn not(&self) -> Bigboard {
        self.derive(self.words.iter().map(|w| !w).collect()).masked()
    }

    /// AND with a literal covering the lowest word; every higher word becomes zero.
    pub fn and_word(&self, literal: u64) -> Bigboard {
        let mut words = vec![0; self.words.len()].into_boxed_slice();
        words[0] = self.words[0] & literal;
        self.derive(words).masked()
    }

    /// OR a literal into the lowest word.
    pub fn or_word(&self, literal: u64) -> Bigboard {
        let mut words = self.words.clone();
        words[0] |= literal;
        self.derive(words).masked()
    }

    /// XOR a literal into the lowest word.
    pub fn xor_word(&self, literal: u64) -> Bigboard {
        let mut words = self.words.clone();
        words[0] ^= literal;
        self.derive(words).masked()
    }

    /// Shift every bit towards higher indices by `amount`. Bits pushed past
    /// the last cell are lost.
    pub fn left(&self, amount: usize) -> Bigboard {
        let n = self.words.len();
        let word_shifts = (amount / WORD_BITS).min(n);
        let partial = bit_offset(amount) as u32;

        let mut words = vec![0; n].into_boxed_slice();
        if word_shifts == n {
            return self.derive(words);
        }
        words[word_shifts..].copy_from_slice(&self.words[..n - word_shifts]);

        if partial != 0 {
            let mut carry = 0;
            for word in words[word_shifts..].iter_mut() {
                let next_carry = *word >> (u64::BITS - partial);
                *word = (*word << partial) | carry;
                carry = next_carry;
            }
        }

        self.derive(words).masked()
    }

    /// Shift every bit towards lower indices by `amount`. Bits pushed below
    /// index 0 are lost.
    pub fn right(&self, amount: usize) -> Bigboard {
        let n = self.words.len();
        let word_shifts = (amount / WORD_BITS).min(n);
        let partial = bit_offset(amount) as u32;

        let mut words = vec![0; n].into_boxed_slice();
        if word_shifts == n {
            return self.derive(words);
        }
        let kept = n - word_shifts;
        words[..kept].copy_from_slice(&self.words[word_shifts..]);

        if partial != 0 {
            let mut carry = 0;
            for word in words[..kept].iter_mut().rev() {
                let next_carry = *word << (u64::BITS - partial);
                *word = (*word >> partial) | carry;
                carry = next_carry;
            }
        }

        // A right shift only clears bits, the padding stays zero.
        self.derive(words)
    }

    bit_ops! {
        /// Copy with bit `index` set to 1.
        set => |word, bit| *word |= bit;
        /// Copy with bit `index` cleared to 0.
        unset => |word, bit| *word &= !bit;
        /// Copy with bit `index` toggled.
        flip => |word, bit| *word ^= bit;
    }

    /// Index of the lowest set bit, or `None` if empty.
    #[inline]
    pub fn lowest_bit_index(&self) -> Option<usize> {
        for (i, &w) in self.words.iter().enumerate() {
            if w != 0 {
                return Some(i * WORD_BITS + w.trailing_zeros() as usize);
            }
        }
        None
    }

    /// Index of the lowest set bit, or `-1` if empty.
    #[inline]
    pub fn bit_scan_forward(&self) -> i64 {
        self.lowest_bit_index().map_or(-1, |index| index as i64)
    }

    /// Board holding only the lowest set bit of `self`.
    pub fn lsb(&self) -> Bigboard {
        let mut words = vec![0; self.words.len()].into_boxed_slice();
        if let Some(i) = self.words.iter().position(|&w| w != 0) {
            let w = self.words[i];
            words[i] = w & w.wrapping_neg();
        }
        self.derive(words)
    }

    /// Population count.
    #[inline]
    pub fn count_ones(&self) -> u32 {
        self.words.iter().map(|w| w.count_ones()).sum()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    #[inline]
    pub fn is_nonzero(&self) -> bool {
        !self.is_empty()
    }

    /// Iterate over indices of set bits in ascending order.
    #[inline]
    pub fn iter_ones(&self) -> BitIterator<'_> {
        BitIterator {
            words: &self.words,
            word_index: 0,
            current: self.words[0],
        }
    }

    /// Same-shaped board over `words`. The caller decides whether to mask.
    #[inline]
    fn derive(&self, words: Box<[u64]>) -> Bigboard {
        debug_assert_eq!(words.len(), self.words.len());
        Bigboard {
            width: self.width,
            height: self.height,
            words,
            trailing_mask: self.trailing_mask,
        }
    }

    /// Clear the padding bits of the last word.
    #[inline]
    fn masked(mut self) -> Bigboard {
        if let Some(last) = self.words.last_mut() {
            *last &= self.trailing_mask;
        }
        self
    }

    fn check_shape(&self, other: &Bigboard) -> Result<()> {
        if self.width == other.width && self.height == other.height {
            return Ok(());
        }
        debug!(
            "shape mismatch: {}x{} against {}x{}",
            self.width, self.height, other.width, other.height
        );
        Err(BigboardError::ShapeMismatch {
            left_width: self.width,
            left_height: self.height,
            right_width: other.width,
            right_height: other.height,
        })
    }

    #[inline]
    fn check_index(&self, index: usize) -> Result<()> {
        let size = self.size();
        if index < size {
            return Ok(());
        }
        debug!(
            "index {index} out of range on {}x{} board",
            self.width, self.height
        );
        Err(BigboardError::IndexOutOfRange { index, size })
    }
}

impl Hash for Bigboard {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.width.hash(state);
        self.height.hash(state);
        for word in self.words.iter() {
            word.hash(state);
        }
    }
}

impl fmt::Display for Bigboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in (0..self.height).rev() {
            for x in 0..self.width {
                let c = if self.get(Position::new(x, y).to_index(self.width)) {
                    'X'
                } else {
                    '.'
                };
                write!(f, "{} ", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Iterator over set-bit indices of a `Bigboard`.
pub struct BitIterator<'a> {
    words: &'a [u64],
    word_index: usize,
    current: u64,
}

impl Iterator for BitIterator<'_> {
    type Item = usize;
    #[inline]
    fn next(&mut self) -> Option<usize> {
        loop {
            if self.current != 0 {
                let bit = self.current.trailing_zeros() as usize;
                // Clear lowest set bit
                self.current &= self.current - 1;
                return Some(self.word_index * WORD_BITS + bit);
            }
            self.word_index += 1;
            self.current = *self.words.get(self.word_index)?;
        }
    }
}
