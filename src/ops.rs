//! Operator sugar over the [`Bigboard`] methods.
//!
//! Only the value-producing operators are provided. There are no `*Assign`
//! impls: a board is never changed in place.

use std::ops::{BitAnd, BitOr, BitXor, Not, Shl, Shr};

use paste::paste;

use crate::bitboard::Bigboard;

/// `impl_binop!(And, and)` wires `BitAnd` to `Bigboard::and` / `Bigboard::and_word`
/// for every owned/borrowed combination.
macro_rules! impl_binop {
    ($($op:ident, $method:ident;)*) => {
        paste! {
            $(
                impl [<Bit $op>]<&Bigboard> for &Bigboard {
                    type Output = Bigboard;
                    #[inline]
                    fn [<bit $method>](self, rhs: &Bigboard) -> Bigboard {
                        Bigboard::$method(self, rhs)
                    }
                }

                impl [<Bit $op>]<&Bigboard> for Bigboard {
                    type Output = Bigboard;
                    #[inline]
                    fn [<bit $method>](self, rhs: &Bigboard) -> Bigboard {
                        Bigboard::$method(&self, rhs)
                    }
                }

                impl [<Bit $op>]<Bigboard> for &Bigboard {
                    type Output = Bigboard;
                    #[inline]
                    fn [<bit $method>](self, rhs: Bigboard) -> Bigboard {
                        Bigboard::$method(self, &rhs)
                    }
                }

                impl [<Bit $op>] for Bigboard {
                    type Output = Bigboard;
                    #[inline]
                    fn [<bit $method>](self, rhs: Bigboard) -> Bigboard {
                        Bigboard::$method(&self, &rhs)
                    }
                }

                impl [<Bit $op>]<u64> for &Bigboard {
                    type Output = Bigboard;
                    #[inline]
                    fn [<bit $method>](self, rhs: u64) -> Bigboard {
                        Bigboard::[<$method _word>](self, rhs)
                    }
                }

                impl [<Bit $op>]<u64> for Bigboard {
                    type Output = Bigboard;
                    #[inline]
                    fn [<bit $method>](self, rhs: u64) -> Bigboard {
                        Bigboard::[<$method _word>](&self, rhs)
                    }
                }
            )*
        }
    };
}

impl_binop! {
    And, and;
    Or, or;
    Xor, xor;
}

impl Not for &Bigboard {
    type Output = Bigboard;
    #[inline]
    fn not(self) -> Bigboard {
        Bigboard::not(self)
    }
}

impl Not for Bigboard {
    type Output = Bigboard;
    #[inline]
    fn not(self) -> Bigboard {
        Bigboard::not(&self)
    }
}

impl Shl<usize> for &Bigboard {
    type Output = Bigboard;
    #[inline]
    fn shl(self, amount: usize) -> Bigboard {
        self.left(amount)
    }
}

impl Shl<usize> for Bigboard {
    type Output = Bigboard;
    #[inline]
    fn shl(self, amount: usize) -> Bigboard {
        self.left(amount)
    }
}

impl Shr<usize> for &Bigboard {
    type Output = Bigboard;
    #[inline]
    fn shr(self, amount: usize) -> Bigboard {
        self.right(amount)
    }
}

impl Shr<usize> for Bigboard {
    type Output = Bigboard;
    #[inline]
    fn shr(self, amount: usize) -> Bigboard {
        self.right(amount)
    }
}
