pub mod bitboard;
pub mod error;
pub mod ops;
pub mod position;

pub use bitboard::{BitIterator, Bigboard, WORD_BITS};
pub use error::{BigboardError, Result};
pub use position::Position;

#[cfg(feature = "python")]
extern crate pyo3;

#[cfg(feature = "python")]
use pyo3::prelude::*;

#[cfg(feature = "python")]
#[pymodule(gil_used = false)]
fn bigboard(m: &Bound<'_, PyModule>) -> PyResult<()> {
    use python_bindings::*;
    m.add_class::<PyBigboard>()?;
    m.add("WORD_BITS", WORD_BITS)?;
    Ok(())
}

#[cfg(feature = "python")]
mod python_bindings {
    use super::*;
    use pyo3::exceptions::{PyIndexError, PyValueError};

    fn to_py_err(err: BigboardError) -> PyErr {
        match err {
            BigboardError::IndexOutOfRange { .. } => PyErr::new::<PyIndexError, _>(err.to_string()),
            _ => PyErr::new::<PyValueError, _>(err.to_string()),
        }
    }

    #[pyclass(name = "Bigboard", frozen)]
    #[derive(Clone)]
    pub struct PyBigboard {
        board: Bigboard,
    }

    impl From<Bigboard> for PyBigboard {
        fn from(board: Bigboard) -> Self {
            PyBigboard { board }
        }
    }

    #[pymethods]
    impl PyBigboard {
        #[new]
        #[pyo3(signature = (width, height, value = 0))]
        pub fn new(width: usize, height: usize, value: u64) -> PyResult<Self> {
            Bigboard::try_from_word(width, height, value)
                .map(PyBigboard::from)
                .map_err(to_py_err)
        }

        pub fn width(&self) -> usize {
            self.board.width()
        }

        pub fn height(&self) -> usize {
            self.board.height()
        }

        pub fn size(&self) -> usize {
            self.board.size()
        }

        pub fn words(&self) -> Vec<u64> {
            self.board.words().to_vec()
        }

        pub fn get(&self, index: usize) -> PyResult<bool> {
            self.board.try_get(index).map_err(to_py_err)
        }

        pub fn get_xy(&self, x: usize, y: usize) -> PyResult<bool> {
            let pos = Position::new(x, y);
            if !pos.is_valid(self.board.width(), self.board.height()) {
                return Err(PyErr::new::<PyIndexError, _>(format!(
                    "position {} off a {}x{} board",
                    pos,
                    self.board.width(),
                    self.board.height()
                )));
            }
            self.get(pos.to_index(self.board.width()))
        }

        pub fn and_word(&self, literal: u64) -> Self {
            self.board.and_word(literal).into()
        }

        pub fn or_word(&self, literal: u64) -> Self {
            self.board.or_word(literal).into()
        }

        pub fn xor_word(&self, literal: u64) -> Self {
            self.board.xor_word(literal).into()
        }

        pub fn left(&self, amount: usize) -> Self {
            self.board.left(amount).into()
        }

        pub fn right(&self, amount: usize) -> Self {
            self.board.right(amount).into()
        }

        pub fn set(&self, index: usize) -> PyResult<Self> {
            self.board.try_set(index).map(Self::from).map_err(to_py_err)
        }

        pub fn unset(&self, index: usize) -> PyResult<Self> {
            self.board.try_unset(index).map(Self::from).map_err(to_py_err)
        }

        pub fn flip(&self, index: usize) -> PyResult<Self> {
            self.board.try_flip(index).map(Self::from).map_err(to_py_err)
        }

        pub fn bit_scan_forward(&self) -> i64 {
            self.board.bit_scan_forward()
        }

        pub fn lsb(&self) -> Self {
            self.board.lsb().into()
        }

        pub fn count_ones(&self) -> u32 {
            self.board.count_ones()
        }

        pub fn is_empty(&self) -> bool {
            self.board.is_empty()
        }

        pub fn indices(&self) -> Vec<usize> {
            self.board.iter_ones().collect()
        }

        pub fn __and__(&self, other: &PyBigboard) -> PyResult<Self> {
            self.board.try_and(&other.board).map(Self::from).map_err(to_py_err)
        }

        pub fn __or__(&self, other: &PyBigboard) -> PyResult<Self> {
            self.board.try_or(&other.board).map(Self::from).map_err(to_py_err)
        }

        pub fn __xor__(&self, other: &PyBigboard) -> PyResult<Self> {
            self.board.try_xor(&other.board).map(Self::from).map_err(to_py_err)
        }

        pub fn __invert__(&self) -> Self {
            Bigboard::not(&self.board).into()
        }

        pub fn __lshift__(&self, amount: usize) -> Self {
            self.left(amount)
        }

        pub fn __rshift__(&self, amount: usize) -> Self {
            self.right(amount)
        }

        pub fn __str__(&self) -> String {
            self.board.to_string()
        }

        pub fn __repr__(&self) -> String {
            format!(
                "Bigboard(width={}, height={}, ones={})",
                self.board.width(),
                self.board.height(),
                self.board.count_ones()
            )
        }

        pub fn __eq__(&self, other: &PyBigboard) -> bool {
            self.board == other.board
        }

        pub fn __hash__(&self) -> u64 {
            use std::hash::{Hash, Hasher};
            let mut hasher = std::collections::hash_map::DefaultHasher::new();
            self.board.hash(&mut hasher);
            hasher.finish()
        }
    }
}
