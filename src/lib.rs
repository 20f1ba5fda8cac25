//! Keyword salience layout engine.
//!
//! Turns weighted keywords into a non-overlapping word-cloud layout:
//! font size and colour encode weight, positions come from a spiral
//! search with collision checks. The pure entry point is
//! [`layout::layout`]; [`layout::layout_from_json`] speaks the JSON
//! interchange format. With the `python` feature the same JSON entry
//! point is importable from Python as `layout_json`.

pub mod collision;
pub mod color;
pub mod error;
pub mod layout;
pub mod prng;
pub mod scale;
pub mod session;
pub mod spiral;
pub mod types;

pub use error::LayoutError;
pub use layout::{layout, layout_batch, layout_from_json};
pub use session::LayoutSession;
pub use types::{
    CloudLayout, ContainerSize, KeywordItem, LayoutConfig, PlacedWord,
};

#[cfg(feature = "python")]
mod python {
    use pyo3::prelude::*;

    /// Run one layout pass.
    ///
    /// Takes a JSON string matching `LayoutParams` and returns a JSON
    /// string matching `CloudLayout`.
    #[pyfunction]
    fn layout_json(params_json: &str) -> PyResult<String> {
        crate::layout::layout_from_json(params_json).map_err(|e| {
            PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string())
        })
    }

    /// Salience engine, importable from Python.
    #[pymodule]
    fn salience_engine(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(layout_json, m)?)?;
        Ok(())
    }
}
